//! Reversi-Engine: a headless Reversi/Othello rules engine.
//!
//! This crate implements the full Reversi rule set on rectangular
//! boards of configurable size: legal-move determination, directional
//! capture, the silent pass rule, and terminal-state scoring. The
//! engine has no display requirement; the bundled console front-end is
//! one possible collaborator, and a test harness or bot can drive the
//! same API.
//!
//! ## Modules
//!
//! - [`board`] - Grid data model (players, cells, rendering)
//! - [`game`] - Rules engine and game state machine
//! - [`cli`] - Interactive console front-end
//!
//! ## Example
//!
//! ```
//! use reversi::board::Player;
//! use reversi::game::{GameState, Status};
//!
//! // Start a standard game; First opens with exactly four options.
//! let mut game = GameState::new(8, 8).unwrap();
//! assert_eq!(game.legal_moves().len(), 4);
//!
//! // Playing (2, 3) flips the Second piece at (3, 3).
//! let status = game.apply_move(2, 3).unwrap();
//! assert_eq!(status, Status::InProgress(Player::Second));
//! assert_eq!(game.score(Player::First), 4);
//! assert_eq!(game.score(Player::Second), 1);
//! ```

pub mod board;
pub mod cli;
pub mod game;
