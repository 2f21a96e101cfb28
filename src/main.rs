//! Reversi: a configurable-size Reversi/Othello game for the terminal.
//!
//! ## Usage
//!
//! - `reversi` - Play an interactive 8x8 game
//! - `reversi play 10` - Play on a square 10x10 board
//! - `reversi play 6 12` - Play on a 6x12 board
//! - `reversi demo --seed 7` - Watch a seeded random self-play game
//!
//! Dimensions that fail to parse or are too small fall back to 8x8,
//! matching the lenient startup behavior of classic implementations.

use anyhow::Result;
use clap::{Parser, Subcommand};

use reversi::board::Player;
use reversi::cli::ConsoleSession;
use reversi::game::GameState;

/// Default board side used when no valid dimensions are given.
const DEFAULT_DIM: usize = 8;

/// Reversi: a configurable-size rules engine with a console front-end
#[derive(Parser)]
#[command(name = "reversi")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Play an interactive game in the terminal
    Play {
        /// Board height (also the width if only one dimension is given)
        height: Option<String>,
        /// Board width
        width: Option<String>,
    },
    /// Watch a random self-play game run to completion
    Demo {
        /// Board height (also the width if only one dimension is given)
        height: Option<String>,
        /// Board width
        width: Option<String>,
        /// Seed for reproducible playouts
        #[arg(long)]
        seed: Option<u64>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command.unwrap_or(Commands::Play {
        height: None,
        width: None,
    }) {
        Commands::Play { height, width } => {
            let game = new_game(height.as_deref(), width.as_deref())?;
            let mut session = ConsoleSession::new(game);
            session.run()?;
        }
        Commands::Demo {
            height,
            width,
            seed,
        } => {
            let game = new_game(height.as_deref(), width.as_deref())?;
            run_demo(game, seed)?;
        }
    }
    Ok(())
}

/// Build a game from command-line dimensions, falling back to the
/// default board when the engine rejects them.
fn new_game(height: Option<&str>, width: Option<&str>) -> Result<GameState> {
    let (height, width) = board_dims(height, width);
    match GameState::new(height, width) {
        Ok(game) => Ok(game),
        Err(err) => {
            eprintln!("{err}; using the default {DEFAULT_DIM}x{DEFAULT_DIM} board");
            Ok(GameState::new(DEFAULT_DIM, DEFAULT_DIM)?)
        }
    }
}

/// Resolve board dimensions the way the original arguments worked:
/// none given means the default square, one means a square board of
/// that side, two mean height x width. Unparseable input falls back to
/// the default rather than aborting.
fn board_dims(height: Option<&str>, width: Option<&str>) -> (usize, usize) {
    let parse = |s: Option<&str>| s.and_then(|v| v.parse::<usize>().ok());
    match (parse(height), parse(width)) {
        (Some(h), Some(w)) => (h, w),
        (Some(h), None) if width.is_none() => (h, h),
        _ => (DEFAULT_DIM, DEFAULT_DIM),
    }
}

/// Play uniformly random legal moves until neither player can move,
/// printing the move sequence and the final position. Returns the
/// finished game.
fn run_demo(mut game: GameState, seed: Option<u64>) -> Result<GameState> {
    let mut rng = match seed {
        Some(s) => fastrand::Rng::with_seed(s),
        None => fastrand::Rng::new(),
    };

    println!(
        "Random self-play on a {}x{} board\n",
        game.board().height(),
        game.board().width()
    );
    while let Some(player) = game.current_player() {
        let choice = rng.usize(..game.legal_moves().len());
        let (row, col) = game.legal_moves()[choice];
        game.apply_move(row, col)?;
        println!("{player} plays ({row}, {col})");
        if game.current_player() == Some(player) {
            println!("{} passes", player.opponent());
        }
    }

    println!("\n{}", game.board());
    println!(
        "First (X): {}  Second (O): {}",
        game.score(Player::First),
        game.score(Player::Second)
    );
    if let Some(outcome) = game.outcome() {
        println!("Result: {outcome}");
    }
    Ok(game)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_board_dims_defaults() {
        assert_eq!(board_dims(None, None), (8, 8));
        assert_eq!(board_dims(Some("10"), None), (10, 10));
        assert_eq!(board_dims(Some("6"), Some("12")), (6, 12));
    }

    #[test]
    fn test_board_dims_lenient_fallback() {
        assert_eq!(board_dims(Some("abc"), None), (8, 8));
        assert_eq!(board_dims(Some("8"), Some("ten")), (8, 8));
        assert_eq!(board_dims(Some("-3"), Some("8")), (8, 8));
    }

    #[test]
    fn test_new_game_rejected_dims_fall_back() {
        let game = new_game(Some("2"), Some("2")).unwrap();
        assert_eq!(game.board().height(), 8);
        assert_eq!(game.board().width(), 8);
    }

    #[test]
    fn test_seeded_demo_is_deterministic() {
        let a = run_demo(GameState::new(8, 8).unwrap(), Some(42)).unwrap();
        let b = run_demo(GameState::new(8, 8).unwrap(), Some(42)).unwrap();
        assert_eq!(a, b);
        assert!(a.outcome().is_some());
    }
}
