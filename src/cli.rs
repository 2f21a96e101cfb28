//! Interactive console front-end.
//!
//! The engine itself is headless; this module is the "UI collaborator"
//! that renders board snapshots, forwards user-selected coordinates,
//! and displays engine outcomes. It reads simple commands from stdin:
//!
//! - `<row> <col>` - play at the 0-indexed coordinate
//! - `hints` - toggle highlighting of the legal-move set
//! - `moves` - list the legal moves for the player to move
//! - `quit` - leave the game
//!
//! Legal-move highlighting is computed from [`GameState::legal_moves`]
//! on every render; it is never written into the board.

use std::io::{self, BufRead, Write};

use crate::board::{Cell, Player};
use crate::game::{GameError, GameState, Status};

/// A console game session: one engine state plus display options.
pub struct ConsoleSession {
    game: GameState,
    show_hints: bool,
}

impl ConsoleSession {
    pub fn new(game: GameState) -> Self {
        Self {
            game,
            show_hints: false,
        }
    }

    /// Run the command loop until the game ends or the player quits.
    pub fn run(&mut self) -> io::Result<()> {
        let stdin = io::stdin();
        let mut stdout = io::stdout();

        writeln!(stdout, "{}", self.render())?;
        self.prompt(&mut stdout)?;

        for line in stdin.lock().lines() {
            let line = line?;
            let input = line.trim();
            if input.is_empty() {
                self.prompt(&mut stdout)?;
                continue;
            }

            match input {
                "quit" | "exit" => break,
                "hints" => {
                    self.show_hints = !self.show_hints;
                    writeln!(stdout, "{}", self.render())?;
                }
                "moves" => {
                    let moves: Vec<String> = self
                        .game
                        .legal_moves()
                        .iter()
                        .map(|&(r, c)| format!("({r}, {c})"))
                        .collect();
                    writeln!(stdout, "legal moves: {}", moves.join(" "))?;
                }
                _ => match parse_square(input) {
                    Some((row, col)) => {
                        let message = self.play(row, col);
                        writeln!(stdout, "{message}")?;
                    }
                    None => {
                        writeln!(stdout, "expected `row col`, `hints`, `moves`, or `quit`")?;
                    }
                },
            }

            if self.game.outcome().is_some() {
                break;
            }
            self.prompt(&mut stdout)?;
        }
        stdout.flush()
    }

    fn prompt(&self, out: &mut impl Write) -> io::Result<()> {
        if let Some(player) = self.game.current_player() {
            write!(out, "{player} ({}) to move> ", player.mark())?;
            out.flush()?;
        }
        Ok(())
    }

    /// Apply one move and describe what happened.
    fn play(&mut self, row: usize, col: usize) -> String {
        let mover = match self.game.current_player() {
            Some(p) => p,
            None => return GameError::GameOver.to_string(),
        };
        match self.game.apply_move(row, col) {
            Ok(status) => {
                let mut message = self.render();
                match status {
                    Status::InProgress(next) if next == mover => {
                        message.push_str(&format!(
                            "{} has no legal move and passes\n",
                            mover.opponent()
                        ));
                    }
                    Status::InProgress(_) => {}
                    Status::Terminal(outcome) => {
                        message.push_str(&format!(
                            "{outcome}! First total: {} Second total: {}\n",
                            self.game.score(Player::First),
                            self.game.score(Player::Second)
                        ));
                    }
                }
                message
            }
            Err(err) => err.to_string(),
        }
    }

    /// Board snapshot with coordinate headers, scores, and optional
    /// legal-move hints (`*`).
    fn render(&self) -> String {
        let board = self.game.board();
        let hints: &[(usize, usize)] = if self.show_hints {
            self.game.legal_moves()
        } else {
            &[]
        };

        let mut out = String::new();
        out.push_str("   ");
        for col in 0..board.width() {
            out.push_str(&format!("{} ", col % 10));
        }
        out.push('\n');
        for row in 0..board.height() {
            out.push_str(&format!("{row:>2} "));
            for col in 0..board.width() {
                let ch = match board.get(row, col) {
                    Some(Cell::Occupied(p)) => p.mark(),
                    _ if hints.contains(&(row, col)) => '*',
                    _ => '.',
                };
                out.push(ch);
                out.push(' ');
            }
            out.push('\n');
        }
        out.push_str(&format!(
            "First (X): {}  Second (O): {}\n",
            self.game.score(Player::First),
            self.game.score(Player::Second)
        ));
        out
    }
}

/// Parse a `row col` coordinate pair. Accepts space or comma separators.
pub fn parse_square(input: &str) -> Option<(usize, usize)> {
    let mut parts = input.split(|c: char| c == ',' || c.is_whitespace()).filter(|p| !p.is_empty());
    let row = parts.next()?.parse().ok()?;
    let col = parts.next()?.parse().ok()?;
    if parts.next().is_some() {
        return None;
    }
    Some((row, col))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_square() {
        assert_eq!(parse_square("2 3"), Some((2, 3)));
        assert_eq!(parse_square("2,3"), Some((2, 3)));
        assert_eq!(parse_square("  4   5 "), Some((4, 5)));
        assert_eq!(parse_square("2"), None);
        assert_eq!(parse_square("2 3 4"), None);
        assert_eq!(parse_square("a b"), None);
    }

    #[test]
    fn test_play_reports_illegal_move() {
        let mut session = ConsoleSession::new(GameState::new(8, 8).unwrap());
        let message = session.play(0, 0);
        assert_eq!(message, "illegal move at (0, 0)");
        assert_eq!(session.game.score(Player::First), 2);
    }

    #[test]
    fn test_render_hints_are_derived() {
        let mut session = ConsoleSession::new(GameState::new(8, 8).unwrap());
        assert!(!session.render().contains('*'));
        session.show_hints = true;
        let rendered = session.render();
        assert_eq!(rendered.matches('*').count(), 4);
        // Toggling hints never touches the board itself.
        assert_eq!(session.game.board().occupied(), 4);
    }

    #[test]
    fn test_terminal_message_includes_totals() {
        let mut session = ConsoleSession::new(
            GameState::from_rows(&["XO..", "....", "....", "...."], Player::First).unwrap(),
        );
        let message = session.play(0, 2);
        assert!(message.contains("First wins! First total: 3 Second total: 0"));
    }
}
