//! Reversi rules engine: legality, flipping, and turn resolution.
//!
//! This module provides the game state machine on top of [`Board`]:
//! - Legal-move determination via the 8-direction bracket scan
//! - Move application with atomic capture flipping
//! - The pass rule (a player with no legal move is skipped silently)
//! - Terminal detection and scoring
//!
//! All rule logic is built on one primitive, [`captured_run`]: the
//! contiguous run of opponent pieces that a move at a given cell would
//! capture in one compass direction. A move is legal iff some direction
//! captures a nonempty run; applying it flips the union of all runs.

use std::fmt;

use crate::board::{Board, Cell, Player};

/// The 8 compass directions as `(row, col)` steps.
/// Order: N, NE, E, SE, S, SW, W, NW.
pub const DIRECTIONS: [(isize, isize); 8] = [
    (-1, 0),
    (-1, 1),
    (0, 1),
    (1, 1),
    (1, 0),
    (1, -1),
    (0, -1),
    (-1, -1),
];

/// Errors reported by the engine. All are recoverable: a rejected
/// operation leaves the game state untouched.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GameError {
    /// Board construction with a dimension below the minimum.
    InvalidBoardSize { height: usize, width: usize },
    /// Move at a cell that is occupied, off-board, or captures nothing.
    IllegalMove { row: usize, col: usize },
    /// Move attempted after the game reached a terminal state.
    GameOver,
}

impl fmt::Display for GameError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GameError::InvalidBoardSize { height, width } => {
                write!(f, "invalid board size {height}x{width}: both dimensions must be at least {}", Board::MIN_DIM)
            }
            GameError::IllegalMove { row, col } => {
                write!(f, "illegal move at ({row}, {col})")
            }
            GameError::GameOver => write!(f, "the game is already over"),
        }
    }
}

impl std::error::Error for GameError {}

/// Final result of a finished game.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Outcome {
    Win(Player),
    Draw,
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Outcome::Win(p) => write!(f, "{p} wins"),
            Outcome::Draw => write!(f, "draw"),
        }
    }
}

/// Whether the game is still running, and if so whose turn it is.
/// `Terminal` is absorbing: once reached, no further moves are accepted.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Status {
    InProgress(Player),
    Terminal(Outcome),
}

/// The opponent run captured by `player` moving at `(row, col)` in one
/// direction, as board coordinates. Empty unless the bracket condition
/// holds: one or more contiguous opponent cells immediately outward,
/// terminated by an in-bounds cell of `player`. A run that reaches an
/// empty cell or the board edge captures nothing.
pub fn captured_run(
    board: &Board,
    player: Player,
    row: usize,
    col: usize,
    dir: (isize, isize),
) -> Vec<(usize, usize)> {
    let opponent = player.opponent();
    let mut run = Vec::new();
    let (mut r, mut c) = (row as isize + dir.0, col as isize + dir.1);
    while board.in_bounds(r, c) {
        match board.get(r as usize, c as usize) {
            Some(Cell::Occupied(p)) if p == opponent => run.push((r as usize, c as usize)),
            Some(Cell::Occupied(_)) => return run,
            _ => break,
        }
        r += dir.0;
        c += dir.1;
    }
    // Hit an empty cell or ran off the board: partial runs never count.
    run.clear();
    run
}

/// True iff `(row, col)` is a legal move for `player`: the cell is empty
/// and at least one direction captures a nonempty run.
pub fn is_legal(board: &Board, player: Player, row: usize, col: usize) -> bool {
    if board.get(row, col) != Some(Cell::Empty) {
        return false;
    }
    DIRECTIONS
        .iter()
        .any(|&dir| !captured_run(board, player, row, col, dir).is_empty())
}

/// All legal moves for `player`, in row-major order.
pub fn legal_moves(board: &Board, player: Player) -> Vec<(usize, usize)> {
    let mut moves = Vec::new();
    for row in 0..board.height() {
        for col in 0..board.width() {
            if is_legal(board, player, row, col) {
                moves.push((row, col));
            }
        }
    }
    moves
}

/// A complete game: board, turn state, and the cached legal moves for
/// the player to move. Mutated only through [`GameState::apply_move`];
/// every mutation recomputes the cache, so it is never stale.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GameState {
    board: Board,
    status: Status,
    legal: Vec<(usize, usize)>,
}

impl GameState {
    /// Start a fresh game on a `height x width` board. First moves first.
    ///
    /// # Errors
    /// [`GameError::InvalidBoardSize`] if either dimension is below 4.
    pub fn new(height: usize, width: usize) -> Result<Self, GameError> {
        let board = Board::new(height, width)?;
        let legal = legal_moves(&board, Player::First);
        Ok(Self {
            board,
            status: Status::InProgress(Player::First),
            legal,
        })
    }

    /// Build a game from a row diagram, the inverse of the [`Board`]
    /// rendering: `X` for First, `O` for Second, `.` for empty, spaces
    /// ignored. `to_move` is resolved against the pass rule: if that
    /// player has no legal move but the opponent does, the opponent is
    /// to move; if neither has one, the game starts terminal.
    ///
    /// # Errors
    /// [`GameError::InvalidBoardSize`] for undersized or ragged diagrams.
    pub fn from_rows(rows: &[&str], to_move: Player) -> Result<Self, GameError> {
        let height = rows.len();
        let width = rows.first().map_or(0, |r| r.chars().filter(|c| *c != ' ').count());
        let mut board = Board::new(height, width)?;
        for (r, line) in rows.iter().enumerate() {
            let cells: Vec<char> = line.chars().filter(|c| *c != ' ').collect();
            if cells.len() != width {
                return Err(GameError::InvalidBoardSize { height, width });
            }
            for (c, ch) in cells.into_iter().enumerate() {
                let cell = match ch {
                    'X' => Cell::Occupied(Player::First),
                    'O' => Cell::Occupied(Player::Second),
                    _ => Cell::Empty,
                };
                board.set(r, c, cell);
            }
        }
        let status = resolve_turn(&board, to_move.opponent());
        let legal = match status {
            Status::InProgress(p) => legal_moves(&board, p),
            Status::Terminal(_) => Vec::new(),
        };
        Ok(Self { board, status, legal })
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn status(&self) -> Status {
        self.status
    }

    /// The player to move, or `None` once the game is over.
    pub fn current_player(&self) -> Option<Player> {
        match self.status {
            Status::InProgress(p) => Some(p),
            Status::Terminal(_) => None,
        }
    }

    /// The final outcome, or `None` while the game is in progress.
    pub fn outcome(&self) -> Option<Outcome> {
        match self.status {
            Status::InProgress(_) => None,
            Status::Terminal(o) => Some(o),
        }
    }

    /// Legal moves for the player to move, row-major. Empty when the
    /// game is over.
    pub fn legal_moves(&self) -> &[(usize, usize)] {
        &self.legal
    }

    /// Number of cells held by `player`.
    pub fn score(&self, player: Player) -> usize {
        self.board.count(player)
    }

    /// Play the current player's piece at `(row, col)`.
    ///
    /// Every direction's capture run is computed from the pre-move board
    /// and the flips are applied together, so no scan ever observes a
    /// half-updated position. Afterwards the turn passes to the opponent
    /// unless they have no legal move, in which case the mover keeps the
    /// turn (pass) or, if the mover has none either, the game ends.
    ///
    /// # Errors
    /// - [`GameError::GameOver`] if the game already ended.
    /// - [`GameError::IllegalMove`] if `(row, col)` is not a legal move.
    ///
    /// On error the state is left exactly as it was.
    pub fn apply_move(&mut self, row: usize, col: usize) -> Result<Status, GameError> {
        let mover = match self.status {
            Status::InProgress(p) => p,
            Status::Terminal(_) => return Err(GameError::GameOver),
        };
        if !self.legal.contains(&(row, col)) {
            return Err(GameError::IllegalMove { row, col });
        }

        let mut flips = Vec::new();
        for dir in DIRECTIONS {
            flips.extend(captured_run(&self.board, mover, row, col, dir));
        }
        for &(r, c) in &flips {
            self.board.set(r, c, Cell::Occupied(mover));
        }
        self.board.set(row, col, Cell::Occupied(mover));

        self.status = resolve_turn(&self.board, mover);
        self.legal = match self.status {
            Status::InProgress(p) => legal_moves(&self.board, p),
            Status::Terminal(_) => Vec::new(),
        };
        Ok(self.status)
    }
}

/// Decide the status after `mover` has just acted: opponent to move if
/// they can, otherwise back to `mover` (silent pass), otherwise the game
/// is over and the higher count wins.
fn resolve_turn(board: &Board, mover: Player) -> Status {
    let opponent = mover.opponent();
    if !legal_moves(board, opponent).is_empty() {
        return Status::InProgress(opponent);
    }
    if !legal_moves(board, mover).is_empty() {
        return Status::InProgress(mover);
    }
    let first = board.count(Player::First);
    let second = board.count(Player::Second);
    Status::Terminal(if first == second {
        Outcome::Draw
    } else if first > second {
        Outcome::Win(Player::First)
    } else {
        Outcome::Win(Player::Second)
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_opening_legal_moves() {
        let game = GameState::new(8, 8).unwrap();
        assert_eq!(game.current_player(), Some(Player::First));
        assert_eq!(game.legal_moves(), &[(2, 3), (3, 2), (4, 5), (5, 4)]);
    }

    #[test]
    fn test_captured_run_requires_bracket() {
        let game = GameState::from_rows(
            &["....", ".OX.", ".OO.", "...."],
            Player::First,
        )
        .unwrap();
        let board = game.board();
        // (1,0) eastward: O then X brackets.
        assert_eq!(captured_run(board, Player::First, 1, 0, (0, 1)), vec![(1, 1)]);
        // (2,0) eastward: O O then the edge; no capture.
        assert!(captured_run(board, Player::First, 2, 0, (0, 1)).is_empty());
        // (0,1) southward: O O then empty; no capture.
        assert!(captured_run(board, Player::First, 0, 1, (1, 0)).is_empty());
    }

    #[test]
    fn test_adjacent_own_piece_does_not_qualify() {
        let game = GameState::from_rows(
            &["....", ".XO.", "....", "...."],
            Player::First,
        )
        .unwrap();
        // (1,0): the first cell eastward is First's own piece.
        assert!(!is_legal(game.board(), Player::First, 1, 0));
    }

    #[test]
    fn test_apply_move_flips_and_hands_over() {
        let mut game = GameState::new(8, 8).unwrap();
        let status = game.apply_move(2, 3).unwrap();
        assert_eq!(status, Status::InProgress(Player::Second));
        assert_eq!(game.board().get(2, 3), Some(Cell::Occupied(Player::First)));
        assert_eq!(game.board().get(3, 3), Some(Cell::Occupied(Player::First)));
        assert_eq!(game.score(Player::First), 4);
        assert_eq!(game.score(Player::Second), 1);
    }

    #[test]
    fn test_reject_illegal_and_keep_state() {
        let mut game = GameState::new(8, 8).unwrap();
        let before = game.clone();
        assert_eq!(
            game.apply_move(0, 0),
            Err(GameError::IllegalMove { row: 0, col: 0 })
        );
        // Occupied cell and out-of-bounds coordinates are rejected the same way.
        assert!(game.apply_move(3, 3).is_err());
        assert!(game.apply_move(8, 8).is_err());
        assert_eq!(game, before);
    }

    #[test]
    fn test_terminal_rejects_moves() {
        let mut game = GameState::from_rows(
            &["XXOO", "XXOO", "OOXX", "OOXX"],
            Player::First,
        )
        .unwrap();
        assert_eq!(game.status(), Status::Terminal(Outcome::Draw));
        assert_eq!(game.apply_move(0, 0), Err(GameError::GameOver));
    }

    #[test]
    fn test_from_rows_resolves_mover_with_no_moves() {
        // Second has no legal move anywhere; First does, so First is to move.
        let game = GameState::from_rows(
            &["XO..", "....", "....", "...."],
            Player::Second,
        )
        .unwrap();
        assert_eq!(game.current_player(), Some(Player::First));
        assert_eq!(game.legal_moves(), &[(0, 2)]);
    }

    #[test]
    fn test_score_conservation() {
        let mut game = GameState::new(8, 8).unwrap();
        let mut occupied = game.board().occupied();
        while let Some(&(r, c)) = game.legal_moves().first() {
            game.apply_move(r, c).unwrap();
            assert_eq!(game.board().occupied(), occupied + 1);
            occupied += 1;
        }
        assert!(game.outcome().is_some());
    }
}
