//! Board representation for Reversi.
//!
//! The board is a rectangular `height x width` grid of [`Cell`]s stored
//! row-major in a `Vec`. Unlike the classic 8x8 game, any dimensions of
//! at least 4x4 are accepted; the four center cells start occupied in
//! the standard alternating diagonal pattern.

use std::fmt;

use crate::game::GameError;

/// One of the two players. `First` moves first.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Player {
    First,
    Second,
}

impl Player {
    /// The other player.
    pub fn opponent(self) -> Player {
        match self {
            Player::First => Player::Second,
            Player::Second => Player::First,
        }
    }

    /// Single-character board mark: `X` for First, `O` for Second.
    pub fn mark(self) -> char {
        match self {
            Player::First => 'X',
            Player::Second => 'O',
        }
    }
}

impl fmt::Display for Player {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Player::First => write!(f, "First"),
            Player::Second => write!(f, "Second"),
        }
    }
}

/// Contents of a single board cell.
///
/// Legal-move highlighting is deliberately *not* a cell state; it is a
/// derived query on [`crate::game::GameState`] and belongs to the UI.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Cell {
    Empty,
    Occupied(Player),
}

impl Cell {
    /// True iff no player has a piece here.
    pub fn is_empty(self) -> bool {
        self == Cell::Empty
    }
}

/// A rectangular Reversi board.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Board {
    height: usize,
    width: usize,
    cells: Vec<Cell>,
}

impl Board {
    /// Minimum board dimension; the starting pattern needs a 2x2 center
    /// with room around it.
    pub const MIN_DIM: usize = 4;

    /// Create a board with the four center cells pre-occupied:
    /// First on the anti-diagonal pair, Second on the main diagonal pair.
    ///
    /// # Errors
    /// [`GameError::InvalidBoardSize`] if either dimension is below 4.
    pub fn new(height: usize, width: usize) -> Result<Self, GameError> {
        if height < Self::MIN_DIM || width < Self::MIN_DIM {
            return Err(GameError::InvalidBoardSize { height, width });
        }
        let mut board = Self {
            height,
            width,
            cells: vec![Cell::Empty; height * width],
        };
        let (r, c) = (height / 2, width / 2);
        board.set(r - 1, c - 1, Cell::Occupied(Player::Second));
        board.set(r, c, Cell::Occupied(Player::Second));
        board.set(r - 1, c, Cell::Occupied(Player::First));
        board.set(r, c - 1, Cell::Occupied(Player::First));
        Ok(board)
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn width(&self) -> usize {
        self.width
    }

    fn idx(&self, row: usize, col: usize) -> usize {
        row * self.width + col
    }

    /// True iff `(row, col)` lies on the board. Takes signed coordinates
    /// so directional scans can step off any edge without underflow.
    pub fn in_bounds(&self, row: isize, col: isize) -> bool {
        row >= 0 && col >= 0 && (row as usize) < self.height && (col as usize) < self.width
    }

    /// Cell at `(row, col)`, or `None` if the coordinate is off-board.
    pub fn get(&self, row: usize, col: usize) -> Option<Cell> {
        if row >= self.height || col >= self.width {
            return None;
        }
        Some(self.cells[self.idx(row, col)])
    }

    pub(crate) fn set(&mut self, row: usize, col: usize, cell: Cell) {
        let i = self.idx(row, col);
        self.cells[i] = cell;
    }

    /// Number of cells occupied by `player`.
    pub fn count(&self, player: Player) -> usize {
        self.cells
            .iter()
            .filter(|&&c| c == Cell::Occupied(player))
            .count()
    }

    /// Total number of occupied cells.
    pub fn occupied(&self) -> usize {
        self.cells.iter().filter(|c| !c.is_empty()).count()
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0..self.height {
            for col in 0..self.width {
                let ch = match self.cells[self.idx(row, col)] {
                    Cell::Occupied(p) => p.mark(),
                    Cell::Empty => '.',
                };
                write!(f, "{ch} ")?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
