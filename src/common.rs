//! Common types for the evaluation engine: player chips, coordinates and
//! board errors.

use crate::config::BOARD_SIZE;
use core::fmt;
use serde::{Deserialize, Serialize};

/// One of the two player markers. Emptiness is a board-slot state, not a
/// chip variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Chip {
    X,
    O,
}

impl Chip {
    /// The other player's chip.
    pub fn opponent(self) -> Chip {
        match self {
            Chip::X => Chip::O,
            Chip::O => Chip::X,
        }
    }
}

impl fmt::Display for Chip {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Chip::X => write!(f, "X"),
            Chip::O => write!(f, "O"),
        }
    }
}

/// A (row, column) board position. The derived ordering is row-major, which
/// is also the documented tie-break when ranking equal-quality paths.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub struct Coordinate {
    pub row: usize,
    pub col: usize,
}

impl Coordinate {
    pub fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// Whether the coordinate addresses a cell on the board at all.
    pub fn in_bounds(self) -> bool {
        self.row < BOARD_SIZE && self.col < BOARD_SIZE
    }
}

impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// Errors returned by board operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum BoardError {
    /// Coordinate lies outside the board.
    #[error("coordinate {0} is out of bounds")]
    OutOfBounds(Coordinate),
    /// Attempted to place a chip on an occupied cell.
    #[error("cell {0} is already occupied")]
    CellOccupied(Coordinate),
}
