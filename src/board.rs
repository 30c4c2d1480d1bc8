//! Immutable board snapshot and its occupancy queries.

use crate::common::{BoardError, Chip, Coordinate};
use crate::config::{BOARD_SIZE, NUM_CELLS};
use core::fmt;
use core::str::FromStr;
use serde::{Deserialize, Serialize};

/// Point-in-time view of the game grid. A `Board` is never edited in place:
/// [`Board::put_chip`] returns a new snapshot and leaves the original
/// untouched, so snapshots can be shared read-only across evaluation tasks.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Board {
    cells: [[Option<Chip>; BOARD_SIZE]; BOARD_SIZE],
}

impl Board {
    /// Create an empty board.
    pub fn empty() -> Self {
        Board {
            cells: [[None; BOARD_SIZE]; BOARD_SIZE],
        }
    }

    /// Chip at the given coordinate, `None` for an empty cell.
    pub fn get(&self, coordinate: Coordinate) -> Result<Option<Chip>, BoardError> {
        if !coordinate.in_bounds() {
            return Err(BoardError::OutOfBounds(coordinate));
        }
        Ok(self.cells[coordinate.row][coordinate.col])
    }

    /// Produce a new snapshot with `chip` placed at `coordinate`.
    pub fn put_chip(&self, coordinate: Coordinate, chip: Chip) -> Result<Board, BoardError> {
        if self.get(coordinate)?.is_some() {
            return Err(BoardError::CellOccupied(coordinate));
        }
        let mut next = *self;
        next.cells[coordinate.row][coordinate.col] = Some(chip);
        Ok(next)
    }

    /// `true` when no cell is empty.
    pub fn is_full(&self) -> bool {
        self.cells
            .iter()
            .all(|row| row.iter().all(|cell| cell.is_some()))
    }

    /// Empty coordinates in row-major order. The order is stable and is what
    /// makes worker spawn order deterministic.
    pub fn empty_coordinates(&self) -> Vec<Coordinate> {
        self.iter_cells()
            .filter_map(|(coordinate, cell)| cell.is_none().then_some(coordinate))
            .collect()
    }

    /// Occupied cells and their chips, row-major.
    pub fn occupied_cells(&self) -> Vec<(Coordinate, Chip)> {
        self.iter_cells()
            .filter_map(|(coordinate, cell)| cell.map(|chip| (coordinate, chip)))
            .collect()
    }

    fn iter_cells(&self) -> impl Iterator<Item = (Coordinate, Option<Chip>)> + '_ {
        self.cells.iter().enumerate().flat_map(|(row, cols)| {
            cols.iter()
                .enumerate()
                .map(move |(col, cell)| (Coordinate::new(row, col), *cell))
        })
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in &self.cells {
            for cell in row {
                match cell {
                    Some(chip) => write!(f, "{}", chip)?,
                    None => write!(f, ".")?,
                }
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

/// Parse a row-major board string: one character per cell, `X`/`O` (any
/// case) for chips, `.`, `_` or space for an empty cell. Whitespace between
/// rows is ignored, so both `"XOX.O...."` and a newline-separated grid work.
impl FromStr for Board {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut board = Board::empty();
        let mut count = 0usize;
        for ch in s.chars() {
            if matches!(ch, '\n' | '\r' | '\t') {
                continue;
            }
            let coordinate = Coordinate::new(count / BOARD_SIZE, count % BOARD_SIZE);
            if !coordinate.in_bounds() {
                anyhow::bail!("board string has more than {} cells", NUM_CELLS);
            }
            match ch {
                'X' | 'x' => board = board.put_chip(coordinate, Chip::X)?,
                'O' | 'o' => board = board.put_chip(coordinate, Chip::O)?,
                '.' | '_' | ' ' => {}
                other => anyhow::bail!("unexpected board character {:?}", other),
            }
            count += 1;
        }
        if count != NUM_CELLS {
            anyhow::bail!("board string has {} cells, expected {}", count, NUM_CELLS);
        }
        Ok(board)
    }
}
