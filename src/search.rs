//! Game-continuation search: win detection, the quality measure and the
//! exhaustive reference evaluator.

use crate::board::Board;
use crate::common::{BoardError, Chip, Coordinate};
use crate::config::BOARD_SIZE;
use crate::worker::WorkerError;
use serde::{Deserialize, Serialize};

/// Outcome tally for every continuation reachable after placing at one
/// candidate cell. Moves are ranked ascending by `lost` (fewer losing
/// continuations is better).
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PathQuality {
    pub lost: u32,
    pub won: u32,
    pub draw: u32,
}

/// Chip owning a complete row, column or diagonal, if any.
pub fn winner(board: &Board) -> Option<Chip> {
    for i in 0..BOARD_SIZE {
        if let Some(chip) = line_owner(board, (0..BOARD_SIZE).map(|j| Coordinate::new(i, j))) {
            return Some(chip);
        }
        if let Some(chip) = line_owner(board, (0..BOARD_SIZE).map(|j| Coordinate::new(j, i))) {
            return Some(chip);
        }
    }
    if let Some(chip) = line_owner(board, (0..BOARD_SIZE).map(|i| Coordinate::new(i, i))) {
        return Some(chip);
    }
    line_owner(
        board,
        (0..BOARD_SIZE).map(|i| Coordinate::new(i, BOARD_SIZE - 1 - i)),
    )
}

fn line_owner(board: &Board, line: impl Iterator<Item = Coordinate>) -> Option<Chip> {
    let mut owner = None;
    for coordinate in line {
        let chip = board.get(coordinate).ok().flatten()?;
        match owner {
            None => owner = Some(chip),
            Some(prev) if prev == chip => {}
            Some(_) => return None,
        }
    }
    owner
}

/// Per-cell quality computation, the seam between a worker and the concrete
/// search. Implementations must be deterministic for a fixed input and safe
/// to share across worker tasks.
pub trait PathEvaluator: Send + Sync {
    /// Evaluate placing `player`'s chip at `coordinate` on `board`.
    fn evaluate(
        &self,
        board: &Board,
        coordinate: Coordinate,
        player: Chip,
    ) -> Result<PathQuality, WorkerError>;
}

/// Reference evaluator: places the chip, then walks every continuation with
/// the players alternating, tallying terminal outcomes for the evaluated
/// player. Bounded by the factorial of the number of empty cells, which the
/// fixed board size keeps small.
#[derive(Debug, Default, Clone, Copy)]
pub struct ExhaustiveSearch;

impl PathEvaluator for ExhaustiveSearch {
    fn evaluate(
        &self,
        board: &Board,
        coordinate: Coordinate,
        player: Chip,
    ) -> Result<PathQuality, WorkerError> {
        let mut quality = PathQuality::default();
        place_and_tally(board, coordinate, player, player, &mut quality)
            .map_err(|_| WorkerError::Calculation(coordinate))?;
        Ok(quality)
    }
}

/// Place `to_move`'s chip and either record a terminal outcome for `target`
/// or recurse with the opponent to move.
fn place_and_tally(
    board: &Board,
    coordinate: Coordinate,
    to_move: Chip,
    target: Chip,
    quality: &mut PathQuality,
) -> Result<(), BoardError> {
    let next = board.put_chip(coordinate, to_move)?;
    match winner(&next) {
        Some(chip) if chip == target => quality.won += 1,
        Some(_) => quality.lost += 1,
        None if next.is_full() => quality.draw += 1,
        None => {
            for empty in next.empty_coordinates() {
                place_and_tally(&next, empty, to_move.opponent(), target, quality)?;
            }
        }
    }
    Ok(())
}
