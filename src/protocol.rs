//! Caller-facing message surface: one request in, exactly one response or
//! failure out.

use crate::board::Board;
use crate::common::{Chip, Coordinate};
use crate::search::PathQuality;
use serde::{Deserialize, Serialize};

/// Request to rank every legal next move for `player` on `board`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QualityRequest {
    /// Caller-assigned opaque identifier, echoed unchanged in the response.
    pub request_id: u64,
    pub board: Board,
    pub player: Chip,
}

/// Evaluated outcome of one candidate move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Path {
    pub coordinate: Coordinate,
    pub quality: PathQuality,
}

/// Terminal success message: one path per empty cell, ranked ascending by
/// losing continuations with row-major coordinate order breaking ties.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PathQualityResponse {
    pub request_id: u64,
    pub paths: Vec<Path>,
    /// Wall-clock time from coordinator construction to response emission.
    pub elapsed_ms: u64,
}

/// Terminal failure message for a query.
#[derive(Debug, thiserror::Error)]
pub enum QueryError {
    /// The board has no empty cell; nothing to evaluate.
    #[error("board is full, nothing to evaluate")]
    BoardFull,
    /// A worker failed in a way the restart policy does not recognise.
    #[error("path evaluation failed: {0}")]
    Unrecoverable(anyhow::Error),
}
