//! Evaluation worker: one independent task per empty cell, reporting exactly
//! one outcome back to its coordinator.

use crate::board::Board;
use crate::common::{Chip, Coordinate};
use crate::protocol::Path;
use crate::search::PathEvaluator;
use std::sync::Arc;
use tokio::sync::mpsc::UnboundedSender;
use tokio::task::JoinHandle;

/// Failures a worker can report. `Calculation` is the only kind a worker
/// raises itself under normal operation and is recovered by a restart;
/// everything else escalates and ends the whole query.
#[derive(Debug, thiserror::Error)]
pub enum WorkerError {
    /// Transient fault tied to one target cell.
    #[error("path calculation failed at {0}")]
    Calculation(Coordinate),
    /// Unrecognised fault, surfaced verbatim to the caller.
    #[error("path evaluation aborted: {0}")]
    Fatal(anyhow::Error),
}

/// The single message a worker sends in its lifetime.
#[derive(Debug)]
pub struct WorkerReport {
    pub coordinate: Coordinate,
    pub outcome: Result<Path, WorkerError>,
}

/// Owns one in-flight computation and nothing else: the board snapshot is an
/// immutable copy, and the worker holds no reference into coordinator state.
pub struct PathWorker {
    board: Board,
    coordinate: Coordinate,
    player: Chip,
    evaluator: Arc<dyn PathEvaluator>,
}

impl PathWorker {
    pub fn new(
        board: Board,
        coordinate: Coordinate,
        player: Chip,
        evaluator: Arc<dyn PathEvaluator>,
    ) -> Self {
        Self {
            board,
            coordinate,
            player,
            evaluator,
        }
    }

    /// Run the evaluation to completion. Synchronous, CPU-bound.
    pub fn compute(&self) -> Result<Path, WorkerError> {
        let quality = self
            .evaluator
            .evaluate(&self.board, self.coordinate, self.player)?;
        Ok(Path {
            coordinate: self.coordinate,
            quality,
        })
    }

    /// Spawn the worker as an independently scheduled task reporting into
    /// `reports`. The computation runs on the blocking pool; a panic inside
    /// the evaluator comes back as a `JoinError` and is reported as a fatal
    /// outcome, so the supervisor sees it instead of a silent loss.
    pub fn spawn(self, reports: UnboundedSender<WorkerReport>) -> JoinHandle<()> {
        tokio::spawn(async move {
            let coordinate = self.coordinate;
            let outcome = match tokio::task::spawn_blocking(move || self.compute()).await {
                Ok(outcome) => outcome,
                Err(err) => Err(WorkerError::Fatal(anyhow::Error::new(err))),
            };
            // The coordinator may already be gone after an escalation.
            let _ = reports.send(WorkerReport {
                coordinate,
                outcome,
            });
        })
    }
}
