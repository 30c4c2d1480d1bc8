//! Evaluation coordinator: fans out one worker per empty cell, aggregates
//! each cell's result exactly once and supervises failures one-for-one.

use crate::board::Board;
use crate::common::{Chip, Coordinate};
use crate::protocol::{Path, PathQualityResponse, QualityRequest, QueryError};
use crate::search::{ExhaustiveSearch, PathEvaluator};
use crate::worker::{PathWorker, WorkerError, WorkerReport};
use std::collections::{BTreeSet, HashMap};
use std::sync::Arc;
use std::time::Instant;
use tokio::sync::{mpsc, oneshot};
use tokio::task::JoinHandle;

/// One coordinator exists per request. It is the sole owner of the
/// aggregation state (pending cells, collected paths), and the sole consumer
/// of the worker report channel, so no locking is needed around either.
pub struct PathQualityQuery {
    request_id: u64,
    board: Board,
    player: Chip,
    evaluator: Arc<dyn PathEvaluator>,
    started: Instant,
}

impl PathQualityQuery {
    pub fn new(request: QualityRequest) -> Self {
        Self::with_evaluator(request, Arc::new(ExhaustiveSearch))
    }

    /// Construction records the start timestamp; the response's elapsed time
    /// is measured from here, not from the first worker spawn.
    pub fn with_evaluator(request: QualityRequest, evaluator: Arc<dyn PathEvaluator>) -> Self {
        Self {
            request_id: request.request_id,
            board: request.board,
            player: request.player,
            evaluator,
            started: Instant::now(),
        }
    }

    /// Run the query to its single terminal outcome.
    ///
    /// Supervision policy over workers is one-for-one: a
    /// [`WorkerError::Calculation`] restarts only the affected worker with
    /// identical inputs and leaves the aggregation state untouched, any other
    /// failure tears down the remaining workers and surfaces to the caller.
    pub async fn run(self) -> Result<PathQualityResponse, QueryError> {
        // Row-major, so spawn order is deterministic. Empty result doubles as
        // the full-board check and covers the degenerate zero-cell grid.
        let mut pending: BTreeSet<Coordinate> =
            self.board.empty_coordinates().into_iter().collect();
        if pending.is_empty() {
            log::debug!("query {}: board is full, nothing to spawn", self.request_id);
            return Err(QueryError::BoardFull);
        }

        let (report_tx, mut report_rx) = mpsc::unbounded_channel();
        let mut workers: HashMap<Coordinate, JoinHandle<()>> =
            HashMap::with_capacity(pending.len());
        for &coordinate in &pending {
            workers.insert(coordinate, self.spawn_worker(coordinate, &report_tx));
        }
        log::debug!("query {}: spawned {} workers", self.request_id, workers.len());

        let mut paths: Vec<Path> = Vec::with_capacity(pending.len());
        while !pending.is_empty() {
            let Some(report) = report_rx.recv().await else {
                // Unreachable while this loop holds `report_tx`, but never
                // hang the caller on it.
                return Err(QueryError::Unrecoverable(anyhow::anyhow!(
                    "worker report channel closed with {} cells outstanding",
                    pending.len()
                )));
            };
            match report.outcome {
                Ok(path) => {
                    // The pending set, not a bare counter, is what makes the
                    // exactly-once accounting hold across restarts.
                    if pending.remove(&path.coordinate) {
                        workers.remove(&path.coordinate);
                        paths.push(path);
                    } else {
                        log::warn!(
                            "query {}: dropping duplicate result for {}",
                            self.request_id,
                            path.coordinate
                        );
                    }
                }
                Err(WorkerError::Calculation(coordinate)) => {
                    log::debug!(
                        "query {}: path calculation failed at {}, restarting worker",
                        self.request_id,
                        coordinate
                    );
                    workers.insert(coordinate, self.spawn_worker(coordinate, &report_tx));
                }
                Err(WorkerError::Fatal(cause)) => {
                    log::error!(
                        "query {}: unrecoverable worker failure: {:#}",
                        self.request_id,
                        cause
                    );
                    // Aborting the supervising tasks prevents any restart or
                    // report from here on; a compute already on the blocking
                    // pool finishes its slice and its report goes nowhere.
                    for handle in workers.values() {
                        handle.abort();
                    }
                    return Err(QueryError::Unrecoverable(cause));
                }
            }
        }

        // Stable sort; the coordinate in the key resolves quality ties
        // deterministically regardless of arrival order.
        paths.sort_by_key(|path| (path.quality.lost, path.coordinate));
        Ok(PathQualityResponse {
            request_id: self.request_id,
            paths,
            elapsed_ms: self.started.elapsed().as_millis() as u64,
        })
    }

    /// Detached form of [`run`](Self::run): the returned receiver is the
    /// caller's handle and yields the single terminal message for this
    /// request.
    pub fn spawn(self) -> oneshot::Receiver<Result<PathQualityResponse, QueryError>> {
        let (reply_tx, reply_rx) = oneshot::channel();
        tokio::spawn(async move {
            let _ = reply_tx.send(self.run().await);
        });
        reply_rx
    }

    fn spawn_worker(
        &self,
        coordinate: Coordinate,
        reports: &mpsc::UnboundedSender<WorkerReport>,
    ) -> JoinHandle<()> {
        PathWorker::new(
            self.board,
            coordinate,
            self.player,
            Arc::clone(&self.evaluator),
        )
        .spawn(reports.clone())
    }
}
