//! Full-set lane
//!
//! One-shot expansion of an event request into a generated furniture set.
//! Pieces are planned, then synthesized one at a time; a piece that fails
//! stays in the outcome as a failure while the rest of the set still
//! generates. Ready is reached only when every planned piece has a result or
//! has failed permanently - the caller decides whether a degraded set is
//! acceptable. Nothing is retried: generation is deterministic, so retrying
//! without a parameter change would reproduce the same failure.

use crate::telemetry::{PerformanceReport, TelemetryWindow};
use atelier_core::{FurnitureType, GenerationResult, UserFurnitureRequest};
use atelier_engine::{generate, plan, EngineError};
use std::sync::{Arc, Mutex};
use tokio::sync::mpsc;
use tracing::{debug, info, span, warn, Level};

/// Full-set lane state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SetState {
    /// No set requested yet
    Idle,
    /// Expanding the request into parameter sets
    Planning,
    /// Generating planned pieces
    GeneratingAll,
    /// Every planned piece has a result or failed permanently
    Ready,
}

/// One piece that failed permanently
#[derive(Debug, Clone, PartialEq)]
pub struct PieceFailure {
    /// Index of the piece in the planned order
    pub index: usize,
    /// Archetype of the failed piece
    pub furniture_type: FurnitureType,
    /// Why it failed
    pub error: EngineError,
}

/// Outcome of a full-set generation: successes and failures side by side
#[derive(Debug)]
pub struct SetOutcome {
    pub results: Vec<GenerationResult>,
    pub failures: Vec<PieceFailure>,
}

impl SetOutcome {
    /// Whether every planned piece generated
    pub fn is_complete(&self) -> bool {
        self.failures.is_empty()
    }

    /// Planned piece count (successes plus failures)
    pub fn planned_count(&self) -> usize {
        self.results.len() + self.failures.len()
    }
}

/// Incremental progress report, sent after each planned piece settles
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SetProgress {
    /// Pieces settled so far (succeeded or failed)
    pub completed: usize,
    /// Total planned pieces
    pub planned: usize,
}

/// The full-set lane
pub struct SetLane {
    state: SetState,
    progress: Option<mpsc::UnboundedSender<SetProgress>>,
    telemetry: Arc<Mutex<TelemetryWindow>>,
}

impl SetLane {
    pub(crate) fn new(telemetry: Arc<Mutex<TelemetryWindow>>) -> Self {
        Self {
            state: SetState::Idle,
            progress: None,
            telemetry,
        }
    }

    /// Lane state
    pub fn state(&self) -> SetState {
        self.state
    }

    /// Subscribe to incremental progress for subsequent runs
    pub fn subscribe_progress(&mut self) -> mpsc::UnboundedReceiver<SetProgress> {
        let (tx, rx) = mpsc::unbounded_channel();
        self.progress = Some(tx);
        rx
    }

    /// Plan and generate a complete furniture set for an event request.
    ///
    /// Per-piece failures are collected, not propagated; the lane reaches
    /// `Ready` once every planned piece has settled. Dropping the returned
    /// future mid-run returns the lane to `Idle`.
    pub async fn generate_set(
        &mut self,
        request: &UserFurnitureRequest,
    ) -> Result<SetOutcome, crate::SessionError> {
        if self.state == SetState::GeneratingAll || self.state == SetState::Planning {
            return Err(crate::SessionError::SetLaneBusy);
        }
        let telemetry = Arc::clone(&self.telemetry);
        let progress = self.progress.clone();
        let mut run = ActiveRun::begin(&mut self.state);

        let span = span!(Level::DEBUG, "generate_set", event = request.event_type.label());
        let _enter = span.enter();

        let planned = plan(request);
        let planned_count = planned.len();
        debug!(pieces = planned_count, "Set planned");

        run.generating();
        let mut outcome = SetOutcome {
            results: Vec::with_capacity(planned_count),
            failures: Vec::new(),
        };

        for (index, params) in planned.iter().enumerate() {
            match generate(params) {
                Ok(result) => {
                    if let Ok(mut telemetry) = telemetry.lock() {
                        telemetry.record(result.performance_metrics);
                    }
                    outcome.results.push(result);
                }
                Err(error) => {
                    warn!(index, ?error, "Piece failed; continuing with the rest");
                    outcome.failures.push(PieceFailure {
                        index,
                        furniture_type: params.furniture_type,
                        error,
                    });
                }
            }
            if let Some(tx) = &progress {
                // A dropped receiver just means nobody is listening anymore
                let _ = tx.send(SetProgress {
                    completed: index + 1,
                    planned: planned_count,
                });
            }
            // Yield between pieces so a host can interleave the preview lane
            tokio::task::yield_now().await;
        }

        run.finish();
        info!(
            succeeded = outcome.results.len(),
            failed = outcome.failures.len(),
            "Set generation finished"
        );
        Ok(outcome)
    }

    /// Snapshot the rolling performance report
    pub fn performance_report(&self) -> PerformanceReport {
        self.telemetry
            .lock()
            .map(|t| t.report())
            .unwrap_or_else(|poisoned| poisoned.into_inner().report())
    }

}

/// Marks the lane busy for the duration of one run.
///
/// The lane state must survive the future being dropped at a suspension
/// point: a cancelled run goes back to `Idle` instead of blocking every
/// later `generate_set` call with `SetLaneBusy`.
struct ActiveRun<'a> {
    state: &'a mut SetState,
    finished: bool,
}

impl<'a> ActiveRun<'a> {
    fn begin(state: &'a mut SetState) -> Self {
        *state = SetState::Planning;
        Self {
            state,
            finished: false,
        }
    }

    fn generating(&mut self) {
        *self.state = SetState::GeneratingAll;
    }

    fn finish(mut self) {
        *self.state = SetState::Ready;
        self.finished = true;
    }
}

impl Drop for ActiveRun<'_> {
    fn drop(&mut self) {
        if !self.finished {
            *self.state = SetState::Idle;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use atelier_core::{Culture, EventType, Formality};

    fn lane() -> SetLane {
        SetLane::new(Arc::new(Mutex::new(TelemetryWindow::new(64))))
    }

    #[tokio::test]
    async fn test_formal_dinner_set() {
        let mut lane = lane();
        let request = UserFurnitureRequest::new(EventType::FormalDinner, Culture::Japanese, 6)
            .with_formality(Formality::Formal);

        let outcome = lane.generate_set(&request).await.unwrap();
        assert_eq!(lane.state(), SetState::Ready);
        assert!(outcome.is_complete());
        assert_eq!(outcome.planned_count(), 7); // one table, six chairs

        let chairs = outcome
            .results
            .iter()
            .filter(|r| r.parameters.furniture_type == FurnitureType::Chair)
            .count();
        assert_eq!(chairs, 6);
        for result in &outcome.results {
            assert_eq!(result.parameters.culture, Culture::Japanese);
            assert_eq!(result.parameters.formality, Formality::Formal);
        }
    }

    #[tokio::test]
    async fn test_progress_is_incremental() {
        let mut lane = lane();
        let mut rx = lane.subscribe_progress();
        let request = UserFurnitureRequest::new(EventType::CasualDining, Culture::Modern, 4);

        let outcome = lane.generate_set(&request).await.unwrap();

        let mut seen = Vec::new();
        while let Ok(progress) = rx.try_recv() {
            seen.push(progress);
        }
        assert_eq!(seen.len(), outcome.planned_count());
        assert_eq!(seen.last().unwrap().completed, outcome.planned_count());
        // Monotonically increasing completion counts
        for pair in seen.windows(2) {
            assert!(pair[1].completed > pair[0].completed);
        }
    }

    #[tokio::test]
    async fn test_telemetry_accumulates() {
        let mut lane = lane();
        let request = UserFurnitureRequest::new(EventType::TeaCeremony, Culture::Japanese, 2)
            .with_formality(Formality::Ceremonial);

        let outcome = lane.generate_set(&request).await.unwrap();
        let report = lane.performance_report();
        assert_eq!(report.pieces_generated as usize, outcome.results.len());
        assert!(report.average_polygon_count > 0.0);
    }

    /// A host dropping the future mid-run (ordinary cooperative cancellation)
    /// must not leave the lane stuck busy.
    #[tokio::test(start_paused = true)]
    async fn test_dropped_run_leaves_lane_reusable() {
        let mut lane = lane();
        let request = UserFurnitureRequest::new(EventType::CasualDining, Culture::Modern, 4);

        // Zero timeout polls the run to its first suspension point, then drops it
        let cancelled = tokio::time::timeout(
            std::time::Duration::ZERO,
            lane.generate_set(&request),
        )
        .await;
        assert!(cancelled.is_err());

        assert_eq!(lane.state(), SetState::Idle);
        let outcome = lane.generate_set(&request).await.unwrap();
        assert_eq!(lane.state(), SetState::Ready);
        assert!(outcome.is_complete());
    }

    #[tokio::test]
    async fn test_lane_reusable_after_ready() {
        let mut lane = lane();
        let request = UserFurnitureRequest::new(EventType::Conference, Culture::Modern, 3);
        lane.generate_set(&request).await.unwrap();
        assert_eq!(lane.state(), SetState::Ready);
        // A second run is allowed once the first has settled
        assert!(lane.generate_set(&request).await.is_ok());
    }
}
