//! Live-preview lane
//!
//! Single-piece regeneration driven by interactive parameter edits. Edits are
//! resolved immediately (so the UI can echo valid parameters), then generation
//! waits out a debounce timer. Every edit bumps a sequence number; a result is
//! applied only if its sequence is still the newest when it completes. A
//! superseded generation is discarded on completion - cancelled in effect,
//! never observed by the caller.

use crate::telemetry::{PerformanceReport, TelemetryWindow};
use atelier_core::{GenerationResult, ParameterPatch, ParametricParameters, ResolutionNote};
use atelier_engine::{generate, resolve, EngineError};
use std::sync::{Arc, Mutex};
use std::time::Duration;
use tokio::time::Instant;
use tracing::{debug, trace};

/// Live-preview lane state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PreviewState {
    /// No edit since the last result (or ever)
    Idle,
    /// An edit arrived; waiting for input to pause
    Debouncing,
    /// The engine is generating the newest parameter state
    Generating,
    /// The newest parameter state has a result
    Ready,
}

/// Snapshot of one in-flight generation, used to detect staleness
#[derive(Debug, Clone)]
pub struct PendingPreview {
    sequence: u64,
    /// The parameter state this generation runs against
    pub parameters: ParametricParameters,
}

/// The live-preview lane
pub struct PreviewLane {
    parameters: ParametricParameters,
    notes: Vec<ResolutionNote>,
    state: PreviewState,
    /// Bumped on every edit; results carry the sequence they were started at
    sequence: u64,
    current: Option<Arc<GenerationResult>>,
    debounce: Duration,
    deadline: Option<Instant>,
    telemetry: Arc<Mutex<TelemetryWindow>>,
}

impl PreviewLane {
    pub(crate) fn new(
        initial: ParametricParameters,
        debounce: Duration,
        telemetry: Arc<Mutex<TelemetryWindow>>,
    ) -> Self {
        let resolved = resolve(&initial, &ParameterPatch::empty());
        Self {
            parameters: resolved.parameters,
            notes: resolved.notes,
            state: PreviewState::Idle,
            sequence: 0,
            current: None,
            debounce,
            deadline: None,
            telemetry,
        }
    }

    /// Apply an edit. The patch is resolved immediately and the debounce timer
    /// (re)starts; any in-flight generation is superseded.
    pub fn submit_edit(&mut self, patch: &ParameterPatch) -> &[ResolutionNote] {
        let resolution = resolve(&self.parameters, patch);
        self.parameters = resolution.parameters;
        self.notes = resolution.notes;
        self.sequence += 1;
        self.state = PreviewState::Debouncing;
        self.deadline = Some(Instant::now() + self.debounce);
        trace!(sequence = self.sequence, "Preview edit accepted");
        &self.notes
    }

    /// Current (resolved) parameter state
    pub fn parameters(&self) -> &ParametricParameters {
        &self.parameters
    }

    /// Diagnostics from the most recent resolution
    pub fn notes(&self) -> &[ResolutionNote] {
        &self.notes
    }

    /// Lane state
    pub fn state(&self) -> PreviewState {
        self.state
    }

    /// The newest surfaced result, if any. Never a superseded one.
    pub fn current_result(&self) -> Option<&Arc<GenerationResult>> {
        self.current.as_ref()
    }

    /// Wait out the debounce timer and generate the newest parameter state.
    ///
    /// Returns the surfaced result, or `None` when there was nothing new to
    /// generate. Errors are per-piece fatal and leave the lane idle.
    pub async fn run_until_ready(
        &mut self,
    ) -> Result<Option<Arc<GenerationResult>>, EngineError> {
        // An edit arriving during the sleep restarts the timer, so loop until
        // the deadline stops moving.
        while let Some(deadline) = self.deadline.take() {
            tokio::time::sleep_until(deadline).await;
        }
        if self.state != PreviewState::Debouncing {
            return Ok(self.current.clone());
        }

        let pending = self.begin_generation();
        let result = generate(&pending.parameters)?;
        Ok(self.complete_generation(pending, result))
    }

    /// Mark the newest parameter state as generating and snapshot it.
    ///
    /// Split from [`Self::complete_generation`] so a host can run the engine
    /// on a worker thread; synthesis is pure and never touches lane state.
    pub fn begin_generation(&mut self) -> PendingPreview {
        self.state = PreviewState::Generating;
        PendingPreview {
            sequence: self.sequence,
            parameters: self.parameters.clone(),
        }
    }

    /// Apply a finished generation if it is still the newest; a stale result
    /// is dropped and `None` is returned. Telemetry records the work either
    /// way - the engine time was spent.
    pub fn complete_generation(
        &mut self,
        pending: PendingPreview,
        result: GenerationResult,
    ) -> Option<Arc<GenerationResult>> {
        if let Ok(mut telemetry) = self.telemetry.lock() {
            telemetry.record(result.performance_metrics);
        }

        if pending.sequence != self.sequence {
            debug!(
                stale = pending.sequence,
                newest = self.sequence,
                "Discarding superseded preview result"
            );
            // A newer edit is pending; the lane is already waiting on it
            return None;
        }

        let result = Arc::new(result);
        self.current = Some(Arc::clone(&result));
        self.state = PreviewState::Ready;
        debug!(sequence = pending.sequence, "Preview result ready");
        Some(result)
    }

    /// Snapshot the rolling performance report
    pub fn performance_report(&self) -> PerformanceReport {
        self.telemetry
            .lock()
            .map(|t| t.report())
            .unwrap_or_else(|poisoned| poisoned.into_inner().report())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use atelier_core::{Culture, FurnitureType};

    fn lane(debounce_ms: u64) -> PreviewLane {
        PreviewLane::new(
            ParametricParameters::new(FurnitureType::Chair, Culture::Japanese),
            Duration::from_millis(debounce_ms),
            Arc::new(Mutex::new(TelemetryWindow::new(16))),
        )
    }

    #[tokio::test(start_paused = true)]
    async fn test_edit_then_ready() {
        let mut lane = lane(500);
        lane.submit_edit(&ParameterPatch::empty().width(0.6));
        assert_eq!(lane.state(), PreviewState::Debouncing);

        let result = lane.run_until_ready().await.unwrap().unwrap();
        assert_eq!(lane.state(), PreviewState::Ready);
        assert!((result.parameters.width - 0.6).abs() < 1e-9);
    }

    #[tokio::test(start_paused = true)]
    async fn test_idle_lane_returns_current() {
        let mut lane = lane(500);
        assert!(lane.run_until_ready().await.unwrap().is_none());

        lane.submit_edit(&ParameterPatch::empty().width(0.55));
        lane.run_until_ready().await.unwrap();
        // No new edit: the existing result is returned unchanged
        let again = lane.run_until_ready().await.unwrap().unwrap();
        assert!((again.parameters.width - 0.55).abs() < 1e-9);
    }

    /// p1 then p2 before p1 completes: only p2's result is ever surfaced.
    #[tokio::test(start_paused = true)]
    async fn test_stale_result_is_discarded() {
        let mut lane = lane(500);

        lane.submit_edit(&ParameterPatch::empty().width(0.5));
        let pending_p1 = lane.begin_generation();
        let result_p1 = generate(&pending_p1.parameters).unwrap();

        // p2 arrives while p1 is still in flight
        lane.submit_edit(&ParameterPatch::empty().width(0.7));

        // p1 finishes late and must be dropped
        assert!(lane.complete_generation(pending_p1, result_p1).is_none());
        assert!(lane.current_result().is_none());
        assert_ne!(lane.state(), PreviewState::Ready);

        // The lane proceeds to p2
        let result = lane.run_until_ready().await.unwrap().unwrap();
        assert_eq!(lane.state(), PreviewState::Ready);
        assert!((result.parameters.width - 0.7).abs() < 1e-9);
        assert!((lane
            .current_result()
            .unwrap()
            .parameters
            .width
            - 0.7)
            .abs()
            < 1e-9);
    }

    #[tokio::test(start_paused = true)]
    async fn test_edits_resolve_immediately() {
        let mut lane = lane(500);
        let notes = lane.submit_edit(&ParameterPatch::empty().width(99.0));
        assert!(!notes.is_empty());
        // Clamped before any generation ran
        assert!((lane.parameters().width - 0.75).abs() < 1e-9);
    }

    #[tokio::test(start_paused = true)]
    async fn test_telemetry_counts_discarded_work() {
        let mut lane = lane(500);

        lane.submit_edit(&ParameterPatch::empty().width(0.5));
        let pending = lane.begin_generation();
        let result = generate(&pending.parameters).unwrap();
        lane.submit_edit(&ParameterPatch::empty().width(0.6));
        lane.complete_generation(pending, result);

        // The stale piece still cost engine time
        assert_eq!(lane.performance_report().pieces_generated, 1);
    }
}
