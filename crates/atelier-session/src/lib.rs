//! Atelier Session - Real-time generation orchestration
//!
//! A session runs two independent lanes over the pure engine:
//!
//! ```text
//! parameter edits → [Live-preview lane]  Idle → Debouncing → Generating → Ready
//! event requests  → [Full-set lane]      Idle → Planning → GeneratingAll → Ready
//! ```
//!
//! The live-preview lane debounces rapid edits and guarantees last-writer-wins:
//! only the result of the most recent parameter state is ever surfaced, and a
//! superseded in-flight generation is discarded on completion, never applied.
//! The full-set lane plans a whole event and collects per-piece failures
//! without aborting the rest.
//!
//! Both lanes feed a rolling performance report that can be read at any time
//! without blocking generation.

pub mod preview;
pub mod sets;
pub mod telemetry;

pub use preview::{PreviewLane, PreviewState};
pub use sets::{PieceFailure, SetLane, SetOutcome, SetProgress, SetState};
pub use telemetry::{PerformanceReport, TelemetryWindow};

use atelier_core::ParametricParameters;
use std::sync::{Arc, Mutex};
use std::time::Duration;
use thiserror::Error;

/// Session configuration
#[derive(Debug, Clone)]
pub struct SessionConfig {
    /// How long edits must pause before regeneration starts
    pub debounce: Duration,
    /// Number of recent pieces the rolling performance report averages over
    pub telemetry_window: usize,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            debounce: Duration::from_millis(500),
            telemetry_window: 64,
        }
    }
}

/// Session errors. Stale results are not errors - they are discarded
/// internally and callers never observe them.
#[derive(Debug, Error)]
pub enum SessionError {
    #[error("full-set lane is already generating")]
    SetLaneBusy,
}

/// A generation session: one live-preview lane, one full-set lane, and the
/// shared telemetry window both feed.
pub struct GenerationSession {
    /// Live-preview lane for single-piece regeneration
    pub preview: PreviewLane,
    /// Full-set lane for event requests
    pub sets: SetLane,
}

impl GenerationSession {
    /// Create a session starting from the given parameters
    pub fn new(initial: ParametricParameters, config: SessionConfig) -> Self {
        let telemetry = Arc::new(Mutex::new(TelemetryWindow::new(config.telemetry_window)));
        Self {
            preview: PreviewLane::new(initial, config.debounce, Arc::clone(&telemetry)),
            sets: SetLane::new(telemetry),
        }
    }

    /// Snapshot the rolling performance report. Never blocks generation.
    pub fn performance_report(&self) -> PerformanceReport {
        self.preview.performance_report()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use atelier_core::{Culture, FurnitureType};

    #[test]
    fn test_session_starts_idle() {
        let session = GenerationSession::new(
            ParametricParameters::new(FurnitureType::Chair, Culture::Japanese),
            SessionConfig::default(),
        );
        assert_eq!(session.preview.state(), PreviewState::Idle);
        assert_eq!(session.sets.state(), SetState::Idle);
        assert_eq!(session.performance_report().pieces_generated, 0);
    }
}
