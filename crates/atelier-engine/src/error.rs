//! Engine error taxonomy
//!
//! The engine distinguishes sharply between faults and adjustments:
//! out-of-range dimensions are clamped, unknown cultural elements are dropped
//! with a diagnostic note, and neither ever becomes an error. The only fatal
//! condition for a single piece is an archetype the synthesizer does not
//! support, and even that never aborts a full-set plan.

use thiserror::Error;

/// Fatal per-piece engine failure
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum EngineError {
    /// The requested archetype has no geometry builder. Reachable only for
    /// requests arriving from outside the typed API (e.g. a wire-level
    /// furniture type this build does not know); every `FurnitureType`
    /// variant synthesizes.
    #[error("unsupported furniture archetype: {0}")]
    InvalidArchetype(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = EngineError::InvalidArchetype("chaise-longue".to_string());
        assert_eq!(
            err.to_string(),
            "unsupported furniture archetype: chaise-longue"
        );
    }
}
