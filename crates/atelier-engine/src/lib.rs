//! Atelier Engine - Deterministic furniture generation
//!
//! This crate provides the compute core of atelier:
//!
//! ```text
//! ParameterPatch → [Constraint Resolver] → ParametricParameters
//!                                                ↓
//!                                      [Geometry Synthesizer]
//!                                                ↓
//!                                      [Authenticity Scorer] → GenerationResult
//! ```
//!
//! Everything here is a pure function of its inputs: identical parameters
//! always yield bit-identical meshes and scores, which makes results cacheable
//! and failures reproducible. There is no I/O, no network, and no retry logic
//! - retrying without a parameter change would reproduce the same outcome.

pub mod error;
pub mod metadata;
pub mod planner;
pub mod resolver;
pub mod scorer;
pub mod synth;

// Re-export commonly used items
pub use error::EngineError;
pub use planner::plan;
pub use resolver::{resolve, Resolution};
pub use scorer::score;
pub use synth::synthesize;

use atelier_core::{GenerationResult, ParametricParameters, PerformanceMetrics, PieceId};
use std::time::Instant;
use tracing::debug;

/// Generate one piece end to end: synthesize, score, describe, and time it.
///
/// The input is assumed to have passed through the resolver; feed raw caller
/// parameters through [`resolve`] first.
pub fn generate(params: &ParametricParameters) -> Result<GenerationResult, EngineError> {
    let start = Instant::now();

    let geometry = synth::synthesize(params)?;
    let summary = geometry.summary();
    let cultural_authenticity = scorer::score(params, &summary);
    let metadata = metadata::describe(params);

    let performance_metrics = PerformanceMetrics {
        generation_time_ms: start.elapsed().as_secs_f64() * 1000.0,
        polygon_count: geometry.polygon_count(),
        memory_usage_bytes: geometry.memory_size(),
    };

    debug!(
        furniture_type = ?params.furniture_type,
        culture = ?params.culture,
        polygons = performance_metrics.polygon_count,
        time_ms = performance_metrics.generation_time_ms,
        overall = cultural_authenticity.overall,
        "Piece generated"
    );

    Ok(GenerationResult {
        id: PieceId::new(),
        parameters: params.clone(),
        geometry,
        metadata,
        cultural_authenticity,
        performance_metrics,
    })
}
