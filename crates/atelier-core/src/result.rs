//! Generation results
//!
//! A `GenerationResult` is immutable once produced: a parameter change yields
//! a new result rather than mutating the old one, which is what makes the
//! session's last-writer-wins staleness rule safe.

use crate::geometry::Mesh;
use crate::params::ParametricParameters;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Unique identifier for one generated piece
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PieceId(pub Uuid);

impl PieceId {
    /// Create a new random piece ID
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for PieceId {
    fn default() -> Self {
        Self::new()
    }
}

/// Weight of the proportions facet in the overall score
pub const WEIGHT_PROPORTIONS: f64 = 0.3;
/// Weight of the materials facet in the overall score
pub const WEIGHT_MATERIALS: f64 = 0.3;
/// Weight of the aesthetics facet in the overall score
pub const WEIGHT_AESTHETICS: f64 = 0.2;
/// Weight of the cultural-elements facet in the overall score
pub const WEIGHT_CULTURAL_ELEMENTS: f64 = 0.2;

/// Five-facet cultural authenticity score.
///
/// Every facet is in [0, 1]. `overall` is always the documented weighted sum
/// of the other four, so score changes stay explainable to users; the weights
/// are configurable constants, not a black box.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AuthenticityScores {
    pub overall: f64,
    pub proportions: f64,
    pub materials: f64,
    pub aesthetics: f64,
    pub cultural_elements: f64,
}

impl AuthenticityScores {
    /// Combine the four facets into scores, clamping each into [0, 1] and
    /// deriving `overall` from the documented weights.
    pub fn new(proportions: f64, materials: f64, aesthetics: f64, cultural_elements: f64) -> Self {
        let proportions = proportions.clamp(0.0, 1.0);
        let materials = materials.clamp(0.0, 1.0);
        let aesthetics = aesthetics.clamp(0.0, 1.0);
        let cultural_elements = cultural_elements.clamp(0.0, 1.0);
        Self {
            overall: WEIGHT_PROPORTIONS * proportions
                + WEIGHT_MATERIALS * materials
                + WEIGHT_AESTHETICS * aesthetics
                + WEIGHT_CULTURAL_ELEMENTS * cultural_elements,
            proportions,
            materials,
            aesthetics,
            cultural_elements,
        }
    }
}

/// Cost and timing telemetry for one generated piece
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PerformanceMetrics {
    /// Wall-clock synthesis + scoring time in milliseconds
    pub generation_time_ms: f64,
    /// Triangle count of the synthesized mesh
    pub polygon_count: usize,
    /// Estimated mesh memory footprint in bytes
    pub memory_usage_bytes: usize,
}

/// Descriptive metadata for one generated piece
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PieceMetadata {
    /// Display name, e.g. "Japanese Traditional Chair"
    pub name: String,
    /// One-sentence description assembled from culture and style
    pub description: String,
    /// Deterministic cost estimate in currency units
    pub estimated_cost: f64,
}

/// One synthesized furniture piece
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GenerationResult {
    /// Unique identifier
    pub id: PieceId,
    /// The resolved parameters this piece was synthesized from
    pub parameters: ParametricParameters,
    /// Synthesized geometry
    pub geometry: Mesh,
    /// Descriptive metadata
    pub metadata: PieceMetadata,
    /// Five-facet authenticity score
    pub cultural_authenticity: AuthenticityScores,
    /// Timing and size telemetry
    pub performance_metrics: PerformanceMetrics,
}
