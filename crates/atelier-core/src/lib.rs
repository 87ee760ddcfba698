//! Atelier Core - Parameter and result types for parametric furniture generation
//!
//! Atelier turns a structured, culturally-tagged parameter set into a concrete
//! furniture artifact: geometry, metadata, and reproducible authenticity and
//! performance scores.
//!
//! # Core Philosophy
//!
//! ```text
//! UI edit / event request → Constraint Resolver → Geometry Synthesizer
//!                                                       ↓
//!                               GenerationResult ← Authenticity Scorer
//! ```
//!
//! The parameter set is canonical. Geometry and scores are deterministic
//! functions of it, which keeps every regeneration reproducible and every
//! score explainable.
//!
//! # Ownership
//!
//! `ParametricParameters` is created by a caller or by the set planner and is
//! only ever made valid by the constraint resolver; callers never field-assign
//! and expect validity. `GenerationResult` is immutable once produced - a new
//! parameter change produces a new result.

pub mod color;
pub mod geometry;
pub mod params;
pub mod request;
pub mod result;

// Re-export commonly used types
pub use color::{Color, ColorParseError};
pub use geometry::{Mesh, MeshPart, MeshSummary, Transform};
pub use params::{
    Axis, CostTier, CraftsmanshipLevel, Culture, ErgonomicProfile, Formality, FurnitureType,
    Material, ParameterPatch, ParametricParameters, ResolutionNote, StylePreset,
    MAX_PALETTE_COLORS,
};
pub use request::{BudgetRange, EventType, SpaceDimensions, UserFurnitureRequest};
pub use result::{
    AuthenticityScores, GenerationResult, PerformanceMetrics, PieceId, PieceMetadata,
};
