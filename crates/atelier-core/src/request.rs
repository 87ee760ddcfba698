//! Event-level furniture requests
//!
//! A `UserFurnitureRequest` captures WHAT an event needs without saying which
//! pieces to build; the set planner turns it into concrete parameter sets.
//! Free-text requirements are advisory metadata only - the engine never parses
//! them for hard constraints, which keeps planning deterministic.

use crate::params::{Culture, Formality};
use serde::{Deserialize, Serialize};

/// Kind of event the furniture set is for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum EventType {
    FormalDinner,
    CasualDining,
    TeaCeremony,
    Reception,
    FamilyGathering,
    Conference,
}

impl EventType {
    /// Human-readable event name
    pub fn label(&self) -> &'static str {
        match self {
            Self::FormalDinner => "formal dinner",
            Self::CasualDining => "casual dining",
            Self::TeaCeremony => "tea ceremony",
            Self::Reception => "reception",
            Self::FamilyGathering => "family gathering",
            Self::Conference => "conference",
        }
    }
}

/// Budget band for the whole set
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum BudgetRange {
    Economy,
    Standard,
    Premium,
    Luxury,
}

/// Usable room dimensions in meters
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SpaceDimensions {
    pub width: f64,
    pub height: f64,
    pub depth: f64,
}

impl SpaceDimensions {
    /// A generously sized default room
    pub fn default_room() -> Self {
        Self {
            width: 8.0,
            height: 2.7,
            depth: 6.0,
        }
    }
}

/// High-level event intent, expanded by the set planner
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserFurnitureRequest {
    /// Kind of event
    pub event_type: EventType,
    /// Design culture for every piece in the set
    pub culture: Culture,
    /// Number of guests to seat
    pub guest_count: u32,
    /// Usable room dimensions
    pub space: SpaceDimensions,
    /// Budget band
    pub budget: BudgetRange,
    /// Occasion formality, propagated into every piece
    pub formality_level: Formality,
    /// Advisory free text; never parsed for hard constraints
    pub special_requirements: Option<String>,
}

impl UserFurnitureRequest {
    /// Create a request with default space and budget
    pub fn new(event_type: EventType, culture: Culture, guest_count: u32) -> Self {
        Self {
            event_type,
            culture,
            guest_count,
            space: SpaceDimensions::default_room(),
            budget: BudgetRange::Standard,
            formality_level: Formality::SemiFormal,
            special_requirements: None,
        }
    }

    /// Set the formality level
    pub fn with_formality(mut self, formality: Formality) -> Self {
        self.formality_level = formality;
        self
    }

    /// Set the budget band
    pub fn with_budget(mut self, budget: BudgetRange) -> Self {
        self.budget = budget;
        self
    }

    /// Set the room dimensions
    pub fn with_space(mut self, space: SpaceDimensions) -> Self {
        self.space = space;
        self
    }

    /// Attach advisory free-text requirements
    pub fn with_special_requirements(mut self, text: impl Into<String>) -> Self {
        self.special_requirements = Some(text.into());
        self
    }
}
