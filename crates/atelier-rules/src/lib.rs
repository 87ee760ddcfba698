//! Atelier Rules - Per-culture design rule tables
//!
//! One read-only, process-wide table per culture: element vocabulary,
//! canonical proportion ratios per archetype, material approval weights,
//! exemplar palettes, and formality norms. The constraint resolver and the
//! authenticity scorer both consult these tables, so there is exactly one
//! source of truth for "what counts as canonical".
//!
//! The tables are built once on first access and never mutated afterwards;
//! they are shared by reference across concurrent sessions, never cloned.

mod dimensions;
mod tables;

pub use dimensions::{dimension_range, AxisRange, DimensionRange};

use atelier_core::{Color, CostTier, Culture, Formality, FurnitureType, Material};
use std::sync::OnceLock;

/// Canonical width:height and depth:height ratios for one archetype
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ProportionTarget {
    pub width_to_height: f64,
    pub depth_to_height: f64,
}

/// Complete rule table for one culture
#[derive(Debug)]
pub struct CultureRules {
    culture: Culture,
    elements: &'static [&'static str],
    proportions: [(FurnitureType, ProportionTarget); 6],
    materials: &'static [(Material, f64)],
    default_material_weight: f64,
    exemplar_palette: Vec<Color>,
    /// Materials this culture reaches for, cheapest-suitable first;
    /// the set planner indexes this by budget band
    preferred_materials: &'static [Material],
}

impl CultureRules {
    /// The culture these rules describe
    pub fn culture(&self) -> Culture {
        self.culture
    }

    /// The culture's full element vocabulary
    pub fn vocabulary(&self) -> &'static [&'static str] {
        self.elements
    }

    /// Whether an element name belongs to this culture's vocabulary
    pub fn is_canonical_element(&self, element: &str) -> bool {
        self.elements.contains(&element)
    }

    /// Approval weight for a material, in [0, 1]
    pub fn material_weight(&self, material: Material) -> f64 {
        self.materials
            .iter()
            .find(|(m, _)| *m == material)
            .map(|(_, w)| *w)
            .unwrap_or(self.default_material_weight)
    }

    /// Canonical proportions for an archetype
    pub fn proportions_for(&self, furniture_type: FurnitureType) -> ProportionTarget {
        self.proportions
            .iter()
            .find(|(t, _)| *t == furniture_type)
            .map(|(_, p)| *p)
            // The table covers every variant; this arm is unreachable but
            // keeps the lookup total.
            .unwrap_or(ProportionTarget {
                width_to_height: 1.0,
                depth_to_height: 1.0,
            })
    }

    /// The culture's exemplar palette, used for aesthetic distance
    pub fn exemplar_palette(&self) -> &[Color] {
        &self.exemplar_palette
    }

    /// Materials this culture reaches for, by rising cost
    pub fn preferred_materials(&self) -> &'static [Material] {
        self.preferred_materials
    }

    /// Multiplier applied to the material facet when the occasion's formality
    /// is incompatible with the material's cost tier. Ceremonial furniture in
    /// a budget material reads as inauthentic in every culture here.
    pub fn formality_material_factor(&self, formality: Formality, material: Material) -> f64 {
        match (formality, material.cost_tier()) {
            (Formality::Ceremonial, CostTier::Budget) => 0.55,
            (Formality::Ceremonial, CostTier::Mid) => 0.85,
            (Formality::Formal, CostTier::Budget) => 0.75,
            _ => 1.0,
        }
    }
}

static RULES: OnceLock<[CultureRules; 5]> = OnceLock::new();

/// Look up the rule table for a culture.
///
/// Tables are built on first call and shared by reference for the life of the
/// process.
pub fn rules_for(culture: Culture) -> &'static CultureRules {
    let all = RULES.get_or_init(tables::build_all);
    let index = Culture::ALL
        .iter()
        .position(|c| *c == culture)
        .unwrap_or(0);
    &all[index]
}
