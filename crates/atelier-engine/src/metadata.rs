//! Piece metadata generation
//!
//! Names, descriptions, and cost estimates are deterministic functions of the
//! parameters, so regenerating the same piece always produces the same
//! metadata.

use atelier_core::{ParametricParameters, PieceMetadata};

/// Build display metadata for a resolved parameter set
pub fn describe(params: &ParametricParameters) -> PieceMetadata {
    let name = format!(
        "{} {} {}",
        params.culture.label(),
        params.style.label(),
        title_case(params.furniture_type.label()),
    );

    let mut description = format!(
        "A {} {} in {}, {}.",
        params.style.label().to_lowercase(),
        params.furniture_type.label(),
        params.primary_material.label(),
        params.culture.description(),
    );
    if !params.cultural_elements.is_empty() {
        description.push_str(&format!(
            " Features {}.",
            params.cultural_elements.join(", ")
        ));
    }

    PieceMetadata {
        name,
        description,
        estimated_cost: estimate_cost(params),
    }
}

/// Deterministic cost model: material base rate over the bounding volume,
/// scaled by craftsmanship and decoration.
fn estimate_cost(params: &ParametricParameters) -> f64 {
    let base = params.primary_material.base_cost_per_m3() * params.bounding_volume();
    let cost = base
        * params.craftsmanship_level.cost_multiplier()
        * (1.0 + 0.8 * params.decorative_intensity);
    (cost * 100.0).round() / 100.0
}

fn title_case(s: &str) -> String {
    s.split_whitespace()
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}
