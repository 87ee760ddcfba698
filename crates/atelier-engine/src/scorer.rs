//! Authenticity scorer
//!
//! Pure function of the resolved parameters and the synthesized mesh summary.
//! Each facet is an inverted, normalized distance to the culture's canonical
//! norms; the overall score is the fixed weighted sum documented in
//! `atelier_core::result`, so a score change can always be traced to one of
//! the four facets.

use atelier_core::{AuthenticityScores, MeshSummary, ParametricParameters};
use atelier_rules::rules_for;

/// Delta-E value treated as "completely different" when normalizing the
/// aesthetic color distance. A configurable default, not a perceptual
/// constant.
pub const MAX_DELTA_E: f64 = 100.0;

/// Score a synthesized piece against its culture's rule table
pub fn score(params: &ParametricParameters, summary: &MeshSummary) -> AuthenticityScores {
    AuthenticityScores::new(
        proportion_score(params, summary),
        material_score(params),
        aesthetic_score(params),
        element_score(params),
    )
}

/// 1 - normalized deviation of the synthesized width:height and depth:height
/// ratios from the culture's canonical ratios for the archetype.
fn proportion_score(params: &ParametricParameters, summary: &MeshSummary) -> f64 {
    if summary.height <= f64::EPSILON {
        return 0.0;
    }
    let target = rules_for(params.culture).proportions_for(params.furniture_type);

    let deviation = |actual: f64, canonical: f64| ((actual - canonical) / canonical).abs().min(1.0);
    let width_dev = deviation(summary.width / summary.height, target.width_to_height);
    let depth_dev = deviation(summary.depth / summary.height, target.depth_to_height);

    1.0 - (width_dev + depth_dev) / 2.0
}

/// Rule-set approval weight for the material, reduced when the occasion's
/// formality is incompatible with the material's cost tier.
fn material_score(params: &ParametricParameters) -> f64 {
    let rules = rules_for(params.culture);
    rules.material_weight(params.primary_material)
        * rules.formality_material_factor(params.formality, params.primary_material)
}

/// Perceptual similarity between the piece palette and the culture exemplar:
/// mean best-match delta-E, normalized and inverted.
fn aesthetic_score(params: &ParametricParameters) -> f64 {
    let exemplar = rules_for(params.culture).exemplar_palette();
    if params.color_palette.is_empty() || exemplar.is_empty() {
        return 0.5;
    }

    let total: f64 = params
        .color_palette
        .iter()
        .map(|color| {
            exemplar
                .iter()
                .map(|e| color.delta_e(*e))
                .fold(f64::INFINITY, f64::min)
        })
        .sum();
    let mean = total / params.color_palette.len() as f64;

    1.0 - (mean / MAX_DELTA_E).min(1.0)
}

/// Fraction of the piece's elements that are canonical for the culture.
/// Post-resolver this is 1.0 unless a caller deliberately surfaces elements
/// pending validation.
fn element_score(params: &ParametricParameters) -> f64 {
    if params.cultural_elements.is_empty() {
        return 1.0;
    }
    let rules = rules_for(params.culture);
    let canonical = params
        .cultural_elements
        .iter()
        .filter(|e| rules.is_canonical_element(e))
        .count();
    canonical as f64 / params.cultural_elements.len() as f64
}

#[cfg(test)]
mod tests {
    use super::*;
    use atelier_core::result::{
        WEIGHT_AESTHETICS, WEIGHT_CULTURAL_ELEMENTS, WEIGHT_MATERIALS, WEIGHT_PROPORTIONS,
    };
    use atelier_core::{Color, Culture, Formality, FurnitureType, Material};

    fn summary_for(params: &ParametricParameters) -> MeshSummary {
        MeshSummary {
            width: params.width,
            height: params.height,
            depth: params.depth,
            polygon_count: 500,
        }
    }

    #[test]
    fn test_scores_always_bounded() {
        let cases = [
            (FurnitureType::Chair, Culture::Japanese, Material::Steel),
            (FurnitureType::Sofa, Culture::Italian, Material::Pine),
            (FurnitureType::DiningTable, Culture::Modern, Material::Stone),
        ];
        for (furniture_type, culture, material) in cases {
            let params = ParametricParameters::new(furniture_type, culture)
                .with_material(material)
                .with_formality(Formality::Ceremonial)
                .with_palette(vec![Color::rgb(0, 255, 0)]);
            let scores = score(&params, &summary_for(&params));
            for facet in [
                scores.overall,
                scores.proportions,
                scores.materials,
                scores.aesthetics,
                scores.cultural_elements,
            ] {
                assert!((0.0..=1.0).contains(&facet), "{facet}");
            }
        }
    }

    #[test]
    fn test_overall_equals_weighted_sum() {
        let params = ParametricParameters::new(FurnitureType::Bench, Culture::Scandinavian);
        let scores = score(&params, &summary_for(&params));
        let expected = WEIGHT_PROPORTIONS * scores.proportions
            + WEIGHT_MATERIALS * scores.materials
            + WEIGHT_AESTHETICS * scores.aesthetics
            + WEIGHT_CULTURAL_ELEMENTS * scores.cultural_elements;
        assert!((scores.overall - expected).abs() < 1e-12);
    }

    #[test]
    fn test_scoring_is_deterministic() {
        let params = ParametricParameters::new(FurnitureType::Chair, Culture::French);
        let summary = summary_for(&params);
        assert_eq!(score(&params, &summary), score(&params, &summary));
    }

    #[test]
    fn test_canonical_proportions_score_high() {
        let mut params = ParametricParameters::new(FurnitureType::Chair, Culture::Japanese);
        let target = rules_for(Culture::Japanese).proportions_for(FurnitureType::Chair);
        params.height = 0.8;
        params.width = target.width_to_height * 0.8;
        params.depth = target.depth_to_height * 0.8;

        let scores = score(&params, &summary_for(&params));
        assert!(scores.proportions > 0.99);
    }

    #[test]
    fn test_skewed_proportions_score_lower() {
        let canonical = ParametricParameters::new(FurnitureType::Chair, Culture::Japanese);
        let skewed = canonical.clone().with_dimensions(0.75, 0.6, 0.7);

        let canonical_score = score(&canonical, &summary_for(&canonical));
        let skewed_score = score(&skewed, &summary_for(&skewed));
        assert!(skewed_score.proportions < canonical_score.proportions);
    }

    #[test]
    fn test_disapproved_material_scores_lower() {
        let oak = ParametricParameters::new(FurnitureType::Chair, Culture::Japanese);
        let steel = oak.clone().with_material(Material::Steel);

        let oak_scores = score(&oak, &summary_for(&oak));
        let steel_scores = score(&steel, &summary_for(&steel));
        assert!(steel_scores.materials < oak_scores.materials);
    }

    #[test]
    fn test_ceremonial_budget_material_penalty() {
        let casual = ParametricParameters::new(FurnitureType::Chair, Culture::Scandinavian)
            .with_material(Material::Pine)
            .with_formality(Formality::Casual);
        let ceremonial = casual.clone().with_formality(Formality::Ceremonial);

        let casual_scores = score(&casual, &summary_for(&casual));
        let ceremonial_scores = score(&ceremonial, &summary_for(&ceremonial));
        assert!(ceremonial_scores.materials < casual_scores.materials);
    }

    #[test]
    fn test_exemplar_palette_scores_full_aesthetics() {
        let exemplar: Vec<Color> = rules_for(Culture::Modern)
            .exemplar_palette()
            .to_vec();
        let params = ParametricParameters::new(FurnitureType::Sofa, Culture::Modern)
            .with_palette(exemplar);
        let scores = score(&params, &summary_for(&params));
        assert!(scores.aesthetics > 0.999);
    }

    #[test]
    fn test_clashing_palette_scores_lower() {
        let on_palette = ParametricParameters::new(FurnitureType::Sofa, Culture::Japanese);
        let clashing = on_palette
            .clone()
            .with_palette(vec![Color::rgb(0, 255, 255), Color::rgb(255, 0, 255)]);

        let a = score(&on_palette, &summary_for(&on_palette));
        let b = score(&clashing, &summary_for(&clashing));
        assert!(b.aesthetics < a.aesthetics);
    }

    #[test]
    fn test_element_score_fraction() {
        let mut params = ParametricParameters::new(FurnitureType::Chair, Culture::Japanese);
        params.cultural_elements = vec!["kumiko".into(), "not-a-thing".into()];
        let scores = score(&params, &summary_for(&params));
        assert!((scores.cultural_elements - 0.5).abs() < 1e-12);
    }

    #[test]
    fn test_no_elements_scores_full() {
        let params = ParametricParameters::new(FurnitureType::Chair, Culture::Japanese);
        let scores = score(&params, &summary_for(&params));
        assert_eq!(scores.cultural_elements, 1.0);
    }
}
