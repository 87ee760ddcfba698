//! Constraint resolver
//!
//! `resolve` is total: out-of-range values are clamped, unknown elements are
//! dropped, and a valid parameter set is always returned, so real-time sliders
//! never stick on a rejected edit.
//!
//! The dependency rules run in one fixed order - patch application, dimension
//! clamp, craftsmanship/intensity reconciliation, element vocabulary filter,
//! palette normalization - so the same (base, patch) pair always yields the
//! same output no matter how the UI batched the change.

use atelier_core::{
    Axis, CraftsmanshipLevel, ParameterPatch, ParametricParameters, ResolutionNote,
    MAX_PALETTE_COLORS,
};
use atelier_rules::{dimension_range, rules_for};
use std::collections::HashSet;
use tracing::debug;

/// A resolved parameter set plus the non-fatal adjustments made along the way.
///
/// Notes are advisory: the UI may surface them, but `parameters` is always
/// valid regardless.
#[derive(Debug, Clone, PartialEq)]
pub struct Resolution {
    pub parameters: ParametricParameters,
    pub notes: Vec<ResolutionNote>,
}

/// Apply a patch to a base parameter set and re-derive every dependent field.
///
/// Never fails. Resolving an already-valid state with an empty patch is a
/// no-op (and produces no notes).
pub fn resolve(base: &ParametricParameters, patch: &ParameterPatch) -> Resolution {
    let mut params = base.clone();
    let mut notes = Vec::new();

    apply_patch(&mut params, patch);
    clamp_dimensions(&mut params, &mut notes);
    reconcile_craftsmanship(&mut params, patch.craftsmanship_level.is_some(), &mut notes);
    filter_elements(&mut params, &mut notes);
    normalize_palette(&mut params, &mut notes);

    if !notes.is_empty() {
        debug!(count = notes.len(), "Resolution adjusted parameters");
    }

    Resolution { parameters: params, notes }
}

fn apply_patch(params: &mut ParametricParameters, patch: &ParameterPatch) {
    if let Some(v) = patch.furniture_type {
        params.furniture_type = v;
    }
    if let Some(v) = patch.culture {
        params.culture = v;
    }
    if let Some(v) = patch.width {
        params.width = v;
    }
    if let Some(v) = patch.height {
        params.height = v;
    }
    if let Some(v) = patch.depth {
        params.depth = v;
    }
    if let Some(v) = patch.style {
        params.style = v;
    }
    if let Some(v) = patch.formality {
        params.formality = v;
    }
    if let Some(v) = patch.primary_material {
        params.primary_material = v;
    }
    if let Some(v) = &patch.cultural_elements {
        params.cultural_elements = v.clone();
    }
    if let Some(v) = patch.ergonomic_profile {
        params.ergonomic_profile = v;
    }
    if let Some(v) = &patch.color_palette {
        params.color_palette = v.clone();
    }
    if let Some(v) = patch.decorative_intensity {
        params.decorative_intensity = v;
    }
    if let Some(v) = patch.craftsmanship_level {
        params.craftsmanship_level = v;
    }
}

fn clamp_dimensions(params: &mut ParametricParameters, notes: &mut Vec<ResolutionNote>) {
    let range = dimension_range(params.furniture_type, params.ergonomic_profile);
    let axes = [
        (Axis::Width, &mut params.width, range.width),
        (Axis::Height, &mut params.height, range.height),
        (Axis::Depth, &mut params.depth, range.depth),
    ];
    for (axis, value, axis_range) in axes {
        let clamped = axis_range.clamp(*value);
        if clamped != *value {
            notes.push(ResolutionNote::DimensionClamped {
                axis,
                requested: *value,
                clamped,
            });
            *value = clamped;
        }
    }
}

/// Keep decorative intensity and craftsmanship level mutually consistent.
///
/// Whichever field the patch touched most recently wins: an explicit
/// craftsmanship change clamps the intensity into the new level's band, while
/// an intensity that drifted outside the current band snaps the level to the
/// nearest compatible one instead.
fn reconcile_craftsmanship(
    params: &mut ParametricParameters,
    craftsmanship_patched: bool,
    notes: &mut Vec<ResolutionNote>,
) {
    let requested = params.decorative_intensity;
    params.decorative_intensity = requested.clamp(0.0, 1.0);
    if params.decorative_intensity != requested {
        notes.push(ResolutionNote::IntensityClamped {
            requested,
            clamped: params.decorative_intensity,
        });
    }

    let level = params.craftsmanship_level;
    if level.accepts_intensity(params.decorative_intensity) {
        return;
    }

    if craftsmanship_patched {
        let (lo, hi) = level.intensity_band();
        let requested = params.decorative_intensity;
        params.decorative_intensity = requested.clamp(lo, hi);
        notes.push(ResolutionNote::IntensityClamped {
            requested,
            clamped: params.decorative_intensity,
        });
    } else {
        // Refined accepts the full band, so it is always a legal snap target
        let snapped = nearest_compatible_level(level, params.decorative_intensity);
        notes.push(ResolutionNote::CraftsmanshipSnapped {
            from: level,
            to: snapped,
        });
        params.craftsmanship_level = snapped;
    }
}

fn nearest_compatible_level(current: CraftsmanshipLevel, intensity: f64) -> CraftsmanshipLevel {
    let candidates = [
        CraftsmanshipLevel::Simple,
        CraftsmanshipLevel::Refined,
        CraftsmanshipLevel::Masterwork,
    ];
    candidates
        .into_iter()
        .filter(|level| level.accepts_intensity(intensity))
        .min_by_key(|level| {
            // Fewest steps away from the current level
            (*level as i32 - current as i32).abs()
        })
        .unwrap_or(CraftsmanshipLevel::Refined)
}

fn filter_elements(params: &mut ParametricParameters, notes: &mut Vec<ResolutionNote>) {
    let rules = rules_for(params.culture);
    let culture = params.culture;
    // First occurrence wins; order is preserved
    let mut seen = HashSet::new();
    params.cultural_elements.retain(|element| {
        if !rules.is_canonical_element(element) {
            notes.push(ResolutionNote::UnrecognizedElement {
                element: element.clone(),
                culture,
            });
            return false;
        }
        seen.insert(element.clone())
    });
}

fn normalize_palette(params: &mut ParametricParameters, notes: &mut Vec<ResolutionNote>) {
    if params.color_palette.is_empty() {
        let rules = rules_for(params.culture);
        params
            .color_palette
            .extend(rules.exemplar_palette().iter().take(2).copied());
        notes.push(ResolutionNote::PaletteDefaulted);
    } else if params.color_palette.len() > MAX_PALETTE_COLORS {
        let dropped = params.color_palette.len() - MAX_PALETTE_COLORS;
        params.color_palette.truncate(MAX_PALETTE_COLORS);
        notes.push(ResolutionNote::PaletteTruncated { dropped });
    }
}
