//! Chair builder
//!
//! Four tapered legs, a seat slab, two back posts, and a slatted back. Refined
//! work adds stretchers between the legs; the ornament budget adds finials and
//! a carved crest rail.

use super::parts::{box_part, frustum};
use super::DetailLevel;
use atelier_core::geometry::translation;
use atelier_core::{CraftsmanshipLevel, Mesh, ParametricParameters, StylePreset};

pub(super) fn build(params: &ParametricParameters, detail: &DetailLevel) -> Mesh {
    let w = params.width as f32;
    let h = params.height as f32;
    let d = params.depth as f32;

    let seat_height = h * 0.45;
    let seat_thickness = (h * 0.05).max(0.02);
    let leg_radius = (w * 0.045).clamp(0.015, 0.05);

    let mut mesh = Mesh::empty();

    // Legs sit flush with the outer footprint so bounds match the parameters
    let leg = frustum(leg_radius, leg_radius * 0.8, seat_height - seat_thickness, detail.radial);
    let leg_x = w / 2.0 - leg_radius;
    let leg_z = d / 2.0 - leg_radius;
    for (name, x, z) in [
        ("leg-front-left", -leg_x, leg_z),
        ("leg-front-right", leg_x, leg_z),
        ("leg-back-left", -leg_x, -leg_z),
        ("leg-back-right", leg_x, -leg_z),
    ] {
        mesh.add_part(name, translation(x, 0.0, z), &leg.0, &leg.1);
    }

    let seat = box_part(w, seat_thickness, d);
    mesh.add_part(
        "seat",
        translation(0.0, seat_height - seat_thickness, 0.0),
        &seat.0,
        &seat.1,
    );

    // Back posts run from the seat to the full height at the rear edge
    let post_height = h - seat_height;
    let post = frustum(leg_radius * 0.9, leg_radius * 0.7, post_height, detail.radial);
    let post_z = -(d / 2.0 - leg_radius);
    mesh.add_part(
        "back-post-left",
        translation(-leg_x, seat_height, post_z),
        &post.0,
        &post.1,
    );
    mesh.add_part(
        "back-post-right",
        translation(leg_x, seat_height, post_z),
        &post.0,
        &post.1,
    );

    // Horizontal slats between the posts
    let slat_span = w - 4.0 * leg_radius;
    let slat_height = post_height * 0.5 / detail.slats as f32;
    let slat = box_part(slat_span, slat_height, leg_radius);
    for i in 0..detail.slats {
        let y = seat_height + post_height * 0.25 + (i as f32 + 0.5) * post_height * 0.6
            / detail.slats as f32;
        mesh.add_part(
            format!("back-slat-{i}"),
            translation(0.0, y, post_z),
            &slat.0,
            &slat.1,
        );
    }

    if params.craftsmanship_level >= CraftsmanshipLevel::Refined {
        let stretcher = box_part(w - 4.0 * leg_radius, leg_radius, leg_radius);
        let y = seat_height * 0.3;
        mesh.add_part("stretcher-front", translation(0.0, y, leg_z), &stretcher.0, &stretcher.1);
        mesh.add_part("stretcher-back", translation(0.0, y, -leg_z), &stretcher.0, &stretcher.1);
    }

    if detail.ornament >= 4 || params.style == StylePreset::Ornate {
        let finial = frustum(leg_radius * 0.6, 0.005, h * 0.04, detail.radial);
        mesh.add_part("finial-left", translation(-leg_x, h * 0.96, post_z), &finial.0, &finial.1);
        mesh.add_part("finial-right", translation(leg_x, h * 0.96, post_z), &finial.0, &finial.1);
    }
    if detail.ornament >= 8 {
        let crest = box_part(slat_span, post_height * 0.08, leg_radius * 1.4);
        mesh.add_part(
            "crest-rail",
            translation(0.0, h - post_height * 0.12, post_z),
            &crest.0,
            &crest.1,
        );
    }

    mesh
}

#[cfg(test)]
mod tests {
    use super::*;
    use atelier_core::Culture;

    fn chair(intensity: f64, level: CraftsmanshipLevel) -> ParametricParameters {
        ParametricParameters::new(atelier_core::FurnitureType::Chair, Culture::Japanese)
            .with_intensity(intensity)
            .with_craftsmanship(level)
    }

    #[test]
    fn test_simple_chair_has_core_parts() {
        let params = chair(0.0, CraftsmanshipLevel::Simple);
        let mesh = build(&params, &DetailLevel::from_params(&params));
        let names: Vec<&str> = mesh.parts.iter().map(|p| p.name.as_str()).collect();
        assert!(names.contains(&"seat"));
        assert!(names.contains(&"leg-front-left"));
        assert!(names.contains(&"back-post-right"));
        assert!(!names.contains(&"stretcher-front"));
    }

    #[test]
    fn test_refined_chair_gains_stretchers() {
        let params = chair(0.3, CraftsmanshipLevel::Refined);
        let mesh = build(&params, &DetailLevel::from_params(&params));
        assert!(mesh.parts.iter().any(|p| p.name == "stretcher-front"));
    }

    #[test]
    fn test_masterwork_chair_gains_crest_rail() {
        let params = chair(0.9, CraftsmanshipLevel::Masterwork);
        let mesh = build(&params, &DetailLevel::from_params(&params));
        assert!(mesh.parts.iter().any(|p| p.name == "crest-rail"));
        assert!(mesh.parts.iter().any(|p| p.name == "finial-left"));
    }

    #[test]
    fn test_chair_reaches_full_height() {
        let params = chair(0.5, CraftsmanshipLevel::Refined);
        let mesh = build(&params, &DetailLevel::from_params(&params));
        let (_, max) = mesh.bounds().unwrap();
        assert!((max[1] - params.height as f32).abs() < 0.01);
    }
}
