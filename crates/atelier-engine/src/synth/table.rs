//! Table builder - dining, coffee, and side variants
//!
//! A top slab on four tapered legs. Refined work adds aprons under the top;
//! side tables gain a lower shelf; the ornament budget adds edge beading.

use super::parts::{box_part, frustum};
use super::DetailLevel;
use atelier_core::geometry::translation;
use atelier_core::{CraftsmanshipLevel, FurnitureType, Mesh, ParametricParameters};

pub(super) fn build(params: &ParametricParameters, detail: &DetailLevel) -> Mesh {
    let w = params.width as f32;
    let h = params.height as f32;
    let d = params.depth as f32;

    let top_thickness = (h * 0.06).clamp(0.02, 0.06);
    let leg_radius = match params.furniture_type {
        FurnitureType::DiningTable => (w * 0.03).clamp(0.025, 0.06),
        _ => (w * 0.04).clamp(0.015, 0.045),
    };
    let leg_height = h - top_thickness;

    let mut mesh = Mesh::empty();

    let top = box_part(w, top_thickness, d);
    mesh.add_part("top", translation(0.0, leg_height, 0.0), &top.0, &top.1);

    // Legs inset slightly from the edge
    let inset = leg_radius * 1.5;
    let leg_x = w / 2.0 - inset;
    let leg_z = d / 2.0 - inset;
    let leg = frustum(leg_radius, leg_radius * 0.75, leg_height, detail.radial);
    for (name, x, z) in [
        ("leg-front-left", -leg_x, leg_z),
        ("leg-front-right", leg_x, leg_z),
        ("leg-back-left", -leg_x, -leg_z),
        ("leg-back-right", leg_x, -leg_z),
    ] {
        mesh.add_part(name, translation(x, 0.0, z), &leg.0, &leg.1);
    }

    if params.craftsmanship_level >= CraftsmanshipLevel::Refined {
        let apron_height = (h * 0.08).min(0.09);
        let long_apron = box_part(w - 2.0 * inset, apron_height, leg_radius);
        let short_apron = box_part(leg_radius, apron_height, d - 2.0 * inset);
        let y = leg_height - apron_height;
        mesh.add_part("apron-front", translation(0.0, y, leg_z), &long_apron.0, &long_apron.1);
        mesh.add_part("apron-back", translation(0.0, y, -leg_z), &long_apron.0, &long_apron.1);
        mesh.add_part("apron-left", translation(-leg_x, y, 0.0), &short_apron.0, &short_apron.1);
        mesh.add_part("apron-right", translation(leg_x, y, 0.0), &short_apron.0, &short_apron.1);
    }

    if params.furniture_type == FurnitureType::SideTable {
        let shelf = box_part(w - 2.0 * inset, top_thickness * 0.7, d - 2.0 * inset);
        mesh.add_part("shelf", translation(0.0, h * 0.25, 0.0), &shelf.0, &shelf.1);
    }

    // Edge beading: small blocks along the front and back edges
    if detail.ornament >= 5 {
        let bead_count = detail.ornament.min(12);
        let bead = box_part(w * 0.03, top_thickness * 0.4, leg_radius);
        for i in 0..bead_count {
            let x = -w / 2.0 + (i as f32 + 0.5) * w / bead_count as f32;
            mesh.add_part(
                format!("bead-front-{i}"),
                translation(x, leg_height - top_thickness * 0.4, d / 2.0 - leg_radius),
                &bead.0,
                &bead.1,
            );
        }
    }

    mesh
}

#[cfg(test)]
mod tests {
    use super::*;
    use atelier_core::Culture;

    #[test]
    fn test_dining_table_core_parts() {
        let params = ParametricParameters::new(FurnitureType::DiningTable, Culture::Italian);
        let mesh = build(&params, &DetailLevel::from_params(&params));
        assert!(mesh.parts.iter().any(|p| p.name == "top"));
        assert_eq!(
            mesh.parts.iter().filter(|p| p.name.starts_with("leg-")).count(),
            4
        );
    }

    #[test]
    fn test_side_table_has_shelf() {
        let params = ParametricParameters::new(FurnitureType::SideTable, Culture::Modern);
        let mesh = build(&params, &DetailLevel::from_params(&params));
        assert!(mesh.parts.iter().any(|p| p.name == "shelf"));

        let dining = ParametricParameters::new(FurnitureType::DiningTable, Culture::Modern);
        let mesh = build(&dining, &DetailLevel::from_params(&dining));
        assert!(!mesh.parts.iter().any(|p| p.name == "shelf"));
    }

    #[test]
    fn test_simple_table_has_no_aprons() {
        let params = ParametricParameters::new(FurnitureType::CoffeeTable, Culture::Japanese)
            .with_craftsmanship(CraftsmanshipLevel::Simple)
            .with_intensity(0.2);
        let mesh = build(&params, &DetailLevel::from_params(&params));
        assert!(!mesh.parts.iter().any(|p| p.name.starts_with("apron")));
    }

    #[test]
    fn test_table_top_at_full_height() {
        let params = ParametricParameters::new(FurnitureType::DiningTable, Culture::French);
        let mesh = build(&params, &DetailLevel::from_params(&params));
        let (_, max) = mesh.bounds().unwrap();
        assert!((max[1] - params.height as f32).abs() < 1e-3);
    }
}
