//! Bench builder
//!
//! A slatted seat on four splayed legs. Refined work adds a center stretcher;
//! the ornament budget chamfers the slat ends with small end caps.

use super::parts::{box_part, frustum};
use super::DetailLevel;
use atelier_core::geometry::translation;
use atelier_core::{CraftsmanshipLevel, Mesh, ParametricParameters};

pub(super) fn build(params: &ParametricParameters, detail: &DetailLevel) -> Mesh {
    let w = params.width as f32;
    let h = params.height as f32;
    let d = params.depth as f32;

    let seat_thickness = (h * 0.12).clamp(0.03, 0.07);
    let leg_radius = (d * 0.09).clamp(0.02, 0.045);
    let leg_height = h - seat_thickness;

    let mut mesh = Mesh::empty();

    // Slats run lengthwise, spread across the depth
    let slat_count = 3 + detail.slats / 2;
    let slat_depth = d / slat_count as f32;
    let slat = box_part(w, seat_thickness, slat_depth * 0.88);
    for i in 0..slat_count {
        let z = -d / 2.0 + (i as f32 + 0.5) * slat_depth;
        mesh.add_part(
            format!("slat-{i}"),
            translation(0.0, leg_height, z),
            &slat.0,
            &slat.1,
        );
    }

    let leg = frustum(leg_radius, leg_radius * 0.85, leg_height, detail.radial);
    let leg_x = w / 2.0 - leg_radius * 2.0;
    let leg_z = d / 2.0 - leg_radius;
    for (name, x, z) in [
        ("leg-front-left", -leg_x, leg_z),
        ("leg-front-right", leg_x, leg_z),
        ("leg-back-left", -leg_x, -leg_z),
        ("leg-back-right", leg_x, -leg_z),
    ] {
        mesh.add_part(name, translation(x, 0.0, z), &leg.0, &leg.1);
    }

    if params.craftsmanship_level >= CraftsmanshipLevel::Refined {
        let stretcher = box_part(w - 4.0 * leg_radius, leg_radius, leg_radius);
        mesh.add_part(
            "stretcher",
            translation(0.0, leg_height * 0.4, 0.0),
            &stretcher.0,
            &stretcher.1,
        );
    }

    if detail.ornament >= 5 {
        let cap = box_part(seat_thickness, seat_thickness, d);
        mesh.add_part(
            "end-cap-left",
            translation(-(w - seat_thickness) / 2.0, leg_height, 0.0),
            &cap.0,
            &cap.1,
        );
        mesh.add_part(
            "end-cap-right",
            translation((w - seat_thickness) / 2.0, leg_height, 0.0),
            &cap.0,
            &cap.1,
        );
    }

    mesh
}
