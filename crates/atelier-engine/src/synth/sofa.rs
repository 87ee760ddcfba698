//! Sofa builder
//!
//! A plinth base, a full-height back, two arms, and seat/back cushions sized
//! by width. The ornament budget adds piping blocks along the front edge.

use super::parts::box_part;
use super::DetailLevel;
use atelier_core::geometry::translation;
use atelier_core::{Mesh, ParametricParameters};

pub(super) fn build(params: &ParametricParameters, detail: &DetailLevel) -> Mesh {
    let w = params.width as f32;
    let h = params.height as f32;
    let d = params.depth as f32;

    let base_height = h * 0.32;
    let arm_width = (w * 0.08).clamp(0.08, 0.18);
    let arm_height = h * 0.65;
    let back_depth = (d * 0.18).clamp(0.12, 0.25);
    let inner_width = w - 2.0 * arm_width;

    let mut mesh = Mesh::empty();

    let base = box_part(w, base_height, d);
    mesh.add_part("base", translation(0.0, 0.0, 0.0), &base.0, &base.1);

    let back = box_part(w, h - base_height, back_depth);
    mesh.add_part(
        "back",
        translation(0.0, base_height, -(d - back_depth) / 2.0),
        &back.0,
        &back.1,
    );

    let arm = box_part(arm_width, arm_height - base_height, d);
    mesh.add_part(
        "arm-left",
        translation(-(w - arm_width) / 2.0, base_height, 0.0),
        &arm.0,
        &arm.1,
    );
    mesh.add_part(
        "arm-right",
        translation((w - arm_width) / 2.0, base_height, 0.0),
        &arm.0,
        &arm.1,
    );

    // One seat and one back cushion per ~0.6 m of interior width
    let cushion_count = ((inner_width / 0.6).floor() as u32).max(2);
    let cushion_width = inner_width / cushion_count as f32;
    let seat_cushion = box_part(
        cushion_width * 0.96,
        h * 0.1,
        d - back_depth - 0.05,
    );
    let back_cushion = box_part(cushion_width * 0.96, h * 0.3, back_depth * 0.6);
    for i in 0..cushion_count {
        let x = -inner_width / 2.0 + (i as f32 + 0.5) * cushion_width;
        mesh.add_part(
            format!("seat-cushion-{i}"),
            translation(x, base_height, back_depth / 2.0 - 0.025),
            &seat_cushion.0,
            &seat_cushion.1,
        );
        mesh.add_part(
            format!("back-cushion-{i}"),
            translation(x, base_height + h * 0.12, -(d - back_depth) / 2.0 + back_depth * 0.8),
            &back_cushion.0,
            &back_cushion.1,
        );
    }

    if detail.ornament >= 6 {
        let piping_count = detail.ornament.min(10);
        let piping = box_part(inner_width * 0.04, h * 0.03, 0.03);
        for i in 0..piping_count {
            let x = -inner_width / 2.0 + (i as f32 + 0.5) * inner_width / piping_count as f32;
            mesh.add_part(
                format!("piping-{i}"),
                translation(x, base_height - h * 0.03, d / 2.0 - 0.02),
                &piping.0,
                &piping.1,
            );
        }
    }

    mesh
}

#[cfg(test)]
mod tests {
    use super::*;
    use atelier_core::{Culture, FurnitureType};

    #[test]
    fn test_sofa_core_parts() {
        let params = ParametricParameters::new(FurnitureType::Sofa, Culture::French);
        let mesh = build(&params, &DetailLevel::from_params(&params));
        let names: Vec<&str> = mesh.parts.iter().map(|p| p.name.as_str()).collect();
        assert!(names.contains(&"base"));
        assert!(names.contains(&"back"));
        assert!(names.contains(&"arm-left"));
        assert!(names.contains(&"seat-cushion-0"));
    }

    #[test]
    fn test_wider_sofa_has_more_cushions() {
        let narrow = ParametricParameters::new(FurnitureType::Sofa, Culture::Modern)
            .with_dimensions(1.5, 0.85, 0.95);
        let wide = ParametricParameters::new(FurnitureType::Sofa, Culture::Modern)
            .with_dimensions(3.0, 0.85, 0.95);

        let count = |p: &ParametricParameters| {
            build(p, &DetailLevel::from_params(p))
                .parts
                .iter()
                .filter(|part| part.name.starts_with("seat-cushion"))
                .count()
        };
        assert!(count(&wide) > count(&narrow));
    }

    #[test]
    fn test_sofa_spans_full_width() {
        let params = ParametricParameters::new(FurnitureType::Sofa, Culture::Italian);
        let mesh = build(&params, &DetailLevel::from_params(&params));
        let (min, max) = mesh.bounds().unwrap();
        assert!(((max[0] - min[0]) - params.width as f32).abs() < 1e-3);
        assert!((max[1] - params.height as f32).abs() < 1e-3);
    }
}
