//! Generate command

use atelier_core::{
    CraftsmanshipLevel, Culture, Formality, FurnitureType, Material, ParameterPatch,
    ParametricParameters, ResolutionNote, StylePreset,
};
use atelier_engine::{generate, resolve};
use std::fs;
use tracing::info;

/// Fully specified single-piece request assembled from CLI arguments
pub struct PieceSpec {
    pub furniture_type: FurnitureType,
    pub culture: Culture,
    pub style: StylePreset,
    pub material: Material,
    pub formality: Formality,
    pub intensity: f64,
    pub craftsmanship: CraftsmanshipLevel,
    pub width: Option<f64>,
    pub height: Option<f64>,
    pub depth: Option<f64>,
}

pub fn run(
    spec: &PieceSpec,
    output: Option<&str>,
    json: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let mut params = ParametricParameters::new(spec.furniture_type, spec.culture)
        .with_style(spec.style)
        .with_formality(spec.formality)
        .with_material(spec.material)
        .with_intensity(spec.intensity)
        .with_craftsmanship(spec.craftsmanship);
    if let Some(width) = spec.width {
        params.width = width;
    }
    if let Some(height) = spec.height {
        params.height = height;
    }
    if let Some(depth) = spec.depth {
        params.depth = depth;
    }

    let resolution = resolve(&params, &ParameterPatch::empty());
    for note in &resolution.notes {
        println!("note: {}", describe_note(note));
    }

    let result = generate(&resolution.parameters)?;
    info!(name = %result.metadata.name, "Piece generated");

    if json {
        let rendered = serde_json::to_string_pretty(&result)?;
        match output {
            Some(path) => {
                fs::write(path, &rendered)?;
                println!("Piece JSON written to {}", path);
            }
            None => println!("{}", rendered),
        }
        return Ok(());
    }

    let scores = &result.cultural_authenticity;
    let metrics = &result.performance_metrics;
    println!("{}", result.metadata.name);
    println!("{}", "=".repeat(result.metadata.name.len()));
    println!();
    println!("{}", result.metadata.description);
    println!();
    println!(
        "Dimensions:  {:.2} x {:.2} x {:.2} m",
        result.parameters.width, result.parameters.height, result.parameters.depth
    );
    println!("Est. cost:   ${:.2}", result.metadata.estimated_cost);
    println!();
    println!("Authenticity:");
    println!("  Proportions:       {:.3}", scores.proportions);
    println!("  Materials:         {:.3}", scores.materials);
    println!("  Aesthetics:        {:.3}", scores.aesthetics);
    println!("  Cultural elements: {:.3}", scores.cultural_elements);
    println!("  Overall:           {:.3}", scores.overall);
    println!();
    println!("Geometry:");
    println!("  Polygons: {}", metrics.polygon_count);
    println!("  Memory:   {} bytes", metrics.memory_usage_bytes);
    println!("  Time:     {:.2} ms", metrics.generation_time_ms);

    if let Some(path) = output {
        fs::write(path, serde_json::to_string_pretty(&result)?)?;
        println!();
        println!("Piece JSON written to {}", path);
    }

    Ok(())
}

fn describe_note(note: &ResolutionNote) -> String {
    match note {
        ResolutionNote::UnrecognizedElement { element, culture } => format!(
            "element '{}' is not in the {} vocabulary and was dropped",
            element,
            culture.label()
        ),
        ResolutionNote::DimensionClamped {
            axis,
            requested,
            clamped,
        } => format!("{:?} {:.2} m clamped to {:.2} m", axis, requested, clamped),
        ResolutionNote::IntensityClamped { requested, clamped } => {
            format!("intensity {:.2} clamped to {:.2}", requested, clamped)
        }
        ResolutionNote::CraftsmanshipSnapped { from, to } => {
            format!("craftsmanship snapped from {:?} to {:?}", from, to)
        }
        ResolutionNote::PaletteDefaulted => "palette seeded from the culture exemplar".to_string(),
        ResolutionNote::PaletteTruncated { dropped } => {
            format!("palette truncated, {} colors dropped", dropped)
        }
    }
}
