//! Preview command
//!
//! Simulates an editing session against the live-preview lane: a burst of
//! parameter edits followed by debounced regeneration, printed as it settles.

use atelier_core::{Culture, FurnitureType, ParameterPatch, ParametricParameters};
use atelier_session::{GenerationSession, SessionConfig};
use tracing::info;

pub async fn run(
    furniture_type: FurnitureType,
    culture: Culture,
    edits: u32,
) -> Result<(), Box<dyn std::error::Error>> {
    let initial = ParametricParameters::new(furniture_type, culture);
    let base_width = initial.width;
    let mut session = GenerationSession::new(initial, SessionConfig::default());

    println!(
        "Previewing a {} {} ({} simulated edits)",
        culture.label(),
        furniture_type.label(),
        edits
    );

    for step in 0..edits {
        // Sweep width and intensity as a slider drag would
        let width = base_width + 0.02 * f64::from(step + 1);
        let intensity = (0.3 + 0.15 * f64::from(step)).min(1.0);
        let patch = ParameterPatch::empty().width(width).intensity(intensity);

        let notes = session.preview.submit_edit(&patch);
        info!(step, width, intensity, notes = notes.len(), "Edit submitted");

        if let Some(result) = session.preview.run_until_ready().await? {
            println!(
                "  edit {:>2}: {:>6} polygons, authenticity {:.3}, {:.2} ms",
                step + 1,
                result.performance_metrics.polygon_count,
                result.cultural_authenticity.overall,
                result.performance_metrics.generation_time_ms
            );
        }
    }

    let report = session.performance_report();
    println!();
    println!("Pieces generated: {}", report.pieces_generated);
    println!(
        "Averages: {:.2} ms, {:.0} polygons, {:.0} bytes",
        report.average_generation_time_ms,
        report.average_polygon_count,
        report.average_memory_usage_bytes
    );

    Ok(())
}
