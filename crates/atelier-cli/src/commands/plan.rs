//! Plan command

use atelier_core::{BudgetRange, Culture, EventType, Formality, UserFurnitureRequest};
use atelier_session::{GenerationSession, SessionConfig};
use std::fs;
use tracing::info;

pub async fn run(
    event: EventType,
    guests: u32,
    culture: Culture,
    formality: Formality,
    budget: BudgetRange,
    output: Option<&str>,
    json: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let request = UserFurnitureRequest::new(event, culture, guests)
        .with_formality(formality)
        .with_budget(budget);

    info!(
        event = event.label(),
        guests,
        culture = culture.label(),
        "Planning furniture set"
    );

    let mut session = GenerationSession::new(
        atelier_core::ParametricParameters::new(
            atelier_core::FurnitureType::Chair,
            culture,
        ),
        SessionConfig::default(),
    );
    let mut progress = session.sets.subscribe_progress();
    let outcome = session.sets.generate_set(&request).await?;
    while let Ok(step) = progress.try_recv() {
        info!(completed = step.completed, planned = step.planned, "Piece settled");
    }

    if json {
        let rendered = serde_json::to_string_pretty(&outcome.results)?;
        match output {
            Some(path) => {
                fs::write(path, &rendered)?;
                println!("Set JSON written to {}", path);
            }
            None => println!("{}", rendered),
        }
        return Ok(());
    }

    println!(
        "{} set for {} guests ({})",
        culture.label(),
        guests,
        event.label()
    );
    println!();
    for result in &outcome.results {
        println!(
            "  {:<38} {:>9.2} $   authenticity {:.3}",
            result.metadata.name, result.metadata.estimated_cost, result.cultural_authenticity.overall
        );
    }
    if !outcome.failures.is_empty() {
        println!();
        println!("Failed pieces:");
        for failure in &outcome.failures {
            println!("  #{} {}: {}", failure.index, failure.furniture_type.label(), failure.error);
        }
    }

    let total_cost: f64 = outcome.results.iter().map(|r| r.metadata.estimated_cost).sum();
    let report = session.performance_report();
    println!();
    println!("Pieces:     {}", outcome.results.len());
    println!("Total cost: ${:.2}", total_cost);
    println!(
        "Avg. generation: {:.2} ms, {:.0} polygons",
        report.average_generation_time_ms, report.average_polygon_count
    );

    if let Some(path) = output {
        fs::write(path, serde_json::to_string_pretty(&outcome.results)?)?;
        println!();
        println!("Set JSON written to {}", path);
    }

    Ok(())
}
