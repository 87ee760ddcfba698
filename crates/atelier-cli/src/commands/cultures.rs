//! Cultures command

use atelier_core::{Culture, FurnitureType};
use atelier_rules::rules_for;

pub fn run() {
    println!("Atelier Cultural Rule Sets");
    println!("==========================");

    for culture in Culture::ALL {
        let rules = rules_for(culture);

        println!();
        println!("{}", culture.label());
        println!("  {}", culture.description());

        println!("  Elements:");
        for element in rules.vocabulary() {
            println!("    - {}", element);
        }

        println!("  Proportions (width:height, depth:height):");
        for furniture_type in [
            FurnitureType::Chair,
            FurnitureType::DiningTable,
            FurnitureType::CoffeeTable,
            FurnitureType::SideTable,
            FurnitureType::Sofa,
            FurnitureType::Bench,
        ] {
            let target = rules.proportions_for(furniture_type);
            println!(
                "    {:<14} {:.2}, {:.2}",
                furniture_type.label(),
                target.width_to_height,
                target.depth_to_height
            );
        }

        println!("  Preferred materials:");
        for material in rules.preferred_materials() {
            println!("    - {}", material.label());
        }

        let palette: Vec<String> = rules
            .exemplar_palette()
            .iter()
            .map(|c| c.to_hex())
            .collect();
        println!("  Exemplar palette: {}", palette.join(" "));
    }
}
