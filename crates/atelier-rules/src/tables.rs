//! The rule tables themselves
//!
//! Vocabulary, proportion, material, and palette data for every culture.
//! Weights and ratios are curated defaults, tuned so canonical combinations
//! (oak + traditional + formal under Japanese rules, for instance) score
//! clearly above incompatible ones.

use crate::{CultureRules, ProportionTarget};
use atelier_core::{Color, Culture, FurnitureType, Material};

fn palette(hex: &[&str]) -> Vec<Color> {
    hex.iter()
        .map(|h| Color::parse(h).unwrap_or(Color::rgb(0x80, 0x80, 0x80)))
        .collect()
}

fn proportions(
    chair: (f64, f64),
    dining: (f64, f64),
    coffee: (f64, f64),
    side: (f64, f64),
    sofa: (f64, f64),
    bench: (f64, f64),
) -> [(FurnitureType, ProportionTarget); 6] {
    let target = |(w, d): (f64, f64)| ProportionTarget {
        width_to_height: w,
        depth_to_height: d,
    };
    [
        (FurnitureType::Chair, target(chair)),
        (FurnitureType::DiningTable, target(dining)),
        (FurnitureType::CoffeeTable, target(coffee)),
        (FurnitureType::SideTable, target(side)),
        (FurnitureType::Sofa, target(sofa)),
        (FurnitureType::Bench, target(bench)),
    ]
}

pub(crate) fn build_all() -> [CultureRules; 5] {
    [japanese(), scandinavian(), italian(), french(), modern()]
}

fn japanese() -> CultureRules {
    CultureRules {
        culture: Culture::Japanese,
        elements: &[
            "kumiko",
            "shoji-panels",
            "tatami-accents",
            "hinoki-joinery",
            "wabi-sabi-finish",
            "chigaidana",
            "low-profile",
            "kintsugi-detail",
        ],
        // Japanese seating sits low and deep relative to its height
        proportions: proportions(
            (0.62, 0.62),
            (2.1, 1.2),
            (2.6, 1.5),
            (0.85, 0.85),
            (2.3, 1.1),
            (3.0, 0.85),
        ),
        materials: &[
            (Material::Oak, 0.85),
            (Material::Ash, 0.85),
            (Material::Bamboo, 0.95),
            (Material::Cherry, 0.8),
            (Material::Walnut, 0.7),
            (Material::Pine, 0.65),
            (Material::Linen, 0.6),
            (Material::Steel, 0.25),
            (Material::Glass, 0.3),
        ],
        default_material_weight: 0.35,
        exemplar_palette: palette(&["#2b2b2b", "#8b5a2b", "#d9c8a9", "#4a3728"]),
        preferred_materials: &[
            Material::Bamboo,
            Material::Oak,
            Material::Ash,
            Material::Cherry,
        ],
    }
}

fn scandinavian() -> CultureRules {
    CultureRules {
        culture: Culture::Scandinavian,
        elements: &[
            "hygge-curves",
            "spindle-back",
            "tapered-legs",
            "cane-weave",
            "blonde-finish",
            "saga-carving",
        ],
        proportions: proportions(
            (0.6, 0.58),
            (2.0, 1.15),
            (2.4, 1.4),
            (0.8, 0.8),
            (2.2, 1.05),
            (2.9, 0.8),
        ),
        materials: &[
            (Material::Pine, 0.9),
            (Material::Ash, 0.9),
            (Material::Oak, 0.85),
            (Material::Wool, 0.8),
            (Material::Linen, 0.7),
            (Material::Steel, 0.5),
            (Material::Leather, 0.65),
        ],
        default_material_weight: 0.4,
        exemplar_palette: palette(&["#e8e2d6", "#c9b896", "#6e7b74", "#f4f1ea"]),
        preferred_materials: &[Material::Pine, Material::Ash, Material::Oak, Material::Oak],
    }
}

fn italian() -> CultureRules {
    CultureRules {
        culture: Culture::Italian,
        elements: &[
            "scrollwork",
            "marquetry",
            "fluted-columns",
            "gilded-trim",
            "marble-inlay",
            "acanthus-carving",
        ],
        proportions: proportions(
            (0.58, 0.56),
            (2.2, 1.25),
            (2.5, 1.45),
            (0.82, 0.82),
            (2.25, 1.1),
            (2.8, 0.8),
        ),
        materials: &[
            (Material::Walnut, 0.95),
            (Material::Cherry, 0.85),
            (Material::Stone, 0.85),
            (Material::Leather, 0.8),
            (Material::Silk, 0.75),
            (Material::Brass, 0.7),
            (Material::Glass, 0.6),
            (Material::Pine, 0.35),
        ],
        default_material_weight: 0.4,
        exemplar_palette: palette(&["#5c3a21", "#b08d57", "#7a1f1f", "#e6d5b8"]),
        preferred_materials: &[
            Material::Cherry,
            Material::Walnut,
            Material::Walnut,
            Material::Stone,
        ],
    }
}

fn french() -> CultureRules {
    CultureRules {
        culture: Culture::French,
        elements: &[
            "cabriole-legs",
            "rocaille-shells",
            "toile-upholstery",
            "cane-back",
            "bergere-curves",
            "parquetry",
        ],
        proportions: proportions(
            (0.6, 0.58),
            (2.1, 1.2),
            (2.4, 1.4),
            (0.8, 0.8),
            (2.2, 1.1),
            (2.8, 0.8),
        ),
        materials: &[
            (Material::Cherry, 0.9),
            (Material::Walnut, 0.85),
            (Material::Oak, 0.75),
            (Material::Silk, 0.9),
            (Material::Linen, 0.75),
            (Material::Brass, 0.7),
            (Material::Steel, 0.3),
        ],
        default_material_weight: 0.4,
        exemplar_palette: palette(&["#d9cdbf", "#a38d6d", "#6b4f36", "#b8a9c9"]),
        preferred_materials: &[
            Material::Oak,
            Material::Cherry,
            Material::Cherry,
            Material::Walnut,
        ],
    }
}

fn modern() -> CultureRules {
    CultureRules {
        culture: Culture::Modern,
        elements: &[
            "cantilever",
            "waterfall-edge",
            "hairpin-legs",
            "modular-sections",
            "hidden-fasteners",
            "monochrome-block",
        ],
        proportions: proportions(
            (0.6, 0.6),
            (2.15, 1.2),
            (2.6, 1.5),
            (0.85, 0.85),
            (2.4, 1.1),
            (3.0, 0.85),
        ),
        materials: &[
            (Material::Steel, 0.9),
            (Material::Glass, 0.85),
            (Material::Walnut, 0.8),
            (Material::Oak, 0.75),
            (Material::Leather, 0.8),
            (Material::Ceramic, 0.7),
            (Material::Stone, 0.7),
        ],
        default_material_weight: 0.5,
        exemplar_palette: palette(&["#1f1f1f", "#f5f5f5", "#9e9e9e", "#c0392b"]),
        preferred_materials: &[
            Material::Steel,
            Material::Oak,
            Material::Walnut,
            Material::Stone,
        ],
    }
}
