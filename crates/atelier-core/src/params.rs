//! Parametric furniture parameters
//!
//! A `ParametricParameters` value describes one furniture piece by what it IS:
//! archetype, culture, dimensions, material, style. It carries no geometry.
//!
//! Validity is owned by the constraint resolver in `atelier-engine`: callers
//! build parameters with the `with_*` builders or apply a `ParameterPatch`,
//! and the resolver clamps and re-derives dependent fields. Code downstream of
//! the resolver may assume every invariant documented here holds.

use crate::color::Color;
use serde::{Deserialize, Serialize};

/// Furniture archetype - each variant has its own geometry builder
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum FurnitureType {
    Chair,
    DiningTable,
    CoffeeTable,
    SideTable,
    Sofa,
    Bench,
}

impl FurnitureType {
    /// Human-readable archetype name
    pub fn label(&self) -> &'static str {
        match self {
            Self::Chair => "chair",
            Self::DiningTable => "dining table",
            Self::CoffeeTable => "coffee table",
            Self::SideTable => "side table",
            Self::Sofa => "sofa",
            Self::Bench => "bench",
        }
    }

    /// Whether this archetype is sat on
    pub fn is_seating(&self) -> bool {
        matches!(self, Self::Chair | Self::Sofa | Self::Bench)
    }

    /// Whether this archetype is a table variant
    pub fn is_table(&self) -> bool {
        matches!(self, Self::DiningTable | Self::CoffeeTable | Self::SideTable)
    }
}

/// Design culture the piece belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Culture {
    Japanese,
    Scandinavian,
    Italian,
    French,
    Modern,
}

impl Culture {
    /// All cultures, in canonical order
    pub const ALL: [Culture; 5] = [
        Culture::Japanese,
        Culture::Scandinavian,
        Culture::Italian,
        Culture::French,
        Culture::Modern,
    ];

    /// Human-readable culture name
    pub fn label(&self) -> &'static str {
        match self {
            Self::Japanese => "Japanese",
            Self::Scandinavian => "Scandinavian",
            Self::Italian => "Italian",
            Self::French => "French",
            Self::Modern => "Modern",
        }
    }

    /// Short description of the tradition
    pub fn description(&self) -> &'static str {
        match self {
            Self::Japanese => "restrained lines, exposed joinery, natural wood and low profiles",
            Self::Scandinavian => "light woods, soft curves, functional warmth",
            Self::Italian => "sculptural forms, rich materials, expressive detail",
            Self::French => "refined ornament, curved silhouettes, upholstered comfort",
            Self::Modern => "minimal geometry, mixed materials, unadorned surfaces",
        }
    }
}

/// Visual style preset
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum StylePreset {
    Traditional,
    Contemporary,
    Rustic,
    Elegant,
    Minimalist,
    Ornate,
}

impl StylePreset {
    /// Human-readable style name
    pub fn label(&self) -> &'static str {
        match self {
            Self::Traditional => "Traditional",
            Self::Contemporary => "Contemporary",
            Self::Rustic => "Rustic",
            Self::Elegant => "Elegant",
            Self::Minimalist => "Minimalist",
            Self::Ornate => "Ornate",
        }
    }

    /// Descriptive phrase used in generated metadata
    pub fn description(&self) -> &'static str {
        match self {
            Self::Traditional => "faithful to the culture's historical forms",
            Self::Contemporary => "current-day interpretation with clean detailing",
            Self::Rustic => "rough-hewn surfaces and honest construction",
            Self::Elegant => "slender proportions and graceful transitions",
            Self::Minimalist => "reduced to essential structure",
            Self::Ornate => "dense decorative carving and applied ornament",
        }
    }
}

/// Occasion formality, ordered from casual to ceremonial
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Formality {
    Casual,
    SemiFormal,
    Formal,
    Ceremonial,
}

/// Primary construction material
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Material {
    #[serde(rename = "wood-oak")]
    Oak,
    #[serde(rename = "wood-walnut")]
    Walnut,
    #[serde(rename = "wood-pine")]
    Pine,
    #[serde(rename = "wood-cherry")]
    Cherry,
    #[serde(rename = "wood-bamboo")]
    Bamboo,
    #[serde(rename = "wood-ash")]
    Ash,
    #[serde(rename = "fabric-linen")]
    Linen,
    #[serde(rename = "fabric-wool")]
    Wool,
    #[serde(rename = "fabric-silk")]
    Silk,
    #[serde(rename = "fabric-cotton")]
    Cotton,
    #[serde(rename = "metal-steel")]
    Steel,
    #[serde(rename = "metal-brass")]
    Brass,
    #[serde(rename = "leather")]
    Leather,
    #[serde(rename = "ceramic")]
    Ceramic,
    #[serde(rename = "glass")]
    Glass,
    #[serde(rename = "stone")]
    Stone,
}

/// Cost tier of a material, used for formality compatibility and pricing
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum CostTier {
    Budget,
    Mid,
    Premium,
}

impl Material {
    /// Whether this is a solid-wood material
    pub fn is_wood(&self) -> bool {
        matches!(
            self,
            Self::Oak | Self::Walnut | Self::Pine | Self::Cherry | Self::Bamboo | Self::Ash
        )
    }

    /// Whether this is an upholstery material
    pub fn is_upholstery(&self) -> bool {
        matches!(
            self,
            Self::Linen | Self::Wool | Self::Silk | Self::Cotton | Self::Leather
        )
    }

    /// Cost tier for formality compatibility and pricing
    pub fn cost_tier(&self) -> CostTier {
        match self {
            Self::Pine | Self::Cotton | Self::Bamboo => CostTier::Budget,
            Self::Oak | Self::Ash | Self::Linen | Self::Wool | Self::Steel | Self::Ceramic
            | Self::Glass => CostTier::Mid,
            Self::Walnut | Self::Cherry | Self::Silk | Self::Brass | Self::Leather
            | Self::Stone => CostTier::Premium,
        }
    }

    /// Base cost per cubic meter of bounding volume, in currency units
    pub fn base_cost_per_m3(&self) -> f64 {
        match self.cost_tier() {
            CostTier::Budget => 900.0,
            CostTier::Mid => 2200.0,
            CostTier::Premium => 5200.0,
        }
    }

    /// Human-readable material name
    pub fn label(&self) -> &'static str {
        match self {
            Self::Oak => "oak",
            Self::Walnut => "walnut",
            Self::Pine => "pine",
            Self::Cherry => "cherry",
            Self::Bamboo => "bamboo",
            Self::Ash => "ash",
            Self::Linen => "linen",
            Self::Wool => "wool",
            Self::Silk => "silk",
            Self::Cotton => "cotton",
            Self::Steel => "steel",
            Self::Brass => "brass",
            Self::Leather => "leather",
            Self::Ceramic => "ceramic",
            Self::Glass => "glass",
            Self::Stone => "stone",
        }
    }
}

/// Body profile the piece is sized for - shifts height/depth baselines
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ErgonomicProfile {
    Compact,
    Average,
    Tall,
}

impl ErgonomicProfile {
    /// Multiplier applied to height/depth dimension ranges
    pub fn range_scale(&self) -> f64 {
        match self {
            Self::Compact => 0.92,
            Self::Average => 1.0,
            Self::Tall => 1.08,
        }
    }
}

/// Build quality, ordered from simple to masterwork
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum CraftsmanshipLevel {
    Simple,
    Refined,
    Masterwork,
}

impl CraftsmanshipLevel {
    /// Decorative-intensity band this level is compatible with.
    ///
    /// Masterwork implies intensity >= 0.4; simple implies <= 0.5. Refined is
    /// unconstrained, which makes it always a legal snap target for the
    /// resolver.
    pub fn intensity_band(&self) -> (f64, f64) {
        match self {
            Self::Simple => (0.0, 0.5),
            Self::Refined => (0.0, 1.0),
            Self::Masterwork => (0.4, 1.0),
        }
    }

    /// Whether an intensity value sits inside this level's band
    pub fn accepts_intensity(&self, intensity: f64) -> bool {
        let (lo, hi) = self.intensity_band();
        (lo..=hi).contains(&intensity)
    }

    /// Extra geometry detail granted by this level
    pub fn detail_bonus(&self) -> u32 {
        match self {
            Self::Simple => 0,
            Self::Refined => 2,
            Self::Masterwork => 6,
        }
    }

    /// Cost multiplier for this level
    pub fn cost_multiplier(&self) -> f64 {
        match self {
            Self::Simple => 1.0,
            Self::Refined => 1.6,
            Self::Masterwork => 2.8,
        }
    }
}

/// Dimension axis, used in diagnostics
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Axis {
    Width,
    Height,
    Depth,
}

/// Non-fatal notice attached by the constraint resolver.
///
/// These never block generation; they exist so a UI can tell the user what
/// was adjusted and why.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "kebab-case")]
pub enum ResolutionNote {
    /// A cultural element was not in the culture's vocabulary and was dropped
    UnrecognizedElement { element: String, culture: Culture },
    /// A dimension fell outside the archetype's range and was clamped
    DimensionClamped {
        axis: Axis,
        requested: f64,
        clamped: f64,
    },
    /// Decorative intensity was clamped into the craftsmanship level's band
    IntensityClamped { requested: f64, clamped: f64 },
    /// Craftsmanship level was snapped to stay compatible with the intensity
    CraftsmanshipSnapped {
        from: CraftsmanshipLevel,
        to: CraftsmanshipLevel,
    },
    /// The palette was empty and was seeded from the culture's exemplar
    PaletteDefaulted,
    /// The palette exceeded the maximum length and was truncated
    PaletteTruncated { dropped: usize },
}

/// Maximum number of colors in a piece palette
pub const MAX_PALETTE_COLORS: usize = 6;

/// One furniture piece request
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ParametricParameters {
    /// Furniture archetype
    pub furniture_type: FurnitureType,

    /// Design culture
    pub culture: Culture,

    /// Overall width in meters
    pub width: f64,

    /// Overall height in meters
    pub height: f64,

    /// Overall depth in meters
    pub depth: f64,

    /// Visual style preset
    pub style: StylePreset,

    /// Occasion formality
    pub formality: Formality,

    /// Primary construction material
    pub primary_material: Material,

    /// Named motifs and joinery techniques, drawn from the culture's
    /// vocabulary (the resolver drops anything that is not)
    pub cultural_elements: Vec<String>,

    /// Body profile the piece is sized for
    pub ergonomic_profile: ErgonomicProfile,

    /// 1-6 palette colors, most dominant first
    pub color_palette: Vec<Color>,

    /// Decoration density, 0.0 (plain) to 1.0 (fully ornamented)
    pub decorative_intensity: f64,

    /// Build quality
    pub craftsmanship_level: CraftsmanshipLevel,
}

impl ParametricParameters {
    /// Create parameters with sensible defaults for an archetype and culture.
    ///
    /// The defaults are deliberately mid-range; pass the result through the
    /// resolver before synthesis, as with any other parameter source.
    pub fn new(furniture_type: FurnitureType, culture: Culture) -> Self {
        let (width, height, depth) = match furniture_type {
            FurnitureType::Chair => (0.5, 0.85, 0.52),
            FurnitureType::DiningTable => (1.6, 0.74, 0.9),
            FurnitureType::CoffeeTable => (1.1, 0.42, 0.6),
            FurnitureType::SideTable => (0.45, 0.55, 0.45),
            FurnitureType::Sofa => (2.0, 0.85, 0.95),
            FurnitureType::Bench => (1.4, 0.45, 0.38),
        };
        Self {
            furniture_type,
            culture,
            width,
            height,
            depth,
            style: StylePreset::Contemporary,
            formality: Formality::Casual,
            primary_material: Material::Oak,
            cultural_elements: Vec::new(),
            ergonomic_profile: ErgonomicProfile::Average,
            color_palette: vec![Color::rgb(0x8b, 0x5a, 0x2b)],
            decorative_intensity: 0.4,
            craftsmanship_level: CraftsmanshipLevel::Refined,
        }
    }

    /// Set the style preset
    pub fn with_style(mut self, style: StylePreset) -> Self {
        self.style = style;
        self
    }

    /// Set the formality
    pub fn with_formality(mut self, formality: Formality) -> Self {
        self.formality = formality;
        self
    }

    /// Set the primary material
    pub fn with_material(mut self, material: Material) -> Self {
        self.primary_material = material;
        self
    }

    /// Set width/height/depth in meters
    pub fn with_dimensions(mut self, width: f64, height: f64, depth: f64) -> Self {
        self.width = width;
        self.height = height;
        self.depth = depth;
        self
    }

    /// Set the decorative intensity
    pub fn with_intensity(mut self, intensity: f64) -> Self {
        self.decorative_intensity = intensity;
        self
    }

    /// Set the craftsmanship level
    pub fn with_craftsmanship(mut self, level: CraftsmanshipLevel) -> Self {
        self.craftsmanship_level = level;
        self
    }

    /// Set the color palette
    pub fn with_palette(mut self, palette: Vec<Color>) -> Self {
        self.color_palette = palette;
        self
    }

    /// Add a cultural element
    pub fn with_element(mut self, element: impl Into<String>) -> Self {
        self.cultural_elements.push(element.into());
        self
    }

    /// Bounding volume in cubic meters
    pub fn bounding_volume(&self) -> f64 {
        self.width * self.height * self.depth
    }
}

/// A partial edit to `ParametricParameters`.
///
/// Every field is optional; unset fields keep their base value. Patches are
/// applied only through the constraint resolver.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ParameterPatch {
    pub furniture_type: Option<FurnitureType>,
    pub culture: Option<Culture>,
    pub width: Option<f64>,
    pub height: Option<f64>,
    pub depth: Option<f64>,
    pub style: Option<StylePreset>,
    pub formality: Option<Formality>,
    pub primary_material: Option<Material>,
    pub cultural_elements: Option<Vec<String>>,
    pub ergonomic_profile: Option<ErgonomicProfile>,
    pub color_palette: Option<Vec<Color>>,
    pub decorative_intensity: Option<f64>,
    pub craftsmanship_level: Option<CraftsmanshipLevel>,
}

impl ParameterPatch {
    /// An empty patch
    pub fn empty() -> Self {
        Self::default()
    }

    /// Whether the patch changes nothing
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    /// Set the width
    pub fn width(mut self, width: f64) -> Self {
        self.width = Some(width);
        self
    }

    /// Set the height
    pub fn height(mut self, height: f64) -> Self {
        self.height = Some(height);
        self
    }

    /// Set the depth
    pub fn depth(mut self, depth: f64) -> Self {
        self.depth = Some(depth);
        self
    }

    /// Set the decorative intensity
    pub fn intensity(mut self, intensity: f64) -> Self {
        self.decorative_intensity = Some(intensity);
        self
    }

    /// Set the craftsmanship level
    pub fn craftsmanship(mut self, level: CraftsmanshipLevel) -> Self {
        self.craftsmanship_level = Some(level);
        self
    }

    /// Set the culture
    pub fn culture(mut self, culture: Culture) -> Self {
        self.culture = Some(culture);
        self
    }

    /// Set the cultural elements
    pub fn elements(mut self, elements: Vec<String>) -> Self {
        self.cultural_elements = Some(elements);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_formality_ordering() {
        assert!(Formality::Casual < Formality::Formal);
        assert!(Formality::Formal < Formality::Ceremonial);
    }

    #[test]
    fn test_intensity_bands() {
        assert!(CraftsmanshipLevel::Simple.accepts_intensity(0.5));
        assert!(!CraftsmanshipLevel::Simple.accepts_intensity(0.51));
        assert!(!CraftsmanshipLevel::Masterwork.accepts_intensity(0.39));
        assert!(CraftsmanshipLevel::Refined.accepts_intensity(0.0));
        assert!(CraftsmanshipLevel::Refined.accepts_intensity(1.0));
    }

    #[test]
    fn test_material_serde_names() {
        let json = serde_json::to_string(&Material::Oak).unwrap();
        assert_eq!(json, "\"wood-oak\"");
        let back: Material = serde_json::from_str("\"fabric-linen\"").unwrap();
        assert_eq!(back, Material::Linen);
    }

    #[test]
    fn test_default_parameters_are_positive() {
        for furniture_type in [
            FurnitureType::Chair,
            FurnitureType::DiningTable,
            FurnitureType::CoffeeTable,
            FurnitureType::SideTable,
            FurnitureType::Sofa,
            FurnitureType::Bench,
        ] {
            let params = ParametricParameters::new(furniture_type, Culture::Modern);
            assert!(params.width > 0.0);
            assert!(params.height > 0.0);
            assert!(params.depth > 0.0);
            assert!(!params.color_palette.is_empty());
        }
    }

    #[test]
    fn test_empty_patch() {
        assert!(ParameterPatch::empty().is_empty());
        assert!(!ParameterPatch::empty().width(0.6).is_empty());
    }

    #[test]
    fn test_parameters_serde_roundtrip() {
        let params = ParametricParameters::new(FurnitureType::Chair, Culture::Japanese)
            .with_style(StylePreset::Traditional)
            .with_element("kumiko");
        let json = serde_json::to_string(&params).unwrap();
        let back: ParametricParameters = serde_json::from_str(&json).unwrap();
        assert_eq!(back, params);
    }
}
