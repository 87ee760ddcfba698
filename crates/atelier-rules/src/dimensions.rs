//! Per-archetype dimension ranges
//!
//! Every archetype has a practical min/max per axis; the ergonomic profile
//! shifts the height and depth baselines. The constraint resolver clamps into
//! these ranges rather than rejecting out-of-range values, so interactive
//! sliders never stick.

use atelier_core::{ErgonomicProfile, FurnitureType};

/// Inclusive min/max for one axis, in meters
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AxisRange {
    pub min: f64,
    pub max: f64,
}

impl AxisRange {
    fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    /// Clamp a value into this range
    pub fn clamp(&self, value: f64) -> f64 {
        value.clamp(self.min, self.max)
    }

    fn scaled(self, factor: f64) -> Self {
        Self {
            min: self.min * factor,
            max: self.max * factor,
        }
    }
}

/// Width/height/depth ranges for one archetype under one ergonomic profile
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DimensionRange {
    pub width: AxisRange,
    pub height: AxisRange,
    pub depth: AxisRange,
}

/// Look up the dimension range for an archetype.
///
/// The ergonomic profile scales the height and depth ranges; width is a
/// function of the piece, not the sitter.
pub fn dimension_range(
    furniture_type: FurnitureType,
    profile: ErgonomicProfile,
) -> DimensionRange {
    let base = base_range(furniture_type);
    let factor = profile.range_scale();
    DimensionRange {
        width: base.width,
        height: base.height.scaled(factor),
        depth: base.depth.scaled(factor),
    }
}

fn base_range(furniture_type: FurnitureType) -> DimensionRange {
    match furniture_type {
        FurnitureType::Chair => DimensionRange {
            width: AxisRange::new(0.38, 0.75),
            height: AxisRange::new(0.6, 1.2),
            depth: AxisRange::new(0.4, 0.7),
        },
        FurnitureType::DiningTable => DimensionRange {
            width: AxisRange::new(0.9, 3.2),
            height: AxisRange::new(0.68, 0.8),
            depth: AxisRange::new(0.7, 1.3),
        },
        FurnitureType::CoffeeTable => DimensionRange {
            width: AxisRange::new(0.6, 1.6),
            height: AxisRange::new(0.3, 0.55),
            depth: AxisRange::new(0.4, 0.9),
        },
        FurnitureType::SideTable => DimensionRange {
            width: AxisRange::new(0.3, 0.7),
            height: AxisRange::new(0.4, 0.75),
            depth: AxisRange::new(0.3, 0.7),
        },
        FurnitureType::Sofa => DimensionRange {
            width: AxisRange::new(1.4, 3.2),
            height: AxisRange::new(0.7, 1.1),
            depth: AxisRange::new(0.75, 1.1),
        },
        FurnitureType::Bench => DimensionRange {
            width: AxisRange::new(0.9, 2.4),
            height: AxisRange::new(0.38, 0.55),
            depth: AxisRange::new(0.3, 0.5),
        },
    }
}
