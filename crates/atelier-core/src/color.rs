//! Color values and perceptual distance
//!
//! Palettes are compared in CIELAB rather than raw RGB so that "how similar do
//! these colors look" drives the aesthetics score, not channel arithmetic.

use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// An sRGB color, serialized as `#rrggbb`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

/// Color parsing failure
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ColorParseError {
    #[error("expected '#rrggbb', got '{0}'")]
    BadFormat(String),

    #[error("invalid hex digit in '{0}'")]
    BadDigit(String),
}

impl Color {
    /// Create a color from raw channels
    pub fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Parse a `#rrggbb` hex string
    pub fn parse(s: &str) -> Result<Self, ColorParseError> {
        let hex = s
            .strip_prefix('#')
            .ok_or_else(|| ColorParseError::BadFormat(s.to_string()))?;
        // Byte-indexed slicing below requires ASCII
        if hex.len() != 6 || !hex.is_ascii() {
            return Err(ColorParseError::BadFormat(s.to_string()));
        }
        let channel = |range: std::ops::Range<usize>| {
            u8::from_str_radix(&hex[range], 16)
                .map_err(|_| ColorParseError::BadDigit(s.to_string()))
        };
        Ok(Self {
            r: channel(0..2)?,
            g: channel(2..4)?,
            b: channel(4..6)?,
        })
    }

    /// Format as `#rrggbb`
    pub fn to_hex(self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }

    /// Convert to CIELAB (D65 white point)
    pub fn to_lab(self) -> [f64; 3] {
        let [x, y, z] = self.to_xyz();

        // D65 reference white
        let f = |t: f64| {
            if t > 0.008856 {
                t.cbrt()
            } else {
                7.787 * t + 16.0 / 116.0
            }
        };
        let fx = f(x / 0.95047);
        let fy = f(y / 1.0);
        let fz = f(z / 1.08883);

        [116.0 * fy - 16.0, 500.0 * (fx - fy), 200.0 * (fy - fz)]
    }

    /// Perceptual distance (CIE76 delta-E) to another color
    pub fn delta_e(self, other: Color) -> f64 {
        let a = self.to_lab();
        let b = other.to_lab();
        ((a[0] - b[0]).powi(2) + (a[1] - b[1]).powi(2) + (a[2] - b[2]).powi(2)).sqrt()
    }

    fn to_xyz(self) -> [f64; 3] {
        let linear = |c: u8| {
            let f = c as f64 / 255.0;
            if f > 0.04045 {
                ((f + 0.055) / 1.055).powf(2.4)
            } else {
                f / 12.92
            }
        };
        let r = linear(self.r);
        let g = linear(self.g);
        let b = linear(self.b);

        [
            r * 0.4124 + g * 0.3576 + b * 0.1805,
            r * 0.2126 + g * 0.7152 + b * 0.0722,
            r * 0.0193 + g * 0.1192 + b * 0.9505,
        ]
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_hex())
    }
}

impl Serialize for Color {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_hex())
    }
}

impl<'de> Deserialize<'de> for Color {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        Color::parse(&s).map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_roundtrip() {
        let color = Color::parse("#8b4513").unwrap();
        assert_eq!(color, Color::rgb(0x8b, 0x45, 0x13));
        assert_eq!(color.to_hex(), "#8b4513");
    }

    #[test]
    fn test_parse_rejects_bad_input() {
        assert!(Color::parse("8b4513").is_err());
        assert!(Color::parse("#8b45").is_err());
        assert!(Color::parse("#8b451g").is_err());
    }

    #[test]
    fn test_parse_rejects_non_ascii_without_panicking() {
        // 6 bytes but not 6 hex digits; must be an Err, never a slice panic
        assert!(Color::parse("#f\u{00e9}fff").is_err());
        assert!(Color::parse("#\u{00e9}\u{00e9}\u{00e9}").is_err());
        let from_json: Result<Color, _> = serde_json::from_str("\"#f\u{00e9}fff\"");
        assert!(from_json.is_err());
    }

    #[test]
    fn test_delta_e_identity() {
        let color = Color::rgb(120, 80, 40);
        assert!(color.delta_e(color) < 1e-9);
    }

    #[test]
    fn test_delta_e_black_white_is_large() {
        let black = Color::rgb(0, 0, 0);
        let white = Color::rgb(255, 255, 255);
        assert!(black.delta_e(white) > 90.0);
    }

    #[test]
    fn test_serde_as_hex_string() {
        let color = Color::rgb(0x2b, 0x2b, 0x2b);
        let json = serde_json::to_string(&color).unwrap();
        assert_eq!(json, "\"#2b2b2b\"");
        let back: Color = serde_json::from_str(&json).unwrap();
        assert_eq!(back, color);
    }
}
