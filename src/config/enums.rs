//! Configuration enum types.

use crate::draw::{BLACK, Color};
use log::warn;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Color specification - either a hex/named color or RGB values.
///
/// # Examples
/// ```toml
/// # Hex or palette name
/// default_color = "#1e3a8a"
/// default_color = "red"
///
/// # Custom RGB color (0-255 per component)
/// default_color = [255, 128, 0]
/// ```
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, JsonSchema)]
#[serde(untagged)]
pub enum ColorSpec {
    /// `#rgb`, `#rrggbb`, or a palette name (black, red, green, blue, yellow, magenta, cyan, white)
    Name(String),
    /// RGB color as [red, green, blue] where each component is 0-255
    Rgb([u8; 3]),
}

impl ColorSpec {
    /// Converts the specification to a [`Color`], falling back to `fallback`
    /// with a warning when the string cannot be parsed.
    pub fn to_color_or(&self, fallback: Color) -> Color {
        match self {
            ColorSpec::Name(name) => Color::parse(name).unwrap_or_else(|| {
                warn!("Unknown color '{}', using {}", name, fallback);
                fallback
            }),
            ColorSpec::Rgb([r, g, b]) => Color::from_rgb8(*r, *g, *b),
        }
    }

    /// Converts the specification to a [`Color`], defaulting to black.
    pub fn to_color(&self) -> Color {
        self.to_color_or(BLACK)
    }

    /// Returns true if the specification parses to a color.
    pub fn is_valid(&self) -> bool {
        match self {
            ColorSpec::Name(name) => Color::parse(name).is_some(),
            ColorSpec::Rgb(_) => true,
        }
    }
}

impl From<Color> for ColorSpec {
    fn from(color: Color) -> Self {
        ColorSpec::Name(color.to_string())
    }
}
