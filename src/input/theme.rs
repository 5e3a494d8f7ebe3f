//! Board color themes.

use crate::draw::{BLACK, Color, WHITE};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Board color theme.
///
/// Each preset fixes the canvas background and the text color used by the
/// surrounding chrome. `Custom` takes its background from the settings.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, JsonSchema,
)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    /// White board, dark text (default)
    #[default]
    Light,
    /// Slate board, light text
    Dark,
    /// Warm paper tone
    Sepia,
    Blue,
    Green,
    /// User-chosen canvas background
    Custom,
}

impl Theme {
    /// Preset background color, or `None` for [`Theme::Custom`].
    pub fn background(&self) -> Option<Color> {
        match self {
            Self::Light => Some(WHITE),
            Self::Dark => Some(Color::from_rgb8(0x1f, 0x29, 0x37)),
            Self::Sepia => Some(Color::from_rgb8(0xf8, 0xf0, 0xe3)),
            Self::Blue => Some(Color::from_rgb8(0xee, 0xf6, 0xff)),
            Self::Green => Some(Color::from_rgb8(0xec, 0xfd, 0xf5)),
            Self::Custom => None,
        }
    }

    /// Grid line color: faint white on dark boards, faint black elsewhere.
    pub fn grid_color(&self) -> Color {
        match self {
            Self::Dark => WHITE.with_alpha(0.1),
            _ => BLACK.with_alpha(0.1),
        }
    }

    /// Resolves the canvas background, using `custom` for [`Theme::Custom`].
    pub fn resolve_background(&self, custom: Color) -> Color {
        self.background().unwrap_or(custom)
    }
}

impl std::str::FromStr for Theme {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "light" => Ok(Self::Light),
            "dark" => Ok(Self::Dark),
            "sepia" => Ok(Self::Sepia),
            "blue" => Ok(Self::Blue),
            "green" => Ok(Self::Green),
            "custom" => Ok(Self::Custom),
            _ => Err(()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn test_default_theme_is_light() {
        assert_eq!(Theme::default(), Theme::Light);
        assert_eq!(Theme::Light.background(), Some(WHITE));
    }

    #[test]
    fn test_background_color() {
        let dark = Theme::Dark.background().unwrap();
        assert_eq!(dark.to_rgb8(), [0x1f, 0x29, 0x37]);
        assert_eq!(Theme::Custom.background(), None);

        let custom = Color::from_rgb8(10, 20, 30);
        assert_eq!(Theme::Custom.resolve_background(custom), custom);
        assert_eq!(Theme::Sepia.resolve_background(custom).to_rgb8(), [0xf8, 0xf0, 0xe3]);
    }

    #[test]
    fn test_grid_color_contrasts_with_theme() {
        assert_eq!(Theme::Dark.grid_color(), WHITE.with_alpha(0.1));
        assert_eq!(Theme::Light.grid_color(), BLACK.with_alpha(0.1));
        assert_eq!(Theme::Green.grid_color(), BLACK.with_alpha(0.1));
    }

    #[test]
    fn test_from_str() {
        assert_eq!(Theme::from_str("Sepia").unwrap(), Theme::Sepia);
        assert_eq!(Theme::from_str("DARK").unwrap(), Theme::Dark);
        assert!(Theme::from_str("blackboard").is_err());
    }
}
