//! Configuration file support for rasterboard.
//!
//! This module handles loading and validating user settings from the configuration file
//! located at `~/.config/rasterboard/config.toml`. Settings include drawing defaults,
//! board theme and grid, history bounds, and export preferences.
//!
//! If no config file exists, sensible defaults are used automatically.

pub mod enums;
pub mod types;

// Re-export commonly used types at module level
pub use enums::ColorSpec;
pub use types::{BoardConfig, DrawingConfig, ExportConfig, HistoryConfig};

use crate::input::LineWidth;
use anyhow::{Context, Result};
use log::{debug, info};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Main configuration structure containing all user settings.
///
/// This is the root configuration type that gets deserialized from the TOML file.
/// All fields have sensible defaults and will use those if not specified in the config file.
///
/// # Example TOML
/// ```toml
/// [drawing]
/// default_tool = "pen"
/// default_color = "#000000"
/// default_line_width = 3
/// default_opacity = 1.0
///
/// [board]
/// theme = "light"
/// show_grid = true
/// grid_size = 16
///
/// [history]
/// max_snapshots = 50
///
/// [export]
/// default_format = "png"
/// jpeg_quality = 90
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, Default, JsonSchema)]
pub struct Config {
    /// Tool defaults (tool, color, width, opacity, font)
    #[serde(default)]
    pub drawing: DrawingConfig,

    /// Theme, background, and grid settings
    #[serde(default)]
    pub board: BoardConfig,

    /// Undo history bounds
    #[serde(default)]
    pub history: HistoryConfig,

    /// Image export preferences
    #[serde(default)]
    pub export: ExportConfig,
}

impl Config {
    /// Validates and clamps all configuration values to acceptable ranges.
    ///
    /// Invalid values are clamped to the nearest valid value and a warning is logged.
    ///
    /// Validated ranges:
    /// - `default_line_width`: snapped to 1, 3, 5, 8, 12, 16
    /// - `default_opacity`: 0.1 - 1.0
    /// - `font_size`: 8.0 - 72.0
    /// - `grid_size`: 8 - 64
    /// - `jpeg_quality`: 1 - 100
    pub fn validate_and_clamp(&mut self) {
        let snapped = LineWidth::nearest(self.drawing.default_line_width).px();
        if snapped != self.drawing.default_line_width {
            log::warn!(
                "Invalid default_line_width {:.1}, snapping to {:.0}",
                self.drawing.default_line_width,
                snapped
            );
            self.drawing.default_line_width = snapped;
        }

        // Opacity: 0.1 - 1.0
        if !(0.1..=1.0).contains(&self.drawing.default_opacity) {
            log::warn!(
                "Invalid default_opacity {:.2}, clamping to 0.1-1.0 range",
                self.drawing.default_opacity
            );
            self.drawing.default_opacity = if self.drawing.default_opacity.is_finite() {
                self.drawing.default_opacity.clamp(0.1, 1.0)
            } else {
                1.0
            };
        }

        // Font size: 8.0 - 72.0
        if !(8.0..=72.0).contains(&self.drawing.font_size) {
            log::warn!(
                "Invalid font_size {:.1}, clamping to 8.0-72.0 range",
                self.drawing.font_size
            );
            self.drawing.font_size = if self.drawing.font_size.is_finite() {
                self.drawing.font_size.clamp(8.0, 72.0)
            } else {
                16.0
            };
        }

        if !self.drawing.default_color.is_valid() {
            log::warn!(
                "Invalid default_color {:?}, falling back to '#000000'",
                self.drawing.default_color
            );
            self.drawing.default_color = ColorSpec::Name("#000000".to_string());
        }

        if !self.board.canvas_background.is_valid() {
            log::warn!(
                "Invalid canvas_background {:?}, falling back to '#ffffff'",
                self.board.canvas_background
            );
            self.board.canvas_background = ColorSpec::Name("#ffffff".to_string());
        }

        // Grid size: 8 - 64
        if !(8..=64).contains(&self.board.grid_size) {
            log::warn!(
                "Invalid grid_size {}, clamping to 8-64 range",
                self.board.grid_size
            );
            self.board.grid_size = self.board.grid_size.clamp(8, 64);
        }

        // JPEG quality: 1 - 100
        if !(1..=100).contains(&self.export.jpeg_quality) {
            log::warn!(
                "Invalid jpeg_quality {}, clamping to 1-100 range",
                self.export.jpeg_quality
            );
            self.export.jpeg_quality = self.export.jpeg_quality.clamp(1, 100);
        }

        if !self.export.default_format.is_supported() {
            log::warn!(
                "Export format {:?} is not supported as a default, using png",
                self.export.default_format
            );
            self.export.default_format = crate::export::ExportFormat::Png;
        }
    }

    /// Returns the path to the configuration file.
    ///
    /// The config file is located at `~/.config/rasterboard/config.toml`.
    ///
    /// # Errors
    /// Returns an error if the config directory cannot be determined (e.g., HOME not set).
    pub fn get_config_path() -> Result<PathBuf> {
        let config_dir = dirs::config_dir()
            .context("Could not find config directory")?
            .join("rasterboard");

        Ok(config_dir.join("config.toml"))
    }

    /// Loads configuration from the default location, or returns defaults if not found.
    ///
    /// # Errors
    /// Returns an error if:
    /// - The config directory path cannot be determined
    /// - The file exists but cannot be read
    /// - The file exists but contains invalid TOML syntax
    pub fn load() -> Result<Self> {
        let config_path = Self::get_config_path()?;
        Self::load_from(&config_path)
    }

    /// Loads configuration from an explicit path, or returns defaults if it does not exist.
    pub fn load_from(config_path: &Path) -> Result<Self> {
        if !config_path.exists() {
            info!("Config file not found, using defaults");
            debug!("Expected config at: {}", config_path.display());
            return Ok(Self::default());
        }

        let config_str = fs::read_to_string(config_path)
            .with_context(|| format!("Failed to read config from {}", config_path.display()))?;

        let config = Self::from_toml(&config_str)
            .with_context(|| format!("Failed to parse config from {}", config_path.display()))?;

        info!("Loaded config from {}", config_path.display());
        debug!("Config: {:?}", config);
        Ok(config)
    }

    /// Parses a TOML document and clamps it to valid ranges.
    pub fn from_toml(source: &str) -> Result<Self> {
        let mut config: Config = toml::from_str(source)?;
        config.validate_and_clamp();
        Ok(config)
    }

    /// Saves the current configuration to the default location.
    ///
    /// # Errors
    /// Returns an error if:
    /// - The config directory cannot be created
    /// - The config cannot be serialized to TOML
    /// - The file cannot be written
    pub fn save(&self) -> Result<()> {
        let config_path = Self::get_config_path()?;
        self.save_to(&config_path)
    }

    /// Serializes the config to TOML at `config_path`, creating parent directories.
    pub fn save_to(&self, config_path: &Path) -> Result<()> {
        if let Some(parent) = config_path.parent() {
            fs::create_dir_all(parent).context("Failed to create config directory")?;
        }

        let config_str = toml::to_string_pretty(self).context("Failed to serialize config")?;

        fs::write(config_path, config_str)
            .with_context(|| format!("Failed to write config to {}", config_path.display()))?;

        info!("Saved config to {}", config_path.display());
        Ok(())
    }

    /// JSON schema describing the configuration file.
    pub fn json_schema() -> schemars::Schema {
        schemars::schema_for!(Config)
    }
}
