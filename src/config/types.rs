//! Configuration type definitions.

use super::enums::ColorSpec;
use crate::export::ExportFormat;
use crate::input::{Theme, Tool};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Drawing-related settings.
///
/// Controls the tool configuration the board starts with. The toolbar can
/// change every value at runtime.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct DrawingConfig {
    /// Tool selected at startup (pen, eraser, line, rectangle, circle, text)
    #[serde(default = "default_tool")]
    pub default_tool: Tool,

    /// Default stroke color - hex (`#000000`), a palette name, or `[r, g, b]`
    #[serde(default = "default_color")]
    pub default_color: ColorSpec,

    /// Default line width; snapped to one of 1, 3, 5, 8, 12, 16
    #[serde(default = "default_line_width")]
    pub default_line_width: f64,

    /// Default stroke opacity (valid range: 0.1 - 1.0)
    #[serde(default = "default_opacity")]
    pub default_opacity: f64,

    /// Font family for committed text
    #[serde(default = "default_font_family")]
    pub font_family: String,

    /// Text glyph size in pixels (valid range: 8 - 72)
    #[serde(default = "default_font_size")]
    pub font_size: f64,
}

impl Default for DrawingConfig {
    fn default() -> Self {
        Self {
            default_tool: default_tool(),
            default_color: default_color(),
            default_line_width: default_line_width(),
            default_opacity: default_opacity(),
            font_family: default_font_family(),
            font_size: default_font_size(),
        }
    }
}

/// Board display settings (theme, background, grid).
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct BoardConfig {
    /// Color theme (light, dark, sepia, blue, green, custom)
    #[serde(default = "default_theme")]
    pub theme: Theme,

    /// Canvas background; only used when `theme = "custom"`
    #[serde(default = "default_canvas_background")]
    pub canvas_background: ColorSpec,

    /// Draw the grid overlay
    #[serde(default)]
    pub show_grid: bool,

    /// Round pointer positions to the nearest grid intersection
    #[serde(default)]
    pub snap_to_grid: bool,

    /// Grid spacing in pixels (valid range: 8 - 64)
    #[serde(default = "default_grid_size")]
    pub grid_size: u32,
}

impl Default for BoardConfig {
    fn default() -> Self {
        Self {
            theme: default_theme(),
            canvas_background: default_canvas_background(),
            show_grid: false,
            snap_to_grid: false,
            grid_size: default_grid_size(),
        }
    }
}

/// Undo history settings.
#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema)]
pub struct HistoryConfig {
    /// Maximum number of snapshots kept for undo (0 = unlimited).
    /// Each snapshot is a full copy of the canvas, so large boards may want a bound.
    #[serde(default)]
    pub max_snapshots: usize,
}

/// Image export settings.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct ExportConfig {
    /// Format used when none is requested explicitly (png or jpeg)
    #[serde(default = "default_export_format")]
    pub default_format: ExportFormat,

    /// JPEG quality (valid range: 1 - 100)
    #[serde(default = "default_jpeg_quality")]
    pub jpeg_quality: u8,

    /// Directory exported images are written to (`~` is expanded)
    #[serde(default = "default_save_directory")]
    pub save_directory: String,

    /// Filename template (chrono format specifiers); the extension is appended
    #[serde(default = "default_filename_template")]
    pub filename_template: String,
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self {
            default_format: default_export_format(),
            jpeg_quality: default_jpeg_quality(),
            save_directory: default_save_directory(),
            filename_template: default_filename_template(),
        }
    }
}

// =============================================================================
// Default value functions
// =============================================================================

fn default_tool() -> Tool {
    Tool::Pen
}

fn default_color() -> ColorSpec {
    ColorSpec::Name("#000000".to_string())
}

fn default_line_width() -> f64 {
    3.0
}

fn default_opacity() -> f64 {
    1.0
}

fn default_font_family() -> String {
    "Sans".to_string()
}

fn default_font_size() -> f64 {
    16.0
}

fn default_theme() -> Theme {
    Theme::Light
}

fn default_canvas_background() -> ColorSpec {
    ColorSpec::Name("#ffffff".to_string())
}

fn default_grid_size() -> u32 {
    16
}

fn default_export_format() -> ExportFormat {
    ExportFormat::Png
}

fn default_jpeg_quality() -> u8 {
    90
}

fn default_save_directory() -> String {
    "~/Pictures/Rasterboard".to_string()
}

fn default_filename_template() -> String {
    "whiteboard-export_%Y-%m-%d_%H%M%S".to_string()
}
