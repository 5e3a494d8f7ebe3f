//! Tool and board settings shared with the toolbar and settings panel.

use super::theme::Theme;
use super::tool::Tool;
use crate::config::{BoardConfig, DrawingConfig};
use crate::draw::{BLACK, Color, Composite, StrokeStyle, WHITE};

/// A stroke width from the fixed toolbar set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct LineWidth(u8);

impl LineWidth {
    /// Widths offered by the toolbar, in pixels.
    pub const ALLOWED: [u8; 6] = [1, 3, 5, 8, 12, 16];

    /// Returns `Some` only for one of [`LineWidth::ALLOWED`].
    pub fn new(px: u8) -> Option<Self> {
        Self::ALLOWED.contains(&px).then_some(Self(px))
    }

    /// Snaps an arbitrary width to the closest allowed one (ties go to the thinner).
    pub fn nearest(px: f64) -> Self {
        let mut best = Self::ALLOWED[0];
        for candidate in Self::ALLOWED {
            if (candidate as f64 - px).abs() < (best as f64 - px).abs() {
                best = candidate;
            }
        }
        Self(best)
    }

    pub fn px(self) -> f64 {
        self.0 as f64
    }
}

impl Default for LineWidth {
    fn default() -> Self {
        Self(3)
    }
}

/// Paint parameters shared by every tool.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ToolSettings {
    pub line_width: LineWidth,
    /// Stroke opacity in `[0.1, 1.0]`
    pub opacity: f64,
    /// Opaque stroke color; opacity is applied separately
    pub color: Color,
}

impl Default for ToolSettings {
    fn default() -> Self {
        Self {
            line_width: LineWidth::default(),
            opacity: 1.0,
            color: BLACK,
        }
    }
}

impl ToolSettings {
    /// Clamps to `[0.1, 1.0]`; NaN and infinities reset to fully opaque.
    pub fn set_opacity(&mut self, opacity: f64) {
        self.opacity = if opacity.is_finite() {
            opacity.clamp(0.1, 1.0)
        } else {
            1.0
        };
    }

    /// Color with the opacity folded into its alpha channel.
    pub fn paint_color(&self) -> Color {
        self.color.with_alpha(self.opacity)
    }
}

/// Whether gestures add paint or remove it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DrawingMode {
    #[default]
    Draw,
    Erase,
}

/// Current tool configuration, read at the start of every gesture.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct DrawSettings {
    pub tool: Tool,
    pub mode: DrawingMode,
    pub settings: ToolSettings,
}

impl DrawSettings {
    pub fn from_config(config: &DrawingConfig) -> Self {
        let mut settings = ToolSettings {
            line_width: LineWidth::nearest(config.default_line_width),
            color: config.default_color.to_color(),
            ..ToolSettings::default()
        };
        settings.set_opacity(config.default_opacity);

        let mut draw = Self {
            settings,
            ..Self::default()
        };
        draw.select_tool(config.default_tool);
        draw
    }

    /// Switches tools; the eraser flips the mode to [`DrawingMode::Erase`].
    pub fn select_tool(&mut self, tool: Tool) {
        self.tool = tool;
        self.mode = if tool == Tool::Eraser {
            DrawingMode::Erase
        } else {
            DrawingMode::Draw
        };
    }

    /// Resolves the paint parameters for a gesture with `tool`.
    ///
    /// The eraser ignores color and opacity, strokes at twice the width, and
    /// clears the pixels it covers.
    pub fn stroke_style(&self, tool: Tool) -> StrokeStyle {
        match tool {
            Tool::Eraser => StrokeStyle {
                color: BLACK,
                width: self.settings.line_width.px() * 2.0,
                composite: Composite::Erase,
            },
            _ => StrokeStyle {
                color: self.settings.paint_color(),
                width: self.settings.line_width.px(),
                composite: Composite::Blend,
            },
        }
    }
}

/// Display and background settings, independent of the active tool.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WhiteboardSettings {
    pub theme: Theme,
    pub show_grid: bool,
    pub snap_to_grid: bool,
    /// Grid spacing in pixels, kept within `[8, 64]`
    pub grid_size: u32,
    pub canvas_background: Color,
}

impl Default for WhiteboardSettings {
    fn default() -> Self {
        Self {
            theme: Theme::Light,
            show_grid: false,
            snap_to_grid: false,
            grid_size: 16,
            canvas_background: WHITE,
        }
    }
}

impl WhiteboardSettings {
    pub fn from_config(config: &BoardConfig) -> Self {
        let custom = config.canvas_background.to_color_or(WHITE);
        Self {
            theme: config.theme,
            show_grid: config.show_grid,
            snap_to_grid: config.snap_to_grid,
            grid_size: config.grid_size.clamp(8, 64),
            canvas_background: config.theme.resolve_background(custom),
        }
    }

    /// Applies a theme; presets overwrite the canvas background.
    pub fn set_theme(&mut self, theme: Theme) {
        self.theme = theme;
        if let Some(background) = theme.background() {
            self.canvas_background = background;
        }
    }

    pub fn set_grid_size(&mut self, grid_size: u32) {
        self.grid_size = grid_size.clamp(8, 64);
    }
}
