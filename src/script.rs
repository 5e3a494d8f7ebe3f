//! Gesture scripts: TOML files that replay toolbar and pointer events.
//!
//! A script is a list of `[[step]]` tables, each tagged by `action`:
//!
//! ```toml
//! [[step]]
//! action = "tool"
//! tool = "line"
//!
//! [[step]]
//! action = "down"
//! x = 10.0
//! y = 10.0
//!
//! [[step]]
//! action = "move"
//! x = 100.0
//! y = 10.0
//!
//! [[step]]
//! action = "up"
//! ```
//!
//! Pointer coordinates are client-space; they pass through the viewport
//! exactly like live host events.

use crate::draw::Color;
use crate::geometry::Point;
use crate::input::{InputState, Key, LineWidth, Theme, Tool};
use serde::Deserialize;
use std::fs;
use std::path::Path;
use thiserror::Error;

/// Errors raised while loading or replaying a script.
#[derive(Debug, Error)]
pub enum ScriptError {
    #[error("Failed to read script: {0}")]
    Read(#[from] std::io::Error),

    #[error("Invalid script: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Step {step}: invalid color '{value}'")]
    InvalidColor { step: usize, value: String },

    #[error("Step {step}: line width {value} is not one of 1, 3, 5, 8, 12, 16")]
    InvalidLineWidth { step: usize, value: u8 },
}

/// One replayed event.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(tag = "action", rename_all = "kebab-case")]
pub enum Step {
    Tool {
        tool: Tool,
    },
    Color {
        color: String,
    },
    LineWidth {
        width: u8,
    },
    Opacity {
        opacity: f64,
    },
    Down {
        x: f64,
        y: f64,
    },
    Move {
        x: f64,
        y: f64,
    },
    Up,
    Leave,
    /// Appends text to the active text session
    Type {
        text: String,
    },
    /// A single key press, optionally with Shift held
    Key {
        key: String,
        #[serde(default)]
        shift: bool,
    },
    Blur,
    Undo,
    Redo,
    Clear,
    Resize {
        width: i32,
        height: i32,
    },
    Theme {
        theme: Theme,
        /// Background for the custom theme
        #[serde(default)]
        background: Option<String>,
    },
    Grid {
        #[serde(default)]
        show: Option<bool>,
        #[serde(default)]
        snap: Option<bool>,
        #[serde(default)]
        size: Option<u32>,
    },
    Zoom {
        scale: f64,
    },
    Pan {
        dx: f64,
        dy: f64,
    },
}

/// A parsed gesture script.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Script {
    #[serde(rename = "step", default)]
    pub steps: Vec<Step>,
}

/// Counters gathered while replaying.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ReplaySummary {
    pub steps: usize,
    /// Undo/redo requests that had nothing to act on
    pub rejected: usize,
}

impl Script {
    pub fn parse(source: &str) -> Result<Self, ScriptError> {
        Ok(toml::from_str(source)?)
    }

    pub fn load(path: &Path) -> Result<Self, ScriptError> {
        let source = fs::read_to_string(path)?;
        let script = Self::parse(&source)?;
        log::info!(
            "Loaded script {} ({} steps)",
            path.display(),
            script.steps.len()
        );
        Ok(script)
    }

    /// Feeds every step into `state` in order.
    ///
    /// Invalid colors and widths abort the replay; saturated undo/redo are
    /// counted and skipped.
    pub fn run(&self, state: &mut InputState) -> Result<ReplaySummary, ScriptError> {
        let mut summary = ReplaySummary::default();
        for (index, step) in self.steps.iter().enumerate() {
            let number = index + 1;
            log::debug!("Step {}: {:?}", number, step);
            if !apply_step(state, step, number)? {
                summary.rejected += 1;
            }
            summary.steps += 1;
        }
        Ok(summary)
    }
}

/// Returns false when the step was a rejected no-op.
fn apply_step(state: &mut InputState, step: &Step, number: usize) -> Result<bool, ScriptError> {
    match step {
        Step::Tool { tool } => state.select_tool(*tool),
        Step::Color { color } => state.set_color(parse_color(color, number)?),
        Step::LineWidth { width } => {
            let width = LineWidth::new(*width).ok_or(ScriptError::InvalidLineWidth {
                step: number,
                value: *width,
            })?;
            state.set_line_width(width);
        }
        Step::Opacity { opacity } => state.set_opacity(*opacity),
        Step::Down { x, y } => state.on_pointer_down(Point::new(*x, *y)),
        Step::Move { x, y } => state.on_pointer_move(Point::new(*x, *y)),
        Step::Up => state.on_pointer_up(),
        Step::Leave => state.on_pointer_leave(),
        Step::Type { text } => state.type_text(text),
        Step::Key { key, shift } => {
            if *shift {
                state.on_key_press(Key::Shift);
            }
            state.on_key_press(Key::from_name(key));
            if *shift {
                state.on_key_release(Key::Shift);
            }
        }
        Step::Blur => {
            state.blur_text();
        }
        Step::Undo => return Ok(state.undo()),
        Step::Redo => return Ok(state.redo()),
        Step::Clear => state.clear_canvas(),
        Step::Resize { width, height } => state.resize(*width, *height),
        Step::Theme { theme, background } => {
            if let Some(background) = background {
                state.set_canvas_background(parse_color(background, number)?);
            }
            state.set_theme(*theme);
        }
        Step::Grid { show, snap, size } => {
            if let Some(size) = size {
                state.set_grid_size(*size);
            }
            if let Some(snap) = snap {
                state.set_snap_to_grid(*snap);
            }
            if let Some(show) = show {
                state.set_show_grid(*show);
            }
        }
        Step::Zoom { scale } => state.viewport.set_scale(*scale),
        Step::Pan { dx, dy } => state.viewport.pan_by(*dx, *dy),
    }
    Ok(true)
}

fn parse_color(value: &str, step: usize) -> Result<Color, ScriptError> {
    Color::parse(value).ok_or_else(|| ScriptError::InvalidColor {
        step,
        value: value.to_string(),
    })
}
