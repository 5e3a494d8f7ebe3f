//! Drawing tool selection.

use crate::geometry::ShapeKind;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Drawing tool selection.
///
/// The active tool determines what a pointer gesture does to the surface.
/// Tools carry no per-stroke state; the surface is a flat bitmap.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, JsonSchema,
)]
#[serde(rename_all = "kebab-case")]
pub enum Tool {
    /// Freehand drawing - follows the pointer path (default)
    #[default]
    Pen,
    /// Freehand erasing at double width
    Eraser,
    /// Straight line from press point to release point
    Line,
    /// Rectangle outline from corner to corner
    Rectangle,
    /// Circle outline centered on the press point
    Circle,
    /// Click to place, type, press Enter
    Text,
}

impl Tool {
    pub const ALL: [Tool; 6] = [
        Tool::Pen,
        Tool::Eraser,
        Tool::Line,
        Tool::Rectangle,
        Tool::Circle,
        Tool::Text,
    ];

    /// Tools that paint segment by segment straight into the live buffer.
    pub fn is_freehand(self) -> bool {
        matches!(self, Tool::Pen | Tool::Eraser)
    }

    /// The shape drawn by preview tools, `None` for freehand and text.
    pub fn shape_kind(self) -> Option<ShapeKind> {
        match self {
            Tool::Line => Some(ShapeKind::Line),
            Tool::Rectangle => Some(ShapeKind::Rectangle),
            Tool::Circle => Some(ShapeKind::Circle),
            Tool::Pen | Tool::Eraser | Tool::Text => None,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Tool::Pen => "pen",
            Tool::Eraser => "eraser",
            Tool::Line => "line",
            Tool::Rectangle => "rectangle",
            Tool::Circle => "circle",
            Tool::Text => "text",
        }
    }
}

impl std::str::FromStr for Tool {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lowered = s.to_lowercase();
        Tool::ALL
            .into_iter()
            .find(|tool| tool.name() == lowered)
            .ok_or(())
    }
}
