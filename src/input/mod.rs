//! Input handling and the gesture state machine.
//!
//! This module translates host pointer and keyboard events into raster
//! mutations. It maintains the current tool configuration, maps pointer
//! positions through the viewport, and drives the state machine for the
//! different interaction modes (idle, drawing, text editing).

pub mod events;
pub mod modifiers;
pub mod settings;
pub mod state;
pub mod theme;
pub mod tool;
pub mod viewport;

// Re-export commonly used types at module level
pub use events::Key;
pub use modifiers::Modifiers;
pub use settings::{DrawSettings, DrawingMode, LineWidth, ToolSettings, WhiteboardSettings};
pub use state::{DrawingState, GestureState, InputState};
pub use theme::Theme;
pub use tool::Tool;
pub use viewport::{Viewport, to_surface_space};
