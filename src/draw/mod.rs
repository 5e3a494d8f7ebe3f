//! Raster surface, snapshots, and Cairo drawing primitives.
//!
//! This module defines the pixel side of the whiteboard:
//! - [`Color`]: RGBA color with hex parsing and the basic palette
//! - [`RasterSurface`]: the live bitmap plus preview scratch buffer
//! - [`Snapshot`]: immutable value copies of the bitmap used by history
//! - Rendering functions for strokes, text, and the grid overlay

pub mod color;
pub mod font;
pub mod render;
pub mod snapshot;
pub mod surface;

// Re-export commonly used types at module level
pub use color::Color;
pub use font::FontDescriptor;
pub use render::{Composite, StrokeStyle, render_grid};
pub use snapshot::Snapshot;
pub use surface::{RasterSurface, SurfaceError};

pub use color::{BLACK, BLUE, CYAN, GREEN, MAGENTA, RED, TRANSPARENT, WHITE, YELLOW};
