//! Image export for rasterboard.
//!
//! This module turns the live surface into encoded bytes and writes them to disk:
//! - PNG via Cairo (lossless, keeps transparency)
//! - JPEG via the `image` crate (flattened onto the canvas background)
//! - SVG is recognised but always rejected with [`ExportError::UnsupportedFormat`]

pub mod encode;
pub mod file;
pub mod types;

pub use encode::{DEFAULT_JPEG_QUALITY, export_image};
pub use file::{save_export, write_export};
pub use types::{ExportError, ExportFormat, UnknownFormat};
