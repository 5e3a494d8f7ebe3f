//! Data types for image export.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Image format requested by the toolbar.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, JsonSchema,
)]
#[serde(rename_all = "lowercase")]
pub enum ExportFormat {
    /// Lossless, keeps transparency left by the eraser
    #[default]
    Png,
    /// Lossy, flattened onto the canvas background
    Jpeg,
    /// Listed by the toolbar but not implemented; always rejected
    Svg,
}

impl ExportFormat {
    /// File extension (also the format name).
    pub fn extension(self) -> &'static str {
        match self {
            ExportFormat::Png => "png",
            ExportFormat::Jpeg => "jpeg",
            ExportFormat::Svg => "svg",
        }
    }

    /// Whether the raster pipeline can produce this format.
    pub fn is_supported(self) -> bool {
        !matches!(self, ExportFormat::Svg)
    }
}

impl std::fmt::Display for ExportFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.extension())
    }
}

impl std::str::FromStr for ExportFormat {
    type Err = UnknownFormat;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "png" => Ok(ExportFormat::Png),
            "jpeg" | "jpg" => Ok(ExportFormat::Jpeg),
            "svg" => Ok(ExportFormat::Svg),
            _ => Err(UnknownFormat(s.to_string())),
        }
    }
}

/// A format name that is not png, jpeg, or svg.
#[derive(Debug, Clone, Error)]
#[error("unknown export format '{0}' (expected png, jpeg, or svg)")]
pub struct UnknownFormat(pub String);

/// Errors that can occur while exporting the canvas.
#[derive(Debug, Error)]
pub enum ExportError {
    #[error("{0} export is not supported")]
    UnsupportedFormat(ExportFormat),

    #[error("Nothing to export: the canvas has not been allocated yet")]
    MissingSurface,

    #[error("Cairo error: {0}")]
    Cairo(#[from] cairo::Error),

    #[error("Could not read canvas pixels: {0}")]
    Borrow(#[from] cairo::BorrowError),

    #[error("PNG encoding failed: {0}")]
    Png(#[from] cairo::IoError),

    #[error("JPEG encoding failed: {0}")]
    Jpeg(#[from] image::ImageError),

    #[error("Failed to save export: {0}")]
    Io(#[from] std::io::Error),
}
