//! Encoding the live surface into image bytes.

use super::types::{ExportError, ExportFormat};
use crate::draw::render::fill_background;
use crate::draw::{RasterSurface, Snapshot};
use cairo::{Format, ImageSurface};
use image::ExtendedColorType;
use image::codecs::jpeg::JpegEncoder;

/// JPEG quality used when the caller has no preference.
pub const DEFAULT_JPEG_QUALITY: u8 = 90;

/// Encodes the current surface contents.
///
/// PNG is lossless and keeps erased pixels transparent. JPEG has no alpha, so
/// the surface is first flattened onto its background color. SVG is refused
/// before any work is done.
pub fn export_image(
    surface: &RasterSurface,
    format: ExportFormat,
    jpeg_quality: u8,
) -> Result<Vec<u8>, ExportError> {
    if !format.is_supported() {
        log::warn!("Refusing {} export: format not supported", format);
        return Err(ExportError::UnsupportedFormat(format));
    }
    let image = surface.image().ok_or(ExportError::MissingSurface)?;

    let bytes = match format {
        ExportFormat::Png => encode_png(image)?,
        ExportFormat::Jpeg => {
            let flattened = flatten(image, surface)?;
            encode_jpeg(&flattened, jpeg_quality)?
        }
        ExportFormat::Svg => return Err(ExportError::UnsupportedFormat(format)),
    };

    log::info!(
        "Exported {}x{} canvas as {} ({} bytes)",
        image.width(),
        image.height(),
        format,
        bytes.len()
    );
    Ok(bytes)
}

fn encode_png(image: &ImageSurface) -> Result<Vec<u8>, ExportError> {
    let mut buffer = Vec::new();
    image.write_to_png(&mut buffer)?;
    Ok(buffer)
}

/// Composites the surface over its background into an opaque copy.
fn flatten(image: &ImageSurface, surface: &RasterSurface) -> Result<Snapshot, ExportError> {
    let flat = ImageSurface::create(Format::ARgb32, image.width(), image.height())?;
    {
        let ctx = cairo::Context::new(&flat)?;
        fill_background(&ctx, surface.background().with_alpha(1.0))?;
        ctx.set_source_surface(image, 0.0, 0.0)?;
        ctx.paint()?;
    }
    Ok(Snapshot::capture(&flat)?)
}

fn encode_jpeg(flattened: &Snapshot, quality: u8) -> Result<Vec<u8>, ExportError> {
    let rgb: Vec<u8> = flattened
        .rgba_rows()
        .flat_map(|row| row.into_iter().flat_map(|[r, g, b, _]| [r, g, b]))
        .collect();

    let mut buffer = Vec::new();
    JpegEncoder::new_with_quality(&mut buffer, quality.clamp(1, 100)).encode(
        &rgb,
        flattened.width() as u32,
        flattened.height() as u32,
        ExtendedColorType::Rgb8,
    )?;
    Ok(buffer)
}
