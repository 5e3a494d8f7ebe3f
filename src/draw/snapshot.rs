//! Immutable full-surface pixel copies used as the unit of history.

use cairo::{Format, ImageSurface};

/// A value copy of the whole raster surface.
///
/// Pixels are stored exactly as Cairo keeps them in an `ARgb32` image:
/// premultiplied, native-endian 32-bit words, `stride` bytes per row.
/// The buffer is owned by the snapshot and never aliases the live surface,
/// so later drawing cannot reach back into history.
#[derive(Clone, PartialEq, Eq)]
pub struct Snapshot {
    width: i32,
    height: i32,
    stride: i32,
    data: Vec<u8>,
}

impl std::fmt::Debug for Snapshot {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Snapshot")
            .field("width", &self.width)
            .field("height", &self.height)
            .field("bytes", &self.data.len())
            .finish()
    }
}

impl Snapshot {
    /// Copies the pixels out of an image surface.
    pub(crate) fn capture(surface: &ImageSurface) -> Result<Self, cairo::BorrowError> {
        let mut data = Vec::new();
        surface.with_data(|bytes| data.extend_from_slice(bytes))?;
        Ok(Self {
            width: surface.width(),
            height: surface.height(),
            stride: surface.stride(),
            data,
        })
    }

    pub fn width(&self) -> i32 {
        self.width
    }

    pub fn height(&self) -> i32 {
        self.height
    }

    /// Raw premultiplied ARGB32 bytes.
    pub fn data(&self) -> &[u8] {
        &self.data
    }

    /// Returns the straight (non-premultiplied) RGBA value of one pixel.
    pub fn pixel_rgba(&self, x: i32, y: i32) -> Option<[u8; 4]> {
        if x < 0 || y < 0 || x >= self.width || y >= self.height {
            return None;
        }
        let offset = (y * self.stride + x * 4) as usize;
        let word = u32::from_ne_bytes(self.data[offset..offset + 4].try_into().ok()?);
        Some(unpremultiply(word))
    }

    /// Builds a standalone Cairo image holding a copy of these pixels.
    pub fn to_image_surface(&self) -> Result<ImageSurface, cairo::Error> {
        ImageSurface::create_for_data(
            self.data.clone(),
            Format::ARgb32,
            self.width,
            self.height,
            self.stride,
        )
    }

    /// Iterates rows of straight RGBA pixels.
    pub fn rgba_rows(&self) -> impl Iterator<Item = Vec<[u8; 4]>> + '_ {
        self.data
            .chunks(self.stride as usize)
            .take(self.height as usize)
            .map(move |row| {
                row.chunks_exact(4)
                    .take(self.width as usize)
                    .map(|px| unpremultiply(u32::from_ne_bytes([px[0], px[1], px[2], px[3]])))
                    .collect()
            })
    }
}

fn unpremultiply(word: u32) -> [u8; 4] {
    let a = (word >> 24) & 0xff;
    let channel = |shift: u32| -> u8 {
        let premultiplied = (word >> shift) & 0xff;
        if a == 0 {
            0
        } else {
            ((premultiplied * 255 + a / 2) / a).min(255) as u8
        }
    };
    [channel(16), channel(8), channel(0), a as u8]
}
