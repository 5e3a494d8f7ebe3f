//! Font descriptor for text rendering.

/// Font configuration for committed text.
///
/// Text is always a single face at a fixed pixel size; the descriptor only
/// carries which family to ask Pango for and how large to make it.
#[derive(Debug, Clone, PartialEq)]
pub struct FontDescriptor {
    /// Font family name (e.g., "Sans", "DejaVu Sans")
    pub family: String,

    /// Glyph size in pixels
    pub size_px: f64,
}

impl Default for FontDescriptor {
    fn default() -> Self {
        Self {
            family: "Sans".to_string(),
            size_px: 16.0,
        }
    }
}

impl FontDescriptor {
    pub fn new(family: impl Into<String>, size_px: f64) -> Self {
        Self {
            family: family.into(),
            size_px,
        }
    }

    /// Distance between consecutive baselines for multi-line text.
    pub fn line_height(&self) -> f64 {
        (self.size_px * 1.25).round()
    }

    /// Builds the Pango description with an absolute pixel size.
    pub fn to_pango(&self) -> pango::FontDescription {
        let mut desc = pango::FontDescription::new();
        desc.set_family(&self.family);
        desc.set_absolute_size(self.size_px * pango::SCALE as f64);
        desc
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_sixteen_pixel_sans() {
        let font = FontDescriptor::default();
        assert_eq!(font.family, "Sans");
        assert_eq!(font.size_px, 16.0);
        assert_eq!(font.line_height(), 20.0);
    }

    #[test]
    fn pango_description_uses_absolute_size() {
        let desc = FontDescriptor::new("Monospace", 24.0).to_pango();
        assert_eq!(desc.family().as_deref(), Some("Monospace"));
        assert!(desc.is_size_absolute());
        assert_eq!(desc.size(), 24 * pango::SCALE);
    }
}
