//! The raster surface: single owner of the live pixel buffer.

use super::color::Color;
use super::font::FontDescriptor;
use super::render::{self, StrokeStyle};
use super::snapshot::Snapshot;
use crate::geometry::{Point, ShapeGeometry, ShapeKind};
use cairo::{Format, ImageSurface};
use thiserror::Error;

/// Internal raster failures. The input layer logs these and carries on.
#[derive(Debug, Error)]
pub enum SurfaceError {
    #[error("cairo error: {0}")]
    Cairo(#[from] cairo::Error),

    #[error("could not access surface pixels: {0}")]
    Borrow(#[from] cairo::BorrowError),

    #[error("surface has not been allocated yet")]
    Missing,
}

/// Owns the live bitmap plus an offscreen scratch buffer for shape previews.
///
/// Until the first [`resize`](Self::resize) there is no buffer; every drawing
/// call is then a no-op returning [`SurfaceError::Missing`].
pub struct RasterSurface {
    live: Option<ImageSurface>,
    scratch: Option<ImageSurface>,
    /// Color used for pixels not covered by a restored snapshot
    background: Color,
}

impl Default for RasterSurface {
    fn default() -> Self {
        Self::new(super::color::WHITE)
    }
}

impl RasterSurface {
    pub fn new(background: Color) -> Self {
        Self {
            live: None,
            scratch: None,
            background,
        }
    }

    pub fn is_allocated(&self) -> bool {
        self.live.is_some()
    }

    /// Current buffer size, or `(0, 0)` before allocation.
    pub fn size(&self) -> (i32, i32) {
        self.live
            .as_ref()
            .map(|s| (s.width(), s.height()))
            .unwrap_or((0, 0))
    }

    pub fn background(&self) -> Color {
        self.background
    }

    /// Changes the fill used for uncovered pixels; existing pixels are kept.
    pub fn set_background(&mut self, background: Color) {
        self.background = background;
    }

    /// Read access to the live buffer for compositing and export.
    pub fn image(&self) -> Option<&ImageSurface> {
        self.live.as_ref()
    }

    fn live(&self) -> Result<&ImageSurface, SurfaceError> {
        self.live.as_ref().ok_or(SurfaceError::Missing)
    }

    /// Reallocates the buffer at a new size.
    ///
    /// The new buffer starts background-colored; `redisplay` (normally the
    /// newest history entry) is then painted at the origin without scaling.
    /// A zero or negative dimension drops the buffer entirely.
    pub fn resize(
        &mut self,
        width: i32,
        height: i32,
        redisplay: Option<&Snapshot>,
    ) -> Result<(), SurfaceError> {
        self.scratch = None;
        if width <= 0 || height <= 0 {
            self.live = None;
            return Ok(());
        }

        let surface = ImageSurface::create(Format::ARgb32, width, height)?;
        {
            let ctx = cairo::Context::new(&surface)?;
            render::fill_background(&ctx, self.background)?;
        }
        self.live = Some(surface);

        if let Some(snapshot) = redisplay {
            self.restore_snapshot(snapshot)?;
        }
        log::debug!("Raster surface resized to {}x{}", width, height);
        Ok(())
    }

    /// Fills the buffer with `background` and captures the result.
    ///
    /// Used both for the very first blank state and for clearing the canvas.
    pub fn initialize_blank(&mut self, background: Color) -> Result<Snapshot, SurfaceError> {
        self.background = background;
        let live = self.live()?;
        {
            let ctx = cairo::Context::new(live)?;
            render::fill_background(&ctx, background)?;
        }
        self.capture_snapshot()
    }

    /// Draws one freehand segment straight into the live buffer.
    pub fn paint_segment(
        &mut self,
        from: Point,
        to: Point,
        style: &StrokeStyle,
    ) -> Result<(), SurfaceError> {
        let ctx = cairo::Context::new(self.live()?)?;
        render::stroke_segment(&ctx, from, to, style)?;
        Ok(())
    }

    /// Shows a provisional shape without touching committed pixels.
    ///
    /// `base` is restored into the scratch buffer, the outline is stroked
    /// there, and the scratch buffer then replaces the live buffer wholesale.
    /// Calling this on every pointer move therefore never leaves a trail.
    pub fn render_shape_preview(
        &mut self,
        kind: ShapeKind,
        anchor: Point,
        current: Point,
        style: &StrokeStyle,
        base: &Snapshot,
    ) -> Result<(), SurfaceError> {
        let (width, height) = self.size();
        if width == 0 {
            return Err(SurfaceError::Missing);
        }

        let scratch = match self.scratch.take() {
            Some(s) if s.width() == width && s.height() == height => s,
            _ => ImageSurface::create(Format::ARgb32, width, height)?,
        };

        {
            let ctx = cairo::Context::new(&scratch)?;
            paint_snapshot(&ctx, (width, height), base, self.background)?;
            let geometry = ShapeGeometry::from_drag(kind, anchor, current);
            render::stroke_geometry(&ctx, &geometry, style)?;
        }

        {
            let ctx = cairo::Context::new(self.live()?)?;
            ctx.set_operator(cairo::Operator::Source);
            ctx.set_source_surface(&scratch, 0.0, 0.0)?;
            ctx.paint()?;
        }

        self.scratch = Some(scratch);
        Ok(())
    }

    /// Rasterizes `text` below `position`, one line per embedded newline.
    pub fn commit_text(
        &mut self,
        position: Point,
        text: &str,
        color: Color,
        font: &FontDescriptor,
    ) -> Result<(), SurfaceError> {
        let ctx = cairo::Context::new(self.live()?)?;
        render::render_text_lines(&ctx, position, text, color, font)?;
        Ok(())
    }

    /// Returns an independent copy of every pixel in the live buffer.
    pub fn capture_snapshot(&self) -> Result<Snapshot, SurfaceError> {
        Ok(Snapshot::capture(self.live()?)?)
    }

    /// Overwrites the live buffer with a snapshot.
    ///
    /// If the snapshot is smaller than the buffer the uncovered area becomes
    /// background-colored; larger snapshots are cropped.
    pub fn restore_snapshot(&mut self, snapshot: &Snapshot) -> Result<(), SurfaceError> {
        let size = self.size();
        let ctx = cairo::Context::new(self.live()?)?;
        paint_snapshot(&ctx, size, snapshot, self.background)?;
        Ok(())
    }
}

fn paint_snapshot(
    ctx: &cairo::Context,
    target_size: (i32, i32),
    snapshot: &Snapshot,
    background: Color,
) -> Result<(), SurfaceError> {
    let (width, height) = target_size;
    if snapshot.width() < width || snapshot.height() < height {
        render::fill_background(ctx, background)?;
    }

    let source = snapshot.to_image_surface()?;
    ctx.save()?;
    ctx.rectangle(
        0.0,
        0.0,
        snapshot.width() as f64,
        snapshot.height() as f64,
    );
    ctx.clip();
    ctx.set_operator(cairo::Operator::Source);
    ctx.set_source_surface(&source, 0.0, 0.0)?;
    let result = ctx.paint();
    ctx.restore()?;
    result?;
    Ok(())
}
