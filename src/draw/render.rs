//! Cairo-based stroke, text, and overlay primitives.
//!
//! Every function takes its paint parameters explicitly and wraps its work in
//! `save`/`restore`, so no operator, alpha, or width survives past the call.

use super::color::Color;
use super::font::FontDescriptor;
use crate::geometry::{Point, ShapeGeometry};

/// How a stroke combines with the pixels already on the surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Composite {
    /// Standard alpha blending (source-over)
    Blend,
    /// Destructive: covered pixels become transparent
    Erase,
}

impl Composite {
    fn operator(self) -> cairo::Operator {
        match self {
            Composite::Blend => cairo::Operator::Over,
            Composite::Erase => cairo::Operator::Clear,
        }
    }
}

/// Fully resolved paint parameters for one stroke primitive.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StrokeStyle {
    /// Stroke color with the tool opacity already folded into alpha
    pub color: Color,
    /// Line width in surface pixels
    pub width: f64,
    pub composite: Composite,
}

fn apply_stroke_style(ctx: &cairo::Context, style: &StrokeStyle) {
    let c = style.color;
    ctx.set_source_rgba(c.r, c.g, c.b, c.a);
    ctx.set_operator(style.composite.operator());
    ctx.set_line_width(style.width);
    ctx.set_line_cap(cairo::LineCap::Round);
    ctx.set_line_join(cairo::LineJoin::Round);
}

/// Fills the whole target with a solid color, replacing whatever was there.
pub fn fill_background(ctx: &cairo::Context, color: Color) -> Result<(), cairo::Error> {
    ctx.save()?;
    ctx.set_operator(cairo::Operator::Source);
    ctx.set_source_rgba(color.r, color.g, color.b, color.a);
    let result = ctx.paint();
    ctx.restore()?;
    result
}

/// Strokes a round-capped segment. `from == to` leaves a dot.
pub fn stroke_segment(
    ctx: &cairo::Context,
    from: Point,
    to: Point,
    style: &StrokeStyle,
) -> Result<(), cairo::Error> {
    ctx.save()?;
    apply_stroke_style(ctx, style);
    ctx.new_path();
    ctx.move_to(from.x, from.y);
    ctx.line_to(to.x, to.y);
    let result = ctx.stroke();
    ctx.restore()?;
    result
}

/// Strokes a resolved line, rectangle, or circle outline.
pub fn stroke_geometry(
    ctx: &cairo::Context,
    geometry: &ShapeGeometry,
    style: &StrokeStyle,
) -> Result<(), cairo::Error> {
    ctx.save()?;
    apply_stroke_style(ctx, style);
    ctx.new_path();
    geometry.append_path(ctx);
    let result = ctx.stroke();
    ctx.restore()?;
    result
}

/// Renders text as stacked single lines using Pango.
///
/// The first baseline sits one font size below `position`; each `\n` starts a
/// new line one line-height further down. No wrapping is performed.
pub fn render_text_lines(
    ctx: &cairo::Context,
    position: Point,
    text: &str,
    color: Color,
    font: &FontDescriptor,
) -> Result<(), cairo::Error> {
    ctx.save()?;
    ctx.set_operator(cairo::Operator::Over);
    ctx.set_source_rgba(color.r, color.g, color.b, color.a);

    let layout = pangocairo::functions::create_layout(ctx);
    layout.set_font_description(Some(&font.to_pango()));

    for (index, line) in text.split('\n').enumerate() {
        if line.is_empty() {
            continue;
        }
        layout.set_text(line);
        // Pango positions layouts by their top edge; shift so the baseline lands on target.
        let baseline = layout.baseline() as f64 / pango::SCALE as f64;
        let baseline_y = position.y + font.size_px + index as f64 * font.line_height();
        ctx.move_to(position.x, baseline_y - baseline);
        pangocairo::functions::show_layout(ctx, &layout);
    }

    ctx.restore()
}

/// Draws 1px grid lines every `grid_size` pixels across a `width`×`height` area.
pub fn render_grid(
    ctx: &cairo::Context,
    width: i32,
    height: i32,
    grid_size: u32,
    color: Color,
) -> Result<(), cairo::Error> {
    if grid_size == 0 {
        return Ok(());
    }
    ctx.save()?;
    ctx.set_operator(cairo::Operator::Over);
    ctx.set_source_rgba(color.r, color.g, color.b, color.a);
    ctx.set_line_width(1.0);
    ctx.new_path();

    let step = grid_size as usize;
    for x in (0..=width.max(0)).step_by(step) {
        ctx.move_to(x as f64 + 0.5, 0.0);
        ctx.line_to(x as f64 + 0.5, height as f64);
    }
    for y in (0..=height.max(0)).step_by(step) {
        ctx.move_to(0.0, y as f64 + 0.5);
        ctx.line_to(width as f64, y as f64 + 0.5);
    }

    let result = ctx.stroke();
    ctx.restore()?;
    result
}
