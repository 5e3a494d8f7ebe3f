//! Pointer-to-surface coordinate mapping under zoom and pan.

use crate::geometry::Point;

/// Smallest and largest zoom factors accepted by [`Viewport::set_scale`].
pub const MIN_SCALE: f64 = 0.1;
pub const MAX_SCALE: f64 = 10.0;

/// Maps a client-space pointer position into surface space.
///
/// `surface = (client - origin) / scale - offset`, applied per axis.
pub fn to_surface_space(client: Point, origin: Point, scale: f64, offset: Point) -> Point {
    Point::new(
        (client.x - origin.x) / scale - offset.x,
        (client.y - origin.y) / scale - offset.y,
    )
}

/// Rounds each coordinate to the nearest multiple of `grid_size`.
pub fn snap_to_grid(point: Point, grid_size: u32) -> Point {
    if grid_size == 0 {
        return point;
    }
    let step = grid_size as f64;
    Point::new(
        (point.x / step).round() * step,
        (point.y / step).round() * step,
    )
}

/// Where the surface sits in the host window and how it is zoomed/panned.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    /// Client-space position of the surface's top-left corner
    pub origin: Point,
    scale: f64,
    /// Pan offset in surface units
    pub offset: Point,
}

impl Default for Viewport {
    fn default() -> Self {
        Self {
            origin: Point::default(),
            scale: 1.0,
            offset: Point::default(),
        }
    }
}

impl Viewport {
    pub fn scale(&self) -> f64 {
        self.scale
    }

    /// Sets the zoom factor, clamped to `[MIN_SCALE, MAX_SCALE]`.
    pub fn set_scale(&mut self, scale: f64) {
        let clamped = if scale.is_finite() {
            scale.clamp(MIN_SCALE, MAX_SCALE)
        } else {
            1.0
        };
        if clamped != scale {
            log::debug!("Zoom {:.3} clamped to {:.3}", scale, clamped);
        }
        self.scale = clamped;
    }

    /// Shifts the pan offset by `(dx, dy)` surface units.
    pub fn pan_by(&mut self, dx: f64, dy: f64) {
        self.offset = Point::new(self.offset.x + dx, self.offset.y + dy);
    }

    /// Maps a client position into surface space, optionally snapping to the grid.
    pub fn map(&self, client: Point, snap: Option<u32>) -> Point {
        let mapped = to_surface_space(client, self.origin, self.scale, self.offset);
        match snap {
            Some(grid_size) => snap_to_grid(mapped, grid_size),
            None => mapped,
        }
    }
}
