//! Point and shape geometry shared by the raster surface and the input state machine.
//!
//! This module provides:
//! - [`Point`]: surface-space coordinates
//! - [`ShapeGeometry`]: resolved line/rectangle/circle paths built from a drag
//! - [`Rect`]: integer pixel bounds with stroke padding helpers

// ============================================================================
// Points
// ============================================================================

/// A position in surface space (after viewport mapping).
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Euclidean distance between two points.
    pub fn distance(self, other: Point) -> f64 {
        let dx = other.x - self.x;
        let dy = other.y - self.y;
        (dx * dx + dy * dy).sqrt()
    }

    /// Component-wise difference `self - other`.
    pub fn sub(self, other: Point) -> Point {
        Point::new(self.x - other.x, self.y - other.y)
    }
}

// ============================================================================
// Shape Geometry
// ============================================================================

/// Shape tools that are previewed against the last committed snapshot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShapeKind {
    Line,
    Rectangle,
    Circle,
}

/// A fully resolved shape outline, ready to be turned into a Cairo path.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ShapeGeometry {
    /// Straight segment from anchor to current point
    Segment { from: Point, to: Point },
    /// Axis-aligned rectangle, normalized to non-negative width/height
    Rect {
        x: f64,
        y: f64,
        width: f64,
        height: f64,
    },
    /// Circle centered on the anchor
    Circle { center: Point, radius: f64 },
}

impl ShapeGeometry {
    /// Builds the outline for `kind` from the drag anchor and the current pointer.
    ///
    /// Rectangles use anchor/current as opposite corners regardless of drag
    /// direction. Circles are centered on the anchor with the radius equal to
    /// the distance to the current point.
    pub fn from_drag(kind: ShapeKind, anchor: Point, current: Point) -> Self {
        match kind {
            ShapeKind::Line => ShapeGeometry::Segment {
                from: anchor,
                to: current,
            },
            ShapeKind::Rectangle => {
                let (x, width) = if current.x >= anchor.x {
                    (anchor.x, current.x - anchor.x)
                } else {
                    (current.x, anchor.x - current.x)
                };
                let (y, height) = if current.y >= anchor.y {
                    (anchor.y, current.y - anchor.y)
                } else {
                    (current.y, anchor.y - current.y)
                };
                ShapeGeometry::Rect {
                    x,
                    y,
                    width,
                    height,
                }
            }
            ShapeKind::Circle => ShapeGeometry::Circle {
                center: anchor,
                radius: anchor.distance(current),
            },
        }
    }

    /// Appends this outline to the current path of `ctx`.
    pub fn append_path(&self, ctx: &cairo::Context) {
        match *self {
            ShapeGeometry::Segment { from, to } => {
                ctx.move_to(from.x, from.y);
                ctx.line_to(to.x, to.y);
            }
            ShapeGeometry::Rect {
                x,
                y,
                width,
                height,
            } => ctx.rectangle(x, y, width, height),
            ShapeGeometry::Circle { center, radius } => {
                ctx.new_sub_path();
                ctx.arc(center.x, center.y, radius, 0.0, 2.0 * std::f64::consts::PI);
            }
        }
    }

    /// Returns the pixel bounds of the stroked outline.
    pub fn bounding_box(&self, line_width: f64) -> Option<Rect> {
        let (min_x, min_y, max_x, max_y) = match *self {
            ShapeGeometry::Segment { from, to } => (
                from.x.min(to.x),
                from.y.min(to.y),
                from.x.max(to.x),
                from.y.max(to.y),
            ),
            ShapeGeometry::Rect {
                x,
                y,
                width,
                height,
            } => (x, y, x + width, y + height),
            ShapeGeometry::Circle { center, radius } => (
                center.x - radius,
                center.y - radius,
                center.x + radius,
                center.y + radius,
            ),
        };
        let padding = stroke_padding(line_width) as f64;
        ensure_positive_rect_f64(
            min_x - padding,
            min_y - padding,
            max_x + padding,
            max_y + padding,
        )
    }
}

fn stroke_padding(line_width: f64) -> i32 {
    let padding = (line_width / 2.0).ceil() as i32;
    padding.max(1)
}

/// Bounding box of a polyline expanded to cover the stroke width.
pub fn bounding_box_for_points(points: &[Point], line_width: f64) -> Option<Rect> {
    let first = points.first()?;
    let mut min_x = first.x;
    let mut max_x = first.x;
    let mut min_y = first.y;
    let mut max_y = first.y;

    for p in &points[1..] {
        min_x = min_x.min(p.x);
        max_x = max_x.max(p.x);
        min_y = min_y.min(p.y);
        max_y = max_y.max(p.y);
    }

    let padding = stroke_padding(line_width) as f64;
    ensure_positive_rect_f64(
        min_x - padding,
        min_y - padding,
        max_x + padding,
        max_y + padding,
    )
}

// ============================================================================
// Pixel Rectangles
// ============================================================================

/// Axis-aligned integer rectangle in surface pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rect {
    pub x: i32,
    pub y: i32,
    pub width: i32,
    pub height: i32,
}

impl Rect {
    /// Creates a new rectangle. Width/height must be positive.
    pub fn new(x: i32, y: i32, width: i32, height: i32) -> Option<Self> {
        if width <= 0 || height <= 0 {
            None
        } else {
            Some(Self {
                x,
                y,
                width,
                height,
            })
        }
    }

    /// Builds a rectangle from min/max bounds (inclusive min, exclusive max).
    pub fn from_min_max(min_x: i32, min_y: i32, max_x: i32, max_y: i32) -> Option<Self> {
        Self::new(
            min_x,
            min_y,
            max_x.saturating_sub(min_x),
            max_y.saturating_sub(min_y),
        )
    }

    /// Returns true if the pixel `(px, py)` lies inside the rectangle.
    pub fn contains(&self, px: i32, py: i32) -> bool {
        px >= self.x
            && py >= self.y
            && px < self.x.saturating_add(self.width)
            && py < self.y.saturating_add(self.height)
    }

    /// Smallest rectangle covering both `self` and `other`.
    pub fn union(&self, other: &Rect) -> Rect {
        let min_x = self.x.min(other.x);
        let min_y = self.y.min(other.y);
        let max_x = self
            .x
            .saturating_add(self.width)
            .max(other.x.saturating_add(other.width));
        let max_y = self
            .y
            .saturating_add(self.height)
            .max(other.y.saturating_add(other.height));
        Rect {
            x: min_x,
            y: min_y,
            width: max_x.saturating_sub(min_x),
            height: max_y.saturating_sub(min_y),
        }
    }
}

/// Largest coordinate magnitude a damage rectangle may carry; far-off points
/// are pulled in so that widths never overflow `i32`.
const COORD_LIMIT: f64 = (i32::MAX / 4) as f64;

fn to_pixel(value: f64) -> i32 {
    value.clamp(-COORD_LIMIT, COORD_LIMIT) as i32
}

fn ensure_positive_rect_f64(min_x: f64, min_y: f64, max_x: f64, max_y: f64) -> Option<Rect> {
    let min_x = to_pixel(min_x.floor());
    let min_y = to_pixel(min_y.floor());
    let mut max_x = to_pixel(max_x.ceil());
    let mut max_y = to_pixel(max_y.ceil());
    if min_x == max_x {
        max_x += 1;
    }
    if min_y == max_y {
        max_y += 1;
    }
    Rect::from_min_max(min_x, min_y, max_x, max_y)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn distance_is_euclidean() {
        let a = Point::new(0.0, 0.0);
        let b = Point::new(3.0, 4.0);
        assert_eq!(a.distance(b), 5.0);
        assert_eq!(b.distance(a), 5.0);
    }

    #[test]
    fn rectangle_normalizes_any_drag_direction() {
        let geometry = ShapeGeometry::from_drag(
            ShapeKind::Rectangle,
            Point::new(50.0, 40.0),
            Point::new(10.0, 60.0),
        );
        assert_eq!(
            geometry,
            ShapeGeometry::Rect {
                x: 10.0,
                y: 40.0,
                width: 40.0,
                height: 20.0
            }
        );
    }

    #[test]
    fn circle_is_centered_on_anchor() {
        let geometry = ShapeGeometry::from_drag(
            ShapeKind::Circle,
            Point::new(100.0, 100.0),
            Point::new(106.0, 108.0),
        );
        assert_eq!(
            geometry,
            ShapeGeometry::Circle {
                center: Point::new(100.0, 100.0),
                radius: 10.0
            }
        );
    }

    #[test]
    fn line_bounding_box_covers_stroke() {
        let geometry = ShapeGeometry::from_drag(
            ShapeKind::Line,
            Point::new(50.0, 40.0),
            Point::new(70.0, 90.0),
        );
        let rect = geometry.bounding_box(4.0).expect("line should have bounds");
        assert_eq!(rect, Rect::new(48, 38, 24, 54).unwrap());
    }

    #[test]
    fn circle_bounding_box_includes_radius_and_stroke() {
        let geometry = ShapeGeometry::Circle {
            center: Point::new(200.0, 150.0),
            radius: 40.0,
        };
        let rect = geometry.bounding_box(2.0).unwrap();
        assert_eq!(rect, Rect::new(159, 109, 82, 82).unwrap());
    }

    #[test]
    fn degenerate_point_still_has_area() {
        let rect = bounding_box_for_points(&[Point::new(10.0, 20.0)], 1.0).unwrap();
        assert!(rect.width > 0 && rect.height > 0);
        assert!(rect.contains(10, 20));
        assert!(bounding_box_for_points(&[], 3.0).is_none());
    }

    #[test]
    fn union_covers_both_rects() {
        let a = Rect::new(10, 10, 20, 5).unwrap();
        let b = Rect::new(0, 12, 5, 30).unwrap();
        assert_eq!(a.union(&b), Rect::new(0, 10, 30, 32).unwrap());
        assert_eq!(a.union(&a), a);
    }

    #[test]
    fn far_away_points_still_give_a_bounded_rect() {
        let rect =
            bounding_box_for_points(&[Point::new(-3e9, 10.0), Point::new(50.0, 10.0)], 3.0)
                .unwrap();
        assert!(rect.x < -1_000_000);
        assert!(rect.width > 0);
        assert!(rect.contains(50, 10));

        let huge = Rect::new(i32::MIN, 0, i32::MAX, 1).unwrap();
        let right = Rect::new(i32::MAX - 1, 0, 1, 1).unwrap();
        let merged = huge.union(&right);
        assert_eq!(merged.x, i32::MIN);
        assert_eq!(merged.width, i32::MAX);
    }
}
