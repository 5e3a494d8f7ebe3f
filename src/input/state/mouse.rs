use crate::geometry::{Point, ShapeGeometry, bounding_box_for_points};
use crate::input::tool::Tool;
use log::{debug, warn};

use super::{DrawingState, InputState};

impl InputState {
    /// Processes a pointer press at client position `client`.
    ///
    /// # Behavior
    /// - Text tool: opens a text editing session at the press point
    /// - Pen/Eraser: starts a stroke and paints a dot immediately
    /// - Line/Rectangle/Circle: starts a shape anchored at the press point
    ///
    /// Pending text is committed before anything else happens. Presses that
    /// arrive before the surface exists are ignored.
    pub fn on_pointer_down(&mut self, client: Point) {
        if matches!(self.state, DrawingState::EditingText { .. }) {
            self.blur_text();
        }
        if !matches!(self.state, DrawingState::Idle) {
            debug!("Pointer down ignored: gesture already active");
            return;
        }
        if !self.surface.is_allocated() {
            warn!("Pointer down ignored: surface not allocated yet");
            return;
        }

        let point = self.map_pointer(client);
        let tool = self.draw_settings.tool;

        if tool == Tool::Text {
            self.state = DrawingState::EditingText {
                position: point,
                buffer: String::new(),
            };
            self.needs_redraw = true;
            debug!("Editing text at ({:.1}, {:.1})", point.x, point.y);
            return;
        }

        let style = self.draw_settings.stroke_style(tool);
        if tool.is_freehand() {
            if let Err(err) = self.surface.paint_segment(point, point, &style) {
                warn!("Failed to start {:?} stroke: {}", tool, err);
                return;
            }
            self.mark_damage(bounding_box_for_points(&[point], style.width));
        }

        self.state = DrawingState::Drawing {
            tool,
            anchor: point,
            current: point,
            style,
            preview_bounds: None,
        };
        self.needs_redraw = true;
        debug!("{:?} gesture started at ({:.1}, {:.1})", tool, point.x, point.y);
    }

    /// Processes pointer motion at client position `client`.
    ///
    /// # Behavior
    /// - Pen/Eraser: paints the segment from the previous position
    /// - Shape tools: repaints the preview from the last committed snapshot
    /// - Idle or editing text: ignored
    pub fn on_pointer_move(&mut self, client: Point) {
        let point = self.map_pointer(client);
        let DrawingState::Drawing {
            tool,
            anchor,
            current,
            style,
            preview_bounds,
        } = &mut self.state
        else {
            return;
        };

        let damage = if let Some(kind) = tool.shape_kind() {
            let Some(base) = self.history.current() else {
                return;
            };
            if let Err(err) =
                self.surface
                    .render_shape_preview(kind, *anchor, point, style, base)
            {
                warn!("Failed to render {:?} preview: {}", tool, err);
                return;
            }
            let bounds = ShapeGeometry::from_drag(kind, *anchor, point).bounding_box(style.width);
            let previous = std::mem::replace(preview_bounds, bounds);
            match (previous, bounds) {
                (Some(prev), Some(next)) => Some(prev.union(&next)),
                (prev, next) => prev.or(next),
            }
        } else {
            if let Err(err) = self.surface.paint_segment(*current, point, style) {
                warn!("Failed to paint {:?} segment: {}", tool, err);
                return;
            }
            bounding_box_for_points(&[*current, point], style.width)
        };

        *current = point;
        self.mark_damage(damage);
        self.needs_redraw = true;
    }

    /// Finishes the active gesture and commits the result to history.
    ///
    /// Shape tools are stroked one final time through the preview path, so the
    /// committed pixels match the last preview exactly. Without an active
    /// gesture this does nothing.
    pub fn on_pointer_up(&mut self) {
        if !matches!(self.state, DrawingState::Drawing { .. }) {
            return;
        }
        let DrawingState::Drawing {
            tool,
            anchor,
            current,
            style,
            ..
        } = std::mem::replace(&mut self.state, DrawingState::Idle)
        else {
            return;
        };

        if let Some(kind) = tool.shape_kind() {
            let Some(base) = self.history.current() else {
                return;
            };
            if let Err(err) = self
                .surface
                .render_shape_preview(kind, anchor, current, &style, base)
            {
                warn!("Failed to finalize {:?}: {}", tool, err);
                return;
            }
            let bounds = ShapeGeometry::from_drag(kind, anchor, current).bounding_box(style.width);
            self.mark_damage(bounds);
        }

        self.commit_surface(tool.name());
    }

    /// The pointer left the surface; finishes the gesture exactly like a release.
    pub fn on_pointer_leave(&mut self) {
        self.on_pointer_up();
    }
}
