//! Drawing state machine and input state management.

use crate::config::Config;
use crate::draw::{Color, FontDescriptor, RasterSurface, StrokeStyle, SurfaceError};
use crate::geometry::{Point, Rect};
use crate::history::History;
use crate::input::{
    modifiers::Modifiers,
    settings::{DrawSettings, LineWidth, WhiteboardSettings},
    theme::Theme,
    tool::Tool,
    viewport::Viewport,
};

/// Current drawing mode state machine.
///
/// Tracks whether the user is idle, in the middle of a pointer gesture, or
/// editing text. State transitions occur on pointer and keyboard events.
#[derive(Debug, Clone, PartialEq)]
pub enum DrawingState {
    /// Not actively drawing - waiting for user input
    Idle,
    /// Pointer is held down with a stroke or shape tool
    Drawing {
        /// Which tool is being used for this gesture
        tool: Tool,
        /// Where the pointer went down; fixed for the whole gesture
        anchor: Point,
        /// Latest pointer position
        current: Point,
        /// Paint parameters resolved when the gesture started
        style: StrokeStyle,
        /// Bounds of the last shape preview, for damage tracking
        preview_bounds: Option<Rect>,
    },
    /// Text is being typed at a fixed position
    EditingText {
        /// Top-left corner the text hangs from
        position: Point,
        /// Accumulated text buffer
        buffer: String,
    },
}

/// Read-only view of the gesture in progress.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct GestureState {
    pub active: bool,
    pub anchor: Option<Point>,
    pub current: Option<Point>,
}

/// Main input state containing the whole whiteboard session.
///
/// Owns the raster surface, the undo history, and the tool and board
/// settings. The host feeds pointer and keyboard events in and calls
/// [`render_view`](Self::render_view) whenever `needs_redraw` is set.
pub struct InputState {
    /// The live bitmap
    pub surface: RasterSurface,
    /// Snapshot undo/redo stacks
    pub history: History,
    /// Current tool, mode, and paint parameters
    pub draw_settings: DrawSettings,
    /// Theme, grid, and background
    pub board: WhiteboardSettings,
    /// Zoom and pan applied to incoming pointer positions
    pub viewport: Viewport,
    /// Font used for committed text
    pub font: FontDescriptor,
    /// Current modifier key state
    pub modifiers: Modifiers,
    /// Current drawing mode state machine
    pub state: DrawingState,
    /// Whether the display needs to be redrawn
    pub needs_redraw: bool,
    /// Surface area touched since the host last asked
    pub(crate) damage: Option<Rect>,
}

impl InputState {
    /// Creates an input state with no surface allocated yet.
    ///
    /// The surface is created by the first call to [`resize`](Self::resize);
    /// until then pointer events are ignored.
    pub fn new(
        draw_settings: DrawSettings,
        board: WhiteboardSettings,
        font: FontDescriptor,
        history_capacity: usize,
    ) -> Self {
        Self {
            surface: RasterSurface::new(board.canvas_background),
            history: History::with_capacity(history_capacity),
            draw_settings,
            board,
            viewport: Viewport::default(),
            font,
            modifiers: Modifiers::new(),
            state: DrawingState::Idle,
            needs_redraw: true,
            damage: None,
        }
    }

    /// Builds the initial state from user configuration.
    pub fn from_config(config: &Config) -> Self {
        Self::new(
            DrawSettings::from_config(&config.drawing),
            WhiteboardSettings::from_config(&config.board),
            FontDescriptor::new(config.drawing.font_family.clone(), config.drawing.font_size),
            config.history.max_snapshots,
        )
    }

    /// Resizes the backing surface to match the host viewport.
    ///
    /// The newest snapshot is redisplayed unscaled. The very first allocation
    /// fills the canvas background and records it as the initial history entry.
    /// Resizing never adds to the history.
    pub fn resize(&mut self, width: i32, height: i32) {
        if let Err(err) = self.surface.resize(width, height, self.history.current()) {
            log::warn!("Failed to resize surface to {}x{}: {}", width, height, err);
            return;
        }

        if self.surface.is_allocated() && self.history.is_empty() {
            match self.surface.initialize_blank(self.board.canvas_background) {
                Ok(initial) => {
                    self.history.commit(initial);
                    log::info!("Initialized blank {}x{} canvas", width, height);
                }
                Err(err) => log::warn!("Failed to initialize canvas: {}", err),
            }
        }

        self.mark_full_damage();
        self.needs_redraw = true;
    }

    /// Returns the gesture in progress, if any.
    pub fn gesture(&self) -> GestureState {
        match &self.state {
            DrawingState::Drawing {
                anchor, current, ..
            } => GestureState {
                active: true,
                anchor: Some(*anchor),
                current: Some(*current),
            },
            _ => GestureState::default(),
        }
    }

    /// Maps a host pointer position to surface space, snapping if enabled.
    pub fn map_pointer(&self, client: Point) -> Point {
        let snap = self.board.snap_to_grid.then_some(self.board.grid_size);
        self.viewport.map(client, snap)
    }

    pub fn can_undo(&self) -> bool {
        self.history.can_undo()
    }

    pub fn can_redo(&self) -> bool {
        self.history.can_redo()
    }

    /// Steps back one committed state.
    ///
    /// Pending text is committed first. Returns false when the request is
    /// rejected: nothing to undo, or a stroke is still in progress.
    pub fn undo(&mut self) -> bool {
        if !self.prepare_history_navigation("undo") {
            return false;
        }
        let Some(snapshot) = self.history.undo() else {
            log::debug!("Undo rejected: already at the initial state");
            return false;
        };
        if let Err(err) = self.surface.restore_snapshot(snapshot) {
            log::warn!("Failed to restore snapshot after undo: {}", err);
        }
        log::info!(
            "Undo ({} past, {} future)",
            self.history.past_len(),
            self.history.future_len()
        );
        self.mark_full_damage();
        self.needs_redraw = true;
        true
    }

    /// Re-applies the most recently undone state.
    pub fn redo(&mut self) -> bool {
        if !self.prepare_history_navigation("redo") {
            return false;
        }
        let Some(snapshot) = self.history.redo() else {
            log::debug!("Redo rejected: nothing to redo");
            return false;
        };
        if let Err(err) = self.surface.restore_snapshot(snapshot) {
            log::warn!("Failed to restore snapshot after redo: {}", err);
        }
        log::info!(
            "Redo ({} past, {} future)",
            self.history.past_len(),
            self.history.future_len()
        );
        self.mark_full_damage();
        self.needs_redraw = true;
        true
    }

    fn prepare_history_navigation(&mut self, action: &str) -> bool {
        match self.state {
            DrawingState::Drawing { .. } => {
                log::warn!("Ignoring {} while a gesture is in progress", action);
                false
            }
            DrawingState::EditingText { .. } => {
                self.blur_text();
                true
            }
            DrawingState::Idle => true,
        }
    }

    /// Wipes the canvas to the current background and drops all history.
    ///
    /// Any gesture or pending text is abandoned.
    pub fn clear_canvas(&mut self) {
        self.state = DrawingState::Idle;
        match self.surface.initialize_blank(self.board.canvas_background) {
            Ok(initial) => {
                self.history.reset(initial);
                log::info!("Canvas cleared");
            }
            Err(SurfaceError::Missing) => {
                log::debug!("Clear ignored: surface not allocated yet");
                return;
            }
            Err(err) => {
                log::warn!("Failed to clear canvas: {}", err);
                return;
            }
        }
        self.mark_full_damage();
        self.needs_redraw = true;
    }

    /// Selects a tool. Pending text is committed when leaving the text tool.
    pub fn select_tool(&mut self, tool: Tool) {
        if tool != Tool::Text && matches!(self.state, DrawingState::EditingText { .. }) {
            self.blur_text();
        }
        self.draw_settings.select_tool(tool);
        log::debug!("Selected tool {:?} ({:?})", tool, self.draw_settings.mode);
    }

    pub fn set_color(&mut self, color: Color) {
        self.draw_settings.settings.color = color.with_alpha(1.0);
        self.needs_redraw = true;
    }

    pub fn set_line_width(&mut self, width: LineWidth) {
        self.draw_settings.settings.line_width = width;
    }

    pub fn set_opacity(&mut self, opacity: f64) {
        self.draw_settings.settings.set_opacity(opacity);
    }

    /// Applies a theme. The new background shows up at the next clear.
    pub fn set_theme(&mut self, theme: Theme) {
        self.board.set_theme(theme);
        self.sync_background();
        log::info!("Theme set to {:?}", theme);
    }

    /// Sets the custom canvas background. Committed pixels are not repainted.
    pub fn set_canvas_background(&mut self, color: Color) {
        self.board.canvas_background = color;
        self.sync_background();
    }

    pub fn set_show_grid(&mut self, show: bool) {
        self.board.show_grid = show;
        self.mark_full_damage();
        self.needs_redraw = true;
    }

    pub fn set_snap_to_grid(&mut self, snap: bool) {
        self.board.snap_to_grid = snap;
    }

    pub fn set_grid_size(&mut self, grid_size: u32) {
        self.board.set_grid_size(grid_size);
        if self.board.show_grid {
            self.mark_full_damage();
            self.needs_redraw = true;
        }
    }

    fn sync_background(&mut self) {
        self.surface.set_background(self.board.canvas_background);
        self.mark_full_damage();
        self.needs_redraw = true;
    }

    /// Captures the surface and records it as a new history entry.
    pub(super) fn commit_surface(&mut self, what: &str) {
        match self.surface.capture_snapshot() {
            Ok(snapshot) => {
                self.history.commit(snapshot);
                log::info!(
                    "Committed {} ({} past, {} future)",
                    what,
                    self.history.past_len(),
                    self.history.future_len()
                );
            }
            Err(err) => log::warn!("Failed to capture snapshot for {}: {}", what, err),
        }
        self.needs_redraw = true;
    }

    /// Drains the surface area changed since the last call.
    pub fn take_damage(&mut self) -> Option<Rect> {
        self.damage.take()
    }

    pub(crate) fn mark_damage(&mut self, rect: Option<Rect>) {
        if let Some(rect) = rect {
            self.damage = Some(match self.damage {
                Some(existing) => existing.union(&rect),
                None => rect,
            });
        }
    }

    pub(crate) fn mark_full_damage(&mut self) {
        let (width, height) = self.surface.size();
        self.damage = Rect::new(0, 0, width, height);
    }
}
