use crate::geometry::Rect;
use crate::input::events::Key;

use super::{DrawingState, InputState};

impl InputState {
    /// Processes a key press event.
    ///
    /// Only text editing consumes keys:
    /// - printable characters append to the buffer
    /// - Backspace removes the last character
    /// - Shift+Enter inserts a newline
    /// - Enter commits the text
    /// - Escape discards it
    pub fn on_key_press(&mut self, key: Key) {
        if key == Key::Shift {
            self.modifiers.shift = true;
            return;
        }

        let DrawingState::EditingText { buffer, .. } = &mut self.state else {
            return;
        };

        match key {
            Key::Char(c) => buffer.push(c),
            Key::Backspace => {
                buffer.pop();
            }
            Key::Return if self.modifiers.shift => buffer.push('\n'),
            Key::Return => {
                self.blur_text();
                return;
            }
            Key::Escape => {
                self.cancel_text();
                return;
            }
            // Ignore other keys in text mode
            _ => return,
        }
        self.needs_redraw = true;
    }

    /// Processes a key release event.
    pub fn on_key_release(&mut self, key: Key) {
        if key == Key::Shift {
            self.modifiers.shift = false;
        }
    }

    /// Appends a whole string to the text being edited.
    ///
    /// Embedded `\n` characters become line breaks. Does nothing outside
    /// a text editing session.
    pub fn type_text(&mut self, text: &str) {
        if let DrawingState::EditingText { buffer, .. } = &mut self.state {
            buffer.push_str(text);
            self.needs_redraw = true;
        }
    }

    /// Ends text editing, committing the buffer unless it is blank.
    ///
    /// Returns true if text was rasterized and a snapshot committed.
    pub fn blur_text(&mut self) -> bool {
        if !matches!(self.state, DrawingState::EditingText { .. }) {
            return false;
        }
        let DrawingState::EditingText { position, buffer } =
            std::mem::replace(&mut self.state, DrawingState::Idle)
        else {
            return false;
        };
        self.needs_redraw = true;

        if buffer.trim().is_empty() {
            log::debug!("Discarding empty text input");
            return false;
        }

        let color = self.draw_settings.settings.paint_color();
        if let Err(err) = self.surface.commit_text(position, &buffer, color, &self.font) {
            log::warn!("Failed to render text: {}", err);
            return false;
        }

        let (width, height) = self.surface.size();
        self.mark_damage(Rect::from_min_max(
            position.x.floor() as i32,
            position.y.floor() as i32,
            width,
            height,
        ));
        self.commit_surface("text");
        true
    }

    /// Abandons the text being edited without touching the surface.
    pub fn cancel_text(&mut self) {
        if matches!(self.state, DrawingState::EditingText { .. }) {
            self.state = DrawingState::Idle;
            self.needs_redraw = true;
            log::debug!("Text input cancelled");
        }
    }

    /// Returns the text being edited with a trailing caret, for previews.
    pub fn text_preview(&self) -> Option<String> {
        match &self.state {
            DrawingState::EditingText { buffer, .. } => {
                let mut preview = buffer.clone();
                preview.push('_');
                Some(preview)
            }
            _ => None,
        }
    }
}
