//! Keyboard modifier state tracking.

/// Keyboard modifier state.
///
/// Only Shift matters to the board: it turns Enter into a literal newline
/// while editing text.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Modifiers {
    /// Shift key pressed
    pub shift: bool,
}

impl Modifiers {
    /// Creates a new Modifiers instance with all keys released.
    pub fn new() -> Self {
        Self::default()
    }
}
