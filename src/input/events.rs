//! Generic input event types for host-independent handling.

/// Generic key representation.
///
/// Hosts map their native key codes to these values; only the keys that
/// matter to text editing are distinguished.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    /// Regular character key (letters, digits, symbols, space)
    Char(char),
    /// Escape key
    Escape,
    /// Return/Enter key
    Return,
    /// Backspace key
    Backspace,
    /// Shift modifier
    Shift,
    /// Unmapped or unrecognized key
    Unknown,
}

impl Key {
    /// Parses a key name as used in gesture scripts (`"Return"`, `"a"`, ...).
    pub fn from_name(name: &str) -> Key {
        match name {
            "Escape" | "Esc" => Key::Escape,
            "Return" | "Enter" => Key::Return,
            "BackSpace" | "Backspace" => Key::Backspace,
            "Shift" => Key::Shift,
            "Space" | "space" => Key::Char(' '),
            other => {
                let mut chars = other.chars();
                match (chars.next(), chars.next()) {
                    (Some(c), None) => Key::Char(c),
                    _ => Key::Unknown,
                }
            }
        }
    }
}
