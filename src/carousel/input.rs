//! Keyboard input as the carousel understands it.

use crossterm::event::KeyCode;

/// A key press delivered to an indicator or to the hosting surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    Enter,
    Space,
    Left,
    Right,
    Tab,
    BackTab,
    Escape,
    Char(char),
    Other,
}

impl Key {
    /// Whether this key commits or selects the focused indicator.
    pub fn is_activation(self) -> bool {
        matches!(self, Key::Enter | Key::Space)
    }

    /// Map a DOM-style key name (`"Enter"`, `" "`, `"ArrowLeft"`, ...).
    pub fn from_name(name: &str) -> Self {
        match name {
            "Enter" => Key::Enter,
            " " | "Space" | "Spacebar" => Key::Space,
            "ArrowLeft" | "Left" => Key::Left,
            "ArrowRight" | "Right" => Key::Right,
            "Tab" => Key::Tab,
            "Escape" | "Esc" => Key::Escape,
            other => {
                let mut chars = other.chars();
                match (chars.next(), chars.next()) {
                    (Some(c), None) => Key::Char(c),
                    _ => Key::Other,
                }
            }
        }
    }
}

impl From<KeyCode> for Key {
    fn from(code: KeyCode) -> Self {
        match code {
            KeyCode::Enter => Key::Enter,
            KeyCode::Char(' ') => Key::Space,
            KeyCode::Char(c) => Key::Char(c),
            KeyCode::Left => Key::Left,
            KeyCode::Right => Key::Right,
            KeyCode::Tab => Key::Tab,
            KeyCode::BackTab => Key::BackTab,
            KeyCode::Esc => Key::Escape,
            _ => Key::Other,
        }
    }
}
