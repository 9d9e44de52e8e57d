//! Keyboard event abstraction.
//!
//! Components match keys through [`AppKeyEvent`] so keybinding lookups work
//! on a flattened set of modifier flags instead of crossterm's bitflags.

pub use crossterm::event::KeyCode;

/// Key press with its modifiers split out.
#[derive(Debug, Clone)]
pub struct AppKeyEvent {
    pub code: KeyCode,
    pub ctrl: bool,
    pub alt: bool,
    pub shift: bool,
}

impl AppKeyEvent {
    pub fn new(code: KeyCode) -> Self {
        Self {
            code,
            ctrl: false,
            alt: false,
            shift: false,
        }
    }

    pub fn with_ctrl(mut self) -> Self {
        self.ctrl = true;
        self
    }

    pub fn with_shift(mut self) -> Self {
        self.shift = true;
        self
    }
}

impl From<crossterm::event::KeyEvent> for AppKeyEvent {
    fn from(event: crossterm::event::KeyEvent) -> Self {
        use crossterm::event::KeyModifiers;
        Self {
            code: event.code,
            ctrl: event.modifiers.contains(KeyModifiers::CONTROL),
            alt: event.modifiers.contains(KeyModifiers::ALT),
            shift: event.modifiers.contains(KeyModifiers::SHIFT),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyEvent, KeyModifiers};

    #[test]
    fn test_from_crossterm_splits_modifiers() {
        let event = KeyEvent::new(KeyCode::Left, KeyModifiers::SHIFT | KeyModifiers::CONTROL);
        let key = AppKeyEvent::from(event);
        assert!(key.shift && key.ctrl && !key.alt);

        let plain = AppKeyEvent::new(KeyCode::Char('q'));
        assert!(!plain.ctrl && !plain.alt && !plain.shift);
    }
}
