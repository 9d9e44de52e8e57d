//! Keybindings matching utilities.
//!
//! Provides functions to convert an AppKeyEvent to its string representation,
//! and to check if a key event matches configured bindings.

use std::path::Path;

use crate::data::keybindings_data::KeybindingsConfig;
use crate::event::{AppKeyEvent, KeyCode};

impl KeybindingsConfig {
    /// Convert an AppKeyEvent to our string format.
    ///
    /// Examples:
    /// - KeyCode::Char('a') with no modifiers -> "a"
    /// - KeyCode::Char('c') with ctrl -> "ctrl+c"
    /// - KeyCode::Char('L') with shift -> "shift+l"
    /// - KeyCode::Left with shift -> "shift+left"
    /// - KeyCode::BackTab -> "shift+tab"
    pub fn app_key_to_string(key: &AppKeyEvent) -> String {
        let mut parts = Vec::new();

        if key.ctrl {
            parts.push("ctrl");
        }
        if key.alt {
            parts.push("alt");
        }

        let key_str = match &key.code {
            KeyCode::Char(c) => {
                // Some terminals report Shift on letters only through the case
                if c.is_uppercase() || (key.shift && !c.is_alphabetic()) {
                    parts.push("shift");
                }
                c.to_lowercase().to_string()
            }
            KeyCode::Enter => "enter".to_string(),
            KeyCode::Tab => {
                if key.shift {
                    parts.push("shift");
                }
                "tab".to_string()
            }
            KeyCode::BackTab => {
                parts.push("shift");
                "tab".to_string()
            }
            KeyCode::Backspace => "backspace".to_string(),
            KeyCode::Delete => "delete".to_string(),
            KeyCode::Esc => "esc".to_string(),
            KeyCode::Up | KeyCode::Down | KeyCode::Left | KeyCode::Right => {
                if key.shift {
                    parts.push("shift");
                }
                match key.code {
                    KeyCode::Up => "up",
                    KeyCode::Down => "down",
                    KeyCode::Left => "left",
                    _ => "right",
                }
                .to_string()
            }
            KeyCode::Home => "home".to_string(),
            KeyCode::End => "end".to_string(),
            KeyCode::PageUp => "pageup".to_string(),
            KeyCode::PageDown => "pagedown".to_string(),
            KeyCode::F(n) => format!("f{}", n),
            _ => return String::new(),
        };

        parts.push(&key_str);
        parts.join("+")
    }

    /// Check if an AppKeyEvent matches any of the configured bindings.
    pub fn matches(key: &AppKeyEvent, bindings: &[String]) -> bool {
        let key_str = Self::app_key_to_string(key);
        if key_str.is_empty() {
            return false;
        }
        bindings.iter().any(|b| b.eq_ignore_ascii_case(&key_str))
    }

    /// First binding of an action, for help text.
    pub fn primary(bindings: &[String]) -> &str {
        bindings.first().map(String::as_str).unwrap_or("?")
    }

    /// Get the keybindings file path
    pub fn path(data_dir: &Path) -> std::path::PathBuf {
        data_dir.join("keybindings.yaml")
    }

    /// Load keybindings from file, returning defaults if the file doesn't exist or fails to parse.
    ///
    /// A file that exists but can't be used also yields a message for the status bar.
    pub fn load_or_default(data_dir: &Path) -> (Self, Option<String>) {
        let path = Self::path(data_dir);
        if !path.exists() {
            return (Self::default(), None);
        }

        let content = match std::fs::read_to_string(&path) {
            Ok(content) => content,
            Err(e) => {
                tracing::warn!(path = %path.display(), error = %e, "Could not read keybindings file, using defaults");
                let message = format!("Could not read {}, using default keys", path.display());
                return (Self::default(), Some(message));
            }
        };

        match serde_saphyr::from_str(&content) {
            Ok(config) => (config, None),
            Err(e) => {
                tracing::warn!(path = %path.display(), error = %e, "Invalid keybindings file, using defaults");
                let message = format!("Invalid {}, using default keys", path.display());
                (Self::default(), Some(message))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_key(code: KeyCode, ctrl: bool, alt: bool, shift: bool) -> AppKeyEvent {
        AppKeyEvent {
            code,
            ctrl,
            alt,
            shift,
        }
    }

    #[test]
    fn test_key_to_string_basic() {
        let key = make_key(KeyCode::Char('r'), false, false, false);
        assert_eq!(KeybindingsConfig::app_key_to_string(&key), "r");
    }

    #[test]
    fn test_key_to_string_ctrl() {
        let key = make_key(KeyCode::Char('c'), true, false, false);
        assert_eq!(KeybindingsConfig::app_key_to_string(&key), "ctrl+c");
    }

    #[test]
    fn test_key_to_string_shift() {
        let key = make_key(KeyCode::Char('L'), false, false, true);
        assert_eq!(KeybindingsConfig::app_key_to_string(&key), "shift+l");

        let key = make_key(KeyCode::Char('H'), false, false, false);
        assert_eq!(KeybindingsConfig::app_key_to_string(&key), "shift+h");

        let key = make_key(KeyCode::Right, false, false, true);
        assert_eq!(KeybindingsConfig::app_key_to_string(&key), "shift+right");
    }

    #[test]
    fn test_key_to_string_tabs() {
        let key = make_key(KeyCode::Tab, false, false, false);
        assert_eq!(KeybindingsConfig::app_key_to_string(&key), "tab");

        let key = make_key(KeyCode::BackTab, false, false, true);
        assert_eq!(KeybindingsConfig::app_key_to_string(&key), "shift+tab");
    }

    #[test]
    fn test_matches() {
        let bindings = KeybindingsConfig::default().sliders.down;
        let key = make_key(KeyCode::Char('j'), false, false, false);
        assert!(KeybindingsConfig::matches(&key, &bindings));

        let key = make_key(KeyCode::Down, false, false, false);
        assert!(KeybindingsConfig::matches(&key, &bindings));

        let key = make_key(KeyCode::Down, false, false, true);
        assert!(!KeybindingsConfig::matches(&key, &bindings));
    }

    #[test]
    fn test_load_or_default_handles_missing_and_partial_files() {
        let dir = tempfile::tempdir().unwrap();
        let (loaded, warning) = KeybindingsConfig::load_or_default(dir.path());
        assert_eq!(loaded.global.quit, vec!["q", "ctrl+c"]);
        assert!(warning.is_none());

        std::fs::write(
            KeybindingsConfig::path(dir.path()),
            "sliders:\n  reset: [\"0\"]\n",
        )
        .unwrap();
        let (loaded, warning) = KeybindingsConfig::load_or_default(dir.path());
        assert_eq!(loaded.sliders.reset, vec!["0"]);
        assert_eq!(loaded.sliders.up, vec!["k", "up"]);
        assert!(warning.is_none());
    }

    #[test]
    fn test_malformed_file_falls_back_to_defaults() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(KeybindingsConfig::path(dir.path()), "global: [oops").unwrap();
        let (loaded, warning) = KeybindingsConfig::load_or_default(dir.path());
        assert_eq!(loaded.global.quit, vec!["q", "ctrl+c"]);
        let warning = warning.unwrap();
        assert!(warning.starts_with("Invalid "), "{warning}");
        assert!(warning.contains("keybindings.yaml"), "{warning}");
    }
}
