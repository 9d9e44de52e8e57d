use ratatui::{
    Frame,
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

use super::{Component, EventResult};
use crate::data::keybindings_data::KeybindingsConfig;
use crate::event::AppKeyEvent;
use crate::state::AppState;
use crate::util::styles::{ERROR_COLOR, HELP_COLOR};

pub struct StatusBar;

impl StatusBar {
    pub fn new() -> Self {
        Self
    }

    fn help_text(keys: &KeybindingsConfig) -> String {
        let g = &keys.global;
        format!(
            "{}-{}: switch plot | {}/{}: next/prev | {}: quit",
            KeybindingsConfig::primary(&g.tab_1),
            KeybindingsConfig::primary(&g.tab_4),
            KeybindingsConfig::primary(&g.next_tab),
            KeybindingsConfig::primary(&g.prev_tab),
            KeybindingsConfig::primary(&g.quit),
        )
    }
}

impl Default for StatusBar {
    fn default() -> Self {
        Self::new()
    }
}

impl Component for StatusBar {
    fn handle_key(&mut self, _key: &AppKeyEvent, _state: &mut AppState) -> EventResult {
        EventResult::NotHandled
    }

    fn render(&mut self, frame: &mut Frame, area: Rect, state: &AppState) {
        let content = if let Some(error) = &state.error_message {
            Line::from(vec![
                Span::styled("Error: ", Style::default().fg(ERROR_COLOR)),
                Span::raw(error.as_str()),
            ])
        } else {
            Line::from(Span::styled(
                Self::help_text(&state.keybindings),
                Style::default().fg(HELP_COLOR),
            ))
        };

        let paragraph = Paragraph::new(content).block(Block::default().borders(Borders::TOP));
        frame.render_widget(paragraph, area);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_help_text_follows_keybindings() {
        let mut keys = KeybindingsConfig::default();
        assert_eq!(
            StatusBar::help_text(&keys),
            "1-4: switch plot | tab/shift+tab: next/prev | q: quit"
        );

        keys.global.quit = vec!["x".into()];
        assert!(StatusBar::help_text(&keys).ends_with("x: quit"));
    }
}
