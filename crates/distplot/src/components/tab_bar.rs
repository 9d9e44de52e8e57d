use distplot_core::DistributionKind;
use ratatui::{
    Frame,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Tabs},
};

use super::{Component, EventResult};
use crate::data::keybindings_data::KeybindingsConfig;
use crate::event::AppKeyEvent;
use crate::state::AppState;
use crate::util::styles::{FOCUS_COLOR, HELP_COLOR};

/// One tab per distribution plot.
pub struct TabBar;

impl TabBar {
    pub fn new() -> Self {
        Self
    }
}

impl Default for TabBar {
    fn default() -> Self {
        Self::new()
    }
}

impl Component for TabBar {
    fn handle_key(&mut self, key: &AppKeyEvent, state: &mut AppState) -> EventResult {
        let global = &state.keybindings.global;

        let direct = DistributionKind::ALL.iter().copied().find(|kind| {
            global
                .tab(kind.index())
                .is_some_and(|bindings| KeybindingsConfig::matches(key, bindings))
        });
        if let Some(kind) = direct {
            state.switch_tab(kind);
            return EventResult::Handled;
        }

        if KeybindingsConfig::matches(key, &global.next_tab) {
            state.next_tab();
            EventResult::Handled
        } else if KeybindingsConfig::matches(key, &global.prev_tab) {
            state.prev_tab();
            EventResult::Handled
        } else {
            EventResult::NotHandled
        }
    }

    fn render(&mut self, frame: &mut Frame, area: Rect, state: &AppState) {
        let titles: Vec<Line> = state
            .plots
            .iter()
            .enumerate()
            .map(|(idx, plot)| {
                let content = format!("[{}] {}", idx + 1, plot.title());
                if idx == state.active_tab.index() {
                    Line::from(Span::styled(
                        content,
                        Style::default()
                            .fg(FOCUS_COLOR)
                            .add_modifier(Modifier::BOLD),
                    ))
                } else {
                    Line::from(Span::styled(content, Style::default().fg(HELP_COLOR)))
                }
            })
            .collect();

        let tabs = Tabs::new(titles)
            .block(Block::default().borders(Borders::BOTTOM))
            .select(state.active_tab.index())
            .highlight_style(
                Style::default()
                    .fg(FOCUS_COLOR)
                    .add_modifier(Modifier::BOLD),
            );

        frame.render_widget(tabs, area);
    }
}
