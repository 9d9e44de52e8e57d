//! Slider panel: one row per parameter of the active plot.
//!
//! ```text
//! ▶ Mean (μ)      ━━━━━━━━━━━━━━━━━━●──────────────   1.00  [-5.00, 5.00]
//!   Std Dev (σ)   ━━━●─────────────────────────────   1.00  [0.10, 5.00]
//! ```

use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
};

use super::{Component, EventResult};
use crate::data::keybindings_data::KeybindingsConfig;
use crate::event::AppKeyEvent;
use crate::state::AppState;
use crate::util::format::{format_range, format_value};
use crate::util::styles::{
    FOCUS_COLOR, HEADER_COLOR, HELP_COLOR, SLIDER_FILL_COLOR, focused_block_with_help,
    slider_label_style,
};

const FILLED: &str = "━";
const EMPTY: &str = "─";
const THUMB: &str = "●";

/// Steps moved by the coarse bindings
pub const COARSE_STEPS: i32 = 10;

const LABEL_WIDTH: u16 = 16;
const VALUE_WIDTH: u16 = 24;

/// Thumb column for a slider `width` cells wide at position `fraction`.
pub fn thumb_position(fraction: f64, width: usize) -> usize {
    if width == 0 {
        return 0;
    }
    let fraction = if fraction.is_nan() {
        0.0
    } else {
        fraction.clamp(0.0, 1.0)
    };
    (fraction * (width - 1) as f64).round() as usize
}

fn track(fraction: f64, width: usize, selected: bool) -> Line<'static> {
    if width == 0 {
        return Line::default();
    }
    let thumb = thumb_position(fraction, width);
    let thumb_style = if selected {
        Style::default()
            .fg(FOCUS_COLOR)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default()
    };
    Line::from(vec![
        Span::styled(FILLED.repeat(thumb), Style::default().fg(SLIDER_FILL_COLOR)),
        Span::styled(THUMB, thumb_style),
        Span::styled(
            EMPTY.repeat(width - thumb - 1),
            Style::default().fg(HELP_COLOR),
        ),
    ])
}

pub struct SliderPanel;

impl SliderPanel {
    pub fn new() -> Self {
        Self
    }

    /// Rows needed to show `controls` sliders, borders included
    pub fn height(controls: usize) -> u16 {
        controls as u16 + 2
    }

    fn help_text(keys: &KeybindingsConfig) -> String {
        let s = &keys.sliders;
        format!(
            "{}/{}: select  {}/{}: adjust  {}/{}: coarse  {}: reset",
            KeybindingsConfig::primary(&s.up),
            KeybindingsConfig::primary(&s.down),
            KeybindingsConfig::primary(&s.decrease),
            KeybindingsConfig::primary(&s.increase),
            KeybindingsConfig::primary(&s.decrease_coarse),
            KeybindingsConfig::primary(&s.increase_coarse),
            KeybindingsConfig::primary(&s.reset),
        )
    }
}

impl Default for SliderPanel {
    fn default() -> Self {
        Self::new()
    }
}

impl Component for SliderPanel {
    fn handle_key(&mut self, key: &AppKeyEvent, state: &mut AppState) -> EventResult {
        let s = &state.keybindings.sliders;

        // Coarse bindings first so "shift+left" never falls through to "left"
        if KeybindingsConfig::matches(key, &s.decrease_coarse) {
            state.adjust_selected(-COARSE_STEPS);
        } else if KeybindingsConfig::matches(key, &s.increase_coarse) {
            state.adjust_selected(COARSE_STEPS);
        } else if KeybindingsConfig::matches(key, &s.decrease) {
            state.adjust_selected(-1);
        } else if KeybindingsConfig::matches(key, &s.increase) {
            state.adjust_selected(1);
        } else if KeybindingsConfig::matches(key, &s.up) {
            state.select_prev_control();
        } else if KeybindingsConfig::matches(key, &s.down) {
            state.select_next_control();
        } else if KeybindingsConfig::matches(key, &s.reset) {
            state.reset_active();
        } else {
            return EventResult::NotHandled;
        }
        EventResult::Handled
    }

    fn render(&mut self, frame: &mut Frame, area: Rect, state: &AppState) {
        let block = focused_block_with_help(
            " Parameters ",
            true,
            &Self::help_text(&state.keybindings),
        );
        let inner = block.inner(area);
        frame.render_widget(block, area);

        let plot = state.active_plot();
        let controls = plot.controls();
        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints(vec![Constraint::Length(1); controls.len()])
            .split(inner);

        for (idx, (control, row)) in controls.iter().zip(rows.iter()).enumerate() {
            let selected = idx == state.selected();
            let cols = Layout::default()
                .direction(Direction::Horizontal)
                .constraints([
                    Constraint::Length(LABEL_WIDTH),
                    Constraint::Min(4),
                    Constraint::Length(VALUE_WIDTH),
                ])
                .split(*row);

            let marker = if selected { "▶ " } else { "  " };
            let label = Paragraph::new(Line::from(vec![
                Span::styled(marker, Style::default().fg(FOCUS_COLOR)),
                Span::styled(control.label(), slider_label_style(selected)),
            ]));
            frame.render_widget(label, cols[0]);

            let width = cols[1].width as usize;
            frame.render_widget(
                Paragraph::new(track(control.fraction(), width, selected)),
                cols[1],
            );

            let spec = control.spec();
            let value = Paragraph::new(Line::from(vec![
                Span::styled(
                    format!("{:>7}", format_value(control.value())),
                    slider_label_style(selected),
                ),
                Span::raw("  "),
                Span::styled(
                    format_range(spec.min, spec.max),
                    Style::default().fg(HEADER_COLOR),
                ),
            ]));
            frame.render_widget(value, cols[2]);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_thumb_position() {
        assert_eq!(thumb_position(0.0, 11), 0);
        assert_eq!(thumb_position(0.5, 11), 5);
        assert_eq!(thumb_position(1.0, 11), 10);
        assert_eq!(thumb_position(2.0, 11), 10);
        assert_eq!(thumb_position(f64::NAN, 11), 0);
        assert_eq!(thumb_position(0.5, 0), 0);
    }

    #[test]
    fn test_track_fills_width() {
        let line = track(0.3, 20, true);
        let text: String = line.spans.iter().map(|s| s.content.as_ref()).collect();
        assert_eq!(text.chars().count(), 20);
        assert_eq!(text.matches(THUMB).count(), 1);
    }

    #[test]
    fn test_help_text_uses_primary_bindings() {
        let help = SliderPanel::help_text(&KeybindingsConfig::default());
        assert!(help.starts_with("k/j: select"));
        assert!(help.ends_with("r: reset"));
    }
}
