//! Common styling utilities for TUI components

use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders};

/// Border and highlight color of the focused element
pub const FOCUS_COLOR: Color = Color::Yellow;

/// Color for help text and inactive labels
pub const HELP_COLOR: Color = Color::DarkGray;

/// Color of axis titles and slider ranges
pub const HEADER_COLOR: Color = Color::Cyan;

/// Color of the density curve
pub const CURVE_COLOR: Color = Color::LightBlue;

/// Color of the filled part of a slider
pub const SLIDER_FILL_COLOR: Color = Color::Green;

/// Color of error text and undefined-curve notices
pub const ERROR_COLOR: Color = Color::Red;

/// Create a block with a title that shows focused state via border color.
///
/// # Example
/// ```ignore
/// let block = focused_block("Parameters", true);
/// frame.render_widget(Paragraph::new("...").block(block), area);
/// ```
pub fn focused_block(title: &str, focused: bool) -> Block<'static> {
    let border_style = if focused {
        Style::default().fg(FOCUS_COLOR)
    } else {
        Style::default()
    };

    Block::default()
        .borders(Borders::ALL)
        .border_style(border_style)
        .title(title.to_string())
}

/// Like [`focused_block`], with help text on the bottom border.
pub fn focused_block_with_help(title: &str, focused: bool, help_text: &str) -> Block<'static> {
    let mut block = focused_block(title, focused);
    if focused && !help_text.is_empty() {
        block = block.title_bottom(Line::from(format!(" {} ", help_text)).fg(HELP_COLOR));
    }
    block
}

/// Style of a slider row label.
pub fn slider_label_style(selected: bool) -> Style {
    if selected {
        Style::default()
            .fg(FOCUS_COLOR)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_focused_block_has_title() {
        let block = focused_block("Parameters", true);
        assert!(format!("{:?}", block).contains("Parameters"));
    }

    #[test]
    fn test_slider_label_style() {
        assert_eq!(slider_label_style(true).fg, Some(FOCUS_COLOR));
        assert_eq!(slider_label_style(false).fg, None);
    }
}
