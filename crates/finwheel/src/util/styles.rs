//! Common styling utilities for TUI components

use finwheel_core::Rgb;
use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders};

/// Standard color for focused panels
pub const FOCUS_COLOR: Color = Color::Yellow;

/// Standard color for help text
pub const HELP_COLOR: Color = Color::DarkGray;

/// Standard color for headers
pub const HEADER_COLOR: Color = Color::Cyan;

/// Standard color for positive values
pub const POSITIVE_COLOR: Color = Color::Green;

/// Standard color for negative values
pub const NEGATIVE_COLOR: Color = Color::Red;

/// Light cyan used for amounts and the chart total
pub const ACCENT_TEXT: Rgb = Rgb::new(0xC8, 0xFA, 0xFA);

/// Slightly warmer cyan for chart percentage labels
pub const LABEL_TEXT: Rgb = Rgb::new(0xD1, 0xF7, 0xF7);

/// Dark teal the chart is composited onto
pub const CHART_BACKGROUND: Rgb = Rgb::new(0x18, 0x35, 0x35);

/// Convert a palette color to a terminal color
pub fn to_color(rgb: Rgb) -> Color {
    Color::Rgb(rgb.r, rgb.g, rgb.b)
}

/// Create a block with a title that shows focused state via border color.
///
/// When focused, the border is yellow. When unfocused, it's the default color.
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

/// Create a block with title and bottom help text that shows focused state.
///
/// The help text is only shown when the panel is focused.
pub fn focused_block_with_help(title: &str, focused: bool, help_text: &str) -> Block<'static> {
    let mut block = focused_block(title, focused);
    if focused && !help_text.is_empty() {
        block = block.title_bottom(Line::from(format!(" {} ", help_text)).fg(HELP_COLOR));
    }
    block
}

/// Get the appropriate color for a monetary value (green for positive, red for negative).
pub fn value_color(value: f64) -> Color {
    if value >= 0.0 {
        POSITIVE_COLOR
    } else {
        NEGATIVE_COLOR
    }
}

/// Get the appropriate style for a monetary value.
pub fn value_style(value: f64) -> Style {
    Style::default().fg(value_color(value))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_focused_block_has_title() {
        let block = focused_block("Categories", true);
        assert!(format!("{:?}", block).contains("Categories"));
    }

    #[test]
    fn test_value_color() {
        assert_eq!(value_color(100.0), POSITIVE_COLOR);
        assert_eq!(value_color(-100.0), NEGATIVE_COLOR);
        assert_eq!(value_color(0.0), POSITIVE_COLOR);
    }

    #[test]
    fn test_to_color() {
        assert_eq!(to_color(Rgb::new(1, 2, 3)), Color::Rgb(1, 2, 3));
    }
}
