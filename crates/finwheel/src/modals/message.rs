use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    Frame,
    layout::{Constraint, Layout},
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
};

use crate::state::MessageModal;

use super::{ModalResult, centered_rect};

const MODAL_WIDTH: u16 = 50;
const MODAL_MIN_HEIGHT: u16 = 6;

/// Render the message modal
pub fn render_message_modal(frame: &mut Frame, modal: &MessageModal) {
    let message_lines = modal.message.len() / (MODAL_WIDTH as usize - 4) + 1;
    let height = (MODAL_MIN_HEIGHT + message_lines as u16).min(frame.area().height);
    let modal_area = centered_rect(MODAL_WIDTH, height, frame.area());
    frame.render_widget(Clear, modal_area);

    let border_color = if modal.is_error {
        Color::Red
    } else {
        Color::Green
    };
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border_color))
        .title(format!(" {} ", modal.title));

    let inner = block.inner(modal_area);
    frame.render_widget(block, modal_area);

    let [_, message_area, _, help_area] = Layout::vertical([
        Constraint::Length(1),
        Constraint::Min(1),
        Constraint::Length(1),
        Constraint::Length(1),
    ])
    .areas(inner);

    let message = Paragraph::new(modal.message.as_str()).wrap(Wrap { trim: true });
    frame.render_widget(message, message_area);

    let help = Paragraph::new(Line::from(vec![
        Span::styled("[Enter]", Style::default().fg(Color::Green)),
        Span::raw(" or "),
        Span::styled("[Esc]", Style::default().fg(Color::Yellow)),
        Span::raw(" to dismiss"),
    ]));
    frame.render_widget(help, help_area);
}

/// Handle key events for message modal
pub fn handle_message_key(key: KeyEvent) -> ModalResult {
    match key.code {
        KeyCode::Enter | KeyCode::Esc => ModalResult::Cancelled,
        _ => ModalResult::Continue,
    }
}
