use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    Frame,
    layout::{Constraint, Layout},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
};

use crate::state::ConfirmModal;

use super::{ModalResult, centered_rect};

const MODAL_WIDTH: u16 = 60;
const MODAL_HEIGHT: u16 = 8;

/// Render the confirm modal
pub fn render_confirm_modal(frame: &mut Frame, modal: &ConfirmModal) {
    let modal_area = centered_rect(MODAL_WIDTH, MODAL_HEIGHT, frame.area());
    frame.render_widget(Clear, modal_area);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Red))
        .title(format!(" {} ", modal.title));

    let inner = block.inner(modal_area);
    frame.render_widget(block, modal_area);

    let [_, message_area, _, help_area] = Layout::vertical([
        Constraint::Length(1), // Spacing
        Constraint::Min(2),    // Message
        Constraint::Length(1), // Spacing
        Constraint::Length(1), // Help text
    ])
    .areas(inner);

    let message = Paragraph::new(Line::from(Span::styled(
        modal.message.as_str(),
        Style::default().add_modifier(Modifier::BOLD),
    )))
    .wrap(Wrap { trim: true });
    frame.render_widget(message, message_area);

    let help = Paragraph::new(Line::from(vec![
        Span::styled("[y]", Style::default().fg(Color::Red)),
        Span::raw(" Confirm  "),
        Span::styled("[n/Esc]", Style::default().fg(Color::Green)),
        Span::raw(" Cancel"),
    ]));
    frame.render_widget(help, help_area);
}

/// Handle key events for confirm modal
pub fn handle_confirm_key(key: KeyEvent, modal: &ConfirmModal) -> ModalResult {
    match key.code {
        KeyCode::Char('y') | KeyCode::Char('Y') => ModalResult::Confirmed(modal.action),
        KeyCode::Char('n') | KeyCode::Char('N') | KeyCode::Esc => ModalResult::Cancelled,
        _ => ModalResult::Continue,
    }
}
