use super::{Component, EventResult};
use crate::state::AppState;
use crossterm::event::KeyEvent;
use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

const HELP_TEXT: &str =
    "1-3/[]: period | i/o/Tab: side | j/k: select | d: delete | n/e/c: edit | q: quit";

pub struct StatusBar;

impl StatusBar {
    fn content(state: &AppState) -> Line<'_> {
        if let Some(error) = &state.error_message {
            Line::from(vec![
                Span::styled("Error: ", Style::default().fg(Color::Red)),
                Span::raw(error.as_str()),
            ])
        } else if let Some(info) = &state.info_message {
            Line::from(Span::styled(info.as_str(), Style::default().fg(Color::Green)))
        } else {
            Line::from(Span::styled(HELP_TEXT, Style::default().fg(Color::DarkGray)))
        }
    }
}

impl Component for StatusBar {
    fn handle_key(&mut self, _key: KeyEvent, _state: &mut AppState) -> EventResult {
        EventResult::NotHandled
    }

    fn render(&mut self, frame: &mut Frame, area: Rect, state: &AppState) {
        let paragraph =
            Paragraph::new(Self::content(state)).block(Block::default().borders(Borders::TOP));
        frame.render_widget(paragraph, area);
    }
}
