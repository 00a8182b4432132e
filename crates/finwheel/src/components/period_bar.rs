use super::{Component, EventResult};
use crate::state::AppState;
use crossterm::event::{KeyCode, KeyEvent};
use finwheel_core::Period;
use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Tabs},
};

/// Period selector: current month, previous month, year
pub struct PeriodBar;

impl Component for PeriodBar {
    fn handle_key(&mut self, key: KeyEvent, state: &mut AppState) -> EventResult {
        let period = match key.code {
            KeyCode::Char('1') => Period::CurrentMonth,
            KeyCode::Char('2') => Period::PreviousMonth,
            KeyCode::Char('3') => Period::Year,
            KeyCode::Char(']') => state.period.next(),
            KeyCode::Char('[') => state.period.prev(),
            _ => return EventResult::NotHandled,
        };
        state.select_period(period);
        EventResult::Handled
    }

    fn render(&mut self, frame: &mut Frame, area: Rect, state: &AppState) {
        let titles: Vec<Line> = Period::ALL
            .iter()
            .enumerate()
            .map(|(idx, period)| {
                let content = format!("[{}] {}", idx + 1, period.name());
                if *period == state.period {
                    Line::from(Span::styled(
                        content,
                        Style::default()
                            .fg(Color::Yellow)
                            .add_modifier(Modifier::BOLD),
                    ))
                } else {
                    Line::from(Span::styled(content, Style::default().fg(Color::Gray)))
                }
            })
            .collect();

        let range = state.range();
        let range_title = Line::from(format!(" {} .. {} ", range.start, range.end)).right_aligned();
        let tabs = Tabs::new(titles)
            .block(
                Block::default()
                    .borders(Borders::BOTTOM)
                    .title_top(range_title),
            )
            .select(state.period.index())
            .highlight_style(
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD),
            );

        frame.render_widget(tabs, area);
    }
}
