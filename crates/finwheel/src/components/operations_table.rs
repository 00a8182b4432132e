//! Operations of the active period.

use super::{Component, EventResult};
use crate::state::AppState;
use crate::util::styles::{HEADER_COLOR, focused_block_with_help, value_color};
use crossterm::event::{KeyCode, KeyEvent};
use finwheel_core::format::format_amount_cell;
use ratatui::{
    Frame,
    layout::{Constraint, Rect},
    style::{Modifier, Style},
    text::Line,
    widgets::{Cell, Row, Table, TableState},
};

pub struct OperationsTable;

impl Component for OperationsTable {
    fn handle_key(&mut self, key: KeyEvent, state: &mut AppState) -> EventResult {
        match key.code {
            KeyCode::Char('j') | KeyCode::Down => {
                state.select_next();
                EventResult::Handled
            }
            KeyCode::Char('k') | KeyCode::Up => {
                state.select_prev();
                EventResult::Handled
            }
            KeyCode::Char('d') | KeyCode::Delete => {
                state.request_delete();
                EventResult::Handled
            }
            _ => EventResult::NotHandled,
        }
    }

    fn render(&mut self, frame: &mut Frame, area: Rect, state: &AppState) {
        let header = Row::new(["Date", "Category", "Amount", "Comment"]).style(
            Style::default()
                .fg(HEADER_COLOR)
                .add_modifier(Modifier::BOLD),
        );

        let rows = state.operations.iter().map(|op| {
            Row::new(vec![
                Cell::from(op.date.to_string()),
                Cell::from(op.category.as_str()),
                Cell::from(
                    Line::from(format_amount_cell(&op.amount.to_string())).right_aligned(),
                )
                .style(Style::default().fg(value_color(op.amount))),
                Cell::from(op.comment.as_str()),
            ])
        });

        let title = format!(" Operations ({}) ", state.operations.len());
        let table = Table::new(
            rows,
            [
                Constraint::Length(10),
                Constraint::Percentage(30),
                Constraint::Length(12),
                Constraint::Fill(1),
            ],
        )
        .header(header)
        .block(focused_block_with_help(&title, true, "j/k: select | d: delete"))
        .row_highlight_style(Style::default().add_modifier(Modifier::REVERSED));

        let mut table_state = TableState::default().with_selected(state.selected);
        frame.render_stateful_widget(table, area, &mut table_state);
    }
}
