//! Balance header: period balance plus the income and outcome totals.
//!
//! The income/outcome boxes double as the side selector for the chart.

use super::{Component, EventResult};
use crate::state::AppState;
use crate::util::styles::{focused_block, value_style};
use crossterm::event::{KeyCode, KeyEvent};
use finwheel_core::Side;
use finwheel_core::format::format_amount;
use ratatui::{
    Frame,
    layout::{Constraint, Layout, Rect},
    style::Modifier,
    text::Line,
    widgets::{Block, Borders, Paragraph},
};

pub struct BalancePanel;

impl BalancePanel {
    fn amount(value: f64, currency: &str, dimmed: bool) -> Paragraph<'static> {
        let mut style = value_style(value).add_modifier(Modifier::BOLD);
        if dimmed {
            style = style.add_modifier(Modifier::DIM);
        }
        Paragraph::new(Line::from(format_amount(value, currency)).centered()).style(style)
    }
}

impl Component for BalancePanel {
    fn handle_key(&mut self, key: KeyEvent, state: &mut AppState) -> EventResult {
        let side = match key.code {
            KeyCode::Char('i') => Side::Income,
            KeyCode::Char('o') => Side::Outcome,
            KeyCode::Tab | KeyCode::BackTab => state.side.toggle(),
            _ => return EventResult::NotHandled,
        };
        state.select_side(side);
        EventResult::Handled
    }

    fn render(&mut self, frame: &mut Frame, area: Rect, state: &AppState) {
        let currency = state.config.currency.as_str();
        let [balance_area, income_area, outcome_area] =
            Layout::horizontal([Constraint::Fill(1); 3]).areas(area);

        let balance = state.aggregate.balance();
        let block = Block::default().borders(Borders::ALL).title(" Balance ");
        frame.render_widget(Self::amount(balance, currency, false).block(block), balance_area);

        for (side, side_area) in Side::ALL.into_iter().zip([income_area, outcome_area]) {
            let title = format!(" {} [{}] ", side.name(), side_key(side));
            let block = focused_block(&title, state.side == side);
            let total = state.aggregate.side(side).total;
            let paragraph = Self::amount(total, currency, state.side != side).block(block);
            frame.render_widget(paragraph, side_area);
        }
    }
}

fn side_key(side: Side) -> char {
    match side {
        Side::Income => 'i',
        Side::Outcome => 'o',
    }
}
