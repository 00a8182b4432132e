use crate::components::balance_panel::BalancePanel;
use crate::components::category_list::CategoryList;
use crate::components::charts::PieChart;
use crate::components::operations_table::OperationsTable;
use crate::components::period_bar::PeriodBar;
use crate::components::status_bar::StatusBar;
use crate::components::{Component, EventResult};
use crate::state::AppState;
use crate::util::styles::HELP_COLOR;
use crossterm::event::KeyEvent;
use finwheel_core::ChartError;
use ratatui::{
    Frame,
    layout::{Constraint, Layout, Rect},
    style::Style,
    text::Line,
    widgets::{Block, Borders, Paragraph},
};

use super::Screen;

/// Balances, category breakdown and the operations of one period
pub struct OverviewScreen {
    period_bar: PeriodBar,
    balance_panel: BalancePanel,
    operations_table: OperationsTable,
    status_bar: StatusBar,
}

impl OverviewScreen {
    pub fn new() -> Self {
        Self {
            period_bar: PeriodBar,
            balance_panel: BalancePanel,
            operations_table: OperationsTable,
            status_bar: StatusBar,
        }
    }

    fn render_breakdown(&self, frame: &mut Frame, area: Rect, state: &AppState) {
        let title = format!(" {} by category ", state.side.name());
        let block = Block::default().borders(Borders::ALL).title(title);

        let chart = match &state.chart {
            Ok(chart) => chart,
            Err(e) => {
                let paragraph = Paragraph::new(vec![
                    Line::from(""),
                    Line::from(empty_message(e, state)).centered(),
                ])
                .style(Style::default().fg(HELP_COLOR))
                .block(block);
                frame.render_widget(paragraph, area);
                return;
            }
        };

        let inner = block.inner(area);
        frame.render_widget(block, area);

        let [chart_area, list_area] =
            Layout::horizontal([Constraint::Percentage(50), Constraint::Percentage(50)])
                .spacing(1)
                .areas(inner);

        let currency = state.config.currency.as_str();
        let pie = PieChart::new(&chart.geometry, chart.total, &state.config.palette)
            .currency(currency);
        frame.render_widget(pie, chart_area);

        let list = CategoryList::new(&chart.slices, &state.config.palette, &state.icons)
            .currency(currency);
        frame.render_widget(list, list_area);
    }
}

impl Default for OverviewScreen {
    fn default() -> Self {
        Self::new()
    }
}

/// Text shown instead of the chart when there is nothing to draw
fn empty_message(error: &ChartError, state: &AppState) -> String {
    match error {
        ChartError::NonFinite { .. } => format!("Cannot draw chart: {error}"),
        ChartError::Empty | ChartError::ZeroTotal => format!(
            "No {} for {}",
            state.side.name().to_lowercase(),
            state.period.name().to_lowercase()
        ),
    }
}

impl Screen for OverviewScreen {
    fn title(&self) -> &str {
        "Overview"
    }
}

impl Component for OverviewScreen {
    fn handle_key(&mut self, key: KeyEvent, state: &mut AppState) -> EventResult {
        let components: [&mut dyn Component; 3] = [
            &mut self.period_bar,
            &mut self.balance_panel,
            &mut self.operations_table,
        ];
        for component in components {
            match component.handle_key(key, state) {
                EventResult::NotHandled => continue,
                result => return result,
            }
        }
        EventResult::NotHandled
    }

    fn render(&mut self, frame: &mut Frame, area: Rect, state: &AppState) {
        let [period_area, balance_area, body_area, status_area] = Layout::vertical([
            Constraint::Length(2),
            Constraint::Length(3),
            Constraint::Min(8),
            Constraint::Length(2),
        ])
        .areas(area);

        let [breakdown_area, table_area] =
            Layout::vertical([Constraint::Percentage(60), Constraint::Percentage(40)])
                .areas(body_area);

        self.period_bar.render(frame, period_area, state);
        self.balance_panel.render(frame, balance_area, state);
        self.render_breakdown(frame, breakdown_area, state);
        self.operations_table.render(frame, table_area, state);
        self.status_bar.render(frame, status_area, state);
    }
}
