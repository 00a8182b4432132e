use finwheel_core::{
    CategorySlice, ChartError, DateRange, IconSet, Ledger, Operation, OperationId,
    PeriodAggregate, Period, Side, SliceGeometry, allocate, category_statistics,
};
use jiff::civil::Date;

use super::{ConfirmModal, ModalAction, ModalState};
use crate::data::config_data::AppConfig;

pub const NO_SELECTION_ERROR: &str = "Select an operation to delete.";

/// Ranked categories of the selected side with their slice angles
#[derive(Debug, Clone, PartialEq)]
pub struct ChartData {
    pub total: f64,
    pub slices: Vec<CategorySlice>,
    pub geometry: Vec<SliceGeometry>,
}

impl ChartData {
    fn build(aggregate: &PeriodAggregate, side: Side) -> Result<Self, ChartError> {
        let side_aggregate = aggregate.side(side);
        let slices = side_aggregate.ranked_slices()?;
        let geometry = allocate(&slices)?;
        Ok(Self {
            total: side_aggregate.total,
            slices,
            geometry,
        })
    }
}

/// Everything the window renders from.
pub struct AppState {
    pub config: AppConfig,
    pub icons: IconSet,
    pub ledger: Box<dyn Ledger>,
    pub today: Date,
    pub period: Period,
    pub side: Side,

    /// Operations of the active period, in recording order
    pub operations: Vec<Operation>,
    pub selected: Option<usize>,
    pub aggregate: PeriodAggregate,
    pub chart: Result<ChartData, ChartError>,

    pub modal: ModalState,
    pub error_message: Option<String>,
    pub info_message: Option<String>,
    pub exit: bool,
}

impl AppState {
    pub fn new(config: AppConfig, ledger: Box<dyn Ledger>, today: Date) -> Self {
        let mut state = Self {
            icons: config.icon_set(),
            period: config.default_period,
            config,
            ledger,
            today,
            side: Side::default(),
            operations: Vec::new(),
            selected: None,
            aggregate: PeriodAggregate::default(),
            chart: Err(ChartError::Empty),
            modal: ModalState::None,
            error_message: None,
            info_message: None,
            exit: false,
        };
        state.reload();
        state
    }

    pub fn range(&self) -> DateRange {
        self.period.range(self.today)
    }

    /// Refetch the active period's operations and totals
    pub fn reload(&mut self) {
        let range = self.range();
        self.operations = self.ledger.operations(range);
        self.aggregate = self.ledger.aggregate(range);

        tracing::info!(
            period = self.period.name(),
            start = %range.start,
            end = %range.end,
            operations = self.operations.len(),
            "Reloaded period"
        );
        for (category, amount) in category_statistics(&self.operations) {
            tracing::debug!(category = %category, amount, "Category total");
        }

        self.selected = match self.selected {
            _ if self.operations.is_empty() => None,
            Some(index) => Some(index.min(self.operations.len() - 1)),
            None => None,
        };
        self.refresh_chart();
    }

    fn refresh_chart(&mut self) {
        self.chart = ChartData::build(&self.aggregate, self.side);
        if let Err(e) = &self.chart {
            tracing::debug!(side = self.side.name(), reason = %e, "Chart not drawable");
        }
    }

    pub fn select_period(&mut self, period: Period) {
        if self.period != period {
            self.period = period;
            self.selected = None;
            self.reload();
        }
    }

    pub fn select_side(&mut self, side: Side) {
        if self.side != side {
            self.side = side;
            self.refresh_chart();
        }
    }

    pub fn select_next(&mut self) {
        if self.operations.is_empty() {
            return;
        }
        self.selected = Some(match self.selected {
            Some(index) => (index + 1).min(self.operations.len() - 1),
            None => 0,
        });
    }

    pub fn select_prev(&mut self) {
        if self.operations.is_empty() {
            return;
        }
        self.selected = Some(match self.selected {
            Some(index) => index.saturating_sub(1),
            None => 0,
        });
    }

    pub fn selected_operation(&self) -> Option<&Operation> {
        self.selected.and_then(|index| self.operations.get(index))
    }

    /// Ask for confirmation before deleting the selected operation
    pub fn request_delete(&mut self) {
        let Some(operation) = self.selected_operation() else {
            self.set_error(NO_SELECTION_ERROR.to_string());
            return;
        };

        let message = format!(
            "Delete {} {} from {}?",
            operation.category, operation.amount, operation.date
        );
        let modal = ConfirmModal::new("Delete operation", &message, ModalAction::DeleteOperation)
            .with_target(operation.id);
        self.modal = ModalState::Confirm(modal);
    }

    pub fn confirm_delete(&mut self, id: OperationId) {
        match self.ledger.delete(id) {
            Ok(operation) => {
                tracing::info!(id = operation.id.0, category = %operation.category, "Deleted operation");
                self.info_message = Some(format!("Deleted {}", operation.category));
                self.reload();
            }
            Err(e) => {
                tracing::warn!(error = %e, "Delete failed");
                self.set_error(e.to_string());
            }
        }
    }

    pub fn set_error(&mut self, message: String) {
        self.error_message = Some(message);
    }

    pub fn clear_error(&mut self) {
        self.error_message = None;
    }

    pub fn set_info(&mut self, message: &str) {
        self.info_message = Some(message.to_string());
    }
}
