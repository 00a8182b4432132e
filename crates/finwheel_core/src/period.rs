//! Reporting periods and their date windows

use jiff::ToSpan;
use jiff::civil::Date;
use serde::{Deserialize, Serialize};

/// Time window over which operations are aggregated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Period {
    #[default]
    CurrentMonth,
    PreviousMonth,
    Year,
}

impl Period {
    pub const ALL: [Period; 3] = [Period::CurrentMonth, Period::PreviousMonth, Period::Year];

    pub fn name(&self) -> &'static str {
        match self {
            Period::CurrentMonth => "Current month",
            Period::PreviousMonth => "Previous month",
            Period::Year => "Year",
        }
    }

    pub fn index(&self) -> usize {
        match self {
            Period::CurrentMonth => 0,
            Period::PreviousMonth => 1,
            Period::Year => 2,
        }
    }

    pub fn next(self) -> Period {
        Period::ALL[(self.index() + 1) % Period::ALL.len()]
    }

    pub fn prev(self) -> Period {
        Period::ALL[(self.index() + Period::ALL.len() - 1) % Period::ALL.len()]
    }

    /// Half-open date window for this period as seen from `today`.
    pub fn range(&self, today: Date) -> DateRange {
        match self {
            Period::CurrentMonth => {
                let start = today.first_of_month();
                DateRange {
                    start,
                    end: start.saturating_add(1.month()),
                }
            }
            Period::PreviousMonth => {
                let end = today.first_of_month();
                DateRange {
                    start: end.saturating_sub(1.month()),
                    end,
                }
            }
            Period::Year => {
                let start = today.first_of_year();
                DateRange {
                    start,
                    end: start.saturating_add(1.year()),
                }
            }
        }
    }
}

/// Dates in `[start, end)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateRange {
    pub start: Date,
    pub end: Date,
}

impl DateRange {
    pub fn contains(&self, date: Date) -> bool {
        self.start <= date && date < self.end
    }
}
