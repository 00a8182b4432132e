//! Recorded income and outcome operations

use jiff::civil::Date;
use serde::{Deserialize, Serialize};

use super::OperationId;

/// Which half of the books an amount belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Side {
    Income,
    #[default]
    Outcome,
}

impl Side {
    pub const ALL: [Side; 2] = [Side::Income, Side::Outcome];

    /// Side for a signed amount. Zero belongs to neither.
    pub fn of(amount: f64) -> Option<Side> {
        if amount > 0.0 {
            Some(Side::Income)
        } else if amount < 0.0 {
            Some(Side::Outcome)
        } else {
            None
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Side::Income => "Income",
            Side::Outcome => "Outcome",
        }
    }

    pub fn toggle(self) -> Side {
        match self {
            Side::Income => Side::Outcome,
            Side::Outcome => Side::Income,
        }
    }
}

/// A single income (positive amount) or outcome (negative amount) entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Operation {
    pub id: OperationId,
    pub date: Date,
    pub category: String,
    pub amount: f64,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub comment: String,
}

impl Operation {
    pub fn side(&self) -> Option<Side> {
        Side::of(self.amount)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_side_of_amount() {
        assert_eq!(Side::of(10.0), Some(Side::Income));
        assert_eq!(Side::of(-0.5), Some(Side::Outcome));
        assert_eq!(Side::of(0.0), None);
    }

    #[test]
    fn test_side_toggle() {
        assert_eq!(Side::Income.toggle(), Side::Outcome);
        assert_eq!(Side::Outcome.toggle(), Side::Income);
        assert_eq!(Side::default(), Side::Outcome);
    }

    #[test]
    fn test_operation_parses_from_yaml() {
        let yaml = "id: 7\ndate: 2026-10-03\ncategory: Groceries\namount: -42.5\n";
        let op: Operation = serde_saphyr::from_str(yaml).unwrap();
        assert_eq!(op.id, OperationId(7));
        assert_eq!(op.date, jiff::civil::date(2026, 10, 3));
        assert_eq!(op.side(), Some(Side::Outcome));
        assert!(op.comment.is_empty());
    }
}
