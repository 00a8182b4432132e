//! Per-period view models handed from the controller to the chart and list.

use serde::{Deserialize, Serialize};

use super::Side;
use crate::error::ChartError;

/// Total spend or income for one category within the active period.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategoryAmount {
    pub name: String,
    pub amount: f64,
}

impl CategoryAmount {
    pub fn new(name: impl Into<String>, amount: f64) -> Self {
        Self {
            name: name.into(),
            amount,
        }
    }
}

/// One side of a period: its total and the categories in first-seen order.
///
/// Category names are unique within a side.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct SideAggregate {
    pub total: f64,
    pub categories: Vec<CategoryAmount>,
}

impl SideAggregate {
    /// Build from categories, computing the total as their sum.
    pub fn from_categories(categories: Vec<CategoryAmount>) -> Self {
        let total = categories.iter().map(|c| c.amount).sum();
        Self { total, categories }
    }

    pub fn is_empty(&self) -> bool {
        self.categories.is_empty()
    }

    /// Categories ranked by descending absolute amount.
    ///
    /// The sort is stable, so equal amounts keep their first-seen order.
    pub fn ranked_slices(&self) -> Result<Vec<CategorySlice>, ChartError> {
        if self.categories.is_empty() {
            return Err(ChartError::Empty);
        }
        if !self.total.is_finite() {
            return Err(ChartError::NonFinite {
                category: String::from("<total>"),
            });
        }
        if self.total == 0.0 {
            return Err(ChartError::ZeroTotal);
        }

        let mut slices: Vec<CategorySlice> = self
            .categories
            .iter()
            .map(|c| CategorySlice {
                name: c.name.clone(),
                amount: c.amount,
                total: self.total,
            })
            .collect();
        slices.sort_by(|a, b| b.amount.abs().total_cmp(&a.amount.abs()));
        Ok(slices)
    }
}

/// Income and outcome breakdowns for one period.
///
/// Rebuilt on every reload; nothing holds on to it past one refresh.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct PeriodAggregate {
    pub income: SideAggregate,
    pub outcome: SideAggregate,
}

impl PeriodAggregate {
    pub fn side(&self, side: Side) -> &SideAggregate {
        match side {
            Side::Income => &self.income,
            Side::Outcome => &self.outcome,
        }
    }

    /// Net balance: income plus (negative) outcome.
    pub fn balance(&self) -> f64 {
        self.income.total + self.outcome.total
    }
}

/// A ranked category together with the total of its side.
#[derive(Debug, Clone, PartialEq)]
pub struct CategorySlice {
    pub name: String,
    pub amount: f64,
    pub total: f64,
}

impl CategorySlice {
    /// Signed share of the side total.
    pub fn ratio(&self) -> f64 {
        self.amount / self.total
    }

    pub fn abs_ratio(&self) -> f64 {
        self.ratio().abs()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn side(entries: &[(&str, f64)]) -> SideAggregate {
        SideAggregate::from_categories(
            entries
                .iter()
                .map(|(n, a)| CategoryAmount::new(*n, *a))
                .collect(),
        )
    }

    #[test]
    fn test_ranked_slices_orders_by_absolute_amount() {
        let agg = side(&[("Transport", -100.0), ("Housing", -600.0), ("Groceries", -300.0)]);
        let names: Vec<_> = agg
            .ranked_slices()
            .unwrap()
            .into_iter()
            .map(|s| s.name)
            .collect();
        assert_eq!(names, vec!["Housing", "Groceries", "Transport"]);
    }

    #[test]
    fn test_ranked_slices_ties_keep_insertion_order() {
        let agg = side(&[("B", -50.0), ("A", -50.0), ("C", -80.0)]);
        let names: Vec<_> = agg
            .ranked_slices()
            .unwrap()
            .into_iter()
            .map(|s| s.name)
            .collect();
        assert_eq!(names, vec!["C", "B", "A"]);
    }

    #[test]
    fn test_ranked_slices_rejects_empty_and_zero_total() {
        assert_eq!(SideAggregate::default().ranked_slices(), Err(ChartError::Empty));
        let cancelled = side(&[("Refund", 50.0), ("Fee", -50.0)]);
        assert_eq!(cancelled.ranked_slices(), Err(ChartError::ZeroTotal));
    }

    #[test]
    fn test_slice_ratio_is_signed_against_total() {
        let slice = CategorySlice {
            name: "Housing".into(),
            amount: -600.0,
            total: -1000.0,
        };
        assert!((slice.ratio() - 0.6).abs() < 1e-12);
    }

    #[test]
    fn test_balance_sums_both_sides() {
        let agg = PeriodAggregate {
            income: side(&[("Salary", 2000.0)]),
            outcome: side(&[("Housing", -600.0)]),
        };
        assert_eq!(agg.balance(), 1400.0);
        assert_eq!(agg.side(Side::Outcome).total, -600.0);
    }
}
