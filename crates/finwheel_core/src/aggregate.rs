//! Turning raw operations into per-category period breakdowns

use rustc_hash::FxHashMap;

use crate::model::{CategoryAmount, Operation, PeriodAggregate, Side, SideAggregate};
use crate::period::DateRange;

/// Sum operations inside `range` per category, separately for each side.
///
/// Categories keep the order in which they were first seen. Zero amounts
/// belong to neither side, and a category summing to zero never reaches the
/// chart.
pub fn aggregate<'a, I>(operations: I, range: DateRange) -> PeriodAggregate
where
    I: IntoIterator<Item = &'a Operation>,
{
    let mut income = SideBuilder::default();
    let mut outcome = SideBuilder::default();

    for op in operations {
        if !range.contains(op.date) {
            continue;
        }
        match op.side() {
            Some(Side::Income) => income.add(&op.category, op.amount),
            Some(Side::Outcome) => outcome.add(&op.category, op.amount),
            None => {}
        }
    }

    PeriodAggregate {
        income: income.finish(),
        outcome: outcome.finish(),
    }
}

/// Net sum per category over already loaded operations, ranked by descending
/// absolute sum.
pub fn category_statistics(operations: &[Operation]) -> Vec<(String, f64)> {
    let mut builder = SideBuilder::default();
    for op in operations {
        builder.add(&op.category, op.amount);
    }
    let mut stats: Vec<(String, f64)> = builder
        .categories
        .into_iter()
        .map(|c| (c.name, c.amount))
        .collect();
    stats.sort_by(|a, b| b.1.abs().total_cmp(&a.1.abs()));
    stats
}

#[derive(Default)]
struct SideBuilder {
    index: FxHashMap<String, usize>,
    categories: Vec<CategoryAmount>,
}

impl SideBuilder {
    fn add(&mut self, category: &str, amount: f64) {
        match self.index.get(category) {
            Some(&i) => self.categories[i].amount += amount,
            None => {
                self.index.insert(category.to_string(), self.categories.len());
                self.categories.push(CategoryAmount::new(category, amount));
            }
        }
    }

    fn finish(self) -> SideAggregate {
        let categories = self
            .categories
            .into_iter()
            .filter(|c| c.amount != 0.0)
            .collect();
        SideAggregate::from_categories(categories)
    }
}
