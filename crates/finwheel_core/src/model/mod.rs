mod ids;
mod operations;
mod summary;

pub use ids::OperationId;
pub use operations::{Operation, Side};
pub use summary::{CategoryAmount, CategorySlice, PeriodAggregate, SideAggregate};
