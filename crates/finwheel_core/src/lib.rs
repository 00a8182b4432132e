//! Personal finance breakdown library
//!
//! This crate turns recorded income/outcome operations into the view models
//! behind a category pie chart:
//! - Period windows (current month, previous month, year)
//! - Per-category aggregation for each side of the books
//! - Slice angle allocation with a minimum legible angle for small categories
//! - Rank-based palette colors and category icon lookup
//! - One/two column arrangement of the category list
//!
//! # Example
//!
//! ```ignore
//! use finwheel_core::{Ledger, MemoryLedger, Period, Side, allocate};
//!
//! let ledger = MemoryLedger::load(path)?;
//! let aggregate = ledger.aggregate(Period::CurrentMonth.range(today));
//! let slices = aggregate.side(Side::Outcome).ranked_slices()?;
//! let geometry = allocate(&slices)?;
//! ```

#![warn(clippy::all)]

// ============================================================================
// Core modules
// ============================================================================

pub mod aggregate;
pub mod allocator;
pub mod error;
pub mod ledger;
pub mod period;

// ============================================================================
// Presentation helpers
// ============================================================================

pub mod format;
pub mod icons;
pub mod layout;
pub mod palette;

// ============================================================================
// Type definition modules
// ============================================================================

pub mod model;

// ============================================================================
// Test modules
// ============================================================================

#[cfg(test)]
mod tests;

// ============================================================================
// Public re-exports for convenience
// ============================================================================

pub use aggregate::{aggregate, category_statistics};
pub use allocator::{
    AllocationMode, FULL_CIRCLE, MIN_PERCENTAGE, MIN_SEGMENT_ANGLE, SliceGeometry, allocate,
    allocate_with_mode,
};
pub use error::{ChartError, ColorError, LedgerError};
pub use icons::IconSet;
pub use layout::{ColumnSplit, column_split, columns};
pub use ledger::{Ledger, MemoryLedger};
pub use model::{
    CategoryAmount, CategorySlice, Operation, OperationId, PeriodAggregate, Side, SideAggregate,
};
pub use palette::{Palette, Rgb};
pub use period::{DateRange, Period};
