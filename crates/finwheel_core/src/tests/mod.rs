//! End-to-end tests for the breakdown pipeline
//!
//! Tests are organized by topic:
//! - `scenarios` - Operations through aggregation, ranking and allocation
//! - `properties` - Invariants checked over generated category sets
