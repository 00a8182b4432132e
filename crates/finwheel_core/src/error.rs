use std::fmt;

use crate::model::OperationId;

/// Reasons a category breakdown cannot be turned into a chart.
///
/// Callers are expected to show an empty state instead of drawing when any of
/// these come back.
#[derive(Debug, Clone, PartialEq)]
pub enum ChartError {
    /// No categories for the active side and period
    Empty,
    /// The side's total is zero, so shares are undefined
    ZeroTotal,
    /// An amount or the total is NaN or infinite
    NonFinite { category: String },
}

impl fmt::Display for ChartError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ChartError::Empty => write!(f, "no categories to chart"),
            ChartError::ZeroTotal => write!(f, "total amount is zero"),
            ChartError::NonFinite { category } => {
                write!(f, "amount for category {category:?} is not a finite number")
            }
        }
    }
}

impl std::error::Error for ChartError {}

/// Errors raised by the data-access layer
#[derive(Debug, Clone, PartialEq)]
pub enum LedgerError {
    NotFound(OperationId),
    Io(String),
    Parse(String),
}

impl fmt::Display for LedgerError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LedgerError::NotFound(id) => write!(f, "operation {} not found", id.0),
            LedgerError::Io(msg) => write!(f, "IO error: {msg}"),
            LedgerError::Parse(msg) => write!(f, "Parse error: {msg}"),
        }
    }
}

impl std::error::Error for LedgerError {}

/// Errors parsing palette colors
#[derive(Debug, Clone, PartialEq)]
pub enum ColorError {
    Malformed(String),
    EmptyPalette,
}

impl fmt::Display for ColorError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ColorError::Malformed(raw) => write!(f, "invalid hex color {raw:?}"),
            ColorError::EmptyPalette => write!(f, "palette must contain at least one color"),
        }
    }
}

impl std::error::Error for ColorError {}
