//! Data-access seam for recorded operations.
//!
//! Storage itself lives outside this crate. [`MemoryLedger`] keeps operations
//! in memory and can be seeded from a read-only YAML snapshot:
//!
//! ```yaml
//! operations:
//!   - id: 1
//!     date: 2026-10-01
//!     category: Salary
//!     amount: 3000
//!   - id: 2
//!     date: 2026-10-02
//!     category: Groceries
//!     amount: -120.5
//!     comment: weekly shop
//! ```

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::aggregate::aggregate;
use crate::error::LedgerError;
use crate::model::{Operation, OperationId, PeriodAggregate};
use crate::period::DateRange;

/// Operations a window controller needs from the data layer.
pub trait Ledger {
    /// Operations dated inside `range`, in recording order.
    fn operations(&self, range: DateRange) -> Vec<Operation>;

    /// Remove an operation, returning it.
    fn delete(&mut self, id: OperationId) -> Result<Operation, LedgerError>;

    /// Per-category totals for `range`.
    fn aggregate(&self, range: DateRange) -> PeriodAggregate {
        aggregate(&self.operations(range), range)
    }
}

#[derive(Debug, Default, Serialize, Deserialize)]
struct LedgerSnapshot {
    #[serde(default)]
    operations: Vec<Operation>,
}

/// Vec-backed ledger.
#[derive(Debug, Clone, Default)]
pub struct MemoryLedger {
    operations: Vec<Operation>,
}

impl MemoryLedger {
    pub fn new(operations: Vec<Operation>) -> Self {
        Self { operations }
    }

    pub fn from_yaml_str(content: &str) -> Result<Self, LedgerError> {
        let snapshot: LedgerSnapshot = serde_saphyr::from_str(content)
            .map_err(|e| LedgerError::Parse(format!("Failed to parse operations: {}", e)))?;
        Ok(Self::new(snapshot.operations))
    }

    /// Load a snapshot file. A missing file yields an empty ledger.
    pub fn load(path: &Path) -> Result<Self, LedgerError> {
        if !path.exists() {
            tracing::info!(path = %path.display(), "No operations file, starting empty");
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path)
            .map_err(|e| LedgerError::Io(format!("Failed to read operations: {}", e)))?;
        let ledger = Self::from_yaml_str(&content)?;
        tracing::info!(
            path = %path.display(),
            count = ledger.operations.len(),
            "Loaded operations"
        );
        Ok(ledger)
    }

    pub fn len(&self) -> usize {
        self.operations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.operations.is_empty()
    }
}

impl Ledger for MemoryLedger {
    fn operations(&self, range: DateRange) -> Vec<Operation> {
        self.operations
            .iter()
            .filter(|op| range.contains(op.date))
            .cloned()
            .collect()
    }

    fn delete(&mut self, id: OperationId) -> Result<Operation, LedgerError> {
        let pos = self
            .operations
            .iter()
            .position(|op| op.id == id)
            .ok_or(LedgerError::NotFound(id))?;
        Ok(self.operations.remove(pos))
    }
}
