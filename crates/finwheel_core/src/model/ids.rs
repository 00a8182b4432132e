//! Identifiers for ledger entities

use serde::{Deserialize, Serialize};

/// Unique identifier for a recorded operation
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct OperationId(pub u64);
