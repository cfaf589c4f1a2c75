//! Construction-time store configuration.

use serde::{Deserialize, Serialize};

/// Sizing hints applied when a store is created.
///
/// Capacities are only pre-allocation hints for the outer maps of each index;
/// they never cap how many rows or columns the store accepts.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct StoreConfig {
    /// Distinct row keys to reserve room for.
    pub row_capacity: usize,
    /// Distinct column keys to reserve room for.
    pub column_capacity: usize,
}

impl StoreConfig {
    /// Reserves room for `rows` row keys and `columns` column keys.
    pub fn with_capacity(rows: usize, columns: usize) -> Self {
        Self {
            row_capacity: rows,
            column_capacity: columns,
        }
    }
}
