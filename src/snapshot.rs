//! Flat, serializable export format for a whole table.

use serde::{Deserialize, Serialize};

/// Version number for serialized [`TableSnapshotV1`] payloads.
pub const SNAPSHOT_FORMAT_VERSION: u16 = 1;

/// One (row, column, value) triple.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CellRecord<R, C, V> {
    /// Row key.
    pub row: R,
    /// Column key.
    pub column: C,
    /// Stored value.
    pub value: V,
}

/// Every cell of a table plus the cell count recorded at export time.
///
/// Cells carry no ordering guarantee.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TableSnapshotV1<R, C, V> {
    /// Payload format version.
    pub format_version: u16,
    /// Cell count at export time.
    pub len: u64,
    /// Exported cells.
    pub cells: Vec<CellRecord<R, C, V>>,
}

impl<R, C, V> TableSnapshotV1<R, C, V> {
    /// Builds a snapshot at [`SNAPSHOT_FORMAT_VERSION`] whose count matches `cells`.
    pub fn new(cells: Vec<CellRecord<R, C, V>>) -> Self {
        Self {
            format_version: SNAPSHOT_FORMAT_VERSION,
            len: cells.len() as u64,
            cells,
        }
    }
}
