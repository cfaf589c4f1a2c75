use hashbrown::{HashMap, HashSet};
use thiserror::Error;
use tracing::{debug, trace};

use crate::{
    config::StoreConfig,
    core::{
        indices::{self, NestedIndex},
        view::Snapshot,
    },
    snapshot::{CellRecord, SNAPSHOT_FORMAT_VERSION, TableSnapshotV1},
    table::{Key, Table2d},
};

/// Failures surfaced by [`DualIndexStore`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StoreError {
    /// Caller-supplied data was rejected before any mutation.
    #[error("invalid argument `{name}`: {detail}")]
    InvalidArgument {
        /// Name of the offending argument or field.
        name: &'static str,
        /// What was wrong with it.
        detail: String,
    },
    /// The cell count did not fit a narrower integer read.
    #[error("cell count {len} does not fit the requested integer width")]
    SizeOverflow {
        /// Actual cell count.
        len: u64,
    },
}

/// Result alias for store operations.
pub type StoreResult<T> = Result<T, StoreError>;

/// Two-dimensional map backed by a row index and a mirrored column index.
///
/// Every cell lives in both indexes with an equal value, neither index keeps an
/// empty inner map, and `size` always equals the number of cells. Only `put`,
/// `remove` and `clear` write to the indexes.
#[derive(Debug, Clone)]
pub struct DualIndexStore<R, C, V> {
    by_row: NestedIndex<R, C, V>,
    by_column: NestedIndex<C, R, V>,
    size: u64,
}

impl<R, C, V> Default for DualIndexStore<R, C, V> {
    fn default() -> Self {
        Self {
            by_row: HashMap::new(),
            by_column: HashMap::new(),
            size: 0,
        }
    }
}

impl<R: Key, C: Key, V: Clone> DualIndexStore<R, C, V> {
    /// Empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty store with the capacities in `config` reserved.
    pub fn with_config(config: &StoreConfig) -> Self {
        Self {
            by_row: indices::with_capacity(config.row_capacity),
            by_column: indices::with_capacity(config.column_capacity),
            size: 0,
        }
    }

    /// Rebuilds a store from an exported snapshot.
    ///
    /// The snapshot is validated in full before the first cell is inserted: a
    /// foreign format version, a count that disagrees with the payload, or a
    /// repeated (row, column) pair yields [`StoreError::InvalidArgument`].
    pub fn from_snapshot(snapshot: TableSnapshotV1<R, C, V>) -> StoreResult<Self> {
        if snapshot.format_version != SNAPSHOT_FORMAT_VERSION {
            return Err(StoreError::InvalidArgument {
                name: "format_version",
                detail: format!(
                    "expected {SNAPSHOT_FORMAT_VERSION}, found {}",
                    snapshot.format_version
                ),
            });
        }
        if snapshot.len != snapshot.cells.len() as u64 {
            return Err(StoreError::InvalidArgument {
                name: "len",
                detail: format!(
                    "declared {} cells, payload holds {}",
                    snapshot.len,
                    snapshot.cells.len()
                ),
            });
        }

        let mut seen = HashSet::with_capacity(snapshot.cells.len());
        for cell in &snapshot.cells {
            if !seen.insert((&cell.row, &cell.column)) {
                return Err(StoreError::InvalidArgument {
                    name: "cells",
                    detail: "the same (row, column) pair appears more than once".to_string(),
                });
            }
        }
        drop(seen);

        let mut store = Self::new();
        for cell in snapshot.cells {
            store.put(cell.row, cell.column, cell.value);
        }
        debug!(len = store.size, "restored table from snapshot");
        Ok(store)
    }

    /// Flat copy of every cell.
    pub fn export_snapshot(&self) -> TableSnapshotV1<R, C, V> {
        let cells = self
            .cells()
            .map(|(row, column, value)| CellRecord {
                row: row.clone(),
                column: column.clone(),
                value: value.clone(),
            })
            .collect();
        TableSnapshotV1::new(cells)
    }

    /// Returns the replaced value; the count only grows for a new pair.
    pub fn put(&mut self, row: R, column: C, value: V) -> Option<V> {
        indices::insert_nested(&mut self.by_column, column.clone(), row.clone(), value.clone());
        let previous = indices::insert_nested(&mut self.by_row, row, column, value);
        if previous.is_none() {
            self.size += 1;
        }
        previous
    }

    /// Looks up through the row index.
    pub fn get(&self, row: &R, column: &C) -> Option<&V> {
        self.by_row.get(row)?.get(column)
    }

    /// Prunes rows and columns left empty.
    pub fn remove(&mut self, row: &R, column: &C) -> Option<V> {
        let removed = indices::remove_nested(&mut self.by_row, row, column);
        let mirrored = indices::remove_nested(&mut self.by_column, column, row);
        debug_assert_eq!(removed.is_some(), mirrored.is_some());
        if removed.is_some() {
            self.size -= 1;
        }
        removed
    }

    /// Cell count. Saturates at `usize::MAX` on targets narrower than 64 bits.
    pub fn len(&self) -> usize {
        usize::try_from(self.size).unwrap_or(usize::MAX)
    }

    /// Cell count as a `u32`, failing rather than truncating when it does not fit.
    pub fn size_u32(&self) -> StoreResult<u32> {
        u32::try_from(self.size).map_err(|_| StoreError::SizeOverflow { len: self.size })
    }

    /// No cells.
    pub fn is_empty(&self) -> bool {
        self.size == 0
    }

    /// At least one cell.
    pub fn non_empty(&self) -> bool {
        self.size > 0
    }

    /// Drops every cell.
    pub fn clear(&mut self) {
        trace!(len = self.size, "clearing table");
        self.by_row.clear();
        self.by_column.clear();
        self.size = 0;
    }

    /// Copy of one row.
    pub fn row_view(&self, row: &R) -> Snapshot<C, V> {
        self.by_row
            .get(row)
            .map(|cells| Snapshot::from_map(cells.clone()))
            .unwrap_or_default()
    }

    /// Copy of one column.
    pub fn column_view(&self, column: &C) -> Snapshot<R, V> {
        self.by_column
            .get(column)
            .map(|cells| Snapshot::from_map(cells.clone()))
            .unwrap_or_default()
    }

    /// Cell presence.
    pub fn contains_key(&self, row: &R, column: &C) -> bool {
        self.by_row
            .get(row)
            .is_some_and(|cells| cells.contains_key(column))
    }

    /// Row presence.
    pub fn contains_row(&self, row: &R) -> bool {
        indices::has_entries(&self.by_row, row)
    }

    /// Column presence.
    pub fn contains_column(&self, column: &C) -> bool {
        indices::has_entries(&self.by_column, column)
    }

    /// Deep copy of the row index.
    pub fn row_map_view(&self) -> Snapshot<R, Snapshot<C, V>> {
        deep_copy(&self.by_row)
    }

    /// Deep copy of the column index.
    pub fn column_map_view(&self) -> Snapshot<C, Snapshot<R, V>> {
        deep_copy(&self.by_column)
    }

    /// Iterates every cell through the row index.
    pub fn cells(&self) -> impl Iterator<Item = (&R, &C, &V)> + '_ {
        self.by_row
            .iter()
            .flat_map(|(row, cells)| cells.iter().map(move |(column, value)| (row, column, value)))
    }

    /// Iterates row keys.
    pub fn row_keys(&self) -> impl Iterator<Item = &R> + '_ {
        self.by_row.keys()
    }

    /// Iterates column keys.
    pub fn column_keys(&self) -> impl Iterator<Item = &C> + '_ {
        self.by_column.keys()
    }

    /// Number of non-empty rows.
    pub fn row_count(&self) -> usize {
        self.by_row.len()
    }

    /// Number of non-empty columns.
    pub fn column_count(&self) -> usize {
        self.by_column.len()
    }
}

fn deep_copy<K: Key, J: Key, V: Clone>(index: &NestedIndex<K, J, V>) -> Snapshot<K, Snapshot<J, V>> {
    index
        .iter()
        .map(|(outer, inner)| (outer.clone(), Snapshot::from_map(inner.clone())))
        .collect()
}

impl<R: Key, C: Key, V: Clone> Table2d<R, C, V> for DualIndexStore<R, C, V> {
    fn new_empty() -> Self {
        Self::new()
    }

    fn put(&mut self, row: R, column: C, value: V) -> Option<V> {
        DualIndexStore::put(self, row, column, value)
    }

    fn get(&self, row: &R, column: &C) -> Option<&V> {
        DualIndexStore::get(self, row, column)
    }

    fn remove(&mut self, row: &R, column: &C) -> Option<V> {
        DualIndexStore::remove(self, row, column)
    }

    fn len(&self) -> usize {
        DualIndexStore::len(self)
    }

    fn clear(&mut self) {
        DualIndexStore::clear(self)
    }

    fn row_view(&self, row: &R) -> Snapshot<C, V> {
        DualIndexStore::row_view(self, row)
    }

    fn column_view(&self, column: &C) -> Snapshot<R, V> {
        DualIndexStore::column_view(self, column)
    }

    fn contains_key(&self, row: &R, column: &C) -> bool {
        DualIndexStore::contains_key(self, row, column)
    }

    fn contains_row(&self, row: &R) -> bool {
        DualIndexStore::contains_row(self, row)
    }

    fn contains_column(&self, column: &C) -> bool {
        DualIndexStore::contains_column(self, column)
    }

    fn row_map_view(&self) -> Snapshot<R, Snapshot<C, V>> {
        DualIndexStore::row_map_view(self)
    }

    fn column_map_view(&self) -> Snapshot<C, Snapshot<R, V>> {
        DualIndexStore::column_map_view(self)
    }

    fn cells<'a>(&'a self) -> impl Iterator<Item = (&'a R, &'a C, &'a V)>
    where
        R: 'a,
        C: 'a,
        V: 'a,
    {
        DualIndexStore::cells(self)
    }

    fn is_empty(&self) -> bool {
        DualIndexStore::is_empty(self)
    }

    fn non_empty(&self) -> bool {
        DualIndexStore::non_empty(self)
    }
}

impl<R: Key, C: Key, V: PartialEq> PartialEq for DualIndexStore<R, C, V> {
    fn eq(&self, other: &Self) -> bool {
        self.size == other.size && self.by_row == other.by_row
    }
}

impl<R: Key, C: Key, V: Eq> Eq for DualIndexStore<R, C, V> {}

impl<R: Key, C: Key, V: Clone> Extend<(R, C, V)> for DualIndexStore<R, C, V> {
    fn extend<I: IntoIterator<Item = (R, C, V)>>(&mut self, iter: I) {
        for (row, column, value) in iter {
            self.put(row, column, value);
        }
    }
}

impl<R: Key, C: Key, V: Clone> FromIterator<(R, C, V)> for DualIndexStore<R, C, V> {
    fn from_iter<I: IntoIterator<Item = (R, C, V)>>(iter: I) -> Self {
        let mut store = Self::new();
        store.extend(iter);
        store
    }
}
