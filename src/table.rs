//! Capability contract for two-dimensional maps.
//!
//! [`Table2d`] declares the core lookups and mutations an implementation must
//! provide and derives the bulk helpers (`put_all*`, `fill_map_from_*`,
//! `copy_with_conversion*`) from them, so every implementation shares the same
//! overwrite and size-accounting rules.

use std::hash::Hash;

use tracing::trace;

use crate::core::view::Snapshot;

/// Bounds required of row and column keys.
pub trait Key: Eq + Hash + Clone {}

impl<T: Eq + Hash + Clone> Key for T {}

/// A map keyed by an ordered (row, column) pair.
pub trait Table2d<R: Key, C: Key, V: Clone> {
    /// Creates an empty table.
    fn new_empty() -> Self
    where
        Self: Sized;

    /// Stores `value` at (`row`, `column`), returning the value it replaced.
    fn put(&mut self, row: R, column: C, value: V) -> Option<V>;

    /// Value at (`row`, `column`), if any.
    fn get(&self, row: &R, column: &C) -> Option<&V>;

    /// Removes the cell at (`row`, `column`), returning its value.
    fn remove(&mut self, row: &R, column: &C) -> Option<V>;

    /// Number of cells.
    fn len(&self) -> usize;

    /// Removes every cell.
    fn clear(&mut self);

    /// Copy of the column→value entries of `row`; empty when the row is absent.
    fn row_view(&self, row: &R) -> Snapshot<C, V>;

    /// Copy of the row→value entries of `column`; empty when the column is absent.
    fn column_view(&self, column: &C) -> Snapshot<R, V>;

    /// True when a cell exists at (`row`, `column`).
    fn contains_key(&self, row: &R, column: &C) -> bool;

    /// True when `row` holds at least one cell.
    fn contains_row(&self, row: &R) -> bool;

    /// True when `column` holds at least one cell.
    fn contains_column(&self, column: &C) -> bool;

    /// Deep copy of every row.
    fn row_map_view(&self) -> Snapshot<R, Snapshot<C, V>>;

    /// Deep copy of every column.
    fn column_map_view(&self) -> Snapshot<C, Snapshot<R, V>>;

    /// Iterates every cell in unspecified order.
    fn cells<'a>(&'a self) -> impl Iterator<Item = (&'a R, &'a C, &'a V)>
    where
        R: 'a,
        C: 'a,
        V: 'a;

    /// Value at (`row`, `column`), or `default` when absent.
    ///
    /// A stored value equal to `default` is indistinguishable from absence;
    /// use [`Table2d::get`] when that matters.
    fn get_or(&self, row: &R, column: &C, default: V) -> V {
        self.get(row, column).cloned().unwrap_or(default)
    }

    /// True when the table holds no cells.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// True when the table holds at least one cell.
    fn non_empty(&self) -> bool {
        !self.is_empty()
    }

    /// True when any cell holds a value equal to `value`. Scans every cell.
    fn contains_value(&self, value: &V) -> bool
    where
        V: PartialEq,
    {
        self.cells().any(|(_, _, v)| v == value)
    }

    /// Adds the entries of `row` to `target` without clearing it first.
    fn fill_map_from_row<T>(&self, target: &mut T, row: &R) -> &Self
    where
        Self: Sized,
        T: Extend<(C, V)>,
    {
        target.extend(self.row_view(row));
        self
    }

    /// Adds the entries of `column` to `target` without clearing it first.
    fn fill_map_from_column<T>(&self, target: &mut T, column: &C) -> &Self
    where
        Self: Sized,
        T: Extend<(R, V)>,
    {
        target.extend(self.column_view(column));
        self
    }

    /// Puts every cell of `source` into this table.
    fn put_all<S>(&mut self, source: &S) -> &mut Self
    where
        Self: Sized,
        S: Table2d<R, C, V>,
    {
        let mut copied = 0usize;
        for (row, column, value) in source.cells() {
            self.put(row.clone(), column.clone(), value.clone());
            copied += 1;
        }
        trace!(copied, len = self.len(), "put_all");
        self
    }

    /// Puts every (column, value) pair of `source` into `row`.
    fn put_all_to_row<I>(&mut self, source: I, row: R) -> &mut Self
    where
        Self: Sized,
        I: IntoIterator<Item = (C, V)>,
    {
        for (column, value) in source {
            self.put(row.clone(), column, value);
        }
        trace!(len = self.len(), "put_all_to_row");
        self
    }

    /// Puts every (row, value) pair of `source` into `column`.
    fn put_all_to_column<I>(&mut self, source: I, column: C) -> &mut Self
    where
        Self: Sized,
        I: IntoIterator<Item = (R, V)>,
    {
        for (row, value) in source {
            self.put(row, column.clone(), value);
        }
        trace!(len = self.len(), "put_all_to_column");
        self
    }

    /// Converts every cell into a table built by `factory`.
    ///
    /// When two cells convert to the same (row, column) pair the one visited
    /// last wins. Visit order is unspecified.
    fn copy_with_conversion_into<R2, C2, V2, T, F, FR, FC, FV>(
        &self,
        factory: F,
        mut row_fn: FR,
        mut column_fn: FC,
        mut value_fn: FV,
    ) -> T
    where
        Self: Sized,
        R2: Key,
        C2: Key,
        V2: Clone,
        T: Table2d<R2, C2, V2>,
        F: FnOnce() -> T,
        FR: FnMut(&R) -> R2,
        FC: FnMut(&C) -> C2,
        FV: FnMut(&V) -> V2,
    {
        let mut converted = factory();
        for (row, column, value) in self.cells() {
            converted.put(row_fn(row), column_fn(column), value_fn(value));
        }
        trace!(source_len = self.len(), len = converted.len(), "copy_with_conversion");
        converted
    }

    /// [`Table2d::copy_with_conversion_into`] using `T::new_empty` as the factory.
    fn copy_with_conversion<R2, C2, V2, T, FR, FC, FV>(
        &self,
        row_fn: FR,
        column_fn: FC,
        value_fn: FV,
    ) -> T
    where
        Self: Sized,
        R2: Key,
        C2: Key,
        V2: Clone,
        T: Table2d<R2, C2, V2>,
        FR: FnMut(&R) -> R2,
        FC: FnMut(&C) -> C2,
        FV: FnMut(&V) -> V2,
    {
        self.copy_with_conversion_into(T::new_empty, row_fn, column_fn, value_fn)
    }
}
