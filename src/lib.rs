//! Two-dimensional map with O(1) access by row, by column, or by both.
//!
//! [`core::store::DualIndexStore`] keeps a row index and a mirrored column
//! index in lock step, so "every column of a row" and "every row of a column"
//! are both direct lookups. Views hand back independent copies.
//!
//! # Examples
//!
//! ```
//! use map2d::{core::store::DualIndexStore, table::Table2d};
//!
//! let mut store = DualIndexStore::new();
//! store.put("A", 'x', 1);
//! store.put("A", 'y', 2);
//! store.put("B", 'x', 3);
//!
//! assert_eq!(store.len(), 3);
//! assert_eq!(store.get(&"B", &'x'), Some(&3));
//! assert_eq!(store.get_or(&"B", &'y', 99), 99);
//!
//! let column = store.column_view(&'x');
//! assert_eq!(column.get(&"A"), Some(&1));
//! assert_eq!(column.get(&"B"), Some(&3));
//!
//! assert_eq!(store.remove(&"A", &'x'), Some(1));
//! assert_eq!(store.row_view(&"A").len(), 1);
//! assert!(column.contains_key(&"A"));
//! ```
//!
//! Converting into a table with different key and value types:
//! ```
//! use map2d::{core::store::DualIndexStore, table::Table2d};
//!
//! let store: DualIndexStore<u32, u32, u32> = [(1, 2, 3), (4, 5, 6)].into_iter().collect();
//! let labels: DualIndexStore<String, String, u64> = store.copy_with_conversion(
//!     |row| format!("r{row}"),
//!     |column| format!("c{column}"),
//!     |value| u64::from(*value) * 10,
//! );
//! assert_eq!(labels.get(&"r4".to_string(), &"c5".to_string()), Some(&60));
//! ```
#![deny(missing_docs)]

/// Store construction settings.
pub mod config;
/// Dual-indexed store, index helpers, and snapshot views.
pub mod core;
/// Serializable table export format.
pub mod snapshot;
/// Capability trait shared by two-dimensional maps.
pub mod table;
