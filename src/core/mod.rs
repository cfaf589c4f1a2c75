//! Dual-indexed storage engine and the read-only views it hands out.

/// Nested index alias and mirrored insert/remove helpers.
pub mod indices;
/// Authoritative two-dimensional store.
pub mod store;
/// Read-only snapshot map type.
pub mod view;
