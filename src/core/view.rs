//! Read-only copies handed out by the view operations.

use std::hash::Hash;

use hashbrown::{HashMap, hash_map};

/// Independently owned, read-only map.
///
/// Every view operation on [`crate::core::store::DualIndexStore`] copies the
/// relevant entries into a `Snapshot`, so later writes to the store never show
/// up in a snapshot taken earlier. The type exposes lookups and iteration but no
/// mutation; use [`Snapshot::into_inner`] to take ownership of the entries.
#[derive(Debug, Clone)]
pub struct Snapshot<K, V> {
    entries: HashMap<K, V>,
}

impl<K, V> Default for Snapshot<K, V> {
    fn default() -> Self {
        Self {
            entries: HashMap::new(),
        }
    }
}

impl<K, V> Snapshot<K, V> {
    pub(crate) fn from_map(entries: HashMap<K, V>) -> Self {
        Self { entries }
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True when the snapshot holds no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterates entries in unspecified order.
    pub fn iter(&self) -> hash_map::Iter<'_, K, V> {
        self.entries.iter()
    }

    /// Iterates keys in unspecified order.
    pub fn keys(&self) -> hash_map::Keys<'_, K, V> {
        self.entries.keys()
    }

    /// Iterates values in unspecified order.
    pub fn values(&self) -> hash_map::Values<'_, K, V> {
        self.entries.values()
    }

    /// Consumes the snapshot, returning the owned map.
    pub fn into_inner(self) -> HashMap<K, V> {
        self.entries
    }
}

impl<K: Eq + Hash, V> Snapshot<K, V> {
    /// Value stored under `key`, if any.
    pub fn get(&self, key: &K) -> Option<&V> {
        self.entries.get(key)
    }

    /// True when `key` is present.
    pub fn contains_key(&self, key: &K) -> bool {
        self.entries.contains_key(key)
    }
}

impl<K: Eq + Hash, V: PartialEq> PartialEq for Snapshot<K, V> {
    fn eq(&self, other: &Self) -> bool {
        self.entries == other.entries
    }
}

impl<K: Eq + Hash, V: Eq> Eq for Snapshot<K, V> {}

impl<K: Eq + Hash, V> FromIterator<(K, V)> for Snapshot<K, V> {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self::from_map(iter.into_iter().collect())
    }
}

impl<K, V> IntoIterator for Snapshot<K, V> {
    type Item = (K, V);
    type IntoIter = hash_map::IntoIter<K, V>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}

impl<'a, K, V> IntoIterator for &'a Snapshot<K, V> {
    type Item = (&'a K, &'a V);
    type IntoIter = hash_map::Iter<'a, K, V>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}
