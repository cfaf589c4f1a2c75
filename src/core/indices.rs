use std::hash::Hash;

use hashbrown::HashMap;

/// Outer key to inner key to value. The store keeps one of these per axis.
pub type NestedIndex<K, J, V> = HashMap<K, HashMap<J, V>>;

pub(crate) fn with_capacity<K, J, V>(capacity: usize) -> NestedIndex<K, J, V> {
    HashMap::with_capacity(capacity)
}

pub(crate) fn insert_nested<K, J, V>(
    index: &mut NestedIndex<K, J, V>,
    outer: K,
    inner: J,
    value: V,
) -> Option<V>
where
    K: Eq + Hash,
    J: Eq + Hash,
{
    index.entry(outer).or_default().insert(inner, value)
}

/// Removes `inner` under `outer`, dropping the inner map once it is empty.
pub(crate) fn remove_nested<K, J, V>(
    index: &mut NestedIndex<K, J, V>,
    outer: &K,
    inner: &J,
) -> Option<V>
where
    K: Eq + Hash,
    J: Eq + Hash,
{
    let inner_map = index.get_mut(outer)?;
    let removed = inner_map.remove(inner);
    if inner_map.is_empty() {
        index.remove(outer);
    }
    removed
}

pub(crate) fn has_entries<K, J, V>(index: &NestedIndex<K, J, V>, outer: &K) -> bool
where
    K: Eq + Hash,
{
    index.get(outer).is_some_and(|inner| !inner.is_empty())
}
