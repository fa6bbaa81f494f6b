// ABOUTME: Insertion-ordered map used for frequency tallies and calendar day buckets
// ABOUTME: Iterates keys in first-insertion order while keeping hashed lookup
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Worship Planner Contributors

use std::borrow::Borrow;
use std::collections::HashMap;
use std::hash::Hash;

/// Map that remembers the order in which keys were first inserted
///
/// Re-inserting or updating an existing key never moves it. Suggestion
/// ranking relies on this to break count ties by first encounter.
#[derive(Debug, Clone)]
pub struct InsertionOrderedMap<K, V> {
    index: HashMap<K, usize>,
    entries: Vec<(K, V)>,
}

impl<K, V> Default for InsertionOrderedMap<K, V> {
    fn default() -> Self {
        Self {
            index: HashMap::new(),
            entries: Vec::new(),
        }
    }
}

impl<K: Eq + Hash + Clone, V> InsertionOrderedMap<K, V> {
    /// Create an empty map
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Mutable access to the value for `key`, inserting `default()` at the end if absent
    pub fn entry_or_insert_with(&mut self, key: K, default: impl FnOnce() -> V) -> &mut V {
        let existing = self.index.get(&key).copied();
        let slot = existing.unwrap_or_else(|| {
            let slot = self.entries.len();
            self.index.insert(key.clone(), slot);
            self.entries.push((key, default()));
            slot
        });
        &mut self.entries[slot].1
    }

    /// Value for `key`
    #[must_use]
    pub fn get<Q>(&self, key: &Q) -> Option<&V>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.index.get(key).map(|&slot| &self.entries[slot].1)
    }

    /// Number of distinct keys
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the map holds no keys
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Keys in first-insertion order
    pub fn keys(&self) -> impl Iterator<Item = &K> {
        self.entries.iter().map(|(key, _)| key)
    }

    /// Entries in first-insertion order
    pub fn iter(&self) -> impl Iterator<Item = (&K, &V)> {
        self.entries.iter().map(|(key, value)| (key, value))
    }

    /// Consume the map into its entries in first-insertion order
    #[must_use]
    pub fn into_entries(self) -> Vec<(K, V)> {
        self.entries
    }
}
