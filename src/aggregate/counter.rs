use std::collections::HashMap;
use std::hash::Hash;

use super::counts::CategoryCount;

/// Insertion-ordered tally. Keys keep the position at which they were first
/// seen (or seeded), which gives every grouping a stable, data-driven order
/// and lets `dominant` break ties by first occurrence.
#[derive(Debug, Clone)]
pub struct OrderedCounter<K> {
    index: HashMap<K, usize>,
    entries: Vec<(K, usize)>,
}

impl<K: Eq + Hash + Clone> OrderedCounter<K> {
    pub fn new() -> Self {
        Self {
            index: HashMap::new(),
            entries: Vec::new(),
        }
    }

    /// Pre-seeds `domain` with zero counts so they appear even when unobserved.
    pub fn with_domain(domain: impl IntoIterator<Item = K>) -> Self {
        let mut counter = Self::new();
        for key in domain {
            counter.position_or_insert(key);
        }
        counter
    }

    /// Counts one occurrence of `key` and returns its position.
    pub fn add(&mut self, key: K) -> usize {
        let pos = self.position_or_insert(key);
        self.entries[pos].1 += 1;
        pos
    }

    /// Counts `key` only if it is already tracked. Returns whether it was.
    pub fn add_existing(&mut self, key: &K) -> bool {
        match self.index.get(key) {
            Some(&pos) => {
                self.entries[pos].1 += 1;
                true
            }
            None => false,
        }
    }

    pub fn position(&self, key: &K) -> Option<usize> {
        self.index.get(key).copied()
    }

    pub fn get(&self, key: &K) -> usize {
        self.position(key).map_or(0, |pos| self.entries[pos].1)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn total(&self) -> usize {
        self.entries.iter().map(|(_, n)| n).sum()
    }

    pub fn keys(&self) -> impl Iterator<Item = &K> {
        self.entries.iter().map(|(k, _)| k)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&K, usize)> {
        self.entries.iter().map(|(k, n)| (k, *n))
    }

    /// Most frequent key; earliest-seen wins a tie. `None` when nothing was counted.
    pub fn dominant(&self) -> Option<&K> {
        let mut best: Option<&(K, usize)> = None;
        for entry in &self.entries {
            if entry.1 > best.map_or(0, |b| b.1) {
                best = Some(entry);
            }
        }
        best.map(|(k, _)| k)
    }

    pub fn into_counts(self) -> Vec<CategoryCount<K>> {
        self.entries
            .into_iter()
            .map(|(key, count)| CategoryCount { key, count })
            .collect()
    }

    fn position_or_insert(&mut self, key: K) -> usize {
        if let Some(&pos) = self.index.get(&key) {
            return pos;
        }
        let pos = self.entries.len();
        self.index.insert(key.clone(), pos);
        self.entries.push((key, 0));
        pos
    }
}

impl<K: Eq + Hash + Clone> Default for OrderedCounter<K> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K: Eq + Hash + Clone> FromIterator<K> for OrderedCounter<K> {
    fn from_iter<I: IntoIterator<Item = K>>(iter: I) -> Self {
        let mut counter = Self::new();
        for key in iter {
            counter.add(key);
        }
        counter
    }
}
