//! Name-keyed prefix index.
//!
//! Every key passes through [`normalize`] on the way in and on the way out,
//! so `"Bancroft Way"`, `"bancroft-way"` and `"BANCROFTWAY"` are the same key.

use tracing::trace;

use crate::tst::TernarySearchTree;

/// Shortest normalized query [`PrefixIndex::values_with_prefix`] answers.
/// One-letter prefixes would match a large share of the index.
pub const MIN_PREFIX_LEN: usize = 2;

/// Reduce a name to its search key: ASCII letters only, lower-cased.
pub fn normalize(name: &str) -> String {
    name.chars()
        .filter(char::is_ascii_alphabetic)
        .map(|c| c.to_ascii_lowercase())
        .collect()
}

/// Ternary-search-tree index from normalized names to located values.
///
/// Single value per key: inserting a second value under the same normalized
/// name replaces the first.
///
/// # Example
///
/// ```
/// use atlas_search::PrefixIndex;
///
/// let mut idx = PrefixIndex::new();
/// idx.insert("Top Dog", 1);
/// idx.insert("Top Hat", 2);
/// let mut hits: Vec<i32> = idx.values_with_prefix("top").into_iter().copied().collect();
/// hits.sort();
/// assert_eq!(hits, [1, 2]);
/// ```
pub struct PrefixIndex<V> {
    tree: TernarySearchTree<V>,
}

impl<V> PrefixIndex<V> {
    pub fn new() -> Self {
        Self { tree: TernarySearchTree::new() }
    }

    pub fn len(&self) -> usize {
        self.tree.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tree.is_empty()
    }

    /// Index `value` under the normalized form of `name`.
    ///
    /// Returns the value previously stored under that key.  Names without a
    /// single ASCII letter normalize to the empty key and are not indexed.
    pub fn insert(&mut self, name: &str, value: V) -> Option<V> {
        let key = normalize(name);
        if key.is_empty() {
            trace!(name, "skipping name with no alphabetic characters");
            return None;
        }
        self.tree.insert(&key, value)
    }

    /// Value indexed under exactly this (normalized) name.
    pub fn get(&self, name: &str) -> Option<&V> {
        self.tree.get(&normalize(name))
    }

    /// Every value whose normalized name starts with the normalized `query`.
    ///
    /// Queries shorter than [`MIN_PREFIX_LEN`] after normalization return an
    /// empty result regardless of the index contents.  Order is unspecified.
    pub fn values_with_prefix(&self, query: &str) -> Vec<&V> {
        let key = normalize(query);
        if key.len() < MIN_PREFIX_LEN {
            return Vec::new();
        }
        let hits = self.tree.values_with_prefix(&key);
        trace!(query, hits = hits.len(), "prefix lookup");
        hits
    }
}

impl<V> Default for PrefixIndex<V> {
    fn default() -> Self {
        Self::new()
    }
}
