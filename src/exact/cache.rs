//! Memoization table for the exact subset solver.
//!
//! Keyed by the *set* of items occupying a window, independent of their
//! current arrangement: the canonical key is the sorted item list. Each entry
//! holds the best score seen for that set together with the arrangement that
//! achieves it, and is only ever updated monotonically — a write replaces the
//! stored best when the new score is strictly greater.

use std::collections::HashMap;

/// Sentinel score for an entry whose set has not been solved yet.
///
/// Weights are non-negative, so no real arrangement can score below zero.
pub const UNKNOWN_SCORE: f64 = -1.0;

#[derive(Debug, Clone)]
pub(crate) struct CacheEntry {
    pub score: f64,
    pub ordering: Vec<usize>,
}

/// Per-run memoization cache shared by the exact solver and the refinement
/// passes that call it.
///
/// Scoped to one optimization run over one tournament; [`reset`](Self::reset)
/// drops all entries between pipeline phases that revisit windows of a
/// different character, bounding memory growth and discarding entries that
/// can no longer pay for themselves.
#[derive(Debug, Default)]
pub struct MemoCache {
    entries: HashMap<Vec<usize>, CacheEntry>,
}

impl MemoCache {
    /// Creates an empty cache.
    pub fn new() -> Self {
        Self::default()
    }

    /// Drops every entry.
    pub fn reset(&mut self) {
        self.entries.clear();
    }

    /// Number of item sets with a stored entry.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True when no entry is stored.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    fn key_for(items: &[usize]) -> Vec<usize> {
        let mut key = items.to_vec();
        key.sort_unstable();
        key
    }

    /// Looks up the entry for the item set occupying `items`, if any with a
    /// known score exists.
    pub(crate) fn lookup(&self, items: &[usize]) -> Option<&CacheEntry> {
        self.entries
            .get(&Self::key_for(items))
            .filter(|entry| entry.score > UNKNOWN_SCORE)
    }

    /// Records `ordering` with `score` for its item set.
    ///
    /// Returns whether the entry was updated; an existing entry with an equal
    /// or greater score is left untouched.
    pub(crate) fn record(&mut self, score: f64, ordering: &[usize]) -> bool {
        let entry = self
            .entries
            .entry(Self::key_for(ordering))
            .or_insert_with(|| CacheEntry {
                score: UNKNOWN_SCORE,
                ordering: Vec::new(),
            });
        if score > entry.score {
            entry.score = score;
            entry.ordering = ordering.to_vec();
            true
        } else {
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lookup_is_order_insensitive() {
        let mut cache = MemoCache::new();
        assert!(cache.record(5.0, &[3, 1, 2]));
        let entry = cache.lookup(&[1, 2, 3]).expect("entry for same set");
        assert_eq!(entry.score, 5.0);
        assert_eq!(entry.ordering, vec![3, 1, 2]);
        assert!(cache.lookup(&[1, 2, 4]).is_none());
    }

    #[test]
    fn test_record_is_monotonic() {
        let mut cache = MemoCache::new();
        assert!(cache.record(5.0, &[0, 1]));
        assert!(!cache.record(4.0, &[1, 0]));
        assert!(!cache.record(5.0, &[1, 0]));
        assert_eq!(cache.lookup(&[0, 1]).unwrap().ordering, vec![0, 1]);
        assert!(cache.record(6.0, &[1, 0]));
        assert_eq!(cache.lookup(&[0, 1]).unwrap().ordering, vec![1, 0]);
    }

    #[test]
    fn test_reset_clears_entries() {
        let mut cache = MemoCache::new();
        cache.record(1.0, &[0, 1, 2]);
        assert_eq!(cache.len(), 1);
        cache.reset();
        assert!(cache.is_empty());
        assert!(cache.lookup(&[0, 1, 2]).is_none());
    }
}
