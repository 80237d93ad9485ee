//! Exact subset solver.
//!
//! [`table_optimise`] rearranges a small window of items into a provably best
//! ordering for exactly that item set, memoizing results per set so that
//! overlapping windows seen across refinement passes collapse from
//! exponential to roughly single-subset cost. [`brute_force_optimise`] is the
//! memo-free enumeration path over the same contract, and doubles as the test
//! oracle for optimality.
//!
//! Both are exhaustive searches: callers must keep windows small enough to be
//! tractable (practically at most 15 or so items) and chunk larger sequences
//! into qualifying windows themselves.

mod cache;

pub use cache::MemoCache;
pub(crate) use cache::UNKNOWN_SCORE;

use crate::permutation::next_permutation;
use crate::scoring::{compare, score, Preference};
use crate::tournament::Tournament;

/// Rearranges `items` in place into the best ordering for exactly that item
/// set, returning whether the arrangement changed.
///
/// - One item or fewer: no-op.
/// - Two items: compare-and-swap.
/// - Otherwise: consult the cache for this item set. A known cached best
///   strictly beating the current arrangement is copied in; a known entry
///   that doesn't beat it means the current arrangement already achieves the
///   set's optimum and nothing happens. On a cache miss, every element is
///   tried as the forward anchor with the remaining items solved recursively,
///   the best of the variants is recorded to the cache and written back.
///
/// Exact for the given set, exponential without memoization; the shared
/// cache is what makes repeated overlapping windows affordable.
///
/// A reported change implies the new score is strictly greater than the old
/// one: an equal-scoring rearrangement is never written back.
pub fn table_optimise(t: &Tournament, cache: &mut MemoCache, items: &mut [usize]) -> bool {
    let m = items.len();
    if m <= 1 {
        return false;
    }
    if m == 2 {
        if compare(t, items[0], items[1]) == Preference::After {
            items.swap(0, 1);
            return true;
        }
        return false;
    }

    let current = score(t, items);

    if let Some(entry) = cache.lookup(items) {
        // A hit is never trusted blind: re-score the stored arrangement so a
        // stale entry can only cost a missed improvement, never a wrong
        // result.
        let verified = score(t, &entry.ordering);
        if verified > current {
            let best = entry.ordering.clone();
            items.copy_from_slice(&best);
            return true;
        }
        return false;
    }

    let mut best: Vec<usize> = items.to_vec();
    let mut best_score = UNKNOWN_SCORE;
    let mut work = items.to_vec();
    for anchor in 0..m {
        work.copy_from_slice(items);
        work.swap(0, anchor);
        table_optimise(t, cache, &mut work[1..]);
        let candidate = score(t, &work);
        if candidate > best_score {
            best_score = candidate;
            best.copy_from_slice(&work);
        }
    }

    cache.record(best_score, &best);

    if best_score > current {
        items.copy_from_slice(&best);
        true
    } else {
        false
    }
}

/// Rearranges `items` in place into the best ordering for that item set by
/// enumerating every permutation, returning whether the arrangement changed.
///
/// No memoization: cost is `len!` score evaluations. The enumeration starts
/// from the lexicographically first arrangement of the set so all `len!`
/// permutations are visited regardless of the input arrangement.
pub fn brute_force_optimise(t: &Tournament, items: &mut [usize]) -> bool {
    let m = items.len();
    if m <= 1 {
        return false;
    }
    if m == 2 {
        if compare(t, items[0], items[1]) == Preference::After {
            items.swap(0, 1);
            return true;
        }
        return false;
    }

    let current = score(t, items);

    let mut work = items.to_vec();
    work.sort_unstable();
    let mut best = work.clone();
    let mut best_score = score(t, &work);
    while next_permutation(&mut work) < m {
        let candidate = score(t, &work);
        if candidate > best_score {
            best_score = candidate;
            best.copy_from_slice(&work);
        }
    }

    if best_score > current {
        items.copy_from_slice(&best);
        true
    } else {
        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};

    fn chain3() -> Tournament {
        let mut t = Tournament::new(3);
        t.set(0, 1, 1.0);
        t.set(1, 2, 1.0);
        t.set(0, 2, 1.0);
        t
    }

    fn random_tournament(n: usize, seed: u64) -> Tournament {
        let mut rng = StdRng::seed_from_u64(seed);
        let mut t = Tournament::new(n);
        for i in 0..n {
            for j in 0..n {
                if i != j {
                    t.set(i, j, rng.random_range(0.0..10.0));
                }
            }
        }
        t
    }

    fn is_permutation(ordering: &[usize], n: usize) -> bool {
        let mut sorted = ordering.to_vec();
        sorted.sort_unstable();
        sorted == (0..n).collect::<Vec<_>>()
    }

    #[test]
    fn test_table_optimise_trivial_sizes() {
        let t = chain3();
        let mut cache = MemoCache::new();
        let mut empty: Vec<usize> = vec![];
        assert!(!table_optimise(&t, &mut cache, &mut empty));
        let mut single = vec![1];
        assert!(!table_optimise(&t, &mut cache, &mut single));
    }

    #[test]
    fn test_table_optimise_pair_swap() {
        let t = chain3();
        let mut cache = MemoCache::new();
        let mut pair = vec![1, 0];
        assert!(table_optimise(&t, &mut cache, &mut pair));
        assert_eq!(pair, vec![0, 1]);
        assert!(!table_optimise(&t, &mut cache, &mut pair));
    }

    #[test]
    fn test_table_optimise_solves_chain() {
        let t = chain3();
        let mut cache = MemoCache::new();
        let mut ordering = vec![2, 0, 1];
        assert!(table_optimise(&t, &mut cache, &mut ordering));
        assert_eq!(ordering, vec![0, 1, 2]);
        assert_eq!(score(&t, &ordering), 3.0);
        // Already at the set's optimum: the cache hit reports unchanged.
        assert!(!table_optimise(&t, &mut cache, &mut ordering));
        assert_eq!(ordering, vec![0, 1, 2]);
    }

    #[test]
    fn test_table_optimise_matches_brute_force() {
        for n in 3..=8 {
            for seed in 0..4 {
                let t = random_tournament(n, seed);
                let mut cache = MemoCache::new();

                let mut via_table: Vec<usize> = (0..n).collect();
                table_optimise(&t, &mut cache, &mut via_table);
                assert!(!table_optimise(&t, &mut cache, &mut via_table));

                let mut via_enum: Vec<usize> = (0..n).collect();
                brute_force_optimise(&t, &mut via_enum);

                assert!(is_permutation(&via_table, n));
                assert!(
                    (score(&t, &via_table) - score(&t, &via_enum)).abs() < 1e-9,
                    "n={n} seed={seed}: table {} vs enumeration {}",
                    score(&t, &via_table),
                    score(&t, &via_enum)
                );
            }
        }
    }

    #[test]
    fn test_change_report_implies_strict_improvement() {
        for seed in 0..8 {
            let t = random_tournament(6, seed);
            let mut cache = MemoCache::new();
            let mut ordering: Vec<usize> = vec![5, 3, 1, 0, 4, 2];
            let before = score(&t, &ordering);
            let changed = table_optimise(&t, &mut cache, &mut ordering);
            let after = score(&t, &ordering);
            if changed {
                assert!(after > before, "seed={seed}");
            } else {
                assert_eq!(before, after);
            }
        }
    }

    #[test]
    fn test_warm_cache_matches_cold_cache() {
        let t = random_tournament(7, 99);
        let mut warm = MemoCache::new();

        // Populate the cache with several overlapping windows first.
        let mut scratch: Vec<usize> = (0..7).collect();
        for start in 0..3 {
            table_optimise(&t, &mut warm, &mut scratch[start..start + 5]);
        }

        let mut with_warm: Vec<usize> = vec![6, 2, 4, 0, 5, 1, 3];
        table_optimise(&t, &mut warm, &mut with_warm);

        let mut cold = MemoCache::new();
        let mut with_cold: Vec<usize> = vec![6, 2, 4, 0, 5, 1, 3];
        table_optimise(&t, &mut cold, &mut with_cold);

        assert_eq!(score(&t, &with_warm), score(&t, &with_cold));
    }

    #[test]
    fn test_cached_best_is_copied_into_worse_window() {
        let t = random_tournament(5, 7);
        let mut cache = MemoCache::new();

        let mut first: Vec<usize> = (0..5).collect();
        table_optimise(&t, &mut cache, &mut first);
        let optimum = score(&t, &first);

        // Same item set, deliberately poor arrangement: the cached entry
        // short-circuits the search.
        let mut second = vec![4, 3, 2, 1, 0];
        let changed = table_optimise(&t, &mut cache, &mut second);
        assert_eq!(score(&t, &second), optimum);
        if second != [4, 3, 2, 1, 0] {
            assert!(changed);
        }
    }

    #[test]
    fn test_brute_force_idempotent() {
        let t = random_tournament(5, 13);
        let mut ordering: Vec<usize> = (0..5).collect();
        brute_force_optimise(&t, &mut ordering);
        assert!(!brute_force_optimise(&t, &mut ordering));
    }

    #[test]
    fn test_tie_pair_either_order_accepted() {
        let mut t = Tournament::new(2);
        t.set(0, 1, 0.5);
        t.set(1, 0, 0.5);
        let mut cache = MemoCache::new();
        let mut ordering = vec![0, 1];
        assert!(!table_optimise(&t, &mut cache, &mut ordering));
        let mut reversed = vec![1, 0];
        assert!(!table_optimise(&t, &mut cache, &mut reversed));
        assert_eq!(score(&t, &ordering), 0.5);
        assert_eq!(score(&t, &reversed), 0.5);
    }
}
