//! Local-search refinement passes.
//!
//! Each pass takes an ordering (or a window of one), hill-climbs a bounded
//! neighborhood, and returns whether it changed anything. All passes
//! terminate by construction — bounded loop counts or strict-improvement
//! stopping rules — and all except [`force_connectivity`] never decrease the
//! ordering's score.
//!
//! The passes built on [`table_optimise`] share the caller's [`MemoCache`];
//! callers decide when to reset it between phases.

use crate::exact::{table_optimise, MemoCache};
use crate::scoring::{compare, score, Preference};
use crate::tournament::Tournament;

/// Relative per-pass gain below which [`window_optimise`] stops iterating.
const PASS_IMPROVEMENT_THRESHOLD: f64 = 0.00001;

/// Longest sub-range considered by [`cycle_all_subranges`].
const MAX_CYCLE_LENGTH: usize = 10;

/// Repeatedly slides a window of `window` items across the whole sequence,
/// exact-solving each window in place, until a full pass produces no change
/// or the relative score gain of a pass falls below `1e-5`.
pub fn window_optimise(
    t: &Tournament,
    cache: &mut MemoCache,
    ordering: &mut [usize],
    window: usize,
) -> bool {
    let n = ordering.len();
    if n == 0 || window < 2 {
        return false;
    }
    if window >= n {
        return table_optimise(t, cache, ordering);
    }

    let mut changed_any = false;
    loop {
        let before = score(t, ordering);
        let mut changed = false;
        for start in 0..=(n - window) {
            if table_optimise(t, cache, &mut ordering[start..start + window]) {
                changed = true;
            }
        }
        if !changed {
            break;
        }
        changed_any = true;

        let gain = score(t, ordering) - before;
        if gain / before.max(f64::MIN_POSITIVE) < PASS_IMPROVEMENT_THRESHOLD {
            break;
        }
    }
    changed_any
}

/// Exact-solves consecutive disjoint chunks of `stride` items in one pass
/// (the last chunk may be shorter). No overlap: fast large-scale local
/// consistency rather than a fixed point.
pub fn stride_optimise(
    t: &Tournament,
    cache: &mut MemoCache,
    ordering: &mut [usize],
    stride: usize,
) -> bool {
    if stride < 2 {
        return false;
    }
    let mut changed = false;
    for chunk in ordering.chunks_mut(stride) {
        if table_optimise(t, cache, chunk) {
            changed = true;
        }
    }
    changed
}

/// Relocates single items past runs of neighbors wherever doing so raises the
/// score, restarting the scan after every relocation, until a full sweep
/// finds nothing.
///
/// For each position the score delta of moving that item past one more
/// neighbor is accumulated incrementally; the first position at which the
/// accumulated delta turns strictly positive triggers an immediate rotation
/// of the intervening items.
pub fn single_move_optimise(t: &Tournament, ordering: &mut [usize]) -> bool {
    let n = ordering.len();
    let mut changed = false;

    'sweep: loop {
        for position in 0..n {
            let item = ordering[position];

            // Leftward: moving `item` in front of each preceding neighbor.
            let mut delta = 0.0;
            for target in (0..position).rev() {
                let neighbor = ordering[target];
                delta += t.get(item, neighbor) - t.get(neighbor, item);
                if delta > 0.0 {
                    ordering[target..=position].rotate_right(1);
                    changed = true;
                    continue 'sweep;
                }
            }

            // Rightward: moving `item` behind each following neighbor.
            let mut delta = 0.0;
            for target in (position + 1)..n {
                let neighbor = ordering[target];
                delta += t.get(neighbor, item) - t.get(item, neighbor);
                if delta > 0.0 {
                    ordering[position..=target].rotate_left(1);
                    changed = true;
                    continue 'sweep;
                }
            }
        }
        break;
    }
    changed
}

/// Stable insertion sort over `compare`: strictly inverted adjacent pairs are
/// swapped, ties are treated as already in relative order and left alone.
pub fn local_sort(t: &Tournament, ordering: &mut [usize]) -> bool {
    let mut changed = false;
    for i in 1..ordering.len() {
        let mut j = i;
        while j > 0 && compare(t, ordering[j], ordering[j - 1]) == Preference::Before {
            ordering.swap(j, j - 1);
            j -= 1;
            changed = true;
        }
    }
    changed
}

/// Pulls the nearest strictly-related later item up behind any position whose
/// following neighbor it is tied with, so runs of mutually tied items end up
/// contiguous instead of interleaved with decided items.
///
/// Not score-monotone: moved items are only ever shifted past ties, so any
/// score change is bounded by the tie tolerance per crossing.
pub fn force_connectivity(t: &Tournament, ordering: &mut [usize]) -> bool {
    let n = ordering.len();
    let mut changed = false;
    for i in 0..n.saturating_sub(1) {
        if compare(t, ordering[i], ordering[i + 1]) != Preference::Tie {
            continue;
        }
        let related = ((i + 2)..n).find(|&j| compare(t, ordering[i], ordering[j]) != Preference::Tie);
        if let Some(j) = related {
            ordering[i + 1..=j].rotate_right(1);
            changed = true;
        }
    }
    changed
}

/// Applies the best-scoring cyclic rotation of `items`, returning whether a
/// rotation strictly beat the current arrangement.
///
/// A rotation permutes only the items inside the sub-range, so scoring the
/// sub-range alone is enough to rank rotations of a window of a larger
/// ordering.
pub fn find_best_cycle(t: &Tournament, items: &mut [usize]) -> bool {
    let m = items.len();
    if m < 2 {
        return false;
    }

    let mut best_rotation = 0;
    let mut best_score = score(t, items);
    let mut work = items.to_vec();
    for rotation in 1..m {
        work.rotate_left(1);
        let candidate = score(t, &work);
        if candidate > best_score {
            best_score = candidate;
            best_rotation = rotation;
        }
    }

    if best_rotation > 0 {
        items.rotate_left(best_rotation);
        true
    } else {
        false
    }
}

/// Runs [`find_best_cycle`] over every sub-range of length 3 up to
/// [`MAX_CYCLE_LENGTH`], repeating until a full sweep finds no improving
/// rotation. Captures improvements that require moving several items around
/// a cycle boundary at once, which pairwise and window moves miss.
pub fn cycle_all_subranges(t: &Tournament, ordering: &mut [usize]) -> bool {
    let n = ordering.len();
    let mut changed_any = false;
    loop {
        let mut changed = false;
        for start in 0..n {
            let longest = MAX_CYCLE_LENGTH.min(n - start);
            if longest < 3 {
                break;
            }
            for length in 3..=longest {
                if find_best_cycle(t, &mut ordering[start..start + length]) {
                    changed = true;
                }
            }
        }
        if !changed {
            break;
        }
        changed_any = true;
    }
    changed_any
}
