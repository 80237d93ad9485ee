//! Post-hoc structure analysis of a finished ordering.
//!
//! Informational only — nothing here feeds back into optimization. Both
//! functions are usually run on the output of
//! [`optimal_ordering`](crate::optimal_ordering), whose final connectivity
//! pass makes tie-blocks contiguous.

use crate::scoring::{compare, Preference};
use crate::tournament::Tournament;

/// Returns the end of the tie-block beginning at `start`: the first position
/// whose item is strictly ordered against any item in `[start, position)`,
/// or `items.len()` when everything from `start` on is mutually tied.
pub fn tie_starting_from(t: &Tournament, items: &[usize], start: usize) -> usize {
    let n = items.len();
    for position in (start + 1).min(n)..n {
        for k in start..position {
            if compare(t, items[k], items[position]) != Preference::Tie {
                return position;
            }
        }
    }
    n
}

/// Returns the smallest boundary `b > start` such that every item in
/// `[start, b)` strictly beats every item in `[b, n)` — a generalized
/// Condorcet-winner-set boundary.
///
/// Fixed-point iteration: whenever an item beyond the boundary is not
/// strictly dominated by every item inside it, the boundary extends past
/// that item. The boundary is monotonically non-decreasing and bounded by
/// `items.len()`, so the iteration always terminates.
pub fn condorcet_boundary_from(t: &Tournament, items: &[usize], start: usize) -> usize {
    let n = items.len();
    if start >= n {
        return n;
    }

    let mut boundary = start + 1;
    loop {
        let mut extended = false;
        for position in boundary..n {
            let dominated = items[start..boundary]
                .iter()
                .all(|&inside| compare(t, inside, items[position]) == Preference::Before);
            if !dominated {
                boundary = position + 1;
                extended = true;
            }
        }
        if !extended || boundary >= n {
            break;
        }
    }
    boundary
}
