//! Objective function and pairwise comparison oracle.
//!
//! [`score`] is the quantity every optimizer in this crate maximizes: the sum
//! of forward pairwise weights of an ordering. [`compare`] is the sole
//! pairwise preference oracle — wherever the engine needs to know whether one
//! item should precede another, it asks `compare`, never any derived
//! quantity.

use crate::tournament::Tournament;

/// Absolute tolerance below which a pair of opposing weights counts as a tie.
///
/// Fixed engine constant, deliberately not configurable: every comparison in
/// the engine must agree on what a tie is.
pub const EPSILON: f64 = 0.001;

/// Result of comparing two items pairwise.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Preference {
    /// The first item should precede the second.
    Before,
    /// No meaningful preference either way (within [`EPSILON`]).
    Tie,
    /// The first item should follow the second.
    After,
}

/// Compares items `i` and `j` by their opposing weights.
///
/// Returns [`Preference::Tie`] when `|weight[i][j] - weight[j][i]|` is below
/// [`EPSILON`]; otherwise the heavier direction wins. Antisymmetric by
/// construction: `compare(t, i, j)` and `compare(t, j, i)` are exact
/// opposites, or both ties.
pub fn compare(t: &Tournament, i: usize, j: usize) -> Preference {
    let forward = t.get(i, j);
    let backward = t.get(j, i);

    if forward - backward >= EPSILON {
        Preference::Before
    } else if backward - forward >= EPSILON {
        Preference::After
    } else {
        Preference::Tie
    }
}

/// Sum of forward pairwise weights over `ordering`.
///
/// O(len²). Callers pass a sub-slice to score a partial sequence; scores are
/// always recomputed from scratch rather than tracked incrementally across
/// calls, so floating-point drift never accumulates between operations.
pub fn score(t: &Tournament, ordering: &[usize]) -> f64 {
    let mut total = 0.0;
    for i in 0..ordering.len() {
        for j in (i + 1)..ordering.len() {
            total += t.get(ordering[i], ordering[j]);
        }
    }
    total
}
