//! In-place permutation utilities.
//!
//! Used by the exact solver's enumeration fallback to walk every arrangement
//! of a small item set in lexicographic order.

/// Reverses the closed sub-range `[from, to]` of `seq` in place.
pub fn reverse(seq: &mut [usize], from: usize, to: usize) {
    let mut start = from;
    let mut end = to;
    while start < end {
        seq.swap(start, end);
        start += 1;
        end -= 1;
    }
}

/// Advances `seq` to its lexicographically next permutation.
///
/// Returns the index of the leftmost position changed, or `seq.len()` when
/// `seq` was already the final permutation (strictly decreasing) and nothing
/// changed. Starting from a sorted sequence and calling until the return
/// value equals the length enumerates all arrangements exactly once.
pub fn next_permutation(seq: &mut [usize]) -> usize {
    let length = seq.len();
    if length <= 1 {
        return length;
    }

    let mut k = length - 2;
    while seq[k] >= seq[k + 1] {
        if k == 0 {
            return length;
        }
        k -= 1;
    }

    // Largest l with seq[k] < seq[l]; the suffix after k is non-increasing.
    let mut l = k + 1;
    for s in (k + 1)..length {
        if seq[k] < seq[s] {
            l = s;
        }
    }

    seq.swap(k, l);
    reverse(seq, k + 1, length - 1);
    k
}
