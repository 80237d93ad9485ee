//! Dense pairwise preference matrix.
//!
//! A [`Tournament`] of size `n` stores a non-negative weight for every ordered
//! pair `(i, j)` of distinct items, expressing how strongly item `i` should
//! precede item `j`. It is built up by a caller (typically from paired-vote or
//! pairwise-judgment data) and then treated as read-only by the ordering
//! engine — every engine entry point takes `&Tournament`.

mod parse;

pub use parse::parse_tournament;

/// Dense `n × n` matrix of pairwise preference weights.
///
/// Weights are non-negative reals; the diagonal is conventionally unused and
/// left at zero. All accessors are bounds-checked: an index `>= size` is a
/// caller contract violation and panics rather than clamping.
///
/// # Examples
///
/// ```
/// use fas_rank::Tournament;
///
/// let mut t = Tournament::new(3);
/// t.set(0, 1, 2.0);
/// t.add(0, 1, 1.0);
/// assert_eq!(t.get(0, 1), 3.0);
/// assert_eq!(t.get(1, 0), 0.0);
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Tournament {
    size: usize,
    weights: Vec<f64>,
}

impl Tournament {
    /// Creates a tournament of `size` items with all weights zero.
    pub fn new(size: usize) -> Self {
        Self {
            size,
            weights: vec![0.0; size * size],
        }
    }

    /// Number of items.
    pub fn size(&self) -> usize {
        self.size
    }

    #[inline]
    fn index(&self, i: usize, j: usize) -> usize {
        assert!(
            i < self.size && j < self.size,
            "tournament index ({i}, {j}) out of range for size {}",
            self.size
        );
        i * self.size + j
    }

    /// Returns the weight of ordered pair `(i, j)`.
    #[inline]
    pub fn get(&self, i: usize, j: usize) -> f64 {
        self.weights[self.index(i, j)]
    }

    /// Sets the weight of ordered pair `(i, j)`.
    pub fn set(&mut self, i: usize, j: usize, value: f64) {
        let idx = self.index(i, j);
        self.weights[idx] = value;
    }

    /// Accumulates `value` onto the weight of ordered pair `(i, j)`.
    pub fn add(&mut self, i: usize, j: usize, value: f64) {
        let idx = self.index(i, j);
        self.weights[idx] += value;
    }
}
