//! Population storage for the global search phase.
//!
//! A [`Population`] is a fixed-capacity set of distinct candidate orderings
//! organized for the two operations the evolutionary loop needs: O(log ps)
//! "replace the worst member with a better candidate" and O(1) "fetch the
//! fittest". A min-oriented binary heap keyed by score supplies the eviction
//! candidate; a separately tracked maximum supplies the fittest; a hash set
//! of orderings suppresses duplicates.

use std::cmp::Reverse;
use std::collections::{BinaryHeap, HashSet};

use rand::Rng;

/// A candidate ordering together with its score.
#[derive(Debug, Clone)]
pub struct Member {
    pub ordering: Vec<usize>,
    pub score: f64,
}

impl PartialEq for Member {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == std::cmp::Ordering::Equal
    }
}

impl Eq for Member {}

impl PartialOrd for Member {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Member {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        // Score first; the ordering itself breaks exact score ties so the
        // heap order is total and consistent with equality.
        self.score
            .total_cmp(&other.score)
            .then_with(|| self.ordering.cmp(&other.ordering))
    }
}

/// Bounded collection of distinct candidate orderings.
#[derive(Debug)]
pub struct Population {
    capacity: usize,
    heap: BinaryHeap<Reverse<Member>>,
    seen: HashSet<Vec<usize>>,
    best: Option<Member>,
}

impl Population {
    /// Creates an empty population that will hold at most `capacity` members.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            capacity,
            heap: BinaryHeap::with_capacity(capacity + 1),
            seen: HashSet::with_capacity(capacity + 1),
            best: None,
        }
    }

    /// Current member count.
    pub fn len(&self) -> usize {
        self.heap.len()
    }

    /// True when no members are held.
    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }

    /// Maximum member count.
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Whether a member with this exact ordering is already present.
    pub fn contains(&self, ordering: &[usize]) -> bool {
        self.seen.contains(ordering)
    }

    /// Score of the current eviction candidate.
    pub fn worst_score(&self) -> Option<f64> {
        self.heap.peek().map(|Reverse(member)| member.score)
    }

    /// The highest-scoring member.
    pub fn fittest(&self) -> Option<&Member> {
        self.best.as_ref()
    }

    /// A uniformly random member.
    pub fn pick_random<R: Rng>(&self, rng: &mut R) -> Option<&Member> {
        if self.heap.is_empty() {
            return None;
        }
        let index = rng.random_range(0..self.heap.len());
        self.heap.iter().nth(index).map(|Reverse(member)| member)
    }

    /// Inserts `member`, returning whether it was admitted.
    ///
    /// Rejected when an identical ordering is already present, or when the
    /// population is full and the candidate does not strictly beat the
    /// current worst member (which is otherwise evicted).
    pub fn insert(&mut self, member: Member) -> bool {
        if self.capacity == 0 || self.seen.contains(&member.ordering) {
            return false;
        }

        if self.heap.len() >= self.capacity {
            match self.worst_score() {
                Some(worst) if member.score > worst => {
                    let Reverse(evicted) = self.heap.pop().expect("population is non-empty");
                    self.seen.remove(&evicted.ordering);
                    // The tracked best is only ever the eviction candidate
                    // when every member scores alike; the incoming member
                    // strictly beats that score and takes over below.
                    if self
                        .best
                        .as_ref()
                        .is_some_and(|b| b.ordering == evicted.ordering)
                    {
                        self.best = None;
                    }
                }
                _ => return false,
            }
        }

        self.seen.insert(member.ordering.clone());
        if self.best.as_ref().is_none_or(|b| member.score > b.score) {
            self.best = Some(member.clone());
        }
        self.heap.push(Reverse(member));
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn member(ordering: Vec<usize>, score: f64) -> Member {
        Member { ordering, score }
    }

    #[test]
    fn test_insert_and_fittest() {
        let mut pop = Population::with_capacity(3);
        assert!(pop.insert(member(vec![0, 1, 2], 1.0)));
        assert!(pop.insert(member(vec![1, 0, 2], 3.0)));
        assert!(pop.insert(member(vec![2, 0, 1], 2.0)));
        assert_eq!(pop.len(), 3);
        assert_eq!(pop.fittest().unwrap().score, 3.0);
        assert_eq!(pop.worst_score(), Some(1.0));
    }

    #[test]
    fn test_duplicate_orderings_rejected() {
        let mut pop = Population::with_capacity(3);
        assert!(pop.insert(member(vec![0, 1], 1.0)));
        assert!(!pop.insert(member(vec![0, 1], 5.0)));
        assert_eq!(pop.len(), 1);
        assert_eq!(pop.fittest().unwrap().score, 1.0);
    }

    #[test]
    fn test_full_population_evicts_worst() {
        let mut pop = Population::with_capacity(2);
        pop.insert(member(vec![0, 1, 2], 1.0));
        pop.insert(member(vec![1, 0, 2], 2.0));

        // Does not beat the worst: rejected.
        assert!(!pop.insert(member(vec![2, 1, 0], 0.5)));
        assert!(!pop.insert(member(vec![2, 1, 0], 1.0)));
        assert_eq!(pop.len(), 2);

        // Beats the worst: worst evicted, duplicate tracking updated, the
        // bound itself untouched.
        assert!(pop.insert(member(vec![2, 1, 0], 1.5)));
        assert_eq!(pop.len(), 2);
        assert_eq!(pop.capacity(), 2);
        assert!(!pop.contains(&[0, 1, 2]));
        assert_eq!(pop.worst_score(), Some(1.5));
        assert_eq!(pop.fittest().unwrap().score, 2.0);
    }

    #[test]
    fn test_evicted_ordering_may_return() {
        let mut pop = Population::with_capacity(1);
        pop.insert(member(vec![0, 1], 1.0));
        assert!(pop.insert(member(vec![1, 0], 2.0)));
        assert!(pop.insert(member(vec![0, 1], 3.0)));
        assert_eq!(pop.fittest().unwrap().score, 3.0);
    }

    #[test]
    fn test_best_updated_after_evicting_best() {
        // Capacity 1: the sole member is both best and eviction candidate.
        let mut pop = Population::with_capacity(1);
        pop.insert(member(vec![0, 1, 2], 1.0));
        assert!(pop.insert(member(vec![2, 1, 0], 2.0)));
        let fittest = pop.fittest().unwrap();
        assert_eq!(fittest.ordering, vec![2, 1, 0]);
        assert_eq!(fittest.score, 2.0);
    }

    #[test]
    fn test_pick_random_covers_members() {
        let mut pop = Population::with_capacity(3);
        pop.insert(member(vec![0, 1], 1.0));
        pop.insert(member(vec![1, 0], 2.0));
        let mut rng = StdRng::seed_from_u64(1);
        let mut picked = HashSet::new();
        for _ in 0..64 {
            picked.insert(pop.pick_random(&mut rng).unwrap().ordering.clone());
        }
        assert_eq!(picked.len(), 2);
    }

    #[test]
    fn test_empty_population() {
        let pop = Population::with_capacity(4);
        assert!(pop.is_empty());
        assert!(pop.fittest().is_none());
        assert!(pop.worst_score().is_none());
        let mut rng = StdRng::seed_from_u64(0);
        let mut empty = Population::with_capacity(0);
        assert!(empty.pick_random(&mut rng).is_none());
        assert!(!empty.insert(member(vec![0], 1.0)));
    }
}
