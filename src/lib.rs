//! Near-optimal linear ordering of pairwise preference tournaments.
//!
//! Given a dense matrix where `weight[i][j]` expresses how strongly item `i`
//! should precede item `j`, this crate searches for a permutation maximizing
//! the sum of forward pairwise weights — the minimum feedback arc set /
//! optimal linear arrangement problem. It turns pairwise comparison data
//! (paired votes, pairwise judgments) into a single consensus ranking.
//!
//! The engine mixes three kinds of search:
//!
//! - **Exact**: a memoized subset solver ([`table_optimise`]) that provably
//!   optimizes small windows of items, plus an enumeration fallback.
//! - **Local**: a toolkit of bounded-neighborhood refinement passes
//!   ([`refine`]) — sliding windows, disjoint strides, single-item moves,
//!   comparator-driven insertion sort, cyclic rotations, tie-block
//!   connectivity.
//! - **Global**: a population metaheuristic ([`population`]) that seeds
//!   candidates by randomized partitioning and evolves them by mutation and
//!   greedy replacement.
//!
//! [`optimal_ordering`] combines them: tournaments small enough are solved
//! exactly, everything else goes through population search followed by a
//! comprehensive smoothing sequence. [`analysis`] inspects the result for
//! tie-blocks and Condorcet-set boundaries.
//!
//! # Example
//!
//! ```
//! use fas_rank::{optimal_ordering, score, OrderingConfig, Tournament};
//!
//! let mut t = Tournament::new(3);
//! t.add(0, 1, 1.0);
//! t.add(1, 2, 1.0);
//! t.add(0, 2, 1.0);
//!
//! let ordering = optimal_ordering(&t, None, &OrderingConfig::default().with_seed(0));
//! assert_eq!(ordering, vec![0, 1, 2]);
//! assert_eq!(score(&t, &ordering), 3.0);
//! ```
//!
//! The engine is single-threaded and synchronous: each entry point runs to
//! completion on the calling thread. Randomness is injected — every
//! randomized operation takes an `rand::Rng`, and the pipeline derives its
//! generator from an optional seed — so runs are reproducible.

pub mod analysis;
pub mod error;
pub mod exact;
pub mod permutation;
pub mod pipeline;
pub mod population;
pub mod refine;
pub mod scoring;
pub mod tournament;

pub use analysis::{condorcet_boundary_from, tie_starting_from};
pub use error::ParseError;
pub use exact::{brute_force_optimise, table_optimise, MemoCache};
pub use pipeline::{optimal_ordering, OrderingConfig};
pub use scoring::{compare, score, Preference, EPSILON};
pub use tournament::{parse_tournament, Tournament};
