//! Population-based global search.
//!
//! Maintains a bounded set of distinct candidate orderings, seeds them via
//! randomized recursive partitioning, and evolves them by mutation and
//! greedy replacement. One population lives for one optimization run; its
//! fittest member is written back into the working ordering and the
//! structure is discarded.
//!
//! # Key Types
//!
//! - [`Population`] / [`Member`]: the bounded candidate store
//! - [`seed_population`], [`mutate`], [`improve_population`]: the three
//!   phases of the global search

mod runner;
mod types;

pub use runner::{improve_population, mutate, seed_population};
pub use types::{Member, Population};
