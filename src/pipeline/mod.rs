//! Orchestration of the full ordering run.
//!
//! # Key Types
//!
//! - [`OrderingConfig`]: run parameters (population size, generation budget,
//!   exact-solve threshold, seed)
//! - [`optimal_ordering`]: the exact-or-heuristic pipeline entry point

mod config;
mod runner;

pub use config::OrderingConfig;
pub use runner::optimal_ordering;
