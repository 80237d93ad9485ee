//! The full ordering pipeline.
//!
//! [`optimal_ordering`] branches once on size — small tournaments are solved
//! exactly, larger ones go through the population phase followed by a fixed
//! comprehensive smoothing sequence — and otherwise runs straight through
//! with no internal state machine.

use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing::debug;

use super::config::OrderingConfig;
use crate::exact::{table_optimise, MemoCache};
use crate::population::{improve_population, seed_population};
use crate::refine::{
    cycle_all_subranges, force_connectivity, local_sort, single_move_optimise, stride_optimise,
    window_optimise,
};
use crate::scoring::score;
use crate::tournament::Tournament;

/// Maximum rounds of the stride-smoothing loop.
const SMOOTHING_ROUNDS: usize = 10;

/// Computes a near-optimal ordering of the tournament's items.
///
/// Starts from `initial` when given (it must be a permutation of
/// `0..t.size()`; anything else is a caller contract violation and panics),
/// otherwise from the identity ordering.
///
/// Tournaments of up to `config.exact_threshold` items are solved exactly.
/// Larger ones are seeded by the population metaheuristic and then smoothed:
/// stride passes at co-prime widths with local sorts in between, a bounded
/// round loop of further stride passes with the memo cache reset each round,
/// a single-move pass, a sliding-window exact pass, cycle refinement, and a
/// final connectivity-plus-sort tidy.
///
/// # Panics
///
/// Panics if the configuration is invalid (call [`OrderingConfig::validate`]
/// first to get a descriptive error) or if `initial` is not a permutation.
pub fn optimal_ordering(
    t: &Tournament,
    initial: Option<&[usize]>,
    config: &OrderingConfig,
) -> Vec<usize> {
    config.validate().expect("invalid OrderingConfig");

    let n = t.size();
    if n == 0 {
        return Vec::new();
    }

    let mut ordering: Vec<usize> = match initial {
        Some(seq) => {
            assert!(
                is_permutation(seq, n),
                "initial ordering must be a permutation of 0..{n}"
            );
            seq.to_vec()
        }
        None => (0..n).collect(),
    };

    let mut cache = MemoCache::new();

    if n <= config.exact_threshold {
        table_optimise(t, &mut cache, &mut ordering);
        debug!(n, score = score(t, &ordering), "exact solve complete");
        return ordering;
    }

    let mut rng = match config.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::seed_from_u64(rand::random()),
    };

    // Global phase: population search from the starting ordering.
    let mut population = seed_population(t, &mut rng, &ordering, config.population_size);
    improve_population(t, &mut cache, &mut rng, &mut population, config.generations);
    if let Some(best) = population.fittest() {
        ordering.copy_from_slice(&best.ordering);
    }
    drop(population);
    debug!(n, score = score(t, &ordering), "population phase complete");

    // Comprehensive smoothing. Stride widths are deliberately co-prime-ish
    // so successive passes cut the sequence at different chunk boundaries.
    stride_optimise(t, &mut cache, &mut ordering, 11);
    local_sort(t, &mut ordering);
    stride_optimise(t, &mut cache, &mut ordering, 13);
    local_sort(t, &mut ordering);
    cache.reset();

    for round in 0..SMOOTHING_ROUNDS {
        let mut changed = false;
        changed |= stride_optimise(t, &mut cache, &mut ordering, 12);
        changed |= stride_optimise(t, &mut cache, &mut ordering, 7);
        changed |= local_sort(t, &mut ordering);
        cache.reset();
        if !changed {
            debug!(round, "smoothing converged early");
            break;
        }
    }

    single_move_optimise(t, &mut ordering);
    window_optimise(t, &mut cache, &mut ordering, 10);
    cycle_all_subranges(t, &mut ordering);
    force_connectivity(t, &mut ordering);
    local_sort(t, &mut ordering);

    debug!(n, score = score(t, &ordering), "smoothing complete");
    ordering
}

fn is_permutation(seq: &[usize], n: usize) -> bool {
    if seq.len() != n {
        return false;
    }
    let mut present = vec![false; n];
    for &item in seq {
        if item >= n || present[item] {
            return false;
        }
        present[item] = true;
    }
    true
}
