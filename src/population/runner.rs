//! Population seeding and evolution.
//!
//! The global phase of the pipeline: seed a population of candidate orderings
//! by independently randomized recursive partitioning, then evolve it for a
//! fixed generation budget by mutation and greedy replacement. The fittest
//! member becomes the starting point for the deterministic smoothing passes.

use rand::Rng;
use tracing::debug;

use super::types::{Member, Population};
use crate::exact::{table_optimise, MemoCache};
use crate::refine::local_sort;
use crate::scoring::{compare, score, Preference};
use crate::tournament::Tournament;

/// Partition recursion stops at this depth; deeper items stay as they are.
const MAX_PARTITION_DEPTH: usize = 10;

/// Widest sub-range the exact-solve mutation operator will touch.
const MUTATION_EXACT_CAP: usize = 12;

/// Builds a population of `capacity` candidates, each derived from `initial`
/// by an independently randomized three-way partition.
///
/// Randomness makes the candidates distinct in practice; exact collisions are
/// absorbed by the population's duplicate suppression, so the result may hold
/// slightly fewer than `capacity` members.
pub fn seed_population<R: Rng>(
    t: &Tournament,
    rng: &mut R,
    initial: &[usize],
    capacity: usize,
) -> Population {
    let mut population = Population::with_capacity(capacity);
    for _ in 0..capacity {
        let mut candidate = initial.to_vec();
        partition_order(t, rng, &mut candidate, 0);
        let candidate_score = score(t, &candidate);
        population.insert(Member {
            ordering: candidate,
            score: candidate_score,
        });
    }
    debug!(
        members = population.len(),
        best = population.fittest().map(|m| m.score),
        "population seeded"
    );
    population
}

/// Recursive randomized three-way partition: a uniformly random pivot splits
/// the items into before/after by [`compare`], with ties tossed randomly to
/// either side. Depth is capped; items beyond the cap keep their current
/// arrangement.
fn partition_order<R: Rng>(t: &Tournament, rng: &mut R, items: &mut [usize], depth: usize) {
    let n = items.len();
    if n <= 1 || depth >= MAX_PARTITION_DEPTH {
        return;
    }

    let pivot = items[rng.random_range(0..n)];
    let mut left = Vec::new();
    let mut right = Vec::new();
    for &item in items.iter() {
        if item == pivot {
            continue;
        }
        match compare(t, item, pivot) {
            Preference::Before => left.push(item),
            Preference::After => right.push(item),
            Preference::Tie => {
                if rng.random_range(0..2) == 0 {
                    left.push(item)
                } else {
                    right.push(item)
                }
            }
        }
    }

    let split = left.len();
    items[..split].copy_from_slice(&left);
    items[split] = pivot;
    items[split + 1..].copy_from_slice(&right);

    partition_order(t, rng, &mut items[..split], depth + 1);
    partition_order(t, rng, &mut items[split + 1..], depth + 1);
}

/// Applies one of five mutation operators, chosen uniformly, to a random
/// sub-range of `ordering`.
///
/// The operators: reverse the sub-range, swap its endpoints, rotate it one
/// step in a random direction, exact-solve it (width capped at
/// [`MUTATION_EXACT_CAP`]), or locally sort it. Callers pass a copy — the
/// canonical population member is never mutated directly.
pub fn mutate<R: Rng>(t: &Tournament, cache: &mut MemoCache, rng: &mut R, ordering: &mut [usize]) {
    let n = ordering.len();
    if n < 2 {
        return;
    }

    let (i, j) = loop {
        let a = rng.random_range(0..n);
        let b = rng.random_range(0..n);
        if a != b {
            break (a.min(b), a.max(b));
        }
    };

    match rng.random_range(0..5) {
        0 => ordering[i..=j].reverse(),
        1 => ordering.swap(i, j),
        2 => {
            if rng.random_range(0..2) == 0 {
                ordering[i..=j].rotate_left(1);
            } else {
                ordering[i..=j].rotate_right(1);
            }
        }
        3 => {
            let end = j.min(i + MUTATION_EXACT_CAP - 1);
            table_optimise(t, cache, &mut ordering[i..=end]);
        }
        _ => {
            local_sort(t, &mut ordering[i..=j]);
        }
    }
}

/// Evolves `population` for `generations` rounds of copy–mutate–insert.
///
/// Each round copies a random member, mutates the copy, and offers it to the
/// population, which admits it only when it is novel and beats the current
/// worst member. Duplicate suppression keeps the population from collapsing
/// onto one ordering.
pub fn improve_population<R: Rng>(
    t: &Tournament,
    cache: &mut MemoCache,
    rng: &mut R,
    population: &mut Population,
    generations: usize,
) {
    for generation in 0..generations {
        let Some(parent) = population.pick_random(rng) else {
            return;
        };
        let mut child = parent.ordering.clone();
        mutate(t, cache, rng, &mut child);
        if population.contains(&child) {
            continue;
        }
        let child_score = score(t, &child);
        population.insert(Member {
            ordering: child,
            score: child_score,
        });

        if (generation + 1) % 250 == 0 {
            debug!(
                generation = generation + 1,
                best = population.fittest().map(|m| m.score),
                "population evolving"
            );
        }
    }
}
