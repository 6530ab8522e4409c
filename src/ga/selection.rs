//! Parent and elite selection.
//!
//! Both functions work on the fitness vector of the current generation,
//! indexed like the population. Higher fitness is better.
//!
//! # References
//!
//! - Goldberg & Deb (1991), "A Comparative Analysis of Selection Schemes
//!   Used in Genetic Algorithms"

use crate::random::RandomSource;

/// Tournament selection: draws `k` indices with replacement and returns the
/// fittest.
///
/// Each draw is `next_index(0, n - 1)`. Ties keep the earliest drawn
/// contestant. `k = 0` is treated as `k = 1`.
///
/// # Panics
/// Panics if `fitness` is empty.
pub fn tournament<R: RandomSource>(fitness: &[f64], k: usize, rng: &mut R) -> usize {
    assert!(!fitness.is_empty(), "cannot select from empty population");
    let last = fitness.len() - 1;

    let mut best_idx = rng.next_index(0, last);
    for _ in 1..k.max(1) {
        let idx = rng.next_index(0, last);
        if fitness[idx] > fitness[best_idx] {
            best_idx = idx;
        }
    }
    best_idx
}

/// Indices of the `count` fittest individuals, best first.
///
/// Equal fitness keeps population order. `count` larger than the population
/// returns every index.
pub fn select_elites(fitness: &[f64], count: usize) -> Vec<usize> {
    let mut order: Vec<usize> = (0..fitness.len()).collect();
    // Stable: ties stay in population order.
    order.sort_by(|&a, &b| {
        fitness[b]
            .partial_cmp(&fitness[a])
            .unwrap_or(std::cmp::Ordering::Equal)
    });
    order.truncate(count);
    order
}
