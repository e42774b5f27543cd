//! Parent selection for the string-evolution algorithm.
//!
//! Selection is fitness-proportionate ("roulette wheel") via rejection
//! sampling: a candidate index is accepted when its score beats a uniform
//! threshold drawn up to the current best score. The attempt budget and the
//! fall-back to the fittest genome are a deliberate bounded-retry policy
//! that guarantees termination under any fitness distribution.

use crate::evo::genome::Genome;
use rand::Rng;
use serde::{Deserialize, Serialize};

/// Configuration for parent selection.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct SelectionConfig {
    /// Rejection-sampling attempts before falling back to the fittest genome.
    pub max_attempts: usize,
}

impl Default for SelectionConfig {
    fn default() -> Self {
        Self { max_attempts: 1000 }
    }
}

/// Pick one parent, biased toward higher fitness.
///
/// Up to `config.max_attempts` times: draw a uniform index `i` and a uniform
/// threshold in `[0, fitness_pool[fittest_index]]`, and accept
/// `population[i]` if its score meets the threshold. If the budget is
/// exhausted, return the fittest genome.
///
/// When every score is zero the threshold is always zero, every candidate is
/// accepted on the first attempt, and selection degenerates to a uniform
/// random choice. That is the intended behavior for an unscored population.
///
/// # Panics
///
/// Panics if the population is empty or `fitness_pool` is not index-aligned
/// with it.
pub fn select_parent<'a, R: Rng>(
    population: &'a [Genome],
    fitness_pool: &[u64],
    fittest_index: usize,
    config: &SelectionConfig,
    rng: &mut R,
) -> &'a Genome {
    assert_eq!(
        population.len(),
        fitness_pool.len(),
        "fitness pool must be index-aligned with the population"
    );

    let best = fitness_pool[fittest_index];

    for _ in 0..config.max_attempts {
        let index = rng.gen_range(0..population.len());
        let threshold = rng.gen_range(0..=best);
        if fitness_pool[index] >= threshold {
            return &population[index];
        }
    }

    // Attempt budget exhausted; bias toward the elite genome.
    &population[fittest_index]
}
