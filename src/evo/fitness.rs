//! Fitness evaluation for the string-evolution algorithm.
//!
//! Fitness is the number of positions where a genome matches the target,
//! squared. The quadratic reward sharpens selection pressure toward genomes
//! with many exact positional matches.

// Fitness statistics use intentional casts
#![allow(clippy::cast_precision_loss)]

use crate::evo::genome::Genome;

/// The maximum achievable score for a target of `len` characters.
///
/// Reached if and only if a genome equals the target exactly, which is the
/// engine's convergence condition.
#[must_use]
pub fn max_score(len: usize) -> u64 {
    (len as u64) * (len as u64)
}

/// Score a genome against the target: matching positions, squared.
///
/// Deterministic and pure. The result is in `[0, max_score(target.len())]`.
///
/// # Panics
///
/// Panics if the genome and target lengths differ. A correctly wired engine
/// never produces mismatched lengths; this is a contract violation, not a
/// runtime error.
#[must_use]
pub fn score(genome: &Genome, target: &Genome) -> u64 {
    assert_eq!(
        genome.len(),
        target.len(),
        "genome length must match target length"
    );

    let matches = genome
        .chars()
        .iter()
        .zip(target.chars())
        .filter(|(a, b)| a == b)
        .count() as u64;

    matches * matches
}

/// Score every genome in the population against the target.
///
/// Returns the fitness pool, index-aligned with `population`, together with
/// the index of the fittest genome. Ties resolve to the earliest index: the
/// scan only replaces the running best on a strictly greater score.
///
/// # Panics
///
/// Panics if any genome's length differs from the target's.
#[must_use]
pub fn evaluate(population: &[Genome], target: &Genome) -> (Vec<u64>, usize) {
    let mut pool = Vec::with_capacity(population.len());
    let mut fittest_index = 0;

    for (i, genome) in population.iter().enumerate() {
        let value = score(genome, target);
        if value > pool.get(fittest_index).copied().unwrap_or(0) {
            fittest_index = i;
        }
        pool.push(value);
    }

    (pool, fittest_index)
}

/// Summary statistics over a generation's fitness pool.
#[derive(Debug, Clone, Copy)]
pub struct FitnessStats {
    /// Mean score of the population.
    pub mean: f64,
    /// Best score in the population.
    pub best: u64,
    /// Worst score in the population.
    pub worst: u64,
    /// Standard deviation of scores.
    pub std_dev: f64,
}

impl FitnessStats {
    /// Calculate statistics from a fitness pool.
    #[must_use]
    pub fn from_pool(pool: &[u64]) -> Self {
        if pool.is_empty() {
            return Self {
                mean: 0.0,
                best: 0,
                worst: 0,
                std_dev: 0.0,
            };
        }

        let sum: u64 = pool.iter().sum();
        let mean = sum as f64 / pool.len() as f64;
        let best = pool.iter().copied().max().unwrap_or(0);
        let worst = pool.iter().copied().min().unwrap_or(0);

        let variance = pool
            .iter()
            .map(|&v| (v as f64 - mean).powi(2))
            .sum::<f64>()
            / pool.len() as f64;

        Self {
            mean,
            best,
            worst,
            std_dev: variance.sqrt(),
        }
    }
}
