//! Mutation operator for the string-evolution algorithm.
//!
//! Each position of a freshly bred child is independently resampled from the
//! alphabet with a fixed probability. Mutation is the only source of
//! characters not present in either parent.

use crate::evo::genome::{Alphabet, Genome};
use rand::Rng;
use serde::{Deserialize, Serialize};

/// Configuration for mutation.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct MutationConfig {
    /// Per-position probability of resampling a character.
    pub rate: f64,
}

impl Default for MutationConfig {
    fn default() -> Self {
        Self { rate: 0.02 }
    }
}

/// Mutate a genome in place.
///
/// Fired positions are replaced with a uniform alphabet draw, which may
/// coincidentally equal the original character. Parents are never mutated;
/// the engine only calls this on the child produced by crossover.
///
/// # Panics
///
/// Panics if `config.rate` is outside `[0, 1]` or the alphabet is empty.
/// Engine configuration validation rejects both before any breeding happens.
pub fn mutate<R: Rng>(genome: &mut Genome, alphabet: &Alphabet, config: &MutationConfig, rng: &mut R) {
    for slot in genome.chars_mut() {
        if rng.gen_bool(config.rate) {
            *slot = alphabet.sample(rng);
        }
    }
}
