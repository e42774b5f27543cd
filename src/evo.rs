//! String-evolution genetic algorithm.
//!
//! This module evolves a random population of character strings toward a
//! target phrase: fitness-proportionate selection with a bounded
//! rejection-sampling policy, single-point crossover, and per-character
//! mutation, orchestrated by a population engine that halts on an exact
//! fitness match.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────┐
//! │         Population Engine           │
//! ├─────────────────────────────────────┤
//! │  Selection │ Crossover │ Mutation   │
//! ├─────────────────────────────────────┤
//! │         Fitness Evaluation          │
//! ├─────────────────────────────────────┤
//! │        Genome / Alphabet            │
//! └─────────────────────────────────────┘
//! ```
//!
//! # Example
//!
//! ```
//! use weasel::evo::{Engine, EvolutionConfig};
//!
//! let config = EvolutionConfig {
//!     target: "cat".to_string(),
//!     alphabet: "abct".to_string(),
//!     population_size: 50,
//!     mutation_rate: 0.1,
//!     ..EvolutionConfig::default()
//! };
//! let mut engine = Engine::seeded(&config)?;
//! let stats = engine.run(|_generation| {});
//! assert!(stats.converged);
//! # Ok::<(), weasel::evo::ConfigError>(())
//! ```

mod crossover;
mod evolution;
mod fitness;
mod genome;
mod mutation;
mod selection;

pub use crossover::crossover;
pub use evolution::{ConfigError, Engine, EvolutionConfig, EvolutionStats, Generation};
pub use fitness::{evaluate, max_score, score, FitnessStats};
pub use genome::{Alphabet, Genome};
pub use mutation::{mutate, MutationConfig};
pub use selection::{select_parent, SelectionConfig};
