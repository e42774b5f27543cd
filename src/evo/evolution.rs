//! The population engine: seeding, per-generation evaluation and breeding,
//! and convergence detection.
//!
//! The engine owns all evolving state explicitly (population, fitness pool,
//! fittest index, generation counter, RNG) and alternates between two
//! phases per generation: Evaluating, which recomputes the full fitness
//! pool, and Reproducing, which replaces the population wholesale. It halts
//! once the fittest genome reaches the maximum achievable score.

use crate::evo::crossover::crossover;
use crate::evo::fitness::{evaluate, max_score};
use crate::evo::genome::{Alphabet, Genome};
use crate::evo::mutation::{mutate, MutationConfig};
use crate::evo::selection::{select_parent, SelectionConfig};
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::time::Instant;

/// Configuration for an evolution run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EvolutionConfig {
    /// The phrase the population evolves toward.
    pub target: String,
    /// Characters eligible at any genome position.
    pub alphabet: String,
    /// Number of genomes per generation.
    pub population_size: usize,
    /// Per-position mutation probability in `[0, 1]`.
    pub mutation_rate: f64,
    /// Rejection-sampling attempts before the selector falls back to the
    /// fittest genome.
    pub max_selection_attempts: usize,
    /// Generation cap for `run` (0 = run until convergence).
    pub max_generations: u64,
    /// RNG seed for reproducibility.
    pub seed: u64,
}

impl Default for EvolutionConfig {
    fn default() -> Self {
        Self {
            target: "what about longer strings such as this".to_string(),
            alphabet: "abcdefghijklmnopqrstuvwxyz ".to_string(),
            population_size: 2000,
            mutation_rate: 0.02,
            max_selection_attempts: 1000,
            max_generations: 0,
            seed: 42,
        }
    }
}

impl EvolutionConfig {
    /// Check the configuration for fatal setup errors.
    ///
    /// # Errors
    ///
    /// Returns the first violated constraint: empty target or alphabet, a
    /// target character missing from the alphabet, a zero population size or
    /// selection budget, or a mutation rate outside `[0, 1]`.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.target.is_empty() {
            return Err(ConfigError::EmptyTarget);
        }
        if self.alphabet.is_empty() {
            return Err(ConfigError::EmptyAlphabet);
        }
        if let Some(c) = self.target.chars().find(|c| !self.alphabet.contains(*c)) {
            return Err(ConfigError::TargetOutsideAlphabet(c));
        }
        if self.population_size == 0 {
            return Err(ConfigError::ZeroPopulation);
        }
        if !(0.0..=1.0).contains(&self.mutation_rate) {
            return Err(ConfigError::InvalidMutationRate(self.mutation_rate));
        }
        if self.max_selection_attempts == 0 {
            return Err(ConfigError::ZeroSelectionAttempts);
        }
        Ok(())
    }
}

/// Fatal configuration error, detected before any generation runs.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ConfigError {
    /// The target phrase is empty.
    EmptyTarget,
    /// The alphabet has no characters.
    EmptyAlphabet,
    /// The target contains a character the alphabet cannot produce.
    TargetOutsideAlphabet(char),
    /// The population size is zero.
    ZeroPopulation,
    /// The mutation rate is outside `[0, 1]`.
    InvalidMutationRate(f64),
    /// The selection attempt budget is zero.
    ZeroSelectionAttempts,
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyTarget => write!(f, "target phrase is empty"),
            Self::EmptyAlphabet => write!(f, "alphabet is empty"),
            Self::TargetOutsideAlphabet(c) => {
                write!(f, "target character {c:?} is not in the alphabet")
            }
            Self::ZeroPopulation => write!(f, "population size must be positive"),
            Self::InvalidMutationRate(r) => {
                write!(f, "mutation rate {r} is outside [0, 1]")
            }
            Self::ZeroSelectionAttempts => {
                write!(f, "selection attempt budget must be positive")
            }
        }
    }
}

impl std::error::Error for ConfigError {}

/// Per-generation report handed to the render/report collaborator.
#[derive(Debug, Clone, Serialize)]
pub struct Generation {
    /// 1-based generation counter.
    pub generation: u64,
    /// The fittest genome of this generation.
    pub fittest: Genome,
    /// Its score.
    pub score: u64,
    /// The maximum achievable score for the target.
    pub max_score: u64,
    /// Whether the fittest genome equals the target.
    pub converged: bool,
}

/// Overall statistics from an evolution run.
#[derive(Debug, Clone, Serialize)]
pub struct EvolutionStats {
    /// Generations evaluated.
    pub generations: u64,
    /// Best score reached.
    pub best_score: u64,
    /// The fittest genome at the end of the run.
    pub fittest: Genome,
    /// Whether the run converged on the target.
    pub converged: bool,
    /// Wall-clock time in seconds.
    pub elapsed_seconds: f64,
}

/// The population engine.
///
/// Generic over the randomness source so seeded runs are reproducible in
/// tests; `Engine::seeded` wires in a [`SmallRng`] from the configured seed.
#[derive(Debug)]
pub struct Engine<R: Rng> {
    target: Genome,
    alphabet: Alphabet,
    selection: SelectionConfig,
    mutation: MutationConfig,
    population_size: usize,
    max_generations: u64,
    population: Vec<Genome>,
    fitness_pool: Vec<u64>,
    fittest_index: usize,
    generation: u64,
    converged: bool,
    rng: R,
}

impl Engine<SmallRng> {
    /// Create an engine with a `SmallRng` seeded from the configuration.
    ///
    /// # Errors
    ///
    /// Returns a [`ConfigError`] if the configuration is invalid.
    pub fn seeded(config: &EvolutionConfig) -> Result<Self, ConfigError> {
        Engine::new(config, SmallRng::seed_from_u64(config.seed))
    }
}

impl<R: Rng> Engine<R> {
    /// Create an engine and seed a random initial population.
    ///
    /// # Errors
    ///
    /// Returns a [`ConfigError`] if the configuration is invalid; nothing is
    /// seeded in that case.
    pub fn new(config: &EvolutionConfig, mut rng: R) -> Result<Self, ConfigError> {
        config.validate()?;

        let target = Genome::from(config.target.as_str());
        let alphabet = Alphabet::new(&config.alphabet);
        let population = (0..config.population_size)
            .map(|_| Genome::random(&mut rng, &alphabet, target.len()))
            .collect();

        Ok(Self {
            target,
            alphabet,
            selection: SelectionConfig {
                max_attempts: config.max_selection_attempts,
            },
            mutation: MutationConfig {
                rate: config.mutation_rate,
            },
            population_size: config.population_size,
            max_generations: config.max_generations,
            population,
            fitness_pool: Vec::new(),
            fittest_index: 0,
            generation: 0,
            converged: false,
            rng,
        })
    }

    /// The target phrase.
    #[must_use]
    pub fn target(&self) -> &Genome {
        &self.target
    }

    /// Generations evaluated so far.
    #[must_use]
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Whether the fittest genome has reached the target.
    #[must_use]
    pub fn has_converged(&self) -> bool {
        self.converged
    }

    /// The current population.
    #[must_use]
    pub fn population(&self) -> &[Genome] {
        &self.population
    }

    /// The fitness pool of the last evaluated generation, index-aligned
    /// with [`Engine::population`]. Empty before the first step.
    #[must_use]
    pub fn fitness_pool(&self) -> &[u64] {
        &self.fitness_pool
    }

    /// Advance one generation: evaluate, check convergence, and breed the
    /// next population unless converged.
    ///
    /// Once the engine has converged, further calls re-report the converged
    /// generation without breeding.
    pub fn step(&mut self) -> Generation {
        let (pool, fittest_index) = evaluate(&self.population, &self.target);
        self.fitness_pool = pool;
        self.fittest_index = fittest_index;

        if !self.converged {
            self.generation += 1;
        }

        let score = self.fitness_pool[self.fittest_index];
        let max = max_score(self.target.len());
        self.converged = score == max;

        let summary = Generation {
            generation: self.generation,
            fittest: self.population[self.fittest_index].clone(),
            score,
            max_score: max,
            converged: self.converged,
        };

        if !self.converged {
            self.reproduce();
        }

        summary
    }

    /// Run until convergence or the configured generation cap, reporting
    /// each generation to `observer`.
    ///
    /// The observer is the engine's only outward channel; it does not get a
    /// say in termination.
    pub fn run<F>(&mut self, mut observer: F) -> EvolutionStats
    where
        F: FnMut(&Generation),
    {
        let start = Instant::now();

        let mut last = self.step();
        observer(&last);

        while !last.converged
            && (self.max_generations == 0 || last.generation < self.max_generations)
        {
            last = self.step();
            observer(&last);
        }

        EvolutionStats {
            generations: last.generation,
            best_score: last.score,
            fittest: last.fittest,
            converged: last.converged,
            elapsed_seconds: start.elapsed().as_secs_f64(),
        }
    }

    /// Breed the next generation: for each of N slots, two independent
    /// parent selections (self-fertilization permitted), crossover, then
    /// mutation. The old population is replaced wholesale.
    fn reproduce(&mut self) {
        let mut next = Vec::with_capacity(self.population_size);

        for _ in 0..self.population_size {
            let parent1 = select_parent(
                &self.population,
                &self.fitness_pool,
                self.fittest_index,
                &self.selection,
                &mut self.rng,
            );
            let parent2 = select_parent(
                &self.population,
                &self.fitness_pool,
                self.fittest_index,
                &self.selection,
                &mut self.rng,
            );

            let mut child = crossover(parent1, parent2, &mut self.rng);
            mutate(&mut child, &self.alphabet, &self.mutation, &mut self.rng);
            next.push(child);
        }

        self.population = next;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn small_config() -> EvolutionConfig {
        EvolutionConfig {
            target: "cat".to_string(),
            alphabet: "abct".to_string(),
            population_size: 50,
            mutation_rate: 0.1,
            max_selection_attempts: 1000,
            max_generations: 0,
            seed: 42,
        }
    }

    #[test]
    fn test_validate_accepts_default() {
        assert!(EvolutionConfig::default().validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_target_outside_alphabet() {
        let config = EvolutionConfig {
            target: "cat!".to_string(),
            ..small_config()
        };
        assert_eq!(
            config.validate(),
            Err(ConfigError::TargetOutsideAlphabet('!'))
        );
    }

    #[test]
    fn test_validate_rejects_zero_population() {
        let config = EvolutionConfig {
            population_size: 0,
            ..small_config()
        };
        assert_eq!(config.validate(), Err(ConfigError::ZeroPopulation));
    }

    #[test]
    fn test_validate_rejects_bad_mutation_rate() {
        let config = EvolutionConfig {
            mutation_rate: 1.5,
            ..small_config()
        };
        assert_eq!(
            config.validate(),
            Err(ConfigError::InvalidMutationRate(1.5))
        );
    }

    #[test]
    fn test_validate_rejects_empty_target_and_alphabet() {
        let config = EvolutionConfig {
            target: String::new(),
            ..small_config()
        };
        assert_eq!(config.validate(), Err(ConfigError::EmptyTarget));

        let config = EvolutionConfig {
            alphabet: String::new(),
            ..small_config()
        };
        assert_eq!(config.validate(), Err(ConfigError::EmptyAlphabet));
    }

    #[test]
    fn test_engine_rejects_invalid_config() {
        let config = EvolutionConfig {
            mutation_rate: -0.1,
            ..small_config()
        };
        assert!(Engine::seeded(&config).is_err());
    }

    #[test]
    fn test_initial_population_has_configured_size_and_length() {
        let engine = Engine::seeded(&small_config()).expect("valid config");
        assert_eq!(engine.population().len(), 50);
        assert!(engine.population().iter().all(|g| g.len() == 3));
        assert_eq!(engine.generation(), 0);
        assert!(!engine.has_converged());
    }

    #[test]
    fn test_step_keeps_population_size_constant() {
        let mut engine = Engine::seeded(&small_config()).expect("valid config");
        for _ in 0..5 {
            engine.step();
            assert_eq!(engine.population().len(), 50);
        }
    }

    #[test]
    fn test_fittest_index_is_argmax_after_step() {
        let mut engine = Engine::seeded(&small_config()).expect("valid config");
        let summary = engine.step();

        // The reported score is the pool maximum of the evaluated generation.
        assert_eq!(summary.generation, 1);
        assert!(summary.score <= summary.max_score);
    }

    #[test]
    fn test_singleton_boundary_converges_in_generation_one() {
        let config = EvolutionConfig {
            target: "a".to_string(),
            alphabet: "a".to_string(),
            population_size: 3,
            mutation_rate: 0.0,
            ..small_config()
        };
        let mut engine = Engine::seeded(&config).expect("valid config");

        let summary = engine.step();
        assert!(summary.converged);
        assert_eq!(summary.generation, 1);
        assert_eq!(summary.score, 1);
        assert_eq!(summary.fittest, Genome::from("a"));
    }

    #[test]
    fn test_converged_engine_stops_counting() {
        let config = EvolutionConfig {
            target: "a".to_string(),
            alphabet: "a".to_string(),
            population_size: 2,
            mutation_rate: 0.0,
            ..small_config()
        };
        let mut engine = Engine::seeded(&config).expect("valid config");

        engine.step();
        let again = engine.step();
        assert!(again.converged);
        assert_eq!(again.generation, 1);
    }

    #[test]
    fn test_run_respects_generation_cap() {
        let config = EvolutionConfig {
            max_generations: 2,
            ..small_config()
        };
        let mut engine = Engine::seeded(&config).expect("valid config");

        let mut reports = 0u64;
        let stats = engine.run(|_| reports += 1);
        assert!(stats.generations <= 2);
        assert_eq!(reports, stats.generations);
    }
}
