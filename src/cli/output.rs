//! Output formatting utilities for CLI.

use serde::Serialize;
use weasel::evo::{EvolutionStats, Generation};

/// JSON-serializable evolution result.
#[derive(Debug, Serialize)]
pub(super) struct JsonEvolutionResult {
    /// Random seed used.
    pub(super) seed: u64,
    /// Target phrase.
    pub(super) target: String,
    /// Fittest phrase at the end of the run.
    pub(super) fittest: String,
    /// Best score reached.
    pub(super) best_score: u64,
    /// Maximum achievable score.
    pub(super) max_score: u64,
    /// Generations evaluated.
    pub(super) generations: u64,
    /// Whether the run converged on the target.
    pub(super) converged: bool,
    /// Wall-clock time in seconds.
    pub(super) elapsed_seconds: f64,
}

impl JsonEvolutionResult {
    /// Create from run stats.
    pub(super) fn from_stats(stats: &EvolutionStats, target: &str, seed: u64, max_score: u64) -> Self {
        Self {
            seed,
            target: target.to_string(),
            fittest: stats.fittest.to_string(),
            best_score: stats.best_score,
            max_score,
            generations: stats.generations,
            converged: stats.converged,
            elapsed_seconds: stats.elapsed_seconds,
        }
    }
}

/// Format run stats as human-readable text.
pub(super) fn format_text(stats: &EvolutionStats, target: &str, seed: u64) -> String {
    let mut output = String::new();

    output.push_str(&format!("Evolution result (seed: {seed})\n"));
    output.push_str(&format!("  Target:  {target}\n"));
    output.push_str(&format!("  Fittest: {}\n", stats.fittest));
    output.push_str(&format!(
        "  Score: {} | Generations: {} | {}\n",
        stats.best_score,
        stats.generations,
        if stats.converged {
            "converged"
        } else {
            "generation cap reached"
        }
    ));
    output.push_str(&format!("  Elapsed: {:.2}s\n", stats.elapsed_seconds));

    output
}

/// Format one generation as a progress line.
pub(super) fn format_generation(generation: &Generation) -> String {
    format!(
        "gen {:>6}  score {:>6}/{:<6}  {}",
        generation.generation, generation.score, generation.max_score, generation.fittest
    )
}
