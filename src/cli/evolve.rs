//! Evolve command implementation - headless genetic algorithm run.

use super::output::{format_generation, format_text, JsonEvolutionResult};
use super::{CliError, OutputFormat};
use indicatif::{ProgressBar, ProgressStyle};
use weasel::evo::{max_score, Engine, EvolutionConfig};

/// Execute the evolve command.
///
/// # Errors
///
/// Returns an error if the configuration is invalid or output serialization
/// fails.
#[allow(clippy::too_many_arguments, clippy::fn_params_excessive_bools)]
pub(crate) fn execute(
    target: String,
    alphabet: String,
    population: usize,
    mutation_rate: f64,
    attempts: usize,
    generations: u64,
    seed: Option<u64>,
    format: OutputFormat,
    progress: bool,
    quiet: bool,
) -> Result<(), CliError> {
    let seed = seed.unwrap_or_else(super::time_seed);

    let config = EvolutionConfig {
        target,
        alphabet,
        population_size: population,
        mutation_rate,
        max_selection_attempts: attempts,
        max_generations: generations,
        seed,
    };

    let mut engine = Engine::seeded(&config)?;

    let pb = if progress {
        let pb = ProgressBar::new_spinner();
        pb.set_style(
            ProgressStyle::default_spinner()
                .template("{spinner:.green} [{elapsed_precise}] {msg}")
                .expect("valid template"),
        );
        Some(pb)
    } else {
        None
    };

    let stats = engine.run(|generation| {
        if let Some(pb) = &pb {
            pb.set_message(format_generation(generation));
            pb.tick();
        } else if !quiet {
            println!("{}", format_generation(generation));
        }
    });

    if let Some(pb) = pb {
        pb.finish_and_clear();
    }

    match format {
        OutputFormat::Text => {
            print!("{}", format_text(&stats, &config.target, seed));
        }
        OutputFormat::Json => {
            let result =
                JsonEvolutionResult::from_stats(&stats, &config.target, seed, max_score(config.target.chars().count()));
            let json = serde_json::to_string_pretty(&result)
                .map_err(|e| CliError::new(format!("JSON serialization failed: {e}")))?;
            println!("{json}");
        }
    }

    Ok(())
}
