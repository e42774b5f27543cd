//! Weasel CLI - terminal-animated evolution demos.

// Allow print in the CLI binary
#![allow(clippy::print_stdout, clippy::print_stderr)]

mod cli;

use clap::{Parser, Subcommand};
use std::process::ExitCode;

/// Weasel - evolve phrases and watch Life, in your terminal
#[derive(Parser, Debug)]
#[command(name = "weasel")]
#[command(author, version, about, long_about = None)]
struct Args {
    #[command(subcommand)]
    command: Commands,
}

/// Available commands
#[derive(Subcommand, Debug)]
enum Commands {
    /// Run the genetic algorithm headless and print the result
    Evolve {
        /// Target phrase to evolve toward
        #[arg(short, long, default_value = "what about longer strings such as this")]
        target: String,

        /// Characters eligible at any genome position
        #[arg(short, long, default_value = "abcdefghijklmnopqrstuvwxyz ")]
        alphabet: String,

        /// Population size (default: 2000)
        #[arg(short, long, default_value = "2000")]
        population: usize,

        /// Per-position mutation probability (default: 0.02)
        #[arg(short, long, default_value = "0.02")]
        mutation_rate: f64,

        /// Selection attempts before falling back to the fittest genome
        #[arg(long, default_value = "1000")]
        attempts: usize,

        /// Generation cap (default: 0 = run until convergence)
        #[arg(short, long, default_value = "0")]
        generations: u64,

        /// Random seed (default: time-derived)
        #[arg(short, long)]
        seed: Option<u64>,

        /// Output format: text or json
        #[arg(short, long, default_value = "text")]
        format: cli::OutputFormat,

        /// Show a progress spinner instead of per-generation lines
        #[arg(long)]
        progress: bool,

        /// Suppress per-generation output
        #[arg(short, long)]
        quiet: bool,
    },

    /// Interactive TUI animating the evolution in real time
    Watch {
        /// Target phrase to evolve toward
        #[arg(short, long, default_value = "what about longer strings such as this")]
        target: String,

        /// Characters eligible at any genome position
        #[arg(short, long, default_value = "abcdefghijklmnopqrstuvwxyz ")]
        alphabet: String,

        /// Population size (default: 2000)
        #[arg(short, long, default_value = "2000")]
        population: usize,

        /// Per-position mutation probability (default: 0.02)
        #[arg(short, long, default_value = "0.02")]
        mutation_rate: f64,

        /// Random seed (default: time-derived)
        #[arg(short, long)]
        seed: Option<u64>,

        /// Generation delay in milliseconds (default: 50)
        #[arg(long, default_value = "50")]
        speed: u64,
    },

    /// Interactive TUI animating Conway's Game of Life
    Life {
        /// Grid width in cells (default: 60)
        #[arg(long, default_value = "60")]
        width: usize,

        /// Grid height in cells (default: 30)
        #[arg(long, default_value = "30")]
        height: usize,

        /// Random seed (default: time-derived)
        #[arg(short, long)]
        seed: Option<u64>,

        /// Generation delay in milliseconds (default: 250)
        #[arg(long, default_value = "250")]
        speed: u64,
    },
}

fn main() -> ExitCode {
    let args = Args::parse();

    let result = match args.command {
        Commands::Evolve {
            target,
            alphabet,
            population,
            mutation_rate,
            attempts,
            generations,
            seed,
            format,
            progress,
            quiet,
        } => cli::evolve::execute(
            target,
            alphabet,
            population,
            mutation_rate,
            attempts,
            generations,
            seed,
            format,
            progress,
            quiet,
        ),

        Commands::Watch {
            target,
            alphabet,
            population,
            mutation_rate,
            seed,
            speed,
        } => cli::watch::execute(target, alphabet, population, mutation_rate, seed, speed),

        Commands::Life {
            width,
            height,
            seed,
            speed,
        } => cli::life::execute(width, height, seed, speed),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}
