// Allow unwrap in tests (test code is not production)
#![cfg_attr(test, allow(clippy::unwrap_used))]
//! Weasel: terminal-animated evolution demos.
//!
//! Two independent simulations share this crate:
//!
//! - [`evo`] — a genetic algorithm that converges a random population of
//!   character strings toward a target phrase.
//! - [`life`] — Conway's Game of Life on a toroidal grid.
//!
//! Both are demonstration loops: seed state, iterate a deterministic update
//! rule, render to a terminal, repeat until interrupted or converged. The
//! evolution engine carries the algorithmic weight; the `weasel` binary
//! wraps both in animated terminal front-ends.

pub mod evo;
pub mod life;

// Re-export the engine surface at the crate root for convenience
pub use evo::{Engine, EvolutionConfig, EvolutionStats, Generation};
