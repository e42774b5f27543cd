//! Conway's Game of Life on a toroidal grid.
//!
//! The companion demo to the evolution engine: seed a random grid, apply
//! the birth/survival rule, render, repeat. Kept deliberately small.

mod grid;

pub use grid::Grid;
