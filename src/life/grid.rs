//! Toroidal grid and update rule for Conway's Game of Life.

use rand::Rng;
use serde::{Deserialize, Serialize};

/// A wrapped 2D grid of cells, updated by the B3/S23 rule.
///
/// The grid is toroidal: neighbor lookups wrap across all four edges, so a
/// glider leaving the right edge re-enters on the left.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Grid {
    width: usize,
    height: usize,
    cells: Vec<bool>,
    generation: u64,
}

impl Grid {
    /// Create an empty grid.
    ///
    /// # Panics
    ///
    /// Panics if either dimension is zero.
    #[must_use]
    pub fn empty(width: usize, height: usize) -> Self {
        assert!(width > 0 && height > 0, "grid dimensions must be positive");
        Self {
            width,
            height,
            cells: vec![false; width * height],
            generation: 0,
        }
    }

    /// Create a grid with each cell alive with probability 1/2.
    ///
    /// # Panics
    ///
    /// Panics if either dimension is zero.
    #[must_use]
    pub fn random<R: Rng>(rng: &mut R, width: usize, height: usize) -> Self {
        let mut grid = Self::empty(width, height);
        for cell in &mut grid.cells {
            *cell = rng.gen_bool(0.5);
        }
        grid
    }

    /// Grid width in cells.
    #[must_use]
    pub fn width(&self) -> usize {
        self.width
    }

    /// Grid height in cells.
    #[must_use]
    pub fn height(&self) -> usize {
        self.height
    }

    /// Update steps applied so far.
    #[must_use]
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Whether the cell at `(x, y)` is alive.
    ///
    /// # Panics
    ///
    /// Panics if the coordinate is out of bounds.
    #[must_use]
    pub fn is_alive(&self, x: usize, y: usize) -> bool {
        assert!(x < self.width && y < self.height, "coordinate out of bounds");
        self.cells[y * self.width + x]
    }

    /// Set the cell at `(x, y)`.
    ///
    /// # Panics
    ///
    /// Panics if the coordinate is out of bounds.
    pub fn set(&mut self, x: usize, y: usize, alive: bool) {
        assert!(x < self.width && y < self.height, "coordinate out of bounds");
        self.cells[y * self.width + x] = alive;
    }

    /// Number of live cells.
    #[must_use]
    pub fn live_count(&self) -> usize {
        self.cells.iter().filter(|&&c| c).count()
    }

    /// Rows of the grid, top to bottom.
    pub fn rows(&self) -> impl Iterator<Item = &[bool]> {
        self.cells.chunks(self.width)
    }

    /// Advance the grid one generation.
    ///
    /// A live cell survives with 2 or 3 live neighbors; a dead cell is born
    /// with exactly 3. The next state is computed against a snapshot of the
    /// current one, then swapped in wholesale.
    pub fn step(&mut self) {
        let mut next = vec![false; self.cells.len()];

        for y in 0..self.height {
            for x in 0..self.width {
                let neighbors = self.live_neighbors(x, y);
                let alive = self.cells[y * self.width + x];
                next[y * self.width + x] = matches!((alive, neighbors), (true, 2 | 3) | (false, 3));
            }
        }

        self.cells = next;
        self.generation += 1;
    }

    /// Count live neighbors of `(x, y)` with toroidal wraparound.
    fn live_neighbors(&self, x: usize, y: usize) -> usize {
        let left = (x + self.width - 1) % self.width;
        let right = (x + 1) % self.width;
        let up = (y + self.height - 1) % self.height;
        let down = (y + 1) % self.height;

        [
            (left, up),
            (x, up),
            (right, up),
            (left, y),
            (right, y),
            (left, down),
            (x, down),
            (right, down),
        ]
        .iter()
        .filter(|&&(nx, ny)| self.cells[ny * self.width + nx])
        .count()
    }
}
