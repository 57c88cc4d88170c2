//! RNG module - deterministic randomness and tile seeding
//!
//! Provides a simple LCG for deterministic games (same seed, same game) and
//! the [`TileSpawner`], which implements the seed-tile policy: position
//! uniform over the given empty cells, rank 1 (displays 2) by default with
//! a fixed percent chance of rank 2 (displays 4).

use crate::tile::Tile;
use tui_2048_types::FOUR_SPAWN_PERCENT;

/// Simple LCG (Linear Congruential Generator) RNG
/// Uses constants from Numerical Recipes
#[derive(Debug, Clone)]
pub struct SimpleRng {
    state: u32,
}

impl SimpleRng {
    /// Create a new RNG with the given seed
    pub fn new(seed: u32) -> Self {
        // Avoid 0 seed which would produce all zeros
        let state = if seed == 0 { 1 } else { seed };
        Self { state }
    }

    /// Generate next random u32
    pub fn next_u32(&mut self) -> u32 {
        // LCG formula: (a * state + c) mod m
        // Using Numerical Recipes constants: a=1664525, c=1013904223, m=2^32
        self.state = self.state.wrapping_mul(1664525).wrapping_add(1013904223);
        self.state
    }

    /// Generate random value in range [0, max)
    pub fn next_range(&mut self, max: u32) -> u32 {
        self.next_u32() % max
    }

    /// Generate random value in range [0, 100)
    pub fn next_percent(&mut self) -> u32 {
        self.next_range(100)
    }

    /// Get the current RNG state (for restarting with the same sequence)
    pub fn state(&self) -> u32 {
        self.state
    }
}

/// Seed-tile generator.
///
/// Spawn policy, made explicit so it is testable: the cell is chosen
/// uniformly from the caller's empty-cell set, and the rank is 2 with
/// `four_percent` probability, otherwise 1.
#[derive(Debug, Clone)]
pub struct TileSpawner {
    rng: SimpleRng,
    four_percent: u32,
}

impl TileSpawner {
    /// Create a spawner with the default rank weighting.
    pub fn new(seed: u32) -> Self {
        Self::with_four_percent(seed, FOUR_SPAWN_PERCENT)
    }

    /// Create a spawner with an explicit rank-2 percentage (0..=100).
    pub fn with_four_percent(seed: u32, four_percent: u32) -> Self {
        Self {
            rng: SimpleRng::new(seed),
            four_percent,
        }
    }

    /// Spawn one seed tile into one of `empty_cells`.
    ///
    /// The caller supplies the sequence id; the spawner never allocates ids
    /// itself. Returns `None` when no empty cell exists.
    pub fn spawn(&mut self, empty_cells: &[(u8, u8)], seq_id: u32) -> Option<Tile> {
        if empty_cells.is_empty() {
            return None;
        }

        let (x, y) = empty_cells[self.rng.next_range(empty_cells.len() as u32) as usize];
        let rank = if self.rng.next_percent() < self.four_percent {
            2
        } else {
            1
        };
        Some(Tile::new(x, y, rank, seq_id))
    }

    /// Spawn the two initial tiles of a new game at distinct random cells,
    /// with sequence ids 0 and 1.
    pub fn spawn_pair(&mut self, size: u8) -> (Tile, Tile) {
        let cells = size as u32 * size as u32;
        let first = self.rng.next_range(cells);
        let mut second = first;
        while second == first {
            second = self.rng.next_range(cells);
        }

        let first = self.cell_tile(size, first, 0);
        let second = self.cell_tile(size, second, 1);
        (first, second)
    }

    fn cell_tile(&mut self, size: u8, cell: u32, seq_id: u32) -> Tile {
        let x = (cell % size as u32) as u8;
        let y = (cell / size as u32) as u8;
        let rank = if self.rng.next_percent() < self.four_percent {
            2
        } else {
            1
        };
        Tile::new(x, y, rank, seq_id)
    }

    /// Current RNG state, so a replay can reuse the exact sequence.
    pub fn state(&self) -> u32 {
        self.rng.state()
    }
}
