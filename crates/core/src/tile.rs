//! Tile module - the tile/coordinate model
//!
//! A tile is an immutable value: sliding or merging never mutates a tile in
//! place, it produces a new `Tile` at the new position. The `seq_id` is a
//! monotonically increasing identity used for merge/animation bookkeeping;
//! it is assigned once at creation and never reused within a game.
//!
//! Coordinates: (x, y) with x ranging left to right and y top to bottom,
//! both within `[0, size)`.

/// A single tile on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Tile {
    pub x: u8,
    pub y: u8,
    /// Rank (exponent): the displayed value is `2^rank`. Spawns at 1 or 2.
    pub rank: u8,
    /// Monotonic creation id; fresh ids are consumed by merges and seeds only.
    pub seq_id: u32,
}

impl Tile {
    pub fn new(x: u8, y: u8, rank: u8, seq_id: u32) -> Self {
        Self { x, y, rank, seq_id }
    }

    /// The displayed power-of-two value.
    pub fn display_value(&self) -> u32 {
        1u32 << self.rank
    }
}

/// Row-major flat index of a cell on an `size` x `size` board.
#[inline(always)]
pub fn cell_index(size: u8, x: u8, y: u8) -> usize {
    (y as usize) * (size as usize) + (x as usize)
}

/// Format the board as a text grid for debugging and test failure output.
///
/// Empty cells print as `.`, occupied cells print their rank.
pub fn format_tiles(size: u8, tiles: &[Tile]) -> String {
    let mut ranks = vec![0u8; (size as usize) * (size as usize)];
    for tile in tiles {
        ranks[cell_index(size, tile.x, tile.y)] = tile.rank;
    }

    let mut out = String::with_capacity((size as usize + 1) * (size as usize) * 3);
    for y in 0..size {
        for x in 0..size {
            let rank = ranks[cell_index(size, x, y)];
            if rank == 0 {
                out.push_str("  .");
            } else {
                out.push_str(&format!("{:>3}", rank));
            }
        }
        out.push('\n');
    }
    out
}
