//! Turn module - the slide-and-merge resolver
//!
//! A `Turn` is the computed outcome of attempting a move in one direction
//! from a given board state, before it is committed. The resolver is
//! direction-agnostic: the [`Direction`] descriptor selects the scan axis
//! and target edge, and a single algorithm handles all four directions.
//!
//! Resolution rules:
//! - Tiles are partitioned into independent lines along the move axis and
//!   compacted toward the target edge.
//! - Two adjacent tiles of equal rank combine into one tile of the next
//!   rank at the leading position, scoring the merged result's displayed
//!   value. A tile produced by a merge cannot merge again in the same turn.
//! - Each merge consumes one fresh sequence id; tiles that only slide keep
//!   their identity.

use arrayvec::ArrayVec;

use crate::tile::{cell_index, Tile};
use tui_2048_types::{Direction, MAX_BOARD_SIZE, MAX_CELLS};

const MAX_LINE: usize = MAX_BOARD_SIZE as usize;

/// The resolved outcome of a move attempt. Transient: produced once per
/// attempt and consumed by the commit, never stored.
#[derive(Debug, Clone)]
pub struct Turn {
    /// The resulting tile arrangement.
    pub tiles: Vec<Tile>,
    /// Sum of the displayed values produced by merges this turn.
    pub score_change: u32,
    /// Position changes plus merges; zero means the move was a no-op.
    pub moved_count: u32,
    /// All cells left unoccupied by the resulting arrangement.
    pub empty_cells: ArrayVec<(u8, u8), MAX_CELLS>,
    /// Fresh sequence ids consumed, one per merge.
    pub seq_id_change: u32,
    pub direction: Direction,
}

impl Turn {
    /// Resolve a move of `tiles` on a `size` x `size` board.
    ///
    /// `next_seq_id` is the first unused sequence id; merged tiles take ids
    /// `next_seq_id`, `next_seq_id + 1`, ... in resolution order.
    pub fn resolve(tiles: &[Tile], size: u8, direction: Direction, next_seq_id: u32) -> Turn {
        let mut result: Vec<Tile> = Vec::with_capacity(tiles.len());
        let mut score_change: u32 = 0;
        let mut moved_count: u32 = 0;
        let mut merges: u32 = 0;

        for line in 0..size {
            let mut line_tiles: ArrayVec<Tile, MAX_LINE> = ArrayVec::new();
            for tile in tiles {
                let cross = if direction.horizontal { tile.y } else { tile.x };
                if cross == line {
                    line_tiles.push(*tile);
                }
            }

            // Scan order: nearest to the target edge first.
            line_tiles.sort_unstable_by_key(|t| {
                let along = if direction.horizontal { t.x } else { t.y };
                if direction.reversed {
                    size - 1 - along
                } else {
                    along
                }
            });

            // Compact the line into consecutive slots counted from the
            // target edge, merging equal-rank neighbors at most once each.
            let mut placed: ArrayVec<(Tile, bool), MAX_LINE> = ArrayVec::new();
            for tile in line_tiles {
                match placed.last_mut() {
                    Some((last, already_merged)) if !*already_merged && last.rank == tile.rank => {
                        last.rank += 1;
                        last.seq_id = next_seq_id + merges;
                        *already_merged = true;
                        merges += 1;
                        score_change += 1u32 << last.rank;
                        // The merge itself counts, plus the consumed tile's
                        // travel when it had any.
                        moved_count += 1;
                        if (tile.x, tile.y) != (last.x, last.y) {
                            moved_count += 1;
                        }
                    }
                    _ => {
                        let slot = placed.len() as u8;
                        let along = if direction.reversed {
                            size - 1 - slot
                        } else {
                            slot
                        };
                        let (x, y) = if direction.horizontal {
                            (along, line)
                        } else {
                            (line, along)
                        };
                        if (x, y) != (tile.x, tile.y) {
                            moved_count += 1;
                        }
                        placed.push((Tile { x, y, ..tile }, false));
                    }
                }
            }

            result.extend(placed.iter().map(|&(t, _)| t));
        }

        let empty_cells = collect_empty_cells(&result, size);

        Turn {
            tiles: result,
            score_change,
            moved_count,
            empty_cells,
            seq_id_change: merges,
            direction,
        }
    }
}

/// All cells of a `size` x `size` board not covered by `tiles`, in
/// row-major order.
pub fn collect_empty_cells(tiles: &[Tile], size: u8) -> ArrayVec<(u8, u8), MAX_CELLS> {
    let mut occupied = [false; MAX_CELLS];
    for tile in tiles {
        occupied[cell_index(size, tile.x, tile.y)] = true;
    }

    let mut empty = ArrayVec::new();
    for y in 0..size {
        for x in 0..size {
            if !occupied[cell_index(size, x, y)] {
                empty.push((x, y));
            }
        }
    }
    empty
}
