//! Game module - the mutable aggregate and its commit protocol
//!
//! `Game` is the sole mutable aggregate: board size, live tiles, score,
//! move history and the running sequence id. All mutation goes through
//! [`Game::commit_turn`], [`Game::apply_seed`] and [`Game::undo`]; the
//! resolver itself never touches a `Game`.
//!
//! Undo depth is exactly one: `last_turn` holds the most recent pre-move
//! snapshot and is overwritten on every committed move.

use crate::tile::Tile;
use crate::turn::{collect_empty_cells, Turn};
use tui_2048_types::DirectionName;

/// A tile injected by the spawner after a committed move, as recorded in
/// the move history.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Seed {
    pub x: u8,
    pub y: u8,
    pub rank: u8,
}

/// One committed move in the history, most recent first.
///
/// `seed` stays `None` until the deferred seeding step completes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Movement {
    pub direction: DirectionName,
    pub move_number: u32,
    pub seed: Option<Seed>,
}

/// The single undo slot: the pre-move tiles and score of the most recent
/// committed move.
#[derive(Debug, Clone, Default)]
pub struct LastTurn {
    pub tiles: Vec<Tile>,
    pub score: u32,
    pub valid: bool,
}

/// The game aggregate.
#[derive(Debug, Clone)]
pub struct Game {
    size: u8,
    tiles: Vec<Tile>,
    score: u32,
    /// Committed moves, most recent first.
    moves: Vec<Movement>,
    /// Next unused sequence id; strictly increasing, never reused.
    seq_id: u32,
    last_turn: LastTurn,
}

impl Game {
    /// Create a fresh game from its initial seed tiles.
    ///
    /// The sequence id starts just past the highest initial tile id, and
    /// the undo slot starts invalid (there is no prior move).
    pub fn new(size: u8, seeds: Vec<Tile>) -> Self {
        let seq_id = seeds.iter().map(|t| t.seq_id + 1).max().unwrap_or(0);
        Self {
            size,
            tiles: seeds,
            score: 0,
            moves: Vec::new(),
            seq_id,
            last_turn: LastTurn::default(),
        }
    }

    pub fn size(&self) -> u8 {
        self.size
    }

    pub fn tiles(&self) -> &[Tile] {
        &self.tiles
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn moves(&self) -> &[Movement] {
        &self.moves
    }

    /// The next unused sequence id.
    pub fn seq_id(&self) -> u32 {
        self.seq_id
    }

    pub fn last_turn(&self) -> &LastTurn {
        &self.last_turn
    }

    /// Whether a single-level undo is currently possible.
    pub fn is_cancelable(&self) -> bool {
        self.last_turn.valid
    }

    /// Commit a resolved turn: snapshot the pre-move state for undo, adopt
    /// the new arrangement and score, and record the movement.
    ///
    /// Callers must only commit turns with `moved_count > 0`; a no-op turn
    /// never reaches the aggregate.
    pub fn commit_turn(&mut self, turn: &Turn) {
        debug_assert!(turn.moved_count > 0);

        self.last_turn = LastTurn {
            tiles: std::mem::replace(&mut self.tiles, turn.tiles.clone()),
            score: self.score,
            valid: true,
        };

        self.score += turn.score_change;
        self.seq_id += turn.seq_id_change;

        let movement = Movement {
            direction: turn.direction.name,
            move_number: self.moves.len() as u32 + 1,
            seed: None,
        };
        self.moves.insert(0, movement);
    }

    /// Apply a spawned seed tile: place it, consume one sequence id, and
    /// fill in the most recent movement's seed record.
    pub fn apply_seed(&mut self, tile: Tile) {
        debug_assert_eq!(tile.seq_id, self.seq_id);

        if let Some(movement) = self.moves.first_mut() {
            movement.seed = Some(Seed {
                x: tile.x,
                y: tile.y,
                rank: tile.rank,
            });
        }
        self.tiles.push(tile);
        self.seq_id += 1;
    }

    /// Restore the pre-move snapshot, dropping the most recent movement.
    ///
    /// Returns `false` without touching any state when there is nothing to
    /// undo (fresh game, or a second consecutive undo).
    pub fn undo(&mut self) -> bool {
        if !self.last_turn.valid {
            return false;
        }

        self.tiles = std::mem::take(&mut self.last_turn.tiles);
        self.score = self.last_turn.score;
        self.last_turn.valid = false;
        if !self.moves.is_empty() {
            self.moves.remove(0);
        }
        true
    }
}

/// Terminal-state predicate: true iff no cell is empty and no two adjacent
/// tiles (horizontally or vertically) share a rank, i.e. every direction
/// would resolve to a no-op.
///
/// Only meaningful after the deferred seeding step: a move that opened an
/// empty cell keeps the game alive even if every slide was blocked before.
pub fn is_game_over(tiles: &[Tile], size: u8) -> bool {
    if !collect_empty_cells(tiles, size).is_empty() {
        return false;
    }

    let mut ranks = [[0u8; 8]; 8];
    for tile in tiles {
        ranks[tile.y as usize][tile.x as usize] = tile.rank;
    }

    for y in 0..size as usize {
        for x in 0..size as usize {
            let rank = ranks[y][x];
            if x + 1 < size as usize && ranks[y][x + 1] == rank {
                return false;
            }
            if y + 1 < size as usize && ranks[y + 1][x] == rank {
                return false;
            }
        }
    }
    true
}
