//! Core game logic module - pure, deterministic, and testable
//!
//! This module contains all the game rules, state management, and the
//! slide-and-merge resolution algorithm. It has **zero dependencies** on
//! UI, networking, or I/O, making it:
//!
//! - **Deterministic**: Same seed produces identical games
//! - **Testable**: Comprehensive unit tests for all game rules
//! - **Portable**: Can run in any environment (terminal, GUI, headless)
//!
//! # Module Structure
//!
//! - [`tile`]: the tile/coordinate model (immutable tiles, sequence ids)
//! - [`turn`]: the direction-agnostic slide-and-merge resolver
//! - [`rng`]: seeded LCG and the seed-tile spawner
//! - [`game`]: the game aggregate, move history, undo slot, game-over predicate
//! - [`store`]: the controller and state machine around one aggregate
//! - [`snapshot`]: fixed-size observer view for renderers
//!
//! # Game Rules
//!
//! - Tiles slide toward one edge and compact; two adjacent equal-rank tiles
//!   merge into the next rank, at most once per tile per turn, scoring the
//!   merged result's displayed value.
//! - A move that changes nothing is a no-op: no history entry, no seed.
//! - A committed move is followed, after a fixed settle delay, by one seed
//!   tile spawned into a cell that was empty when the move resolved.
//! - The game ends when the board is full and no adjacent pair remains.
//! - Undo is single-depth: exactly the most recent committed move can be
//!   taken back.
//!
//! # Example
//!
//! ```
//! use tui_2048_core::GameStore;
//! use tui_2048_types::{Direction, GameStatus, SETTLE_DELAY_MS};
//!
//! let mut store = GameStore::new(12345);
//! store.new_game();
//! assert_eq!(store.status(), GameStatus::Playing);
//!
//! // A committed move closes the status gate until the seed settles.
//! for dir in Direction::all() {
//!     if store.move_tiles(dir) {
//!         assert_eq!(store.status(), GameStatus::Moving);
//!         store.tick(SETTLE_DELAY_MS + 1);
//!         break;
//!     }
//! }
//! assert_ne!(store.status(), GameStatus::Moving);
//! ```

pub mod game;
pub mod rng;
pub mod snapshot;
pub mod store;
pub mod tile;
pub mod turn;

pub use tui_2048_types as types;

// Re-export commonly used types for convenience
pub use game::{is_game_over, Game, LastTurn, Movement, Seed};
pub use rng::{SimpleRng, TileSpawner};
pub use snapshot::GameSnapshot;
pub use store::GameStore;
pub use tile::{cell_index, format_tiles, Tile};
pub use turn::{collect_empty_cells, Turn};
