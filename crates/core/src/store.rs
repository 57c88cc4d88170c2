//! Store module - the controller that owns the game aggregate
//!
//! `GameStore` is the single owner of a [`Game`] and the state machine
//! around it: `select` -> `playing` -> `moving` -> `playing` / `gameover`.
//! All mutation goes through its operations; observers read a snapshot
//! after each operation completes.
//!
//! The two-phase turn protocol lives here. A move resolves and commits
//! synchronously, then the store enters `Moving` and arms a one-shot,
//! non-cancellable settle timer. [`GameStore::tick`] drives the timer; on
//! expiry the seed tile spawns into one of the empty cells captured at
//! commit time, the game-over predicate runs against the post-seed board,
//! and the status returns to `Playing` (or `GameOver`). While `Moving`,
//! further move requests find the status gate closed and are dropped, so
//! deferred phases can never overlap.
//!
//! Invalid-timing inputs (a move while on the select screen, a size change
//! mid-game) are ignored silently. The only reported failure is an undo
//! with nothing to undo, which returns `false` and changes nothing.

use arrayvec::ArrayVec;

use crate::game::{is_game_over, Game};
use crate::rng::TileSpawner;
use crate::snapshot::GameSnapshot;
use crate::turn::Turn;
use tui_2048_types::{
    next_board_size, prev_board_size, Direction, GameAction, GameStatus, DEFAULT_BOARD_SIZE,
    MAX_CELLS, SETTLE_DELAY_MS,
};

/// The armed settle timer between a committed move and its seed tile.
///
/// `empty_cells` is captured from the turn the move was resolved against,
/// before any deferred execution.
#[derive(Debug, Clone)]
struct PendingSeed {
    empty_cells: ArrayVec<(u8, u8), MAX_CELLS>,
    timer_ms: u32,
}

/// Controller owning the game aggregate and the progression status.
#[derive(Debug, Clone)]
pub struct GameStore {
    status: GameStatus,
    game: Game,
    size: u8,
    spawner: TileSpawner,
    pending_seed: Option<PendingSeed>,
}

impl GameStore {
    /// Create a store on the select screen with the default board size.
    ///
    /// The seed fixes the whole game's randomness; the same seed replays
    /// the same tiles.
    pub fn new(seed: u32) -> Self {
        Self {
            status: GameStatus::Select,
            game: Game::new(DEFAULT_BOARD_SIZE, Vec::new()),
            size: DEFAULT_BOARD_SIZE,
            spawner: TileSpawner::new(seed),
            pending_seed: None,
        }
    }

    pub fn status(&self) -> GameStatus {
        self.status
    }

    pub fn size(&self) -> u8 {
        self.size
    }

    pub fn game(&self) -> &Game {
        &self.game
    }

    pub fn is_cancelable(&self) -> bool {
        self.game.is_cancelable()
    }

    /// Cycle the selected board size downward. Select screen only.
    pub fn decrease_size(&mut self) {
        if self.status == GameStatus::Select {
            self.size = prev_board_size(self.size);
        }
    }

    /// Cycle the selected board size upward. Select screen only.
    pub fn increase_size(&mut self) {
        if self.status == GameStatus::Select {
            self.size = next_board_size(self.size);
        }
    }

    /// Start a game on the selected size with two seed tiles at distinct
    /// random cells. Select screen only.
    pub fn new_game(&mut self) {
        if self.status != GameStatus::Select {
            return;
        }

        let (first, second) = self.spawner.spawn_pair(self.size);
        self.game = Game::new(self.size, vec![first, second]);
        self.pending_seed = None;
        self.status = GameStatus::Playing;
    }

    /// Attempt a move. Only legal while `Playing`; requests in any other
    /// status (including `Moving`, while a seed is pending) are dropped.
    ///
    /// Returns true when a turn was committed.
    pub fn move_tiles(&mut self, direction: Direction) -> bool {
        if self.status != GameStatus::Playing {
            return false;
        }

        let turn = Turn::resolve(self.game.tiles(), self.game.size(), direction, self.game.seq_id());
        if turn.moved_count == 0 {
            // Whole-board no-op: no snapshot, no seed, status unchanged.
            return false;
        }

        self.game.commit_turn(&turn);
        self.pending_seed = Some(PendingSeed {
            empty_cells: turn.empty_cells,
            timer_ms: SETTLE_DELAY_MS,
        });
        self.status = GameStatus::Moving;
        true
    }

    /// Advance the settle timer. On expiry the pending seed spawns and the
    /// game-over predicate runs against the post-seed board.
    ///
    /// Returns true when the deferred phase completed on this tick.
    pub fn tick(&mut self, elapsed_ms: u32) -> bool {
        let Some(pending) = self.pending_seed.as_mut() else {
            return false;
        };

        if pending.timer_ms > elapsed_ms {
            pending.timer_ms -= elapsed_ms;
            return false;
        }

        let pending = self.pending_seed.take().unwrap();
        if let Some(tile) = self
            .spawner
            .spawn(&pending.empty_cells, self.game.seq_id())
        {
            self.game.apply_seed(tile);
        }

        self.status = if is_game_over(self.game.tiles(), self.game.size()) {
            GameStatus::GameOver
        } else {
            GameStatus::Playing
        };
        true
    }

    /// Undo the most recent committed move. Only legal while `Playing`.
    ///
    /// Returns false (the non-fatal "nothing to undo" condition) when no
    /// valid snapshot exists; state is left unchanged.
    pub fn cancel_move(&mut self) -> bool {
        if self.status != GameStatus::Playing {
            return false;
        }
        self.game.undo()
    }

    /// Force the store back to the select screen, discarding the game.
    pub fn exit_game(&mut self) {
        self.status = GameStatus::Select;
        self.pending_seed = None;
    }

    /// Dispatch a game action according to the current status.
    ///
    /// On the select screen, horizontal moves cycle the board size.
    /// Returns true when the action changed any state.
    pub fn apply_action(&mut self, action: GameAction) -> bool {
        match action {
            GameAction::MoveLeft => match self.status {
                GameStatus::Select => {
                    self.decrease_size();
                    true
                }
                _ => self.move_tiles(Direction::LEFT),
            },
            GameAction::MoveRight => match self.status {
                GameStatus::Select => {
                    self.increase_size();
                    true
                }
                _ => self.move_tiles(Direction::RIGHT),
            },
            GameAction::MoveUp => self.move_tiles(Direction::UP),
            GameAction::MoveDown => self.move_tiles(Direction::DOWN),
            GameAction::NewGame => {
                if self.status == GameStatus::Select {
                    self.new_game();
                    true
                } else {
                    false
                }
            }
            GameAction::CancelMove => self.cancel_move(),
            GameAction::ExitGame => {
                self.exit_game();
                true
            }
        }
    }

    /// Write a consistent view of the store into `out` without allocating.
    pub fn snapshot_into(&self, out: &mut GameSnapshot) {
        out.clear();
        out.status = self.status;
        out.size = if self.status == GameStatus::Select {
            self.size
        } else {
            self.game.size()
        };
        for tile in self.game.tiles() {
            out.board[tile.y as usize][tile.x as usize] = tile.rank;
        }
        out.score = self.game.score();
        out.move_count = self.game.moves().len() as u32;
        out.seq_id = self.game.seq_id();
        out.is_cancelable = self.game.is_cancelable();
        out.last_seed = self
            .game
            .moves()
            .first()
            .and_then(|m| m.seed)
            .map(|s| (s.x, s.y));
    }

    pub fn snapshot(&self) -> GameSnapshot {
        let mut snap = GameSnapshot::default();
        self.snapshot_into(&mut snap);
        snap
    }

    /// Replace the live aggregate, for driving the store into specific
    /// board states in tests.
    #[cfg(test)]
    pub(crate) fn set_game(&mut self, game: Game, status: GameStatus) {
        self.game = game;
        self.status = status;
        self.pending_seed = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tile::Tile;
    use tui_2048_types::{BOARD_SIZES, SETTLE_DELAY_MS, TICK_MS};

    fn settle(store: &mut GameStore) {
        let mut elapsed = 0;
        while elapsed <= SETTLE_DELAY_MS {
            store.tick(TICK_MS);
            elapsed += TICK_MS;
        }
    }

    fn playing_store(tiles: Vec<Tile>, size: u8) -> GameStore {
        let mut store = GameStore::new(42);
        store.set_game(Game::new(size, tiles), GameStatus::Playing);
        store
    }

    #[test]
    fn test_starts_on_select_screen() {
        let store = GameStore::new(1);
        assert_eq!(store.status(), GameStatus::Select);
        assert_eq!(store.size(), 4);
        assert!(!store.is_cancelable());
    }

    #[test]
    fn test_new_game_places_two_distinct_tiles() {
        let mut store = GameStore::new(1);
        store.new_game();

        assert_eq!(store.status(), GameStatus::Playing);
        let tiles = store.game().tiles();
        assert_eq!(tiles.len(), 2);
        assert_ne!((tiles[0].x, tiles[0].y), (tiles[1].x, tiles[1].y));
        assert_eq!(store.game().seq_id(), 2);
    }

    #[test]
    fn test_new_game_ignored_while_playing() {
        let mut store = GameStore::new(1);
        store.new_game();
        let tiles_before = store.game().tiles().to_vec();

        store.new_game();
        assert_eq!(store.game().tiles(), tiles_before.as_slice());
    }

    #[test]
    fn test_size_change_ignored_while_playing() {
        let mut store = GameStore::new(1);
        store.new_game();
        store.increase_size();
        store.decrease_size();
        assert_eq!(store.size(), 4);
    }

    #[test]
    fn test_size_cycles_over_allowed_set() {
        let mut store = GameStore::new(1);
        for _ in 0..BOARD_SIZES.len() {
            store.increase_size();
        }
        assert_eq!(store.size(), 4);

        store.decrease_size();
        store.decrease_size();
        assert_eq!(store.size(), BOARD_SIZES[BOARD_SIZES.len() - 1]);
    }

    #[test]
    fn test_move_commits_then_seeds_after_settle() {
        let mut store = playing_store(
            vec![Tile::new(1, 0, 1, 0), Tile::new(3, 0, 1, 1)],
            4,
        );

        assert!(store.move_tiles(Direction::LEFT));
        assert_eq!(store.status(), GameStatus::Moving);
        assert_eq!(store.game().score(), 4);
        assert_eq!(store.game().tiles().len(), 1);
        assert!(store.game().moves()[0].seed.is_none());

        settle(&mut store);

        assert_eq!(store.status(), GameStatus::Playing);
        assert_eq!(store.game().tiles().len(), 2);
        let seed = store.game().moves()[0].seed.expect("seed recorded");
        assert!(seed.rank == 1 || seed.rank == 2);
    }

    #[test]
    fn test_moves_dropped_while_seed_pending() {
        let mut store = playing_store(
            vec![Tile::new(1, 0, 1, 0), Tile::new(3, 0, 1, 1)],
            4,
        );

        assert!(store.move_tiles(Direction::LEFT));
        let score = store.game().score();
        let move_count = store.game().moves().len();

        // The status gate is closed until the deferred phase completes.
        assert!(!store.move_tiles(Direction::RIGHT));
        assert_eq!(store.game().score(), score);
        assert_eq!(store.game().moves().len(), move_count);
    }

    #[test]
    fn test_noop_move_changes_nothing() {
        let mut store = playing_store(
            vec![Tile::new(0, 0, 1, 0), Tile::new(0, 1, 2, 1)],
            4,
        );
        let tiles_before = store.game().tiles().to_vec();
        let seq_before = store.game().seq_id();

        assert!(!store.move_tiles(Direction::LEFT));
        assert_eq!(store.status(), GameStatus::Playing);
        assert_eq!(store.game().tiles(), tiles_before.as_slice());
        assert_eq!(store.game().score(), 0);
        assert_eq!(store.game().seq_id(), seq_before);
        assert!(store.game().moves().is_empty());
        assert!(!store.is_cancelable());
    }

    #[test]
    fn test_seed_lands_in_captured_empty_cell() {
        let mut store = playing_store(
            vec![Tile::new(1, 0, 1, 0), Tile::new(3, 0, 2, 1)],
            4,
        );

        assert!(store.move_tiles(Direction::LEFT));
        settle(&mut store);

        let seed = store.game().moves()[0].seed.unwrap();
        // The move left the row-0 tiles at x == 0 and x == 1.
        assert!(!(seed.x == 0 && seed.y == 0));
        assert!(!(seed.x == 1 && seed.y == 0));
        assert!(seed.x < 4 && seed.y < 4);
    }

    #[test]
    fn test_cancel_move_restores_and_reports_second_failure() {
        let mut store = playing_store(
            vec![Tile::new(1, 0, 1, 0), Tile::new(3, 0, 1, 1)],
            4,
        );
        let before = store.game().tiles().to_vec();

        assert!(store.move_tiles(Direction::LEFT));
        settle(&mut store);

        assert!(store.cancel_move());
        assert_eq!(store.game().tiles(), before.as_slice());
        assert_eq!(store.game().score(), 0);
        assert!(store.game().moves().is_empty());

        assert!(!store.cancel_move());
        assert_eq!(store.game().tiles(), before.as_slice());
    }

    #[test]
    fn test_cancel_move_fails_on_fresh_game() {
        let mut store = GameStore::new(1);
        store.new_game();
        assert!(!store.cancel_move());
    }

    #[test]
    fn test_gameover_after_seed_fills_last_cell() {
        // 3x3 checkerboard of ranks 3 and 4 with (2, 2) empty. Row 2 can
        // still slide right; the seed then fills the opened cell, and a
        // rank-1/2 seed can never pair with ranks 3/4.
        let mut tiles = Vec::new();
        let mut seq = 0;
        for y in 0u8..3 {
            for x in 0u8..3 {
                if (x, y) == (2, 2) {
                    continue;
                }
                tiles.push(Tile::new(x, y, 3 + ((x + y) % 2), seq));
                seq += 1;
            }
        }
        let mut store = playing_store(tiles, 3);

        assert!(store.move_tiles(Direction::RIGHT));
        settle(&mut store);

        assert_eq!(store.status(), GameStatus::GameOver);
        assert_eq!(store.game().tiles().len(), 9);

        // Terminal state: further moves are dropped.
        assert!(!store.move_tiles(Direction::LEFT));
        assert_eq!(store.game().tiles().len(), 9);
    }

    #[test]
    fn test_exit_game_returns_to_select_from_any_status() {
        let mut store = GameStore::new(1);
        store.new_game();
        assert!(store.move_tiles(Direction::LEFT) || store.move_tiles(Direction::UP)
            || store.move_tiles(Direction::RIGHT) || store.move_tiles(Direction::DOWN));

        // Exit while the seed is still pending.
        store.exit_game();
        assert_eq!(store.status(), GameStatus::Select);

        // The abandoned timer must not fire into the select screen.
        assert!(!store.tick(SETTLE_DELAY_MS + 1));
        assert_eq!(store.status(), GameStatus::Select);
    }

    #[test]
    fn test_apply_action_cycles_size_on_select() {
        let mut store = GameStore::new(1);
        assert!(store.apply_action(GameAction::MoveRight));
        assert_eq!(store.size(), 5);
        assert!(store.apply_action(GameAction::MoveLeft));
        assert_eq!(store.size(), 4);

        // Vertical moves do nothing on the select screen.
        assert!(!store.apply_action(GameAction::MoveUp));
        assert!(!store.apply_action(GameAction::MoveDown));
        assert_eq!(store.status(), GameStatus::Select);
    }

    #[test]
    fn test_snapshot_reflects_store() {
        let mut store = playing_store(
            vec![Tile::new(1, 0, 1, 0), Tile::new(3, 0, 1, 1)],
            4,
        );
        assert!(store.move_tiles(Direction::LEFT));
        settle(&mut store);

        let snap = store.snapshot();
        assert_eq!(snap.status, GameStatus::Playing);
        assert_eq!(snap.size, 4);
        assert_eq!(snap.score, 4);
        assert_eq!(snap.move_count, 1);
        assert_eq!(snap.board[0][0], 2);
        assert!(snap.is_cancelable);
        let (sx, sy) = snap.last_seed.unwrap();
        assert!(snap.board[sy as usize][sx as usize] > 0);
    }

    #[test]
    fn test_seq_ids_strictly_increase_over_a_session() {
        let mut store = GameStore::new(7);
        store.new_game();

        let mut last_seq = store.game().seq_id();
        for _ in 0..20 {
            for dir in Direction::all() {
                if store.move_tiles(dir) {
                    settle(&mut store);
                    break;
                }
            }
            let seq = store.game().seq_id();
            assert!(seq >= last_seq);
            last_seq = seq;
            if store.status() == GameStatus::GameOver {
                break;
            }
        }
    }
}
