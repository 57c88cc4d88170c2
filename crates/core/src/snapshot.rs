//! Fixed-size, copyable view of the store for renderers and observers.
//!
//! Observers read a consistent snapshot after each operation completes,
//! instead of reaching into the aggregate. `snapshot_into` writes without
//! allocating so render loops can reuse one buffer.

use tui_2048_types::{GameStatus, DEFAULT_BOARD_SIZE, MAX_BOARD_SIZE};

const GRID: usize = MAX_BOARD_SIZE as usize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GameSnapshot {
    pub status: GameStatus,
    /// Selected board size; only the top-left `size` x `size` corner of
    /// `board` is meaningful.
    pub size: u8,
    /// Tile ranks by `[y][x]`; 0 means empty.
    pub board: [[u8; GRID]; GRID],
    pub score: u32,
    pub move_count: u32,
    pub seq_id: u32,
    pub is_cancelable: bool,
    /// Cell of the most recently spawned seed tile, for highlighting.
    pub last_seed: Option<(u8, u8)>,
}

impl GameSnapshot {
    pub fn clear(&mut self) {
        self.status = GameStatus::Select;
        self.size = DEFAULT_BOARD_SIZE;
        self.board = [[0u8; GRID]; GRID];
        self.score = 0;
        self.move_count = 0;
        self.seq_id = 0;
        self.is_cancelable = false;
        self.last_seed = None;
    }
}

impl Default for GameSnapshot {
    fn default() -> Self {
        Self {
            status: GameStatus::Select,
            size: DEFAULT_BOARD_SIZE,
            board: [[0u8; GRID]; GRID],
            score: 0,
            move_count: 0,
            seq_id: 0,
            is_cancelable: false,
            last_seed: None,
        }
    }
}
