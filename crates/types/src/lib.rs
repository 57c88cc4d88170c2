//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental types used throughout the application.
//! All types are pure data structures with no external dependencies, making them
//! usable in any context (core logic, terminal rendering, input mapping).
//!
//! # Board Sizes
//!
//! The board is always square. Only a fixed set of sizes is playable:
//!
//! - **Allowed**: 3, 4, 5, 6, 8 (see [`BOARD_SIZES`])
//! - **Default**: 4 (the classic 2048 board)
//! - **Maximum**: 8, which bounds fixed-capacity structures at 64 cells
//!
//! The size is chosen on the select screen before a game starts and never
//! changes mid-game. [`next_board_size`] and [`prev_board_size`] cycle through
//! the allowed set with wraparound at both ends.
//!
//! # Timing Constants
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `TICK_MS` | 16 | Fixed timestep interval (~60 FPS) |
//! | `SETTLE_DELAY_MS` | 150 | Delay between a committed move and its seed tile |
//!
//! The settle delay exists so a UI can finish its slide animation before a
//! new tile appears. The core only cares about the protocol point: the seed
//! step runs exactly once, `SETTLE_DELAY_MS` after a move commits.
//!
//! # Tile Ranks
//!
//! Tiles store a *rank* (exponent), not the displayed value: rank `r` displays
//! as `2^r`. Spawned tiles have rank 1 (displays 2) or, with
//! [`FOUR_SPAWN_PERCENT`] probability, rank 2 (displays 4). Merging two
//! rank-`r` tiles yields one rank-`r+1` tile.
//!
//! # Examples
//!
//! ```
//! use tui_2048_types::{Direction, GameAction, next_board_size, BOARD_SIZES};
//!
//! // Directions are plain descriptors consumed by one generic resolver.
//! let left = Direction::LEFT;
//! assert!(left.horizontal);
//! assert!(!left.reversed);
//!
//! // Parse game action
//! let action = GameAction::from_str("moveLeft").unwrap();
//! assert_eq!(action, GameAction::MoveLeft);
//!
//! // Size cycling wraps at both ends
//! assert_eq!(next_board_size(BOARD_SIZES[BOARD_SIZES.len() - 1]), BOARD_SIZES[0]);
//! ```

/// Allowed board sizes, in selection order.
pub const BOARD_SIZES: [u8; 5] = [3, 4, 5, 6, 8];

/// Board size a fresh store starts with (classic 2048).
pub const DEFAULT_BOARD_SIZE: u8 = 4;

/// Largest allowed board size; bounds fixed-capacity cell buffers (8x8 = 64).
pub const MAX_BOARD_SIZE: u8 = 8;

/// Maximum number of cells on any board.
pub const MAX_CELLS: usize = (MAX_BOARD_SIZE as usize) * (MAX_BOARD_SIZE as usize);

/// Fixed timestep interval in milliseconds (16ms ≈ 60 FPS)
pub const TICK_MS: u32 = 16;

/// Delay between committing a move and spawning its seed tile, in
/// milliseconds. Matches the tile slide-transition duration.
pub const SETTLE_DELAY_MS: u32 = 150;

/// Percent chance that a spawned tile is rank 2 (displays 4) rather than
/// rank 1 (displays 2). Classic 2048 weighting.
pub const FOUR_SPAWN_PERCENT: u32 = 10;

/// Return the next allowed board size, wrapping past the maximum.
pub fn next_board_size(size: u8) -> u8 {
    match BOARD_SIZES.iter().position(|&s| s == size) {
        Some(idx) if idx + 1 < BOARD_SIZES.len() => BOARD_SIZES[idx + 1],
        _ => BOARD_SIZES[0],
    }
}

/// Return the previous allowed board size, wrapping past the minimum.
pub fn prev_board_size(size: u8) -> u8 {
    match BOARD_SIZES.iter().position(|&s| s == size) {
        Some(idx) if idx > 0 => BOARD_SIZES[idx - 1],
        _ => BOARD_SIZES[BOARD_SIZES.len() - 1],
    }
}

/// The four move directions, by name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DirectionName {
    Left,
    Right,
    Up,
    Down,
}

impl DirectionName {
    /// Parse direction name from string (case-insensitive)
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "left" => Some(DirectionName::Left),
            "right" => Some(DirectionName::Right),
            "up" => Some(DirectionName::Up),
            "down" => Some(DirectionName::Down),
            _ => None,
        }
    }

    /// Convert to lowercase string
    pub fn as_str(&self) -> &'static str {
        match self {
            DirectionName::Left => "left",
            DirectionName::Right => "right",
            DirectionName::Up => "up",
            DirectionName::Down => "down",
        }
    }
}

/// A move direction as a scan descriptor.
///
/// `horizontal` selects the move axis (rows vs columns) and `reversed`
/// selects the target edge (index `size-1` instead of index 0). Together
/// they let a single resolver handle all four directions; no
/// direction-specific logic exists anywhere else.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Direction {
    pub name: DirectionName,
    /// Tiles slide along rows when true, along columns when false.
    pub horizontal: bool,
    /// Tiles compact toward index `size-1` when true, toward index 0 when false.
    pub reversed: bool,
}

impl Direction {
    pub const LEFT: Direction = Direction {
        name: DirectionName::Left,
        horizontal: true,
        reversed: false,
    };

    pub const RIGHT: Direction = Direction {
        name: DirectionName::Right,
        horizontal: true,
        reversed: true,
    };

    pub const UP: Direction = Direction {
        name: DirectionName::Up,
        horizontal: false,
        reversed: false,
    };

    pub const DOWN: Direction = Direction {
        name: DirectionName::Down,
        horizontal: false,
        reversed: true,
    };

    /// Look up the descriptor for a direction name.
    pub fn from_name(name: DirectionName) -> Direction {
        match name {
            DirectionName::Left => Direction::LEFT,
            DirectionName::Right => Direction::RIGHT,
            DirectionName::Up => Direction::UP,
            DirectionName::Down => Direction::DOWN,
        }
    }

    /// All four directions, in a stable order.
    pub fn all() -> [Direction; 4] {
        [
            Direction::LEFT,
            Direction::RIGHT,
            Direction::UP,
            Direction::DOWN,
        ]
    }

    pub fn as_str(&self) -> &'static str {
        self.name.as_str()
    }
}

/// Game progression status.
///
/// `Moving` is the gate that blocks input between a committed move and its
/// deferred seed step; a move request arriving while `Moving` is dropped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GameStatus {
    /// Choosing a board size; no active board.
    Select,
    /// Awaiting input.
    Playing,
    /// Move committed, seed pending.
    Moving,
    /// Terminal; only a new game is accepted.
    GameOver,
}

impl GameStatus {
    /// Parse status from string (case-insensitive)
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "select" => Some(GameStatus::Select),
            "playing" => Some(GameStatus::Playing),
            "moving" => Some(GameStatus::Moving),
            "gameover" => Some(GameStatus::GameOver),
            _ => None,
        }
    }

    /// Convert to lowercase string
    pub fn as_str(&self) -> &'static str {
        match self {
            GameStatus::Select => "select",
            GameStatus::Playing => "playing",
            GameStatus::Moving => "moving",
            GameStatus::GameOver => "gameover",
        }
    }
}

/// Game actions
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameAction {
    MoveLeft,
    MoveRight,
    MoveUp,
    MoveDown,
    NewGame,
    CancelMove,
    ExitGame,
}

impl GameAction {
    /// Parse action from string
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "moveleft" => Some(GameAction::MoveLeft),
            "moveright" => Some(GameAction::MoveRight),
            "moveup" => Some(GameAction::MoveUp),
            "movedown" => Some(GameAction::MoveDown),
            "newgame" => Some(GameAction::NewGame),
            "cancelmove" => Some(GameAction::CancelMove),
            "exitgame" => Some(GameAction::ExitGame),
            _ => None,
        }
    }

    /// Convert to string
    pub fn as_str(&self) -> &'static str {
        match self {
            GameAction::MoveLeft => "moveLeft",
            GameAction::MoveRight => "moveRight",
            GameAction::MoveUp => "moveUp",
            GameAction::MoveDown => "moveDown",
            GameAction::NewGame => "newGame",
            GameAction::CancelMove => "cancelMove",
            GameAction::ExitGame => "exitGame",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_direction_descriptors() {
        assert!(Direction::LEFT.horizontal);
        assert!(!Direction::LEFT.reversed);
        assert!(Direction::RIGHT.horizontal);
        assert!(Direction::RIGHT.reversed);
        assert!(!Direction::UP.horizontal);
        assert!(!Direction::UP.reversed);
        assert!(!Direction::DOWN.horizontal);
        assert!(Direction::DOWN.reversed);
    }

    #[test]
    fn test_direction_name_roundtrip() {
        for dir in Direction::all() {
            assert_eq!(DirectionName::from_str(dir.as_str()), Some(dir.name));
            assert_eq!(Direction::from_name(dir.name), dir);
        }
    }

    #[test]
    fn test_board_size_cycling_is_bijective() {
        for &size in BOARD_SIZES.iter() {
            assert_eq!(prev_board_size(next_board_size(size)), size);
            assert_eq!(next_board_size(prev_board_size(size)), size);
        }
    }

    #[test]
    fn test_board_size_cycling_wraps() {
        assert_eq!(next_board_size(8), 3);
        assert_eq!(prev_board_size(3), 8);
        assert_eq!(next_board_size(3), 4);
        assert_eq!(prev_board_size(8), 6);
    }

    #[test]
    fn test_status_roundtrip() {
        for status in [
            GameStatus::Select,
            GameStatus::Playing,
            GameStatus::Moving,
            GameStatus::GameOver,
        ] {
            assert_eq!(GameStatus::from_str(status.as_str()), Some(status));
        }
    }

    #[test]
    fn test_action_roundtrip() {
        for action in [
            GameAction::MoveLeft,
            GameAction::MoveRight,
            GameAction::MoveUp,
            GameAction::MoveDown,
            GameAction::NewGame,
            GameAction::CancelMove,
            GameAction::ExitGame,
        ] {
            assert_eq!(GameAction::from_str(action.as_str()), Some(action));
        }
    }
}
