//! Terminal "game renderer" module.
//!
//! A small, game-oriented rendering layer for terminal gameplay. It
//! intentionally avoids ratatui widgets/layout and instead renders into a
//! simple framebuffer that is flushed to a terminal backend.
//!
//! Goals:
//! - Keep `core` deterministic and testable
//! - Render snapshots only; the view never touches the store
//! - Allow precise control over tile aspect ratio in terminal glyphs

pub mod fb;
pub mod game_view;
pub mod renderer;

pub use tui_2048_core as core;
pub use tui_2048_types as types;

pub use fb::{Cell, CellStyle, FrameBuffer, Rgb};
pub use game_view::{GameView, Viewport};
pub use renderer::{encode_full_into, TerminalRenderer};
