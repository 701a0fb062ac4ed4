//! Terminal "game renderer" module.
//!
//! This is a small, game-oriented rendering layer for terminal gameplay.
//! It renders into a simple framebuffer that is then flushed to a terminal
//! backend, and never reaches back into the core: all it sees is a
//! read-only [`core::GameSnapshot`].
//!
//! - [`fb`]: styled character framebuffer
//! - [`game_view`]: snapshot to framebuffer (walls, actor, status line)
//! - [`renderer`]: framebuffer to terminal, with diff redraws

pub mod fb;
pub mod game_view;
pub mod renderer;

pub use tui_maze_core as core;
pub use tui_maze_types as types;

pub use fb::{Cell, CellStyle, FrameBuffer, Rgb};
pub use game_view::{actor_glyph, AnchorY, GameView, Viewport, GAME_OVER_TITLE, RUNNING_TITLE};
pub use renderer::{encode_diff_into, encode_full_into, TerminalRenderer};
