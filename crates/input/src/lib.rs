//! Terminal input module (engine-facing).
//!
//! This module is intentionally independent of any UI framework. It maps
//! `crossterm` key events into [`crate::types::Direction`] commands and
//! provides a latch that keeps only the latest command until the next tick.

pub mod handler;
pub mod map;

pub use tui_maze_types as types;

pub use handler::InputHandler;
pub use map::{direction_for_code, handle_key_event, should_quit};
