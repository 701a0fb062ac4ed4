//! TUI Maze (workspace facade crate).
//!
//! Re-exports the workspace crates as `tui_maze::{core,input,term,types}` and
//! holds the runner-side pieces: environment configuration and logger setup.

pub use tui_maze_core as core;
pub use tui_maze_input as input;
pub use tui_maze_term as term;
pub use tui_maze_types as types;

pub mod config;
pub mod logging;

pub use config::Config;
