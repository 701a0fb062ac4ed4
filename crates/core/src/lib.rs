//! Core game logic module - pure, deterministic, and testable
//!
//! This module contains the maze rules, state management, and simulation logic.
//! It has no dependencies on terminal I/O or input handling, making it:
//!
//! - **Deterministic**: The same map and the same direction commands always
//!   produce the same positions
//! - **Testable**: Unit tests for loading, collision and movement
//! - **Portable**: Can run in any environment (terminal, GUI, headless)
//!
//! # Module Structure
//!
//! - [`map`]: Tile map parsing into walls and a spawn point
//! - [`geometry`]: Axis-aligned rectangles and overlap tests
//! - [`walls`]: The read-only wall set used for collision queries
//! - [`movement`]: The actor and the per-tick movement/collision step
//! - [`session`]: Session context holding walls, actor and status
//! - [`snapshot`]: Read-only per-frame view for renderers
//!
//! # Game Rules
//!
//! - **Grid**: Tile (row r, column c) occupies the square at pixel
//!   `(c * tile_size, r * tile_size)`
//! - **Velocity**: `tile_size / 4` pixels per tick along the facing axis,
//!   changed only by direction commands
//! - **Collision**: A tick commits the candidate position only if the actor's
//!   box does not overlap any wall; otherwise the actor stays put
//! - **Game over**: An external signal that suspends ticking
//!
//! # Example
//!
//! ```
//! use tui_maze_core::GameSession;
//! use tui_maze_types::Direction;
//!
//! let mut game = GameSession::from_rows(&["X P X"], 32).unwrap();
//!
//! game.set_direction(Direction::Right);
//! assert!(game.tick());
//! assert_eq!(game.actor().x(), 72);
//! ```
//!
//! # Timing
//!
//! The game uses a fixed timestep:
//! - **Tick Rate**: 50ms (20 ticks per second)
//!
//! Call [`GameSession::tick`](session::GameSession::tick) once per period.

pub mod geometry;
pub mod map;
pub mod movement;
pub mod session;
pub mod snapshot;
pub mod walls;

pub use tui_maze_types as types;

// Re-export commonly used types for convenience
pub use geometry::Rect;
pub use map::{load_map, load_map_str, MalformedMap, MapLayout};
pub use movement::{Actor, MovementEngine};
pub use session::GameSession;
pub use snapshot::{ActorSnapshot, GameSnapshot};
pub use types::{Direction, Point, Status};
pub use walls::WallSet;
