//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental types used throughout the application.
//! All types are pure data structures with no external dependencies, making them
//! usable in any context (core logic, terminal rendering, input mapping).
//!
//! # Tile Map Alphabet
//!
//! | Marker | Meaning |
//! |--------|---------|
//! | `'X'` | Wall tile |
//! | `' '` | Empty tile |
//! | `'P'` | Actor spawn tile (exactly one per map) |
//!
//! # Geometry and Timing
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `TILE_SIZE` | 32 | Side length of one tile in pixels |
//! | `STEP_DIVISOR` | 4 | Actor moves `tile_size / 4` pixels per tick |
//! | `TICK_MS` | 50 | Fixed timestep interval (20 ticks per second) |
//!
//! # Examples
//!
//! ```
//! use tui_maze_types::{Direction, TILE_SIZE};
//!
//! assert_eq!(Direction::Right.unit(), (1, 0));
//! assert_eq!(Direction::Right.as_str(), "right");
//! assert_eq!(TILE_SIZE, 32);
//! ```

/// Tile side length in pixels
pub const TILE_SIZE: i32 = 32;

/// Per-tick speed is `tile_size / STEP_DIVISOR` pixels
pub const STEP_DIVISOR: i32 = 4;

/// Fixed timestep interval in milliseconds (50ms = 20 ticks per second)
pub const TICK_MS: u32 = 50;

/// Map marker for a wall tile
pub const WALL_MARKER: char = 'X';

/// Map marker for an empty tile
pub const EMPTY_MARKER: char = ' ';

/// Map marker for the actor spawn tile
pub const SPAWN_MARKER: char = 'P';

/// Bundled maze layout (19 columns x 11 rows).
pub const DEFAULT_TILE_MAP: [&str; 11] = [
    "XXXXXXXXXXXXXXXXXXX",
    "X        X        X",
    "X XX XXX X XXX XX X",
    "X                 X",
    "X XX X XXXXX X XX X",
    "X    X       X    X",
    "XXXX XXXX XXXX XXXX",
    "X  X  P        X  X",
    "X XXXXXXXXXXXXX X X",
    "X                 X",
    "XXXXXXXXXXXXXXXXXXX",
];

/// Facing direction of the actor
///
/// The cycle used by the renderer for glyph selection is irrelevant to the
/// rules: transitions only happen through explicit direction commands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Direction {
    #[default]
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    /// All four directions, in declaration order
    pub const ALL: [Direction; 4] = [
        Direction::Up,
        Direction::Down,
        Direction::Left,
        Direction::Right,
    ];

    /// Unit vector in screen coordinates (y grows downwards)
    ///
    /// # Examples
    ///
    /// ```
    /// use tui_maze_types::Direction;
    ///
    /// assert_eq!(Direction::Up.unit(), (0, -1));
    /// assert_eq!(Direction::Down.unit(), (0, 1));
    /// assert_eq!(Direction::Left.unit(), (-1, 0));
    /// assert_eq!(Direction::Right.unit(), (1, 0));
    /// ```
    pub fn unit(&self) -> (i32, i32) {
        match self {
            Direction::Up => (0, -1),
            Direction::Down => (0, 1),
            Direction::Left => (-1, 0),
            Direction::Right => (1, 0),
        }
    }

    /// Convert to lowercase string
    pub fn as_str(&self) -> &'static str {
        match self {
            Direction::Up => "up",
            Direction::Down => "down",
            Direction::Left => "left",
            Direction::Right => "right",
        }
    }
}

/// Session status
///
/// - **Running**: ticks advance the actor
/// - **Over**: terminal display state, ticks are suspended
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Status {
    #[default]
    Running,
    Over,
}

impl Status {
    /// Lowercase label shown in the side panel
    pub fn as_str(&self) -> &'static str {
        match self {
            Status::Running => "running",
            Status::Over => "over",
        }
    }
}

/// A pixel coordinate (top-left origin, y grows downwards)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}
