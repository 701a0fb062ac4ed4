//! Map loader - turns a character grid into wall geometry and a spawn point
//!
//! Rows are read top to bottom and characters left to right; tile (row r,
//! column c) covers the square at pixel (c * tile_size, r * tile_size).
//! Any deviation from the tile alphabet or from a single spawn marker is a
//! [`MalformedMap`] error rather than a best guess.

use log::debug;
use thiserror::Error;

use crate::geometry::Rect;
use crate::types::{Point, EMPTY_MARKER, SPAWN_MARKER, WALL_MARKER};
use crate::walls::WallSet;

/// Reasons a tile map is rejected
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MalformedMap {
    #[error("tile map is empty")]
    Empty,
    #[error("row {row} has {found} tiles, expected {expected}")]
    RaggedRow {
        row: usize,
        expected: usize,
        found: usize,
    },
    #[error("unknown tile {found:?} at row {row}, column {column}")]
    UnknownTile {
        row: usize,
        column: usize,
        found: char,
    },
    #[error("tile map has no spawn marker 'P'")]
    MissingSpawn,
    #[error("tile map has {count} spawn markers, expected exactly one")]
    MultipleSpawns { count: usize },
    #[error("tile size {tile_size} is not positive or puts the map out of pixel range")]
    InvalidTileSize { tile_size: i32 },
}

/// Everything the loader extracts from a tile map
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MapLayout {
    walls: WallSet,
    spawn: Point,
    tile_size: i32,
    columns: usize,
    rows: usize,
}

impl MapLayout {
    pub fn walls(&self) -> &WallSet {
        &self.walls
    }

    /// Pixel position of the spawn tile
    pub fn spawn(&self) -> Point {
        self.spawn
    }

    pub fn tile_size(&self) -> i32 {
        self.tile_size
    }

    /// Grid width in tiles
    pub fn columns(&self) -> usize {
        self.columns
    }

    /// Grid height in tiles
    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn width_px(&self) -> i32 {
        i32::try_from(self.columns)
            .unwrap_or(i32::MAX)
            .saturating_mul(self.tile_size)
    }

    pub fn height_px(&self) -> i32 {
        i32::try_from(self.rows)
            .unwrap_or(i32::MAX)
            .saturating_mul(self.tile_size)
    }

    pub fn into_walls(self) -> WallSet {
        self.walls
    }
}

/// Parse a tile map given as rows.
///
/// # Examples
///
/// ```
/// use tui_maze_core::{load_map, Point};
///
/// let layout = load_map(&["X P X"], 32).unwrap();
/// assert_eq!(layout.walls().len(), 2);
/// assert_eq!(layout.spawn(), Point::new(64, 0));
/// ```
pub fn load_map<S: AsRef<str>>(rows: &[S], tile_size: i32) -> Result<MapLayout, MalformedMap> {
    if tile_size <= 0 {
        return Err(MalformedMap::InvalidTileSize { tile_size });
    }

    let columns = match rows.first() {
        Some(first) => first.as_ref().chars().count(),
        None => return Err(MalformedMap::Empty),
    };
    if columns == 0 {
        return Err(MalformedMap::Empty);
    }
    // One spare tile past each far edge keeps `x + size` in range for any
    // square that touches the grid.
    if pixel_extent(columns, tile_size).is_none()
        || pixel_extent(rows.len(), tile_size).is_none()
    {
        return Err(MalformedMap::InvalidTileSize { tile_size });
    }

    let mut walls = Vec::new();
    let mut spawn = None;
    let mut spawn_count = 0usize;

    for (r, row) in rows.iter().enumerate() {
        let row = row.as_ref();
        let found = row.chars().count();
        if found != columns {
            return Err(MalformedMap::RaggedRow {
                row: r,
                expected: columns,
                found,
            });
        }

        for (c, ch) in row.chars().enumerate() {
            let x = c as i32 * tile_size;
            let y = r as i32 * tile_size;
            match ch {
                WALL_MARKER => walls.push(Rect::square(x, y, tile_size)),
                SPAWN_MARKER => {
                    spawn_count += 1;
                    spawn.get_or_insert(Point::new(x, y));
                }
                EMPTY_MARKER => {}
                other => {
                    return Err(MalformedMap::UnknownTile {
                        row: r,
                        column: c,
                        found: other,
                    })
                }
            }
        }
    }

    let spawn = match (spawn, spawn_count) {
        (Some(p), 1) => p,
        (None, _) => return Err(MalformedMap::MissingSpawn),
        (Some(_), count) => return Err(MalformedMap::MultipleSpawns { count }),
    };

    debug!(
        "loaded tile map {}x{} with {} walls, spawn at ({}, {})",
        columns,
        rows.len(),
        walls.len(),
        spawn.x,
        spawn.y
    );

    Ok(MapLayout {
        walls: WallSet::new(walls),
        spawn,
        tile_size,
        columns,
        rows: rows.len(),
    })
}

/// `(tiles + 1) * tile_size` in pixels, if it fits an `i32`.
fn pixel_extent(tiles: usize, tile_size: i32) -> Option<i32> {
    i32::try_from(tiles)
        .ok()?
        .checked_add(1)?
        .checked_mul(tile_size)
}

/// Parse a tile map from text, one row per line.
///
/// Line endings may be `\n` or `\r\n`; empty lines at the end of the text are ignored.
pub fn load_map_str(text: &str, tile_size: i32) -> Result<MapLayout, MalformedMap> {
    let mut rows: Vec<&str> = text.lines().collect();
    while rows.last().is_some_and(|r| r.is_empty()) {
        rows.pop();
    }
    load_map(&rows, tile_size)
}
