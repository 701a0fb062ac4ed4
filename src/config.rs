//! Runtime configuration for the terminal runner.
//!
//! Read from environment variables; anything missing or unparsable falls back
//! to the default. The core itself takes no configuration beyond the tile map
//! and tile size it is handed.
//!
//! | Variable | Default | Meaning |
//! |----------|---------|---------|
//! | `MAZE_MAP_PATH` | unset | Tile map file to load instead of the bundled map |
//! | `MAZE_TILE_SIZE` | 32 | Tile size in pixels |
//! | `MAZE_TICK_MS` | 50 | Tick period in milliseconds |
//! | `MAZE_LOG_PATH` | unset | File that receives log records |

use std::path::PathBuf;
use std::time::Duration;

use anyhow::{Context, Result};

use crate::core::{load_map, load_map_str, GameSession};
use crate::types::{DEFAULT_TILE_MAP, TICK_MS, TILE_SIZE};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub map_path: Option<PathBuf>,
    pub tile_size: i32,
    pub tick_ms: u32,
    pub log_path: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            map_path: None,
            tile_size: TILE_SIZE,
            tick_ms: TICK_MS,
            log_path: None,
        }
    }
}

impl Config {
    /// Create from the process environment
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Create from an arbitrary key lookup (the environment, or a map in tests)
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();

        let path = |key: &str| {
            lookup(key)
                .map(|s| s.trim().to_string())
                .filter(|s| !s.is_empty())
                .map(PathBuf::from)
        };

        let tile_size = lookup("MAZE_TILE_SIZE")
            .and_then(|s| s.trim().parse::<i32>().ok())
            .filter(|&v| v > 0)
            .unwrap_or(defaults.tile_size);

        let tick_ms = lookup("MAZE_TICK_MS")
            .and_then(|s| s.trim().parse::<u32>().ok())
            .filter(|&v| v > 0)
            .unwrap_or(defaults.tick_ms);

        Self {
            map_path: path("MAZE_MAP_PATH"),
            tile_size,
            tick_ms,
            log_path: path("MAZE_LOG_PATH"),
        }
    }

    pub fn tick_duration(&self) -> Duration {
        Duration::from_millis(self.tick_ms as u64)
    }

    /// Build the game session from the configured map (or the bundled one).
    pub fn load_session(&self) -> Result<GameSession> {
        let layout = match &self.map_path {
            Some(path) => {
                let text = std::fs::read_to_string(path)
                    .with_context(|| format!("reading tile map {}", path.display()))?;
                load_map_str(&text, self.tile_size)
                    .with_context(|| format!("malformed tile map {}", path.display()))?
            }
            None => load_map(&DEFAULT_TILE_MAP, self.tile_size).context("malformed bundled tile map")?,
        };
        Ok(GameSession::new(layout))
    }
}
