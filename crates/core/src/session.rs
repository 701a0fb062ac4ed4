//! Game session - the explicit context that ties the maze together
//!
//! A session owns the wall set built by the loader, the movement engine with
//! its actor, and the running/over status. The status is only ever changed
//! from outside through [`GameSession::end`]; once over, ticks and direction
//! commands are ignored.

use log::info;

use crate::map::{load_map, MalformedMap, MapLayout};
use crate::movement::{Actor, MovementEngine};
use crate::snapshot::{ActorSnapshot, GameSnapshot};
use crate::types::{Direction, Status};
use crate::walls::WallSet;

/// Complete game state
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameSession {
    engine: MovementEngine,
    walls: WallSet,
    status: Status,
    columns: usize,
    rows: usize,
    /// Number of ticks that advanced the simulation (including blocked ones).
    tick_count: u64,
}

impl GameSession {
    pub fn new(layout: MapLayout) -> Self {
        let engine = MovementEngine::new(layout.spawn(), layout.tile_size());
        let columns = layout.columns();
        let rows = layout.rows();

        Self {
            engine,
            walls: layout.into_walls(),
            status: Status::Running,
            columns,
            rows,
            tick_count: 0,
        }
    }

    /// Load `rows` and build a session from the result
    pub fn from_rows<S: AsRef<str>>(rows: &[S], tile_size: i32) -> Result<Self, MalformedMap> {
        load_map(rows, tile_size).map(Self::new)
    }

    pub fn status(&self) -> Status {
        self.status
    }

    pub fn is_over(&self) -> bool {
        self.status == Status::Over
    }

    pub fn actor(&self) -> &Actor {
        self.engine.actor()
    }

    pub fn walls(&self) -> &WallSet {
        &self.walls
    }

    pub fn tile_size(&self) -> i32 {
        self.engine.tile_size()
    }

    pub fn columns(&self) -> usize {
        self.columns
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn tick_count(&self) -> u64 {
        self.tick_count
    }

    pub fn set_direction(&mut self, direction: Direction) {
        if self.is_over() {
            return;
        }
        self.engine.set_direction(direction);
    }

    /// Main game tick. Returns true if the actor moved.
    pub fn tick(&mut self) -> bool {
        if self.is_over() {
            return false;
        }
        self.tick_count = self.tick_count.wrapping_add(1);
        self.engine.tick(&self.walls)
    }

    pub fn reset(&mut self) {
        self.engine.reset();
    }

    /// Mark the session as over. Idempotent.
    pub fn end(&mut self) {
        if self.is_over() {
            return;
        }
        self.status = Status::Over;
        info!("session over after {} ticks", self.tick_count);
    }

    pub fn snapshot(&self) -> GameSnapshot<'_> {
        GameSnapshot {
            actor: ActorSnapshot::from(self.engine.actor()),
            walls: &self.walls,
            status: self.status,
            tick: self.tick_count,
            tile_size: self.engine.tile_size(),
            columns: self.columns,
            rows: self.rows,
        }
    }
}
