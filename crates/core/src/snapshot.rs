use crate::movement::Actor;
use crate::types::{Direction, Status};
use crate::walls::WallSet;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ActorSnapshot {
    pub x: i32,
    pub y: i32,
    pub direction: Direction,
}

impl From<&Actor> for ActorSnapshot {
    fn from(value: &Actor) -> Self {
        Self {
            x: value.x(),
            y: value.y(),
            direction: value.direction(),
        }
    }
}

/// Read-only view of a session for one rendered frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameSnapshot<'a> {
    pub actor: ActorSnapshot,
    pub walls: &'a WallSet,
    pub status: Status,
    pub tick: u64,
    pub tile_size: i32,
    pub columns: usize,
    pub rows: usize,
}

impl GameSnapshot<'_> {
    pub fn playable(&self) -> bool {
        self.status == Status::Running
    }

    pub fn game_over(&self) -> bool {
        self.status == Status::Over
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
}
