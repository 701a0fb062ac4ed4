//! Movement engine - actor state and the per-tick collision step
//!
//! Each tick proposes `position + velocity` and commits it only when the
//! actor's bounding box at the candidate does not overlap any wall. The step
//! is all-or-nothing: a blocked actor keeps its position, direction and
//! velocity, with no sliding and no partial moves.

use log::trace;

use crate::types::{Direction, Point, STEP_DIVISOR};
use crate::walls::WallSet;

/// The single movable token
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Actor {
    position: Point,
    direction: Direction,
    vx: i32,
    vy: i32,
    spawn: Point,
}

impl Actor {
    /// Create an actor at its spawn, facing up and standing still
    pub fn new(spawn: Point) -> Self {
        Self {
            position: spawn,
            direction: Direction::Up,
            vx: 0,
            vy: 0,
            spawn,
        }
    }

    pub fn position(&self) -> Point {
        self.position
    }

    pub fn x(&self) -> i32 {
        self.position.x
    }

    pub fn y(&self) -> i32 {
        self.position.y
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    /// Per-tick displacement (vx, vy)
    pub fn velocity(&self) -> (i32, i32) {
        (self.vx, self.vy)
    }

    pub fn spawn(&self) -> Point {
        self.spawn
    }
}

/// Owns the actor and advances it against a wall set
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MovementEngine {
    actor: Actor,
    tile_size: i32,
}

impl MovementEngine {
    pub fn new(spawn: Point, tile_size: i32) -> Self {
        Self {
            actor: Actor::new(spawn),
            tile_size,
        }
    }

    pub fn actor(&self) -> &Actor {
        &self.actor
    }

    pub fn tile_size(&self) -> i32 {
        self.tile_size
    }

    /// Pixels travelled per unblocked tick
    pub fn step(&self) -> i32 {
        self.tile_size / STEP_DIVISOR
    }

    /// Face `direction` and recompute velocity along its axis
    pub fn set_direction(&mut self, direction: Direction) {
        let (ux, uy) = direction.unit();
        let step = self.step();
        self.actor.direction = direction;
        self.actor.vx = ux * step;
        self.actor.vy = uy * step;
    }

    /// Position the next tick would try to commit, or `None` past the `i32` range
    pub fn candidate(&self) -> Option<Point> {
        Some(Point::new(
            self.actor.position.x.checked_add(self.actor.vx)?,
            self.actor.position.y.checked_add(self.actor.vy)?,
        ))
    }

    /// Advance one tick. Returns true if the actor moved.
    pub fn tick(&mut self, walls: &WallSet) -> bool {
        if self.actor.vx == 0 && self.actor.vy == 0 {
            return false;
        }

        let Some(next) = self.candidate() else {
            trace!("move {} out of range", self.actor.direction.as_str());
            return false;
        };
        if walls.is_blocked(next.x, next.y, self.tile_size) {
            trace!(
                "move {} blocked at ({}, {})",
                self.actor.direction.as_str(),
                next.x,
                next.y
            );
            return false;
        }

        self.actor.position = next;
        true
    }

    /// Put the actor back on its spawn.
    ///
    /// Direction and velocity are kept, so a reset actor keeps moving the
    /// way it was heading on the next tick.
    pub fn reset(&mut self) {
        self.actor.position = self.actor.spawn;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::Rect;

    fn corridor() -> WallSet {
        [Rect::square(0, 0, 32), Rect::square(128, 0, 32)]
            .into_iter()
            .collect()
    }

    #[test]
    fn test_new_actor_is_still() {
        let engine = MovementEngine::new(Point::new(64, 0), 32);
        assert_eq!(engine.actor().direction(), Direction::Up);
        assert_eq!(engine.actor().velocity(), (0, 0));
        assert_eq!(engine.actor().position(), engine.actor().spawn());
    }

    #[test]
    fn test_still_actor_does_not_move() {
        let mut engine = MovementEngine::new(Point::new(64, 0), 32);
        assert!(!engine.tick(&corridor()));
        assert_eq!(engine.actor().position(), Point::new(64, 0));
    }

    #[test]
    fn test_set_direction_velocity() {
        let mut engine = MovementEngine::new(Point::new(64, 0), 32);

        engine.set_direction(Direction::Up);
        assert_eq!(engine.actor().velocity(), (0, -8));
        engine.set_direction(Direction::Down);
        assert_eq!(engine.actor().velocity(), (0, 8));
        engine.set_direction(Direction::Left);
        assert_eq!(engine.actor().velocity(), (-8, 0));
        engine.set_direction(Direction::Right);
        assert_eq!(engine.actor().velocity(), (8, 0));
        assert_eq!(engine.actor().direction(), Direction::Right);
    }

    #[test]
    fn test_step_uses_integer_division() {
        let engine = MovementEngine::new(Point::default(), 30);
        assert_eq!(engine.step(), 7);
    }

    #[test]
    fn test_tick_moves_when_clear() {
        let mut engine = MovementEngine::new(Point::new(64, 0), 32);
        engine.set_direction(Direction::Right);

        assert_eq!(engine.candidate(), Some(Point::new(72, 0)));
        assert!(engine.tick(&corridor()));
        assert_eq!(engine.actor().position(), Point::new(72, 0));
    }

    #[test]
    fn test_tick_stops_at_wall() {
        let mut engine = MovementEngine::new(Point::new(64, 0), 32);
        engine.set_direction(Direction::Right);

        // 64 -> 72 -> 80 -> 88 -> 96; 104 would overlap the wall at 128.
        for _ in 0..4 {
            assert!(engine.tick(&corridor()));
        }
        assert_eq!(engine.actor().x(), 96);

        for _ in 0..3 {
            assert!(!engine.tick(&corridor()));
            assert_eq!(engine.actor().position(), Point::new(96, 0));
        }
        assert_eq!(engine.actor().direction(), Direction::Right);
        assert_eq!(engine.actor().velocity(), (8, 0));
    }

    #[test]
    fn test_tick_at_coordinate_limit_stays_put() {
        let mut engine = MovementEngine::new(Point::new(i32::MAX - 4, 0), 32);
        engine.set_direction(Direction::Right);

        assert_eq!(engine.candidate(), None);
        assert!(!engine.tick(&corridor()));
        assert_eq!(engine.actor().x(), i32::MAX - 4);
    }

    #[test]
    fn test_reset_keeps_direction_and_velocity() {
        let mut engine = MovementEngine::new(Point::new(64, 0), 32);
        engine.set_direction(Direction::Left);
        engine.tick(&corridor());
        assert_eq!(engine.actor().x(), 56);

        engine.reset();
        assert_eq!(engine.actor().position(), Point::new(64, 0));
        assert_eq!(engine.actor().direction(), Direction::Left);
        assert_eq!(engine.actor().velocity(), (-8, 0));
    }
}
