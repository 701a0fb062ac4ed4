//! Direction latch between asynchronous key events and fixed ticks.
//!
//! Key presses can arrive at any point between two ticks. Only the most recent
//! one matters: it is held until the game loop takes it right before the next
//! tick, so several rapid presses collapse into the last one.

use crossterm::event::KeyCode;

use crate::map::direction_for_code;
use crate::types::Direction;

/// Holds the latest direction command not yet applied to the game.
#[derive(Debug, Clone, Default)]
pub struct InputHandler {
    pending: Option<Direction>,
}

impl InputHandler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a key press. Returns the direction it maps to, if any.
    pub fn handle_key_press(&mut self, code: KeyCode) -> Option<Direction> {
        let direction = direction_for_code(code)?;
        self.press(direction);
        Some(direction)
    }

    /// Record a direction command, replacing any pending one.
    pub fn press(&mut self, direction: Direction) {
        self.pending = Some(direction);
    }

    /// Take the pending direction, leaving the latch empty.
    pub fn take(&mut self) -> Option<Direction> {
        self.pending.take()
    }

    pub fn pending(&self) -> Option<Direction> {
        self.pending
    }
}
