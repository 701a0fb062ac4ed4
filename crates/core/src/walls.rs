//! Wall set - the static collision geometry of a maze
//!
//! Built once by the map loader and read-only afterwards, so it can be shared
//! by reference with the movement engine and the renderer.

use crate::geometry::Rect;

/// Unordered collection of wall tiles
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WallSet {
    walls: Vec<Rect>,
}

impl WallSet {
    pub fn new(walls: Vec<Rect>) -> Self {
        Self { walls }
    }

    pub fn len(&self) -> usize {
        self.walls.len()
    }

    pub fn is_empty(&self) -> bool {
        self.walls.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Rect> + '_ {
        self.walls.iter()
    }

    /// Check whether any wall has its top-left corner at (x, y)
    pub fn contains_at(&self, x: i32, y: i32) -> bool {
        self.walls.iter().any(|w| w.x == x && w.y == y)
    }

    /// Check if a `size`-sided square at (x, y) overlaps any wall
    ///
    /// Linear scan over every wall; a maze holds a few hundred tiles at most.
    pub fn is_blocked(&self, x: i32, y: i32, size: i32) -> bool {
        self.walls.iter().any(|w| w.overlaps_square(x, y, size))
    }
}

impl FromIterator<Rect> for WallSet {
    fn from_iter<I: IntoIterator<Item = Rect>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

impl<'a> IntoIterator for &'a WallSet {
    type Item = &'a Rect;
    type IntoIter = std::slice::Iter<'a, Rect>;

    fn into_iter(self) -> Self::IntoIter {
        self.walls.iter()
    }
}
