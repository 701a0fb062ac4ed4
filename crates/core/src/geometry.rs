//! Axis-aligned rectangles in pixel space.

/// Axis-aligned rectangle, top-left origin.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Rect {
    pub x: i32,
    pub y: i32,
    pub width: i32,
    pub height: i32,
}

impl Rect {
    pub const fn new(x: i32, y: i32, width: i32, height: i32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Square with side `size` at (x, y)
    pub const fn square(x: i32, y: i32, size: i32) -> Self {
        Self::new(x, y, size, size)
    }

    /// Strict bounding-box overlap. Rectangles that only share an edge do not overlap.
    #[inline]
    pub fn overlaps(&self, other: &Rect) -> bool {
        self.overlaps_span(other.x, other.y, other.width, other.height)
    }

    /// Overlap test against a `size`-sided square at (x, y) without building a `Rect`.
    #[inline]
    pub fn overlaps_square(&self, x: i32, y: i32, size: i32) -> bool {
        self.overlaps_span(x, y, size, size)
    }

    /// Edge sums are taken in `i64` so far-off positions cannot wrap.
    fn overlaps_span(&self, x: i32, y: i32, w: i32, h: i32) -> bool {
        let (sx, sy) = (i64::from(self.x), i64::from(self.y));
        let (ox, oy) = (i64::from(x), i64::from(y));
        ox < sx + i64::from(self.width)
            && ox + i64::from(w) > sx
            && oy < sy + i64::from(self.height)
            && oy + i64::from(h) > sy
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_overlap_is_strict_on_edges() {
        let a = Rect::square(0, 0, 32);
        let touching_right = Rect::square(32, 0, 32);
        let touching_below = Rect::square(0, 32, 32);
        assert!(!a.overlaps(&touching_right));
        assert!(!a.overlaps(&touching_below));
        assert!(a.overlaps(&Rect::square(31, 0, 32)));
    }

    #[test]
    fn test_overlap_is_symmetric() {
        let a = Rect::new(10, 10, 20, 5);
        let b = Rect::new(25, 12, 4, 40);
        assert_eq!(a.overlaps(&b), b.overlaps(&a));
        assert!(a.overlaps(&b));
    }

    #[test]
    fn test_overlaps_square_matches_overlaps() {
        let wall = Rect::square(128, 0, 32);
        for x in (64..=128).step_by(8) {
            assert_eq!(
                wall.overlaps_square(x, 0, 32),
                wall.overlaps(&Rect::square(x, 0, 32)),
                "x={x}"
            );
        }
    }

    #[test]
    fn test_overlap_near_coordinate_limit() {
        let wall = Rect::square(i32::MAX - 32, 0, 32);
        assert!(wall.overlaps_square(i32::MAX - 16, 0, 32));
        assert!(!wall.overlaps_square(i32::MIN, 0, 32));
    }
}
