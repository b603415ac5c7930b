//! Axis-aligned rectangle type

use serde::{Deserialize, Serialize};
use super::Vec2;

/// Axis-aligned rectangle, as reported by `getBoundingClientRect()`
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    /// Zero rectangle at origin
    pub const ZERO: Rect = Rect {
        x: 0.0,
        y: 0.0,
        width: 0.0,
        height: 0.0,
    };

    /// Create a new rectangle
    #[inline]
    pub const fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self { x, y, width, height }
    }

    /// Get position (top-left corner)
    #[inline]
    pub fn position(&self) -> Vec2 {
        Vec2::new(self.x, self.y)
    }

    /// Get the right edge
    #[inline]
    pub fn right(&self) -> f64 {
        self.x + self.width
    }

    /// Get the bottom edge
    #[inline]
    pub fn bottom(&self) -> f64 {
        self.y + self.height
    }

    /// Half of the width and height
    #[inline]
    pub fn half_extents(&self) -> Vec2 {
        Vec2::new(self.width / 2.0, self.height / 2.0)
    }

    /// Horizontal range a centered child of `inset_width` can occupy.
    ///
    /// Both ends are inclusive. The range is empty (start > end) when the
    /// child is wider than this rectangle.
    #[inline]
    pub fn inset_x(&self, inset_width: f64) -> (f64, f64) {
        let half = inset_width / 2.0;
        (self.x + half, self.right() - half)
    }

    /// Vertical counterpart of [`Rect::inset_x`]
    #[inline]
    pub fn inset_y(&self, inset_height: f64) -> (f64, f64) {
        let half = inset_height / 2.0;
        (self.y + half, self.bottom() - half)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rect_edges() {
        let r = Rect::new(100.0, 200.0, 50.0, 30.0);
        assert!((r.right() - 150.0).abs() < 0.001);
        assert!((r.bottom() - 230.0).abs() < 0.001);
        assert_eq!(r.position(), Vec2::new(100.0, 200.0));
        assert_eq!(r.half_extents(), Vec2::new(25.0, 15.0));
    }

    #[test]
    fn test_rect_inset_ranges() {
        let base = Rect::new(10.0, 20.0, 192.0, 192.0);

        let (x0, x1) = base.inset_x(128.0);
        assert!((x0 - 74.0).abs() < 0.001);
        assert!((x1 - 138.0).abs() < 0.001);

        let (y0, y1) = base.inset_y(128.0);
        assert!((y0 - 84.0).abs() < 0.001);
        assert!((y1 - 148.0).abs() < 0.001);
    }

    #[test]
    fn test_rect_inset_empty_when_child_larger() {
        let base = Rect::new(0.0, 0.0, 50.0, 50.0);
        let (start, end) = base.inset_x(80.0);
        assert!(start > end);
    }
}
