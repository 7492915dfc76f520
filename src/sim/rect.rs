//! Axis-aligned rectangle geometry for every body in the world
//!
//! Screen space: x grows right, y grows down. A rectangle covers the
//! half-open ranges [left, right) x [top, bottom), so two rectangles that only
//! share an edge do not overlap.

use glam::IVec2;
use serde::{Deserialize, Serialize};

use crate::error::LevelError;

/// An integer axis-aligned rectangle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Rect {
    pub x: i32,
    pub y: i32,
    pub w: i32,
    pub h: i32,
}

impl Rect {
    /// Build a rectangle from trusted constants
    ///
    /// Sizes are asserted positive in debug builds; use [`Rect::try_new`] for
    /// values that come from outside the crate.
    pub const fn new(x: i32, y: i32, w: i32, h: i32) -> Self {
        debug_assert!(w > 0 && h > 0);
        Self { x, y, w, h }
    }

    /// Build a rectangle, rejecting non-positive sizes
    pub fn try_new(x: i32, y: i32, w: i32, h: i32) -> Result<Self, LevelError> {
        if w <= 0 || h <= 0 {
            return Err(LevelError::InvalidSize { width: w, height: h });
        }
        Ok(Self { x, y, w, h })
    }

    /// Build a rectangle of the given size centered on `center`
    ///
    /// Odd sizes round the same way pygame does (`x = cx - w / 2`).
    pub fn from_center(center: IVec2, w: i32, h: i32) -> Result<Self, LevelError> {
        Self::try_new(center.x - w / 2, center.y - h / 2, w, h)
    }

    #[inline]
    pub fn left(&self) -> i32 {
        self.x
    }

    #[inline]
    pub fn right(&self) -> i32 {
        self.x + self.w
    }

    #[inline]
    pub fn top(&self) -> i32 {
        self.y
    }

    #[inline]
    pub fn bottom(&self) -> i32 {
        self.y + self.h
    }

    #[inline]
    pub fn center_x(&self) -> i32 {
        self.x + self.w / 2
    }

    #[inline]
    pub fn center_y(&self) -> i32 {
        self.y + self.h / 2
    }

    pub fn center(&self) -> IVec2 {
        IVec2::new(self.center_x(), self.center_y())
    }

    pub fn set_left(&mut self, left: i32) {
        self.x = left;
    }

    pub fn set_right(&mut self, right: i32) {
        self.x = right - self.w;
    }

    pub fn set_top(&mut self, top: i32) {
        self.y = top;
    }

    pub fn set_bottom(&mut self, bottom: i32) {
        self.y = bottom - self.h;
    }

    pub fn set_center_y(&mut self, cy: i32) {
        self.y = cy - self.h / 2;
    }

    /// Strict interior overlap test
    #[inline]
    pub fn overlaps(&self, other: &Rect) -> bool {
        self.left() < other.right()
            && other.left() < self.right()
            && self.top() < other.bottom()
            && other.top() < self.bottom()
    }

    /// Copy of this rectangle moved by (dx, dy)
    pub fn translated(&self, dx: i32, dy: i32) -> Self {
        Self {
            x: self.x + dx,
            y: self.y + dy,
            ..*self
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_edges() {
        let r = Rect::new(10, 20, 30, 40);
        assert_eq!(r.left(), 10);
        assert_eq!(r.right(), 40);
        assert_eq!(r.top(), 20);
        assert_eq!(r.bottom(), 60);
        assert_eq!(r.center(), IVec2::new(25, 40));
    }

    #[test]
    fn test_touching_edges_do_not_overlap() {
        let a = Rect::new(0, 0, 10, 10);
        let right = Rect::new(10, 0, 10, 10);
        let below = Rect::new(0, 10, 10, 10);
        assert!(!a.overlaps(&right));
        assert!(!a.overlaps(&below));
        assert!(a.overlaps(&Rect::new(9, 9, 10, 10)));
    }

    #[test]
    fn test_try_new_rejects_empty() {
        assert_eq!(
            Rect::try_new(0, 0, 0, 5),
            Err(LevelError::InvalidSize { width: 0, height: 5 })
        );
        assert!(Rect::try_new(0, 0, 1, 1).is_ok());
    }

    #[test]
    fn test_from_center() {
        let r = Rect::from_center(IVec2::new(170, 435), 20, 20).unwrap();
        assert_eq!(r, Rect::new(160, 425, 20, 20));
        assert_eq!(r.center(), IVec2::new(170, 435));
    }

    #[test]
    fn test_setters_keep_size() {
        let mut r = Rect::new(0, 0, 32, 48);
        r.set_bottom(560);
        assert_eq!(r.y, 512);
        r.set_right(800);
        assert_eq!(r.x, 768);
        assert_eq!((r.w, r.h), (32, 48));
    }
}
