//! Axis-aligned rectangles for sprites and bodies
//!
//! Positions are sprite centers (anchor point at the middle), so a rect is
//! stored as center + size and edges are derived.

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// A center-anchored axis-aligned rectangle
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    pub center: Vec2,
    pub size: Vec2,
}

impl Rect {
    pub fn new(center: Vec2, size: Vec2) -> Self {
        Self { center, size }
    }

    /// Build from the bottom-left corner
    pub fn from_min_size(min: Vec2, size: Vec2) -> Self {
        Self {
            center: min + size / 2.0,
            size,
        }
    }

    #[inline]
    pub fn half_size(&self) -> Vec2 {
        self.size / 2.0
    }

    #[inline]
    pub fn min(&self) -> Vec2 {
        self.center - self.half_size()
    }

    #[inline]
    pub fn max(&self) -> Vec2 {
        self.center + self.half_size()
    }

    #[inline]
    pub fn min_x(&self) -> f32 {
        self.min().x
    }

    #[inline]
    pub fn max_x(&self) -> f32 {
        self.max().x
    }

    #[inline]
    pub fn min_y(&self) -> f32 {
        self.min().y
    }

    #[inline]
    pub fn max_y(&self) -> f32 {
        self.max().y
    }

    #[inline]
    pub fn width(&self) -> f32 {
        self.size.x
    }

    #[inline]
    pub fn height(&self) -> f32 {
        self.size.y
    }

    /// Strict overlap test; rects that only share an edge do not intersect
    pub fn intersects(&self, other: &Rect) -> bool {
        let delta = (self.center - other.center).abs();
        let reach = self.half_size() + other.half_size();
        delta.x < reach.x && delta.y < reach.y
    }

    pub fn contains_point(&self, point: Vec2) -> bool {
        let (min, max) = (self.min(), self.max());
        point.x >= min.x && point.x <= max.x && point.y >= min.y && point.y <= max.y
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_edges() {
        let r = Rect::new(Vec2::new(10.0, 20.0), Vec2::new(4.0, 6.0));
        assert_eq!(r.min(), Vec2::new(8.0, 17.0));
        assert_eq!(r.max(), Vec2::new(12.0, 23.0));
        assert_eq!(r.width(), 4.0);
        assert_eq!(r.height(), 6.0);
    }

    #[test]
    fn test_from_min_size() {
        let r = Rect::from_min_size(Vec2::new(0.0, -5.0), Vec2::new(10.0, 10.0));
        assert_eq!(r.center, Vec2::new(5.0, 0.0));
        assert_eq!(r.min_y(), -5.0);
    }

    #[test]
    fn test_intersects_overlap() {
        let a = Rect::new(Vec2::ZERO, Vec2::splat(10.0));
        let b = Rect::new(Vec2::new(9.0, 9.0), Vec2::splat(10.0));
        assert!(a.intersects(&b));
        assert!(b.intersects(&a));
    }

    #[test]
    fn test_touching_edges_do_not_intersect() {
        let a = Rect::new(Vec2::ZERO, Vec2::splat(10.0));
        let b = Rect::new(Vec2::new(10.0, 0.0), Vec2::splat(10.0));
        assert!(!a.intersects(&b));
    }

    #[test]
    fn test_disjoint_on_one_axis() {
        let a = Rect::new(Vec2::ZERO, Vec2::splat(10.0));
        let b = Rect::new(Vec2::new(2.0, 50.0), Vec2::splat(10.0));
        assert!(!a.intersects(&b));
    }

    #[test]
    fn test_contains_point() {
        let r = Rect::new(Vec2::ZERO, Vec2::splat(2.0));
        assert!(r.contains_point(Vec2::new(1.0, -1.0)));
        assert!(!r.contains_point(Vec2::new(1.5, 0.0)));
    }
}
