//! Axis-aligned edge geometry shared by every entity
//!
//! Circles and rectangles both expose their bounding-box edges; a single
//! intersection test is written against that capability. Circles are tested
//! by their bounding box, not by exact circular geometry.

use glam::Vec2;

/// Anything with axis-aligned left/right/top/bottom edges (y grows downward)
pub trait Edges {
    /// Centre position
    fn center(&self) -> Vec2;
    /// Half of the width and height (radius for a circle)
    fn half_extents(&self) -> Vec2;

    #[inline]
    fn x(&self) -> f32 {
        self.center().x
    }

    #[inline]
    fn y(&self) -> f32 {
        self.center().y
    }

    #[inline]
    fn left(&self) -> f32 {
        self.center().x - self.half_extents().x
    }

    #[inline]
    fn right(&self) -> f32 {
        self.center().x + self.half_extents().x
    }

    #[inline]
    fn top(&self) -> f32 {
        self.center().y - self.half_extents().y
    }

    #[inline]
    fn bottom(&self) -> f32 {
        self.center().y + self.half_extents().y
    }
}

/// True iff the two bounding boxes touch or overlap
#[inline]
pub fn intersects<A: Edges + ?Sized, B: Edges + ?Sized>(a: &A, b: &B) -> bool {
    a.right() >= b.left() && a.left() <= b.right() && a.bottom() >= b.top() && a.top() <= b.bottom()
}

/// A bare bounding box
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Aabb {
    pub center: Vec2,
    pub half: Vec2,
}

impl Aabb {
    pub fn new(center: Vec2, half: Vec2) -> Self {
        Self { center, half }
    }

    pub fn from_size(center: Vec2, width: f32, height: f32) -> Self {
        Self::new(center, Vec2::new(width / 2.0, height / 2.0))
    }
}

impl Edges for Aabb {
    #[inline]
    fn center(&self) -> Vec2 {
        self.center
    }

    #[inline]
    fn half_extents(&self) -> Vec2 {
        self.half
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn square(x: f32, y: f32, size: f32) -> Aabb {
        Aabb::from_size(Vec2::new(x, y), size, size)
    }

    #[test]
    fn test_edges() {
        let b = Aabb::from_size(Vec2::new(100.0, 50.0), 60.0, 20.0);
        assert_eq!(b.left(), 70.0);
        assert_eq!(b.right(), 130.0);
        assert_eq!(b.top(), 40.0);
        assert_eq!(b.bottom(), 60.0);
        assert_eq!(b.x(), 100.0);
        assert_eq!(b.y(), 50.0);
    }

    #[test]
    fn test_overlap_intersects() {
        assert!(intersects(&square(0.0, 0.0, 10.0), &square(5.0, 5.0, 10.0)));
    }

    #[test]
    fn test_touching_edges_intersect() {
        // right edge of a at 5, left edge of b at 5
        assert!(intersects(&square(0.0, 0.0, 10.0), &square(10.0, 0.0, 10.0)));
    }

    #[test]
    fn test_separated_on_one_axis_misses() {
        assert!(!intersects(&square(0.0, 0.0, 10.0), &square(10.5, 0.0, 10.0)));
        assert!(!intersects(&square(0.0, 0.0, 10.0), &square(0.0, -10.5, 10.0)));
        // overlapping in x but not y
        assert!(!intersects(&square(0.0, 0.0, 10.0), &square(2.0, 30.0, 10.0)));
    }

    #[test]
    fn test_intersects_is_symmetric() {
        let a = square(0.0, 0.0, 10.0);
        let b = Aabb::from_size(Vec2::new(12.0, 3.0), 20.0, 4.0);
        assert_eq!(intersects(&a, &b), intersects(&b, &a));
    }

    #[test]
    fn test_containment_intersects() {
        assert!(intersects(&square(0.0, 0.0, 100.0), &square(1.0, 1.0, 2.0)));
    }
}
