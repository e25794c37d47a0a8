//! Geometric types for surface-space positions and offsets
//!
//! Nothing here validates its inputs: non-finite coordinates pass through
//! every operation unchanged.

use std::ops::{Add, Sub};

use serde::{Deserialize, Serialize};

/// A position in surface or data space
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    pub const ORIGIN: Point = Point { x: 0.0, y: 0.0 };

    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

/// A 2D offset, used as the displacement applied on top of an anchor
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Vector {
    pub dx: f32,
    pub dy: f32,
}

impl Vector {
    pub const ZERO: Vector = Vector { dx: 0.0, dy: 0.0 };

    pub fn new(dx: f32, dy: f32) -> Self {
        Self { dx, dy }
    }
}

impl Add<Vector> for Point {
    type Output = Point;

    fn add(self, v: Vector) -> Point {
        Point::new(self.x + v.dx, self.y + v.dy)
    }
}

impl Sub<Vector> for Point {
    type Output = Point;

    fn sub(self, v: Vector) -> Point {
        Point::new(self.x - v.dx, self.y - v.dy)
    }
}

impl Sub for Point {
    type Output = Vector;

    fn sub(self, other: Point) -> Vector {
        Vector::new(self.x - other.x, self.y - other.y)
    }
}

/// Width and height of a content element
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Size {
    pub width: f32,
    pub height: f32,
}

impl Size {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }
}

/// Axis-aligned rectangle in surface space (y grows downward)
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    pub left: f32,
    pub top: f32,
    pub right: f32,
    pub bottom: f32,
}

impl Rect {
    /// Create a new rectangle from edge coordinates
    pub fn new(left: f32, top: f32, right: f32, bottom: f32) -> Self {
        Self {
            left,
            top,
            right,
            bottom,
        }
    }

    /// Create a rectangle from its top-left corner and size
    pub fn from_origin_size(origin: Point, size: Size) -> Self {
        Self::new(
            origin.x,
            origin.y,
            origin.x + size.width,
            origin.y + size.height,
        )
    }

    pub fn width(&self) -> f32 {
        self.right - self.left
    }

    pub fn height(&self) -> f32 {
        self.bottom - self.top
    }

    pub fn size(&self) -> Size {
        Size::new(self.width(), self.height())
    }

    pub fn origin(&self) -> Point {
        Point::new(self.left, self.top)
    }

    pub fn center(&self) -> Point {
        self.point_at(0.5, 0.5)
    }

    /// Fractional location inside the rectangle: (0, 0) is the top-left
    /// corner, (1, 1) the bottom-right. Values outside 0..1 extrapolate.
    pub fn point_at(&self, fx: f32, fy: f32) -> Point {
        Point::new(
            self.left + self.width() * fx,
            self.top + self.height() * fy,
        )
    }

    /// Translate the rectangle by the given offset
    pub fn translate(&self, offset: Vector) -> Rect {
        Rect {
            left: self.left + offset.dx,
            top: self.top + offset.dy,
            right: self.right + offset.dx,
            bottom: self.bottom + offset.dy,
        }
    }

    /// Calculate the intersection of two rectangles
    pub fn intersect(&self, other: Rect) -> Option<Rect> {
        let left = self.left.max(other.left);
        let top = self.top.max(other.top);
        let right = self.right.min(other.right);
        let bottom = self.bottom.min(other.bottom);
        if left < right && top < bottom {
            Some(Rect {
                left,
                top,
                right,
                bottom,
            })
        } else {
            None
        }
    }

    /// Check if this rectangle contains a point (right and bottom edges excluded)
    pub fn contains_point(&self, p: Point) -> bool {
        p.x >= self.left && p.x < self.right && p.y >= self.top && p.y < self.bottom
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_point_plus_vector() {
        let p = Point::new(10.0, 20.0) + Vector::new(5.0, -5.0);
        assert_eq!(p, Point::new(15.0, 15.0));
        assert_eq!(p - Point::new(10.0, 20.0), Vector::new(5.0, -5.0));
    }

    #[test]
    fn test_non_finite_passes_through() {
        let p = Point::new(1.0, 1.0) + Vector::new(f32::INFINITY, f32::NAN);
        assert_eq!(p.x, f32::INFINITY);
        assert!(p.y.is_nan());
    }

    #[test]
    fn test_rect_point_at() {
        let r = Rect::new(10.0, 20.0, 110.0, 220.0);
        assert_eq!(r.point_at(0.0, 0.0), Point::new(10.0, 20.0));
        assert_eq!(r.point_at(1.0, 0.0), Point::new(110.0, 20.0));
        assert_eq!(r.center(), Point::new(60.0, 120.0));
    }

    #[test]
    fn test_rect_intersect() {
        let a = Rect::new(0.0, 0.0, 10.0, 10.0);
        let b = Rect::new(5.0, 5.0, 15.0, 15.0);
        assert_eq!(a.intersect(b), Some(Rect::new(5.0, 5.0, 10.0, 10.0)));
        assert_eq!(a.intersect(Rect::new(20.0, 20.0, 30.0, 30.0)), None);
    }

    #[test]
    fn test_rect_translate_and_contains() {
        let r = Rect::from_origin_size(Point::ORIGIN, Size::new(4.0, 2.0))
            .translate(Vector::new(1.0, 1.0));
        assert!(r.contains_point(Point::new(1.0, 1.0)));
        assert!(!r.contains_point(Point::new(5.0, 2.0)));
        assert_eq!(r.size(), Size::new(4.0, 2.0));
    }
}
