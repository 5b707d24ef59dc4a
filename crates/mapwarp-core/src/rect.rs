//! Rect - an axis-aligned rectangle with f64 edges
//!
//! Used by [`crate::Transform::set_rect_to_rect`] and by the viewport and
//! geo mappers to describe image and screen extents.

use crate::point::Point;

/// An axis-aligned rectangle
///
/// Stored as edge coordinates rather than origin + size so that emptiness
/// (an inverted or zero-area rectangle) is cheap to detect.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Rect {
    /// Left x coordinate
    pub left: f64,
    /// Top y coordinate
    pub top: f64,
    /// Right x coordinate
    pub right: f64,
    /// Bottom y coordinate
    pub bottom: f64,
}

impl Rect {
    /// Create a new rectangle from edges
    pub const fn new(left: f64, top: f64, right: f64, bottom: f64) -> Self {
        Self {
            left,
            top,
            right,
            bottom,
        }
    }

    /// Create a rectangle from origin and size
    pub const fn from_size(w: f64, h: f64) -> Self {
        Self::new(0.0, 0.0, w, h)
    }

    /// Width (negative if the rectangle is inverted)
    #[inline]
    pub fn width(&self) -> f64 {
        self.right - self.left
    }

    /// Height (negative if the rectangle is inverted)
    #[inline]
    pub fn height(&self) -> f64 {
        self.bottom - self.top
    }

    /// True if the rectangle encloses no area
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.left >= self.right || self.top >= self.bottom
    }

    /// Center point
    pub fn center(&self) -> Point {
        Point::new(
            (self.left + self.right) / 2.0,
            (self.top + self.bottom) / 2.0,
        )
    }

    /// True if the point lies inside or on the boundary
    pub fn contains(&self, p: Point) -> bool {
        p.x >= self.left && p.x <= self.right && p.y >= self.top && p.y <= self.bottom
    }
}
