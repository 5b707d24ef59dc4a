//! Point - a 2D coordinate in a single named space
//!
//! A `Point` carries no unit of its own; which space it lives in (image
//! pixels, screen pixels, projected degrees) is determined by the API that
//! produced it. The engine never mixes spaces without an explicit conversion
//! call on a [`crate::Transform`] or one of the mapper components.

use std::ops::{Add, Sub};

/// A 2D point with double-precision coordinates
///
/// Simple Copy type since it is small and frequently copied.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point {
    /// X coordinate
    pub x: f64,
    /// Y coordinate
    pub y: f64,
}

impl Point {
    /// Create a new point
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Euclidean distance to another point
    pub fn distance_to(&self, other: Point) -> f64 {
        (self.x - other.x).hypot(self.y - other.y)
    }

    /// True if both coordinates are finite
    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }

    /// Clamp both coordinates into `[0, w] x [0, h]`
    pub fn clamped(&self, w: f64, h: f64) -> Point {
        Point::new(self.x.clamp(0.0, w), self.y.clamp(0.0, h))
    }
}

impl Add for Point {
    type Output = Point;

    fn add(self, rhs: Point) -> Point {
        Point::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl Sub for Point {
    type Output = Point;

    fn sub(self, rhs: Point) -> Point {
        Point::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl From<(f64, f64)> for Point {
    fn from((x, y): (f64, f64)) -> Self {
        Point::new(x, y)
    }
}
