//! mapwarp-core - Coordinate types and the 2D projective transform engine
//!
//! This crate provides the numerical foundation shared by the viewport and
//! geographic mappers:
//!
//! - [`Point`] - a 2D coordinate in a single named space
//! - [`Rect`] - an axis-aligned rectangle
//! - [`Transform`] - a double-precision 3x3 homogeneous transform with
//!   composition, inversion, perspective-correct point mapping,
//!   point-correspondence solving (0-4 pairs) and rectangle fitting
//!
//! All geometry operations are synchronous and free of I/O; failures are
//! reported through [`Error`] and are always recoverable by the caller
//! choosing a lower-fidelity fallback.
//!
//! # Example
//!
//! ```
//! use mapwarp_core::{Point, Transform};
//!
//! let src = [Point::new(0.0, 0.0), Point::new(1.0, 0.0), Point::new(0.0, 1.0)];
//! let dst = [Point::new(10.0, 10.0), Point::new(12.0, 10.0), Point::new(10.0, 12.0)];
//! let t = Transform::from_point_pairs(&src, &dst).unwrap();
//! let p = t.map_point(Point::new(0.5, 0.5));
//! assert!((p.x - 11.0).abs() < 1e-9 && (p.y - 11.0).abs() < 1e-9);
//! ```

mod error;
mod point;
mod rect;
mod transform;

pub use error::{Error, Result};
pub use point::Point;
pub use rect::Rect;
pub use transform::{
    DET_EPSILON, PERSP_0, PERSP_1, PERSP_2, PERSPECTIVE_W_EPS, SCALE_X, SCALE_Y, SKEW_X, SKEW_Y,
    SOLVE_EPSILON, ScaleToFit, TRANS_X, TRANS_Y, Transform,
};
