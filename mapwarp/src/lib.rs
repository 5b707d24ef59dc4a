//! Mapwarp - coordinate transformation engine for raster maps
//!
//! # Overview
//!
//! Mapwarp provides the coordinate plumbing a raster map viewer needs:
//!
//! - 3x3 homogeneous transforms with correspondence solving (1 to 4 point
//!   pairs) and rectangle fitting
//! - Viewport mapping: pan, pivot zoom, 90-degree orientation, and bounds
//!   clamping between stored image pixels and screen coordinates
//! - Georeferencing: geographic-to-image mapping from corner quads,
//!   Mercator-aware bounding boxes, or user-placed tie points, plus
//!   runtime re-warping of a preview overlay against a live projection
//!
//! # Example
//!
//! ```
//! use mapwarp::{Point, Transform};
//!
//! // Solve the affine transform carrying three correspondences
//! let src = [Point::new(0.0, 0.0), Point::new(100.0, 0.0), Point::new(0.0, 100.0)];
//! let dst = [Point::new(10.0, 20.0), Point::new(110.0, 20.0), Point::new(10.0, 120.0)];
//! let t = Transform::from_point_pairs(&src, &dst).unwrap();
//! let p = t.map_point(Point::new(50.0, 50.0));
//! assert!((p.x - 60.0).abs() < 1e-9 && (p.y - 70.0).abs() < 1e-9);
//! ```

// Re-export core types (primary data structures used everywhere)
pub use mapwarp_core::*;

// Re-export domain crates as modules to avoid name conflicts
pub use mapwarp_geo as geo;
pub use mapwarp_view as view;
