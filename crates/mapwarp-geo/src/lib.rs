//! mapwarp-geo - Georeferencing for raster maps
//!
//! This crate builds and owns the mapping between geographic coordinates
//! (longitude/latitude in degrees) and image pixel coordinates:
//!
//! - [`GeoPoint`] / [`GeoBounds`] / [`TiePoint`] - geographic data types
//! - [`mercator_y`] / [`lat_from_mercator_y`] - scalar Mercator projection
//! - [`GeoImageMapper`] - the construction cascade over available
//!   georeferencing data (quad corners, axis-aligned bounds + rotation
//!   with a Mercator-aware path, arbitrary tie points with 4-to-3
//!   fallback)
//! - [`PreviewWarp`] / [`Projection`] - runtime re-warping of a preview
//!   overlay against an external, pull-based map projection
//!
//! Chaining a [`GeoImageMapper`] with a viewport mapper gives the full
//! geographic-to-screen conversion used by position markers and distance
//! displays.

mod error;
mod geopoint;
mod mapper;
mod mercator;
mod rewarp;

pub use error::{GeoError, GeoResult};
pub use geopoint::{GeoBounds, GeoPoint, TiePoint};
pub use mapper::{AXIS_ALIGNED_MAX_ROTATION, GeoImageMapper, MIN_TIE_POINTS};
pub use mercator::{MAX_MERCATOR_LATITUDE, lat_from_mercator_y, mercator_y};
pub use rewarp::{Camera, PreviewWarp, Projection};
