//! Geographic coordinate types
//!
//! Longitude and latitude in degrees (WGS84 datum assumed by the
//! collaborating location providers; the engine itself only needs the
//! angular values).

use crate::error::{GeoError, GeoResult};
use mapwarp_core::Point;

/// A geographic position in degrees
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct GeoPoint {
    /// Longitude in degrees, east positive
    pub lon: f64,
    /// Latitude in degrees, north positive
    pub lat: f64,
}

impl GeoPoint {
    /// Create a new geographic point
    pub const fn new(lon: f64, lat: f64) -> Self {
        Self { lon, lat }
    }

    /// View as a planar point with `x = lon`, `y = lat`
    pub(crate) fn as_point(&self) -> Point {
        Point::new(self.lon, self.lat)
    }
}

/// An axis-aligned geographic bounding box
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GeoBounds {
    /// Northern edge latitude in degrees
    pub north: f64,
    /// Southern edge latitude in degrees
    pub south: f64,
    /// Eastern edge longitude in degrees
    pub east: f64,
    /// Western edge longitude in degrees
    pub west: f64,
}

impl GeoBounds {
    /// Create a validated bounding box
    ///
    /// # Errors
    ///
    /// Fails if the box is inverted, empty, or outside the valid
    /// latitude/longitude ranges. Boxes crossing the antimeridian are not
    /// supported.
    pub fn new(north: f64, south: f64, east: f64, west: f64) -> GeoResult<Self> {
        let ordered = north > south && east > west;
        let in_range = north <= 90.0 && south >= -90.0 && east <= 180.0 && west >= -180.0;
        if !(ordered && in_range) {
            return Err(GeoError::InvalidBounds {
                north,
                south,
                east,
                west,
            });
        }
        Ok(Self {
            north,
            south,
            east,
            west,
        })
    }

    /// Longitude span in degrees
    pub fn lon_span(&self) -> f64 {
        self.east - self.west
    }

    /// Latitude span in degrees
    pub fn lat_span(&self) -> f64 {
        self.north - self.south
    }
}

/// A correspondence between an image pixel and a geographic position
///
/// Placed by the user during map creation; the solving paths describe per
/// algorithm how latitude sign handling makes geographic y increase in the
/// same direction as image y.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TiePoint {
    /// Pixel position in stored image coordinates
    pub image: Point,
    /// Geographic position the pixel corresponds to
    pub geo: GeoPoint,
}

impl TiePoint {
    /// Create a new tie point
    pub const fn new(image: Point, geo: GeoPoint) -> Self {
        Self { image, geo }
    }
}
