//! Mercator projection helpers
//!
//! Most unrotated scanned maps are Mercator-projected: longitude is linear
//! across the image, but latitude is not. Interpolating latitude linearly
//! visibly stretches maps spanning more than a few degrees, so the
//! axis-aligned mapping path interpolates in Mercator-projected latitude
//! and converts back with the inverse relation `lat = atan(sinh(y))`.

/// Latitude beyond which the Mercator projection is not evaluated
///
/// The conventional Web Mercator cutoff; `mercator_y` clamps its input to
/// this range so poles cannot produce infinities.
pub const MAX_MERCATOR_LATITUDE: f64 = 85.05112878;

/// Project a latitude (degrees) to unitless Mercator y
///
/// `y = ln(tan(pi/4 + lat/2))`, computed as `asinh(tan(lat))`, which is the
/// same function with better behavior near zero.
pub fn mercator_y(lat_deg: f64) -> f64 {
    let lat = lat_deg.clamp(-MAX_MERCATOR_LATITUDE, MAX_MERCATOR_LATITUDE);
    lat.to_radians().tan().asinh()
}

/// Invert [`mercator_y`]: recover the latitude in degrees
pub fn lat_from_mercator_y(y: f64) -> f64 {
    y.sinh().atan().to_degrees()
}
