//! Error types for mapwarp-geo
//!
//! A solve failure here is the caller's cue to fall back to a
//! lower-fidelity representation (fewer tie points, axis-aligned
//! approximation). When nothing is solvable the map cannot be
//! georeferenced; that is a terminal configuration error for the map, not
//! for the process.

use thiserror::Error;

/// Errors that can occur during georeferencing
#[derive(Debug, Error)]
pub enum GeoError {
    /// Core transform error (singular matrix, degenerate points)
    #[error("core error: {0}")]
    Core(#[from] mapwarp_core::Error),

    /// Not enough correspondences to build any mapping
    #[error("not enough tie points: {count} (minimum {min})")]
    InsufficientTiePoints { count: usize, min: usize },

    /// Geographic bounding box is inverted or empty
    #[error("invalid geographic bounds: north={north}, south={south}, east={east}, west={west}")]
    InvalidBounds {
        north: f64,
        south: f64,
        east: f64,
        west: f64,
    },

    /// Image dimensions must be positive
    #[error("invalid image dimensions: {width}x{height}")]
    InvalidImageSize { width: u32, height: u32 },
}

/// Result type for georeferencing operations
pub type GeoResult<T> = std::result::Result<T, GeoError>;
