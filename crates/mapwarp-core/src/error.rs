//! Error types for mapwarp-core
//!
//! All numerical failures in the transform engine are recoverable: a caller
//! that receives [`Error::SingularMatrix`] or [`Error::DegeneratePoints`] is
//! expected to fall back to a lower-fidelity mapping (fewer correspondence
//! points, axis-aligned approximation). Nothing here panics.

use thiserror::Error;

/// mapwarp-core error type
#[derive(Error, Debug)]
pub enum Error {
    /// Matrix is singular (determinant below the epsilon threshold)
    #[error("singular transformation matrix")]
    SingularMatrix,

    /// Point correspondence set admits no transform (colinear / coincident points)
    #[error("degenerate point configuration")]
    DegeneratePoints,

    /// Too many correspondence points
    #[error("point count out of range: {count} (max {max})")]
    PointCountOutOfRange { count: usize, max: usize },

    /// Source and destination point arrays differ in length
    #[error("mismatched point arrays: {src} source vs {dst} destination")]
    MismatchedLengths { src: usize, dst: usize },
}

/// Result type alias for mapwarp-core operations
pub type Result<T> = std::result::Result<T, Error>;
