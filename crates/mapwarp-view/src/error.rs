//! Error types for mapwarp-view

use thiserror::Error;

/// Errors that can occur in viewport mapping
#[derive(Debug, Error)]
pub enum ViewError {
    /// Core transform error
    #[error("core error: {0}")]
    Core(#[from] mapwarp_core::Error),

    /// Image dimensions must be positive
    #[error("invalid image dimensions: {width}x{height}")]
    InvalidImageSize { width: u32, height: u32 },

    /// Viewport dimensions must be positive
    #[error("invalid viewport dimensions: {width}x{height}")]
    InvalidViewportSize { width: u32, height: u32 },
}

/// Result type for viewport operations
pub type ViewResult<T> = std::result::Result<T, ViewError>;
