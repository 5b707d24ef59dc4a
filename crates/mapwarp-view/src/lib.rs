//! mapwarp-view - Viewport mapping for raster map display
//!
//! This crate tracks how a (possibly rotated) raster image is positioned on
//! screen:
//!
//! - [`Orientation`] - quarter-turn display rotation of the stored pixels
//! - [`ViewportMapper`] - owns the image-to-screen [`mapwarp_core::Transform`],
//!   applies pan/zoom gestures, and clamps them so the viewport center can
//!   never leave the image
//!
//! Gesture recognition itself lives outside this crate; it feeds plain
//! pan/zoom deltas in, and the renderer reads the current transform back
//! out.

mod error;
mod orientation;
mod viewport;

pub use error::{ViewError, ViewResult};
pub use orientation::Orientation;
pub use viewport::ViewportMapper;
