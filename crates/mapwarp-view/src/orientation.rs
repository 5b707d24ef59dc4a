//! Image orientation
//!
//! Scanned and photographed maps frequently arrive rotated by a quarter
//! turn; the orientation describes how the stored pixels must be rotated
//! clockwise to appear upright.

/// Clockwise rotation applied to the stored image to display it upright
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Orientation {
    /// No rotation
    #[default]
    Deg0,
    /// Quarter turn clockwise
    Deg90,
    /// Half turn
    Deg180,
    /// Three-quarter turn clockwise
    Deg270,
}

impl Orientation {
    /// Parse from a degree value; only multiples of 90 are meaningful
    pub fn from_degrees(degrees: i32) -> Option<Self> {
        match degrees.rem_euclid(360) {
            0 => Some(Self::Deg0),
            90 => Some(Self::Deg90),
            180 => Some(Self::Deg180),
            270 => Some(Self::Deg270),
            _ => None,
        }
    }

    /// Rotation angle in degrees
    pub fn degrees(self) -> f64 {
        match self {
            Self::Deg0 => 0.0,
            Self::Deg90 => 90.0,
            Self::Deg180 => 180.0,
            Self::Deg270 => 270.0,
        }
    }

    /// True if the rotation swaps width and height
    pub fn swaps_axes(self) -> bool {
        matches!(self, Self::Deg90 | Self::Deg270)
    }
}
