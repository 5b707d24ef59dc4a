//! GeoImageMapper - mapping between geographic space and image pixels
//!
//! The mapper is built through a priority cascade over whatever
//! georeferencing data a map carries:
//!
//! 1. **Quadrilateral corners** - four independent geographic corners, one
//!    per image corner. Solved as a full projective transform; tolerates
//!    skew and keystone distortion from the source scan.
//! 2. **Axis-aligned bounds + rotation** - a `(west, north)-(east, south)`
//!    box. With no rotation the Mercator-aware scalar path is used;
//!    longitude is linear in image x and latitude is interpolated in
//!    Mercator-projected space. With rotation a 3-point affine solve is
//!    composed after a rotation of image space about the image center.
//!    Rotation combined with a true Mercator correction is not attempted;
//!    that combination falls back to the affine approximation (a documented
//!    limitation of this path).
//! 3. **Tie points** - N >= 2 user-placed correspondences, capped at 4,
//!    retried with 3 when the 4-point configuration is degenerate.

use crate::error::{GeoError, GeoResult};
use crate::geopoint::{GeoBounds, GeoPoint, TiePoint};
use crate::mercator::{lat_from_mercator_y, mercator_y};
use mapwarp_core::{Point, Transform};

/// Rotation magnitude (degrees) below which a bounds mapping is treated as
/// axis-aligned and takes the Mercator scalar path.
pub const AXIS_ALIGNED_MAX_ROTATION: f64 = 1e-6;

/// Minimum tie points required to georeference a map
pub const MIN_TIE_POINTS: usize = 2;

/// How geographic and image coordinates relate for one map
#[derive(Debug, Clone)]
enum Mapping {
    /// Scalar Mercator path for unrotated, axis-aligned maps.
    ///
    /// Longitude is affine in image x; latitude is affine in Mercator y.
    /// Not expressible as a 3x3 matrix, so the inverse uses the scalar
    /// formulas and never a matrix inverse.
    Mercator {
        lon_west: f64,
        lon_per_px: f64,
        merc_north: f64,
        merc_per_py: f64,
    },
    /// General matrix path: a projective or affine image-to-geo transform.
    ///
    /// When `lat_negated` is set the transform's y output is the negated
    /// latitude (the solve ran with latitude sign inverted so geographic y
    /// grows in the same direction as image y).
    Matrix {
        image_to_geo: Transform,
        lat_negated: bool,
    },
}

/// Maps between image pixel coordinates and geographic coordinates
#[derive(Debug, Clone)]
pub struct GeoImageMapper {
    image_w: f64,
    image_h: f64,
    mapping: Mapping,
}

impl GeoImageMapper {
    /// Build from four geographic corners, one per image corner
    ///
    /// Corner order is top-left, top-right, bottom-right, bottom-left of
    /// the stored image. This is the most general path; no axis alignment
    /// is assumed.
    ///
    /// # Errors
    ///
    /// Fails when the corner configuration is degenerate (three corners
    /// colinear); the caller may then retry with a lower-fidelity source.
    pub fn from_corners(image_w: u32, image_h: u32, corners: [GeoPoint; 4]) -> GeoResult<Self> {
        let (w, h) = checked_size(image_w, image_h)?;
        let image = [
            Point::new(0.0, 0.0),
            Point::new(w, 0.0),
            Point::new(w, h),
            Point::new(0.0, h),
        ];
        let geo: Vec<Point> = corners.iter().map(|c| c.as_point()).collect();
        let image_to_geo = Transform::from_point_pairs(&image, &geo)?;
        Ok(Self {
            image_w: w,
            image_h: h,
            mapping: Mapping::Matrix {
                image_to_geo,
                lat_negated: false,
            },
        })
    }

    /// Build from an axis-aligned geographic box plus a rotation angle
    ///
    /// `rotation_deg` is the clockwise angle by which the map content is
    /// rotated relative to north-up. Near-zero rotation selects the
    /// Mercator scalar path.
    ///
    /// # Errors
    ///
    /// [`GeoError::InvalidBounds`] when the box sits entirely poleward of
    /// the Mercator cutoff, where the projected latitude span collapses to
    /// zero and no mapping exists.
    pub fn from_bounds(
        image_w: u32,
        image_h: u32,
        bounds: GeoBounds,
        rotation_deg: f64,
    ) -> GeoResult<Self> {
        let (w, h) = checked_size(image_w, image_h)?;

        if rotation_deg.abs() <= AXIS_ALIGNED_MAX_ROTATION {
            let merc_north = mercator_y(bounds.north);
            let merc_south = mercator_y(bounds.south);
            // A box lying entirely above the Mercator cutoff clamps both
            // edges to the same projected value; there is no usable
            // latitude axis in that case.
            if merc_north == merc_south {
                return Err(GeoError::InvalidBounds {
                    north: bounds.north,
                    south: bounds.south,
                    east: bounds.east,
                    west: bounds.west,
                });
            }
            return Ok(Self {
                image_w: w,
                image_h: h,
                mapping: Mapping::Mercator {
                    lon_west: bounds.west,
                    lon_per_px: bounds.lon_span() / w,
                    merc_north,
                    merc_per_py: (merc_south - merc_north) / h,
                },
            });
        }

        // Rotated: affine approximation. Map the unrotated image rectangle
        // onto the geographic box with a 3-point solve, then rotate image
        // space about the image center before that mapping applies.
        let image = [
            Point::new(0.0, 0.0),
            Point::new(w, 0.0),
            Point::new(0.0, h),
        ];
        let geo = [
            Point::new(bounds.west, bounds.north),
            Point::new(bounds.east, bounds.north),
            Point::new(bounds.west, bounds.south),
        ];
        let mut image_to_geo = Transform::from_point_pairs(&image, &geo)?;
        image_to_geo.pre_rotate_about(rotation_deg, w / 2.0, h / 2.0);
        Ok(Self {
            image_w: w,
            image_h: h,
            mapping: Mapping::Matrix {
                image_to_geo,
                lat_negated: false,
            },
        })
    }

    /// Build from user-placed tie points (map creation flow)
    ///
    /// Uses at most the first four correspondences. Latitude sign is
    /// inverted around the solve so that geographic y increases with image
    /// y; the mapper re-inverts on every conversion. A degenerate 4-point
    /// configuration is retried with 3 points before giving up.
    ///
    /// # Errors
    ///
    /// [`GeoError::InsufficientTiePoints`] below [`MIN_TIE_POINTS`];
    /// otherwise the underlying solve error when no configuration is
    /// solvable, which the caller must treat as "this map cannot be
    /// georeferenced".
    pub fn from_tie_points(image_w: u32, image_h: u32, points: &[TiePoint]) -> GeoResult<Self> {
        let (w, h) = checked_size(image_w, image_h)?;
        if points.len() < MIN_TIE_POINTS {
            return Err(GeoError::InsufficientTiePoints {
                count: points.len(),
                min: MIN_TIE_POINTS,
            });
        }
        let n = points.len().min(4);
        let image: Vec<Point> = points[..n].iter().map(|t| t.image).collect();
        let geo: Vec<Point> = points[..n]
            .iter()
            .map(|t| Point::new(t.geo.lon, -t.geo.lat))
            .collect();
        let image_to_geo = solve_with_fallback(&image, &geo)?;
        Ok(Self {
            image_w: w,
            image_h: h,
            mapping: Mapping::Matrix {
                image_to_geo,
                lat_negated: true,
            },
        })
    }

    /// Image width in pixels
    pub fn image_width(&self) -> f64 {
        self.image_w
    }

    /// Image height in pixels
    pub fn image_height(&self) -> f64 {
        self.image_h
    }

    /// True if this mapper uses the scalar Mercator path
    pub fn is_mercator_aligned(&self) -> bool {
        matches!(self.mapping, Mapping::Mercator { .. })
    }

    /// Convert an image pixel to geographic coordinates
    pub fn image_to_geo(&self, p: Point) -> GeoPoint {
        match &self.mapping {
            Mapping::Mercator {
                lon_west,
                lon_per_px,
                merc_north,
                merc_per_py,
            } => GeoPoint::new(
                lon_west + p.x * lon_per_px,
                lat_from_mercator_y(merc_north + p.y * merc_per_py),
            ),
            Mapping::Matrix {
                image_to_geo,
                lat_negated,
            } => {
                let q = image_to_geo.map_point(p);
                GeoPoint::new(q.x, if *lat_negated { -q.y } else { q.y })
            }
        }
    }

    /// Convert geographic coordinates to an image pixel
    ///
    /// The matrix paths invert the forward transform on demand; the
    /// Mercator path applies the scalar inverse formulas directly (it is
    /// not affine, so a matrix inverse would be wrong).
    pub fn geo_to_image(&self, g: GeoPoint) -> GeoResult<Point> {
        match &self.mapping {
            Mapping::Mercator {
                lon_west,
                lon_per_px,
                merc_north,
                merc_per_py,
            } => Ok(Point::new(
                (g.lon - lon_west) / lon_per_px,
                (mercator_y(g.lat) - merc_north) / merc_per_py,
            )),
            Mapping::Matrix {
                image_to_geo,
                lat_negated,
            } => {
                let inverse = image_to_geo.inverted().map_err(GeoError::Core)?;
                let lat = if *lat_negated { -g.lat } else { g.lat };
                Ok(inverse.map_point(Point::new(g.lon, lat)))
            }
        }
    }

    /// The forward image-to-geo transform, if this mapper has one
    ///
    /// `None` on the Mercator path, which has no matrix representation.
    pub fn image_to_geo_transform(&self) -> Option<&Transform> {
        match &self.mapping {
            Mapping::Mercator { .. } => None,
            Mapping::Matrix { image_to_geo, .. } => Some(image_to_geo),
        }
    }
}

/// Solve for up to four correspondences, retrying with three when the
/// four-point configuration is degenerate
pub(crate) fn solve_with_fallback(src: &[Point], dst: &[Point]) -> GeoResult<Transform> {
    debug_assert_eq!(src.len(), dst.len());
    match Transform::from_point_pairs(src, dst) {
        Ok(t) => Ok(t),
        Err(e) if src.len() == 4 => {
            match Transform::from_point_pairs(&src[..3], &dst[..3]) {
                Ok(t) => Ok(t),
                // Report the original 4-point failure if the retry also fails
                Err(_) => Err(e.into()),
            }
        }
        Err(e) => Err(e.into()),
    }
}

fn checked_size(image_w: u32, image_h: u32) -> GeoResult<(f64, f64)> {
    if image_w == 0 || image_h == 0 {
        return Err(GeoError::InvalidImageSize {
            width: image_w,
            height: image_h,
        });
    }
    Ok((image_w as f64, image_h as f64))
}
