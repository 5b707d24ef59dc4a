//! Runtime re-warping of a map preview against a live projection
//!
//! While the user aligns a map preview over a live base map, the preview
//! image must track every camera move of the underlying projection. On each
//! relevant change the known geographic tie points are re-projected to
//! screen coordinates and the image-to-screen transform is re-solved (four
//! points, retrying with three). When only the camera target moved - the
//! common case during a drag - re-solving is skipped and the existing
//! transform is translated by the screen-space displacement of the old
//! target instead.

use crate::error::{GeoError, GeoResult};
use crate::geopoint::{GeoPoint, TiePoint};
use crate::mapper::solve_with_fallback;
use mapwarp_core::{Point, Transform};

/// Pull-based view of the external map projection
///
/// Implemented by the hosting map component; the engine only ever asks it
/// questions and never holds callbacks into it.
pub trait Projection {
    /// Project a geographic point to current screen coordinates
    fn to_screen(&self, geo: GeoPoint) -> Point;

    /// Current camera state
    fn camera(&self) -> Camera;
}

/// Camera target and zoom of the external projection
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Camera {
    /// Geographic point at the screen center
    pub target: GeoPoint,
    /// Projection zoom level (opaque to the engine; only compared)
    pub zoom: f64,
}

/// Keeps a preview overlay's image-to-screen transform in sync with a
/// moving projection
#[derive(Debug, Clone)]
pub struct PreviewWarp {
    image_points: Vec<Point>,
    geo_points: Vec<GeoPoint>,
    /// Image-to-screen transform, replaced atomically on update
    transform: Transform,
    camera: Camera,
}

impl PreviewWarp {
    /// Create a warp from the current tie points and projection state
    ///
    /// At least one correspondence is required (a single pair tracks as a
    /// pure translation while the user is still placing points).
    pub fn new(tie_points: &[TiePoint], projection: &impl Projection) -> GeoResult<Self> {
        if tie_points.is_empty() {
            return Err(GeoError::InsufficientTiePoints { count: 0, min: 1 });
        }
        let mut warp = Self {
            image_points: tie_points.iter().map(|t| t.image).collect(),
            geo_points: tie_points.iter().map(|t| t.geo).collect(),
            transform: Transform::identity(),
            camera: projection.camera(),
        };
        warp.resolve(projection)?;
        Ok(warp)
    }

    /// Replace the tie point set and re-solve immediately
    pub fn set_tie_points(
        &mut self,
        tie_points: &[TiePoint],
        projection: &impl Projection,
    ) -> GeoResult<()> {
        if tie_points.is_empty() {
            return Err(GeoError::InsufficientTiePoints { count: 0, min: 1 });
        }
        self.image_points = tie_points.iter().map(|t| t.image).collect();
        self.geo_points = tie_points.iter().map(|t| t.geo).collect();
        self.camera = projection.camera();
        self.resolve(projection)
    }

    /// Synchronize with the projection's current camera
    ///
    /// Returns `Ok(true)` if the transform changed. A target-only move
    /// takes the pan fast path: the transform is translated by the screen
    /// displacement of the previous target instead of re-solving.
    pub fn update(&mut self, projection: &impl Projection) -> GeoResult<bool> {
        let camera = projection.camera();
        if camera == self.camera {
            return Ok(false);
        }
        if camera.zoom == self.camera.zoom {
            let old_on_screen = projection.to_screen(self.camera.target);
            let new_on_screen = projection.to_screen(camera.target);
            self.transform.post_translate(
                old_on_screen.x - new_on_screen.x,
                old_on_screen.y - new_on_screen.y,
            );
            self.camera = camera;
            return Ok(true);
        }
        self.resolve(projection)?;
        self.camera = camera;
        Ok(true)
    }

    /// Current image-to-screen transform
    pub fn transform(&self) -> &Transform {
        &self.transform
    }

    /// Map an image pixel to current screen coordinates
    pub fn image_to_screen(&self, p: Point) -> Point {
        self.transform.map_point(p)
    }

    /// Re-project the tie points and re-solve the transform
    fn resolve(&mut self, projection: &impl Projection) -> GeoResult<()> {
        let n = self.image_points.len().min(4);
        let screen: Vec<Point> = self.geo_points[..n]
            .iter()
            .map(|g| projection.to_screen(*g))
            .collect();
        self.transform = solve_with_fallback(&self.image_points[..n], &screen)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Linear test projection: degrees scale with zoom, target at screen
    /// center (400, 300), y grows southward.
    struct FakeProjection {
        camera: Camera,
    }

    impl FakeProjection {
        fn scale(&self) -> f64 {
            40.0 * self.camera.zoom
        }
    }

    impl Projection for FakeProjection {
        fn to_screen(&self, geo: GeoPoint) -> Point {
            let s = self.scale();
            Point::new(
                400.0 + (geo.lon - self.camera.target.lon) * s,
                300.0 - (geo.lat - self.camera.target.lat) * s,
            )
        }

        fn camera(&self) -> Camera {
            self.camera
        }
    }

    fn tie_points() -> Vec<TiePoint> {
        vec![
            TiePoint::new(Point::new(0.0, 0.0), GeoPoint::new(0.0, 10.0)),
            TiePoint::new(Point::new(1000.0, 0.0), GeoPoint::new(10.0, 10.0)),
            TiePoint::new(Point::new(1000.0, 1000.0), GeoPoint::new(10.0, 0.0)),
            TiePoint::new(Point::new(0.0, 1000.0), GeoPoint::new(0.0, 0.0)),
        ]
    }

    fn assert_tracks(warp: &PreviewWarp, proj: &FakeProjection, pts: &[TiePoint]) {
        for t in pts {
            let want = proj.to_screen(t.geo);
            let got = warp.image_to_screen(t.image);
            assert!(
                (want.x - got.x).abs() < 1e-6 && (want.y - got.y).abs() < 1e-6,
                "tie point drifted: want ({}, {}), got ({}, {})",
                want.x,
                want.y,
                got.x,
                got.y
            );
        }
    }

    #[test]
    fn test_initial_solve_matches_projection() {
        let proj = FakeProjection {
            camera: Camera {
                target: GeoPoint::new(5.0, 5.0),
                zoom: 1.0,
            },
        };
        let pts = tie_points();
        let warp = PreviewWarp::new(&pts, &proj).unwrap();
        assert_tracks(&warp, &proj, &pts);
    }

    #[test]
    fn test_pan_fast_path_tracks_target_move() {
        let mut proj = FakeProjection {
            camera: Camera {
                target: GeoPoint::new(5.0, 5.0),
                zoom: 1.0,
            },
        };
        let pts = tie_points();
        let mut warp = PreviewWarp::new(&pts, &proj).unwrap();

        // Target-only move: linear projection makes the fast path exact
        proj.camera.target = GeoPoint::new(6.5, 3.25);
        assert!(warp.update(&proj).unwrap());
        assert_tracks(&warp, &proj, &pts);

        // No change: no work
        assert!(!warp.update(&proj).unwrap());
    }

    #[test]
    fn test_zoom_change_resolves() {
        let mut proj = FakeProjection {
            camera: Camera {
                target: GeoPoint::new(5.0, 5.0),
                zoom: 1.0,
            },
        };
        let pts = tie_points();
        let mut warp = PreviewWarp::new(&pts, &proj).unwrap();

        proj.camera.zoom = 2.5;
        proj.camera.target = GeoPoint::new(4.0, 6.0);
        assert!(warp.update(&proj).unwrap());
        assert_tracks(&warp, &proj, &pts);
    }

    #[test]
    fn test_single_tie_point_is_translation() {
        let proj = FakeProjection {
            camera: Camera {
                target: GeoPoint::new(5.0, 5.0),
                zoom: 1.0,
            },
        };
        let pts = vec![TiePoint::new(
            Point::new(120.0, 80.0),
            GeoPoint::new(5.0, 5.0),
        )];
        let warp = PreviewWarp::new(&pts, &proj).unwrap();
        let got = warp.image_to_screen(Point::new(120.0, 80.0));
        assert!((got.x - 400.0).abs() < 1e-9 && (got.y - 300.0).abs() < 1e-9);
    }

    #[test]
    fn test_empty_tie_points_rejected() {
        let proj = FakeProjection {
            camera: Camera {
                target: GeoPoint::new(0.0, 0.0),
                zoom: 1.0,
            },
        };
        assert!(PreviewWarp::new(&[], &proj).is_err());
    }
}
