//! ViewportMapper - image-to-screen mapping with pan/zoom clamping
//!
//! Owns the single live [`Transform`] mapping stored image pixels to screen
//! pixels. The transform incorporates the display orientation: it is built
//! by rotating the image about its own top-left corner, translating the
//! rotated bounding box back to the origin, and centering the result in the
//! viewport. Pan and zoom mutate the transform in place, and every mutation
//! runs a bounds correction that keeps the screen center over the image.
//!
//! # Invariant
//!
//! After any sequence of [`ViewportMapper::zoom`] and
//! [`ViewportMapper::translate`] calls, converting the screen center to
//! image space yields a point inside `[0, w] x [0, h]`. The image's corners
//! may leave the screen, but the image can never be scrolled or zoomed away
//! entirely.

use crate::error::{ViewError, ViewResult};
use crate::orientation::Orientation;
use mapwarp_core::{Point, Transform};

/// Maps stored image pixel space to on-screen pixel space
///
/// The zoom level is tracked as its own scalar: once the orientation
/// rotation is folded into the transform, the accumulated zoom is not
/// recoverable by inspecting the composed scale terms alone.
#[derive(Debug, Clone)]
pub struct ViewportMapper {
    /// Stored (pre-orientation) image width in pixels
    image_w: f64,
    /// Stored (pre-orientation) image height in pixels
    image_h: f64,
    orientation: Orientation,
    view_w: f64,
    view_h: f64,
    /// Image-to-screen transform; replaced atomically on geometry changes
    transform: Transform,
    zoom: f64,
}

impl ViewportMapper {
    /// Create a mapper for an image displayed in a viewport
    ///
    /// The image starts centered at zoom 1.0.
    ///
    /// # Errors
    ///
    /// Fails fast on zero image or viewport dimensions.
    pub fn new(
        image_w: u32,
        image_h: u32,
        orientation: Orientation,
        view_w: u32,
        view_h: u32,
    ) -> ViewResult<Self> {
        if image_w == 0 || image_h == 0 {
            return Err(ViewError::InvalidImageSize {
                width: image_w,
                height: image_h,
            });
        }
        if view_w == 0 || view_h == 0 {
            return Err(ViewError::InvalidViewportSize {
                width: view_w,
                height: view_h,
            });
        }
        let mut mapper = Self {
            image_w: image_w as f64,
            image_h: image_h as f64,
            orientation,
            view_w: view_w as f64,
            view_h: view_h as f64,
            transform: Transform::identity(),
            zoom: 1.0,
        };
        mapper.reset_view();
        Ok(mapper)
    }

    /// Replace the image geometry and rebuild the transform
    pub fn set_image(&mut self, image_w: u32, image_h: u32, orientation: Orientation) -> ViewResult<()> {
        if image_w == 0 || image_h == 0 {
            return Err(ViewError::InvalidImageSize {
                width: image_w,
                height: image_h,
            });
        }
        self.image_w = image_w as f64;
        self.image_h = image_h as f64;
        self.orientation = orientation;
        self.reset_view();
        Ok(())
    }

    /// Update the viewport size, keeping the current pan/zoom where possible
    ///
    /// The bounds correction runs afterwards since the screen center moved.
    pub fn set_viewport_size(&mut self, view_w: u32, view_h: u32) -> ViewResult<()> {
        if view_w == 0 || view_h == 0 {
            return Err(ViewError::InvalidViewportSize {
                width: view_w,
                height: view_h,
            });
        }
        self.view_w = view_w as f64;
        self.view_h = view_h as f64;
        self.correct_bounds();
        Ok(())
    }

    /// Rebuild the transform: orientation rotation, bounding-box fix,
    /// centering. Resets zoom to 1.0.
    fn reset_view(&mut self) {
        let mut t = Transform::identity();
        t.set_rotate_about(self.orientation.degrees(), 0.0, 0.0);

        // Rotating about the top-left corner swings the bounding box out of
        // the first quadrant; translate its top-left back to the origin.
        // The amount depends on the orientation case because a quarter turn
        // swaps which stored dimension ends up along each axis.
        let (fix_x, fix_y) = match self.orientation {
            Orientation::Deg0 => (0.0, 0.0),
            Orientation::Deg90 => (self.image_h, 0.0),
            Orientation::Deg180 => (self.image_w, self.image_h),
            Orientation::Deg270 => (0.0, self.image_w),
        };
        t.post_translate(fix_x, fix_y);

        // Center the oriented image in the viewport.
        let (ow, oh) = self.oriented_size();
        t.post_translate((self.view_w - ow) / 2.0, (self.view_h - oh) / 2.0);

        self.transform = t;
        self.zoom = 1.0;
    }

    /// Width and height after applying the orientation
    pub fn oriented_size(&self) -> (f64, f64) {
        if self.orientation.swaps_axes() {
            (self.image_h, self.image_w)
        } else {
            (self.image_w, self.image_h)
        }
    }

    /// Stored image width in pixels
    pub fn image_width(&self) -> f64 {
        self.image_w
    }

    /// Stored image height in pixels
    pub fn image_height(&self) -> f64 {
        self.image_h
    }

    /// Display orientation
    pub fn orientation(&self) -> Orientation {
        self.orientation
    }

    /// Current accumulated zoom level
    pub fn zoom_level(&self) -> f64 {
        self.zoom
    }

    /// The screen point at the center of the viewport
    pub fn screen_center(&self) -> Point {
        Point::new(self.view_w / 2.0, self.view_h / 2.0)
    }

    /// The image point currently under the viewport center
    pub fn center_in_image(&self) -> ViewResult<Point> {
        self.screen_to_image(self.screen_center())
    }

    /// Scale the view by `factor` about the screen focus point
    ///
    /// Non-finite and non-positive factors are rejected silently (a
    /// negative factor would mirror the image; zero would collapse the
    /// transform to a singular one).
    ///
    /// If the focus point falls outside the image, the effective pivot is
    /// clamped to the nearest image point and the screen focus re-derived
    /// from it, so zooming always pivots about a point actually on the
    /// image.
    pub fn zoom(&mut self, factor: f64, focus_x: f64, focus_y: f64) {
        if !factor.is_finite() || factor <= 0.0 {
            return;
        }
        let Ok(inverse) = self.transform.inverted() else {
            return;
        };
        let in_image = inverse.map_point(Point::new(focus_x, focus_y));
        let clamped = in_image.clamped(self.image_w, self.image_h);
        let focus = if clamped == in_image {
            Point::new(focus_x, focus_y)
        } else {
            self.transform.map_point(clamped)
        };

        self.zoom *= factor;
        self.transform
            .post_scale_about(factor, factor, focus.x, focus.y);
        self.correct_bounds();
    }

    /// Pan the view by a screen-space delta
    ///
    /// Returns `true` if the full delta was applied, `false` if the bounds
    /// correction had to cancel part of the motion.
    pub fn translate(&mut self, dx: f64, dy: f64) -> bool {
        self.transform.post_translate(dx, dy);
        !self.correct_bounds()
    }

    /// Convert an image point to screen coordinates
    pub fn image_to_screen(&self, p: Point) -> Point {
        self.transform.map_point(p)
    }

    /// Convert a screen point to image coordinates
    ///
    /// The inverse is recomputed on demand rather than cached across
    /// mutations.
    pub fn screen_to_image(&self, p: Point) -> ViewResult<Point> {
        let inverse = self.transform.inverted()?;
        Ok(inverse.map_point(p))
    }

    /// Read access to the owned transform (for rendering)
    pub fn transform(&self) -> &Transform {
        &self.transform
    }

    /// Single-precision transform values for the render handoff
    pub fn render_values(&self) -> [f32; 9] {
        self.transform.render_values()
    }

    /// Bring the screen center back over the image if it drifted off
    ///
    /// Returns `true` if a correction was applied. The minimal image-space
    /// correction is a direction, not a position, so it converts to screen
    /// space through the linear part of the transform only.
    fn correct_bounds(&mut self) -> bool {
        let Ok(inverse) = self.transform.inverted() else {
            return false;
        };
        let in_image = inverse.map_point(self.screen_center());
        let clamped = in_image.clamped(self.image_w, self.image_h);
        if clamped == in_image {
            return false;
        }
        let (sx, sy) = self
            .transform
            .map_vector(in_image.x - clamped.x, in_image.y - clamped.y);
        self.transform.post_translate(sx, sy);
        true
    }
}
