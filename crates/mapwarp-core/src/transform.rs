//! 3x3 homogeneous 2D transform
//!
//! This module provides the double-precision projective transform used by
//! every other component:
//! - Construction primitives (identity, translate, scale/rotate/skew about a
//!   pivot)
//! - Alias-safe composition (`pre_concat` / `post_concat`)
//! - Perspective-correct point mapping
//! - Inversion via cofactor/adjugate expansion
//! - Point-correspondence solving for 0-4 point pairs
//! - Rectangle-to-rectangle fitting
//!
//! # Matrix layout
//!
//! Nine values, row-major, mapping homogeneous `(x, y, 1)`:
//! ```text
//! | SCALE_X  SKEW_X   TRANS_X |   | x |   | x' |
//! | SKEW_Y   SCALE_Y  TRANS_Y | * | y | = | y' |
//! | PERSP_0  PERSP_1  PERSP_2 |   | 1 |   | w' |
//! ```
//!
//! The transform is affine iff the bottom row is `(0, 0, 1)`; for affine
//! transforms no perspective divide is performed.
//!
//! # Precision
//!
//! All solving and inversion is done in f64. Narrowing to f32 happens only at
//! the render handoff through [`Transform::render_values`].

use crate::error::{Error, Result};
use crate::point::Point;
use crate::rect::Rect;

// ============================================================================
// Matrix indices and constants
// ============================================================================

/// Index of the horizontal scale factor
pub const SCALE_X: usize = 0;
/// Index of the horizontal skew factor
pub const SKEW_X: usize = 1;
/// Index of the horizontal translation
pub const TRANS_X: usize = 2;
/// Index of the vertical skew factor
pub const SKEW_Y: usize = 3;
/// Index of the vertical scale factor
pub const SCALE_Y: usize = 4;
/// Index of the vertical translation
pub const TRANS_Y: usize = 5;
/// Index of the first perspective term
pub const PERSP_0: usize = 6;
/// Index of the second perspective term
pub const PERSP_1: usize = 7;
/// Index of the homogeneous scale term
pub const PERSP_2: usize = 8;

/// Determinant threshold below which a matrix is treated as singular.
///
/// The threshold is relative: the determinant is compared against
/// `DET_EPSILON` times the product of the row maxima (a Hadamard-style
/// bound), so uniformly scaling a matrix does not change whether it inverts.
pub const DET_EPSILON: f64 = 1e-12;

/// Denominator threshold for the 4-point correspondence solve.
///
/// A denominator at or below this magnitude is treated as zero and the
/// solve fails, letting the caller retry with 3 points.
pub const SOLVE_EPSILON: f64 = 1e-12;

/// Below this magnitude the homogeneous `w` is not divided through.
///
/// Mapping a point onto the horizon line of a perspective transform produces
/// a `w` of (near) zero; leaving the numerators undivided keeps the result
/// finite instead of propagating infinities into the viewport math.
pub const PERSPECTIVE_W_EPS: f64 = 1e-12;

const IDENTITY_VALUES: [f64; 9] = [1.0, 0.0, 0.0, 0.0, 1.0, 0.0, 0.0, 0.0, 1.0];

// ============================================================================
// Transform
// ============================================================================

/// A double-precision 3x3 homogeneous 2D transform
///
/// Plain value type: `Clone` produces an independent deep copy, and the
/// composition methods never alias another transform's storage (arguments
/// are read fully into temporaries before the receiver is written).
#[derive(Debug, Clone, PartialEq)]
pub struct Transform {
    m: [f64; 9],
}

impl Default for Transform {
    fn default() -> Self {
        Self::identity()
    }
}

impl Transform {
    /// Create the identity transform
    pub const fn identity() -> Self {
        Self { m: IDENTITY_VALUES }
    }

    /// Create from raw row-major values
    pub const fn from_values(m: [f64; 9]) -> Self {
        Self { m }
    }

    /// Get the raw row-major values
    ///
    /// The returned array is bit-exact across calls; consumers persisting it
    /// must preserve row-major ordering and the 9-element length.
    pub fn values(&self) -> [f64; 9] {
        self.m
    }

    /// Replace all nine values at once
    pub fn set_values(&mut self, m: [f64; 9]) {
        self.m = m;
    }

    /// Narrow to single precision for the render-matrix handoff
    ///
    /// This is the only place the engine leaves double precision.
    pub fn render_values(&self) -> [f32; 9] {
        let mut out = [0.0f32; 9];
        for (o, v) in out.iter_mut().zip(self.m.iter()) {
            *o = *v as f32;
        }
        out
    }

    /// True iff this equals the identity matrix exactly
    pub fn is_identity(&self) -> bool {
        self.m == IDENTITY_VALUES
    }

    /// True iff the bottom row is exactly `(0, 0, 1)`
    pub fn is_affine(&self) -> bool {
        self.m[PERSP_0] == 0.0 && self.m[PERSP_1] == 0.0 && self.m[PERSP_2] == 1.0
    }

    // ------------------------------------------------------------------
    // Construction primitives (each resets the instance)
    // ------------------------------------------------------------------

    /// Reset to the identity transform
    pub fn reset(&mut self) {
        self.m = IDENTITY_VALUES;
    }

    /// Reset to a pure translation
    pub fn set_translate(&mut self, tx: f64, ty: f64) {
        self.m = [1.0, 0.0, tx, 0.0, 1.0, ty, 0.0, 0.0, 1.0];
    }

    /// Reset to a scale about the origin
    pub fn set_scale(&mut self, sx: f64, sy: f64) {
        self.m = [sx, 0.0, 0.0, 0.0, sy, 0.0, 0.0, 0.0, 1.0];
    }

    /// Reset to a scale about the pivot `(px, py)`
    ///
    /// The pivot point is invariant under the resulting transform.
    pub fn set_scale_about(&mut self, sx: f64, sy: f64, px: f64, py: f64) {
        self.m = [
            sx,
            0.0,
            px - sx * px,
            0.0,
            sy,
            py - sy * py,
            0.0,
            0.0,
            1.0,
        ];
    }

    /// Reset to a rotation about the origin
    ///
    /// Positive angles rotate clockwise in the y-down pixel coordinate
    /// convention used throughout.
    pub fn set_rotate(&mut self, degrees: f64) {
        let (s, c) = degrees.to_radians().sin_cos();
        self.set_sin_cos(s, c, 0.0, 0.0);
    }

    /// Reset to a rotation about the pivot `(px, py)`
    pub fn set_rotate_about(&mut self, degrees: f64, px: f64, py: f64) {
        let (s, c) = degrees.to_radians().sin_cos();
        self.set_sin_cos(s, c, px, py);
    }

    /// Reset to a rotation given precomputed sin/cos, about `(px, py)`
    pub fn set_sin_cos(&mut self, s: f64, c: f64, px: f64, py: f64) {
        self.m = [
            c,
            -s,
            s * py + (1.0 - c) * px,
            s,
            c,
            -s * px + (1.0 - c) * py,
            0.0,
            0.0,
            1.0,
        ];
    }

    /// Reset to a skew about the origin
    pub fn set_skew(&mut self, kx: f64, ky: f64) {
        self.m = [1.0, kx, 0.0, ky, 1.0, 0.0, 0.0, 0.0, 1.0];
    }

    /// Reset to a skew about the pivot `(px, py)`
    pub fn set_skew_about(&mut self, kx: f64, ky: f64, px: f64, py: f64) {
        self.m = [1.0, kx, -kx * py, ky, 1.0, -ky * px, 0.0, 0.0, 1.0];
    }

    // ------------------------------------------------------------------
    // Composition
    // ------------------------------------------------------------------

    /// Compose so that `other` applies first: `self' = self ∘ other`
    ///
    /// Safe to call with `other` aliasing `self` (the product is computed
    /// into a temporary before assignment).
    pub fn pre_concat(&mut self, other: &Transform) {
        self.m = concat(&self.m, &other.m);
    }

    /// Compose so that `other` applies after: `self' = other ∘ self`
    pub fn post_concat(&mut self, other: &Transform) {
        self.m = concat(&other.m, &self.m);
    }

    /// Translate in the source space (applies before this transform)
    pub fn pre_translate(&mut self, tx: f64, ty: f64) {
        let mut t = Transform::identity();
        t.set_translate(tx, ty);
        self.pre_concat(&t);
    }

    /// Translate in the destination space (applies after this transform)
    pub fn post_translate(&mut self, tx: f64, ty: f64) {
        let mut t = Transform::identity();
        t.set_translate(tx, ty);
        self.post_concat(&t);
    }

    /// Scale in the destination space about the pivot `(px, py)`
    pub fn post_scale_about(&mut self, sx: f64, sy: f64, px: f64, py: f64) {
        let mut t = Transform::identity();
        t.set_scale_about(sx, sy, px, py);
        self.post_concat(&t);
    }

    /// Rotate in the source space about the pivot `(px, py)`
    pub fn pre_rotate_about(&mut self, degrees: f64, px: f64, py: f64) {
        let mut t = Transform::identity();
        t.set_rotate_about(degrees, px, py);
        self.pre_concat(&t);
    }

    /// Rotate in the destination space about the pivot `(px, py)`
    pub fn post_rotate_about(&mut self, degrees: f64, px: f64, py: f64) {
        let mut t = Transform::identity();
        t.set_rotate_about(degrees, px, py);
        self.post_concat(&t);
    }

    // ------------------------------------------------------------------
    // Point mapping
    // ------------------------------------------------------------------

    /// Map a single point
    pub fn map_point(&self, p: Point) -> Point {
        let m = &self.m;
        let x = m[SCALE_X] * p.x + m[SKEW_X] * p.y + m[TRANS_X];
        let y = m[SKEW_Y] * p.x + m[SCALE_Y] * p.y + m[TRANS_Y];
        if self.is_affine() {
            return Point::new(x, y);
        }
        let w = m[PERSP_0] * p.x + m[PERSP_1] * p.y + m[PERSP_2];
        if w.abs() <= PERSPECTIVE_W_EPS {
            // Point sits on the horizon line; leave undivided.
            Point::new(x, y)
        } else {
            Point::new(x / w, y / w)
        }
    }

    /// Map a slice of points in place
    pub fn map_points(&self, pts: &mut [Point]) {
        for p in pts.iter_mut() {
            *p = self.map_point(*p);
        }
    }

    /// Map points from `src` into `dst`
    ///
    /// # Errors
    ///
    /// Fails fast if the slices differ in length; `dst` is untouched.
    pub fn map_points_to(&self, src: &[Point], dst: &mut [Point]) -> Result<()> {
        if src.len() != dst.len() {
            return Err(Error::MismatchedLengths {
                src: src.len(),
                dst: dst.len(),
            });
        }
        for (d, s) in dst.iter_mut().zip(src.iter()) {
            *d = self.map_point(*s);
        }
        Ok(())
    }

    /// Map a direction vector through the linear part only
    ///
    /// Translation-invariant: useful for converting a correction direction
    /// between spaces without treating it as a position. Perspective terms
    /// are ignored (directions are only meaningful for the affine part).
    pub fn map_vector(&self, dx: f64, dy: f64) -> (f64, f64) {
        let m = &self.m;
        (
            m[SCALE_X] * dx + m[SKEW_X] * dy,
            m[SKEW_Y] * dx + m[SCALE_Y] * dy,
        )
    }

    // ------------------------------------------------------------------
    // Inversion
    // ------------------------------------------------------------------

    /// Compute the inverse transform
    ///
    /// Identity is its own inverse (fast path). Otherwise the inverse is
    /// built by cofactor/adjugate expansion: form the matrix of 2x2 minors,
    /// negate the checkerboard positions, transpose into the adjugate, and
    /// scale by the reciprocal determinant.
    ///
    /// # Errors
    ///
    /// [`Error::SingularMatrix`] if the determinant magnitude falls below
    /// the [`DET_EPSILON`] relative threshold. The receiver is not modified.
    pub fn inverted(&self) -> Result<Transform> {
        if self.is_identity() {
            return Ok(Transform::identity());
        }
        let m = &self.m;

        // Matrix of 2x2 minors, with checkerboard signs already applied
        // (cofactors), laid out in the same row-major order as the source.
        let cof = [
            m[4] * m[8] - m[5] * m[7],
            -(m[3] * m[8] - m[5] * m[6]),
            m[3] * m[7] - m[4] * m[6],
            -(m[1] * m[8] - m[2] * m[7]),
            m[0] * m[8] - m[2] * m[6],
            -(m[0] * m[7] - m[1] * m[6]),
            m[1] * m[5] - m[2] * m[4],
            -(m[0] * m[5] - m[2] * m[3]),
            m[0] * m[4] - m[1] * m[3],
        ];

        // Determinant: first row dotted with its cofactors.
        let det = m[0] * cof[0] + m[1] * cof[1] + m[2] * cof[2];

        // Hadamard bound on the determinant magnitude; a row of zeros makes
        // the bound (and the determinant) zero.
        let row_max = |r: usize| m[3 * r].abs().max(m[3 * r + 1].abs()).max(m[3 * r + 2].abs());
        if det.abs() <= DET_EPSILON * row_max(0) * row_max(1) * row_max(2) {
            return Err(Error::SingularMatrix);
        }

        // Adjugate = transposed cofactor matrix, scaled by 1/det.
        let r = 1.0 / det;
        Ok(Transform::from_values([
            cof[0] * r,
            cof[3] * r,
            cof[6] * r,
            cof[1] * r,
            cof[4] * r,
            cof[7] * r,
            cof[2] * r,
            cof[5] * r,
            cof[8] * r,
        ]))
    }

    // ------------------------------------------------------------------
    // Point-correspondence solving
    // ------------------------------------------------------------------

    /// Solve for the transform mapping each `src[i]` onto `dst[i]`
    ///
    /// Supported counts and the resulting transform class:
    /// - 0: identity
    /// - 1: pure translation
    /// - 2: rotation + uniform scale + translation (similarity)
    /// - 3: general affine
    /// - 4: full projective
    ///
    /// Built as `basis(dst) ∘ basis(src)⁻¹` where `basis(points)` maps a
    /// canonical frame onto the point set.
    ///
    /// A failed 4-point solve is reported as an error; retrying with the
    /// first 3 correspondences is deliberately left to the caller, so the
    /// fallback policy stays visible at the call site.
    ///
    /// # Errors
    ///
    /// - [`Error::MismatchedLengths`] if the slices differ in length
    /// - [`Error::PointCountOutOfRange`] for more than 4 pairs
    /// - [`Error::DegeneratePoints`] / [`Error::SingularMatrix`] when the
    ///   configuration admits no transform
    pub fn from_point_pairs(src: &[Point], dst: &[Point]) -> Result<Transform> {
        if src.len() != dst.len() {
            return Err(Error::MismatchedLengths {
                src: src.len(),
                dst: dst.len(),
            });
        }
        let count = src.len();
        if count > 4 {
            return Err(Error::PointCountOutOfRange { count, max: 4 });
        }
        match count {
            0 => Ok(Transform::identity()),
            1 => {
                let mut t = Transform::identity();
                t.set_translate(dst[0].x - src[0].x, dst[0].y - src[0].y);
                Ok(t)
            }
            _ => {
                let src_basis = basis(src)?;
                let dst_basis = basis(dst)?;
                let inv = src_basis.inverted()?;
                let mut t = dst_basis;
                t.pre_concat(&inv);
                Ok(t)
            }
        }
    }

    // ------------------------------------------------------------------
    // Rectangle fitting
    // ------------------------------------------------------------------

    /// Reset to the transform fitting `src` onto `dst`
    ///
    /// - Empty `src`: the transform becomes identity and `false` is
    ///   returned (there is nothing to fit).
    /// - Empty `dst`: the transform collapses everything to the origin
    ///   (the zero transform).
    /// - Otherwise the axis scale factors are `dst/src` per axis; for
    ///   non-[`ScaleToFit::Fill`] modes the smaller factor is used on both
    ///   axes and the leftover space along the non-dominant axis is
    ///   distributed according to the alignment mode.
    ///
    /// Returns `true` if a non-degenerate fit was produced.
    pub fn set_rect_to_rect(&mut self, src: &Rect, dst: &Rect, stf: ScaleToFit) -> bool {
        if src.is_empty() {
            self.reset();
            return false;
        }
        if dst.is_empty() {
            self.m = [0.0; 9];
            return false;
        }

        let mut sx = dst.width() / src.width();
        let mut sy = dst.height() / src.height();
        let mut x_larger = false;
        if stf != ScaleToFit::Fill {
            if sx > sy {
                x_larger = true;
                sx = sy;
            } else {
                sy = sx;
            }
        }

        let mut tx = dst.left - src.left * sx;
        let mut ty = dst.top - src.top * sy;
        if stf == ScaleToFit::Center || stf == ScaleToFit::End {
            let mut diff = if x_larger {
                dst.width() - src.width() * sy
            } else {
                dst.height() - src.height() * sy
            };
            if stf == ScaleToFit::Center {
                diff /= 2.0;
            }
            if x_larger {
                tx += diff;
            } else {
                ty += diff;
            }
        }

        self.m = [sx, 0.0, tx, 0.0, sy, ty, 0.0, 0.0, 1.0];
        true
    }
}

/// Alignment mode for [`Transform::set_rect_to_rect`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ScaleToFit {
    /// Scale each axis independently; src fills dst exactly
    Fill,
    /// Uniform scale, aligned to left/top
    Start,
    /// Uniform scale, centered
    #[default]
    Center,
    /// Uniform scale, aligned to right/bottom
    End,
}

// ============================================================================
// Internals
// ============================================================================

/// Row-major 3x3 product `a * b` (apply `b` first, then `a`)
fn concat(a: &[f64; 9], b: &[f64; 9]) -> [f64; 9] {
    let mut out = [0.0; 9];
    for row in 0..3 {
        for col in 0..3 {
            let mut sum = 0.0;
            for k in 0..3 {
                sum += a[row * 3 + k] * b[k * 3 + col];
            }
            out[row * 3 + col] = sum;
        }
    }
    out
}

/// Canonical basis transform for a 2/3/4 point set
///
/// Maps a fixed canonical frame onto the points; which frame does not matter
/// as long as source and destination sets use the same one.
fn basis(pts: &[Point]) -> Result<Transform> {
    match pts.len() {
        2 => Ok(basis2(pts)),
        3 => Ok(basis3(pts)),
        4 => basis4(pts),
        _ => unreachable!("basis called with unsupported count"),
    }
}

/// Similarity basis: first point is the origin, the vector to the second
/// point fixes rotation and uniform scale.
fn basis2(p: &[Point]) -> Transform {
    let dx = p[1].x - p[0].x;
    let dy = p[1].y - p[0].y;
    Transform::from_values([dx, -dy, p[0].x, dy, dx, p[0].y, 0.0, 0.0, 1.0])
}

/// Affine basis: first point is the origin, the vectors to the second and
/// third points are the two basis axes.
fn basis3(p: &[Point]) -> Transform {
    Transform::from_values([
        p[1].x - p[0].x,
        p[2].x - p[0].x,
        p[0].x,
        p[1].y - p[0].y,
        p[2].y - p[0].y,
        p[0].y,
        0.0,
        0.0,
        1.0,
    ])
}

/// Projective basis for four points
///
/// Solves, relative to `p[2]` as reference, two scalar perspective
/// coefficients from the linear relations among the differences
/// `p[2]-p[0]`, `p[2]-p[1]`, `p[2]-p[3]`. Each coefficient has two
/// algebraically equivalent formulas differing in which delta component is
/// divided by; the one with the larger-magnitude divisor is chosen, and the
/// solve fails if the resulting denominator is (numerically) zero.
fn basis4(p: &[Point]) -> Result<Transform> {
    let d0x = p[2].x - p[0].x;
    let d0y = p[2].y - p[0].y;
    let d1x = p[2].x - p[1].x;
    let d1y = p[2].y - p[1].y;
    let d3x = p[2].x - p[3].x;
    let d3y = p[2].y - p[3].y;

    // Coincident reference points leave both candidate divisors zero.
    if d1x.abs().max(d1y.abs()) <= SOLVE_EPSILON || d3x.abs().max(d3y.abs()) <= SOLVE_EPSILON {
        return Err(Error::DegeneratePoints);
    }

    // v = 1 + a1: eliminate the other unknown by dividing through the
    // larger component of the p[2]-p[3] delta.
    let v = if d3x.abs() > d3y.abs() {
        let denom = d1y - d1x * d3y / d3x;
        if denom.abs() <= SOLVE_EPSILON {
            return Err(Error::DegeneratePoints);
        }
        (d0y - d0x * d3y / d3x) / denom
    } else {
        let denom = d1x - d1y * d3x / d3y;
        if denom.abs() <= SOLVE_EPSILON {
            return Err(Error::DegeneratePoints);
        }
        (d0x - d0y * d3x / d3y) / denom
    };

    // u = 1 + a2: same elimination against the p[2]-p[1] delta.
    let u = if d1x.abs() > d1y.abs() {
        let denom = d3y - d3x * d1y / d1x;
        if denom.abs() <= SOLVE_EPSILON {
            return Err(Error::DegeneratePoints);
        }
        (d0y - d0x * d1y / d1x) / denom
    } else {
        let denom = d3x - d3y * d1x / d1y;
        if denom.abs() <= SOLVE_EPSILON {
            return Err(Error::DegeneratePoints);
        }
        (d0x - d0y * d1x / d1y) / denom
    };

    Ok(Transform::from_values([
        p[3].x * u - p[0].x,
        p[1].x * v - p[0].x,
        p[0].x,
        p[3].y * u - p[0].y,
        p[1].y * v - p[0].y,
        p[0].y,
        u - 1.0,
        v - 1.0,
        1.0,
    ]))
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f64 = 1e-9;

    fn assert_point_near(a: Point, b: Point, eps: f64) {
        assert!(
            (a.x - b.x).abs() < eps && (a.y - b.y).abs() < eps,
            "points differ: ({}, {}) vs ({}, {})",
            a.x,
            a.y,
            b.x,
            b.y
        );
    }

    #[test]
    fn test_identity_maps_points_unchanged() {
        let t = Transform::identity();
        assert!(t.is_identity());
        assert!(t.is_affine());
        let p = Point::new(12.5, -7.25);
        assert_eq!(t.map_point(p), p);
    }

    #[test]
    fn test_translate() {
        let mut t = Transform::identity();
        t.set_translate(10.0, -5.0);
        assert_point_near(t.map_point(Point::new(1.0, 2.0)), Point::new(11.0, -3.0), EPS);
    }

    #[test]
    fn test_scale_about_pivot_is_invariant() {
        let mut t = Transform::identity();
        t.set_scale_about(2.0, 3.0, 50.0, 60.0);
        assert_point_near(t.map_point(Point::new(50.0, 60.0)), Point::new(50.0, 60.0), EPS);
        assert_point_near(t.map_point(Point::new(51.0, 61.0)), Point::new(52.0, 63.0), EPS);
    }

    #[test]
    fn test_rotate_90_clockwise() {
        let mut t = Transform::identity();
        t.set_rotate(90.0);
        // y-down convention: (1, 0) rotates clockwise onto (0, 1)
        assert_point_near(t.map_point(Point::new(1.0, 0.0)), Point::new(0.0, 1.0), EPS);
    }

    #[test]
    fn test_rotate_about_pivot_is_invariant() {
        let mut t = Transform::identity();
        t.set_rotate_about(37.0, 10.0, 20.0);
        assert_point_near(t.map_point(Point::new(10.0, 20.0)), Point::new(10.0, 20.0), EPS);
    }

    #[test]
    fn test_skew_about_pivot_is_invariant() {
        let mut t = Transform::identity();
        t.set_skew_about(0.5, 0.25, 7.0, 3.0);
        assert_point_near(t.map_point(Point::new(7.0, 3.0)), Point::new(7.0, 3.0), EPS);
    }

    #[test]
    fn test_concat_order() {
        // post_concat applies the argument after: (A.post_concat(B)).map(p)
        // == B.map(A.map(p))
        let mut a = Transform::identity();
        a.set_rotate(30.0);
        let mut b = Transform::identity();
        b.set_translate(5.0, -2.0);

        let p = Point::new(3.0, 4.0);
        let expected = b.map_point(a.map_point(p));

        let mut ab = a.clone();
        ab.post_concat(&b);
        assert_point_near(ab.map_point(p), expected, EPS);

        // pre_concat applies the argument first
        let mut ba = b.clone();
        ba.pre_concat(&a);
        assert_point_near(ba.map_point(p), expected, EPS);
    }

    #[test]
    fn test_self_aliasing_concat() {
        let mut t = Transform::identity();
        t.set_rotate_about(45.0, 3.0, 3.0);
        let squared_expected = {
            let mut e = Transform::identity();
            e.set_rotate_about(90.0, 3.0, 3.0);
            e
        };
        let alias = t.clone();
        t.pre_concat(&alias);
        let p = Point::new(10.0, -4.0);
        assert_point_near(t.map_point(p), squared_expected.map_point(p), EPS);
    }

    #[test]
    fn test_invert_round_trip() {
        let mut t = Transform::identity();
        t.set_rotate_about(23.0, 5.0, -2.0);
        t.post_scale_about(1.7, 0.6, 10.0, 10.0);
        t.post_translate(-40.0, 13.0);

        let inv = t.inverted().expect("invertible");
        let mut round = t.clone();
        round.post_concat(&inv);
        let p = Point::new(123.0, -456.0);
        assert_point_near(round.map_point(p), p, 1e-6);

        let twice = inv.inverted().expect("invertible");
        assert_point_near(twice.map_point(p), t.map_point(p), 1e-6);
    }

    #[test]
    fn test_invert_singular_fails() {
        let mut t = Transform::identity();
        t.set_scale(0.0, 1.0);
        assert!(matches!(t.inverted(), Err(Error::SingularMatrix)));
    }

    #[test]
    fn test_invert_scale_invariance() {
        // A tiny but well-conditioned matrix must still invert: the
        // singularity threshold is relative, not absolute.
        let mut t = Transform::identity();
        t.set_scale(1e-8, 1e-8);
        assert!(t.inverted().is_ok());
    }

    #[test]
    fn test_solve_zero_points_is_identity() {
        let t = Transform::from_point_pairs(&[], &[]).unwrap();
        assert!(t.is_identity());
    }

    #[test]
    fn test_solve_one_point_is_translation() {
        let src = [Point::new(10.0, 20.0)];
        let dst = [Point::new(13.0, 17.0)];
        let t = Transform::from_point_pairs(&src, &dst).unwrap();
        let mut expected = Transform::identity();
        expected.set_translate(3.0, -3.0);
        assert_eq!(t.values(), expected.values());
    }

    #[test]
    fn test_solve_two_points_similarity() {
        let src = [Point::new(0.0, 0.0), Point::new(1.0, 0.0)];
        let dst = [Point::new(5.0, 5.0), Point::new(5.0, 7.0)];
        let t = Transform::from_point_pairs(&src, &dst).unwrap();
        for i in 0..2 {
            assert_point_near(t.map_point(src[i]), dst[i], 1e-9);
        }
        assert!(t.is_affine());
    }

    #[test]
    fn test_solve_three_points_affine() {
        let src = [
            Point::new(0.0, 0.0),
            Point::new(100.0, 0.0),
            Point::new(0.0, 50.0),
        ];
        let dst = [
            Point::new(10.0, 10.0),
            Point::new(210.0, 30.0),
            Point::new(-5.0, 110.0),
        ];
        let t = Transform::from_point_pairs(&src, &dst).unwrap();
        for i in 0..3 {
            assert_point_near(t.map_point(src[i]), dst[i], 1e-9);
        }
        assert!(t.is_affine());
    }

    #[test]
    fn test_solve_four_points_projective() {
        let src = [
            Point::new(0.0, 0.0),
            Point::new(100.0, 0.0),
            Point::new(100.0, 100.0),
            Point::new(0.0, 100.0),
        ];
        // Keystone distortion: top edge narrower than bottom
        let dst = [
            Point::new(20.0, 0.0),
            Point::new(80.0, 0.0),
            Point::new(100.0, 100.0),
            Point::new(0.0, 100.0),
        ];
        let t = Transform::from_point_pairs(&src, &dst).unwrap();
        assert!(!t.is_affine());
        for i in 0..4 {
            assert_point_near(t.map_point(src[i]), dst[i], 1e-7);
        }
    }

    #[test]
    fn test_solve_four_points_degenerate_fails_three_succeeds() {
        // Three of the four sources colinear: no projective solution.
        let src = [
            Point::new(0.0, 0.0),
            Point::new(50.0, 0.0),
            Point::new(100.0, 0.0),
            Point::new(0.0, 100.0),
        ];
        let dst = [
            Point::new(0.0, 0.0),
            Point::new(60.0, 5.0),
            Point::new(120.0, 10.0),
            Point::new(10.0, 90.0),
        ];
        assert!(Transform::from_point_pairs(&src, &dst).is_err());

        // Caller-side fallback: drop the last correspondence. The first
        // three sources here are colinear too, so use the first, second and
        // fourth as the distinct triple.
        let src3 = [src[0], src[1], src[3]];
        let dst3 = [dst[0], dst[1], dst[3]];
        let t = Transform::from_point_pairs(&src3, &dst3).unwrap();
        for i in 0..3 {
            assert_point_near(t.map_point(src3[i]), dst3[i], 1e-9);
        }
    }

    #[test]
    fn test_solve_rejects_bad_arguments() {
        let pts5 = [Point::default(); 5];
        assert!(matches!(
            Transform::from_point_pairs(&pts5, &pts5),
            Err(Error::PointCountOutOfRange { count: 5, max: 4 })
        ));
        let a = [Point::default(); 2];
        let b = [Point::default(); 3];
        assert!(matches!(
            Transform::from_point_pairs(&a, &b),
            Err(Error::MismatchedLengths { src: 2, dst: 3 })
        ));
    }

    #[test]
    fn test_rect_to_rect_fill() {
        let src = Rect::from_size(100.0, 50.0);
        let dst = Rect::new(10.0, 10.0, 210.0, 210.0);
        let mut t = Transform::identity();
        assert!(t.set_rect_to_rect(&src, &dst, ScaleToFit::Fill));
        assert_point_near(t.map_point(Point::new(0.0, 0.0)), Point::new(10.0, 10.0), EPS);
        assert_point_near(
            t.map_point(Point::new(100.0, 50.0)),
            Point::new(210.0, 210.0),
            EPS,
        );
    }

    #[test]
    fn test_rect_to_rect_center_uniform() {
        let src = Rect::from_size(100.0, 50.0);
        let dst = Rect::from_size(200.0, 200.0);
        let mut t = Transform::identity();
        assert!(t.set_rect_to_rect(&src, &dst, ScaleToFit::Center));
        // Uniform scale 2.0, vertical leftover (200 - 100) split evenly
        assert_point_near(t.map_point(Point::new(0.0, 0.0)), Point::new(0.0, 50.0), EPS);
        assert_point_near(
            t.map_point(Point::new(100.0, 50.0)),
            Point::new(200.0, 150.0),
            EPS,
        );
    }

    #[test]
    fn test_rect_to_rect_empty_src_is_identity() {
        let src = Rect::new(0.0, 0.0, 0.0, 0.0);
        let dst = Rect::from_size(100.0, 100.0);
        let mut t = Transform::identity();
        t.set_translate(99.0, 99.0);
        assert!(!t.set_rect_to_rect(&src, &dst, ScaleToFit::Center));
        assert!(t.is_identity());
    }

    #[test]
    fn test_rect_to_rect_empty_dst_is_zero() {
        let src = Rect::from_size(10.0, 10.0);
        let dst = Rect::new(0.0, 0.0, 0.0, 0.0);
        let mut t = Transform::identity();
        assert!(!t.set_rect_to_rect(&src, &dst, ScaleToFit::Fill));
        assert_eq!(t.values(), [0.0; 9]);
    }

    #[test]
    fn test_values_round_trip_bit_exact() {
        let vals = [1.5, -0.25, 3.0, 0.125, 2.75, -9.5, 0.001, -0.002, 1.0];
        let t = Transform::from_values(vals);
        assert_eq!(t.values(), vals);
        let mut u = Transform::identity();
        u.set_values(t.values());
        assert_eq!(u, t);
    }

    #[test]
    fn test_render_values_narrows() {
        let mut t = Transform::identity();
        t.set_translate(1.5, -2.5);
        let rv = t.render_values();
        assert_eq!(rv[TRANS_X], 1.5f32);
        assert_eq!(rv[TRANS_Y], -2.5f32);
    }

    #[test]
    fn test_map_vector_ignores_translation() {
        let mut t = Transform::identity();
        t.set_rotate(90.0);
        t.post_translate(1000.0, 1000.0);
        let (dx, dy) = t.map_vector(1.0, 0.0);
        assert!((dx - 0.0).abs() < EPS && (dy - 1.0).abs() < EPS);
    }
}
