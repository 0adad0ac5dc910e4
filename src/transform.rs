//! Affine matrices and the viewport's logical coordinate space.
//!
//! Control points, curve math and hit-testing all live in *logical* space:
//! origin at the center of the viewport, Y pointing up. The canvas draws in
//! *pixel* space: origin top-left, Y pointing down. [`Viewport::view_transform`]
//! is the single definition of the mapping between the two; the renderer
//! installs it on the surface and the engine inverts it to map pointer
//! positions back, so what is drawn and what is clickable never drift apart.

#[cfg(test)]
#[path = "transform_test.rs"]
mod transform_test;

use crate::error::CurveError;
use crate::vector::Vector;

/// A 2D affine matrix in the canvas convention:
///
/// ```text
/// | a c e |
/// | b d f |
/// | 0 0 1 |
/// ```
///
/// so that `x' = a·x + c·y + e` and `y' = b·x + d·y + f`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Affine {
    pub a: f64,
    pub b: f64,
    pub c: f64,
    pub d: f64,
    pub e: f64,
    pub f: f64,
}

impl Default for Affine {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl Affine {
    pub const IDENTITY: Self = Self { a: 1.0, b: 0.0, c: 0.0, d: 1.0, e: 0.0, f: 0.0 };

    #[allow(clippy::many_single_char_names)]
    #[must_use]
    pub const fn new(a: f64, b: f64, c: f64, d: f64, e: f64, f: f64) -> Self {
        Self { a, b, c, d, e, f }
    }

    #[must_use]
    pub const fn scaling(sx: f64, sy: f64) -> Self {
        Self { a: sx, b: 0.0, c: 0.0, d: sy, e: 0.0, f: 0.0 }
    }

    #[must_use]
    pub const fn translation(tx: f64, ty: f64) -> Self {
        Self { a: 1.0, b: 0.0, c: 0.0, d: 1.0, e: tx, f: ty }
    }

    /// Matrix product `self × other`; the result applies `other` first, then `self`.
    #[must_use]
    pub fn multiply(&self, other: &Self) -> Self {
        Self {
            a: self.a * other.a + self.c * other.b,
            b: self.b * other.a + self.d * other.b,
            c: self.a * other.c + self.c * other.d,
            d: self.b * other.c + self.d * other.d,
            e: self.a * other.e + self.c * other.f + self.e,
            f: self.b * other.e + self.d * other.f + self.f,
        }
    }

    /// Post-multiply by a scale, like `ctx.scale(sx, sy)`.
    #[must_use]
    pub fn scale(&self, sx: f64, sy: f64) -> Self {
        self.multiply(&Self::scaling(sx, sy))
    }

    /// Post-multiply by a translation, like `ctx.translate(tx, ty)`.
    #[must_use]
    pub fn translate(&self, tx: f64, ty: f64) -> Self {
        self.multiply(&Self::translation(tx, ty))
    }

    #[must_use]
    pub fn determinant(&self) -> f64 {
        self.a * self.d - self.b * self.c
    }

    /// The matrix that undoes `self`.
    ///
    /// # Errors
    ///
    /// Returns [`CurveError::SingularTransform`] if the determinant is zero or not finite.
    #[allow(clippy::many_single_char_names)]
    pub fn inverse(&self) -> Result<Self, CurveError> {
        let det = self.determinant();
        if det == 0.0 || !det.is_finite() {
            return Err(CurveError::SingularTransform(det));
        }
        let a = self.d / det;
        let b = -self.b / det;
        let c = -self.c / det;
        let d = self.a / det;
        Ok(Self { a, b, c, d, e: -(a * self.e + c * self.f), f: -(b * self.e + d * self.f) })
    }

    #[must_use]
    pub fn apply(&self, p: Vector) -> Vector {
        Vector::new(self.a * p.x + self.c * p.y + self.e, self.b * p.x + self.d * p.y + self.f)
    }
}

/// Axis-aligned rectangle in logical space.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bounds {
    pub min: Vector,
    pub max: Vector,
}

impl Bounds {
    #[must_use]
    pub fn width(&self) -> f64 {
        self.max.x - self.min.x
    }

    #[must_use]
    pub fn height(&self) -> f64 {
        self.max.y - self.min.y
    }
}

/// Size of the drawing area in CSS pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    pub width: f64,
    pub height: f64,
}

impl Viewport {
    #[must_use]
    pub const fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    /// The logical rectangle covered by the viewport, centered on the origin.
    #[must_use]
    pub fn logical_bounds(&self) -> Bounds {
        let hw = self.width / 2.0;
        let hh = self.height / 2.0;
        Bounds { min: Vector::new(-hw, -hh), max: Vector::new(hw, hh) }
    }

    /// Logical → pixel: flip Y, then move the origin to the viewport center.
    ///
    /// Equivalent to `ctx.scale(1, -1); ctx.translate(w/2, -h/2)`, i.e.
    /// `x' = x + w/2` and `y' = h/2 - y`.
    #[must_use]
    pub fn view_transform(&self) -> Affine {
        Affine::IDENTITY.scale(1.0, -1.0).translate(self.width / 2.0, -self.height / 2.0)
    }

    /// Pixel → logical, for mapping pointer positions before hit-testing.
    ///
    /// # Errors
    ///
    /// Propagates [`Affine::inverse`]. The view transform has determinant -1,
    /// so this does not fail for any viewport.
    pub fn inverse_view_transform(&self) -> Result<Affine, CurveError> {
        self.view_transform().inverse()
    }

    /// Initial control points, spread proportionally to the viewport so the
    /// cubic starts out as a symmetric S-curve.
    #[must_use]
    pub fn default_control_points(&self) -> [Vector; 4] {
        let (w, h) = (self.width, self.height);
        [
            Vector::new(-w / 4.0, 0.0),
            Vector::new(0.0, 1.5 * h / 4.0),
            Vector::new(0.0, -1.5 * h / 4.0),
            Vector::new(w / 4.0, 0.0),
        ]
    }
}
