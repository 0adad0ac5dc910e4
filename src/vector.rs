//! Immutable 2D vector arithmetic.
//!
//! [`Vector`] is a plain `Copy` value: every operation returns a new vector and
//! nothing here mutates in place. Mutable, drawable positions live in
//! [`crate::control::ControlPoint`], which wraps a `Vector`.

#[cfg(test)]
#[path = "vector_test.rs"]
mod vector_test;

use std::ops::{Add, Mul, Neg, Sub};

use serde::{Deserialize, Serialize};

use crate::transform::Affine;

/// A point or displacement in the plane.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Vector {
    pub x: f64,
    pub y: f64,
}

impl Vector {
    pub const ZERO: Self = Self { x: 0.0, y: 0.0 };

    #[must_use]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Multiply both components by `s`.
    #[must_use]
    pub fn scale(self, s: f64) -> Self {
        Self { x: self.x * s, y: self.y * s }
    }

    #[must_use]
    pub fn dot(self, other: Self) -> f64 {
        self.x * other.x + self.y * other.y
    }

    /// Euclidean length.
    #[must_use]
    pub fn length(self) -> f64 {
        self.x.hypot(self.y)
    }

    /// Euclidean distance to `other`. Never negative; zero iff the points coincide.
    #[must_use]
    pub fn distance(self, other: Self) -> f64 {
        (self - other).length()
    }

    /// `self + (other - self) * t`.
    ///
    /// `t` is not clamped: values outside `[0, 1]` extrapolate along the line
    /// through both points. Callers that need the segment must bound `t`.
    #[must_use]
    pub fn lerp(self, other: Self, t: f64) -> Self {
        Self { x: lerp(self.x, other.x, t), y: lerp(self.y, other.y, t) }
    }

    /// Apply an affine matrix (`x' = a·x + c·y + e`, `y' = b·x + d·y + f`).
    #[must_use]
    pub fn transform(self, m: &Affine) -> Self {
        m.apply(self)
    }
}

impl Add for Vector {
    type Output = Self;

    /// Componentwise sum.
    fn add(self, rhs: Self) -> Self {
        Self { x: self.x + rhs.x, y: self.y + rhs.y }
    }
}

impl Sub for Vector {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        Self { x: self.x - rhs.x, y: self.y - rhs.y }
    }
}

impl Mul<f64> for Vector {
    type Output = Self;

    fn mul(self, rhs: f64) -> Self {
        self.scale(rhs)
    }
}

impl Neg for Vector {
    type Output = Self;

    fn neg(self) -> Self {
        self.scale(-1.0)
    }
}

impl From<(f64, f64)> for Vector {
    fn from((x, y): (f64, f64)) -> Self {
        Self { x, y }
    }
}

/// Scalar linear interpolation, unclamped.
///
/// Evaluated as `a·(1 - t) + b·t` so the endpoints are reproduced exactly at
/// `t = 0` and `t = 1`.
#[must_use]
pub fn lerp(a: f64, b: f64, t: f64) -> f64 {
    a * (1.0 - t) + b * t
}

/// Inverse of [`lerp`]: the `t` at which `lerp(a, b, t) == v`.
///
/// Returns `None` when `a == b`, since every `t` (or none) maps to `v`.
#[must_use]
pub fn inv_lerp(a: f64, b: f64, v: f64) -> Option<f64> {
    let span = b - a;
    if span == 0.0 {
        return None;
    }
    Some((v - a) / span)
}
