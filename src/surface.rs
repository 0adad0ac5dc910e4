//! Drawing surface abstraction.
//!
//! [`Surface`] is the narrow set of 2D primitives the renderer needs. The
//! browser implementation forwards to [`web_sys::CanvasRenderingContext2d`];
//! tests implement it with a recorder so draw order can be asserted without a
//! live canvas. Coordinates passed to path methods are in whatever space the
//! current transform maps from (logical space, once the renderer has installed
//! the view transform).

#[cfg(test)]
#[path = "surface_test.rs"]
pub(crate) mod surface_test;

use std::f64::consts::PI;

use wasm_bindgen::JsValue;
use web_sys::CanvasRenderingContext2d;

use crate::transform::Affine;
use crate::vector::Vector;

/// A full turn, for drawing closed circles with [`Surface::arc`].
pub const FULL_TURN: f64 = 2.0 * PI;

/// Primitive 2D drawing operations.
///
/// Only operations that can fail on the underlying surface return `Result`.
pub trait Surface {
    type Error: std::fmt::Debug;

    /// Replace the current transform.
    ///
    /// # Errors
    ///
    /// Returns the surface's error if the matrix is rejected.
    fn set_transform(&mut self, m: &Affine) -> Result<(), Self::Error>;

    fn clear_rect(&mut self, x: f64, y: f64, w: f64, h: f64);
    fn fill_rect(&mut self, x: f64, y: f64, w: f64, h: f64);

    fn set_fill_color(&mut self, color: &str);
    fn set_stroke_color(&mut self, color: &str);
    fn set_line_width(&mut self, width: f64);
    fn set_global_alpha(&mut self, alpha: f64);

    /// Set the dash pattern; an empty slice means a solid line.
    ///
    /// # Errors
    ///
    /// Returns the surface's error if the pattern is rejected.
    fn set_line_dash(&mut self, segments: &[f64]) -> Result<(), Self::Error>;

    fn begin_path(&mut self);
    fn close_path(&mut self);
    fn move_to(&mut self, p: Vector);
    fn line_to(&mut self, p: Vector);
    fn quadratic_curve_to(&mut self, ctrl: Vector, end: Vector);
    fn bezier_curve_to(&mut self, ctrl1: Vector, ctrl2: Vector, end: Vector);

    /// Add a circular arc to the current path.
    ///
    /// # Errors
    ///
    /// Returns the surface's error for a negative radius.
    fn arc(&mut self, center: Vector, radius: f64, start: f64, end: f64) -> Result<(), Self::Error>;

    fn stroke(&mut self);
    fn fill(&mut self);
}

impl Surface for CanvasRenderingContext2d {
    type Error = JsValue;

    fn set_transform(&mut self, m: &Affine) -> Result<(), JsValue> {
        CanvasRenderingContext2d::set_transform(self, m.a, m.b, m.c, m.d, m.e, m.f)
    }

    fn clear_rect(&mut self, x: f64, y: f64, w: f64, h: f64) {
        CanvasRenderingContext2d::clear_rect(self, x, y, w, h);
    }

    fn fill_rect(&mut self, x: f64, y: f64, w: f64, h: f64) {
        CanvasRenderingContext2d::fill_rect(self, x, y, w, h);
    }

    fn set_fill_color(&mut self, color: &str) {
        self.set_fill_style_str(color);
    }

    fn set_stroke_color(&mut self, color: &str) {
        self.set_stroke_style_str(color);
    }

    fn set_line_width(&mut self, width: f64) {
        CanvasRenderingContext2d::set_line_width(self, width);
    }

    fn set_global_alpha(&mut self, alpha: f64) {
        CanvasRenderingContext2d::set_global_alpha(self, alpha);
    }

    fn set_line_dash(&mut self, segments: &[f64]) -> Result<(), JsValue> {
        let pattern: js_sys::Array = segments.iter().copied().map(JsValue::from_f64).collect();
        CanvasRenderingContext2d::set_line_dash(self, &pattern)
    }

    fn begin_path(&mut self) {
        CanvasRenderingContext2d::begin_path(self);
    }

    fn close_path(&mut self) {
        CanvasRenderingContext2d::close_path(self);
    }

    fn move_to(&mut self, p: Vector) {
        CanvasRenderingContext2d::move_to(self, p.x, p.y);
    }

    fn line_to(&mut self, p: Vector) {
        CanvasRenderingContext2d::line_to(self, p.x, p.y);
    }

    fn quadratic_curve_to(&mut self, ctrl: Vector, end: Vector) {
        CanvasRenderingContext2d::quadratic_curve_to(self, ctrl.x, ctrl.y, end.x, end.y);
    }

    fn bezier_curve_to(&mut self, ctrl1: Vector, ctrl2: Vector, end: Vector) {
        CanvasRenderingContext2d::bezier_curve_to(self, ctrl1.x, ctrl1.y, ctrl2.x, ctrl2.y, end.x, end.y);
    }

    fn arc(&mut self, center: Vector, radius: f64, start: f64, end: f64) -> Result<(), JsValue> {
        CanvasRenderingContext2d::arc(self, center.x, center.y, radius, start, end)
    }

    fn stroke(&mut self) {
        CanvasRenderingContext2d::stroke(self);
    }

    fn fill(&mut self) {
        CanvasRenderingContext2d::fill(self);
    }
}

