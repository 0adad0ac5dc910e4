//! Control points: the user-draggable positions that define the curve.
//!
//! A [`ControlPoint`] wraps a [`Vector`] rather than extending it. The vector
//! stays an immutable value for the curve math; the wrapper adds in-place
//! repositioning and drawing.

#[cfg(test)]
#[path = "control_test.rs"]
mod control_test;

use crate::consts::OUTLINE_COLOR;
use crate::surface::{FULL_TURN, Surface};
use crate::vector::Vector;

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ControlPoint {
    pos: Vector,
}

impl ControlPoint {
    #[must_use]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { pos: Vector::new(x, y) }
    }

    #[must_use]
    pub fn position(&self) -> Vector {
        self.pos
    }

    /// Move the point. No bounds are enforced.
    pub fn set_position(&mut self, pos: Vector) {
        self.pos = pos;
    }

    /// Draw as a filled circle with a solid outline.
    ///
    /// # Errors
    ///
    /// Propagates surface failures.
    pub fn draw<S: Surface>(&self, surface: &mut S, radius: f64, color: &str, outline_width: f64) -> Result<(), S::Error> {
        draw_dot(surface, self.pos, radius, color, outline_width)
    }
}

impl From<Vector> for ControlPoint {
    fn from(pos: Vector) -> Self {
        Self { pos }
    }
}

/// Filled circle at `center` with a solid white outline.
///
/// Shared by control points and construction points so both read the same.
///
/// # Errors
///
/// Propagates surface failures.
pub fn draw_dot<S: Surface>(
    surface: &mut S,
    center: Vector,
    radius: f64,
    color: &str,
    outline_width: f64,
) -> Result<(), S::Error> {
    surface.set_line_dash(&[])?;
    surface.set_fill_color(color);
    surface.set_stroke_color(OUTLINE_COLOR);
    surface.set_line_width(outline_width);
    surface.begin_path();
    surface.arc(center, radius, 0.0, FULL_TURN)?;
    surface.close_path();
    surface.fill();
    surface.stroke();
    Ok(())
}
