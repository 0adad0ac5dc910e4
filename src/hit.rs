#[cfg(test)]
#[path = "hit_test.rs"]
mod hit_test;

use crate::vector::Vector;

/// Whether `pointer` lies strictly inside the grab radius of `point`.
#[must_use]
pub fn hits(point: Vector, pointer: Vector, radius: f64) -> bool {
    point.distance(pointer) < radius
}

/// Index of the control point under `pointer`, if any.
///
/// Both vectors must be in logical space. When several points are within
/// `radius`, the one with the highest index wins: later points are drawn on
/// top, so the grabbed point is the one the user sees.
#[must_use]
pub fn hit_test(points: &[Vector], pointer: Vector, radius: f64) -> Option<usize> {
    points.iter().rposition(|p| hits(*p, pointer, radius))
}
