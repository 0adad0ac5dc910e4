//! Curve order and the de Casteljau reduction.
//!
//! For `n` control points the construction has `n` levels. Level 0 is the
//! control points themselves; level `k` has `n - k` points, each interpolated
//! at `t` between neighbours of level `k - 1`. The single point of the last
//! level is the curve point at `t`. Every level is kept because the renderer
//! draws them all, not just the final point.
//!
//! Levels are derived data: they are recomputed from the control points on
//! every frame and never cached across calls.

#[cfg(test)]
#[path = "curve_test.rs"]
mod curve_test;

use std::fmt;
use std::str::FromStr;

use crate::error::CurveError;
use crate::vector::Vector;

/// Supported curve orders, named by the number of control points they use.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum CurveOrder {
    /// Two points: a straight segment.
    Linear,
    /// Three points: a quadratic Bézier.
    Quadratic,
    /// Four points: a cubic Bézier.
    #[default]
    Cubic,
}

impl CurveOrder {
    pub const ALL: [Self; 3] = [Self::Linear, Self::Quadratic, Self::Cubic];

    /// Number of control points the curve uses.
    #[must_use]
    pub const fn point_count(self) -> usize {
        match self {
            Self::Linear => 2,
            Self::Quadratic => 3,
            Self::Cubic => 4,
        }
    }
}

impl TryFrom<usize> for CurveOrder {
    type Error = CurveError;

    fn try_from(n: usize) -> Result<Self, CurveError> {
        Self::ALL
            .into_iter()
            .find(|order| order.point_count() == n)
            .ok_or(CurveError::UnsupportedOrder(n))
    }
}

/// Parses the order selector's value (`"2"`, `"3"` or `"4"`).
impl FromStr for CurveOrder {
    type Err = CurveError;

    fn from_str(raw: &str) -> Result<Self, CurveError> {
        let n = raw
            .trim()
            .parse::<usize>()
            .map_err(|_| CurveError::InvalidSelector(raw.to_owned()))?;
        Self::try_from(n)
    }
}

impl fmt::Display for CurveOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.point_count())
    }
}

/// All levels of one de Casteljau evaluation.
#[derive(Debug, Clone, PartialEq)]
pub struct Construction {
    order: CurveOrder,
    t: f64,
    levels: Vec<Vec<Vector>>,
}

impl Construction {
    /// Reduce `points` at parameter `t`. The point count selects the order.
    ///
    /// `t` is not clamped; values outside `[0, 1]` extrapolate the curve.
    ///
    /// # Errors
    ///
    /// Returns [`CurveError::UnsupportedOrder`] unless there are 2, 3 or 4 points.
    pub fn new(points: &[Vector], t: f64) -> Result<Self, CurveError> {
        let order = CurveOrder::try_from(points.len())?;
        Self::for_order(order, points, t)
    }

    /// Reduce the first `order.point_count()` of `points` at `t`, ignoring the rest.
    ///
    /// # Errors
    ///
    /// Returns [`CurveError::MissingControlPoints`] if fewer points are supplied
    /// than the order needs.
    pub fn for_order(order: CurveOrder, points: &[Vector], t: f64) -> Result<Self, CurveError> {
        let n = order.point_count();
        let Some(base) = points.get(..n) else {
            return Err(CurveError::MissingControlPoints { order: n, got: points.len() });
        };

        let mut levels = Vec::with_capacity(n);
        let mut current = base.to_vec();
        for _ in 1..n {
            let next = reduce(&current, t);
            levels.push(current);
            current = next;
        }
        levels.push(current);
        Ok(Self { order, t, levels })
    }

    #[must_use]
    pub fn t(&self) -> f64 {
        self.t
    }

    #[must_use]
    pub fn order(&self) -> CurveOrder {
        self.order
    }

    /// Every level, level 0 first.
    #[must_use]
    pub fn levels(&self) -> &[Vec<Vector>] {
        &self.levels
    }

    #[must_use]
    pub fn level(&self, k: usize) -> Option<&[Vector]> {
        self.levels.get(k).map(Vec::as_slice)
    }

    /// The control points (level 0).
    #[must_use]
    pub fn control_points(&self) -> &[Vector] {
        self.level(0).unwrap_or_default()
    }

    /// The point on the curve at `t` (the single point of the last level).
    #[must_use]
    pub fn point(&self) -> Vector {
        self.levels
            .last()
            .and_then(|level| level.first())
            .copied()
            .unwrap_or_default()
    }
}

/// One reduction step: interpolate each neighbouring pair at `t`.
#[must_use]
pub fn reduce(level: &[Vector], t: f64) -> Vec<Vector> {
    level.windows(2).map(|pair| pair[0].lerp(pair[1], t)).collect()
}

/// Parse the parameter slider's value.
///
/// Values outside `[0, 1]` are accepted; the slider never produces them, and
/// the reduction extrapolates for them.
///
/// # Errors
///
/// Returns [`CurveError::InvalidParam`] if the string is not a finite number.
pub fn parse_param(raw: &str) -> Result<f64, CurveError> {
    match raw.trim().parse::<f64>() {
        Ok(t) if t.is_finite() => Ok(t),
        _ => Err(CurveError::InvalidParam(raw.to_owned())),
    }
}

/// Two-decimal label for the parameter readout.
#[must_use]
pub fn format_param(t: f64) -> String {
    format!("{t:.2}")
}
