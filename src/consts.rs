//! Shared numeric constants for the visualizer.

// ── Curve ───────────────────────────────────────────────────────

/// Most control points a supported curve uses (a cubic Bézier).
pub const MAX_CONTROL_POINTS: usize = 4;

// ── Hit-testing ─────────────────────────────────────────────────

/// Logical-space radius within which the pointer grabs a control point.
pub const HIT_RADIUS: f64 = 10.0;

/// Construction points are drawn at this fraction of the hit radius.
pub const CONSTRUCTION_RADIUS_FACTOR: f64 = 0.7;

/// The hovered control point is redrawn at this multiple of the hit radius.
pub const HOVER_RADIUS_FACTOR: f64 = 1.5;

// ── Strokes ─────────────────────────────────────────────────────

/// Width of the curve stroke.
pub const CURVE_WIDTH: f64 = 3.0;

/// Width of the white outline around every drawn point.
pub const OUTLINE_WIDTH: f64 = 2.0;

/// Width of the dashed construction polylines.
pub const CONSTRUCTION_WIDTH: f64 = 2.0;

/// Opacity of the construction block.
pub const CONSTRUCTION_ALPHA: f64 = 0.5;

/// Dash segment length for construction polylines.
pub const CONSTRUCTION_DASH: f64 = 10.0;

// ── Colors ──────────────────────────────────────────────────────

pub const BACKGROUND_COLOR: &str = "#222";
pub const CURVE_COLOR: &str = "#FFF";
pub const OUTLINE_COLOR: &str = "#FFF";
pub const CONSTRUCTION_COLOR: &str = "#999";
pub const ENDPOINT_COLOR: &str = "#909";
pub const INTERIOR_COLOR: &str = "#666";
pub const HOVER_COLOR: &str = "#F00";

/// Per-level point colors. Level 0 is the control polygon and is never drawn
/// with this palette; levels 1..=3 are lavender, pink and red.
pub const LEVEL_COLORS: [&str; MAX_CONTROL_POINTS] = ["#FFF", "#BD9CC2", "#E04EA0", "#FF0000"];
