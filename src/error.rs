//! Error types for curve construction, configuration and rendering.

use std::fmt::Debug;

/// Invalid configuration or host input.
#[derive(Debug, thiserror::Error)]
pub enum CurveError {
    #[error("unsupported curve order: {0} control points (expected 2, 3 or 4)")]
    UnsupportedOrder(usize),
    #[error("curve of order {order} needs {order} control points, got {got}")]
    MissingControlPoints { order: usize, got: usize },
    #[error("invalid curve selector value: {0:?}")]
    InvalidSelector(String),
    #[error("invalid parameter value: {0:?}")]
    InvalidParam(String),
    #[error("transform is not invertible (determinant {0})")]
    SingularTransform(f64),
    #[error("settings parse error: {0}")]
    Settings(#[from] serde_json::Error),
    #[error("invalid setting {name}: {reason}")]
    InvalidSetting { name: &'static str, reason: String },
}

/// Failure while drawing a frame.
///
/// `E` is the drawing surface's own error type (`JsValue` for the browser context).
#[derive(Debug, thiserror::Error)]
pub enum RenderError<E: Debug> {
    #[error(transparent)]
    Curve(#[from] CurveError),
    #[error("drawing surface error: {0:?}")]
    Surface(E),
}
