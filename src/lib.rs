//! Interactive de Casteljau construction visualizer.
//!
//! This crate is compiled to WebAssembly and runs in the browser. It owns the
//! curve math and the drawing of a linear, quadratic or cubic Bézier curve
//! together with every intermediate level of the de Casteljau construction.
//! The host page only wires DOM events (order selector, parameter slider,
//! "show construction" checkbox, pointer events) to the engine and hands it a
//! 2D context to draw on.
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`engine`] | Top-level engine and testable [`engine::EngineCore`] |
//! | [`curve`] | Curve order and the de Casteljau reduction |
//! | [`vector`] | Immutable 2D vector arithmetic |
//! | [`control`] | Mutable, drawable control points |
//! | [`transform`] | Affine matrices and the viewport's logical coordinate space |
//! | [`hit`] | Hit-testing control points against the pointer |
//! | [`input`] | Input event types and the drag state machine |
//! | [`surface`] | Drawing surface abstraction over the 2D context |
//! | [`render`] | Scene rendering |
//! | [`settings`] | Radii, widths and colors, loadable from JSON |
//! | [`error`] | Error types |
//! | [`consts`] | Shared numeric constants and default colors |
//! | `web` | `wasm-bindgen` exports (feature `browser`) |

pub mod consts;
pub mod control;
pub mod curve;
pub mod engine;
pub mod error;
pub mod hit;
pub mod input;
pub mod render;
pub mod settings;
pub mod surface;
pub mod transform;
pub mod vector;

#[cfg(feature = "browser")]
pub mod web;
