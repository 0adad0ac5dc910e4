//! Curve engine: owns the control points and turns host input into state
//! changes, cursor updates and redraws.

use wasm_bindgen::{JsCast, JsValue};
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

use crate::consts::MAX_CONTROL_POINTS;
use crate::control::ControlPoint;
use crate::curve::{Construction, CurveOrder};
use crate::error::{CurveError, RenderError};
use crate::hit;
use crate::input::{Button, Cursor, InputState};
use crate::render::{self, Frame};
use crate::settings::Settings;
use crate::surface::Surface;
use crate::transform::Viewport;
use crate::vector::Vector;

#[cfg(test)]
#[path = "engine_test.rs"]
mod engine_test;

/// Actions returned from input handlers for the host to process.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    SetCursor(Cursor),
    RenderNeeded,
}

/// Core engine state: all logic that doesn't depend on the canvas element.
///
/// Separated from `Engine` so it can be tested without WASM/browser
/// dependencies. All four control points always exist; the curve order
/// selects how many of them are active.
#[derive(Debug, Clone)]
pub struct EngineCore {
    points: [ControlPoint; MAX_CONTROL_POINTS],
    order: CurveOrder,
    t: f64,
    show_construction: bool,
    viewport: Viewport,
    settings: Settings,
    input: InputState,
    hovered: Option<usize>,
    cursor: Cursor,
}

impl EngineCore {
    /// Start a session with the default control points for `viewport`.
    #[must_use]
    pub fn new(viewport: Viewport) -> Self {
        Self::with_settings(viewport, Settings::default())
    }

    #[must_use]
    pub fn with_settings(viewport: Viewport, settings: Settings) -> Self {
        Self {
            points: viewport.default_control_points().map(ControlPoint::from),
            order: CurveOrder::default(),
            t: 0.0,
            show_construction: true,
            viewport,
            settings,
            input: InputState::default(),
            hovered: None,
            cursor: Cursor::default(),
        }
    }

    // --- Control inputs ---

    /// Switch the curve order. Points beyond the new order are kept but ignored.
    pub fn set_order(&mut self, order: CurveOrder) -> Vec<Action> {
        log::debug!("curve order {} -> {order}", self.order);
        self.order = order;

        let n = order.point_count();
        if self.hovered.is_some_and(|i| i >= n) {
            self.hovered = None;
        }
        if self.input.dragging().is_some_and(|i| i >= n) {
            self.input = InputState::Pressed;
        }

        let mut actions = vec![Action::RenderNeeded];
        actions.extend(self.update_cursor());
        actions
    }

    /// Switch the curve order from the selector's string value.
    ///
    /// # Errors
    ///
    /// Returns [`CurveError::InvalidSelector`] or [`CurveError::UnsupportedOrder`];
    /// the current order is left unchanged.
    pub fn set_order_value(&mut self, raw: &str) -> Result<Vec<Action>, CurveError> {
        let order = raw.parse::<CurveOrder>().inspect_err(|e| log::warn!("ignoring order selector: {e}"))?;
        Ok(self.set_order(order))
    }

    /// Set the curve parameter. Values outside `[0, 1]` extrapolate.
    pub fn set_param(&mut self, t: f64) -> Vec<Action> {
        self.t = t;
        vec![Action::RenderNeeded]
    }

    pub fn set_show_construction(&mut self, show: bool) -> Vec<Action> {
        log::debug!("show construction: {show}");
        self.show_construction = show;
        vec![Action::RenderNeeded]
    }

    /// Resize the viewport. Control points keep their logical positions.
    pub fn set_viewport(&mut self, viewport: Viewport) -> Vec<Action> {
        log::debug!("viewport {}x{}", viewport.width, viewport.height);
        self.viewport = viewport;
        vec![Action::RenderNeeded]
    }

    pub fn set_settings(&mut self, settings: Settings) -> Vec<Action> {
        self.settings = settings;
        vec![Action::RenderNeeded]
    }

    /// Overwrite the position of control point `index` (logical space).
    ///
    /// Returns `false` if there is no such control point.
    pub fn move_control_point(&mut self, index: usize, pos: Vector) -> bool {
        let Some(point) = self.points.get_mut(index) else {
            return false;
        };
        point.set_position(pos);
        true
    }

    // --- Pointer input ---

    /// Map a screen-space (CSS pixel) position into logical space.
    ///
    /// # Errors
    ///
    /// Propagates [`Viewport::inverse_view_transform`].
    pub fn screen_to_logical(&self, screen: Vector) -> Result<Vector, CurveError> {
        Ok(screen.transform(&self.viewport.inverse_view_transform()?))
    }

    /// Begin a drag. Only the primary button drags; a press over empty space
    /// waits for the pointer to move onto a control point.
    pub fn on_pointer_down(&mut self, button: Button) -> Vec<Action> {
        if button != Button::Primary {
            return Vec::new();
        }
        self.input = match self.hovered {
            Some(index) => {
                log::debug!("drag start: control point {index}");
                InputState::Dragging { index }
            }
            None => InputState::Pressed,
        };
        Vec::new()
    }

    /// End any drag, wherever the pointer is. A release with nothing pressed is ignored.
    pub fn on_pointer_up(&mut self) -> Vec<Action> {
        if !self.input.is_pressed() {
            return Vec::new();
        }
        if let Some(index) = self.input.dragging() {
            log::debug!("drag end: control point {index}");
        }
        self.input = InputState::Idle;
        self.update_cursor().into_iter().collect()
    }

    /// Re-run hit-testing at `screen` and move the dragged point, if any.
    ///
    /// # Errors
    ///
    /// Propagates [`EngineCore::screen_to_logical`].
    pub fn on_pointer_move(&mut self, screen: Vector) -> Result<Vec<Action>, CurveError> {
        let pointer = self.screen_to_logical(screen)?;
        let hit = hit::hit_test(&self.active_positions(), pointer, self.settings.hit_radius);

        let previous_highlight = self.highlighted();
        let mut moved = false;

        match self.input {
            InputState::Idle => {}
            InputState::Pressed => {
                if let Some(index) = hit {
                    log::debug!("drag start: control point {index}");
                    self.input = InputState::Dragging { index };
                }
            }
            InputState::Dragging { index } => {
                // A point under the pointer takes over; otherwise keep the grabbed one.
                self.input = InputState::Dragging { index: hit.unwrap_or(index) };
            }
        }
        if let Some(index) = self.input.dragging() {
            moved = self.move_control_point(index, pointer);
        }
        self.hovered = hit;

        let mut actions = Vec::new();
        if moved || self.highlighted() != previous_highlight {
            actions.push(Action::RenderNeeded);
        }
        actions.extend(self.update_cursor());
        Ok(actions)
    }

    fn update_cursor(&mut self) -> Option<Action> {
        let cursor = if self.highlighted().is_some() {
            Cursor::Pointer
        } else {
            Cursor::Default
        };
        if cursor == self.cursor {
            return None;
        }
        self.cursor = cursor;
        Some(Action::SetCursor(cursor))
    }

    // --- Queries ---

    #[must_use]
    pub fn order(&self) -> CurveOrder {
        self.order
    }

    #[must_use]
    pub fn param(&self) -> f64 {
        self.t
    }

    #[must_use]
    pub fn show_construction(&self) -> bool {
        self.show_construction
    }

    #[must_use]
    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    #[must_use]
    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    #[must_use]
    pub fn input(&self) -> InputState {
        self.input
    }

    #[must_use]
    pub fn cursor(&self) -> Cursor {
        self.cursor
    }

    #[must_use]
    pub fn hovered(&self) -> Option<usize> {
        self.hovered
    }

    /// The dragged point, or else the hovered one.
    #[must_use]
    pub fn highlighted(&self) -> Option<usize> {
        self.input.dragging().or(self.hovered)
    }

    /// All control points, including those beyond the current order.
    #[must_use]
    pub fn control_points(&self) -> &[ControlPoint] {
        &self.points
    }

    /// Control points used by the current order.
    #[must_use]
    pub fn active_points(&self) -> &[ControlPoint] {
        &self.points[..self.order.point_count()]
    }

    fn active_positions(&self) -> Vec<Vector> {
        self.active_points().iter().map(ControlPoint::position).collect()
    }

    /// Recompute every construction level for the current points, order and `t`.
    ///
    /// # Errors
    ///
    /// Propagates [`Construction::for_order`].
    pub fn construction(&self) -> Result<Construction, CurveError> {
        Construction::for_order(self.order, &self.active_positions(), self.t)
    }

    /// Recompute and draw the current state.
    ///
    /// # Errors
    ///
    /// Returns [`RenderError::Curve`] if the construction cannot be built and
    /// [`RenderError::Surface`] if a drawing call fails.
    pub fn render<S: Surface>(&self, surface: &mut S) -> Result<(), RenderError<S::Error>> {
        let construction = self.construction()?;
        log::trace!("redraw: order {} t={:.3}", self.order, self.t);
        let frame = Frame {
            viewport: self.viewport,
            points: self.active_points(),
            construction: &construction,
            show_construction: self.show_construction,
            highlighted: self.highlighted(),
            settings: &self.settings,
        };
        render::draw(surface, &frame).map_err(RenderError::Surface)
    }
}

/// The full engine. Wraps `EngineCore` and owns the browser 2D context.
pub struct Engine {
    ctx: CanvasRenderingContext2d,
    pub core: EngineCore,
}

impl Engine {
    /// Create an engine drawing into `canvas`, sized to its current dimensions.
    ///
    /// # Errors
    ///
    /// Returns `Err` if the canvas has no 2D context.
    pub fn new(canvas: &HtmlCanvasElement, settings: Settings) -> Result<Self, JsValue> {
        let ctx = canvas
            .get_context("2d")?
            .ok_or_else(|| JsValue::from_str("canvas has no 2d context"))?
            .dyn_into::<CanvasRenderingContext2d>()?;
        let viewport = Viewport::new(f64::from(canvas.width()), f64::from(canvas.height()));
        Ok(Self { ctx, core: EngineCore::with_settings(viewport, settings) })
    }

    /// Draw the current state to the canvas.
    ///
    /// # Errors
    ///
    /// See [`EngineCore::render`].
    pub fn render(&mut self) -> Result<(), RenderError<JsValue>> {
        self.core.render(&mut self.ctx)
    }
}
