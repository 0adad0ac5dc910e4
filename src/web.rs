//! `wasm-bindgen` surface for the host page.
//!
//! The page creates one [`CurveApp`] for its canvas and forwards the order
//! selector, parameter slider, construction checkbox and mouse events to it.
//! Every method redraws synchronously when the state changed, so the canvas is
//! consistent with the inputs by the time the handler returns.

use wasm_bindgen::prelude::*;
use web_sys::HtmlCanvasElement;

use crate::curve::{format_param, parse_param};
use crate::engine::{Action, Engine};
use crate::input::Button;
use crate::settings::Settings;
use crate::transform::Viewport;
use crate::vector::Vector;

/// Install the panic hook and route `log` output to the browser console.
#[wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    if let Err(e) = console_log::init_with_level(log::Level::Info) {
        web_sys::console::warn_1(&JsValue::from_str(&format!("logger already initialized: {e}")));
    }
}

#[wasm_bindgen]
pub struct CurveApp {
    canvas: HtmlCanvasElement,
    engine: Engine,
}

#[wasm_bindgen]
impl CurveApp {
    /// Bind to `canvas`. `settings_json` may be empty for the defaults.
    ///
    /// # Errors
    ///
    /// Returns `Err` if the settings are invalid or the canvas has no 2D context.
    #[wasm_bindgen(constructor)]
    pub fn new(canvas: HtmlCanvasElement, settings_json: &str) -> Result<CurveApp, JsValue> {
        let settings = if settings_json.trim().is_empty() {
            Settings::default()
        } else {
            Settings::from_json(settings_json).map_err(to_js)?
        };
        let engine = Engine::new(&canvas, settings)?;
        let mut app = Self { canvas, engine };
        app.render()?;
        Ok(app)
    }

    /// Order selector changed (`"2"`, `"3"` or `"4"`).
    ///
    /// # Errors
    ///
    /// Returns `Err` for an unsupported value or a failed redraw.
    #[wasm_bindgen(js_name = setOrder)]
    pub fn set_order(&mut self, value: &str) -> Result<(), JsValue> {
        let actions = self.engine.core.set_order_value(value).map_err(to_js)?;
        self.apply(&actions)
    }

    /// Parameter slider moved. Returns the two-decimal label for the readout.
    ///
    /// # Errors
    ///
    /// Returns `Err` if the value is not a number or the redraw fails.
    #[wasm_bindgen(js_name = setParam)]
    pub fn set_param(&mut self, value: &str) -> Result<String, JsValue> {
        let t = parse_param(value)
            .inspect_err(|e| log::warn!("ignoring slider value: {e}"))
            .map_err(to_js)?;
        let actions = self.engine.core.set_param(t);
        self.apply(&actions)?;
        Ok(format_param(t))
    }

    /// "Show construction" checkbox toggled.
    ///
    /// # Errors
    ///
    /// Returns `Err` if the redraw fails.
    #[wasm_bindgen(js_name = setShowConstruction)]
    pub fn set_show_construction(&mut self, show: bool) -> Result<(), JsValue> {
        let actions = self.engine.core.set_show_construction(show);
        self.apply(&actions)
    }

    /// Window resized; the host has already resized the canvas element.
    ///
    /// # Errors
    ///
    /// Returns `Err` if the redraw fails.
    pub fn resize(&mut self) -> Result<(), JsValue> {
        let viewport = Viewport::new(f64::from(self.canvas.width()), f64::from(self.canvas.height()));
        let actions = self.engine.core.set_viewport(viewport);
        self.apply(&actions)
    }

    /// `mousedown` with the event's `buttons` bitmask.
    ///
    /// # Errors
    ///
    /// Returns `Err` if the redraw fails.
    #[wasm_bindgen(js_name = pointerDown)]
    pub fn pointer_down(&mut self, buttons: u16) -> Result<(), JsValue> {
        let Some(button) = Button::from_buttons(buttons) else {
            return Ok(());
        };
        let actions = self.engine.core.on_pointer_down(button);
        self.apply(&actions)
    }

    /// `mouseup`.
    ///
    /// # Errors
    ///
    /// Returns `Err` if the redraw fails.
    #[wasm_bindgen(js_name = pointerUp)]
    pub fn pointer_up(&mut self) -> Result<(), JsValue> {
        let actions = self.engine.core.on_pointer_up();
        self.apply(&actions)
    }

    /// `mousemove` at client coordinates.
    ///
    /// # Errors
    ///
    /// Returns `Err` if the position cannot be mapped or the redraw fails.
    #[wasm_bindgen(js_name = pointerMove)]
    pub fn pointer_move(&mut self, client_x: f64, client_y: f64) -> Result<(), JsValue> {
        let actions = self.engine.core.on_pointer_move(Vector::new(client_x, client_y)).map_err(to_js)?;
        self.apply(&actions)
    }

    /// Redraw unconditionally.
    ///
    /// # Errors
    ///
    /// Returns `Err` if a drawing call fails.
    pub fn render(&mut self) -> Result<(), JsValue> {
        self.engine.render().map_err(to_js)
    }
}

impl CurveApp {
    fn apply(&mut self, actions: &[Action]) -> Result<(), JsValue> {
        let mut render = false;
        for action in actions {
            match action {
                Action::RenderNeeded => render = true,
                Action::SetCursor(cursor) => self.canvas.style().set_property("cursor", cursor.as_css())?,
            }
        }
        if render {
            self.render()?;
        }
        Ok(())
    }
}

fn to_js(e: impl std::fmt::Display) -> JsValue {
    JsValue::from_str(&e.to_string())
}
