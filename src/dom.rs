//! Element lookup and canvas sizing.

use wasm_bindgen::{JsCast, JsValue};
use web_sys::{HtmlCanvasElement, Window};

use crate::error::HostError;

/// CSS size of the drawing area plus the device pixel ratio.
#[derive(Debug, Clone, Copy)]
pub struct Viewport {
    pub width: f64,
    pub height: f64,
    pub dpr: f64,
}

pub fn window() -> Result<Window, HostError> {
    web_sys::window().ok_or(HostError::NoWindow)
}

pub fn canvas_by_id(window: &Window, id: &str) -> Result<HtmlCanvasElement, HostError> {
    let document = window.document().ok_or(HostError::NoDocument)?;
    let element = document
        .get_element_by_id(id)
        .ok_or_else(|| HostError::CanvasNotFound(id.to_owned()))?;
    element
        .dyn_into::<HtmlCanvasElement>()
        .map_err(|_| HostError::NotACanvas(id.to_owned()))
}

pub fn hide_cursor(canvas: &HtmlCanvasElement) -> Result<(), JsValue> {
    canvas.style().set_property("cursor", "none")
}

/// Size the canvas to fill the window and return the resulting viewport.
pub fn fit_to_window(window: &Window, canvas: &HtmlCanvasElement) -> Result<Viewport, JsValue> {
    let width = window.inner_width()?.as_f64().unwrap_or(1.0).max(1.0);
    let height = window.inner_height()?.as_f64().unwrap_or(1.0).max(1.0);
    let dpr = window.device_pixel_ratio().max(1.0);

    let style = canvas.style();
    style.set_property("display", "block")?;
    style.set_property("width", &format!("{width}px"))?;
    style.set_property("height", &format!("{height}px"))?;

    Ok(Viewport { width, height, dpr })
}
