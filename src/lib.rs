//! WebAssembly host for the constellation light demo.
//!
//! The page calls [`start`] with the id of a `<canvas>` element and an optional
//! JSON scene config. From then on the host owns the DOM wiring: it keeps the
//! canvas sized to the window, forwards pointer events to the
//! [`lightcast::engine::Engine`], and drives one engine frame per
//! `requestAnimationFrame`.


mod dom;
mod error;
mod frame_loop;
mod listeners;

use std::cell::RefCell;
use std::rc::Rc;

use lightcast::config::{ConfigError, SceneConfig};
use lightcast::engine::Engine;
use wasm_bindgen::prelude::*;

pub use error::HostError;

/// Module initialiser: panic hook and console logger.
#[wasm_bindgen(start)]
pub fn init() {
    console_error_panic_hook::set_once();
    if let Err(err) = console_log::init_with_level(log::Level::Debug) {
        web_sys::console::warn_1(&format!("console logger not installed: {err}").into());
    }
}

/// Mount the demo on the canvas with id `canvas_id`.
///
/// # Errors
///
/// Rejects with a message if the config is invalid, the element is missing or
/// not a canvas, or a browser call fails during setup.
#[wasm_bindgen]
pub fn start(canvas_id: &str, config_json: Option<String>) -> Result<(), JsValue> {
    run(canvas_id, config_json.as_deref()).map_err(JsValue::from)
}

fn run(canvas_id: &str, config_json: Option<&str>) -> Result<(), HostError> {
    let config = parse_config(config_json)?;
    let window = dom::window()?;
    let canvas = dom::canvas_by_id(&window, canvas_id)?;

    if config.hide_cursor {
        dom::hide_cursor(&canvas)?;
    }
    let viewport = dom::fit_to_window(&window, &canvas)?;
    let engine = Engine::new(canvas.clone(), &config, viewport.width, viewport.height, viewport.dpr)?;
    let engine = Rc::new(RefCell::new(engine));

    listeners::install(&window, &canvas, &engine)?;
    frame_loop::start(engine)?;

    log::info!("mounted on #{canvas_id} at {}x{}", viewport.width, viewport.height);
    Ok(())
}

/// Parse the optional host config. A missing or blank string means defaults.
///
/// # Errors
///
/// Returns the [`ConfigError`] from [`SceneConfig::from_json`].
pub fn parse_config(raw: Option<&str>) -> Result<SceneConfig, ConfigError> {
    match raw.map(str::trim) {
        Some(json) if !json.is_empty() => SceneConfig::from_json(json),
        _ => Ok(SceneConfig::default()),
    }
}
