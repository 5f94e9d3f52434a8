use wasm_bindgen::{JsCast, JsValue};
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

use crate::config::SceneConfig;
use crate::geom::Point;
use crate::render::{self, Canvas2d};
use crate::scene::Scene;

#[cfg(test)]
#[path = "engine_test.rs"]
mod engine_test;

/// The browser-facing engine. Wraps a [`Scene`] and owns the canvas element it draws to.
///
/// All state transitions live in `Scene` so they can be tested without a browser;
/// this type only sizes the backing store and forwards events.
pub struct Engine {
    canvas: HtmlCanvasElement,
    surface: Canvas2d,
    pub scene: Scene,
}

impl Engine {
    /// Create an engine bound to `canvas` with a viewport of `width_css` x `height_css`.
    ///
    /// # Errors
    ///
    /// Returns `Err` if the canvas has no 2D context.
    pub fn new(
        canvas: HtmlCanvasElement,
        config: &SceneConfig,
        width_css: f64,
        height_css: f64,
        dpr: f64,
    ) -> Result<Self, JsValue> {
        let ctx: CanvasRenderingContext2d = canvas
            .get_context("2d")?
            .ok_or_else(|| JsValue::from_str("canvas has no 2d context"))?
            .dyn_into()?;

        let seed = config.seed.unwrap_or_else(random_seed);
        let scene = Scene::new(width_css.max(1.0), height_css.max(1.0), config, seed);
        let surface = Canvas2d::new(ctx, width_css, height_css, dpr);

        let mut engine = Self { canvas, surface, scene };
        engine.set_viewport(width_css, height_css, dpr);
        Ok(engine)
    }

    // --- Viewport ---

    /// Update viewport dimensions (CSS pixels) and device pixel ratio.
    ///
    /// Resizes the backing store and moves the scene's border walls.
    pub fn set_viewport(&mut self, width_css: f64, height_css: f64, dpr: f64) {
        let width = width_css.max(1.0);
        let height = height_css.max(1.0);
        let dpr = dpr.max(1.0);
        self.canvas.set_width(backing_px(width, dpr));
        self.canvas.set_height(backing_px(height, dpr));
        self.surface.set_size(width, height, dpr);
        self.scene.resize(width, height);
    }

    // --- Input events ---

    pub fn on_pointer_move(&mut self, screen_pt: Point) {
        self.scene.set_pointer(screen_pt.x, screen_pt.y);
    }

    /// Pointer press: advance to the next constellation.
    pub fn on_click(&mut self) {
        self.scene.advance();
    }

    // --- Frame ---

    /// Advance the scene by one tick and draw it.
    ///
    /// # Errors
    ///
    /// Returns `Err` if a `Canvas2D` call fails.
    pub fn frame(&mut self) -> Result<(), JsValue> {
        self.scene.tick();
        render::draw(&mut self.surface, &self.scene)
    }
}

#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn backing_px(css: f64, dpr: f64) -> u32 {
    (css * dpr).round() as u32
}

#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss, clippy::cast_precision_loss)]
fn random_seed() -> u64 {
    (js_sys::Math::random() * (u64::MAX as f64)) as u64
}
