//! Rendering: draws a [`Scene`] to a 2D surface.
//!
//! [`draw`] is written against the [`Surface`] trait and only reads scene
//! state. [`Canvas2d`] is the browser implementation and the only place that
//! touches [`web_sys::CanvasRenderingContext2d`]; every fallible `Canvas2D`
//! call propagates its `JsValue` error.

#[cfg(test)]
#[path = "render_test.rs"]
mod render_test;

use std::f64::consts::PI;

use wasm_bindgen::JsValue;
use web_sys::CanvasRenderingContext2d;

use crate::consts::{
    CAPTION_BOTTOM_OFFSET, CAPTION_SIZE_PX, EMITTER_DIAMETER, LABEL_LIFT, LABEL_SIZE_PX, RAY_ALPHA, SILVER,
    STAR_ALPHA, STROKE_WIDTH, VERTEX_DIAMETER,
};
use crate::geom::Point;
use crate::scene::Scene;

/// An RGBA colour with 8-bit channels.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    pub const BLACK: Color = Color::grey(0);
    pub const WHITE: Color = Color::grey(255);
    pub const SILVER: Color = Color::grey(SILVER);

    /// Opaque grey of the given level.
    #[must_use]
    pub const fn grey(level: u8) -> Self {
        Self { r: level, g: level, b: level, a: 255 }
    }

    #[must_use]
    pub const fn with_alpha(self, a: u8) -> Self {
        Self { a, ..self }
    }

    /// CSS `rgba()` form.
    #[must_use]
    pub fn to_css(self) -> String {
        let alpha = f64::from(self.a) / 255.0;
        format!("rgba({}, {}, {}, {alpha:.3})", self.r, self.g, self.b)
    }
}

/// Line colour and width.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Stroke {
    pub color: Color,
    pub width: f64,
}

/// Drawing primitives needed to render a scene.
///
/// Text is centred horizontally on `at`, with `at.y` as the baseline.
pub trait Surface {
    type Error;

    /// Fill the whole surface with `color`.
    fn clear(&mut self, color: Color) -> Result<(), Self::Error>;

    fn line(&mut self, from: Point, to: Point, stroke: Stroke) -> Result<(), Self::Error>;

    /// Filled circle, no outline.
    fn circle(&mut self, center: Point, diameter: f64, fill: Color) -> Result<(), Self::Error>;

    fn text(&mut self, text: &str, at: Point, size_px: f64, fill: Color) -> Result<(), Self::Error>;
}

/// Draw one frame of `scene`.
///
/// Layers, bottom first: background, stars, walls, emitter, rays, caption,
/// constellation markers and label.
///
/// # Errors
///
/// Returns the first error reported by `surface`.
pub fn draw<S: Surface>(surface: &mut S, scene: &Scene) -> Result<(), S::Error> {
    surface.clear(Color::BLACK)?;

    for star in scene.stars().stars() {
        // Brightness is clamped to [100, 255], so the cast is lossless apart from the fraction.
        #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
        let level = star.brightness.round() as u8;
        surface.circle(star.pos, star.size, Color::grey(level).with_alpha(STAR_ALPHA))?;
    }

    let wall_stroke = Stroke { color: Color::SILVER, width: STROKE_WIDTH };
    for wall in scene.walls() {
        surface.line(wall.a(), wall.b(), wall_stroke)?;
    }

    let origin = scene.emitter().position();
    surface.circle(origin, EMITTER_DIAMETER, Color::SILVER)?;

    let ray_stroke = Stroke { color: Color::SILVER.with_alpha(RAY_ALPHA), width: STROKE_WIDTH };
    for hit in scene.hits() {
        if let Some(pt) = hit.point {
            surface.line(origin, pt, ray_stroke)?;
        }
    }

    let Some(shape) = scene.shape() else {
        return Ok(());
    };

    let caption_at = Point::new(scene.width() * 0.5, scene.height() - CAPTION_BOTTOM_OFFSET);
    surface.text(shape.name, caption_at, CAPTION_SIZE_PX, Color::SILVER)?;

    for vertex in shape.vertices {
        surface.circle(*vertex, VERTEX_DIAMETER, Color::SILVER)?;
    }
    if let Some(center) = shape.centroid() {
        let label_at = Point::new(center.x, center.y - LABEL_LIFT);
        surface.text(shape.name, label_at, LABEL_SIZE_PX, Color::WHITE)?;
    }

    Ok(())
}

// =============================================================
// Browser surface
// =============================================================

/// A [`Surface`] over a browser 2D context.
///
/// `width` and `height` are in CSS pixels; the backing store is expected to be
/// `dpr` times larger, and [`Surface::clear`] resets the transform to match.
pub struct Canvas2d {
    ctx: CanvasRenderingContext2d,
    width: f64,
    height: f64,
    dpr: f64,
}

impl Canvas2d {
    #[must_use]
    pub fn new(ctx: CanvasRenderingContext2d, width: f64, height: f64, dpr: f64) -> Self {
        Self { ctx, width, height, dpr }
    }

    /// Update the CSS size and device pixel ratio.
    pub fn set_size(&mut self, width: f64, height: f64, dpr: f64) {
        self.width = width;
        self.height = height;
        self.dpr = dpr;
    }
}

impl Surface for Canvas2d {
    type Error = JsValue;

    fn clear(&mut self, color: Color) -> Result<(), JsValue> {
        self.ctx.set_transform(self.dpr, 0.0, 0.0, self.dpr, 0.0, 0.0)?;
        self.ctx.set_fill_style_str(&color.to_css());
        self.ctx.fill_rect(0.0, 0.0, self.width, self.height);
        Ok(())
    }

    fn line(&mut self, from: Point, to: Point, stroke: Stroke) -> Result<(), JsValue> {
        self.ctx.set_stroke_style_str(&stroke.color.to_css());
        self.ctx.set_line_width(stroke.width);
        self.ctx.begin_path();
        self.ctx.move_to(from.x, from.y);
        self.ctx.line_to(to.x, to.y);
        self.ctx.stroke();
        Ok(())
    }

    fn circle(&mut self, center: Point, diameter: f64, fill: Color) -> Result<(), JsValue> {
        self.ctx.set_fill_style_str(&fill.to_css());
        self.ctx.begin_path();
        self.ctx.arc(center.x, center.y, diameter * 0.5, 0.0, 2.0 * PI)?;
        self.ctx.fill();
        Ok(())
    }

    fn text(&mut self, text: &str, at: Point, size_px: f64, fill: Color) -> Result<(), JsValue> {
        self.ctx.set_fill_style_str(&fill.to_css());
        self.ctx.set_font(&format!("{size_px:.0}px sans-serif"));
        self.ctx.set_text_align("center");
        self.ctx.set_text_baseline("alphabetic");
        self.ctx.fill_text(text, at.x, at.y)?;
        Ok(())
    }
}
