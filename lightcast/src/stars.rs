//! Twinkling background starfield.
//!
//! Purely decorative: stars never interact with rays. Each frame every star's
//! brightness takes a random step of at most its own flicker magnitude and is
//! clamped back into the allowed grey range.

#[cfg(test)]
#[path = "stars_test.rs"]
mod stars_test;

use rand::Rng;

use crate::consts::{
    STAR_BRIGHTNESS_MAX, STAR_BRIGHTNESS_MIN, STAR_FLICKER_MAX, STAR_FLICKER_MIN, STAR_SIZE_MAX, STAR_SIZE_MIN,
};
use crate::geom::Point;

/// One background star.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Star {
    pub pos: Point,
    /// Diameter in CSS pixels.
    pub size: f64,
    /// Grey level in `[STAR_BRIGHTNESS_MIN, STAR_BRIGHTNESS_MAX]`.
    pub brightness: f64,
    /// Largest per-frame brightness change.
    pub flicker: f64,
}

impl Star {
    /// Take one random brightness step and clamp.
    ///
    /// A star with no positive flicker (zero, negative or NaN) stays as it is.
    pub fn twinkle(&mut self, rng: &mut impl Rng) {
        if self.flicker.is_nan() || self.flicker <= 0.0 {
            return;
        }
        self.brightness += rng.random_range(-self.flicker..self.flicker);
        self.brightness = self.brightness.clamp(STAR_BRIGHTNESS_MIN, STAR_BRIGHTNESS_MAX);
    }
}

/// A fixed-size set of stars scattered over the canvas.
#[derive(Debug, Clone, Default)]
pub struct StarField {
    stars: Vec<Star>,
}

impl StarField {
    /// Scatter `count` stars uniformly over a `width` x `height` canvas.
    #[must_use]
    pub fn populate(rng: &mut impl Rng, count: usize, width: f64, height: f64) -> Self {
        let stars = (0..count)
            .map(|_| Star {
                pos: Point::new(rng.random::<f64>() * width, rng.random::<f64>() * height),
                size: rng.random_range(STAR_SIZE_MIN..STAR_SIZE_MAX),
                brightness: rng.random_range(STAR_BRIGHTNESS_MIN..STAR_BRIGHTNESS_MAX),
                flicker: rng.random_range(STAR_FLICKER_MIN..STAR_FLICKER_MAX),
            })
            .collect();
        Self { stars }
    }

    /// Advance every star's brightness by one frame.
    pub fn twinkle(&mut self, rng: &mut impl Rng) {
        for star in &mut self.stars {
            star.twinkle(rng);
        }
    }

    #[must_use]
    pub fn stars(&self) -> &[Star] {
        &self.stars
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.stars.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.stars.is_empty()
    }
}
