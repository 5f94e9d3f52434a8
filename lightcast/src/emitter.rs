//! The pointer-tracked light source and its fixed fan of rays.

#[cfg(test)]
#[path = "emitter_test.rs"]
mod emitter_test;

use crate::boundary::Boundary;
use crate::consts::RAY_COUNT;
use crate::geom::Point;
use crate::ray::Ray;

/// Outcome of one ray evaluation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Hit {
    /// Angle of the ray that produced this result, in degrees.
    pub angle_deg: f64,
    /// Nearest intersection, or `None` when the ray escapes every wall.
    pub point: Option<Point>,
}

/// A light source owning [`RAY_COUNT`] rays at 1° steps starting at 0°.
///
/// The fan is built once and never resized; only the position moves.
#[derive(Debug, Clone)]
pub struct Emitter {
    pos: Point,
    rays: Vec<Ray>,
}

impl Emitter {
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn new(pos: Point) -> Self {
        let rays = (0..RAY_COUNT).map(|deg| Ray::from_degrees(deg as f64)).collect();
        Self { pos, rays }
    }

    /// Current position.
    #[must_use]
    pub fn position(&self) -> Point {
        self.pos
    }

    /// The ray fan, ordered by angle.
    #[must_use]
    pub fn rays(&self) -> &[Ray] {
        &self.rays
    }

    /// Move to `(x, y)`. Any coordinates are accepted, including off-canvas ones.
    pub fn reposition(&mut self, x: f64, y: f64) {
        self.pos = Point::new(x, y);
    }

    /// Nearest wall intersection for every ray, in fan order.
    ///
    /// Always returns one entry per ray. Ties keep the earliest wall in
    /// `walls`, since a later candidate must be strictly closer to win.
    #[must_use]
    pub fn compute_hits(&self, walls: &[Boundary]) -> Vec<Hit> {
        self.rays
            .iter()
            .map(|ray| Hit { angle_deg: ray.angle_deg(), point: self.nearest(ray, walls) })
            .collect()
    }

    fn nearest(&self, ray: &Ray, walls: &[Boundary]) -> Option<Point> {
        let mut closest = None;
        let mut record = f64::INFINITY;
        for wall in walls {
            if let Some(pt) = ray.cast(self.pos, wall) {
                let d = self.pos.distance(pt);
                if d < record {
                    record = d;
                    closest = Some(pt);
                }
            }
        }
        closest
    }
}
