//! Half-line probes and the ray/segment intersection test.
//!
//! A [`Ray`] stores only its direction. The origin belongs to the emitter and is
//! passed into every [`Ray::cast`], so a whole fan of rays follows the pointer
//! without being rebuilt.

#[cfg(test)]
#[path = "ray_test.rs"]
mod ray_test;

use crate::boundary::Boundary;
use crate::geom::{Point, from_angle};

/// A direction fixed at construction.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ray {
    angle_deg: f64,
    dir: Point,
}

impl Ray {
    /// Build a ray pointing at `angle_deg` degrees, measured from +x towards +y.
    #[must_use]
    pub fn from_degrees(angle_deg: f64) -> Self {
        Self { angle_deg, dir: from_angle(angle_deg.to_radians()) }
    }

    /// The angle this ray was built from, in degrees.
    #[must_use]
    pub fn angle_deg(&self) -> f64 {
        self.angle_deg
    }

    /// Unit direction vector.
    #[must_use]
    pub fn dir(&self) -> Point {
        self.dir
    }

    /// Intersect the half-line from `origin` along this ray with `wall`.
    ///
    /// Uses the two-line parametric form: `t` is the position along the wall
    /// and `u` the distance along the ray. A hit needs `0 < t < 1` (wall
    /// endpoints excluded) and `u > 0` (strictly ahead of the origin).
    /// Parallel and collinear walls never hit, overlapping or not.
    #[must_use]
    #[allow(clippy::float_cmp)]
    pub fn cast(&self, origin: Point, wall: &Boundary) -> Option<Point> {
        let Point { x: x1, y: y1 } = wall.a();
        let Point { x: x2, y: y2 } = wall.b();
        let Point { x: x3, y: y3 } = origin;
        let Point { x: x4, y: y4 } = origin + self.dir;

        let den = (x1 - x2) * (y3 - y4) - (y1 - y2) * (x3 - x4);
        if den == 0.0 {
            return None;
        }

        let t = ((x1 - x3) * (y3 - y4) - (y1 - y3) * (x3 - x4)) / den;
        let u = -((x1 - x2) * (y1 - y3) - (y1 - y2) * (x1 - x3)) / den;

        if t > 0.0 && t < 1.0 && u > 0.0 {
            Some(Point::new(x1 + t * (x2 - x1), y1 + t * (y2 - y1)))
        } else {
            None
        }
    }
}
