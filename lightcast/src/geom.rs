//! Plane geometry primitives shared by the ray caster and the renderer.

#[cfg(test)]
#[path = "geom_test.rs"]
mod geom_test;

use std::ops::{Add, Mul, Sub};

/// A point or displacement in canvas space (CSS pixels, y pointing down).
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    #[must_use]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Euclidean distance to `other`.
    #[must_use]
    pub fn distance(self, other: Point) -> f64 {
        distance(self, other)
    }
}

impl Add for Point {
    type Output = Point;

    fn add(self, rhs: Point) -> Point {
        Point::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl Sub for Point {
    type Output = Point;

    fn sub(self, rhs: Point) -> Point {
        Point::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl Mul<f64> for Point {
    type Output = Point;

    fn mul(self, rhs: f64) -> Point {
        Point::new(self.x * rhs, self.y * rhs)
    }
}

/// Euclidean distance between `p` and `q`.
#[must_use]
pub fn distance(p: Point, q: Point) -> f64 {
    (p.x - q.x).hypot(p.y - q.y)
}

/// Unit vector `(cos θ, sin θ)` for an angle in radians.
#[must_use]
pub fn from_angle(theta: f64) -> Point {
    let (sin, cos) = theta.sin_cos();
    Point::new(cos, sin)
}

/// Arithmetic mean of `points`, or `None` for an empty slice.
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn centroid(points: &[Point]) -> Option<Point> {
    if points.is_empty() {
        return None;
    }
    let sum = points.iter().fold(Point::default(), |acc, p| acc + *p);
    let n = points.len() as f64;
    Some(Point::new(sum.x / n, sum.y / n))
}
