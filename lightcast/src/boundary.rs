//! Occluding wall segments.

#[cfg(test)]
#[path = "boundary_test.rs"]
mod boundary_test;

use crate::consts::BORDER_SEGMENTS;
use crate::geom::Point;

/// An impenetrable line segment from `a` to `b`.
///
/// Walls carry no identity beyond their coordinates and are rebuilt in bulk
/// whenever the scene changes shape or size.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Boundary {
    a: Point,
    b: Point,
}

impl Boundary {
    #[must_use]
    pub const fn new(x1: f64, y1: f64, x2: f64, y2: f64) -> Self {
        Self { a: Point::new(x1, y1), b: Point::new(x2, y2) }
    }

    #[must_use]
    pub const fn from_points(a: Point, b: Point) -> Self {
        Self { a, b }
    }

    /// Start endpoint.
    #[must_use]
    pub fn a(&self) -> Point {
        self.a
    }

    /// End endpoint.
    #[must_use]
    pub fn b(&self) -> Point {
        self.b
    }
}

/// The four walls framing a `width` x `height` canvas: top, right, bottom, left.
#[must_use]
pub fn border(width: f64, height: f64) -> [Boundary; BORDER_SEGMENTS] {
    [
        Boundary::new(0.0, 0.0, width, 0.0),
        Boundary::new(width, 0.0, width, height),
        Boundary::new(width, height, 0.0, height),
        Boundary::new(0.0, height, 0.0, 0.0),
    ]
}

/// Close `vertices` into a loop: segment `i` joins vertex `i` to vertex `i + 1`,
/// and the last vertex joins back to the first.
#[must_use]
pub fn outline(vertices: &[Point]) -> Vec<Boundary> {
    vertices
        .iter()
        .zip(vertices.iter().cycle().skip(1))
        .map(|(a, b)| Boundary::from_points(*a, *b))
        .collect()
}
