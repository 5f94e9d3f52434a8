//! Constellation catalogue: named vertex loops that become the scene's inner walls.

#[cfg(test)]
#[path = "shape_test.rs"]
mod shape_test;

use crate::boundary::{Boundary, outline};
use crate::geom::{Point, centroid};

/// A named closed polygon.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Shape {
    pub name: &'static str,
    pub vertices: &'static [Point],
}

impl Shape {
    /// The shape's outline as a closed loop of walls, one per vertex.
    #[must_use]
    pub fn walls(&self) -> Vec<Boundary> {
        outline(self.vertices)
    }

    /// Mean of the vertex positions, used to anchor the shape's label.
    #[must_use]
    pub fn centroid(&self) -> Option<Point> {
        centroid(self.vertices)
    }
}

/// The constellations cycled through by the scene, in display order.
pub const CONSTELLATIONS: &[Shape] = &[
    Shape {
        name: "Orion",
        vertices: &[
            Point::new(200.0, 300.0),
            Point::new(250.0, 400.0),
            Point::new(300.0, 300.0),
            Point::new(350.0, 400.0),
            Point::new(400.0, 500.0),
        ],
    },
    Shape {
        name: "Cassiopeia",
        vertices: &[
            Point::new(100.0, 200.0),
            Point::new(150.0, 250.0),
            Point::new(200.0, 200.0),
            Point::new(250.0, 150.0),
            Point::new(300.0, 200.0),
        ],
    },
    Shape {
        name: "Ursa Major",
        vertices: &[
            Point::new(300.0, 300.0),
            Point::new(350.0, 350.0),
            Point::new(400.0, 300.0),
            Point::new(450.0, 250.0),
            Point::new(500.0, 300.0),
        ],
    },
];
