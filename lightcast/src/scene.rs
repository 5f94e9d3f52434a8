//! Scene state and the tick/advance state machine.
//!
//! `Scene` owns everything that changes between frames: the wall list, the
//! emitter, the starfield, the latest pointer position and the active
//! constellation. It has no knowledge of the browser, so the whole state
//! machine is testable natively. [`crate::render::draw`] reads it; only the
//! methods here mutate it.

#[cfg(test)]
#[path = "scene_test.rs"]
mod scene_test;

use rand::SeedableRng;
use rand::rngs::StdRng;

use crate::boundary::{Boundary, border};
use crate::config::SceneConfig;
use crate::emitter::{Emitter, Hit};
use crate::geom::Point;
use crate::shape::{CONSTELLATIONS, Shape};
use crate::stars::StarField;

pub struct Scene {
    width: f64,
    height: f64,
    shapes: &'static [Shape],
    shape_index: usize,
    walls: Vec<Boundary>,
    emitter: Emitter,
    pointer: Point,
    stars: StarField,
    hits: Vec<Hit>,
    rng: StdRng,
}

impl Scene {
    /// Build a scene over the built-in constellations.
    ///
    /// The emitter and pointer start at the canvas centre. A `start_shape`
    /// beyond the catalogue wraps around.
    #[must_use]
    pub fn new(width: f64, height: f64, config: &SceneConfig, seed: u64) -> Self {
        Self::with_shapes(width, height, config, seed, CONSTELLATIONS)
    }

    /// Build a scene cycling through `shapes` instead of the built-in catalogue.
    #[must_use]
    pub fn with_shapes(width: f64, height: f64, config: &SceneConfig, seed: u64, shapes: &'static [Shape]) -> Self {
        let mut rng = StdRng::seed_from_u64(seed);
        let stars = StarField::populate(&mut rng, config.star_count, width, height);
        let center = Point::new(width * 0.5, height * 0.5);
        let shape_index = if shapes.is_empty() { 0 } else { config.start_shape % shapes.len() };
        if shape_index != config.start_shape {
            log::warn!("start shape {} not in catalogue of {}, using {shape_index}", config.start_shape, shapes.len());
        }

        let mut scene = Self {
            width,
            height,
            shapes,
            shape_index,
            walls: Vec::new(),
            emitter: Emitter::new(center),
            pointer: center,
            stars,
            hits: Vec::new(),
            rng,
        };
        scene.rebuild_walls();

        log::info!(
            "scene {width}x{height}: {} stars, {} walls, shape {:?}",
            scene.stars.len(),
            scene.walls.len(),
            scene.shape().map(|s| s.name)
        );
        scene
    }

    // --- Inputs ---

    /// Record the latest pointer position. Consumed by the next [`Scene::tick`].
    pub fn set_pointer(&mut self, x: f64, y: f64) {
        self.pointer = Point::new(x, y);
    }

    /// Cycle to the next constellation and rebuild the walls around it.
    pub fn advance(&mut self) {
        if self.shapes.is_empty() {
            return;
        }
        self.shape_index = (self.shape_index + 1) % self.shapes.len();
        self.rebuild_walls();
        log::debug!("advanced to shape {} ({} walls)", self.shape_index, self.walls.len());
    }

    /// Track a new canvas size. The border follows; stars keep their positions.
    pub fn resize(&mut self, width: f64, height: f64) {
        self.width = width;
        self.height = height;
        self.rebuild_walls();
        log::debug!("resized to {width}x{height}");
    }

    /// One frame: twinkle the stars, move the emitter to the pointer and recast.
    pub fn tick(&mut self) {
        self.stars.twinkle(&mut self.rng);
        self.emitter.reposition(self.pointer.x, self.pointer.y);
        self.hits = self.emitter.compute_hits(&self.walls);
    }

    // --- Queries ---

    #[must_use]
    pub fn width(&self) -> f64 {
        self.width
    }

    #[must_use]
    pub fn height(&self) -> f64 {
        self.height
    }

    /// Index of the active constellation.
    #[must_use]
    pub fn shape_index(&self) -> usize {
        self.shape_index
    }

    /// The active constellation, if the catalogue is non-empty.
    #[must_use]
    pub fn shape(&self) -> Option<&Shape> {
        self.shapes.get(self.shape_index)
    }

    /// Border walls first, then the active constellation's outline.
    #[must_use]
    pub fn walls(&self) -> &[Boundary] {
        &self.walls
    }

    #[must_use]
    pub fn emitter(&self) -> &Emitter {
        &self.emitter
    }

    #[must_use]
    pub fn pointer(&self) -> Point {
        self.pointer
    }

    #[must_use]
    pub fn stars(&self) -> &StarField {
        &self.stars
    }

    /// Hits from the most recent tick; empty before the first one.
    #[must_use]
    pub fn hits(&self) -> &[Hit] {
        &self.hits
    }

    fn rebuild_walls(&mut self) {
        self.walls.clear();
        self.walls.extend(border(self.width, self.height));
        if let Some(shape) = self.shapes.get(self.shape_index) {
            self.walls.extend(shape.walls());
        }
    }
}
