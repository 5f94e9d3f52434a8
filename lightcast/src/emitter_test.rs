#![allow(clippy::float_cmp)]

use super::*;
use crate::boundary::border;

const EPSILON: f64 = 1e-9;

fn approx_eq(a: f64, b: f64) -> bool {
    (a - b).abs() < EPSILON
}

/// Axis-aligned square with corners `(x, y)` and `(x + side, y + side)`.
fn square(x: f64, y: f64, side: f64) -> Vec<Boundary> {
    vec![
        Boundary::new(x, y, x + side, y),
        Boundary::new(x + side, y, x + side, y + side),
        Boundary::new(x + side, y + side, x, y + side),
        Boundary::new(x, y + side, x, y),
    ]
}

// =============================================================
// Fan
// =============================================================

#[test]
fn new_builds_full_fan() {
    let emitter = Emitter::new(Point::new(0.0, 0.0));
    assert_eq!(emitter.rays().len(), RAY_COUNT);
}

#[test]
fn fan_is_one_degree_apart_from_zero() {
    let emitter = Emitter::new(Point::new(0.0, 0.0));
    for (i, ray) in emitter.rays().iter().enumerate() {
        assert_eq!(ray.angle_deg(), i as f64);
    }
}

#[test]
fn reposition_moves_but_keeps_fan() {
    let mut emitter = Emitter::new(Point::new(0.0, 0.0));
    let before: Vec<Point> = emitter.rays().iter().map(Ray::dir).collect();
    emitter.reposition(-250.0, 1e6);
    assert_eq!(emitter.position(), Point::new(-250.0, 1e6));
    let after: Vec<Point> = emitter.rays().iter().map(Ray::dir).collect();
    assert_eq!(before, after);
}

// =============================================================
// compute_hits
// =============================================================

#[test]
fn compute_hits_returns_one_entry_per_ray_without_walls() {
    let emitter = Emitter::new(Point::new(10.0, 10.0));
    let hits = emitter.compute_hits(&[]);
    assert_eq!(hits.len(), RAY_COUNT);
    assert!(hits.iter().all(|h| h.point.is_none()));
}

#[test]
fn compute_hits_angles_follow_fan_order() {
    let emitter = Emitter::new(Point::new(10.0, 10.0));
    let hits = emitter.compute_hits(&square(0.0, 0.0, 100.0));
    for (i, hit) in hits.iter().enumerate() {
        assert_eq!(hit.angle_deg, i as f64);
    }
}

#[test]
fn enclosed_emitter_hits_on_every_ray() {
    // Off-centre so no ray runs exactly into a corner.
    let emitter = Emitter::new(Point::new(30.0, 45.0));
    let hits = emitter.compute_hits(&square(0.0, 0.0, 100.0));
    assert_eq!(hits.len(), RAY_COUNT);
    assert!(hits.iter().all(|h| h.point.is_some()));
}

#[test]
fn enclosed_emitter_hits_lie_on_the_square() {
    let emitter = Emitter::new(Point::new(30.0, 45.0));
    for hit in emitter.compute_hits(&square(0.0, 0.0, 100.0)) {
        let p = hit.point.expect("enclosed ray should hit");
        let on_edge = approx_eq(p.x, 0.0) || approx_eq(p.x, 100.0) || approx_eq(p.y, 0.0) || approx_eq(p.y, 100.0);
        assert!(on_edge, "hit {p:?} at {} is not on the square", hit.angle_deg);
    }
}

#[test]
fn compute_hits_picks_nearest_wall() {
    let emitter = Emitter::new(Point::new(0.0, 50.0));
    let near = Boundary::new(40.0, 0.0, 40.0, 100.0);
    let far = Boundary::new(80.0, 0.0, 80.0, 100.0);

    // Order of walls must not matter when distances differ.
    for walls in [vec![far, near], vec![near, far]] {
        let hits = emitter.compute_hits(&walls);
        assert_eq!(hits[0].point, Some(Point::new(40.0, 50.0)));
    }
}

#[test]
fn compute_hits_reversed_duplicate_wall_hits_same_point() {
    let emitter = Emitter::new(Point::new(0.0, 50.0));
    let first = Boundary::new(40.0, 0.0, 40.0, 100.0);
    let reversed = Boundary::new(40.0, 100.0, 40.0, 0.0);
    let hits = emitter.compute_hits(&[first, reversed]);
    assert_eq!(hits[0].point, Some(Point::new(40.0, 50.0)));
}

#[test]
fn compute_hits_reports_no_hit_for_escaping_rays() {
    let emitter = Emitter::new(Point::new(0.0, 50.0));
    let wall = Boundary::new(40.0, 0.0, 40.0, 100.0);
    let hits = emitter.compute_hits(&[wall]);
    assert!(hits[0].point.is_some());
    assert!(hits[180].point.is_none());
}

#[test]
fn emitter_outside_canvas_still_yields_full_fan() {
    let emitter = Emitter::new(Point::new(-500.0, -500.0));
    let hits = emitter.compute_hits(&border(800.0, 600.0));
    assert_eq!(hits.len(), RAY_COUNT);
    assert!(hits.iter().any(|h| h.point.is_some()));
    assert!(hits.iter().any(|h| h.point.is_none()));
}
