#![allow(clippy::float_cmp)]

use std::f64::consts::{FRAC_PI_2, PI};

use super::*;

const EPSILON: f64 = 1e-10;

fn approx_eq(a: f64, b: f64) -> bool {
    (a - b).abs() < EPSILON
}

fn point_approx_eq(a: Point, b: Point) -> bool {
    approx_eq(a.x, b.x) && approx_eq(a.y, b.y)
}

// --- Point ---

#[test]
fn point_new() {
    let p = Point::new(3.0, 4.0);
    assert_eq!(p.x, 3.0);
    assert_eq!(p.y, 4.0);
}

#[test]
fn point_default_is_origin() {
    assert_eq!(Point::default(), Point::new(0.0, 0.0));
}

#[test]
fn point_add_translates() {
    let p = Point::new(1.0, 2.0) + Point::new(10.0, -5.0);
    assert_eq!(p, Point::new(11.0, -3.0));
}

#[test]
fn point_sub_gives_displacement() {
    let d = Point::new(5.0, 7.0) - Point::new(2.0, 3.0);
    assert_eq!(d, Point::new(3.0, 4.0));
}

#[test]
fn point_scale() {
    assert_eq!(Point::new(1.5, -2.0) * 2.0, Point::new(3.0, -4.0));
}

// --- distance ---

#[test]
fn distance_three_four_five() {
    assert!(approx_eq(distance(Point::new(0.0, 0.0), Point::new(3.0, 4.0)), 5.0));
}

#[test]
fn distance_is_symmetric() {
    let p = Point::new(-2.0, 9.5);
    let q = Point::new(14.0, -1.0);
    assert!(approx_eq(distance(p, q), distance(q, p)));
    assert!(approx_eq(p.distance(q), distance(p, q)));
}

#[test]
fn distance_to_self_is_zero() {
    let p = Point::new(42.0, 17.0);
    assert_eq!(distance(p, p), 0.0);
}

// --- from_angle ---

#[test]
fn from_angle_zero_points_along_x() {
    assert!(point_approx_eq(from_angle(0.0), Point::new(1.0, 0.0)));
}

#[test]
fn from_angle_quarter_turn_points_along_y() {
    assert!(point_approx_eq(from_angle(FRAC_PI_2), Point::new(0.0, 1.0)));
}

#[test]
fn from_angle_half_turn_points_along_negative_x() {
    assert!(point_approx_eq(from_angle(PI), Point::new(-1.0, 0.0)));
}

#[test]
fn from_angle_is_unit_length() {
    for deg in 0..360 {
        let v = from_angle(f64::from(deg).to_radians());
        assert!(approx_eq(v.x.hypot(v.y), 1.0), "angle {deg}");
    }
}

// --- centroid ---

#[test]
fn centroid_empty_is_none() {
    assert!(centroid(&[]).is_none());
}

#[test]
fn centroid_single_point() {
    let c = centroid(&[Point::new(7.0, 8.0)]);
    assert_eq!(c, Some(Point::new(7.0, 8.0)));
}

#[test]
fn centroid_is_vertex_mean() {
    let pts = [
        Point::new(200.0, 300.0),
        Point::new(250.0, 400.0),
        Point::new(300.0, 300.0),
        Point::new(350.0, 400.0),
        Point::new(400.0, 500.0),
    ];
    let c = centroid(&pts).unwrap();
    assert!(point_approx_eq(c, Point::new(300.0, 380.0)));
}
