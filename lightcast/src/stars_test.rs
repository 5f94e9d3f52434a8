#![allow(clippy::float_cmp)]

use rand::SeedableRng;
use rand::rngs::StdRng;

use super::*;

fn rng() -> StdRng {
    StdRng::seed_from_u64(7)
}

fn in_range(v: f64, lo: f64, hi: f64) -> bool {
    v >= lo && v <= hi
}

// =============================================================
// populate
// =============================================================

#[test]
fn populate_creates_requested_count() {
    let field = StarField::populate(&mut rng(), 500, 800.0, 600.0);
    assert_eq!(field.len(), 500);
    assert!(!field.is_empty());
}

#[test]
fn populate_zero_is_empty() {
    let field = StarField::populate(&mut rng(), 0, 800.0, 600.0);
    assert!(field.is_empty());
}

#[test]
fn populate_respects_bounds() {
    let field = StarField::populate(&mut rng(), 1000, 800.0, 600.0);
    for star in field.stars() {
        assert!(star.pos.x >= 0.0 && star.pos.x < 800.0);
        assert!(star.pos.y >= 0.0 && star.pos.y < 600.0);
        assert!(star.size >= STAR_SIZE_MIN && star.size < STAR_SIZE_MAX);
        assert!(star.brightness >= STAR_BRIGHTNESS_MIN && star.brightness < STAR_BRIGHTNESS_MAX);
        assert!(star.flicker >= STAR_FLICKER_MIN && star.flicker < STAR_FLICKER_MAX);
    }
}

#[test]
fn populate_on_empty_canvas_places_stars_at_origin() {
    let field = StarField::populate(&mut rng(), 10, 0.0, 0.0);
    assert!(field.stars().iter().all(|s| s.pos == Point::new(0.0, 0.0)));
}

#[test]
fn populate_is_reproducible_for_a_seed() {
    let a = StarField::populate(&mut rng(), 50, 640.0, 480.0);
    let b = StarField::populate(&mut rng(), 50, 640.0, 480.0);
    assert_eq!(a.stars(), b.stars());
}

// =============================================================
// twinkle
// =============================================================

#[test]
fn twinkle_step_is_bounded_by_flicker() {
    let mut r = rng();
    let mut field = StarField::populate(&mut r, 200, 800.0, 600.0);
    let before = field.stars().to_vec();
    field.twinkle(&mut r);
    for (old, new) in before.iter().zip(field.stars()) {
        assert!((new.brightness - old.brightness).abs() <= old.flicker);
        assert_eq!(new.pos, old.pos);
        assert_eq!(new.size, old.size);
    }
}

#[test]
fn brightness_stays_in_range_over_many_frames() {
    let mut r = rng();
    let mut field = StarField::populate(&mut r, 100, 800.0, 600.0);
    for _ in 0..5_000 {
        field.twinkle(&mut r);
    }
    for star in field.stars() {
        assert!(in_range(star.brightness, STAR_BRIGHTNESS_MIN, STAR_BRIGHTNESS_MAX));
    }
}

#[test]
fn twinkle_clamps_at_ceiling() {
    let mut star = Star {
        pos: Point::new(0.0, 0.0),
        size: 1.0,
        brightness: STAR_BRIGHTNESS_MAX,
        flicker: 1.0,
    };
    let mut r = rng();
    for _ in 0..100 {
        star.twinkle(&mut r);
        assert!(star.brightness <= STAR_BRIGHTNESS_MAX);
    }
}

#[test]
fn twinkle_clamps_at_floor() {
    let mut star = Star {
        pos: Point::new(0.0, 0.0),
        size: 1.0,
        brightness: STAR_BRIGHTNESS_MIN,
        flicker: 1.0,
    };
    let mut r = rng();
    for _ in 0..100 {
        star.twinkle(&mut r);
        assert!(star.brightness >= STAR_BRIGHTNESS_MIN);
    }
}

#[test]
fn twinkle_without_flicker_leaves_brightness_alone() {
    let mut r = rng();
    for flicker in [0.0, -1.0, f64::NAN] {
        let mut star = Star {
            pos: Point::new(0.0, 0.0),
            size: 1.0,
            brightness: 150.0,
            flicker,
        };
        star.twinkle(&mut r);
        assert_eq!(star.brightness, 150.0);
    }
}
