use super::*;

#[test]
fn backing_px_scales_by_dpr() {
    assert_eq!(backing_px(800.0, 1.0), 800);
    assert_eq!(backing_px(800.0, 2.0), 1600);
}

#[test]
fn backing_px_rounds_fractional_ratios() {
    assert_eq!(backing_px(333.0, 1.5), 500);
    assert_eq!(backing_px(101.0, 1.25), 126);
}

#[test]
fn backing_px_saturates_at_zero() {
    assert_eq!(backing_px(-10.0, 2.0), 0);
}
