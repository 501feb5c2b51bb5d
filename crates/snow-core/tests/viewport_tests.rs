// Host-side tests for viewport sizing math.

use snow_core::viewport::{aspect_ratio, backing_size, clamp_pixel_ratio};

#[test]
fn aspect_ratio_matches_viewport() {
    assert_eq!(aspect_ratio(800, 600), 800.0 / 600.0);
    assert_eq!(aspect_ratio(1920, 1080), 1920.0 / 1080.0);
}

#[test]
fn aspect_ratio_survives_zero_height() {
    assert!(aspect_ratio(800, 0).is_finite());
}

#[test]
fn pixel_ratio_is_clamped_to_two() {
    assert_eq!(clamp_pixel_ratio(1.0), 1.0);
    assert_eq!(clamp_pixel_ratio(1.5), 1.5);
    assert_eq!(clamp_pixel_ratio(2.0), 2.0);
    // host reports 3 -> clamped to 2
    assert_eq!(clamp_pixel_ratio(3.0), 2.0);
}

#[test]
fn backing_size_applies_clamped_ratio() {
    assert_eq!(backing_size(800.0, 600.0, 1.0), (800, 600));
    assert_eq!(backing_size(800.0, 600.0, 3.0), (1600, 1200));
}

#[test]
fn backing_size_never_collapses_to_zero() {
    assert_eq!(backing_size(0.0, 0.0, 1.0), (1, 1));
}
