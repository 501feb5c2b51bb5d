// Host-side tests for the orbit controller and the polar-angle ceiling.

use glam::Vec3;
use snow_core::camera::{polar_ceiling, Camera, OrbitControls};
use snow_core::constants::{
    CAMERA_EYE, CAMERA_FOV_DEGREES, CAMERA_FAR, CAMERA_NEAR, CAMERA_TARGET, MAX_CAMERA_DISTANCE,
};

fn make_rig() -> (OrbitControls, Camera) {
    let eye = Vec3::from(CAMERA_EYE);
    let target = Vec3::from(CAMERA_TARGET);
    let camera = Camera {
        eye,
        target,
        up: Vec3::Y,
        aspect: 16.0 / 9.0,
        fovy_radians: CAMERA_FOV_DEGREES.to_radians(),
        znear: CAMERA_NEAR,
        zfar: CAMERA_FAR,
    };
    (OrbitControls::new(eye, target), camera)
}

#[test]
fn polar_ceiling_bands_and_boundaries() {
    assert_eq!(polar_ceiling(100.0), 2.1);
    assert_eq!(polar_ceiling(399.9), 2.1);
    // exactly 400 belongs to the middle band
    assert_eq!(polar_ceiling(400.0), 2.05);
    assert_eq!(polar_ceiling(449.9), 2.05);
    // exactly 450 belongs to the far band
    assert_eq!(polar_ceiling(450.0), 1.98);
    assert_eq!(polar_ceiling(500.0), 1.98);
}

#[test]
fn ceiling_starts_at_far_band_before_any_change_event() {
    let (controls, _) = make_rig();
    assert_eq!(controls.max_polar_angle, 1.98);
}

#[test]
fn refresh_applies_the_band_for_the_current_distance() {
    let (mut controls, mut camera) = make_rig();
    // dolly well inside the near band and settle
    for _ in 0..200 {
        controls.dolly(0.9);
        if controls.update(&mut camera) {
            controls.refresh_polar_ceiling();
        }
    }
    assert!(controls.distance() < 400.0);
    assert_eq!(controls.max_polar_angle, 2.1);
}

#[test]
fn distance_is_clamped_to_max() {
    let (mut controls, mut camera) = make_rig();
    for _ in 0..50 {
        controls.dolly(2.0);
        controls.update(&mut camera);
    }
    assert!(controls.distance() <= MAX_CAMERA_DISTANCE + 1e-3);
    assert!((camera.eye - camera.target).length() <= MAX_CAMERA_DISTANCE + 1e-3);
}

#[test]
fn polar_angle_is_clamped_to_ceiling() {
    let (mut controls, mut camera) = make_rig();
    // drag hard toward the ground
    controls.rotate(0.0, -10.0);
    for _ in 0..100 {
        controls.update(&mut camera);
    }
    let offset = camera.eye - camera.target;
    let phi = (offset.y / offset.length()).acos();
    assert!(
        phi <= controls.max_polar_angle + 1e-4,
        "phi {phi} exceeds ceiling {}",
        controls.max_polar_angle
    );
}

#[test]
fn damped_input_decays_and_change_events_settle() {
    let (mut controls, mut camera) = make_rig();
    controls.rotate(0.5, 0.0);
    assert!(controls.update(&mut camera), "input must move the camera");
    let mut settled = false;
    for _ in 0..500 {
        if !controls.update(&mut camera) {
            settled = true;
            break;
        }
    }
    assert!(settled, "damping never settled");
}

#[test]
fn update_without_input_reports_no_change() {
    let (mut controls, mut camera) = make_rig();
    // first update snaps the eye onto the clamped sphere
    controls.update(&mut camera);
    for _ in 0..5 {
        controls.update(&mut camera);
    }
    assert!(!controls.update(&mut camera));
}

#[test]
fn camera_matrices_are_finite_and_aspect_sensitive() {
    let (_, mut camera) = make_rig();
    camera.aspect = 800.0 / 600.0;
    let proj = camera.projection_matrix();
    let view = camera.view_matrix();
    assert!(proj.is_finite());
    assert!(view.is_finite());
    camera.aspect = 2.0;
    let wide = camera.projection_matrix();
    assert_ne!(proj.col(0).x, wide.col(0).x);
}
