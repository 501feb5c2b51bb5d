// Host-side tests for the snowfall simulation.

use snow_core::constants::{SNOW_MAX_RANGE, SNOW_SPEED_SCALE};
use snow_core::snow::SnowField;

const COUNT: usize = 500;

fn make_field(seed: u64) -> SnowField {
    SnowField::new(COUNT, SNOW_MAX_RANGE, SNOW_SPEED_SCALE, seed)
}

#[test]
fn initial_positions_lie_inside_spawn_box() {
    let field = make_field(7);
    for i in 0..field.count() {
        let x = field.positions[i * 3];
        let y = field.positions[i * 3 + 1];
        let z = field.positions[i * 3 + 2];
        assert!(x >= -SNOW_MAX_RANGE / 2.0 && x <= SNOW_MAX_RANGE / 2.0);
        assert!((0.0..=SNOW_MAX_RANGE).contains(&y));
        assert!(z >= -SNOW_MAX_RANGE / 2.0 && z <= SNOW_MAX_RANGE / 2.0);
        // coordinates are floored to whole units
        assert_eq!(x, x.floor());
        assert_eq!(y, y.floor());
        assert_eq!(z, z.floor());
    }
}

#[test]
fn initial_fall_velocity_is_always_downward() {
    let field = make_field(11);
    for v in &field.velocities {
        assert!(v.y < 0.0, "vy must be negative, got {}", v.y);
        // vy = floor(U(0,s) + s/2) * -0.05 with s = 3.2 lands in [-0.2, -0.05]
        assert!(v.y >= -0.05 * (SNOW_SPEED_SCALE * 1.5).floor() - 1e-6);
        assert!(v.x.abs() <= 0.1 * (SNOW_SPEED_SCALE / 2.0 + 1.0));
        assert!(v.z.abs() <= 0.1 * (SNOW_SPEED_SCALE / 2.0 + 1.0));
    }
}

#[test]
fn particle_count_is_invariant_across_updates() {
    let mut field = make_field(3);
    for step in 0..300 {
        field.update(step as f64 * 16.0);
    }
    assert_eq!(field.count(), COUNT);
    assert_eq!(field.positions.len(), COUNT * 3);
    assert_eq!(field.velocities.len(), COUNT);
}

#[test]
fn y_stays_inside_spawn_range_forever() {
    let mut field = make_field(5);
    // Slowest flakes fall at 0.05/tick; 25_000 ticks cycles the whole box.
    for step in 0..25_000u64 {
        field.update(step as f64 * 16.0);
    }
    for i in 0..field.count() {
        let y = field.positions[i * 3 + 1];
        assert!(
            (0.0..=field.range_max()).contains(&y),
            "particle {i} escaped: y = {y}"
        );
    }
}

#[test]
fn wraparound_resets_to_top_keeping_horizontal_position() {
    let mut field = make_field(1);
    field.positions[0] = 123.0;
    field.positions[1] = 5.0;
    field.positions[2] = -77.0;
    field.velocities[0].y = -10.0;
    let x_before = field.positions[0];
    let z_before = field.positions[2];
    field.update(0.0);
    assert_eq!(field.positions[1], field.range_max());
    // x/z keep drifting by at most the sway amplitude, they are not reset
    assert!((field.positions[0] - x_before).abs() <= 0.1 + 1e-6);
    assert!((field.positions[2] - z_before).abs() <= 0.1 + 1e-6);
}

#[test]
fn horizontal_drift_is_bounded_per_tick() {
    let mut field = make_field(13);
    let mut prev = field.positions.clone();
    for step in 1..200u64 {
        field.update(step as f64 * 17.3);
        for i in 0..field.count() {
            let dx = field.positions[i * 3] - prev[i * 3];
            let dz = field.positions[i * 3 + 2] - prev[i * 3 + 2];
            assert!(dx.abs() <= 0.1 + 1e-6, "dx out of bounds: {dx}");
            assert!(dz.abs() <= 0.1 + 1e-6, "dz out of bounds: {dz}");
        }
        prev.copy_from_slice(&field.positions);
    }
}

#[test]
fn same_seed_and_time_sequence_is_deterministic() {
    let mut a = make_field(42);
    let mut b = make_field(42);
    assert_eq!(a.positions, b.positions);
    for step in 0..50u64 {
        let t = step as f64 * 16.6;
        a.update(t);
        b.update(t);
    }
    assert_eq!(a.positions, b.positions);
}

#[test]
fn update_marks_buffer_dirty_exactly_once() {
    let mut field = make_field(9);
    assert!(field.take_dirty(), "fresh field needs an initial upload");
    assert!(!field.take_dirty());
    field.update(16.0);
    assert!(field.take_dirty());
    assert!(!field.take_dirty());
}
