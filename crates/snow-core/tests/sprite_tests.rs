// Host-side tests for the procedural flake sprite.

use snow_core::constants::SNOW_SPRITE_SIZE;
use snow_core::sprite::flake_sprite_rgba;

#[test]
fn sprite_has_expected_dimensions() {
    let px = flake_sprite_rgba(SNOW_SPRITE_SIZE);
    assert_eq!(px.len(), (SNOW_SPRITE_SIZE * SNOW_SPRITE_SIZE * 4) as usize);
}

#[test]
fn sprite_is_white_with_soft_edges() {
    let size = SNOW_SPRITE_SIZE;
    let px = flake_sprite_rgba(size);
    let alpha_at = |x: u32, y: u32| px[((y * size + x) * 4 + 3) as usize];
    let center = alpha_at(size / 2, size / 2);
    let corner = alpha_at(0, 0);
    assert!(center > 220, "center should be nearly opaque: {center}");
    assert_eq!(corner, 0, "corners lie outside the disc");
    // every pixel is pure white, only alpha varies
    for p in px.chunks_exact(4) {
        assert_eq!(&p[..3], &[255, 255, 255]);
    }
}

#[test]
fn alpha_decreases_from_center_to_edge() {
    let size = SNOW_SPRITE_SIZE;
    let px = flake_sprite_rgba(size);
    let row = size / 2;
    let mut prev = u8::MAX;
    for x in size / 2..size {
        let a = px[((row * size + x) * 4 + 3) as usize];
        assert!(a <= prev, "alpha must not increase outward");
        prev = a;
    }
}
