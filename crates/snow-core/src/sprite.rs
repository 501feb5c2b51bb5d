//! Procedural snowflake sprite: a white disc whose alpha falls off linearly
//! from the center to the edge, equivalent to a radial gradient with stops
//! 1.0 at the center, 0.5 halfway out and 0.0 at the rim.

/// RGBA8 pixels for a `size` x `size` sprite, row-major.
pub fn flake_sprite_rgba(size: u32) -> Vec<u8> {
    let mut pixels = Vec::with_capacity((size * size * 4) as usize);
    let radius = size as f32 / 2.0;
    for y in 0..size {
        for x in 0..size {
            let dx = x as f32 + 0.5 - radius;
            let dy = y as f32 + 0.5 - radius;
            let r = (dx * dx + dy * dy).sqrt() / radius;
            let alpha = (1.0 - r).clamp(0.0, 1.0);
            pixels.extend_from_slice(&[255, 255, 255, (alpha * 255.0) as u8]);
        }
    }
    pixels
}
