use crate::constants::{SWAY_AMPLITUDE, SWAY_FREQ_X, SWAY_FREQ_Z};
use glam::Vec3;
use rand::prelude::*;

/// Fixed-size field of falling snow particles.
///
/// Positions live in a flat interleaved x,y,z buffer that the renderer
/// uploads directly; velocities sit in a parallel array. `positions[3*i..]`
/// and `velocities[i]` always describe the same particle and the indexing
/// never changes over the field's lifetime.
pub struct SnowField {
    pub positions: Vec<f32>,
    pub velocities: Vec<Vec3>,
    range_max: f32,
    dirty: bool,
}

impl SnowField {
    /// Sample `count` particles inside the spawn box: x,z in
    /// [-range_max/2, range_max/2], y in [0, range_max]. Coordinates are
    /// floored to whole units, matching the coarse placement of the scene.
    pub fn new(count: usize, range_max: f32, speed_scale: f32, seed: u64) -> Self {
        let mut rng = StdRng::seed_from_u64(seed);
        let mut positions = Vec::with_capacity(count * 3);
        for _ in 0..count {
            let x = (rng.gen::<f32>() * range_max - range_max / 2.0).floor();
            let y = (rng.gen::<f32>() * range_max).floor();
            let z = (rng.gen::<f32>() * range_max - range_max / 2.0).floor();
            positions.extend_from_slice(&[x, y, z]);
        }
        let velocities = (0..count)
            .map(|_| {
                let vx = (rng.gen::<f32>() * speed_scale - speed_scale / 2.0).floor() * 0.1;
                let vy = (rng.gen::<f32>() * speed_scale + speed_scale / 2.0).floor() * -0.05;
                let vz = (rng.gen::<f32>() * speed_scale - speed_scale / 2.0).floor() * 0.1;
                Vec3::new(vx, vy, vz)
            })
            .collect::<Vec<_>>();
        log::debug!("[snow] field initialized: {} particles", count);
        Self {
            positions,
            velocities,
            range_max,
            dirty: true,
        }
    }

    #[inline]
    pub fn count(&self) -> usize {
        self.velocities.len()
    }

    #[inline]
    pub fn range_max(&self) -> f32 {
        self.range_max
    }

    /// Advance every particle by one frame. `elapsed_ms` is the monotonically
    /// increasing time since the frame loop started, in milliseconds.
    ///
    /// Horizontal motion is a bounded oscillation around the fall path; the
    /// vertical velocity is constant and non-positive. A particle whose y
    /// drops below zero reappears at the top of the spawn box, keeping its
    /// current x/z. Runs in O(count) with no allocation.
    pub fn update(&mut self, elapsed_ms: f64) {
        for (i, v) in self.velocities.iter().enumerate() {
            let dx = ((elapsed_ms * SWAY_FREQ_X * v.x as f64).sin() as f32) * SWAY_AMPLITUDE;
            let dz = ((elapsed_ms * SWAY_FREQ_Z * v.z as f64).cos() as f32) * SWAY_AMPLITUDE;
            let p = i * 3;
            self.positions[p] += dx;
            self.positions[p + 1] += v.y;
            self.positions[p + 2] += dz;
            if self.positions[p + 1] < 0.0 {
                self.positions[p + 1] = self.range_max;
            }
        }
        self.dirty = true;
    }

    /// True when the position buffer changed since the last call; clears the
    /// flag so the renderer re-uploads at most once per change.
    pub fn take_dirty(&mut self) -> bool {
        std::mem::take(&mut self.dirty)
    }
}
