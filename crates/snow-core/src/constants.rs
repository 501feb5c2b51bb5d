// Shared scene tuning constants used by both the simulation and the web
// frontend. Everything is fixed at compile time; there is no runtime config.

// Snowfall
pub const SNOW_COUNT: usize = 5000;
pub const SNOW_MAX_RANGE: f32 = 1000.0; // spawn box: x,z in [-500, 500], y in [0, 1000]
pub const SNOW_SPRITE_SIZE: u32 = 32; // soft radial sprite, px
pub const SNOW_PARTICLE_SIZE: f32 = 8.0; // world-space quad size
pub const SNOW_SPEED_SCALE: f32 = SNOW_SPRITE_SIZE as f32 / 10.0;

// Per-tick sway applied on top of the constant fall velocity
pub const SWAY_FREQ_X: f64 = 0.001;
pub const SWAY_FREQ_Z: f64 = 0.0015;
pub const SWAY_AMPLITUDE: f32 = 0.1;

// Camera projection
pub const CAMERA_FOV_DEGREES: f32 = 45.0;
pub const CAMERA_NEAR: f32 = 0.1;
pub const CAMERA_FAR: f32 = 2000.0;

// Camera rig
pub const CAMERA_EYE: [f32; 3] = [0.0, 50.0, 500.0];
pub const CAMERA_TARGET: [f32; 3] = [0.0, 200.0, 0.0];
pub const MAX_CAMERA_DISTANCE: f32 = 500.0;
pub const DAMPING_FACTOR: f32 = 0.2;

// Polar-angle ceiling bands by distance to target. Closer zoom gets a looser
// ceiling so the user can look steeply down at the tree; at long range the
// tight ceiling keeps the view above the horizon. Contractual values.
pub const POLAR_NEAR_DISTANCE: f32 = 400.0;
pub const POLAR_MID_DISTANCE: f32 = 450.0;
pub const POLAR_CEILING_NEAR: f32 = 2.1;
pub const POLAR_CEILING_MID: f32 = 2.05;
pub const POLAR_CEILING_FAR: f32 = 1.98;

// Viewport
pub const MAX_PIXEL_RATIO: f64 = 2.0;

// Scene
pub const GROUND_PLANE_SIZE: f32 = 5000.0;
pub const TREE_SCALE: f32 = 10.0;
pub const TREE_POSITION: [f32; 3] = [0.0, -50.0, 0.0];
pub const LIGHT_POSITION: [f32; 3] = [0.0, 500.0, 0.0];
pub const LIGHT_RANGE: f32 = 1000.0;
pub const AMBIENT_LEVEL: f32 = 0.4; // 0x666666
pub const CLEAR_COLOR: [f64; 3] = [0.0, 0.0, 0.1875]; // 0x000030
