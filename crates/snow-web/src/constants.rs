// Front-end wiring constants.

pub const CANVAS_ID: &str = "scene-canvas";
pub const TREE_MODEL_URL: &str = "assets/models/tree.glb";

// Pointer drag sweeps a full rotation across the canvas height
pub const ROTATE_SPEED: f32 = 1.0;

// Per wheel notch dolly factor; below 1 zooms in
pub const ZOOM_STEP: f32 = 0.95;
