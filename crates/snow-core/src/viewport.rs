//! Viewport math shared by the resize handler and the frame loop.

use crate::constants::MAX_PIXEL_RATIO;

/// Device pixel ratio used for the canvas backing store, capped at 2 so
/// high-density displays do not quadruple the fill cost.
#[inline]
pub fn clamp_pixel_ratio(device_pixel_ratio: f64) -> f64 {
    device_pixel_ratio.min(MAX_PIXEL_RATIO)
}

/// Backing-store size in physical pixels for a CSS-sized viewport.
pub fn backing_size(css_width: f64, css_height: f64, device_pixel_ratio: f64) -> (u32, u32) {
    let dpr = clamp_pixel_ratio(device_pixel_ratio);
    let w = (css_width * dpr) as u32;
    let h = (css_height * dpr) as u32;
    (w.max(1), h.max(1))
}

#[inline]
pub fn aspect_ratio(width: u32, height: u32) -> f32 {
    width as f32 / height.max(1) as f32
}
