//! Frame driver: one requestAnimationFrame loop advancing the camera rig,
//! the snowfall and the renderer. Runs until page teardown.

use crate::model::PendingTree;
use crate::render;
use snow_core::camera::{Camera, OrbitControls};
use snow_core::snow::SnowField;
use snow_core::viewport;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

pub struct FrameContext {
    pub snow: SnowField,
    pub camera: Camera,
    pub controls: Rc<RefCell<OrbitControls>>,
    pub canvas: web::HtmlCanvasElement,
    pub gpu: Option<render::GpuState<'static>>,
    pub pending_tree: PendingTree,
}

impl FrameContext {
    /// One tick. `elapsed_ms` is the monotonically increasing time the host
    /// hands to the animation callback.
    pub fn frame(&mut self, elapsed_ms: f64) {
        {
            let mut controls = self.controls.borrow_mut();
            if controls.update(&mut self.camera) {
                // change notification: re-derive the polar ceiling from the
                // new distance; it clamps from the next update on
                controls.refresh_polar_ceiling();
            }
        }

        self.snow.update(elapsed_ms);

        if let Some(g) = &mut self.gpu {
            if let Some(primitives) = self.pending_tree.borrow_mut().take() {
                g.add_tree(&primitives);
            }
            let w = self.canvas.width();
            let h = self.canvas.height();
            g.resize_if_needed(w, h);
            self.camera.aspect = viewport::aspect_ratio(w, h);
            if self.snow.take_dirty() {
                g.write_snow(&self.snow.positions);
            }
            if let Err(e) = g.render(&self.camera) {
                log::error!("render error: {:?}", e);
            }
        }
    }
}

pub async fn init_gpu(
    canvas: &web::HtmlCanvasElement,
    snow_positions: &[f32],
) -> Option<render::GpuState<'static>> {
    // leak a canvas clone to satisfy 'static lifetime for surface
    let leaked_canvas = Box::leak(Box::new(canvas.clone()));
    match render::GpuState::new(leaked_canvas, snow_positions).await {
        Ok(g) => Some(g),
        Err(e) => {
            log::error!("WebGPU init error: {:?}", e);
            None
        }
    }
}

pub fn start_loop(frame_ctx: Rc<RefCell<FrameContext>>) {
    let tick: Rc<RefCell<Option<Closure<dyn FnMut(f64)>>>> = Rc::new(RefCell::new(None));
    let tick_clone = tick.clone();
    let frame_ctx_tick = frame_ctx.clone();
    *tick.borrow_mut() = Some(Closure::wrap(Box::new(move |elapsed_ms: f64| {
        frame_ctx_tick.borrow_mut().frame(elapsed_ms);
        if let Some(w) = web::window() {
            let _ = w.request_animation_frame(
                tick_clone
                    .borrow()
                    .as_ref()
                    .unwrap()
                    .as_ref()
                    .unchecked_ref(),
            );
        }
    }) as Box<dyn FnMut(f64)>));
    if let Some(w) = web::window() {
        let _ = w.request_animation_frame(tick.borrow().as_ref().unwrap().as_ref().unchecked_ref());
    }
}
