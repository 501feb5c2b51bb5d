#![cfg(target_arch = "wasm32")]
//! Browser entrypoint: set up the canvas, the snow field, the camera rig and
//! the renderer, kick off the tree model load and start the frame loop.

use crate::constants::{CANVAS_ID, TREE_MODEL_URL};
use glam::Vec3;
use snow_core::camera::{Camera, OrbitControls};
use snow_core::constants::{
    CAMERA_EYE, CAMERA_FAR, CAMERA_FOV_DEGREES, CAMERA_NEAR, CAMERA_TARGET, SNOW_COUNT,
    SNOW_MAX_RANGE, SNOW_SPEED_SCALE,
};
use snow_core::snow::SnowField;
use snow_core::viewport;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys as web;

mod constants;
mod dom;
mod events;
mod frame;
mod model;
mod render;

fn wire_canvas_resize(canvas: &web::HtmlCanvasElement) {
    dom::sync_canvas_backing_size(canvas);
    let canvas_resize = canvas.clone();
    let resize_closure = Closure::wrap(Box::new(move || {
        dom::sync_canvas_backing_size(&canvas_resize);
    }) as Box<dyn FnMut()>);
    if let Some(window) = web::window() {
        _ = window
            .add_event_listener_with_callback("resize", resize_closure.as_ref().unchecked_ref());
    }
    resize_closure.forget();
}

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("snow-web starting");

    spawn_local(async move {
        if let Err(e) = init().await {
            log::error!("init error: {:?}", e);
        }
    });
    Ok(())
}

async fn init() -> anyhow::Result<()> {
    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| anyhow::anyhow!("no document"))?;

    let canvas_el = document
        .get_element_by_id(CANVAS_ID)
        .ok_or_else(|| anyhow::anyhow!("missing #{CANVAS_ID}"))?;
    let canvas: web::HtmlCanvasElement = canvas_el
        .dyn_into::<web::HtmlCanvasElement>()
        .map_err(|e| anyhow::anyhow!(format!("{:?}", e)))?;

    // Maintain canvas internal pixel size to match CSS size * clamped dpr
    wire_canvas_resize(&canvas);

    let snow = SnowField::new(
        SNOW_COUNT,
        SNOW_MAX_RANGE,
        SNOW_SPEED_SCALE,
        js_sys::Date::now() as u64,
    );

    let eye = Vec3::from(CAMERA_EYE);
    let target = Vec3::from(CAMERA_TARGET);
    let camera = Camera {
        eye,
        target,
        up: Vec3::Y,
        aspect: viewport::aspect_ratio(canvas.width(), canvas.height()),
        fovy_radians: CAMERA_FOV_DEGREES.to_radians(),
        znear: CAMERA_NEAR,
        zfar: CAMERA_FAR,
    };
    let controls = Rc::new(RefCell::new(OrbitControls::new(eye, target)));
    events::wire_orbit_input(&canvas, controls.clone());

    let gpu = frame::init_gpu(&canvas, &snow.positions).await;

    // One-shot model load, unordered with respect to frame ticks
    let pending_tree: model::PendingTree = Rc::new(RefCell::new(None));
    model::spawn_load(TREE_MODEL_URL, pending_tree.clone());

    let frame_ctx = Rc::new(RefCell::new(frame::FrameContext {
        snow,
        camera,
        controls,
        canvas,
        gpu,
        pending_tree,
    }));
    frame::start_loop(frame_ctx);

    Ok(())
}
