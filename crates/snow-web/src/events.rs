//! Pointer and wheel wiring for the orbit controller.

use crate::constants::{ROTATE_SPEED, ZOOM_STEP};
use snow_core::camera::OrbitControls;
use std::cell::RefCell;
use std::f32::consts::TAU;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys as web;

#[derive(Default, Clone, Copy)]
pub struct DragState {
    pub active: bool,
    pub last_x: f32,
    pub last_y: f32,
}

/// Attach pointerdown/move/up and wheel handlers that feed rotation and
/// dolly deltas into the shared controller. The controller itself applies
/// damping and clamps on its per-frame update.
pub fn wire_orbit_input(canvas: &web::HtmlCanvasElement, controls: Rc<RefCell<OrbitControls>>) {
    let drag = Rc::new(RefCell::new(DragState::default()));

    // pointerdown
    {
        let drag_d = drag.clone();
        let canvas_d = canvas.clone();
        let closure = wasm_bindgen::closure::Closure::wrap(Box::new(move |ev: web::PointerEvent| {
            let mut ds = drag_d.borrow_mut();
            ds.active = true;
            ds.last_x = ev.client_x() as f32;
            ds.last_y = ev.client_y() as f32;
            let _ = canvas_d.set_pointer_capture(ev.pointer_id());
            ev.prevent_default();
        }) as Box<dyn FnMut(_)>);
        let _ = canvas
            .add_event_listener_with_callback("pointerdown", closure.as_ref().unchecked_ref());
        closure.forget();
    }

    // pointermove
    {
        let drag_m = drag.clone();
        let controls_m = controls.clone();
        let canvas_m = canvas.clone();
        let closure = wasm_bindgen::closure::Closure::wrap(Box::new(move |ev: web::PointerEvent| {
            let mut ds = drag_m.borrow_mut();
            if !ds.active {
                return;
            }
            let x = ev.client_x() as f32;
            let y = ev.client_y() as f32;
            let height = canvas_m.get_bounding_client_rect().height().max(1.0) as f32;
            let d_theta = TAU * (x - ds.last_x) / height * ROTATE_SPEED;
            let d_phi = TAU * (y - ds.last_y) / height * ROTATE_SPEED;
            controls_m.borrow_mut().rotate(d_theta, d_phi);
            ds.last_x = x;
            ds.last_y = y;
        }) as Box<dyn FnMut(_)>);
        if let Some(wnd) = web::window() {
            let _ = wnd
                .add_event_listener_with_callback("pointermove", closure.as_ref().unchecked_ref());
        }
        closure.forget();
    }

    // pointerup
    {
        let drag_u = drag.clone();
        let closure = wasm_bindgen::closure::Closure::wrap(Box::new(move |_ev: web::PointerEvent| {
            drag_u.borrow_mut().active = false;
        }) as Box<dyn FnMut(_)>);
        if let Some(wnd) = web::window() {
            let _ =
                wnd.add_event_listener_with_callback("pointerup", closure.as_ref().unchecked_ref());
        }
        closure.forget();
    }

    // wheel dolly
    {
        let controls_w = controls.clone();
        let closure = wasm_bindgen::closure::Closure::wrap(Box::new(move |ev: web::WheelEvent| {
            let factor = if ev.delta_y() < 0.0 {
                ZOOM_STEP
            } else {
                1.0 / ZOOM_STEP
            };
            controls_w.borrow_mut().dolly(factor);
            ev.prevent_default();
        }) as Box<dyn FnMut(_)>);
        let _ = canvas.add_event_listener_with_callback("wheel", closure.as_ref().unchecked_ref());
        closure.forget();
    }
}
