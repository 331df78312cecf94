use super::InputWiring;
use crate::constants::{ZOOM_BUTTON_STEP, ZOOM_IN_ID, ZOOM_OUT_ID};
use crate::dom;
use crate::input;
use desk_core::CameraCommand;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Wheel zoom. Registered non-passive so the page doesn't scroll underneath.
pub(super) fn wire_wheel(w: &InputWiring) {
    let wiring = w.clone();
    let closure = Closure::wrap(Box::new(move |ev: web::WheelEvent| {
        ev.prevent_default();
        let delta = input::wheel_zoom_delta(ev.delta_y(), ev.delta_mode());
        wiring.send(CameraCommand::Zoom { delta });
    }) as Box<dyn FnMut(_)>);
    let opts = web::AddEventListenerOptions::new();
    opts.set_passive(false);
    _ = w
        .container
        .add_event_listener_with_callback_and_add_event_listener_options(
            "wheel",
            closure.as_ref().unchecked_ref(),
            &opts,
        );
    closure.forget();
}

pub(super) fn wire_zoom_buttons(w: &InputWiring, document: &web::Document) {
    for (id, delta) in [(ZOOM_IN_ID, -ZOOM_BUTTON_STEP), (ZOOM_OUT_ID, ZOOM_BUTTON_STEP)] {
        let wiring = w.clone();
        dom::add_click_listener(document, id, move || {
            wiring.send(CameraCommand::Zoom { delta });
        });
    }
}
