use super::InputWiring;
use crate::input::{self, PointerInput};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Single-finger orbit. Only the first active touch is tracked.
pub(super) fn wire_touch(w: &InputWiring) {
    listen(w, "touchstart", |ev| {
        first_touch(ev).map(|(client_x, client_y)| PointerInput::Down { client_x, client_y })
    });
    listen(w, "touchmove", |ev| {
        first_touch(ev).map(|(client_x, client_y)| PointerInput::Move { client_x, client_y })
    });
    listen(w, "touchend", |_| Some(PointerInput::Up));
    listen(w, "touchcancel", |_| Some(PointerInput::Cancel));
}

fn first_touch(ev: &web::TouchEvent) -> Option<(f64, f64)> {
    ev.touches()
        .get(0)
        .map(|t| (t.client_x() as f64, t.client_y() as f64))
}

fn listen(w: &InputWiring, event: &str, to_input: fn(&web::TouchEvent) -> Option<PointerInput>) {
    let wiring = w.clone();
    let closure = Closure::wrap(Box::new(move |ev: web::TouchEvent| {
        if let Some(pointer) = to_input(&ev) {
            wiring.send(input::pointer_command(pointer));
        }
    }) as Box<dyn FnMut(_)>);
    _ = w
        .container
        .add_event_listener_with_callback(event, closure.as_ref().unchecked_ref());
    closure.forget();
}
