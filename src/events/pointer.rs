use super::InputWiring;
use crate::input::{self, PointerInput};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

pub(super) fn wire_mouse(w: &InputWiring) {
    listen(w, "mousedown", |ev| PointerInput::Down {
        client_x: ev.client_x() as f64,
        client_y: ev.client_y() as f64,
    });
    listen(w, "mousemove", |ev| PointerInput::Move {
        client_x: ev.client_x() as f64,
        client_y: ev.client_y() as f64,
    });
    listen(w, "mouseup", |_| PointerInput::Up);
    listen(w, "mouseleave", |_| PointerInput::Leave);
}

fn listen(w: &InputWiring, event: &str, to_input: fn(&web::MouseEvent) -> PointerInput) {
    let wiring = w.clone();
    let closure = Closure::wrap(Box::new(move |ev: web::MouseEvent| {
        wiring.send(input::pointer_command(to_input(&ev)));
    }) as Box<dyn FnMut(_)>);
    _ = w
        .container
        .add_event_listener_with_callback(event, closure.as_ref().unchecked_ref());
    closure.forget();
}
