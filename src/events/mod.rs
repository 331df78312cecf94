use desk_core::{CameraCommand, DeskAnimation};
use std::cell::RefCell;
use std::rc::Rc;
use web_sys as web;

mod pointer;
mod touch;
mod zoom;

/// Everything the camera input handlers close over.
#[derive(Clone)]
pub struct InputWiring {
    pub container: web::Element,
    pub animation: Rc<RefCell<DeskAnimation>>,
}

impl InputWiring {
    fn send(&self, command: CameraCommand) {
        self.animation.borrow_mut().handle(command);
    }
}

pub fn wire_input_handlers(w: InputWiring, document: &web::Document) {
    pointer::wire_mouse(&w);
    touch::wire_touch(&w);
    zoom::wire_wheel(&w);
    zoom::wire_zoom_buttons(&w, document);
}
