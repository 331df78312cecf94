#![cfg(target_arch = "wasm32")]
use desk_core::scene::DeskScene;
use desk_core::{DeskAnimation, OrbitConfig, SteamConfig};
use instant::Instant;
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
mod input;
mod page;
mod render;
mod screen;

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

/// Stop animating when the page goes away and pick up again if it comes
/// back from the back/forward cache.
fn wire_page_lifecycle(window: &web::Window, frame_ctx: &Rc<RefCell<frame::FrameContext<'static>>>) {
    let animation = frame_ctx.borrow().animation.clone();
    let on_hide = Closure::wrap(Box::new(move || {
        animation.borrow_mut().stop();
    }) as Box<dyn FnMut()>);
    _ = window.add_event_listener_with_callback("pagehide", on_hide.as_ref().unchecked_ref());
    on_hide.forget();

    let frame_ctx = frame_ctx.clone();
    let on_show = Closure::wrap(Box::new(move |ev: web::PageTransitionEvent| {
        if ev.persisted() {
            frame::resume_loop(&frame_ctx);
        }
    }) as Box<dyn FnMut(_)>);
    _ = window.add_event_listener_with_callback("pageshow", on_show.as_ref().unchecked_ref());
    on_show.forget();
}

fn random_seed() -> u64 {
    (js_sys::Math::random() * u32::MAX as f64) as u64
}

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("desk-web starting");

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

    // Page chrome works even if WebGPU doesn't
    page::wire_page_chrome(&window, &document);

    let container = document
        .get_element_by_id(constants::SCENE_CONTAINER_ID)
        .ok_or_else(|| anyhow::anyhow!("missing #{}", constants::SCENE_CONTAINER_ID))?;
    let canvas = dom::attach_canvas(&document, &container)?;
    wire_canvas_resize(&canvas);

    let seed = random_seed();
    let animation = Rc::new(RefCell::new(
        DeskAnimation::new(OrbitConfig::default(), SteamConfig::default(), seed)
            .map_err(|e| anyhow::anyhow!("animation config: {}", e))?,
    ));
    log::info!("[engine] desk animation ready (seed={})", seed);

    events::wire_input_handlers(
        events::InputWiring {
            container,
            animation: animation.clone(),
        },
        &document,
    );

    let scene = DeskScene::build(seed);
    let steam_capacity = animation.borrow().steam.len();
    let gpu = frame::init_gpu(&canvas, &scene, steam_capacity).await;
    let painter = match screen::ScreenPainter::new(&document) {
        Ok(p) => Some(p),
        Err(e) => {
            log::error!("[screen] {:?}", e);
            None
        }
    };

    let now = Instant::now();
    let frame_ctx = Rc::new(RefCell::new(frame::FrameContext {
        animation,
        canvas,
        gpu,
        painter,
        started: now,
        last_instant: now,
        looping: false,
    }));
    wire_page_lifecycle(&window, &frame_ctx);
    frame::start_loop(frame_ctx);

    Ok(())
}
