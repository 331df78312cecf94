use crate::constants::MAX_FRAME_DT_SEC;
use crate::dom;
use crate::render;
use crate::screen::ScreenPainter;
use desk_core::scene::DeskScene;
use desk_core::DeskAnimation;
use instant::Instant;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

pub struct FrameContext<'a> {
    pub animation: Rc<RefCell<DeskAnimation>>,
    pub canvas: web::HtmlCanvasElement,
    pub gpu: Option<render::GpuState<'a>>,
    pub painter: Option<ScreenPainter>,

    pub started: Instant,
    pub last_instant: Instant,
    /// True while a requestAnimationFrame chain is scheduled.
    pub looping: bool,
}

impl<'a> FrameContext<'a> {
    /// Run one frame. Returns false once the animation has been stopped so
    /// the loop stops rescheduling itself.
    pub fn frame(&mut self) -> bool {
        let now = Instant::now();
        let dt_sec = (now - self.last_instant)
            .as_secs_f32()
            .min(MAX_FRAME_DT_SEC);
        self.last_instant = now;
        let time_sec = (now - self.started).as_secs_f64();

        let mut animation = self.animation.borrow_mut();
        let Some(update) = animation.frame(time_sec, dt_sec) else {
            return false;
        };

        // Nothing to show the pixels on without a GPU, so skip the readback too
        let Some(g) = &mut self.gpu else {
            return true;
        };
        let pixels = self.painter.as_mut().and_then(|p| match p.draw(time_sec) {
            Ok(px) => Some(px),
            Err(e) => {
                log::error!("[screen] paint error: {:?}", e);
                None
            }
        });

        dom::sync_canvas_backing_size(&self.canvas);
        g.resize_if_needed(self.canvas.width(), self.canvas.height());
        if let Err(e) = g.render(&update, animation.steam.positions(), pixels.as_deref()) {
            log::error!("render error: {:?}", e);
        }
        true
    }
}

pub async fn init_gpu(
    canvas: &web::HtmlCanvasElement,
    scene: &DeskScene,
    steam_capacity: usize,
) -> Option<render::GpuState<'static>> {
    // leak a canvas clone to satisfy 'static lifetime for surface
    let leaked_canvas = Box::leak(Box::new(canvas.clone()));
    match render::GpuState::new(leaked_canvas, scene, steam_capacity).await {
        Ok(g) => Some(g),
        Err(e) => {
            log::error!("WebGPU init error: {:?}", e);
            None
        }
    }
}

pub fn start_loop(frame_ctx: Rc<RefCell<FrameContext<'static>>>) {
    frame_ctx.borrow_mut().looping = true;
    let tick: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
    let tick_clone = tick.clone();
    *tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        let mut ctx = frame_ctx.borrow_mut();
        if !ctx.frame() {
            ctx.looping = false;
            log::info!("[frame] loop stopped");
            return;
        }
        drop(ctx);
        request_frame(&tick_clone);
    }) as Box<dyn FnMut()>));
    request_frame(&tick);
}

/// Restart the animation after a stop. A chain that hasn't noticed the stop
/// yet is reused rather than doubled.
pub fn resume_loop(frame_ctx: &Rc<RefCell<FrameContext<'static>>>) {
    let restart = {
        let mut ctx = frame_ctx.borrow_mut();
        ctx.animation.borrow_mut().resume();
        // Don't count the time spent hidden as one long frame
        ctx.last_instant = Instant::now();
        !ctx.looping
    };
    if restart {
        log::info!("[frame] loop restarted");
        start_loop(frame_ctx.clone());
    }
}

fn request_frame(tick: &Rc<RefCell<Option<Closure<dyn FnMut()>>>>) {
    if let (Some(w), Some(cb)) = (web::window(), tick.borrow().as_ref()) {
        _ = w.request_animation_frame(cb.as_ref().unchecked_ref());
    }
}
