use crate::overlay;
use crate::render;
use app_core::{EffectsDirector, InstanceRaw};
use instant::Instant;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

use crate::constants::OVERLAY_UPDATE_INTERVAL;

/// Everything the per-frame callback needs, shared with the event handlers
/// through an `Rc<RefCell<..>>`.
pub struct FrameContext<'a> {
    pub director: EffectsDirector,
    pub canvas: web::HtmlCanvasElement,
    pub gpu: Option<render::GpuState<'a>>,
    pub overlay: Option<web::Element>,

    pub last_instant: Instant,
    pub elapsed: f32,
    pub frame_count: u64,

    confetti_scratch: Vec<InstanceRaw>,
    ribbon_scratch: Vec<InstanceRaw>,
}

impl<'a> FrameContext<'a> {
    pub fn new(
        director: EffectsDirector,
        canvas: web::HtmlCanvasElement,
        gpu: Option<render::GpuState<'a>>,
        overlay: Option<web::Element>,
    ) -> Self {
        Self {
            director,
            canvas,
            gpu,
            overlay,
            last_instant: Instant::now(),
            elapsed: 0.0,
            frame_count: 0,
            confetti_scratch: Vec::new(),
            ribbon_scratch: Vec::new(),
        }
    }

    pub fn frame(&mut self) {
        let now = Instant::now();
        let dt = now - self.last_instant;
        self.last_instant = now;
        self.elapsed += dt.as_secs_f32();

        self.director.tick(self.elapsed);

        // Instance uploads happen only after the whole tick, so a frame
        // never mixes pre- and post-update transforms.
        self.confetti_scratch.clear();
        if let Some(field) = self.director.confetti() {
            field.write_instances(&mut self.confetti_scratch);
        }
        self.ribbon_scratch.clear();
        if let Some(field) = self.director.ribbon() {
            field.write_instances(&mut self.ribbon_scratch);
        }

        if let Some(g) = &mut self.gpu {
            g.resize_if_needed(self.canvas.width(), self.canvas.height());
            if let Err(e) = g.render(&self.confetti_scratch, &self.ribbon_scratch) {
                log::error!("render error: {:?}", e);
            }
        }

        self.frame_count += 1;
        if self.frame_count % OVERLAY_UPDATE_INTERVAL == 0 {
            overlay::update(
                &self.overlay,
                self.frame_count,
                self.confetti_scratch.len(),
                self.ribbon_scratch.len(),
            );
        }
    }

    /// Click handler: the confetti field is disposed on user input; the
    /// ribbons stay, mirroring the product behavior.
    pub fn dispose_confetti(&mut self) {
        self.director.dispose_confetti();
        if let Some(g) = &mut self.gpu {
            g.dispose_confetti();
        }
    }
}

pub async fn init_gpu(canvas: &web::HtmlCanvasElement) -> Option<render::GpuState<'static>> {
    // leak a canvas clone to satisfy 'static lifetime for surface
    let leaked_canvas = Box::leak(Box::new(canvas.clone()));
    match render::GpuState::new(leaked_canvas).await {
        Ok(g) => Some(g),
        Err(e) => {
            log::error!("WebGPU init error: {:?}", e);
            None
        }
    }
}

pub fn start_loop(frame_ctx: Rc<RefCell<FrameContext<'static>>>) {
    let tick: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
    let tick_clone = tick.clone();
    let frame_ctx_tick = frame_ctx.clone();
    *tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        frame_ctx_tick.borrow_mut().frame();
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
    }) as Box<dyn FnMut()>));
    if let Some(w) = web::window() {
        let _ = w.request_animation_frame(tick.borrow().as_ref().unwrap().as_ref().unchecked_ref());
    }
}
