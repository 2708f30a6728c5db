//! Browser front-end: canvas bootstrap, WebGPU setup, frame loop, events.
//!
//! The whole crate is wasm-only; on other targets it compiles to nothing so
//! workspace-wide builds and tests stay green.
#![cfg(target_arch = "wasm32")]

mod constants;
mod dom;
mod events;
mod frame;
mod overlay;
mod render;

use app_core::{EffectParams, EffectsDirector};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;

#[wasm_bindgen(start)]
pub async fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);

    let document = dom::window_document().ok_or_else(|| JsValue::from_str("no document"))?;
    let canvas =
        dom::get_or_create_canvas(&document).ok_or_else(|| JsValue::from_str("no canvas"))?;
    dom::sync_canvas_backing_size(&canvas);

    let (width, height) = dom::viewport_size();
    let params = EffectParams {
        // Fresh scatter on every page load.
        seed: js_sys::Date::now() as u64,
        ..EffectParams::default()
    };
    let director = EffectsDirector::new(&params, width, height);
    log::info!(
        "effect ready: {} confetti, {} ribbons, {}x{}",
        params.confetti_count,
        params.ribbon_count,
        width,
        height
    );

    let gpu = frame::init_gpu(&canvas).await;
    let overlay = overlay::create(&document);

    let ctx = Rc::new(RefCell::new(frame::FrameContext::new(
        director, canvas, gpu, overlay,
    )));
    events::register(ctx.clone());
    frame::start_loop(ctx);
    Ok(())
}
