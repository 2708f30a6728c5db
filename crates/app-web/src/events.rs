use crate::dom;
use crate::frame::FrameContext;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Wire the window-level handlers: resize regenerates the effect layout,
/// click disposes the confetti field (the ribbons deliberately survive).
pub fn register(frame_ctx: Rc<RefCell<FrameContext<'static>>>) {
    if let Some(window) = web::window() {
        let resize_ctx = frame_ctx.clone();
        let on_resize = Closure::wrap(Box::new(move || {
            let (width, height) = dom::viewport_size();
            let mut ctx = resize_ctx.borrow_mut();
            dom::sync_canvas_backing_size(&ctx.canvas);
            ctx.director.resize(width, height);
        }) as Box<dyn FnMut()>);
        let _ = window
            .add_event_listener_with_callback("resize", on_resize.as_ref().unchecked_ref());
        on_resize.forget();

        let click_ctx = frame_ctx;
        let on_click = Closure::wrap(Box::new(move || {
            click_ctx.borrow_mut().dispose_confetti();
        }) as Box<dyn FnMut()>);
        let _ = window.add_event_listener_with_callback("click", on_click.as_ref().unchecked_ref());
        on_click.forget();
    }
}
