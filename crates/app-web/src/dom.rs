use wasm_bindgen::JsCast;
use web_sys as web;

use crate::constants::CANVAS_ID;

#[inline]
pub fn window_document() -> Option<web::Document> {
    web::window().and_then(|w| w.document())
}

/// Find the scene canvas, creating and attaching a full-viewport one if the
/// host page does not provide it.
pub fn get_or_create_canvas(document: &web::Document) -> Option<web::HtmlCanvasElement> {
    if let Some(existing) = document.get_element_by_id(CANVAS_ID) {
        return existing.dyn_into::<web::HtmlCanvasElement>().ok();
    }
    let canvas = document
        .create_element("canvas")
        .ok()?
        .dyn_into::<web::HtmlCanvasElement>()
        .ok()?;
    canvas.set_id(CANVAS_ID);
    let _ = canvas.set_attribute(
        "style",
        "position:fixed;top:0;left:0;width:100vw;height:100vh;display:block;",
    );
    document.body()?.append_child(&canvas).ok()?;
    Some(canvas)
}

pub fn sync_canvas_backing_size(canvas: &web::HtmlCanvasElement) {
    if let Some(w) = web::window() {
        let dpr = w.device_pixel_ratio();
        let rect = canvas.get_bounding_client_rect();
        let w_px = (rect.width() * dpr) as u32;
        let h_px = (rect.height() * dpr) as u32;
        canvas.set_width(w_px.max(1));
        canvas.set_height(h_px.max(1));
    }
}

/// Viewport size in CSS pixels, the unit the effect layout works in.
pub fn viewport_size() -> (f32, f32) {
    match web::window() {
        Some(w) => {
            let width = w.inner_width().ok().and_then(|v| v.as_f64()).unwrap_or(1.0);
            let height = w.inner_height().ok().and_then(|v| v.as_f64()).unwrap_or(1.0);
            (width.max(1.0) as f32, height.max(1.0) as f32)
        }
        None => (1.0, 1.0),
    }
}
