use web_sys as web;

use crate::constants::OVERLAY_ID;

/// Build the stats overlay element and attach it to the document body.
pub fn create(document: &web::Document) -> Option<web::Element> {
    let el = document.create_element("div").ok()?;
    el.set_id(OVERLAY_ID);
    let _ = el.set_attribute(
        "style",
        "position:absolute;top:0;left:100px;padding:10px;color:white;\
         background-color:rgba(0,0,0,0.7);font:12px monospace;",
    );
    document.body()?.append_child(&el).ok()?;
    Some(el)
}

pub fn update(el: &Option<web::Element>, frame: u64, confetti: usize, ribbons: usize) {
    if let Some(el) = el {
        el.set_inner_html(&format!(
            "<strong>Frame:</strong> {}<br>\
             <strong>Confetti:</strong> {}<br>\
             <strong>Ribbons:</strong> {}",
            frame, confetti, ribbons
        ));
    }
}
