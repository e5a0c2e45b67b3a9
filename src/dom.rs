use crate::input;
use portfolio_core::Viewport;
use wasm_bindgen::JsCast;
use web_sys as web;

#[inline]
pub fn window_document() -> Option<web::Document> {
    web::window().and_then(|w| w.document())
}

pub fn element_by_id<T: JsCast>(document: &web::Document, id: &str) -> anyhow::Result<T> {
    document
        .get_element_by_id(id)
        .ok_or_else(|| anyhow::anyhow!("missing #{id}"))?
        .dyn_into::<T>()
        .map_err(|e| anyhow::anyhow!(format!("#{id}: {:?}", e)))
}

/// Container bounds in client coordinates.
pub fn element_bounds(el: &web::Element) -> Viewport {
    let rect = el.get_bounding_client_rect();
    Viewport::new(
        rect.left() as f32,
        rect.top() as f32,
        rect.width() as f32,
        rect.height() as f32,
    )
}

pub fn sync_canvas_backing_size(canvas: &web::HtmlCanvasElement) {
    if let Some(w) = web::window() {
        let rect = canvas.get_bounding_client_rect();
        let (w_px, h_px) = input::backing_size(rect.width(), rect.height(), w.device_pixel_ratio());
        if canvas.width() != w_px {
            canvas.set_width(w_px);
        }
        if canvas.height() != h_px {
            canvas.set_height(h_px);
        }
    }
}

pub fn set_body_cursor(document: &web::Document, cursor: &str) {
    if let Some(body) = document.body() {
        _ = body.style().set_property("cursor", cursor);
    }
}

#[inline]
pub fn show(el: &web::Element) {
    _ = el.class_list().remove_1(crate::constants::HIDDEN_CLASS);
    _ = el.remove_attribute("style");
}

#[inline]
pub fn hide(el: &web::Element) {
    _ = el.class_list().add_1(crate::constants::HIDDEN_CLASS);
    // fallback for environments without the stylesheet
    _ = el.set_attribute("style", "display:none");
}
