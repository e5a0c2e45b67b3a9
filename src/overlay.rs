use crate::constants::{
    BIO_ID, FALLBACK_ROOT_ID, INSTRUCTIONS_ID, LOADING_OVERLAY_ID, MAIN_CONTENT_ID,
    PANEL_OVERLAY_ID, READY_CLASS,
};
use crate::dom;
use portfolio_core::panel;
use portfolio_core::SectionId;
use web_sys as web;

#[inline]
pub fn show_loading(document: &web::Document) {
    if let Some(el) = document.get_element_by_id(LOADING_OVERLAY_ID) {
        dom::show(&el);
    }
}

#[inline]
pub fn hide_loading(document: &web::Document) {
    if let Some(el) = document.get_element_by_id(LOADING_OVERLAY_ID) {
        dom::hide(&el);
    }
}

/// Fill the static parts of the main view: biography and instructions.
pub fn render_static(document: &web::Document) {
    if let Some(el) = document.get_element_by_id(BIO_ID) {
        el.set_inner_html(&panel::render_bio());
    }
    if let Some(el) = document.get_element_by_id(INSTRUCTIONS_ID) {
        el.set_inner_html(&panel::render_instructions());
    }
}

/// Main content fades in through CSS once this class lands.
pub fn reveal_main(document: &web::Document) {
    if let Some(el) = document.get_element_by_id(MAIN_CONTENT_ID) {
        _ = el.class_list().add_1(READY_CLASS);
    }
}

/// Replace the 3D page with the static links view.
pub fn show_fallback(document: &web::Document) {
    for id in [MAIN_CONTENT_ID, LOADING_OVERLAY_ID, PANEL_OVERLAY_ID] {
        if let Some(el) = document.get_element_by_id(id) {
            dom::hide(&el);
        }
    }
    if let Some(el) = document.get_element_by_id(FALLBACK_ROOT_ID) {
        el.set_inner_html(&panel::render_fallback());
        dom::show(&el);
    }
}

/// Show the open section's panel, or clear and hide the overlay.
pub fn render_panel(document: &web::Document, active: Option<SectionId>) {
    let Some(el) = document.get_element_by_id(PANEL_OVERLAY_ID) else {
        return;
    };
    match panel::render_panel(active) {
        Some(markup) => {
            el.set_inner_html(&markup);
            dom::show(&el);
        }
        None => {
            el.set_inner_html("");
            dom::hide(&el);
        }
    }
}

/// Whether `target` is (inside) a close control of the panel overlay.
pub fn is_close_target(target: &web::Element) -> bool {
    let selector = format!("[{}=\"{}\"]", panel::CLOSE_ACTION_ATTR, panel::CLOSE_ACTION);
    matches!(target.closest(&selector), Ok(Some(_)))
}
