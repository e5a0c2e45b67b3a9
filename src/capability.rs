use wasm_bindgen::JsCast;
use web_sys as web;

const CONTEXT_NAMES: [&str; 2] = ["webgl", "experimental-webgl"];

/// Whether a throwaway canvas hands out a WebGL context. Any DOM failure
/// counts as "no".
pub fn has_3d_support(document: &web::Document) -> bool {
    let canvas = match document
        .create_element("canvas")
        .ok()
        .and_then(|el| el.dyn_into::<web::HtmlCanvasElement>().ok())
    {
        Some(c) => c,
        None => return false,
    };
    let supported = CONTEXT_NAMES
        .iter()
        .any(|name| matches!(canvas.get_context(name), Ok(Some(_))));
    log::info!("[page] 3d capability: {supported}");
    supported
}
