use super::CubeWiring;
use crate::dom;
use gloo::events::EventListener;

/// Keep the canvas backing store and the scene camera in step with the mount.
pub fn wire_cube_resize(w: &CubeWiring) -> EventListener {
    let w = w.clone();
    EventListener::new(&w.window.clone(), "resize", move |_| {
        dom::sync_canvas_backing_size(&w.canvas);
        let bounds = dom::element_bounds(&w.mount);
        if !w.scene.borrow_mut().resize(bounds) {
            log::debug!("[cube] resize skipped for {bounds:?}");
        }
    })
}
