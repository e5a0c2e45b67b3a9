use crate::dom;
use crate::input;
use gloo::events::{EventListener, EventListenerOptions};
use portfolio_core::CubeScene;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys as web;

#[derive(Clone)]
pub struct CubeWiring {
    pub document: web::Document,
    pub window: web::Window,
    pub canvas: web::HtmlCanvasElement,
    pub mount: web::Element,
    pub scene: Rc<RefCell<CubeScene>>,
}

/// Hover, click, orbit drag and wheel zoom. Dropping the returned listeners
/// unregisters all of them.
pub fn wire_cube_pointer(w: &CubeWiring) -> Vec<EventListener> {
    vec![
        wire_pointermove(w),
        wire_pointerdown(w),
        wire_pointerup(w, "pointerup"),
        wire_pointerup(w, "pointercancel"),
        wire_click(w),
        wire_wheel(w),
    ]
}

// Hover is tracked on the window so leaving the canvas clears the highlight.
fn wire_pointermove(w: &CubeWiring) -> EventListener {
    let w = w.clone();
    EventListener::new(&w.window.clone(), "pointermove", move |ev| {
        let Some(ev) = ev.dyn_ref::<web::MouseEvent>() else {
            return;
        };
        let client = input::client_point(ev.client_x(), ev.client_y());
        let bounds = dom::element_bounds(&w.mount);
        let outcome = {
            let mut scene = w.scene.borrow_mut();
            scene.on_drag_move(client);
            scene.on_pointer_move(client, &bounds)
        };
        if let Some(outcome) = outcome {
            dom::set_body_cursor(&w.document, outcome.cursor.as_css());
        }
    })
}

fn wire_pointerdown(w: &CubeWiring) -> EventListener {
    let w = w.clone();
    EventListener::new(&w.canvas.clone(), "pointerdown", move |ev| {
        let Some(ev) = ev.dyn_ref::<web::PointerEvent>() else {
            return;
        };
        if !ev.is_primary() {
            return;
        }
        let client = input::client_point(ev.client_x(), ev.client_y());
        w.scene.borrow_mut().on_drag_start(client);
    })
}

fn wire_pointerup(w: &CubeWiring, event_type: &'static str) -> EventListener {
    let scene = w.scene.clone();
    EventListener::new(&w.window, event_type, move |_| {
        scene.borrow_mut().on_drag_end();
    })
}

// Canvas-level so clicks on the panel overlay never reach the cube.
fn wire_click(w: &CubeWiring) -> EventListener {
    let w = w.clone();
    EventListener::new(&w.canvas.clone(), "click", move |ev| {
        let Some(ev) = ev.dyn_ref::<web::MouseEvent>() else {
            return;
        };
        let client = input::client_point(ev.client_x(), ev.client_y());
        let bounds = dom::element_bounds(&w.mount);
        w.scene.borrow_mut().on_click(client, &bounds);
    })
}

fn wire_wheel(w: &CubeWiring) -> EventListener {
    let scene = w.scene.clone();
    EventListener::new_with_options(
        &w.canvas,
        "wheel",
        EventListenerOptions::enable_prevent_default(),
        move |ev| {
            let Some(ev) = ev.dyn_ref::<web::WheelEvent>() else {
                return;
            };
            ev.prevent_default();
            scene
                .borrow_mut()
                .on_wheel(input::wheel_delta_px(ev.delta_y(), ev.delta_mode()));
        },
    )
}
