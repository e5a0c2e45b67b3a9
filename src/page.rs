use crate::capability;
use crate::constants::PANEL_OVERLAY_ID;
use crate::cube::CubeView;
use crate::frame::{FrameContext, FrameLoop};
use crate::header::HeaderView;
use crate::overlay;
use gloo::events::EventListener;
use gloo::timers::callback::Timeout;
use portfolio_core::{PageConfig, PageState, Selection, View};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys as web;

thread_local! {
    // The one mounted page; the pagehide hook empties it.
    static PAGE: RefCell<Option<Page>> = const { RefCell::new(None) };
}

/// Everything the host keeps alive while the page is shown. Field order is
/// drop order: the frame loop stops before the cube is torn down.
pub struct Page {
    frame_loop: Option<FrameLoop>,
    frame_ctx: Rc<RefCell<FrameContext>>,
    cube: Option<Rc<RefCell<CubeView>>>,
    header: Option<Rc<RefCell<HeaderView>>>,
    loading_timer: Option<Timeout>,
    listeners: Vec<EventListener>,
    selection: Rc<RefCell<Selection>>,
    state: PageState,
    document: web::Document,
}

impl Page {
    fn new(document: web::Document, state: PageState) -> Self {
        Self {
            frame_loop: None,
            frame_ctx: Rc::new(RefCell::new(FrameContext::new())),
            cube: None,
            header: None,
            loading_timer: None,
            listeners: Vec::new(),
            selection: Rc::new(RefCell::new(Selection::new())),
            state,
            document,
        }
    }

    fn ensure_frame_loop(&mut self) {
        if self.frame_loop.is_none() {
            self.frame_loop = Some(FrameLoop::start(self.frame_ctx.clone()));
        }
    }

    fn attach_header(&mut self, header: Rc<RefCell<HeaderView>>) {
        self.frame_ctx.borrow_mut().header = Some(header.clone());
        self.header = Some(header);
        self.ensure_frame_loop();
    }

    fn attach_cube(&mut self, cube: Rc<RefCell<CubeView>>) {
        if self.state.view() == View::Fallback {
            return;
        }
        self.frame_ctx.borrow_mut().cube = Some(cube.clone());
        self.cube = Some(cube);
        self.ensure_frame_loop();
    }

    fn loading_elapsed(&mut self) {
        if self.state.loading_elapsed() == View::Ready {
            overlay::hide_loading(&self.document);
            overlay::reveal_main(&self.document);
        }
    }

    /// 3D bring-up failed after the probe passed.
    fn degrade(&mut self) {
        self.state.degrade();
        self.loading_timer = None;
        self.frame_loop = None;
        self.frame_ctx.borrow_mut().cube = None;
        self.frame_ctx.borrow_mut().header = None;
        self.cube = None;
        self.header = None;
        self.listeners.clear();
        overlay::show_fallback(&self.document);
    }
}

impl Drop for Page {
    fn drop(&mut self) {
        log::info!("[page] unmounted");
    }
}

fn with_page(f: impl FnOnce(&mut Page)) {
    PAGE.with(|slot| {
        if let Some(page) = slot.borrow_mut().as_mut() {
            f(page);
        }
    });
}

/// Closing happens only through the close control inside the overlay.
fn wire_panel_close(document: &web::Document, selection: Rc<RefCell<Selection>>) -> Option<EventListener> {
    let overlay_el = document.get_element_by_id(PANEL_OVERLAY_ID)?;
    Some(EventListener::new(&overlay_el, "click", move |ev| {
        let Some(target) = ev.target().and_then(|t| t.dyn_into::<web::Element>().ok()) else {
            return;
        };
        if overlay::is_close_target(&target) {
            selection.borrow_mut().close();
        }
    }))
}

fn wire_pagehide(window: &web::Window) {
    let listener = EventListener::new(window, "pagehide", move |ev| {
        let persisted = ev
            .dyn_ref::<web::PageTransitionEvent>()
            .is_some_and(|e| e.persisted());
        if !PageState::unmounts_on_hide(persisted) {
            log::info!("[page] kept for back/forward cache");
            return;
        }
        let page = PAGE.with(|slot| slot.borrow_mut().take());
        drop(page);
    });
    // lives as long as the document
    listener.forget();
}

fn page_seed() -> u64 {
    js_sys::Date::now() as u64
}

/// Probe, pick the view and bring the page up.
pub async fn mount() -> anyhow::Result<()> {
    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| anyhow::anyhow!("no document"))?;

    overlay::render_static(&document);
    let capable = capability::has_3d_support(&document);
    let state = PageState::new(PageConfig::default(), capable);
    let loading_ms = state.loading_ms();
    let mut page = Page::new(document.clone(), state);

    if !capable {
        overlay::show_fallback(&document);
        PAGE.with(|slot| *slot.borrow_mut() = Some(page));
        wire_pagehide(&window);
        return Ok(());
    }

    overlay::show_loading(&document);
    overlay::render_panel(&document, None);
    {
        let document = document.clone();
        page.selection
            .borrow_mut()
            .subscribe(move |active| overlay::render_panel(&document, active));
    }
    if let Some(listener) = wire_panel_close(&document, page.selection.clone()) {
        page.listeners.push(listener);
    }
    page.loading_timer = Some(Timeout::new(loading_ms, || with_page(Page::loading_elapsed)));

    let seed = page_seed();
    let selection = page.selection.clone();
    PAGE.with(|slot| *slot.borrow_mut() = Some(page));
    wire_pagehide(&window);

    match HeaderView::mount(&document, seed) {
        Ok(header) => with_page(|page| page.attach_header(header)),
        Err(e) => log::error!("[header] mount failed: {:?}", e),
    }

    match CubeView::mount(&document, selection, seed.wrapping_add(1)).await {
        Ok(cube) => with_page(|page| page.attach_cube(cube)),
        Err(e) => {
            log::error!("[cube] mount failed: {:?}", e);
            with_page(Page::degrade);
        }
    }
    Ok(())
}
