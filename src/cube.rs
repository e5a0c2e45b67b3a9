use crate::constants::CUBE_MOUNT_ID;
use crate::dom;
use crate::events::{self, CubeWiring};
use crate::render::GpuState;
use gloo::events::EventListener;
use portfolio_core::{CubeScene, SceneConfig, Selection};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys as web;

/// The navigation cube mounted into the page: scene, canvas, GPU state and
/// the listeners feeding it.
pub struct CubeView {
    scene: Rc<RefCell<CubeScene>>,
    canvas: web::HtmlCanvasElement,
    gpu: Option<GpuState>,
    listeners: Vec<EventListener>,
}

impl CubeView {
    /// Create the canvas inside `#cube-mount`, bring up the GPU and start
    /// listening. Face clicks go straight into `selection`.
    pub async fn mount(
        document: &web::Document,
        selection: Rc<RefCell<Selection>>,
        seed: u64,
    ) -> anyhow::Result<Rc<RefCell<Self>>> {
        let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
        let mount: web::Element = dom::element_by_id(document, CUBE_MOUNT_ID)?;
        let canvas: web::HtmlCanvasElement = document
            .create_element("canvas")
            .map_err(|e| anyhow::anyhow!("{:?}", e))?
            .dyn_into()
            .map_err(|e| anyhow::anyhow!("{:?}", e))?;
        _ = canvas.set_attribute("style", "display:block;width:100%;height:100%");
        mount
            .append_child(&canvas)
            .map_err(|e| anyhow::anyhow!("{:?}", e))?;
        dom::sync_canvas_backing_size(&canvas);

        let gpu = match GpuState::new(&canvas).await {
            Ok(g) => g,
            Err(e) => {
                canvas.remove();
                return Err(e);
            }
        };

        let scene = Rc::new(RefCell::new(CubeScene::new(
            SceneConfig {
                seed,
                ..SceneConfig::default()
            },
            dom::element_bounds(&mount),
            move |id| {
                selection.borrow_mut().select(id);
            },
        )));

        let wiring = CubeWiring {
            document: document.clone(),
            window,
            canvas: canvas.clone(),
            mount,
            scene: scene.clone(),
        };
        let mut listeners = events::wire_cube_pointer(&wiring);
        listeners.push(events::wire_cube_resize(&wiring));
        log::info!(
            "[cube] mounted {}x{} px",
            canvas.width(),
            canvas.height()
        );

        Ok(Rc::new(RefCell::new(Self {
            scene,
            canvas,
            gpu: Some(gpu),
            listeners,
        })))
    }

    pub fn frame(&mut self, dt_sec: f32) {
        let snapshot = {
            let mut scene = self.scene.borrow_mut();
            scene.tick(dt_sec);
            scene.snapshot()
        };
        let (Some(snapshot), Some(gpu)) = (snapshot, self.gpu.as_mut()) else {
            return;
        };
        gpu.resize_if_needed(self.canvas.width(), self.canvas.height());
        match gpu.render(&snapshot) {
            Ok(()) => {}
            Err(wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated) => {
                log::debug!("[gpu] surface reconfigured");
            }
            Err(e) => log::error!("render error: {:?}", e),
        }
    }

    /// Unhook listeners, stop the scene, free the GPU and detach the canvas.
    /// Safe to call more than once.
    pub fn dispose(&mut self) {
        self.listeners.clear();
        self.scene.borrow_mut().dispose();
        if let Some(gpu) = self.gpu.take() {
            gpu.destroy();
            self.canvas.remove();
        }
    }
}

impl Drop for CubeView {
    fn drop(&mut self) {
        self.dispose();
    }
}
