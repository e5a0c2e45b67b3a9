use crate::constants::{
    HEADER_CANVAS_ID, HEADER_DOT_MIN_RADIUS_PX, HEADER_FONT_FAMILY, HEADER_TEXT_COLOR,
};
use crate::dom;
use gloo::events::EventListener;
use portfolio_core::{AmbientConfig, AmbientFrame, AmbientScene};
use std::cell::RefCell;
use std::f64::consts::TAU;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys as web;

// Label glyphs fill 48 of the 128 texel rows of a label plane.
const LABEL_FONT_FRACTION: f32 = 48.0 / 128.0;

/// The decorative header strip painted with Canvas 2D.
pub struct HeaderView {
    canvas: web::HtmlCanvasElement,
    ctx: web::CanvasRenderingContext2d,
    scene: AmbientScene,
    _resize: Option<EventListener>,
}

impl HeaderView {
    pub fn mount(document: &web::Document, seed: u64) -> anyhow::Result<Rc<RefCell<Self>>> {
        let canvas: web::HtmlCanvasElement = dom::element_by_id(document, HEADER_CANVAS_ID)?;
        let ctx: web::CanvasRenderingContext2d = canvas
            .get_context("2d")
            .map_err(|e| anyhow::anyhow!("{:?}", e))?
            .ok_or_else(|| anyhow::anyhow!("no 2d context on #{HEADER_CANVAS_ID}"))?
            .dyn_into()
            .map_err(|e| anyhow::anyhow!("{:?}", e))?;
        dom::sync_canvas_backing_size(&canvas);
        let width = canvas.get_bounding_client_rect().width() as f32;
        let scene = AmbientScene::new(
            AmbientConfig {
                seed,
                ..AmbientConfig::default()
            },
            width,
        );
        let view = Rc::new(RefCell::new(Self {
            canvas: canvas.clone(),
            ctx,
            scene,
            _resize: None,
        }));

        let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
        let weak = Rc::downgrade(&view);
        let listener = EventListener::new(&window, "resize", move |_| {
            if let Some(view) = weak.upgrade() {
                view.borrow_mut().resize();
            }
        });
        view.borrow_mut()._resize = Some(listener);
        log::info!("[header] mounted at {width}px");
        Ok(view)
    }

    fn resize(&mut self) {
        dom::sync_canvas_backing_size(&self.canvas);
        let width = self.canvas.get_bounding_client_rect().width() as f32;
        self.scene.resize(width);
    }

    pub fn frame(&mut self, dt_sec: f32) {
        self.scene.tick(dt_sec);
        self.paint(&self.scene.frame());
    }

    fn paint(&self, frame: &AmbientFrame) {
        let ctx = &self.ctx;
        let sx = self.canvas.width() as f64 / frame.width_px.max(1.0) as f64;
        let sy = self.canvas.height() as f64 / frame.height_px.max(1.0) as f64;
        _ = ctx.set_transform(sx, 0.0, 0.0, sy, 0.0, 0.0);
        ctx.clear_rect(0.0, 0.0, frame.width_px as f64, frame.height_px as f64);

        let [r, g, b, a] = frame.dot_rgba;
        ctx.set_global_alpha(a as f64);
        ctx.set_fill_style_str(&format!(
            "rgb({}, {}, {})",
            (r * 255.0).round(),
            (g * 255.0).round(),
            (b * 255.0).round()
        ));
        ctx.begin_path();
        for dot in &frame.dots {
            let (x, y) = (dot.center.x as f64, dot.center.y as f64);
            let radius = (dot.radius_px as f64).max(HEADER_DOT_MIN_RADIUS_PX);
            ctx.move_to(x + radius, y);
            _ = ctx.arc(x, y, radius, 0.0, TAU);
        }
        ctx.fill();

        ctx.set_fill_style_str(HEADER_TEXT_COLOR);
        ctx.set_text_align("center");
        ctx.set_text_baseline("middle");
        for text in &frame.texts {
            if text.opacity <= 0.0 {
                continue;
            }
            let font_px = (text.size.y * LABEL_FONT_FRACTION).round();
            ctx.set_font(&format!("bold {font_px}px {HEADER_FONT_FAMILY}"));
            ctx.set_global_alpha(text.opacity.clamp(0.0, 1.0) as f64);
            _ = ctx.fill_text(text.text, text.center.x as f64, text.center.y as f64);
        }
        ctx.set_global_alpha(1.0);
    }
}
