use super::helpers;
use crate::dom;
use anyhow::anyhow;
use portfolio_core::SectionId;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Pixel size of one label cell; the atlas stacks one cell per section.
pub(crate) const LABEL_CELL_PX: u32 = 256;
const LABEL_FONT: &str = "bold 32px Arial";

pub(crate) struct LabelAtlas {
    pub(crate) tex: wgpu::Texture,
    pub(crate) view: wgpu::TextureView,
}

/// Draw every section name into an offscreen 2D canvas, one cell each in
/// section order, and upload the pixels.
pub(crate) fn build_label_atlas(
    device: &wgpu::Device,
    queue: &wgpu::Queue,
) -> anyhow::Result<LabelAtlas> {
    let document = dom::window_document().ok_or_else(|| anyhow!("no document"))?;
    let width = LABEL_CELL_PX;
    let height = LABEL_CELL_PX * SectionId::ALL.len() as u32;
    let canvas: web::HtmlCanvasElement = document
        .create_element("canvas")
        .map_err(|e| anyhow!("{:?}", e))?
        .dyn_into()
        .map_err(|e| anyhow!("{:?}", e))?;
    canvas.set_width(width);
    canvas.set_height(height);
    let ctx: web::CanvasRenderingContext2d = canvas
        .get_context("2d")
        .map_err(|e| anyhow!("{:?}", e))?
        .ok_or_else(|| anyhow!("no 2d context for label atlas"))?
        .dyn_into()
        .map_err(|e| anyhow!("{:?}", e))?;

    ctx.set_fill_style_str("white");
    ctx.set_font(LABEL_FONT);
    ctx.set_text_align("center");
    ctx.set_text_baseline("middle");
    let half = LABEL_CELL_PX as f64 * 0.5;
    for id in SectionId::ALL {
        let y = (id.index() as u32 * LABEL_CELL_PX) as f64 + half;
        _ = ctx.fill_text(id.label(), half, y);
    }
    let pixels = ctx
        .get_image_data(0.0, 0.0, width as f64, height as f64)
        .map_err(|e| anyhow!("{:?}", e))?
        .data();

    let (tex, view) = helpers::create_texture(
        device,
        "label_atlas",
        width,
        height,
        wgpu::TextureFormat::Rgba8UnormSrgb,
        wgpu::TextureUsages::TEXTURE_BINDING | wgpu::TextureUsages::COPY_DST,
    );
    queue.write_texture(
        wgpu::TexelCopyTextureInfo {
            texture: &tex,
            mip_level: 0,
            origin: wgpu::Origin3d::ZERO,
            aspect: wgpu::TextureAspect::All,
        },
        &pixels.0,
        wgpu::TexelCopyBufferLayout {
            offset: 0,
            bytes_per_row: Some(width * 4),
            rows_per_image: Some(height),
        },
        wgpu::Extent3d {
            width,
            height,
            depth_or_array_layers: 1,
        },
    );
    Ok(LabelAtlas { tex, view })
}
