mod helpers;
mod labels;
mod pipelines;
mod targets;

use glam::Vec3;
use pipelines::{
    Globals, LineVertex, PointInstance, QuadInstance, ScenePipelines, QUAD_CORNERS, QUAD_INDICES,
};
use portfolio_core::constants::{
    AMBIENT_LIGHT, DIRECTIONAL_LIGHT, DIRECTIONAL_LIGHT_POS, FOG_COLOR, FOG_FAR, FOG_NEAR,
    PARTICLE_COLOR, PARTICLE_OPACITY, PARTICLE_SIZE, POINT_LIGHT, POINT_LIGHT_POS,
    POINT_LIGHT_RANGE, WIREFRAME_COLOR, WIREFRAME_OPACITY,
};
use portfolio_core::{FrameSnapshot, QuadKind};
use targets::DepthTarget;
use web_sys as web;
use wgpu::util::DeviceExt;

const MAX_QUADS: u64 = 12;
const MAX_LINE_VERTICES: u64 = 64;

fn scaled(rgb_intensity: [f32; 4]) -> [f32; 4] {
    let [r, g, b, i] = rgb_intensity;
    [r * i, g * i, b * i, 1.0]
}

fn with_alpha(rgb: [f32; 3], a: f32) -> [f32; 4] {
    [rgb[0], rgb[1], rgb[2], a]
}

/// GPU resources for the navigation cube canvas.
pub struct GpuState {
    surface: wgpu::Surface<'static>,
    device: wgpu::Device,
    queue: wgpu::Queue,
    config: wgpu::SurfaceConfiguration,
    depth: DepthTarget,
    pipelines: ScenePipelines,
    globals_buffer: wgpu::Buffer,
    bind_group: wgpu::BindGroup,
    atlas: wgpu::Texture,
    corner_vb: wgpu::Buffer,
    quad_ib: wgpu::Buffer,
    quad_instances: wgpu::Buffer,
    line_vb: wgpu::Buffer,
    point_instances: wgpu::Buffer,
    point_capacity: u64,
    encode_srgb: bool,
    width: u32,
    height: u32,
}

impl GpuState {
    pub async fn new(canvas: &web::HtmlCanvasElement) -> anyhow::Result<Self> {
        let width = canvas.width().max(1);
        let height = canvas.height().max(1);

        let instance = wgpu::Instance::new(&wgpu::InstanceDescriptor {
            backends: wgpu::Backends::GL | wgpu::Backends::BROWSER_WEBGPU,
            ..Default::default()
        });
        let surface = instance.create_surface(wgpu::SurfaceTarget::Canvas(canvas.clone()))?;
        let adapter = request_any_adapter(&instance, &surface)
            .await
            .ok_or_else(|| anyhow::anyhow!("No WebGPU/WebGL adapter"))?;
        log::info!("[gpu] adapter {:?}", adapter.get_info().backend);

        let (device, queue) = adapter
            .request_device(
                &wgpu::DeviceDescriptor {
                    label: None,
                    required_features: wgpu::Features::empty(),
                    required_limits: wgpu::Limits::downlevel_webgl2_defaults()
                        .using_resolution(adapter.limits()),
                    memory_hints: wgpu::MemoryHints::Performance,
                },
                None,
            )
            .await
            .map_err(|e| anyhow::anyhow!(format!("request_device error: {:?}", e)))?;

        let caps = surface.get_capabilities(&adapter);
        let format = caps
            .formats
            .iter()
            .copied()
            .find(|f| f.is_srgb())
            .or_else(|| caps.formats.first().copied())
            .ok_or_else(|| anyhow::anyhow!("surface reports no formats"))?;
        let alpha_mode = caps
            .alpha_modes
            .iter()
            .copied()
            .find(|m| *m == wgpu::CompositeAlphaMode::PreMultiplied)
            .or_else(|| caps.alpha_modes.first().copied())
            .unwrap_or(wgpu::CompositeAlphaMode::Auto);
        let config = wgpu::SurfaceConfiguration {
            usage: wgpu::TextureUsages::RENDER_ATTACHMENT,
            format,
            width,
            height,
            present_mode: wgpu::PresentMode::Fifo,
            alpha_mode,
            view_formats: vec![],
            desired_maximum_frame_latency: 2,
        };
        surface.configure(&device, &config);

        let depth = DepthTarget::new(&device, width, height);
        let pipelines = ScenePipelines::new(&device, format);
        let atlas = labels::build_label_atlas(&device, &queue)?;
        let sampler = device.create_sampler(&wgpu::SamplerDescriptor {
            label: Some("label_sampler"),
            mag_filter: wgpu::FilterMode::Linear,
            min_filter: wgpu::FilterMode::Linear,
            ..Default::default()
        });
        let globals_buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some("globals"),
            contents: bytemuck::bytes_of(&Globals::default()),
            usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
        });
        let bind_group = device.create_bind_group(&wgpu::BindGroupDescriptor {
            label: Some("cube_bg"),
            layout: &pipelines.bind_group_layout,
            entries: &[
                wgpu::BindGroupEntry {
                    binding: 0,
                    resource: globals_buffer.as_entire_binding(),
                },
                wgpu::BindGroupEntry {
                    binding: 1,
                    resource: wgpu::BindingResource::TextureView(&atlas.view),
                },
                wgpu::BindGroupEntry {
                    binding: 2,
                    resource: wgpu::BindingResource::Sampler(&sampler),
                },
            ],
        });

        let corner_vb = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some("corner_vb"),
            contents: bytemuck::cast_slice(&QUAD_CORNERS),
            usage: wgpu::BufferUsages::VERTEX,
        });
        let quad_ib = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some("quad_ib"),
            contents: bytemuck::cast_slice(&QUAD_INDICES),
            usage: wgpu::BufferUsages::INDEX,
        });
        let quad_instances = device.create_buffer(&wgpu::BufferDescriptor {
            label: Some("quad_instances"),
            size: MAX_QUADS * std::mem::size_of::<QuadInstance>() as u64,
            usage: wgpu::BufferUsages::VERTEX | wgpu::BufferUsages::COPY_DST,
            mapped_at_creation: false,
        });
        let line_vb = device.create_buffer(&wgpu::BufferDescriptor {
            label: Some("line_vb"),
            size: MAX_LINE_VERTICES * std::mem::size_of::<LineVertex>() as u64,
            usage: wgpu::BufferUsages::VERTEX | wgpu::BufferUsages::COPY_DST,
            mapped_at_creation: false,
        });
        let point_capacity = 64;
        let point_instances = create_point_buffer(&device, point_capacity);

        Ok(Self {
            surface,
            device,
            queue,
            config,
            depth,
            pipelines,
            globals_buffer,
            bind_group,
            atlas: atlas.tex,
            corner_vb,
            quad_ib,
            quad_instances,
            line_vb,
            point_instances,
            point_capacity,
            encode_srgb: !format.is_srgb(),
            width,
            height,
        })
    }

    pub fn resize_if_needed(&mut self, width: u32, height: u32) {
        let (width, height) = (width.max(1), height.max(1));
        if width == self.width && height == self.height {
            return;
        }
        self.width = width;
        self.height = height;
        self.config.width = width;
        self.config.height = height;
        self.surface.configure(&self.device, &self.config);
        self.depth.recreate(&self.device, width, height);
    }

    /// Draws one frame. Quads arrive sorted back to front; the half behind
    /// the cube center goes first, then wireframe and particles, then the
    /// front half, so translucent faces blend over what they cover.
    pub fn render(&mut self, frame: &FrameSnapshot) -> Result<(), wgpu::SurfaceError> {
        self.upload(frame);

        let output = match self.surface.get_current_texture() {
            Ok(t) => t,
            Err(e @ (wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated)) => {
                self.surface.configure(&self.device, &self.config);
                return Err(e);
            }
            Err(e) => return Err(e),
        };
        let view = output
            .texture
            .create_view(&wgpu::TextureViewDescriptor::default());

        let center_dist = frame.eye.length();
        let split = frame
            .quads
            .iter()
            .take_while(|q| q.model.w_axis.truncate().distance(frame.eye) > center_dist)
            .count() as u32;
        let quad_count = frame.quads.len().min(MAX_QUADS as usize) as u32;
        let split = split.min(quad_count);
        let line_count = (frame.wireframe.len() * 2).min(MAX_LINE_VERTICES as usize) as u32;
        let point_count = frame.particles.len() as u32;

        let mut encoder = self
            .device
            .create_command_encoder(&wgpu::CommandEncoderDescriptor {
                label: Some("cube_encoder"),
            });
        {
            let mut rp = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
                label: Some("cube_pass"),
                color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                    view: &view,
                    resolve_target: None,
                    ops: wgpu::Operations {
                        load: wgpu::LoadOp::Clear(wgpu::Color::TRANSPARENT),
                        store: wgpu::StoreOp::Store,
                    },
                })],
                depth_stencil_attachment: Some(wgpu::RenderPassDepthStencilAttachment {
                    view: &self.depth.view,
                    depth_ops: Some(wgpu::Operations {
                        load: wgpu::LoadOp::Clear(1.0),
                        store: wgpu::StoreOp::Store,
                    }),
                    stencil_ops: None,
                }),
                timestamp_writes: None,
                occlusion_query_set: None,
            });
            rp.set_bind_group(0, &self.bind_group, &[]);

            rp.set_pipeline(&self.pipelines.quad);
            rp.set_vertex_buffer(0, self.corner_vb.slice(..));
            rp.set_vertex_buffer(1, self.quad_instances.slice(..));
            rp.set_index_buffer(self.quad_ib.slice(..), wgpu::IndexFormat::Uint16);
            if split > 0 {
                rp.draw_indexed(0..QUAD_INDICES.len() as u32, 0, 0..split);
            }

            if line_count > 0 {
                rp.set_pipeline(&self.pipelines.line);
                rp.set_vertex_buffer(0, self.line_vb.slice(..));
                rp.draw(0..line_count, 0..1);
            }

            if point_count > 0 {
                rp.set_pipeline(&self.pipelines.point);
                rp.set_vertex_buffer(0, self.corner_vb.slice(..));
                rp.set_vertex_buffer(1, self.point_instances.slice(..));
                rp.draw_indexed(0..QUAD_INDICES.len() as u32, 0, 0..point_count);
            }

            if quad_count > split {
                rp.set_pipeline(&self.pipelines.quad);
                rp.set_vertex_buffer(0, self.corner_vb.slice(..));
                rp.set_vertex_buffer(1, self.quad_instances.slice(..));
                rp.draw_indexed(0..QUAD_INDICES.len() as u32, 0, split..quad_count);
            }
        }
        self.queue.submit(Some(encoder.finish()));
        output.present();
        Ok(())
    }

    fn upload(&mut self, frame: &FrameSnapshot) {
        let globals = Globals {
            view_proj: frame.view_proj.to_cols_array_2d(),
            eye: frame.eye.extend(1.0).to_array(),
            viewport: [
                self.width as f32,
                self.height as f32,
                PARTICLE_SIZE,
                if self.encode_srgb { 1.0 } else { 0.0 },
            ],
            ambient: scaled(AMBIENT_LIGHT),
            dir_light_dir: Vec3::from(DIRECTIONAL_LIGHT_POS)
                .normalize()
                .extend(0.0)
                .to_array(),
            dir_light: scaled(DIRECTIONAL_LIGHT),
            point_light_pos: Vec3::from(POINT_LIGHT_POS)
                .extend(POINT_LIGHT_RANGE)
                .to_array(),
            point_light: scaled(POINT_LIGHT),
            fog_color: with_alpha(FOG_COLOR, 1.0),
            fog_range: [FOG_NEAR, FOG_FAR, 0.0, 0.0],
        };
        self.queue
            .write_buffer(&self.globals_buffer, 0, bytemuck::bytes_of(&globals));

        let quads: Vec<QuadInstance> = frame
            .quads
            .iter()
            .take(MAX_QUADS as usize)
            .map(|q| {
                let (color, slot) = match q.kind {
                    QuadKind::Face { color, opacity } => (with_alpha(color, opacity), -1.0),
                    QuadKind::Label { slot } => ([1.0; 4], slot as f32),
                };
                QuadInstance {
                    model: q.model.to_cols_array_2d(),
                    color,
                    params: [slot, 0.0, 0.0, 0.0],
                }
            })
            .collect();
        self.queue
            .write_buffer(&self.quad_instances, 0, bytemuck::cast_slice(&quads));

        let line_color = with_alpha(WIREFRAME_COLOR, WIREFRAME_OPACITY);
        let lines: Vec<LineVertex> = frame
            .wireframe
            .iter()
            .flat_map(|seg| seg.iter())
            .take(MAX_LINE_VERTICES as usize)
            .map(|p| LineVertex {
                pos: p.to_array(),
                color: line_color,
            })
            .collect();
        self.queue
            .write_buffer(&self.line_vb, 0, bytemuck::cast_slice(&lines));

        let needed = frame.particles.len() as u64;
        if needed > self.point_capacity {
            self.point_instances.destroy();
            self.point_capacity = needed.next_power_of_two();
            self.point_instances = create_point_buffer(&self.device, self.point_capacity);
        }
        let point_color = with_alpha(PARTICLE_COLOR, PARTICLE_OPACITY);
        let points: Vec<PointInstance> = frame
            .particles
            .iter()
            .map(|p| PointInstance {
                center: p.to_array(),
                color: point_color,
            })
            .collect();
        self.queue
            .write_buffer(&self.point_instances, 0, bytemuck::cast_slice(&points));
    }

    /// Releases GPU memory eagerly instead of waiting for the JS collector.
    pub fn destroy(self) {
        self.depth.tex.destroy();
        self.atlas.destroy();
        self.globals_buffer.destroy();
        self.corner_vb.destroy();
        self.quad_ib.destroy();
        self.quad_instances.destroy();
        self.line_vb.destroy();
        self.point_instances.destroy();
        self.device.destroy();
        log::info!("[gpu] destroyed");
    }
}

fn create_point_buffer(device: &wgpu::Device, capacity: u64) -> wgpu::Buffer {
    device.create_buffer(&wgpu::BufferDescriptor {
        label: Some("point_instances"),
        size: capacity.max(1) * std::mem::size_of::<PointInstance>() as u64,
        usage: wgpu::BufferUsages::VERTEX | wgpu::BufferUsages::COPY_DST,
        mapped_at_creation: false,
    })
}

/// Tries high performance first, then low power, each with and without a
/// fallback adapter, and finally without tying the adapter to the surface.
async fn request_any_adapter(
    instance: &wgpu::Instance,
    surface: &wgpu::Surface<'static>,
) -> Option<wgpu::Adapter> {
    let attempts = [
        (wgpu::PowerPreference::HighPerformance, true, false),
        (wgpu::PowerPreference::HighPerformance, true, true),
        (wgpu::PowerPreference::LowPower, true, false),
        (wgpu::PowerPreference::LowPower, true, true),
        (wgpu::PowerPreference::LowPower, false, false),
    ];
    for (power_preference, with_surface, force_fallback_adapter) in attempts {
        let adapter = instance
            .request_adapter(&wgpu::RequestAdapterOptions {
                power_preference,
                compatible_surface: with_surface.then_some(surface),
                force_fallback_adapter,
            })
            .await;
        if adapter.is_some() {
            return adapter;
        }
        log::warn!(
            "[gpu] no adapter for {power_preference:?} surface={with_surface} fallback={force_fallback_adapter}"
        );
    }
    None
}
