use super::helpers;
use super::targets::DEPTH_FORMAT;

pub(crate) const CUBE_WGSL: &str = include_str!("../../shaders/cube.wgsl");

#[repr(C)]
#[derive(Copy, Clone, Default, bytemuck::Pod, bytemuck::Zeroable)]
pub(crate) struct Globals {
    pub(crate) view_proj: [[f32; 4]; 4],
    pub(crate) eye: [f32; 4],
    pub(crate) viewport: [f32; 4],
    pub(crate) ambient: [f32; 4],
    pub(crate) dir_light_dir: [f32; 4],
    pub(crate) dir_light: [f32; 4],
    pub(crate) point_light_pos: [f32; 4],
    pub(crate) point_light: [f32; 4],
    pub(crate) fog_color: [f32; 4],
    pub(crate) fog_range: [f32; 4],
}

/// Unit quad corner, shared by faces, labels and particle sprites.
#[repr(C)]
#[derive(Copy, Clone, bytemuck::Pod, bytemuck::Zeroable)]
pub(crate) struct Corner {
    pub(crate) pos: [f32; 2],
}

pub(crate) const QUAD_CORNERS: [Corner; 4] = [
    Corner { pos: [-0.5, -0.5] },
    Corner { pos: [0.5, -0.5] },
    Corner { pos: [0.5, 0.5] },
    Corner { pos: [-0.5, 0.5] },
];
pub(crate) const QUAD_INDICES: [u16; 6] = [0, 1, 2, 0, 2, 3];

#[repr(C)]
#[derive(Copy, Clone, bytemuck::Pod, bytemuck::Zeroable)]
pub(crate) struct QuadInstance {
    pub(crate) model: [[f32; 4]; 4],
    pub(crate) color: [f32; 4],
    // x = label slot, negative for faces
    pub(crate) params: [f32; 4],
}

#[repr(C)]
#[derive(Copy, Clone, bytemuck::Pod, bytemuck::Zeroable)]
pub(crate) struct LineVertex {
    pub(crate) pos: [f32; 3],
    pub(crate) color: [f32; 4],
}

#[repr(C)]
#[derive(Copy, Clone, bytemuck::Pod, bytemuck::Zeroable)]
pub(crate) struct PointInstance {
    pub(crate) center: [f32; 3],
    pub(crate) color: [f32; 4],
}

const CORNER_ATTRS: [wgpu::VertexAttribute; 1] = wgpu::vertex_attr_array![0 => Float32x2];
const QUAD_INSTANCE_ATTRS: [wgpu::VertexAttribute; 6] = wgpu::vertex_attr_array![
    1 => Float32x4,
    2 => Float32x4,
    3 => Float32x4,
    4 => Float32x4,
    5 => Float32x4,
    6 => Float32x4
];
const LINE_ATTRS: [wgpu::VertexAttribute; 2] =
    wgpu::vertex_attr_array![0 => Float32x3, 1 => Float32x4];
const POINT_INSTANCE_ATTRS: [wgpu::VertexAttribute; 2] =
    wgpu::vertex_attr_array![1 => Float32x3, 2 => Float32x4];

const CORNER_LAYOUT: wgpu::VertexBufferLayout<'static> = wgpu::VertexBufferLayout {
    array_stride: std::mem::size_of::<Corner>() as u64,
    step_mode: wgpu::VertexStepMode::Vertex,
    attributes: &CORNER_ATTRS,
};

const QUAD_INSTANCE_LAYOUT: wgpu::VertexBufferLayout<'static> = wgpu::VertexBufferLayout {
    array_stride: std::mem::size_of::<QuadInstance>() as u64,
    step_mode: wgpu::VertexStepMode::Instance,
    attributes: &QUAD_INSTANCE_ATTRS,
};

const LINE_LAYOUT: wgpu::VertexBufferLayout<'static> = wgpu::VertexBufferLayout {
    array_stride: std::mem::size_of::<LineVertex>() as u64,
    step_mode: wgpu::VertexStepMode::Vertex,
    attributes: &LINE_ATTRS,
};

const POINT_INSTANCE_LAYOUT: wgpu::VertexBufferLayout<'static> = wgpu::VertexBufferLayout {
    array_stride: std::mem::size_of::<PointInstance>() as u64,
    step_mode: wgpu::VertexStepMode::Instance,
    attributes: &POINT_INSTANCE_ATTRS,
};

pub(crate) struct ScenePipelines {
    pub(crate) bind_group_layout: wgpu::BindGroupLayout,
    pub(crate) quad: wgpu::RenderPipeline,
    pub(crate) line: wgpu::RenderPipeline,
    pub(crate) point: wgpu::RenderPipeline,
}

impl ScenePipelines {
    pub(crate) fn new(device: &wgpu::Device, color_format: wgpu::TextureFormat) -> Self {
        let shader = device.create_shader_module(wgpu::ShaderModuleDescriptor {
            label: Some("cube_shader"),
            source: wgpu::ShaderSource::Wgsl(CUBE_WGSL.into()),
        });
        let bind_group_layout = device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
            label: Some("cube_bgl"),
            entries: &[
                wgpu::BindGroupLayoutEntry {
                    binding: 0,
                    visibility: wgpu::ShaderStages::VERTEX_FRAGMENT,
                    ty: wgpu::BindingType::Buffer {
                        ty: wgpu::BufferBindingType::Uniform,
                        has_dynamic_offset: false,
                        min_binding_size: None,
                    },
                    count: None,
                },
                wgpu::BindGroupLayoutEntry {
                    binding: 1,
                    visibility: wgpu::ShaderStages::FRAGMENT,
                    ty: wgpu::BindingType::Texture {
                        sample_type: wgpu::TextureSampleType::Float { filterable: true },
                        view_dimension: wgpu::TextureViewDimension::D2,
                        multisampled: false,
                    },
                    count: None,
                },
                wgpu::BindGroupLayoutEntry {
                    binding: 2,
                    visibility: wgpu::ShaderStages::FRAGMENT,
                    ty: wgpu::BindingType::Sampler(wgpu::SamplerBindingType::Filtering),
                    count: None,
                },
            ],
        });
        let layout = device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
            label: Some("cube_pl"),
            bind_group_layouts: &[&bind_group_layout],
            push_constant_ranges: &[],
        });

        let quad = helpers::make_scene_pipeline(
            device,
            "quad_pipeline",
            &layout,
            &shader,
            "vs_quad",
            "fs_quad",
            &[CORNER_LAYOUT, QUAD_INSTANCE_LAYOUT],
            wgpu::PrimitiveTopology::TriangleList,
            Some(wgpu::Face::Back),
            color_format,
            DEPTH_FORMAT,
        );
        let line = helpers::make_scene_pipeline(
            device,
            "line_pipeline",
            &layout,
            &shader,
            "vs_line",
            "fs_line",
            &[LINE_LAYOUT],
            wgpu::PrimitiveTopology::LineList,
            None,
            color_format,
            DEPTH_FORMAT,
        );
        let point = helpers::make_scene_pipeline(
            device,
            "point_pipeline",
            &layout,
            &shader,
            "vs_point",
            "fs_line",
            &[CORNER_LAYOUT, POINT_INSTANCE_LAYOUT],
            wgpu::PrimitiveTopology::TriangleList,
            None,
            color_format,
            DEPTH_FORMAT,
        );
        Self {
            bind_group_layout,
            quad,
            line,
            point,
        }
    }
}
