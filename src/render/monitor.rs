use super::helpers::{self, PipelineDesc};
use desk_core::scene::ScreenQuad;
use desk_core::{SCREEN_TEX_HEIGHT, SCREEN_TEX_WIDTH};
use wgpu::util::DeviceExt;

#[repr(C)]
#[derive(Copy, Clone, bytemuck::Pod, bytemuck::Zeroable)]
struct QuadVertex {
    position: [f32; 3],
    uv: [f32; 2],
}

const QUAD_ATTRIBUTES: [wgpu::VertexAttribute; 2] =
    wgpu::vertex_attr_array![0 => Float32x3, 1 => Float32x2];

/// Monitor face: a textured quad whose texture is repainted every frame.
pub(crate) struct MonitorResources {
    pub(crate) pipeline: wgpu::RenderPipeline,
    pub(crate) bind_group: wgpu::BindGroup,
    pub(crate) vertex_buffer: wgpu::Buffer,
    pub(crate) index_buffer: wgpu::Buffer,
    texture: wgpu::Texture,
}

fn quad_vertices(quad: &ScreenQuad) -> [QuadVertex; 4] {
    let c = quad.center;
    let h = quad.size * 0.5;
    // Texture rows run top to bottom, so v grows downward
    [
        QuadVertex {
            position: [c.x - h.x, c.y + h.y, c.z],
            uv: [0.0, 0.0],
        },
        QuadVertex {
            position: [c.x + h.x, c.y + h.y, c.z],
            uv: [1.0, 0.0],
        },
        QuadVertex {
            position: [c.x + h.x, c.y - h.y, c.z],
            uv: [1.0, 1.0],
        },
        QuadVertex {
            position: [c.x - h.x, c.y - h.y, c.z],
            uv: [0.0, 1.0],
        },
    ]
}

pub(crate) fn create_monitor_resources(
    device: &wgpu::Device,
    uniforms_bgl: &wgpu::BindGroupLayout,
    color_format: wgpu::TextureFormat,
    quad: &ScreenQuad,
) -> MonitorResources {
    let shader = device.create_shader_module(wgpu::ShaderModuleDescriptor {
        label: Some("screen_shader"),
        source: wgpu::ShaderSource::Wgsl(desk_core::SCREEN_WGSL.into()),
    });
    let (texture, view) = helpers::create_texture(
        device,
        "screen_tex",
        SCREEN_TEX_WIDTH,
        SCREEN_TEX_HEIGHT,
        wgpu::TextureFormat::Rgba8UnormSrgb,
        wgpu::TextureUsages::TEXTURE_BINDING | wgpu::TextureUsages::COPY_DST,
    );
    let sampler = device.create_sampler(&wgpu::SamplerDescriptor {
        label: Some("screen_sampler"),
        address_mode_u: wgpu::AddressMode::ClampToEdge,
        address_mode_v: wgpu::AddressMode::ClampToEdge,
        address_mode_w: wgpu::AddressMode::ClampToEdge,
        mag_filter: wgpu::FilterMode::Linear,
        min_filter: wgpu::FilterMode::Linear,
        ..Default::default()
    });
    let bgl = device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
        label: Some("screen_bgl"),
        entries: &[
            wgpu::BindGroupLayoutEntry {
                binding: 0,
                visibility: wgpu::ShaderStages::FRAGMENT,
                ty: wgpu::BindingType::Texture {
                    sample_type: wgpu::TextureSampleType::Float { filterable: true },
                    view_dimension: wgpu::TextureViewDimension::D2,
                    multisampled: false,
                },
                count: None,
            },
            wgpu::BindGroupLayoutEntry {
                binding: 1,
                visibility: wgpu::ShaderStages::FRAGMENT,
                ty: wgpu::BindingType::Sampler(wgpu::SamplerBindingType::Filtering),
                count: None,
            },
        ],
    });
    let bind_group = device.create_bind_group(&wgpu::BindGroupDescriptor {
        label: Some("screen_bg"),
        layout: &bgl,
        entries: &[
            wgpu::BindGroupEntry {
                binding: 0,
                resource: wgpu::BindingResource::TextureView(&view),
            },
            wgpu::BindGroupEntry {
                binding: 1,
                resource: wgpu::BindingResource::Sampler(&sampler),
            },
        ],
    });
    let layout = device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
        label: Some("screen_pl"),
        bind_group_layouts: &[uniforms_bgl, &bgl],
        push_constant_ranges: &[],
    });
    let buffers = [wgpu::VertexBufferLayout {
        array_stride: std::mem::size_of::<QuadVertex>() as wgpu::BufferAddress,
        step_mode: wgpu::VertexStepMode::Vertex,
        attributes: &QUAD_ATTRIBUTES,
    }];
    let pipeline = helpers::make_pipeline(
        device,
        PipelineDesc {
            label: "screen_pipeline",
            layout: &layout,
            shader: &shader,
            buffers: &buffers,
            color_format,
            blend: None,
            depth_write: true,
        },
    );
    let vertex_buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
        label: Some("screen_vertices"),
        contents: bytemuck::cast_slice(&quad_vertices(quad)),
        usage: wgpu::BufferUsages::VERTEX,
    });
    let index_buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
        label: Some("screen_indices"),
        contents: bytemuck::cast_slice(&[0u16, 3, 2, 0, 2, 1]),
        usage: wgpu::BufferUsages::INDEX,
    });
    MonitorResources {
        pipeline,
        bind_group,
        vertex_buffer,
        index_buffer,
        texture,
    }
}

impl MonitorResources {
    /// Upload one frame of RGBA8 screen pixels. Wrong-sized frames are dropped.
    pub(crate) fn upload(&self, queue: &wgpu::Queue, pixels: &[u8]) {
        let expected = (SCREEN_TEX_WIDTH * SCREEN_TEX_HEIGHT * 4) as usize;
        if pixels.len() != expected {
            log::warn!(
                "[gpu] screen frame has {} bytes, expected {}",
                pixels.len(),
                expected
            );
            return;
        }
        queue.write_texture(
            wgpu::TexelCopyTextureInfo {
                texture: &self.texture,
                mip_level: 0,
                origin: wgpu::Origin3d::ZERO,
                aspect: wgpu::TextureAspect::All,
            },
            pixels,
            wgpu::TexelCopyBufferLayout {
                offset: 0,
                bytes_per_row: Some(SCREEN_TEX_WIDTH * 4),
                rows_per_image: Some(SCREEN_TEX_HEIGHT),
            },
            wgpu::Extent3d {
                width: SCREEN_TEX_WIDTH,
                height: SCREEN_TEX_HEIGHT,
                depth_or_array_layers: 1,
            },
        );
    }
}
