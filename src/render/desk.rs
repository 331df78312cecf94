use super::helpers::{self, PipelineDesc};
use desk_core::scene::BakedMesh;
use desk_core::SceneVertex;
use wgpu::util::DeviceExt;

const VERTEX_ATTRIBUTES: [wgpu::VertexAttribute; 7] = wgpu::vertex_attr_array![
    0 => Float32x3, // position
    1 => Float32,   // shading
    2 => Float32x3, // normal
    3 => Float32,   // roughness
    4 => Float32x3, // color
    5 => Float32,   // metalness
    6 => Float32x3, // emissive
];

/// Static desk geometry baked into one vertex/index buffer pair.
pub(crate) struct DeskResources {
    pub(crate) pipeline: wgpu::RenderPipeline,
    pub(crate) vertex_buffer: wgpu::Buffer,
    pub(crate) index_buffer: wgpu::Buffer,
    pub(crate) index_count: u32,
}

pub(crate) fn create_desk_resources(
    device: &wgpu::Device,
    layout: &wgpu::PipelineLayout,
    color_format: wgpu::TextureFormat,
    mesh: &BakedMesh,
) -> DeskResources {
    let shader = device.create_shader_module(wgpu::ShaderModuleDescriptor {
        label: Some("scene_shader"),
        source: wgpu::ShaderSource::Wgsl(desk_core::SCENE_WGSL.into()),
    });
    let buffers = [wgpu::VertexBufferLayout {
        array_stride: std::mem::size_of::<SceneVertex>() as wgpu::BufferAddress,
        step_mode: wgpu::VertexStepMode::Vertex,
        attributes: &VERTEX_ATTRIBUTES,
    }];
    // Alpha blending only matters for the pulsing LED; everything else writes alpha 1
    let pipeline = helpers::make_pipeline(
        device,
        PipelineDesc {
            label: "scene_pipeline",
            layout,
            shader: &shader,
            buffers: &buffers,
            color_format,
            blend: Some(wgpu::BlendState::ALPHA_BLENDING),
            depth_write: true,
        },
    );
    let vertex_buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
        label: Some("scene_vertices"),
        contents: bytemuck::cast_slice(&mesh.vertices),
        usage: wgpu::BufferUsages::VERTEX,
    });
    let index_buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
        label: Some("scene_indices"),
        contents: bytemuck::cast_slice(&mesh.indices),
        usage: wgpu::BufferUsages::INDEX,
    });
    log::info!(
        "[gpu] scene mesh: {} vertices, {} triangles",
        mesh.vertices.len(),
        mesh.indices.len() / 3
    );
    DeskResources {
        pipeline,
        vertex_buffer,
        index_buffer,
        index_count: mesh.indices.len() as u32,
    }
}
