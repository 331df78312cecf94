use super::helpers::{self, PipelineDesc};

const INSTANCE_ATTRIBUTES: [wgpu::VertexAttribute; 1] = wgpu::vertex_attr_array![0 => Float32x3];

/// Camera-facing soft dots, one instance per particle. The instance buffer
/// is the pool's flat xyz array copied verbatim each frame.
pub(crate) struct SteamResources {
    pub(crate) pipeline: wgpu::RenderPipeline,
    pub(crate) instance_buffer: wgpu::Buffer,
    pub(crate) capacity: u32,
}

pub(crate) fn create_steam_resources(
    device: &wgpu::Device,
    layout: &wgpu::PipelineLayout,
    color_format: wgpu::TextureFormat,
    capacity: usize,
) -> SteamResources {
    let shader = device.create_shader_module(wgpu::ShaderModuleDescriptor {
        label: Some("steam_shader"),
        source: wgpu::ShaderSource::Wgsl(desk_core::STEAM_WGSL.into()),
    });
    let buffers = [wgpu::VertexBufferLayout {
        array_stride: (3 * std::mem::size_of::<f32>()) as wgpu::BufferAddress,
        step_mode: wgpu::VertexStepMode::Instance,
        attributes: &INSTANCE_ATTRIBUTES,
    }];
    // Translucent and unsorted, so test depth but never write it
    let pipeline = helpers::make_pipeline(
        device,
        PipelineDesc {
            label: "steam_pipeline",
            layout,
            shader: &shader,
            buffers: &buffers,
            color_format,
            blend: Some(wgpu::BlendState::ALPHA_BLENDING),
            depth_write: false,
        },
    );
    let instance_buffer = device.create_buffer(&wgpu::BufferDescriptor {
        label: Some("steam_instances"),
        size: (capacity.max(1) * 3 * std::mem::size_of::<f32>()) as wgpu::BufferAddress,
        usage: wgpu::BufferUsages::VERTEX | wgpu::BufferUsages::COPY_DST,
        mapped_at_creation: false,
    });
    SteamResources {
        pipeline,
        instance_buffer,
        capacity: capacity as u32,
    }
}

impl SteamResources {
    /// Copy particle positions in; returns how many instances to draw.
    pub(crate) fn upload(&self, queue: &wgpu::Queue, positions: &[f32]) -> u32 {
        let count = ((positions.len() / 3) as u32).min(self.capacity);
        if count > 0 {
            let floats = count as usize * 3;
            queue.write_buffer(
                &self.instance_buffer,
                0,
                bytemuck::cast_slice(&positions[..floats]),
            );
        }
        count
    }
}
