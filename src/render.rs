use crate::input::aspect_ratio;
use desk_core::scene::DeskScene;
use desk_core::{Camera, FrameUpdate, STEAM_COLOR, STEAM_OPACITY, STEAM_POINT_SIZE};
use glam::Vec3;
use web_sys as web;

mod desk;
mod helpers;
mod monitor;
mod steam;
mod targets;
use desk::{create_desk_resources, DeskResources};
use monitor::{create_monitor_resources, MonitorResources};
use steam::{create_steam_resources, SteamResources};
use targets::RenderTargets;

pub(crate) const MAX_POINT_LIGHTS: usize = 4;

#[repr(C)]
#[derive(Copy, Clone, Default, bytemuck::Pod, bytemuck::Zeroable)]
pub(crate) struct PointLightPacked {
    position_range: [f32; 4],
    color_intensity: [f32; 4],
}

/// Shared by all three shaders; the screen and steam shaders declare a
/// prefix of it.
#[repr(C)]
#[derive(Copy, Clone, bytemuck::Pod, bytemuck::Zeroable)]
pub(crate) struct SceneUniforms {
    view_proj: [[f32; 4]; 4],
    camera_pos: [f32; 4],   // w: led opacity
    camera_right: [f32; 4], // w: steam point size
    camera_up: [f32; 4],    // w: steam opacity
    ambient: [f32; 4],
    sun_dir: [f32; 4], // w: point light count
    sun_color: [f32; 4],
    steam_color: [f32; 4],
    points: [PointLightPacked; MAX_POINT_LIGHTS],
}

/// Lighting that stays put between frames, plus which point light pulses.
struct StaticLights {
    ambient: [f32; 4],
    sun_dir: [f32; 4],
    sun_color: [f32; 4],
    points: [PointLightPacked; MAX_POINT_LIGHTS],
    glow_index: Option<usize>,
}

impl StaticLights {
    fn from_scene(scene: &DeskScene) -> Self {
        if scene.point_lights.len() > MAX_POINT_LIGHTS {
            log::warn!(
                "[gpu] scene has {} point lights, only {} are drawn",
                scene.point_lights.len(),
                MAX_POINT_LIGHTS
            );
        }
        let mut points = [PointLightPacked::default(); MAX_POINT_LIGHTS];
        for (slot, light) in points.iter_mut().zip(&scene.point_lights) {
            slot.position_range = light.position.extend(light.range).to_array();
            let [r, g, b] = light.color;
            slot.color_intensity = [r, g, b, light.intensity];
        }
        let count = scene.point_lights.len().min(MAX_POINT_LIGHTS);
        let [ar, ag, ab] = scene.ambient.color;
        let ai = scene.ambient.intensity;
        let [sr, sg, sb] = scene.sun.color;
        let si = scene.sun.intensity;
        Self {
            ambient: [ar * ai, ag * ai, ab * ai, 1.0],
            sun_dir: scene.sun.position.normalize_or_zero().extend(count as f32).to_array(),
            sun_color: [sr * si, sg * si, sb * si, 1.0],
            points,
            glow_index: scene
                .point_light_index(desk_core::scene::SCREEN_GLOW_LIGHT)
                .filter(|i| *i < MAX_POINT_LIGHTS),
        }
    }
}

pub struct GpuState<'a> {
    surface: wgpu::Surface<'a>,
    device: wgpu::Device,
    queue: wgpu::Queue,
    config: wgpu::SurfaceConfiguration,
    targets: RenderTargets,

    uniform_buffer: wgpu::Buffer,
    uniform_bind_group: wgpu::BindGroup,
    desk: DeskResources,
    monitor: MonitorResources,
    steam: SteamResources,
    lights: StaticLights,

    width: u32,
    height: u32,
    clear_color: wgpu::Color,
}

impl<'a> GpuState<'a> {
    pub async fn new(
        canvas: &'a web::HtmlCanvasElement,
        scene: &DeskScene,
        steam_capacity: usize,
    ) -> anyhow::Result<Self> {
        let width = canvas.width().max(1);
        let height = canvas.height().max(1);

        let instance = wgpu::Instance::default();
        let surface = instance.create_surface(wgpu::SurfaceTarget::Canvas(canvas.clone()))?;
        let adapter = instance
            .request_adapter(&wgpu::RequestAdapterOptions {
                power_preference: wgpu::PowerPreference::HighPerformance,
                compatible_surface: Some(&surface),
                force_fallback_adapter: false,
            })
            .await
            .ok_or_else(|| anyhow::anyhow!("No WebGPU adapter"))?;
        let (device, queue) = adapter
            .request_device(
                &wgpu::DeviceDescriptor {
                    required_features: wgpu::Features::empty(),
                    // Use default limits on web to avoid passing unknown fields to older WebGPU impls
                    required_limits: wgpu::Limits::default(),
                    memory_hints: wgpu::MemoryHints::Performance,
                    label: None,
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
            .find(|f| {
                matches!(
                    f,
                    wgpu::TextureFormat::Bgra8UnormSrgb | wgpu::TextureFormat::Rgba8UnormSrgb
                )
            })
            .or_else(|| caps.formats.first().copied())
            .ok_or_else(|| anyhow::anyhow!("surface reports no formats"))?;
        let alpha_mode = caps
            .alpha_modes
            .first()
            .copied()
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
        log::info!("[gpu] surface {}x{} format={:?}", width, height, format);

        let targets = RenderTargets::new(&device, width, height);

        let uniform_buffer = device.create_buffer(&wgpu::BufferDescriptor {
            label: Some("scene_uniforms"),
            size: std::mem::size_of::<SceneUniforms>() as wgpu::BufferAddress,
            usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
            mapped_at_creation: false,
        });
        let uniform_bgl = device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
            label: Some("scene_uniforms_bgl"),
            entries: &[helpers::uniform_layout_entry(0)],
        });
        let uniform_bind_group = device.create_bind_group(&wgpu::BindGroupDescriptor {
            label: Some("scene_uniforms_bg"),
            layout: &uniform_bgl,
            entries: &[wgpu::BindGroupEntry {
                binding: 0,
                resource: uniform_buffer.as_entire_binding(),
            }],
        });
        let shared_layout = device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
            label: Some("scene_pl"),
            bind_group_layouts: &[&uniform_bgl],
            push_constant_ranges: &[],
        });

        let desk = create_desk_resources(&device, &shared_layout, format, &scene.bake());
        let monitor = create_monitor_resources(&device, &uniform_bgl, format, &scene.screen);
        let steam = create_steam_resources(&device, &shared_layout, format, steam_capacity);

        let [r, g, b] = scene.background;
        Ok(Self {
            surface,
            device,
            queue,
            config,
            targets,
            uniform_buffer,
            uniform_bind_group,
            desk,
            monitor,
            steam,
            lights: StaticLights::from_scene(scene),
            width,
            height,
            clear_color: wgpu::Color {
                r: r as f64,
                g: g as f64,
                b: b as f64,
                a: 1.0,
            },
        })
    }

    pub fn resize_if_needed(&mut self, width: u32, height: u32) {
        if width == 0 || height == 0 {
            return;
        }
        if width != self.width || height != self.height {
            self.width = width;
            self.height = height;
            self.config.width = width;
            self.config.height = height;
            self.surface.configure(&self.device, &self.config);
            self.targets.recreate(&self.device, width, height);
            log::info!("[gpu] resized to {}x{}", width, height);
        }
    }

    fn uniforms(&self, update: &FrameUpdate) -> SceneUniforms {
        let camera = Camera::new(update.view, aspect_ratio(self.width, self.height));
        let forward = (update.view.target - update.view.eye).normalize_or_zero();
        let right = forward.cross(Vec3::Y).normalize_or_zero();
        let up = right.cross(forward);

        let mut points = self.lights.points;
        if let Some(i) = self.lights.glow_index {
            points[i].color_intensity[3] = update.screen_glow;
        }
        let [sr, sg, sb] = STEAM_COLOR;
        SceneUniforms {
            view_proj: camera.view_projection().to_cols_array_2d(),
            camera_pos: update.view.eye.extend(update.led_opacity).to_array(),
            camera_right: right.extend(STEAM_POINT_SIZE).to_array(),
            camera_up: up.extend(STEAM_OPACITY).to_array(),
            ambient: self.lights.ambient,
            sun_dir: self.lights.sun_dir,
            sun_color: self.lights.sun_color,
            steam_color: [sr, sg, sb, 1.0],
            points,
        }
    }

    /// Draw one frame. `screen_pixels` is skipped when the monitor canvas
    /// couldn't be read this frame; the previous texture stays up.
    pub fn render(
        &mut self,
        update: &FrameUpdate,
        steam_positions: &[f32],
        screen_pixels: Option<&[u8]>,
    ) -> Result<(), wgpu::SurfaceError> {
        let frame = match self.surface.get_current_texture() {
            Ok(frame) => frame,
            Err(wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated) => {
                log::warn!("[gpu] surface lost, reconfiguring");
                self.surface.configure(&self.device, &self.config);
                return Ok(());
            }
            Err(e) => return Err(e),
        };

        let uniforms = self.uniforms(update);
        self.queue
            .write_buffer(&self.uniform_buffer, 0, bytemuck::bytes_of(&uniforms));
        if let Some(pixels) = screen_pixels {
            self.monitor.upload(&self.queue, pixels);
        }
        let steam_count = self.steam.upload(&self.queue, steam_positions);

        let view = frame
            .texture
            .create_view(&wgpu::TextureViewDescriptor::default());
        let mut encoder = self
            .device
            .create_command_encoder(&wgpu::CommandEncoderDescriptor {
                label: Some("encoder"),
            });
        {
            let mut rpass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
                label: Some("scene_pass"),
                color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                    view: &view,
                    resolve_target: None,
                    ops: wgpu::Operations {
                        load: wgpu::LoadOp::Clear(self.clear_color),
                        store: wgpu::StoreOp::Store,
                    },
                })],
                depth_stencil_attachment: Some(wgpu::RenderPassDepthStencilAttachment {
                    view: &self.targets.depth_view,
                    depth_ops: Some(wgpu::Operations {
                        load: wgpu::LoadOp::Clear(1.0),
                        store: wgpu::StoreOp::Store,
                    }),
                    stencil_ops: None,
                }),
                timestamp_writes: None,
                occlusion_query_set: None,
            });
            rpass.set_bind_group(0, &self.uniform_bind_group, &[]);

            rpass.set_pipeline(&self.desk.pipeline);
            rpass.set_vertex_buffer(0, self.desk.vertex_buffer.slice(..));
            rpass.set_index_buffer(self.desk.index_buffer.slice(..), wgpu::IndexFormat::Uint32);
            rpass.draw_indexed(0..self.desk.index_count, 0, 0..1);

            rpass.set_pipeline(&self.monitor.pipeline);
            rpass.set_bind_group(1, &self.monitor.bind_group, &[]);
            rpass.set_vertex_buffer(0, self.monitor.vertex_buffer.slice(..));
            rpass.set_index_buffer(self.monitor.index_buffer.slice(..), wgpu::IndexFormat::Uint16);
            rpass.draw_indexed(0..6, 0, 0..1);

            // Translucent last
            if steam_count > 0 {
                rpass.set_pipeline(&self.steam.pipeline);
                rpass.set_vertex_buffer(0, self.steam.instance_buffer.slice(..));
                rpass.draw(0..6, 0..steam_count);
            }
        }

        self.queue.submit(Some(encoder.finish()));
        frame.present();
        Ok(())
    }
}
