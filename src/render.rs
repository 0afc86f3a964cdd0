use crate::constants::{CLEAR_COLOR, MAX_DRAWS};
use portfolio_core::{Drawable, HeroScene, PropKind};
use web_sys as web;
use wgpu::util::DeviceExt;

mod pipelines;
use pipelines::{create_scene_pipelines, ScenePipelines};

pub static SCENE_WGSL: &str = include_str!("../shaders/scene.wgsl");

#[repr(C)]
#[derive(Copy, Clone, bytemuck::Pod, bytemuck::Zeroable)]
pub(crate) struct DrawUniforms {
    model_view: [[f32; 4]; 4],
    proj: [[f32; 4]; 4],
    color: [f32; 4],
    params: [f32; 4],
}

// Immutable line meshes uploaded once (grid and props).
struct StaticMesh {
    drawable: Drawable,
    buffer: wgpu::Buffer,
    vertex_count: u32,
}

pub struct GpuState<'a> {
    surface: wgpu::Surface<'a>,
    device: wgpu::Device,
    queue: wgpu::Queue,
    config: wgpu::SurfaceConfiguration,
    pipelines: ScenePipelines,
    uniform_buffer: wgpu::Buffer,
    uniform_stride: u64,
    bind_group: wgpu::BindGroup,
    stars_buffer: wgpu::Buffer,
    stars_count: u32,
    meshes: Vec<StaticMesh>,
    width: u32,
    height: u32,
    clear_color: wgpu::Color,
}

impl<'a> GpuState<'a> {
    pub async fn new(
        canvas: &'a web::HtmlCanvasElement,
        scene: &HeroScene,
    ) -> anyhow::Result<Self> {
        let width = canvas.width().max(1);
        let height = canvas.height().max(1);

        let instance = wgpu::Instance::default();
        let surface = instance.create_surface(wgpu::SurfaceTarget::Canvas(canvas.clone()))?;
        let adapter = instance
            .request_adapter(&wgpu::RequestAdapterOptions {
                power_preference: wgpu::PowerPreference::LowPower,
                compatible_surface: Some(&surface),
                force_fallback_adapter: false,
            })
            .await
            .ok_or_else(|| anyhow::anyhow!("No WebGPU adapter"))?;
        let (device, queue) = adapter
            .request_device(
                &wgpu::DeviceDescriptor {
                    required_features: wgpu::Features::empty(),
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

        let pipelines = create_scene_pipelines(&device, format);

        // One dynamically offset uniform slot per draw call
        let align = device.limits().min_uniform_buffer_offset_alignment as u64;
        let size = std::mem::size_of::<DrawUniforms>() as u64;
        let uniform_stride = size.div_ceil(align) * align;
        let uniform_buffer = device.create_buffer(&wgpu::BufferDescriptor {
            label: Some("draw_uniforms"),
            size: uniform_stride * MAX_DRAWS as u64,
            usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
            mapped_at_creation: false,
        });
        let bind_group = device.create_bind_group(&wgpu::BindGroupDescriptor {
            label: Some("draw_bg"),
            layout: &pipelines.bgl,
            entries: &[wgpu::BindGroupEntry {
                binding: 0,
                resource: wgpu::BindingResource::Buffer(wgpu::BufferBinding {
                    buffer: &uniform_buffer,
                    offset: 0,
                    size: wgpu::BufferSize::new(size),
                }),
            }],
        });

        let stars = scene.stars();
        let stars_buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some("stars_vb"),
            contents: stars.as_bytes(),
            usage: wgpu::BufferUsages::VERTEX | wgpu::BufferUsages::COPY_DST,
        });

        let mut meshes = Vec::with_capacity(1 + PropKind::ALL.len());
        let static_drawables =
            std::iter::once(Drawable::Grid).chain(PropKind::ALL.into_iter().map(Drawable::Prop));
        for drawable in static_drawables {
            let verts = scene.buffer(drawable);
            if verts.is_empty() {
                continue;
            }
            let buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
                label: Some("line_mesh_vb"),
                contents: bytemuck::cast_slice(verts),
                usage: wgpu::BufferUsages::VERTEX,
            });
            meshes.push(StaticMesh {
                drawable,
                buffer,
                vertex_count: verts.len() as u32,
            });
        }

        log::info!(
            "[gpu] ready {}x{} format={:?} meshes={} stars={}",
            width,
            height,
            format,
            meshes.len(),
            stars.len()
        );

        Ok(Self {
            surface,
            device,
            queue,
            config,
            pipelines,
            uniform_buffer,
            uniform_stride,
            bind_group,
            stars_buffer,
            stars_count: stars.len() as u32,
            meshes,
            width,
            height,
            clear_color: wgpu::Color {
                r: CLEAR_COLOR[0],
                g: CLEAR_COLOR[1],
                b: CLEAR_COLOR[2],
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
        }
    }

    pub fn size(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    /// Upload the star buffer and draw every visible node of the scene graph.
    pub fn render(&mut self, scene: &HeroScene) -> Result<(), wgpu::SurfaceError> {
        self.queue
            .write_buffer(&self.stars_buffer, 0, scene.stars().as_bytes());

        let camera = scene.camera();
        let view = camera.view_matrix();
        let proj = camera.projection_matrix().to_cols_array_2d();
        let mut draws = scene.graph().draw_list();
        if draws.len() > MAX_DRAWS {
            log::warn!("[gpu] {} drawables exceed {} slots", draws.len(), MAX_DRAWS);
            draws.truncate(MAX_DRAWS);
        }
        for (slot, item) in draws.iter().enumerate() {
            let m = item.material;
            let u = DrawUniforms {
                model_view: (view * item.world).to_cols_array_2d(),
                proj,
                color: [m.color[0], m.color[1], m.color[2], m.opacity],
                params: [m.point_size, 0.0, 0.0, 0.0],
            };
            self.queue.write_buffer(
                &self.uniform_buffer,
                slot as u64 * self.uniform_stride,
                bytemuck::bytes_of(&u),
            );
        }

        let frame = self.surface.get_current_texture()?;
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
                depth_stencil_attachment: None,
                timestamp_writes: None,
                occlusion_query_set: None,
            });
            for (slot, item) in draws.iter().enumerate() {
                let offset = (slot as u64 * self.uniform_stride) as u32;
                match item.drawable {
                    Drawable::None => {}
                    Drawable::Stars => {
                        rpass.set_pipeline(&self.pipelines.points);
                        rpass.set_bind_group(0, &self.bind_group, &[offset]);
                        rpass.set_vertex_buffer(0, self.stars_buffer.slice(..));
                        rpass.draw(0..4, 0..self.stars_count);
                    }
                    drawable => {
                        let Some(mesh) = self.meshes.iter().find(|m| m.drawable == drawable)
                        else {
                            continue;
                        };
                        rpass.set_pipeline(&self.pipelines.lines);
                        rpass.set_bind_group(0, &self.bind_group, &[offset]);
                        rpass.set_vertex_buffer(0, mesh.buffer.slice(..));
                        rpass.draw(0..mesh.vertex_count, 0..1);
                    }
                }
            }
        }
        self.queue.submit(Some(encoder.finish()));
        frame.present();
        Ok(())
    }
}
