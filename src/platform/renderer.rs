//! wgpu renderer for the triangle lists built by [`crate::draw`].
//!
//! One pipeline, one growable vertex buffer, alpha blending on. Vertices come
//! in logical pixels and are mapped to NDC on upload, so the logical layout
//! always stretches over the whole surface.

use std::sync::Arc;

use anyhow::Context;
use winit::{dpi::PhysicalSize, window::Window};

use crate::draw::ColorVertex;

const VERTEX_LAYOUT: wgpu::VertexBufferLayout<'static> = wgpu::VertexBufferLayout {
    array_stride: std::mem::size_of::<ColorVertex>() as u64,
    step_mode: wgpu::VertexStepMode::Vertex,
    attributes: &wgpu::vertex_attr_array![0 => Float32x2, 1 => Float32x4],
};

pub struct Renderer {
    surface: wgpu::Surface<'static>,
    device: wgpu::Device,
    queue: wgpu::Queue,
    config: wgpu::SurfaceConfiguration,
    pipeline: wgpu::RenderPipeline,
    vbuf: wgpu::Buffer,
    vcount: u32,
    vcap_bytes: u64,
    logical_size: (f32, f32),
}

impl Renderer {
    /// Create the surface, device and pipeline for `window`.
    ///
    /// `logical_size` is the coordinate space vertices are given in.
    pub async fn new(window: Arc<Window>, logical_size: (u32, u32)) -> anyhow::Result<Self> {
        let size = window.inner_size();
        let instance = wgpu::Instance::default();
        let surface = instance
            .create_surface(window)
            .context("create wgpu surface")?;

        let adapter = instance
            .request_adapter(&wgpu::RequestAdapterOptions {
                compatible_surface: Some(&surface),
                power_preference: wgpu::PowerPreference::LowPower,
                force_fallback_adapter: false,
            })
            .await
            .context("request adapter")?;

        let (device, queue) = adapter
            .request_device(&wgpu::DeviceDescriptor {
                label: Some("set-device"),
                required_features: wgpu::Features::empty(),
                required_limits: wgpu::Limits::downlevel_defaults(),
                memory_hints: wgpu::MemoryHints::Performance,
                trace: wgpu::Trace::default(),
            })
            .await
            .context("request device")?;

        let caps = surface.get_capabilities(&adapter);
        // Blend in 8-bit sRGB space so half fills look like plain 50% alpha.
        let format = caps
            .formats
            .iter()
            .copied()
            .find(|f| !f.is_srgb())
            .or_else(|| caps.formats.first().copied())
            .context("surface reports no formats")?;
        let alpha_mode = caps
            .alpha_modes
            .first()
            .copied()
            .unwrap_or(wgpu::CompositeAlphaMode::Auto);
        let config = wgpu::SurfaceConfiguration {
            usage: wgpu::TextureUsages::RENDER_ATTACHMENT,
            format,
            width: size.width.max(1),
            height: size.height.max(1),
            present_mode: wgpu::PresentMode::AutoVsync,
            alpha_mode,
            view_formats: vec![],
            desired_maximum_frame_latency: 2,
        };
        surface.configure(&device, &config);
        log::info!(
            "surface {}x{} format {:?} on {}",
            config.width,
            config.height,
            config.format,
            adapter.get_info().name
        );

        let pipeline = create_pipeline(&device, config.format);
        let vcap_bytes = 64 * 1024;
        let vbuf = create_vertex_buffer(&device, vcap_bytes);

        Ok(Self {
            surface,
            device,
            queue,
            config,
            pipeline,
            vbuf,
            vcount: 0,
            vcap_bytes,
            logical_size: (logical_size.0 as f32, logical_size.1 as f32),
        })
    }

    #[must_use]
    pub fn size(&self) -> PhysicalSize<u32> {
        PhysicalSize::new(self.config.width, self.config.height)
    }

    pub fn resize(&mut self, new_size: PhysicalSize<u32>) {
        if new_size.width == 0 || new_size.height == 0 {
            return;
        }
        log::debug!("resize to {}x{}", new_size.width, new_size.height);
        self.config.width = new_size.width;
        self.config.height = new_size.height;
        self.surface.configure(&self.device, &self.config);
    }

    /// Upload this frame's triangles.
    pub fn upload(&mut self, vertices: &[ColorVertex]) {
        let (w, h) = self.logical_size;
        let ndc: Vec<ColorVertex> = vertices
            .iter()
            .map(|v| ColorVertex {
                pos: ndc_from_px(v.pos[0], v.pos[1], w, h),
                color: v.color,
            })
            .collect();
        self.vcount = ndc.len() as u32;
        if ndc.is_empty() {
            return;
        }
        let bytes: &[u8] = bytemuck::cast_slice(&ndc);
        if bytes.len() as u64 > self.vcap_bytes {
            let new_cap = (bytes.len() as u64).next_power_of_two();
            self.vbuf = create_vertex_buffer(&self.device, new_cap);
            self.vcap_bytes = new_cap;
        }
        self.queue.write_buffer(&self.vbuf, 0, bytes);
    }

    /// Clear to white and draw the uploaded triangles.
    pub fn render(&mut self) -> Result<(), wgpu::SurfaceError> {
        let frame = self.surface.get_current_texture()?;
        let view = frame
            .texture
            .create_view(&wgpu::TextureViewDescriptor::default());
        let mut encoder = self
            .device
            .create_command_encoder(&wgpu::CommandEncoderDescriptor {
                label: Some("set-encoder"),
            });
        {
            let mut rpass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
                label: Some("set-pass"),
                color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                    view: &view,
                    resolve_target: None,
                    depth_slice: None,
                    ops: wgpu::Operations {
                        load: wgpu::LoadOp::Clear(wgpu::Color::WHITE),
                        store: wgpu::StoreOp::Store,
                    },
                })],
                depth_stencil_attachment: None,
                occlusion_query_set: None,
                timestamp_writes: None,
            });
            if self.vcount > 0 {
                rpass.set_pipeline(&self.pipeline);
                rpass.set_vertex_buffer(0, self.vbuf.slice(..));
                rpass.draw(0..self.vcount, 0..1);
            }
        }
        self.queue.submit(Some(encoder.finish()));
        frame.present();
        Ok(())
    }
}

fn ndc_from_px(px: f32, py: f32, w: f32, h: f32) -> [f32; 2] {
    let x = (px / w) * 2.0 - 1.0;
    let y = 1.0 - (py / h) * 2.0;
    [x, y]
}

fn create_vertex_buffer(device: &wgpu::Device, size: u64) -> wgpu::Buffer {
    device.create_buffer(&wgpu::BufferDescriptor {
        label: Some("set-vbuf"),
        size,
        usage: wgpu::BufferUsages::VERTEX | wgpu::BufferUsages::COPY_DST,
        mapped_at_creation: false,
    })
}

fn create_pipeline(device: &wgpu::Device, color_format: wgpu::TextureFormat) -> wgpu::RenderPipeline {
    let shader = device.create_shader_module(wgpu::ShaderModuleDescriptor {
        label: Some("set-shader"),
        source: wgpu::ShaderSource::Wgsl(std::borrow::Cow::Borrowed(include_str!("shader.wgsl"))),
    });
    let layout = device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
        label: Some("set-pipeline-layout"),
        bind_group_layouts: &[],
        push_constant_ranges: &[],
    });
    device.create_render_pipeline(&wgpu::RenderPipelineDescriptor {
        label: Some("set-pipeline"),
        layout: Some(&layout),
        vertex: wgpu::VertexState {
            module: &shader,
            entry_point: Some("vs_main"),
            buffers: &[VERTEX_LAYOUT],
            compilation_options: Default::default(),
        },
        fragment: Some(wgpu::FragmentState {
            module: &shader,
            entry_point: Some("fs_main"),
            targets: &[Some(wgpu::ColorTargetState {
                format: color_format,
                blend: Some(wgpu::BlendState::ALPHA_BLENDING),
                write_mask: wgpu::ColorWrites::ALL,
            })],
            compilation_options: Default::default(),
        }),
        primitive: wgpu::PrimitiveState::default(),
        depth_stencil: None,
        multisample: wgpu::MultisampleState::default(),
        multiview: None,
        cache: None,
    })
}
