use crate::constants::CLEAR_RGB;
use patatap_core::Particle;
use wasm_bindgen::JsValue;
use web_sys as web;

mod canvas2d;
mod circles;
mod context;

pub use canvas2d::Canvas2dState;
pub use context::CanvasContext;
use circles::{create_circle_resources, CircleGlobals, CircleResources};

// ===================== WebGPU state =====================

pub struct GpuState {
    surface: wgpu::Surface<'static>,
    device: wgpu::Device,
    queue: wgpu::Queue,
    config: wgpu::SurfaceConfiguration,
    circles: CircleResources,
    width: u32,
    height: u32,
    clear_color: wgpu::Color,
}

impl GpuState {
    /// Binds `canvas` to WebGPU. Only call once `adapter` exists; the canvas
    /// cannot fall back to 2D afterwards.
    pub async fn new(
        instance: &wgpu::Instance,
        adapter: wgpu::Adapter,
        canvas: &web::HtmlCanvasElement,
    ) -> anyhow::Result<Self> {
        let width = canvas.width().max(1);
        let height = canvas.height().max(1);

        let surface = instance.create_surface(wgpu::SurfaceTarget::Canvas(canvas.clone()))?;
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
        // Hex palette colors are already sRGB-encoded; keep them as-is.
        let format = caps
            .formats
            .iter()
            .copied()
            .find(|f| !f.is_srgb())
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

        let circles = create_circle_resources(&device, format);
        log::info!("[render] WebGPU ready ({:?}, {}x{})", format, width, height);

        Ok(Self {
            surface,
            device,
            queue,
            config,
            circles,
            width,
            height,
            clear_color: wgpu::Color {
                r: CLEAR_RGB[0],
                g: CLEAR_RGB[1],
                b: CLEAR_RGB[2],
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

    pub fn render(&mut self, particles: &[Particle]) -> Result<(), wgpu::SurfaceError> {
        let frame = match self.surface.get_current_texture() {
            Ok(f) => f,
            Err(wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated) => {
                self.surface.configure(&self.device, &self.config);
                return Ok(());
            }
            Err(e) => return Err(e),
        };
        let view = frame
            .texture
            .create_view(&wgpu::TextureViewDescriptor::default());

        let globals = CircleGlobals {
            resolution: [self.width as f32, self.height as f32],
            _pad: [0.0, 0.0],
        };
        self.queue.write_buffer(
            &self.circles.uniform_buffer,
            0,
            bytemuck::bytes_of(&globals),
        );
        let count = self.circles.upload(&self.device, &self.queue, particles);

        let mut encoder = self
            .device
            .create_command_encoder(&wgpu::CommandEncoderDescriptor {
                label: Some("encoder"),
            });
        {
            let mut rpass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
                label: Some("circles_pass"),
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
            if count > 0 {
                rpass.set_pipeline(&self.circles.pipeline);
                rpass.set_bind_group(0, &self.circles.bind_group, &[]);
                rpass.set_vertex_buffer(0, self.circles.instance_buffer.slice(..));
                rpass.draw(0..6, 0..count);
            }
        }

        self.queue.submit(Some(encoder.finish()));
        frame.present();
        Ok(())
    }
}

/// Whichever backend the browser could give us.
pub enum Renderer {
    Gpu(GpuState),
    Canvas2d {
        state: Canvas2dState,
        width: u32,
        height: u32,
    },
}

impl Renderer {
    /// WebGPU first, 2D canvas otherwise. `None` if neither is available.
    pub async fn new(canvas: &web::HtmlCanvasElement) -> Option<Self> {
        let has_gpu_api = web::window()
            .and_then(|w| js_sys::Reflect::has(&w.navigator(), &JsValue::from_str("gpu")).ok())
            .unwrap_or(false);
        let instance = wgpu::Instance::default();
        // No surface yet: requesting one would claim the canvas for WebGPU.
        let adapter = if has_gpu_api {
            instance
                .request_adapter(&wgpu::RequestAdapterOptions {
                    power_preference: wgpu::PowerPreference::LowPower,
                    compatible_surface: None,
                    force_fallback_adapter: false,
                })
                .await
        } else {
            None
        };

        match (CanvasContext::choose(has_gpu_api, adapter.is_some()), adapter) {
            (CanvasContext::WebGpu, Some(adapter)) => {
                match GpuState::new(&instance, adapter, canvas).await {
                    Ok(g) => return Some(Self::Gpu(g)),
                    // The canvas may already hold a WebGPU context here.
                    Err(e) => log::error!("WebGPU init error: {:?}", e),
                }
            }
            _ => log::warn!("no WebGPU adapter (navigator.gpu: {has_gpu_api}); using 2d canvas"),
        }
        match Canvas2dState::new(canvas) {
            Ok(state) => Some(Self::Canvas2d {
                state,
                width: canvas.width(),
                height: canvas.height(),
            }),
            Err(e) => {
                log::error!("2d canvas init error: {:?}", e);
                None
            }
        }
    }

    pub fn resize_if_needed(&mut self, w: u32, h: u32) {
        match self {
            Self::Gpu(g) => g.resize_if_needed(w, h),
            Self::Canvas2d { width, height, .. } => {
                *width = w;
                *height = h;
            }
        }
    }

    pub fn render(&mut self, particles: &[Particle]) {
        let result = match self {
            Self::Gpu(g) => g.render(particles).map_err(|e| anyhow::anyhow!("{:?}", e)),
            Self::Canvas2d {
                state,
                width,
                height,
            } => state.render(*width, *height, particles),
        };
        if let Err(e) = result {
            log::error!("render error: {:?}", e);
        }
    }
}
