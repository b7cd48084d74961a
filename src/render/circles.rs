use patatap_core::Particle;

pub(crate) static CIRCLES_WGSL: &str = include_str!("../../shaders/circles.wgsl");

#[repr(C)]
#[derive(Copy, Clone, bytemuck::Pod, bytemuck::Zeroable)]
pub(crate) struct CircleInstance {
    pub(crate) center_radius: [f32; 4],
    pub(crate) fill: [f32; 4],
    pub(crate) stroke: [f32; 4],
}

impl CircleInstance {
    pub(crate) fn from_particle(p: &Particle) -> Self {
        let pos = p.position();
        Self {
            center_radius: [pos.x, pos.y, p.radius(), p.stroke_width()],
            fill: p.fill().to_rgba_array(),
            stroke: p.stroke().to_rgba_array(),
        }
    }
}

#[repr(C)]
#[derive(Copy, Clone, bytemuck::Pod, bytemuck::Zeroable)]
pub(crate) struct CircleGlobals {
    pub(crate) resolution: [f32; 2],
    pub(crate) _pad: [f32; 2],
}

const INSTANCE_ATTRS: [wgpu::VertexAttribute; 3] =
    wgpu::vertex_attr_array![0 => Float32x4, 1 => Float32x4, 2 => Float32x4];

const INITIAL_CAPACITY: usize = 64;

/// Screen blend on premultiplied color: `src + dst * (1 - src)`.
pub(crate) const SCREEN_BLEND: wgpu::BlendState = wgpu::BlendState {
    color: wgpu::BlendComponent {
        src_factor: wgpu::BlendFactor::One,
        dst_factor: wgpu::BlendFactor::OneMinusSrc,
        operation: wgpu::BlendOperation::Add,
    },
    alpha: wgpu::BlendComponent {
        src_factor: wgpu::BlendFactor::One,
        dst_factor: wgpu::BlendFactor::OneMinusSrcAlpha,
        operation: wgpu::BlendOperation::Add,
    },
};

pub(crate) struct CircleResources {
    pub(crate) pipeline: wgpu::RenderPipeline,
    pub(crate) uniform_buffer: wgpu::Buffer,
    pub(crate) bind_group: wgpu::BindGroup,
    pub(crate) instance_buffer: wgpu::Buffer,
    pub(crate) capacity: usize,
    pub(crate) staging: Vec<CircleInstance>,
}

impl CircleResources {
    /// Upload this frame's particles, growing the instance buffer if needed.
    /// Returns the instance count to draw.
    pub(crate) fn upload(
        &mut self,
        device: &wgpu::Device,
        queue: &wgpu::Queue,
        particles: &[Particle],
    ) -> u32 {
        self.staging.clear();
        self.staging
            .extend(particles.iter().map(CircleInstance::from_particle));
        if self.staging.is_empty() {
            return 0;
        }
        if self.staging.len() > self.capacity {
            self.capacity = self.staging.len().next_power_of_two();
            self.instance_buffer = create_instance_buffer(device, self.capacity);
            log::debug!("[render] instance buffer grown to {}", self.capacity);
        }
        queue.write_buffer(
            &self.instance_buffer,
            0,
            bytemuck::cast_slice(&self.staging),
        );
        self.staging.len() as u32
    }
}

fn create_instance_buffer(device: &wgpu::Device, capacity: usize) -> wgpu::Buffer {
    device.create_buffer(&wgpu::BufferDescriptor {
        label: Some("circle_instances"),
        size: (capacity * std::mem::size_of::<CircleInstance>()) as u64,
        usage: wgpu::BufferUsages::VERTEX | wgpu::BufferUsages::COPY_DST,
        mapped_at_creation: false,
    })
}

pub(crate) fn create_circle_resources(
    device: &wgpu::Device,
    target_format: wgpu::TextureFormat,
) -> CircleResources {
    let shader = device.create_shader_module(wgpu::ShaderModuleDescriptor {
        label: Some("circles_shader"),
        source: wgpu::ShaderSource::Wgsl(CIRCLES_WGSL.into()),
    });
    let bgl = device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
        label: Some("circles_bgl"),
        entries: &[wgpu::BindGroupLayoutEntry {
            binding: 0,
            visibility: wgpu::ShaderStages::VERTEX,
            ty: wgpu::BindingType::Buffer {
                ty: wgpu::BufferBindingType::Uniform,
                has_dynamic_offset: false,
                min_binding_size: None,
            },
            count: None,
        }],
    });
    let pl = device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
        label: Some("circles_pl"),
        bind_group_layouts: &[&bgl],
        push_constant_ranges: &[],
    });
    let pipeline = device.create_render_pipeline(&wgpu::RenderPipelineDescriptor {
        label: Some("circles_pipeline"),
        layout: Some(&pl),
        vertex: wgpu::VertexState {
            module: &shader,
            entry_point: Some("vs_circle"),
            buffers: &[wgpu::VertexBufferLayout {
                array_stride: std::mem::size_of::<CircleInstance>() as wgpu::BufferAddress,
                step_mode: wgpu::VertexStepMode::Instance,
                attributes: &INSTANCE_ATTRS,
            }],
            compilation_options: wgpu::PipelineCompilationOptions::default(),
        },
        primitive: wgpu::PrimitiveState::default(),
        depth_stencil: None,
        multisample: wgpu::MultisampleState::default(),
        fragment: Some(wgpu::FragmentState {
            module: &shader,
            entry_point: Some("fs_circle"),
            targets: &[Some(wgpu::ColorTargetState {
                format: target_format,
                blend: Some(SCREEN_BLEND),
                write_mask: wgpu::ColorWrites::ALL,
            })],
            compilation_options: wgpu::PipelineCompilationOptions::default(),
        }),
        cache: None,
        multiview: None,
    });
    let uniform_buffer = device.create_buffer(&wgpu::BufferDescriptor {
        label: Some("circles_uniforms"),
        size: std::mem::size_of::<CircleGlobals>() as u64,
        usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
        mapped_at_creation: false,
    });
    let bind_group = device.create_bind_group(&wgpu::BindGroupDescriptor {
        label: Some("circles_bg"),
        layout: &bgl,
        entries: &[wgpu::BindGroupEntry {
            binding: 0,
            resource: uniform_buffer.as_entire_binding(),
        }],
    });

    CircleResources {
        pipeline,
        uniform_buffer,
        bind_group,
        instance_buffer: create_instance_buffer(device, INITIAL_CAPACITY),
        capacity: INITIAL_CAPACITY,
        staging: Vec::with_capacity(INITIAL_CAPACITY),
    }
}
