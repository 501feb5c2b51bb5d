use crate::model::TreeMesh;
use glam::{Mat4, Vec3};
use snow_core::{
    camera::Camera,
    constants::{
        AMBIENT_LEVEL, CLEAR_COLOR, GROUND_PLANE_SIZE, LIGHT_POSITION, LIGHT_RANGE,
        SNOW_PARTICLE_SIZE, SNOW_SPRITE_SIZE, TREE_POSITION, TREE_SCALE,
    },
    sprite,
};
use web_sys as web;
use wgpu::util::DeviceExt;

pub static SCENE_WGSL: &str = include_str!("../shaders/scene.wgsl");
pub static SNOW_WGSL: &str = include_str!("../shaders/snow.wgsl");

const DEPTH_FORMAT: wgpu::TextureFormat = wgpu::TextureFormat::Depth24Plus;

#[repr(C)]
#[derive(Copy, Clone, bytemuck::Pod, bytemuck::Zeroable)]
struct Globals {
    view_proj: [[f32; 4]; 4],
    cam_right: [f32; 4], // w carries the snow quad size
    cam_up: [f32; 4],
    light_pos: [f32; 4], // w carries the light range
    ambient: [f32; 4],
}

#[repr(C)]
#[derive(Copy, Clone, bytemuck::Pod, bytemuck::Zeroable)]
struct MeshParams {
    model: [[f32; 4]; 4],
    base_color: [f32; 4],
}

#[repr(C)]
#[derive(Copy, Clone, bytemuck::Pod, bytemuck::Zeroable)]
pub struct MeshVertex {
    pub position: [f32; 3],
    pub normal: [f32; 3],
}

/// One renderable node of the scene graph: uploaded geometry plus its
/// model/color uniform.
struct MeshNode {
    vertex_buffer: wgpu::Buffer,
    index_buffer: wgpu::Buffer,
    index_count: u32,
    params_bind_group: wgpu::BindGroup,
}

pub struct GpuState<'a> {
    surface: wgpu::Surface<'a>,
    device: wgpu::Device,
    queue: wgpu::Queue,
    config: wgpu::SurfaceConfiguration,
    depth_view: wgpu::TextureView,

    globals_buffer: wgpu::Buffer,
    globals_bind_group: wgpu::BindGroup,
    mesh_bgl: wgpu::BindGroupLayout,

    scene_pipeline: wgpu::RenderPipeline,
    meshes: Vec<MeshNode>,

    snow_pipeline: wgpu::RenderPipeline,
    snow_quad_buffer: wgpu::Buffer,
    snow_instance_buffer: wgpu::Buffer,
    snow_count: u32,
    flake_bind_group: wgpu::BindGroup,

    width: u32,
    height: u32,
    clear_color: wgpu::Color,
}

impl<'a> GpuState<'a> {
    pub async fn new(
        canvas: &'a web::HtmlCanvasElement,
        snow_positions: &[f32],
    ) -> anyhow::Result<Self> {
        let width = canvas.width();
        let height = canvas.height();

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
            .unwrap_or(caps.formats[0]);
        let config = wgpu::SurfaceConfiguration {
            usage: wgpu::TextureUsages::RENDER_ATTACHMENT,
            format,
            width,
            height,
            present_mode: wgpu::PresentMode::Fifo,
            alpha_mode: caps.alpha_modes[0],
            view_formats: vec![],
            desired_maximum_frame_latency: 2,
        };
        surface.configure(&device, &config);
        let depth_view = create_depth_view(&device, width, height);

        // Shared globals (camera + light)
        let globals_buffer = device.create_buffer(&wgpu::BufferDescriptor {
            label: Some("globals"),
            size: std::mem::size_of::<Globals>() as u64,
            usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
            mapped_at_creation: false,
        });
        let globals_bgl = device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
            label: Some("globals_bgl"),
            entries: &[wgpu::BindGroupLayoutEntry {
                binding: 0,
                visibility: wgpu::ShaderStages::VERTEX_FRAGMENT,
                ty: wgpu::BindingType::Buffer {
                    ty: wgpu::BufferBindingType::Uniform,
                    has_dynamic_offset: false,
                    min_binding_size: None,
                },
                count: None,
            }],
        });
        let globals_bind_group = device.create_bind_group(&wgpu::BindGroupDescriptor {
            label: Some("globals_bg"),
            layout: &globals_bgl,
            entries: &[wgpu::BindGroupEntry {
                binding: 0,
                resource: globals_buffer.as_entire_binding(),
            }],
        });

        // Per-mesh model/color uniform layout
        let mesh_bgl = device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
            label: Some("mesh_bgl"),
            entries: &[wgpu::BindGroupLayoutEntry {
                binding: 0,
                visibility: wgpu::ShaderStages::VERTEX_FRAGMENT,
                ty: wgpu::BindingType::Buffer {
                    ty: wgpu::BufferBindingType::Uniform,
                    has_dynamic_offset: false,
                    min_binding_size: None,
                },
                count: None,
            }],
        });

        let scene_shader = device.create_shader_module(wgpu::ShaderModuleDescriptor {
            label: Some("scene_shader"),
            source: wgpu::ShaderSource::Wgsl(SCENE_WGSL.into()),
        });
        let scene_pl = device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
            label: Some("scene_pl"),
            bind_group_layouts: &[&globals_bgl, &mesh_bgl],
            push_constant_ranges: &[],
        });
        let scene_pipeline = device.create_render_pipeline(&wgpu::RenderPipelineDescriptor {
            label: Some("scene_pipeline"),
            layout: Some(&scene_pl),
            vertex: wgpu::VertexState {
                module: &scene_shader,
                entry_point: Some("vs_mesh"),
                buffers: &[wgpu::VertexBufferLayout {
                    array_stride: std::mem::size_of::<MeshVertex>() as u64,
                    step_mode: wgpu::VertexStepMode::Vertex,
                    attributes: &wgpu::vertex_attr_array![0 => Float32x3, 1 => Float32x3],
                }],
                compilation_options: wgpu::PipelineCompilationOptions::default(),
            },
            primitive: wgpu::PrimitiveState {
                cull_mode: None, // ground plane is double sided
                ..Default::default()
            },
            depth_stencil: Some(wgpu::DepthStencilState {
                format: DEPTH_FORMAT,
                depth_write_enabled: true,
                depth_compare: wgpu::CompareFunction::Less,
                stencil: wgpu::StencilState::default(),
                bias: wgpu::DepthBiasState::default(),
            }),
            multisample: wgpu::MultisampleState::default(),
            fragment: Some(wgpu::FragmentState {
                module: &scene_shader,
                entry_point: Some("fs_mesh"),
                targets: &[Some(wgpu::ColorTargetState {
                    format,
                    blend: Some(wgpu::BlendState::REPLACE),
                    write_mask: wgpu::ColorWrites::ALL,
                })],
                compilation_options: wgpu::PipelineCompilationOptions::default(),
            }),
            cache: None,
            multiview: None,
        });

        // Soft flake sprite, sampled by the snow quads
        let sprite_px = sprite::flake_sprite_rgba(SNOW_SPRITE_SIZE);
        let flake_tex = device.create_texture(&wgpu::TextureDescriptor {
            label: Some("flake_tex"),
            size: wgpu::Extent3d {
                width: SNOW_SPRITE_SIZE,
                height: SNOW_SPRITE_SIZE,
                depth_or_array_layers: 1,
            },
            mip_level_count: 1,
            sample_count: 1,
            dimension: wgpu::TextureDimension::D2,
            format: wgpu::TextureFormat::Rgba8Unorm,
            usage: wgpu::TextureUsages::TEXTURE_BINDING | wgpu::TextureUsages::COPY_DST,
            view_formats: &[],
        });
        queue.write_texture(
            wgpu::TexelCopyTextureInfo {
                texture: &flake_tex,
                mip_level: 0,
                origin: wgpu::Origin3d::ZERO,
                aspect: wgpu::TextureAspect::All,
            },
            &sprite_px,
            wgpu::TexelCopyBufferLayout {
                offset: 0,
                bytes_per_row: Some(SNOW_SPRITE_SIZE * 4),
                rows_per_image: None,
            },
            wgpu::Extent3d {
                width: SNOW_SPRITE_SIZE,
                height: SNOW_SPRITE_SIZE,
                depth_or_array_layers: 1,
            },
        );
        let flake_view = flake_tex.create_view(&wgpu::TextureViewDescriptor::default());
        let flake_sampler = device.create_sampler(&wgpu::SamplerDescriptor {
            label: Some("flake_sampler"),
            address_mode_u: wgpu::AddressMode::ClampToEdge,
            address_mode_v: wgpu::AddressMode::ClampToEdge,
            address_mode_w: wgpu::AddressMode::ClampToEdge,
            mag_filter: wgpu::FilterMode::Linear,
            min_filter: wgpu::FilterMode::Linear,
            mipmap_filter: wgpu::FilterMode::Linear,
            ..Default::default()
        });
        let flake_bgl = device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
            label: Some("flake_bgl"),
            entries: &[
                wgpu::BindGroupLayoutEntry {
                    binding: 0,
                    visibility: wgpu::ShaderStages::FRAGMENT,
                    ty: wgpu::BindingType::Texture {
                        multisampled: false,
                        view_dimension: wgpu::TextureViewDimension::D2,
                        sample_type: wgpu::TextureSampleType::Float { filterable: true },
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
        let flake_bind_group = device.create_bind_group(&wgpu::BindGroupDescriptor {
            label: Some("flake_bg"),
            layout: &flake_bgl,
            entries: &[
                wgpu::BindGroupEntry {
                    binding: 0,
                    resource: wgpu::BindingResource::TextureView(&flake_view),
                },
                wgpu::BindGroupEntry {
                    binding: 1,
                    resource: wgpu::BindingResource::Sampler(&flake_sampler),
                },
            ],
        });

        let snow_shader = device.create_shader_module(wgpu::ShaderModuleDescriptor {
            label: Some("snow_shader"),
            source: wgpu::ShaderSource::Wgsl(SNOW_WGSL.into()),
        });
        let snow_pl = device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
            label: Some("snow_pl"),
            bind_group_layouts: &[&globals_bgl, &flake_bgl],
            push_constant_ranges: &[],
        });
        let snow_pipeline = device.create_render_pipeline(&wgpu::RenderPipelineDescriptor {
            label: Some("snow_pipeline"),
            layout: Some(&snow_pl),
            vertex: wgpu::VertexState {
                module: &snow_shader,
                entry_point: Some("vs_flake"),
                buffers: &[
                    wgpu::VertexBufferLayout {
                        array_stride: 8,
                        step_mode: wgpu::VertexStepMode::Vertex,
                        attributes: &wgpu::vertex_attr_array![0 => Float32x2],
                    },
                    wgpu::VertexBufferLayout {
                        array_stride: 12,
                        step_mode: wgpu::VertexStepMode::Instance,
                        attributes: &wgpu::vertex_attr_array![1 => Float32x3],
                    },
                ],
                compilation_options: wgpu::PipelineCompilationOptions::default(),
            },
            primitive: wgpu::PrimitiveState::default(),
            depth_stencil: Some(wgpu::DepthStencilState {
                format: DEPTH_FORMAT,
                // flakes test against the scene but never occlude each other
                depth_write_enabled: false,
                depth_compare: wgpu::CompareFunction::LessEqual,
                stencil: wgpu::StencilState::default(),
                bias: wgpu::DepthBiasState::default(),
            }),
            multisample: wgpu::MultisampleState::default(),
            fragment: Some(wgpu::FragmentState {
                module: &snow_shader,
                entry_point: Some("fs_flake"),
                targets: &[Some(wgpu::ColorTargetState {
                    format,
                    blend: Some(wgpu::BlendState::ALPHA_BLENDING),
                    write_mask: wgpu::ColorWrites::ALL,
                })],
                compilation_options: wgpu::PipelineCompilationOptions::default(),
            }),
            cache: None,
            multiview: None,
        });

        // Unit quad, two triangles, centered on the particle
        let quad: [[f32; 2]; 6] = [
            [-0.5, -0.5],
            [0.5, -0.5],
            [0.5, 0.5],
            [-0.5, -0.5],
            [0.5, 0.5],
            [-0.5, 0.5],
        ];
        let snow_quad_buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some("snow_quad"),
            contents: bytemuck::cast_slice(&quad),
            usage: wgpu::BufferUsages::VERTEX,
        });
        let snow_instance_buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some("snow_instances"),
            contents: bytemuck::cast_slice(snow_positions),
            usage: wgpu::BufferUsages::VERTEX | wgpu::BufferUsages::COPY_DST,
        });
        let snow_count = (snow_positions.len() / 3) as u32;

        let mut state = Self {
            surface,
            device,
            queue,
            config,
            depth_view,
            globals_buffer,
            globals_bind_group,
            mesh_bgl,
            scene_pipeline,
            meshes: Vec::new(),
            snow_pipeline,
            snow_quad_buffer,
            snow_instance_buffer,
            snow_count,
            flake_bind_group,
            width,
            height,
            clear_color: wgpu::Color {
                r: CLEAR_COLOR[0],
                g: CLEAR_COLOR[1],
                b: CLEAR_COLOR[2],
                a: 1.0,
            },
        };
        state.add_ground_plane();
        Ok(state)
    }

    fn add_ground_plane(&mut self) {
        let half = GROUND_PLANE_SIZE / 2.0;
        let up = [0.0, 1.0, 0.0];
        let vertices = [
            MeshVertex {
                position: [-half, 0.0, -half],
                normal: up,
            },
            MeshVertex {
                position: [half, 0.0, -half],
                normal: up,
            },
            MeshVertex {
                position: [half, 0.0, half],
                normal: up,
            },
            MeshVertex {
                position: [-half, 0.0, half],
                normal: up,
            },
        ];
        let indices: [u32; 6] = [0, 2, 1, 0, 3, 2];
        self.push_mesh(&vertices, &indices, Mat4::IDENTITY, [1.0, 1.0, 1.0, 1.0]);
    }

    fn push_mesh(
        &mut self,
        vertices: &[MeshVertex],
        indices: &[u32],
        model: Mat4,
        base_color: [f32; 4],
    ) {
        let vertex_buffer = self
            .device
            .create_buffer_init(&wgpu::util::BufferInitDescriptor {
                label: Some("mesh_vertices"),
                contents: bytemuck::cast_slice(vertices),
                usage: wgpu::BufferUsages::VERTEX,
            });
        let index_buffer = self
            .device
            .create_buffer_init(&wgpu::util::BufferInitDescriptor {
                label: Some("mesh_indices"),
                contents: bytemuck::cast_slice(indices),
                usage: wgpu::BufferUsages::INDEX,
            });
        let params = MeshParams {
            model: model.to_cols_array_2d(),
            base_color,
        };
        let params_buffer = self
            .device
            .create_buffer_init(&wgpu::util::BufferInitDescriptor {
                label: Some("mesh_params"),
                contents: bytemuck::bytes_of(&params),
                usage: wgpu::BufferUsages::UNIFORM,
            });
        let params_bind_group = self.device.create_bind_group(&wgpu::BindGroupDescriptor {
            label: Some("mesh_params_bg"),
            layout: &self.mesh_bgl,
            entries: &[wgpu::BindGroupEntry {
                binding: 0,
                resource: params_buffer.as_entire_binding(),
            }],
        });
        self.meshes.push(MeshNode {
            vertex_buffer,
            index_buffer,
            index_count: indices.len() as u32,
            params_bind_group,
        });
    }

    /// Append the loaded tree primitives to the scene graph. May land on any
    /// frame after startup; rendering never waited for it.
    pub fn add_tree(&mut self, primitives: &[TreeMesh]) {
        let model = Mat4::from_translation(Vec3::from(TREE_POSITION))
            * Mat4::from_scale(Vec3::splat(TREE_SCALE));
        for prim in primitives {
            self.push_mesh(&prim.vertices, &prim.indices, model, prim.base_color);
        }
        log::info!("[gpu] tree added: {} primitives", primitives.len());
    }

    /// Re-upload the snow position buffer after a simulation tick.
    pub fn write_snow(&mut self, positions: &[f32]) {
        self.queue
            .write_buffer(&self.snow_instance_buffer, 0, bytemuck::cast_slice(positions));
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
            self.depth_view = create_depth_view(&self.device, width, height);
        }
    }

    pub fn render(&mut self, camera: &Camera) -> Result<(), wgpu::SurfaceError> {
        let view_mat = camera.view_matrix();
        let globals = Globals {
            view_proj: (camera.projection_matrix() * view_mat).to_cols_array_2d(),
            cam_right: view_mat
                .row(0)
                .truncate()
                .extend(SNOW_PARTICLE_SIZE)
                .to_array(),
            cam_up: view_mat.row(1).truncate().extend(0.0).to_array(),
            light_pos: [
                LIGHT_POSITION[0],
                LIGHT_POSITION[1],
                LIGHT_POSITION[2],
                LIGHT_RANGE,
            ],
            ambient: [AMBIENT_LEVEL, AMBIENT_LEVEL, AMBIENT_LEVEL, 0.0],
        };
        self.queue
            .write_buffer(&self.globals_buffer, 0, bytemuck::bytes_of(&globals));

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
                depth_stencil_attachment: Some(wgpu::RenderPassDepthStencilAttachment {
                    view: &self.depth_view,
                    depth_ops: Some(wgpu::Operations {
                        load: wgpu::LoadOp::Clear(1.0),
                        store: wgpu::StoreOp::Store,
                    }),
                    stencil_ops: None,
                }),
                timestamp_writes: None,
                occlusion_query_set: None,
            });

            rpass.set_pipeline(&self.scene_pipeline);
            rpass.set_bind_group(0, &self.globals_bind_group, &[]);
            for mesh in &self.meshes {
                rpass.set_bind_group(1, &mesh.params_bind_group, &[]);
                rpass.set_vertex_buffer(0, mesh.vertex_buffer.slice(..));
                rpass.set_index_buffer(mesh.index_buffer.slice(..), wgpu::IndexFormat::Uint32);
                rpass.draw_indexed(0..mesh.index_count, 0, 0..1);
            }

            rpass.set_pipeline(&self.snow_pipeline);
            rpass.set_bind_group(0, &self.globals_bind_group, &[]);
            rpass.set_bind_group(1, &self.flake_bind_group, &[]);
            rpass.set_vertex_buffer(0, self.snow_quad_buffer.slice(..));
            rpass.set_vertex_buffer(1, self.snow_instance_buffer.slice(..));
            rpass.draw(0..6, 0..self.snow_count);
        }

        self.queue.submit(Some(encoder.finish()));
        frame.present();
        Ok(())
    }
}

fn create_depth_view(device: &wgpu::Device, width: u32, height: u32) -> wgpu::TextureView {
    let tex = device.create_texture(&wgpu::TextureDescriptor {
        label: Some("depth_tex"),
        size: wgpu::Extent3d {
            width: width.max(1),
            height: height.max(1),
            depth_or_array_layers: 1,
        },
        mip_level_count: 1,
        sample_count: 1,
        dimension: wgpu::TextureDimension::D2,
        format: DEPTH_FORMAT,
        usage: wgpu::TextureUsages::RENDER_ATTACHMENT,
        view_formats: &[],
    });
    tex.create_view(&wgpu::TextureViewDescriptor::default())
}
