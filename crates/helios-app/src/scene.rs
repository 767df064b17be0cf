//! Per-body GPU scene assembly.
//!
//! [`Scene`] builds one sphere mesh, model uniform, and surface texture per
//! solar-system body, plus the shared camera uniform and render pipelines.
//! Each frame, [`update`](Scene::update) rewrites the uniforms and
//! [`render`](Scene::render) records the draw calls.

use std::path::{Path, PathBuf};

use helios_bodies::{Body, SOLAR_SYSTEM, ScaleMode, model_matrix};
use helios_config::Config;
use helios_render::{
    BufferAllocator, FlyCamera, ModelUniform, RenderContext, ScenePipelines, SphereGpu,
    TextureManager, draw_planet, draw_sun, draw_wireframe,
};
use helios_sphere::SphereMesh;
use tracing::info;

/// GPU resources for one body.
pub struct BodyScene {
    pub body: &'static Body,
    pub sphere: SphereGpu,
    pub model_buffer: wgpu::Buffer,
    pub model_bind_group: wgpu::BindGroup,
    pub texture: std::sync::Arc<helios_render::ManagedTexture>,
}

/// The whole renderable scene: bodies, camera uniform, pipelines.
pub struct Scene {
    pub bodies: Vec<BodyScene>,
    pub pipelines: ScenePipelines,
    pub camera_buffer: wgpu::Buffer,
    pub camera_bind_group: wgpu::BindGroup,
    scale_mode: ScaleMode,
}

impl Scene {
    /// Build the scene: one sphere per body sized by the scale mode, with
    /// its texture loaded from `texture_dir`.
    pub fn new(gpu: &RenderContext, config: &Config, texture_dir: &Path) -> Self {
        let scale_mode = config.simulation.scale_mode;
        let sectors = config.simulation.sector_count;
        let stacks = config.simulation.stack_count;

        let mut texture_manager = TextureManager::new(&gpu.device);
        let pipelines = ScenePipelines::new(
            &gpu.device,
            gpu.surface_format,
            texture_manager.bind_group_layout(),
        );

        let allocator = BufferAllocator::new(&gpu.device);
        let camera_buffer = allocator.create_uniform_buffer(
            "camera-uniform",
            &helios_render::CameraUniform {
                view_proj: glam::Mat4::IDENTITY.to_cols_array_2d(),
                camera_pos: [0.0; 4],
            },
        );
        let camera_bind_group = gpu.device.create_bind_group(&wgpu::BindGroupDescriptor {
            label: Some("camera-bind-group"),
            layout: &pipelines.camera_bind_group_layout,
            entries: &[wgpu::BindGroupEntry {
                binding: 0,
                resource: camera_buffer.as_entire_binding(),
            }],
        });

        let bodies = SOLAR_SYSTEM
            .iter()
            .map(|body| {
                let radius = scale_mode.display_radius(body);
                let mesh = SphereMesh::new(radius, sectors, stacks, true);
                info!(
                    "{}: radius {:.3}, {} vertices, {} triangles",
                    body.name,
                    radius,
                    mesh.vertex_count(),
                    mesh.triangle_count()
                );
                let sphere = SphereGpu::upload(&gpu.device, &mesh, body.name);

                let model_buffer = allocator.create_uniform_buffer(
                    &format!("{}-model", body.name),
                    &ModelUniform {
                        model: glam::Mat4::IDENTITY.to_cols_array_2d(),
                    },
                );
                let model_bind_group = gpu.device.create_bind_group(&wgpu::BindGroupDescriptor {
                    label: Some(&format!("{}-model-bind-group", body.name)),
                    layout: &pipelines.model_bind_group_layout,
                    entries: &[wgpu::BindGroupEntry {
                        binding: 0,
                        resource: model_buffer.as_entire_binding(),
                    }],
                });

                let texture_path: PathBuf = texture_dir.join(body.texture_file);
                let texture =
                    texture_manager.load_file(&gpu.device, &gpu.queue, body.name, &texture_path);

                BodyScene {
                    body,
                    sphere,
                    model_buffer,
                    model_bind_group,
                    texture,
                }
            })
            .collect();

        Self {
            bodies,
            pipelines,
            camera_buffer,
            camera_bind_group,
            scale_mode,
        }
    }

    /// The scale mode the scene was built with.
    #[must_use]
    pub fn scale_mode(&self) -> ScaleMode {
        self.scale_mode
    }

    /// Upload this frame's camera and per-body model uniforms.
    pub fn update(&self, queue: &wgpu::Queue, sim_time: f64, camera: &FlyCamera) {
        queue.write_buffer(
            &self.camera_buffer,
            0,
            bytemuck::bytes_of(&camera.to_uniform()),
        );
        for scene_body in &self.bodies {
            let model = model_matrix(scene_body.body, sim_time as f32, self.scale_mode);
            let uniform = ModelUniform {
                model: model.to_cols_array_2d(),
            };
            queue.write_buffer(&scene_body.model_buffer, 0, bytemuck::bytes_of(&uniform));
        }
    }

    /// Record draw calls for every body into an open render pass.
    pub fn render<'a>(&'a self, render_pass: &mut wgpu::RenderPass<'a>, wireframe: bool) {
        for scene_body in &self.bodies {
            if scene_body.body.is_sun() {
                draw_sun(
                    render_pass,
                    &self.pipelines,
                    &self.camera_bind_group,
                    &scene_body.model_bind_group,
                    &scene_body.texture.bind_group,
                    &scene_body.sphere,
                );
            } else {
                draw_planet(
                    render_pass,
                    &self.pipelines,
                    &self.camera_bind_group,
                    &scene_body.model_bind_group,
                    &scene_body.texture.bind_group,
                    &scene_body.sphere,
                );
            }
        }
        if wireframe {
            for scene_body in &self.bodies {
                draw_wireframe(
                    render_pass,
                    &self.pipelines,
                    &self.camera_bind_group,
                    &scene_body.model_bind_group,
                    &scene_body.sphere,
                );
            }
        }
    }
}
