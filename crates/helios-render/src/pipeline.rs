//! Render pipelines for the solar-system scene.
//!
//! Three pipelines share one vertex layout and one pair of uniform bind
//! group layouts, so a single camera bind group and per-body model bind
//! groups work across all of them:
//!
//! - planet: textured with point-light shading, the light sits at the origin
//!   where the sun is
//! - sun: textured emissive, no lighting
//! - wireframe: line-list overlay in a constant dark color

use bytemuck::{Pod, Zeroable};
use std::num::NonZeroU64;

use helios_sphere::SPHERE_VERTEX_LAYOUT;

use crate::buffer::SphereGpu;
use crate::depth::DepthBuffer;

/// Uniform buffer for a body's model matrix.
#[repr(C)]
#[derive(Clone, Copy, Debug, Pod, Zeroable)]
pub struct ModelUniform {
    pub model: [[f32; 4]; 4], // 64 bytes, mat4x4
}

/// The scene's render pipelines and their shared bind group layouts.
///
/// Bind group assignments: camera at group 0, model at group 1, texture and
/// sampler at group 2 (wireframe skips group 2).
pub struct ScenePipelines {
    pub planet: wgpu::RenderPipeline,
    pub sun: wgpu::RenderPipeline,
    pub wireframe: wgpu::RenderPipeline,
    pub camera_bind_group_layout: wgpu::BindGroupLayout,
    pub model_bind_group_layout: wgpu::BindGroupLayout,
}

impl ScenePipelines {
    /// Create all three pipelines against the given surface format.
    ///
    /// `texture_bind_group_layout` is the texture manager's shared layout.
    pub fn new(
        device: &wgpu::Device,
        surface_format: wgpu::TextureFormat,
        texture_bind_group_layout: &wgpu::BindGroupLayout,
    ) -> Self {
        let camera_bind_group_layout =
            device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
                label: Some("scene-camera-bgl"),
                entries: &[wgpu::BindGroupLayoutEntry {
                    binding: 0,
                    visibility: wgpu::ShaderStages::VERTEX_FRAGMENT,
                    ty: wgpu::BindingType::Buffer {
                        ty: wgpu::BufferBindingType::Uniform,
                        has_dynamic_offset: false,
                        min_binding_size: NonZeroU64::new(80), // CameraUniform: mat4x4 + vec4
                    },
                    count: None,
                }],
            });

        let model_bind_group_layout =
            device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
                label: Some("scene-model-bgl"),
                entries: &[wgpu::BindGroupLayoutEntry {
                    binding: 0,
                    visibility: wgpu::ShaderStages::VERTEX,
                    ty: wgpu::BindingType::Buffer {
                        ty: wgpu::BufferBindingType::Uniform,
                        has_dynamic_offset: false,
                        min_binding_size: NonZeroU64::new(64), // ModelUniform: mat4x4
                    },
                    count: None,
                }],
            });

        let textured_layout = device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
            label: Some("scene-textured-layout"),
            bind_group_layouts: &[
                &camera_bind_group_layout,
                &model_bind_group_layout,
                texture_bind_group_layout,
            ],
            immediate_size: 0,
        });

        let wire_layout = device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
            label: Some("scene-wire-layout"),
            bind_group_layouts: &[&camera_bind_group_layout, &model_bind_group_layout],
            immediate_size: 0,
        });

        let planet_shader = device.create_shader_module(wgpu::ShaderModuleDescriptor {
            label: Some("planet-shader"),
            source: wgpu::ShaderSource::Wgsl(PLANET_SHADER_SOURCE.into()),
        });
        let sun_shader = device.create_shader_module(wgpu::ShaderModuleDescriptor {
            label: Some("sun-shader"),
            source: wgpu::ShaderSource::Wgsl(SUN_SHADER_SOURCE.into()),
        });
        let wire_shader = device.create_shader_module(wgpu::ShaderModuleDescriptor {
            label: Some("wire-shader"),
            source: wgpu::ShaderSource::Wgsl(WIRE_SHADER_SOURCE.into()),
        });

        // Bias the solid surfaces away from the camera so the wireframe
        // overlay wins the depth test along shared edges. Negative because
        // reverse-Z flips the bias direction.
        let solid_bias = wgpu::DepthBiasState {
            constant: -2,
            slope_scale: -2.0,
            clamp: 0.0,
        };

        let planet = build_pipeline(
            device,
            "planet-pipeline",
            &textured_layout,
            &planet_shader,
            surface_format,
            wgpu::PrimitiveTopology::TriangleList,
            solid_bias,
        );
        let sun = build_pipeline(
            device,
            "sun-pipeline",
            &textured_layout,
            &sun_shader,
            surface_format,
            wgpu::PrimitiveTopology::TriangleList,
            solid_bias,
        );
        let wireframe = build_pipeline(
            device,
            "wire-pipeline",
            &wire_layout,
            &wire_shader,
            surface_format,
            wgpu::PrimitiveTopology::LineList,
            wgpu::DepthBiasState::default(),
        );

        Self {
            planet,
            sun,
            wireframe,
            camera_bind_group_layout,
            model_bind_group_layout,
        }
    }
}

fn build_pipeline(
    device: &wgpu::Device,
    label: &str,
    layout: &wgpu::PipelineLayout,
    shader: &wgpu::ShaderModule,
    surface_format: wgpu::TextureFormat,
    topology: wgpu::PrimitiveTopology,
    bias: wgpu::DepthBiasState,
) -> wgpu::RenderPipeline {
    device.create_render_pipeline(&wgpu::RenderPipelineDescriptor {
        label: Some(label),
        layout: Some(layout),
        vertex: wgpu::VertexState {
            module: shader,
            entry_point: Some("vs_main"),
            buffers: &[SPHERE_VERTEX_LAYOUT],
            compilation_options: wgpu::PipelineCompilationOptions::default(),
        },
        primitive: wgpu::PrimitiveState {
            topology,
            strip_index_format: None,
            front_face: wgpu::FrontFace::Ccw,
            cull_mode: Some(wgpu::Face::Back),
            unclipped_depth: false,
            polygon_mode: wgpu::PolygonMode::Fill,
            conservative: false,
        },
        depth_stencil: Some(wgpu::DepthStencilState {
            format: DepthBuffer::FORMAT,
            depth_write_enabled: true,
            depth_compare: DepthBuffer::COMPARE_FUNCTION,
            stencil: wgpu::StencilState::default(),
            bias,
        }),
        multisample: wgpu::MultisampleState {
            count: 1,
            mask: !0,
            alpha_to_coverage_enabled: false,
        },
        fragment: Some(wgpu::FragmentState {
            module: shader,
            entry_point: Some("fs_main"),
            targets: &[Some(wgpu::ColorTargetState {
                format: surface_format,
                blend: None,
                write_mask: wgpu::ColorWrites::ALL,
            })],
            compilation_options: wgpu::PipelineCompilationOptions::default(),
        }),
        multiview_mask: None,
        cache: None,
    })
}

/// Draw a lit planet.
pub fn draw_planet<'a>(
    render_pass: &mut wgpu::RenderPass<'a>,
    pipelines: &ScenePipelines,
    camera_bind_group: &'a wgpu::BindGroup,
    model_bind_group: &'a wgpu::BindGroup,
    texture_bind_group: &'a wgpu::BindGroup,
    sphere: &'a SphereGpu,
) {
    render_pass.set_pipeline(&pipelines.planet);
    render_pass.set_bind_group(0, camera_bind_group, &[]);
    render_pass.set_bind_group(1, model_bind_group, &[]);
    render_pass.set_bind_group(2, texture_bind_group, &[]);
    sphere.draw_solid(render_pass);
}

/// Draw the emissive sun.
pub fn draw_sun<'a>(
    render_pass: &mut wgpu::RenderPass<'a>,
    pipelines: &ScenePipelines,
    camera_bind_group: &'a wgpu::BindGroup,
    model_bind_group: &'a wgpu::BindGroup,
    texture_bind_group: &'a wgpu::BindGroup,
    sphere: &'a SphereGpu,
) {
    render_pass.set_pipeline(&pipelines.sun);
    render_pass.set_bind_group(0, camera_bind_group, &[]);
    render_pass.set_bind_group(1, model_bind_group, &[]);
    render_pass.set_bind_group(2, texture_bind_group, &[]);
    sphere.draw_solid(render_pass);
}

/// Draw a body's wireframe overlay.
pub fn draw_wireframe<'a>(
    render_pass: &mut wgpu::RenderPass<'a>,
    pipelines: &ScenePipelines,
    camera_bind_group: &'a wgpu::BindGroup,
    model_bind_group: &'a wgpu::BindGroup,
    sphere: &'a SphereGpu,
) {
    render_pass.set_pipeline(&pipelines.wireframe);
    render_pass.set_bind_group(0, camera_bind_group, &[]);
    render_pass.set_bind_group(1, model_bind_group, &[]);
    sphere.draw_wireframe(render_pass);
}

/// WGSL shader for lit planets. The point light sits at the origin.
pub const PLANET_SHADER_SOURCE: &str = r#"
struct CameraUniform {
    view_proj: mat4x4<f32>,
    camera_pos: vec4<f32>,
};

struct ModelUniform {
    model: mat4x4<f32>,
};

@group(0) @binding(0)
var<uniform> camera: CameraUniform;
@group(1) @binding(0)
var<uniform> object: ModelUniform;
@group(2) @binding(0)
var t_surface: texture_2d<f32>;
@group(2) @binding(1)
var s_surface: sampler;

struct VertexInput {
    @location(0) position: vec3<f32>,
    @location(1) normal: vec3<f32>,
    @location(2) uv: vec2<f32>,
};

struct VertexOutput {
    @builtin(position) clip_position: vec4<f32>,
    @location(0) world_pos: vec3<f32>,
    @location(1) world_normal: vec3<f32>,
    @location(2) uv: vec2<f32>,
};

@vertex
fn vs_main(in: VertexInput) -> VertexOutput {
    var out: VertexOutput;
    let world_pos = object.model * vec4<f32>(in.position, 1.0);
    out.clip_position = camera.view_proj * world_pos;
    out.world_pos = world_pos.xyz;
    // Model is rotation, translation, and uniform scale; renormalizing
    // after the transform is enough.
    out.world_normal = normalize((object.model * vec4<f32>(in.normal, 0.0)).xyz);
    out.uv = in.uv;
    return out;
}

@fragment
fn fs_main(in: VertexOutput) -> @location(0) vec4<f32> {
    let albedo = textureSample(t_surface, s_surface, in.uv).rgb;

    let normal = normalize(in.world_normal);
    // Sunlight radiates from the origin.
    let light_dir = normalize(-in.world_pos);
    let diffuse = max(dot(normal, light_dir), 0.0);

    let view_dir = normalize(camera.camera_pos.xyz - in.world_pos);
    let half_dir = normalize(light_dir + view_dir);
    let specular = pow(max(dot(normal, half_dir), 0.0), 32.0) * 0.2;

    let ambient = 0.15;
    let color = albedo * (ambient + diffuse) + vec3<f32>(specular);
    return vec4<f32>(color, 1.0);
}
"#;

/// WGSL shader for the sun: emissive, the texture is shown unlit.
pub const SUN_SHADER_SOURCE: &str = r#"
struct CameraUniform {
    view_proj: mat4x4<f32>,
    camera_pos: vec4<f32>,
};

struct ModelUniform {
    model: mat4x4<f32>,
};

@group(0) @binding(0)
var<uniform> camera: CameraUniform;
@group(1) @binding(0)
var<uniform> object: ModelUniform;
@group(2) @binding(0)
var t_surface: texture_2d<f32>;
@group(2) @binding(1)
var s_surface: sampler;

struct VertexInput {
    @location(0) position: vec3<f32>,
    @location(1) normal: vec3<f32>,
    @location(2) uv: vec2<f32>,
};

struct VertexOutput {
    @builtin(position) clip_position: vec4<f32>,
    @location(0) uv: vec2<f32>,
};

@vertex
fn vs_main(in: VertexInput) -> VertexOutput {
    var out: VertexOutput;
    out.clip_position = camera.view_proj * object.model * vec4<f32>(in.position, 1.0);
    out.uv = in.uv;
    return out;
}

@fragment
fn fs_main(in: VertexOutput) -> @location(0) vec4<f32> {
    return textureSample(t_surface, s_surface, in.uv);
}
"#;

/// WGSL shader for the wireframe overlay.
pub const WIRE_SHADER_SOURCE: &str = r#"
struct CameraUniform {
    view_proj: mat4x4<f32>,
    camera_pos: vec4<f32>,
};

struct ModelUniform {
    model: mat4x4<f32>,
};

@group(0) @binding(0)
var<uniform> camera: CameraUniform;
@group(1) @binding(0)
var<uniform> object: ModelUniform;

struct VertexInput {
    @location(0) position: vec3<f32>,
    @location(1) normal: vec3<f32>,
    @location(2) uv: vec2<f32>,
};

@vertex
fn vs_main(in: VertexInput) -> @builtin(position) vec4<f32> {
    return camera.view_proj * object.model * vec4<f32>(in.position, 1.0);
}

@fragment
fn fs_main() -> @location(0) vec4<f32> {
    return vec4<f32>(0.2, 0.2, 0.2, 1.0);
}
"#;
