//! wgpu rendering for the Helios solar-system viewer: device and surface
//! management, depth buffering, camera, texture loading, sphere buffers, and
//! the scene's render pipelines.

pub mod buffer;
pub mod camera;
pub mod depth;
pub mod gpu;
pub mod pipeline;
pub mod texture;

pub use buffer::{BufferAllocator, SphereGpu};
pub use camera::{CameraUniform, FlyCamera, MAX_PITCH_DEGREES, MIN_FOV_DEGREES};
pub use depth::DepthBuffer;
pub use gpu::{RenderContext, RenderContextError, SurfaceError, init_render_context_blocking};
pub use pipeline::{
    ModelUniform, ScenePipelines, draw_planet, draw_sun, draw_wireframe,
};
pub use texture::{ManagedTexture, TextureError, TextureManager};
