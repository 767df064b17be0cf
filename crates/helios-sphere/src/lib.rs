//! Procedural UV-sphere mesh generation for the Helios solar-system viewer.
//!
//! The generator produces flat position/normal/texcoord arrays, triangle and
//! wireframe index lists, and a single interleaved vertex buffer with a fixed
//! 32-byte stride that a renderer can upload directly.

mod sphere;
mod vertex_layout;

pub use sphere::{
    INTERLEAVED_FLOATS, INTERLEAVED_STRIDE, MIN_SECTOR_COUNT, MIN_STACK_COUNT, SphereMesh,
    TextureBinding, UpAxis,
};
pub use vertex_layout::{SPHERE_VERTEX_ATTRIBUTES, SPHERE_VERTEX_LAYOUT, SphereVertex};
