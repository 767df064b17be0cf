//! Canonical `wgpu::VertexBufferLayout` for the interleaved sphere format.
//!
//! Every pipeline that consumes [`SphereMesh`](crate::SphereMesh) geometry
//! (solid, emissive sun, debug wireframe) references [`SPHERE_VERTEX_LAYOUT`]
//! to avoid layout drift bugs.
//!
//! ## Attribute packing
//!
//! | Location | Offset | Format    | Fields       |
//! |----------|--------|-----------|--------------|
//! | 0        | 0      | Float32x3 | position xyz |
//! | 1        | 12     | Float32x3 | normal xyz   |
//! | 2        | 24     | Float32x2 | uv st        |

use std::mem;

use bytemuck::{Pod, Zeroable};
use wgpu::{VertexAttribute, VertexBufferLayout, VertexFormat, VertexStepMode};

use crate::sphere::INTERLEAVED_STRIDE;

/// One interleaved sphere vertex as the GPU sees it.
///
/// Matches the flat `f32` stream produced by
/// [`SphereMesh::interleaved_vertices`](crate::SphereMesh::interleaved_vertices);
/// the two representations can be cast into each other with bytemuck.
#[repr(C)]
#[derive(Clone, Copy, Debug, PartialEq, Pod, Zeroable)]
pub struct SphereVertex {
    /// Position on the sphere surface.
    pub position: [f32; 3],
    /// Unit outward normal.
    pub normal: [f32; 3],
    /// Equirectangular texture coordinate in [0, 1].
    pub uv: [f32; 2],
}

/// Vertex attributes for the interleaved sphere format.
pub const SPHERE_VERTEX_ATTRIBUTES: [VertexAttribute; 3] = [
    VertexAttribute {
        format: VertexFormat::Float32x3,
        offset: 0,
        shader_location: 0,
    },
    VertexAttribute {
        format: VertexFormat::Float32x3,
        offset: 12,
        shader_location: 1,
    },
    VertexAttribute {
        format: VertexFormat::Float32x2,
        offset: 24,
        shader_location: 2,
    },
];

/// The vertex buffer layout shared by all sphere render pipelines.
pub const SPHERE_VERTEX_LAYOUT: VertexBufferLayout<'static> = VertexBufferLayout {
    array_stride: INTERLEAVED_STRIDE as u64,
    step_mode: VertexStepMode::Vertex,
    attributes: &SPHERE_VERTEX_ATTRIBUTES,
};

// ---------------------------------------------------------------------------
// Compile-time validation
// ---------------------------------------------------------------------------

/// Stride must match `SphereVertex` size.
const _: () = assert!(
    mem::size_of::<SphereVertex>() == INTERLEAVED_STRIDE as usize,
    "SphereVertex size changed, update SPHERE_VERTEX_LAYOUT"
);

/// Attribute offsets must be correct.
const _: () = assert!(SPHERE_VERTEX_ATTRIBUTES[0].offset == 0);
const _: () = assert!(SPHERE_VERTEX_ATTRIBUTES[1].offset == 12);
const _: () = assert!(SPHERE_VERTEX_ATTRIBUTES[2].offset == 24);

/// Last attribute must fit within the stride.
const _: () = assert!(
    SPHERE_VERTEX_ATTRIBUTES[2].offset + 8 <= INTERLEAVED_STRIDE as u64,
    "Last attribute exceeds vertex stride"
);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::SphereMesh;

    #[test]
    fn test_layout_stride_matches_vertex_struct_size() {
        assert_eq!(
            SPHERE_VERTEX_LAYOUT.array_stride,
            mem::size_of::<SphereVertex>() as u64,
        );
        assert_eq!(SPHERE_VERTEX_LAYOUT.array_stride, 32);
    }

    #[test]
    fn test_shader_locations_are_sequential() {
        for (i, attr) in SPHERE_VERTEX_ATTRIBUTES.iter().enumerate() {
            assert_eq!(attr.shader_location, i as u32);
        }
    }

    #[test]
    fn test_attribute_formats() {
        assert_eq!(SPHERE_VERTEX_ATTRIBUTES[0].format, VertexFormat::Float32x3);
        assert_eq!(SPHERE_VERTEX_ATTRIBUTES[1].format, VertexFormat::Float32x3);
        assert_eq!(SPHERE_VERTEX_ATTRIBUTES[2].format, VertexFormat::Float32x2);
    }

    #[test]
    fn test_interleaved_stream_casts_to_vertices() {
        let mesh = SphereMesh::new(1.0, 8, 4, true);
        let verts: &[SphereVertex] = bytemuck::cast_slice(mesh.interleaved_vertices());
        assert_eq!(verts.len(), mesh.vertex_count() as usize);

        // Spot-check the north pole vertex.
        let pole = &verts[0];
        assert!((pole.position[2] - 1.0).abs() < 1e-6);
        assert!((pole.normal[2] - 1.0).abs() < 1e-6);
        assert_eq!(pole.uv, [0.0, 0.0]);
    }
}
