//! GPU buffer upload for sphere meshes.
//!
//! A sphere is drawn twice from one vertex buffer: the triangle-list index
//! buffer for the solid surface and the line-list index buffer for the
//! wireframe overlay. [`SphereGpu`] owns all three buffers.

use helios_sphere::SphereMesh;
use wgpu::util::DeviceExt;

/// GPU-resident sphere geometry: shared vertices, triangle and line indices.
pub struct SphereGpu {
    pub vertex_buffer: wgpu::Buffer,
    pub triangle_index_buffer: wgpu::Buffer,
    pub triangle_index_count: u32,
    pub line_index_buffer: wgpu::Buffer,
    pub line_index_count: u32,
}

impl SphereGpu {
    /// Upload a sphere mesh's interleaved vertices and both index streams.
    pub fn upload(device: &wgpu::Device, mesh: &SphereMesh, label: &str) -> Self {
        let allocator = BufferAllocator::new(device);
        Self {
            vertex_buffer: allocator.create_vertex_buffer(
                &format!("{label}-vertices"),
                bytemuck::cast_slice(mesh.interleaved_vertices()),
            ),
            triangle_index_buffer: allocator
                .create_index_buffer(&format!("{label}-tri-indices"), mesh.indices()),
            triangle_index_count: mesh.index_count(),
            line_index_buffer: allocator
                .create_index_buffer(&format!("{label}-line-indices"), mesh.line_indices()),
            line_index_count: mesh.line_index_count(),
        }
    }

    /// Draw the solid surface. Pipeline and bind groups must already be set.
    pub fn draw_solid(&self, render_pass: &mut wgpu::RenderPass) {
        render_pass.set_vertex_buffer(0, self.vertex_buffer.slice(..));
        render_pass.set_index_buffer(
            self.triangle_index_buffer.slice(..),
            wgpu::IndexFormat::Uint32,
        );
        render_pass.draw_indexed(0..self.triangle_index_count, 0, 0..1);
    }

    /// Draw the wireframe overlay with a line-list pipeline.
    pub fn draw_wireframe(&self, render_pass: &mut wgpu::RenderPass) {
        render_pass.set_vertex_buffer(0, self.vertex_buffer.slice(..));
        render_pass.set_index_buffer(self.line_index_buffer.slice(..), wgpu::IndexFormat::Uint32);
        render_pass.draw_indexed(0..self.line_index_count, 0, 0..1);
    }
}

/// GPU buffer allocator for vertex, index, and uniform buffers.
pub struct BufferAllocator<'a> {
    device: &'a wgpu::Device,
}

impl<'a> BufferAllocator<'a> {
    /// Create a new buffer allocator with the given device.
    pub fn new(device: &'a wgpu::Device) -> Self {
        Self { device }
    }

    /// Create a vertex buffer from raw byte data.
    pub fn create_vertex_buffer(&self, label: &str, data: &[u8]) -> wgpu::Buffer {
        self.device
            .create_buffer_init(&wgpu::util::BufferInitDescriptor {
                label: Some(label),
                contents: data,
                usage: wgpu::BufferUsages::VERTEX | wgpu::BufferUsages::COPY_DST,
            })
    }

    /// Create a u32 index buffer.
    pub fn create_index_buffer(&self, label: &str, data: &[u32]) -> wgpu::Buffer {
        self.device
            .create_buffer_init(&wgpu::util::BufferInitDescriptor {
                label: Some(label),
                contents: bytemuck::cast_slice(data),
                usage: wgpu::BufferUsages::INDEX | wgpu::BufferUsages::COPY_DST,
            })
    }

    /// Create a uniform buffer from any Pod value.
    pub fn create_uniform_buffer<T: bytemuck::Pod>(&self, label: &str, value: &T) -> wgpu::Buffer {
        self.device
            .create_buffer_init(&wgpu::util::BufferInitDescriptor {
                label: Some(label),
                contents: bytemuck::bytes_of(value),
                usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create_test_device() -> Option<wgpu::Device> {
        pollster::block_on(async {
            let instance = wgpu::Instance::new(&wgpu::InstanceDescriptor {
                backends: wgpu::Backends::all(),
                ..Default::default()
            });

            let adapter = instance
                .request_adapter(&wgpu::RequestAdapterOptions {
                    power_preference: wgpu::PowerPreference::default(),
                    compatible_surface: None,
                    force_fallback_adapter: false,
                })
                .await
                .ok()?;

            let (device, _queue) = adapter
                .request_device(&wgpu::DeviceDescriptor::default())
                .await
                .ok()?;

            Some(device)
        })
    }

    #[test]
    fn test_sphere_upload_counts_match_mesh() {
        let Some(device) = create_test_device() else {
            return;
        };
        let mesh = SphereMesh::new(1.0, 8, 4, true);
        let gpu = SphereGpu::upload(&device, &mesh, "test-sphere");

        assert_eq!(gpu.triangle_index_count, mesh.index_count());
        assert_eq!(gpu.line_index_count, mesh.line_index_count());
    }

    #[test]
    fn test_vertex_buffer_size_matches_interleaved_stream() {
        let Some(device) = create_test_device() else {
            return;
        };
        let mesh = SphereMesh::new(1.0, 6, 3, true);
        let gpu = SphereGpu::upload(&device, &mesh, "test-sphere");

        assert_eq!(gpu.vertex_buffer.size(), mesh.interleaved_byte_len());
    }

    #[test]
    fn test_uniform_buffer_from_pod_value() {
        let Some(device) = create_test_device() else {
            return;
        };
        let allocator = BufferAllocator::new(&device);
        let matrix = [[0.0f32; 4]; 4];
        let buffer = allocator.create_uniform_buffer("test-uniform", &matrix);
        assert_eq!(buffer.size(), 64);
    }
}
