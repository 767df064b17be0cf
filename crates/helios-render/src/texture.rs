//! GPU texture loading for planet surface maps.
//!
//! [`TextureManager`] loads image files from disk, uploads them as sRGB
//! textures, and hands out [`Arc<ManagedTexture>`] with a ready-to-bind
//! [`wgpu::BindGroup`]. A missing or unreadable file yields a 1x1 white
//! placeholder so the scene still renders with every body visible.

use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use thiserror::Error;

/// Failure to read or decode a texture image file.
#[derive(Debug, Error)]
pub enum TextureError {
    #[error("failed to decode texture image {path}: {source}")]
    Decode {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },
}

/// Reads and decodes an image file into RGBA8 pixels.
fn decode_rgba(path: &Path) -> Result<image::RgbaImage, TextureError> {
    let img = image::open(path).map_err(|source| TextureError::Decode {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(img.to_rgba8())
}

/// A GPU texture with its view, bind group, and metadata.
pub struct ManagedTexture {
    /// The underlying GPU texture.
    pub texture: wgpu::Texture,
    /// Default view into the texture.
    pub view: wgpu::TextureView,
    /// Pre-built bind group for immediate use in draw calls.
    pub bind_group: wgpu::BindGroup,
    /// Width and height in texels.
    pub dimensions: (u32, u32),
    /// Whether this texture is the placeholder for a failed load.
    pub is_placeholder: bool,
}

/// Texture loader and cache keyed by name.
pub struct TextureManager {
    textures: HashMap<String, Arc<ManagedTexture>>,
    sampler: wgpu::Sampler,
    bind_group_layout: wgpu::BindGroupLayout,
}

impl TextureManager {
    /// Create a new texture manager with a shared sampler and layout.
    pub fn new(device: &wgpu::Device) -> Self {
        let sampler = device.create_sampler(&wgpu::SamplerDescriptor {
            label: Some("texture-sampler-linear"),
            address_mode_u: wgpu::AddressMode::Repeat,
            address_mode_v: wgpu::AddressMode::Repeat,
            mag_filter: wgpu::FilterMode::Linear,
            min_filter: wgpu::FilterMode::Linear,
            mipmap_filter: wgpu::MipmapFilterMode::Linear,
            ..Default::default()
        });

        let bind_group_layout = device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
            label: Some("texture-bind-group-layout"),
            entries: &[
                wgpu::BindGroupLayoutEntry {
                    binding: 0,
                    visibility: wgpu::ShaderStages::FRAGMENT,
                    ty: wgpu::BindingType::Texture {
                        sample_type: wgpu::TextureSampleType::Float { filterable: true },
                        view_dimension: wgpu::TextureViewDimension::D2,
                        multisampled: false,
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

        Self {
            textures: HashMap::new(),
            sampler,
            bind_group_layout,
        }
    }

    /// Load an image file as an sRGB texture, falling back to a placeholder.
    ///
    /// The cache key is `name`; a second call with the same name returns the
    /// cached texture without touching the filesystem.
    pub fn load_file(
        &mut self,
        device: &wgpu::Device,
        queue: &wgpu::Queue,
        name: &str,
        path: &Path,
    ) -> Arc<ManagedTexture> {
        if let Some(existing) = self.textures.get(name) {
            return Arc::clone(existing);
        }

        let managed = match decode_rgba(path) {
            Ok(rgba) => {
                let (width, height) = rgba.dimensions();
                log::info!("Loaded texture '{name}' ({width}x{height}) from {}", path.display());
                self.create_rgba_texture(device, queue, name, &rgba, width, height, false)
            }
            Err(err) => {
                log::warn!("{err}; using placeholder for '{name}'");
                self.create_rgba_texture(device, queue, name, &[255, 255, 255, 255], 1, 1, true)
            }
        };

        self.textures.insert(name.to_string(), Arc::clone(&managed));
        managed
    }

    /// Get a previously loaded texture by name.
    pub fn get(&self, name: &str) -> Option<Arc<ManagedTexture>> {
        self.textures.get(name).cloned()
    }

    /// The shared bind group layout for texture + sampler pairs.
    pub fn bind_group_layout(&self) -> &wgpu::BindGroupLayout {
        &self.bind_group_layout
    }

    fn create_rgba_texture(
        &self,
        device: &wgpu::Device,
        queue: &wgpu::Queue,
        name: &str,
        data: &[u8],
        width: u32,
        height: u32,
        is_placeholder: bool,
    ) -> Arc<ManagedTexture> {
        let texture = device.create_texture(&wgpu::TextureDescriptor {
            label: Some(name),
            size: wgpu::Extent3d {
                width,
                height,
                depth_or_array_layers: 1,
            },
            mip_level_count: 1,
            sample_count: 1,
            dimension: wgpu::TextureDimension::D2,
            format: wgpu::TextureFormat::Rgba8UnormSrgb,
            usage: wgpu::TextureUsages::TEXTURE_BINDING | wgpu::TextureUsages::COPY_DST,
            view_formats: &[],
        });

        queue.write_texture(
            wgpu::TexelCopyTextureInfo {
                texture: &texture,
                mip_level: 0,
                origin: wgpu::Origin3d::ZERO,
                aspect: wgpu::TextureAspect::All,
            },
            data,
            wgpu::TexelCopyBufferLayout {
                offset: 0,
                bytes_per_row: Some(width * 4),
                rows_per_image: None,
            },
            wgpu::Extent3d {
                width,
                height,
                depth_or_array_layers: 1,
            },
        );

        let view = texture.create_view(&wgpu::TextureViewDescriptor::default());

        let bind_group = device.create_bind_group(&wgpu::BindGroupDescriptor {
            label: Some(&format!("{name}-bind-group")),
            layout: &self.bind_group_layout,
            entries: &[
                wgpu::BindGroupEntry {
                    binding: 0,
                    resource: wgpu::BindingResource::TextureView(&view),
                },
                wgpu::BindGroupEntry {
                    binding: 1,
                    resource: wgpu::BindingResource::Sampler(&self.sampler),
                },
            ],
        });

        Arc::new(ManagedTexture {
            texture,
            view,
            bind_group,
            dimensions: (width, height),
            is_placeholder,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create_test_device_queue() -> Option<(wgpu::Device, wgpu::Queue)> {
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

            adapter
                .request_device(&wgpu::DeviceDescriptor::default())
                .await
                .ok()
        })
    }

    #[test]
    fn test_decode_error_names_the_path() {
        let err = decode_rgba(Path::new("does/not/exist.jpg")).unwrap_err();
        let msg = err.to_string();
        assert!(msg.contains("does/not/exist.jpg"), "message was: {msg}");
    }

    #[test]
    fn test_missing_file_yields_placeholder() {
        let Some((device, queue)) = create_test_device_queue() else {
            return;
        };
        let mut manager = TextureManager::new(&device);

        let tex = manager.load_file(
            &device,
            &queue,
            "missing",
            Path::new("does/not/exist.jpg"),
        );
        assert!(tex.is_placeholder);
        assert_eq!(tex.dimensions, (1, 1));
    }

    #[test]
    fn test_cache_returns_same_texture() {
        let Some((device, queue)) = create_test_device_queue() else {
            return;
        };
        let mut manager = TextureManager::new(&device);

        let tex1 = manager.load_file(&device, &queue, "earth", Path::new("nope.jpg"));
        let tex2 = manager.load_file(&device, &queue, "earth", Path::new("other.jpg"));
        assert!(Arc::ptr_eq(&tex1, &tex2));
    }

    #[test]
    fn test_get_after_load() {
        let Some((device, queue)) = create_test_device_queue() else {
            return;
        };
        let mut manager = TextureManager::new(&device);

        assert!(manager.get("mars").is_none());
        manager.load_file(&device, &queue, "mars", Path::new("nope.jpg"));
        assert!(manager.get("mars").is_some());
    }
}
