//! Free-fly camera with yaw/pitch mouse look and scroll zoom.

use bytemuck::{Pod, Zeroable};
use glam::{Mat4, Vec2, Vec3};

/// Minimum field of view in degrees (maximum zoom-in).
pub const MIN_FOV_DEGREES: f32 = 1.0;

/// Pitch is clamped short of the poles so the view never flips.
pub const MAX_PITCH_DEGREES: f32 = 89.0;

/// Uniform buffer for the camera: view-projection matrix plus the camera's
/// world position (for specular highlights).
#[repr(C)]
#[derive(Clone, Copy, Debug, Pod, Zeroable)]
pub struct CameraUniform {
    pub view_proj: [[f32; 4]; 4], // 64 bytes, mat4x4
    pub camera_pos: [f32; 4],     // 16 bytes, vec3 + pad
}

/// A free-fly camera driven by keyboard movement intent and mouse deltas.
///
/// Yaw and pitch are stored in degrees. Yaw of -90 looks down the negative Z
/// axis toward the scene. Scrolling narrows the field of view between
/// [`MIN_FOV_DEGREES`] and `max_fov_degrees`, which zooms without moving.
#[derive(Debug, Clone)]
pub struct FlyCamera {
    pub position: Vec3,
    yaw_degrees: f32,
    pitch_degrees: f32,
    fov_degrees: f32,
    max_fov_degrees: f32,
    speed: f32,
    sensitivity: f32,
    invert_y: bool,
    aspect_ratio: f32,
    near: f32,
    far: f32,
}

impl FlyCamera {
    /// Create a camera at `position`, looking down negative Z.
    #[must_use]
    pub fn new(position: Vec3, fov_degrees: f32, speed: f32, sensitivity: f32) -> Self {
        Self {
            position,
            yaw_degrees: -90.0,
            pitch_degrees: 0.0,
            fov_degrees,
            max_fov_degrees: fov_degrees,
            speed,
            sensitivity,
            invert_y: false,
            aspect_ratio: 4.0 / 3.0,
            near: 0.1,
            far: 10000.0,
        }
    }

    /// Invert the vertical mouse-look axis.
    pub fn set_invert_y(&mut self, invert: bool) {
        self.invert_y = invert;
    }

    /// Update the aspect ratio after a window resize.
    pub fn set_aspect_ratio(&mut self, width: u32, height: u32) {
        self.aspect_ratio = width.max(1) as f32 / height.max(1) as f32;
    }

    /// The normalized view direction derived from yaw and pitch.
    #[must_use]
    pub fn front(&self) -> Vec3 {
        let yaw = self.yaw_degrees.to_radians();
        let pitch = self.pitch_degrees.to_radians();
        Vec3::new(
            yaw.cos() * pitch.cos(),
            pitch.sin(),
            yaw.sin() * pitch.cos(),
        )
        .normalize()
    }

    /// The camera's right vector in world space.
    #[must_use]
    pub fn right(&self) -> Vec3 {
        self.front().cross(Vec3::Y).normalize()
    }

    /// Apply a movement intent for one frame.
    ///
    /// `intent` is local: x strafe, y vertical along world up, z forward
    /// along the view direction. Each axis is scaled by speed and `dt`.
    pub fn apply_movement(&mut self, intent: Vec3, dt: f32) {
        let step = self.speed * dt;
        self.position += self.front() * (intent.z * step);
        self.position += self.right() * (intent.x * step);
        self.position += Vec3::Y * (intent.y * step);
    }

    /// Apply a mouse-look delta (positive y = mouse moved up).
    pub fn apply_look(&mut self, delta: Vec2) {
        let pitch_sign = if self.invert_y { -1.0 } else { 1.0 };
        self.yaw_degrees += delta.x * self.sensitivity;
        self.pitch_degrees = (self.pitch_degrees + pitch_sign * delta.y * self.sensitivity)
            .clamp(-MAX_PITCH_DEGREES, MAX_PITCH_DEGREES);
    }

    /// Apply a scroll-wheel zoom delta (positive = zoom in).
    pub fn apply_zoom(&mut self, scroll: f32) {
        self.fov_degrees = (self.fov_degrees - scroll).clamp(MIN_FOV_DEGREES, self.max_fov_degrees);
    }

    /// Current vertical field of view in degrees.
    #[must_use]
    pub fn fov_degrees(&self) -> f32 {
        self.fov_degrees
    }

    /// Current pitch in degrees.
    #[must_use]
    pub fn pitch_degrees(&self) -> f32 {
        self.pitch_degrees
    }

    /// Current yaw in degrees.
    #[must_use]
    pub fn yaw_degrees(&self) -> f32 {
        self.yaw_degrees
    }

    /// Compute the view matrix.
    #[must_use]
    pub fn view_matrix(&self) -> Mat4 {
        Mat4::look_to_rh(self.position, self.front(), Vec3::Y)
    }

    /// Compute the projection matrix with reverse-Z (near and far swapped).
    #[must_use]
    pub fn projection_matrix(&self) -> Mat4 {
        Mat4::perspective_rh(
            self.fov_degrees.to_radians(),
            self.aspect_ratio,
            self.far,
            self.near,
        )
    }

    /// Convert the camera to a uniform suitable for GPU upload.
    #[must_use]
    pub fn to_uniform(&self) -> CameraUniform {
        CameraUniform {
            view_proj: (self.projection_matrix() * self.view_matrix()).to_cols_array_2d(),
            camera_pos: [self.position.x, self.position.y, self.position.z, 0.0],
        }
    }
}
