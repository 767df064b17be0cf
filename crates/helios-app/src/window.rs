//! Window creation and event handling via winit.
//!
//! [`HeliosApp`] implements winit's [`ApplicationHandler`]: it creates the
//! window and GPU context on resume, feeds events to the input trackers, and
//! drives the per-frame update/render cycle from `RedrawRequested`.

use std::path::PathBuf;
use std::sync::Arc;

use helios_config::Config;
use helios_input::{KeyboardState, MouseState};
use helios_render::{DepthBuffer, FlyCamera, RenderContext, init_render_context_blocking};
use tracing::{error, info, warn};
use winit::application::ApplicationHandler;
use winit::error::EventLoopError;
use winit::event::{DeviceEvent, DeviceId, WindowEvent};
use winit::event_loop::{ActiveEventLoop, EventLoop};
use winit::keyboard::KeyCode;
use winit::window::{CursorGrabMode, Window, WindowAttributes, WindowId};

use crate::clock::FrameClock;
use crate::scene::Scene;

/// Grab modes in preference order: a locked cursor where the platform
/// supports it, otherwise confined to the window.
const CURSOR_GRAB_MODES: [CursorGrabMode; 2] = [CursorGrabMode::Locked, CursorGrabMode::Confined];

/// Captures the cursor for mouse-look, so the pointer cannot wander out of
/// the window mid-drag.
fn grab_cursor(window: &Window) {
    for mode in CURSOR_GRAB_MODES {
        if window.set_cursor_grab(mode).is_ok() {
            window.set_cursor_visible(false);
            info!("Cursor grabbed ({mode:?})");
            return;
        }
    }
    warn!("Cursor grab unsupported on this platform; mouse look still works via raw motion");
}

/// Returns [`WindowAttributes`] based on the given configuration.
pub fn window_attributes_from_config(config: &Config) -> WindowAttributes {
    WindowAttributes::default()
        .with_title(config.window.title.clone())
        .with_inner_size(winit::dpi::LogicalSize::new(
            config.window.width as f64,
            config.window.height as f64,
        ))
}

/// Application state: window, GPU, scene, camera, input, and timing.
pub struct HeliosApp {
    config: Config,
    texture_dir: PathBuf,
    window: Option<Arc<Window>>,
    gpu: Option<RenderContext>,
    scene: Option<Scene>,
    depth_buffer: Option<DepthBuffer>,
    camera: FlyCamera,
    keyboard: KeyboardState,
    mouse: MouseState,
    clock: FrameClock,
    wireframe: bool,
}

impl HeliosApp {
    /// Create the app from a loaded config. GPU resources are created lazily
    /// on the first `resumed` call.
    #[must_use]
    pub fn new(config: Config, texture_dir: PathBuf) -> Self {
        let mut camera = FlyCamera::new(
            config.simulation.scale_mode.camera_start(),
            config.camera.fov_degrees,
            config.camera.speed,
            config.camera.mouse_sensitivity,
        );
        camera.set_invert_y(config.camera.invert_y);
        camera.set_aspect_ratio(config.window.width, config.window.height);

        let clock = FrameClock::new(config.simulation.time_multiplier as f64);
        let wireframe = config.debug.wireframe;

        Self {
            config,
            texture_dir,
            window: None,
            gpu: None,
            scene: None,
            depth_buffer: None,
            camera,
            keyboard: KeyboardState::new(),
            mouse: MouseState::new(),
            clock,
            wireframe,
        }
    }

    fn clear_color(&self) -> wgpu::Color {
        if self.config.simulation.black_background {
            wgpu::Color::BLACK
        } else {
            wgpu::Color {
                r: 0.3,
                g: 0.3,
                b: 0.3,
                a: 1.0,
            }
        }
    }

    fn handle_resize(&mut self, width: u32, height: u32) {
        self.camera.set_aspect_ratio(width, height);
        if let Some(gpu) = &mut self.gpu {
            gpu.resize(width, height);
        }
        if let (Some(depth_buffer), Some(gpu)) = (&mut self.depth_buffer, &self.gpu) {
            depth_buffer.resize(&gpu.device, width.max(1), height.max(1));
        }
        info!("Window resized to {width}x{height}");
    }

    /// Run one frame: consume input, advance the simulation, draw the scene.
    fn update_and_render(&mut self, event_loop: &ActiveEventLoop) {
        let dt = self.clock.tick() as f32;

        if self.keyboard.just_pressed(KeyCode::F1) {
            self.wireframe = !self.wireframe;
            info!("Wireframe overlay {}", if self.wireframe { "on" } else { "off" });
        }

        self.camera.apply_movement(self.keyboard.movement_intent(), dt);
        self.camera.apply_look(self.mouse.take_look_delta());
        self.camera.apply_zoom(self.mouse.take_scroll());
        self.keyboard.clear_transients();

        let (Some(gpu), Some(scene), Some(depth_buffer)) =
            (&self.gpu, &self.scene, &self.depth_buffer)
        else {
            return;
        };

        scene.update(&gpu.queue, self.clock.sim_time(), &self.camera);

        let surface_texture = match gpu.get_current_texture() {
            Ok(texture) => texture,
            Err(helios_render::SurfaceError::Timeout) => return,
            Err(err) => {
                error!("Failed to acquire surface: {err}");
                event_loop.exit();
                return;
            }
        };
        let view = surface_texture
            .texture
            .create_view(&wgpu::TextureViewDescriptor::default());

        let mut encoder = gpu
            .device
            .create_command_encoder(&wgpu::CommandEncoderDescriptor {
                label: Some("frame-encoder"),
            });

        {
            let mut render_pass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
                label: Some("scene-pass"),
                color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                    view: &view,
                    resolve_target: None,
                    ops: wgpu::Operations {
                        load: wgpu::LoadOp::Clear(self.clear_color()),
                        store: wgpu::StoreOp::Store,
                    },
                    depth_slice: None,
                })],
                depth_stencil_attachment: Some(wgpu::RenderPassDepthStencilAttachment {
                    view: &depth_buffer.view,
                    depth_ops: Some(wgpu::Operations {
                        load: wgpu::LoadOp::Clear(DepthBuffer::CLEAR_VALUE),
                        store: wgpu::StoreOp::Store,
                    }),
                    stencil_ops: None,
                }),
                ..Default::default()
            });

            scene.render(&mut render_pass, self.wireframe);
        }

        gpu.queue.submit(std::iter::once(encoder.finish()));
        surface_texture.present();
    }
}

impl ApplicationHandler for HeliosApp {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_some() {
            return;
        }

        let attrs = window_attributes_from_config(&self.config);
        let window = match event_loop.create_window(attrs) {
            Ok(window) => Arc::new(window),
            Err(err) => {
                error!("Failed to create window: {err}");
                event_loop.exit();
                return;
            }
        };
        grab_cursor(&window);

        match init_render_context_blocking(window.clone(), self.config.window.vsync) {
            Ok(gpu) => {
                let size = window.inner_size();
                self.camera.set_aspect_ratio(size.width, size.height);
                self.depth_buffer = Some(DepthBuffer::new(
                    &gpu.device,
                    size.width.max(1),
                    size.height.max(1),
                ));
                self.scene = Some(Scene::new(&gpu, &self.config, &self.texture_dir));
                self.gpu = Some(gpu);
            }
            Err(err) => {
                error!("GPU initialization failed: {err}");
                event_loop.exit();
                return;
            }
        }

        self.window = Some(window);
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        _window_id: WindowId,
        event: WindowEvent,
    ) {
        match event {
            WindowEvent::CloseRequested => {
                info!("Close requested, shutting down");
                event_loop.exit();
            }
            WindowEvent::Resized(new_size) => {
                self.handle_resize(new_size.width, new_size.height);
            }
            WindowEvent::KeyboardInput { event, .. } => {
                self.keyboard.process_event(&event);
                if self.keyboard.just_pressed(KeyCode::Escape) {
                    info!("Escape pressed, shutting down");
                    event_loop.exit();
                }
            }
            WindowEvent::MouseWheel { delta, .. } => {
                self.mouse.on_scroll(delta);
            }
            WindowEvent::RedrawRequested => {
                self.update_and_render(event_loop);
            }
            _ => {}
        }
    }

    fn device_event(
        &mut self,
        _event_loop: &ActiveEventLoop,
        _device_id: DeviceId,
        event: DeviceEvent,
    ) {
        // Raw motion keeps arriving while the cursor is grabbed.
        if let DeviceEvent::MouseMotion { delta: (dx, dy) } = event {
            self.mouse.on_mouse_motion(dx, dy);
        }
    }

    fn about_to_wait(&mut self, _event_loop: &ActiveEventLoop) {
        // Continuous animation: keep the redraw loop spinning.
        if let Some(window) = &self.window {
            window.request_redraw();
        }
    }
}

/// Create the event loop and run the viewer until exit.
pub fn run(config: Config, texture_dir: PathBuf) -> Result<(), EventLoopError> {
    let event_loop = EventLoop::new()?;
    let mut app = HeliosApp::new(config, texture_dir);
    event_loop.run_app(&mut app)
}
