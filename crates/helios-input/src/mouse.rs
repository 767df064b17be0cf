//! Frame-coherent mouse state for camera look and zoom.
//!
//! [`MouseState`] accumulates winit mouse events and exposes drain-style
//! accessors: [`take_look_delta`](MouseState::take_look_delta) and
//! [`take_scroll`](MouseState::take_scroll) return the accumulated value and
//! reset it, so each frame consumes its input exactly once.
//!
//! Look input comes from raw device motion deltas (`DeviceEvent::MouseMotion`)
//! rather than cursor positions: with the cursor grabbed by the window there
//! is no meaningful position to track, and raw deltas keep working when a
//! locked cursor stops producing `CursorMoved` events.

use glam::Vec2;
use winit::event::MouseScrollDelta;

/// Frame-coherent mouse state.
#[derive(Debug, Clone, Default)]
pub struct MouseState {
    look_delta: Vec2,
    scroll: f32,
}

impl MouseState {
    /// Creates a new `MouseState` with nothing accumulated.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Process a raw `MouseMotion` device event.
    ///
    /// The delta's Y component is flipped so that moving the mouse up yields
    /// a positive pitch delta (device deltas grow downward).
    pub fn on_mouse_motion(&mut self, dx: f64, dy: f64) {
        self.look_delta.x += dx as f32;
        self.look_delta.y -= dy as f32;
    }

    /// Process a `MouseWheel` event.
    pub fn on_scroll(&mut self, delta: MouseScrollDelta) {
        match delta {
            MouseScrollDelta::LineDelta(_x, y) => {
                self.scroll += y;
            }
            MouseScrollDelta::PixelDelta(pos) => {
                // Normalize pixel delta: ~40 pixels ≈ 1 line
                self.scroll += (pos.y / 40.0) as f32;
            }
        }
    }

    /// Drains the accumulated look delta (positive Y = mouse moved up).
    pub fn take_look_delta(&mut self) -> Vec2 {
        std::mem::take(&mut self.look_delta)
    }

    /// Drains the accumulated scroll delta (positive = scroll up).
    pub fn take_scroll(&mut self) -> f32 {
        std::mem::take(&mut self.scroll)
    }
}
