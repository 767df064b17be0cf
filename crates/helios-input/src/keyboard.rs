//! Frame-coherent keyboard state for the fly camera.
//!
//! [`KeyboardState`] accumulates winit [`KeyEvent`]s and answers whether a
//! physical key is held or was just pressed this frame. Physical key codes are
//! used so WASD movement works identically regardless of keyboard layout.
//!
//! [`movement_intent`](KeyboardState::movement_intent) collapses the held
//! movement keys into a per-axis intent the camera consumes directly.

use std::collections::HashSet;

use glam::Vec3;
use winit::event::{ElementState, KeyEvent};
use winit::keyboard::{KeyCode, PhysicalKey};

/// Minimal description of a key event for processing.
#[derive(Debug, Clone, Copy)]
pub struct RawKeyEvent {
    /// The physical key involved.
    pub key: PhysicalKey,
    /// Whether the key was pressed or released.
    pub state: ElementState,
    /// Whether this is a repeat event.
    pub repeat: bool,
}

/// Tracks held and just-pressed keys using physical (scan-code) codes.
///
/// Forward every [`KeyEvent`] to [`process_event`](Self::process_event), query
/// with the accessors, and call [`clear_transients`](Self::clear_transients)
/// at the end of each frame.
#[derive(Debug, Clone, Default)]
pub struct KeyboardState {
    pressed: HashSet<PhysicalKey>,
    just_pressed: HashSet<PhysicalKey>,
}

impl KeyboardState {
    /// Creates a new `KeyboardState` with no keys pressed.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Processes a winit [`KeyEvent`], updating internal state.
    pub fn process_event(&mut self, event: &KeyEvent) {
        self.process_raw(RawKeyEvent {
            key: event.physical_key,
            state: event.state,
            repeat: event.repeat,
        });
    }

    /// Processes a [`RawKeyEvent`] (platform-independent, test-friendly).
    ///
    /// Repeat events are ignored so held keys register exactly once in
    /// `just_pressed`.
    pub fn process_raw(&mut self, event: RawKeyEvent) {
        if event.repeat {
            return;
        }
        match event.state {
            ElementState::Pressed => {
                self.pressed.insert(event.key);
                self.just_pressed.insert(event.key);
            }
            ElementState::Released => {
                self.pressed.remove(&event.key);
            }
        }
    }

    /// Returns `true` while the key is held down.
    #[must_use]
    pub fn is_pressed(&self, code: KeyCode) -> bool {
        self.pressed.contains(&PhysicalKey::Code(code))
    }

    /// Returns `true` only during the frame the key transitioned to pressed.
    #[must_use]
    pub fn just_pressed(&self, code: KeyCode) -> bool {
        self.just_pressed.contains(&PhysicalKey::Code(code))
    }

    /// Clears the `just_pressed` set. Call at end of frame.
    pub fn clear_transients(&mut self) {
        self.just_pressed.clear();
    }

    /// Collapses the held movement keys into a local-space intent vector.
    ///
    /// `x` is strafe (D positive), `y` is vertical (ArrowUp positive), and
    /// `z` is forward (W positive). Opposing keys cancel. The vector is not
    /// normalized; the camera scales each axis by speed and frame time.
    #[must_use]
    pub fn movement_intent(&self) -> Vec3 {
        let axis = |pos: KeyCode, neg: KeyCode| {
            let mut v = 0.0;
            if self.is_pressed(pos) {
                v += 1.0;
            }
            if self.is_pressed(neg) {
                v -= 1.0;
            }
            v
        };
        Vec3::new(
            axis(KeyCode::KeyD, KeyCode::KeyA),
            axis(KeyCode::ArrowUp, KeyCode::ArrowDown),
            axis(KeyCode::KeyW, KeyCode::KeyS),
        )
    }
}
