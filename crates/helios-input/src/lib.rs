//! Input state tracking: keyboard fly-movement intent and mouse look/zoom.

pub mod keyboard;
pub mod mouse;

pub use keyboard::{KeyboardState, RawKeyEvent};
pub use mouse::MouseState;
