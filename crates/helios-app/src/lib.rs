//! Helios application: window lifecycle, frame timing, and scene assembly.

pub mod clock;
pub mod scene;
pub mod window;

pub use clock::FrameClock;
pub use scene::{BodyScene, Scene};
pub use window::{HeliosApp, run, window_attributes_from_config};
