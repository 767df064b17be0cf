//! Configuration system for the Helios viewer.
//!
//! Provides runtime-configurable settings that persist to disk as RON files,
//! with CLI overrides via clap and forward/backward compatible serialization.

mod cli;
mod config;
mod error;

pub use cli::CliArgs;
pub use config::{CameraConfig, Config, DebugConfig, SimulationConfig, WindowConfig};
pub use error::ConfigError;
