//! Command-line argument parsing for the Helios viewer.

use std::path::PathBuf;

use clap::Parser;
use helios_bodies::ScaleMode;

use crate::Config;

/// Helios command-line arguments.
///
/// CLI values override settings loaded from `config.ron`.
#[derive(Parser, Debug)]
#[command(name = "helios", about = "Animated 3-D solar-system viewer")]
pub struct CliArgs {
    /// Window width.
    #[arg(long)]
    pub width: Option<u32>,

    /// Window height.
    #[arg(long)]
    pub height: Option<u32>,

    /// Scene scale mode ("size" or "distance").
    #[arg(long)]
    pub scale_mode: Option<String>,

    /// Simulation time multiplier.
    #[arg(long)]
    pub time_multiplier: Option<f32>,

    /// Draw the wireframe overlay.
    #[arg(long)]
    pub wireframe: bool,

    /// Log level (error, warn, info, debug, trace).
    #[arg(long)]
    pub log_level: Option<String>,

    /// Path to config directory (overrides default location).
    #[arg(long)]
    pub config: Option<PathBuf>,
}

impl Config {
    /// Apply CLI overrides to a loaded config.
    pub fn apply_cli_overrides(&mut self, args: &CliArgs) {
        if let Some(w) = args.width {
            self.window.width = w;
        }
        if let Some(h) = args.height {
            self.window.height = h;
        }
        if let Some(ref name) = args.scale_mode {
            match ScaleMode::from_name(name) {
                Some(mode) => self.simulation.scale_mode = mode,
                None => log::warn!("unknown scale mode {name:?}, keeping config value"),
            }
        }
        if let Some(mult) = args.time_multiplier {
            self.simulation.time_multiplier = mult;
        }
        if args.wireframe {
            self.debug.wireframe = true;
        }
        if let Some(ref level) = args.log_level {
            self.debug.log_level = level.clone();
        }
    }
}
