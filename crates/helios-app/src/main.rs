//! The binary entry point for the Helios solar-system viewer.

use std::path::PathBuf;

use clap::Parser;
use helios_config::{CliArgs, Config};
use tracing::{error, info, warn};

fn main() {
    let args = CliArgs::parse();

    let config_dir = args.config.clone().unwrap_or_else(|| PathBuf::from("."));
    let mut config = match Config::load_or_create(&config_dir) {
        Ok(config) => config,
        Err(err) => {
            eprintln!("Failed to load config from {}: {err}", config_dir.display());
            Config::default()
        }
    };
    config.apply_cli_overrides(&args);

    helios_log::init_logging(Some(&config));

    info!(
        "Starting Helios: {}x{}, scale mode {:?}, time x{}",
        config.window.width,
        config.window.height,
        config.simulation.scale_mode,
        config.simulation.time_multiplier
    );

    let texture_dir = PathBuf::from("textures");
    if !texture_dir.is_dir() {
        warn!(
            "Texture directory {} not found; bodies will render with placeholders",
            texture_dir.display()
        );
    }

    if let Err(err) = helios_app::run(config, texture_dir) {
        error!("Event loop error: {err}");
        std::process::exit(1);
    }
}
