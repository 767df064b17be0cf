//! Configuration structs with sensible defaults and RON persistence.

use std::path::Path;

use helios_bodies::ScaleMode;
use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Top-level viewer configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct Config {
    /// Window settings.
    pub window: WindowConfig,
    /// Camera settings.
    pub camera: CameraConfig,
    /// Simulation settings.
    pub simulation: SimulationConfig,
    /// Debug/development settings.
    pub debug: DebugConfig,
}

/// Window configuration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct WindowConfig {
    /// Window width in logical pixels.
    pub width: u32,
    /// Window height in logical pixels.
    pub height: u32,
    /// Window title.
    pub title: String,
    /// Enable vsync (PresentMode::Fifo).
    pub vsync: bool,
}

/// Free-fly camera configuration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct CameraConfig {
    /// Movement speed in scene units per second.
    pub speed: f32,
    /// Mouse-look sensitivity (degrees per pixel of mouse motion).
    pub mouse_sensitivity: f32,
    /// Vertical field of view in degrees (also the scroll-zoom maximum).
    pub fov_degrees: f32,
    /// Invert the Y axis for mouse look.
    pub invert_y: bool,
}

/// Simulation / scene configuration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct SimulationConfig {
    /// Whether the scene favors size fidelity or distance fidelity.
    pub scale_mode: ScaleMode,
    /// Multiplier on simulation time (1.0 = real frame time).
    pub time_multiplier: f32,
    /// Longitude subdivisions per sphere.
    pub sector_count: u32,
    /// Latitude subdivisions per sphere.
    pub stack_count: u32,
    /// Clear to black instead of the default grey.
    pub black_background: bool,
}

/// Debug/development configuration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct DebugConfig {
    /// Draw the wireframe grid on top of the solid spheres.
    pub wireframe: bool,
    /// Log level override (e.g., "debug", "info", "warn").
    pub log_level: String,
}

// --- Default implementations ---

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            width: 800,
            height: 600,
            title: "Helios".to_string(),
            vsync: true,
        }
    }
}

impl Default for CameraConfig {
    fn default() -> Self {
        Self {
            speed: 2.5,
            mouse_sensitivity: 0.1,
            fov_degrees: 45.0,
            invert_y: false,
        }
    }
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            scale_mode: ScaleMode::Size,
            time_multiplier: 1.0,
            sector_count: 36,
            stack_count: 18,
            black_background: false,
        }
    }
}

impl Default for DebugConfig {
    fn default() -> Self {
        Self {
            wireframe: false,
            log_level: "info".to_string(),
        }
    }
}

// --- Load / Save ---

impl Config {
    /// Load config from the given directory, or create a default config file.
    pub fn load_or_create(config_dir: &Path) -> Result<Self, ConfigError> {
        let config_path = config_dir.join("config.ron");

        if config_path.exists() {
            let contents = std::fs::read_to_string(&config_path).map_err(ConfigError::ReadError)?;
            let config: Config = ron::from_str(&contents).map_err(ConfigError::ParseError)?;
            log::info!("Loaded config from {}", config_path.display());
            Ok(config)
        } else {
            let config = Config::default();
            config.save(config_dir)?;
            log::info!("Created default config at {}", config_path.display());
            Ok(config)
        }
    }

    /// Save config to the given directory as `config.ron`.
    pub fn save(&self, config_dir: &Path) -> Result<(), ConfigError> {
        std::fs::create_dir_all(config_dir).map_err(ConfigError::WriteError)?;

        let config_path = config_dir.join("config.ron");
        let pretty = ron::ser::PrettyConfig::new()
            .depth_limit(3)
            .separate_tuple_members(true);

        let serialized =
            ron::ser::to_string_pretty(self, pretty).map_err(ConfigError::SerializeError)?;

        std::fs::write(&config_path, serialized).map_err(ConfigError::WriteError)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_serializes() {
        let config = Config::default();
        let ron_str =
            ron::ser::to_string_pretty(&config, ron::ser::PrettyConfig::new().depth_limit(3))
                .unwrap();
        assert!(ron_str.contains("width: 800"));
        assert!(ron_str.contains("sector_count: 36"));
        assert!(ron_str.contains("scale_mode: size"));
    }

    #[test]
    fn test_config_roundtrip() {
        let config = Config::default();
        let ron_str = ron::to_string(&config).unwrap();
        let deserialized: Config = ron::from_str(&ron_str).unwrap();
        assert_eq!(config, deserialized);
    }

    #[test]
    fn test_missing_section_uses_default() {
        // Config missing the `camera` section entirely
        let ron_str = "(window: (), simulation: (), debug: ())";
        let config: Config = ron::from_str(ron_str).unwrap();
        assert_eq!(config.camera, CameraConfig::default());
    }

    #[test]
    fn test_scale_mode_parses_lowercase() {
        let ron_str = "(simulation: (scale_mode: distance))";
        let config: Config = ron::from_str(ron_str).unwrap();
        assert_eq!(config.simulation.scale_mode, ScaleMode::Distance);
    }

    #[test]
    fn test_save_and_load() {
        let dir = tempfile::tempdir().unwrap();
        let mut config = Config::default();
        config.window.width = 1280;
        config.simulation.time_multiplier = 4.0;
        config.debug.wireframe = true;

        config.save(dir.path()).unwrap();
        let loaded = Config::load_or_create(dir.path()).unwrap();
        assert_eq!(config, loaded);
    }

    #[test]
    fn test_load_or_create_writes_default_file() {
        let dir = tempfile::tempdir().unwrap();
        let config = Config::load_or_create(dir.path()).unwrap();
        assert_eq!(config, Config::default());
        assert!(dir.path().join("config.ron").exists());
    }

    #[test]
    fn test_invalid_ron_produces_error() {
        let result: Result<Config, _> = ron::from_str("{{not valid}}");
        assert!(result.is_err());
    }
}
