//! Structured logging for the Helios viewer.
//!
//! Console logging via the `tracing` ecosystem: timestamps, module paths, and
//! severity levels, with environment-based filtering (respects `RUST_LOG`)
//! and a config-driven log level fallback. `wgpu` and `naga` are held at
//! `warn` so shader translation chatter does not drown the viewer's own logs.

use helios_config::Config;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Initialize the tracing subscriber.
///
/// Precedence for the filter: `RUST_LOG` environment variable, then the
/// config's `debug.log_level`, then the built-in default.
pub fn init_logging(config: Option<&Config>) {
    let filter_str = match config {
        Some(config) if !config.debug.log_level.is_empty() => {
            format!("{},wgpu=warn,naga=warn", config.debug.log_level)
        }
        _ => default_filter_string(),
    };

    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&filter_str));

    let console_layer = fmt::layer()
        .with_target(true)
        .with_level(true)
        .with_timer(fmt::time::uptime());

    tracing_subscriber::registry()
        .with(env_filter)
        .with(console_layer)
        .init();
}

/// The default filter string: `info` everywhere, GPU crates at `warn`.
#[must_use]
pub fn default_filter_string() -> String {
    "info,wgpu=warn,naga=warn".to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_filter_contains_gpu_overrides() {
        let filter = EnvFilter::new(default_filter_string());
        let filter_str = format!("{filter}");
        assert!(filter_str.contains("wgpu=warn"));
        assert!(filter_str.contains("naga=warn"));
        assert!(filter_str.contains("info"));
    }

    #[test]
    fn test_config_level_feeds_the_filter() {
        let mut config = Config::default();
        config.debug.log_level = "debug".to_string();
        let expected = format!("{},wgpu=warn,naga=warn", config.debug.log_level);
        let filter = EnvFilter::new(&expected);
        assert!(format!("{filter}").contains("debug"));
    }

    #[test]
    fn test_env_filter_parsing() {
        let valid_filters = [
            "info",
            "debug,helios_render=trace",
            "warn,helios_app=debug",
            "error",
        ];
        for filter_str in &valid_filters {
            assert!(
                EnvFilter::try_new(filter_str).is_ok(),
                "failed to parse filter: {filter_str}"
            );
        }
    }
}
