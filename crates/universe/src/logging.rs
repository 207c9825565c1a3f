//! Log file setup.
//!
//! The terminal belongs to the UI, so logs go to `universe.log` in the
//! platform data directory instead of stderr.

use std::fs::File;
use std::path::PathBuf;
use std::sync::Mutex;

use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};
use universe_config::{LoggingConfig, default_log_dir};

const LOG_FILE: &str = "universe.log";

/// Install the file logger. Returns the log path, or `None` when file
/// logging is disabled or no data directory exists.
pub fn init(config: &LoggingConfig) -> color_eyre::Result<Option<PathBuf>> {
    if !config.file {
        return Ok(None);
    }
    let Some(dir) = default_log_dir() else {
        return Ok(None);
    };
    std::fs::create_dir_all(&dir)?;
    let path = dir.join(LOG_FILE);
    let file = File::create(&path)?;

    let file_layer = fmt::layer()
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .with_target(true)
        .with_timer(fmt::time::uptime());

    tracing_subscriber::registry()
        .with(env_filter(&config.level))
        .with(file_layer)
        .try_init()?;

    Ok(Some(path))
}

/// `RUST_LOG` wins over the configured level.
fn env_filter(level: &str) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn disabled_file_logging_installs_nothing() {
        let config = LoggingConfig {
            level: "debug".to_string(),
            file: false,
        };
        assert!(init(&config).unwrap().is_none());
    }

    #[test]
    fn subsystem_filters_parse() {
        for directive in ["info", "debug,universe_starfield=trace", "warn"] {
            assert!(EnvFilter::try_new(directive).is_ok(), "{directive}");
        }
    }
}
