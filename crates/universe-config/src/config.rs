//! Configuration structs with defaults and TOML persistence.

use std::path::{Path, PathBuf};
use std::time::Duration;

use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use universe_core::Theme;

use crate::error::ConfigError;

const CONFIG_FILE: &str = "config.toml";

/// Lowest and highest accepted frame rates.
const MIN_FPS: u32 = 1;
const MAX_FPS: u32 = 240;

/// Top-level configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct Config {
    /// Particle and frame loop settings.
    pub starfield: StarfieldConfig,
    /// Theme settings.
    pub appearance: AppearanceConfig,
    /// Log output settings.
    pub logging: LoggingConfig,
}

/// Particle and frame loop settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct StarfieldConfig {
    /// Number of stars seeded per surface.
    pub star_count: usize,
    /// Display refresh rate driving the frame loop.
    pub frames_per_second: u32,
    /// Fixed RNG seed. OS entropy is used when absent.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub seed: Option<u64>,
}

/// Theme settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct AppearanceConfig {
    /// Initial value of the `data-theme` attribute.
    pub theme: String,
}

/// Log output settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct LoggingConfig {
    /// Filter directive, e.g. "info" or "universe_starfield=debug".
    pub level: String,
    /// Write logs to a file in the data directory.
    pub file: bool,
}

impl Default for StarfieldConfig {
    fn default() -> Self {
        Self {
            star_count: 200,
            frames_per_second: 60,
            seed: None,
        }
    }
}

impl Default for AppearanceConfig {
    fn default() -> Self {
        Self {
            theme: Theme::Dark.as_attribute().to_string(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            file: true,
        }
    }
}

impl StarfieldConfig {
    /// Time between display ticks, with the frame rate clamped to a sane range.
    pub fn frame_interval(&self) -> Duration {
        let fps = self.frames_per_second.clamp(MIN_FPS, MAX_FPS);
        Duration::from_secs_f64(1.0 / fps as f64)
    }
}

impl AppearanceConfig {
    /// Theme selected by the configured attribute value.
    pub fn theme(&self) -> Theme {
        Theme::from_attribute(Some(&self.theme))
    }
}

fn project_dirs() -> Option<ProjectDirs> {
    ProjectDirs::from("", "", "universe")
}

/// Platform config directory, e.g. `~/.config/universe` on Linux.
pub fn default_config_dir() -> Result<PathBuf, ConfigError> {
    project_dirs()
        .map(|dirs| dirs.config_dir().to_path_buf())
        .ok_or(ConfigError::NoConfigDir)
}

/// Directory for the log file, e.g. `~/.local/share/universe` on Linux.
pub fn default_log_dir() -> Option<PathBuf> {
    project_dirs().map(|dirs| dirs.data_local_dir().to_path_buf())
}

impl Config {
    /// Load config from the given directory, or create a default config file.
    pub fn load_or_create(config_dir: &Path) -> Result<Self, ConfigError> {
        let path = config_dir.join(CONFIG_FILE);

        if path.exists() {
            let contents = std::fs::read_to_string(&path).map_err(ConfigError::Read)?;
            let config: Config = toml::from_str(&contents).map_err(ConfigError::Parse)?;
            tracing::info!(path = %path.display(), "loaded config");
            Ok(config)
        } else {
            let config = Config::default();
            config.save(config_dir)?;
            tracing::info!(path = %path.display(), "created default config");
            Ok(config)
        }
    }

    /// Save config to the given directory as `config.toml`.
    pub fn save(&self, config_dir: &Path) -> Result<(), ConfigError> {
        std::fs::create_dir_all(config_dir).map_err(ConfigError::Write)?;
        let serialized = toml::to_string_pretty(self).map_err(ConfigError::Serialize)?;
        std::fs::write(config_dir.join(CONFIG_FILE), serialized).map_err(ConfigError::Write)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let config = Config::default();
        assert_eq!(config.starfield.star_count, 200);
        assert_eq!(config.starfield.frames_per_second, 60);
        assert_eq!(config.starfield.seed, None);
        assert_eq!(config.appearance.theme(), Theme::Dark);
        assert_eq!(config.logging.level, "info");
    }

    #[test]
    fn partial_file_uses_defaults() {
        let config: Config = toml::from_str("[starfield]\nstar_count = 50\n").unwrap();
        assert_eq!(config.starfield.star_count, 50);
        assert_eq!(config.starfield.frames_per_second, 60);
        assert_eq!(config.appearance, AppearanceConfig::default());
        assert_eq!(config.logging, LoggingConfig::default());
    }

    #[test]
    fn unknown_fields_ignored() {
        let result: Result<Config, _> = toml::from_str("future_setting = true\n");
        assert!(result.is_ok());
    }

    #[test]
    fn unknown_theme_value_is_light() {
        let config: Config = toml::from_str("[appearance]\ntheme = \"solarized\"\n").unwrap();
        assert_eq!(config.appearance.theme(), Theme::Light);
    }

    #[test]
    fn invalid_toml_is_an_error() {
        let result: Result<Config, _> = toml::from_str("[starfield\n");
        assert!(result.is_err());
    }

    #[test]
    fn save_and_load() {
        let dir = tempfile::tempdir().unwrap();
        let mut config = Config::default();
        config.starfield.star_count = 64;
        config.starfield.seed = Some(99);
        config.appearance.theme = "light".to_string();

        config.save(dir.path()).unwrap();
        let loaded = Config::load_or_create(dir.path()).unwrap();
        assert_eq!(config, loaded);
    }

    #[test]
    fn load_creates_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let nested = dir.path().join("nested");
        let config = Config::load_or_create(&nested).unwrap();
        assert_eq!(config, Config::default());
        assert!(nested.join(CONFIG_FILE).exists());
    }

    #[test]
    fn load_reports_parse_errors() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join(CONFIG_FILE), "star_count = [").unwrap();
        let err = Config::load_or_create(dir.path()).unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn frame_interval_is_clamped() {
        let mut starfield = StarfieldConfig::default();
        assert_eq!(starfield.frame_interval(), Duration::from_secs_f64(1.0 / 60.0));

        starfield.frames_per_second = 0;
        assert_eq!(starfield.frame_interval(), Duration::from_secs(1));

        starfield.frames_per_second = 10_000;
        assert_eq!(starfield.frame_interval(), Duration::from_secs_f64(1.0 / 240.0));
    }
}
