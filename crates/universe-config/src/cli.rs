//! Command-line argument parsing.

use std::path::PathBuf;

use clap::Parser;

use crate::Config;

/// Animated starfield background for the terminal.
///
/// CLI values override settings loaded from `config.toml`.
#[derive(Parser, Debug, Default)]
#[command(name = "universe", version, about)]
pub struct CliArgs {
    /// Number of stars.
    #[arg(long)]
    pub stars: Option<usize>,

    /// Frames per second (1-240).
    #[arg(long)]
    pub fps: Option<u32>,

    /// Initial theme attribute value ("dark" selects the dark palette).
    #[arg(long)]
    pub theme: Option<String>,

    /// Fixed RNG seed for reproducible starfields.
    #[arg(long)]
    pub seed: Option<u64>,

    /// Log filter (error, warn, info, debug, trace).
    #[arg(long)]
    pub log_level: Option<String>,

    /// Path to config directory (overrides default location).
    #[arg(long)]
    pub config: Option<PathBuf>,
}

impl Config {
    /// Apply CLI overrides to a loaded config.
    pub fn apply_cli_overrides(&mut self, args: &CliArgs) {
        if let Some(stars) = args.stars {
            self.starfield.star_count = stars;
        }
        if let Some(fps) = args.fps {
            self.starfield.frames_per_second = fps;
        }
        if let Some(seed) = args.seed {
            self.starfield.seed = Some(seed);
        }
        if let Some(ref theme) = args.theme {
            self.appearance.theme = theme.clone();
        }
        if let Some(ref level) = args.log_level {
            self.logging.level = level.clone();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use universe_core::Theme;

    #[test]
    fn cli_override() {
        let mut config = Config::default();
        let args = CliArgs {
            stars: Some(500),
            theme: Some("light".to_string()),
            seed: Some(3),
            ..Default::default()
        };
        config.apply_cli_overrides(&args);
        assert_eq!(config.starfield.star_count, 500);
        assert_eq!(config.starfield.seed, Some(3));
        assert_eq!(config.appearance.theme(), Theme::Light);
        // Non-overridden fields retain defaults
        assert_eq!(config.starfield.frames_per_second, 60);
        assert_eq!(config.logging.level, "info");
    }

    #[test]
    fn cli_no_override() {
        let original = Config::default();
        let mut config = Config::default();
        config.apply_cli_overrides(&CliArgs::default());
        assert_eq!(config, original);
    }

    #[test]
    fn parses_flags() {
        let args = CliArgs::parse_from(["universe", "--fps", "30", "--log-level", "debug"]);
        assert_eq!(args.fps, Some(30));
        assert_eq!(args.log_level.as_deref(), Some("debug"));
        assert!(args.stars.is_none());
    }
}
