//! Configuration for the universe starfield.
//!
//! Settings persist as a TOML file in the platform config directory. Missing
//! sections and fields fall back to defaults, and command-line flags override
//! whatever the file says.

mod cli;
mod config;
mod error;

pub use cli::CliArgs;
pub use config::{
    AppearanceConfig, Config, LoggingConfig, StarfieldConfig, default_config_dir, default_log_dir,
};
pub use error::ConfigError;
