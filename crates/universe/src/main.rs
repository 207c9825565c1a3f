use clap::Parser;
use universe_config::{CliArgs, Config, default_config_dir};

mod app;
mod logging;

use app::App;

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;

    let args = CliArgs::parse();
    let config_dir = match &args.config {
        Some(dir) => dir.clone(),
        None => default_config_dir()?,
    };
    let mut config = Config::load_or_create(&config_dir)?;
    config.apply_cli_overrides(&args);

    if let Some(path) = logging::init(&config.logging)? {
        tracing::info!(log = %path.display(), config = %config_dir.display(), "universe starting");
    }

    let terminal = ratatui::init();
    let result = App::new(config).run(terminal);
    ratatui::restore();
    result
}
