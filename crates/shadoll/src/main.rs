use std::io::stdout;

use clap::Parser;
use color_eyre::eyre::WrapErr;
use crossterm::{
    event::{DisableMouseCapture, EnableMouseCapture},
    execute,
};
use shadoll_config::{ConfigStore, DisplayConfig, Settings, StateFile, query};
use shadoll_tilt::PermissionSource;
use tracing::{info, warn};

mod app;
mod cli;
mod help;
mod host;
mod logging;
mod sensor;
mod toast;

use app::App;
use cli::Args;
use sensor::SensorFeed;

/// Colors needed for the gradients and the logo palette.
const MIN_COLORS: u16 = 256;

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;
    let args = Args::parse();

    let settings_path = match &args.config {
        Some(path) => path.clone(),
        None => Settings::default_path()?,
    };
    let settings = Settings::load(&settings_path)
        .wrap_err_with(|| format!("failed to load settings from {}", settings_path.display()))?;

    let log_dir = match &args.log_dir {
        Some(dir) => dir.clone(),
        None => settings.logging.resolved_directory()?,
    };
    let level = args.log_level.as_deref().unwrap_or(&settings.logging.level);
    let _guard = logging::init_logging(level, args.json_logs || settings.logging.json, &log_dir)?;
    info!(version = env!("CARGO_PKG_VERSION"), settings = %settings_path.display(), "starting shadoll");

    check_color_support();

    let state_file = match StateFile::default_location() {
        Ok(state) => Some(state),
        Err(e) => {
            warn!(error = %e, "cannot locate state directory, configuration will not be remembered");
            None
        }
    };
    let restored = if args.no_restore {
        None
    } else {
        state_file.as_ref().and_then(|state| match state.load() {
            Ok(saved) => saved,
            Err(e) => {
                warn!(error = %e, "failed to read saved configuration");
                None
            }
        })
    };

    let config = initial_config(args.query.as_deref(), restored.as_deref(), &settings.display);
    info!(query = %query::to_query(&config, &settings.display), "initial configuration");
    let store = ConfigStore::with_current(config, settings.display);

    let (sensor, permission) = match args.sensor {
        Some(path) => {
            let (feed, prompt) = SensorFeed::new(path);
            (Some(feed), PermissionSource::Supported(Box::new(prompt)))
        }
        None => (None, PermissionSource::Unsupported),
    };

    let terminal = ratatui::init();
    execute!(stdout(), EnableMouseCapture)?;
    let result = App::new(store, settings.tilt, permission, sensor, state_file).run(terminal);
    if let Err(e) = execute!(stdout(), DisableMouseCapture) {
        warn!(error = %e, "failed to disable mouse capture");
    }
    ratatui::restore();
    result
}

/// A query on the command line wins over the saved one; either is applied
/// on top of the `[display]` defaults.
fn initial_config(
    cli_query: Option<&str>,
    restored: Option<&str>,
    defaults: &DisplayConfig,
) -> DisplayConfig {
    match cli_query.or(restored) {
        Some(q) => query::parse(q, defaults),
        None => *defaults,
    }
}

/// Warn when the terminal cannot show the full palette. Never fatal.
fn check_color_support() {
    let colors = crossterm::style::available_color_count();
    if colors < MIN_COLORS {
        warn!(colors, "limited color support detected. Some features may not work correctly");
    }
}
