//! Log setup.
//!
//! The terminal belongs to the UI, so logs always go to a daily-rolling
//! file through a non-blocking writer.

use std::fs;
use std::path::Path;

use color_eyre::eyre::WrapErr;
use tracing::info;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

const LOG_FILE_PREFIX: &str = "shadoll.log";

/// Install the global subscriber. `RUST_LOG` wins over `level`.
///
/// The returned guard flushes the writer when dropped and must be held
/// until the program exits.
pub fn init_logging(level: &str, json_format: bool, log_dir: &Path) -> color_eyre::Result<WorkerGuard> {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    fs::create_dir_all(log_dir)
        .wrap_err_with(|| format!("failed to create log directory {}", log_dir.display()))?;

    let file_appender = tracing_appender::rolling::daily(log_dir, LOG_FILE_PREFIX);
    let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

    let subscriber = tracing_subscriber::registry().with(env_filter);
    let result = if json_format {
        subscriber
            .with(fmt::layer().json().with_writer(non_blocking))
            .try_init()
    } else {
        subscriber
            .with(
                fmt::layer()
                    .with_target(true)
                    .with_thread_ids(true)
                    .with_line_number(true)
                    .with_ansi(false)
                    .with_writer(non_blocking),
            )
            .try_init()
    };
    result.wrap_err("failed to install log subscriber")?;

    info!(
        level,
        format = if json_format { "json" } else { "text" },
        dir = %log_dir.display(),
        "logging initialized"
    );
    Ok(guard)
}
