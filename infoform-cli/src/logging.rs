//! File logging; the terminal itself belongs to the form.

use std::path::PathBuf;

use color_eyre::eyre::{Result, WrapErr};
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

const LOG_ENV: &str = "INFOFORM_LOG";

/// Initialize the logging subsystem and return the directory logs go to.
///
/// Log level is controlled by the `INFOFORM_LOG` environment variable.
///
/// # Examples
/// ```bash
/// INFOFORM_LOG=debug infoform
/// ```
pub fn init(log_dir: Option<PathBuf>) -> Result<PathBuf> {
    let log_dir = log_dir.unwrap_or_else(default_log_directory);
    std::fs::create_dir_all(&log_dir)
        .wrap_err_with(|| format!("failed to create log directory {}", log_dir.display()))?;

    let file_appender = RollingFileAppender::builder()
        .rotation(Rotation::DAILY)
        .filename_prefix("infoform")
        .filename_suffix("log")
        .build(&log_dir)
        .wrap_err("failed to open log file")?;

    let env_filter =
        EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("infoform=info,warn"));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(
            fmt::layer()
                .with_writer(file_appender)
                .with_ansi(false)
                .with_target(true)
                .with_file(true)
                .with_line_number(true)
                .with_timer(fmt::time::ChronoLocal::new(
                    "%Y-%m-%d %H:%M:%S%.3f".to_string(),
                )),
        )
        .try_init()
        .wrap_err("failed to install log subscriber")?;

    tracing::info!("infoform starting");
    tracing::info!("Log directory: {}", log_dir.display());

    Ok(log_dir)
}

fn default_log_directory() -> PathBuf {
    let base = dirs::data_local_dir().unwrap_or_else(|| PathBuf::from("."));
    base.join("infoform").join("logs")
}
