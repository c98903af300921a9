//! Logging setup for the `custclean` binary
//!
//! Console output is always on. File output is opt-in and writes two daily
//! rotated files under the platform data directory:
//!
//! - `custclean.<date>.log`: everything that passes the filter
//! - `error.<date>.log`: warnings and errors only
//!
//! The filter defaults to `info` and can be overridden with `RUST_LOG`
//! (e.g. `RUST_LOG=custclean=debug` to see per-step details).

use anyhow::{Context as _, Result};
use std::path::PathBuf;
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::{
    EnvFilter, Layer as _, fmt, layer::SubscriberExt as _, util::SubscriberInitExt as _,
};

/// Gets the log directory path based on platform conventions
///
/// Returns:
/// - Windows: `%APPDATA%/custclean/logs`
/// - macOS: `~/Library/Application Support/custclean/logs`
/// - Linux: `~/.local/share/custclean/logs`
///
/// # Errors
///
/// Returns error if the data directory is unknown or cannot be created
pub fn get_log_dir() -> Result<PathBuf> {
    let base_dir = dirs::data_dir().context("Failed to determine data directory")?;
    let log_dir = base_dir.join("custclean").join("logs");

    if !log_dir.exists() {
        std::fs::create_dir_all(&log_dir)
            .with_context(|| format!("Failed to create log directory: {}", log_dir.display()))?;
    }

    Ok(log_dir)
}

/// Initializes console logging, plus rotating log files when `to_file` is set
///
/// # Errors
///
/// Returns error if the log directory or file appenders cannot be created
pub fn init(to_file: bool) -> Result<()> {
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new("info"))
        .context("Failed to create env filter")?;

    let stdout_layer = fmt::layer()
        .with_target(false)
        .with_writer(std::io::stderr);

    let (all_logs_layer, error_logs_layer, log_dir) = if to_file {
        let log_dir = get_log_dir()?;

        let all_logs_appender = RollingFileAppender::builder()
            .rotation(Rotation::DAILY)
            .max_log_files(10)
            .filename_prefix("custclean")
            .filename_suffix("log")
            .build(&log_dir)
            .context("Failed to create all-logs file appender")?;

        let error_logs_appender = RollingFileAppender::builder()
            .rotation(Rotation::DAILY)
            .max_log_files(10)
            .filename_prefix("error")
            .filename_suffix("log")
            .build(&log_dir)
            .context("Failed to create error-logs file appender")?;

        let all_logs_layer = fmt::layer()
            .with_target(true)
            .with_line_number(true)
            .with_file(true)
            .with_ansi(false)
            .with_writer(all_logs_appender);

        let error_logs_layer = fmt::layer()
            .with_target(true)
            .with_line_number(true)
            .with_file(true)
            .with_ansi(false)
            .with_writer(error_logs_appender)
            .with_filter(EnvFilter::new("warn"));

        (Some(all_logs_layer), Some(error_logs_layer), Some(log_dir))
    } else {
        (None, None, None)
    };

    tracing_subscriber::registry()
        .with(env_filter)
        .with(stdout_layer)
        .with(all_logs_layer)
        .with(error_logs_layer)
        .try_init()
        .context("Failed to install tracing subscriber")?;

    if let Some(dir) = log_dir {
        tracing::debug!("Logging to {}", dir.display());
    }

    Ok(())
}
