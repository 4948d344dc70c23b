//! File-backed tracing setup.
//!
//! The TUI owns stdout/stderr, so diagnostics go to
//! `<home>/logs/cyber-search.log` through a non-blocking appender.

use std::path::Path;

use anyhow::{Context, Result};
pub use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

use crate::config::{Config, paths};

/// Environment variable overriding the configured log filter.
pub const LOG_ENV: &str = "CYBER_SEARCH_LOG";

/// Log file name inside the logs directory.
pub const LOG_FILE: &str = "cyber-search.log";

/// Installs the global subscriber writing to the default logs directory.
///
/// Keep the returned guard alive for the program lifetime; dropping it
/// flushes and stops the background writer.
///
/// # Errors
/// Returns an error if the logs directory cannot be created or a global
/// subscriber is already installed.
pub fn init(config: &Config) -> Result<WorkerGuard> {
    init_in(&paths::logs_dir(), config)
}

/// Installs the global subscriber writing to `dir`.
///
/// # Errors
/// Returns an error if `dir` cannot be created or a global subscriber is
/// already installed.
pub fn init_in(dir: &Path, config: &Config) -> Result<WorkerGuard> {
    std::fs::create_dir_all(dir)
        .with_context(|| format!("Failed to create log directory {}", dir.display()))?;

    let appender = tracing_appender::rolling::never(dir, LOG_FILE);
    let (writer, guard) = tracing_appender::non_blocking(appender);

    tracing_subscriber::registry()
        .with(env_filter(config))
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(writer)
                .with_ansi(false),
        )
        .try_init()
        .context("Failed to install tracing subscriber")?;

    Ok(guard)
}

/// Builds the filter from `CYBER_SEARCH_LOG`, falling back to the config.
fn env_filter(config: &Config) -> EnvFilter {
    EnvFilter::try_from_env(LOG_ENV)
        .or_else(|_| EnvFilter::try_new(&config.log_level))
        .unwrap_or_else(|_| EnvFilter::new("info"))
}
