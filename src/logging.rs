//! File logging for terminal hosts.
//!
//! Stdout belongs to the terminal UI, so events go to a non-blocking file
//! writer. `RUST_LOG` wins over the configured level.

use crate::config::LoggingConfig;
use chrono::Local;
use color_eyre::Result;
use std::fs;
use std::path::{Path, PathBuf};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

/// Installs the global subscriber; keep the guard alive until exit so buffered
/// lines are flushed
pub fn init(config: &LoggingConfig, log_dir: &Path) -> Result<(WorkerGuard, PathBuf)> {
    fs::create_dir_all(log_dir)?;
    let log_filename = log_file_name(Local::now());

    let file_appender = tracing_appender::rolling::never(log_dir, &log_filename);
    let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&config.level))
        .unwrap_or_else(|_| EnvFilter::new("info"));

    let file_layer = fmt::Layer::default()
        .with_target(false)
        .with_ansi(false)
        .with_writer(non_blocking);

    tracing_subscriber::registry()
        .with(filter)
        .with(file_layer)
        .try_init()?;

    Ok((guard, log_dir.join(log_filename)))
}

fn log_file_name(now: chrono::DateTime<Local>) -> String {
    format!("floatfield-{}.log", now.format("%Y-%m-%d_%H-%M-%S"))
}
