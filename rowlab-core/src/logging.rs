//! Tracing setup: daily-rolling log file, nothing on the terminal.
//!
//! The terminal belongs to the TUI, so all diagnostics go to a rolling file
//! under the platform data dir. `RUST_LOG` filters as usual.

use std::{fs, path::PathBuf};

use anyhow::{Context, Result};
use directories::ProjectDirs;
use tracing_appender::{non_blocking::WorkerGuard, rolling};
use tracing_subscriber::{
    EnvFilter, Layer, fmt, layer::SubscriberExt, util::SubscriberInitExt,
};

pub struct Logger;

impl Logger {
    /// Call **once** near the start of `main`. The returned guard flushes
    /// buffered log lines on drop and must outlive the event loop.
    pub fn init() -> Result<WorkerGuard> {
        let log_dir = Self::log_dir();
        fs::create_dir_all(&log_dir).context("cannot create log directory")?;

        // daily rolling file appender → rowlab.YYYY-MM-DD
        let file = rolling::daily(&log_dir, "rowlab");
        let (writer, guard) = tracing_appender::non_blocking(file);

        let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

        let file_layer = fmt::layer()
            .with_writer(writer)
            .with_ansi(false)
            .with_filter(filter);

        tracing_subscriber::registry().with(file_layer).init();

        Ok(guard)
    }

    /// Log directory under the platform data dir, `./logs` as fallback.
    fn log_dir() -> PathBuf {
        ProjectDirs::from("org", "rowlab", "rowlab")
            .map(|dirs| dirs.data_local_dir().join("logs"))
            .unwrap_or_else(|| PathBuf::from("logs"))
    }
}
