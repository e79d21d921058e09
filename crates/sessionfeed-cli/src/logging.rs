use crate::types::LogLevel;
use anyhow::{Context, Result};
use std::fs::OpenOptions;
use std::path::Path;
use std::sync::Mutex;
use tracing_subscriber::EnvFilter;

/// Where log lines may go when no log file is given
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogTarget {
    Stderr,
    /// The terminal is owned by the TUI; only a log file is allowed
    FileOnly,
}

/// `RUST_LOG` wins over `--log-level`.
pub fn init(level: LogLevel, log_file: Option<&Path>, target: LogTarget) -> Result<()> {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level.to_string()));

    let result = match (log_file, target) {
        (Some(path), _) => {
            let file = OpenOptions::new()
                .create(true)
                .append(true)
                .open(path)
                .with_context(|| format!("Failed to open log file {}", path.display()))?;
            tracing_subscriber::fmt()
                .with_env_filter(filter)
                .with_ansi(false)
                .with_writer(Mutex::new(file))
                .try_init()
        }
        (None, LogTarget::Stderr) => tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .try_init(),
        (None, LogTarget::FileOnly) => return Ok(()),
    };

    result.map_err(|e| anyhow::anyhow!("Failed to initialize logging: {}", e))
}
