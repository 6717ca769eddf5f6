//! Logging setup
//!
//! The terminal belongs to the UI, so log output goes to a file in the data
//! directory. `RUST_LOG` takes precedence over the configured level.

use crate::config::QuizConfig;
use crate::{QuizError, Result};
use std::fs::{self, OpenOptions};
use std::path::PathBuf;
use std::sync::Mutex;
use tracing_subscriber::EnvFilter;

/// Install the global subscriber, returning the log file path
pub fn init(config: &QuizConfig) -> Result<PathBuf> {
    let path = config.log_file_path()?;
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let file = OpenOptions::new().create(true).append(true).open(&path)?;

    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.log_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .try_init()
        .map_err(|e| QuizError::LoggingError(e.to_string()))?;

    Ok(path)
}
