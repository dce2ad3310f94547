//! Structured logging for the showcase.
//!
//! The terminal UI owns stdout, so events go to a log file instead.
//! `RUST_LOG` takes precedence over the configured level.

use std::fs::{self, File, OpenOptions};
use std::path::Path;
use std::sync::Mutex;

use anyhow::{Context, Result, anyhow};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

/// Level used when neither `RUST_LOG` nor the configuration names one.
pub const DEFAULT_LEVEL: &str = "info";

/// Install the global subscriber, appending to `file`.
pub fn initialize(level: &str, file: &Path) -> Result<()> {
    let writer = open_log_file(file)?;
    let filter = build_filter(level)?;

    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_ansi(false)
                .with_target(true)
                .with_writer(Mutex::new(writer)),
        )
        .try_init()
        .map_err(|err| anyhow!("failed to install log subscriber: {err}"))
}

fn open_log_file(path: &Path) -> Result<File> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        fs::create_dir_all(parent)
            .with_context(|| format!("failed to create log directory {}", parent.display()))?;
    }
    OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .with_context(|| format!("failed to open log file {}", path.display()))
}

fn build_filter(level: &str) -> Result<EnvFilter> {
    match EnvFilter::try_from_default_env() {
        Ok(filter) => Ok(filter),
        Err(_) => EnvFilter::try_new(level)
            .with_context(|| format!("invalid log level '{level}'")),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn creates_missing_log_directories() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("reel.log");

        open_log_file(&path).unwrap();
        assert!(path.exists());
    }

    #[test]
    fn configured_level_builds_a_filter() {
        assert!(build_filter(DEFAULT_LEVEL).is_ok());
        assert!(build_filter("reel_core=debug,info").is_ok());
    }
}
