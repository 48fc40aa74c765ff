// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Tracing setup: human-readable output on stderr plus a daily rolling file
//! under `<state>/logs`.

use std::path::{Path, PathBuf};

use tracing_appender::non_blocking::WorkerGuard;
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::EnvFilter;

use crate::DaemonError;

/// Prefix of the rolling log files
const LOG_FILE_PREFIX: &str = "jwd.log";

pub fn log_dir(state_dir: &Path) -> PathBuf {
    state_dir.join("logs")
}

/// Build the filter from a directive string such as `info` or
/// `jw_daemon=debug,warn`.
pub fn env_filter(directives: &str) -> Result<EnvFilter, DaemonError> {
    EnvFilter::try_new(directives).map_err(|e| DaemonError::Logging(e.to_string()))
}

/// Install the global subscriber.
///
/// The returned guard flushes the file writer on drop and must live until
/// the process exits.
pub fn init(state_dir: &Path, directives: &str) -> Result<WorkerGuard, DaemonError> {
    let filter = env_filter(directives)?;
    let dir = log_dir(state_dir);
    std::fs::create_dir_all(&dir)?;

    let appender = RollingFileAppender::new(Rotation::DAILY, &dir, LOG_FILE_PREFIX);
    let (file_writer, guard) = tracing_appender::non_blocking(appender);

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .with(tracing_subscriber::fmt::layer().with_writer(file_writer).with_ansi(false))
        .try_init()
        .map_err(|e| DaemonError::Logging(e.to_string()))?;

    Ok(guard)
}

#[cfg(test)]
#[path = "logging_tests.rs"]
mod tests;
