// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Centralized environment variable access for the daemon crate.

use std::path::PathBuf;
use std::time::Duration;

use crate::DaemonError;

/// Resolve state directory: JW_STATE_DIR > XDG_STATE_HOME/jw > ~/.local/state/jw
pub fn state_dir() -> Result<PathBuf, DaemonError> {
    if let Ok(dir) = std::env::var("JW_STATE_DIR") {
        return Ok(PathBuf::from(dir));
    }
    if let Ok(xdg) = std::env::var("XDG_STATE_HOME") {
        return Ok(PathBuf::from(xdg).join("jw"));
    }
    let home = std::env::var("HOME").map_err(|_| DaemonError::NoStateDir)?;
    Ok(PathBuf::from(home).join(".local/state/jw"))
}

/// Resolve settings file: JW_CONFIG > <config dir>/jw/config.toml
pub fn config_path() -> Result<PathBuf, DaemonError> {
    if let Ok(path) = std::env::var("JW_CONFIG") {
        return Ok(PathBuf::from(path));
    }
    dirs::config_dir().map(|dir| dir.join("jw").join("config.toml")).ok_or(DaemonError::NoConfigPath)
}

/// Poll interval override, taking precedence over the settings file
pub fn poll_interval() -> Option<Duration> {
    std::env::var("JW_POLL_INTERVAL_MS")
        .ok()
        .and_then(|s| s.parse::<u64>().ok())
        .map(Duration::from_millis)
}

/// Log filter directive (default `info`)
pub fn log_filter() -> String {
    std::env::var("JW_LOG").ok().filter(|s| !s.is_empty()).unwrap_or_else(|| "info".to_string())
}

#[cfg(test)]
#[path = "env_tests.rs"]
mod tests;
