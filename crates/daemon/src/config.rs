// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! User settings: server URL, watch list, polling and connection options.
//!
//! Settings live in a TOML file and are re-read at the start of every poll
//! cycle, so edits apply without a restart.

use jw_adapters::JenkinsConfig;
use jw_core::WatchList;
use serde::Deserialize;
use std::path::{Path, PathBuf};
use std::time::Duration;
use thiserror::Error;

const DEFAULT_POLL_INTERVAL_SECS: u64 = 60;
const MIN_POLL_INTERVAL_SECS: u64 = 5;
const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 30;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read settings file {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid settings: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("invalid server url {0:?}: expected http:// or https://")]
    InvalidUrl(String),
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Settings {
    /// Server base URL, without trailing slash
    pub url: String,
    #[serde(default)]
    pub watch_list: WatchList,
    #[serde(default = "default_poll_interval_secs")]
    pub poll_interval_secs: u64,
    #[serde(default = "default_request_timeout_secs")]
    pub request_timeout_secs: u64,
    /// Directory holding the status icons
    #[serde(default)]
    pub icon_dir: Option<PathBuf>,
    #[serde(default)]
    pub username: Option<String>,
    #[serde(default)]
    pub api_token: Option<String>,
}

fn default_poll_interval_secs() -> u64 {
    DEFAULT_POLL_INTERVAL_SECS
}

fn default_request_timeout_secs() -> u64 {
    DEFAULT_REQUEST_TIMEOUT_SECS
}

impl Settings {
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let text = std::fs::read_to_string(path)
            .map_err(|source| ConfigError::Read { path: path.to_path_buf(), source })?;
        Self::from_toml(&text)
    }

    pub fn from_toml(text: &str) -> Result<Self, ConfigError> {
        let mut settings: Settings = toml::from_str(text)?;
        settings.url = settings.url.trim().trim_end_matches('/').to_string();
        if !(settings.url.starts_with("http://") || settings.url.starts_with("https://")) {
            return Err(ConfigError::InvalidUrl(settings.url));
        }
        Ok(settings)
    }

    pub fn poll_interval(&self) -> Duration {
        Duration::from_secs(self.poll_interval_secs.max(MIN_POLL_INTERVAL_SECS))
    }

    pub fn jenkins_config(&self) -> JenkinsConfig {
        JenkinsConfig {
            username: self.username.clone(),
            api_token: self.api_token.clone(),
            timeout: Some(Duration::from_secs(self.request_timeout_secs)),
        }
    }
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod tests;
