// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Jenkins watcher daemon library
//!
//! Settings, persisted job list, the poll loop and the per-job notification
//! chains. The `jwd` binary wires these to the real adapters.

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

pub mod config;
pub mod env;
pub mod logging;
pub mod poller;
pub mod store;
pub mod watcher;

pub use config::{ConfigError, Settings};
pub use poller::{PollOutcome, Poller};
pub use store::{SnapshotStore, StoreError, StoredSnapshot};
pub use watcher::{ChainError, Watcher};

use jw_adapters::JenkinsError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum DaemonError {
    #[error("could not determine state directory")]
    NoStateDir,

    #[error("could not determine settings file location")]
    NoConfigPath,

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Store(#[from] StoreError),

    #[error(transparent)]
    Jenkins(#[from] JenkinsError),

    #[error("logging setup failed: {0}")]
    Logging(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
