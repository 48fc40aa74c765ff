// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Poll loop: reload settings, fetch the job list, diff against the last
//! list seen, and hand transitions to the watcher.

use std::future::Future;
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use jw_adapters::{JenkinsAdapter, NotifyAdapter};
use jw_core::Snapshot;
use tokio::task::JoinHandle;
use tracing::{debug, info, warn};

use crate::config::Settings;
use crate::store::SnapshotStore;
use crate::watcher::Watcher;
use crate::DaemonError;

/// Delay used until settings have been loaded once
const DEFAULT_DELAY: Duration = Duration::from_secs(60);

/// Result of one poll cycle
pub struct PollOutcome {
    /// Jobs in the fetched list
    pub jobs: usize,
    /// Notification chains spawned for this cycle
    pub chains: Vec<JoinHandle<()>>,
}

pub struct Poller<J, N> {
    config_path: PathBuf,
    store: SnapshotStore,
    jenkins: J,
    watcher: Watcher<J, N>,
    last: Option<Snapshot>,
    interval_override: Option<Duration>,
    delay: Duration,
}

impl<J, N> Poller<J, N>
where
    J: JenkinsAdapter,
    N: NotifyAdapter,
{
    /// Create a poller, resuming from the last stored job list if any.
    pub fn new(config_path: PathBuf, store: SnapshotStore, jenkins: J, notifier: N) -> Self {
        let last = match store.load() {
            Ok(Some(stored)) => {
                info!(
                    jobs = stored.snapshot.jobs().len(),
                    saved_at = %stored.saved_at,
                    "resuming from stored job list"
                );
                Some(stored.snapshot)
            }
            Ok(None) => None,
            Err(e) => {
                warn!(path = %store.path().display(), error = %e, "ignoring unreadable job list");
                None
            }
        };
        Self {
            config_path,
            store,
            watcher: Watcher::new(jenkins.clone(), notifier),
            jenkins,
            last,
            interval_override: None,
            delay: DEFAULT_DELAY,
        }
    }

    /// Fixed poll interval, ignoring the settings file
    pub fn with_interval(mut self, interval: Option<Duration>) -> Self {
        self.interval_override = interval;
        if let Some(interval) = interval {
            self.delay = interval;
        }
        self
    }

    /// Job list from the previous cycle
    pub fn last_snapshot(&self) -> Option<&Snapshot> {
        self.last.as_ref()
    }

    /// Delay before the next cycle
    pub fn delay(&self) -> Duration {
        self.delay
    }

    /// Run one cycle.
    ///
    /// On error the previous job list is kept, so the next successful cycle
    /// still sees every change since the last good one.
    pub async fn poll_once(&mut self) -> Result<PollOutcome, DaemonError> {
        let settings = Arc::new(Settings::load(&self.config_path)?);
        self.delay = self.interval_override.unwrap_or_else(|| settings.poll_interval());

        let new = self.jenkins.fetch_jobs(&settings.url).await?;
        if new.jobs.is_none() {
            warn!(url = %settings.url, "job list response has no jobs; keeping previous list");
            return Ok(PollOutcome { jobs: 0, chains: Vec::new() });
        }
        let jobs = new.jobs().len();

        let chains = match &self.last {
            Some(old) => self.watcher.process(&settings, &new, Some(old)),
            None => {
                info!(jobs, "recording initial job list");
                Vec::new()
            }
        };
        debug!(jobs, transitions = chains.len(), "poll complete");

        if let Err(e) = self.store.save(&new) {
            warn!(path = %self.store.path().display(), error = %e, "failed to store job list");
        }
        self.last = Some(new);

        Ok(PollOutcome { jobs, chains })
    }

    /// Poll until `shutdown` resolves.
    pub async fn run(mut self, shutdown: impl Future<Output = ()>) {
        tokio::pin!(shutdown);
        loop {
            if let Err(e) = self.poll_once().await {
                warn!(error = %e, "poll failed");
            }
            tokio::select! {
                _ = &mut shutdown => {
                    info!("poller stopping");
                    return;
                }
                _ = tokio::time::sleep(self.delay) => {}
            }
        }
    }
}

#[cfg(test)]
#[path = "poller_tests.rs"]
mod tests;
