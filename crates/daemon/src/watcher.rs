// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Per-job notification chains: fetch detail → compose → dispatch.
//!
//! Every transitioned job runs in its own task. Chains share nothing but the
//! read-only settings of the cycle that spawned them, so a failed fetch or
//! dispatch only ends its own chain. Superseded chains are not cancelled.

use std::sync::Arc;

use jw_adapters::{JenkinsAdapter, JenkinsError, NotifyAdapter, NotifyError};
use jw_core::{
    compose_notification, detect_transitions, fallback_color, JobSummary, NotificationKey,
    Snapshot, StatusError,
};
use thiserror::Error;
use tokio::task::JoinHandle;
use tracing::{info, warn};

use crate::config::Settings;

/// Why a notification chain was abandoned
#[derive(Debug, Error)]
pub enum ChainError {
    #[error("detail fetch failed: {0}")]
    Fetch(#[from] JenkinsError),

    #[error("no status for running build: {0}")]
    Status(#[from] StatusError),

    #[error("dispatch failed: {0}")]
    Dispatch(#[from] NotifyError),
}

#[derive(Clone)]
pub struct Watcher<J, N> {
    jenkins: J,
    notifier: N,
}

impl<J, N> Watcher<J, N>
where
    J: JenkinsAdapter,
    N: NotifyAdapter,
{
    pub fn new(jenkins: J, notifier: N) -> Self {
        Self { jenkins, notifier }
    }

    /// Diff `old` against `new` and spawn one chain per watched transition.
    ///
    /// Returns the chain handles; callers may await them or let them run.
    pub fn process(
        &self,
        settings: &Arc<Settings>,
        new: &Snapshot,
        old: Option<&Snapshot>,
    ) -> Vec<JoinHandle<()>> {
        detect_transitions(Some(&settings.watch_list), old, Some(new))
            .into_iter()
            .map(|job| {
                let watcher = self.clone();
                let settings = Arc::clone(settings);
                tokio::spawn(async move {
                    let name = job.name.clone();
                    match watcher.notify_job(&settings.url, job).await {
                        Ok(key) => info!(job = %name, %key, "notified"),
                        Err(e) => warn!(job = %name, error = %e, "notification abandoned"),
                    }
                })
            })
            .collect()
    }

    /// Run one chain to completion.
    pub async fn notify_job(
        &self,
        base_url: &str,
        job: JobSummary,
    ) -> Result<NotificationKey, ChainError> {
        let key = NotificationKey::for_job(base_url, &job);
        let detail = self.jenkins.fetch_build(&key).await?;
        let payload = compose_notification(&detail, fallback_color(&detail, &job)?);
        info!(job = %job.name, "notify");
        self.notifier.notify(&key, &payload).await?;
        Ok(key)
    }
}

#[cfg(test)]
#[path = "watcher_tests.rs"]
mod tests;
