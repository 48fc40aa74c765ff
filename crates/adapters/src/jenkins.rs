// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Jenkins JSON API client.
//!
//! Job lists come from `<base>/api/json` narrowed with a `tree` filter;
//! build records from `<detail url>/api/json`.

use async_trait::async_trait;
use jw_core::{BuildDetail, NotificationKey, Snapshot};
use serde::de::DeserializeOwned;
use std::time::Duration;
use thiserror::Error;

/// Fields requested for the job list
pub const JOBS_TREE: &str = "jobs[name,color,lastBuild[number]]";

const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Errors from build server requests
#[derive(Debug, Error)]
pub enum JenkinsError {
    #[error("request to {url} failed: {source}")]
    Request {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("{url} returned HTTP {status}")]
    Status { url: String, status: u16 },

    #[error("malformed response from {url}: {source}")]
    Decode {
        url: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("could not build HTTP client: {0}")]
    Client(String),
}

/// Adapter for reading job and build state from the build server
#[async_trait]
pub trait JenkinsAdapter: Clone + Send + Sync + 'static {
    /// Fetch the job list under `base_url`
    async fn fetch_jobs(&self, base_url: &str) -> Result<Snapshot, JenkinsError>;

    /// Fetch the build record behind a detail URL
    async fn fetch_build(&self, key: &NotificationKey) -> Result<BuildDetail, JenkinsError>;
}

/// Connection settings for [`HttpJenkinsAdapter`]
#[derive(Debug, Clone, Default)]
pub struct JenkinsConfig {
    pub username: Option<String>,
    pub api_token: Option<String>,
    /// Per-request timeout (default 30s)
    pub timeout: Option<Duration>,
}

/// Build server adapter over HTTP(S)
#[derive(Clone)]
pub struct HttpJenkinsAdapter {
    client: reqwest::Client,
    config: JenkinsConfig,
}

impl HttpJenkinsAdapter {
    pub fn new(config: JenkinsConfig) -> Result<Self, JenkinsError> {
        let client = reqwest::Client::builder()
            .timeout(config.timeout.unwrap_or(DEFAULT_TIMEOUT))
            .user_agent(concat!("jw/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| JenkinsError::Client(e.to_string()))?;
        Ok(Self { client, config })
    }

    async fn get_json<T: DeserializeOwned>(
        &self,
        url: &str,
        query: &[(&str, &str)],
    ) -> Result<T, JenkinsError> {
        let mut request = self.client.get(url).query(query);
        if let Some(username) = &self.config.username {
            request = request.basic_auth(username, self.config.api_token.as_ref());
        }

        let response = request
            .send()
            .await
            .map_err(|source| JenkinsError::Request { url: url.to_string(), source })?;
        let status = response.status();
        if !status.is_success() {
            return Err(JenkinsError::Status { url: url.to_string(), status: status.as_u16() });
        }
        let body = response
            .bytes()
            .await
            .map_err(|source| JenkinsError::Request { url: url.to_string(), source })?;
        serde_json::from_slice(&body)
            .map_err(|source| JenkinsError::Decode { url: url.to_string(), source })
    }
}

impl std::fmt::Debug for HttpJenkinsAdapter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HttpJenkinsAdapter")
            .field("username", &self.config.username)
            .field("timeout", &self.config.timeout)
            .finish()
    }
}

/// JSON API endpoint under a job, build, or server URL.
pub fn api_url(url: &str) -> String {
    format!("{}/api/json", url.trim_end_matches('/'))
}

#[async_trait]
impl JenkinsAdapter for HttpJenkinsAdapter {
    async fn fetch_jobs(&self, base_url: &str) -> Result<Snapshot, JenkinsError> {
        let url = api_url(base_url);
        tracing::debug!(%url, "fetching job list");
        self.get_json(&url, &[("tree", JOBS_TREE)]).await
    }

    async fn fetch_build(&self, key: &NotificationKey) -> Result<BuildDetail, JenkinsError> {
        let url = api_url(key.as_str());
        tracing::debug!(%url, "fetching build detail");
        self.get_json(&url, &[]).await
    }
}

#[cfg(any(test, feature = "test-support"))]
#[cfg_attr(coverage_nightly, coverage(off))]
mod fake {
    use super::{JenkinsAdapter, JenkinsError};
    use async_trait::async_trait;
    use jw_core::{BuildDetail, NotificationKey, Snapshot};
    use parking_lot::Mutex;
    use std::collections::HashMap;
    use std::sync::Arc;

    /// Recorded request
    #[derive(Debug, Clone, PartialEq, Eq)]
    pub enum JenkinsCall {
        FetchJobs { base_url: String },
        FetchBuild { url: String },
    }

    #[derive(Default)]
    struct FakeJenkinsState {
        jobs: Option<Snapshot>,
        builds: HashMap<String, BuildDetail>,
        calls: Vec<JenkinsCall>,
    }

    /// Fake build server for testing.
    ///
    /// Unknown build URLs answer HTTP 404; a job list that was never set (or
    /// was cleared) answers HTTP 503.
    #[derive(Clone, Default)]
    pub struct FakeJenkinsAdapter {
        inner: Arc<Mutex<FakeJenkinsState>>,
    }

    impl FakeJenkinsAdapter {
        pub fn new() -> Self {
            Self::default()
        }

        pub fn set_jobs(&self, jobs: Snapshot) {
            self.inner.lock().jobs = Some(jobs);
        }

        /// Make job list requests fail
        pub fn clear_jobs(&self) {
            self.inner.lock().jobs = None;
        }

        pub fn set_build(&self, url: impl Into<String>, detail: BuildDetail) {
            self.inner.lock().builds.insert(url.into(), detail);
        }

        /// Get all recorded requests
        pub fn calls(&self) -> Vec<JenkinsCall> {
            self.inner.lock().calls.clone()
        }
    }

    #[async_trait]
    impl JenkinsAdapter for FakeJenkinsAdapter {
        async fn fetch_jobs(&self, base_url: &str) -> Result<Snapshot, JenkinsError> {
            let mut inner = self.inner.lock();
            inner.calls.push(JenkinsCall::FetchJobs { base_url: base_url.to_string() });
            inner.jobs.clone().ok_or_else(|| JenkinsError::Status {
                url: super::api_url(base_url),
                status: 503,
            })
        }

        async fn fetch_build(&self, key: &NotificationKey) -> Result<BuildDetail, JenkinsError> {
            let mut inner = self.inner.lock();
            inner.calls.push(JenkinsCall::FetchBuild { url: key.to_string() });
            inner.builds.get(key.as_str()).cloned().ok_or_else(|| JenkinsError::Status {
                url: super::api_url(key.as_str()),
                status: 404,
            })
        }
    }
}

#[cfg(any(test, feature = "test-support"))]
pub use fake::{FakeJenkinsAdapter, JenkinsCall};

#[cfg(test)]
#[path = "jenkins_tests.rs"]
mod tests;
