// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Job list snapshots as reported by the build server.

use crate::status::{BallColor, StatusError};
use serde::{Deserialize, Serialize};

/// Reference to a job's most recent build.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BuildRef {
    pub number: u64,
}

impl From<u64> for BuildRef {
    fn from(number: u64) -> Self {
        Self { number }
    }
}

/// One job as listed by the server.
///
/// `color` is kept as the raw wire string: folders and other containers
/// carry none, and a color this build does not know must not reject the
/// whole list. It is parsed only when a notification needs it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JobSummary {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_build: Option<BuildRef>,
}

impl JobSummary {
    /// Last build number, with "no build" and build `0` collapsed to `None`.
    pub fn build_identity(&self) -> Option<u64> {
        self.last_build.map(|b| b.number).filter(|n| *n != 0)
    }

    pub fn ball_color(&self) -> Result<BallColor, StatusError> {
        match &self.color {
            Some(color) => color.parse(),
            None => Err(StatusError::MissingColor(self.name.clone())),
        }
    }
}

crate::builder! {
    pub struct JobSummaryBuilder => JobSummary {
        into { name: String = "build-x" }
        option {
            color: String = Some(BallColor::Blue.to_string()),
            last_build: BuildRef = None,
        }
    }
}

/// The server's job list at one point in time.
///
/// `jobs` is `None` when the response carried no job collection; such a
/// snapshot takes part in no comparison.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Snapshot {
    #[serde(default)]
    pub jobs: Option<Vec<JobSummary>>,
}

impl Snapshot {
    pub fn new(jobs: Vec<JobSummary>) -> Self {
        Self { jobs: Some(jobs) }
    }

    pub fn jobs(&self) -> &[JobSummary] {
        self.jobs.as_deref().unwrap_or_default()
    }

    pub fn get(&self, name: &str) -> Option<&JobSummary> {
        self.jobs().iter().find(|job| job.name == name)
    }
}

#[cfg(test)]
#[path = "snapshot_tests.rs"]
mod tests;
