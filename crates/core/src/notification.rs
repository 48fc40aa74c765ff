// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Notification payloads and their identity keys.

use crate::snapshot::JobSummary;
use serde::{Deserialize, Serialize};
use std::fmt;

/// One line of notification content.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DisplayItem {
    pub title: String,
    pub message: String,
}

impl DisplayItem {
    pub fn new(title: impl Into<String>, message: impl Into<String>) -> Self {
        Self { title: title.into(), message: message.into() }
    }
}

/// A list-style notification ready for dispatch.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NotificationPayload {
    /// Icon path relative to the icon directory, e.g. `img/red-building.png`
    pub icon_url: String,
    pub title: String,
    /// Always empty; all content lives in `items`
    pub message: String,
    pub items: Vec<DisplayItem>,
}

impl NotificationPayload {
    /// Items flattened into a plain-text body, one `title: message` line each.
    pub fn body(&self) -> String {
        self.items
            .iter()
            .map(|item| {
                if item.title.is_empty() {
                    item.message.clone()
                } else {
                    format!("{}: {}", item.title, item.message)
                }
            })
            .collect::<Vec<_>>()
            .join("\n")
    }
}

/// Identity of a dispatched notification: the build's detail URL.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NotificationKey(String);

impl NotificationKey {
    pub fn new(url: impl Into<String>) -> Self {
        Self(url.into())
    }

    /// Detail URL for a job's last build: `<base>/job/<name>[/<number>]`.
    ///
    /// The build segment is omitted when the job has no build (or build `0`).
    pub fn for_job(base_url: &str, job: &JobSummary) -> Self {
        let base = base_url.trim_end_matches('/');
        match job.build_identity() {
            Some(number) => Self(format!("{base}/job/{}/{number}", job.name)),
            None => Self(format!("{base}/job/{}", job.name)),
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for NotificationKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// What to do when the user clicks a notification.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ClickAction {
    /// Open the URL in a new browser view
    OpenUrl(String),
    Ignore,
}

pub fn on_notification_clicked(key: &NotificationKey) -> ClickAction {
    if key.0.is_empty() {
        ClickAction::Ignore
    } else {
        ClickAction::OpenUrl(key.0.clone())
    }
}

#[cfg(test)]
#[path = "notification_tests.rs"]
mod tests;
