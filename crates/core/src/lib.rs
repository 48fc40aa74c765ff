// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

//! jw-core: change detection and notification composition for Jenkins Watch
//!
//! Pure functions only: [`detect_transitions`] picks the watched jobs that
//! changed between two polls, [`compose_notification`] turns a build's
//! detail record into an ordered notification payload.

pub mod macros;

pub mod compose;
pub mod detail;
pub mod diff;
pub mod notification;
pub mod snapshot;
pub mod status;
pub mod watch;

#[cfg(any(test, feature = "test-support"))]
pub mod test_support;

pub use compose::{
    compose_notification, compose_notification_in, fallback_color, format_timestamp,
};
pub use detail::{
    format_name, Action, Author, BuildDetail, Cause, ChangeSet, ChangeSetItem, Parameter,
};
#[cfg(any(test, feature = "test-support"))]
pub use detail::BuildDetailBuilder;
pub use diff::detect_transitions;
pub use notification::{
    on_notification_clicked, ClickAction, DisplayItem, NotificationKey, NotificationPayload,
};
#[cfg(any(test, feature = "test-support"))]
pub use snapshot::JobSummaryBuilder;
pub use snapshot::{BuildRef, JobSummary, Snapshot};
pub use status::{BallColor, BuildResult, Status, StatusError};
pub use watch::WatchList;
