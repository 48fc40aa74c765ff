// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Notification composer.
//!
//! Item order in the finished payload:
//!
//! 1. build parameters, last processed first
//! 2. status header (`status message` / build time)
//! 3. commits (most recent first), or when there are none, the first cause
//!    of each action (most recent first)

use crate::detail::BuildDetail;
use crate::notification::{DisplayItem, NotificationPayload};
use crate::snapshot::JobSummary;
use crate::status::{BallColor, Status, StatusError};
use chrono::{DateTime, Local, TimeZone};
use std::collections::VecDeque;
use std::fmt::Display;

/// Directory prefix of status icons in `icon_url`.
pub const ICON_PREFIX: &str = "img/";

const TIMESTAMP_FORMAT: &str = "%a, %b %-d, %Y, %-I:%M %p";

/// Render epoch milliseconds as e.g. `Mon, Oct 19, 2026, 3:04 PM` in local time.
pub fn format_timestamp(timestamp_ms: i64) -> String {
    format_timestamp_in(timestamp_ms, &Local)
}

pub fn format_timestamp_in<Tz>(timestamp_ms: i64, tz: &Tz) -> String
where
    Tz: TimeZone,
    Tz::Offset: Display,
{
    match DateTime::from_timestamp_millis(timestamp_ms) {
        Some(utc) => utc.with_timezone(tz).format(TIMESTAMP_FORMAT).to_string(),
        None => String::new(),
    }
}

/// Status shown for a build: its result when finished, otherwise the job's
/// current ball color.
pub fn resolve_status(detail: &BuildDetail, fallback: BallColor) -> Status {
    match detail.result {
        Some(result) => result.status(),
        None => fallback.status(),
    }
}

/// Color to pass as the status fallback for `job`.
///
/// The job's own color is parsed only while the build has no result, so a
/// missing or unknown color fails just the notifications that need it.
pub fn fallback_color(
    detail: &BuildDetail,
    job: &JobSummary,
) -> Result<BallColor, StatusError> {
    match detail.result {
        Some(result) => Ok(result.color()),
        None => job.ball_color(),
    }
}

pub fn compose_notification(detail: &BuildDetail, fallback: BallColor) -> NotificationPayload {
    compose_notification_in(detail, fallback, &Local)
}

pub fn compose_notification_in<Tz>(
    detail: &BuildDetail,
    fallback: BallColor,
    tz: &Tz,
) -> NotificationPayload
where
    Tz: TimeZone,
    Tz::Offset: Display,
{
    let status = resolve_status(detail, fallback);

    let mut items = detail.commit_items();
    if items.is_empty() && detail.actions.is_some() {
        items = detail.cause_items();
    }

    let mut items = VecDeque::from(items);
    items.push_front(DisplayItem::new(status.message, format_timestamp_in(detail.timestamp, tz)));

    // Each parameter is pushed to the front in source order, so the last
    // parameter ends up first.
    for param in detail.parameters() {
        items.push_front(param.to_item());
    }

    NotificationPayload {
        icon_url: format!("{ICON_PREFIX}{}.png", status.icon_name()),
        title: detail.full_display_name.clone(),
        message: String::new(),
        items: items.into(),
    }
}

#[cfg(test)]
#[path = "compose_tests.rs"]
mod tests;
