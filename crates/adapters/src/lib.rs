// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

//! jw-adapters: I/O boundaries for Jenkins Watch
//!
//! - [`jenkins`] — HTTP access to the build server's JSON API
//! - [`notify`] — desktop notification dispatch and click routing

pub mod jenkins;
pub mod notify;

pub use jenkins::{HttpJenkinsAdapter, JenkinsAdapter, JenkinsConfig, JenkinsError};
#[cfg(any(test, feature = "test-support"))]
pub use jenkins::{FakeJenkinsAdapter, JenkinsCall};
pub use notify::{open_url, ClickHandler, DesktopNotifyAdapter, NotifyAdapter, NotifyError};
#[cfg(any(test, feature = "test-support"))]
pub use notify::{FakeNotifyAdapter, NotifyCall};
