// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use async_trait::async_trait;
use jw_core::{on_notification_clicked, ClickAction, NotificationKey, NotificationPayload};
use std::path::PathBuf;
use std::sync::Arc;
use thiserror::Error;

/// Errors from notify operations
#[derive(Debug, Error)]
pub enum NotifyError {
    #[error("send failed: {0}")]
    SendFailed(String),
}

/// Adapter for dispatching composed notifications.
///
/// Dispatch is fire-and-forget: implementations return once the notification
/// is handed off, not when it is shown or dismissed.
#[async_trait]
pub trait NotifyAdapter: Clone + Send + Sync + 'static {
    /// Show `payload`, identified by `key` (the build's detail URL)
    async fn notify(
        &self,
        key: &NotificationKey,
        payload: &NotificationPayload,
    ) -> Result<(), NotifyError>;
}

/// Reaction to a clicked notification.
pub type ClickHandler = Arc<dyn Fn(ClickAction) + Send + Sync>;

/// Action identifier the notification server reports for a body click.
const DEFAULT_ACTION: &str = "default";

/// How long a shown notification stays clickable. The server closes it
/// afterwards, which releases the blocking thread waiting on its action.
#[cfg_attr(not(all(unix, not(target_os = "macos"))), allow(dead_code))]
const CLICK_WINDOW_MS: u32 = 5 * 60 * 1000;

#[cfg_attr(not(all(unix, not(target_os = "macos"))), allow(dead_code))]
pub(crate) fn click_window() -> notify_rust::Timeout {
    notify_rust::Timeout::Milliseconds(CLICK_WINDOW_MS)
}

/// Route a notification server action for `key` to `on_click`.
///
/// Only the default (body click) action opens anything; close and other
/// actions are dropped.
#[cfg_attr(not(all(unix, not(target_os = "macos"))), allow(dead_code))]
pub(crate) fn route_action(action: &str, key: &NotificationKey, on_click: &ClickHandler) {
    if action == DEFAULT_ACTION {
        on_click(on_notification_clicked(key));
    }
}

/// Open a clicked notification's URL with the host's default handler.
pub fn open_url(action: ClickAction) {
    let ClickAction::OpenUrl(url) = action else {
        return;
    };

    #[cfg(target_os = "macos")]
    let mut command = std::process::Command::new("open");
    #[cfg(target_os = "windows")]
    let mut command = {
        let mut c = std::process::Command::new("cmd");
        c.args(["/C", "start", ""]);
        c
    };
    #[cfg(not(any(target_os = "macos", target_os = "windows")))]
    let mut command = std::process::Command::new("xdg-open");

    command.arg(&url);
    run_opener(command, &url);
}

/// Run the opener to completion so it is reaped. Clicks are delivered on a
/// blocking thread, so waiting here does not stall the runtime.
pub(crate) fn run_opener(mut command: std::process::Command, url: &str) -> bool {
    match command.status() {
        Ok(status) if status.success() => {
            tracing::info!(%url, "opened notification url");
            true
        }
        Ok(status) => {
            tracing::warn!(%url, %status, "url opener failed");
            false
        }
        Err(e) => {
            tracing::warn!(%url, error = %e, "failed to open notification url");
            false
        }
    }
}

/// Desktop notification adapter using notify-rust.
///
/// The click subscription is made once, at construction: every notification
/// this adapter shows routes its body click through the same handler.
///
/// On macOS, `notify-rust` uses `mac-notification-sys` (Cocoa bindings) to send
/// notifications via the Notification Center. The first notification triggers
/// `ensure_application_set()` which runs an AppleScript to look up a bundle
/// identifier. In a daemon context without Automation permissions, that
/// AppleScript blocks forever. We pre-set the bundle identifier at construction
/// time to bypass the lookup entirely.
#[derive(Clone)]
pub struct DesktopNotifyAdapter {
    icon_dir: Option<PathBuf>,
    on_click: ClickHandler,
}

impl DesktopNotifyAdapter {
    pub fn new(icon_dir: Option<PathBuf>) -> Self {
        #[cfg(target_os = "macos")]
        {
            // Pre-set the application bundle identifier so mac-notification-sys
            // skips its NSAppleScript lookup (which blocks forever in daemon
            // processes that lack Automation permissions).
            let _ = mac_notification_sys::set_application("com.apple.Terminal");
        }
        Self { icon_dir, on_click: Arc::new(open_url) }
    }

    /// Replace the click handler (default: [`open_url`])
    pub fn with_click_handler(mut self, on_click: ClickHandler) -> Self {
        self.on_click = on_click;
        self
    }

    /// Icon path on disk, when an icon directory is configured.
    pub fn icon_path(&self, payload: &NotificationPayload) -> Option<PathBuf> {
        self.icon_dir.as_ref().map(|dir| {
            let file = payload.icon_url.rsplit('/').next().unwrap_or(&payload.icon_url);
            dir.join(file)
        })
    }
}

impl std::fmt::Debug for DesktopNotifyAdapter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DesktopNotifyAdapter").field("icon_dir", &self.icon_dir).finish()
    }
}

#[async_trait]
impl NotifyAdapter for DesktopNotifyAdapter {
    async fn notify(
        &self,
        key: &NotificationKey,
        payload: &NotificationPayload,
    ) -> Result<(), NotifyError> {
        let mut notification = notify_rust::Notification::new();
        notification.appname("jw").summary(&payload.title).body(&payload.body());
        if let Some(icon) = self.icon_path(payload) {
            notification.icon(&icon.to_string_lossy());
        }

        let key = key.clone();
        let title = payload.title.clone();
        let on_click = Arc::clone(&self.on_click);
        // notify_rust::Notification::show() is synchronous, and waiting for a
        // click blocks until the notification closes. Fire-and-forget on
        // tokio's bounded blocking thread pool to keep the async runtime free.
        tokio::task::spawn_blocking(move || {
            tracing::info!(%key, %title, "sending desktop notification");
            show(notification, key, on_click);
        });
        Ok(())
    }
}

#[cfg(all(unix, not(target_os = "macos")))]
/// Each shown notification holds one blocking-pool thread until it closes;
/// [`click_window`] bounds that wait.
fn show(mut notification: notify_rust::Notification, key: NotificationKey, on_click: ClickHandler) {
    notification.action(DEFAULT_ACTION, "Open").timeout(click_window());
    match notification.show() {
        Ok(handle) => {
            tracing::info!(%key, "desktop notification sent");
            handle.wait_for_action(|action| route_action(action, &key, &on_click));
        }
        Err(e) => {
            tracing::warn!(%key, error = %e, "desktop notification failed");
        }
    }
}

#[cfg(not(all(unix, not(target_os = "macos"))))]
fn show(notification: notify_rust::Notification, key: NotificationKey, _on_click: ClickHandler) {
    match notification.show() {
        Ok(_) => {
            tracing::info!(%key, "desktop notification sent");
        }
        Err(e) => {
            tracing::warn!(%key, error = %e, "desktop notification failed");
        }
    }
}

#[cfg(any(test, feature = "test-support"))]
#[cfg_attr(coverage_nightly, coverage(off))]
mod fake {
    use super::{NotifyAdapter, NotifyError};
    use async_trait::async_trait;
    use jw_core::{NotificationKey, NotificationPayload};
    use parking_lot::Mutex;
    use std::sync::Arc;

    /// Recorded notification
    #[derive(Debug, Clone)]
    pub struct NotifyCall {
        pub key: NotificationKey,
        pub payload: NotificationPayload,
    }

    struct FakeNotifyState {
        calls: Vec<NotifyCall>,
        fail: bool,
    }

    /// Fake notification adapter for testing
    #[derive(Clone)]
    pub struct FakeNotifyAdapter {
        inner: Arc<Mutex<FakeNotifyState>>,
    }

    impl Default for FakeNotifyAdapter {
        fn default() -> Self {
            Self { inner: Arc::new(Mutex::new(FakeNotifyState { calls: Vec::new(), fail: false })) }
        }
    }

    impl FakeNotifyAdapter {
        pub fn new() -> Self {
            Self::default()
        }

        /// Make every subsequent dispatch fail
        pub fn fail_sends(&self) {
            self.inner.lock().fail = true;
        }

        /// Get all recorded notifications
        pub fn calls(&self) -> Vec<NotifyCall> {
            self.inner.lock().calls.clone()
        }
    }

    #[async_trait]
    impl NotifyAdapter for FakeNotifyAdapter {
        async fn notify(
            &self,
            key: &NotificationKey,
            payload: &NotificationPayload,
        ) -> Result<(), NotifyError> {
            let mut inner = self.inner.lock();
            if inner.fail {
                return Err(NotifyError::SendFailed(format!("fake failure for {key}")));
            }
            inner.calls.push(NotifyCall { key: key.clone(), payload: payload.clone() });
            Ok(())
        }
    }
}

#[cfg(any(test, feature = "test-support"))]
pub use fake::{FakeNotifyAdapter, NotifyCall};

#[cfg(test)]
#[path = "notify_tests.rs"]
mod tests;
