// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use super::*;
use serial_test::serial;

#[test]
#[serial]
fn state_dir_prefers_explicit_override() {
    std::env::set_var("JW_STATE_DIR", "/tmp/jw-state");
    let dir = state_dir().unwrap();
    std::env::remove_var("JW_STATE_DIR");
    assert_eq!(dir, PathBuf::from("/tmp/jw-state"));
}

#[test]
#[serial]
fn state_dir_falls_back_to_xdg() {
    std::env::remove_var("JW_STATE_DIR");
    std::env::set_var("XDG_STATE_HOME", "/tmp/xdg-state");
    let dir = state_dir().unwrap();
    std::env::remove_var("XDG_STATE_HOME");
    assert_eq!(dir, PathBuf::from("/tmp/xdg-state/jw"));
}

#[test]
#[serial]
fn config_path_prefers_explicit_override() {
    std::env::set_var("JW_CONFIG", "/etc/jw.toml");
    let path = config_path().unwrap();
    std::env::remove_var("JW_CONFIG");
    assert_eq!(path, PathBuf::from("/etc/jw.toml"));
}

#[test]
#[serial]
fn poll_interval_parses_millis() {
    std::env::set_var("JW_POLL_INTERVAL_MS", "1500");
    assert_eq!(poll_interval(), Some(Duration::from_millis(1500)));
    std::env::set_var("JW_POLL_INTERVAL_MS", "soon");
    assert_eq!(poll_interval(), None);
    std::env::remove_var("JW_POLL_INTERVAL_MS");
    assert_eq!(poll_interval(), None);
}

#[test]
#[serial]
fn log_filter_defaults_to_info() {
    std::env::remove_var("JW_LOG");
    assert_eq!(log_filter(), "info");
    std::env::set_var("JW_LOG", "jw_daemon=debug");
    assert_eq!(log_filter(), "jw_daemon=debug");
    std::env::remove_var("JW_LOG");
}
