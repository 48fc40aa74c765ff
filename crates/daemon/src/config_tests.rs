// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use super::*;

#[test]
fn minimal_settings_use_defaults() {
    let settings = Settings::from_toml(r#"url = "https://ci.example.com/""#).unwrap();

    assert_eq!(settings.url, "https://ci.example.com");
    assert!(settings.watch_list.is_empty());
    assert_eq!(settings.poll_interval(), Duration::from_secs(60));
    assert_eq!(settings.jenkins_config().timeout, Some(Duration::from_secs(30)));
    assert_eq!(settings.icon_dir, None);
}

#[test]
fn full_settings_parse() {
    let settings = Settings::from_toml(
        r#"
        url = "http://jenkins.local:8080"
        watch_list = ["build-x", "deploy"]
        poll_interval_secs = 15
        request_timeout_secs = 10
        icon_dir = "/usr/share/jw/img"
        username = "alice"
        api_token = "s3cret"
        "#,
    )
    .unwrap();

    assert!(settings.watch_list.contains("build-x"));
    assert!(settings.watch_list.contains("deploy"));
    assert_eq!(settings.poll_interval(), Duration::from_secs(15));
    assert_eq!(settings.icon_dir, Some(PathBuf::from("/usr/share/jw/img")));
    let jenkins = settings.jenkins_config();
    assert_eq!(jenkins.username.as_deref(), Some("alice"));
    assert_eq!(jenkins.api_token.as_deref(), Some("s3cret"));
    assert_eq!(jenkins.timeout, Some(Duration::from_secs(10)));
}

#[test]
fn poll_interval_has_a_floor() {
    let settings =
        Settings::from_toml("url = \"https://ci.example.com\"\npoll_interval_secs = 1").unwrap();
    assert_eq!(settings.poll_interval(), Duration::from_secs(5));
}

#[yare::parameterized(
    no_scheme = { "ci.example.com" },
    ftp       = { "ftp://ci.example.com" },
    empty     = { "" },
)]
fn rejects_non_http_url(url: &str) {
    let result = Settings::from_toml(&format!("url = {url:?}"));
    assert!(matches!(result, Err(ConfigError::InvalidUrl(_))));
}

#[test]
fn rejects_unknown_keys() {
    let result = Settings::from_toml("url = \"https://ci.example.com\"\nwatchlist = []");
    assert!(matches!(result, Err(ConfigError::Parse(_))));
}

#[test]
fn missing_file_reports_path() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("missing.toml");

    let err = Settings::load(&path).unwrap_err();

    assert!(matches!(err, ConfigError::Read { .. }));
    assert!(err.to_string().contains("missing.toml"));
}

#[test]
fn load_reads_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.toml");
    std::fs::write(&path, "url = \"https://ci.example.com\"\nwatch_list = [\"build-x\"]\n").unwrap();

    let settings = Settings::load(&path).unwrap();

    assert_eq!(settings.watch_list.len(), 1);
}
