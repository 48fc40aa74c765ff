// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use super::*;

fn author(full_name: &str) -> Author {
    Author { full_name: Some(full_name.to_string()) }
}

#[yare::parameterized(
    single_word  = { "jenkins",         "jenkins" },
    two_words    = { "Jane Doe",        "JD" },
    lowercase    = { "jane doe",        "JD" },
    three_words  = { "Mary Jane Watson", "MJW" },
    double_space = { "Jane  Doe",       "JD" },
)]
fn format_name_compacts_multi_word_names(full_name: &str, expected: &str) {
    assert_eq!(format_name(Some(&author(full_name))), expected);
}

#[test]
fn format_name_missing_author_is_empty() {
    assert_eq!(format_name(None), "");
    assert_eq!(format_name(Some(&Author { full_name: None })), "");
}

#[test]
fn parses_server_build_record() {
    let json = r#"{
        "_class": "hudson.model.FreeStyleBuild",
        "actions": [
            {"_class": "hudson.model.CauseAction", "causes": [
                {"_class": "hudson.model.Cause$UpstreamCause", "shortDescription": "Started by upstream project \"core\" build number 41", "upstreamBuild": 41, "upstreamProject": "core"}
            ]},
            {},
            {"_class": "hudson.model.ParametersAction", "parameters": [{"name": "BRANCH", "value": "main"}]}
        ],
        "building": false,
        "fullDisplayName": "build-x #6",
        "number": 6,
        "result": "FAILURE",
        "timestamp": 1760000000000,
        "changeSet": {"items": [{"author": {"fullName": "Jane Doe"}, "msg": "fix bug"}], "kind": "git"}
    }"#;

    let detail: BuildDetail = serde_json::from_str(json).unwrap();

    assert_eq!(detail.full_display_name, "build-x #6");
    assert_eq!(detail.result, Some(BuildResult::Failure));
    assert_eq!(detail.timestamp, 1_760_000_000_000);
    assert_eq!(detail.commit_items(), vec![DisplayItem::new("JD", "fix bug")]);
    assert_eq!(detail.cause_items(), vec![DisplayItem::new("Upstream", "core")]);
    let params: Vec<_> = detail.parameters().map(Parameter::to_item).collect();
    assert_eq!(params, vec![DisplayItem::new("BRANCH", "main")]);
}

#[test]
fn in_progress_build_has_no_result() {
    let json = r#"{"fullDisplayName": "build-x #7", "result": null, "timestamp": 1}"#;
    let detail: BuildDetail = serde_json::from_str(json).unwrap();
    assert_eq!(detail.result, None);
    assert!(detail.commit_items().is_empty());
    assert!(detail.cause_items().is_empty());
}

#[test]
fn unknown_result_rejects_build_record() {
    let json = r#"{"fullDisplayName": "x", "result": "EXPLODED", "timestamp": 1}"#;
    let err = serde_json::from_str::<BuildDetail>(json).unwrap_err();
    assert!(err.to_string().contains("unknown build result"));
}

#[test]
fn commit_without_author_has_empty_title() {
    let detail = BuildDetail::builder()
        .change_set(ChangeSet {
            items: vec![ChangeSetItem { author: None, msg: "anonymous".into() }],
        })
        .build();
    assert_eq!(detail.commit_items(), vec![DisplayItem::new("", "anonymous")]);
}

#[test]
fn actions_with_empty_causes_are_skipped() {
    let detail = BuildDetail::builder()
        .actions(vec![
            Action { causes: vec![], ..Action::default() },
            Action {
                causes: vec![Cause {
                    short_description: "Started by user admin".into(),
                    upstream_project: None,
                }],
                ..Action::default()
            },
        ])
        .build();
    assert_eq!(detail.cause_items(), vec![DisplayItem::new("", "Started by user admin")]);
}

#[yare::parameterized(
    upstream       = { r#"{"shortDescription": "Started by upstream", "upstreamProject": "core"}"#, "Upstream", "core" },
    empty_upstream = { r#"{"shortDescription": "Started by user bob", "upstreamProject": ""}"#,   "",         "Started by user bob" },
    user           = { r#"{"shortDescription": "Started by user bob"}"#,                          "",         "Started by user bob" },
)]
fn cause_item_names_upstream_project_when_set(json: &str, title: &str, message: &str) {
    let cause: Cause = serde_json::from_str(json).unwrap();
    assert_eq!(cause.to_item(), DisplayItem::new(title, message));
}

#[yare::parameterized(
    string = { serde_json::json!("main"), "main" },
    boolean    = { serde_json::json!(false),  "false" },
    number = { serde_json::json!(2.5),    "2.5" },
    null_value = { serde_json::Value::Null,   "" },
)]
fn parameter_display_value(value: Value, expected: &str) {
    let param = Parameter { name: "P".into(), value };
    assert_eq!(param.display_value(), expected);
}
