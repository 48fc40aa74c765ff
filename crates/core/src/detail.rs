// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Per-build detail record and its normalization into display items.

use crate::notification::DisplayItem;
use crate::status::BuildResult;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Full record of one build, as returned by the server's build API.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BuildDetail {
    #[serde(default)]
    pub full_display_name: String,
    /// `None` while the build is still running
    #[serde(default)]
    pub result: Option<BuildResult>,
    /// Build start, epoch milliseconds
    #[serde(default)]
    pub timestamp: i64,
    #[serde(default)]
    pub change_set: Option<ChangeSet>,
    #[serde(default)]
    pub actions: Option<Vec<Action>>,
}

crate::builder! {
    pub struct BuildDetailBuilder => BuildDetail {
        into { full_display_name: String = "build-x #1" }
        set { timestamp: i64 = 0 }
        option {
            result: BuildResult = None,
            change_set: ChangeSet = None,
            actions: Vec<Action> = None,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChangeSet {
    #[serde(default)]
    pub items: Vec<ChangeSetItem>,
}

/// One source-control commit in a build's change set.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChangeSetItem {
    #[serde(default)]
    pub author: Option<Author>,
    #[serde(default)]
    pub msg: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Author {
    #[serde(default)]
    pub full_name: Option<String>,
}

/// Build action. The server reports many action kinds; only causes and
/// parameters are read, every other action parses as empty.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Action {
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub causes: Vec<Cause>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub parameters: Vec<Parameter>,
}

/// What triggered a build.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Cause {
    #[serde(default)]
    pub short_description: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub upstream_project: Option<String>,
}

impl Cause {
    pub fn to_item(&self) -> DisplayItem {
        match self.upstream_project.as_deref().filter(|p| !p.is_empty()) {
            Some(project) => DisplayItem::new("Upstream", project),
            None => DisplayItem::new("", self.short_description.as_str()),
        }
    }
}

/// Build parameter. Values may be any JSON scalar.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Parameter {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub value: Value,
}

impl Parameter {
    /// Value as plain text: strings unquoted, `null` empty.
    pub fn display_value(&self) -> String {
        match &self.value {
            Value::Null => String::new(),
            Value::String(s) => s.clone(),
            other => other.to_string(),
        }
    }

    pub fn to_item(&self) -> DisplayItem {
        DisplayItem::new(self.name.as_str(), self.display_value())
    }
}

/// Compact an author's display name: single words are kept, multi-word
/// names become their uppercased initials. Missing names yield `""`.
pub fn format_name(author: Option<&Author>) -> String {
    let Some(full_name) = author.and_then(|a| a.full_name.as_deref()) else {
        return String::new();
    };
    if !full_name.contains(' ') {
        return full_name.to_string();
    }
    full_name
        .split(' ')
        .filter_map(|part| part.chars().next())
        .flat_map(char::to_uppercase)
        .collect()
}

impl BuildDetail {
    /// Commit items, most recently listed commit first.
    pub fn commit_items(&self) -> Vec<DisplayItem> {
        let Some(change_set) = &self.change_set else {
            return Vec::new();
        };
        change_set
            .items
            .iter()
            .rev()
            .map(|item| DisplayItem::new(format_name(item.author.as_ref()), item.msg.as_str()))
            .collect()
    }

    /// First cause of each action that has one, most recent trigger first.
    pub fn cause_items(&self) -> Vec<DisplayItem> {
        self.actions
            .iter()
            .flatten()
            .filter_map(|action| action.causes.first())
            .map(Cause::to_item)
            .rev()
            .collect()
    }

    /// Every parameter of every action, in source order.
    pub fn parameters(&self) -> impl Iterator<Item = &Parameter> {
        self.actions.iter().flatten().flat_map(|action| action.parameters.iter())
    }
}

#[cfg(test)]
#[path = "detail_tests.rs"]
mod tests;
