// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Shared test helpers for use across crates.
//!
//! Gated behind `#[cfg(any(test, feature = "test-support"))]`.

use crate::detail::{Action, Author, BuildDetail, Cause, ChangeSet, ChangeSetItem, Parameter};
use crate::snapshot::{JobSummary, Snapshot};
use crate::status::BallColor;

// ── Proptest strategies ─────────────────────────────────────────────────

/// Proptest strategies for snapshot types.
pub mod strategies {
    use crate::snapshot::{BuildRef, JobSummary, Snapshot};
    use crate::status::BallColor;
    use proptest::prelude::*;

    pub fn arb_ball_color() -> impl Strategy<Value = BallColor> {
        proptest::sample::select(vec![
            BallColor::Blue,
            BallColor::BlueAnime,
            BallColor::Yellow,
            BallColor::YellowAnime,
            BallColor::Red,
            BallColor::RedAnime,
            BallColor::Grey,
            BallColor::GreyAnime,
            BallColor::Disabled,
            BallColor::DisabledAnime,
            BallColor::Aborted,
            BallColor::AbortedAnime,
            BallColor::NotBuilt,
            BallColor::NotBuiltAnime,
        ])
    }

    /// Wire color: mostly known colors, plus folders (no color) and
    /// colors this build does not know.
    pub fn arb_job_color() -> impl Strategy<Value = Option<String>> {
        prop_oneof![
            8 => arb_ball_color().prop_map(|c| Some(c.to_string())),
            1 => Just(None),
            1 => Just(Some("plaid".to_string())),
        ]
    }

    pub fn arb_last_build() -> impl Strategy<Value = Option<BuildRef>> {
        proptest::option::of((0u64..20).prop_map(BuildRef::from))
    }

    /// Snapshot with unique job names drawn from a small pool so that
    /// generated pairs overlap.
    pub fn arb_snapshot() -> impl Strategy<Value = Snapshot> {
        proptest::collection::btree_map(
            "job-[a-f]",
            (arb_job_color(), arb_last_build()),
            0..6,
        )
        .prop_map(|jobs| {
            Snapshot::new(
                jobs.into_iter()
                    .map(|(name, (color, last_build))| JobSummary { name, color, last_build })
                    .collect(),
            )
        })
    }
}

// ── Factory functions ───────────────────────────────────────────────────

pub fn job(name: &str, color: BallColor, number: Option<u64>) -> JobSummary {
    JobSummary {
        name: name.to_string(),
        color: Some(color.to_string()),
        last_build: number.map(Into::into),
    }
}

/// Entry without a ball color, as the server lists folders.
pub fn folder(name: &str) -> JobSummary {
    JobSummary { name: name.to_string(), color: None, last_build: None }
}

pub fn snapshot(jobs: impl IntoIterator<Item = JobSummary>) -> Snapshot {
    Snapshot::new(jobs.into_iter().collect())
}

pub fn commit(full_name: &str, msg: &str) -> ChangeSetItem {
    ChangeSetItem {
        author: Some(Author { full_name: Some(full_name.to_string()) }),
        msg: msg.to_string(),
    }
}

pub fn change_set(items: impl IntoIterator<Item = ChangeSetItem>) -> ChangeSet {
    ChangeSet { items: items.into_iter().collect() }
}

pub fn cause_action(short_description: &str, upstream_project: Option<&str>) -> Action {
    Action {
        causes: vec![Cause {
            short_description: short_description.to_string(),
            upstream_project: upstream_project.map(str::to_string),
        }],
        ..Action::default()
    }
}

pub fn parameters_action<'a>(params: impl IntoIterator<Item = (&'a str, &'a str)>) -> Action {
    Action {
        parameters: params
            .into_iter()
            .map(|(name, value)| Parameter { name: name.to_string(), value: value.into() })
            .collect(),
        ..Action::default()
    }
}

/// Build detail for a finished build at a fixed timestamp.
pub fn finished_build(name: &str, number: u64) -> BuildDetail {
    BuildDetail::builder()
        .full_display_name(format!("{name} #{number}"))
        .timestamp(1_760_000_000_000)
        .build()
}
