// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Snapshot differ: which watched jobs changed between two polls.

use crate::snapshot::{JobSummary, Snapshot};
use crate::watch::WatchList;
use std::collections::HashMap;

/// Return the new record of every watched job whose color or last build
/// changed between `old` and `new`.
///
/// Only jobs present in both snapshots are examined, in `old` order, and
/// each yields at most one transition. An empty or absent watch list, or a
/// snapshot without a job collection, yields nothing.
pub fn detect_transitions(
    watch: Option<&WatchList>,
    old: Option<&Snapshot>,
    new: Option<&Snapshot>,
) -> Vec<JobSummary> {
    let Some(watch) = watch.filter(|w| !w.is_empty()) else {
        return Vec::new();
    };
    let (Some(old_jobs), Some(new_jobs)) =
        (old.and_then(|s| s.jobs.as_ref()), new.and_then(|s| s.jobs.as_ref()))
    else {
        return Vec::new();
    };

    let by_name: HashMap<&str, &JobSummary> =
        new_jobs.iter().map(|job| (job.name.as_str(), job)).collect();

    old_jobs
        .iter()
        .filter_map(|old_job| {
            let job = by_name.get(old_job.name.as_str())?;
            if !watch.contains(&job.name) {
                return None;
            }
            let changed = old_job.color != job.color
                || old_job.build_identity() != job.build_identity();
            changed.then(|| (*job).clone())
        })
        .collect()
}

#[cfg(test)]
#[path = "diff_tests.rs"]
mod tests;
