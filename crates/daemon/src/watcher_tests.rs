// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use super::*;
use jw_adapters::{FakeJenkinsAdapter, FakeNotifyAdapter, JenkinsCall};
use jw_core::test_support::{change_set, commit, folder, job, snapshot};
use jw_core::{BallColor, BuildDetail, BuildResult, DisplayItem};

const BASE: &str = "https://ci.example.com";

fn settings(watch: &[&str]) -> Arc<Settings> {
    let watch_list = watch.iter().map(|n| format!("{n:?}")).collect::<Vec<_>>().join(", ");
    Arc::new(
        Settings::from_toml(&format!("url = \"{BASE}\"\nwatch_list = [{watch_list}]")).unwrap(),
    )
}

fn failed_build() -> BuildDetail {
    BuildDetail::builder()
        .full_display_name("build-x #6")
        .timestamp(1_760_000_000_000)
        .result(BuildResult::Failure)
        .change_set(change_set([commit("Jane Doe", "fix bug")]))
        .build()
}

async fn join_all(chains: Vec<JoinHandle<()>>) {
    for chain in chains {
        chain.await.unwrap();
    }
}

#[tokio::test]
async fn failed_build_notifies_with_header_and_commit() {
    let jenkins = FakeJenkinsAdapter::new();
    let notifier = FakeNotifyAdapter::new();
    jenkins.set_build(format!("{BASE}/job/build-x/6"), failed_build());
    let watcher = Watcher::new(jenkins.clone(), notifier.clone());

    let old = snapshot([job("build-x", BallColor::Blue, Some(5))]);
    let new = snapshot([job("build-x", BallColor::Red, Some(6))]);
    let chains = watcher.process(&settings(&["build-x"]), &new, Some(&old));
    assert_eq!(chains.len(), 1);
    join_all(chains).await;

    let calls = notifier.calls();
    assert_eq!(calls.len(), 1);
    assert_eq!(calls[0].key.as_str(), "https://ci.example.com/job/build-x/6");
    let payload = &calls[0].payload;
    assert_eq!(payload.title, "build-x #6");
    assert_eq!(payload.icon_url, "img/red.png");
    assert_eq!(payload.items.len(), 2);
    assert_eq!(payload.items[0].title, "Failure");
    assert_eq!(payload.items[1], DisplayItem::new("JD", "fix bug"));
    assert_eq!(
        jenkins.calls(),
        vec![JenkinsCall::FetchBuild { url: "https://ci.example.com/job/build-x/6".into() }]
    );
}

#[tokio::test]
async fn running_build_uses_job_color() {
    let jenkins = FakeJenkinsAdapter::new();
    let notifier = FakeNotifyAdapter::new();
    jenkins.set_build(
        format!("{BASE}/job/build-x/7"),
        BuildDetail::builder().full_display_name("build-x #7").build(),
    );
    let watcher = Watcher::new(jenkins, notifier.clone());

    let job = job("build-x", BallColor::BlueAnime, Some(7));
    let key = watcher.notify_job(BASE, job).await.unwrap();

    assert_eq!(key.as_str(), "https://ci.example.com/job/build-x/7");
    assert_eq!(notifier.calls()[0].payload.icon_url, "img/blue-building.png");
}

#[tokio::test]
async fn job_without_builds_fetches_job_url() {
    let jenkins = FakeJenkinsAdapter::new();
    let watcher = Watcher::new(jenkins.clone(), FakeNotifyAdapter::new());

    let result = watcher.notify_job(BASE, job("fresh", BallColor::Disabled, None)).await;

    assert!(matches!(result, Err(ChainError::Fetch(_))));
    assert_eq!(
        jenkins.calls(),
        vec![JenkinsCall::FetchBuild { url: "https://ci.example.com/job/fresh".into() }]
    );
}

#[tokio::test]
async fn failed_fetch_does_not_block_other_chains() {
    let jenkins = FakeJenkinsAdapter::new();
    let notifier = FakeNotifyAdapter::new();
    // No record for "broken": its fetch answers 404
    jenkins.set_build(format!("{BASE}/job/build-x/6"), failed_build());
    let watcher = Watcher::new(jenkins, notifier.clone());

    let old = snapshot([
        job("broken", BallColor::Blue, Some(1)),
        job("build-x", BallColor::Blue, Some(5)),
    ]);
    let new = snapshot([
        job("broken", BallColor::Red, Some(2)),
        job("build-x", BallColor::Red, Some(6)),
    ]);
    join_all(watcher.process(&settings(&["broken", "build-x"]), &new, Some(&old))).await;

    let calls = notifier.calls();
    assert_eq!(calls.len(), 1);
    assert_eq!(calls[0].payload.title, "build-x #6");
}

#[tokio::test]
async fn dispatch_failure_is_reported() {
    let jenkins = FakeJenkinsAdapter::new();
    let notifier = FakeNotifyAdapter::new();
    notifier.fail_sends();
    jenkins.set_build(format!("{BASE}/job/build-x/6"), failed_build());
    let watcher = Watcher::new(jenkins, notifier);

    let result = watcher.notify_job(BASE, job("build-x", BallColor::Red, Some(6))).await;

    assert!(matches!(result, Err(ChainError::Dispatch(_))));
}

#[tokio::test]
async fn unchanged_or_unwatched_jobs_spawn_nothing() {
    let jenkins = FakeJenkinsAdapter::new();
    let watcher = Watcher::new(jenkins.clone(), FakeNotifyAdapter::new());

    let old = snapshot([job("a", BallColor::Blue, Some(1)), job("b", BallColor::Blue, Some(1))]);
    let new = snapshot([job("a", BallColor::Blue, Some(1)), job("b", BallColor::Red, Some(2))]);

    assert!(watcher.process(&settings(&["a"]), &new, Some(&old)).is_empty());
    assert!(watcher.process(&settings(&[]), &new, Some(&old)).is_empty());
    assert!(watcher.process(&settings(&["b"]), &new, None).is_empty());
    assert!(jenkins.calls().is_empty());
}

#[tokio::test]
async fn running_build_with_unknown_color_ends_only_its_chain() {
    let jenkins = FakeJenkinsAdapter::new();
    let notifier = FakeNotifyAdapter::new();
    jenkins.set_build(format!("{BASE}/job/odd/3"), BuildDetail::builder().build());
    jenkins.set_build(format!("{BASE}/job/build-x/6"), failed_build());
    let watcher = Watcher::new(jenkins, notifier.clone());

    let odd = |color: &str| JobSummary {
        color: Some(color.into()),
        ..job("odd", BallColor::Blue, Some(3))
    };
    let result = watcher.notify_job(BASE, odd("plaid")).await;
    assert!(matches!(result, Err(ChainError::Status(_))));

    let old = snapshot([odd("blue"), job("build-x", BallColor::Blue, Some(5))]);
    let new = snapshot([odd("plaid"), job("build-x", BallColor::Red, Some(6))]);
    join_all(watcher.process(&settings(&["odd", "build-x"]), &new, Some(&old))).await;

    let calls = notifier.calls();
    assert_eq!(calls.len(), 1);
    assert_eq!(calls[0].payload.title, "build-x #6");
}

#[tokio::test]
async fn finished_build_notifies_without_job_color() {
    let jenkins = FakeJenkinsAdapter::new();
    let notifier = FakeNotifyAdapter::new();
    jenkins.set_build(format!("{BASE}/job/team"), failed_build());
    let watcher = Watcher::new(jenkins, notifier.clone());

    watcher.notify_job(BASE, folder("team")).await.unwrap();

    assert_eq!(notifier.calls()[0].payload.icon_url, "img/red.png");
}
