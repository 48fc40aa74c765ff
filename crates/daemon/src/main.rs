// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! jwd: watch a Jenkins server and raise desktop notifications when watched
//! jobs change.

use jw_adapters::{DesktopNotifyAdapter, HttpJenkinsAdapter};
use jw_daemon::{env, logging, DaemonError, Poller, Settings, SnapshotStore};
use tracing::{error, info};

/// File name of the persisted job list inside the state directory
const STORE_FILE: &str = "jobs.json";

#[tokio::main]
async fn main() {
    if let Err(e) = run().await {
        error!(error = %e, "jwd failed to start");
        eprintln!("jwd: {e}");
        std::process::exit(1);
    }
}

async fn run() -> Result<(), DaemonError> {
    let state_dir = env::state_dir()?;
    let config_path = env::config_path()?;
    let _guard = logging::init(&state_dir, &env::log_filter())?;

    // Connection options and icons are fixed at startup; the watch list,
    // URL and interval are re-read every cycle.
    let settings = Settings::load(&config_path)?;
    info!(
        config = %config_path.display(),
        state = %state_dir.display(),
        url = %settings.url,
        watched = settings.watch_list.len(),
        "starting jwd"
    );

    let jenkins = HttpJenkinsAdapter::new(settings.jenkins_config())?;
    let notifier = DesktopNotifyAdapter::new(settings.icon_dir.clone());
    let store = SnapshotStore::new(state_dir.join(STORE_FILE));

    let poller =
        Poller::new(config_path, store, jenkins, notifier).with_interval(env::poll_interval());
    poller
        .run(async {
            if let Err(e) = tokio::signal::ctrl_c().await {
                error!(error = %e, "failed to listen for ctrl-c");
                std::future::pending::<()>().await;
            }
        })
        .await;

    info!("jwd stopped");
    Ok(())
}
