//! `ladder watch` – fetch and print the leaderboard on a fixed cycle.

use anyhow::Result;
use ladder_core::config::LadderConfig;
use ladder_core::cycle::CycleRunner;
use ladder_core::scheduler::{Scheduler, ThreadSleeper};
use std::io;

pub fn run_watch(cfg: LadderConfig, cycles: Option<u64>) -> Result<()> {
    let interval = cfg.interval();
    tracing::info!(
        url = %cfg.source_url,
        dest = %cfg.local_path.display(),
        interval_secs = interval.as_secs(),
        "watch starting"
    );
    let mut runner = CycleRunner::new(cfg).with_schedule(interval);
    let scheduler = Scheduler::new(interval, ThreadSleeper);

    let stdout = io::stdout();
    let ran = scheduler.run(cycles, |n, sleeper| {
        let mut out = stdout.lock();
        match runner.run_cycle(&mut out, sleeper) {
            Ok(outcome) => tracing::info!(cycle = n, ?outcome, "cycle finished"),
            Err(e) => tracing::error!(cycle = n, "console write failed: {:#}", e),
        }
    });
    tracing::info!("watch stopped after {} cycle(s)", ran);
    Ok(())
}
