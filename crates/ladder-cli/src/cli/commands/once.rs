//! `ladder once` – a single fetch-and-print cycle.

use anyhow::Result;
use ladder_core::config::LadderConfig;
use ladder_core::cycle::CycleRunner;
use ladder_core::scheduler::ThreadSleeper;
use std::io;

/// Failed fetches and builds are reported on the console, not as an exit error.
pub fn run_once(cfg: LadderConfig) -> Result<()> {
    let mut runner = CycleRunner::new(cfg);
    let outcome = runner.run_cycle(&mut io::stdout().lock(), &ThreadSleeper)?;
    tracing::info!(?outcome, "cycle finished");
    Ok(())
}
