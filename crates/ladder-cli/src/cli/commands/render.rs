//! `ladder render` – print the leaderboard for a local CSV.

use anyhow::Result;
use ladder_core::config::MalformedPolicy;
use ladder_core::cycle::{self, CycleOutcome};
use std::io;
use std::path::Path;

pub fn run_render(path: &Path, policy: MalformedPolicy) -> Result<()> {
    let outcome = cycle::render_artifact(path, policy, &mut io::stdout().lock())?;
    if outcome == CycleOutcome::Empty {
        tracing::info!("nothing to show for {}", path.display());
    }
    Ok(())
}
