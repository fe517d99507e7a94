//! `ladder fetch` – download the sheet once.

use anyhow::{Context, Result};
use ladder_core::config::LadderConfig;
use ladder_core::fetch::Fetcher;
use ladder_core::scheduler::ThreadSleeper;

pub fn run_fetch(cfg: &LadderConfig) -> Result<()> {
    let artifact = Fetcher::from_config(cfg)
        .fetch(&cfg.source_url, &ThreadSleeper)
        .with_context(|| format!("fetching {}", cfg.source_url))?;
    println!(
        "{}  {} bytes  ({} attempt(s))",
        artifact.path.display(),
        artifact.bytes,
        artifact.attempts
    );
    Ok(())
}
