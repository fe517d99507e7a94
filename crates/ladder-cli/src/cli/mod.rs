//! CLI for the ladder leaderboard watcher.

mod commands;

use anyhow::Result;
use clap::{Parser, Subcommand};
use ladder_core::config::{self, LadderConfig, MalformedPolicy};
use std::path::PathBuf;

use commands::{run_checksum, run_fetch, run_once, run_render, run_watch};

/// Top-level CLI for ladder.
#[derive(Debug, Parser)]
#[command(name = "ladder")]
#[command(about = "Ladder: watch a published sheet and print a best-time leaderboard", long_about = None)]
pub struct Cli {
    /// Published CSV URL (overrides config and GOOGLE_SHEETS_URL).
    #[arg(long, global = true, value_name = "URL")]
    pub url: Option<String>,

    /// Local file the sheet is downloaded to (overrides config and LOCAL_FILENAME).
    #[arg(long, global = true, value_name = "PATH")]
    pub dest: Option<PathBuf>,

    /// Skip rows with a malformed time instead of failing the whole cycle.
    #[arg(long, global = true)]
    pub skip_malformed: bool,

    #[command(subcommand)]
    pub command: CliCommand,
}

#[derive(Debug, Subcommand)]
pub enum CliCommand {
    /// Fetch and print the leaderboard on a fixed cycle until interrupted.
    Watch {
        /// Seconds to wait between cycles (default from config, 600).
        #[arg(long, value_name = "SECS")]
        interval_secs: Option<u64>,
        /// Stop after N cycles instead of running forever.
        #[arg(long, value_name = "N")]
        cycles: Option<u64>,
    },

    /// Run a single fetch-and-print cycle.
    Once,

    /// Print the leaderboard for a local CSV file without fetching.
    Render {
        /// Path to the CSV file.
        path: PathBuf,
    },

    /// Download the sheet once and report where it was written.
    Fetch,

    /// Compute SHA-256 of a file (e.g. the downloaded sheet).
    Checksum {
        /// Path to the file.
        path: PathBuf,
    },
}

/// Flag overrides win over environment and config file values.
pub fn apply_overrides(cfg: &mut LadderConfig, cli: &Cli) {
    if let Some(url) = &cli.url {
        cfg.source_url = url.clone();
    }
    if let Some(dest) = &cli.dest {
        cfg.local_path = dest.clone();
    }
    if cli.skip_malformed {
        cfg.on_malformed = MalformedPolicy::Skip;
    }
    if let CliCommand::Watch {
        interval_secs: Some(secs),
        ..
    } = cli.command
    {
        cfg.interval_secs = secs;
    }
}

impl CliCommand {
    pub fn run_from_args() -> Result<()> {
        let cli = Cli::parse();
        let mut cfg = config::load_or_init()?;
        cfg.apply_process_env();
        apply_overrides(&mut cfg, &cli);
        tracing::debug!("resolved config: {:?}", cfg);

        match cli.command {
            CliCommand::Watch { cycles, .. } => {
                cfg.validate()?;
                run_watch(cfg, cycles)?;
            }
            CliCommand::Once => {
                cfg.validate()?;
                run_once(cfg)?;
            }
            CliCommand::Render { path } => run_render(&path, cfg.on_malformed)?,
            CliCommand::Fetch => {
                cfg.validate()?;
                run_fetch(&cfg)?;
            }
            CliCommand::Checksum { path } => run_checksum(&path)?,
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests;
