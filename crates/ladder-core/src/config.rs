use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::retry::RetryPolicy;

/// Environment variable that overrides `source_url`.
pub const ENV_SOURCE_URL: &str = "GOOGLE_SHEETS_URL";
/// Environment variable that overrides `local_path`.
pub const ENV_LOCAL_PATH: &str = "LOCAL_FILENAME";

/// Retry policy parameters (optional section in config.toml).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RetryConfig {
    /// Maximum number of attempts (including the first).
    pub max_attempts: u32,
    /// Backoff factor in seconds; the n-th retry waits factor * 2^(n-1).
    pub backoff_factor_secs: f64,
    /// Maximum backoff delay in seconds.
    pub max_delay_secs: u64,
    /// HTTP statuses that are retried; every other non-2xx status fails at once.
    pub retry_statuses: Vec<u32>,
}

impl Default for RetryConfig {
    fn default() -> Self {
        Self {
            max_attempts: 10,
            backoff_factor_secs: 1.0,
            max_delay_secs: 120,
            retry_statuses: vec![500, 502, 504],
        }
    }
}

impl RetryConfig {
    /// First backoff step. The factor must be finite, non-negative, and no
    /// larger than `max_delay_secs`.
    pub fn base_delay(&self) -> Result<Duration> {
        let factor = self.backoff_factor_secs;
        let delay = Duration::try_from_secs_f64(factor)
            .with_context(|| format!("retry.backoff_factor_secs out of range: {factor}"))?;
        if delay > Duration::from_secs(self.max_delay_secs) {
            anyhow::bail!(
                "retry.backoff_factor_secs ({factor}) exceeds retry.max_delay_secs ({})",
                self.max_delay_secs
            );
        }
        Ok(delay)
    }

    /// Policy for the fetcher. An out-of-range factor (rejected by
    /// `LadderConfig::validate`) backs off at the cap.
    pub fn policy(&self) -> RetryPolicy {
        let max_delay = Duration::from_secs(self.max_delay_secs);
        RetryPolicy {
            max_attempts: self.max_attempts.max(1),
            base_delay: self.base_delay().unwrap_or(max_delay),
            max_delay,
            retry_statuses: self.retry_statuses.clone(),
        }
    }
}

/// What the builder does with a row whose time (or required field) cannot be parsed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MalformedPolicy {
    /// Abort the whole build for the cycle.
    #[default]
    Strict,
    /// Drop the row with a warning and keep building.
    Skip,
}

/// Global configuration loaded from `~/.config/ladder/config.toml`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LadderConfig {
    /// Published CSV URL of the sheet.
    pub source_url: String,
    /// Where the downloaded sheet is written each cycle.
    pub local_path: PathBuf,
    /// Delay between the end of one cycle and the start of the next.
    pub interval_secs: u64,
    /// Receive/write chunk size in bytes.
    pub chunk_size: usize,
    /// TCP/TLS connect timeout for each attempt, in seconds.
    #[serde(default = "default_connect_timeout_secs")]
    pub connect_timeout_secs: u64,
    #[serde(default)]
    pub on_malformed: MalformedPolicy,
    #[serde(default)]
    pub retry: RetryConfig,
}

fn default_connect_timeout_secs() -> u64 {
    30
}

impl Default for LadderConfig {
    fn default() -> Self {
        Self {
            source_url: "default_google_sheets_url".to_string(),
            local_path: PathBuf::from("default_local_filename"),
            interval_secs: 600,
            chunk_size: 8192,
            connect_timeout_secs: default_connect_timeout_secs(),
            on_malformed: MalformedPolicy::Strict,
            retry: RetryConfig::default(),
        }
    }
}

impl LadderConfig {
    pub fn interval(&self) -> Duration {
        Duration::from_secs(self.interval_secs)
    }

    pub fn connect_timeout(&self) -> Duration {
        Duration::from_secs(self.connect_timeout_secs)
    }

    /// Apply `GOOGLE_SHEETS_URL` / `LOCAL_FILENAME` overrides from a variable lookup.
    /// Empty values are ignored.
    pub fn apply_env<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(url) = lookup(ENV_SOURCE_URL).filter(|v| !v.trim().is_empty()) {
            self.source_url = url;
        }
        if let Some(path) = lookup(ENV_LOCAL_PATH).filter(|v| !v.trim().is_empty()) {
            self.local_path = PathBuf::from(path);
        }
    }

    /// Same as `apply_env` against the process environment.
    pub fn apply_process_env(&mut self) {
        self.apply_env(|key| std::env::var(key).ok());
    }

    /// Startup checks: the source must be an absolute http(s) URL, the numeric
    /// settings must be usable, and the destination must be writable. Any
    /// failure is fatal to the process.
    pub fn validate(&self) -> Result<()> {
        crate::fetch::parse_source_url(&self.source_url)?;
        if self.chunk_size == 0 {
            anyhow::bail!("chunk_size must be greater than zero");
        }
        if self.connect_timeout_secs == 0 {
            anyhow::bail!("connect_timeout_secs must be greater than zero");
        }
        self.retry.base_delay()?;
        ensure_writable(&self.local_path)
    }
}

/// Open (without truncating) the destination to prove it can be written.
fn ensure_writable(path: &Path) -> Result<()> {
    fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .with_context(|| format!("destination not writable: {}", path.display()))?;
    Ok(())
}

pub fn config_path() -> Result<PathBuf> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("ladder")?;
    Ok(xdg_dirs.place_config_file("config.toml")?)
}

/// Load configuration from disk, creating a default file if none exists.
pub fn load_or_init() -> Result<LadderConfig> {
    load_or_init_at(&config_path()?)
}

pub fn load_or_init_at(path: &Path) -> Result<LadderConfig> {
    if !path.exists() {
        let default_cfg = LadderConfig::default();
        let toml = toml::to_string_pretty(&default_cfg)?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(path, toml)?;
        tracing::info!("created default config at {}", path.display());
        return Ok(default_cfg);
    }

    let data = fs::read_to_string(path)?;
    let cfg: LadderConfig =
        toml::from_str(&data).with_context(|| format!("invalid config {}", path.display()))?;
    Ok(cfg)
}
