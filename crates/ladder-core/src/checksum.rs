//! Artifact digests, used to note whether the sheet changed since the last cycle.

use anyhow::{Context, Result};
use sha2::{Digest, Sha256};
use std::fs::File;
use std::io::Read;
use std::path::Path;

const BUF_SIZE: usize = 8192;

/// SHA-256 of a file as lowercase hex, read in fixed-size chunks.
pub fn sha256_path(path: &Path) -> Result<String> {
    let mut f = File::open(path).with_context(|| format!("open {}", path.display()))?;
    let mut hasher = Sha256::new();
    let mut buf = [0u8; BUF_SIZE];
    loop {
        let n = f
            .read(&mut buf)
            .with_context(|| format!("read {}", path.display()))?;
        if n == 0 {
            break;
        }
        hasher.update(&buf[..n]);
    }
    Ok(hex::encode(hasher.finalize()))
}

/// How the newest artifact compares to the previous cycle's.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArtifactChange {
    First,
    Unchanged,
    Changed,
}

/// Remembers the digest of the last artifact seen.
#[derive(Debug, Default)]
pub struct DigestTracker {
    last: Option<String>,
}

impl DigestTracker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn last(&self) -> Option<&str> {
        self.last.as_deref()
    }

    /// Hash `path` and compare against the previous digest.
    pub fn observe(&mut self, path: &Path) -> Result<ArtifactChange> {
        let digest = sha256_path(path)?;
        let change = match self.last.as_deref() {
            None => ArtifactChange::First,
            Some(prev) if prev == digest => ArtifactChange::Unchanged,
            Some(_) => ArtifactChange::Changed,
        };
        self.last = Some(digest);
        Ok(change)
    }
}
