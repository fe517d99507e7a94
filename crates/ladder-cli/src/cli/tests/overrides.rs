//! Tests for flag overrides on top of the loaded config.

use super::parse;
use crate::cli::apply_overrides;
use ladder_core::config::{LadderConfig, MalformedPolicy};
use std::path::PathBuf;

#[test]
fn no_flags_keep_config() {
    let mut cfg = LadderConfig::default();
    apply_overrides(&mut cfg, &parse(&["ladder", "once"]));
    assert_eq!(cfg, LadderConfig::default());
}

#[test]
fn flags_replace_url_dest_and_policy() {
    let mut cfg = LadderConfig::default();
    let cli = parse(&[
        "ladder",
        "--url",
        "https://example.com/a.csv",
        "--dest",
        "out.csv",
        "--skip-malformed",
        "once",
    ]);
    apply_overrides(&mut cfg, &cli);
    assert_eq!(cfg.source_url, "https://example.com/a.csv");
    assert_eq!(cfg.local_path, PathBuf::from("out.csv"));
    assert_eq!(cfg.on_malformed, MalformedPolicy::Skip);
}

#[test]
fn watch_interval_overrides_config() {
    let mut cfg = LadderConfig::default();
    apply_overrides(&mut cfg, &parse(&["ladder", "watch", "--interval-secs", "45"]));
    assert_eq!(cfg.interval_secs, 45);
}
