//! Tests for subcommand parsing.

use super::parse;
use crate::cli::{Cli, CliCommand};
use clap::Parser;
use std::path::Path;

#[test]
fn cli_parse_watch_defaults() {
    match parse(&["ladder", "watch"]).command {
        CliCommand::Watch {
            interval_secs,
            cycles,
        } => {
            assert!(interval_secs.is_none());
            assert!(cycles.is_none());
        }
        _ => panic!("expected Watch"),
    }
}

#[test]
fn cli_parse_watch_interval_and_cycles() {
    match parse(&["ladder", "watch", "--interval-secs", "30", "--cycles", "2"]).command {
        CliCommand::Watch {
            interval_secs,
            cycles,
        } => {
            assert_eq!(interval_secs, Some(30));
            assert_eq!(cycles, Some(2));
        }
        _ => panic!("expected Watch with options"),
    }
}

#[test]
fn cli_parse_once() {
    assert!(matches!(parse(&["ladder", "once"]).command, CliCommand::Once));
}

#[test]
fn cli_parse_fetch() {
    assert!(matches!(parse(&["ladder", "fetch"]).command, CliCommand::Fetch));
}

#[test]
fn cli_parse_render() {
    match parse(&["ladder", "render", "board.csv"]).command {
        CliCommand::Render { path } => assert_eq!(path, Path::new("board.csv")),
        _ => panic!("expected Render"),
    }
}

#[test]
fn cli_parse_checksum() {
    match parse(&["ladder", "checksum", "/tmp/sheet.csv"]).command {
        CliCommand::Checksum { path } => assert_eq!(path, Path::new("/tmp/sheet.csv")),
        _ => panic!("expected Checksum"),
    }
}

#[test]
fn cli_parse_global_flags_after_subcommand() {
    let cli = parse(&[
        "ladder",
        "once",
        "--url",
        "https://example.com/pub?output=csv",
        "--dest",
        "/tmp/sheet.csv",
        "--skip-malformed",
    ]);
    assert_eq!(cli.url.as_deref(), Some("https://example.com/pub?output=csv"));
    assert_eq!(cli.dest.as_deref(), Some(Path::new("/tmp/sheet.csv")));
    assert!(cli.skip_malformed);
}

#[test]
fn cli_requires_subcommand() {
    assert!(Cli::try_parse_from(["ladder"]).is_err());
}

#[test]
fn cli_rejects_non_numeric_interval() {
    assert!(Cli::try_parse_from(["ladder", "watch", "--interval-secs", "soon"]).is_err());
}
