//! CLI parse tests.

use super::{Cli, CliCommand};
use clap::Parser;
use std::path::PathBuf;

fn parse(args: &[&str]) -> CliCommand {
    let cli = Cli::try_parse_from(args).unwrap();
    cli.command
}

#[test]
fn cli_parse_paste_defaults() {
    match parse(&["imbed", "paste"]) {
        CliCommand::Paste { vault, folder, yes } => {
            assert!(vault.is_none());
            assert!(folder.is_none());
            assert!(!yes);
        }
        _ => panic!("expected Paste"),
    }
}

#[test]
fn cli_parse_paste_with_flags() {
    match parse(&["imbed", "paste", "--vault", "/notes", "--folder", "media", "--yes"]) {
        CliCommand::Paste { vault, folder, yes } => {
            assert_eq!(vault, Some(PathBuf::from("/notes")));
            assert_eq!(folder.as_deref(), Some("media"));
            assert!(yes);
        }
        _ => panic!("expected Paste with flags"),
    }
}

#[test]
fn cli_parse_embed() {
    match parse(&["imbed", "embed", "https://example.com/pic.png", "--yes"]) {
        CliCommand::Embed {
            url,
            vault,
            folder,
            yes,
        } => {
            assert_eq!(url, "https://example.com/pic.png");
            assert!(vault.is_none());
            assert!(folder.is_none());
            assert!(yes);
        }
        _ => panic!("expected Embed"),
    }
}

#[test]
fn cli_parse_check() {
    match parse(&["imbed", "check", "https://example.com/pic.png"]) {
        CliCommand::Check { candidate } => {
            assert_eq!(candidate, "https://example.com/pic.png");
        }
        _ => panic!("expected Check"),
    }
}

#[test]
fn cli_parse_name() {
    match parse(&["imbed", "name", "https://example.com/pic.png"]) {
        CliCommand::Name { url } => assert_eq!(url, "https://example.com/pic.png"),
        _ => panic!("expected Name"),
    }
}

#[test]
fn cli_parse_settings() {
    match parse(&["imbed", "settings"]) {
        CliCommand::Settings => {}
        _ => panic!("expected Settings"),
    }
}

#[test]
fn cli_rejects_unknown_command() {
    assert!(Cli::try_parse_from(["imbed", "frobnicate"]).is_err());
}
