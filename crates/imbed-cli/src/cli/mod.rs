//! CLI host for the Imbed paste-to-embed image downloader.
//!
//! A reference wiring of the core's collaborator seams to a terminal: the
//! vault is a local directory, notices go to stderr, confirmation reads
//! stdin, and "insert at cursor" prints the embed markup to stdout.

mod commands;
mod term;

use anyhow::Result;
use clap::{Parser, Subcommand};
use imbed_core::config;
use std::path::PathBuf;

use commands::{run_check, run_embed, run_name, run_paste, run_settings};

/// Top-level CLI for the Imbed downloader.
#[derive(Debug, Parser)]
#[command(name = "imbed")]
#[command(about = "Imbed: paste-time image URL downloader and local embedder", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: CliCommand,
}

#[derive(Debug, Subcommand)]
pub enum CliCommand {
    /// Embed the image URL currently on the system clipboard.
    Paste {
        /// Vault root directory (default: current directory).
        #[arg(long, value_name = "DIR")]
        vault: Option<PathBuf>,

        /// Vault-relative attachment folder, overriding the settings value.
        #[arg(long, value_name = "FOLDER")]
        folder: Option<String>,

        /// Skip the confirmation prompt.
        #[arg(long)]
        yes: bool,
    },

    /// Download a specific image URL and print the embed markup.
    Embed {
        /// Direct HTTP/HTTPS image URL.
        url: String,

        /// Vault root directory (default: current directory).
        #[arg(long, value_name = "DIR")]
        vault: Option<PathBuf>,

        /// Vault-relative attachment folder, overriding the settings value.
        #[arg(long, value_name = "FOLDER")]
        folder: Option<String>,

        /// Skip the confirmation prompt.
        #[arg(long)]
        yes: bool,
    },

    /// Report whether a string classifies as a direct image URL.
    Check {
        /// Candidate string, e.g. a URL copied from a browser.
        candidate: String,
    },

    /// Print the filename the current naming policy generates for a URL.
    Name {
        /// Direct HTTP/HTTPS image URL.
        url: String,
    },

    /// Show the resolved settings and where they are stored.
    Settings,
}

impl CliCommand {
    pub async fn run_from_args() -> Result<()> {
        let cli = Cli::parse();
        let settings = config::load_or_init()?;
        tracing::debug!("loaded settings: {:?}", settings);

        match cli.command {
            CliCommand::Paste { vault, folder, yes } => {
                run_paste(vault_root(vault)?, folder, &settings, yes).await?
            }
            CliCommand::Embed {
                url,
                vault,
                folder,
                yes,
            } => run_embed(&url, vault_root(vault)?, folder, &settings, yes).await?,
            CliCommand::Check { candidate } => run_check(&candidate),
            CliCommand::Name { url } => run_name(&url, &settings),
            CliCommand::Settings => run_settings(&settings)?,
        }

        Ok(())
    }
}

fn vault_root(arg: Option<PathBuf>) -> Result<PathBuf> {
    match arg {
        Some(dir) => Ok(dir),
        None => Ok(std::env::current_dir()?),
    }
}

#[cfg(test)]
mod tests;
