//! Logging init: file under the XDG state dir, or stderr.
//!
//! Failure diagnostics (the underlying network/storage messages the user
//! never sees in a notice) land here.

use anyhow::Result;
use std::fs;
use std::io;
use tracing_subscriber::EnvFilter;

fn env_filter() -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info,imbed=debug"))
}

/// Initialize structured logging to `~/.local/state/imbed/imbed.log`.
/// Returns Err when the state dir is unusable so the caller can fall back to
/// [`init_logging_stderr`].
pub fn init_logging() -> Result<()> {
    let state_home = xdg::BaseDirectories::with_prefix("imbed")?.get_state_home();
    fs::create_dir_all(&state_home)?;
    let log_path = state_home.join("imbed.log");

    let file = fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(&log_path)?;

    // Each log line gets a fresh handle; if the clone fails mid-run, fall
    // back to stderr rather than dropping the line.
    let writer = move || -> Box<dyn io::Write + Send> {
        match file.try_clone() {
            Ok(f) => Box::new(f),
            Err(_) => Box::new(io::stderr()),
        }
    };

    tracing_subscriber::fmt()
        .with_env_filter(env_filter())
        .with_writer(writer)
        .with_ansi(false)
        .init();

    tracing::info!("imbed logging initialized at {}", log_path.display());

    Ok(())
}

/// Initialize logging to stderr only (no file). Use when [`init_logging`]
/// fails so the host doesn't crash.
pub fn init_logging_stderr() {
    tracing_subscriber::fmt()
        .with_env_filter(env_filter())
        .with_writer(io::stderr)
        .with_ansi(false)
        .init();
}
