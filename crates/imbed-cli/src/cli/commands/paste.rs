//! `imbed paste` – embed the image URL currently on the system clipboard.

use anyhow::Result;
use std::path::PathBuf;

use imbed_core::clipboard::ClipboardPayload;
use imbed_core::config::Settings;

use super::embed_payload;

pub async fn run_paste(
    vault_root: PathBuf,
    folder: Option<String>,
    settings: &Settings,
    assume_yes: bool,
) -> Result<()> {
    embed_payload(read_clipboard(), vault_root, folder, settings, assume_yes).await
}

/// Reads the system clipboard's plain-text representation, if any. An
/// unavailable clipboard (headless session) is the same as an empty one:
/// the paste is simply ignored.
fn read_clipboard() -> Option<ClipboardPayload> {
    let mut clipboard = match arboard::Clipboard::new() {
        Ok(clipboard) => clipboard,
        Err(e) => {
            tracing::debug!("clipboard unavailable: {}", e);
            return None;
        }
    };
    match clipboard.get_text() {
        Ok(text) => Some(ClipboardPayload::from_text(text)),
        Err(e) => {
            tracing::debug!("no clipboard text: {}", e);
            Some(ClipboardPayload::empty())
        }
    }
}
