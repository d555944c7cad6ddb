//! `imbed embed <url>` – download and embed a specific image URL.

use anyhow::Result;
use std::path::PathBuf;

use imbed_core::clipboard::ClipboardPayload;
use imbed_core::config::Settings;

use super::embed_payload;

pub async fn run_embed(
    url: &str,
    vault_root: PathBuf,
    folder: Option<String>,
    settings: &Settings,
    assume_yes: bool,
) -> Result<()> {
    let payload = Some(ClipboardPayload::from_text(url));
    embed_payload(payload, vault_root, folder, settings, assume_yes).await
}
