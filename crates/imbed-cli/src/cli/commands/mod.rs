mod check;
mod embed;
mod name;
mod paste;
mod settings;

pub use check::run_check;
pub use embed::run_embed;
pub use name::run_name;
pub use paste::run_paste;
pub use settings::run_settings;

use anyhow::Result;
use std::path::PathBuf;
use std::sync::Arc;

use imbed_core::clipboard::ClipboardPayload;
use imbed_core::config::Settings;
use imbed_core::fetch::CurlFetcher;
use imbed_core::paste::{PasteHandler, PasteOutcome};
use imbed_core::vault::FsVault;

use super::term::{StdoutEditor, TermNotifier};

/// Shared pipeline behind `paste` and `embed`: wire the terminal
/// collaborators, run one paste invocation, map the outcome to exit
/// behavior.
pub(crate) async fn embed_payload(
    payload: Option<ClipboardPayload>,
    vault_root: PathBuf,
    folder: Option<String>,
    settings: &Settings,
    assume_yes: bool,
) -> Result<()> {
    let mut settings = settings.clone();
    if assume_yes {
        settings.confirm_before_embed = false;
    }
    if let Some(folder) = folder {
        settings.attachment_folder = folder;
    }

    let handler = PasteHandler::new(
        Arc::new(FsVault::new(vault_root)),
        Arc::new(CurlFetcher::new()),
        Arc::new(StdoutEditor),
        Arc::new(TermNotifier),
    );

    match handler.handle_paste(payload, &settings).await {
        PasteOutcome::Ignored => {
            eprintln!("Not a direct image URL; nothing to embed.");
            Ok(())
        }
        PasteOutcome::Declined => {
            eprintln!("Embed declined.");
            Ok(())
        }
        // Markup and notice were already emitted by the collaborators.
        PasteOutcome::Embedded { .. } => Ok(()),
        PasteOutcome::Failed { message } => anyhow::bail!(message),
    }
}
