//! Paste handling: the composition root.
//!
//! Wires extractor → classifier → confirmation → download → editor insert.
//! A paste that does not carry an image URL is ignored, which tells the host
//! to run its default paste behavior; anything past that gate suppresses the
//! default. Overlapping pastes are not coordinated: each invocation owns its
//! locals and whichever write finishes last wins on a shared target path.

use std::sync::Arc;

use crate::classify;
use crate::clipboard::{self, ClipboardPayload};
use crate::config::Settings;
use crate::download::{self, DownloadRequest};
use crate::host::{Editor, Fetcher, Notifier, Vault};

/// How long transient notices stay up.
pub const NOTICE_DURATION_MS: u64 = 4000;

/// Generic failure notice; the underlying cause goes to the log only.
const FAILURE_NOTICE: &str = "Failed to embed image";

/// Local-embed markup for a vault-relative path.
pub fn embed_markup(path: &str) -> String {
    format!("![[{}]]", path)
}

/// Exit state of one paste invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PasteOutcome {
    /// Not an image URL; the host's default paste behavior should proceed.
    Ignored,
    /// User declined the confirmation. Default behavior is already
    /// suppressed, so the pasted URL text is not inserted.
    Declined,
    /// Image saved and markup inserted at the cursor.
    Embedded { path: String },
    /// Download or save failed; a generic notice was shown, nothing inserted.
    Failed { message: String },
}

/// Composition root for paste events, held by the host for the plugin's
/// lifetime. Collaborators are shared handles so the blocking stages can run
/// on the blocking pool.
pub struct PasteHandler {
    vault: Arc<dyn Vault>,
    fetcher: Arc<dyn Fetcher>,
    editor: Arc<dyn Editor>,
    notifier: Arc<dyn Notifier>,
}

impl PasteHandler {
    pub fn new(
        vault: Arc<dyn Vault>,
        fetcher: Arc<dyn Fetcher>,
        editor: Arc<dyn Editor>,
        notifier: Arc<dyn Notifier>,
    ) -> Self {
        Self {
            vault,
            fetcher,
            editor,
            notifier,
        }
    }

    /// Handles one paste event. Settings are read at invocation start and
    /// never mutated here; an in-flight paste keeps the values it started
    /// with.
    pub async fn handle_paste(
        &self,
        payload: Option<ClipboardPayload>,
        settings: &Settings,
    ) -> PasteOutcome {
        let url = match clipboard::url_from_clipboard(payload.as_ref()) {
            Some(url) => url,
            None => return PasteOutcome::Ignored,
        };
        if !classify::is_image_url(&url) {
            return PasteOutcome::Ignored;
        }

        if settings.confirm_before_embed && !self.confirm_embed(&url).await {
            return PasteOutcome::Declined;
        }

        let directory = if settings.attachment_folder.is_empty() {
            self.vault.attachment_folder()
        } else {
            settings.attachment_folder.clone()
        };
        let request = DownloadRequest {
            source_url: url.clone(),
            target_directory: directory,
            policy: settings.naming_policy(),
        };

        let vault = Arc::clone(&self.vault);
        let fetcher = Arc::clone(&self.fetcher);
        let result = tokio::task::spawn_blocking(move || {
            download::download_and_save(vault.as_ref(), fetcher.as_ref(), &request)
        })
        .await;

        match result {
            Ok(Ok(path)) => {
                self.editor.insert_at_cursor(&embed_markup(&path));
                let notice = if settings.show_file_path {
                    format!("Image embedded: {}", path)
                } else {
                    "Image embedded".to_string()
                };
                self.notifier.show(&notice, NOTICE_DURATION_MS);
                PasteOutcome::Embedded { path }
            }
            Ok(Err(err)) => {
                tracing::warn!("embed failed for {}: {}", url, err);
                self.notifier.show(FAILURE_NOTICE, NOTICE_DURATION_MS);
                PasteOutcome::Failed {
                    message: err.to_string(),
                }
            }
            Err(join) => {
                tracing::warn!("embed task for {} did not complete: {}", url, join);
                self.notifier.show(FAILURE_NOTICE, NOTICE_DURATION_MS);
                PasteOutcome::Failed {
                    message: join.to_string(),
                }
            }
        }
    }

    /// Presents the yes/no prompt on the blocking pool. A prompt that goes
    /// away without an answer counts as "no".
    async fn confirm_embed(&self, url: &str) -> bool {
        let notifier = Arc::clone(&self.notifier);
        let prompt = format!("Download image and embed a local copy?\n{}", url);
        match tokio::task::spawn_blocking(move || notifier.confirm(&prompt)).await {
            Ok(choice) => choice,
            Err(join) => {
                tracing::warn!("confirmation prompt did not complete: {}", join);
                false
            }
        }
    }
}
