//! Fetch-and-persist orchestration.
//!
//! Ensures the target directory exists, fetches the image, and writes the
//! body under the generated filename. One attempt per call: failures are
//! terminal and carry the originating message. Runs in the current thread;
//! call from `spawn_blocking` if used from async code.

use crate::filename::{self, NamingPolicy};
use crate::host::{Fetcher, Vault};

/// One download request, constructed fresh per paste event.
#[derive(Debug, Clone)]
pub struct DownloadRequest {
    pub source_url: String,
    /// Vault-relative target directory; empty means the vault root.
    pub target_directory: String,
    pub policy: NamingPolicy,
}

/// Failure surfaced by [`download_and_save`]. The two kinds are shown to the
/// user identically; the distinction exists for diagnostics.
#[derive(Debug, thiserror::Error)]
pub enum DownloadError {
    #[error("network: {0}")]
    Network(String),
    #[error("storage: {0}")]
    Storage(#[from] std::io::Error),
}

/// Downloads `request.source_url` and saves it into the vault, returning the
/// vault-relative path of the written file.
///
/// A non-2xx status fails with a message identifying the status text; no
/// write is attempted in that case. An existing file at the target path is
/// overwritten silently; repeated pastes of the same URL without a
/// timestamped naming policy replace earlier downloads.
pub fn download_and_save(
    vault: &dyn Vault,
    fetcher: &dyn Fetcher,
    request: &DownloadRequest,
) -> Result<String, DownloadError> {
    let directory = request.target_directory.as_str();
    if !directory.is_empty() && !vault.exists(directory) {
        vault.create_dir(directory)?;
    }

    let name = filename::generate_filename(&request.source_url, &request.policy);
    let full_path = if directory.is_empty() {
        name
    } else {
        format!("{}/{}", directory, name)
    };

    let response = fetcher
        .get(&request.source_url)
        .map_err(|e| DownloadError::Network(format!("{:#}", e)))?;
    if !response.is_success() {
        return Err(DownloadError::Network(format!(
            "GET {} returned HTTP {} {}",
            request.source_url, response.status, response.status_text
        )));
    }

    vault.write_binary(&full_path, &response.body)?;
    tracing::debug!(
        "saved {} ({} bytes) as {}",
        request.source_url,
        response.body.len(),
        full_path
    );
    Ok(full_path)
}
