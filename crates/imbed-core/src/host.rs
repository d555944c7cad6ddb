//! Collaborator interfaces supplied by the host application.
//!
//! The paste pipeline only depends on these traits and does not know which
//! host (editor plugin, CLI, test double) sits behind them. All traits are
//! sync; the async boundary lives in the paste handler, which bridges with
//! `spawn_blocking` where needed.

use std::io;

/// Storage collaborator: the host's vault. Paths are vault-relative and
/// forward-slash separated.
pub trait Vault: Send + Sync {
    /// True if a file or directory exists at `path`.
    fn exists(&self, path: &str) -> bool;

    /// Creates the directory at `path`, including missing parents.
    fn create_dir(&self, path: &str) -> io::Result<()>;

    /// Writes `bytes` to `path`, overwriting any existing file.
    fn write_binary(&self, path: &str, bytes: &[u8]) -> io::Result<()>;

    /// Host-wide default attachment directory, used when the settings leave
    /// the attachment folder empty.
    fn attachment_folder(&self) -> String;
}

/// Network collaborator: a plain HTTP GET.
///
/// Trait-level errors are transport failures (DNS, connect, TLS). Status
/// policy (what to do with a 404) belongs to the caller, so non-2xx
/// responses are returned as values, not errors.
pub trait Fetcher: Send + Sync {
    fn get(&self, url: &str) -> anyhow::Result<HttpResponse>;
}

/// A fully-buffered HTTP response.
#[derive(Debug, Clone)]
pub struct HttpResponse {
    pub status: u32,
    /// Reason phrase, e.g. "Not Found" for 404.
    pub status_text: String,
    pub body: Vec<u8>,
}

impl HttpResponse {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Editor collaborator: inserts the local-embed markup at the cursor.
pub trait Editor: Send + Sync {
    fn insert_at_cursor(&self, text: &str);
}

/// Notification collaborator: transient notices and a yes/no prompt.
pub trait Notifier: Send + Sync {
    /// Shows a transient notice for roughly `duration_ms` milliseconds.
    fn show(&self, message: &str, duration_ms: u64);

    /// Presents a yes/no prompt and blocks until the user chooses.
    /// Dismissing the prompt without choosing counts as "no".
    fn confirm(&self, message: &str) -> bool;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn success_is_2xx_only() {
        let mut resp = HttpResponse {
            status: 200,
            status_text: "OK".to_string(),
            body: Vec::new(),
        };
        assert!(resp.is_success());
        resp.status = 204;
        assert!(resp.is_success());
        resp.status = 199;
        assert!(!resp.is_success());
        resp.status = 301;
        assert!(!resp.is_success());
        resp.status = 404;
        assert!(!resp.is_success());
    }
}
