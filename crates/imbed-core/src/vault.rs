//! Filesystem-backed vault.
//!
//! Resolves vault-relative, forward-slash paths against a root directory.
//! Writes overwrite in place; there is no temp-then-rename step because the
//! whole body is buffered before the single write.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use crate::host::Vault;

/// Default attachment directory inside the vault.
const DEFAULT_ATTACHMENT_FOLDER: &str = "attachments";

/// A vault rooted at a local directory.
#[derive(Debug, Clone)]
pub struct FsVault {
    root: PathBuf,
    attachment_folder: String,
}

impl FsVault {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            attachment_folder: DEFAULT_ATTACHMENT_FOLDER.to_string(),
        }
    }

    /// Overrides the host-wide default attachment directory.
    pub fn with_attachment_folder(mut self, folder: impl Into<String>) -> Self {
        self.attachment_folder = folder.into();
        self
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    fn resolve(&self, rel: &str) -> PathBuf {
        let mut path = self.root.clone();
        for part in rel.split('/').filter(|s| !s.is_empty()) {
            path.push(part);
        }
        path
    }
}

impl Vault for FsVault {
    fn exists(&self, path: &str) -> bool {
        self.resolve(path).exists()
    }

    fn create_dir(&self, path: &str) -> io::Result<()> {
        fs::create_dir_all(self.resolve(path))
    }

    fn write_binary(&self, path: &str, bytes: &[u8]) -> io::Result<()> {
        fs::write(self.resolve(path), bytes)
    }

    fn attachment_folder(&self) -> String {
        self.attachment_folder.clone()
    }
}
