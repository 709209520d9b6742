//! Local disk storage for uploaded files.
//!
//! Files land under `<root>/<images|files>/<year>/<month>/` with a UUID-based
//! stored name that keeps the original extension. Stored names are generated once
//! per upload and never reused.

use std::path::{Path, PathBuf};

use chrono::{DateTime, Datelike, Utc};
use tokio::fs;
use uuid::Uuid;

/// Top-level partition a file is stored under.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileKind {
    Image,
    File,
}

impl FileKind {
    /// Classifies by content type, falling back to the extension of `original_name`.
    pub fn classify(content_type: Option<&str>, original_name: &str) -> Self {
        let mime = match content_type {
            Some(ct) => ct.to_string(),
            None => mime_guess::from_path(original_name)
                .first_or_octet_stream()
                .to_string(),
        };

        if mime.starts_with("image/") {
            Self::Image
        } else {
            Self::File
        }
    }

    fn dir_name(self) -> &'static str {
        match self {
            Self::Image => "images",
            Self::File => "files",
        }
    }
}

#[derive(Debug, Clone)]
pub struct LocalFileStore {
    root: PathBuf,
}

impl LocalFileStore {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Directory, relative to the root, for a file of `kind` stored at `now`.
    pub fn relative_dir(kind: FileKind, now: DateTime<Utc>) -> PathBuf {
        PathBuf::from(kind.dir_name())
            .join(format!("{:04}", now.year()))
            .join(format!("{:02}", now.month()))
    }

    /// Fresh stored name: a v4 UUID plus the original extension, if any.
    pub fn stored_name(original_name: &str) -> String {
        let id = Uuid::new_v4();
        match Path::new(original_name)
            .extension()
            .and_then(|ext| ext.to_str())
            .filter(|ext| !ext.is_empty())
        {
            Some(ext) => format!("{}.{}", id, ext.to_ascii_lowercase()),
            None => id.to_string(),
        }
    }

    /// Writes `bytes` to `relative_dir/stored_name`, creating directories as needed.
    ///
    /// Returns the path relative to the root, which is what gets persisted.
    pub async fn write(
        &self,
        relative_dir: &Path,
        stored_name: &str,
        bytes: &[u8],
    ) -> std::io::Result<PathBuf> {
        let dir = self.root.join(relative_dir);
        fs::create_dir_all(&dir).await?;

        let relative_path = relative_dir.join(stored_name);
        fs::write(self.root.join(&relative_path), bytes).await?;

        Ok(relative_path)
    }

    pub async fn read(&self, relative_path: &Path) -> std::io::Result<Vec<u8>> {
        fs::read(self.root.join(relative_path)).await
    }

    /// Removes a stored file; a file that is already gone is not an error.
    pub async fn remove(&self, relative_path: &Path) -> std::io::Result<()> {
        match fs::remove_file(self.root.join(relative_path)).await {
            Err(e) if e.kind() != std::io::ErrorKind::NotFound => Err(e),
            _ => Ok(()),
        }
    }
}
