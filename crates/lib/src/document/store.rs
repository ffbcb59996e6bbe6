//! Flat-file document storage.
//!
//! Every document is a single file directly under the store's root directory.
//! Nothing is cached: each call goes to the filesystem, so edits made outside
//! the application are picked up immediately. There is no locking; concurrent
//! writers to the same file race and the last write wins.

use std::{
    io::ErrorKind,
    path::{Path, PathBuf},
};

use chrono::{DateTime, Utc};
use tokio::fs;
use tracing::{debug, info};

use super::{
    errors::DocumentError,
    name::{is_routable, validate_new_name},
};
use crate::Result;

/// Filesystem metadata for a document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DocumentInfo {
    pub name: String,
    pub size: u64,
    pub modified: Option<DateTime<Utc>>,
}

/// A directory of documents.
#[derive(Debug, Clone)]
pub struct DocumentStore {
    root: PathBuf,
}

impl DocumentStore {
    /// Open the store rooted at `dir`, creating the directory if it is missing.
    pub async fn open(dir: impl AsRef<Path>) -> Result<Self> {
        let root = dir.as_ref().to_path_buf();
        fs::create_dir_all(&root).await?;
        debug!("Opened document store at {}", root.display());
        Ok(Self { root })
    }

    /// The directory this store reads and writes.
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Resolve a document name to its path, refusing names that could escape the root.
    fn path_for(&self, name: &str) -> Result<PathBuf> {
        if !is_routable(name) {
            return Err(DocumentError::InvalidPath {
                name: name.to_string(),
            }
            .into());
        }
        Ok(self.root.join(name))
    }

    /// List document names in sorted order.
    ///
    /// Only regular files are listed; subdirectories are ignored.
    pub async fn list(&self) -> Result<Vec<String>> {
        let mut names = Vec::new();
        let mut entries = fs::read_dir(&self.root).await?;
        while let Some(entry) = entries.next_entry().await? {
            if !entry.file_type().await?.is_file() {
                continue;
            }
            if let Ok(name) = entry.file_name().into_string() {
                names.push(name);
            }
        }
        names.sort();
        Ok(names)
    }

    /// List documents along with their size and modification time.
    pub async fn list_info(&self) -> Result<Vec<DocumentInfo>> {
        let mut infos = Vec::new();
        for name in self.list().await? {
            let metadata = fs::metadata(self.root.join(&name)).await?;
            infos.push(DocumentInfo {
                size: metadata.len(),
                modified: metadata.modified().ok().map(DateTime::<Utc>::from),
                name,
            });
        }
        Ok(infos)
    }

    /// Check whether a document exists.
    ///
    /// Names that cannot be routed never exist.
    pub async fn exists(&self, name: &str) -> Result<bool> {
        let Ok(path) = self.path_for(name) else {
            return Ok(false);
        };
        Ok(fs::try_exists(&path).await?)
    }

    /// Read a document's raw bytes.
    pub async fn read_bytes(&self, name: &str) -> Result<Vec<u8>> {
        let path = self.path_for(name)?;
        fs::read(&path).await.map_err(|e| not_found_or_io(e, name))
    }

    /// Read a document's content as text.
    ///
    /// Invalid UTF-8 sequences are replaced with U+FFFD.
    pub async fn read(&self, name: &str) -> Result<String> {
        let bytes = self.read_bytes(name).await?;
        Ok(match String::from_utf8(bytes) {
            Ok(text) => text,
            Err(e) => String::from_utf8_lossy(e.as_bytes()).into_owned(),
        })
    }

    /// Write a document's content, creating the file if it does not exist.
    pub async fn write(&self, name: &str, content: &str) -> Result<()> {
        let path = self.path_for(name)?;
        fs::write(&path, content).await?;
        info!("Updated document {name} ({} bytes)", content.len());
        Ok(())
    }

    /// Create an empty document.
    ///
    /// Surrounding whitespace is trimmed before validation. Returns the name
    /// the document was created under.
    pub async fn create(&self, name: &str) -> Result<String> {
        let name = name.trim();
        validate_new_name(name, &self.list().await?)?;
        let path = self.path_for(name)?;
        fs::write(&path, "").await?;
        info!("Created document {name}");
        Ok(name.to_string())
    }

    /// Delete a document.
    pub async fn delete(&self, name: &str) -> Result<()> {
        let path = self.path_for(name)?;
        fs::remove_file(&path)
            .await
            .map_err(|e| not_found_or_io(e, name))?;
        info!("Deleted document {name}");
        Ok(())
    }

    /// Copy the content of `source` into a new document named `target`.
    ///
    /// `target` is validated as a new name exactly as given, without trimming.
    /// The bytes are copied unchanged.
    pub async fn copy(&self, source: &str, target: &str) -> Result<()> {
        validate_new_name(target, &self.list().await?)?;
        let content = self.read_bytes(source).await?;
        let path = self.path_for(target)?;
        fs::write(&path, &content).await?;
        info!("Copied document {source} to {target}");
        Ok(())
    }

    /// Number of documents in the store.
    pub async fn count(&self) -> Result<usize> {
        Ok(self.list().await?.len())
    }
}

fn not_found_or_io(err: std::io::Error, name: &str) -> crate::Error {
    if err.kind() == ErrorKind::NotFound {
        DocumentError::NotFound {
            name: name.to_string(),
        }
        .into()
    } else {
        err.into()
    }
}
