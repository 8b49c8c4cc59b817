//! File store collaborator: byte-blob persistence keyed by filename under a
//! configured root directory.

use std::io;
use std::path::{Path, PathBuf};

/// Read/write access to files under a fixed root directory.
///
/// The store is the only collaborator shared between connections. It keeps
/// no state beyond the root path, so cloning is cheap, and nothing is cached
/// across requests. Concurrent access to the same filename is serialized by
/// the filesystem.
#[derive(Debug, Clone)]
pub struct FileStore {
    root: PathBuf,
}

impl FileStore {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Reads the named file's bytes, or `None` if no such file exists.
    pub async fn read(&self, name: &str) -> io::Result<Option<Vec<u8>>> {
        match tokio::fs::read(self.root.join(name)).await {
            Ok(bytes) => Ok(Some(bytes)),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e),
        }
    }

    /// Writes the named file, creating it if absent and truncating it if
    /// present. Never appends.
    pub async fn write(&self, name: &str, bytes: &[u8]) -> io::Result<()> {
        tokio::fs::write(self.root.join(name), bytes).await
    }
}
