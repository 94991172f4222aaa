//! Header file output.
//!
//! Plain overwrite semantics: each build rewrites every header
//! wholesale, there is no merge and no backup of prior content.

use crate::error::{EmbedError, EmbedResult};
use std::collections::HashSet;
use std::path::{Path, PathBuf};
use tokio::fs;
use tracing::instrument;

/// Writes generated headers into the destination directory.
pub struct HeaderWriter {
    out_dir: PathBuf,
}

impl HeaderWriter {
    /// Create a writer, creating the destination directory if missing.
    ///
    /// Directory creation is recursive and idempotent.
    pub async fn new(out_dir: impl AsRef<Path>) -> EmbedResult<Self> {
        let out_dir = out_dir.as_ref().to_path_buf();
        fs::create_dir_all(&out_dir).await?;
        Ok(Self { out_dir })
    }

    /// Destination directory.
    pub fn out_dir(&self) -> &Path {
        &self.out_dir
    }

    /// Full path for a header file name.
    ///
    /// Header names are derived from sanitized identifiers, so a name
    /// with path separators or `..` indicates a caller bug; reject it
    /// rather than write outside the destination directory.
    fn header_path(&self, file_name: &str) -> EmbedResult<PathBuf> {
        if file_name.is_empty() || file_name.contains(['/', '\\']) || file_name.contains("..") {
            return Err(EmbedError::InvalidFileName(file_name.to_string()));
        }
        Ok(self.out_dir.join(file_name))
    }

    /// Write a header file, overwriting any previous content.
    #[instrument(skip(self, text), fields(bytes = text.len()))]
    pub async fn write(&self, file_name: &str, text: &str) -> EmbedResult<PathBuf> {
        let path = self.header_path(file_name)?;
        fs::write(&path, text).await?;
        Ok(path)
    }

    /// Delete generated headers that are not in `keep`.
    ///
    /// Only files matching `<prefix>*.h` directly in the destination
    /// directory are considered; everything else is left alone.
    #[instrument(skip(self, keep))]
    pub async fn prune(&self, prefix: &str, keep: &HashSet<String>) -> EmbedResult<Vec<PathBuf>> {
        let mut removed = Vec::new();
        let mut entries = fs::read_dir(&self.out_dir).await?;

        while let Some(entry) = entries.next_entry().await? {
            if !entry.file_type().await?.is_file() {
                continue;
            }
            let name = entry.file_name().to_string_lossy().into_owned();
            if !name.starts_with(prefix) || !name.ends_with(".h") || keep.contains(&name) {
                continue;
            }
            fs::remove_file(entry.path()).await?;
            removed.push(entry.path());
        }

        Ok(removed)
    }
}
