//! Bundle scanning.
//!
//! Builds a [`Bundle`] from a build-output directory. `.js` files are
//! classified as chunks, source maps and dotfiles are skipped, and
//! everything else becomes an asset.

use crate::error::{EmbedError, EmbedResult};
use bytes::Bytes;
use flashui_core::{Bundle, BundleEntry};
use std::path::Path;
use tokio::fs;
use tracing::debug;

/// Scan a build-output directory into a bundle.
///
/// Entry names are paths relative to `dist_dir`, joined with `/`.
/// Ordering is the lexicographic order of the resulting map, so two
/// scans of the same tree always produce the same bundle.
pub async fn scan_bundle(dist_dir: &Path) -> EmbedResult<Bundle> {
    let mut bundle = Bundle::new();
    let mut stack = vec![dist_dir.to_path_buf()];

    while let Some(dir) = stack.pop() {
        let mut entries = fs::read_dir(&dir).await?;
        while let Some(entry) = entries.next_entry().await? {
            let path = entry.path();
            let file_type = entry.file_type().await?;
            if file_type.is_dir() {
                stack.push(path);
                continue;
            }
            if !file_type.is_file() {
                continue;
            }

            let name = relative_name(dist_dir, &path)?;
            match classify(&name) {
                Some(EntryKind::Chunk) => {
                    let raw = fs::read(&path).await?;
                    let code =
                        String::from_utf8(raw).map_err(|e| EmbedError::ChunkEncoding {
                            name: name.clone(),
                            source: e.utf8_error(),
                        })?;
                    bundle.insert(name, BundleEntry::Chunk { code });
                }
                Some(EntryKind::Asset) => {
                    let raw = fs::read(&path).await?;
                    bundle.insert(
                        name,
                        BundleEntry::Asset {
                            source: Bytes::from(raw),
                        },
                    );
                }
                None => {
                    debug!(name = %name, "skipping non-embeddable bundle entry");
                }
            }
        }
    }

    Ok(bundle)
}

enum EntryKind {
    Chunk,
    Asset,
}

/// Classify a bundle entry by file name.
///
/// Source maps and dotfiles are not embedded.
fn classify(name: &str) -> Option<EntryKind> {
    let file_name = name.rsplit('/').next().unwrap_or(name);
    if file_name.starts_with('.') {
        return None;
    }
    if name.ends_with(".map") {
        return None;
    }
    if name.ends_with(".js") || name.ends_with(".mjs") {
        return Some(EntryKind::Chunk);
    }
    Some(EntryKind::Asset)
}

/// Relative entry name for a scanned path, `/`-joined.
///
/// Rejects anything that is not a plain descending path.
fn relative_name(root: &Path, path: &Path) -> EmbedResult<String> {
    let rel = path.strip_prefix(root).map_err(|_| {
        EmbedError::InvalidFileName(format!("entry escapes bundle root: {}", path.display()))
    })?;

    let mut parts = Vec::new();
    for component in rel.components() {
        match component {
            std::path::Component::Normal(part) => parts.push(part.to_string_lossy().into_owned()),
            _ => {
                return Err(EmbedError::InvalidFileName(format!(
                    "unsafe path component in {}",
                    rel.display()
                )));
            }
        }
    }
    Ok(parts.join("/"))
}
