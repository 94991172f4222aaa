//! Build artifacts and bundle entries.

use bytes::Bytes;
use std::collections::BTreeMap;

/// A single finalized build output.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Artifact {
    /// Output file name, including extension (e.g. "index.js").
    pub name: String,
    /// Raw content bytes.
    pub content: Bytes,
    /// Explicit MIME type override. `None` means infer from the extension.
    pub content_type: Option<String>,
}

impl Artifact {
    /// Create an artifact with inferred content type.
    pub fn new(name: impl Into<String>, content: impl Into<Bytes>) -> Self {
        Self {
            name: name.into(),
            content: content.into(),
            content_type: None,
        }
    }

    /// Set an explicit content type, bypassing extension inference.
    pub fn with_content_type(mut self, content_type: impl Into<String>) -> Self {
        self.content_type = Some(content_type.into());
        self
    }
}

/// A bundle entry as classified by the build orchestrator.
///
/// Only these two kinds are embedded; anything else in the build output
/// (source maps and the like) is skipped during scanning and never
/// enters a [`Bundle`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BundleEntry {
    /// Generated code with text content.
    Chunk {
        /// The chunk's code as UTF-8 text.
        code: String,
    },
    /// A static file, possibly binary.
    Asset {
        /// The asset's raw bytes.
        source: Bytes,
    },
}

impl BundleEntry {
    /// Content bytes of the entry.
    pub fn content(&self) -> Bytes {
        match self {
            BundleEntry::Chunk { code } => Bytes::copy_from_slice(code.as_bytes()),
            BundleEntry::Asset { source } => source.clone(),
        }
    }

    /// Content length in bytes.
    pub fn len(&self) -> usize {
        match self {
            BundleEntry::Chunk { code } => code.len(),
            BundleEntry::Asset { source } => source.len(),
        }
    }

    /// Whether the entry has no content.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Finalized build output, keyed by output file name.
///
/// Iteration order is the lexicographic order of the map, which makes
/// processing and log output deterministic across runs.
pub type Bundle = BTreeMap<String, BundleEntry>;
