//! Configuration types shared across crates.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::PathBuf;

/// Embedder configuration.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct EmbedConfig {
    /// Build output directory to scan (e.g. "ui/dist").
    #[serde(default = "default_dist_dir")]
    pub dist_dir: PathBuf,
    /// Destination directory for generated headers.
    /// Defaults to `<dist_dir>/../../src` when not set.
    #[serde(default)]
    pub out_dir: Option<PathBuf>,
    /// File-name prefix for generated headers.
    #[serde(default = "default_header_prefix")]
    pub header_prefix: String,
    /// Extension → MIME type overrides
    /// (e.g. "webmanifest" → "application/manifest+json").
    #[serde(default)]
    pub content_types: BTreeMap<String, String>,
    /// Delete previously generated headers that are no longer part of
    /// the bundle.
    #[serde(default)]
    pub prune: bool,
}

fn default_dist_dir() -> PathBuf {
    PathBuf::from("dist")
}

fn default_header_prefix() -> String {
    crate::DEFAULT_HEADER_PREFIX.to_string()
}

impl Default for EmbedConfig {
    fn default() -> Self {
        Self {
            dist_dir: default_dist_dir(),
            out_dir: None,
            header_prefix: default_header_prefix(),
            content_types: BTreeMap::new(),
            prune: false,
        }
    }
}

impl EmbedConfig {
    /// Create a configuration for a dist directory with defaults.
    pub fn new(dist_dir: impl Into<PathBuf>) -> Self {
        Self {
            dist_dir: dist_dir.into(),
            ..Self::default()
        }
    }

    /// Effective destination directory.
    ///
    /// The default mirrors the firmware layout the headers are consumed
    /// from: the `src/` directory two levels above the build root.
    pub fn effective_out_dir(&self) -> PathBuf {
        match &self.out_dir {
            Some(dir) => dir.clone(),
            None => self.dist_dir.join("..").join("..").join("src"),
        }
    }

    /// Validate configuration invariants.
    pub fn validate(&self) -> crate::Result<()> {
        if self.header_prefix.contains(['/', '\\']) || self.header_prefix.contains("..") {
            return Err(crate::Error::Config(format!(
                "header_prefix must not contain path components: {:?}",
                self.header_prefix
            )));
        }
        for (ext, mime) in &self.content_types {
            if ext.is_empty() || mime.is_empty() {
                return Err(crate::Error::Config(
                    "content_types entries must have a non-empty extension and MIME type"
                        .to_string(),
                ));
            }
        }
        Ok(())
    }

    /// Create a test configuration with explicit directories.
    ///
    /// **For testing only.**
    pub fn for_testing(dist_dir: impl Into<PathBuf>, out_dir: impl Into<PathBuf>) -> Self {
        Self {
            dist_dir: dist_dir.into(),
            out_dir: Some(out_dir.into()),
            ..Self::default()
        }
    }
}
