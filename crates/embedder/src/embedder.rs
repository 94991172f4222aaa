//! The embedding pipeline.
//!
//! Stateless apart from configuration: each run maps the bundle to
//! headers sequentially (compress, render, write, one entry at a time)
//! and fails fast on the first I/O error.

use crate::compression::compress;
use crate::error::EmbedResult;
use crate::scan::scan_bundle;
use crate::writer::HeaderWriter;
use flashui_core::{render_header, Artifact, Bundle, BundleEntry, EmbedConfig};
use std::collections::HashSet;
use std::path::PathBuf;
use tracing::{info, warn};

/// Report for one generated header.
#[derive(Debug, Clone)]
pub struct HeaderReport {
    /// Source artifact name.
    pub name: String,
    /// Path of the written header file.
    pub path: PathBuf,
    /// Compressed payload size in bytes.
    pub compressed_len: usize,
}

/// One-shot embedding pipeline.
pub struct Embedder {
    config: EmbedConfig,
}

impl Embedder {
    /// Create an embedder from configuration.
    pub fn new(config: EmbedConfig) -> Self {
        Self { config }
    }

    /// The embedder's configuration.
    pub fn config(&self) -> &EmbedConfig {
        &self.config
    }

    /// Scan the configured dist directory and embed everything in it.
    pub async fn run(&self) -> EmbedResult<Vec<HeaderReport>> {
        let bundle = scan_bundle(&self.config.dist_dir).await?;
        self.write_outputs(&bundle).await
    }

    /// Compress, render, and write one header per bundle entry.
    pub async fn write_outputs(&self, bundle: &Bundle) -> EmbedResult<Vec<HeaderReport>> {
        let writer = HeaderWriter::new(self.config.effective_out_dir()).await?;
        let mut reports = Vec::with_capacity(bundle.len());
        let mut written = HashSet::new();

        for (name, entry) in bundle {
            let artifact = self.artifact_for(name, entry);

            let compressed = compress(&artifact.content).await?;
            info!(
                name = %artifact.name,
                compressed_bytes = compressed.data.len(),
                "artifact compressed"
            );
            if compressed.data.len() > usize::from(u16::MAX) {
                warn!(
                    name = %artifact.name,
                    compressed_bytes = compressed.data.len(),
                    "compressed payload exceeds the 16-bit length constant"
                );
            }

            let header = render_header(
                &compressed.data,
                &artifact.name,
                artifact.content_type.as_deref(),
            )?;

            let file_name = format!("{}{}.h", self.config.header_prefix, header.ident.base());
            let path = writer.write(&file_name, &header.text).await?;
            info!(path = %path.display(), "header generated");

            written.insert(file_name);
            reports.push(HeaderReport {
                name: artifact.name,
                path,
                compressed_len: compressed.data.len(),
            });
        }

        if self.config.prune {
            let removed = writer.prune(&self.config.header_prefix, &written).await?;
            for path in &removed {
                info!(path = %path.display(), "stale header removed");
            }
        }

        Ok(reports)
    }

    /// Build the artifact for a bundle entry, applying configured
    /// content-type overrides.
    fn artifact_for(&self, name: &str, entry: &BundleEntry) -> Artifact {
        let content_type = extension(name)
            .and_then(|ext| self.config.content_types.get(ext))
            .cloned();

        Artifact {
            name: name.to_string(),
            content: entry.content(),
            content_type,
        }
    }
}

/// File-name extension, without the dot.
fn extension(name: &str) -> Option<&str> {
    name.rsplit_once('.').map(|(_, ext)| ext)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extension_takes_last_segment() {
        assert_eq!(extension("index.js"), Some("js"));
        assert_eq!(extension("app.min.css"), Some("css"));
        assert_eq!(extension("LICENSE"), None);
    }

    #[test]
    fn override_applies_by_extension() {
        let mut config = EmbedConfig::for_testing("dist", "out");
        config
            .content_types
            .insert("webmanifest".to_string(), "application/manifest+json".to_string());
        let embedder = Embedder::new(config);

        let entry = BundleEntry::Asset {
            source: bytes::Bytes::from_static(b"{}"),
        };
        let artifact = embedder.artifact_for("site.webmanifest", &entry);
        assert_eq!(
            artifact.content_type.as_deref(),
            Some("application/manifest+json")
        );

        let plain = embedder.artifact_for("index.html", &entry);
        assert!(plain.content_type.is_none());
    }
}
