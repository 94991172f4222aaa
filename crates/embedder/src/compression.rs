//! Artifact compression.
//!
//! Gzip at maximum compression level, so the embedded payloads stay
//! small and the device can serve them with `Content-Encoding: gzip`
//! without recompressing.

use async_compression::tokio::write::GzipEncoder;
use async_compression::Level;
use bytes::Bytes;
use tokio::io::AsyncWriteExt;

/// Result of compressing artifact content.
#[derive(Debug, Clone)]
pub struct CompressedArtifact {
    /// The gzip-compressed data.
    pub data: Bytes,
    /// Size of the original content in bytes.
    pub source_len: usize,
}

/// Compress artifact content with gzip at maximum level.
///
/// A pure function of the input bytes: identical input always yields
/// identical compressed output. Empty input still produces a valid
/// (minimal) gzip stream.
pub async fn compress(content: &[u8]) -> std::io::Result<CompressedArtifact> {
    let mut encoder = GzipEncoder::with_quality(Vec::new(), Level::Best);
    encoder.write_all(content).await?;
    encoder.shutdown().await?;

    Ok(CompressedArtifact {
        source_len: content.len(),
        data: Bytes::from(encoder.into_inner()),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_compression::tokio::bufread::GzipDecoder;
    use tokio::io::AsyncReadExt;

    async fn gunzip(data: &[u8]) -> Vec<u8> {
        let mut decoder = GzipDecoder::new(data);
        let mut out = Vec::new();
        decoder.read_to_end(&mut out).await.unwrap();
        out
    }

    #[tokio::test]
    async fn round_trips_arbitrary_bytes() {
        let data: Vec<u8> = (0u8..=255).cycle().take(10_000).collect();
        let compressed = compress(&data).await.unwrap();
        assert_eq!(gunzip(&compressed.data).await, data);
        assert_eq!(compressed.source_len, data.len());
    }

    #[tokio::test]
    async fn compression_is_deterministic() {
        let data = b"the same input twice";
        let first = compress(data).await.unwrap();
        let second = compress(data).await.unwrap();
        assert_eq!(first.data, second.data);
    }

    #[tokio::test]
    async fn empty_input_yields_valid_gzip() {
        let compressed = compress(&[]).await.unwrap();
        assert!(!compressed.data.is_empty());
        assert_eq!(compressed.source_len, 0);
        assert_eq!(gunzip(&compressed.data).await, Vec::<u8>::new());
    }

    #[tokio::test]
    async fn repetitive_content_shrinks() {
        let data = "body { margin: 0; } ".repeat(200);
        let compressed = compress(data.as_bytes()).await.unwrap();
        assert!(compressed.data.len() < data.len());
    }
}
