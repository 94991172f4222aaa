//! Test fixtures for building dist directories and decoding headers.

use async_compression::tokio::bufread::GzipDecoder;
use std::path::Path;
use tokio::io::AsyncReadExt;

/// Write a typical small web build into `dist`.
///
/// Layout: one JS chunk, one stylesheet, one HTML page, one nested
/// asset, and a source map that must be skipped.
pub async fn write_web_build(dist: &Path) {
    tokio::fs::create_dir_all(dist.join("assets")).await.unwrap();
    tokio::fs::write(dist.join("index.js"), "console.log('hi');\n")
        .await
        .unwrap();
    tokio::fs::write(dist.join("index.js.map"), "{\"version\":3}")
        .await
        .unwrap();
    tokio::fs::write(dist.join("bundle.css"), "body { margin: 0; }\n")
        .await
        .unwrap();
    tokio::fs::write(dist.join("index.html"), "<!doctype html><html></html>")
        .await
        .unwrap();
    tokio::fs::write(dist.join("assets").join("logo.svg"), "<svg></svg>")
        .await
        .unwrap();
}

/// Decompress a gzip stream.
/// Note: #[allow(dead_code)] because each test file compiles common/
/// separately.
#[allow(dead_code)]
pub async fn gunzip(data: &[u8]) -> Vec<u8> {
    let mut decoder = GzipDecoder::new(data);
    let mut out = Vec::new();
    decoder.read_to_end(&mut out).await.unwrap();
    out
}

/// Extract the embedded byte array from generated header text.
///
/// Note: #[allow(dead_code)] because each test file compiles common/
/// separately.
#[allow(dead_code)]
pub fn embedded_bytes(header: &str) -> Vec<u8> {
    let start = header.find("= {").expect("array literal not found");
    let end = header[start..].find("};").expect("array literal not closed") + start;
    header[start + 3..end]
        .split(',')
        .map(str::trim)
        .filter(|token| !token.is_empty())
        .map(|token| {
            u8::from_str_radix(token.trim_start_matches("0x"), 16).expect("bad hex literal")
        })
        .collect()
}

/// Extract the declared length constant from generated header text.
#[allow(dead_code)]
pub fn declared_length(header: &str) -> usize {
    let line = header
        .lines()
        .find(|line| line.contains("const uint16_t"))
        .expect("length constant not found");
    line.rsplit_once("= ")
        .and_then(|(_, value)| value.trim_end_matches(';').parse().ok())
        .expect("bad length constant")
}
