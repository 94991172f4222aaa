//! Embedding pipeline for flashui.
//!
//! Turns a finalized web build into compressed C headers:
//! - Bundle scanning (classify build output into chunks and assets)
//! - Gzip compression at maximum level
//! - Header file output with optional stale-header pruning
//! - The [`Embedder`] orchestration type

pub mod compression;
pub mod embedder;
pub mod error;
pub mod scan;
pub mod writer;

pub use compression::{compress, CompressedArtifact};
pub use embedder::{Embedder, HeaderReport};
pub use error::{EmbedError, EmbedResult};
pub use scan::scan_bundle;
pub use writer::HeaderWriter;
