//! Embedder error types.

use thiserror::Error;

/// Embedding pipeline errors.
#[derive(Debug, Error)]
pub enum EmbedError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Core(#[from] flashui_core::Error),

    #[error("invalid header file name: {0}")]
    InvalidFileName(String),

    #[error("chunk {name} is not valid UTF-8: {source}")]
    ChunkEncoding {
        name: String,
        source: std::str::Utf8Error,
    },
}

/// Result type for embedder operations.
pub type EmbedResult<T> = std::result::Result<T, EmbedError>;
