//! Core domain types and shared logic for flashui.
//!
//! This crate defines the canonical data model used across the other crates:
//! - Build artifacts and bundle entries
//! - Header identifier derivation
//! - Hex byte-array rendering
//! - Content-type resolution
//! - Header text rendering
//! - Configuration types

pub mod artifact;
pub mod config;
pub mod content_type;
pub mod error;
pub mod header;
pub mod hexdump;
pub mod identifier;

pub use artifact::{Artifact, Bundle, BundleEntry};
pub use config::EmbedConfig;
pub use content_type::resolve_content_type;
pub use error::{Error, Result};
pub use header::{render_header, GeneratedHeader};
pub use hexdump::hexdump;
pub use identifier::HeaderIdent;

/// Bytes rendered per row of the embedded array literal.
pub const HEX_BYTES_PER_ROW: usize = 16;

/// Default file-name prefix for generated headers.
pub const DEFAULT_HEADER_PREFIX: &str = "ui_";

/// Fallback MIME type when no override is given and inference fails.
pub const FALLBACK_CONTENT_TYPE: &str = "application/octet-stream";
