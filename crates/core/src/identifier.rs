//! Header identifier derivation from artifact file names.

use crate::error::{Error, Result};

/// Identifier set derived from an artifact file name.
///
/// For `index.js` the base is `index_js`, the array constant
/// `INDEX_JS`, the length constant `INDEX_JS_L`, and the serving
/// function `serveIndexJs`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeaderIdent {
    base: String,
}

impl HeaderIdent {
    /// Derive identifiers from a file name.
    ///
    /// Every character outside `[A-Za-z0-9_]` is replaced with an
    /// underscore, so punctuation and path separators cannot leak into
    /// the generated header.
    pub fn derive(file_name: &str) -> Result<Self> {
        if file_name.is_empty() {
            return Err(Error::InvalidArtifactName("empty file name".to_string()));
        }
        Ok(Self {
            base: sanitize(file_name),
        })
    }

    /// The sanitized base, casing preserved (e.g. `index_js`).
    pub fn base(&self) -> &str {
        &self.base
    }

    /// Name of the byte-array constant (e.g. `INDEX_JS`).
    pub fn array_constant(&self) -> String {
        self.base.to_uppercase()
    }

    /// Name of the length constant (e.g. `INDEX_JS_L`).
    pub fn length_constant(&self) -> String {
        format!("{}_L", self.base.to_uppercase())
    }

    /// Name of the serving function (e.g. `serveIndexJs`).
    pub fn serve_function(&self) -> String {
        format!("serve{}", pascal_case(&self.base))
    }
}

/// Replace every character outside `[A-Za-z0-9_]` with an underscore.
fn sanitize(name: &str) -> String {
    name.chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() || c == '_' {
                c
            } else {
                '_'
            }
        })
        .collect()
}

/// Capitalize each underscore-delimited segment and drop the separators.
fn pascal_case(base: &str) -> String {
    base.split('_')
        .filter(|segment| !segment.is_empty())
        .map(|segment| {
            let mut chars = segment.chars();
            match chars.next() {
                Some(first) => first.to_ascii_uppercase().to_string() + chars.as_str(),
                None => String::new(),
            }
        })
        .collect()
}
