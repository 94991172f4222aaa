//! MIME content-type resolution for artifact file names.

use crate::FALLBACK_CONTENT_TYPE;
use tracing::warn;

/// Resolve the MIME type for a file name.
///
/// An explicit override always wins. Otherwise the type is inferred
/// from the file-name extension; unrecognized extensions fall back to
/// `application/octet-stream` with a warning, so the rendered header
/// never embeds an unresolved value.
pub fn resolve_content_type(file_name: &str, explicit: Option<&str>) -> String {
    if let Some(explicit) = explicit {
        return explicit.to_string();
    }

    match mime_guess::from_path(file_name).first() {
        Some(mime) => mime.essence_str().to_string(),
        None => {
            warn!(
                file_name,
                fallback = FALLBACK_CONTENT_TYPE,
                "unrecognized extension, using fallback content type"
            );
            FALLBACK_CONTENT_TYPE.to_string()
        }
    }
}
