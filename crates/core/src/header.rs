//! Generated header rendering.

use crate::content_type::resolve_content_type;
use crate::error::Result;
use crate::hexdump::hexdump;
use crate::identifier::HeaderIdent;

/// Template for a generated header file.
///
/// Placeholders: `{length_constant}`, `{array_constant}`,
/// `{serve_function}`, `{length}`, `{array}`, `{content_type}`.
/// The C braces are literal text; only the placeholders are replaced.
const HEADER_TEMPLATE: &str = r#"/*
 * Binary array for the Web UI.
 * Gzip is used for smaller size and improved speeds.
 */

// Autogenerated do not edit!!
const uint16_t {length_constant} = {length};
const uint8_t {array_constant}[] PROGMEM = {
{array}
};

void {serve_function}(AsyncWebServerRequest* request) {
  AsyncWebServerResponse *response = request->beginResponse_P(200, "{content_type}", {array_constant}, {length_constant});
  response->addHeader(F("Content-Encoding"), "gzip");
  request->send(response);
}
"#;

/// A rendered header for one artifact.
#[derive(Debug, Clone)]
pub struct GeneratedHeader {
    /// Identifier set used in the header.
    pub ident: HeaderIdent,
    /// MIME type embedded in the serving function.
    pub content_type: String,
    /// Compressed payload length in bytes.
    pub byte_len: usize,
    /// Full header text.
    pub text: String,
}

/// Render the header for compressed artifact content.
///
/// Output is byte-for-byte reproducible for identical inputs.
pub fn render_header(
    compressed: &[u8],
    file_name: &str,
    content_type: Option<&str>,
) -> Result<GeneratedHeader> {
    let ident = HeaderIdent::derive(file_name)?;
    let content_type = resolve_content_type(file_name, content_type);

    // Longer placeholders first: {length} would otherwise match inside
    // {length_constant}, and {array} inside {array_constant}.
    let text = HEADER_TEMPLATE
        .replace("{length_constant}", &ident.length_constant())
        .replace("{array_constant}", &ident.array_constant())
        .replace("{serve_function}", &ident.serve_function())
        .replace("{length}", &compressed.len().to_string())
        .replace("{array}", &hexdump(compressed))
        .replace("{content_type}", &content_type);

    Ok(GeneratedHeader {
        ident,
        content_type,
        byte_len: compressed.len(),
        text,
    })
}
