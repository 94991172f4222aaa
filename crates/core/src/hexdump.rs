//! C-style hex array rendering.

use crate::HEX_BYTES_PER_ROW;

/// Render bytes as rows of `0x..` literals, [`HEX_BYTES_PER_ROW`] per
/// row, two-space indent, rows joined with `,\n`, no trailing comma.
pub fn hexdump(bytes: &[u8]) -> String {
    let mut rows = Vec::with_capacity(bytes.len().div_ceil(HEX_BYTES_PER_ROW));
    for block in bytes.chunks(HEX_BYTES_PER_ROW) {
        let literals: Vec<String> = block.iter().map(|b| format!("0x{b:02x}")).collect();
        rows.push(format!("  {}", literals.join(", ")));
    }
    rows.join(",\n")
}
