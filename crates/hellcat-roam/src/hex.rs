//! Fixed-width hexadecimal rendering.

/// Render `buf` as hex rows of `width` bytes.
///
/// Each row is an 8-digit zero-padded decimal offset, starting at
/// `offset_base`, followed by the row's bytes as space-separated
/// two-digit lowercase hex. The last row may be short.
pub fn render_hex(buf: &[u8], offset_base: u64, width: usize) -> impl Iterator<Item = String> + '_ {
    let width = width.max(1);
    buf.chunks(width).enumerate().map(move |(i, row)| {
        let offset = offset_base + (i * width) as u64;
        let bytes: Vec<String> = row.iter().map(|b| format!("{b:02x}")).collect();
        format!("{offset:08} {}", bytes.join(" "))
    })
}
