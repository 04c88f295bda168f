//! Conversions between byte offsets and UTF-16 columns within one line.

/// Number of UTF-16 code units in `text`.
pub fn utf16_len(text: &str) -> usize {
    text.encode_utf16().count()
}

/// Converts a byte offset in `text` into a UTF-16 column.
///
/// Offsets past the end, or inside a multi-byte character, resolve to the
/// column of the next character boundary.
pub fn byte_to_utf16(text: &str, byte: usize) -> usize {
    text.char_indices()
        .take_while(|(idx, _)| *idx < byte)
        .map(|(_, ch)| ch.len_utf16())
        .sum()
}

/// Converts a UTF-16 column in `text` into a byte offset.
///
/// Columns past the end clamp to `text.len()`. A column that splits a
/// surrogate pair resolves to the start of that character.
pub fn utf16_to_byte(text: &str, column: usize) -> usize {
    let mut units = 0;
    for (idx, ch) in text.char_indices() {
        let next = units + ch.len_utf16();
        if next > column {
            return idx;
        }
        units = next;
    }
    text.len()
}
