//! Text utilities for working with grammar source text.
//!
//! Only ASCII whitespace is recognized; other Unicode spacing is kept as-is.

/// Check if a character is ASCII whitespace (space, tab, line feed, form feed, carriage return).
#[inline]
pub fn is_space(c: char) -> bool {
    c.is_ascii_whitespace()
}

/// Trim the text and collapse every internal whitespace run (including line
/// breaks) to a single space.
///
/// # Example
/// ```
/// use sqlkw::base::collapse_whitespace;
///
/// assert_eq!(collapse_whitespace("  SET\n   TRANSACTION  "), "SET TRANSACTION");
/// ```
pub fn collapse_whitespace(text: &str) -> String {
    let mut result = String::with_capacity(text.len());
    for word in text.split_ascii_whitespace() {
        if !result.is_empty() {
            result.push(' ');
        }
        result.push_str(word);
    }
    result
}

/// Split text into lines, keeping the line terminator attached and tracking
/// the byte offset of each line start.
pub fn lines_with_offsets(text: &str) -> impl Iterator<Item = (usize, &str)> {
    text.split_inclusive('\n').scan(0usize, |offset, line| {
        let start = *offset;
        *offset += line.len();
        Some((start, line))
    })
}

/// Strip a trailing `\n` or `\r\n` from a line.
#[inline]
pub fn line_content(line: &str) -> &str {
    line.trim_end_matches(['\n', '\r'])
}
