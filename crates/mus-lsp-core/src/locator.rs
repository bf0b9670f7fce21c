//! Identifier lookup at a cursor offset

use std::ops::Range;

/// Regex for one identifier: a letter or `_`, then any run of
/// [`is_identifier_char`] characters
pub(crate) const IDENTIFIER_PATTERN: &str = r"[\p{Alphabetic}_][\p{Alphabetic}\p{N}_]*";

/// Letters, digits and `_` in the Unicode sense
pub fn is_identifier_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_'
}

/// Byte span of the identifier touching `offset`
///
/// The span joins the identifier run ending at `offset` with the run starting
/// at it, so a cursor inside a word resolves the whole word. Returns `None`
/// when neither side of the cursor is an identifier character.
pub fn word_span_at(text: &str, offset: usize) -> Option<Range<usize>> {
    let mut cursor = offset.min(text.len());
    while !text.is_char_boundary(cursor) {
        cursor -= 1;
    }

    let start = text[..cursor]
        .char_indices()
        .rev()
        .take_while(|(_, c)| is_identifier_char(*c))
        .last()
        .map(|(i, _)| i)
        .unwrap_or(cursor);

    let end = text[cursor..]
        .char_indices()
        .find(|(_, c)| !is_identifier_char(*c))
        .map(|(i, _)| cursor + i)
        .unwrap_or(text.len());

    if start < end {
        Some(start..end)
    } else {
        None
    }
}

/// The identifier touching `offset`, if any
pub fn word_at(text: &str, offset: usize) -> Option<&str> {
    word_span_at(text, offset).map(|span| &text[span])
}
