use std::ops::Range as ByteRange;

use tower_lsp::lsp_types::{Position, Range};

/// Represents an open document in the LSP server
///
/// Positions follow the protocol: zero-based lines and UTF-16 columns.
/// Offsets are byte offsets into [`Document::text`].
pub struct Document {
    /// The current text content of the document
    text: String,
    /// Byte offset of the start of each line (cached for position calculations)
    line_starts: Vec<usize>,
}

impl Document {
    pub fn new(text: String) -> Self {
        let line_starts = compute_line_starts(&text);
        Self { text, line_starts }
    }

    pub fn update_text(&mut self, new_text: String) {
        self.line_starts = compute_line_starts(&new_text);
        self.text = new_text;
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    /// Byte range of a line's content, without its line terminator
    fn line_bounds(&self, line: usize) -> Option<(usize, usize)> {
        let start = *self.line_starts.get(line)?;
        let mut end = self
            .line_starts
            .get(line + 1)
            .map(|next| next - 1)
            .unwrap_or(self.text.len());
        if self.text[start..end].ends_with('\r') {
            end -= 1;
        }
        Some((start, end))
    }

    /// Get byte offset from position
    ///
    /// Columns past the end of the line clamp to the line end, lines past the
    /// end of the document clamp to the end of the text.
    pub fn offset_at(&self, position: Position) -> usize {
        let Some((start, end)) = self.line_bounds(position.line as usize) else {
            return self.text.len();
        };

        let target = position.character as usize;
        let mut units = 0;
        for (i, c) in self.text[start..end].char_indices() {
            if units >= target {
                return start + i;
            }
            units += c.len_utf16();
        }
        end
    }

    /// Get position from byte offset
    pub fn position_at(&self, offset: usize) -> Position {
        let mut offset = offset.min(self.text.len());
        while !self.text.is_char_boundary(offset) {
            offset -= 1;
        }

        let line = self
            .line_starts
            .partition_point(|&start| start <= offset)
            .saturating_sub(1);
        let start = self.line_starts[line];
        let character: usize = self.text[start..offset].chars().map(char::len_utf16).sum();

        Position::new(line as u32, character as u32)
    }

    pub fn range_of(&self, span: ByteRange<usize>) -> Range {
        Range::new(self.position_at(span.start), self.position_at(span.end))
    }

    /// The current line from its start up to the cursor
    pub fn line_prefix(&self, position: Position) -> &str {
        let Some((start, _)) = self.line_bounds(position.line as usize) else {
            return "";
        };
        &self.text[start..self.offset_at(position)]
    }
}

fn compute_line_starts(text: &str) -> Vec<usize> {
    std::iter::once(0)
        .chain(text.match_indices('\n').map(|(i, _)| i + 1))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_offset_at_simple() {
        let doc = Document::new("var x => integer = 5\nout(x)".to_string());
        assert_eq!(doc.offset_at(Position::new(0, 4)), 4);
        assert_eq!(doc.offset_at(Position::new(1, 4)), 25);
        assert_eq!(&doc.text()[25..26], "x");
    }

    #[test]
    fn test_offset_at_clamps() {
        let doc = Document::new("ab\ncd".to_string());
        assert_eq!(doc.offset_at(Position::new(0, 99)), 2);
        assert_eq!(doc.offset_at(Position::new(7, 0)), 5);
    }

    #[test]
    fn test_offset_at_utf16_columns() {
        // '😀' is two UTF-16 units and four bytes
        let doc = Document::new("😀x".to_string());
        assert_eq!(doc.offset_at(Position::new(0, 2)), 4);
        assert_eq!(doc.position_at(4), Position::new(0, 2));
    }

    #[test]
    fn test_crlf_lines() {
        let doc = Document::new("out(1)\r\nwarn(".to_string());
        assert_eq!(doc.offset_at(Position::new(0, 50)), 6);
        assert_eq!(doc.line_prefix(Position::new(1, 5)), "warn(");
    }

    #[test]
    fn test_line_prefix() {
        let doc = Document::new("x = 1\n  add(1, 2)".to_string());
        assert_eq!(doc.line_prefix(Position::new(1, 8)), "  add(1,");
        assert_eq!(doc.line_prefix(Position::new(9, 0)), "");
    }

    #[test]
    fn test_update_text() {
        let mut doc = Document::new("one".to_string());
        doc.update_text("one\ntwo\nthree".to_string());
        assert_eq!(doc.position_at(8), Position::new(2, 0));
    }

    #[test]
    fn test_range_of() {
        let doc = Document::new("fun a() { }\nclass Student { }".to_string());
        let range = doc.range_of(18..25);
        assert_eq!(range, Range::new(Position::new(1, 6), Position::new(1, 13)));
    }

    proptest! {
        #[test]
        fn prop_offset_at_lands_on_char_boundary(text in "[a-zé😀\n ]{0,30}", line in 0u32..6, character in 0u32..12) {
            let doc = Document::new(text.clone());
            let offset = doc.offset_at(Position::new(line, character));
            prop_assert!(offset <= text.len());
            prop_assert!(text.is_char_boundary(offset));
        }
    }
}
