//! Byte offset to line/column conversion.

use std::fmt;

use text_size::TextSize;

/// A 1-based line and column. Columns count characters, not bytes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct LineCol {
    /// Line number, starting at 1.
    pub line: u32,
    /// Column number, starting at 1.
    pub col: u32,
}

impl fmt::Display for LineCol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.line, self.col)
    }
}

/// Start offsets of every line of a source text.
///
/// `\n`, `\r\n` and a lone `\r` each end a line, the same terminators the
/// lexer treats as newlines.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LineIndex {
    line_starts: Vec<TextSize>,
}

impl LineIndex {
    /// Indexes `source`.
    #[must_use]
    pub fn new(source: &str) -> Self {
        let mut line_starts = Vec::with_capacity(128);
        line_starts.push(TextSize::from(0));
        let bytes = source.as_bytes();
        for (idx, &byte) in bytes.iter().enumerate() {
            let ends_line = match byte {
                b'\n' => true,
                b'\r' => bytes.get(idx + 1) != Some(&b'\n'),
                _ => false,
            };
            if ends_line {
                line_starts.push(TextSize::from(u32::try_from(idx + 1).unwrap_or(u32::MAX)));
            }
        }
        Self { line_starts }
    }

    /// Number of lines, counting a trailing empty line.
    #[must_use]
    pub fn line_count(&self) -> usize {
        self.line_starts.len()
    }

    /// Converts a byte offset into `source`, which must be the text this
    /// index was built from. Offsets past the end clamp to the end; an
    /// offset inside a multi-byte character counts that character.
    #[must_use]
    pub fn line_col(&self, source: &str, offset: TextSize) -> LineCol {
        let offset = offset.min(TextSize::of(source));
        let line_idx = match self.line_starts.binary_search(&offset) {
            Ok(idx) => idx,
            Err(next) => next.saturating_sub(1),
        };
        let line_start = self
            .line_starts
            .get(line_idx)
            .copied()
            .unwrap_or_default();
        let prefix = source
            .get(usize::from(line_start)..usize::from(offset))
            .map_or_else(
                || count_chars_lossy(source, line_start, offset),
                |text| text.chars().count(),
            );
        LineCol {
            line: u32::try_from(line_idx + 1).unwrap_or(u32::MAX),
            col: u32::try_from(prefix + 1).unwrap_or(u32::MAX),
        }
    }
}

/// Character count for a range whose end is not on a char boundary.
fn count_chars_lossy(source: &str, start: TextSize, end: TextSize) -> usize {
    source
        .char_indices()
        .skip_while(|(idx, _)| *idx < usize::from(start))
        .take_while(|(idx, _)| *idx < usize::from(end))
        .count()
}
