//! Context types for rule execution.

use crate::language::Language;
use crate::types::Location;

/// Context provided to rules for one analysis call.
///
/// Holds the source text and a line index so rules can turn byte offsets
/// into 1-based line and column positions.
#[derive(Debug, Clone)]
pub struct SourceContext<'a> {
    /// Source text being analyzed.
    pub content: &'a str,
    /// Language the source is analyzed as.
    pub language: Language,
    line_starts: Vec<usize>,
}

impl<'a> SourceContext<'a> {
    /// Creates a new source context.
    #[must_use]
    pub fn new(content: &'a str, language: Language) -> Self {
        let line_starts = std::iter::once(0)
            .chain(content.match_indices('\n').map(|(i, _)| i + 1))
            .collect();
        Self {
            content,
            language,
            line_starts,
        }
    }

    /// Returns the 1-based `(line, column)` of a byte offset.
    ///
    /// Lines are delimited by `\n` only; the column counts characters since
    /// the last newline. Offsets past the end clamp to the end of the text.
    #[must_use]
    pub fn position(&self, offset: usize) -> (usize, usize) {
        let offset = self.floor_char_boundary(offset.min(self.content.len()));
        let index = self
            .line_starts
            .partition_point(|&start| start <= offset)
            .saturating_sub(1);
        let line_start = self.line_starts[index];
        let column = self.content[line_start..offset].chars().count() + 1;
        (index + 1, column)
    }

    /// Builds a [`Location`] for a span starting at `offset`.
    #[must_use]
    pub fn location(&self, offset: usize, length: usize) -> Location {
        let (line, column) = self.position(offset);
        Location::new(line, column).with_span(offset, length)
    }

    /// Returns the number of lines in the source.
    #[must_use]
    pub fn line_count(&self) -> usize {
        self.line_starts.len()
    }

    /// Iterates over `(line_number, byte_offset, line_text)` with `\n` removed.
    pub fn lines(&self) -> impl Iterator<Item = (usize, usize, &'a str)> + '_ {
        let content = self.content;
        self.line_starts.iter().enumerate().map(move |(i, &start)| {
            let end = self
                .line_starts
                .get(i + 1)
                .map_or(content.len(), |next| next - 1);
            (i + 1, start, &content[start..end])
        })
    }

    fn floor_char_boundary(&self, mut offset: usize) -> usize {
        while !self.content.is_char_boundary(offset) {
            offset -= 1;
        }
        offset
    }
}
