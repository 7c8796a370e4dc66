//! Splitting of declaration lists while tracking source offsets.

/// A trimmed slice of source text together with its byte offset.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Segment<'a> {
    /// The text, without surrounding whitespace.
    pub text: &'a str,
    /// Byte offset of `text` in the original source.
    pub offset: usize,
}

impl<'a> Segment<'a> {
    /// Creates a trimmed segment from `text` found at `offset`.
    #[must_use]
    pub fn new(text: &'a str, offset: usize) -> Self {
        let trimmed_start = text.trim_start();
        let leading = text.len() - trimmed_start.len();
        Self {
            text: trimmed_start.trim_end(),
            offset: offset + leading,
        }
    }

    /// Returns true if the segment has no text.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// Returns the part before the first `delimiter`, or the whole segment.
    #[must_use]
    pub fn before(self, delimiter: char) -> Self {
        match self.text.find(delimiter) {
            Some(i) => Self::new(&self.text[..i], self.offset),
            None => self,
        }
    }

    /// Returns the part after the first `delimiter`, if present.
    #[must_use]
    pub fn after(self, delimiter: char) -> Option<Self> {
        self.text.find(delimiter).map(|i| {
            let start = i + delimiter.len_utf8();
            Self::new(&self.text[start..], self.offset + start)
        })
    }

    /// Removes a leading `prefix` if present.
    #[must_use]
    pub fn strip_prefix(self, prefix: &str) -> Self {
        match self.text.strip_prefix(prefix) {
            Some(rest) => Self::new(rest, self.offset + prefix.len()),
            None => self,
        }
    }

    /// Returns the last whitespace-separated word.
    #[must_use]
    pub fn last_word(self) -> Self {
        match self.text.rfind(char::is_whitespace) {
            Some(i) => {
                let start = i + self.text[i..].chars().next().map_or(1, char::len_utf8);
                Self::new(&self.text[start..], self.offset + start)
            }
            None => self,
        }
    }

    /// Returns the first whitespace-separated word.
    #[must_use]
    pub fn first_word(self) -> Self {
        match self.text.find(char::is_whitespace) {
            Some(i) => Self::new(&self.text[..i], self.offset),
            None => self,
        }
    }

    /// Returns the segment without its first and last characters when it
    /// is wrapped in `open` and `close`.
    #[must_use]
    pub fn unwrap_brackets(self, open: char, close: char) -> Option<Self> {
        let inner = self.text.strip_prefix(open)?.strip_suffix(close)?;
        Some(Self::new(inner, self.offset + open.len_utf8()))
    }
}

/// Splits `text` on `separator` at bracket depth zero.
///
/// `brackets` lists the `(open, close)` pairs that nest. Each piece is
/// trimmed and carries its offset, with `base` being the offset of `text`
/// in the full source. Empty pieces are kept.
#[must_use]
pub fn split_top_level<'a>(
    text: &'a str,
    base: usize,
    separator: char,
    brackets: &[(char, char)],
) -> Vec<Segment<'a>> {
    let mut segments = Vec::new();
    let mut depth = 0usize;
    let mut start = 0;

    for (i, c) in text.char_indices() {
        if brackets.iter().any(|&(open, _)| open == c) {
            depth += 1;
        } else if brackets.iter().any(|&(_, close)| close == c) {
            depth = depth.saturating_sub(1);
        } else if c == separator && depth == 0 {
            segments.push(Segment::new(&text[start..i], base + start));
            start = i + c.len_utf8();
        }
    }
    segments.push(Segment::new(&text[start..], base + start));
    segments
}
