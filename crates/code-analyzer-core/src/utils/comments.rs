//! Comment region helpers.
//!
//! Comments are blanked rather than removed so that byte offsets in the
//! blanked text map one-to-one onto the original source.

use regex::Regex;
use std::ops::Range;

/// Returns the byte ranges of every match of `re` in `text`.
#[must_use]
pub fn match_spans(text: &str, re: &Regex) -> Vec<Range<usize>> {
    re.find_iter(text).map(|m| m.range()).collect()
}

/// Replaces every byte of the given spans with a space, keeping newlines.
///
/// Multi-byte characters become one space per byte, so the output has the
/// same length as the input and every offset stays valid.
#[must_use]
pub fn blank_spans(text: &str, spans: &[Range<usize>]) -> String {
    let mut out = String::with_capacity(text.len());
    let mut last = 0;
    for span in spans {
        if span.start < last {
            continue;
        }
        out.push_str(&text[last..span.start]);
        for c in text[span.clone()].chars() {
            if c == '\n' {
                out.push('\n');
            } else {
                out.extend(std::iter::repeat(' ').take(c.len_utf8()));
            }
        }
        last = span.end;
    }
    out.push_str(&text[last..]);
    out
}

/// Sorted, non-overlapping byte ranges with fast membership tests.
#[derive(Debug, Clone, Default)]
pub struct SpanSet {
    spans: Vec<Range<usize>>,
}

impl SpanSet {
    /// Collects the matches of `re` in `text`.
    #[must_use]
    pub fn from_matches(text: &str, re: &Regex) -> Self {
        Self {
            spans: match_spans(text, re),
        }
    }

    /// Returns true if `offset` falls inside any span.
    #[must_use]
    pub fn contains(&self, offset: usize) -> bool {
        let index = self.spans.partition_point(|s| s.end <= offset);
        self.spans.get(index).is_some_and(|s| s.start <= offset)
    }

    /// Returns the spans.
    #[must_use]
    pub fn spans(&self) -> &[Range<usize>] {
        &self.spans
    }

    /// Returns a copy of `text` with every span blanked.
    #[must_use]
    pub fn blank(&self, text: &str) -> String {
        blank_spans(text, &self.spans)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn line_comments() -> Regex {
        Regex::new(r"//.*").unwrap()
    }

    #[test]
    fn blanking_preserves_length_and_newlines() {
        let text = "a // é\nb";
        let blanked = SpanSet::from_matches(text, &line_comments()).blank(text);
        assert_eq!(blanked.len(), text.len());
        assert_eq!(blanked, "a      \nb");
    }

    #[test]
    fn multi_line_spans_keep_line_breaks() {
        let re = Regex::new(r"/\*[\s\S]*?\*/").unwrap();
        let text = "x /* one\ntwo */ y";
        let blanked = SpanSet::from_matches(text, &re).blank(text);
        assert_eq!(blanked, "x       \n       y");
    }

    #[test]
    fn membership() {
        let text = "ab // cd\nef // gh";
        let set = SpanSet::from_matches(text, &line_comments());
        assert!(!set.contains(0));
        assert!(set.contains(3));
        assert!(set.contains(7));
        assert!(!set.contains(8));
        assert!(set.contains(12));
    }
}
