//! Regexes built once from constant expressions.

use super::ascii_classes::ascii_classes;
use super::comments::SpanSet;
use regex::{Captures, Match, Regex};
use tracing::error;

/// A regex compiled from a built-in expression, typically held in a
/// `once_cell::sync::Lazy` static.
///
/// An expression that fails to compile is logged and then matches nothing,
/// so analysis stays total. Unit tests compile every built-in expression.
#[derive(Debug, Clone)]
pub struct StaticRegex {
    regex: Option<Regex>,
}

impl StaticRegex {
    /// Compiles `expr` with ASCII `\w`, `\d` and `\b`, logging on failure.
    #[must_use]
    pub fn new(expr: &str) -> Self {
        let regex = Regex::new(&ascii_classes(expr))
            .map_err(|e| error!("Invalid built-in regex {:?}: {}", expr, e))
            .ok();
        Self { regex }
    }

    /// Returns the compiled regex, `None` if compilation failed.
    #[must_use]
    pub fn as_regex(&self) -> Option<&Regex> {
        self.regex.as_ref()
    }

    /// Returns true if the expression compiled.
    #[must_use]
    pub fn is_valid(&self) -> bool {
        self.regex.is_some()
    }

    /// Returns true if `text` matches.
    #[must_use]
    pub fn is_match(&self, text: &str) -> bool {
        self.regex.as_ref().is_some_and(|re| re.is_match(text))
    }

    /// Returns the first match's captures.
    #[must_use]
    pub fn captures<'h>(&self, text: &'h str) -> Option<Captures<'h>> {
        self.regex.as_ref()?.captures(text)
    }

    /// Iterates over the captures of every non-overlapping match.
    pub fn captures_iter<'a>(&'a self, text: &'a str) -> impl Iterator<Item = Captures<'a>> + 'a {
        self.regex.iter().flat_map(move |re| re.captures_iter(text))
    }

    /// Iterates over every non-overlapping match.
    pub fn find_iter<'a>(&'a self, text: &'a str) -> impl Iterator<Item = Match<'a>> + 'a {
        self.regex.iter().flat_map(move |re| re.find_iter(text))
    }

    /// Collects the match spans into a [`SpanSet`].
    #[must_use]
    pub fn span_set(&self, text: &str) -> SpanSet {
        self.regex
            .as_ref()
            .map_or_else(SpanSet::default, |re| SpanSet::from_matches(text, re))
    }
}
