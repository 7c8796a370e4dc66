//! Regex-driven pattern rules.
//!
//! A [`Pattern`] is a regular expression plus optional guards that stand in
//! for look-around assertions:
//!
//! - a capture group named `m` marks the reported span, so trailing context
//!   after it is checked but not consumed;
//! - `not_preceded_by` rejects a span whose preceding character is in a set;
//! - `not_followed_by` rejects a span when a regex matches right after it.
//!
//! A rejected candidate is retried one character after its start. An
//! accepted span resumes scanning at the span's end.

use crate::context::SourceContext;
use crate::rule::{Rule, Stage};
use crate::types::{Diagnostic, Severity};
use crate::utils::ascii_classes;
use regex::Regex;
use std::ops::Range;

/// Name of the capture group that marks the reported span.
pub const FOCUS_GROUP: &str = "m";

/// A compiled regular expression with look-around guards.
#[derive(Debug, Clone)]
pub struct Pattern {
    regex: Regex,
    not_preceded_by: Option<&'static str>,
    not_followed_by: Option<Regex>,
}

impl Pattern {
    /// Compiles a pattern without guards.
    ///
    /// `\w`, `\d` and `\b` take their ASCII meaning.
    ///
    /// # Errors
    ///
    /// Returns an error if the expression is not a valid regex.
    pub fn new(expr: &str) -> Result<Self, regex::Error> {
        Ok(Self {
            regex: Regex::new(&ascii_classes(expr))?,
            not_preceded_by: None,
            not_followed_by: None,
        })
    }

    /// Rejects spans whose preceding character is one of `chars`.
    #[must_use]
    pub fn not_preceded_by(mut self, chars: &'static str) -> Self {
        self.not_preceded_by = Some(chars);
        self
    }

    /// Rejects spans immediately followed by text matching `expr`.
    ///
    /// # Errors
    ///
    /// Returns an error if the expression is not a valid regex.
    pub fn not_followed_by(mut self, expr: &str) -> Result<Self, regex::Error> {
        self.not_followed_by = Some(Regex::new(&format!("^(?:{})", ascii_classes(expr)))?);
        Ok(self)
    }

    /// Returns the underlying expression.
    #[must_use]
    pub fn as_str(&self) -> &str {
        self.regex.as_str()
    }

    /// Returns all accepted spans in `text`, left to right.
    #[must_use]
    pub fn find_spans(&self, text: &str) -> Vec<Range<usize>> {
        let mut spans = Vec::new();
        let mut pos = 0;

        while pos <= text.len() {
            let Some(caps) = self.regex.captures_at(text, pos) else {
                break;
            };
            let Some(whole) = caps.get(0) else {
                break;
            };
            let span = caps.name(FOCUS_GROUP).map_or(whole.range(), |m| m.range());

            if self.accepts(text, &span) {
                pos = if span.end > span.start {
                    span.end
                } else {
                    next_boundary(text, span.end)
                };
                spans.push(span);
            } else {
                pos = next_boundary(text, whole.start());
            }
        }

        spans
    }

    fn accepts(&self, text: &str, span: &Range<usize>) -> bool {
        if let Some(chars) = self.not_preceded_by {
            if text[..span.start]
                .chars()
                .next_back()
                .is_some_and(|c| chars.contains(c))
            {
                return false;
            }
        }
        if let Some(guard) = &self.not_followed_by {
            if guard.is_match(&text[span.end..]) {
                return false;
            }
        }
        true
    }
}

fn next_boundary(text: &str, pos: usize) -> usize {
    text[pos..]
        .chars()
        .next()
        .map_or(text.len() + 1, |c| pos + c.len_utf8())
}

/// Declarative description of a pattern rule.
///
/// Profiles list these as constant tables; [`PatternSpec::compile`] turns
/// one into a runnable [`PatternRule`].
#[derive(Debug, Clone, Copy)]
pub struct PatternSpec {
    /// Rule code (e.g., "JS001").
    pub code: &'static str,
    /// Kebab-case rule name.
    pub name: &'static str,
    /// Severity of produced diagnostics.
    pub severity: Severity,
    /// Regular expression, optionally with a focus group named `m`.
    pub expr: &'static str,
    /// Diagnostic message.
    pub message: &'static str,
    /// Remediation suggestion.
    pub suggestion: &'static str,
    /// Characters that must not precede the reported span.
    pub not_preceded_by: Option<&'static str>,
    /// Expression that must not match right after the reported span.
    pub not_followed_by: Option<&'static str>,
}

impl PatternSpec {
    /// Creates a spec without guards.
    #[must_use]
    pub const fn new(
        code: &'static str,
        name: &'static str,
        severity: Severity,
        expr: &'static str,
        message: &'static str,
        suggestion: &'static str,
    ) -> Self {
        Self {
            code,
            name,
            severity,
            expr,
            message,
            suggestion,
            not_preceded_by: None,
            not_followed_by: None,
        }
    }

    /// Adds a `not_preceded_by` guard.
    #[must_use]
    pub const fn not_preceded_by(self, chars: &'static str) -> Self {
        Self {
            not_preceded_by: Some(chars),
            ..self
        }
    }

    /// Adds a `not_followed_by` guard.
    #[must_use]
    pub const fn not_followed_by(self, expr: &'static str) -> Self {
        Self {
            not_followed_by: Some(expr),
            ..self
        }
    }

    /// Compiles the spec into a rule.
    ///
    /// # Errors
    ///
    /// Returns an error if the expression or a guard is not a valid regex.
    pub fn compile(&self) -> Result<PatternRule, regex::Error> {
        let mut pattern = Pattern::new(self.expr)?;
        if let Some(chars) = self.not_preceded_by {
            pattern = pattern.not_preceded_by(chars);
        }
        if let Some(expr) = self.not_followed_by {
            pattern = pattern.not_followed_by(expr)?;
        }
        Ok(PatternRule {
            spec: *self,
            pattern,
        })
    }
}

/// A rule that reports every accepted match of a [`Pattern`].
#[derive(Debug, Clone)]
pub struct PatternRule {
    spec: PatternSpec,
    pattern: Pattern,
}

impl PatternRule {
    /// Returns the spec this rule was compiled from.
    #[must_use]
    pub fn spec(&self) -> &PatternSpec {
        &self.spec
    }

    /// Returns the compiled pattern.
    #[must_use]
    pub fn pattern(&self) -> &Pattern {
        &self.pattern
    }
}

impl Rule for PatternRule {
    fn name(&self) -> &'static str {
        self.spec.name
    }

    fn code(&self) -> &'static str {
        self.spec.code
    }

    fn description(&self) -> &'static str {
        self.spec.message
    }

    fn default_severity(&self) -> Severity {
        self.spec.severity
    }

    fn stage(&self) -> Stage {
        Stage::Pattern
    }

    fn check(&self, ctx: &SourceContext) -> Vec<Diagnostic> {
        self.pattern
            .find_spans(ctx.content)
            .into_iter()
            .map(|span| {
                let matched = ctx.content[span.clone()].trim();
                Diagnostic::new(
                    self.spec.code,
                    self.spec.name,
                    self.spec.severity,
                    Some(ctx.location(span.start, span.len())),
                    self.spec.message,
                )
                .with_suggestion(self.spec.suggestion)
                .with_matched_text(matched)
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::language::Language;

    fn texts<'a>(pattern: &Pattern, text: &'a str) -> Vec<&'a str> {
        pattern
            .find_spans(text)
            .into_iter()
            .map(|s| &text[s])
            .collect()
    }

    #[test]
    fn finds_non_overlapping_matches() {
        let p = Pattern::new(r";\s*;").unwrap();
        assert_eq!(texts(&p, "a;;; b; ;"), vec![";;", "; ;"]);
    }

    #[test]
    fn focus_group_leaves_trailing_context_unconsumed() {
        let p = Pattern::new(r"(?P<m>\w+)\s*=").unwrap();
        let spans = p.find_spans("a = b = c");
        assert_eq!(spans, vec![0..1, 4..5]);
    }

    #[test]
    fn not_preceded_by_retries_later_start() {
        let p = Pattern::new(r"===?\s*null").unwrap().not_preceded_by("!");
        assert!(p.find_spans("a !== null").is_empty());
        assert_eq!(texts(&p, "a === null"), vec!["=== null"]);
    }

    #[test]
    fn loose_equality_guard_fires_inside_strict_equality() {
        let p = Pattern::new("==").unwrap().not_followed_by("=").unwrap();
        assert_eq!(p.find_spans("a == b"), vec![2..4]);
        assert_eq!(p.find_spans("a === b"), vec![3..5]);
    }

    #[test]
    fn not_followed_by_scans_rest_of_text() {
        let p = Pattern::new("<img")
            .unwrap()
            .not_followed_by(r"[^>]*\salt\s*=")
            .unwrap();
        assert_eq!(p.find_spans(r#"<img src="a.png">"#).len(), 1);
        assert!(p.find_spans(r#"<img src="a.png" alt="x">"#).is_empty());
    }

    #[test]
    fn empty_matches_terminate() {
        let p = Pattern::new("x*").unwrap();
        assert_eq!(p.find_spans("ab").len(), 3);
        assert_eq!(p.find_spans("é").len(), 2);
    }

    #[test]
    fn rule_reports_trimmed_text_at_match_start() {
        let rule = PatternSpec::new(
            "T001",
            "double-semicolon",
            Severity::Error,
            r";\s*;",
            "Double semicolon",
            "Remove the extra semicolon",
        )
        .compile()
        .unwrap();
        let ctx = SourceContext::new("let a = 1;;\n", Language::JavaScript);
        let diagnostics = rule.check(&ctx);
        assert_eq!(diagnostics.len(), 1);
        assert_eq!((diagnostics[0].line(), diagnostics[0].column()), (1, 10));
        assert_eq!(diagnostics[0].matched_text, ";;");
        assert_eq!(diagnostics[0].suggestion, "Remove the extra semicolon");
    }

    #[test]
    fn invalid_expression_is_an_error() {
        let spec = PatternSpec::new("T", "t", Severity::Info, "(", "m", "s");
        assert!(spec.compile().is_err());
    }
}
