//! Brace and parenthesis balance.
//!
//! Counts `{`/`}` and `(`/`)` over the whole text and reports a file-level
//! error for each pair whose totals differ. Nesting order is not checked.

use code_analyzer_core::{Diagnostic, Rule, Severity, SourceContext, Stage};

/// Rule code for delimiter-balance.
pub const CODE: &str = "ST001";

/// Rule name for delimiter-balance.
pub const NAME: &str = "delimiter-balance";

/// Reports mismatched brace and parenthesis totals.
#[derive(Debug, Clone, Copy, Default)]
pub struct DelimiterBalance;

impl DelimiterBalance {
    /// Creates a new rule.
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    fn mismatch(
        content: &str,
        (open, close): (char, char),
        message: &str,
        noun: &str,
        code: &str,
    ) -> Option<Diagnostic> {
        let opening = content.matches(open).count();
        let closing = content.matches(close).count();
        (opening != closing).then(|| {
            Diagnostic::new(CODE, NAME, Severity::Error, None, message)
                .with_suggestion(format!(
                    "Found {opening} opening {noun} but {closing} closing {noun}"
                ))
                .with_matched_text(code)
        })
    }
}

impl Rule for DelimiterBalance {
    fn name(&self) -> &'static str {
        NAME
    }

    fn code(&self) -> &'static str {
        CODE
    }

    fn description(&self) -> &'static str {
        "Opening and closing braces and parentheses must have equal totals"
    }

    fn stage(&self) -> Stage {
        Stage::Structural
    }

    fn check(&self, ctx: &SourceContext) -> Vec<Diagnostic> {
        [
            Self::mismatch(ctx.content, ('{', '}'), "Mismatched braces", "braces", "{}"),
            Self::mismatch(
                ctx.content,
                ('(', ')'),
                "Mismatched parentheses",
                "parentheses",
                "()",
            ),
        ]
        .into_iter()
        .flatten()
        .collect()
    }
}
