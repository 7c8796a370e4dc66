//! Mixed tab/space indentation for Python.

use code_analyzer_core::{Diagnostic, Location, Rule, Severity, SourceContext, Stage};

/// Rule code for mixed-indentation.
pub const CODE: &str = "ST003";

/// Rule name for mixed-indentation.
pub const NAME: &str = "mixed-indentation";

/// Flags non-blank lines whose indentation contains both a tab and a space.
#[derive(Debug, Clone, Copy, Default)]
pub struct MixedIndentation;

impl MixedIndentation {
    /// Creates a new rule.
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl Rule for MixedIndentation {
    fn name(&self) -> &'static str {
        NAME
    }

    fn code(&self) -> &'static str {
        CODE
    }

    fn description(&self) -> &'static str {
        "Indentation must not mix tabs and spaces"
    }

    fn stage(&self) -> Stage {
        Stage::Structural
    }

    fn check(&self, ctx: &SourceContext) -> Vec<Diagnostic> {
        ctx.lines()
            .filter(|(_, _, line)| !line.trim().is_empty())
            .filter_map(|(line_no, offset, line)| {
                let indentation = &line[..line.len() - line.trim_start().len()];
                if !(indentation.contains('\t') && indentation.contains(' ')) {
                    return None;
                }
                let location = Location::new(line_no, 1).with_span(offset, indentation.len());
                Some(
                    Diagnostic::new(
                        CODE,
                        NAME,
                        Severity::Error,
                        Some(location),
                        "Mixed tabs and spaces",
                    )
                    .with_suggestion("Use either tabs or spaces consistently for indentation")
                    .with_matched_text(indentation),
                )
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use code_analyzer_core::Language;

    fn check(source: &str) -> Vec<Diagnostic> {
        MixedIndentation::new().check(&SourceContext::new(source, Language::Python))
    }

    #[test]
    fn consistent_indentation_is_clean() {
        assert!(check("def f():\n    return 1\n\tpass\n").is_empty());
    }

    #[test]
    fn flags_mixed_indentation_at_column_one() {
        let found = check("def f():\n \treturn 1\n");
        assert_eq!(found.len(), 1);
        assert_eq!((found[0].line(), found[0].column()), (2, 1));
        assert_eq!(found[0].matched_text, " \t");
    }

    #[test]
    fn whitespace_only_lines_are_skipped() {
        assert!(check("x = 1\n \t \ny = 2").is_empty());
    }
}
