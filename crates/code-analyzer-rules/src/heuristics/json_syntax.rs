//! JSON well-formedness.
//!
//! Parses the whole text with `serde_json`. A failure becomes one error
//! diagnostic carrying the parser's message and position.

use code_analyzer_core::{Diagnostic, Location, Rule, Severity, SourceContext, Stage};
use tracing::debug;

/// Rule code for json-syntax.
pub const CODE: &str = "ST004";

/// Rule name for json-syntax.
pub const NAME: &str = "json-syntax";

/// Reports text that does not parse as JSON.
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonSyntax;

impl JsonSyntax {
    /// Creates a new rule.
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    fn location(ctx: &SourceContext, line: usize, column: usize) -> Option<Location> {
        if line == 0 {
            return None;
        }
        let location = Location::new(line, column);
        let span = ctx
            .lines()
            .nth(line - 1)
            .and_then(|(_, offset, text)| {
                text.char_indices()
                    .nth(location.column - 1)
                    .map(|(i, c)| (offset + i, c.len_utf8()))
            });
        Some(match span {
            Some((offset, length)) => location.with_span(offset, length),
            None => location,
        })
    }
}

impl Rule for JsonSyntax {
    fn name(&self) -> &'static str {
        NAME
    }

    fn code(&self) -> &'static str {
        CODE
    }

    fn description(&self) -> &'static str {
        "JSON documents must parse"
    }

    fn stage(&self) -> Stage {
        Stage::Structural
    }

    fn check(&self, ctx: &SourceContext) -> Vec<Diagnostic> {
        match serde_json::from_str::<serde_json::Value>(ctx.content) {
            Ok(_) => Vec::new(),
            Err(e) => {
                debug!("JSON parse failed: {}", e);
                let location = Self::location(ctx, e.line(), e.column());
                vec![
                    Diagnostic::new(CODE, NAME, Severity::Error, location, "JSON syntax error")
                        .with_suggestion(e.to_string())
                        .with_matched_text("JSON"),
                ]
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use code_analyzer_core::Language;

    fn check(source: &str) -> Vec<Diagnostic> {
        JsonSyntax::new().check(&SourceContext::new(source, Language::Json))
    }

    #[test]
    fn valid_json_is_clean() {
        assert!(check(r#"{"a": [1, 2, {"b": null}]}"#).is_empty());
    }

    #[test]
    fn reports_parser_position_and_message() {
        let found = check("{\n  \"a\": 1,\n}");
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].message, "JSON syntax error");
        assert_eq!(found[0].line(), 3);
        assert!(found[0].suggestion.contains("trailing comma"));
        assert_eq!(found[0].matched_text, "JSON");
    }

    #[test]
    fn empty_document_is_an_error() {
        let found = check("");
        assert_eq!(found.len(), 1);
        assert_eq!((found[0].line(), found[0].column()), (1, 1));
    }
}
