//! Missing-semicolon heuristic.
//!
//! Works line by line on trimmed text. A line is flagged when it does not
//! end a statement or open/close a block, and its shape looks like an
//! assignment, increment, decrement, call, `return` or `throw`.
//!
//! JavaScript and the C family (Java, C, C++) use different shape sets. C
//! and C++ additionally skip preprocessor lines.

use code_analyzer_core::utils::StaticRegex;
use code_analyzer_core::{Diagnostic, Location, Rule, Severity, SourceContext, Stage};
use once_cell::sync::Lazy;

/// Rule code for missing-semicolon.
pub const CODE: &str = "ST002";

/// Rule name for missing-semicolon.
pub const NAME: &str = "missing-semicolon";

const MESSAGE: &str = "Missing semicolon";
const SUGGESTION: &str = "Add semicolon at the end of the statement";

static JS_BLOCK_OPENER: Lazy<StaticRegex> = Lazy::new(|| {
    StaticRegex::new(
        r"^\s*(?:if|else|for|while|do|switch|function|class|const|let|var).*[{]\s*$",
    )
});

static JS_TERMINATED_JUMP: Lazy<StaticRegex> =
    Lazy::new(|| StaticRegex::new(r"^\s*(?:return|break|continue).*[;]\s*$"));

static JS_STATEMENT: Lazy<StaticRegex> = Lazy::new(|| {
    StaticRegex::new(r"^(?:(?:const|let|var)\s+\w+.*=.*|.*=.*|.*\+\+|.*--|.*\(.*\))$")
});

static C_CONTROL: Lazy<StaticRegex> = Lazy::new(|| {
    StaticRegex::new(
        r"^\s*(?:if|else|for|while|do|switch|class|struct|enum|namespace|try|catch|finally|synchronized)",
    )
});

static C_MODIFIER: Lazy<StaticRegex> = Lazy::new(|| {
    StaticRegex::new(r"^\s*(?:public|private|protected|static|final|abstract|default)")
});

static C_STATEMENTS: Lazy<Vec<StaticRegex>> = Lazy::new(|| {
    [
        r"^.*(?:int|float|double|char|bool|string|auto|void|long|short)\s+\w+.*=.*;?$",
        r"^.*\w+\s*=.*;?$",
        r"^.*\w+\s*\+\+;?$",
        r"^.*\w+\s*--;?$",
        r"^.*(?:new\s+)?\w+\s*\(.*\)\s*;?$",
        r"^\s*return.*;?$",
        r"^\s*throw.*;?$",
    ]
    .into_iter()
    .map(StaticRegex::new)
    .collect()
});

/// Which statement shapes the heuristic recognises.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatementStyle {
    /// JavaScript declarations, assignments, updates and calls.
    JavaScript,
    /// Java, C and C++ statements.
    CFamily {
        /// Skip lines starting with `#`.
        skip_preprocessor: bool,
    },
}

/// Flags statement-shaped lines that do not end in `;`.
#[derive(Debug, Clone, Copy)]
pub struct MissingSemicolon {
    style: StatementStyle,
}

impl MissingSemicolon {
    /// Creates the rule for a statement style.
    #[must_use]
    pub fn new(style: StatementStyle) -> Self {
        Self { style }
    }

    /// Returns the statement style.
    #[must_use]
    pub fn style(&self) -> StatementStyle {
        self.style
    }

    fn is_candidate(trimmed: &str) -> bool {
        !trimmed.is_empty()
            && !trimmed.ends_with(';')
            && !trimmed.ends_with('{')
            && !trimmed.ends_with('}')
            && !trimmed.starts_with("//")
            && !trimmed.starts_with("/*")
            && !trimmed.ends_with("*/")
    }

    fn needs_semicolon(&self, trimmed: &str) -> bool {
        if !Self::is_candidate(trimmed) {
            return false;
        }
        match self.style {
            StatementStyle::JavaScript => {
                !JS_BLOCK_OPENER.is_match(trimmed)
                    && !JS_TERMINATED_JUMP.is_match(trimmed)
                    && JS_STATEMENT.is_match(trimmed)
            }
            StatementStyle::CFamily { skip_preprocessor } => {
                !(skip_preprocessor && trimmed.starts_with('#'))
                    && !C_CONTROL.is_match(trimmed)
                    && !C_MODIFIER.is_match(trimmed)
                    && C_STATEMENTS.iter().any(|re| re.is_match(trimmed))
            }
        }
    }
}

impl Rule for MissingSemicolon {
    fn name(&self) -> &'static str {
        NAME
    }

    fn code(&self) -> &'static str {
        CODE
    }

    fn description(&self) -> &'static str {
        "Statements should end with a semicolon"
    }

    fn stage(&self) -> Stage {
        Stage::Structural
    }

    fn check(&self, ctx: &SourceContext) -> Vec<Diagnostic> {
        ctx.lines()
            .filter_map(|(line_no, offset, line)| {
                let trimmed = line.trim();
                if !self.needs_semicolon(trimmed) {
                    return None;
                }
                let start = offset + (line.len() - line.trim_start().len());
                let column = trimmed.chars().count() + 1;
                let location = Location::new(line_no, column).with_span(start, trimmed.len());
                Some(
                    Diagnostic::new(CODE, NAME, Severity::Error, Some(location), MESSAGE)
                        .with_suggestion(SUGGESTION)
                        .with_matched_text(trimmed),
                )
            })
            .collect()
    }
}
