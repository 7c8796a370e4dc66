//! Core types for diagnostics and analysis reports.

use crate::language::Language;
use miette::{LabeledSpan, SourceCode, SourceSpan};
use serde::{Deserialize, Serialize};
use std::ops::Range;
use std::str::FromStr;

/// Severity level for diagnostics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    /// Informational note.
    Info,
    /// Warning that should be addressed.
    Warning,
    /// Error that must be fixed.
    Error,
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Info => write!(f, "info"),
            Self::Warning => write!(f, "warning"),
            Self::Error => write!(f, "error"),
        }
    }
}

/// Error returned when parsing an unknown severity name.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown severity `{0}`, expected: error, warning, info")]
pub struct UnknownSeverity(pub String);

impl FromStr for Severity {
    type Err = UnknownSeverity;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "error" => Ok(Self::Error),
            "warning" | "warn" => Ok(Self::Warning),
            "info" => Ok(Self::Info),
            _ => Err(UnknownSeverity(s.to_string())),
        }
    }
}

/// Position of a line-anchored diagnostic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Location {
    /// Line number (1-indexed).
    pub line: usize,
    /// Column number (1-indexed, counted in characters).
    pub column: usize,
    /// Byte offset in the source text.
    pub offset: usize,
    /// Length of the span in bytes.
    pub length: usize,
}

impl Location {
    /// Creates a new location with explicit values.
    #[must_use]
    pub fn new(line: usize, column: usize) -> Self {
        Self {
            line: line.max(1),
            column: column.max(1),
            offset: 0,
            length: 0,
        }
    }

    /// Sets the byte offset and length for this location.
    #[must_use]
    pub fn with_span(mut self, offset: usize, length: usize) -> Self {
        self.offset = offset;
        self.length = length;
        self
    }
}

/// A single finding produced by the engine.
///
/// A diagnostic without a [`Location`] is file-level: it is not anchored to
/// a source position and reports `-1` for both line and column.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(into = "DiagnosticRecord", try_from = "DiagnosticRecord")]
pub struct Diagnostic {
    /// Rule code (e.g., "JS001").
    pub code: String,
    /// Rule name (e.g., "console-log").
    pub rule: String,
    /// Severity of this diagnostic.
    pub severity: Severity,
    /// Source position, `None` for file-level diagnostics.
    pub location: Option<Location>,
    /// Human-readable message.
    pub message: String,
    /// Remediation suggestion.
    pub suggestion: String,
    /// The source text this diagnostic refers to.
    pub matched_text: String,
}

impl Diagnostic {
    /// Creates a new diagnostic with an empty suggestion and matched text.
    #[must_use]
    pub fn new(
        code: impl Into<String>,
        rule: impl Into<String>,
        severity: Severity,
        location: Option<Location>,
        message: impl Into<String>,
    ) -> Self {
        Self {
            code: code.into(),
            rule: rule.into(),
            severity,
            location,
            message: message.into(),
            suggestion: String::new(),
            matched_text: String::new(),
        }
    }

    /// Sets the remediation suggestion.
    #[must_use]
    pub fn with_suggestion(mut self, suggestion: impl Into<String>) -> Self {
        self.suggestion = suggestion.into();
        self
    }

    /// Sets the matched source text.
    #[must_use]
    pub fn with_matched_text(mut self, text: impl Into<String>) -> Self {
        self.matched_text = text.into();
        self
    }

    /// Returns true if this diagnostic is not anchored to a source position.
    #[must_use]
    pub fn is_file_level(&self) -> bool {
        self.location.is_none()
    }

    /// Line number, or `-1` for file-level diagnostics.
    #[must_use]
    pub fn line(&self) -> i64 {
        self.location.map_or(-1, |l| to_i64(l.line))
    }

    /// Column number, or `-1` for file-level diagnostics.
    #[must_use]
    pub fn column(&self) -> i64 {
        self.location.map_or(-1, |l| to_i64(l.column))
    }

    /// The identity used for deduplication: `(line, column, message)`.
    #[must_use]
    pub fn dedup_key(&self) -> (i64, i64, &str) {
        (self.line(), self.column(), self.message.as_str())
    }

    /// Finds the byte range of `matched_text` in `source`.
    ///
    /// Tries the exact reported position first, then falls back to the first
    /// occurrence on the reported line. Returns `None` for file-level
    /// diagnostics, empty matched text, or text that cannot be found.
    #[must_use]
    pub fn locate(&self, source: &str) -> Option<Range<usize>> {
        let location = self.location?;
        if self.matched_text.is_empty() {
            return None;
        }

        let line_start = source
            .split_inclusive('\n')
            .take(location.line - 1)
            .map(str::len)
            .sum::<usize>();
        let line = source.get(line_start..)?.split('\n').next()?;

        let column_offset = line
            .char_indices()
            .nth(location.column - 1)
            .map(|(i, _)| i);
        if let Some(offset) = column_offset {
            let start = line_start + offset;
            if source[start..].starts_with(&self.matched_text) {
                return Some(start..start + self.matched_text.len());
            }
        }

        line.find(&self.matched_text)
            .map(|i| line_start + i..line_start + i + self.matched_text.len())
    }

    /// Formats the diagnostic for terminal output.
    #[must_use]
    pub fn format(&self) -> String {
        use std::fmt::Write;
        let position = match self.location {
            Some(l) => format!("{}:{}", l.line, l.column),
            None => "file".to_string(),
        };
        let mut output = format!("{} {} at {}\n", self.code, self.rule, position);
        let _ = writeln!(output, "  {}: {}", self.severity, self.message);
        if !self.suggestion.is_empty() {
            let _ = writeln!(output, "  = help: {}", self.suggestion);
        }
        output
    }
}

impl std::fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}:{}: {} [{}] {}",
            self.line(),
            self.column(),
            self.severity,
            self.code,
            self.message
        )
    }
}

fn to_i64(value: usize) -> i64 {
    i64::try_from(value).unwrap_or(i64::MAX)
}

/// Flat wire shape of a [`Diagnostic`], with `-1` marking file-level positions.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct DiagnosticRecord {
    line: i64,
    column: i64,
    severity: Severity,
    message: String,
    suggestion: String,
    matched_text: String,
    code: String,
    rule: String,
}

impl From<Diagnostic> for DiagnosticRecord {
    fn from(d: Diagnostic) -> Self {
        Self {
            line: d.line(),
            column: d.column(),
            severity: d.severity,
            message: d.message,
            suggestion: d.suggestion,
            matched_text: d.matched_text,
            code: d.code,
            rule: d.rule,
        }
    }
}

/// Error for a serialized diagnostic whose position breaks the line/column pairing.
#[derive(Debug, thiserror::Error)]
#[error("invalid diagnostic position {line}:{column}: line and column must both be -1 or both be >= 1")]
pub struct InvalidPosition {
    line: i64,
    column: i64,
}

impl TryFrom<DiagnosticRecord> for Diagnostic {
    type Error = InvalidPosition;

    fn try_from(r: DiagnosticRecord) -> Result<Self, Self::Error> {
        let location = match (r.line, r.column) {
            (-1, -1) => None,
            (line, column) if line >= 1 && column >= 1 => {
                let invalid = || InvalidPosition { line, column };
                Some(Location::new(
                    usize::try_from(line).map_err(|_| invalid())?,
                    usize::try_from(column).map_err(|_| invalid())?,
                ))
            }
            (line, column) => return Err(InvalidPosition { line, column }),
        };
        Ok(Self {
            code: r.code,
            rule: r.rule,
            severity: r.severity,
            location,
            message: r.message,
            suggestion: r.suggestion,
            matched_text: r.matched_text,
        })
    }
}

/// A diagnostic bound to its source text for rich rendering with miette.
#[derive(Debug, thiserror::Error)]
#[error("{message}")]
pub struct DiagnosticReport {
    message: String,
    code: String,
    severity: Severity,
    help: Option<String>,
    label: String,
    span: Option<SourceSpan>,
    source_code: String,
}

impl DiagnosticReport {
    /// Binds a diagnostic to the source it was produced from.
    #[must_use]
    pub fn new(diagnostic: &Diagnostic, source: &str) -> Self {
        let span = diagnostic
            .locate(source)
            .map(|range| SourceSpan::from((range.start, range.len())))
            .or_else(|| {
                diagnostic
                    .location
                    .filter(|l| l.length > 0)
                    .map(|l| SourceSpan::from((l.offset, l.length)))
            });
        Self {
            message: diagnostic.message.clone(),
            code: diagnostic.code.clone(),
            severity: diagnostic.severity,
            help: (!diagnostic.suggestion.is_empty()).then(|| diagnostic.suggestion.clone()),
            label: diagnostic.rule.clone(),
            span,
            source_code: source.to_string(),
        }
    }
}

impl miette::Diagnostic for DiagnosticReport {
    fn code<'a>(&'a self) -> Option<Box<dyn std::fmt::Display + 'a>> {
        Some(Box::new(&self.code))
    }

    fn severity(&self) -> Option<miette::Severity> {
        Some(match self.severity {
            Severity::Error => miette::Severity::Error,
            Severity::Warning => miette::Severity::Warning,
            Severity::Info => miette::Severity::Advice,
        })
    }

    fn help<'a>(&'a self) -> Option<Box<dyn std::fmt::Display + 'a>> {
        self.help
            .as_ref()
            .map(|h| Box::new(h) as Box<dyn std::fmt::Display>)
    }

    fn source_code(&self) -> Option<&dyn SourceCode> {
        self.span.map(|_| &self.source_code as &dyn SourceCode)
    }

    fn labels(&self) -> Option<Box<dyn Iterator<Item = LabeledSpan> + '_>> {
        let span = self.span?;
        Some(Box::new(std::iter::once(LabeledSpan::new_with_span(
            Some(self.label.clone()),
            span,
        ))))
    }
}

/// Result of analyzing one source text.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalysisReport {
    /// Language the source was analyzed as.
    pub language: Language,
    /// Final, deduplicated and ordered diagnostics.
    pub diagnostics: Vec<Diagnostic>,
}

impl AnalysisReport {
    /// Creates a report from finalized diagnostics.
    #[must_use]
    pub fn new(language: Language, diagnostics: Vec<Diagnostic>) -> Self {
        Self {
            language,
            diagnostics,
        }
    }

    /// Returns true if there are no diagnostics.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.diagnostics.is_empty()
    }

    /// Returns true if there are any errors.
    #[must_use]
    pub fn has_errors(&self) -> bool {
        self.diagnostics
            .iter()
            .any(|d| d.severity == Severity::Error)
    }

    /// Checks if any diagnostics meet or exceed the given severity threshold.
    #[must_use]
    pub fn has_diagnostics_at(&self, severity: Severity) -> bool {
        self.diagnostics.iter().any(|d| d.severity >= severity)
    }

    /// Returns diagnostics filtered by severity.
    #[must_use]
    pub fn by_severity(&self, severity: Severity) -> Vec<&Diagnostic> {
        self.diagnostics
            .iter()
            .filter(|d| d.severity == severity)
            .collect()
    }

    /// Counts diagnostics by severity as `(errors, warnings, infos)`.
    #[must_use]
    pub fn count_by_severity(&self) -> (usize, usize, usize) {
        self.diagnostics
            .iter()
            .fold((0, 0, 0), |(e, w, i), d| match d.severity {
                Severity::Error => (e + 1, w, i),
                Severity::Warning => (e, w + 1, i),
                Severity::Info => (e, w, i + 1),
            })
    }

    /// Consumes the report, returning its diagnostics.
    #[must_use]
    pub fn into_diagnostics(self) -> Vec<Diagnostic> {
        self.diagnostics
    }
}
