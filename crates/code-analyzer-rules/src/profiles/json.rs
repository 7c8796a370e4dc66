//! JSON profile.

use code_analyzer_core::{PatternSpec, Severity};

pub(crate) const PATTERNS: &[PatternSpec] = &[
    PatternSpec::new(
        "JN001",
        "unquoted-key",
        Severity::Error,
        r"(?P<m>\w+)\s*:",
        "Unquoted property name",
        "Property names must be enclosed in double quotes in JSON",
    )
    .not_preceded_by("\""),
    PatternSpec::new(
        "JN002",
        "single-quoted-string",
        Severity::Error,
        r":\s*'[^']*'",
        "Single quotes used for string",
        "Use double quotes for strings in JSON",
    ),
    PatternSpec::new(
        "JN003",
        "trailing-comma",
        Severity::Error,
        r",\s*[}\]]",
        "Trailing comma",
        "Remove trailing comma before closing bracket/brace",
    ),
    PatternSpec::new(
        "JN004",
        "digit-leading-key",
        Severity::Error,
        r#""(\d+[a-zA-Z_]\w*)""#,
        "Invalid property name: starts with a digit",
        "Property names must start with a letter or underscore.",
    ),
    PatternSpec::new(
        "JN005",
        "illegal-character-key",
        Severity::Error,
        r#""([a-zA-Z_]\w*[@#%^&*+\-=/\\|<>~`]\w*)""#,
        "Invalid property name: contains illegal characters",
        "Property names can only contain letters, digits, or underscores.",
    ),
];
