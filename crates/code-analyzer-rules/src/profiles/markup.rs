//! HTML and XML profiles.

use code_analyzer_core::{PatternSpec, Severity};

pub(crate) const HTML_PATTERNS: &[PatternSpec] = &[
    PatternSpec::new(
        "HT001",
        "img-missing-alt",
        Severity::Warning,
        "<img",
        "Image missing alt attribute",
        r#"Add alt attribute for accessibility: <img src="..." alt="description">"#,
    )
    .not_followed_by(r"[^>]*\salt\s*="),
    PatternSpec::new(
        "HT002",
        "inline-script-style",
        Severity::Info,
        r"<(?:script|style)[^>]*>[\s\S]*?</(?:script|style)>",
        "Inline script/style detected",
        "Consider moving to external files for better maintainability",
    ),
    // Every opening tag that is not self-closing.
    PatternSpec::new(
        "HT003",
        "unclosed-tag",
        Severity::Warning,
        "<[^/>]+>",
        "Potentially unclosed tag",
        "Ensure all non-void tags are properly closed",
    ),
    PatternSpec::new(
        "HT004",
        "inline-event-handler",
        Severity::Warning,
        r"onclick\s*=",
        "Inline event handler",
        "Use addEventListener in JavaScript instead of inline handlers",
    ),
    PatternSpec::new(
        "HT005",
        "element-id",
        Severity::Info,
        r#"<[^>]+\sid\s*=\s*["']([^"']+)["'][^>]*>"#,
        "Element with ID found",
        "Ensure IDs are unique throughout the document",
    ),
    PatternSpec::new(
        "HT006",
        "digit-tag-name",
        Severity::Error,
        r"<([a-zA-Z0-9]*\d+[a-zA-Z0-9]*)\b",
        "Invalid tag name: contains digits",
        "Tag names should not contain digits; use lowercase letters or hyphens.",
    ),
    PatternSpec::new(
        "HT007",
        "illegal-attribute-name",
        Severity::Error,
        r"<[^>]*\s+([a-zA-Z0-9]*[@#%^&*+=/\\|<>~`][a-zA-Z0-9]*)\s*=",
        "Invalid attribute name: contains illegal characters",
        "Attribute names can only contain letters, digits, hyphens, or underscores.",
    ),
];

pub(crate) const XML_PATTERNS: &[PatternSpec] = &[
    PatternSpec::new(
        "XM001",
        "digit-element-name",
        Severity::Error,
        r"<([a-zA-Z0-9]*\d+[a-zA-Z0-9]*)\b",
        "Invalid element name: contains digits",
        "Element names should start with a letter or underscore and contain letters, digits, hyphens, or periods.",
    ),
    PatternSpec::new(
        "XM002",
        "illegal-attribute-name",
        Severity::Error,
        r"<[^>]*\s+([a-zA-Z0-9]*[@#%^&*+=/\\|<>~`][a-zA-Z0-9]*)\s*=",
        "Invalid attribute name: contains illegal characters",
        "Attribute names can only contain letters, digits, hyphens, or underscores.",
    ),
];
