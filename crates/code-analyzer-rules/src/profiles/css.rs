//! CSS profile.

use code_analyzer_core::{PatternSpec, Severity};

pub(crate) const PATTERNS: &[PatternSpec] = &[
    PatternSpec::new(
        "CS001",
        "important-declaration",
        Severity::Warning,
        "!important",
        "!important declaration",
        "Avoid !important; use more specific selectors or reorganize CSS",
    ),
    PatternSpec::new(
        "CS002",
        "fixed-font-size",
        Severity::Info,
        r"font-size\s*:\s*\d+px",
        "Fixed pixel font size",
        "Consider using rem, em, or viewport units for responsive design",
    ),
    PatternSpec::new(
        "CS003",
        "fixed-dimensions",
        Severity::Info,
        r"(?:width|height)\s*:\s*\d+px",
        "Fixed pixel dimensions",
        "Consider using responsive units (%, vw, vh, rem) for better flexibility",
    ),
    PatternSpec::new(
        "CS004",
        "basic-color-keyword",
        Severity::Info,
        r"color\s*:\s*(?:red|blue|green|yellow|black|white)",
        "Basic color keyword",
        "Consider using hex codes, rgb(), or CSS custom properties for consistency",
    )
    .not_followed_by("[a-zA-Z]"),
    PatternSpec::new(
        "CS005",
        "class-definition",
        Severity::Info,
        r"\.[a-zA-Z][a-zA-Z0-9_-]*\s*\{[^}]*\}",
        "CSS class definition",
        "CSS rule found",
    ),
    // Also matches decimal values such as `1.5em`.
    PatternSpec::new(
        "CS006",
        "digit-selector-name",
        Severity::Error,
        r"(?:\.[a-zA-Z0-9_-]*\d+[a-zA-Z0-9_-]*|#[a-zA-Z0-9_-]*\d+[a-zA-Z0-9_-]*)",
        "Invalid class/ID name: starts with or contains digits",
        "Class and ID names should start with a letter and contain letters, digits, hyphens, or underscores.",
    ),
    PatternSpec::new(
        "CS007",
        "illegal-selector-name",
        Severity::Error,
        r"(?:\.[a-zA-Z0-9_-]*[@#%^&*+=/\\|<>~`][a-zA-Z0-9_-]*|#[a-zA-Z0-9_-]*[@#%^&*+=/\\|<>~`][a-zA-Z0-9_-]*)",
        "Invalid class/ID name: contains illegal characters",
        "Class and ID names can only contain letters, digits, hyphens, or underscores.",
    ),
];
