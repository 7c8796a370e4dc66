//! Python profile.

use code_analyzer_core::{KeywordSet, PatternSpec, Severity};

pub(crate) const PATTERNS: &[PatternSpec] = &[
    PatternSpec::new(
        "PY001",
        "print-call",
        Severity::Warning,
        r"print\s*\(",
        "Print statement detected",
        "Consider using logging module instead of print for production code",
    ),
    PatternSpec::new(
        "PY002",
        "bare-except",
        Severity::Warning,
        r"except\s*:",
        "Bare except clause",
        "Specify exception type(s): except ValueError, TypeError:",
    ),
    PatternSpec::new(
        "PY003",
        "wildcard-import",
        Severity::Warning,
        r"import\s+\*",
        "Wildcard import",
        "Import specific items to avoid namespace pollution: from module import item1, item2",
    ),
    PatternSpec::new(
        "PY004",
        "tab-character",
        Severity::Error,
        r"\t+",
        "Tab characters detected",
        "Use 4 spaces for indentation according to PEP 8",
    ),
    PatternSpec::new(
        "PY005",
        "missing-docstring",
        Severity::Warning,
        r"(?m)(?:def|class)\s+\w+.*:\s*$",
        "Function/class without docstring",
        "Add docstrings to document your functions and classes",
    ),
    PatternSpec::new(
        "PY006",
        "empty-control-block",
        Severity::Warning,
        r"(?m)(?:if|while|for).*:\s*pass\s*$",
        "Empty control block with pass",
        "Add implementation or remove unnecessary control structure",
    ),
    PatternSpec::new(
        "PY007",
        "global-statement",
        Severity::Warning,
        r"global\s+\w+",
        "Global variable usage",
        "Consider passing variables as parameters instead of using global",
    ),
    PatternSpec::new(
        "PY008",
        "digit-leading-name",
        Severity::Error,
        r"(?P<m>(?:def|class|[a-zA-Z_]\w*\s*=)\s*\d+[a-zA-Z_]\w*)\s*(?:=|\(|:)",
        "Invalid variable name: starts with a digit",
        "Variable names must start with a letter or underscore.",
    ),
    PatternSpec::new(
        "PY009",
        "illegal-character-name",
        Severity::Error,
        r"(?P<m>(?:def|class|[a-zA-Z_]\w*\s*=)\s*[a-zA-Z_]\w*[@#%^&*+\-=/\\|<>~`]\w*)\s*(?:=|\(|:)",
        "Invalid variable name: contains illegal characters",
        "Variable names can only contain letters, digits, or underscores.",
    ),
    PatternSpec::new(
        "PY010",
        "reserved-keyword-name",
        Severity::Error,
        r"(?P<m>(?:def|class|[a-zA-Z_]\w*\s*=)\s*(?:False|None|True|and|as|assert|async|await|break|class|continue|def|del|elif|else|except|finally|for|from|global|if|import|in|is|lambda|nonlocal|not|or|pass|raise|return|try|while|with|yield))\s*(?:=|\(|:)",
        "Invalid variable name: reserved keyword",
        "Choose a different name that is not a Python reserved keyword.",
    ),
];

pub(crate) const KEYWORDS: KeywordSet = KeywordSet::new(&[
    "False", "None", "True", "and", "as", "assert", "async", "await", "break", "class",
    "continue", "def", "del", "elif", "else", "except", "finally", "for", "from", "global",
    "if", "import", "in", "is", "lambda", "nonlocal", "not", "or", "pass", "raise", "return",
    "try", "while", "with", "yield",
]);
