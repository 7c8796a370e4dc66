//! JavaScript profile.

use code_analyzer_core::{KeywordSet, PatternSpec, Severity};

pub(crate) const PATTERNS: &[PatternSpec] = &[
    PatternSpec::new(
        "JS001",
        "console-log",
        Severity::Warning,
        r"console\.log\s*\(",
        "Debug console.log statement",
        "Remove console.log statements before production deployment",
    ),
    PatternSpec::new(
        "JS002",
        "var-declaration",
        Severity::Warning,
        r"\bvar\s+\w+",
        "Legacy var declaration",
        "Use const or let instead of var for better scoping",
    ),
    PatternSpec::new(
        "JS003",
        "null-check",
        Severity::Info,
        r"===?\s*(?:null|undefined)",
        "Null/undefined check",
        "Consider using optional chaining (?.) or nullish coalescing (??)",
    )
    .not_preceded_by("!"),
    // Also fires on the trailing `==` of `===`.
    PatternSpec::new(
        "JS004",
        "loose-equality",
        Severity::Warning,
        "==",
        "Loose equality comparison",
        "Use strict equality (===) to avoid type coercion issues",
    )
    .not_followed_by("="),
    PatternSpec::new(
        "JS005",
        "double-semicolon",
        Severity::Error,
        r";\s*;",
        "Double semicolon",
        "Remove the extra semicolon",
    ),
    PatternSpec::new(
        "JS006",
        "empty-function",
        Severity::Warning,
        r"function\s*\(\s*\)\s*\{\s*\}",
        "Empty function",
        "Add implementation or remove empty function",
    ),
    PatternSpec::new(
        "JS007",
        "function-definition",
        Severity::Info,
        r"\b\w+\s*\(\s*\)\s*\{[^}]*\}",
        "Function definition found",
        "Ensure function has proper error handling if needed",
    ),
    PatternSpec::new(
        "JS008",
        "empty-catch",
        Severity::Warning,
        r"catch\s*\(\s*\w*\s*\)\s*\{\s*\}",
        "Empty catch block",
        "Handle errors appropriately or at least log them",
    ),
    PatternSpec::new(
        "JS009",
        "eval-call",
        Severity::Error,
        r"eval\s*\(",
        "Use of eval() detected",
        "Avoid eval() as it poses security risks and performance issues",
    ),
    PatternSpec::new(
        "JS010",
        "digit-leading-name",
        Severity::Error,
        r"\b\d+[a-zA-Z_$][\w$]*\b",
        "Invalid variable name: starts with a digit",
        "Variable names must start with a letter, underscore, or dollar sign.",
    ),
    PatternSpec::new(
        "JS011",
        "illegal-character-name",
        Severity::Error,
        r"\b[a-zA-Z_$][\w$]*[@#%^&*+\-=/\\|<>~`][\w$]*\b",
        "Invalid variable name: contains illegal characters",
        "Variable names can only contain letters, digits, underscores, or dollar signs.",
    ),
    PatternSpec::new(
        "JS012",
        "reserved-keyword-name",
        Severity::Error,
        r"\b(?P<m>break|case|catch|class|const|continue|debugger|default|delete|do|else|export|extends|finally|for|function|if|import|in|instanceof|new|return|super|switch|this|throw|try|typeof|var|void|while|with|yield|let|static|async|await|true|false|null|undefined)\b\s*(?:=|\(|;)",
        "Invalid variable name: reserved keyword",
        "Choose a different name that is not a JavaScript reserved keyword.",
    ),
];

pub(crate) const KEYWORDS: KeywordSet = KeywordSet::new(&[
    "break", "case", "catch", "class", "const", "continue", "debugger", "default", "delete",
    "do", "else", "export", "extends", "finally", "for", "function", "if", "import", "in",
    "instanceof", "new", "return", "super", "switch", "this", "throw", "try", "typeof", "var",
    "void", "while", "with", "yield", "let", "static", "async", "await", "true", "false",
    "null", "undefined",
]);

/// Names the undeclared-identifier check treats as always in scope.
pub(crate) const GLOBALS: &[&str] = &[
    "Array",
    "Boolean",
    "Date",
    "Error",
    "Function",
    "JSON",
    "Math",
    "Number",
    "Object",
    "Promise",
    "RegExp",
    "Set",
    "String",
    "Symbol",
    "Map",
    "WeakMap",
    "WeakSet",
    "console",
    "window",
    "document",
    "navigator",
    "localStorage",
    "sessionStorage",
    "alert",
    "prompt",
    "confirm",
    "setTimeout",
    "clearTimeout",
    "setInterval",
    "clearInterval",
    "fetch",
    "isNaN",
    "isFinite",
    "parseInt",
    "parseFloat",
    "decodeURI",
    "encodeURI",
    "decodeURIComponent",
    "encodeURIComponent",
    "arguments",
    "require",
    "module",
    "exports",
    "global",
    "process",
];
