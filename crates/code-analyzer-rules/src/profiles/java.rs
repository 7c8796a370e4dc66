//! Java profile.

use code_analyzer_core::{KeywordSet, PatternSpec, Severity};

pub(crate) const PATTERNS: &[PatternSpec] = &[
    PatternSpec::new(
        "JV001",
        "system-out-print",
        Severity::Warning,
        r"System\.out\.print(?:ln)?\s*\(",
        "System.out.print usage",
        "Use proper logging framework (Log4j, SLF4J) instead of System.out",
    ),
    PatternSpec::new(
        "JV002",
        "generic-exception-catch",
        Severity::Warning,
        r"catch\s*\(\s*Exception\s+\w+\s*\)",
        "Generic Exception caught",
        "Catch specific exception types when possible",
    ),
    PatternSpec::new(
        "JV003",
        "null-assignment",
        Severity::Warning,
        r"\w+\s*=\s*null\s*;",
        "Null assignment",
        "Consider using Optional<T> to avoid null pointer exceptions",
    ),
    PatternSpec::new(
        "JV004",
        "empty-type",
        Severity::Warning,
        r"(?:class|interface)\s+\w+.*\{\s*\}",
        "Empty class/interface",
        "Add implementation or remove empty class/interface",
    ),
    PatternSpec::new(
        "JV005",
        "main-method",
        Severity::Info,
        r"public\s+static\s+void\s+main",
        "Main method found",
        "Application entry point detected",
    ),
    PatternSpec::new(
        "JV006",
        "todo-comment",
        Severity::Info,
        r"//\s*TODO",
        "TODO comment found",
        "Complete the TODO item or remove the comment",
    ),
    PatternSpec::new(
        "JV007",
        "digit-leading-name",
        Severity::Error,
        r"(?P<m>(?:int|float|double|char|boolean|byte|short|long|void|String)\s+\d+[a-zA-Z_$][\w$]*)\s*(?:=|;)",
        "Invalid variable name: starts with a digit",
        "Variable names must start with a letter, underscore, or dollar sign.",
    ),
    PatternSpec::new(
        "JV008",
        "illegal-character-name",
        Severity::Error,
        r"(?P<m>(?:int|float|double|char|boolean|byte|short|long|void|String)\s+[a-zA-Z_$][\w$]*[@#%^&*+\-=/\\|<>~`][\w$]*)\s*(?:=|;)",
        "Invalid variable name: contains illegal characters",
        "Variable names can only contain letters, digits, underscores, or dollar signs.",
    ),
    PatternSpec::new(
        "JV009",
        "reserved-keyword-name",
        Severity::Error,
        r"(?P<m>(?:int|float|double|char|boolean|byte|short|long|void|String)\s+(?:abstract|assert|boolean|break|byte|case|catch|char|class|const|continue|default|do|double|else|enum|extends|final|finally|float|for|goto|if|implements|import|instanceof|int|interface|long|native|new|package|private|protected|public|return|short|static|strictfp|super|switch|synchronized|this|throw|throws|transient|try|void|volatile|while))\s*(?:=|;)",
        "Invalid variable name: reserved keyword",
        "Choose a different name that is not a Java reserved keyword.",
    ),
];

pub(crate) const KEYWORDS: KeywordSet = KeywordSet::new(&[
    "abstract", "assert", "boolean", "break", "byte", "case", "catch", "char", "class",
    "const", "continue", "default", "do", "double", "else", "enum", "extends", "final",
    "finally", "float", "for", "goto", "if", "implements", "import", "instanceof", "int",
    "interface", "long", "native", "new", "package", "private", "protected", "public",
    "return", "short", "static", "strictfp", "super", "switch", "synchronized", "this",
    "throw", "throws", "transient", "try", "void", "volatile", "while",
]);
