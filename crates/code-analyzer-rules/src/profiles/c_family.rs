//! C and C++ profiles.

use code_analyzer_core::{KeywordSet, PatternSpec, Severity};

pub(crate) const CPP_PATTERNS: &[PatternSpec] = &[
    PatternSpec::new(
        "CP001",
        "using-namespace-std",
        Severity::Warning,
        r"using\s+namespace\s+std\s*;",
        "Using namespace std",
        r#"Use specific std:: qualifiers instead of "using namespace std""#,
    ),
    PatternSpec::new(
        "CP002",
        "c-memory-management",
        Severity::Warning,
        r"\b(?:malloc|free|realloc)\s*\(",
        "C-style memory management",
        "Use new/delete or smart pointers (unique_ptr, shared_ptr) instead",
    ),
    PatternSpec::new(
        "CP003",
        "goto-statement",
        Severity::Error,
        r"goto\s+\w+",
        "goto statement detected",
        "Use structured programming constructs instead of goto",
    ),
    PatternSpec::new(
        "CP004",
        "standard-include",
        Severity::Info,
        r"#include\s*<\w+>",
        "Standard library include",
        "Standard library header included",
    ),
    PatternSpec::new(
        "CP005",
        "delete-without-nullptr",
        Severity::Warning,
        r"delete\s+\w+\s*;",
        "Delete without nullifying pointer",
        "Set pointer to nullptr after delete to avoid double deletion",
    )
    .not_followed_by(r"\s*\w+\s*=\s*nullptr"),
    PatternSpec::new(
        "CP006",
        "fixed-char-array",
        Severity::Warning,
        r"char\s+\w+\[\d+\]",
        "Fixed-size character array",
        "Consider using std::string for safer string handling",
    ),
    PatternSpec::new(
        "CP007",
        "digit-leading-name",
        Severity::Error,
        r"(?P<m>(?:int|float|double|char|bool|void|long|short|auto)\s+\d+[a-zA-Z_]\w*)\s*(?:=|;)",
        "Invalid variable name: starts with a digit",
        "Variable names must start with a letter or underscore.",
    ),
    PatternSpec::new(
        "CP008",
        "illegal-character-name",
        Severity::Error,
        r"(?P<m>(?:int|float|double|char|bool|void|long|short|auto)\s+[a-zA-Z_]\w*[@#%^&*+\-=/\\|<>~`]\w*)\s*(?:=|;)",
        "Invalid variable name: contains illegal characters",
        "Variable names can only contain letters, digits, or underscores.",
    ),
    PatternSpec::new(
        "CP009",
        "reserved-keyword-name",
        Severity::Error,
        r"(?P<m>(?:int|float|double|char|bool|void|long|short|auto)\s+(?:alignas|alignof|and|and_eq|asm|auto|bitand|bitor|bool|break|case|catch|char|char16_t|char32_t|class|compl|const|constexpr|const_cast|continue|decltype|default|delete|do|double|dynamic_cast|else|enum|explicit|export|extern|float|for|friend|goto|if|inline|int|long|mutable|namespace|new|noexcept|not|not_eq|nullptr|operator|or|or_eq|private|protected|public|register|reinterpret_cast|return|short|signed|sizeof|static|static_assert|static_cast|struct|switch|template|this|thread_local|throw|try|typedef|typeid|typename|union|unsigned|using|virtual|void|volatile|wchar_t|while|xor|xor_eq))\s*(?:=|;)",
        "Invalid variable name: reserved keyword",
        "Choose a different name that is not a C++ reserved keyword.",
    ),
];

pub(crate) const CPP_KEYWORDS: KeywordSet = KeywordSet::new(&[
    "alignas", "alignof", "and", "and_eq", "asm", "auto", "bitand", "bitor", "bool", "break",
    "case", "catch", "char", "char16_t", "char32_t", "class", "compl", "const", "constexpr",
    "const_cast", "continue", "decltype", "default", "delete", "do", "double", "dynamic_cast",
    "else", "enum", "explicit", "export", "extern", "float", "for", "friend", "goto", "if",
    "inline", "int", "long", "mutable", "namespace", "new", "noexcept", "not", "not_eq",
    "nullptr", "operator", "or", "or_eq", "private", "protected", "public", "register",
    "reinterpret_cast", "return", "short", "signed", "sizeof", "static", "static_assert",
    "static_cast", "struct", "switch", "template", "this", "thread_local", "throw", "try",
    "typedef", "typeid", "typename", "union", "unsigned", "using", "virtual", "void",
    "volatile", "wchar_t", "while", "xor", "xor_eq",
]);

pub(crate) const C_PATTERNS: &[PatternSpec] = &[
    PatternSpec::new(
        "C001",
        "standard-include",
        Severity::Info,
        r"#include\s*<\w+\.h>",
        "Standard C library include",
        "Standard C header included",
    ),
    PatternSpec::new(
        "C002",
        "printf-call",
        Severity::Warning,
        r"printf\s*\(",
        "printf usage detected",
        "Ensure format strings match argument types to avoid undefined behavior",
    ),
    PatternSpec::new(
        "C003",
        "gets-call",
        Severity::Error,
        r"gets\s*\(",
        "Dangerous gets() function",
        "Use fgets() instead of gets() to prevent buffer overflow",
    ),
    PatternSpec::new(
        "C004",
        "scanf-call",
        Severity::Warning,
        r"scanf\s*\(",
        "scanf usage detected",
        "Consider using safer alternatives like fgets() with sscanf()",
    ),
    PatternSpec::new(
        "C005",
        "digit-leading-name",
        Severity::Error,
        r"(?P<m>(?:int|float|double|char|void|long|short)\s+\d+[a-zA-Z_]\w*)\s*(?:=|;)",
        "Invalid variable name: starts with a digit",
        "Variable names must start with a letter or underscore.",
    ),
    PatternSpec::new(
        "C006",
        "illegal-character-name",
        Severity::Error,
        r"(?P<m>(?:int|float|double|char|void|long|short)\s+[a-zA-Z_]\w*[@#%^&*+\-=/\\|<>~`]\w*)\s*(?:=|;)",
        "Invalid variable name: contains illegal characters",
        "Variable names can only contain letters, digits, or underscores.",
    ),
    PatternSpec::new(
        "C007",
        "reserved-keyword-name",
        Severity::Error,
        r"(?P<m>(?:int|float|double|char|void|long|short)\s+(?:auto|break|case|char|const|continue|default|do|double|else|enum|extern|float|for|goto|if|int|long|register|return|short|signed|sizeof|static|struct|switch|typedef|union|unsigned|void|volatile|while))\s*(?:=|;)",
        "Invalid variable name: reserved keyword",
        "Choose a different name that is not a C reserved keyword.",
    ),
];

pub(crate) const C_KEYWORDS: KeywordSet = KeywordSet::new(&[
    "auto", "break", "case", "char", "const", "continue", "default", "do", "double", "else",
    "enum", "extern", "float", "for", "goto", "if", "int", "long", "register", "return",
    "short", "signed", "sizeof", "static", "struct", "switch", "typedef", "union", "unsigned",
    "void", "volatile", "while",
]);
