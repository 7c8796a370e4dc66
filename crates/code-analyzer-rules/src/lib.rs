//! # code-analyzer-rules
//!
//! Built-in rules for code-analyzer, organised by language.
//!
//! Every language has a profile of pattern rules. Some languages add
//! structural heuristics and an identifier validator on top:
//!
//! | Code | Name | Languages | Description |
//! |------|------|-----------|-------------|
//! | JS001-JS012 | pattern rules | JavaScript | `console.log`, `var`, loose equality, `eval`, malformed names, ... |
//! | PY001-PY010 | pattern rules | Python | `print`, bare `except`, wildcard imports, missing docstrings, ... |
//! | JV001-JV009 | pattern rules | Java | `System.out`, generic catches, empty types, ... |
//! | CP001-CP009 | pattern rules | C++ | `using namespace std`, C memory management, `goto`, ... |
//! | C001-C007 | pattern rules | C | `printf`, `gets`, `scanf`, malformed names, ... |
//! | HT001-HT007 | pattern rules | HTML | missing `alt`, inline handlers, unclosed tags, ... |
//! | XM001-XM002 | pattern rules | XML | malformed element and attribute names |
//! | CS001-CS007 | pattern rules | CSS | `!important`, fixed sizes, basic color keywords, ... |
//! | JN001-JN005 | pattern rules | JSON | unquoted keys, single quotes, trailing commas, ... |
//! | SQ001-SQ003 | pattern rules | SQL | malformed and reserved identifiers |
//! | ST001 | `delimiter-balance` | JavaScript, Java, C, C++ | Brace and parenthesis totals must match |
//! | ST002 | `missing-semicolon` | JavaScript, Java, C, C++ | Statement-shaped lines must end with `;` |
//! | ST003 | `mixed-indentation` | Python | Indentation must not mix tabs and spaces |
//! | ST004 | `json-syntax` | JSON | The document must parse |
//! | ID001 | `identifier-validator` | JavaScript, Python, Java, C, C++, SQL | Declared names must be valid and not reserved |
//!
//! ## Usage
//!
//! ```ignore
//! use code_analyzer_core::{Analyzer, Language};
//! use code_analyzer_rules::rules_for;
//!
//! let analyzer = Analyzer::builder()
//!     .language(Language::Python)
//!     .rules(rules_for(Language::Python))
//!     .build()?;
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod heuristics;
mod profiles;
mod registry;
pub mod validators;

pub use heuristics::{
    DelimiterBalance, JsonSyntax, MissingSemicolon, MixedIndentation, StatementStyle,
};
pub use profiles::{pattern_specs, profile};
pub use registry::{catalog, rules_for, RuleInfo};
pub use validators::{Dialect, IdentifierValidator};

/// Re-export core types for convenience.
pub use code_analyzer_core::{Diagnostic, Language, Rule, Severity};
