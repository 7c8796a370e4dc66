//! Structural heuristics: whole-file and per-line checks that a single
//! pattern cannot express.

pub mod balance;
pub mod indentation;
pub mod json_syntax;
pub mod semicolon;

pub use balance::DelimiterBalance;
pub use indentation::MixedIndentation;
pub use json_syntax::JsonSyntax;
pub use semicolon::{MissingSemicolon, StatementStyle};

use code_analyzer_core::{Language, RuleBox};

/// Returns the heuristics that apply to a language.
#[must_use]
pub fn for_language(language: Language) -> Vec<RuleBox> {
    match language {
        Language::JavaScript => vec![
            Box::new(DelimiterBalance::new()),
            Box::new(MissingSemicolon::new(StatementStyle::JavaScript)),
        ],
        Language::Java => vec![
            Box::new(DelimiterBalance::new()),
            Box::new(MissingSemicolon::new(StatementStyle::CFamily {
                skip_preprocessor: false,
            })),
        ],
        Language::Cpp | Language::C => vec![
            Box::new(DelimiterBalance::new()),
            Box::new(MissingSemicolon::new(StatementStyle::CFamily {
                skip_preprocessor: true,
            })),
        ],
        Language::Python => vec![Box::new(MixedIndentation::new())],
        Language::Json => vec![Box::new(JsonSyntax::new())],
        Language::Html | Language::Css | Language::Xml | Language::Sql => Vec::new(),
    }
}
