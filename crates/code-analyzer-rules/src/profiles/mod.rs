//! Language profiles: pattern tables, keyword sets and identifier syntax.

mod c_family;
mod css;
mod java;
mod javascript;
mod json;
mod markup;
mod python;
mod sql;

use code_analyzer_core::{IdentifierSyntax, KeywordSet, Language, LanguageProfile, PatternSpec};
use once_cell::sync::Lazy;

pub(crate) use javascript::GLOBALS as JAVASCRIPT_GLOBALS;

static PROFILES: Lazy<Vec<LanguageProfile>> = Lazy::new(|| {
    Language::ALL
        .into_iter()
        .map(|language| {
            let (specs, keywords, syntax) = tables(language);
            LanguageProfile::compile(language, specs, keywords, syntax)
        })
        .collect()
});

/// Returns the compiled profile for a language.
///
/// Profiles are compiled on first use and shared afterwards.
#[must_use]
pub fn profile(language: Language) -> &'static LanguageProfile {
    let index = Language::ALL
        .iter()
        .position(|l| *l == language)
        .unwrap_or_default();
    &PROFILES[index]
}

/// Returns the declarative pattern table for a language.
#[must_use]
pub fn pattern_specs(language: Language) -> &'static [PatternSpec] {
    tables(language).0
}

fn tables(language: Language) -> (&'static [PatternSpec], KeywordSet, IdentifierSyntax) {
    match language {
        Language::JavaScript => (
            javascript::PATTERNS,
            javascript::KEYWORDS,
            IdentifierSyntax::WithDollar,
        ),
        Language::Python => (python::PATTERNS, python::KEYWORDS, IdentifierSyntax::Plain),
        Language::Java => (java::PATTERNS, java::KEYWORDS, IdentifierSyntax::WithDollar),
        Language::Cpp => (
            c_family::CPP_PATTERNS,
            c_family::CPP_KEYWORDS,
            IdentifierSyntax::Plain,
        ),
        Language::C => (
            c_family::C_PATTERNS,
            c_family::C_KEYWORDS,
            IdentifierSyntax::Plain,
        ),
        Language::Html => (markup::HTML_PATTERNS, KeywordSet::EMPTY, IdentifierSyntax::Plain),
        Language::Css => (css::PATTERNS, KeywordSet::EMPTY, IdentifierSyntax::Plain),
        Language::Json => (json::PATTERNS, KeywordSet::EMPTY, IdentifierSyntax::Plain),
        Language::Xml => (markup::XML_PATTERNS, KeywordSet::EMPTY, IdentifierSyntax::Plain),
        Language::Sql => (sql::PATTERNS, sql::KEYWORDS, IdentifierSyntax::Plain),
    }
}
