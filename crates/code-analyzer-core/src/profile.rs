//! Per-language rule data.

use crate::identifier::{IdentifierSyntax, KeywordSet};
use crate::language::Language;
use crate::matcher::{PatternRule, PatternSpec};
use tracing::error;

/// Compiled pattern rules and naming rules for one language.
///
/// Profiles are built once and never mutated.
#[derive(Debug, Clone)]
pub struct LanguageProfile {
    language: Language,
    patterns: Vec<PatternRule>,
    keywords: KeywordSet,
    identifier_syntax: IdentifierSyntax,
}

impl LanguageProfile {
    /// Compiles a profile from pattern specs.
    ///
    /// A spec whose expression fails to compile is logged and left out, so a
    /// profile can always be built.
    #[must_use]
    pub fn compile(
        language: Language,
        specs: &[PatternSpec],
        keywords: KeywordSet,
        identifier_syntax: IdentifierSyntax,
    ) -> Self {
        let patterns = specs
            .iter()
            .filter_map(|spec| match spec.compile() {
                Ok(rule) => Some(rule),
                Err(e) => {
                    error!("Dropping {} pattern {}: {}", language, spec.code, e);
                    None
                }
            })
            .collect();
        Self {
            language,
            patterns,
            keywords,
            identifier_syntax,
        }
    }

    /// Returns the profile's language.
    #[must_use]
    pub fn language(&self) -> Language {
        self.language
    }

    /// Returns the compiled pattern rules in declaration order.
    #[must_use]
    pub fn patterns(&self) -> &[PatternRule] {
        &self.patterns
    }

    /// Returns the reserved keyword set.
    #[must_use]
    pub fn keywords(&self) -> &KeywordSet {
        &self.keywords
    }

    /// Returns the identifier syntax.
    #[must_use]
    pub fn identifier_syntax(&self) -> IdentifierSyntax {
        self.identifier_syntax
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Severity;

    #[test]
    fn invalid_specs_are_dropped() {
        let specs = [
            PatternSpec::new("A", "a", Severity::Info, "ok", "m", "s"),
            PatternSpec::new("B", "b", Severity::Info, "(", "m", "s"),
        ];
        let profile = LanguageProfile::compile(
            Language::Css,
            &specs,
            KeywordSet::EMPTY,
            IdentifierSyntax::Plain,
        );
        assert_eq!(profile.patterns().len(), 1);
        assert_eq!(profile.patterns()[0].spec().code, "A");
    }
}
