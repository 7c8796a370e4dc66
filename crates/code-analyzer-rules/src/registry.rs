//! Rule sets per language.

use crate::heuristics;
use crate::profiles::profile;
use crate::validators::IdentifierValidator;
use code_analyzer_core::{Language, Rule, RuleBox, Severity, Stage};

/// Returns every rule that applies to a language, in stage order: the
/// profile's pattern rules, then the structural heuristics, then the
/// identifier validator.
#[must_use]
pub fn rules_for(language: Language) -> Vec<RuleBox> {
    let mut rules: Vec<RuleBox> = profile(language)
        .patterns()
        .iter()
        .cloned()
        .map(|rule| Box::new(rule) as RuleBox)
        .collect();
    rules.extend(heuristics::for_language(language));
    if let Some(validator) = IdentifierValidator::for_language(language) {
        rules.push(Box::new(validator));
    }
    rules
}

/// Summary of one rule as listed by `list-rules`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RuleInfo {
    /// Language the rule is registered for.
    pub language: Language,
    /// Rule code.
    pub code: &'static str,
    /// Rule name.
    pub name: &'static str,
    /// Default severity.
    pub severity: Severity,
    /// Stage the rule runs in.
    pub stage: Stage,
    /// One-line description.
    pub description: &'static str,
}

impl RuleInfo {
    fn of(language: Language, rule: &dyn Rule) -> Self {
        Self {
            language,
            code: rule.code(),
            name: rule.name(),
            severity: rule.default_severity(),
            stage: rule.stage(),
            description: rule.description(),
        }
    }
}

/// Lists the rules of every language, grouped by language.
#[must_use]
pub fn catalog() -> Vec<RuleInfo> {
    Language::ALL
        .into_iter()
        .flat_map(|language| {
            rules_for(language)
                .iter()
                .map(|rule| RuleInfo::of(language, rule.as_ref()))
                .collect::<Vec<_>>()
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn javascript_has_all_stages_in_order() {
        let stages: Vec<Stage> = rules_for(Language::JavaScript)
            .iter()
            .map(|r| r.stage())
            .collect();
        let mut sorted = stages.clone();
        sorted.sort();
        assert_eq!(stages, sorted);
        assert!(stages.contains(&Stage::Pattern));
        assert!(stages.contains(&Stage::Structural));
        assert_eq!(stages.last(), Some(&Stage::Identifier));
    }

    #[test]
    fn markup_languages_have_patterns_only() {
        for language in [Language::Html, Language::Css, Language::Xml] {
            assert!(rules_for(language)
                .iter()
                .all(|r| r.stage() == Stage::Pattern));
        }
    }

    #[test]
    fn python_rule_codes() {
        let codes: Vec<_> = rules_for(Language::Python).iter().map(|r| r.code()).collect();
        insta::assert_snapshot!(
            codes.join(" "),
            @"PY001 PY002 PY003 PY004 PY005 PY006 PY007 PY008 PY009 PY010 ST003 ID001"
        );
    }

    #[test]
    fn catalog_covers_every_language() {
        let catalog = catalog();
        for language in Language::ALL {
            assert!(catalog.iter().any(|info| info.language == language));
        }
        assert!(catalog
            .iter()
            .any(|info| info.code == "ST004" && info.language == Language::Json));
        assert!(catalog
            .iter()
            .any(|info| info.code == "ID001" && info.language == Language::Sql));
    }
}
