//! Identifier validators.
//!
//! A validator harvests declared names from comment-blanked text with a set
//! of per-language templates and classifies each one. Valid names are
//! remembered, malformed names and reserved keywords become errors placed
//! at the harvested name. JavaScript additionally runs a token pass over the
//! original text that reports names it never saw declared.
//!
//! Validators exist for JavaScript, Python, Java, C, C++ and SQL.

mod c_family;
mod java;
mod javascript;
mod python;
mod sql;

use crate::profiles::profile;
use code_analyzer_core::utils::{split_top_level, Segment};
use code_analyzer_core::{
    classify, Diagnostic, Language, LanguageProfile, NameVerdict, Rule, Severity, SourceContext,
    Stage,
};
use std::collections::HashSet;

/// Rule code for identifier-validator.
pub const CODE: &str = "ID001";

/// Rule name for identifier-validator.
pub const NAME: &str = "identifier-validator";

/// Brackets that nest inside parameter and column lists.
pub(crate) const BRACKETS: &[(char, char)] = &[('(', ')'), ('[', ']'), ('{', '}')];

/// Harvesting grammar a validator uses.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Dialect {
    /// Declarations, parameters, imports and the undeclared-token pass.
    JavaScript,
    /// Assignments, definitions, parameters and imports.
    Python,
    /// Typed declarations and method parameters.
    Java,
    /// Typed declarations and function parameters for C and C++.
    CFamily,
    /// Table and column names.
    Sql,
}

impl Dialect {
    /// Returns the dialect for a language, `None` when it has no validator.
    #[must_use]
    pub fn for_language(language: Language) -> Option<Self> {
        match language {
            Language::JavaScript => Some(Self::JavaScript),
            Language::Python => Some(Self::Python),
            Language::Java => Some(Self::Java),
            Language::Cpp | Language::C => Some(Self::CFamily),
            Language::Sql => Some(Self::Sql),
            Language::Html | Language::Css | Language::Json | Language::Xml => None,
        }
    }
}

/// Wording of validator diagnostics for one language.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Vocabulary {
    noun: &'static str,
    invalid_suggestion: &'static str,
    keyword_suggestion: String,
}

impl Vocabulary {
    fn for_language(language: Language) -> Self {
        match language {
            Language::Sql => Self {
                noun: "identifier",
                invalid_suggestion: "Identifiers must start with a letter or underscore and contain only letters, digits, or underscores.",
                keyword_suggestion: "Choose a different name that is not an SQL reserved keyword or use quoted identifiers.".to_string(),
            },
            Language::JavaScript | Language::Java => Self {
                noun: "variable",
                invalid_suggestion: "Variable names must start with a letter, underscore, or dollar sign and contain only letters, digits, underscores, or dollar signs.",
                keyword_suggestion: Self::keyword_suggestion(language),
            },
            _ => Self {
                noun: "variable",
                invalid_suggestion: "Variable names must start with a letter or underscore and contain only letters, digits, or underscores.",
                keyword_suggestion: Self::keyword_suggestion(language),
            },
        }
    }

    fn keyword_suggestion(language: Language) -> String {
        format!(
            "Choose a different name that is not a {} reserved keyword.",
            language.label()
        )
    }

    pub(crate) fn invalid_message(&self, name: &str) -> String {
        format!("Invalid {} name: '{}'", self.noun, name)
    }

    pub(crate) fn keyword_message(&self, name: &str) -> String {
        format!("Invalid {} name: '{}' is a reserved keyword", self.noun, name)
    }
}

/// Per-call state: the declared names, the keys already reported and the
/// diagnostics produced so far.
pub(crate) struct DeclarationCollector<'a> {
    ctx: &'a SourceContext<'a>,
    profile: &'a LanguageProfile,
    vocabulary: &'a Vocabulary,
    declared: HashSet<&'a str>,
    /// Keys of names already reported, invalid or undeclared alike.
    ///
    /// The key carries the token text, so a single set suppresses repeats
    /// for both passes without one masking the other.
    reported: HashSet<(usize, usize, &'a str)>,
    diagnostics: Vec<Diagnostic>,
}

impl<'a> DeclarationCollector<'a> {
    fn new(
        ctx: &'a SourceContext<'a>,
        profile: &'a LanguageProfile,
        vocabulary: &'a Vocabulary,
    ) -> Self {
        Self {
            ctx,
            profile,
            vocabulary,
            declared: HashSet::new(),
            reported: HashSet::new(),
            diagnostics: Vec::new(),
        }
    }

    pub(crate) fn vocabulary(&self) -> &'a Vocabulary {
        self.vocabulary
    }

    pub(crate) fn is_keyword(&self, name: &str) -> bool {
        self.profile.keywords().contains(name)
    }

    pub(crate) fn is_declared(&self, name: &str) -> bool {
        self.declared.contains(name)
    }

    /// Classifies a harvested name and records the outcome.
    ///
    /// Empty segments are ignored.
    pub(crate) fn offer(&mut self, name: Segment<'a>) -> Option<NameVerdict> {
        if name.is_empty() {
            return None;
        }
        let verdict = classify(
            name.text,
            self.profile.identifier_syntax(),
            self.profile.keywords(),
        );
        match verdict {
            NameVerdict::Valid => {
                self.declared.insert(name.text);
            }
            NameVerdict::InvalidSyntax => {
                let message = self.vocabulary.invalid_message(name.text);
                let suggestion = self.vocabulary.invalid_suggestion;
                self.error(name, message, suggestion);
            }
            NameVerdict::ReservedKeyword => {
                let message = self.vocabulary.keyword_message(name.text);
                let suggestion = self.vocabulary.keyword_suggestion.clone();
                self.error(name, message, suggestion);
            }
        }
        Some(verdict)
    }

    /// Returns false if `token` was already reported at `offset`.
    pub(crate) fn first_report(&mut self, offset: usize, token: &'a str) -> bool {
        let (line, column) = self.ctx.position(offset);
        self.reported.insert((line, column, token))
    }

    /// Adds a diagnostic anchored at `name`.
    pub(crate) fn report(
        &mut self,
        name: Segment<'_>,
        severity: Severity,
        message: String,
        suggestion: impl Into<String>,
    ) {
        let location = self.ctx.location(name.offset, name.text.len());
        self.diagnostics.push(
            Diagnostic::new(CODE, NAME, severity, Some(location), message)
                .with_suggestion(suggestion)
                .with_matched_text(name.text),
        );
    }

    fn error(&mut self, name: Segment<'_>, message: String, suggestion: impl Into<String>) {
        self.report(name, Severity::Error, message, suggestion);
    }

    fn finish(self) -> Vec<Diagnostic> {
        self.diagnostics
    }
}

/// Returns the part of `segment` before the first `separator` that is not
/// nested inside brackets.
pub(crate) fn before_top_level(segment: Segment<'_>, separator: char) -> Segment<'_> {
    split_top_level(segment.text, segment.offset, separator, BRACKETS)
        .into_iter()
        .next()
        .unwrap_or(segment)
}

/// Removes every leading character in `chars`.
pub(crate) fn trim_leading<'s>(segment: Segment<'s>, chars: &[char]) -> Segment<'s> {
    let rest = segment.text.trim_start_matches(chars);
    Segment::new(rest, segment.offset + (segment.text.len() - rest.len()))
}

/// Validates the names a source text declares.
#[derive(Debug, Clone)]
pub struct IdentifierValidator {
    dialect: Dialect,
    language: Language,
    vocabulary: Vocabulary,
}

impl IdentifierValidator {
    /// Creates the validator for a language, `None` when it has none.
    #[must_use]
    pub fn for_language(language: Language) -> Option<Self> {
        Dialect::for_language(language).map(|dialect| Self {
            dialect,
            language,
            vocabulary: Vocabulary::for_language(language),
        })
    }

    /// Returns the harvesting dialect.
    #[must_use]
    pub fn dialect(&self) -> Dialect {
        self.dialect
    }
}

impl Rule for IdentifierValidator {
    fn name(&self) -> &'static str {
        NAME
    }

    fn code(&self) -> &'static str {
        CODE
    }

    fn description(&self) -> &'static str {
        "Declared names must be well-formed and must not be reserved keywords"
    }

    fn stage(&self) -> Stage {
        Stage::Identifier
    }

    fn check(&self, ctx: &SourceContext) -> Vec<Diagnostic> {
        let comments = match self.dialect {
            Dialect::JavaScript => javascript::COMMENTS.span_set(ctx.content),
            Dialect::Python => python::COMMENTS.span_set(ctx.content),
            Dialect::Java | Dialect::CFamily => c_family::COMMENTS.span_set(ctx.content),
            Dialect::Sql => sql::COMMENTS.span_set(ctx.content),
        };
        let blanked = comments.blank(ctx.content);
        let mut collector =
            DeclarationCollector::new(ctx, profile(self.language), &self.vocabulary);

        match self.dialect {
            Dialect::JavaScript => {
                javascript::harvest(&blanked, &mut collector);
                javascript::scan_tokens(ctx.content, &comments, &mut collector);
            }
            Dialect::Python => python::harvest(&blanked, &mut collector),
            Dialect::Java => java::harvest(&blanked, &mut collector),
            Dialect::CFamily => c_family::harvest(&blanked, &mut collector),
            Dialect::Sql => sql::harvest(&blanked, &mut collector),
        }
        collector.finish()
    }
}
