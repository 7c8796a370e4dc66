//! Core analyzer for orchestrating rule execution.

use crate::config::{Config, RuleConfig};
use crate::context::SourceContext;
use crate::language::Language;
use crate::pipeline;
use crate::rule::{Rule, RuleBox};
use crate::types::{AnalysisReport, Diagnostic};

use thiserror::Error;
use tracing::{debug, trace};

/// Errors that can occur while building an analyzer.
#[derive(Debug, Error)]
pub enum AnalyzerError {
    /// No language was given to the builder.
    #[error("no language set for analyzer")]
    MissingLanguage,

    /// Configuration error.
    #[error("Configuration error: {0}")]
    Config(#[from] crate::config::ConfigError),
}

/// Builder for configuring an [`Analyzer`].
#[derive(Default)]
pub struct AnalyzerBuilder {
    language: Option<Language>,
    rules: Vec<RuleBox>,
    config: Option<Config>,
}

impl AnalyzerBuilder {
    /// Creates a new builder with default settings.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the language the analyzer runs for.
    #[must_use]
    pub fn language(mut self, language: Language) -> Self {
        self.language = Some(language);
        self
    }

    /// Adds a rule to the analyzer.
    #[must_use]
    pub fn rule<R: Rule + 'static>(mut self, rule: R) -> Self {
        self.rules.push(Box::new(rule));
        self
    }

    /// Adds a boxed rule to the analyzer.
    #[must_use]
    pub fn rule_box(mut self, rule: RuleBox) -> Self {
        self.rules.push(rule);
        self
    }

    /// Adds multiple boxed rules to the analyzer.
    #[must_use]
    pub fn rules<I>(mut self, rules: I) -> Self
    where
        I: IntoIterator<Item = RuleBox>,
    {
        self.rules.extend(rules);
        self
    }

    /// Sets the configuration.
    #[must_use]
    pub fn config(mut self, config: Config) -> Self {
        self.config = Some(config);
        self
    }

    /// Builds the analyzer.
    ///
    /// Rules are ordered by stage; registration order is kept within a stage.
    ///
    /// # Errors
    ///
    /// Returns an error if no language was set.
    pub fn build(self) -> Result<Analyzer, AnalyzerError> {
        let language = self.language.ok_or(AnalyzerError::MissingLanguage)?;
        let mut rules = self.rules;
        rules.sort_by_key(|rule| rule.stage());

        let config = self.config.unwrap_or_default();
        for key in config.rules.keys() {
            if !rules.iter().any(|r| r.name() == key || r.code() == key) {
                debug!("Config entry `{}` matches no {} rule", key, language);
            }
        }

        Ok(Analyzer {
            language,
            rules,
            config,
        })
    }
}

/// Runs a fixed rule set over source texts of one language.
///
/// Use [`Analyzer::builder()`] to construct an instance. An analyzer holds
/// no per-call state and can be shared between threads.
pub struct Analyzer {
    language: Language,
    rules: Vec<RuleBox>,
    config: Config,
}

impl Analyzer {
    /// Creates a new builder for configuring an analyzer.
    #[must_use]
    pub fn builder() -> AnalyzerBuilder {
        AnalyzerBuilder::new()
    }

    /// Returns the language this analyzer runs for.
    #[must_use]
    pub fn language(&self) -> Language {
        self.language
    }

    /// Returns the number of registered rules.
    #[must_use]
    pub fn rule_count(&self) -> usize {
        self.rules.len()
    }

    /// Returns the registered rules in execution order.
    pub fn rules(&self) -> impl Iterator<Item = &dyn Rule> {
        self.rules.iter().map(AsRef::as_ref)
    }

    /// Analyzes one source text.
    ///
    /// Never fails: every input yields a (possibly empty) report. Blank
    /// input is not analyzed and yields an empty report.
    #[must_use]
    pub fn analyze(&self, source: &str) -> AnalysisReport {
        if !self.config.is_language_enabled(self.language) {
            debug!("Skipping disabled language: {}", self.language);
            return AnalysisReport::new(self.language, Vec::new());
        }
        if source.trim().is_empty() {
            debug!("Skipping blank {} input", self.language);
            return AnalysisReport::new(self.language, Vec::new());
        }

        let ctx = SourceContext::new(source, self.language);
        let mut candidates = Vec::new();

        for rule in &self.rules {
            if !self.config.is_rule_enabled(rule.name(), rule.code()) {
                debug!("Skipping disabled rule: {}", rule.name());
                continue;
            }

            let found = rule.check(&ctx);
            trace!("{} produced {} candidates", rule.name(), found.len());
            candidates.extend(self.apply_severity_override(rule.as_ref(), found));
        }

        let diagnostics = pipeline::finalize(candidates);
        debug!(
            "Analyzed {} lines of {}: {} diagnostics",
            ctx.line_count(),
            self.language,
            diagnostics.len()
        );

        AnalysisReport::new(self.language, diagnostics)
    }

    /// Applies severity overrides from configuration.
    fn apply_severity_override(
        &self,
        rule: &dyn Rule,
        mut diagnostics: Vec<Diagnostic>,
    ) -> Vec<Diagnostic> {
        if let Some(severity) = self.config.rule_severity(rule.name(), rule.code()) {
            for d in &mut diagnostics {
                d.severity = severity;
            }
        }
        diagnostics
    }

    /// Gets the configuration entry for a rule.
    #[must_use]
    pub fn rule_config(&self, name: &str, code: &str) -> Option<&RuleConfig> {
        self.config.rule_config(name, code)
    }
}
