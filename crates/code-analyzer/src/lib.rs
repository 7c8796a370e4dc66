//! # code-analyzer
//!
//! Multi-language static analysis for source snippets.
//!
//! This is the facade crate: it wires the built-in rules of
//! `code-analyzer-rules` into analyzers and re-exports the core types.
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use code_analyzer::{analyze, Language};
//!
//! for diagnostic in analyze("var x = 1", Language::JavaScript) {
//!     println!("{diagnostic}");
//! }
//! ```
//!
//! Analysis is synchronous and total: every input yields a list of
//! diagnostics, sorted by position with file-level findings last.
//!
//! ## Configuration
//!
//! ```rust,ignore
//! use code_analyzer::{analyze_with_config, Config, Language};
//!
//! let config = Config::parse("[rules.missing-semicolon]\nenabled = false\n")?;
//! let report = analyze_with_config("let x = 1", Language::JavaScript, &config)?;
//! assert!(report.is_empty());
//! ```

#![forbid(unsafe_code)]

pub use code_analyzer_core::*;

/// Built-in rules, profiles and the rule catalog.
pub mod rules {
    pub use code_analyzer_rules::*;
}

use once_cell::sync::Lazy;
use tracing::debug;

static ANALYZERS: Lazy<Vec<Analyzer>> = Lazy::new(|| {
    Language::ALL
        .into_iter()
        .filter_map(|language| build_analyzer(language, Config::default()).ok())
        .collect()
});

/// Builds an analyzer with every built-in rule for `language`.
///
/// # Errors
///
/// Returns an error if the analyzer cannot be built.
pub fn build_analyzer(language: Language, config: Config) -> Result<Analyzer, AnalyzerError> {
    Analyzer::builder()
        .language(language)
        .rules(code_analyzer_rules::rules_for(language))
        .config(config)
        .build()
}

/// Returns the shared default analyzer for `language`.
///
/// Analyzers are built on first use.
#[must_use]
pub fn analyzer_for(language: Language) -> Option<&'static Analyzer> {
    ANALYZERS.iter().find(|a| a.language() == language)
}

/// Analyzes `source` as `language` with the default configuration.
#[must_use]
pub fn analyze(source: &str, language: Language) -> Vec<Diagnostic> {
    analyzer_for(language)
        .map(|analyzer| analyzer.analyze(source).into_diagnostics())
        .unwrap_or_default()
}

/// Analyzes `source` as the language with the given id.
///
/// Ids are matched exactly (`javascript`, `cpp`, ...). Unknown ids yield no
/// diagnostics.
#[must_use]
pub fn analyze_id(source: &str, language_id: &str) -> Vec<Diagnostic> {
    match Language::ALL.into_iter().find(|l| l.id() == language_id) {
        Some(language) => analyze(source, language),
        None => {
            debug!("Unknown language id: {}", language_id);
            Vec::new()
        }
    }
}

/// Analyzes `source` with rules enabled, disabled and re-ranked by `config`.
///
/// # Errors
///
/// Returns an error if the analyzer cannot be built.
pub fn analyze_with_config(
    source: &str,
    language: Language,
    config: &Config,
) -> Result<AnalysisReport, AnalyzerError> {
    Ok(build_analyzer(language, config.clone())?.analyze(source))
}
