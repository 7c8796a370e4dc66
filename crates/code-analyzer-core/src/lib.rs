//! # code-analyzer-core
//!
//! Core framework for multi-language source analysis.
//!
//! This crate provides the building blocks the language rules are made of:
//!
//! - [`Rule`] trait for rules that inspect one source text
//! - [`Pattern`] and [`PatternRule`] for regex rules with look-around guards
//! - [`classify`] with [`IdentifierSyntax`] and [`KeywordSet`] for names
//! - [`Analyzer`] for running rules and finalizing their output
//! - [`Diagnostic`] for representing findings
//!
//! ## Example
//!
//! ```ignore
//! use code_analyzer_core::{Analyzer, Language};
//!
//! let analyzer = Analyzer::builder()
//!     .language(Language::JavaScript)
//!     .rule(MyRule::new())
//!     .build()?;
//!
//! let report = analyzer.analyze("var x = 1;");
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod analyzer;
mod config;
mod context;
mod identifier;
mod language;
mod matcher;
pub mod pipeline;
mod profile;
mod rule;
mod types;

/// Utility modules for rule implementations.
pub mod utils;

pub use analyzer::{Analyzer, AnalyzerBuilder, AnalyzerError};
pub use config::{AnalyzerConfig, Config, ConfigError, LanguageConfig, RuleConfig};
pub use context::SourceContext;
pub use identifier::{classify, IdentifierSyntax, KeywordSet, NameVerdict};
pub use language::{Language, UnknownLanguage};
pub use matcher::{Pattern, PatternRule, PatternSpec, FOCUS_GROUP};
pub use profile::LanguageProfile;
pub use rule::{Rule, RuleBox, Stage};
pub use types::{
    AnalysisReport, Diagnostic, DiagnosticReport, InvalidPosition, Location, Severity,
    UnknownSeverity,
};
