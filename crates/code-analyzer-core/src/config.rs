//! Configuration types for code-analyzer.

use crate::language::Language;
use crate::types::Severity;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::PathBuf;

/// Top-level configuration for code-analyzer.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Analyzer configuration.
    #[serde(default)]
    pub analyzer: AnalyzerConfig,

    /// Per-language configurations, keyed by language id.
    #[serde(default)]
    pub languages: HashMap<String, LanguageConfig>,

    /// Per-rule configurations, keyed by rule name or code.
    #[serde(default)]
    pub rules: HashMap<String, RuleConfig>,
}

impl Config {
    /// Creates a new default configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Loads configuration from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    pub fn from_file(path: &std::path::Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
            path: path.to_path_buf(),
            source: e,
        })?;
        Self::parse(&content)
    }

    /// Parses configuration from a TOML string.
    ///
    /// # Errors
    ///
    /// Returns an error if the TOML is invalid or names an unknown language.
    pub fn parse(content: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(content).map_err(|e| ConfigError::Parse {
            message: e.to_string(),
        })?;
        if let Some(unknown) = config
            .languages
            .keys()
            .find(|id| id.parse::<Language>().is_err())
        {
            return Err(ConfigError::UnknownLanguage(unknown.clone()));
        }
        Ok(config)
    }

    /// Checks if a rule is enabled. The rule may be keyed by name or code.
    #[must_use]
    pub fn is_rule_enabled(&self, name: &str, code: &str) -> bool {
        self.rule_config(name, code)
            .map_or(true, |c| c.enabled.unwrap_or(true))
    }

    /// Gets the severity override for a rule.
    #[must_use]
    pub fn rule_severity(&self, name: &str, code: &str) -> Option<Severity> {
        self.rule_config(name, code).and_then(|c| c.severity)
    }

    /// Gets the configuration entry for a rule, preferring the name key.
    #[must_use]
    pub fn rule_config(&self, name: &str, code: &str) -> Option<&RuleConfig> {
        self.rules.get(name).or_else(|| self.rules.get(code))
    }

    /// Checks if a language is enabled.
    #[must_use]
    pub fn is_language_enabled(&self, language: Language) -> bool {
        self.languages
            .get(language.id())
            .map_or(true, |c| c.enabled.unwrap_or(true))
    }

    /// Detects a language from a file extension, consulting extra extensions
    /// from configuration before the built-in table.
    #[must_use]
    pub fn language_for_extension(&self, ext: &str) -> Option<Language> {
        let bare = ext.strip_prefix('.').unwrap_or(ext);
        self.languages
            .iter()
            .find(|(_, c)| {
                c.extensions.iter().any(|known| {
                    known
                        .strip_prefix('.')
                        .unwrap_or(known)
                        .eq_ignore_ascii_case(bare)
                })
            })
            .and_then(|(id, _)| id.parse().ok())
            .or_else(|| Language::from_extension(bare))
    }
}

/// Analyzer-level configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalyzerConfig {
    /// Glob patterns to exclude when walking directories.
    #[serde(default)]
    pub exclude: Vec<String>,

    /// Whether to respect .gitignore files.
    #[serde(default = "default_true")]
    pub respect_gitignore: bool,

    /// Severity threshold that makes `check` exit with failure.
    #[serde(default)]
    pub fail_on: Option<Severity>,
}

impl Default for AnalyzerConfig {
    fn default() -> Self {
        Self {
            exclude: vec!["**/node_modules/**".to_string(), "**/target/**".to_string()],
            respect_gitignore: true,
            fail_on: None,
        }
    }
}

fn default_true() -> bool {
    true
}

/// Per-language configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LanguageConfig {
    /// Whether this language is analyzed at all.
    #[serde(default)]
    pub enabled: Option<bool>,

    /// Extra file extensions mapped to this language.
    #[serde(default)]
    pub extensions: Vec<String>,
}

/// Per-rule configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RuleConfig {
    /// Whether this rule is enabled.
    #[serde(default)]
    pub enabled: Option<bool>,

    /// Severity override for this rule.
    #[serde(default)]
    pub severity: Option<Severity>,
}

/// Configuration errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// IO error reading config file.
    #[error("Failed to read config file {path}: {source}")]
    Io {
        /// Path that failed to read.
        path: PathBuf,
        /// Underlying IO error.
        source: std::io::Error,
    },

    /// Parse error in config file.
    #[error("Failed to parse config: {message}")]
    Parse {
        /// Parse error message.
        message: String,
    },

    /// A `[languages.<id>]` table names an unsupported language.
    #[error("Unknown language in config: {0}")]
    UnknownLanguage(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert!(config.analyzer.respect_gitignore);
        assert!(config.rules.is_empty());
        assert!(config.is_language_enabled(Language::Sql));
    }

    #[test]
    fn test_parse_config() {
        let toml = r#"
[analyzer]
exclude = ["**/generated/**"]
fail_on = "warning"

[languages.python]
enabled = false

[languages.javascript]
extensions = [".mjs", "cjs"]

[rules.console-log]
enabled = false

[rules.JS002]
severity = "error"
"#;

        let config = Config::parse(toml).expect("Failed to parse");
        assert_eq!(config.analyzer.exclude, vec!["**/generated/**"]);
        assert_eq!(config.analyzer.fail_on, Some(Severity::Warning));
        assert!(!config.is_language_enabled(Language::Python));
        assert!(config.is_language_enabled(Language::JavaScript));
        assert!(!config.is_rule_enabled("console-log", "JS001"));
        assert!(config.is_rule_enabled("var-declaration", "JS002"));
        assert_eq!(
            config.rule_severity("var-declaration", "JS002"),
            Some(Severity::Error)
        );
        assert_eq!(
            config.language_for_extension("mjs"),
            Some(Language::JavaScript)
        );
        assert_eq!(config.language_for_extension(".CJS"), Some(Language::JavaScript));
        assert_eq!(config.language_for_extension("py"), Some(Language::Python));
    }

    #[test]
    fn name_key_wins_over_code_key() {
        let config = Config::parse(
            r#"
[rules.eval-call]
severity = "warning"

[rules.JS009]
severity = "info"
"#,
        )
        .expect("Failed to parse");
        assert_eq!(
            config.rule_severity("eval-call", "JS009"),
            Some(Severity::Warning)
        );
    }

    #[test]
    fn rejects_unknown_language_table() {
        let err = Config::parse("[languages.cobol]\nenabled = true\n").unwrap_err();
        assert!(matches!(err, ConfigError::UnknownLanguage(id) if id == "cobol"));
    }

    #[test]
    fn rejects_unknown_severity() {
        assert!(Config::parse("[rules.x]\nseverity = \"fatal\"\n").is_err());
    }
}
