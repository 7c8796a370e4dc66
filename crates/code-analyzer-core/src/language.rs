//! Supported source languages.

use serde::{Deserialize, Serialize};
use std::path::Path;
use std::str::FromStr;

/// A language the engine can analyze.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    /// JavaScript (`.js`, `.jsx`).
    JavaScript,
    /// Python (`.py`).
    Python,
    /// Java (`.java`).
    Java,
    /// C++ (`.cpp`, `.hpp`, `.cc`).
    Cpp,
    /// C (`.c`, `.h`).
    C,
    /// HTML (`.html`, `.htm`).
    Html,
    /// CSS (`.css`).
    Css,
    /// JSON (`.json`).
    Json,
    /// XML (`.xml`).
    Xml,
    /// SQL (`.sql`).
    Sql,
}

impl Language {
    /// Every supported language, in display order.
    pub const ALL: [Language; 10] = [
        Self::JavaScript,
        Self::Python,
        Self::Java,
        Self::Cpp,
        Self::C,
        Self::Html,
        Self::Css,
        Self::Json,
        Self::Xml,
        Self::Sql,
    ];

    /// Stable identifier used on the wire and in configuration.
    #[must_use]
    pub const fn id(self) -> &'static str {
        match self {
            Self::JavaScript => "javascript",
            Self::Python => "python",
            Self::Java => "java",
            Self::Cpp => "cpp",
            Self::C => "c",
            Self::Html => "html",
            Self::Css => "css",
            Self::Json => "json",
            Self::Xml => "xml",
            Self::Sql => "sql",
        }
    }

    /// Human-readable name.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::JavaScript => "JavaScript",
            Self::Python => "Python",
            Self::Java => "Java",
            Self::Cpp => "C++",
            Self::C => "C",
            Self::Html => "HTML",
            Self::Css => "CSS",
            Self::Json => "JSON",
            Self::Xml => "XML",
            Self::Sql => "SQL",
        }
    }

    /// File extensions (with leading dot) associated with this language.
    #[must_use]
    pub const fn extensions(self) -> &'static [&'static str] {
        match self {
            Self::JavaScript => &[".js", ".jsx"],
            Self::Python => &[".py"],
            Self::Java => &[".java"],
            Self::Cpp => &[".cpp", ".hpp", ".cc"],
            Self::C => &[".c", ".h"],
            Self::Html => &[".html", ".htm"],
            Self::Css => &[".css"],
            Self::Json => &[".json"],
            Self::Xml => &[".xml"],
            Self::Sql => &[".sql"],
        }
    }

    /// Looks up a language by file extension, with or without the leading dot.
    ///
    /// Matching is ASCII case-insensitive.
    #[must_use]
    pub fn from_extension(ext: &str) -> Option<Self> {
        let ext = ext.strip_prefix('.').unwrap_or(ext);
        Self::ALL.into_iter().find(|lang| {
            lang.extensions()
                .iter()
                .any(|known| known[1..].eq_ignore_ascii_case(ext))
        })
    }

    /// Detects the language of a file from its extension.
    #[must_use]
    pub fn from_path(path: &Path) -> Option<Self> {
        path.extension()
            .and_then(|ext| ext.to_str())
            .and_then(Self::from_extension)
    }
}

impl std::fmt::Display for Language {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.id())
    }
}

/// Error returned for a language identifier outside the supported set.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown language `{0}`")]
pub struct UnknownLanguage(pub String);

impl FromStr for Language {
    type Err = UnknownLanguage;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|lang| lang.id().eq_ignore_ascii_case(s))
            .ok_or_else(|| UnknownLanguage(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ids_round_trip_through_from_str() {
        for lang in Language::ALL {
            assert_eq!(lang.id().parse::<Language>(), Ok(lang));
        }
    }

    #[test]
    fn unknown_id_is_rejected() {
        assert_eq!(
            "rust".parse::<Language>(),
            Err(UnknownLanguage("rust".to_string()))
        );
    }

    #[test]
    fn detects_extensions() {
        assert_eq!(Language::from_extension(".jsx"), Some(Language::JavaScript));
        assert_eq!(Language::from_extension("HPP"), Some(Language::Cpp));
        assert_eq!(Language::from_extension("h"), Some(Language::C));
        assert_eq!(Language::from_extension("rs"), None);
        assert_eq!(
            Language::from_path(Path::new("db/schema.sql")),
            Some(Language::Sql)
        );
        assert_eq!(Language::from_path(Path::new("Makefile")), None);
    }

    #[test]
    fn labels() {
        assert_eq!(Language::Cpp.label(), "C++");
        assert_eq!(Language::Json.to_string(), "json");
    }
}
