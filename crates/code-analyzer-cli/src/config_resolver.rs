//! Per-input configuration lookup.
//!
//! Every analyzed path is governed by the nearest config file above it:
//!
//! 1. `--config` (or `CODE_ANALYZER_CONFIG`) applies to every input
//! 2. otherwise the closest `code-analyzer.toml` or `.code-analyzer.toml`
//!    in the input's directory or one of its ancestors
//! 3. otherwise built-in defaults
//!
//! The upward search stops after the first directory that holds `.git`, so
//! a repository never picks up a config from outside itself. Config files
//! do not merge: a nested file replaces its parent's settings for the
//! subtree below it.

use anyhow::{Context, Result};
use code_analyzer_core::Config;
use std::collections::HashMap;
use std::fmt;
use std::path::{Path, PathBuf};

/// Config file names, checked in order within each directory.
pub const CONFIG_NAMES: &[&str] = &["code-analyzer.toml", ".code-analyzer.toml"];

/// Marker of a repository root, where the upward search ends.
const REPOSITORY_MARKER: &str = ".git";

/// Where an input's configuration comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigSource {
    /// Given on the command line.
    Explicit(PathBuf),
    /// Nearest config file above the input.
    Discovered(PathBuf),
    /// No config file applies.
    Default,
}

impl ConfigSource {
    /// Returns the config file path, if any.
    #[must_use]
    pub fn path(&self) -> Option<&Path> {
        match self {
            Self::Explicit(p) | Self::Discovered(p) => Some(p),
            Self::Default => None,
        }
    }
}

impl fmt::Display for ConfigSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.path() {
            Some(p) => write!(f, "{}", p.display()),
            None => f.write_str("built-in defaults"),
        }
    }
}

/// Finds the config file for each input, memoizing per directory.
#[derive(Debug, Default)]
pub struct ConfigResolver {
    explicit: Option<PathBuf>,
    by_dir: HashMap<PathBuf, Option<PathBuf>>,
}

impl ConfigResolver {
    /// Creates a resolver. An `explicit` path overrides discovery.
    #[must_use]
    pub fn new(explicit: Option<&Path>) -> Self {
        Self {
            explicit: explicit.map(Path::to_path_buf),
            by_dir: HashMap::new(),
        }
    }

    /// Resolves the configuration governing `input`, a file or directory.
    pub fn resolve(&mut self, input: &Path) -> ConfigSource {
        if let Some(p) = &self.explicit {
            return ConfigSource::Explicit(p.clone());
        }
        match self.nearest(&search_start(input)) {
            Some(p) => ConfigSource::Discovered(p),
            None => ConfigSource::Default,
        }
    }

    fn nearest(&mut self, dir: &Path) -> Option<PathBuf> {
        let mut visited = Vec::new();
        let mut found = None;

        for ancestor in dir.ancestors() {
            if let Some(cached) = self.by_dir.get(ancestor) {
                found.clone_from(cached);
                break;
            }
            visited.push(ancestor.to_path_buf());
            found = CONFIG_NAMES
                .iter()
                .map(|name| ancestor.join(name))
                .find(|p| p.is_file());
            if found.is_some() || ancestor.join(REPOSITORY_MARKER).exists() {
                break;
            }
        }

        for dir in visited {
            self.by_dir.insert(dir, found.clone());
        }
        found
    }
}

/// Directory where the search for `input` begins, made absolute when
/// possible so relative inputs still see configs above the working directory.
fn search_start(input: &Path) -> PathBuf {
    let dir = if input.is_dir() {
        input
    } else {
        input.parent().unwrap_or(input)
    };
    let dir = if dir.as_os_str().is_empty() {
        Path::new(".")
    } else {
        dir
    };
    std::fs::canonicalize(dir).unwrap_or_else(|_| dir.to_path_buf())
}

/// Loads the configuration a resolution points at.
///
/// # Errors
///
/// Returns an error if the file cannot be read or parsed.
pub fn load(source: &ConfigSource) -> Result<Config> {
    let Some(path) = source.path() else {
        return Ok(Config::default());
    };
    tracing::debug!("Loading config: {}", path.display());
    Config::from_file(path).with_context(|| format!("Failed to load config: {}", path.display()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    /// A temporary repository root, canonicalized so paths compare equal.
    fn repo() -> (TempDir, PathBuf) {
        let tmp = TempDir::new().unwrap();
        let root = tmp.path().canonicalize().unwrap();
        fs::create_dir(root.join(REPOSITORY_MARKER)).unwrap();
        (tmp, root)
    }

    fn touch(path: &Path, content: &str) {
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(path, content).unwrap();
    }

    #[test]
    fn nearest_config_governs_each_file() {
        let (_tmp, root) = repo();
        touch(&root.join("code-analyzer.toml"), "");
        touch(&root.join("web/code-analyzer.toml"), "");
        touch(&root.join("web/src/app.js"), "");
        touch(&root.join("db/schema.sql"), "");

        let mut resolver = ConfigResolver::new(None);
        assert_eq!(
            resolver.resolve(&root.join("web/src/app.js")),
            ConfigSource::Discovered(root.join("web/code-analyzer.toml"))
        );
        assert_eq!(
            resolver.resolve(&root.join("db/schema.sql")),
            ConfigSource::Discovered(root.join("code-analyzer.toml"))
        );
        assert_eq!(
            resolver.resolve(&root.join("web")),
            ConfigSource::Discovered(root.join("web/code-analyzer.toml"))
        );
    }

    #[test]
    fn plain_name_preferred_over_dot_prefix() {
        let (_tmp, root) = repo();
        touch(&root.join(".code-analyzer.toml"), "");
        let mut resolver = ConfigResolver::new(None);
        assert_eq!(
            resolver.resolve(&root),
            ConfigSource::Discovered(root.join(".code-analyzer.toml"))
        );

        touch(&root.join("code-analyzer.toml"), "");
        let mut resolver = ConfigResolver::new(None);
        assert_eq!(
            resolver.resolve(&root),
            ConfigSource::Discovered(root.join("code-analyzer.toml"))
        );
    }

    #[test]
    fn explicit_config_overrides_discovery() {
        let (_tmp, root) = repo();
        touch(&root.join("code-analyzer.toml"), "");
        let explicit = root.join("ci.toml");

        let mut resolver = ConfigResolver::new(Some(&explicit));
        assert_eq!(
            resolver.resolve(&root.join("a.js")),
            ConfigSource::Explicit(explicit)
        );
    }

    #[test]
    fn search_stops_at_repository_root() {
        let tmp = TempDir::new().unwrap();
        let outer = tmp.path().canonicalize().unwrap();
        touch(&outer.join("code-analyzer.toml"), "");
        touch(&outer.join("repo/.git/HEAD"), "");
        touch(&outer.join("repo/lib/util.py"), "");

        let mut resolver = ConfigResolver::new(None);
        assert_eq!(
            resolver.resolve(&outer.join("repo/lib/util.py")),
            ConfigSource::Default
        );
        assert_eq!(
            resolver.resolve(&outer.join("util.py")),
            ConfigSource::Discovered(outer.join("code-analyzer.toml"))
        );
    }

    #[test]
    fn lookups_are_memoized_per_directory() {
        let (_tmp, root) = repo();
        touch(&root.join("code-analyzer.toml"), "");
        touch(&root.join("a/b/one.c"), "");

        let mut resolver = ConfigResolver::new(None);
        let first = resolver.resolve(&root.join("a/b/one.c"));
        fs::remove_file(root.join("code-analyzer.toml")).unwrap();

        assert_eq!(resolver.resolve(&root.join("a/b/two.c")), first);
        assert_eq!(resolver.resolve(&root.join("a")), first);
        assert_eq!(
            ConfigResolver::new(None).resolve(&root.join("a/b/one.c")),
            ConfigSource::Default
        );
    }

    #[test]
    fn default_source_describes_itself() {
        assert_eq!(ConfigSource::Default.to_string(), "built-in defaults");
        assert!(ConfigSource::Default.path().is_none());
    }

    #[test]
    fn load_default_source_yields_default_config() {
        assert_eq!(load(&ConfigSource::Default).unwrap(), Config::default());
    }

    #[test]
    fn load_reads_rule_overrides() {
        let (_tmp, root) = repo();
        let path = root.join("code-analyzer.toml");
        touch(
            &path,
            "[analyzer]\nfail_on = \"warning\"\n\n[rules.JS001]\nenabled = false\n",
        );

        let config = load(&ConfigSource::Discovered(path)).unwrap();
        assert_eq!(
            config.analyzer.fail_on,
            Some(code_analyzer_core::Severity::Warning)
        );
        assert!(!config.is_rule_enabled("console-log", "JS001"));
    }

    #[test]
    fn load_reports_unknown_language_tables() {
        let (_tmp, root) = repo();
        let path = root.join("code-analyzer.toml");
        touch(&path, "[languages.cobol]\nenabled = true\n");

        let err = load(&ConfigSource::Discovered(path)).unwrap_err();
        assert!(format!("{err:#}").contains("cobol"));
    }

    #[test]
    fn load_missing_explicit_file_fails() {
        let (_tmp, root) = repo();
        let err = load(&ConfigSource::Explicit(root.join("missing.toml"))).unwrap_err();
        assert!(err.to_string().contains("Failed to load config"));
    }
}
