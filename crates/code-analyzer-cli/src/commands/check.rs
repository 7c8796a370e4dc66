//! Check command implementation.

use anyhow::{bail, Context, Result};
use code_analyzer::build_analyzer;
use code_analyzer_core::{AnalysisReport, Analyzer, Config, Language, Severity};
use glob::Pattern;
use ignore::WalkBuilder;
use serde::Serialize;
use std::path::{Path, PathBuf};

use crate::config_resolver::{self, ConfigResolver, ConfigSource};
use crate::OutputFormat;

/// Name shown for input read from stdin.
pub const STDIN_NAME: &str = "<stdin>";

/// One analyzed input together with its source text.
#[derive(Debug, Serialize)]
pub struct FileReport {
    /// Display path, or `<stdin>`.
    pub path: String,
    /// Text that was analyzed.
    #[serde(skip)]
    pub source: String,
    /// Diagnostics for the input.
    #[serde(flatten)]
    pub report: AnalysisReport,
}

/// An input waiting to be analyzed.
#[derive(Debug, PartialEq, Eq)]
enum Input {
    Stdin(Language),
    File(PathBuf, Language),
}

/// An input and the index of the [`Scope`] that governs it.
#[derive(Debug, PartialEq, Eq)]
struct Planned {
    input: Input,
    scope: usize,
}

/// Everything derived from one configuration source.
struct Scope {
    source: ConfigSource,
    config: Config,
    excludes: Vec<Pattern>,
    analyzers: Vec<Analyzer>,
}

impl Scope {
    fn fail_on(&self) -> Severity {
        self.config.analyzer.fail_on.unwrap_or(Severity::Error)
    }

    fn is_excluded(&self, path: &Path) -> bool {
        self.excludes.iter().any(|p| p.matches_path(path))
    }
}

/// Scopes loaded so far, one per distinct configuration source.
struct Scopes {
    resolver: ConfigResolver,
    flag_excludes: Vec<String>,
    loaded: Vec<Scope>,
}

impl Scopes {
    fn new(explicit_config: Option<&Path>, flag_excludes: Vec<String>) -> Self {
        Self {
            resolver: ConfigResolver::new(explicit_config),
            flag_excludes,
            loaded: Vec::new(),
        }
    }

    /// Returns the index of the scope governing `path`, loading it on first use.
    fn for_path(&mut self, path: &Path) -> Result<usize> {
        let source = self.resolver.resolve(path);
        if let Some(index) = self.loaded.iter().position(|s| s.source == source) {
            return Ok(index);
        }

        let config = config_resolver::load(&source)?;
        tracing::debug!("Using {} for {}", source, path.display());

        let excludes = compile_excludes(config.analyzer.exclude.iter().chain(&self.flag_excludes))?;
        let analyzers = Language::ALL
            .into_iter()
            .map(|l| build_analyzer(l, config.clone()))
            .collect::<Result<Vec<_>, _>>()
            .with_context(|| format!("Failed to build analyzers from {source}"))?;

        self.loaded.push(Scope {
            source,
            config,
            excludes,
            analyzers,
        });
        Ok(self.loaded.len() - 1)
    }

    fn get(&self, index: usize) -> &Scope {
        &self.loaded[index]
    }
}

/// Runs the check command.
///
/// Each input is analyzed under its nearest config file, and each report is
/// held to that config's `fail_on` threshold.
pub fn run(
    paths: &[PathBuf],
    language: Option<Language>,
    format: OutputFormat,
    exclude: Vec<String>,
    explicit_config: Option<&Path>,
) -> Result<()> {
    let mut scopes = Scopes::new(explicit_config, exclude);
    let planned = collect_inputs(paths, language, &mut scopes)?;

    tracing::info!(
        "Analyzing {} input(s) with {} configuration(s)",
        planned.len(),
        scopes.loaded.len()
    );

    let mut reports = Vec::with_capacity(planned.len());
    let mut failed = false;
    for item in &planned {
        let scope = scopes.get(item.scope);
        let report = analyze_input(&item.input, &scope.analyzers)?;
        failed |= report.report.has_diagnostics_at(scope.fail_on());
        reports.push(report);
    }

    super::output::print(&reports, format)?;

    if failed {
        std::process::exit(1);
    }

    Ok(())
}

fn compile_excludes<'a>(patterns: impl IntoIterator<Item = &'a String>) -> Result<Vec<Pattern>> {
    patterns
        .into_iter()
        .map(|p| Pattern::new(p).with_context(|| format!("Invalid exclude pattern: {p}")))
        .collect()
}

fn collect_inputs(
    paths: &[PathBuf],
    language: Option<Language>,
    scopes: &mut Scopes,
) -> Result<Vec<Planned>> {
    let mut planned = Vec::new();

    for path in paths {
        if path.as_os_str() == "-" {
            let Some(lang) = language else {
                bail!("--language is required when reading from stdin");
            };
            let scope = scopes.for_path(Path::new("."))?;
            planned.push(Planned {
                input: Input::Stdin(lang),
                scope,
            });
        } else if path.is_dir() {
            walk(path, language, scopes, &mut planned)?;
        } else if path.is_file() {
            let scope = scopes.for_path(path)?;
            match language.or_else(|| detect(path, &scopes.get(scope).config)) {
                Some(lang) => planned.push(Planned {
                    input: Input::File(path.clone(), lang),
                    scope,
                }),
                None => bail!(
                    "Cannot infer the language of {}; pass --language",
                    path.display()
                ),
            }
        } else {
            bail!("No such file or directory: {}", path.display());
        }
    }

    Ok(planned)
}

/// Walks `root` with the root's gitignore setting, filtering and detecting
/// each file under its own scope.
fn walk(
    root: &Path,
    language: Option<Language>,
    scopes: &mut Scopes,
    planned: &mut Vec<Planned>,
) -> Result<()> {
    let root_scope = scopes.for_path(root)?;
    let respect_gitignore = scopes.get(root_scope).config.analyzer.respect_gitignore;
    let walker = WalkBuilder::new(root)
        .git_ignore(respect_gitignore)
        .git_global(respect_gitignore)
        .git_exclude(respect_gitignore)
        .sort_by_file_path(|a, b| a.cmp(b))
        .build();

    for entry in walker {
        let entry = match entry {
            Ok(entry) => entry,
            Err(e) => {
                tracing::warn!("Skipping unreadable entry: {}", e);
                continue;
            }
        };
        if !entry.file_type().is_some_and(|t| t.is_file()) {
            continue;
        }
        let path = entry.path();
        let index = scopes.for_path(path)?;
        let scope = scopes.get(index);
        if scope.is_excluded(path) {
            tracing::debug!("Excluded: {}", path.display());
            continue;
        }
        match language.or_else(|| detect(path, &scope.config)) {
            Some(lang) => planned.push(Planned {
                input: Input::File(path.to_path_buf(), lang),
                scope: index,
            }),
            None => tracing::trace!("No language for {}", path.display()),
        }
    }

    Ok(())
}

fn detect(path: &Path, config: &Config) -> Option<Language> {
    path.extension()
        .and_then(|ext| ext.to_str())
        .and_then(|ext| config.language_for_extension(ext))
}

fn analyze_input(input: &Input, analyzers: &[Analyzer]) -> Result<FileReport> {
    let (path, source, language) = match input {
        Input::Stdin(language) => {
            let source =
                std::io::read_to_string(std::io::stdin()).context("Failed to read stdin")?;
            (STDIN_NAME.to_string(), source, *language)
        }
        Input::File(path, language) => {
            let source = std::fs::read_to_string(path)
                .with_context(|| format!("Failed to read {}", path.display()))?;
            (path.display().to_string(), source, *language)
        }
    };

    let analyzer = analyzers
        .iter()
        .find(|a| a.language() == language)
        .with_context(|| format!("No analyzer for {language}"))?;

    tracing::debug!("Checking {} as {}", path, analyzer.language());
    Ok(FileReport {
        path,
        report: analyzer.analyze(&source),
        source,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    /// A temporary repository, so config discovery never leaves it.
    fn project() -> TempDir {
        let tmp = TempDir::new().unwrap();
        fs::create_dir(tmp.path().join(".git")).unwrap();
        tmp
    }

    fn write(root: &Path, relative: &str, content: &str) -> PathBuf {
        let path = root.join(relative);
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(&path, content).unwrap();
        path
    }

    fn plan(
        paths: &[PathBuf],
        language: Option<Language>,
        scopes: &mut Scopes,
    ) -> Vec<Planned> {
        collect_inputs(paths, language, scopes).unwrap()
    }

    fn files(planned: &[Planned], root: &Path) -> Vec<(String, Language)> {
        planned
            .iter()
            .filter_map(|p| match &p.input {
                Input::File(path, l) => Some((
                    path.strip_prefix(root)
                        .unwrap()
                        .to_string_lossy()
                        .replace('\\', "/"),
                    *l,
                )),
                Input::Stdin(_) => None,
            })
            .collect()
    }

    #[test]
    fn walk_infers_languages_and_skips_unknown_extensions() {
        let tmp = project();
        write(tmp.path(), "app.js", "let x = 1;");
        write(tmp.path(), "query.sql", "SELECT 1;");
        write(tmp.path(), "notes.txt", "hello");

        let mut scopes = Scopes::new(None, Vec::new());
        let planned = plan(&[tmp.path().to_path_buf()], None, &mut scopes);
        assert_eq!(
            files(&planned, tmp.path()),
            vec![
                ("app.js".to_string(), Language::JavaScript),
                ("query.sql".to_string(), Language::Sql),
            ]
        );
        assert_eq!(scopes.get(planned[0].scope).source, ConfigSource::Default);
    }

    #[test]
    fn excludes_and_extra_extensions_apply() {
        let tmp = project();
        write(tmp.path(), "code-analyzer.toml", "[languages.javascript]\nextensions = [\"mjs\"]\n");
        write(tmp.path(), "node_modules/dep.js", "x");
        write(tmp.path(), "main.mjs", "let x = 1;");

        let mut scopes = Scopes::new(None, Vec::new());
        let planned = plan(&[tmp.path().to_path_buf()], None, &mut scopes);
        assert_eq!(
            files(&planned, tmp.path()),
            vec![("main.mjs".to_string(), Language::JavaScript)]
        );
    }

    #[test]
    fn nested_config_governs_its_subtree() {
        let tmp = project();
        write(
            tmp.path(),
            "web/code-analyzer.toml",
            "[analyzer]\nexclude = [\"**/generated/**\"]\n\n[languages.javascript]\nextensions = [\"mjs\"]\n",
        );
        write(tmp.path(), "a.mjs", "");
        write(tmp.path(), "generated/x.js", "");
        write(tmp.path(), "web/b.mjs", "");
        write(tmp.path(), "web/generated/y.js", "");

        let mut scopes = Scopes::new(None, Vec::new());
        let planned = plan(&[tmp.path().to_path_buf()], None, &mut scopes);
        assert_eq!(
            files(&planned, tmp.path()),
            vec![
                ("generated/x.js".to_string(), Language::JavaScript),
                ("web/b.mjs".to_string(), Language::JavaScript),
            ]
        );
        assert_eq!(scopes.loaded.len(), 2);
        assert_eq!(scopes.get(planned[0].scope).source, ConfigSource::Default);
        assert!(matches!(
            &scopes.get(planned[1].scope).source,
            ConfigSource::Discovered(p) if p.ends_with("web/code-analyzer.toml")
        ));
    }

    #[test]
    fn nested_rule_overrides_and_threshold_apply_per_file() {
        let tmp = project();
        write(
            tmp.path(),
            "legacy/code-analyzer.toml",
            "[analyzer]\nfail_on = \"warning\"\n\n[rules.JS001]\nenabled = false\n",
        );
        write(tmp.path(), "a.js", "console.log(1);\n");
        write(tmp.path(), "legacy/b.js", "console.log(1);\n");

        let mut scopes = Scopes::new(None, Vec::new());
        let planned = plan(&[tmp.path().to_path_buf()], None, &mut scopes);
        assert_eq!(planned.len(), 2);

        let has_console_log = |item: &Planned| {
            let scope = scopes.get(item.scope);
            analyze_input(&item.input, &scope.analyzers)
                .unwrap()
                .report
                .diagnostics
                .iter()
                .any(|d| d.code == "JS001")
        };
        assert!(has_console_log(&planned[0]));
        assert!(!has_console_log(&planned[1]));
        assert_eq!(scopes.get(planned[0].scope).fail_on(), Severity::Error);
        assert_eq!(scopes.get(planned[1].scope).fail_on(), Severity::Warning);
    }

    #[test]
    fn explicit_config_applies_everywhere() {
        let tmp = project();
        let explicit = write(tmp.path(), "ci.toml", "[languages.javascript]\nextensions = [\"mjs\"]\n");
        write(tmp.path(), "sub/code-analyzer.toml", "[languages.xml]\nenabled = false\n");
        write(tmp.path(), "sub/c.mjs", "");

        let mut scopes = Scopes::new(Some(&explicit), Vec::new());
        let planned = plan(&[tmp.path().join("sub")], None, &mut scopes);
        assert_eq!(
            files(&planned, tmp.path()),
            vec![("sub/c.mjs".to_string(), Language::JavaScript)]
        );
        assert_eq!(scopes.loaded.len(), 1);
    }

    #[test]
    fn flag_excludes_apply_in_every_scope() {
        let tmp = project();
        write(tmp.path(), "web/code-analyzer.toml", "");
        write(tmp.path(), "a.js", "");
        write(tmp.path(), "a.min.js", "");
        write(tmp.path(), "web/b.min.js", "");

        let mut scopes = Scopes::new(None, vec!["**/*.min.js".to_string()]);
        let planned = plan(&[tmp.path().to_path_buf()], None, &mut scopes);
        assert_eq!(
            files(&planned, tmp.path()),
            vec![("a.js".to_string(), Language::JavaScript)]
        );
    }

    #[test]
    fn broken_nested_config_is_an_error() {
        let tmp = project();
        write(tmp.path(), "web/code-analyzer.toml", "[languages.cobol]\n");
        write(tmp.path(), "web/app.js", "");

        let mut scopes = Scopes::new(None, Vec::new());
        let err = collect_inputs(&[tmp.path().to_path_buf()], None, &mut scopes).unwrap_err();
        assert!(err.to_string().contains("Failed to load config"));
    }

    #[test]
    fn explicit_language_overrides_extension() {
        let tmp = project();
        let path = write(tmp.path(), "snippet.txt", "{}");

        let mut scopes = Scopes::new(None, Vec::new());
        let planned = plan(&[path.clone()], Some(Language::Json), &mut scopes);
        assert_eq!(planned[0].input, Input::File(path.clone(), Language::Json));

        assert!(collect_inputs(&[path], None, &mut scopes).is_err());
    }

    #[test]
    fn stdin_requires_language() {
        let tmp = project();
        let explicit = write(tmp.path(), "code-analyzer.toml", "");
        let mut scopes = Scopes::new(Some(&explicit), Vec::new());
        let dash = PathBuf::from("-");

        assert!(collect_inputs(&[dash.clone()], None, &mut scopes).is_err());
        let planned = plan(&[dash], Some(Language::Python), &mut scopes);
        assert_eq!(planned[0].input, Input::Stdin(Language::Python));
    }

    #[test]
    fn invalid_exclude_pattern_is_reported() {
        let bad = vec!["[".to_string()];
        let err = compile_excludes(&bad).unwrap_err();
        assert!(err.to_string().contains("Invalid exclude pattern"));
    }

    #[test]
    fn analyzes_file_with_matching_analyzer() {
        let tmp = project();
        let path = write(tmp.path(), "data.json", "{\"a\": 1,}");

        let analyzers: Vec<_> = Language::ALL
            .into_iter()
            .map(|l| build_analyzer(l, Config::default()).unwrap())
            .collect();
        let report = analyze_input(&Input::File(path, Language::Json), &analyzers).unwrap();
        assert_eq!(report.report.language, Language::Json);
        assert!(report.report.has_errors());
        assert_eq!(report.source, "{\"a\": 1,}");
    }
}
