//! Languages command implementation.

use anyhow::Result;
use code_analyzer_core::{Config, Language};
use std::path::Path;

use crate::config_resolver::{self, ConfigResolver};

/// Runs the languages command with the config governing the working directory.
pub fn run(explicit_config: Option<&Path>) -> Result<()> {
    let source = ConfigResolver::new(explicit_config).resolve(Path::new("."));
    let config = config_resolver::load(&source)?;
    print!("{}", render(&config));
    Ok(())
}

/// Renders the language table, including extensions added by `config`.
fn render(config: &Config) -> String {
    let mut out = format!("{:<12} {:<12} Extensions\n", "Id", "Language");
    out.push_str(&"-".repeat(48));
    out.push('\n');

    for language in Language::ALL {
        let mut extensions: Vec<String> = language
            .extensions()
            .iter()
            .map(ToString::to_string)
            .collect();
        if let Some(extra) = config.languages.get(language.id()) {
            extensions.extend(extra.extensions.iter().map(|e| {
                if e.starts_with('.') {
                    e.clone()
                } else {
                    format!(".{e}")
                }
            }));
        }
        let status = if config.is_language_enabled(language) {
            ""
        } else {
            " (disabled)"
        };
        out.push_str(&format!(
            "{:<12} {:<12} {}{}\n",
            language.id(),
            language.label(),
            extensions.join(" "),
            status
        ));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lists_every_language() {
        let table = render(&Config::default());
        for language in Language::ALL {
            assert!(table.contains(language.label()));
        }
        assert!(table.contains(".cpp .hpp .cc"));
    }

    #[test]
    fn shows_configured_extensions_and_disabled_languages() {
        let config = Config::parse(
            "[languages.javascript]\nextensions = [\"mjs\", \".cjs\"]\n\n[languages.xml]\nenabled = false\n",
        )
        .unwrap();
        let table = render(&config);
        assert!(table.contains(".js .jsx .mjs .cjs"));
        assert!(table.contains(".xml (disabled)"));
    }
}
