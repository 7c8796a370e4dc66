//! Init command implementation.

use anyhow::{bail, Context, Result};
use std::path::Path;

const DEFAULT_CONFIG: &str = r#"# code-analyzer configuration

[analyzer]
# Glob patterns to exclude when walking directories
exclude = [
    "**/node_modules/**",
    "**/target/**",
]

# Respect .gitignore files
respect_gitignore = true

# Lowest severity that makes `check` exit with status 1 (default: "error")
# fail_on = "warning"

# Language settings, keyed by language id
# (javascript, python, java, cpp, c, html, css, json, xml, sql)

# [languages.javascript]
# extensions = ["mjs", "cjs"]

# [languages.xml]
# enabled = false

# Rule settings, keyed by rule name or code
# Each rule can be disabled and have its severity overridden

# [rules.console-log]
# enabled = false

# [rules.ST002]
# severity = "info"
"#;

/// Name of the file written by `init`.
const CONFIG_FILE: &str = "code-analyzer.toml";

/// Runs the init command.
pub fn run(force: bool) -> Result<()> {
    write_config(Path::new(CONFIG_FILE), force)?;

    println!("Created {CONFIG_FILE}");
    println!("\nNext steps:");
    println!("  1. Edit {CONFIG_FILE} to configure languages and rules");
    println!("  2. Run: code-analyzer check");

    Ok(())
}

fn write_config(path: &Path, force: bool) -> Result<()> {
    if path.exists() && !force {
        bail!(
            "Configuration file already exists at {}. Use --force to overwrite.",
            path.display()
        );
    }
    std::fs::write(path, DEFAULT_CONFIG)
        .with_context(|| format!("Failed to write {}", path.display()))
}
