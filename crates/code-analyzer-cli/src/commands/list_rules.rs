//! List rules command implementation.

use code_analyzer_rules::catalog;

/// Runs the list-rules command.
pub fn run() {
    println!("Available rules:\n");
    println!(
        "{:<12} {:<8} {:<32} {:<8} Description",
        "Language", "Code", "Name", "Severity"
    );
    println!("{}", "-".repeat(100));

    for info in catalog() {
        println!(
            "{:<12} {:<8} {:<32} {:<8} {}",
            info.language.label(),
            info.code,
            info.name,
            info.severity.to_string(),
            info.description
        );
    }

    println!("\nRule codes:");
    println!("  JS/PY/JV/CP/C/HT/CS/JN/XM/SQ  - per-language patterns");
    println!("  ST001-ST004                   - structural heuristics");
    println!("  ID001                         - identifier validator");

    println!("\nDisable a rule or change its severity in code-analyzer.toml, e.g.:");
    println!("  [rules.console-log]");
    println!("  enabled = false");
    println!("  [rules.ST002]");
    println!("  severity = \"info\"");
}
