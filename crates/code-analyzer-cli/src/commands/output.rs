//! Shared output formatting for analysis results.

use anyhow::Result;
use code_analyzer_core::{Diagnostic, DiagnosticReport, Severity};
use std::fmt::Write;

use super::check::FileReport;
use crate::OutputFormat;

/// Print analysis results in the specified format.
pub fn print(reports: &[FileReport], format: OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Text => print!("{}", render_text(reports, true)),
        OutputFormat::Json => return print_json(reports),
        OutputFormat::Compact => print!("{}", render_compact(reports)),
        OutputFormat::Pretty => print_pretty(reports),
    }
    Ok(())
}

/// Counts diagnostics across all reports as `(errors, warnings, infos)`.
fn totals(reports: &[FileReport]) -> (usize, usize, usize) {
    reports.iter().fold((0, 0, 0), |(e, w, i), r| {
        let (re, rw, ri) = r.report.count_by_severity();
        (e + re, w + rw, i + ri)
    })
}

fn has_input(reports: &[FileReport]) -> bool {
    reports.iter().any(|r| !r.source.trim().is_empty())
}

fn position(report: &FileReport, diagnostic: &Diagnostic) -> String {
    match diagnostic.location {
        Some(l) => format!("{}:{}:{}", report.path, l.line, l.column),
        None => report.path.clone(),
    }
}

/// Renders the human-readable report, optionally with ANSI colors.
pub fn render_text(reports: &[FileReport], color: bool) -> String {
    let paint = |code: &str, text: &str| {
        if color {
            format!("\x1b[{code}m{text}\x1b[0m")
        } else {
            text.to_string()
        }
    };
    let mut out = String::new();

    if !has_input(reports) {
        let _ = writeln!(out, "No input");
        return out;
    }

    for report in reports {
        for diagnostic in &report.report.diagnostics {
            let severity = match diagnostic.severity {
                Severity::Error => paint("31", "error"),
                Severity::Warning => paint("33", "warning"),
                Severity::Info => paint("34", "info"),
            };
            let _ = writeln!(
                out,
                "{} {} at {}",
                diagnostic.code,
                diagnostic.rule,
                position(report, diagnostic)
            );
            let _ = writeln!(out, "  {}: {}", severity, diagnostic.message);
            if !diagnostic.suggestion.is_empty() {
                let _ = writeln!(out, "  = help: {}", diagnostic.suggestion);
            }
            let _ = writeln!(out);
        }
    }

    let (errors, warnings, infos) = totals(reports);
    if errors + warnings + infos == 0 {
        let _ = writeln!(out, "{}", paint("32", "No issues found"));
        return out;
    }

    let summary_color = if errors > 0 {
        "31"
    } else if warnings > 0 {
        "33"
    } else {
        "34"
    };
    let summary = format!(
        "Found {errors} error(s), {warnings} warning(s), {infos} info(s) in {} file(s)",
        reports.len()
    );
    let _ = writeln!(out, "{}", paint(summary_color, &summary));
    out
}

/// Renders one line per diagnostic: `path:line:column: severity [code] message`.
pub fn render_compact(reports: &[FileReport]) -> String {
    let mut out = String::new();
    for report in reports {
        for diagnostic in &report.report.diagnostics {
            let _ = writeln!(out, "{}:{}", report.path, diagnostic);
        }
    }
    out
}

fn print_json(reports: &[FileReport]) -> Result<()> {
    let json = serde_json::to_string_pretty(reports)?;
    println!("{json}");
    Ok(())
}

fn print_pretty(reports: &[FileReport]) {
    for report in reports {
        for diagnostic in &report.report.diagnostics {
            let rendered = miette::Report::new(DiagnosticReport::new(diagnostic, &report.source))
                .with_source_code(miette::NamedSource::new(
                    report.path.clone(),
                    report.source.clone(),
                ));
            println!("{rendered:?}");
        }
    }
    print!("{}", render_summary(reports));
}

fn render_summary(reports: &[FileReport]) -> String {
    if !has_input(reports) {
        return "No input\n".to_string();
    }
    let (errors, warnings, infos) = totals(reports);
    if errors + warnings + infos == 0 {
        "No issues found\n".to_string()
    } else {
        format!("{errors} error(s), {warnings} warning(s), {infos} info(s)\n")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use code_analyzer::{analyze, Language};
    use code_analyzer_core::AnalysisReport;

    fn report(path: &str, source: &str, language: Language) -> FileReport {
        FileReport {
            path: path.to_string(),
            source: source.to_string(),
            report: AnalysisReport::new(language, analyze(source, language)),
        }
    }

    #[test]
    fn compact_lists_one_line_per_diagnostic() {
        let reports = vec![
            report("query.sql", "CREATE TABLE SELECT (id INT);", Language::Sql),
            report("app.js", "function f() {", Language::JavaScript),
        ];
        insta::assert_snapshot!(render_compact(&reports), @r###"
        query.sql:1:8: error [SQ003] Invalid identifier name: reserved keyword
        query.sql:1:14: error [ID001] Invalid identifier name: 'SELECT' is a reserved keyword
        app.js:-1:-1: error [ST001] Mismatched braces
        "###);
    }

    #[test]
    fn empty_input_is_distinct_from_clean_input() {
        let blank = vec![report("<stdin>", "  \n", Language::Python)];
        assert_eq!(render_text(&blank, false), "No input\n");
        assert_eq!(render_summary(&blank), "No input\n");
        assert_eq!(render_summary(&[]), "No input\n");

        let clean = vec![report("ok.json", "{\"a\": 1}", Language::Json)];
        assert_eq!(render_text(&clean, false), "No issues found\n");
        assert_eq!(render_summary(&clean), "No issues found\n");
    }

    #[test]
    fn text_output_counts_by_severity() {
        let reports = vec![report("bad.json", "{\"a\": 1,}", Language::Json)];
        let text = render_text(&reports, false);
        assert!(text.contains("ST004 json-syntax at bad.json:1:"));
        assert!(text.contains("JN003 trailing-comma at bad.json:1:8"));
        assert!(text.ends_with("Found 2 error(s), 0 warning(s), 0 info(s) in 1 file(s)\n"));
        assert!(!text.contains('\x1b'));
        assert_eq!(
            render_summary(&reports),
            "2 error(s), 0 warning(s), 0 info(s)\n"
        );
    }

    #[test]
    fn file_level_diagnostics_show_only_the_path() {
        let reports = vec![report("a.c", "int main() {", Language::C)];
        let text = render_text(&reports, false);
        assert!(text.contains("ST001 delimiter-balance at a.c\n"));
    }
}
