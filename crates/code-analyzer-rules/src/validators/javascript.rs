//! JavaScript declarations and the undeclared-token pass.

use super::{before_top_level, DeclarationCollector, BRACKETS};
use crate::profiles::JAVASCRIPT_GLOBALS;
use code_analyzer_core::utils::{split_top_level, Segment, SpanSet, StaticRegex};
use code_analyzer_core::Severity;
use once_cell::sync::Lazy;
use regex::Captures;

pub(super) static COMMENTS: Lazy<StaticRegex> =
    Lazy::new(|| StaticRegex::new(r"/\*[\s\S]*?\*/|//.*"));

static DECLARATION: Lazy<StaticRegex> =
    Lazy::new(|| StaticRegex::new(r"(?:var|let|const)\s+([a-zA-Z_$][\w$]*)"));

static DESTRUCTURING: Lazy<StaticRegex> = Lazy::new(|| {
    StaticRegex::new(r"(?:var|let|const)\s+(?:\{([^}]+)\}|\[([^\]]+)\])\s*=")
});

static FUNCTION_NAME: Lazy<StaticRegex> = Lazy::new(|| {
    StaticRegex::new(
        r"function\s+([a-zA-Z_$][\w$]*)|(?:var|let|const)\s+([a-zA-Z_$][\w$]*)\s*=\s*(?:function|\([^)]*\)\s*=>)",
    )
});

static CLASS_NAME: Lazy<StaticRegex> =
    Lazy::new(|| StaticRegex::new(r"class\s+([a-zA-Z_$][\w$]*)"));

/// Parameter lists of function expressions and declarations, arrow
/// functions and `catch` clauses.
static PARAMETER_LISTS: Lazy<Vec<StaticRegex>> = Lazy::new(|| {
    [
        r"function\s*[\w$]*\s*\(([^)]*)\)",
        r"(?:async\s*)?\(([^)]*)\)\s*=>",
        r"catch\s*\(([^)]*)\)",
    ]
    .into_iter()
    .map(StaticRegex::new)
    .collect()
});

static METHOD_SHORTHAND: Lazy<StaticRegex> =
    Lazy::new(|| StaticRegex::new(r"([\w$]+)\s*\(([^)]*)\)\s*\{"));

static ARROW_PARAMETER: Lazy<StaticRegex> =
    Lazy::new(|| StaticRegex::new(r"([a-zA-Z_$][\w$]*)\s*=>"));

/// Keywords whose parenthesised clause is followed by a block.
const BLOCK_KEYWORDS: &[&str] = &["if", "for", "while", "switch", "catch", "with", "function"];

static IMPORT: Lazy<StaticRegex> = Lazy::new(|| {
    StaticRegex::new(r#"import\s+([\w$*{},\s]+?)\s+from\s+['"][^'"]+['"]"#)
});

static DEFAULT_IMPORT: Lazy<StaticRegex> =
    Lazy::new(|| StaticRegex::new(r"^\s*([a-zA-Z_$][\w$]*)\s*(?:,|$)"));

static NAMESPACE_IMPORT: Lazy<StaticRegex> =
    Lazy::new(|| StaticRegex::new(r"\*\s+as\s+([a-zA-Z_$][\w$]*)"));

static NAMED_IMPORTS: Lazy<StaticRegex> = Lazy::new(|| StaticRegex::new(r"\{([^}]+)\}"));

static IMPORT_ALIAS: Lazy<StaticRegex> = Lazy::new(|| StaticRegex::new(r"\s+as\s+"));

static TOKEN: Lazy<StaticRegex> = Lazy::new(|| {
    StaticRegex::new(
        r"\b(?P<ident>[a-zA-Z_$][\w$]*)\b|\b(?P<digit>\d+[a-zA-Z_$][\w$]*)\b|\b(?P<illegal>[a-zA-Z_$][\w$]*[@#%^&*+\-=/\\|<>~`][\w$]*)\b",
    )
});

static KEYWORD_USE: Lazy<StaticRegex> = Lazy::new(|| StaticRegex::new(r"^\s*(?:=|\(|;)"));

static PROPERTY_KEY: Lazy<StaticRegex> = Lazy::new(|| StaticRegex::new(r"^\s*:"));

fn segment<'a>(caps: &Captures<'a>, group: usize) -> Option<Segment<'a>> {
    caps.get(group)
        .map(|m| Segment::new(m.as_str(), m.start()))
}

/// Harvests declared names from comment-blanked text.
pub(super) fn harvest<'a>(text: &'a str, collector: &mut DeclarationCollector<'a>) {
    for caps in DECLARATION.captures_iter(text) {
        if let Some(name) = segment(&caps, 1) {
            collector.offer(name);
        }
    }

    for caps in DESTRUCTURING.captures_iter(text) {
        if let Some(content) = segment(&caps, 1).or_else(|| segment(&caps, 2)) {
            for part in split_top_level(content.text, content.offset, ',', BRACKETS) {
                if part.is_empty() || part.text == "..." {
                    continue;
                }
                let name = part.before('=');
                let name = name.after(':').unwrap_or(name).strip_prefix("...");
                collector.offer(name);
            }
        }
    }

    for caps in FUNCTION_NAME.captures_iter(text) {
        if let Some(name) = segment(&caps, 1).or_else(|| segment(&caps, 2)) {
            collector.offer(name);
        }
    }

    for caps in CLASS_NAME.captures_iter(text) {
        if let Some(name) = segment(&caps, 1) {
            collector.offer(name);
        }
    }

    harvest_parameters(text, collector);
    harvest_imports(text, collector);
}

fn harvest_parameters<'a>(text: &'a str, collector: &mut DeclarationCollector<'a>) {
    for pattern in PARAMETER_LISTS.iter() {
        for caps in pattern.captures_iter(text) {
            if let Some(list) = segment(&caps, 1) {
                offer_parameter_list(list, collector);
            }
        }
    }

    for caps in METHOD_SHORTHAND.captures_iter(text) {
        let callee = caps.get(1).map_or("", |m| m.as_str());
        if BLOCK_KEYWORDS.iter().any(|k| *k == callee) {
            continue;
        }
        if let Some(list) = segment(&caps, 2) {
            offer_parameter_list(list, collector);
        }
    }

    for caps in ARROW_PARAMETER.captures_iter(text) {
        if let Some(name) = segment(&caps, 1) {
            collector.offer(name);
        }
    }
}

fn offer_parameter_list<'a>(list: Segment<'a>, collector: &mut DeclarationCollector<'a>) {
    for parameter in split_top_level(list.text, list.offset, ',', BRACKETS) {
        let parameter = before_top_level(parameter, '=');
        if let Some(inner) = parameter.unwrap_brackets('{', '}') {
            for part in split_top_level(inner.text, inner.offset, ',', BRACKETS) {
                let name = before_top_level(part, '=');
                let name = name.after(':').unwrap_or(name).strip_prefix("...");
                collector.offer(name);
            }
        } else if let Some(inner) = parameter.unwrap_brackets('[', ']') {
            for part in split_top_level(inner.text, inner.offset, ',', BRACKETS) {
                collector.offer(before_top_level(part, '=').strip_prefix("..."));
            }
        } else {
            collector.offer(parameter.strip_prefix("..."));
        }
    }
}

fn harvest_imports<'a>(text: &'a str, collector: &mut DeclarationCollector<'a>) {
    for caps in IMPORT.captures_iter(text) {
        let Some(clause) = caps.get(1) else {
            continue;
        };
        let (base, clause) = (clause.start(), clause.as_str());
        let at = |m: regex::Match<'a>| Segment::new(m.as_str(), base + m.start());

        if let Some(name) = DEFAULT_IMPORT.captures(clause).and_then(|c| c.get(1)) {
            collector.offer(at(name));
        }
        if let Some(name) = NAMESPACE_IMPORT.captures(clause).and_then(|c| c.get(1)) {
            collector.offer(at(name));
        }
        if let Some(named) = NAMED_IMPORTS.captures(clause).and_then(|c| c.get(1)) {
            let named = at(named);
            for specifier in split_top_level(named.text, named.offset, ',', &[]) {
                let alias = IMPORT_ALIAS.find_iter(specifier.text).next();
                let name = match alias {
                    Some(m) => Segment::new(&specifier.text[m.end()..], specifier.offset + m.end()),
                    None => specifier,
                };
                collector.offer(name);
            }
        }
    }
}

/// Reports malformed names, misused keywords and undeclared names found in
/// the original text outside comments.
///
/// There is no scope model: a name declared anywhere counts as declared
/// everywhere, and string contents are scanned like code.
pub(super) fn scan_tokens<'a>(
    source: &'a str,
    comments: &SpanSet,
    collector: &mut DeclarationCollector<'a>,
) {
    for caps in TOKEN.captures_iter(source) {
        let Some(whole) = caps.get(0) else {
            continue;
        };
        let start = whole.start();
        if comments.contains(start) {
            continue;
        }
        let token = Segment::new(whole.as_str(), start);
        let rest = &source[whole.end()..];
        let vocabulary = collector.vocabulary();

        if caps.name("digit").is_some() || caps.name("illegal").is_some() {
            if collector.first_report(start, token.text) {
                let suggestion = if caps.name("digit").is_some() {
                    "Variable names must start with a letter, underscore, or dollar sign."
                } else {
                    "Variable names can only contain letters, digits, underscores, or dollar signs."
                };
                let message = vocabulary.invalid_message(token.text);
                collector.report(token, Severity::Error, message, suggestion);
            }
            continue;
        }

        if collector.is_keyword(token.text) {
            if KEYWORD_USE.is_match(rest) && collector.first_report(start, token.text) {
                let message = vocabulary.keyword_message(token.text);
                let suggestion = vocabulary.keyword_suggestion.clone();
                collector.report(token, Severity::Error, message, suggestion);
            }
            continue;
        }

        if JAVASCRIPT_GLOBALS.iter().any(|g| *g == token.text) || collector.is_declared(token.text) {
            continue;
        }
        let before = &source[..start];
        if before.ends_with('.') || PROPERTY_KEY.is_match(rest) {
            continue;
        }
        if collector.first_report(start, token.text) {
            let message = format!("Potential undeclared variable: '{}'", token.text);
            let suggestion = format!(
                "Ensure '{}' is declared (via var, let, const, function, class, parameter, import), is a global, or an object property.",
                token.text
            );
            collector.report(token, Severity::Warning, message, suggestion);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validators::tests::{check, check_full, messages};
    use code_analyzer_core::Language;

    fn js(source: &str) -> Vec<String> {
        messages(Language::JavaScript, source)
    }

    #[test]
    fn all_templates_compile() {
        assert!(COMMENTS.is_valid());
        assert!(DECLARATION.is_valid());
        assert!(DESTRUCTURING.is_valid());
        assert!(FUNCTION_NAME.is_valid());
        assert!(CLASS_NAME.is_valid());
        assert!(PARAMETER_LISTS.iter().all(StaticRegex::is_valid));
        assert!(METHOD_SHORTHAND.is_valid());
        assert!(ARROW_PARAMETER.is_valid());
        assert!(IMPORT.is_valid());
        assert!(DEFAULT_IMPORT.is_valid());
        assert!(NAMESPACE_IMPORT.is_valid());
        assert!(NAMED_IMPORTS.is_valid());
        assert!(IMPORT_ALIAS.is_valid());
        assert!(TOKEN.is_valid());
        assert!(KEYWORD_USE.is_valid());
        assert!(PROPERTY_KEY.is_valid());
    }

    #[test]
    fn declared_names_are_quiet() {
        let source = "function add(a, b) {\n  const sum = a + b;\n  return sum;\n}\nadd(1, 2);\n";
        assert!(js(source).is_empty());
    }

    #[test]
    fn digit_led_name_is_invalid() {
        assert_eq!(
            check(Language::JavaScript, "var 1x = 5;"),
            vec![(1, 5, "Invalid variable name: '1x'".to_string())]
        );
    }

    #[test]
    fn reserved_keyword_declaration() {
        let found = check_full(Language::JavaScript, "var class = 5;");
        let keyword: Vec<_> = found
            .iter()
            .filter(|d| d.message == "Invalid variable name: 'class' is a reserved keyword")
            .collect();
        assert!(!keyword.is_empty());
        assert!(keyword.iter().all(|d| (d.line(), d.column()) == (1, 5)));
        assert_eq!(
            keyword[0].suggestion,
            "Choose a different name that is not a JavaScript reserved keyword."
        );
    }

    #[test]
    fn undeclared_name_is_a_warning() {
        let found = check_full(Language::JavaScript, "let x = y;");
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].severity, Severity::Warning);
        assert_eq!(found[0].message, "Potential undeclared variable: 'y'");
        assert_eq!((found[0].line(), found[0].column()), (1, 9));
    }

    #[test]
    fn globals_properties_and_keys_are_skipped() {
        let source = "const o = { key: 1 };\nconsole.log(o.key, o?.other, Math.max(1, 2));";
        assert!(js(source).is_empty());
    }

    #[test]
    fn comments_are_skipped() {
        assert!(js("// missing here\n/* and here */ let a = 1;").is_empty());
    }

    #[test]
    fn parameters_and_destructuring_are_declared() {
        let source = "const { a, b: c, ...rest } = obj;\nconst [d, ...e] = list;\n\
                      const f = ({ g = 1, h: i }, [j], ...k) => a + c + d + e + g + i + j + k + rest;\n\
                      items.map(item => item);\n";
        let found = js(source);
        assert_eq!(
            found,
            vec![
                "Potential undeclared variable: 'obj'".to_string(),
                "Potential undeclared variable: 'list'".to_string(),
                "Potential undeclared variable: 'items'".to_string(),
            ]
        );
    }

    #[test]
    fn catch_binds_its_parameter() {
        let found = js("try { run(); } catch (err) { err; }");
        assert!(found.iter().all(|m| !m.contains("'err'")));
        assert!(found.contains(&"Potential undeclared variable: 'run'".to_string()));
    }

    #[test]
    fn control_clauses_are_not_parameters() {
        let found = js("let x = 1;\nwhile (x < 3) {\n  x++;\n}\n");
        assert!(found.iter().all(|m| !m.contains("x < 3") && !m.contains("'x'")));
    }

    #[test]
    fn for_clause_assignment_does_not_declare() {
        let source = "let n = 3;\nlet sum = 0;\nfor (i = 0; i < n; i++) {\n  sum += i;\n}\n";
        let undeclared =
            |line: i64, column: i64| (line, column, "Potential undeclared variable: 'i'".to_string());
        assert_eq!(
            check(Language::JavaScript, source),
            vec![
                (3, 1, "Invalid variable name: 'for' is a reserved keyword".to_string()),
                undeclared(3, 6),
                undeclared(3, 13),
                undeclared(3, 20),
                undeclared(4, 10),
            ]
        );
    }

    #[test]
    fn non_ascii_letter_ends_a_name() {
        assert!(check(Language::JavaScript, "let café = 1;\ncafé;").is_empty());
    }

    #[test]
    fn imports_bind_names() {
        let source = "import React, { useState as useLocal, useMemo } from 'react';\n\
                      import * as path from \"path\";\n\
                      React; useLocal; useMemo; path;\n";
        let third_line: Vec<_> = check(Language::JavaScript, source)
            .into_iter()
            .filter(|(line, _, _)| *line == 3)
            .collect();
        assert!(third_line.is_empty());
    }

    #[test]
    fn keyword_followed_by_call_or_terminator_is_reported() {
        let found = check(Language::JavaScript, "let a = 1;\nif (a) {\n  a = 2;\n}");
        assert_eq!(
            found,
            vec![(
                2,
                1,
                "Invalid variable name: 'if' is a reserved keyword".to_string()
            )]
        );
    }

    #[test]
    fn repeated_token_reported_per_position() {
        let found = check(Language::JavaScript, "z; z;");
        assert_eq!(found.len(), 2);
        assert_eq!(found[0].1, 1);
        assert_eq!(found[1].1, 4);
    }
}
