//! Python assignments, definitions, parameters and imports.

use super::{before_top_level, trim_leading, DeclarationCollector, BRACKETS};
use code_analyzer_core::utils::{split_top_level, Segment, StaticRegex};
use once_cell::sync::Lazy;

pub(super) static COMMENTS: Lazy<StaticRegex> = Lazy::new(|| StaticRegex::new(r"(?m)#.*$"));

/// The optional second `=` marks a comparison, which declares nothing.
static ASSIGNMENT: Lazy<StaticRegex> =
    Lazy::new(|| StaticRegex::new(r"([a-zA-Z_]\w*)\s*=(=)?"));

static DEFINITION: Lazy<StaticRegex> =
    Lazy::new(|| StaticRegex::new(r"\b(?:def|class)\s+(\w+)"));

static PARAMETERS: Lazy<StaticRegex> =
    Lazy::new(|| StaticRegex::new(r"\bdef\s+\w+\s*\(([^)]*)\)"));

static IMPORT: Lazy<StaticRegex> = Lazy::new(|| StaticRegex::new(r"(?m)^[ \t]*import[ \t]+(.+)$"));

static FROM_IMPORT: Lazy<StaticRegex> =
    Lazy::new(|| StaticRegex::new(r"(?m)^[ \t]*from[ \t]+\S+[ \t]+import[ \t]+(.+)$"));

static ALIAS: Lazy<StaticRegex> = Lazy::new(|| StaticRegex::new(r"\s+as\s+"));

pub(super) fn harvest<'a>(text: &'a str, collector: &mut DeclarationCollector<'a>) {
    for caps in ASSIGNMENT.captures_iter(text) {
        if caps.get(2).is_some() {
            continue;
        }
        if let Some(name) = caps.get(1) {
            collector.offer(Segment::new(name.as_str(), name.start()));
        }
    }

    for caps in DEFINITION.captures_iter(text) {
        if let Some(name) = caps.get(1) {
            collector.offer(Segment::new(name.as_str(), name.start()));
        }
    }

    for caps in PARAMETERS.captures_iter(text) {
        let Some(list) = caps.get(1) else {
            continue;
        };
        for parameter in split_top_level(list.as_str(), list.start(), ',', BRACKETS) {
            let name = before_top_level(parameter, '=').before(':');
            if name.text == "/" || name.text == "*" {
                continue;
            }
            collector.offer(trim_leading(name, &['*']));
        }
    }

    for caps in IMPORT.captures_iter(text) {
        if let Some(modules) = caps.get(1) {
            for module in split_top_level(modules.as_str(), modules.start(), ',', &[]) {
                let name = match alias(module) {
                    Some(alias) => alias,
                    None => module.before('.'),
                };
                collector.offer(name);
            }
        }
    }

    for caps in FROM_IMPORT.captures_iter(text) {
        let Some(names) = caps.get(1) else {
            continue;
        };
        let names = Segment::new(names.as_str(), names.start());
        let names = names.unwrap_brackets('(', ')').unwrap_or(names);
        for name in split_top_level(names.text, names.offset, ',', &[]) {
            if name.text == "*" {
                continue;
            }
            collector.offer(alias(name).unwrap_or(name));
        }
    }
}

fn alias(binding: Segment<'_>) -> Option<Segment<'_>> {
    ALIAS
        .find_iter(binding.text)
        .next()
        .map(|m| Segment::new(&binding.text[m.end()..], binding.offset + m.end()))
}
