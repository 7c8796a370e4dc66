//! Java typed declarations and method parameters.

use super::DeclarationCollector;
use code_analyzer_core::utils::{split_top_level, Segment, StaticRegex};
use once_cell::sync::Lazy;

static DECLARATION: Lazy<StaticRegex> = Lazy::new(|| {
    StaticRegex::new(
        r"(?:int|float|double|char|boolean|byte|short|long|void|String)\s+([a-zA-Z_$][\w$]*)\s*(?:=|;)",
    )
});

static METHOD_PARAMETERS: Lazy<StaticRegex> = Lazy::new(|| {
    StaticRegex::new(
        r"(?:void|int|float|double|char|boolean|byte|short|long|String)\s+\w+\s*\(([^)]*)\)",
    )
});

/// Generic arguments nest as well as the usual brackets.
const PARAMETER_BRACKETS: &[(char, char)] = &[('(', ')'), ('[', ']'), ('{', '}'), ('<', '>')];

pub(super) fn harvest<'a>(text: &'a str, collector: &mut DeclarationCollector<'a>) {
    for caps in DECLARATION.captures_iter(text) {
        if let Some(name) = caps.get(1) {
            collector.offer(Segment::new(name.as_str(), name.start()));
        }
    }

    for caps in METHOD_PARAMETERS.captures_iter(text) {
        let Some(list) = caps.get(1) else {
            continue;
        };
        for parameter in split_top_level(list.as_str(), list.start(), ',', PARAMETER_BRACKETS) {
            collector.offer(parameter.last_word().before('['));
        }
    }
}
