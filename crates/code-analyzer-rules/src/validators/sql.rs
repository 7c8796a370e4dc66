//! SQL table and column names.

use super::{DeclarationCollector, BRACKETS};
use code_analyzer_core::utils::{split_top_level, Segment, StaticRegex};
use once_cell::sync::Lazy;

pub(super) static COMMENTS: Lazy<StaticRegex> =
    Lazy::new(|| StaticRegex::new(r"(?m)--.*$|/\*[\s\S]*?\*/"));

static OBJECT_NAME: Lazy<StaticRegex> = Lazy::new(|| {
    StaticRegex::new(r"(?:CREATE|TABLE|ALTER|INSERT|UPDATE|SELECT)\s+([a-zA-Z_]\w*)\s*(?:\(|;)")
});

static COLUMN_LIST: Lazy<StaticRegex> =
    Lazy::new(|| StaticRegex::new(r"CREATE\s+TABLE\s+\w+\s*\(([^)]*)\)"));

/// Leading words of table constraints inside a column list.
const CONSTRAINTS: &[&str] = &[
    "PRIMARY",
    "FOREIGN",
    "UNIQUE",
    "CONSTRAINT",
    "CHECK",
    "INDEX",
    "KEY",
];

pub(super) fn harvest<'a>(text: &'a str, collector: &mut DeclarationCollector<'a>) {
    for caps in OBJECT_NAME.captures_iter(text) {
        if let Some(name) = caps.get(1) {
            collector.offer(Segment::new(name.as_str(), name.start()));
        }
    }

    for caps in COLUMN_LIST.captures_iter(text) {
        let Some(columns) = caps.get(1) else {
            continue;
        };
        for column in split_top_level(columns.as_str(), columns.start(), ',', BRACKETS) {
            let name = column.first_word();
            if CONSTRAINTS.iter().any(|c| c.eq_ignore_ascii_case(name.text)) {
                continue;
            }
            collector.offer(name);
        }
    }
}
