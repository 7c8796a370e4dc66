//! Deduplication and ordering of candidate diagnostics.

use crate::types::Diagnostic;
use std::collections::HashSet;

/// Deduplicates and orders candidates into the final diagnostic list.
#[must_use]
pub fn finalize(candidates: Vec<Diagnostic>) -> Vec<Diagnostic> {
    let mut diagnostics = dedup(candidates);
    sort(&mut diagnostics);
    diagnostics
}

/// Keeps the first diagnostic for each `(line, column, message)`.
///
/// Severity, suggestion and matched text do not take part in the identity.
#[must_use]
pub fn dedup(candidates: Vec<Diagnostic>) -> Vec<Diagnostic> {
    let mut seen = HashSet::with_capacity(candidates.len());
    let keep: Vec<bool> = candidates
        .iter()
        .map(|d| seen.insert(d.dedup_key()))
        .collect();
    candidates
        .into_iter()
        .zip(keep)
        .filter_map(|(d, first)| first.then_some(d))
        .collect()
}

/// Orders line-anchored diagnostics by `(line, column)`, then file-level ones.
///
/// The sort is stable: equal positions and all file-level diagnostics keep
/// their arrival order.
pub fn sort(diagnostics: &mut [Diagnostic]) {
    diagnostics.sort_by_key(|d| match d.location {
        Some(l) => (0, l.line, l.column),
        None => (1, 0, 0),
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{Location, Severity};
    use proptest::prelude::*;

    fn at(line: usize, column: usize, message: &str) -> Diagnostic {
        Diagnostic::new(
            "T",
            "t",
            Severity::Warning,
            Some(Location::new(line, column)),
            message,
        )
    }

    fn file_level(message: &str) -> Diagnostic {
        Diagnostic::new("T", "t", Severity::Error, None, message)
    }

    #[test]
    fn first_duplicate_wins() {
        let first = at(1, 1, "m").with_suggestion("first");
        let second = Diagnostic {
            severity: Severity::Error,
            ..at(1, 1, "m").with_suggestion("second")
        };
        let out = finalize(vec![first, second]);
        assert_eq!(out.len(), 1);
        assert_eq!(out[0].suggestion, "first");
        assert_eq!(out[0].severity, Severity::Warning);
    }

    #[test]
    fn different_messages_at_same_position_survive() {
        let out = finalize(vec![at(1, 1, "a"), at(1, 1, "b")]);
        let messages: Vec<_> = out.iter().map(|d| d.message.as_str()).collect();
        assert_eq!(messages, vec!["a", "b"]);
    }

    #[test]
    fn file_level_sorts_last_in_arrival_order() {
        let out = finalize(vec![
            file_level("braces"),
            at(3, 1, "x"),
            file_level("parens"),
            at(1, 5, "y"),
            at(1, 2, "z"),
        ]);
        let messages: Vec<_> = out.iter().map(|d| d.message.as_str()).collect();
        assert_eq!(messages, vec!["z", "y", "x", "braces", "parens"]);
    }

    fn arbitrary_diagnostic() -> impl Strategy<Value = Diagnostic> {
        prop_oneof![
            (1usize..20, 1usize..20, "[abc]").prop_map(|(l, c, m)| at(l, c, &m)),
            "[abc]".prop_map(|m| file_level(&m)),
        ]
    }

    proptest! {
        #[test]
        fn output_is_sorted_and_unique(input in prop::collection::vec(arbitrary_diagnostic(), 0..40)) {
            let out = finalize(input.clone());

            let keys: HashSet<_> = out.iter().map(|d| (d.line(), d.column(), d.message.clone())).collect();
            prop_assert_eq!(keys.len(), out.len());

            let input_keys: HashSet<_> = input.iter().map(|d| (d.line(), d.column(), d.message.clone())).collect();
            prop_assert_eq!(input_keys, keys);

            let first_file_level = out.iter().position(Diagnostic::is_file_level).unwrap_or(out.len());
            prop_assert!(out[first_file_level..].iter().all(Diagnostic::is_file_level));
            for pair in out[..first_file_level].windows(2) {
                prop_assert!((pair[0].line(), pair[0].column()) <= (pair[1].line(), pair[1].column()));
            }
        }

        #[test]
        fn finalize_is_idempotent(input in prop::collection::vec(arbitrary_diagnostic(), 0..40)) {
            let once = finalize(input);
            let twice = finalize(once.clone());
            prop_assert_eq!(once, twice);
        }
    }
}
