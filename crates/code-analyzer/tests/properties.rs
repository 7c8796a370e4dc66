//! Property tests for the invariants every analysis result holds.

use code_analyzer::{analyze, pipeline, Diagnostic, Language};
use proptest::prelude::*;
use std::collections::HashSet;

const FRAGMENTS: &[&str] = &[
    "var x = 1",
    "let y = x + z;",
    "function f(a, b) { return a }",
    "if (a == null) {",
    "}",
    "{",
    "(",
    ")",
    "console.log(1)",
    "def g(*args):",
    "\t  pass",
    "print(value)",
    "int 1bad = 2;",
    "char *name;",
    "delete p;",
    "<img src=\"x\">",
    "<p onclick=\"f()\">",
    ".a { color: red; }",
    "{\"k\": 1,}",
    "key: 'v'",
    "CREATE TABLE SELECT (id INT);",
    "SELECT * FROM t;",
    "// comment class = 1",
    "/* block",
    "*/",
    "# note",
    "é ü 漢字",
];

fn language() -> impl Strategy<Value = Language> {
    prop::sample::select(Language::ALL.to_vec())
}

fn source() -> impl Strategy<Value = String> {
    prop_oneof![
        prop::collection::vec(prop::sample::select(FRAGMENTS), 0..16)
            .prop_map(|lines| lines.join("\n")),
        "\\PC{0,120}",
    ]
}

fn check_invariants(out: &[Diagnostic]) -> Result<(), TestCaseError> {
    let keys: HashSet<_> = out.iter().map(Diagnostic::dedup_key).collect();
    prop_assert_eq!(keys.len(), out.len());

    let anchored = out.iter().take_while(|d| !d.is_file_level()).count();
    prop_assert!(out[anchored..].iter().all(Diagnostic::is_file_level));
    for pair in out[..anchored].windows(2) {
        prop_assert!((pair[0].line(), pair[0].column()) <= (pair[1].line(), pair[1].column()));
    }
    for d in &out[..anchored] {
        prop_assert!(d.line() >= 1 && d.column() >= 1);
    }
    Ok(())
}

proptest! {
    #[test]
    fn analysis_is_deterministic(source in source(), language in language()) {
        prop_assert_eq!(analyze(&source, language), analyze(&source, language));
    }

    #[test]
    fn output_is_unique_and_sorted(source in source(), language in language()) {
        check_invariants(&analyze(&source, language))?;
    }

    #[test]
    fn finalizing_again_changes_nothing(source in source(), language in language()) {
        let out = analyze(&source, language);
        prop_assert_eq!(pipeline::finalize(out.clone()), out);
    }
}
