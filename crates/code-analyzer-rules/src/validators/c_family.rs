//! C and C++ typed declarations and function parameters.
//!
//! Java shares the comment syntax defined here.

use super::{trim_leading, DeclarationCollector, BRACKETS};
use code_analyzer_core::utils::{split_top_level, Segment, StaticRegex};
use once_cell::sync::Lazy;

pub(super) static COMMENTS: Lazy<StaticRegex> =
    Lazy::new(|| StaticRegex::new(r"/\*[\s\S]*?\*/|//.*"));

static DECLARATION: Lazy<StaticRegex> = Lazy::new(|| {
    StaticRegex::new(
        r"(?:int|float|double|char|bool|void|long|short|auto)\s+([a-zA-Z_]\w*)\s*(?:=|;)",
    )
});

static FUNCTION_PARAMETERS: Lazy<StaticRegex> = Lazy::new(|| {
    StaticRegex::new(r"(?:void|int|float|double|char|bool|long|short|auto)\s+\w+\s*\(([^)]*)\)")
});

pub(super) fn harvest<'a>(text: &'a str, collector: &mut DeclarationCollector<'a>) {
    for caps in DECLARATION.captures_iter(text) {
        if let Some(name) = caps.get(1) {
            collector.offer(Segment::new(name.as_str(), name.start()));
        }
    }

    for caps in FUNCTION_PARAMETERS.captures_iter(text) {
        let Some(list) = caps.get(1) else {
            continue;
        };
        for parameter in split_top_level(list.as_str(), list.start(), ',', BRACKETS) {
            // `f(void)` declares no parameters.
            if parameter.text == "void" {
                continue;
            }
            let name = trim_leading(parameter.last_word(), &['*', '&']).before('[');
            collector.offer(name);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validators::tests::{check, check_full, messages};
    use code_analyzer_core::Language;

    #[test]
    fn templates_compile() {
        assert!(COMMENTS.is_valid());
        assert!(DECLARATION.is_valid());
        assert!(FUNCTION_PARAMETERS.is_valid());
    }

    #[test]
    fn pointer_and_array_parameters() {
        let source = "int main(int argc, char *argv[], const double &scale) {\n  int total = 0;\n  return total;\n}\nint run(void);\n";
        assert!(messages(Language::C, source).is_empty());
        assert!(messages(Language::Cpp, source).is_empty());
    }

    #[test]
    fn keyword_sets_differ_between_c_and_cpp() {
        let source = "int class = 1;";
        assert!(messages(Language::C, source).is_empty());
        let found = check_full(Language::Cpp, source);
        assert_eq!(found.len(), 1);
        assert_eq!(
            found[0].message,
            "Invalid variable name: 'class' is a reserved keyword"
        );
        assert_eq!(
            found[0].suggestion,
            "Choose a different name that is not a C++ reserved keyword."
        );
    }

    #[test]
    fn c_keyword_declaration() {
        assert_eq!(
            check(Language::C, "float x;\nint   auto = 2;"),
            vec![(
                2,
                7,
                "Invalid variable name: 'auto' is a reserved keyword".to_string()
            )]
        );
    }
}
