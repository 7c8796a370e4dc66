//! Rule trait for defining analysis rules.

use crate::context::SourceContext;
use crate::types::{Diagnostic, Severity};

/// The pass a rule belongs to.
///
/// The analyzer runs stages in this order; rules within a stage run in the
/// order they were registered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Stage {
    /// Regular-expression rules from a language profile.
    Pattern,
    /// Line- and file-level structural heuristics.
    Structural,
    /// Declaration harvesting and identifier checks.
    Identifier,
}

impl std::fmt::Display for Stage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Pattern => write!(f, "pattern"),
            Self::Structural => write!(f, "structural"),
            Self::Identifier => write!(f, "identifier"),
        }
    }
}

/// A rule that inspects one source text.
///
/// Rules are constructed once and shared; `check` must not keep state
/// between calls.
///
/// # Example
///
/// ```ignore
/// use code_analyzer_core::{Diagnostic, Rule, Severity, SourceContext};
///
/// pub struct NoTabs;
///
/// impl Rule for NoTabs {
///     fn name(&self) -> &'static str { "no-tabs" }
///     fn code(&self) -> &'static str { "EX001" }
///
///     fn check(&self, ctx: &SourceContext) -> Vec<Diagnostic> {
///         ctx.content
///             .match_indices('\t')
///             .map(|(offset, _)| {
///                 Diagnostic::new(
///                     self.code(),
///                     self.name(),
///                     self.default_severity(),
///                     Some(ctx.location(offset, 1)),
///                     "Tab character",
///                 )
///             })
///             .collect()
///     }
/// }
/// ```
pub trait Rule: Send + Sync {
    /// Returns the kebab-case name of this rule (e.g., "console-log").
    fn name(&self) -> &'static str;

    /// Returns the rule code (e.g., "JS001").
    fn code(&self) -> &'static str;

    /// Returns a brief description of what this rule checks.
    fn description(&self) -> &'static str {
        ""
    }

    /// Returns the default severity for diagnostics from this rule.
    fn default_severity(&self) -> Severity {
        Severity::Error
    }

    /// Returns the stage this rule runs in.
    fn stage(&self) -> Stage {
        Stage::Pattern
    }

    /// Checks a source text and returns candidate diagnostics.
    ///
    /// Must not panic on any input.
    fn check(&self, ctx: &SourceContext) -> Vec<Diagnostic>;
}

/// Type alias for boxed Rule trait objects.
pub type RuleBox = Box<dyn Rule>;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::language::Language;

    struct TestRule;

    impl Rule for TestRule {
        fn name(&self) -> &'static str {
            "test-rule"
        }
        fn code(&self) -> &'static str {
            "TEST001"
        }
        fn description(&self) -> &'static str {
            "A test rule"
        }

        fn check(&self, ctx: &SourceContext) -> Vec<Diagnostic> {
            vec![Diagnostic::new(
                self.code(),
                self.name(),
                self.default_severity(),
                Some(ctx.location(0, 0)),
                "Test diagnostic",
            )]
        }
    }

    #[test]
    fn test_rule_trait() {
        let rule = TestRule;
        assert_eq!(rule.name(), "test-rule");
        assert_eq!(rule.code(), "TEST001");
        assert_eq!(rule.default_severity(), Severity::Error);
        assert_eq!(rule.stage(), Stage::Pattern);

        let ctx = SourceContext::new("x", Language::JavaScript);
        assert_eq!(rule.check(&ctx)[0].line(), 1);
    }

    #[test]
    fn stages_are_ordered() {
        assert!(Stage::Pattern < Stage::Structural);
        assert!(Stage::Structural < Stage::Identifier);
    }
}
