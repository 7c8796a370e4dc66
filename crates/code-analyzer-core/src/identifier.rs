//! Identifier syntax, reserved keyword sets and name classification.

/// Lexical rule a declared name must satisfy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum IdentifierSyntax {
    /// `[A-Za-z_$][A-Za-z0-9_$]*` (JavaScript, Java).
    WithDollar,
    /// `[A-Za-z_][A-Za-z0-9_]*` (Python, C, C++, SQL and the rest).
    Plain,
}

impl IdentifierSyntax {
    /// Returns true if `name` is a syntactically valid identifier.
    #[must_use]
    pub fn is_valid(self, name: &str) -> bool {
        let mut chars = name.chars();
        chars
            .next()
            .is_some_and(|c| c.is_ascii_alphabetic() || c == '_' || self.allows(c))
            && chars.all(|c| c.is_ascii_alphanumeric() || c == '_' || self.allows(c))
    }

    fn allows(self, c: char) -> bool {
        matches!(self, Self::WithDollar) && c == '$'
    }
}

/// A case-sensitive set of reserved words.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeywordSet {
    words: &'static [&'static str],
}

impl KeywordSet {
    /// An empty keyword set.
    pub const EMPTY: Self = Self::new(&[]);

    /// Creates a keyword set from a static word list.
    #[must_use]
    pub const fn new(words: &'static [&'static str]) -> Self {
        Self { words }
    }

    /// Returns true if `name` is reserved. Comparison is exact.
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.words.iter().any(|word| *word == name)
    }

    /// Returns the reserved words.
    #[must_use]
    pub fn words(&self) -> &'static [&'static str] {
        self.words
    }

    /// Returns the number of reserved words.
    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Returns true if the set has no words.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

/// Outcome of classifying a declared name.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NameVerdict {
    /// The name is usable.
    Valid,
    /// The name breaks the identifier syntax.
    InvalidSyntax,
    /// The name is syntactically fine but reserved.
    ReservedKeyword,
}

/// Classifies a name against a syntax and a keyword set.
///
/// Syntax is checked first, so a malformed name is never reported as a
/// keyword.
#[must_use]
pub fn classify(name: &str, syntax: IdentifierSyntax, keywords: &KeywordSet) -> NameVerdict {
    if !syntax.is_valid(name) {
        NameVerdict::InvalidSyntax
    } else if keywords.contains(name) {
        NameVerdict::ReservedKeyword
    } else {
        NameVerdict::Valid
    }
}
