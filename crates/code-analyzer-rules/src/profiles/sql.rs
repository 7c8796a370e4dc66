//! SQL profile.
//!
//! Statement keywords and reserved words are matched in upper case only.

use code_analyzer_core::{KeywordSet, PatternSpec, Severity};

pub(crate) const PATTERNS: &[PatternSpec] = &[
    PatternSpec::new(
        "SQ001",
        "digit-leading-identifier",
        Severity::Error,
        r"(?P<m>(?:CREATE|TABLE|ALTER|INSERT|UPDATE|SELECT)\s+\d+[a-zA-Z_]\w*)\s*(?:\(|;)",
        "Invalid identifier name: starts with a digit",
        "Identifiers (e.g., table/column names) must start with a letter or underscore.",
    ),
    PatternSpec::new(
        "SQ002",
        "illegal-character-identifier",
        Severity::Error,
        r"(?P<m>(?:CREATE|TABLE|ALTER|INSERT|UPDATE|SELECT)\s+[a-zA-Z_]\w*[@#%^&*+\-=/\\|<>~`]\w*)\s*(?:\(|;)",
        "Invalid identifier name: contains illegal characters",
        "Identifiers can only contain letters, digits, or underscores.",
    ),
    PatternSpec::new(
        "SQ003",
        "reserved-keyword-identifier",
        Severity::Error,
        r"(?P<m>(?:CREATE|TABLE|ALTER|INSERT|UPDATE|SELECT)\s+(?:ADD|ALL|ALTER|AND|ANY|AS|ASC|BACKUP|BETWEEN|BY|CASE|CHECK|COLUMN|CONSTRAINT|CREATE|DATABASE|DEFAULT|DELETE|DESC|DISTINCT|DROP|EXEC|EXISTS|FOREIGN|FROM|FULL|GROUP|HAVING|IN|INDEX|INNER|INSERT|INTO|IS|JOIN|KEY|LEFT|LIKE|LIMIT|NOT|NULL|ON|OR|ORDER|OUTER|PRIMARY|PROCEDURE|RIGHT|ROWNUM|SELECT|SET|TABLE|TOP|TRUNCATE|UNION|UNIQUE|UPDATE|VALUES|VIEW|WHERE))\s*(?:\(|;)",
        "Invalid identifier name: reserved keyword",
        "Choose a different name that is not an SQL reserved keyword or use quoted identifiers.",
    ),
];

pub(crate) const KEYWORDS: KeywordSet = KeywordSet::new(&[
    "ADD", "ALL", "ALTER", "AND", "ANY", "AS", "ASC", "BACKUP", "BETWEEN", "BY", "CASE",
    "CHECK", "COLUMN", "CONSTRAINT", "CREATE", "DATABASE", "DEFAULT", "DELETE", "DESC",
    "DISTINCT", "DROP", "EXEC", "EXISTS", "FOREIGN", "FROM", "FULL", "GROUP", "HAVING", "IN",
    "INDEX", "INNER", "INSERT", "INTO", "IS", "JOIN", "KEY", "LEFT", "LIKE", "LIMIT", "NOT",
    "NULL", "ON", "OR", "ORDER", "OUTER", "PRIMARY", "PROCEDURE", "RIGHT", "ROWNUM", "SELECT",
    "SET", "TABLE", "TOP", "TRUNCATE", "UNION", "UNIQUE", "UPDATE", "VALUES", "VIEW", "WHERE",
]);
