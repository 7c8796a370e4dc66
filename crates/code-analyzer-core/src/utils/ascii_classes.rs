//! ASCII meaning for the `\w`, `\d` and `\b` shorthands.
//!
//! The `regex` crate gives these shorthands Unicode meaning, so `\w` matches
//! `é` and `\b` sees no boundary between `f` and `é`. Identifiers in every
//! analyzed language are ASCII, and a name such as `café` must tokenize as
//! `caf` followed by a stray character. Every built-in expression goes
//! through [`ascii_classes`] before it is compiled.

use std::borrow::Cow;

/// Rewrites `\w`, `\d`, `\b` and their negations to ASCII-only forms.
///
/// Other escapes and all literal text are kept. Inside a bracket class
/// `\w` and `\d` expand to their ranges; outside one they become classes
/// or ASCII assertions. An expression without these shorthands is returned
/// borrowed.
#[must_use]
pub fn ascii_classes(expr: &str) -> Cow<'_, str> {
    if !expr.contains('\\') {
        return Cow::Borrowed(expr);
    }

    let mut out = String::with_capacity(expr.len() + 16);
    let mut depth = 0usize;
    let mut changed = false;
    let mut chars = expr.chars().peekable();

    while let Some(c) = chars.next() {
        match c {
            '\\' => {
                let Some(next) = chars.next() else {
                    out.push(c);
                    break;
                };
                let replacement = match (next, depth > 0) {
                    ('w', false) => Some("[0-9A-Za-z_]"),
                    ('W', false) => Some("[^0-9A-Za-z_]"),
                    ('d', false) => Some("[0-9]"),
                    ('D', false) => Some("[^0-9]"),
                    ('b', false) => Some(r"(?-u:\b)"),
                    ('B', false) => Some(r"(?-u:\B)"),
                    ('w', true) => Some("0-9A-Za-z_"),
                    ('d', true) => Some("0-9"),
                    _ => None,
                };
                match replacement {
                    Some(r) => {
                        out.push_str(r);
                        changed = true;
                    }
                    None => {
                        out.push(c);
                        out.push(next);
                    }
                }
            }
            '[' => {
                out.push(c);
                depth += 1;
                // A `]` right after the opening bracket (or its `^`) is literal.
                if chars.peek() == Some(&'^') {
                    out.push('^');
                    chars.next();
                }
                if chars.peek() == Some(&']') {
                    out.push(']');
                    chars.next();
                }
            }
            ']' if depth > 0 => {
                out.push(c);
                depth -= 1;
            }
            _ => out.push(c),
        }
    }

    if changed {
        Cow::Owned(out)
    } else {
        Cow::Borrowed(expr)
    }
}
