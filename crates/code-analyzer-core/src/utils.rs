//! Text utilities for rule implementations.

pub mod ascii_classes;
pub mod comments;
pub mod segments;
pub mod static_regex;

#[doc(inline)]
pub use ascii_classes::ascii_classes;
#[doc(inline)]
pub use comments::{blank_spans, match_spans, SpanSet};
#[doc(inline)]
pub use segments::{split_top_level, Segment};
#[doc(inline)]
pub use static_regex::StaticRegex;
