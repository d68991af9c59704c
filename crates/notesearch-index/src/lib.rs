//! Query matching, snippet extraction and ranking

mod matcher;
mod query;
mod snippet;

pub use matcher::{SubstringScanner, TextMatcher};
pub use query::{Query, QueryEngine};
pub use snippet::{build_snippets, line_number, page_number};
