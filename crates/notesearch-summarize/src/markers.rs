//! Page and slide markers inserted by the extraction layer

use regex::Regex;
use std::borrow::Cow;
use std::sync::OnceLock;

static MARKER_RE: OnceLock<Regex> = OnceLock::new();

/// Drop `--- Page N ---` and `--- Slide N ---` lines so they are not read as prose
pub fn strip_page_markers(text: &str) -> Cow<'_, str> {
    MARKER_RE
        .get_or_init(|| Regex::new(r"(?m)^[ \t]*---\s*(?:Page|Slide)\s+\d+\s*---[ \t]*$").unwrap())
        .replace_all(text, "")
}
