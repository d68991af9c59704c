//! Case-insensitive occurrence scanning over raw document text

use std::ops::Range;

/// Locates every occurrence of a query inside a document's text.
///
/// Implementations return byte ranges into the *original* text, ordered by
/// start offset, so callers can slice out the exact source casing.
pub trait TextMatcher {
    fn locate(&self, text: &str, query: &str) -> Vec<Range<usize>>;
}

/// Direct scan of the raw text for each query.
///
/// Overlapping occurrences are all reported ("aa" occurs twice in "aaa").
#[derive(Debug, Clone, Copy, Default)]
pub struct SubstringScanner;

impl TextMatcher for SubstringScanner {
    fn locate(&self, text: &str, query: &str) -> Vec<Range<usize>> {
        let needle = fold(query);
        if needle.is_empty() {
            return Vec::new();
        }
        FoldedText::new(text).find_all(&needle)
    }
}

/// Lowercase char by char so text and query fold identically
fn fold(s: &str) -> String {
    s.chars().flat_map(char::to_lowercase).collect()
}

/// Lowercased copy of a text plus a map back to original byte offsets
struct FoldedText<'a> {
    original: &'a str,
    folded: String,
    // folded byte -> start of the original char it came from; None when
    // folding kept every offset (ASCII)
    origins: Option<Vec<usize>>,
}

impl<'a> FoldedText<'a> {
    fn new(original: &'a str) -> Self {
        if original.is_ascii() {
            return Self {
                original,
                folded: original.to_ascii_lowercase(),
                origins: None,
            };
        }

        let mut folded = String::with_capacity(original.len());
        let mut origins = Vec::with_capacity(original.len());
        for (idx, c) in original.char_indices() {
            for lower in c.to_lowercase() {
                folded.push(lower);
                origins.extend(std::iter::repeat(idx).take(lower.len_utf8()));
            }
        }

        Self {
            original,
            folded,
            origins: Some(origins),
        }
    }

    fn find_all(&self, needle: &str) -> Vec<Range<usize>> {
        let mut ranges = Vec::new();
        let mut from = 0;

        while let Some(pos) = self.folded[from..].find(needle) {
            let start = from + pos;
            let range = self.to_original(start..start + needle.len());
            // Folding can expand one char into several; don't report the
            // same original span twice
            if ranges.last() != Some(&range) {
                ranges.push(range);
            }
            from = start
                + self.folded[start..]
                    .chars()
                    .next()
                    .map_or(1, char::len_utf8);
        }

        ranges
    }

    fn to_original(&self, folded: Range<usize>) -> Range<usize> {
        let Some(origins) = &self.origins else {
            return folded;
        };
        let start = origins[folded.start];
        let last = origins[folded.end - 1];
        let end = last
            + self.original[last..]
                .chars()
                .next()
                .map_or(0, char::len_utf8);
        start..end
    }
}
