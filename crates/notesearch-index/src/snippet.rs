//! Snippet windows and highlighting

use notesearch_core::{EngineConfig, HighlightConfig, Snippet};
use regex::Regex;
use std::ops::Range;
use std::sync::OnceLock;

static PAGE_MARKER_RE: OnceLock<Regex> = OnceLock::new();

/// Build up to `config.max_snippets` snippets from ordered match ranges.
///
/// Each snippet opens at the first match not yet covered and spans
/// `config.context_chars` characters on either side. Later matches starting
/// inside that window collapse into the same snippet instead of producing
/// near-duplicates.
pub fn build_snippets(
    text: &str,
    matches: &[Range<usize>],
    config: &EngineConfig,
) -> Vec<Snippet> {
    let mut snippets = Vec::new();
    let mut i = 0;

    while i < matches.len() && snippets.len() < config.max_snippets {
        let first = &matches[i];
        let start = chars_before(text, first.start, config.context_chars);
        let mut end = chars_after(text, first.end, config.context_chars);

        let mut j = i;
        while j < matches.len() && matches[j].start < end {
            end = end.max(matches[j].end);
            j += 1;
        }

        // earlier matches can fall inside this window too
        let visible: Vec<Range<usize>> = matches
            .iter()
            .filter(|m| m.start >= start && m.end <= end)
            .cloned()
            .collect();

        snippets.push(Snippet {
            text: highlight(text, start..end, &visible, &config.highlight),
            offset: first.start,
            match_count: j - i,
            line_number: line_number(text, first.start),
            page_number: page_number(text, first.start),
            has_preceding: start > 0,
            has_following: end < text.len(),
        });
        i = j;
    }

    snippets
}

/// Byte offset `n` chars before `from`, clamped to the start of the text
fn chars_before(text: &str, from: usize, n: usize) -> usize {
    text[..from]
        .char_indices()
        .rev()
        .take(n)
        .last()
        .map_or(from, |(idx, _)| idx)
}

/// Byte offset `n` chars after `from`, clamped to the end of the text
fn chars_after(text: &str, from: usize, n: usize) -> usize {
    text[from..]
        .char_indices()
        .nth(n)
        .map_or(text.len(), |(idx, _)| from + idx)
}

/// Copy `window` out of `text`, wrapping every match in highlight markers.
/// `matches` must be ordered by start and lie inside the window. Overlapping
/// or touching matches share one marker.
fn highlight(
    text: &str,
    window: Range<usize>,
    matches: &[Range<usize>],
    markers: &HighlightConfig,
) -> String {
    let mut merged: Vec<Range<usize>> = Vec::with_capacity(matches.len());
    for m in matches {
        match merged.last_mut() {
            Some(last) if m.start <= last.end => last.end = last.end.max(m.end),
            _ => merged.push(m.clone()),
        }
    }

    let mut out = String::with_capacity(window.len() + merged.len() * 16);
    let mut cursor = window.start;
    for span in merged {
        out.push_str(&text[cursor..span.start]);
        out.push_str(&markers.wrap(&text[span.clone()]));
        cursor = span.end;
    }
    out.push_str(&text[cursor..window.end]);
    out
}

/// 1-based line containing `offset`
pub fn line_number(text: &str, offset: usize) -> usize {
    text.as_bytes()[..offset]
        .iter()
        .filter(|&&b| b == b'\n')
        .count()
        + 1
}

/// Last `--- Page N ---` or `--- Slide N ---` marker before `offset`.
///
/// The extraction layer inserts these markers for paginated formats.
pub fn page_number(text: &str, offset: usize) -> Option<u32> {
    let re = PAGE_MARKER_RE
        .get_or_init(|| Regex::new(r"---\s*(?:Page|Slide)\s+(\d+)\s*---").unwrap());
    re.captures_iter(&text[..offset])
        .last()
        .and_then(|caps| caps[1].parse().ok())
}
