//! Word and sentence splitting

/// Lazily yields lowercased alphanumeric words.
///
/// Clone it to walk the remaining words more than once.
#[derive(Debug, Clone)]
pub struct Words<'a> {
    rest: &'a str,
}

impl Iterator for Words<'_> {
    type Item = String;

    fn next(&mut self) -> Option<String> {
        let start = self.rest.find(char::is_alphanumeric)?;
        let tail = &self.rest[start..];
        let end = tail
            .find(|c: char| !c.is_alphanumeric())
            .unwrap_or(tail.len());
        self.rest = &tail[end..];
        Some(tail[..end].to_lowercase())
    }
}

/// Normalized words of `text`: lowercased, punctuation stripped
pub fn words(text: &str) -> Words<'_> {
    Words { rest: text }
}

fn is_terminator(c: char) -> bool {
    matches!(c, '.' | '!' | '?')
}

/// Split text into trimmed, non-empty sentences.
///
/// A sentence ends at `.`, `!` or `?` followed by whitespace (or the end of the
/// text), so decimals such as `3.14` stay intact.
pub fn sentences(text: &str) -> Vec<&str> {
    let mut out = Vec::new();
    let mut start = 0;
    let mut prev: Option<char> = None;

    for (idx, c) in text.char_indices() {
        if c.is_whitespace() && prev.is_some_and(is_terminator) {
            push_trimmed(&mut out, &text[start..idx]);
            start = idx;
        }
        prev = Some(c);
    }
    push_trimmed(&mut out, &text[start..]);
    out
}

fn push_trimmed<'a>(out: &mut Vec<&'a str>, sentence: &'a str) {
    let sentence = sentence.trim();
    if !sentence.is_empty() {
        out.push(sentence);
    }
}

/// Whitespace-separated word count
pub fn word_count(text: &str) -> usize {
    text.split_whitespace().count()
}
