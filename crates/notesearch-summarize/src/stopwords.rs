//! Fixed stop-word list shared by the summarizer and keyword extractor

use std::collections::HashSet;
use std::sync::OnceLock;

static STOP_WORDS: &[&str] = &[
    "the", "a", "an", "and", "or", "but", "in", "on", "at", "to", "for", "of", "with", "by",
    "from", "as", "is", "was", "are", "were", "be", "been", "being", "have", "has", "had", "do",
    "does", "did", "will", "would", "could", "should", "may", "might", "can", "this", "that",
    "these", "those", "i", "you", "he", "she", "it", "we", "they", "them", "their", "what",
    "which", "who", "when", "where", "why", "how", "all", "each", "every", "both", "few", "more",
    "most", "other", "some", "such", "no", "nor", "not", "only", "own", "same", "so", "than",
    "too", "very", "just", "also", "into", "through", "during", "before", "after", "above",
    "below", "between", "under", "again", "further", "then", "once", "its", "our", "your",
    "there", "here", "about", "if",
];

static STOP_SET: OnceLock<HashSet<&'static str>> = OnceLock::new();

pub fn is_stop_word(word: &str) -> bool {
    STOP_SET
        .get_or_init(|| STOP_WORDS.iter().copied().collect())
        .contains(word)
}

/// A normalized word worth counting: long enough and not a stop word
pub fn is_meaningful(word: &str, min_len: usize) -> bool {
    word.chars().count() >= min_len && !is_stop_word(word)
}
