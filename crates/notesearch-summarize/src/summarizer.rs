//! Extractive summarizer

use crate::markers::strip_page_markers;
use crate::stopwords::is_meaningful;
use notesearch_core::tokenizer::{sentences, words};
use std::collections::HashSet;

/// Pick the `max_sentences` most informative sentences of `text`.
///
/// A sentence scores one point per distinct meaningful word it contains.
/// Ties go to the earlier sentence, and the result keeps document order.
/// Page and slide markers are not sentences.
pub fn summarize(text: &str, max_sentences: usize, min_word_len: usize) -> Vec<String> {
    let text = strip_page_markers(text);
    let all = sentences(&text);
    if all.len() <= max_sentences {
        return all.into_iter().map(str::to_string).collect();
    }

    let mut scored: Vec<(usize, usize)> = all
        .iter()
        .enumerate()
        .map(|(idx, sentence)| (idx, score_sentence(sentence, min_word_len)))
        .collect();
    // stable sort: equal scores stay in document order
    scored.sort_by(|a, b| b.1.cmp(&a.1));

    let mut chosen: Vec<usize> = scored
        .into_iter()
        .take(max_sentences)
        .map(|(idx, _)| idx)
        .collect();
    chosen.sort_unstable();

    chosen.into_iter().map(|idx| all[idx].to_string()).collect()
}

/// Number of distinct meaningful words in a sentence
pub fn score_sentence(sentence: &str, min_word_len: usize) -> usize {
    words(sentence)
        .filter(|w| is_meaningful(w, min_word_len))
        .collect::<HashSet<_>>()
        .len()
}
