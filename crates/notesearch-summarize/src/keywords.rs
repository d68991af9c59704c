//! Keyword frequency extraction

use crate::markers::strip_page_markers;
use crate::stopwords::is_meaningful;
use notesearch_core::tokenizer::words;
use notesearch_core::Keyword;
use std::collections::hash_map::Entry;
use std::collections::HashMap;

/// Most frequent meaningful words of `text`, at most `top_n` of them.
///
/// Sorted by descending frequency; words with equal counts keep the order in
/// which they first appear.
pub fn extract_keywords(text: &str, top_n: usize, min_word_len: usize) -> Vec<Keyword> {
    let mut counts: HashMap<String, usize> = HashMap::new();
    let mut first_seen: Vec<String> = Vec::new();

    let text = strip_page_markers(text);
    for word in words(&text).filter(|w| is_meaningful(w, min_word_len)) {
        match counts.entry(word) {
            Entry::Occupied(mut entry) => *entry.get_mut() += 1,
            Entry::Vacant(entry) => {
                first_seen.push(entry.key().clone());
                entry.insert(1);
            }
        }
    }

    let mut keywords: Vec<Keyword> = first_seen
        .into_iter()
        .map(|word| {
            let frequency = counts.get(&word).copied().unwrap_or(0);
            Keyword::new(word, frequency)
        })
        .collect();

    keywords.sort_by(|a, b| b.frequency.cmp(&a.frequency));
    keywords.truncate(top_n);
    keywords
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_gradient_descent_keywords() {
        let text = "Gradient descent is an optimization algorithm. It minimizes a cost function. \
                    Many algorithms use gradient descent.";
        let keywords = extract_keywords(text, 15, 3);

        assert_eq!(keywords[0], Keyword::new("gradient", 2));
        assert_eq!(keywords[1], Keyword::new("descent", 2));
        assert!(keywords.iter().any(|k| k.word == "algorithm"));
        assert!(keywords.iter().all(|k| k.word != "is" && k.word != "an"));
    }

    #[test]
    fn test_frequency_non_increasing() {
        let text = "apple banana apple cherry banana apple durian";
        let keywords = extract_keywords(text, 10, 3);
        let freqs: Vec<usize> = keywords.iter().map(|k| k.frequency).collect();
        assert_eq!(freqs, vec![3, 2, 1, 1]);
        // cherry appears before durian
        assert_eq!(keywords[2].word, "cherry");
    }

    #[test]
    fn test_truncates_to_top_n() {
        let text = "one two three four five six seven eight nine ten eleven";
        let keywords = extract_keywords(text, 4, 3);
        assert_eq!(keywords.len(), 4);
    }

    #[test]
    fn test_skips_short_and_stop_words() {
        let keywords = extract_keywords("AI is on to it. The ML way!", 15, 3);
        assert_eq!(keywords, vec![Keyword::new("way", 1)]);
    }

    #[test]
    fn test_page_markers_not_counted() {
        let text = "--- Page 1 ---\nGraph theory.\n--- Slide 2 ---\nGraph edges.";
        let keywords = extract_keywords(text, 15, 3);
        assert_eq!(
            keywords,
            vec![
                Keyword::new("graph", 2),
                Keyword::new("theory", 1),
                Keyword::new("edges", 1),
            ]
        );
    }

    #[test]
    fn test_no_qualifying_words() {
        assert!(extract_keywords("", 15, 3).is_empty());
        assert!(extract_keywords("the a is of", 15, 3).is_empty());
    }
}
