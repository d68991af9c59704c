//! Configuration for indexing and retrieval

use serde::{Deserialize, Serialize};

/// What happens when a document is registered under a name that already exists
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DuplicatePolicy {
    /// Keep the stored document and fail the registration
    #[default]
    Reject,
    /// Drop the stored document and index the new text in its place
    Replace,
}

/// Markers wrapped around every matched span in a snippet
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct HighlightConfig {
    pub open_tag: String,
    pub close_tag: String,
}

impl HighlightConfig {
    pub fn new() -> Self {
        Self {
            open_tag: "<mark>".to_string(),
            close_tag: "</mark>".to_string(),
        }
    }

    pub fn wrap(&self, span: &str) -> String {
        format!("{}{}{}", self.open_tag, span, self.close_tag)
    }
}

impl Default for HighlightConfig {
    fn default() -> Self {
        Self::new()
    }
}

/// Engine configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Max snippets returned per document
    pub max_snippets: usize,

    /// Characters of context kept on each side of a match
    pub context_chars: usize,

    /// Sentences kept in a cached summary
    pub summary_sentences: usize,

    /// Keywords kept per document
    pub keyword_top_n: usize,

    /// Shortest word counted by the summarizer and keyword extractor
    pub min_word_len: usize,

    /// Distinct queries remembered in search history
    pub history_capacity: usize,

    pub duplicate_policy: DuplicatePolicy,

    /// Largest text accepted at registration
    pub max_document_bytes: usize,

    pub highlight: HighlightConfig,
}

impl EngineConfig {
    pub fn new() -> Self {
        Self {
            max_snippets: 5,
            context_chars: 150,
            summary_sentences: 3,
            keyword_top_n: 15,
            min_word_len: 3,
            history_capacity: 10,
            duplicate_policy: DuplicatePolicy::Reject,
            max_document_bytes: 16 * 1024 * 1024,
            highlight: HighlightConfig::new(),
        }
    }

    /// Parse a JSON config; missing fields keep their defaults
    pub fn from_json(json: &str) -> serde_json::Result<Self> {
        serde_json::from_str(json)
    }
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self::new()
    }
}
