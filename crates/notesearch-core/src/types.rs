//! Document and search result types

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A keyword with its occurrence count
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Keyword {
    pub word: String,
    pub frequency: usize,
}

impl Keyword {
    pub fn new(word: impl Into<String>, frequency: usize) -> Self {
        Self {
            word: word.into(),
            frequency,
        }
    }
}

/// Size statistics computed once when a document is registered
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DocumentStats {
    pub words: usize,
    pub chars: usize,
    pub lines: usize,
    pub sentences: usize,
}

impl DocumentStats {
    /// Summary length as a percentage of the document's words, one decimal place
    pub fn compression_ratio(&self, summary: &[String]) -> f64 {
        if self.words == 0 {
            return 0.0;
        }
        let summary_words: usize = summary.iter().map(|s| s.split_whitespace().count()).sum();
        (summary_words as f64 / self.words as f64 * 1000.0).round() / 10.0
    }
}

/// A registered document with its cached summary and keywords.
///
/// Nothing about a document changes after registration; a new upload under
/// the same name produces a new `Document`.
#[derive(Debug, Clone, Serialize)]
pub struct Document {
    name: String,
    text: String,
    summary: Vec<String>,
    keywords: Vec<Keyword>,
    stats: DocumentStats,
    uploaded_at: DateTime<Utc>,
}

impl Document {
    pub fn new(
        name: impl Into<String>,
        text: impl Into<String>,
        summary: Vec<String>,
        keywords: Vec<Keyword>,
        stats: DocumentStats,
    ) -> Self {
        Self {
            name: name.into(),
            text: text.into(),
            summary,
            keywords,
            stats,
            uploaded_at: Utc::now(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn word_count(&self) -> usize {
        self.stats.words
    }

    pub fn summary(&self) -> &[String] {
        &self.summary
    }

    pub fn keywords(&self) -> &[Keyword] {
        &self.keywords
    }

    pub fn stats(&self) -> &DocumentStats {
        &self.stats
    }

    pub fn overview(&self) -> DocumentOverview {
        DocumentOverview {
            word_count: self.word_count(),
            summary: self.summary.clone(),
            keywords: self.keywords.clone(),
        }
    }

    pub fn listing(&self) -> DocumentListing {
        DocumentListing {
            name: self.name.clone(),
            word_count: self.word_count(),
            summary: self.summary.clone(),
            uploaded_at: self.uploaded_at,
        }
    }
}

/// What registration hands back to the upload layer
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DocumentOverview {
    pub word_count: usize,
    pub summary: Vec<String>,
    pub keywords: Vec<Keyword>,
}

/// One row of the document list, in upload order
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DocumentListing {
    pub name: String,
    pub word_count: usize,
    pub summary: Vec<String>,
    pub uploaded_at: DateTime<Utc>,
}

/// A bounded window of document text around one or more matches
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Snippet {
    /// Window text with every contained match wrapped in highlight markers
    pub text: String,
    /// Byte offset of the first match in the original text
    pub offset: usize,
    /// Raw matches collapsed into this window
    pub match_count: usize,
    /// 1-based line of the first match
    pub line_number: usize,
    /// Page or slide number from extraction markers, if the text has them
    pub page_number: Option<u32>,
    /// Text exists before the window
    pub has_preceding: bool,
    /// Text exists after the window
    pub has_following: bool,
}

impl Snippet {
    /// Window text with ellipses where it was cut from the document
    pub fn render(&self) -> String {
        let mut out = String::with_capacity(self.text.len() + 6);
        if self.has_preceding {
            out.push_str("...");
        }
        out.push_str(&self.text);
        if self.has_following {
            out.push_str("...");
        }
        out
    }
}

/// Matches for a single document
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SearchHit {
    pub name: String,
    pub match_count: usize,
    pub snippets: Vec<Snippet>,
}
