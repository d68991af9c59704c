//! Query parsing and ranked search across documents

use crate::matcher::{SubstringScanner, TextMatcher};
use crate::snippet::build_snippets;
use notesearch_core::{EngineConfig, EngineError, Result, SearchHit};

/// A validated, trimmed query
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Query {
    text: String,
}

impl Query {
    pub fn parse(raw: &str) -> Result<Self> {
        let text = raw.trim();
        if text.is_empty() {
            return Err(EngineError::EmptyQuery);
        }
        Ok(Self {
            text: text.to_string(),
        })
    }

    pub fn as_str(&self) -> &str {
        &self.text
    }
}

/// Runs a query against document texts and ranks the hits by match count
pub struct QueryEngine {
    matcher: Box<dyn TextMatcher + Send + Sync>,
}

impl QueryEngine {
    pub fn new() -> Self {
        Self::with_matcher(SubstringScanner)
    }

    pub fn with_matcher(matcher: impl TextMatcher + Send + Sync + 'static) -> Self {
        Self {
            matcher: Box::new(matcher),
        }
    }

    /// Search one document; `None` when the query does not occur
    pub fn search_text(
        &self,
        name: &str,
        text: &str,
        query: &Query,
        config: &EngineConfig,
    ) -> Option<SearchHit> {
        let matches = self.matcher.locate(text, query.as_str());
        tracing::debug!(document = name, matches = matches.len(), "scanned document");
        if matches.is_empty() {
            return None;
        }

        Some(SearchHit {
            name: name.to_string(),
            match_count: matches.len(),
            snippets: build_snippets(text, &matches, config),
        })
    }

    /// Search every `(name, text)` pair.
    ///
    /// Hits are ordered by descending match count; equal counts keep the
    /// order the documents were given in. Documents without matches are left
    /// out.
    pub fn search<'a, I>(
        &self,
        query: &Query,
        documents: I,
        config: &EngineConfig,
    ) -> Vec<SearchHit>
    where
        I: IntoIterator<Item = (&'a str, &'a str)>,
    {
        let mut hits: Vec<SearchHit> = documents
            .into_iter()
            .filter_map(|(name, text)| self.search_text(name, text, query, config))
            .collect();

        hits.sort_by(|a, b| b.match_count.cmp(&a.match_count));
        hits
    }
}

impl Default for QueryEngine {
    fn default() -> Self {
        Self::new()
    }
}
