//! Engine context: every operation the upload and search layers call

use crate::history::SearchHistory;
use crate::store::DocumentStore;
use notesearch_core::tokenizer::{sentences, word_count};
use notesearch_core::{
    Document, DocumentListing, DocumentOverview, DocumentStats, DuplicatePolicy, EngineConfig,
    EngineError, Result, SearchHit,
};
use notesearch_index::{Query, QueryEngine, TextMatcher};
use notesearch_summarize::{extract_keywords, summarize, StudyNotes};
use std::sync::{Arc, Mutex, PoisonError};

/// Owns the document store and search history.
///
/// Nothing here is global: callers create an engine and pass it to whatever
/// serves requests. Mutating operations take `&mut self`; wrap the engine in
/// a [`SharedEngine`] to serve several threads.
pub struct Engine {
    config: EngineConfig,
    store: DocumentStore,
    history: SearchHistory,
    query_engine: QueryEngine,
}

impl Engine {
    pub fn new(config: EngineConfig) -> Self {
        Self::with_query_engine(config, QueryEngine::new())
    }

    /// Engine whose searches locate matches with `matcher`
    pub fn with_matcher(
        config: EngineConfig,
        matcher: impl TextMatcher + Send + Sync + 'static,
    ) -> Self {
        Self::with_query_engine(config, QueryEngine::with_matcher(matcher))
    }

    fn with_query_engine(config: EngineConfig, query_engine: QueryEngine) -> Self {
        let history = SearchHistory::new(config.history_capacity);
        Self {
            config,
            store: DocumentStore::new(),
            history,
            query_engine,
        }
    }

    /// Index extracted text under `name`.
    ///
    /// Summary and keywords are computed here, once. On error the store is
    /// left untouched.
    pub fn register_document(&mut self, name: &str, text: &str) -> Result<DocumentOverview> {
        if text.trim().is_empty() {
            return Err(EngineError::EmptyDocumentText(name.to_string()));
        }
        if text.len() > self.config.max_document_bytes {
            return Err(EngineError::DocumentTooLarge {
                name: name.to_string(),
                size: text.len(),
                limit: self.config.max_document_bytes,
            });
        }

        let replacing = self.store.contains(name);
        if replacing && self.config.duplicate_policy == DuplicatePolicy::Reject {
            return Err(EngineError::DuplicateName(name.to_string()));
        }

        let document = self.analyze(name, text);
        let overview = document.overview();

        if replacing {
            self.store.remove(name)?;
        }
        self.store.insert(document)?;

        tracing::info!(
            document = name,
            words = overview.word_count,
            keywords = overview.keywords.len(),
            replaced = replacing,
            "registered document"
        );
        Ok(overview)
    }

    fn analyze(&self, name: &str, text: &str) -> Document {
        let summary = summarize(text, self.config.summary_sentences, self.config.min_word_len);
        let keywords = extract_keywords(text, self.config.keyword_top_n, self.config.min_word_len);
        let stats = DocumentStats {
            words: word_count(text),
            chars: text.chars().count(),
            lines: text.split('\n').count(),
            sentences: sentences(text).len(),
        };
        Document::new(name, text, summary, keywords, stats)
    }

    pub fn delete_document(&mut self, name: &str) -> Result<()> {
        self.store.remove(name)?;
        tracing::info!(document = name, "deleted document");
        Ok(())
    }

    pub fn document(&self, name: &str) -> Result<&Document> {
        self.store
            .get(name)
            .ok_or_else(|| EngineError::DocumentNotFound(name.to_string()))
    }

    /// Name, word count and summary of every document, in upload order
    pub fn list_documents(&self) -> Vec<DocumentListing> {
        self.store.iter().map(Document::listing).collect()
    }

    /// Search every stored document.
    ///
    /// A blank query is not an error: it returns no hits and leaves the
    /// history alone. The query is recorded only when something matched.
    pub fn search(&mut self, raw_query: &str) -> Vec<SearchHit> {
        let query = match Query::parse(raw_query) {
            Ok(query) => query,
            Err(err) => {
                tracing::debug!(%err, "skipping search");
                return Vec::new();
            }
        };

        let documents = self.store.iter().map(|doc| (doc.name(), doc.text()));
        let hits = self.query_engine.search(&query, documents, &self.config);

        tracing::debug!(query = query.as_str(), hits = hits.len(), "search finished");
        if !hits.is_empty() {
            self.history.record(query.as_str());
        }
        hits
    }

    /// Search a single document by name
    pub fn search_document(&mut self, name: &str, raw_query: &str) -> Result<Option<SearchHit>> {
        let doc = self
            .store
            .get(name)
            .ok_or_else(|| EngineError::DocumentNotFound(name.to_string()))?;
        let query = match Query::parse(raw_query) {
            Ok(query) => query,
            Err(EngineError::EmptyQuery) => return Ok(None),
            Err(err) => return Err(err),
        };

        let hit = self
            .query_engine
            .search_text(doc.name(), doc.text(), &query, &self.config);
        if hit.is_some() {
            self.history.record(query.as_str());
        }
        Ok(hit)
    }

    /// Recent distinct queries, most recent first
    pub fn history(&self) -> &[String] {
        self.history.entries()
    }

    pub fn study_notes(&self, name: &str) -> Result<StudyNotes> {
        self.document(name).map(StudyNotes::from_document)
    }

    /// Drop every document and forget the search history
    pub fn clear(&mut self) {
        self.store.clear();
        self.history.clear();
        tracing::info!("cleared engine");
    }

    pub fn len(&self) -> usize {
        self.store.len()
    }

    pub fn is_empty(&self) -> bool {
        self.store.is_empty()
    }
}

impl Default for Engine {
    fn default() -> Self {
        Self::new(EngineConfig::default())
    }
}

/// Thread-safe handle that serializes every engine operation
#[derive(Clone, Default)]
pub struct SharedEngine {
    inner: Arc<Mutex<Engine>>,
}

impl SharedEngine {
    pub fn new(engine: Engine) -> Self {
        Self {
            inner: Arc::new(Mutex::new(engine)),
        }
    }

    /// Run `f` with exclusive access to the engine
    pub fn with<R>(&self, f: impl FnOnce(&mut Engine) -> R) -> R {
        // operations never leave partial state, so a poisoned engine is still valid
        let mut guard = self.inner.lock().unwrap_or_else(PoisonError::into_inner);
        f(&mut *guard)
    }
}
