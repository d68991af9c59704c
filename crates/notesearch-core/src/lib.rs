//! Shared types, configuration and text normalization for notesearch

mod config;
mod error;
pub mod tokenizer;
mod types;

pub use config::{DuplicatePolicy, EngineConfig, HighlightConfig};
pub use error::{EngineError, Result};
pub use types::{
    Document, DocumentListing, DocumentOverview, DocumentStats, Keyword, SearchHit, Snippet,
};
