//! Error type shared by the engine crates

use thiserror::Error;

/// Errors reported by engine operations.
///
/// All of them are recoverable: a failed operation leaves the document store
/// and search history exactly as they were.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum EngineError {
    /// Query was empty after trimming whitespace
    #[error("query is empty")]
    EmptyQuery,

    #[error("document not found: {0}")]
    DocumentNotFound(String),

    /// Extraction produced no usable text
    #[error("document has no text: {0}")]
    EmptyDocumentText(String),

    #[error("document already exists: {0}")]
    DuplicateName(String),

    #[error("document {name} is {size} bytes, limit is {limit}")]
    DocumentTooLarge {
        name: String,
        size: usize,
        limit: usize,
    },
}

pub type Result<T> = std::result::Result<T, EngineError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        assert_eq!(EngineError::EmptyQuery.to_string(), "query is empty");
        assert_eq!(
            EngineError::DocumentNotFound("notes.txt".to_string()).to_string(),
            "document not found: notes.txt"
        );
        let err = EngineError::DocumentTooLarge {
            name: "big.txt".to_string(),
            size: 20,
            limit: 10,
        };
        assert!(err.to_string().contains("limit is 10"));
    }
}
