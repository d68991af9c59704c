//! Documents keyed by name, remembered in upload order

use notesearch_core::{Document, EngineError, Result};
use std::collections::HashMap;

#[derive(Debug, Default)]
pub struct DocumentStore {
    documents: HashMap<String, Document>,
    order: Vec<String>,
}

impl DocumentStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a document; names are unique
    pub fn insert(&mut self, document: Document) -> Result<()> {
        let name = document.name().to_string();
        if self.documents.contains_key(&name) {
            return Err(EngineError::DuplicateName(name));
        }
        self.order.push(name.clone());
        self.documents.insert(name, document);
        Ok(())
    }

    pub fn remove(&mut self, name: &str) -> Result<Document> {
        let document = self
            .documents
            .remove(name)
            .ok_or_else(|| EngineError::DocumentNotFound(name.to_string()))?;
        self.order.retain(|n| n != name);
        Ok(document)
    }

    pub fn get(&self, name: &str) -> Option<&Document> {
        self.documents.get(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.documents.contains_key(name)
    }

    /// Documents in upload order
    pub fn iter(&self) -> impl Iterator<Item = &Document> {
        self.order.iter().filter_map(|name| self.documents.get(name))
    }

    pub fn len(&self) -> usize {
        self.documents.len()
    }

    pub fn is_empty(&self) -> bool {
        self.documents.is_empty()
    }

    pub fn clear(&mut self) {
        self.documents.clear();
        self.order.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use notesearch_core::DocumentStats;

    fn doc(name: &str) -> Document {
        Document::new(name, "text", vec![], vec![], DocumentStats::default())
    }

    #[test]
    fn test_insert_keeps_upload_order() {
        let mut store = DocumentStore::new();
        store.insert(doc("b.txt")).unwrap();
        store.insert(doc("a.txt")).unwrap();
        store.insert(doc("c.txt")).unwrap();

        let names: Vec<&str> = store.iter().map(|d| d.name()).collect();
        assert_eq!(names, vec!["b.txt", "a.txt", "c.txt"]);
    }

    #[test]
    fn test_duplicate_rejected() {
        let mut store = DocumentStore::new();
        store.insert(doc("a.txt")).unwrap();
        assert_eq!(
            store.insert(doc("a.txt")),
            Err(EngineError::DuplicateName("a.txt".to_string()))
        );
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_remove() {
        let mut store = DocumentStore::new();
        store.insert(doc("a.txt")).unwrap();
        store.insert(doc("b.txt")).unwrap();

        let removed = store.remove("a.txt").unwrap();
        assert_eq!(removed.name(), "a.txt");
        assert!(!store.contains("a.txt"));
        assert_eq!(store.iter().count(), 1);

        assert_eq!(
            store.remove("a.txt").unwrap_err(),
            EngineError::DocumentNotFound("a.txt".to_string())
        );
    }

    #[test]
    fn test_clear() {
        let mut store = DocumentStore::new();
        store.insert(doc("a.txt")).unwrap();
        store.clear();
        assert!(store.is_empty());
        assert_eq!(store.iter().count(), 0);
    }
}
