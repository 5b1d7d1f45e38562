//! In-memory document store
//!
//! The id set is fixed when the store is built; only content can change.

use doc_common::{DocError, Result};
use doc_config::SeedDocument;
use indexmap::IndexMap;

/// Insertion-ordered mapping from document id to content
#[derive(Debug, Clone, Default)]
pub struct DocumentStore {
    entries: IndexMap<String, String>,
}

impl DocumentStore {
    /// Build a store from `(id, content)` pairs, keeping their order
    ///
    /// A repeated id is an error instead of a silent overwrite.
    pub fn from_seed<I, K, V>(seed: I) -> Result<Self>
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        let mut entries = IndexMap::new();
        for (id, content) in seed {
            let id = id.into();
            if entries.contains_key(&id) {
                return Err(DocError::DuplicateDocument(id));
            }
            entries.insert(id, content.into());
        }
        tracing::debug!(documents = entries.len(), "Document store initialized");
        Ok(Self { entries })
    }

    /// Build a store from configured seed documents
    pub fn from_documents(documents: &[SeedDocument]) -> Result<Self> {
        Self::from_seed(
            documents
                .iter()
                .map(|doc| (doc.id.as_str(), doc.content.as_str())),
        )
    }

    /// Content of `id`
    pub fn get(&self, id: &str) -> Result<&str> {
        self.entries
            .get(id)
            .map(String::as_str)
            .ok_or_else(|| DocError::not_found(id))
    }

    /// Overwrite content of an existing `id`; never creates a document
    pub fn set(&mut self, id: &str, content: String) -> Result<()> {
        let slot = self
            .entries
            .get_mut(id)
            .ok_or_else(|| DocError::not_found(id))?;
        *slot = content;
        Ok(())
    }

    /// All ids in insertion order
    pub fn list_ids(&self) -> Vec<String> {
        self.entries.keys().cloned().collect()
    }

    pub fn contains(&self, id: &str) -> bool {
        self.entries.contains_key(id)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn store() -> DocumentStore {
        DocumentStore::from_seed([("a.md", "alpha"), ("b.md", "beta")]).unwrap()
    }

    #[test]
    fn test_get_existing() {
        assert_eq!(store().get("a.md").unwrap(), "alpha");
    }

    #[test]
    fn test_get_missing() {
        let err = store().get("c.md").unwrap_err();
        assert!(matches!(err, DocError::NotFound { ref id } if id == "c.md"));
    }

    #[test]
    fn test_set_overwrites() {
        let mut store = store();
        store.set("b.md", "gamma".to_string()).unwrap();
        assert_eq!(store.get("b.md").unwrap(), "gamma");
    }

    #[test]
    fn test_set_never_creates() {
        let mut store = store();
        assert!(store.set("new.md", "x".to_string()).is_err());
        assert!(!store.contains("new.md"));
        assert_eq!(store.len(), 2);
    }

    #[test]
    fn test_list_ids_keeps_seed_order() {
        let store = DocumentStore::from_seed([("z", ""), ("a", ""), ("m", "")]).unwrap();
        assert_eq!(store.list_ids(), vec!["z", "a", "m"]);
        assert_eq!(store.list_ids(), store.list_ids());
    }

    #[test]
    fn test_duplicate_seed_rejected() {
        let err = DocumentStore::from_seed([("a", "1"), ("a", "2")]).unwrap_err();
        assert!(matches!(err, DocError::DuplicateDocument(ref id) if id == "a"));
    }

    #[test]
    fn test_empty_store() {
        let store = DocumentStore::default();
        assert!(store.is_empty());
        assert!(store.list_ids().is_empty());
    }
}
