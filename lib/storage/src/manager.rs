use crate::corpus_store::CorpusStore;
use parking_lot::RwLock;
use std::path::Path;
use std::sync::Arc;
use trustrank_core::{Corpus, Document, Error, Result};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AddOutcome {
    Added,
    AlreadyExists,
}

/// Owns the in-memory corpus and keeps it in sync with the store.
///
/// Readers take an `Arc<Corpus>` snapshot; additions swap in a new corpus so a
/// ranking call always sees one consistent version.
pub struct CorpusManager {
    corpus: RwLock<Arc<Corpus>>,
    store: CorpusStore,
}

impl CorpusManager {
    /// Open the store at `path` and load whatever it holds
    pub fn open<P: AsRef<Path>>(path: P) -> Self {
        Self::with_store(CorpusStore::new(path))
    }

    pub fn with_store(store: CorpusStore) -> Self {
        let corpus = store.load();
        Self {
            corpus: RwLock::new(Arc::new(corpus)),
            store,
        }
    }

    #[inline]
    pub fn snapshot(&self) -> Arc<Corpus> {
        self.corpus.read().clone()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.corpus.read().len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.corpus.read().is_empty()
    }

    /// Persist a new trusted article, then make it visible to readers.
    ///
    /// Existing identifiers are left untouched. If the write fails the
    /// in-memory corpus is unchanged.
    pub fn add(&self, document: Document) -> Result<AddOutcome> {
        if document.id.trim().is_empty() {
            return Err(Error::InvalidInput("document id must not be empty".to_string()));
        }

        let mut corpus = self.corpus.write();
        if corpus.contains(&document.id) {
            return Ok(AddOutcome::AlreadyExists);
        }

        self.store
            .append(&document)
            .map_err(|e| Error::Storage(e.to_string()))?;

        tracing::info!(id = %document.id, "Trusted article added");
        Arc::make_mut(&mut *corpus).upsert(document);
        Ok(AddOutcome::Added)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_persists_and_publishes() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("articles.json");
        let manager = CorpusManager::open(&path);
        assert!(manager.is_empty());

        let before = manager.snapshot();
        let outcome = manager.add(Document::new("https://a.example/1", "some trusted text")).unwrap();
        assert_eq!(outcome, AddOutcome::Added);

        // earlier snapshots are not affected
        assert!(before.is_empty());
        assert_eq!(manager.len(), 1);
        assert_eq!(CorpusManager::open(&path).len(), 1);
    }

    #[test]
    fn test_duplicate_is_reported() {
        let dir = tempfile::tempdir().unwrap();
        let manager = CorpusManager::open(dir.path().join("articles.json"));
        manager.add(Document::new("u", "first")).unwrap();

        let outcome = manager.add(Document::new("u", "second")).unwrap();
        assert_eq!(outcome, AddOutcome::AlreadyExists);
        assert_eq!(manager.snapshot().get("u").unwrap().text, "first");
    }

    #[test]
    fn test_empty_id_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let manager = CorpusManager::open(dir.path().join("articles.json"));
        assert!(matches!(
            manager.add(Document::new("  ", "text")),
            Err(Error::InvalidInput(_))
        ));
    }

    #[test]
    fn test_failed_write_leaves_corpus_unchanged() {
        let dir = tempfile::tempdir().unwrap();
        // a directory where the file should be makes every write fail
        let path = dir.path().join("articles.json");
        std::fs::create_dir_all(&path).unwrap();

        let manager = CorpusManager::open(&path);
        let result = manager.add(Document::new("u", "text"));
        assert!(matches!(result, Err(Error::Storage(_))));
        assert!(manager.is_empty());
    }
}
