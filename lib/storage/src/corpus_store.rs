// JSON-backed store for trusted reference articles
use anyhow::{anyhow, Context, Result};
use atomicwrites::{AllowOverwrite, AtomicFile};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::io::Write;
use std::path::{Path, PathBuf};
use trustrank_core::{Corpus, Document};

/// Top-level key holding the article map
const ARTICLES_KEY: &str = "articles";

/// One stored article, keyed by its URL in the file
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ArticleRecord {
    #[serde(default)]
    pub url: String,
    #[serde(default)]
    pub title: String,
    pub text: String,
}

impl ArticleRecord {
    pub fn from_document(document: &Document) -> Self {
        Self {
            url: document.id.clone(),
            title: document
                .title
                .clone()
                .unwrap_or_else(|| Document::derive_title(&document.text)),
            text: document.text.clone(),
        }
    }

    fn into_document(self, key: &str) -> Document {
        let mut document = Document::new(key, self.text);
        if !self.title.is_empty() {
            document.title = Some(self.title);
        }
        document
    }
}

/// Persists the corpus as `{"articles": {"<url>": {"url", "title", "text"}}}`.
///
/// Loading never fails: a missing or malformed file yields an empty corpus.
#[derive(Debug, Clone)]
pub struct CorpusStore {
    path: PathBuf,
}

impl CorpusStore {
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    #[inline]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load the corpus in file order
    pub fn load(&self) -> Corpus {
        if !self.path.exists() {
            tracing::warn!(path = %self.path.display(), "Corpus file not found, starting with an empty corpus");
            return Corpus::new();
        }

        match self.read_articles() {
            Ok(articles) => {
                let mut corpus = Corpus::new();
                for (key, value) in articles {
                    match serde_json::from_value::<ArticleRecord>(value) {
                        Ok(record) => {
                            corpus.upsert(record.into_document(&key));
                        }
                        Err(e) => {
                            tracing::warn!(article = %key, error = %e, "Skipping malformed article");
                        }
                    }
                }
                tracing::info!(articles = corpus.len(), path = %self.path.display(), "Corpus loaded");
                corpus
            }
            Err(e) => {
                tracing::warn!(path = %self.path.display(), error = %e, "Failed to read corpus file, starting with an empty corpus");
                Corpus::new()
            }
        }
    }

    fn read_root(&self) -> Result<Map<String, Value>> {
        let data = std::fs::read(&self.path)
            .with_context(|| format!("Failed to read {}", self.path.display()))?;
        match serde_json::from_slice::<Value>(&data)? {
            Value::Object(root) => Ok(root),
            _ => Err(anyhow!("Expected a JSON object at the top level")),
        }
    }

    fn read_articles(&self) -> Result<Map<String, Value>> {
        let mut root = self.read_root()?;
        match root.remove(ARTICLES_KEY) {
            Some(Value::Object(articles)) => Ok(articles),
            Some(_) => Err(anyhow!("'{}' must be a JSON object", ARTICLES_KEY)),
            None => Ok(Map::new()),
        }
    }

    /// Overwrite the file with the full corpus
    pub fn save(&self, corpus: &Corpus) -> Result<()> {
        let mut articles = Map::new();
        for document in corpus {
            articles.insert(
                document.id.clone(),
                serde_json::to_value(ArticleRecord::from_document(document))?,
            );
        }

        let mut root = Map::new();
        root.insert(ARTICLES_KEY.to_string(), Value::Object(articles));
        self.write_root(&root)
    }

    /// Add or replace one article, merging with whatever is currently on disk
    pub fn append(&self, document: &Document) -> Result<()> {
        let mut root = if self.path.exists() {
            self.read_root().unwrap_or_else(|e| {
                tracing::warn!(path = %self.path.display(), error = %e, "Existing corpus file unreadable, rewriting it");
                Map::new()
            })
        } else {
            Map::new()
        };

        let entry = root
            .entry(ARTICLES_KEY.to_string())
            .or_insert_with(|| Value::Object(Map::new()));
        if !entry.is_object() {
            *entry = Value::Object(Map::new());
        }
        if let Value::Object(articles) = entry {
            articles.insert(
                document.id.clone(),
                serde_json::to_value(ArticleRecord::from_document(document))?,
            );
        }

        self.write_root(&root)
    }

    fn write_root(&self, root: &Map<String, Value>) -> Result<()> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent)?;
        }

        let data = serde_json::to_vec_pretty(root)?;
        AtomicFile::new(&self.path, AllowOverwrite)
            .write(|f| f.write_all(&data))
            .map_err(|e| anyhow!("Failed to write {}: {}", self.path.display(), e))?;

        tracing::debug!(path = %self.path.display(), bytes = data.len(), "Corpus file written");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn doc(id: &str, text: &str) -> Document {
        Document::new(id, text)
    }

    #[test]
    fn test_missing_file_loads_empty() {
        let dir = tempfile::tempdir().unwrap();
        let store = CorpusStore::new(dir.path().join("missing.json"));
        assert!(store.load().is_empty());
    }

    #[test]
    fn test_malformed_file_loads_empty() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("articles.json");

        std::fs::write(&path, "{ not json").unwrap();
        assert!(CorpusStore::new(&path).load().is_empty());

        std::fs::write(&path, r#"{"articles": []}"#).unwrap();
        assert!(CorpusStore::new(&path).load().is_empty());

        std::fs::write(&path, "[1, 2, 3]").unwrap();
        assert!(CorpusStore::new(&path).load().is_empty());
    }

    #[test]
    fn test_skips_entries_without_text() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("articles.json");
        std::fs::write(
            &path,
            r#"{"articles": {
                "https://a.example/1": {"url": "https://a.example/1", "title": "t", "text": "first"},
                "https://a.example/2": {"url": "https://a.example/2"},
                "https://a.example/3": {"text": "third"}
            }}"#,
        )
        .unwrap();

        let corpus = CorpusStore::new(&path).load();
        let ids: Vec<&str> = corpus.ids().collect();
        assert_eq!(ids, vec!["https://a.example/1", "https://a.example/3"]);
        assert_eq!(corpus.get("https://a.example/1").unwrap().title.as_deref(), Some("t"));
    }

    #[test]
    fn test_save_load_preserves_order() {
        let dir = tempfile::tempdir().unwrap();
        let store = CorpusStore::new(dir.path().join("nested").join("articles.json"));

        let corpus: Corpus = vec![doc("z", "last letter"), doc("a", "first letter"), doc("m", "middle")]
            .into_iter()
            .collect();
        store.save(&corpus).unwrap();

        let loaded = store.load();
        assert_eq!(loaded.ids().collect::<Vec<_>>(), vec!["z", "a", "m"]);
        assert_eq!(loaded.get("a").unwrap().text, "first letter");
        assert_eq!(loaded.get("a").unwrap().title.as_deref(), Some("first letter..."));
    }

    #[test]
    fn test_append_merges_with_disk() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("articles.json");
        std::fs::write(
            &path,
            r#"{"version": 2, "articles": {"old": {"url": "old", "title": "", "text": "kept"}}}"#,
        )
        .unwrap();

        let store = CorpusStore::new(&path);
        store.append(&doc("new", "added text")).unwrap();

        let corpus = store.load();
        assert_eq!(corpus.ids().collect::<Vec<_>>(), vec!["old", "new"]);

        let raw: Value = serde_json::from_slice(&std::fs::read(&path).unwrap()).unwrap();
        assert_eq!(raw["version"], 2);
        assert_eq!(raw["articles"]["new"]["title"], "added text...");
    }

    #[test]
    fn test_append_creates_file() {
        let dir = tempfile::tempdir().unwrap();
        let store = CorpusStore::new(dir.path().join("fresh.json"));
        store.append(&doc("u", "hello world")).unwrap();
        assert_eq!(store.load().len(), 1);
    }

    #[test]
    fn test_unicode_written_unescaped() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("articles.json");
        let store = CorpusStore::new(&path);
        store.append(&doc("u", "berita café")).unwrap();

        let raw = std::fs::read_to_string(&path).unwrap();
        assert!(raw.contains("café"));
    }
}
