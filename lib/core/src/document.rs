use ahash::AHashMap;
use serde::{Deserialize, Serialize};

/// Number of leading words used when deriving a title from article text.
pub const TITLE_WORDS: usize = 10;

/// A reference document: an opaque identifier (usually the source URL) and its raw text
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Document {
    pub id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    pub text: String,
}

impl Document {
    #[inline]
    #[must_use]
    pub fn new(id: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            title: None,
            text: text.into(),
        }
    }

    #[inline]
    #[must_use]
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Title derived from the first words of the text, as stored for new trusted articles
    pub fn derive_title(text: &str) -> String {
        let words: Vec<&str> = text.split_whitespace().take(TITLE_WORDS).collect();
        format!("{}...", words.join(" "))
    }
}

/// Ordered collection of reference documents keyed by identifier.
///
/// Insertion order is kept so that ranking ties resolve to the earliest
/// document. Replacing an existing identifier keeps its original position.
#[derive(Debug, Clone, Default)]
pub struct Corpus {
    documents: Vec<Document>,
    index: AHashMap<String, usize>,
}

impl Corpus {
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a document, replacing the text of an existing one with the same id.
    /// Returns the replaced document, if any.
    pub fn upsert(&mut self, document: Document) -> Option<Document> {
        match self.index.get(&document.id) {
            Some(&pos) => Some(std::mem::replace(&mut self.documents[pos], document)),
            None => {
                self.index.insert(document.id.clone(), self.documents.len());
                self.documents.push(document);
                None
            }
        }
    }

    #[inline]
    pub fn get(&self, id: &str) -> Option<&Document> {
        self.index.get(id).map(|&pos| &self.documents[pos])
    }

    #[inline]
    #[must_use]
    pub fn contains(&self, id: &str) -> bool {
        self.index.contains_key(id)
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.documents.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.documents.is_empty()
    }

    /// Documents in insertion order
    #[inline]
    pub fn iter(&self) -> std::slice::Iter<'_, Document> {
        self.documents.iter()
    }

    #[inline]
    #[must_use]
    pub fn as_slice(&self) -> &[Document] {
        &self.documents
    }

    pub fn ids(&self) -> impl Iterator<Item = &str> {
        self.documents.iter().map(|d| d.id.as_str())
    }

    pub fn texts(&self) -> impl Iterator<Item = &str> {
        self.documents.iter().map(|d| d.text.as_str())
    }
}

impl FromIterator<Document> for Corpus {
    fn from_iter<I: IntoIterator<Item = Document>>(iter: I) -> Self {
        let mut corpus = Corpus::new();
        for document in iter {
            corpus.upsert(document);
        }
        corpus
    }
}

impl<'a> IntoIterator for &'a Corpus {
    type Item = &'a Document;
    type IntoIter = std::slice::Iter<'a, Document>;

    fn into_iter(self) -> Self::IntoIter {
        self.documents.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_upsert_keeps_insertion_order() {
        let mut corpus = Corpus::new();
        corpus.upsert(Document::new("b", "second"));
        corpus.upsert(Document::new("a", "first"));
        corpus.upsert(Document::new("c", "third"));

        let ids: Vec<&str> = corpus.ids().collect();
        assert_eq!(ids, vec!["b", "a", "c"]);
    }

    #[test]
    fn test_replace_keeps_position() {
        let mut corpus = Corpus::new();
        corpus.upsert(Document::new("x", "old"));
        corpus.upsert(Document::new("y", "other"));

        let replaced = corpus.upsert(Document::new("x", "new"));
        assert_eq!(replaced.map(|d| d.text), Some("old".to_string()));
        assert_eq!(corpus.len(), 2);
        assert_eq!(corpus.as_slice()[0].text, "new");
        assert_eq!(corpus.get("x").map(|d| d.text.as_str()), Some("new"));
    }

    #[test]
    fn test_derive_title() {
        let text = "one two three four five six seven eight nine ten eleven twelve";
        assert_eq!(
            Document::derive_title(text),
            "one two three four five six seven eight nine ten..."
        );
        assert_eq!(Document::derive_title("  short\ntext "), "short text...");
    }

    #[test]
    fn test_document_serde_skips_missing_title() {
        let doc = Document::new("u", "body");
        let json = serde_json::to_value(&doc).unwrap();
        assert!(json.get("title").is_none());

        let back: Document = serde_json::from_value(json).unwrap();
        assert_eq!(back, doc);
    }
}
