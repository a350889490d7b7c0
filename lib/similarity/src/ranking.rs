//! Best-match search of a query text against a reference corpus
//!
//! Each call fits one TF-IDF space over the corpus texts plus the query
//! (appended last) and compares the query vector with every reference
//! vector. Nothing is cached between calls.

use crate::classify::{to_percentage, Tier};
use serde::Serialize;
use trustrank_core::{Corpus, SparseVector, TfIdfVectorizer, TokenizerConfig};

/// Best reference for a query; `matched_id` is empty only when nothing was ranked
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RankedMatch {
    pub score: f64,
    pub matched_id: String,
    pub matched_text: String,
}

impl RankedMatch {
    #[inline]
    #[must_use]
    pub fn no_match() -> Self {
        Self {
            score: 0.0,
            matched_id: String::new(),
            matched_text: String::new(),
        }
    }

    #[inline]
    #[must_use]
    pub fn is_match(&self) -> bool {
        !self.matched_id.is_empty()
    }

    #[inline]
    pub fn percentage(&self) -> f64 {
        to_percentage(self.score)
    }

    #[inline]
    pub fn tier(&self) -> Tier {
        Tier::from_score(self.score)
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct SimilarityEngine {
    vectorizer: TfIdfVectorizer,
}

impl SimilarityEngine {
    #[inline]
    #[must_use]
    pub fn new(config: TokenizerConfig) -> Self {
        Self {
            vectorizer: TfIdfVectorizer::new(config),
        }
    }

    /// Cosine similarity of the query against each reference, in corpus order.
    ///
    /// Returns an empty list when the corpus is empty or the query is blank.
    pub fn scores(&self, query: &str, corpus: &Corpus) -> Vec<f64> {
        if corpus.is_empty() || query.trim().is_empty() {
            return Vec::new();
        }

        let mut texts: Vec<&str> = Vec::with_capacity(corpus.len() + 1);
        texts.extend(corpus.texts());
        texts.push(query);

        let space = self.vectorizer.fit_transform(&texts);
        let (references, query_vector) = space.vectors().split_at(corpus.len());
        let query_vector = &query_vector[0];

        tracing::trace!(
            references = corpus.len(),
            vocabulary = space.vocabulary_size(),
            "Fitted vector space"
        );

        references
            .iter()
            .map(|reference| unit_cosine(query_vector, reference))
            .collect()
    }

    /// Highest scoring reference; ties go to the earliest document in the corpus,
    /// including an all-zero score list
    pub fn best_match(&self, query: &str, corpus: &Corpus) -> RankedMatch {
        let scores = self.scores(query, corpus);

        let mut best: Option<(usize, f64)> = None;
        for (pos, &score) in scores.iter().enumerate() {
            match best {
                Some((_, best_score)) if score <= best_score => {}
                _ => best = Some((pos, score)),
            }
        }

        match best {
            Some((pos, score)) => {
                let document = &corpus.as_slice()[pos];
                tracing::debug!(matched = %document.id, score, "Best match found");
                RankedMatch {
                    score,
                    matched_id: document.id.clone(),
                    matched_text: document.text.clone(),
                }
            }
            None => RankedMatch::no_match(),
        }
    }

    /// Up to `limit` references with a positive score, best first, ties in corpus order
    pub fn top_k(&self, query: &str, corpus: &Corpus, limit: usize) -> Vec<RankedMatch> {
        let mut ranked: Vec<(usize, f64)> = self
            .scores(query, corpus)
            .into_iter()
            .enumerate()
            .filter(|(_, score)| *score > 0.0)
            .collect();

        // stable sort keeps corpus order among equal scores
        ranked.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(std::cmp::Ordering::Equal));
        ranked.truncate(limit);

        ranked
            .into_iter()
            .map(|(pos, score)| {
                let document = &corpus.as_slice()[pos];
                RankedMatch {
                    score,
                    matched_id: document.id.clone(),
                    matched_text: document.text.clone(),
                }
            })
            .collect()
    }
}

/// Dot product of two unit vectors, clamped to [0, 1]
#[inline]
fn unit_cosine(a: &SparseVector, b: &SparseVector) -> f64 {
    a.dot(b).clamp(0.0, 1.0)
}

/// Best match using the default tokenizer
pub fn find_best_match(query: &str, corpus: &Corpus) -> RankedMatch {
    SimilarityEngine::default().best_match(query, corpus)
}
