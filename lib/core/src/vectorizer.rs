//! TF-IDF vectorization over a call-local set of texts.
//!
//! One fit covers every text passed in, so all resulting vectors share a
//! vocabulary and IDF table. Weights are raw term counts times the smoothed
//! IDF `ln((1 + N) / (1 + df)) + 1`, then L2-normalized.

use crate::tokenizer::{Tokenizer, TokenizerConfig};
use crate::vector::SparseVector;
use ahash::AHashMap;
use rayon::prelude::*;

#[derive(Debug, Clone, Copy, Default)]
pub struct TfIdfVectorizer {
    tokenizer: Tokenizer,
}

/// Vocabulary, IDF weights and one unit vector per fitted text
#[derive(Debug, Clone)]
pub struct VectorSpace {
    vocabulary: AHashMap<String, u32>,
    terms: Vec<String>,
    idf: Vec<f64>,
    vectors: Vec<SparseVector>,
}

/// Smoothed inverse document frequency
#[inline]
pub fn smoothed_idf(doc_count: usize, doc_freq: usize) -> f64 {
    ((1.0 + doc_count as f64) / (1.0 + doc_freq as f64)).ln() + 1.0
}

impl TfIdfVectorizer {
    #[inline]
    #[must_use]
    pub fn new(config: TokenizerConfig) -> Self {
        Self {
            tokenizer: Tokenizer::new(config),
        }
    }

    /// Fit a vocabulary over `texts` and vectorize each of them, in input order
    pub fn fit_transform<S>(&self, texts: &[S]) -> VectorSpace
    where
        S: AsRef<str> + Sync,
    {
        let tokenized: Vec<Vec<String>> = texts
            .par_iter()
            .map(|text| self.tokenizer.tokenize(text.as_ref()))
            .collect();

        // Term ids follow first occurrence so the space is reproducible
        let mut vocabulary: AHashMap<String, u32> = AHashMap::new();
        let mut terms: Vec<String> = Vec::new();
        for tokens in &tokenized {
            for token in tokens {
                if !vocabulary.contains_key(token) {
                    vocabulary.insert(token.clone(), terms.len() as u32);
                    terms.push(token.clone());
                }
            }
        }

        let counts: Vec<Vec<(u32, f64)>> = tokenized
            .par_iter()
            .map(|tokens| {
                let mut tf: AHashMap<u32, f64> = AHashMap::new();
                for token in tokens {
                    if let Some(&id) = vocabulary.get(token) {
                        *tf.entry(id).or_insert(0.0) += 1.0;
                    }
                }
                tf.into_iter().collect()
            })
            .collect();

        let mut doc_freq = vec![0usize; terms.len()];
        for doc_counts in &counts {
            for &(id, _) in doc_counts {
                doc_freq[id as usize] += 1;
            }
        }

        let doc_count = texts.len();
        let idf: Vec<f64> = doc_freq
            .iter()
            .map(|&df| smoothed_idf(doc_count, df))
            .collect();

        let vectors = counts
            .into_par_iter()
            .map(|doc_counts| weigh(doc_counts, &idf))
            .collect();

        VectorSpace {
            vocabulary,
            terms,
            idf,
            vectors,
        }
    }
}

fn weigh(counts: Vec<(u32, f64)>, idf: &[f64]) -> SparseVector {
    let weighted = counts
        .into_iter()
        .map(|(id, tf)| (id, tf * idf[id as usize]))
        .collect();
    let mut vector = SparseVector::from_pairs(weighted);
    vector.normalize();
    vector
}

impl VectorSpace {
    /// Number of texts the space was fitted on
    #[inline]
    #[must_use]
    pub fn doc_count(&self) -> usize {
        self.vectors.len()
    }

    #[inline]
    #[must_use]
    pub fn vocabulary_size(&self) -> usize {
        self.terms.len()
    }

    #[inline]
    pub fn term_id(&self, term: &str) -> Option<u32> {
        self.vocabulary.get(term).copied()
    }

    /// Terms ordered by id
    #[inline]
    pub fn terms(&self) -> &[String] {
        &self.terms
    }

    pub fn idf(&self, term: &str) -> Option<f64> {
        self.term_id(term).map(|id| self.idf[id as usize])
    }

    #[inline]
    pub fn vector(&self, doc: usize) -> Option<&SparseVector> {
        self.vectors.get(doc)
    }

    #[inline]
    pub fn vectors(&self) -> &[SparseVector] {
        &self.vectors
    }
}
