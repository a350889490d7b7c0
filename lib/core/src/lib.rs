//! # TrustRank Core
//!
//! Core library for the TrustRank news checker.
//!
//! This crate provides the data model and the vector-space machinery:
//!
//! - [`Document`] - A reference text keyed by its source identifier
//! - [`Corpus`] - Ordered collection of reference documents
//! - [`Tokenizer`] - Word-boundary tokenizer shared by every document of a call
//! - [`SparseVector`] - Sorted sparse weight vector with dot and norm operations
//! - [`TfIdfVectorizer`] - Fits a vocabulary and produces unit TF-IDF vectors
//!
//! ## Example
//!
//! ```rust
//! use trustrank_core::TfIdfVectorizer;
//!
//! let texts = ["the cat sat on the mat", "dogs are loyal companions", "the cat sat on the mat"];
//! let space = TfIdfVectorizer::default().fit_transform(&texts);
//!
//! let query = space.vector(2).unwrap();
//! let score = query.dot(space.vector(0).unwrap());
//! assert!((score - 1.0).abs() < 1e-9);
//! ```

pub mod document;
pub mod error;
pub mod tokenizer;
pub mod vector;
pub mod vectorizer;

pub use document::{Corpus, Document};
pub use error::{Error, Result};
pub use tokenizer::{Tokenizer, TokenizerConfig};
pub use vector::SparseVector;
pub use vectorizer::{smoothed_idf, TfIdfVectorizer, VectorSpace};
