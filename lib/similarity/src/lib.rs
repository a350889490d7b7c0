//! # TrustRank Similarity
//!
//! Ranks a query text against a corpus of trusted reference articles and
//! turns the best score into a verdict.
//!
//! ## Example
//!
//! ```rust
//! use trustrank_core::{Corpus, Document};
//! use trustrank_similarity::{SimilarityEngine, Tier};
//!
//! let corpus: Corpus = [
//!     Document::new("A", "the cat sat on the mat"),
//!     Document::new("B", "dogs are loyal companions"),
//! ]
//! .into_iter()
//! .collect();
//!
//! let best = SimilarityEngine::default().best_match("the cat sat on the mat", &corpus);
//! assert_eq!(best.matched_id, "A");
//! assert_eq!(best.tier(), Tier::PartiallyTrue);
//! ```
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────┐     ┌─────────────┐     ┌─────────────┐
//! │   Corpus    │────>│  Vectorizer │────>│   Ranking   │
//! │  + query    │     │  (TF-IDF)   │     │  (argmax)   │
//! └─────────────┘     └─────────────┘     └─────────────┘
//!                                                │
//!                                         ┌─────────────┐
//!                                         │  Classify   │
//!                                         │  (tiers)    │
//!                                         └─────────────┘
//! ```

pub mod analysis;
pub mod classify;
pub mod ranking;

pub use analysis::{preview, AnalysisOptions, AnalysisReport, Analyzer, CheckStatus, DEFAULT_PREVIEW_CHARS};
pub use classify::{
    format_percentage, to_percentage, Tier, PARTIALLY_TRUE_THRESHOLD, POTENTIALLY_HOAX_THRESHOLD,
};
pub use ranking::{find_best_match, RankedMatch, SimilarityEngine};
