//! # TrustRank
//!
//! Checks how credible a news text is by comparing it against a corpus of
//! articles from trusted outlets.
//!
//! A text is vectorized with TF-IDF together with the trusted corpus, ranked
//! by cosine similarity, and the best score is mapped to a verdict:
//!
//! | Similarity | Verdict |
//! |---|---|
//! | source host on the allowlist | `TRUSTED` |
//! | above 70% | `PARTIALLY_TRUE` |
//! | above 30% | `POTENTIALLY_HOAX` |
//! | otherwise | `HIGHLY_SUSPICIOUS` |
//!
//! ## Quick Start
//!
//! ### As a Server
//!
//! ```bash
//! trustrank --articles trusted_articles.json --sources trusted_sources.json serve --http-port 5000
//! ```
//!
//! ### As a Library
//!
//! ```rust
//! use trustrank::prelude::*;
//!
//! let corpus: Corpus = [
//!     Document::new("https://kompas.com/a", "the cat sat on the mat"),
//!     Document::new("https://kompas.com/b", "dogs are loyal companions"),
//! ]
//! .into_iter()
//! .collect();
//!
//! let report = Analyzer::default().analyze("the cat sat on the mat", &corpus, false);
//! assert_eq!(report.tier(), Tier::PartiallyTrue);
//! assert_eq!(report.similar_url, "https://kompas.com/a");
//! ```
//!
//! ## Crate Structure
//!
//! - `trustrank-core` - documents, corpus, tokenizer, TF-IDF vectorizer
//! - `trustrank-similarity` - ranking, verdict tiers, analysis reports
//! - `trustrank-storage` - JSON corpus store, trusted-domain allowlist
//! - `trustrank-extract` - article text extraction from web pages
//! - `trustrank-api` - checker service and REST API

pub mod menu;
pub mod report;

pub use trustrank_core::{
    Corpus, Document, Error, Result, SparseVector, TfIdfVectorizer, Tokenizer, TokenizerConfig,
    VectorSpace,
};

pub use trustrank_similarity::{
    find_best_match, AnalysisOptions, AnalysisReport, Analyzer, CheckStatus, RankedMatch,
    SimilarityEngine, Tier,
};

pub use trustrank_storage::{AddOutcome, CorpusManager, CorpusStore, TrustedDomains};

pub use trustrank_extract::{ExtractorConfig, TextExtractor};

pub use trustrank_api::{CheckError, Checker, CheckerConfig, RestApi};

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::{
        AddOutcome, AnalysisReport, Analyzer, CheckError, CheckStatus, Checker, CheckerConfig,
        Corpus, CorpusManager, Document, Error, RankedMatch, RestApi, Result, SimilarityEngine,
        TrustedDomains, Tier,
    };
}
