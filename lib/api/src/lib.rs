//! # TrustRank API
//!
//! The [`Checker`] service ties the corpus, the allowlist, the extractor and
//! the similarity engine together; [`RestApi`] serves it over HTTP.

pub mod checker;
pub mod rest;

pub use checker::{AddResult, ArticleSummary, CheckError, Checker, CheckerConfig};
pub use rest::{routes, RestApi, REST_PREVIEW_CHARS};
