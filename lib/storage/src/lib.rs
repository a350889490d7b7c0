pub mod allowlist;
pub mod corpus_store;
pub mod manager;

pub use allowlist::TrustedDomains;
pub use corpus_store::{ArticleRecord, CorpusStore};
pub use manager::{AddOutcome, CorpusManager};
