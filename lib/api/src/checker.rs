//! News checking workflow shared by the CLI and the REST API

use serde::Serialize;
use std::sync::Arc;
use thiserror::Error;
use trustrank_core::{Document, TokenizerConfig};
use trustrank_extract::{ExtractorConfig, TextExtractor};
use trustrank_similarity::{AnalysisOptions, AnalysisReport, Analyzer, SimilarityEngine, DEFAULT_PREVIEW_CHARS};
use trustrank_storage::{AddOutcome, CorpusManager, TrustedDomains};

#[derive(Error, Debug)]
pub enum CheckError {
    #[error("{0} must not be empty")]
    EmptyInput(&'static str),

    #[error("Failed to fetch article text from {0}")]
    ExtractionFailed(String),

    #[error(transparent)]
    Storage(#[from] trustrank_core::Error),
}

#[derive(Debug, Clone)]
pub struct CheckerConfig {
    pub preview_chars: usize,
    pub tokenizer: TokenizerConfig,
    pub extractor: ExtractorConfig,
}

impl Default for CheckerConfig {
    fn default() -> Self {
        Self {
            preview_chars: DEFAULT_PREVIEW_CHARS,
            tokenizer: TokenizerConfig::default(),
            extractor: ExtractorConfig::default(),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct ArticleSummary {
    pub url: String,
    pub title: String,
}

#[derive(Debug, Clone)]
pub struct AddResult {
    pub outcome: AddOutcome,
    pub title: String,
}

pub struct Checker {
    corpus: Arc<CorpusManager>,
    allowlist: TrustedDomains,
    extractor: TextExtractor,
    analyzer: Analyzer,
}

impl Checker {
    pub fn new(
        corpus: Arc<CorpusManager>,
        allowlist: TrustedDomains,
        extractor: TextExtractor,
        analyzer: Analyzer,
    ) -> Self {
        Self {
            corpus,
            allowlist,
            extractor,
            analyzer,
        }
    }

    pub fn from_config(
        corpus: Arc<CorpusManager>,
        allowlist: TrustedDomains,
        config: &CheckerConfig,
    ) -> anyhow::Result<Self> {
        let extractor = TextExtractor::new(config.extractor.clone())?;
        let analyzer = Analyzer::new(
            SimilarityEngine::new(config.tokenizer),
            AnalysisOptions {
                preview_chars: config.preview_chars,
            },
        );
        Ok(Self::new(corpus, allowlist, extractor, analyzer))
    }

    #[inline]
    pub fn corpus(&self) -> &CorpusManager {
        &self.corpus
    }

    #[inline]
    pub fn allowlist(&self) -> &TrustedDomains {
        &self.allowlist
    }

    #[inline]
    pub fn is_trusted(&self, url: &str) -> bool {
        self.allowlist.is_trusted(url)
    }

    /// Article text for `url`; empty text is reported as a failure
    pub async fn fetch_text(&self, url: &str) -> Result<String, CheckError> {
        let text = self.extractor.extract(url).await;
        if text.trim().is_empty() {
            return Err(CheckError::ExtractionFailed(url.to_string()));
        }
        Ok(text)
    }

    /// Rank `text` against a snapshot of the trusted corpus
    pub fn analyze(&self, text: &str, trusted: bool) -> AnalysisReport {
        let corpus = self.corpus.snapshot();
        let report = self.analyzer.analyze(text, &corpus, trusted);
        tracing::info!(
            tier = %report.tier(),
            similarity = %report.similarity,
            similar = %report.similar_url,
            "Text analyzed"
        );
        report
    }

    /// Article text of `url` and whether its host is on the allowlist
    pub async fn fetch_url(&self, url: &str) -> Result<(String, bool), CheckError> {
        let url = url.trim();
        if url.is_empty() {
            return Err(CheckError::EmptyInput("URL"));
        }

        let trusted = self.is_trusted(url);
        tracing::info!(url, trusted, "Checking URL");

        let text = self.fetch_text(url).await?;
        Ok((text, trusted))
    }

    /// Trusted hosts are reported as such; other pages are fetched and ranked
    pub async fn check_url(&self, url: &str) -> Result<AnalysisReport, CheckError> {
        let (text, trusted) = self.fetch_url(url).await?;
        Ok(self.analyze(&text, trusted))
    }

    pub fn check_text(&self, text: &str) -> Result<AnalysisReport, CheckError> {
        if text.trim().is_empty() {
            return Err(CheckError::EmptyInput("Text"));
        }
        Ok(self.analyze(text, false))
    }

    /// Fetch the article at `url` and store it as a trusted reference
    pub async fn add_article(&self, url: &str) -> Result<AddResult, CheckError> {
        let url = url.trim();
        if url.is_empty() {
            return Err(CheckError::EmptyInput("URL"));
        }

        if let Some(existing) = self.corpus.snapshot().get(url) {
            return Ok(AddResult {
                outcome: AddOutcome::AlreadyExists,
                title: title_of(existing),
            });
        }

        let text = self.fetch_text(url).await?;
        self.add_document(Document::new(url, text))
    }

    /// Store an already extracted article
    pub fn add_document(&self, document: Document) -> Result<AddResult, CheckError> {
        let title = title_of(&document);
        let document = document.with_title(title.clone());
        let outcome = self.corpus.add(document)?;
        Ok(AddResult { outcome, title })
    }

    pub fn articles(&self) -> Vec<ArticleSummary> {
        self.corpus
            .snapshot()
            .iter()
            .map(|document| ArticleSummary {
                url: document.id.clone(),
                title: title_of(document),
            })
            .collect()
    }
}

fn title_of(document: &Document) -> String {
    document
        .title
        .clone()
        .unwrap_or_else(|| Document::derive_title(&document.text))
}
