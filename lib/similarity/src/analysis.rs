//! Caller-facing analysis report shared by the CLI and the REST API

use crate::classify::{format_percentage, Tier};
use crate::ranking::SimilarityEngine;
use serde::{Serialize, Serializer};
use trustrank_core::Corpus;

/// Default preview length for terminal output
pub const DEFAULT_PREVIEW_CHARS: usize = 500;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum CheckStatus {
    /// Source host is on the allowlist; no similarity check was run
    Trusted,
    /// Text was ranked against the trusted corpus
    Checked,
}

#[derive(Debug, Clone, Serialize)]
pub struct AnalysisReport {
    pub status: CheckStatus,
    pub message: String,
    #[serde(serialize_with = "tier_or_empty")]
    pub indicator: Option<Tier>,
    /// Formatted percentage (`NN.NN%`), empty for trusted sources
    pub similarity: String,
    pub similar_url: String,
    pub preview: String,
    #[serde(skip)]
    pub score: Option<f64>,
}

fn tier_or_empty<S: Serializer>(tier: &Option<Tier>, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.serialize_str(tier.map(|t| t.label()).unwrap_or(""))
}

impl AnalysisReport {
    /// Final verdict, including `Trusted` for allowlisted sources
    pub fn tier(&self) -> Tier {
        match self.status {
            CheckStatus::Trusted => Tier::Trusted,
            CheckStatus::Checked => self.indicator.unwrap_or(Tier::HighlySuspicious),
        }
    }
}

#[derive(Debug, Clone, Copy)]
pub struct AnalysisOptions {
    pub preview_chars: usize,
}

impl Default for AnalysisOptions {
    fn default() -> Self {
        Self {
            preview_chars: DEFAULT_PREVIEW_CHARS,
        }
    }
}

/// First `max_chars` characters of `text`, with `...` appended when truncated
pub fn preview(text: &str, max_chars: usize) -> String {
    match text.char_indices().nth(max_chars) {
        Some((cut, _)) => format!("{}...", &text[..cut]),
        None => text.to_string(),
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct Analyzer {
    engine: SimilarityEngine,
    options: AnalysisOptions,
}

impl Analyzer {
    #[inline]
    #[must_use]
    pub fn new(engine: SimilarityEngine, options: AnalysisOptions) -> Self {
        Self { engine, options }
    }

    #[inline]
    pub fn engine(&self) -> &SimilarityEngine {
        &self.engine
    }

    #[inline]
    pub fn options(&self) -> &AnalysisOptions {
        &self.options
    }

    /// Build the report for `text`. Trusted sources skip the similarity engine.
    pub fn analyze(&self, text: &str, corpus: &Corpus, trusted: bool) -> AnalysisReport {
        let preview = preview(text, self.options.preview_chars);

        if trusted {
            return AnalysisReport {
                status: CheckStatus::Trusted,
                message: Tier::Trusted.message().to_string(),
                indicator: None,
                similarity: String::new(),
                similar_url: String::new(),
                preview,
                score: None,
            };
        }

        let best = self.engine.best_match(text, corpus);
        let percentage = best.percentage();
        let tier = Tier::from_percentage(percentage);

        AnalysisReport {
            status: CheckStatus::Checked,
            message: tier.message().to_string(),
            indicator: Some(tier),
            similarity: format_percentage(percentage),
            similar_url: best.matched_id,
            preview,
            score: Some(best.score),
        }
    }
}
