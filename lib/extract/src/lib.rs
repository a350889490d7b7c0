//! # TrustRank Extract
//!
//! Turns a news article URL into plain text for the similarity engine.
//! Every failure (bad URL, network error, non-2xx status, a page without
//! paragraphs) yields an empty string: "no usable content" is a normal
//! outcome for callers, never an error.

pub mod html;

use anyhow::{anyhow, Result};
use std::time::Duration;

pub use html::{decode_entities, extract_paragraphs};

pub const DEFAULT_USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 \
     (KHTML, like Gecko) Chrome/91.0.4472.124 Safari/537.36";

#[derive(Debug, Clone)]
pub struct ExtractorConfig {
    pub timeout: Duration,
    pub user_agent: String,
}

impl Default for ExtractorConfig {
    fn default() -> Self {
        Self {
            timeout: Duration::from_secs(10),
            user_agent: DEFAULT_USER_AGENT.to_string(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct TextExtractor {
    client: reqwest::Client,
}

impl TextExtractor {
    pub fn new(config: ExtractorConfig) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(config.timeout)
            .user_agent(config.user_agent)
            .build()
            .map_err(|e| anyhow!("Failed to build HTTP client: {}", e))?;
        Ok(Self { client })
    }

    /// Paragraph text of the page at `url`, or an empty string
    pub async fn extract(&self, url: &str) -> String {
        match self.fetch(url).await {
            Ok(html) => {
                let text = extract_paragraphs(&html);
                if text.is_empty() {
                    tracing::warn!(url, "No paragraph text found on page");
                } else {
                    tracing::debug!(url, chars = text.chars().count(), "Extracted article text");
                }
                text
            }
            Err(e) => {
                tracing::warn!(url, error = %e, "Failed to fetch page");
                String::new()
            }
        }
    }

    async fn fetch(&self, url: &str) -> Result<String> {
        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| anyhow!("Request failed: {}", e))?;

        if !response.status().is_success() {
            return Err(anyhow!("HTTP {}", response.status()));
        }

        response
            .text()
            .await
            .map_err(|e| anyhow!("Failed to read body: {}", e))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_invalid_url_gives_empty_text() {
        let extractor = TextExtractor::new(ExtractorConfig::default()).unwrap();
        assert_eq!(extractor.extract("not a url").await, "");
        assert_eq!(extractor.extract("").await, "");
    }

    #[tokio::test]
    async fn test_unreachable_host_gives_empty_text() {
        let extractor = TextExtractor::new(ExtractorConfig {
            timeout: Duration::from_secs(2),
            ..ExtractorConfig::default()
        })
        .unwrap();
        // port 9 (discard) is closed on test machines
        assert_eq!(extractor.extract("http://127.0.0.1:9/article").await, "");
    }
}
