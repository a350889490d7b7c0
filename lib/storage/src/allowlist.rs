use anyhow::{anyhow, Result};
use reqwest::Url;
use serde::Deserialize;
use std::collections::HashSet;
use std::path::Path;

#[derive(Debug, Deserialize)]
struct SourcesFile {
    trusted_sources: Vec<String>,
}

/// Hosts whose articles are trusted without a similarity check.
///
/// Membership is an exact, case-insensitive match on the URL host.
#[derive(Debug, Clone, Default)]
pub struct TrustedDomains {
    domains: HashSet<String>,
}

impl TrustedDomains {
    pub fn new<I, S>(domains: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self {
            domains: domains
                .into_iter()
                .map(|d| d.as_ref().trim().to_lowercase())
                .filter(|d| !d.is_empty())
                .collect(),
        }
    }

    /// Load `{"trusted_sources": [...]}`; missing or malformed files give an empty list
    pub fn load<P: AsRef<Path>>(path: P) -> Self {
        let path = path.as_ref();
        match Self::read(path) {
            Ok(domains) => {
                tracing::info!(domains = domains.len(), path = %path.display(), "Trusted sources loaded");
                domains
            }
            Err(e) => {
                tracing::warn!(path = %path.display(), error = %e, "Failed to load trusted sources");
                Self::default()
            }
        }
    }

    fn read(path: &Path) -> Result<Self> {
        let data = std::fs::read(path)
            .map_err(|e| anyhow!("Failed to read {}: {}", path.display(), e))?;
        let file: SourcesFile = serde_json::from_slice(&data)?;
        Ok(Self::new(file.trusted_sources))
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.domains.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.domains.is_empty()
    }

    #[inline]
    pub fn contains_host(&self, host: &str) -> bool {
        self.domains.contains(&host.to_lowercase())
    }

    /// Whether the host of `url` is on the list. Unparsable URLs are not trusted.
    pub fn is_trusted(&self, url: &str) -> bool {
        match Url::parse(url.trim()) {
            Ok(parsed) => parsed
                .host_str()
                .map(|host| self.contains_host(host))
                .unwrap_or(false),
            Err(e) => {
                tracing::debug!(url, error = %e, "Not a valid URL");
                false
            }
        }
    }

    /// Domains in sorted order
    pub fn domains(&self) -> Vec<&str> {
        let mut domains: Vec<&str> = self.domains.iter().map(String::as_str).collect();
        domains.sort_unstable();
        domains
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn allowlist() -> TrustedDomains {
        TrustedDomains::new(["Kompas.com", "www.detik.com", " tempo.co "])
    }

    #[test]
    fn test_host_match_is_case_insensitive() {
        let domains = allowlist();
        assert!(domains.is_trusted("https://kompas.com/read/2024/01/01/news"));
        assert!(domains.is_trusted("https://KOMPAS.COM/read"));
        assert!(domains.is_trusted("http://www.detik.com/berita?id=1"));
        assert!(domains.is_trusted("https://tempo.co"));
    }

    #[test]
    fn test_host_match_is_exact() {
        let domains = allowlist();
        assert!(!domains.is_trusted("https://news.kompas.com/read"));
        assert!(!domains.is_trusted("https://detik.com/berita"));
        assert!(!domains.is_trusted("https://kompas.com.evil.example/"));
    }

    #[test]
    fn test_invalid_urls_are_untrusted() {
        let domains = allowlist();
        assert!(!domains.is_trusted("kompas.com/read"));
        assert!(!domains.is_trusted(""));
        assert!(!domains.is_trusted("not a url"));
        assert!(!domains.is_trusted("mailto:editor@kompas.com"));
    }

    #[test]
    fn test_load() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("trusted_sources.json");
        std::fs::write(&path, r#"{"trusted_sources": ["kompas.com", "cnnindonesia.com"]}"#).unwrap();

        let domains = TrustedDomains::load(&path);
        assert_eq!(domains.domains(), vec!["cnnindonesia.com", "kompas.com"]);
    }

    #[test]
    fn test_load_failures_give_empty_list() {
        let dir = tempfile::tempdir().unwrap();
        assert!(TrustedDomains::load(dir.path().join("missing.json")).is_empty());

        let path = dir.path().join("bad.json");
        std::fs::write(&path, r#"{"sources": ["kompas.com"]}"#).unwrap();
        assert!(TrustedDomains::load(&path).is_empty());
    }
}
