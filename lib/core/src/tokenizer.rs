use serde::{Deserialize, Serialize};

/// Tokenization policy shared by every document of one vectorization call
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenizerConfig {
    /// Case-fold the text before splitting
    pub lowercase: bool,
    /// Shorter word runs are dropped (counted in chars, not bytes)
    pub min_token_chars: usize,
}

impl Default for TokenizerConfig {
    fn default() -> Self {
        Self {
            lowercase: true,
            min_token_chars: 2,
        }
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct Tokenizer {
    config: TokenizerConfig,
}

impl Tokenizer {
    #[inline]
    #[must_use]
    pub fn new(config: TokenizerConfig) -> Self {
        Self { config }
    }

    #[inline]
    fn is_word_char(c: char) -> bool {
        c.is_alphanumeric() || c == '_'
    }

    /// Split text into maximal runs of word characters (alphanumerics and `_`)
    pub fn tokenize(&self, text: &str) -> Vec<String> {
        let folded;
        let source = if self.config.lowercase {
            folded = text.to_lowercase();
            folded.as_str()
        } else {
            text
        };

        let min = self.config.min_token_chars.max(1);
        source
            .split(|c: char| !Self::is_word_char(c))
            .filter(|s| !s.is_empty() && s.chars().count() >= min)
            .map(str::to_string)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lowercase_and_punctuation() {
        let tokens = Tokenizer::default().tokenize("The Cat, the MAT!");
        assert_eq!(tokens, vec!["the", "cat", "the", "mat"]);
    }

    #[test]
    fn test_single_chars_dropped() {
        let tokens = Tokenizer::default().tokenize("bananas are a fruit");
        assert_eq!(tokens, vec!["bananas", "are", "fruit"]);
    }

    #[test]
    fn test_underscore_and_digits_are_word_chars() {
        let tokens = Tokenizer::default().tokenize("covid_19 cases hit 2024; x-ray");
        assert_eq!(tokens, vec!["covid_19", "cases", "hit", "2024", "ray"]);
    }

    #[test]
    fn test_unicode_words() {
        let tokens = Tokenizer::default().tokenize("Berita ÜBER café: naïve");
        assert_eq!(tokens, vec!["berita", "über", "café", "naïve"]);
    }

    #[test]
    fn test_empty_and_symbol_only() {
        let tokenizer = Tokenizer::default();
        assert!(tokenizer.tokenize("").is_empty());
        assert!(tokenizer.tokenize("  !? - a ").is_empty());
    }

    #[test]
    fn test_config_respected() {
        let tokenizer = Tokenizer::new(TokenizerConfig {
            lowercase: false,
            min_token_chars: 1,
        });
        assert_eq!(tokenizer.tokenize("A b CD"), vec!["A", "b", "CD"]);
    }
}
