//! Noise line detection (statement headers, column captions, summaries).

/// Minimal token set: every line containing one of these is noise.
pub const DEFAULT_NOISE_TOKENS: &[&str] = &["opening", "closing", "balance", "date", "page"];

/// Longer header phrases added by [`NoiseFilter::extended`].
pub const EXTENDED_NOISE_TOKENS: &[&str] =
    &["bank statement", "date description", "debit credit balance"];

/// Case-insensitive substring filter over statement lines.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NoiseFilter {
    tokens: Vec<String>,
}

impl NoiseFilter {
    /// Filter with the minimal token set.
    pub fn new() -> Self {
        Self::with_tokens(DEFAULT_NOISE_TOKENS.iter().copied())
    }

    /// Filter with the minimal set plus the extended header phrases.
    pub fn extended() -> Self {
        Self::new().with_extra_tokens(EXTENDED_NOISE_TOKENS.iter().copied())
    }

    /// Filter with a custom token set. Tokens are lowercased; blank ones dropped.
    pub fn with_tokens<I, S>(tokens: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self { tokens: Vec::new() }.with_extra_tokens(tokens)
    }

    /// Add tokens, skipping blanks and duplicates.
    pub fn with_extra_tokens<I, S>(mut self, tokens: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        for token in tokens {
            let token = token.as_ref().trim().to_lowercase();
            if !token.is_empty() && !self.tokens.contains(&token) {
                self.tokens.push(token);
            }
        }
        self
    }

    pub fn tokens(&self) -> &[String] {
        &self.tokens
    }

    /// First token found in `line`, if any.
    pub fn matching_token(&self, line: &str) -> Option<&str> {
        let lower = line.to_lowercase();
        self.tokens
            .iter()
            .find(|t| lower.contains(t.as_str()))
            .map(String::as_str)
    }

    pub fn is_noise(&self, line: &str) -> bool {
        self.matching_token(line).is_some()
    }
}

impl Default for NoiseFilter {
    fn default() -> Self {
        Self::new()
    }
}
