use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// A short, fixed-length identifier produced for an input URL.
///
/// Short codes are created by the encoder from trusted internal
/// strategies; the type itself carries no alphabet knowledge and
/// performs no validation.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ShortCode(String);

impl ShortCode {
    /// Wraps an already-generated code.
    pub fn new(code: impl Into<String>) -> Self {
        Self(code.into())
    }

    /// Returns the short code as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Returns the number of characters in the code.
    pub fn len(&self) -> usize {
        self.0.chars().count()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Generates the full shortened URL based on the provided base URL.
    pub fn to_url(&self, base_url: &str) -> String {
        format!("{}/{}", base_url.trim_end_matches('/'), self.0)
    }
}

impl Display for ShortCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<String> for ShortCode {
    fn from(code: String) -> Self {
        Self(code)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_matches_inner() {
        let code = ShortCode::new("aB3xYz");
        assert_eq!(code.to_string(), "aB3xYz");
        assert_eq!(code.as_str(), "aB3xYz");
    }

    #[test]
    fn to_url_joins_with_single_slash() {
        let code = ShortCode::new("abc123");
        assert_eq!(code.to_url("https://sni.p"), "https://sni.p/abc123");
        assert_eq!(code.to_url("https://sni.p/"), "https://sni.p/abc123");
    }

    #[test]
    fn len_counts_characters() {
        assert_eq!(ShortCode::new("abc123").len(), 6);
        assert!(ShortCode::new("").is_empty());
    }
}
