use thiserror::Error;

/// Errors raised while validating a [`GenerationConfig`].
///
/// [`GenerationConfig`]: crate::config::GenerationConfig
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("code length must be at least 1")]
    InvalidCodeLength,
    #[error("alphabet must contain at least 2 symbols, got {len}")]
    AlphabetTooSmall { len: usize },
    #[error("alphabet contains duplicate symbol '{0}'")]
    DuplicateSymbol(char),
}

/// Errors returned by identifier store implementations.
#[derive(Debug, Clone, Error)]
pub enum StoreError {
    #[error("short code already exists: {0}")]
    Conflict(String),
    #[error("store backend unavailable: {0}")]
    Unavailable(String),
    #[error("store operation failed: {0}")]
    Operation(String),
}
