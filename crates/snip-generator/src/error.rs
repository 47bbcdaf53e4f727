use snip_core::ConfigError;
use thiserror::Error;

/// Errors returned by encoder construction and encoding.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum EncoderError {
    #[error("input must not be empty")]
    EmptyInput,
    #[error("digest algorithm unavailable: {0}")]
    DigestUnavailable(String),
    #[error("invalid generation config: {0}")]
    Config(#[from] ConfigError),
}
