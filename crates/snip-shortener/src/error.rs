use snip_core::StoreError;
use snip_generator::EncoderError;
use thiserror::Error;

/// Result type for collision-resolving generation.
pub type Result<T> = std::result::Result<T, GenerationError>;

#[derive(Debug, Clone, Error)]
pub enum GenerationError {
    #[error("input must not be empty")]
    InvalidInput,
    #[error("unable to generate unique short code after {max_attempts} attempts for input: {input}")]
    Exhausted { input: String, max_attempts: u32 },
    #[error("encoder error: {0}")]
    Encoder(#[from] EncoderError),
    #[error("store error: {0}")]
    Store(#[from] StoreError),
}
