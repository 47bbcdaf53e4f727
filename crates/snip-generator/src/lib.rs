//! Candidate short-code encoding strategies.
//!
//! Encoders are pure: they turn an input string into a candidate code
//! without touching storage. Collision handling lives in
//! `snip-shortener`, which probes candidates against an identifier
//! store.

pub mod digest;
pub mod digit;
pub mod error;
pub mod hash;

pub use digest::{DigestStrategy, Md5Digest};
pub use digit::DigitEncoder;
pub use error::EncoderError;
pub use hash::HashEncoder;

use snip_core::ShortCode;

/// Trait for turning an input string into a candidate short code.
///
/// Implementations must be deterministic: identical input and identical
/// configuration produce the identical candidate on every call and on
/// every process instance. The resolver relies on this to replay the
/// same candidate sequence across runs.
pub trait Encoder: Send + Sync + 'static {
    /// Encodes an input into a candidate code.
    ///
    /// Rejects empty input with [`EncoderError::EmptyInput`] before any
    /// hashing work.
    fn encode(&self, input: &str) -> Result<ShortCode, EncoderError>;
}
