use crate::error::EncoderError;
use md5::{Digest, Md5};

/// Seam for the 128-bit digest backing the primary encoding strategy.
///
/// The production strategy ([`Md5Digest`]) cannot fail, but the seam
/// lets [`HashEncoder`] treat digest availability as an environment
/// property: a strategy reporting [`EncoderError::DigestUnavailable`]
/// makes the encoder fall back to digit extraction for that call.
///
/// [`HashEncoder`]: crate::hash::HashEncoder
pub trait DigestStrategy: Send + Sync + 'static {
    /// Computes a 128-bit digest of the input bytes.
    fn digest(&self, input: &[u8]) -> Result<[u8; 16], EncoderError>;
}

/// MD5-backed digest strategy.
#[derive(Debug, Clone, Copy, Default)]
pub struct Md5Digest;

impl DigestStrategy for Md5Digest {
    fn digest(&self, input: &[u8]) -> Result<[u8; 16], EncoderError> {
        Ok(Md5::digest(input).into())
    }
}
