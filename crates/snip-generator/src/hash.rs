use crate::digest::{DigestStrategy, Md5Digest};
use crate::digit::DigitEncoder;
use crate::error::EncoderError;
use crate::Encoder;
use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use snip_core::{GenerationConfig, ShortCode};
use tracing::warn;

/// Primary hash-based encoder.
///
/// Encodes the 128-bit digest of the input as standard base64, drops
/// the non-alphanumeric `+`, `/` and `=`, and takes the first
/// `code_length` characters. When stripping leaves the prefix short,
/// the previous digest is re-digested for more characters, so the
/// returned code always has exactly `code_length` characters.
///
/// If the digest strategy reports that the algorithm is unavailable in
/// this environment, the call transparently falls back to
/// [`DigitEncoder`]; the caller never observes the failure.
#[derive(Debug, Clone)]
pub struct HashEncoder<D: DigestStrategy = Md5Digest> {
    digest: D,
    fallback: DigitEncoder,
    code_length: usize,
}

impl HashEncoder<Md5Digest> {
    /// Creates an MD5-backed encoder from a validated configuration.
    pub fn new(config: &GenerationConfig) -> Result<Self, EncoderError> {
        Self::with_digest(config, Md5Digest)
    }
}

impl<D: DigestStrategy> HashEncoder<D> {
    /// Creates an encoder with a custom digest strategy.
    pub fn with_digest(config: &GenerationConfig, digest: D) -> Result<Self, EncoderError> {
        Ok(Self {
            digest,
            fallback: DigitEncoder::new(config)?,
            code_length: config.code_length,
        })
    }

    fn hash_code(&self, input: &str) -> Result<String, EncoderError> {
        let mut code = String::with_capacity(self.code_length);
        let mut digest = self.digest.digest(input.as_bytes())?;

        loop {
            let encoded = STANDARD.encode(digest);
            code.extend(
                encoded
                    .chars()
                    .filter(|c| c.is_ascii_alphanumeric())
                    .take(self.code_length - code.len()),
            );
            if code.len() == self.code_length {
                return Ok(code);
            }
            // Stripping left the prefix short of `code_length` usable
            // characters. Re-digest the previous digest for more.
            digest = self.digest.digest(&digest)?;
        }
    }
}

impl<D: DigestStrategy> Encoder for HashEncoder<D> {
    fn encode(&self, input: &str) -> Result<ShortCode, EncoderError> {
        if input.is_empty() {
            return Err(EncoderError::EmptyInput);
        }

        match self.hash_code(input) {
            Ok(code) => Ok(ShortCode::new(code)),
            Err(EncoderError::DigestUnavailable(reason)) => {
                warn!(%reason, "digest unavailable, falling back to digit encoding");
                self.fallback.encode(input)
            }
            Err(other) => Err(other),
        }
    }
}
