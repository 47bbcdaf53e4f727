use crate::error::EncoderError;
use crate::Encoder;
use snip_core::{GenerationConfig, ShortCode};

/// Fallback encoder using digit extraction over a stable integer hash.
///
/// Always yields exactly `code_length` characters drawn only from the
/// configured alphabet. Terminates in bounded iterations: integer
/// division drives the hash to zero within `log_base(2^31)` steps,
/// after which the remainder repeatedly selects the alphabet's first
/// symbol.
#[derive(Debug, Clone)]
pub struct DigitEncoder {
    code_length: usize,
    symbols: Vec<char>,
}

impl DigitEncoder {
    /// Creates an encoder from a validated configuration.
    pub fn new(config: &GenerationConfig) -> Result<Self, EncoderError> {
        config.validate()?;
        Ok(Self {
            code_length: config.code_length,
            symbols: config.symbols(),
        })
    }
}

/// Stable 32-bit non-negative polynomial hash of the input bytes.
///
/// Deterministic across calls and process instances, unlike hashers
/// seeded with `RandomState`.
fn stable_hash(input: &str) -> u32 {
    let mut hash: i32 = 0;
    for byte in input.bytes() {
        hash = hash.wrapping_mul(31).wrapping_add(i32::from(byte));
    }
    hash.unsigned_abs()
}

impl Encoder for DigitEncoder {
    fn encode(&self, input: &str) -> Result<ShortCode, EncoderError> {
        if input.is_empty() {
            return Err(EncoderError::EmptyInput);
        }

        let base = self.symbols.len() as u32;
        let mut hash = stable_hash(input);
        let mut code = String::with_capacity(self.code_length);
        for _ in 0..self.code_length {
            code.push(self.symbols[(hash % base) as usize]);
            hash /= base;
        }

        Ok(ShortCode::new(code))
    }
}
