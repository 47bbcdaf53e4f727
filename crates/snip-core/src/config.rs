use crate::error::ConfigError;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use typed_builder::TypedBuilder;

/// Default number of characters in a generated short code.
pub const DEFAULT_CODE_LENGTH: usize = 6;
/// Default alphabet used by the fallback encoding strategy (base62).
pub const DEFAULT_CHARACTERS: &str =
    "abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789";
/// Default bound on collision-driven retries.
pub const DEFAULT_MAX_ATTEMPTS: u32 = 5;

/// Immutable configuration for short-code generation.
///
/// Constructed once at process start and passed by reference into the
/// encoder and resolver constructors. Consumers call [`validate`] at
/// construction time; the value is read-only afterwards.
///
/// [`validate`]: GenerationConfig::validate
#[derive(Debug, Clone, Serialize, Deserialize, TypedBuilder)]
pub struct GenerationConfig {
    /// Number of characters in a generated short code.
    #[builder(default = DEFAULT_CODE_LENGTH)]
    pub code_length: usize,
    /// Ordered alphabet the fallback strategy draws symbols from.
    #[builder(default = DEFAULT_CHARACTERS.to_owned(), setter(into))]
    pub characters: String,
    /// Maximum number of perturbed retries after the initial probe.
    #[builder(default = DEFAULT_MAX_ATTEMPTS)]
    pub max_attempts: u32,
}

impl GenerationConfig {
    /// Checks that the configuration can drive both encoding strategies.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.code_length == 0 {
            return Err(ConfigError::InvalidCodeLength);
        }

        let symbols: Vec<char> = self.characters.chars().collect();
        if symbols.len() < 2 {
            return Err(ConfigError::AlphabetTooSmall { len: symbols.len() });
        }

        let mut seen = HashSet::new();
        for symbol in &symbols {
            if !seen.insert(*symbol) {
                return Err(ConfigError::DuplicateSymbol(*symbol));
            }
        }

        Ok(())
    }

    /// Returns the alphabet as an indexable symbol table.
    pub fn symbols(&self) -> Vec<char> {
        self.characters.chars().collect()
    }
}

impl Default for GenerationConfig {
    fn default() -> Self {
        Self::builder().build()
    }
}
