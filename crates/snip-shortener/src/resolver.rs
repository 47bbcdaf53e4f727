use crate::error::{GenerationError, Result};
use snip_core::{GenerationConfig, IdentifierStore, ShortCode};
use snip_generator::Encoder;
use std::sync::Arc;
use tracing::{debug, warn};

/// Produces short codes that do not exist in the store at check time.
///
/// The resolver holds no mutable state beyond the per-call attempt
/// counter and is safe to invoke concurrently with independent inputs.
/// The uniqueness it establishes is check-time only: a concurrent
/// caller may claim the same candidate between the existence check and
/// persistence, so the store's [`insert`] remains the final arbiter.
///
/// [`insert`]: snip_core::IdentifierStore::insert
#[derive(Debug, Clone)]
pub struct CollisionResolver<S, E> {
    store: Arc<S>,
    encoder: Arc<E>,
    max_attempts: u32,
}

impl<S: IdentifierStore, E: Encoder> CollisionResolver<S, E> {
    /// Creates a resolver over the given store and encoder.
    pub fn new(store: S, encoder: E, config: &GenerationConfig) -> Self {
        Self {
            store: Arc::new(store),
            encoder: Arc::new(encoder),
            max_attempts: config.max_attempts,
        }
    }

    /// Generates a short code that is free in the store at check time.
    ///
    /// On collision the input is perturbed with a deterministic
    /// attempt-indexed suffix (`"{input}_{attempt}"`) and re-encoded,
    /// so a given collision sequence replays identically across runs.
    /// The initial probe does not count against `max_attempts`; only
    /// perturbed retries do. Fails with [`GenerationError::Exhausted`]
    /// when the budget is spent and the latest candidate still
    /// collides.
    pub async fn generate_unique(&self, input: &str) -> Result<ShortCode> {
        if input.is_empty() {
            return Err(GenerationError::InvalidInput);
        }

        let mut candidate = self.encoder.encode(input)?;
        let mut attempt: u32 = 0;

        while self.store.exists(&candidate).await? {
            if attempt >= self.max_attempts {
                return Err(GenerationError::Exhausted {
                    input: input.to_owned(),
                    max_attempts: self.max_attempts,
                });
            }

            warn!(
                candidate = %candidate,
                attempt = attempt + 1,
                "short code collision detected, regenerating"
            );
            candidate = self.encoder.encode(&format!("{input}_{attempt}"))?;
            attempt += 1;
        }

        debug!(code = %candidate, retries = attempt, "generated unique short code");
        Ok(candidate)
    }
}
