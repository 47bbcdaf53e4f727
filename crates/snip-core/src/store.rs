use crate::error::StoreError;
use crate::shortcode::ShortCode;
use async_trait::async_trait;

type Result<T> = std::result::Result<T, StoreError>;

/// Persistent store of claimed short codes.
///
/// The resolver uses `exists` to probe candidates and leaves the final
/// uniqueness guarantee to `insert`: between an `exists` returning
/// `false` and the matching `insert`, a concurrent caller may claim the
/// same code (a check-then-act race). Implementations must therefore
/// make `insert` an atomic insert-if-absent and report a lost race as
/// [`StoreError::Conflict`], which callers treat as retryable rather
/// than as success.
#[async_trait]
pub trait IdentifierStore: Send + Sync + 'static {
    /// Checks whether a short code has already been claimed.
    ///
    /// Must reflect all codes durably persisted at call time.
    async fn exists(&self, code: &ShortCode) -> Result<bool>;

    /// Atomically claims a short code for the given original input.
    ///
    /// Returns [`StoreError::Conflict`] if the code is already taken.
    async fn insert(&self, code: &ShortCode, original: &str) -> Result<()>;
}
