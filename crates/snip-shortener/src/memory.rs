use async_trait::async_trait;
use dashmap::mapref::entry::Entry;
use dashmap::DashMap;
use snip_core::{IdentifierStore, ShortCode, StoreError};

type Result<T> = std::result::Result<T, StoreError>;

/// In-memory identifier store backed by DashMap.
///
/// DashMap's sharded locks allow concurrent reads and writes to
/// different buckets without blocking, and its entry API makes
/// `insert` an atomic insert-if-absent: two racing callers that both
/// observed a free code cannot both claim it.
#[derive(Debug, Default)]
pub struct InMemoryStore {
    entries: DashMap<String, String>,
}

impl InMemoryStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self {
            entries: DashMap::new(),
        }
    }

    /// Returns the original input a short code was claimed for.
    pub fn get(&self, code: &ShortCode) -> Option<String> {
        self.entries.get(code.as_str()).map(|e| e.value().clone())
    }

    /// Releases a short code. Returns `true` if it was claimed.
    pub fn remove(&self, code: &ShortCode) -> bool {
        self.entries.remove(code.as_str()).is_some()
    }

    /// Number of claimed codes.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[async_trait]
impl IdentifierStore for InMemoryStore {
    async fn exists(&self, code: &ShortCode) -> Result<bool> {
        Ok(self.entries.contains_key(code.as_str()))
    }

    async fn insert(&self, code: &ShortCode, original: &str) -> Result<()> {
        match self.entries.entry(code.as_str().to_owned()) {
            Entry::Occupied(_) => Err(StoreError::Conflict(code.to_string())),
            Entry::Vacant(vacant) => {
                vacant.insert(original.to_owned());
                Ok(())
            }
        }
    }
}
