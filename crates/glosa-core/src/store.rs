use chrono::{DateTime, Utc};
use glosa_types::{StoredEntry, WordInfo};

/// Durable word -> entry storage. Uniqueness of `word` is enforced by the store.
pub trait EntryStore: Send {
    fn add(&mut self, word: &str, entry: &WordInfo, time_added: DateTime<Utc>) -> Result<(), StoreError>;

    fn get(&self, word: &str) -> Result<Option<StoredEntry>, StoreError>;

    /// Returns whether a row was removed
    fn delete(&mut self, word: &str) -> Result<bool, StoreError>;

    fn list(&self) -> Result<Vec<StoredEntry>, StoreError>;
}

#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("Word already stored: {0}")]
    Duplicate(String),

    #[error("Invalid entry data: {0}")]
    Encoding(#[from] serde_json::Error),

    #[error("Storage error: {0}")]
    Backend(String),
}
