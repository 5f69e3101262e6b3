use std::collections::HashMap;

use async_trait::async_trait;

/// A flat field map stored under a single key.
pub type Record = HashMap<String, String>;

/// Key-value store trait - abstraction over the storage backend (Redis, in-memory).
///
/// Keys hold either a record (field map) or a list of strings. Each call is
/// expected to be atomic on its own; nothing spans multiple calls.
#[async_trait]
pub trait KeyValueStore: Send + Sync {
    /// Write every field of `fields` into the record at `key`.
    async fn hash_set_all(&self, key: &str, fields: &[(String, String)]) -> Result<(), KvError>;

    /// Read all fields of the record at `key`. Missing keys yield an empty map.
    async fn hash_get_all(&self, key: &str) -> Result<Record, KvError>;

    /// Delete a key. Returns whether it existed.
    async fn delete(&self, key: &str) -> Result<bool, KvError>;

    /// Check if a key exists.
    async fn exists(&self, key: &str) -> Result<bool, KvError>;

    /// Prepend `value` to the list at `key`, returning the new length.
    async fn list_push_front(&self, key: &str, value: &str) -> Result<usize, KvError>;

    /// Read the inclusive range `start..=stop` of the list at `key`.
    /// Negative indices count from the end, as in Redis `LRANGE`.
    async fn list_range(
        &self,
        key: &str,
        start: isize,
        stop: isize,
    ) -> Result<Vec<String>, KvError>;

    /// Remove every occurrence of `value` from the list, returning how many were removed.
    async fn list_remove(&self, key: &str, value: &str) -> Result<usize, KvError>;

    /// Length of the list at `key` (0 if missing).
    async fn list_len(&self, key: &str) -> Result<usize, KvError>;
}

/// Key-value backend errors.
#[derive(Debug, thiserror::Error)]
pub enum KvError {
    #[error("Connection failed: {0}")]
    Connection(String),

    #[error("Operation failed: {0}")]
    Operation(String),

    #[error("Wrong type for key {0}")]
    WrongType(String),
}
