//! In-memory key-value store - used for tests and as fallback when Redis is unavailable.

use std::collections::{HashMap, VecDeque};

use async_trait::async_trait;
use tokio::sync::RwLock;

use board_core::ports::{KeyValueStore, KvError, Record};

enum Value {
    Hash(Record),
    List(VecDeque<String>),
}

/// In-memory key-value store using a HashMap behind an async RwLock.
///
/// Mirrors the Redis semantics the post store relies on: one write lock per
/// command, empty lists disappear, and type mismatches are errors.
/// Note: Data is lost on process restart.
pub struct InMemoryKeyValueStore {
    store: RwLock<HashMap<String, Value>>,
}

impl InMemoryKeyValueStore {
    pub fn new() -> Self {
        Self {
            store: RwLock::new(HashMap::new()),
        }
    }
}

impl Default for InMemoryKeyValueStore {
    fn default() -> Self {
        Self::new()
    }
}

/// Resolve Redis-style inclusive `start..=stop` indices against a list length.
fn resolve_range(len: usize, start: isize, stop: isize) -> Option<(usize, usize)> {
    let len = len as isize;
    let start = if start < 0 { (len + start).max(0) } else { start };
    let stop = if stop < 0 { len + stop } else { stop.min(len - 1) };

    if len == 0 || start > stop || start >= len || stop < 0 {
        return None;
    }

    Some((start as usize, stop as usize))
}

#[async_trait]
impl KeyValueStore for InMemoryKeyValueStore {
    async fn hash_set_all(&self, key: &str, fields: &[(String, String)]) -> Result<(), KvError> {
        let mut store = self.store.write().await;

        let entry = store
            .entry(key.to_string())
            .or_insert_with(|| Value::Hash(Record::new()));
        let Value::Hash(record) = entry else {
            return Err(KvError::WrongType(key.to_string()));
        };

        for (field, value) in fields {
            record.insert(field.clone(), value.clone());
        }

        Ok(())
    }

    async fn hash_get_all(&self, key: &str) -> Result<Record, KvError> {
        let store = self.store.read().await;
        match store.get(key) {
            None => Ok(Record::new()),
            Some(Value::Hash(record)) => Ok(record.clone()),
            Some(Value::List(_)) => Err(KvError::WrongType(key.to_string())),
        }
    }

    async fn delete(&self, key: &str) -> Result<bool, KvError> {
        let mut store = self.store.write().await;
        Ok(store.remove(key).is_some())
    }

    async fn exists(&self, key: &str) -> Result<bool, KvError> {
        let store = self.store.read().await;
        Ok(store.contains_key(key))
    }

    async fn list_push_front(&self, key: &str, value: &str) -> Result<usize, KvError> {
        let mut store = self.store.write().await;

        let entry = store
            .entry(key.to_string())
            .or_insert_with(|| Value::List(VecDeque::new()));
        let Value::List(list) = entry else {
            return Err(KvError::WrongType(key.to_string()));
        };

        list.push_front(value.to_string());
        Ok(list.len())
    }

    async fn list_range(
        &self,
        key: &str,
        start: isize,
        stop: isize,
    ) -> Result<Vec<String>, KvError> {
        let store = self.store.read().await;
        let list = match store.get(key) {
            None => return Ok(Vec::new()),
            Some(Value::List(list)) => list,
            Some(Value::Hash(_)) => return Err(KvError::WrongType(key.to_string())),
        };

        Ok(match resolve_range(list.len(), start, stop) {
            Some((from, to)) => list.range(from..=to).cloned().collect(),
            None => Vec::new(),
        })
    }

    async fn list_remove(&self, key: &str, value: &str) -> Result<usize, KvError> {
        let mut store = self.store.write().await;
        let list = match store.get_mut(key) {
            None => return Ok(0),
            Some(Value::List(list)) => list,
            Some(Value::Hash(_)) => return Err(KvError::WrongType(key.to_string())),
        };

        let before = list.len();
        list.retain(|item| item != value);
        let removed = before - list.len();

        if list.is_empty() {
            store.remove(key);
        }

        Ok(removed)
    }

    async fn list_len(&self, key: &str) -> Result<usize, KvError> {
        let store = self.store.read().await;
        match store.get(key) {
            None => Ok(0),
            Some(Value::List(list)) => Ok(list.len()),
            Some(Value::Hash(_)) => Err(KvError::WrongType(key.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fields(pairs: &[(&str, &str)]) -> Vec<(String, String)> {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[tokio::test]
    async fn test_hash_set_and_get() {
        let kv = InMemoryKeyValueStore::new();
        kv.hash_set_all("h", &fields(&[("a", "1"), ("b", "2")]))
            .await
            .unwrap();
        kv.hash_set_all("h", &fields(&[("b", "3")])).await.unwrap();

        let record = kv.hash_get_all("h").await.unwrap();
        assert_eq!(record.get("a").map(String::as_str), Some("1"));
        assert_eq!(record.get("b").map(String::as_str), Some("3"));
        assert!(kv.hash_get_all("missing").await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_delete_and_exists() {
        let kv = InMemoryKeyValueStore::new();
        kv.hash_set_all("h", &fields(&[("a", "1")])).await.unwrap();

        assert!(kv.exists("h").await.unwrap());
        assert!(kv.delete("h").await.unwrap());
        assert!(!kv.exists("h").await.unwrap());
        assert!(!kv.delete("h").await.unwrap());
    }

    #[tokio::test]
    async fn test_list_push_front_and_range() {
        let kv = InMemoryKeyValueStore::new();
        for v in ["a", "b", "c", "d"] {
            kv.list_push_front("l", v).await.unwrap();
        }

        assert_eq!(kv.list_len("l").await.unwrap(), 4);
        assert_eq!(kv.list_range("l", 0, 1).await.unwrap(), vec!["d", "c"]);
        assert_eq!(kv.list_range("l", 2, 10).await.unwrap(), vec!["b", "a"]);
        assert_eq!(kv.list_range("l", -2, -1).await.unwrap(), vec!["b", "a"]);
        assert_eq!(kv.list_range("l", 0, -1).await.unwrap().len(), 4);
        assert!(kv.list_range("l", 4, 8).await.unwrap().is_empty());
        assert!(kv.list_range("missing", 0, -1).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_list_remove_all_occurrences() {
        let kv = InMemoryKeyValueStore::new();
        for v in ["x", "y", "x"] {
            kv.list_push_front("l", v).await.unwrap();
        }

        assert_eq!(kv.list_remove("l", "x").await.unwrap(), 2);
        assert_eq!(kv.list_range("l", 0, -1).await.unwrap(), vec!["y"]);

        assert_eq!(kv.list_remove("l", "y").await.unwrap(), 1);
        assert!(!kv.exists("l").await.unwrap());
    }

    #[tokio::test]
    async fn test_wrong_type() {
        let kv = InMemoryKeyValueStore::new();
        kv.list_push_front("l", "x").await.unwrap();

        assert!(matches!(
            kv.hash_get_all("l").await,
            Err(KvError::WrongType(_))
        ));
    }
}
