use std::collections::BTreeMap;
use std::sync::{Mutex, MutexGuard};

use anyhow::{Result, anyhow};

use super::StateStore;

/// In-process state store backed by an ordered map.
#[derive(Debug, Default)]
pub struct MemoryStateStore {
    entries: Mutex<BTreeMap<String, Vec<u8>>>,
}

impl MemoryStateStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of keys currently stored.
    pub fn len(&self) -> Result<usize> {
        Ok(self.lock()?.len())
    }

    pub fn is_empty(&self) -> Result<bool> {
        Ok(self.lock()?.is_empty())
    }

    /// Copy of every entry, ordered by key.
    pub fn snapshot(&self) -> Result<BTreeMap<String, Vec<u8>>> {
        Ok(self.lock()?.clone())
    }

    fn lock(&self) -> Result<MutexGuard<'_, BTreeMap<String, Vec<u8>>>> {
        self.entries
            .lock()
            .map_err(|_| anyhow!("memory state store lock poisoned"))
    }
}

impl StateStore for MemoryStateStore {
    async fn get(&self, key: &str) -> Result<Option<Vec<u8>>> {
        Ok(self.lock()?.get(key).cloned())
    }

    async fn put(&self, key: &str, value: &[u8]) -> Result<()> {
        self.lock()?.insert(key.to_string(), value.to_vec());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_put_then_get() {
        let store = MemoryStateStore::new();
        assert!(store.get("k").await.unwrap().is_none());

        store.put("k", b"v1").await.unwrap();
        store.put("k", b"v2").await.unwrap();

        assert_eq!(store.get("k").await.unwrap(), Some(b"v2".to_vec()));
        assert_eq!(store.len().unwrap(), 1);
    }

    #[tokio::test]
    async fn test_default_batch_writes_in_order() {
        let store = MemoryStateStore::new();
        store
            .put_batch(&[
                ("a".to_string(), b"1".to_vec()),
                ("b".to_string(), b"2".to_vec()),
            ])
            .await
            .unwrap();

        let snapshot = store.snapshot().unwrap();
        assert_eq!(snapshot.keys().collect::<Vec<_>>(), vec!["a", "b"]);
    }
}
