use crate::core::error::StoreError;
use crate::store::HistoryBackend;
use async_trait::async_trait;
use std::collections::HashMap;
use tokio::sync::Mutex;
use tracing::debug;

/// In-memory history backend. Used in tests and wherever persistence
/// across runs is not needed.
pub struct MemoryBackend {
    inner: Mutex<HashMap<String, Vec<u8>>>,
}

impl MemoryBackend {
    pub fn new() -> Self {
        Self {
            inner: Mutex::new(HashMap::new()),
        }
    }
}

impl Default for MemoryBackend {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl HistoryBackend for MemoryBackend {
    async fn insert(&self, key: &str, value: &[u8]) -> Result<(), StoreError> {
        let mut entries = self.inner.lock().await;
        debug!("History PUT for key: {key:?}");
        entries.insert(key.to_string(), value.to_vec());
        Ok(())
    }

    async fn entries(&self) -> Result<Vec<(String, Vec<u8>)>, StoreError> {
        let entries = self.inner.lock().await;
        debug!("History SCAN: {} entries", entries.len());
        Ok(entries
            .iter()
            .map(|(key, value)| (key.clone(), value.clone()))
            .collect())
    }

    async fn clear(&self) -> Result<(), StoreError> {
        let mut entries = self.inner.lock().await;
        entries.clear();
        debug!("History CLEAR");
        Ok(())
    }
}
