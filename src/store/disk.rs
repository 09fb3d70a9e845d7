use crate::core::error::StoreError;
use crate::store::HistoryBackend;
use anyhow::Result;
use async_trait::async_trait;
use fjall::{Keyspace, PartitionCreateOptions, PartitionHandle, PersistMode};
use std::path::Path;
use tracing::debug;

/// Durable history backend over a fjall keyspace. Conversions live in a
/// dedicated partition, so a clear wipes only this namespace.
pub struct FjallBackend {
    keyspace: Keyspace,
    partition: PartitionHandle,
}

impl FjallBackend {
    pub fn open(path: &Path) -> Result<Self> {
        std::fs::create_dir_all(path)?;

        let keyspace = fjall::Config::new(path).open()?;
        let partition =
            keyspace.open_partition("conversions", PartitionCreateOptions::default())?;
        Ok(Self {
            keyspace,
            partition,
        })
    }
}

#[async_trait]
impl HistoryBackend for FjallBackend {
    async fn insert(&self, key: &str, value: &[u8]) -> Result<(), StoreError> {
        self.partition
            .insert(key, value)
            .map_err(StoreError::write)?;
        // A save is only reported successful once it is on disk.
        self.keyspace
            .persist(PersistMode::SyncAll)
            .map_err(StoreError::write)?;
        debug!("History PUT for key: {key:?}");
        Ok(())
    }

    async fn entries(&self) -> Result<Vec<(String, Vec<u8>)>, StoreError> {
        let mut entries = Vec::new();
        for item in self.partition.iter() {
            let (key, value) = item.map_err(StoreError::read)?;
            entries.push((
                String::from_utf8_lossy(&key).into_owned(),
                value.to_vec(),
            ));
        }
        debug!("History SCAN: {} entries", entries.len());
        Ok(entries)
    }

    async fn clear(&self) -> Result<(), StoreError> {
        let keys: Vec<_> = self
            .partition
            .iter()
            .map(|item| item.map(|(key, _)| key))
            .collect::<Result<Vec<_>, _>>()
            .map_err(StoreError::write)?;
        for key in keys {
            self.partition.remove(key).map_err(StoreError::write)?;
        }
        self.keyspace
            .persist(PersistMode::SyncAll)
            .map_err(StoreError::write)?;
        debug!("History CLEAR");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[tokio::test]
    async fn test_insert_and_scan() {
        let dir = tempdir().unwrap();
        let backend = FjallBackend::open(dir.path()).unwrap();

        assert!(backend.entries().await.unwrap().is_empty());

        backend.insert("1", b"one").await.unwrap();
        backend.insert("2", b"two").await.unwrap();

        let mut entries = backend.entries().await.unwrap();
        entries.sort();
        assert_eq!(
            entries,
            vec![
                ("1".to_string(), b"one".to_vec()),
                ("2".to_string(), b"two".to_vec()),
            ]
        );
    }

    #[tokio::test]
    async fn test_clear() {
        let dir = tempdir().unwrap();
        let backend = FjallBackend::open(dir.path()).unwrap();

        backend.insert("1", b"one").await.unwrap();
        backend.insert("settings", b"foreign").await.unwrap();
        backend.clear().await.unwrap();

        assert!(backend.entries().await.unwrap().is_empty());

        // Clearing again is a no-op.
        backend.clear().await.unwrap();
    }

    #[tokio::test]
    async fn test_survives_reopen() {
        let dir = tempdir().unwrap();

        {
            let backend = FjallBackend::open(dir.path()).unwrap();
            backend.insert("1", b"one").await.unwrap();
        }

        let backend = FjallBackend::open(dir.path()).unwrap();
        let entries = backend.entries().await.unwrap();
        assert_eq!(entries, vec![("1".to_string(), b"one".to_vec())]);
    }
}
