pub mod disk;
pub mod memory;

use crate::core::error::StoreError;
use crate::core::history::{Conversion, ConversionRecord, RetentionPolicy};
use async_trait::async_trait;
use chrono::Utc;
use std::sync::Arc;
use tokio::sync::Mutex;
use tracing::{debug, error, warn};

/// Raw key-value access to the persisted history namespace. Keys are the
/// decimal string form of a record's timestamp; values are serialized
/// record bodies. The medium does not guarantee any iteration order.
#[async_trait]
pub trait HistoryBackend: Send + Sync {
    async fn insert(&self, key: &str, value: &[u8]) -> Result<(), StoreError>;

    /// All entries in the namespace, foreign keys included.
    async fn entries(&self) -> Result<Vec<(String, Vec<u8>)>, StoreError>;

    /// Removes every key in the namespace, regardless of format.
    async fn clear(&self) -> Result<(), StoreError>;
}

/// Owns the persisted conversion history: assigns record keys, writes and
/// reads through a [`HistoryBackend`], and applies the retention policy
/// when listing.
pub struct HistoryStore {
    backend: Arc<dyn HistoryBackend>,
    retention: RetentionPolicy,
    last_key: Mutex<i64>,
}

impl HistoryStore {
    pub fn new(backend: Arc<dyn HistoryBackend>, retention: RetentionPolicy) -> Self {
        Self {
            backend,
            retention,
            last_key: Mutex::new(0),
        }
    }

    /// Persists a conversion under a fresh timestamp key and returns the
    /// stored record. Keys are strictly increasing even when saves land
    /// within the same wall-clock millisecond.
    pub async fn save(&self, conversion: Conversion) -> Result<ConversionRecord, StoreError> {
        let body = serde_json::to_vec(&conversion).map_err(StoreError::write)?;
        let timestamp = self.next_key().await;

        if let Err(e) = self.backend.insert(&timestamp.to_string(), &body).await {
            error!("Failed to save conversion: {e}");
            return Err(e);
        }

        debug!("Saved conversion at {timestamp}");
        Ok(ConversionRecord {
            timestamp,
            conversion,
        })
    }

    /// Returns all non-expired records, sorted by timestamp. Keys that do
    /// not parse as timestamps and bodies that do not decode are skipped;
    /// they stay in storage until the next [`HistoryStore::clear`].
    pub async fn list(&self) -> Result<Vec<ConversionRecord>, StoreError> {
        let now = Utc::now().timestamp_millis();
        let entries = match self.backend.entries().await {
            Ok(entries) => entries,
            Err(e) => {
                error!("Failed to load conversions: {e}");
                return Err(e);
            }
        };

        let mut records = Vec::new();
        for (key, value) in entries {
            let Ok(timestamp) = key.parse::<i64>() else {
                debug!("Skipping non-timestamp key: {key:?}");
                continue;
            };
            if !self.retention.is_visible(timestamp, now) {
                debug!("Skipping expired record at {timestamp}");
                continue;
            }
            match serde_json::from_slice::<Conversion>(&value) {
                Ok(conversion) => records.push(ConversionRecord {
                    timestamp,
                    conversion,
                }),
                Err(e) => warn!("Skipping undecodable record at {timestamp}: {e}"),
            }
        }

        records.sort_by_key(|r| r.timestamp);
        Ok(records)
    }

    /// Deletes everything in the namespace, expired records included.
    /// Clearing an empty store succeeds trivially.
    pub async fn clear(&self) -> Result<(), StoreError> {
        if let Err(e) = self.backend.clear().await {
            error!("Failed to clear conversions: {e}");
            return Err(e);
        }
        debug!("Cleared conversion history");
        Ok(())
    }

    async fn next_key(&self) -> i64 {
        let mut last = self.last_key.lock().await;
        let key = Utc::now().timestamp_millis().max(*last + 1);
        *last = key;
        key
    }
}
