use crate::domain::model::{CacheEntry, RowRecord};
use crate::domain::ports::{Clock, Storage};
use chrono::Duration;

pub const CACHE_SLOT: &str = "lessentabellen_cache.json";

pub fn default_expiry() -> Duration {
    Duration::hours(1)
}

/// Single-slot, time-boxed cache of parsed rows.
///
/// Every failure in here is logged and then treated as a miss, a cache that
/// cannot be read or written never stops the dataset from loading.
pub struct DatasetCache<S: Storage, K: Clock> {
    storage: S,
    clock: K,
    expiry: Duration,
}

impl<S: Storage, K: Clock> DatasetCache<S, K> {
    pub fn new(storage: S, clock: K, expiry: Duration) -> Self {
        Self {
            storage,
            clock,
            expiry,
        }
    }

    pub fn clock(&self) -> &K {
        &self.clock
    }

    pub async fn read(&self) -> Option<CacheEntry> {
        let bytes = match self.storage.read_file(CACHE_SLOT).await {
            Ok(bytes) => bytes,
            Err(e) => {
                tracing::debug!("Cache miss: {}", e);
                return None;
            }
        };

        let entry: CacheEntry = match serde_json::from_slice(&bytes) {
            Ok(entry) => entry,
            Err(e) => {
                tracing::warn!("Cache read failed: {}", e);
                return None;
            }
        };

        let age = self.clock.now() - entry.timestamp;
        if age > self.expiry {
            tracing::debug!("Cache entry expired ({} minutes old)", age.num_minutes());
            self.evict().await;
            return None;
        }

        tracing::debug!("Cache hit with {} records", entry.data.len());
        Some(entry)
    }

    /// Replaces the slot with `rows` stamped with the current time.
    pub async fn write(&self, rows: &[RowRecord]) {
        let entry = CacheEntry {
            data: rows.to_vec(),
            timestamp: self.clock.now(),
        };

        let payload = match serde_json::to_vec(&entry) {
            Ok(payload) => payload,
            Err(e) => {
                tracing::warn!("Cache write failed: {}", e);
                return;
            }
        };

        self.evict().await;
        if let Err(e) = self.storage.write_file(CACHE_SLOT, &payload).await {
            tracing::warn!("Cache write failed: {}", e);
        }
    }

    pub async fn evict(&self) {
        if let Err(e) = self.storage.remove_file(CACHE_SLOT).await {
            tracing::debug!("Nothing to evict: {}", e);
        }
    }
}
