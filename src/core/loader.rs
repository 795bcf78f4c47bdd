use crate::core::cache::DatasetCache;
use crate::core::parser::parse_dataset;
use crate::domain::model::{DataOrigin, Dataset};
use crate::domain::ports::{Clock, DatasetSource, Storage};
use crate::utils::error::Result;
use std::sync::atomic::{AtomicU64, Ordering};
use tokio::sync::Mutex;

/// Fetches the dataset, going through the cache slot first.
///
/// Loads are serialized. A caller queued behind a load that succeeded gets
/// that load's rows and never reaches the network, even when the cache slot
/// could not be written, so a burst of retries costs a single request. A
/// failed attempt is not shared: the next caller in line makes its own.
pub struct DatasetLoader<S: Storage, D: DatasetSource, K: Clock> {
    source: D,
    cache: DatasetCache<S, K>,
    // last successful load, bumped together with `loads`
    gate: Mutex<Option<Dataset>>,
    loads: AtomicU64,
}

impl<S: Storage, D: DatasetSource, K: Clock> DatasetLoader<S, D, K> {
    pub fn new(source: D, cache: DatasetCache<S, K>) -> Self {
        Self {
            source,
            cache,
            gate: Mutex::new(None),
            loads: AtomicU64::new(0),
        }
    }

    pub fn cache(&self) -> &DatasetCache<S, K> {
        &self.cache
    }

    pub async fn load(&self) -> Result<Dataset> {
        let seen = self.loads.load(Ordering::Acquire);
        let mut last = self.gate.lock().await;

        if self.loads.load(Ordering::Acquire) != seen {
            if let Some(dataset) = last.as_ref() {
                tracing::info!("📂 Reusing dataset loaded while waiting ({} records)", dataset.rows.len());
                return Ok(Dataset {
                    origin: DataOrigin::Cache,
                    ..dataset.clone()
                });
            }
        }

        if let Some(entry) = self.cache.read().await {
            tracing::info!("📂 Using cached dataset ({} records)", entry.data.len());
            return Ok(Dataset {
                rows: entry.data,
                fetched_at: entry.timestamp,
                origin: DataOrigin::Cache,
            });
        }

        tracing::info!("📡 Fetching dataset");
        let text = self.source.fetch().await?;
        let rows = parse_dataset(&text);
        tracing::info!("📡 Fetched {} records", rows.len());

        self.cache.write(&rows).await;

        let dataset = Dataset {
            rows,
            fetched_at: self.cache.clock().now(),
            origin: DataOrigin::Network,
        };
        *last = Some(dataset.clone());
        self.loads.fetch_add(1, Ordering::AcqRel);
        Ok(dataset)
    }

    /// Manual retry after a failed load.
    pub async fn retry(&self) -> Result<Dataset> {
        tracing::info!("🔄 Retrying dataset load");
        self.load().await
    }
}
