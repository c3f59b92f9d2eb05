//! Expiring Cache Module
//!
//! Thread-safe handle combining the entry store with its background reaper.

use std::sync::Arc;
use std::time::Duration;

use bytes::Bytes;
use tokio::sync::RwLock;
use tracing::debug;

use crate::cache::CacheStore;
use crate::tasks::{spawn_reap_task, ReapHandle};

// == Cache ==
/// Time-bounded key-value cache for raw response bodies.
///
/// Entries older than `interval` are removed by a background sweep that runs
/// every `interval`, so an entry may stay visible for just under twice the
/// interval. Share it between tasks with `Arc<Cache>`.
#[derive(Debug)]
pub struct Cache {
    store: Arc<RwLock<CacheStore>>,
    interval: Duration,
    reaper: ReapHandle,
}

impl Cache {
    // == Constructor ==
    /// Creates an empty cache and starts its reaper.
    ///
    /// Must be called from within a Tokio runtime.
    pub fn new(interval: Duration) -> Self {
        let store = Arc::new(RwLock::new(CacheStore::new()));
        let reaper = spawn_reap_task(store.clone(), interval);

        Self {
            store,
            interval,
            reaper,
        }
    }

    // == Add ==
    /// Inserts or overwrites the payload for `key`.
    pub async fn add(&self, key: impl Into<String>, value: impl Into<Bytes>) {
        let key = key.into();
        let value = value.into();
        debug!(key = %key, bytes = value.len(), "cache add");

        self.store.write().await.add(key, value);
    }

    // == Get ==
    /// Returns the payload for `key`, or `None` if it was never added or has
    /// been reaped.
    pub async fn get(&self, key: &str) -> Option<Bytes> {
        self.store.read().await.get(key)
    }

    // == Length ==
    /// Returns the number of entries currently held.
    pub async fn len(&self) -> usize {
        self.store.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.store.read().await.is_empty()
    }

    /// Returns the configured sweep period and maximum entry age.
    pub fn interval(&self) -> Duration {
        self.interval
    }

    /// Returns true while the background reaper is alive.
    pub fn is_reaping(&self) -> bool {
        !self.reaper.is_finished()
    }

    // == Shutdown ==
    /// Stops the reaper and waits for it to exit, releasing the cache.
    pub async fn shutdown(self) {
        self.reaper.shutdown().await;
        debug!("cache released");
    }
}
