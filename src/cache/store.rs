//! Cache Store Module
//!
//! Lock-free inner storage: a plain `HashMap` of entries plus the sweep
//! routine used by the reaper. Synchronisation lives in [`super::Cache`].

use std::collections::HashMap;
use std::time::Duration;

use bytes::Bytes;
use tokio::time::Instant;

use crate::cache::CacheEntry;

// == Cache Store ==
/// Key-value storage for cached payloads.
#[derive(Debug, Default)]
pub struct CacheStore {
    /// Key-value storage
    entries: HashMap<String, CacheEntry>,
}

impl CacheStore {
    // == Constructor ==
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    // == Insert ==
    /// Stores a prepared entry, replacing any previous entry for the key.
    pub fn insert(&mut self, key: String, entry: CacheEntry) {
        self.entries.insert(key, entry);
    }

    // == Add ==
    /// Stores a payload stamped with the current time.
    ///
    /// If the key already exists, the value is overwritten and its age resets.
    pub fn add(&mut self, key: String, value: Bytes) {
        self.insert(key, CacheEntry::new(value));
    }

    // == Get ==
    /// Retrieves a payload by key.
    ///
    /// Reads never touch the entry, so an entry's lifetime is fixed at insertion.
    pub fn get(&self, key: &str) -> Option<Bytes> {
        self.entries.get(key).map(CacheEntry::value)
    }

    // == Reap ==
    /// Removes every entry older than `max_age` as of `now`.
    ///
    /// Returns the number of entries removed.
    pub fn reap(&mut self, max_age: Duration, now: Instant) -> usize {
        let before = self.entries.len();
        self.entries.retain(|_, entry| !entry.is_expired(max_age, now));
        before - self.entries.len()
    }

    // == Length ==
    /// Returns the current number of entries in the store.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    // == Is Empty ==
    /// Returns true if the store is empty.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Returns true if the key currently has an entry.
    pub fn contains_key(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }
}
