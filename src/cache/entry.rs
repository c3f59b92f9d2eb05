//! Cache Entry Module
//!
//! Defines the structure for individual cache entries with age tracking.

use std::time::Duration;

use bytes::Bytes;
use tokio::time::Instant;

// == Cache Entry ==
/// Represents a single cached payload and the moment it was stored.
///
/// Timestamps come from the Tokio clock so that paused-time tests can
/// drive expiry deterministically.
#[derive(Debug, Clone)]
pub struct CacheEntry {
    /// The stored payload, opaque to the cache
    value: Bytes,
    /// Insertion timestamp
    created_at: Instant,
}

impl CacheEntry {
    // == Constructor ==
    /// Creates a new entry stamped with the current time.
    pub fn new(value: Bytes) -> Self {
        Self::with_created_at(value, Instant::now())
    }

    /// Creates an entry with an explicit creation time.
    pub fn with_created_at(value: Bytes, created_at: Instant) -> Self {
        Self { value, created_at }
    }

    /// Returns a handle to the stored payload.
    ///
    /// `Bytes` is reference counted and immutable, so the clone is cheap and
    /// can never observe a later mutation.
    pub fn value(&self) -> Bytes {
        self.value.clone()
    }

    pub fn created_at(&self) -> Instant {
        self.created_at
    }

    // == Age ==
    /// Returns how long the entry has existed as of `now`.
    ///
    /// Saturates to zero if `now` precedes the creation time.
    pub fn age(&self, now: Instant) -> Duration {
        now.saturating_duration_since(self.created_at)
    }

    // == Is Expired ==
    /// Checks whether the entry is older than `max_age` as of `now`.
    ///
    /// Boundary condition: an entry whose age equals `max_age` is still live.
    pub fn is_expired(&self, max_age: Duration, now: Instant) -> bool {
        self.age(now) > max_age
    }
}
