//! Cache Module
//!
//! Provides an in-memory response cache with interval-based expiry.

mod entry;
mod expiring;
mod store;


// Re-export public types
pub use entry::CacheEntry;
pub use expiring::Cache;
pub use store::CacheStore;

// == Public Constants ==
/// Default sweep period and maximum entry age
pub const DEFAULT_INTERVAL_SECS: u64 = 300;
