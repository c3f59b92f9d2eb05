//! Background Tasks Module
//!
//! Contains background tasks that run for the lifetime of a cache.
//!
//! # Tasks
//! - Reap: Removes entries older than the cache interval on every tick

mod reap;

pub use reap::{spawn_reap_task, ReapHandle, MIN_REAP_PERIOD};
