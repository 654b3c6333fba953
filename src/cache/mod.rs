//! In-memory TTL cache for loaded entity collections.
//!
//! `DataCache` keeps one entry per `{entityType}_{userId}` key, each with its
//! own time-to-live. Freshness is checked at every read (lazy eviction); a
//! background sweeper started with `start_sweeper` reclaims expired entries
//! that nothing reads again. The cache lives in volatile memory only - there
//! is no persistence or serialization at this layer.

pub mod store;

pub use store::{CacheStats, CacheValue, DataCache, SweeperHandle, SWEEP_INTERVAL};
