//! Cache Module
//!
//! Provides in-memory response caching with TTL expiration and
//! frequency/recency-aware eviction.

mod entry;
mod key;
mod service;
mod stats;
mod store;


// Re-export public types
pub use entry::CacheEntry;
pub use key::query_hash;
pub use service::ResponseCache;
pub use stats::{CacheStats, StatsCounters};
pub use store::CacheStore;
