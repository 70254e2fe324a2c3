//! Response Cache - an in-memory cache for AI query responses
//!
//! Avoids recomputation of expensive external queries by keying responses
//! on a content hash of the query text, subject to a TTL and a maximum
//! entry count. Eviction under capacity pressure removes least-frequently
//! used entries first, breaking ties by least-recent access. A background
//! sweep task bounds memory growth even under read-only workloads.
//!
//! The cache is a performance optimization, never a correctness dependency:
//! lookups and insertions cannot fail, and callers must work (just slower)
//! with the cache cleared or disabled.

pub mod cache;
pub mod config;
pub mod error;
pub mod tasks;

pub use cache::{CacheStats, CacheStore, ResponseCache};
pub use config::{CacheConfig, CacheConfigUpdate};
pub use error::ConfigError;
pub use tasks::spawn_sweep_task;
