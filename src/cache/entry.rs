//! Cache Entry Module
//!
//! Defines the structure for individual cache entries with access bookkeeping.

use std::time::{SystemTime, UNIX_EPOCH};

// == Cache Entry ==
/// Represents a single cache entry with value and access metadata.
///
/// The value type is opaque to the cache; it is cloned out on every hit
/// and owned by the caller.
#[derive(Debug, Clone)]
pub struct CacheEntry<V> {
    /// Original query text, retained for inspection and debugging
    pub query: String,
    /// The stored payload
    pub value: V,
    /// Optional caller-supplied metadata
    pub metadata: Option<serde_json::Value>,
    /// Creation timestamp (Unix milliseconds)
    pub created_at: u64,
    /// Timestamp of the most recent hit (Unix milliseconds)
    pub last_accessed_at: u64,
    /// Number of hits this entry has served
    pub access_count: u64,
}

impl<V> CacheEntry<V> {
    // == Constructor ==
    /// Creates a fresh cache entry at the given timestamp.
    ///
    /// A replacement entry starts over: `access_count` is zero and
    /// `created_at` is the insertion time, not the original creation time.
    pub fn new(query: String, value: V, metadata: Option<serde_json::Value>, now: u64) -> Self {
        Self {
            query,
            value,
            metadata,
            created_at: now,
            last_accessed_at: now,
            access_count: 0,
        }
    }

    // == Is Expired ==
    /// Checks whether the entry is stale at the given timestamp.
    ///
    /// Boundary condition: an entry is stale only when its age strictly
    /// exceeds the TTL. At `age == ttl` the entry is still served.
    pub fn is_expired(&self, ttl_ms: u64, now: u64) -> bool {
        now.saturating_sub(self.created_at) > ttl_ms
    }

    // == Touch ==
    /// Records a hit: refreshes the access timestamp and bumps the counter.
    pub fn touch(&mut self, now: u64) {
        self.last_accessed_at = now;
        self.access_count = self.access_count.saturating_add(1);
    }
}

// == Utility Functions ==
/// Returns current Unix timestamp in milliseconds.
pub fn current_timestamp_ms() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_millis() as u64
}
