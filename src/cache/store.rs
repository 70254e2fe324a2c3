//! Cache Store Module
//!
//! Main cache engine combining HashMap storage with TTL expiration and
//! frequency/recency-aware eviction.

use std::collections::HashMap;

use chrono::DateTime;
use tracing::debug;

use crate::cache::entry::current_timestamp_ms;
use crate::cache::{query_hash, CacheEntry, CacheStats, StatsCounters};
use crate::config::{CacheConfig, CacheConfigUpdate};
use crate::error::Result;

// == Cache Store ==
/// Bounded response cache with TTL expiration and LFU/LRU eviction.
///
/// Lookups and insertions are infallible: the cache is a performance
/// optimization, never a correctness dependency, so a read that cannot be
/// served is simply a miss.
#[derive(Debug)]
pub struct CacheStore<V> {
    /// Entries keyed by the content hash of their query
    entries: HashMap<String, CacheEntry<V>>,
    /// Performance counters
    counters: StatsCounters,
    /// Live configuration
    config: CacheConfig,
}

impl<V: Clone> CacheStore<V> {
    // == Constructor ==
    /// Creates a new CacheStore with the given configuration.
    ///
    /// The configuration must already be validated; `ResponseCache::new`
    /// and `update_config` are the validating entry points.
    pub fn new(config: CacheConfig) -> Self {
        Self {
            entries: HashMap::new(),
            counters: StatsCounters::new(),
            config,
        }
    }

    // == Get ==
    /// Looks up the cached value for a query.
    ///
    /// Returns `None` if the query was never cached or its entry is stale.
    /// A stale entry is removed as a side effect of the read and counted as
    /// a miss. On a hit, the entry's access timestamp and counter are
    /// updated and a clone of the value is returned.
    pub fn get(&mut self, query: &str) -> Option<V> {
        let key = query_hash(query);
        let now = current_timestamp_ms();
        let ttl = self.config.ttl_ms;

        // Stale entries are removed after the lookup borrow ends
        let mut stale = false;
        if let Some(entry) = self.entries.get_mut(&key) {
            if entry.is_expired(ttl, now) {
                stale = true;
            } else {
                entry.touch(now);
                self.counters.record_hit();
                return Some(entry.value.clone());
            }
        }

        if stale {
            debug!(key = %&key[..8], "Cache entry expired, removing");
            self.entries.remove(&key);
        }
        self.counters.record_miss();
        None
    }

    // == Set ==
    /// Stores a response for a query, replacing any prior entry.
    ///
    /// If the cache is at capacity, eviction runs synchronously before the
    /// insertion: expired entries are purged first, then least-used entries
    /// until occupancy is strictly below the bound. A replacement entry
    /// starts with a fresh `created_at` and a zero access count.
    pub fn set(&mut self, query: &str, value: V, metadata: Option<serde_json::Value>) {
        let key = query_hash(query);
        let now = current_timestamp_ms();

        if self.entries.len() >= self.config.max_size {
            self.make_room(now);
        }

        self.entries
            .insert(key, CacheEntry::new(query.to_string(), value, metadata, now));
    }

    // == Clear ==
    /// Empties the cache and resets all counters. Idempotent.
    pub fn clear(&mut self) {
        self.entries.clear();
        self.counters.reset();
    }

    // == Stats ==
    /// Returns a snapshot of cache state and performance.
    ///
    /// Pure read: takes `&self`, so it can never change counters or entries.
    pub fn stats(&self) -> CacheStats {
        let total_access_count: u64 = self.entries.values().map(|e| e.access_count).sum();
        let oldest = self.entries.values().map(|e| e.created_at).min();
        let newest = self.entries.values().map(|e| e.created_at).max();

        CacheStats {
            size: self.entries.len(),
            max_size: self.config.max_size,
            hits: self.counters.hits,
            misses: self.counters.misses,
            evictions: self.counters.evictions,
            hit_rate: CacheStats::hit_rate_of(&self.counters),
            miss_rate: CacheStats::miss_rate_of(&self.counters),
            total_queries: self.counters.total_queries,
            average_access_count: if self.entries.is_empty() {
                0.0
            } else {
                total_access_count as f64 / self.entries.len() as f64
            },
            oldest_entry: oldest.and_then(|ms| DateTime::from_timestamp_millis(ms as i64)),
            newest_entry: newest.and_then(|ms| DateTime::from_timestamp_millis(ms as i64)),
        }
    }

    // == Update Config ==
    /// Merges a partial configuration update after validating it.
    ///
    /// Existing entries are not purged or resized retroactively; a smaller
    /// `max_size` takes effect through eviction on subsequent `set` calls.
    pub fn update_config(&mut self, update: &CacheConfigUpdate) -> Result<()> {
        self.config.apply_update(update)
    }

    /// Returns a copy of the live configuration.
    pub fn config(&self) -> CacheConfig {
        self.config.clone()
    }

    // == Cleanup Expired ==
    /// Removes all stale entries from the cache.
    ///
    /// Shared by the background sweep and the eviction path; returns the
    /// number of entries removed.
    pub fn cleanup_expired(&mut self) -> usize {
        let now = current_timestamp_ms();
        self.remove_expired(now)
    }

    // == Length ==
    /// Returns the current number of entries in the cache.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    // == Is Empty ==
    /// Returns true if the cache is empty.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    // -- private helpers ---------------------------------------------------

    fn remove_expired(&mut self, now: u64) -> usize {
        let before = self.entries.len();
        let ttl = self.config.ttl_ms;
        self.entries.retain(|_, entry| !entry.is_expired(ttl, now));
        before - self.entries.len()
    }

    /// Makes room for one insertion when the cache is at capacity.
    ///
    /// Pass 1 purges stale entries. If that does not bring occupancy below
    /// the bound, pass 2 removes the least-used entries: lowest
    /// `access_count` first, ties broken by oldest `last_accessed_at`.
    /// Pass 2 removes enough entries to leave occupancy strictly below
    /// `max_size`, so the pending insert cannot exceed the bound.
    fn make_room(&mut self, now: u64) {
        let expired = self.remove_expired(now);
        if expired > 0 {
            debug!(removed = expired, "Eviction: purged expired entries");
        }

        if self.entries.len() < self.config.max_size {
            return;
        }

        let mut candidates: Vec<(String, u64, u64)> = self
            .entries
            .iter()
            .map(|(key, entry)| (key.clone(), entry.access_count, entry.last_accessed_at))
            .collect();
        candidates.sort_by(|a, b| a.1.cmp(&b.1).then(a.2.cmp(&b.2)));

        let excess = self.entries.len() - self.config.max_size + 1;
        for (key, access_count, _) in candidates.into_iter().take(excess) {
            debug!(key = %&key[..8], access_count, "Evicting least-used cache entry");
            self.entries.remove(&key);
            self.counters.record_eviction();
        }
    }
}
