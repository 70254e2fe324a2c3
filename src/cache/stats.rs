//! Cache Statistics Module
//!
//! Tracks cache performance counters and produces read-only snapshots.

use chrono::{DateTime, Utc};
use serde::Serialize;

// == Stats Counters ==
/// Mutable hit/miss/eviction counters maintained by the store.
#[derive(Debug, Clone, Default)]
pub struct StatsCounters {
    /// Number of successful cache retrievals
    pub hits: u64,
    /// Number of failed cache retrievals (key not found or expired)
    pub misses: u64,
    /// Number of entries evicted to satisfy the capacity bound
    pub evictions: u64,
    /// Total number of lookups (hits + misses)
    pub total_queries: u64,
}

impl StatsCounters {
    // == Constructor ==
    /// Creates a new StatsCounters with all counters at zero.
    pub fn new() -> Self {
        Self::default()
    }

    // == Record Hit ==
    /// Increments the hit counter and the total query counter.
    pub fn record_hit(&mut self) {
        self.hits += 1;
        self.total_queries += 1;
    }

    // == Record Miss ==
    /// Increments the miss counter and the total query counter.
    pub fn record_miss(&mut self) {
        self.misses += 1;
        self.total_queries += 1;
    }

    // == Record Eviction ==
    /// Increments the eviction counter.
    pub fn record_eviction(&mut self) {
        self.evictions += 1;
    }

    // == Reset ==
    /// Resets all counters to zero.
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

// == Cache Stats ==
/// Point-in-time snapshot of cache state and performance.
#[derive(Debug, Clone, Serialize)]
pub struct CacheStats {
    /// Current number of entries in the cache
    pub size: usize,
    /// Configured maximum number of entries
    pub max_size: usize,
    /// Number of successful cache retrievals
    pub hits: u64,
    /// Number of failed cache retrievals
    pub misses: u64,
    /// Number of entries evicted under capacity pressure
    pub evictions: u64,
    /// hits / total_queries, or 0.0 if no queries have been made
    pub hit_rate: f64,
    /// misses / total_queries, complementary to hit_rate
    pub miss_rate: f64,
    /// Total number of lookups
    pub total_queries: u64,
    /// Mean access count across live entries, or 0.0 if empty
    pub average_access_count: f64,
    /// Creation time of the oldest live entry
    pub oldest_entry: Option<DateTime<Utc>>,
    /// Creation time of the newest live entry
    pub newest_entry: Option<DateTime<Utc>>,
}

impl CacheStats {
    /// Derives the hit rate for a counter set.
    ///
    /// Returns hits / total_queries, or 0.0 if no requests have been made.
    pub fn hit_rate_of(counters: &StatsCounters) -> f64 {
        if counters.total_queries == 0 {
            0.0
        } else {
            counters.hits as f64 / counters.total_queries as f64
        }
    }

    /// Derives the miss rate for a counter set.
    ///
    /// Returns misses / total_queries, or 0.0 if no requests have been made.
    pub fn miss_rate_of(counters: &StatsCounters) -> f64 {
        if counters.total_queries == 0 {
            0.0
        } else {
            counters.misses as f64 / counters.total_queries as f64
        }
    }
}

// == Unit Tests ==
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_counters_new() {
        let counters = StatsCounters::new();
        assert_eq!(counters.hits, 0);
        assert_eq!(counters.misses, 0);
        assert_eq!(counters.evictions, 0);
        assert_eq!(counters.total_queries, 0);
    }

    #[test]
    fn test_record_hit_tracks_total() {
        let mut counters = StatsCounters::new();
        counters.record_hit();
        counters.record_hit();
        assert_eq!(counters.hits, 2);
        assert_eq!(counters.total_queries, 2);
    }

    #[test]
    fn test_record_miss_tracks_total() {
        let mut counters = StatsCounters::new();
        counters.record_miss();
        assert_eq!(counters.misses, 1);
        assert_eq!(counters.total_queries, 1);
    }

    #[test]
    fn test_hit_rate_no_requests() {
        let counters = StatsCounters::new();
        assert_eq!(CacheStats::hit_rate_of(&counters), 0.0);
        assert_eq!(CacheStats::miss_rate_of(&counters), 0.0);
    }

    #[test]
    fn test_hit_rate_all_hits() {
        let mut counters = StatsCounters::new();
        counters.record_hit();
        counters.record_hit();
        assert_eq!(CacheStats::hit_rate_of(&counters), 1.0);
        assert_eq!(CacheStats::miss_rate_of(&counters), 0.0);
    }

    #[test]
    fn test_rates_are_complementary() {
        let mut counters = StatsCounters::new();
        counters.record_hit();
        counters.record_miss();
        counters.record_miss();

        let hit_rate = CacheStats::hit_rate_of(&counters);
        let miss_rate = CacheStats::miss_rate_of(&counters);
        assert!((hit_rate + miss_rate - 1.0).abs() < 1e-9);
        assert!((hit_rate - 1.0 / 3.0).abs() < 1e-9);
    }

    #[test]
    fn test_record_eviction() {
        let mut counters = StatsCounters::new();
        counters.record_eviction();
        counters.record_eviction();
        assert_eq!(counters.evictions, 2);
        // Evictions are not lookups
        assert_eq!(counters.total_queries, 0);
    }

    #[test]
    fn test_reset() {
        let mut counters = StatsCounters::new();
        counters.record_hit();
        counters.record_miss();
        counters.record_eviction();

        counters.reset();
        assert_eq!(counters.hits, 0);
        assert_eq!(counters.misses, 0);
        assert_eq!(counters.evictions, 0);
        assert_eq!(counters.total_queries, 0);
    }

    #[test]
    fn test_stats_serialize() {
        let stats = CacheStats {
            size: 2,
            max_size: 100,
            hits: 8,
            misses: 2,
            evictions: 1,
            hit_rate: 0.8,
            miss_rate: 0.2,
            total_queries: 10,
            average_access_count: 4.0,
            oldest_entry: DateTime::from_timestamp_millis(1_000_000),
            newest_entry: DateTime::from_timestamp_millis(2_000_000),
        };
        let json = serde_json::to_string(&stats).unwrap();
        assert!(json.contains("\"hit_rate\":0.8"));
        assert!(json.contains("\"size\":2"));
        assert!(json.contains("oldest_entry"));
    }
}
