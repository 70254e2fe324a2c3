//! Response Cache Service
//!
//! The shared handle through which callers use the cache. Owns the store
//! behind an `Arc<RwLock<..>>` and the background sweep task's lifecycle.
//!
//! There is deliberately no ambient global instance: the handle is built
//! once at the application's composition root and injected into the
//! callers that need it. Cloning the handle shares the same store; the
//! sweep task belongs to the handle that created it.

use std::sync::Arc;

use tokio::sync::RwLock;
use tokio::task::JoinHandle;
use tracing::debug;

use crate::cache::{CacheStats, CacheStore};
use crate::config::{CacheConfig, CacheConfigUpdate};
use crate::error::Result;
use crate::tasks::spawn_sweep_task;

// == Response Cache ==
/// Shared, sweep-backed response cache handle.
///
/// Every operation takes the store lock for its full duration, so reads,
/// writes, and the background sweep are atomic with respect to each other.
/// Operations other than configuration updates never fail: an unusable
/// cache degrades to misses, never to caller-visible errors.
pub struct ResponseCache<V> {
    /// Shared cache store, also held by the sweep task
    store: Arc<RwLock<CacheStore<V>>>,
    /// Sweep task handle; present only on the owning (non-cloned) handle
    sweep: Option<JoinHandle<()>>,
}

impl<V> ResponseCache<V>
where
    V: Clone + Send + Sync + 'static,
{
    // == Constructor ==
    /// Creates a cache with the given configuration and starts its sweep task.
    ///
    /// Rejects invalid configuration (any zero bound). Must be called from
    /// within a tokio runtime, since the sweep task is spawned here.
    pub fn new(config: CacheConfig) -> Result<Self> {
        config.validate()?;
        let store = Arc::new(RwLock::new(CacheStore::new(config.clone())));
        let sweep = spawn_sweep_task(store.clone(), config.cleanup_interval_ms);
        Ok(Self {
            store,
            sweep: Some(sweep),
        })
    }

    // == Get ==
    /// Looks up the cached response for a query.
    ///
    /// Returns `None` on a miss or when the entry has outlived the TTL;
    /// a stale entry is removed as a side effect of the read.
    pub async fn get(&self, query: &str) -> Option<V> {
        let mut store = self.store.write().await;
        store.get(query)
    }

    // == Set ==
    /// Stores a response for a query, evicting under capacity pressure.
    pub async fn set(&self, query: &str, value: V, metadata: Option<serde_json::Value>) {
        let mut store = self.store.write().await;
        store.set(query, value, metadata);
    }

    // == Clear ==
    /// Empties the cache and resets all statistics counters.
    pub async fn clear(&self) {
        let mut store = self.store.write().await;
        store.clear();
    }

    // == Stats ==
    /// Returns a snapshot of cache state and performance.
    pub async fn stats(&self) -> CacheStats {
        let store = self.store.read().await;
        store.stats()
    }

    // == Update Config ==
    /// Merges a partial configuration update into the live configuration.
    ///
    /// The sweep interval captured at construction is not rescheduled; a
    /// new `cleanup_interval_ms` applies to caches built after the update.
    pub async fn update_config(&self, update: &CacheConfigUpdate) -> Result<()> {
        let mut store = self.store.write().await;
        store.update_config(update)
    }

    // == Shutdown ==
    /// Stops the background sweep task.
    ///
    /// Called as part of orderly process shutdown so the sweep never keeps
    /// the runtime alive. Idempotent; also runs on drop.
    pub fn shutdown(&mut self) {
        if let Some(handle) = self.sweep.take() {
            handle.abort();
            debug!("Sweep task stopped");
        }
    }
}

impl<V> Clone for ResponseCache<V> {
    /// Clones share the store; the sweep task stays with the original handle.
    fn clone(&self) -> Self {
        Self {
            store: self.store.clone(),
            sweep: None,
        }
    }
}

impl<V> Drop for ResponseCache<V> {
    fn drop(&mut self) {
        if let Some(handle) = self.sweep.take() {
            handle.abort();
        }
    }
}

// == Unit Tests ==
#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    fn test_config() -> CacheConfig {
        CacheConfig {
            max_size: 10,
            ttl_ms: 60_000,
            cleanup_interval_ms: 60_000,
        }
    }

    #[tokio::test]
    async fn test_service_roundtrip() {
        let cache: ResponseCache<String> = ResponseCache::new(test_config()).unwrap();

        cache.set("query", "answer".to_string(), None).await;

        assert_eq!(cache.get("query").await, Some("answer".to_string()));
        assert_eq!(cache.get("other").await, None);
    }

    #[tokio::test]
    async fn test_service_rejects_invalid_config() {
        let config = CacheConfig {
            max_size: 0,
            ..test_config()
        };
        assert!(ResponseCache::<String>::new(config).is_err());
    }

    #[tokio::test]
    async fn test_service_clear() {
        let cache: ResponseCache<String> = ResponseCache::new(test_config()).unwrap();

        cache.set("query", "answer".to_string(), None).await;
        cache.clear().await;

        assert_eq!(cache.get("query").await, None);
        assert_eq!(cache.stats().await.size, 0);
    }

    #[tokio::test]
    async fn test_service_stats() {
        let cache: ResponseCache<String> = ResponseCache::new(test_config()).unwrap();

        cache.set("query", "answer".to_string(), None).await;
        cache.get("query").await;
        cache.get("missing").await;

        let stats = cache.stats().await;
        assert_eq!(stats.size, 1);
        assert_eq!(stats.max_size, 10);
        assert_eq!(stats.hits, 1);
        assert_eq!(stats.misses, 1);
        assert_eq!(stats.total_queries, 2);
    }

    #[tokio::test]
    async fn test_service_update_config() {
        let cache: ResponseCache<String> = ResponseCache::new(test_config()).unwrap();

        cache
            .update_config(&CacheConfigUpdate {
                max_size: Some(2),
                ..Default::default()
            })
            .await
            .unwrap();

        cache.set("a", "1".to_string(), None).await;
        cache.set("b", "2".to_string(), None).await;
        cache.set("c", "3".to_string(), None).await;

        assert!(cache.stats().await.size <= 2);
    }

    #[tokio::test]
    async fn test_service_clone_shares_store() {
        let cache: ResponseCache<String> = ResponseCache::new(test_config()).unwrap();
        let clone = cache.clone();

        cache.set("query", "answer".to_string(), None).await;

        assert_eq!(clone.get("query").await, Some("answer".to_string()));
    }

    #[tokio::test]
    async fn test_service_shutdown_stops_sweep() {
        let mut cache: ResponseCache<String> = ResponseCache::new(test_config()).unwrap();

        cache.shutdown();
        // shutdown is idempotent
        cache.shutdown();

        // Cache still usable as a plain store after the sweep stops
        cache.set("query", "answer".to_string(), None).await;
        assert_eq!(cache.get("query").await, Some("answer".to_string()));
    }

    #[tokio::test]
    async fn test_service_drop_aborts_sweep() {
        let cache: ResponseCache<String> = ResponseCache::new(CacheConfig {
            cleanup_interval_ms: 10,
            ..test_config()
        })
        .unwrap();
        let store = cache.store.clone();

        drop(cache);
        tokio::time::sleep(Duration::from_millis(50)).await;

        // Only our reference remains once the sweep task is gone
        assert_eq!(Arc::strong_count(&store), 1);
    }
}
