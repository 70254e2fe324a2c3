//! TTL Sweep Task
//!
//! Background task that periodically removes expired cache entries.
//!
//! The sweep bounds worst-case memory growth even under a read-only
//! workload: lazy expiry on `get` only removes entries that are touched,
//! while the sweep walks everything on a fixed interval.

use std::sync::Arc;
use std::time::Duration;

use tokio::sync::RwLock;
use tokio::task::JoinHandle;
use tracing::{debug, info};

use crate::cache::CacheStore;

/// Spawns a background task that periodically purges expired cache entries.
///
/// The task loops forever, sleeping for the configured interval between
/// sweeps and taking the store's write lock for each sweep, so a sweep can
/// never interleave with an in-flight `get` or `set`.
///
/// Returns a JoinHandle that the owning `ResponseCache` aborts on shutdown;
/// the task is never left to rely on process-exit cleanup.
pub fn spawn_sweep_task<V>(
    store: Arc<RwLock<CacheStore<V>>>,
    cleanup_interval_ms: u64,
) -> JoinHandle<()>
where
    V: Clone + Send + Sync + 'static,
{
    let interval = Duration::from_millis(cleanup_interval_ms);

    tokio::spawn(async move {
        info!(
            "Starting TTL sweep task with interval of {} ms",
            cleanup_interval_ms
        );

        loop {
            tokio::time::sleep(interval).await;

            let removed = {
                let mut store_guard = store.write().await;
                store_guard.cleanup_expired()
            };

            if removed > 0 {
                info!("TTL sweep: removed {} expired entries", removed);
            } else {
                debug!("TTL sweep: no expired entries found");
            }
        }
    })
}
