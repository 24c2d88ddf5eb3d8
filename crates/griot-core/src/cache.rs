//! Process-local memoised fetches with TTL expiry.
//!
//! Entries are keyed by [`FilterSet::cache_key`] and hold a type-erased value
//! until their expiry instant. Stale entries are never swept in the
//! background; they are overwritten by the next fetch for the same key. A
//! configurable entry cap bounds growth when many distinct filter shapes are
//! queried.
//!
//! The map sits behind an async `RwLock`. Lookups and inserts are each atomic
//! but the lock is not held across the fetch itself, so two concurrent misses
//! on one key may both fetch; the last writer wins, which is harmless because
//! a fetch for a given key is idempotent.

use crate::config::CacheConfig;
use crate::filter::FilterSet;
use crate::types::Collection;
use serde::Serialize;
use std::any::Any;
use std::collections::HashMap;
use std::future::Future;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::RwLock;
use tokio::time::Instant;

/// Default time-to-live for cache entries.
pub const DEFAULT_TTL: Duration = Duration::from_secs(5 * 60);

type Value = Arc<dyn Any + Send + Sync>;

struct CacheEntry {
    value: Value,
    expires_at: Instant,
}

/// Snapshot returned by [`ContentCache::debug_info`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CacheDebugInfo {
    pub size: usize,
    /// Keys currently held, sorted. Includes stale entries not yet overwritten.
    pub keys: Vec<String>,
}

pub struct ContentCache {
    entries: RwLock<HashMap<String, CacheEntry>>,
    ttl: Duration,
    /// `None` means unbounded.
    max_entries: Option<usize>,
}

impl Default for ContentCache {
    fn default() -> Self {
        Self::new(DEFAULT_TTL)
    }
}

impl ContentCache {
    /// An unbounded cache with the given TTL.
    pub fn new(ttl: Duration) -> Self {
        Self {
            entries: RwLock::new(HashMap::new()),
            ttl,
            max_entries: None,
        }
    }

    pub fn from_config(config: &CacheConfig) -> Self {
        Self::new(config.ttl()).with_max_entries(config.max_entries)
    }

    /// Cap the number of entries. `0` leaves the cache unbounded.
    pub fn with_max_entries(mut self, max_entries: usize) -> Self {
        self.max_entries = (max_entries > 0).then_some(max_entries);
        self
    }

    pub fn ttl(&self) -> Duration {
        self.ttl
    }

    /// Return the live value cached for `(collection, filters)`, or run
    /// `fetcher`, cache its output and return it.
    ///
    /// A failing fetcher leaves the cache untouched and its error is returned
    /// as-is; failures are never cached.
    pub async fn get_or_fetch<T, E, F, Fut>(
        &self,
        collection: Collection,
        filters: &FilterSet,
        fetcher: F,
    ) -> Result<Arc<T>, E>
    where
        T: Any + Send + Sync,
        F: FnOnce() -> Fut,
        Fut: Future<Output = Result<T, E>>,
    {
        let key = filters.cache_key(collection);

        if let Some(hit) = self.lookup::<T>(&key).await {
            tracing::trace!(%key, "cache hit");
            return Ok(hit);
        }

        tracing::debug!(%key, "cache miss");
        let started = Instant::now();
        let value = Arc::new(fetcher().await?);
        tracing::debug!(%key, elapsed_ms = started.elapsed().as_millis() as u64, "fetched");

        self.insert(key, value.clone() as Value).await;
        Ok(value)
    }

    async fn lookup<T: Any + Send + Sync>(&self, key: &str) -> Option<Arc<T>> {
        let entries = self.entries.read().await;
        let entry = entries.get(key)?;
        if Instant::now() >= entry.expires_at {
            return None;
        }
        entry.value.clone().downcast::<T>().ok()
    }

    async fn insert(&self, key: String, value: Value) {
        let now = Instant::now();
        let mut entries = self.entries.write().await;

        if let Some(max) = self.max_entries {
            if !entries.contains_key(&key) && entries.len() >= max {
                entries.retain(|_, e| e.expires_at > now);
                if entries.len() >= max {
                    let soonest = entries
                        .iter()
                        .min_by_key(|(_, e)| e.expires_at)
                        .map(|(k, _)| k.clone());
                    if let Some(evicted) = soonest {
                        tracing::debug!(key = %evicted, "cache full, evicting");
                        entries.remove(&evicted);
                    }
                }
            }
        }

        entries.insert(
            key,
            CacheEntry {
                value,
                expires_at: now + self.ttl,
            },
        );
    }

    /// Drop every entry.
    pub async fn clear(&self) {
        let mut entries = self.entries.write().await;
        let dropped = entries.len();
        entries.clear();
        tracing::debug!(dropped, "cache cleared");
    }

    pub async fn debug_info(&self) -> CacheDebugInfo {
        let entries = self.entries.read().await;
        let mut keys: Vec<String> = entries.keys().cloned().collect();
        keys.sort();
        CacheDebugInfo {
            size: entries.len(),
            keys,
        }
    }
}
