// ABOUTME: In-memory resolution cache with LRU eviction and TTL support
// ABOUTME: Shared across concurrent resolutions via Arc<RwLock<LruCache>>
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Async-IO.org

use super::{CacheConfig, CachedOutcome};
use lru::LruCache;
use std::num::NonZeroUsize;
use std::sync::Arc;
use std::time::{Duration, Instant};
use tokio::sync::RwLock;

/// Cache entry with expiration
#[derive(Debug, Clone)]
struct CacheEntry {
    outcome: CachedOutcome,
    expires_at: Instant,
}

impl CacheEntry {
    fn new(outcome: CachedOutcome, ttl: Duration) -> Self {
        Self {
            outcome,
            expires_at: Instant::now() + ttl,
        }
    }

    fn is_expired(&self) -> bool {
        Instant::now() >= self.expires_at
    }
}

/// In-memory resolution cache with LRU eviction.
///
/// Uses `Arc<RwLock<LruCache>>` so clones of the handle share one store
/// across concurrent resolution calls. `LruCache` provides O(1) eviction of
/// the least-recently-used entry when the capacity bound is reached.
#[derive(Clone)]
pub struct ResolutionCache {
    store: Arc<RwLock<LruCache<String, CacheEntry>>>,
    ttl: Duration,
}

impl ResolutionCache {
    /// Fallback capacity when config specifies zero entries
    const DEFAULT_CAPACITY: NonZeroUsize = match NonZeroUsize::new(1024) {
        Some(n) => n,
        None => unreachable!(),
    };

    /// Create a new cache sized and timed by `config`
    #[must_use]
    pub fn new(config: &CacheConfig) -> Self {
        let capacity = NonZeroUsize::new(config.max_entries).unwrap_or(Self::DEFAULT_CAPACITY);

        Self {
            store: Arc::new(RwLock::new(LruCache::new(capacity))),
            ttl: config.ttl,
        }
    }

    /// Look up the cached outcome for a normalized key.
    ///
    /// Returns `None` when the key is absent or its entry has expired;
    /// expired entries are removed on the way out. A hit refreshes the
    /// entry's LRU position.
    pub async fn get(&self, key: &str) -> Option<CachedOutcome> {
        let mut store = self.store.write().await;

        // LruCache::get is mutable (updates access order for LRU)
        if let Some(entry) = store.get(key) {
            if entry.is_expired() {
                store.pop(key);
                return None;
            }
            return Some(entry.outcome.clone());
        }

        None
    }

    /// Store an outcome under a normalized key, evicting the
    /// least-recently-used entry when the cache is full.
    pub async fn put(&self, key: String, outcome: CachedOutcome) {
        let entry = CacheEntry::new(outcome, self.ttl);
        // LruCache handles eviction automatically on push
        self.store.write().await.push(key, entry);
    }

    /// Current number of entries, expired or not
    pub async fn len(&self) -> usize {
        self.store.read().await.len()
    }

    /// Whether the cache holds no entries
    pub async fn is_empty(&self) -> bool {
        self.store.read().await.is_empty()
    }

    /// Remove all entries (useful for testing)
    pub async fn clear(&self) {
        self.store.write().await.clear();
    }
}

impl std::fmt::Debug for ResolutionCache {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ResolutionCache")
            .field("ttl", &self.ttl)
            .finish_non_exhaustive()
    }
}
