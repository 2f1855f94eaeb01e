// ABOUTME: Resolution cache abstraction with TTL expiry and LRU eviction
// ABOUTME: Caches positive and negative dish resolutions under normalized keys
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Async-IO.org

//! # Resolution Cache
//!
//! Memoizes the outcome of a full dish-name resolution for a bounded time
//! window. Negative outcomes are cached explicitly so a failed lookup for
//! the same key is not retried until the entry expires. The cache is an
//! injectable service handle constructed once at process start and shared
//! by cloning; it is never persisted and starts empty on restart.

/// In-memory cache implementation
pub mod memory;

pub use memory::ResolutionCache;

use crate::constants::cache::{DEFAULT_MAX_ENTRIES, DEFAULT_TTL_SECS};
use crate::models::CalorieResolution;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Cache configuration
#[derive(Debug, Clone)]
pub struct CacheConfig {
    /// Time-to-live for each entry
    pub ttl: Duration,
    /// Maximum number of entries before LRU eviction
    pub max_entries: usize,
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            ttl: Duration::from_secs(DEFAULT_TTL_SECS),
            max_entries: DEFAULT_MAX_ENTRIES,
        }
    }
}

/// A cached resolution outcome.
///
/// `NotFound` records that a lookup already ran and produced nothing — a
/// cached negative is distinct from a key that is absent from the cache.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum CachedOutcome {
    /// A confident match, possibly without a usable calorie figure
    Resolved(CalorieResolution),
    /// Upstream failure, empty result set, or no confident match
    NotFound,
}

/// Normalize a dish name into its cache key: trimmed and lower-cased.
pub fn normalize_key(dish_name: &str) -> String {
    dish_name.trim().to_lowercase()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_key() {
        assert_eq!(normalize_key("  Chicken Breast  "), "chicken breast");
        assert_eq!(normalize_key("RICE"), "rice");
        assert_eq!(normalize_key("rice"), "rice");
    }
}
