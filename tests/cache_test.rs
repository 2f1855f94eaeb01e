// ABOUTME: Integration tests for the resolution cache
// ABOUTME: Covers TTL expiration, LRU eviction, and negative outcome storage
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Async-IO.org

use dishcal::cache::{CacheConfig, CachedOutcome, ResolutionCache};
use dishcal::models::{CalorieResolution, FoodCandidate};
use std::time::Duration;

fn resolution(calories: Option<f64>) -> CalorieResolution {
    CalorieResolution {
        source_id: Some(1),
        description: Some("Rice".to_owned()),
        data_type: None,
        brand_owner: None,
        calories_per_unit: calories,
        raw: FoodCandidate::default(),
    }
}

fn test_cache(ttl: Duration, max_entries: usize) -> ResolutionCache {
    ResolutionCache::new(&CacheConfig { ttl, max_entries })
}

#[tokio::test]
async fn test_put_and_get_positive_outcome() {
    let cache = test_cache(Duration::from_secs(600), 16);
    let outcome = CachedOutcome::Resolved(resolution(Some(130.0)));

    cache.put("rice".to_owned(), outcome.clone()).await;

    assert_eq!(cache.get("rice").await, Some(outcome));
    assert_eq!(cache.len().await, 1);
}

#[tokio::test]
async fn test_negative_outcome_is_distinct_from_absent() {
    let cache = test_cache(Duration::from_secs(600), 16);

    assert_eq!(cache.get("unknown dish").await, None);

    cache
        .put("unknown dish".to_owned(), CachedOutcome::NotFound)
        .await;

    assert_eq!(cache.get("unknown dish").await, Some(CachedOutcome::NotFound));
}

#[tokio::test]
async fn test_entries_expire_after_ttl() {
    let cache = test_cache(Duration::from_millis(50), 16);

    cache
        .put("rice".to_owned(), CachedOutcome::Resolved(resolution(Some(130.0))))
        .await;

    assert!(cache.get("rice").await.is_some());

    tokio::time::sleep(Duration::from_millis(80)).await;

    assert_eq!(cache.get("rice").await, None);
}

#[tokio::test]
async fn test_capacity_overflow_evicts_least_recently_used() {
    let cache = test_cache(Duration::from_secs(600), 2);

    cache.put("a".to_owned(), CachedOutcome::NotFound).await;
    cache.put("b".to_owned(), CachedOutcome::NotFound).await;

    // Touch "a" so "b" becomes the least recently used entry.
    assert!(cache.get("a").await.is_some());

    cache.put("c".to_owned(), CachedOutcome::NotFound).await;

    assert_eq!(cache.len().await, 2);
    assert!(cache.get("a").await.is_some());
    assert_eq!(cache.get("b").await, None);
    assert!(cache.get("c").await.is_some());
}

#[tokio::test]
async fn test_put_overwrites_existing_entry() {
    let cache = test_cache(Duration::from_secs(600), 16);

    cache.put("rice".to_owned(), CachedOutcome::NotFound).await;
    cache
        .put("rice".to_owned(), CachedOutcome::Resolved(resolution(Some(130.0))))
        .await;

    assert_eq!(cache.len().await, 1);
    assert!(matches!(
        cache.get("rice").await,
        Some(CachedOutcome::Resolved(_))
    ));
}

#[tokio::test]
async fn test_clear_empties_the_cache() {
    let cache = test_cache(Duration::from_secs(600), 16);

    cache.put("a".to_owned(), CachedOutcome::NotFound).await;
    cache.put("b".to_owned(), CachedOutcome::NotFound).await;
    cache.clear().await;

    assert!(cache.is_empty().await);
    assert_eq!(cache.get("a").await, None);
}
