// ABOUTME: Integration tests for the dish resolution pipeline
// ABOUTME: Covers caching, negative outcomes, and upstream failure absorption
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Async-IO.org

use dishcal::cache::{CacheConfig, ResolutionCache};
use dishcal::resolver::DishResolver;
use serde_json::json;

mod common;

use common::{food, test_resolver, MockFoodSearch};

#[tokio::test]
async fn test_resolution_extracts_calories_from_best_match() {
    let search = MockFoodSearch::returning(vec![
        food(json!({
            "fdcId": 100,
            "description": "Apple",
            "foodCategory": "Fruit",
            "foodNutrients": [{"nutrientName": "Energy", "value": 52}]
        })),
        food(json!({
            "fdcId": 200,
            "description": "Rice",
            "dataType": "SR Legacy",
            "foodCategory": "Grain",
            "foodNutrients": [{"nutrientName": "Energy", "value": 130}]
        })),
    ]);
    let resolver = test_resolver(search);

    let resolution = resolver.resolve_dish("rice").await.unwrap();
    assert_eq!(resolution.source_id, Some(200));
    assert_eq!(resolution.description.as_deref(), Some("Rice"));
    assert_eq!(resolution.data_type.as_deref(), Some("SR Legacy"));
    assert_eq!(resolution.calories_per_unit, Some(130.0));
}

#[tokio::test]
async fn test_repeat_resolution_is_cached_and_byte_identical() {
    let search = MockFoodSearch::returning(vec![food(json!({
        "fdcId": 200,
        "description": "Rice",
        "foodNutrients": [{"nutrientName": "Energy", "value": 130}]
    }))]);
    let resolver = test_resolver(search.clone());

    let first = resolver.resolve_dish("rice").await.unwrap();
    let second = resolver.resolve_dish("rice").await.unwrap();

    assert_eq!(first, second);
    assert_eq!(
        serde_json::to_vec(&first).unwrap(),
        serde_json::to_vec(&second).unwrap()
    );
    assert_eq!(search.call_count(), 1);
}

#[tokio::test]
async fn test_cache_key_ignores_case_and_whitespace() {
    let search = MockFoodSearch::returning(vec![food(json!({
        "fdcId": 200,
        "description": "Rice",
        "foodNutrients": [{"nutrientName": "Energy", "value": 130}]
    }))]);
    let resolver = test_resolver(search.clone());

    let first = resolver.resolve_dish("Rice").await.unwrap();
    let second = resolver.resolve_dish("  rICE  ").await.unwrap();

    assert_eq!(first, second);
    assert_eq!(search.call_count(), 1);
}

#[tokio::test]
async fn test_empty_result_set_caches_negative_outcome() {
    let search = MockFoodSearch::returning(Vec::new());
    let resolver = test_resolver(search.clone());

    assert!(resolver.resolve_dish("unobtainium stew").await.is_none());
    assert!(resolver.resolve_dish("unobtainium stew").await.is_none());
    assert_eq!(search.call_count(), 1);
}

#[tokio::test]
async fn test_upstream_failure_resolves_to_none_and_is_cached() {
    let search = MockFoodSearch::failing();
    let resolver = test_resolver(search.clone());

    assert!(resolver.resolve_dish("rice").await.is_none());
    // The failure outcome is cached; no retry until the entry expires.
    assert!(resolver.resolve_dish("rice").await.is_none());
    assert_eq!(search.call_count(), 1);
}

#[tokio::test]
async fn test_low_confidence_match_caches_negative_outcome() {
    let search = MockFoodSearch::returning(vec![food(json!({
        "fdcId": 300,
        "description": "Asparagus, canned"
    }))]);
    let resolver = test_resolver(search.clone());

    assert!(resolver.resolve_dish("pepperoni pizza").await.is_none());
    assert!(resolver.resolve_dish("pepperoni pizza").await.is_none());
    assert_eq!(search.call_count(), 1);
}

#[tokio::test]
async fn test_confident_match_without_calories_is_a_positive_resolution() {
    let search = MockFoodSearch::returning(vec![food(json!({
        "fdcId": 400,
        "description": "Water, bottled",
        "foodNutrients": [{"nutrientName": "Protein", "value": 0}]
    }))]);
    let resolver = test_resolver(search.clone());

    let resolution = resolver.resolve_dish("water bottled").await.unwrap();
    assert_eq!(resolution.calories_per_unit, None);

    // Cached as a positive resolution, not retried.
    let again = resolver.resolve_dish("water bottled").await.unwrap();
    assert_eq!(resolution, again);
    assert_eq!(search.call_count(), 1);
}

#[tokio::test]
async fn test_expired_entry_triggers_a_fresh_upstream_call() {
    let search = MockFoodSearch::returning(vec![food(json!({
        "fdcId": 200,
        "description": "Rice",
        "foodNutrients": [{"nutrientName": "Energy", "value": 130}]
    }))]);
    let cache = ResolutionCache::new(&CacheConfig {
        ttl: std::time::Duration::from_millis(50),
        max_entries: 16,
    });
    let resolver = DishResolver::new(search.clone(), cache, 25);

    resolver.resolve_dish("rice").await.unwrap();
    tokio::time::sleep(std::time::Duration::from_millis(80)).await;
    resolver.resolve_dish("rice").await.unwrap();

    assert_eq!(search.call_count(), 2);
}

#[tokio::test]
async fn test_shared_cache_handle_is_observed_by_sibling_resolvers() {
    let cache = ResolutionCache::new(&CacheConfig::default());
    let search_a = MockFoodSearch::returning(vec![food(json!({
        "fdcId": 200,
        "description": "Rice",
        "foodNutrients": [{"nutrientName": "Energy", "value": 130}]
    }))]);
    let search_b = MockFoodSearch::returning(Vec::new());

    let resolver_a = DishResolver::new(search_a.clone(), cache.clone(), 25);
    let resolver_b = DishResolver::new(search_b.clone(), cache, 25);

    resolver_a.resolve_dish("rice").await.unwrap();
    // Resolver B sees A's cached entry and never calls its own provider.
    resolver_b.resolve_dish("rice").await.unwrap();

    assert_eq!(search_a.call_count(), 1);
    assert_eq!(search_b.call_count(), 0);
}
