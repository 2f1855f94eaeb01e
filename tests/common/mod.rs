// ABOUTME: Shared test fixtures for integration tests
// ABOUTME: Mock food search provider with call counting
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Async-IO.org

#![allow(dead_code)]

use async_trait::async_trait;
use dishcal::cache::{CacheConfig, ResolutionCache};
use dishcal::errors::{AppError, AppResult};
use dishcal::external::FoodSearchProvider;
use dishcal::models::FoodCandidate;
use dishcal::resolver::DishResolver;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

/// Mock food search provider (no network access).
///
/// Counts upstream calls so tests can assert how often the resolver
/// actually reached past the cache.
pub struct MockFoodSearch {
    foods: Vec<FoodCandidate>,
    fail: bool,
    calls: AtomicUsize,
}

impl MockFoodSearch {
    /// Provider that returns the given candidate list on every call
    pub fn returning(foods: Vec<FoodCandidate>) -> Arc<Self> {
        Arc::new(Self {
            foods,
            fail: false,
            calls: AtomicUsize::new(0),
        })
    }

    /// Provider that fails every call with an external service error
    pub fn failing() -> Arc<Self> {
        Arc::new(Self {
            foods: Vec::new(),
            fail: true,
            calls: AtomicUsize::new(0),
        })
    }

    /// Number of upstream search calls observed
    pub fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl FoodSearchProvider for MockFoodSearch {
    async fn search(&self, _query: &str, _page_size: u32) -> AppResult<Vec<FoodCandidate>> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if self.fail {
            return Err(AppError::external_service("USDA API", "connection refused"));
        }
        Ok(self.foods.clone())
    }
}

/// Build a candidate from raw USDA-shaped JSON
pub fn food(value: serde_json::Value) -> FoodCandidate {
    serde_json::from_value(value).expect("test candidate should deserialize")
}

/// Resolver over the given provider with a default-sized cache
pub fn test_resolver(search: Arc<MockFoodSearch>) -> DishResolver {
    DishResolver::new(search, ResolutionCache::new(&CacheConfig::default()), 25)
}
