// ABOUTME: Dish resolution orchestrator composing cache, search, match, extract
// ABOUTME: Caches positive and negative outcomes under normalized dish names
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Async-IO.org

//! # Dish Resolver
//!
//! Composes the resolution pipeline into the single operation "resolve
//! calories for dish name". Per call:
//!
//! 1. Normalize the key; a cache hit (including a cached negative) is
//!    terminal and makes no network access.
//! 2. On a miss, query the upstream search. A failure or empty result set
//!    caches a negative outcome.
//! 3. Select the best candidate; no confident match caches a negative.
//! 4. Extract calories from the winner. A confident match without a usable
//!    calorie figure is still a *positive* resolution.
//! 5. Assemble, cache, and return the resolution.
//!
//! Concurrent misses for the same key may each query upstream and each write
//! the cache; the last writer wins. There is no single-flight deduplication.

use crate::cache::{normalize_key, CachedOutcome, ResolutionCache};
use crate::external::FoodSearchProvider;
use crate::matching::select_best;
use crate::models::CalorieResolution;
use crate::nutrients::extract_calories;
use std::sync::Arc;

/// Orchestrates dish-name resolution over an injected search provider and
/// cache handle.
pub struct DishResolver {
    search: Arc<dyn FoodSearchProvider>,
    cache: ResolutionCache,
    page_size: u32,
}

impl DishResolver {
    /// Create a resolver from its collaborators.
    ///
    /// The cache handle is shared: clones passed to other resolvers observe
    /// the same entries.
    pub fn new(search: Arc<dyn FoodSearchProvider>, cache: ResolutionCache, page_size: u32) -> Self {
        Self {
            search,
            cache,
            page_size,
        }
    }

    /// Resolve a dish name to a calorie resolution, or `None` when no
    /// confident match exists.
    ///
    /// Upstream failures are absorbed here: they log a warning, cache a
    /// negative outcome, and resolve to `None` exactly like an empty result
    /// set.
    pub async fn resolve_dish(&self, dish_name: &str) -> Option<CalorieResolution> {
        let key = normalize_key(dish_name);

        if let Some(outcome) = self.cache.get(&key).await {
            tracing::debug!(%key, "resolution cache hit");
            return match outcome {
                CachedOutcome::Resolved(resolution) => Some(resolution),
                CachedOutcome::NotFound => None,
            };
        }

        let foods = match self.search.search(dish_name, self.page_size).await {
            Ok(foods) => foods,
            Err(e) => {
                tracing::warn!(%key, error = %e, "upstream search failed; caching negative outcome");
                self.cache.put(key, CachedOutcome::NotFound).await;
                return None;
            }
        };

        if foods.is_empty() {
            tracing::debug!(%key, "upstream returned no candidates");
            self.cache.put(key, CachedOutcome::NotFound).await;
            return None;
        }

        let Some(best) = select_best(dish_name, &foods) else {
            tracing::debug!(%key, "no confident match among candidates");
            self.cache.put(key, CachedOutcome::NotFound).await;
            return None;
        };

        tracing::debug!(
            %key,
            score = best.score,
            matched_query = %best.matched_query,
            fdc_id = ?best.food.fdc_id,
            "selected candidate"
        );

        // May legitimately be None: a confident text match with no usable
        // nutrient data still resolves positively.
        let calories_per_unit = extract_calories(best.food);

        let resolution = CalorieResolution {
            source_id: best.food.fdc_id,
            description: best.food.description.clone(),
            data_type: best.food.data_type.clone(),
            brand_owner: best.food.brand_owner.clone(),
            calories_per_unit,
            raw: best.food.clone(),
        };

        self.cache
            .put(key, CachedOutcome::Resolved(resolution.clone()))
            .await;

        Some(resolution)
    }
}

impl std::fmt::Debug for DishResolver {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DishResolver")
            .field("page_size", &self.page_size)
            .finish_non_exhaustive()
    }
}
