// ABOUTME: USDA FoodData Central API client for food search
// ABOUTME: Implements rate limiting and failure absorption into error values
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Async-IO.org

//! USDA `FoodData` Central API Client
//!
//! This module provides a client for the USDA `FoodData` Central search
//! endpoint, which offers nutritional information for foods. The API is free
//! and requires no authentication beyond an API key.
//!
//! Network errors, timeouts, and non-success statuses are converted into
//! [`AppError`] values and logged; nothing in this module panics or raises a
//! fault across the component boundary. The resolver treats any error from
//! [`FoodSearchProvider::search`] the same as an empty result set.
//!
//! # API Reference
//! USDA `FoodData` Central API: <https://fdc.nal.usda.gov/api-guide.html>

use crate::constants::usda::{
    DEFAULT_BASE_URL, DEFAULT_RATE_LIMIT_PER_MINUTE, DEFAULT_TIMEOUT_SECS, MAX_PAGE_SIZE,
};
use crate::errors::{AppError, AppResult};
use crate::models::FoodCandidate;
use async_trait::async_trait;
use serde::Deserialize;
use std::sync::Arc;
use std::time::{Duration, Instant};
use tokio::sync::RwLock;

/// Seam for the upstream food search.
///
/// The production implementation is [`UsdaClient`]; tests inject mocks to
/// exercise the resolution pipeline without network access.
#[async_trait]
pub trait FoodSearchProvider: Send + Sync {
    /// Search for foods matching a free-text query.
    ///
    /// # Errors
    ///
    /// Returns an error value when the query is invalid or the upstream
    /// request fails; callers absorb it as "no candidates".
    async fn search(&self, query: &str, page_size: u32) -> AppResult<Vec<FoodCandidate>>;
}

/// USDA API client configuration
#[derive(Debug, Clone)]
pub struct UsdaClientConfig {
    /// USDA API key (free from <https://fdc.nal.usda.gov/api-key-signup.html>)
    pub api_key: String,
    /// Base URL for USDA API (default: <https://api.nal.usda.gov/fdc/v1>)
    pub base_url: String,
    /// Request timeout (default: 10 seconds)
    pub timeout: Duration,
    /// Rate limit per minute (default: 30)
    pub rate_limit_per_minute: u32,
}

impl Default for UsdaClientConfig {
    fn default() -> Self {
        Self {
            api_key: String::new(),
            base_url: DEFAULT_BASE_URL.to_owned(),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            rate_limit_per_minute: DEFAULT_RATE_LIMIT_PER_MINUTE,
        }
    }
}

/// USDA API search response
#[derive(Debug, Deserialize, Default)]
#[serde(default)]
struct SearchResponse {
    foods: Vec<FoodCandidate>,
    // Pagination fields not currently exposed but part of USDA API contract
}

/// Rate limiter for API requests
#[derive(Debug)]
struct RateLimiter {
    requests: Vec<Instant>,
    limit: u32,
    window: Duration,
}

impl RateLimiter {
    const fn new(limit: u32, window: Duration) -> Self {
        Self {
            requests: Vec::new(),
            limit,
            window,
        }
    }

    /// Check if a request can be made, removing expired entries
    fn can_request(&mut self) -> bool {
        let now = Instant::now();
        self.requests
            .retain(|&t| now.duration_since(t) < self.window);
        self.requests.len() < self.limit as usize
    }

    /// Record a new request
    fn record_request(&mut self) {
        self.requests.push(Instant::now());
    }

    /// Wait until a request can be made
    async fn wait_if_needed(&mut self) {
        while !self.can_request() {
            tokio::time::sleep(Duration::from_secs(1)).await;
        }
    }
}

/// USDA `FoodData` Central search client
pub struct UsdaClient {
    config: UsdaClientConfig,
    http_client: reqwest::Client,
    rate_limiter: Arc<RwLock<RateLimiter>>,
}

impl UsdaClient {
    /// Create a new USDA API client
    #[must_use]
    pub fn new(config: UsdaClientConfig) -> Self {
        let rate_limiter = RateLimiter::new(config.rate_limit_per_minute, Duration::from_secs(60));

        Self {
            config,
            http_client: reqwest::Client::new(),
            rate_limiter: Arc::new(RwLock::new(rate_limiter)),
        }
    }

    async fn search_foods(&self, query: &str, page_size: u32) -> AppResult<Vec<FoodCandidate>> {
        if query.trim().is_empty() {
            return Err(AppError::invalid_input("Search query cannot be empty"));
        }

        if page_size == 0 || page_size > MAX_PAGE_SIZE {
            return Err(AppError::invalid_input(format!(
                "Page size must be between 1 and {MAX_PAGE_SIZE}"
            )));
        }

        // Wait for rate limit if needed
        {
            let mut limiter = self.rate_limiter.write().await;
            limiter.wait_if_needed().await;
            limiter.record_request();
        }

        let url = format!("{}/foods/search", self.config.base_url);
        let response = self
            .http_client
            .get(&url)
            .timeout(self.config.timeout)
            .query(&[
                ("query", query),
                ("pageSize", &page_size.to_string()),
                ("api_key", &self.config.api_key),
            ])
            .send()
            .await
            .map_err(|e| {
                tracing::warn!(error = %e, "USDA search request failed");
                AppError::external_service("USDA API", e.to_string())
            })?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            tracing::warn!(%status, "USDA search returned non-success status");
            return Err(AppError::external_service(
                "USDA API",
                format!("HTTP {status}: {body}"),
            ));
        }

        let search_response: SearchResponse = response.json().await.map_err(|e| {
            tracing::warn!(error = %e, "USDA search response was not valid JSON");
            AppError::external_service("USDA API", format!("JSON parse error: {e}"))
        })?;

        Ok(search_response.foods)
    }
}

#[async_trait]
impl FoodSearchProvider for UsdaClient {
    async fn search(&self, query: &str, page_size: u32) -> AppResult<Vec<FoodCandidate>> {
        self.search_foods(query, page_size).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_empty_query_is_rejected_before_any_request() {
        let client = UsdaClient::new(UsdaClientConfig::default());
        let err = client.search("   ", 25).await.unwrap_err();
        assert_eq!(err.code, crate::errors::ErrorCode::InvalidInput);
    }

    #[tokio::test]
    async fn test_page_size_bounds_are_enforced() {
        let client = UsdaClient::new(UsdaClientConfig::default());
        assert!(client.search("rice", 0).await.is_err());
        assert!(client.search("rice", MAX_PAGE_SIZE + 1).await.is_err());
    }

    #[test]
    fn test_rate_limiter_blocks_at_limit() {
        let mut limiter = RateLimiter::new(2, Duration::from_secs(60));
        assert!(limiter.can_request());
        limiter.record_request();
        assert!(limiter.can_request());
        limiter.record_request();
        assert!(!limiter.can_request());
    }

    #[test]
    fn test_search_response_tolerates_missing_foods_array() {
        let response: SearchResponse = serde_json::from_str("{}").unwrap();
        assert!(response.foods.is_empty());
    }
}
