// ABOUTME: Main library entry point for the dishcal calorie resolution service
// ABOUTME: Resolves free-text dish names to calorie estimates via USDA FoodData Central
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Async-IO.org

#![deny(unsafe_code)]

//! # dishcal
//!
//! A service core that resolves a free-text dish name to a calorie estimate.
//! The pipeline queries the USDA `FoodData` Central search API, fuzzy-matches
//! the best candidate record, extracts a calorie figure from heterogeneous
//! nutrient data, and caches the outcome (positive or negative) for a bounded
//! time window.
//!
//! ## Pipeline
//!
//! ```text
//! resolve -> cache lookup -> upstream search -> candidate selection
//!         -> calorie extraction -> cache store -> response assembly
//! ```
//!
//! Authentication, user management, and HTTP routing are intentionally not
//! part of this crate; the presentation layer supplies an authenticated
//! caller identity when invoking [`service::CalorieService`].
//!
//! ## Example Usage
//!
//! ```rust,no_run
//! use std::sync::Arc;
//! use dishcal::cache::ResolutionCache;
//! use dishcal::config::AppConfig;
//! use dishcal::external::UsdaClient;
//! use dishcal::resolver::DishResolver;
//! use dishcal::service::{CalorieRequest, CalorieService, CallerContext};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), dishcal::errors::AppError> {
//!     let config = AppConfig::from_env()?;
//!     let cache = ResolutionCache::new(&config.cache);
//!     let client = UsdaClient::new(config.usda.clone());
//!     let resolver = DishResolver::new(Arc::new(client), cache, config.page_size);
//!     let service = CalorieService::new(resolver);
//!
//!     let request = CalorieRequest {
//!         dish_name: "grilled chicken".to_owned(),
//!         servings: 2,
//!     };
//!     let response = service
//!         .get_calories(&request, &CallerContext::anonymous())
//!         .await?;
//!     println!("{} kcal total", response.total_calories);
//!     Ok(())
//! }
//! ```

/// Resolution cache with TTL expiry and LRU eviction
pub mod cache;

/// Environment-based configuration management
pub mod config;

/// Application constants and default values
pub mod constants;

/// Unified error handling system with standard error codes and HTTP responses
pub mod errors;

/// External API clients (USDA `FoodData` Central)
pub mod external;

/// Production logging and structured output
pub mod logging;

/// Fuzzy candidate selection over upstream food records
pub mod matching;

/// Common data models for food candidates and resolutions
pub mod models;

/// Calorie extraction from heterogeneous nutrient records
pub mod nutrients;

/// Dish resolution orchestration
pub mod resolver;

/// Caller-facing calorie lookup service and response assembly
pub mod service;
