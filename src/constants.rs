// ABOUTME: Application constants and default configuration values
// ABOUTME: Upstream endpoint defaults, cache sizing, and matching thresholds
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Async-IO.org

//! Application constants
//!
//! Externally-supplied configuration (API key, page size, cache sizing) can
//! override most of these via environment variables; see [`crate::config`].

/// USDA `FoodData` Central upstream defaults
pub mod usda {
    /// Base URL for the USDA API
    pub const DEFAULT_BASE_URL: &str = "https://api.nal.usda.gov/fdc/v1";
    /// Default number of search results requested per query
    pub const DEFAULT_PAGE_SIZE: u32 = 25;
    /// Maximum page size accepted by the upstream API
    pub const MAX_PAGE_SIZE: u32 = 200;
    /// Request timeout in seconds
    pub const DEFAULT_TIMEOUT_SECS: u64 = 10;
    /// Sliding-window rate limit applied to outbound requests
    pub const DEFAULT_RATE_LIMIT_PER_MINUTE: u32 = 30;
    /// Source attribution used in calorie responses
    pub const SOURCE_NAME: &str = "USDA FoodData Central";
}

/// Resolution cache defaults
pub mod cache {
    /// Time-to-live for cached resolutions in seconds
    pub const DEFAULT_TTL_SECS: u64 = 600;
    /// Maximum number of cached resolutions before LRU eviction
    pub const DEFAULT_MAX_ENTRIES: usize = 1024;
}

/// Candidate matching thresholds
pub mod matching {
    /// Minimum token-set similarity score (0-100) for a confident match
    pub const MIN_CONFIDENCE_SCORE: u32 = 40;
}

/// Service boundary limits
pub mod service {
    /// Minimum number of non-whitespace characters in a dish name
    pub const MIN_DISH_NAME_CHARS: usize = 2;
    /// Maximum length of the ingredient text carried into a response
    pub const MAX_INGREDIENT_TEXT_CHARS: usize = 400;
}

/// Service identity for logging
pub mod service_names {
    /// Canonical service name used in structured log output
    pub const DISHCAL: &str = "dishcal";
}
