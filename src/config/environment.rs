// ABOUTME: Environment configuration management for deployment-specific settings
// ABOUTME: Parses upstream credentials, page size, and cache sizing from env vars
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Async-IO.org

//! Environment-based configuration management
//!
//! | Variable | Default | Meaning |
//! |----------|---------|---------|
//! | `USDA_API_KEY` | required | Upstream API credential |
//! | `USDA_BASE_URL` | `https://api.nal.usda.gov/fdc/v1` | Upstream base URL |
//! | `USDA_PAGE_SIZE` | `25` | Search results requested per query |
//! | `USDA_TIMEOUT_SECS` | `10` | Upstream request timeout |
//! | `USDA_RATE_LIMIT_PER_MINUTE` | `30` | Outbound request budget |
//! | `CACHE_TTL_SECS` | `600` | Resolution cache TTL |
//! | `CACHE_MAX_ENTRIES` | `1024` | Resolution cache capacity |

use crate::cache::CacheConfig;
use crate::constants::{cache, usda};
use crate::errors::{AppError, AppResult, ErrorCode};
use crate::external::UsdaClientConfig;
use std::env;
use std::str::FromStr;
use std::time::Duration;

/// Complete runtime configuration for the service core.
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Upstream USDA client settings
    pub usda: UsdaClientConfig,
    /// Resolution cache settings
    pub cache: CacheConfig,
    /// Search results requested per resolution
    pub page_size: u32,
}

impl AppConfig {
    /// Load configuration from environment variables.
    ///
    /// # Errors
    ///
    /// Returns `ConfigMissing` when `USDA_API_KEY` is unset and
    /// `ConfigInvalid` when a numeric variable does not parse.
    pub fn from_env() -> AppResult<Self> {
        let api_key = env::var("USDA_API_KEY").map_err(|_| {
            AppError::new(
                ErrorCode::ConfigMissing,
                "USDA_API_KEY environment variable is required",
            )
        })?;

        let base_url = env_var_or("USDA_BASE_URL", usda::DEFAULT_BASE_URL);
        let page_size = parse_env_or("USDA_PAGE_SIZE", usda::DEFAULT_PAGE_SIZE)?;
        let timeout_secs = parse_env_or("USDA_TIMEOUT_SECS", usda::DEFAULT_TIMEOUT_SECS)?;
        let rate_limit =
            parse_env_or("USDA_RATE_LIMIT_PER_MINUTE", usda::DEFAULT_RATE_LIMIT_PER_MINUTE)?;
        let cache_ttl_secs = parse_env_or("CACHE_TTL_SECS", cache::DEFAULT_TTL_SECS)?;
        let cache_max_entries = parse_env_or("CACHE_MAX_ENTRIES", cache::DEFAULT_MAX_ENTRIES)?;

        if page_size == 0 || page_size > usda::MAX_PAGE_SIZE {
            return Err(AppError::new(
                ErrorCode::ConfigInvalid,
                format!(
                    "USDA_PAGE_SIZE must be between 1 and {}",
                    usda::MAX_PAGE_SIZE
                ),
            ));
        }

        Ok(Self {
            usda: UsdaClientConfig {
                api_key,
                base_url,
                timeout: Duration::from_secs(timeout_secs),
                rate_limit_per_minute: rate_limit,
            },
            cache: CacheConfig {
                ttl: Duration::from_secs(cache_ttl_secs),
                max_entries: cache_max_entries,
            },
            page_size,
        })
    }
}

/// Read an environment variable with a fallback default
fn env_var_or(key: &str, default: &str) -> String {
    env::var(key).unwrap_or_else(|_| default.to_owned())
}

/// Parse an environment variable into `T`, falling back to `default` when
/// unset and failing when set but unparsable
fn parse_env_or<T: FromStr>(key: &str, default: T) -> AppResult<T> {
    match env::var(key) {
        Ok(raw) => raw.trim().parse().map_err(|_| {
            AppError::new(
                ErrorCode::ConfigInvalid,
                format!("{key} has an invalid value: {raw}"),
            )
        }),
        Err(_) => Ok(default),
    }
}
