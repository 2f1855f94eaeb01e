// ABOUTME: External API client modules (USDA FoodData Central)
// ABOUTME: Provides the upstream food-search integration

// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Async-IO.org

//! External API Clients
//!
//! This module contains clients for external APIs used by the dishcal
//! service core.

pub mod usda_client;

// Re-export commonly used types
pub use usda_client::{FoodSearchProvider, UsdaClient, UsdaClientConfig};
