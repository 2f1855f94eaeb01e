// ABOUTME: Configuration management for the dishcal service
// ABOUTME: Environment-only configuration, no config files
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Async-IO.org

//! Configuration management
//!
//! All configuration is supplied through environment variables; the core
//! consumes these values but does not own them.

/// Environment-based configuration parsing
pub mod environment;

pub use environment::AppConfig;
