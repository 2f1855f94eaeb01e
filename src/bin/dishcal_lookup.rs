// ABOUTME: CLI entry point for one-off dish calorie lookups
// ABOUTME: Resolves a dish name and prints the JSON response
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Async-IO.org

//! One-off dish calorie lookup from the command line.
//!
//! ```text
//! USDA_API_KEY=... dishcal-lookup "grilled chicken" --servings 2
//! ```

use clap::Parser;
use dishcal::cache::ResolutionCache;
use dishcal::config::AppConfig;
use dishcal::errors::ErrorResponse;
use dishcal::external::UsdaClient;
use dishcal::logging::LoggingConfig;
use dishcal::resolver::DishResolver;
use dishcal::service::{CalorieRequest, CalorieService, CallerContext};
use std::sync::Arc;

#[derive(Debug, Parser)]
#[command(name = "dishcal-lookup", about = "Resolve a dish name to calories")]
struct Args {
    /// Free-text dish name to resolve
    dish_name: String,

    /// Number of servings
    #[arg(long, default_value_t = 1)]
    servings: u32,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    LoggingConfig::from_env().init()?;
    let config = AppConfig::from_env()?;

    let cache = ResolutionCache::new(&config.cache);
    let client = UsdaClient::new(config.usda.clone());
    let resolver = DishResolver::new(Arc::new(client), cache, config.page_size);
    let service = CalorieService::new(resolver);

    let request = CalorieRequest {
        dish_name: args.dish_name,
        servings: args.servings,
    };

    match service
        .get_calories(&request, &CallerContext::anonymous())
        .await
    {
        Ok(response) => {
            println!("{}", serde_json::to_string_pretty(&response)?);
            Ok(())
        }
        Err(error) => {
            let status = error.http_status();
            eprintln!(
                "{}",
                serde_json::to_string_pretty(&ErrorResponse::from(error))?
            );
            std::process::exit(if status == 404 { 1 } else { 2 });
        }
    }
}
