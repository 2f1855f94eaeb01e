// ABOUTME: Caller-facing calorie lookup service and response assembly
// ABOUTME: Validates input, turns resolutions into per-serving responses
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Async-IO.org

//! # Calorie Service
//!
//! The boundary between the resolution core and the (external) presentation
//! layer. Input validation happens here, before the core is invoked; the
//! outcome is always either a populated calorie response or a uniform
//! not-found error — no partial states leak through.
//!
//! The caller identity is supplied by the excluded auth layer and used for
//! structured log context only.

use crate::constants::service::{MAX_INGREDIENT_TEXT_CHARS, MIN_DISH_NAME_CHARS};
use crate::constants::usda::SOURCE_NAME;
use crate::errors::{AppError, AppResult};
use crate::models::CalorieResolution;
use crate::resolver::DishResolver;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Authenticated caller identity supplied by the presentation layer.
#[derive(Debug, Clone)]
pub struct CallerContext {
    /// Authenticated user id
    pub user_id: Uuid,
    /// Request id for log correlation, when the transport provides one
    pub request_id: Option<String>,
}

impl CallerContext {
    /// Context for callers without an established identity (CLI, tests)
    #[must_use]
    pub fn anonymous() -> Self {
        Self {
            user_id: Uuid::new_v4(),
            request_id: None,
        }
    }
}

/// A calorie lookup request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CalorieRequest {
    /// Free-text dish name to resolve
    pub dish_name: String,
    /// Number of servings; must be positive
    pub servings: u32,
}

/// One entry of the optional ingredient breakdown.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IngredientBreakdown {
    /// Ingredient list text from the matched record
    pub name: String,
    /// Calories attributed per serving
    #[serde(skip_serializing_if = "Option::is_none")]
    pub calories_per_serving: Option<f64>,
    /// Quantity descriptor, when known
    #[serde(skip_serializing_if = "Option::is_none")]
    pub amount_descriptor: Option<String>,
}

/// A successful calorie lookup response.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CalorieResponse {
    /// The dish name as requested
    pub dish_name: String,
    /// Requested serving count
    pub servings: u32,
    /// Calories for a single serving
    pub calories_per_serving: f64,
    /// Calories across all requested servings
    pub total_calories: f64,
    /// Data source attribution
    pub source: String,
    /// Ingredient breakdown, when the matched record carries ingredient text
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ingredients: Option<Vec<IngredientBreakdown>>,
}

/// Caller-facing calorie lookup service.
#[derive(Debug)]
pub struct CalorieService {
    resolver: DishResolver,
}

impl CalorieService {
    /// Create the service over a configured resolver
    #[must_use]
    pub fn new(resolver: DishResolver) -> Self {
        Self { resolver }
    }

    /// Resolve a dish name and assemble the per-serving calorie response.
    ///
    /// # Errors
    ///
    /// Returns `InvalidInput` when the dish name has fewer than 2
    /// non-whitespace characters or `servings` is zero — both rejected
    /// before any lookup occurs — and `ResourceNotFound` when resolution
    /// fails or yields no calorie figure.
    pub async fn get_calories(
        &self,
        request: &CalorieRequest,
        caller: &CallerContext,
    ) -> AppResult<CalorieResponse> {
        let dish_name = request.dish_name.trim();
        let visible_chars = dish_name.chars().filter(|c| !c.is_whitespace()).count();
        if visible_chars < MIN_DISH_NAME_CHARS {
            return Err(AppError::invalid_input("Dish name too short"));
        }
        if request.servings == 0 {
            return Err(AppError::invalid_input(
                "Servings must be a positive integer",
            ));
        }

        tracing::debug!(
            user_id = %caller.user_id,
            request_id = ?caller.request_id,
            dish = %dish_name,
            servings = request.servings,
            "resolving dish calories"
        );

        let resolution = self.resolver.resolve_dish(dish_name).await;

        let not_found = || AppError::not_found("Dish or its calorie data");
        let resolution = resolution.ok_or_else(not_found)?;
        let calories_per_serving = resolution.calories_per_unit.ok_or_else(not_found)?;

        let total_calories = calories_per_serving * f64::from(request.servings);
        let ingredients = ingredient_breakdown(&resolution, calories_per_serving);

        Ok(CalorieResponse {
            dish_name: request.dish_name.clone(),
            servings: request.servings,
            calories_per_serving,
            total_calories,
            source: SOURCE_NAME.to_owned(),
            ingredients,
        })
    }
}

/// Build the single-entry ingredient breakdown when the matched record
/// carries ingredient text, preferring `ingredients` over
/// `ingredientDescription`. Text is truncated to a fixed length.
fn ingredient_breakdown(
    resolution: &CalorieResolution,
    calories_per_serving: f64,
) -> Option<Vec<IngredientBreakdown>> {
    let text = resolution
        .raw
        .ingredients
        .as_deref()
        .or(resolution.raw.ingredient_description.as_deref())
        .filter(|text| !text.is_empty())?;

    let name: String = text.chars().take(MAX_INGREDIENT_TEXT_CHARS).collect();

    Some(vec![IngredientBreakdown {
        name,
        calories_per_serving: Some(calories_per_serving),
        amount_descriptor: None,
    }])
}
