// ABOUTME: Common data models for upstream food records and calorie resolutions
// ABOUTME: Lenient serde types tolerant of heterogeneous USDA payloads
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Async-IO.org

//! Data models shared across the resolution pipeline.
//!
//! Upstream records are deserialized leniently: every descriptive field is
//! optional, unknown fields are ignored, and nutrient values are kept as raw
//! JSON because the API mixes numbers and numeric strings depending on the
//! data type of the record.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// One food record returned by the USDA `FoodData` Central search endpoint.
///
/// Immutable as received; match metadata produced by the candidate selector
/// lives in [`crate::matching::BestMatch`] and is never written back here.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct FoodCandidate {
    /// `FoodData` Central identifier
    pub fdc_id: Option<u64>,
    /// Food description
    pub description: Option<String>,
    /// Lower-cased description variant supplied by some data types
    pub lowercase_description: Option<String>,
    /// Data type (e.g. "Survey (FNDDS)", "Foundation", "Branded")
    pub data_type: Option<String>,
    /// Food category label
    pub food_category: Option<String>,
    /// Brand owner (branded foods only)
    pub brand_owner: Option<String>,
    /// Ordered nutrient records
    pub food_nutrients: Vec<FoodNutrient>,
    /// Label nutrients (branded foods), keyed by nutrient name
    pub label_nutrients: Option<HashMap<String, LabelNutrient>>,
    /// Ingredient list text (branded foods)
    pub ingredients: Option<String>,
    /// Alternate ingredient description field
    pub ingredient_description: Option<String>,
}

/// One entry of a candidate's `foodNutrients` list.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct FoodNutrient {
    /// Nutrient name (e.g. "Energy", "Protein")
    pub nutrient_name: Option<String>,
    /// Nutrient amount; number or numeric string depending on data type
    pub value: Option<serde_json::Value>,
}

/// One entry of a candidate's `labelNutrients` map.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LabelNutrient {
    /// Nutrient amount; number or numeric string
    pub value: Option<serde_json::Value>,
}

/// The final decision for one dish name.
///
/// Created once per resolution and immutable thereafter. A `None`
/// `calories_per_unit` means the dish matched confidently but no usable
/// calorie figure was present — distinct from "no candidate matched", which
/// yields no resolution at all.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CalorieResolution {
    /// Upstream identifier of the chosen candidate
    pub source_id: Option<u64>,
    /// Description of the chosen candidate
    pub description: Option<String>,
    /// Data type of the chosen candidate
    pub data_type: Option<String>,
    /// Brand owner of the chosen candidate
    pub brand_owner: Option<String>,
    /// Calories per unit serving, when a nutrient field yielded a number
    pub calories_per_unit: Option<f64>,
    /// The chosen candidate, kept for downstream ingredient-text extraction
    pub raw: FoodCandidate,
}
