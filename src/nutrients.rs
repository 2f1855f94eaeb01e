// ABOUTME: Calorie extraction from heterogeneous upstream nutrient records
// ABOUTME: Scans foodNutrients first, falls back to labelNutrients
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Async-IO.org

//! # Nutrient Extraction
//!
//! Derives a single calories-per-unit figure from a food candidate. The
//! upstream API exposes energy data in two shapes depending on the record's
//! data type: an ordered `foodNutrients` list, or a `labelNutrients` map on
//! branded foods. Values are numbers or numeric strings; anything that does
//! not parse is treated as absent rather than as an error.

use crate::models::FoodCandidate;

/// Nutrient name substrings that identify an energy entry.
const ENERGY_MARKERS: [&str; 3] = ["energy", "calorie", "kcal"];

/// Extract a calories-per-unit value from `candidate`, or `None` when no
/// nutrient field yields a parseable number.
///
/// The `foodNutrients` list is scanned in order and the first entry whose
/// name contains an energy marker *and* carries a parseable value wins; an
/// unparsable value on a matching entry does not abort the scan. Only when
/// the whole list is exhausted does the `labelNutrients` fallback run,
/// preferring a `calories` entry over an `energy` entry.
pub fn extract_calories(candidate: &FoodCandidate) -> Option<f64> {
    for nutrient in &candidate.food_nutrients {
        let name = nutrient.nutrient_name.as_deref().unwrap_or_default();
        if !is_energy_name(name) {
            continue;
        }
        if let Some(value) = nutrient.value.as_ref().and_then(numeric_value) {
            return Some(value);
        }
        // Matching entry without a usable number; keep scanning.
    }

    let labels = candidate.label_nutrients.as_ref()?;
    labels
        .get("calories")
        .or_else(|| labels.get("energy"))?
        .value
        .as_ref()
        .and_then(numeric_value)
}

fn is_energy_name(name: &str) -> bool {
    let name = name.to_lowercase();
    ENERGY_MARKERS.iter().any(|marker| name.contains(marker))
}

/// Parse a heterogeneous nutrient value as a float.
///
/// Accepts JSON numbers and numeric strings; everything else is absent.
fn numeric_value(value: &serde_json::Value) -> Option<f64> {
    match value {
        serde_json::Value::Number(n) => n.as_f64(),
        serde_json::Value::String(s) => s.trim().parse().ok(),
        _ => None,
    }
}
