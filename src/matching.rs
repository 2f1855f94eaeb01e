// ABOUTME: Fuzzy candidate selection over upstream food records
// ABOUTME: Token-set similarity scoring with strict-improvement tie-breaking
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Async-IO.org

//! # Fuzzy Candidate Selection
//!
//! Scores each upstream food record against the query using token-set
//! similarity (case-, order-, and duplication-insensitive word overlap on a
//! 0-100 scale) across the record's descriptive fields, and picks the best
//! scoring record above a confidence threshold.
//!
//! Candidates are compared in input order and the incumbent is replaced only
//! on strict score improvement, so the first-seen candidate wins ties. This
//! is load-bearing: a sort-based selection would silently reorder equal
//! scores.

use crate::constants::matching::MIN_CONFIDENCE_SCORE;
use crate::models::FoodCandidate;
use std::collections::BTreeSet;

/// The selected candidate, annotated with match metadata.
///
/// The annotations are output-only; the underlying [`FoodCandidate`] is
/// never modified.
#[derive(Debug, Clone)]
pub struct BestMatch<'a> {
    /// The winning candidate record
    pub food: &'a FoodCandidate,
    /// Best token-set similarity score across the candidate's text fields
    pub score: u32,
    /// The query this candidate was matched against
    pub matched_query: String,
}

/// Select the best-matching candidate for `query`, or `None` when no
/// candidate reaches the confidence threshold.
pub fn select_best<'a>(query: &str, candidates: &'a [FoodCandidate]) -> Option<BestMatch<'a>> {
    let mut best: Option<(&'a FoodCandidate, u32)> = None;

    for candidate in candidates {
        let score = candidate_score(query, candidate);
        match best {
            // Equal scores keep the incumbent: first-seen wins ties.
            Some((_, best_score)) if score <= best_score => {}
            _ => best = Some((candidate, score)),
        }
    }

    let (food, score) = best?;
    if score < MIN_CONFIDENCE_SCORE {
        tracing::debug!(score, "best candidate below confidence threshold");
        return None;
    }

    Some(BestMatch {
        food,
        score,
        matched_query: query.to_owned(),
    })
}

/// Score one candidate as the maximum similarity between the query and each
/// non-empty descriptive field, in the fixed field order `description`,
/// `lowercaseDescription`, `dataType`, `foodCategory`, `brandOwner`.
fn candidate_score(query: &str, candidate: &FoodCandidate) -> u32 {
    let fields = [
        candidate.description.as_deref(),
        candidate.lowercase_description.as_deref(),
        candidate.data_type.as_deref(),
        candidate.food_category.as_deref(),
        candidate.brand_owner.as_deref(),
    ];

    fields
        .into_iter()
        .flatten()
        .filter(|field| !field.is_empty())
        .map(|field| token_set_ratio(query, field))
        .max()
        .unwrap_or(0)
}

/// Token-set similarity ratio between two strings on a 0-100 scale.
///
/// Both strings are lower-cased and split into unique word tokens. The score
/// is the best normalized indel similarity among the token intersection and
/// the two intersection-plus-remainder combinations, which makes the measure
/// insensitive to word order and duplication and yields 100 whenever one
/// token set is contained in the other.
pub fn token_set_ratio(a: &str, b: &str) -> u32 {
    let tokens_a = tokenize(a);
    let tokens_b = tokenize(b);
    if tokens_a.is_empty() || tokens_b.is_empty() {
        return 0;
    }

    let intersection: Vec<&str> = tokens_a
        .intersection(&tokens_b)
        .map(String::as_str)
        .collect();
    let only_a: Vec<&str> = tokens_a.difference(&tokens_b).map(String::as_str).collect();
    let only_b: Vec<&str> = tokens_b.difference(&tokens_a).map(String::as_str).collect();

    let sect = intersection.join(" ");
    let combined_a = join_parts(&sect, &only_a);
    let combined_b = join_parts(&sect, &only_b);

    indel_ratio(&sect, &combined_a)
        .max(indel_ratio(&sect, &combined_b))
        .max(indel_ratio(&combined_a, &combined_b))
}

/// Unique lower-cased word tokens of a string, in sorted order.
fn tokenize(text: &str) -> BTreeSet<String> {
    text.to_lowercase()
        .split(|c: char| !c.is_alphanumeric())
        .filter(|token| !token.is_empty())
        .map(str::to_owned)
        .collect()
}

fn join_parts(sect: &str, remainder: &[&str]) -> String {
    if remainder.is_empty() {
        return sect.to_owned();
    }
    if sect.is_empty() {
        return remainder.join(" ");
    }
    format!("{sect} {}", remainder.join(" "))
}

/// Normalized indel similarity of two strings, rounded to 0-100.
///
/// Equivalent to `(len_a + len_b - indel_distance) / (len_a + len_b)` where
/// insertions and deletions cost 1 and substitution is not allowed.
fn indel_ratio(a: &str, b: &str) -> u32 {
    let a: Vec<char> = a.chars().collect();
    let b: Vec<char> = b.chars().collect();
    let total = a.len() + b.len();
    if total == 0 {
        return 100;
    }

    let lcs = lcs_length(&a, &b);
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    let ratio = ((200.0 * lcs as f64) / total as f64).round() as u32;
    ratio
}

/// Longest common subsequence length via the two-row dynamic program.
fn lcs_length(a: &[char], b: &[char]) -> usize {
    if a.is_empty() || b.is_empty() {
        return 0;
    }

    let mut prev = vec![0usize; b.len() + 1];
    let mut curr = vec![0usize; b.len() + 1];

    for &ca in a {
        for (j, &cb) in b.iter().enumerate() {
            curr[j + 1] = if ca == cb {
                prev[j] + 1
            } else {
                prev[j + 1].max(curr[j])
            };
        }
        std::mem::swap(&mut prev, &mut curr);
    }

    prev[b.len()]
}
