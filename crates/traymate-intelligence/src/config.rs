// ABOUTME: Tunable scoring weights for the meal recommendation engine
// ABOUTME: Defaults reward goal fit most, then favorites and supporting tags, and penalize dislikes
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 TrayMate Contributors

use serde::{Deserialize, Serialize};

/// Weights applied when scoring a safe meal for a resident
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RecommendationConfig {
    /// Added when the meal fits every set nutrition goal
    pub fits_goals_bonus: i32,
    /// Added when the meal is a resident favorite
    pub favorite_bonus: i32,
    /// Subtracted when the meal contains a disliked ingredient
    pub dislike_penalty: i32,
    /// Added when a meal tag supports a non-allergy restriction
    pub supporting_tag_bonus: i32,
}

impl Default for RecommendationConfig {
    fn default() -> Self {
        Self {
            fits_goals_bonus: 2,
            favorite_bonus: 1,
            dislike_penalty: 1,
            supporting_tag_bonus: 1,
        }
    }
}
