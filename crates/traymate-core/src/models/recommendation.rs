// ABOUTME: Ranked meal recommendation with the reasons that produced its score
// ABOUTME: Derived on demand from the catalog and never persisted
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 TrayMate Contributors

use std::sync::Arc;

use serde::Serialize;

use super::Meal;

/// A meal suggested for a resident
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Recommendation {
    /// Shared reference into the catalog
    pub meal: Arc<Meal>,
    /// Ranking score; higher is better
    pub score: i32,
    /// Short explanations, most relevant first
    pub all_reasons: Vec<String>,
}

impl Recommendation {
    /// The leading reason, used for one-line summaries
    #[must_use]
    pub fn reason(&self) -> &str {
        self.all_reasons.first().map_or("", String::as_str)
    }
}

/// Projection used by the "AI suggests" banner on the menu screen
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TopRecommendationBanner {
    /// Suggested meal name
    pub meal_name: String,
    /// Lead-in sentence mentioning the resident's restrictions
    pub reason: String,
    /// Restriction names in entry order
    pub dietary_restrictions: Vec<String>,
}
