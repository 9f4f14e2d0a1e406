// ABOUTME: Catalog meal model with meal period, allergen labels, tags and nutrition
// ABOUTME: Meals are loaded once and shared read-only for the life of the process
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 TrayMate Contributors

use std::fmt::{self, Display, Formatter};

use serde::{Deserialize, Serialize};

use super::NutritionFacts;

/// Stable meal identifier
pub type MealId = u32;

/// Service period a meal is offered in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MealPeriod {
    /// Morning service
    Breakfast,
    /// Midday service
    Lunch,
    /// Evening service
    Dinner,
    /// Served across every period
    #[serde(rename = "All Day")]
    AllDay,
}

impl MealPeriod {
    /// The three orderable periods, in service order
    pub const SERVICE_PERIODS: [Self; 3] = [Self::Breakfast, Self::Lunch, Self::Dinner];

    /// Every period in menu order, all-day items last
    pub const MENU_ORDER: [Self; 4] = [Self::Breakfast, Self::Lunch, Self::Dinner, Self::AllDay];

    /// Display label as stored in the catalog
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Breakfast => "Breakfast",
            Self::Lunch => "Lunch",
            Self::Dinner => "Dinner",
            Self::AllDay => "All Day",
        }
    }

    /// Parse a period name leniently (`"breakfast"`, `"all-day"`, `"allday"`)
    #[must_use]
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().replace(['-', '_'], " ").as_str() {
            "breakfast" | "b" => Some(Self::Breakfast),
            "lunch" | "l" => Some(Self::Lunch),
            "dinner" | "d" => Some(Self::Dinner),
            "all day" | "allday" => Some(Self::AllDay),
            _ => None,
        }
    }
}

impl Display for MealPeriod {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A dish on the facility menu
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Meal {
    /// Stable identifier; identity for every lookup
    pub id: MealId,
    /// Display name
    pub name: String,
    /// Ingredients in recipe order
    pub ingredients: Vec<String>,
    /// Per-serving nutrition
    pub nutrition: NutritionFacts,
    /// Free-text description
    pub description: String,
    /// Image location, empty when none
    #[serde(default)]
    pub image_url: String,
    /// Kitchen service code (`B`, `L`, `D` or combinations such as `L, D`)
    #[serde(default)]
    pub meal_type: String,
    /// Period the meal is listed under
    pub meal_period: MealPeriod,
    /// Display-only serving window, e.g. `7am - 9am`
    pub time_range: String,
    /// Allergen labels present in the meal
    #[serde(default)]
    pub allergen_info: Vec<String>,
    /// Descriptive labels such as `Low Sodium` or `Vegetarian`
    #[serde(default)]
    pub tags: Vec<String>,
    /// Whether the kitchen currently offers this meal
    #[serde(default = "default_true")]
    pub is_available: bool,
    /// Limited-time seasonal dish
    #[serde(default)]
    pub is_seasonal: bool,
}

const fn default_true() -> bool {
    true
}

impl Meal {
    /// Case-insensitive check for a tag
    #[must_use]
    pub fn has_tag(&self, tag: &str) -> bool {
        self.tags.iter().any(|t| t.eq_ignore_ascii_case(tag))
    }

    /// Case-insensitive substring search across name, description, ingredients and tags
    #[must_use]
    pub fn matches_query(&self, query: &str) -> bool {
        let needle = query.to_lowercase();
        self.name.to_lowercase().contains(&needle)
            || self.description.to_lowercase().contains(&needle)
            || self
                .ingredients
                .iter()
                .any(|i| i.to_lowercase().contains(&needle))
            || self.tags.iter().any(|t| t.to_lowercase().contains(&needle))
    }
}
