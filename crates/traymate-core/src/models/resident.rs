// ABOUTME: Resident profile model with dietary restrictions, dislikes and nutrition goals
// ABOUTME: Restriction severity is ordered so the most severe conflict can be reported
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 TrayMate Contributors

use std::fmt::{self, Display, Formatter};

use serde::{Deserialize, Serialize};

use super::MealId;

/// Kind of dietary restriction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RestrictionType {
    /// Immune reaction; conflicting meals are never recommended
    Allergy,
    /// Digestive intolerance, e.g. lactose
    Intolerance,
    /// Lifestyle or taste preference
    Preference,
    /// Clinician-ordered diet such as low sodium
    Medical,
}

impl RestrictionType {
    /// Lowercase label used in prompts and listings
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Allergy => "allergy",
            Self::Intolerance => "intolerance",
            Self::Preference => "preference",
            Self::Medical => "medical",
        }
    }
}

impl Display for RestrictionType {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// How serious a restriction is; ordered `Mild < Moderate < Severe`
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    /// Minor discomfort
    Mild,
    /// Noticeable reaction
    Moderate,
    /// Dangerous reaction
    Severe,
}

impl Severity {
    /// Lowercase label used in prompts and listings
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Mild => "mild",
            Self::Moderate => "moderate",
            Self::Severe => "severe",
        }
    }
}

impl Display for Severity {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A named dietary limitation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DietaryRestriction {
    /// Restriction kind
    #[serde(rename = "type")]
    pub restriction_type: RestrictionType,
    /// Human-readable name, e.g. `Shellfish` or `Low Sodium`
    pub name: String,
    /// Severity
    pub severity: Severity,
}

impl DietaryRestriction {
    /// Create a restriction
    #[must_use]
    pub fn new(
        restriction_type: RestrictionType,
        name: impl Into<String>,
        severity: Severity,
    ) -> Self {
        Self {
            restriction_type,
            name: name.into(),
            severity,
        }
    }

    /// Whether this restriction is an allergy
    #[must_use]
    pub fn is_allergy(&self) -> bool {
        self.restriction_type == RestrictionType::Allergy
    }
}

/// Daily nutrition targets; a zero value means the goal is not set
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NutritionGoals {
    /// Upper bound on kilocalories
    #[serde(default)]
    pub daily_calories: f64,
    /// Upper bound on sodium in milligrams
    #[serde(default)]
    pub max_sodium: f64,
    /// Lower bound on protein in grams
    #[serde(default)]
    pub min_protein: f64,
    /// Upper bound on cholesterol in milligrams
    #[serde(default)]
    pub max_cholesterol: f64,
    /// Upper bound on sugar in grams
    #[serde(default)]
    pub max_sugar: f64,
}

/// Role of a person record in the facility directory
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PersonRole {
    /// Resident receiving meals
    #[default]
    Resident,
    /// Care staff
    Staff,
    /// Kitchen staff
    Kitchen,
    /// Administrator
    Admin,
}

/// A resident of the care facility
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Resident {
    /// Stable identifier, e.g. `resident_001`
    pub id: String,
    /// Given name
    #[serde(default)]
    pub first_name: String,
    /// Family name
    #[serde(default)]
    pub last_name: String,
    /// Name shown in the UI and prompts
    pub full_name: String,
    /// Contact email
    #[serde(default)]
    pub email: String,
    /// Contact phone
    #[serde(default)]
    pub phone: String,
    /// Room number
    pub room_number: String,
    /// Directory role
    #[serde(default)]
    pub role: PersonRole,
    /// Restrictions in the order staff entered them
    #[serde(default)]
    pub dietary_restrictions: Vec<DietaryRestriction>,
    /// Daily nutrition goals
    #[serde(default)]
    pub nutrition_goals: NutritionGoals,
    /// Ingredients the resident does not want
    #[serde(default)]
    pub disliked_ingredients: Vec<String>,
    /// Favorite meal ids
    #[serde(default)]
    pub favorite_meal_ids: Vec<MealId>,
    /// Whether the resident is currently in residence
    #[serde(default = "default_active")]
    pub is_active: bool,
}

const fn default_active() -> bool {
    true
}

impl Resident {
    /// Allergy restrictions only
    pub fn allergies(&self) -> impl Iterator<Item = &DietaryRestriction> {
        self.dietary_restrictions.iter().filter(|r| r.is_allergy())
    }

    /// Restrictions other than allergies
    pub fn non_allergy_restrictions(&self) -> impl Iterator<Item = &DietaryRestriction> {
        self.dietary_restrictions.iter().filter(|r| !r.is_allergy())
    }

    /// Whether a meal id is among the resident's favorites
    #[must_use]
    pub fn is_favorite(&self, meal_id: MealId) -> bool {
        self.favorite_meal_ids.contains(&meal_id)
    }

    /// Restriction names in entry order
    #[must_use]
    pub fn restriction_names(&self) -> Vec<&str> {
        self.dietary_restrictions
            .iter()
            .map(|r| r.name.as_str())
            .collect()
    }
}
