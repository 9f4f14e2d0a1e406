// ABOUTME: Domain models for the TrayMate meal assistant
// ABOUTME: Re-exports Meal, Resident, nutrition facts and recommendation types
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 TrayMate Contributors

//! # Data Models
//!
//! Catalog records ([`Meal`], [`Resident`]) deserialize directly from the camelCase
//! JSON the facility exports. Unit-bearing nutrition strings are parsed into
//! [`NutrientAmount`] values during that deserialization.

mod meal;
mod nutrition;
mod recommendation;
mod resident;

// Meal domain
pub use meal::{Meal, MealId, MealPeriod};

// Nutrition domain
pub use nutrition::{NutrientAmount, NutritionFacts, NutritionTotals};

// Resident domain
pub use resident::{
    DietaryRestriction, NutritionGoals, PersonRole, Resident, RestrictionType, Severity,
};

// Recommendation domain
pub use recommendation::{Recommendation, TopRecommendationBanner};
