// ABOUTME: Ranks catalog meals for a resident with explainable reasons
// ABOUTME: Excludes allergen conflicts outright, scores the rest, and keeps ties in catalog order
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 TrayMate Contributors

//! Meal recommendation engine
//!
//! Scoring follows a fixed pipeline:
//!
//! 1. Candidates come from [`CatalogStore::meals_by_period`].
//! 2. Any meal that conflicts with an allergy is dropped.
//! 3. Each remaining meal is scored with [`RecommendationConfig`] weights.
//! 4. A stable sort by score keeps catalog order among equal scores.
//! 5. The first `top_n` are returned with their reasons.

use std::sync::Arc;

use tracing::debug;
use traymate_core::catalog::CatalogStore;
use traymate_core::models::{
    Meal, MealPeriod, Recommendation, Resident, TopRecommendationBanner,
};

use crate::config::RecommendationConfig;
use crate::matcher;

/// Reason shown when a meal fits every nutrition goal
pub const REASON_FITS_GOALS: &str = "Fits your nutrition goals";
/// Reason shown for favorite meals
pub const REASON_FAVORITE: &str = "One of your favorites";
/// Reason shown when no positive criterion applied
pub const REASON_NO_CONFLICTS: &str = "No dietary conflicts found";

/// Recommendation engine over a shared catalog
#[derive(Debug, Clone)]
pub struct RecommendationEngine {
    catalog: Arc<CatalogStore>,
    config: RecommendationConfig,
}

impl RecommendationEngine {
    /// Create an engine with default weights
    #[must_use]
    pub fn new(catalog: Arc<CatalogStore>) -> Self {
        Self::with_config(catalog, RecommendationConfig::default())
    }

    /// Create an engine with custom weights
    #[must_use]
    pub const fn with_config(catalog: Arc<CatalogStore>, config: RecommendationConfig) -> Self {
        Self { catalog, config }
    }

    /// Best meals for a resident, at most `top_n`, best first
    ///
    /// An unknown resident or a period with no safe meal yields an empty list.
    #[must_use]
    pub fn recommendations(
        &self,
        resident_id: &str,
        period: Option<MealPeriod>,
        top_n: usize,
    ) -> Vec<Recommendation> {
        let Some(resident) = self.catalog.resident_by_id(resident_id) else {
            debug!(resident_id = %resident_id, "No recommendations for unknown resident");
            return Vec::new();
        };
        self.recommendations_for(resident, period, top_n)
    }

    /// Same as [`Self::recommendations`] for a resident already in hand
    #[must_use]
    pub fn recommendations_for(
        &self,
        resident: &Resident,
        period: Option<MealPeriod>,
        top_n: usize,
    ) -> Vec<Recommendation> {
        let candidates = self.catalog.meals_by_period(period);
        let candidate_count = candidates.len();

        let mut scored: Vec<Recommendation> = candidates
            .into_iter()
            .filter_map(|meal| self.score(resident, meal))
            .collect();

        // Vec::sort_by is stable, so equal scores keep catalog order
        scored.sort_by(|a, b| b.score.cmp(&a.score));
        scored.truncate(top_n);

        debug!(
            resident_id = %resident.id,
            period = ?period,
            candidates = candidate_count,
            returned = scored.len(),
            "Ranked meal recommendations"
        );
        scored
    }

    /// The single best meal, if any is safe
    #[must_use]
    pub fn top_recommendation(
        &self,
        resident_id: &str,
        period: Option<MealPeriod>,
    ) -> Option<Recommendation> {
        self.recommendations(resident_id, period, 1).into_iter().next()
    }

    /// Banner text for the menu screen's top suggestion
    #[must_use]
    pub fn top_recommendation_banner(
        &self,
        resident_id: &str,
        period: Option<MealPeriod>,
    ) -> Option<TopRecommendationBanner> {
        let resident = self.catalog.resident_by_id(resident_id)?;
        let top = self
            .recommendations_for(resident, period, 1)
            .into_iter()
            .next()?;
        let restrictions: Vec<String> = resident
            .restriction_names()
            .into_iter()
            .map(str::to_owned)
            .collect();

        Some(TopRecommendationBanner {
            meal_name: top.meal.name.clone(),
            reason: format!(
                "Based on their dietary restrictions ({}), we suggest the",
                restrictions.join(", ")
            ),
            dietary_restrictions: restrictions,
        })
    }

    /// Score one meal, or `None` when it conflicts with an allergy
    fn score(&self, resident: &Resident, meal: Arc<Meal>) -> Option<Recommendation> {
        let assessment = matcher::assess(resident, &meal);
        if !assessment.is_safe() {
            debug!(
                meal_id = meal.id,
                severity = ?assessment.conflict_severity,
                "Excluding meal with allergen conflict"
            );
            return None;
        }

        let mut score = 0;
        let mut reasons = Vec::new();

        if assessment.fits_goals {
            score += self.config.fits_goals_bonus;
            reasons.push(REASON_FITS_GOALS.to_owned());
        }
        if resident.is_favorite(meal.id) {
            score += self.config.favorite_bonus;
            reasons.push(REASON_FAVORITE.to_owned());
        }
        if assessment.disliked_ingredient.is_some() {
            score -= self.config.dislike_penalty;
        }
        if !assessment.supported_restrictions.is_empty() {
            score += self.config.supporting_tag_bonus;
            reasons.extend(
                assessment
                    .supported_restrictions
                    .iter()
                    .map(|name| format!("Supports your {name} needs")),
            );
        }
        if reasons.is_empty() {
            reasons.push(REASON_NO_CONFLICTS.to_owned());
        }

        Some(Recommendation {
            meal,
            score,
            all_reasons: reasons,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const CATALOG: &str = r#"{
        "meals": [
            {"id": 1, "name": "Shrimp Scampi", "ingredients": ["Shrimp", "Garlic"],
             "nutrition": {"calories": 300, "sodium": "200mg", "protein": "30g"},
             "description": "", "mealPeriod": "Dinner", "timeRange": "5pm - 7pm",
             "allergenInfo": ["Shellfish"], "tags": ["Low Sodium"]},
            {"id": 2, "name": "Plain Rice", "ingredients": ["Rice"],
             "nutrition": {"calories": 200, "sodium": "5mg", "protein": "4g"},
             "description": "", "mealPeriod": "Dinner", "timeRange": "5pm - 7pm"},
            {"id": 3, "name": "Mushroom Risotto", "ingredients": ["Rice", "Mushrooms"],
             "nutrition": {"calories": 450, "sodium": "300mg", "protein": "12g"},
             "description": "", "mealPeriod": "Dinner", "timeRange": "5pm - 7pm",
             "tags": ["Vegetarian"]},
            {"id": 4, "name": "Herb Chicken", "ingredients": ["Chicken"],
             "nutrition": {"calories": 420, "sodium": "380mg", "protein": "45g"},
             "description": "", "mealPeriod": "Lunch", "timeRange": "11am - 1pm",
             "tags": ["Low Sodium", "Heart Healthy"]},
            {"id": 5, "name": "Toast", "ingredients": ["Bread"],
             "nutrition": {"calories": 150, "sodium": "150mg", "protein": "5g"},
             "description": "", "mealPeriod": "Breakfast", "timeRange": "7am - 9am"}
        ],
        "residents": [
            {"id": "bobby", "fullName": "Bobby", "roomNumber": "101",
             "dietaryRestrictions": [
                {"type": "medical", "name": "Low Sodium", "severity": "moderate"},
                {"type": "allergy", "name": "Shellfish", "severity": "severe"}
             ],
             "nutritionGoals": {"dailyCalories": 400, "maxSodium": 400, "minProtein": 0,
                                "maxCholesterol": 0, "maxSugar": 0},
             "dislikedIngredients": ["mushroom"],
             "favoriteMealIds": [2]}
        ]
    }"#;

    fn engine() -> RecommendationEngine {
        RecommendationEngine::new(Arc::new(CatalogStore::from_json_str(CATALOG).unwrap()))
    }

    #[test]
    fn test_scores_and_reasons() {
        let recs = engine().recommendations("bobby", None, 10);
        let summary: Vec<(u32, i32)> = recs.iter().map(|r| (r.meal.id, r.score)).collect();
        // Rice: goals + favorite; Toast: goals; Chicken: over calories, supporting tag;
        // Risotto: over calories, disliked mushrooms
        assert_eq!(summary, vec![(2, 3), (5, 2), (4, 1), (3, -1)]);
        assert_eq!(
            recs[0].all_reasons,
            vec![REASON_FITS_GOALS.to_owned(), REASON_FAVORITE.to_owned()]
        );
        assert_eq!(recs[2].all_reasons, vec!["Supports your Low Sodium needs".to_owned()]);
    }

    #[test]
    fn test_allergen_meal_is_excluded() {
        let recs = engine().recommendations("bobby", Some(MealPeriod::Dinner), 10);
        assert!(recs.iter().all(|r| r.meal.id != 1));
        assert_eq!(recs.len(), 2);
    }

    #[test]
    fn test_generic_reason_when_nothing_positive_fired() {
        let risotto = engine()
            .recommendations("bobby", Some(MealPeriod::Dinner), 10)
            .into_iter()
            .find(|r| r.meal.id == 3)
            .unwrap();
        assert_eq!(risotto.score, -1);
        assert_eq!(risotto.all_reasons, vec![REASON_NO_CONFLICTS.to_owned()]);
    }

    #[test]
    fn test_equal_scores_keep_catalog_order() {
        let flat = RecommendationConfig {
            fits_goals_bonus: 0,
            favorite_bonus: 0,
            dislike_penalty: 0,
            supporting_tag_bonus: 0,
        };
        let catalog = Arc::new(CatalogStore::from_json_str(CATALOG).unwrap());
        let ids: Vec<u32> = RecommendationEngine::with_config(catalog, flat)
            .recommendations("bobby", None, 10)
            .iter()
            .map(|r| r.meal.id)
            .collect();
        assert_eq!(ids, vec![2, 3, 4, 5]);
    }

    #[test]
    fn test_top_n_and_unknown_resident() {
        let engine = engine();
        assert_eq!(engine.recommendations("bobby", None, 2).len(), 2);
        assert!(engine.recommendations("bobby", None, 0).is_empty());
        assert!(engine.recommendations("nobody", None, 3).is_empty());
        assert!(engine.top_recommendation("nobody", None).is_none());
    }

    #[test]
    fn test_banner_lists_restrictions() {
        let banner = engine().top_recommendation_banner("bobby", None).unwrap();
        assert_eq!(banner.meal_name, "Plain Rice");
        assert_eq!(
            banner.reason,
            "Based on their dietary restrictions (Low Sodium, Shellfish), we suggest the"
        );
    }
}
