// ABOUTME: Read-only in-memory catalog of meals and residents
// ABOUTME: Loaded once from JSON, validated, then shared behind Arc for the process lifetime
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 TrayMate Contributors

//! # Catalog Store
//!
//! The catalog is the leaf of the system: every other component reads from it and
//! nothing writes to it after load. Meals and residents are held as `Arc`s so
//! recommendations and orders can reference them without copying.

use std::collections::HashSet;
use std::path::Path;
use std::sync::Arc;

use serde::Deserialize;
use tracing::{debug, info};

use crate::errors::{AppError, AppResult};
use crate::models::{Meal, MealId, MealPeriod, Resident};

/// On-disk catalog document
#[derive(Debug, Deserialize)]
struct CatalogDocument {
    meals: Vec<Meal>,
    residents: Vec<Resident>,
}

/// Immutable meal and resident catalog
#[derive(Debug, Clone)]
pub struct CatalogStore {
    meals: Vec<Arc<Meal>>,
    residents: Vec<Arc<Resident>>,
    default_resident: Arc<Resident>,
}

impl CatalogStore {
    /// Build a catalog from already-parsed records
    ///
    /// # Errors
    ///
    /// Returns `InvalidFormat` when there are no residents or when two meals or two
    /// residents share an id.
    pub fn new(meals: Vec<Meal>, residents: Vec<Resident>) -> AppResult<Self> {
        let mut seen_meals: HashSet<MealId> = HashSet::with_capacity(meals.len());
        if let Some(duplicate) = meals.iter().find(|meal| !seen_meals.insert(meal.id)) {
            return Err(AppError::invalid_format(format!(
                "duplicate meal id {} in catalog",
                duplicate.id
            )));
        }

        let mut seen_residents: HashSet<&str> = HashSet::with_capacity(residents.len());
        if let Some(duplicate) = residents
            .iter()
            .find(|resident| !seen_residents.insert(resident.id.as_str()))
        {
            return Err(AppError::invalid_format(format!(
                "duplicate resident id {} in catalog",
                duplicate.id
            )));
        }

        let residents: Vec<Arc<Resident>> = residents.into_iter().map(Arc::new).collect();
        let default_resident = residents
            .first()
            .cloned()
            .ok_or_else(|| AppError::invalid_format("catalog contains no residents"))?;

        info!(
            meals = meals.len(),
            residents = residents.len(),
            "Catalog loaded"
        );

        Ok(Self {
            meals: meals.into_iter().map(Arc::new).collect(),
            residents,
            default_resident,
        })
    }

    /// Parse a catalog from a JSON document with `meals` and `residents` arrays
    ///
    /// # Errors
    ///
    /// Returns `SerializationError` for malformed JSON and `InvalidFormat` when the
    /// parsed catalog fails validation.
    pub fn from_json_str(json: &str) -> AppResult<Self> {
        let document: CatalogDocument = serde_json::from_str(json)?;
        Self::new(document.meals, document.residents)
    }

    /// Read and parse a catalog file
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the file cannot be read, otherwise the errors of
    /// [`Self::from_json_str`].
    pub fn load_from_path(path: impl AsRef<Path>) -> AppResult<Self> {
        let path = path.as_ref();
        debug!(path = %path.display(), "Reading catalog file");
        let json = std::fs::read_to_string(path)?;
        Self::from_json_str(&json)
    }

    // ========================================================================
    // Meals
    // ========================================================================

    /// Every meal in declaration order
    #[must_use]
    pub fn all_meals(&self) -> &[Arc<Meal>] {
        &self.meals
    }

    /// Meals listed under `period`, or every meal when `period` is `None`
    ///
    /// Matching is exact: an `All Day` meal is only returned for `Some(AllDay)`.
    #[must_use]
    pub fn meals_by_period(&self, period: Option<MealPeriod>) -> Vec<Arc<Meal>> {
        self.meals
            .iter()
            .filter(|meal| period.is_none_or(|p| meal.meal_period == p))
            .cloned()
            .collect()
    }

    /// Look up a meal by id
    #[must_use]
    pub fn meal_by_id(&self, id: MealId) -> Option<&Arc<Meal>> {
        self.meals.iter().find(|meal| meal.id == id)
    }

    /// Meals the kitchen currently offers
    pub fn available_meals(&self) -> impl Iterator<Item = &Arc<Meal>> {
        self.meals.iter().filter(|meal| meal.is_available)
    }

    /// Available meals whose name, description, ingredients or tags contain `query`
    #[must_use]
    pub fn search_meals(&self, query: &str) -> Vec<Arc<Meal>> {
        self.available_meals()
            .filter(|meal| meal.matches_query(query))
            .cloned()
            .collect()
    }

    /// Available meals carrying `tag` (case-insensitive exact match)
    #[must_use]
    pub fn meals_by_tag(&self, tag: &str) -> Vec<Arc<Meal>> {
        self.available_meals()
            .filter(|meal| meal.has_tag(tag))
            .cloned()
            .collect()
    }

    /// Available seasonal meals
    #[must_use]
    pub fn seasonal_meals(&self) -> Vec<Arc<Meal>> {
        self.available_meals()
            .filter(|meal| meal.is_seasonal)
            .cloned()
            .collect()
    }

    /// Meals grouped by period in menu order, skipping periods with no meals
    ///
    /// Every catalog meal lands in exactly one group.
    #[must_use]
    pub fn meals_grouped_by_period(&self) -> Vec<(MealPeriod, Vec<Arc<Meal>>)> {
        MealPeriod::MENU_ORDER
            .iter()
            .map(|&period| (period, self.meals_by_period(Some(period))))
            .filter(|(_, meals)| !meals.is_empty())
            .collect()
    }

    /// Find a meal by its display name, ignoring case
    ///
    /// Display names are not identifiers. Use this only to resolve text a person
    /// typed or a model wrote; everything else should go through [`Self::meal_by_id`].
    #[must_use]
    pub fn find_meal_by_display_name(&self, name: &str) -> Option<&Arc<Meal>> {
        let wanted = name.trim();
        self.meals
            .iter()
            .find(|meal| meal.name.eq_ignore_ascii_case(wanted))
    }

    // ========================================================================
    // Residents
    // ========================================================================

    /// Look up a resident by id
    #[must_use]
    pub fn resident_by_id(&self, id: &str) -> Option<&Arc<Resident>> {
        self.residents.iter().find(|resident| resident.id == id)
    }

    /// The first resident in the catalog
    #[must_use]
    pub fn default_resident(&self) -> &Arc<Resident> {
        &self.default_resident
    }

    /// Residents currently in residence
    pub fn all_residents(&self) -> impl Iterator<Item = &Arc<Resident>> {
        self.residents.iter().filter(|resident| resident.is_active)
    }

    /// Look up a resident by room number
    #[must_use]
    pub fn resident_by_room(&self, room_number: &str) -> Option<&Arc<Resident>> {
        self.residents
            .iter()
            .find(|resident| resident.room_number == room_number)
    }

    /// The resident's favorite meals in favorite-list order; unknown ids are skipped
    #[must_use]
    pub fn favorite_meals(&self, resident_id: &str) -> Vec<Arc<Meal>> {
        self.resident_by_id(resident_id)
            .map(|resident| {
                resident
                    .favorite_meal_ids
                    .iter()
                    .filter_map(|&id| self.meal_by_id(id).cloned())
                    .collect()
            })
            .unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::ErrorCode;

    const SMALL_CATALOG: &str = r#"{
        "meals": [
            {"id": 1, "name": "Oatmeal Bowl", "ingredients": ["Oats", "Milk"],
             "nutrition": {"calories": 280, "sodium": "120mg", "protein": "12g"},
             "description": "Warm oats", "mealPeriod": "Breakfast", "timeRange": "7am - 9am",
             "allergenInfo": ["Dairy"], "tags": ["Vegetarian"]},
            {"id": 2, "name": "Caesar Salad", "ingredients": ["Romaine"],
             "nutrition": {"calories": 250, "sodium": "405mg", "protein": "20g"},
             "description": "Salad", "mealPeriod": "All Day", "timeRange": "11am - 7pm",
             "tags": ["Low Carb"], "isSeasonal": true},
            {"id": 3, "name": "Waffle", "ingredients": ["Flour"],
             "nutrition": {"calories": 350},
             "description": "Waffle", "mealPeriod": "Breakfast", "timeRange": "7am - 9am",
             "isAvailable": false}
        ],
        "residents": [
            {"id": "r1", "fullName": "Ada Lovelace", "roomNumber": "201", "favoriteMealIds": [2, 99]},
            {"id": "r2", "fullName": "Alan Turing", "roomNumber": "202", "isActive": false}
        ]
    }"#;

    fn catalog() -> CatalogStore {
        CatalogStore::from_json_str(SMALL_CATALOG).unwrap()
    }

    #[test]
    fn test_period_filter_is_exact_and_ordered() {
        let catalog = catalog();
        let ids: Vec<_> = catalog
            .meals_by_period(Some(MealPeriod::Breakfast))
            .iter()
            .map(|m| m.id)
            .collect();
        assert_eq!(ids, vec![1, 3]);
        assert!(catalog.meals_by_period(Some(MealPeriod::Dinner)).is_empty());
        assert_eq!(catalog.meals_by_period(None).len(), catalog.all_meals().len());
    }

    #[test]
    fn test_grouping_skips_empty_periods() {
        let groups = catalog().meals_grouped_by_period();
        let summary: Vec<(MealPeriod, Vec<u32>)> = groups
            .iter()
            .map(|(period, meals)| (*period, meals.iter().map(|m| m.id).collect()))
            .collect();
        assert_eq!(
            summary,
            vec![
                (MealPeriod::Breakfast, vec![1, 3]),
                (MealPeriod::AllDay, vec![2]),
            ]
        );
    }

    #[test]
    fn test_availability_accessors_skip_unavailable() {
        let catalog = catalog();
        assert_eq!(catalog.available_meals().count(), 2);
        assert!(catalog.search_meals("waffle").is_empty());
        assert_eq!(catalog.search_meals("ROMAINE").len(), 1);
        assert_eq!(catalog.meals_by_tag("vegetarian").len(), 1);
        assert_eq!(catalog.seasonal_meals().len(), 1);
    }

    #[test]
    fn test_resident_lookups() {
        let catalog = catalog();
        assert_eq!(catalog.default_resident().id, "r1");
        assert_eq!(catalog.resident_by_room("202").map(|r| r.id.as_str()), Some("r2"));
        assert!(catalog.resident_by_id("missing").is_none());
        assert_eq!(catalog.all_residents().count(), 1);

        let favorites = catalog.favorite_meals("r1");
        assert_eq!(favorites.len(), 1);
        assert_eq!(favorites[0].id, 2);
        assert!(catalog.favorite_meals("missing").is_empty());
    }

    #[test]
    fn test_display_name_lookup_ignores_case() {
        let catalog = catalog();
        assert_eq!(
            catalog.find_meal_by_display_name(" oatmeal bowl").map(|m| m.id),
            Some(1)
        );
    }

    #[test]
    fn test_rejects_catalog_without_residents() {
        let error =
            CatalogStore::from_json_str(r#"{"meals": [], "residents": []}"#).unwrap_err();
        assert_eq!(error.code, ErrorCode::InvalidFormat);
    }

    #[test]
    fn test_rejects_duplicate_meal_ids() {
        let json = SMALL_CATALOG.replace("\"id\": 3", "\"id\": 1");
        let error = CatalogStore::from_json_str(&json).unwrap_err();
        assert_eq!(error.code, ErrorCode::InvalidFormat);
        assert!(error.message.contains("duplicate meal id 1"));
    }

    #[test]
    fn test_malformed_json_is_serialization_error() {
        let error = CatalogStore::from_json_str("{").unwrap_err();
        assert_eq!(error.code, ErrorCode::SerializationError);
    }
}
