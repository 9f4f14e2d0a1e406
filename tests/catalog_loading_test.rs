// ABOUTME: Integration tests for loading catalogs from the bundle and from files
// ABOUTME: Covers lookups, period filtering and the validation errors on bad input
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 TrayMate Contributors
#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

mod common;

use std::io::Write as _;

use tempfile::NamedTempFile;
use traymate::catalog::{self, CatalogStore};
use traymate::config::AssistantConfig;
use traymate::errors::ErrorCode;
use traymate::models::MealPeriod;

#[test]
fn test_bundled_catalog_lookups() {
    let catalog = common::bundled_catalog();

    assert_eq!(catalog.meals_by_period(None).len(), catalog.all_meals().len());
    assert_eq!(
        catalog.meal_by_id(7).map(|meal| meal.name.as_str()),
        Some("Herb Baked Chicken")
    );
    assert!(catalog.meal_by_id(999).is_none());
    assert_eq!(
        catalog.resident_by_id("resident_002").unwrap().full_name,
        "Mary Williams"
    );
    assert!(catalog.resident_by_id("resident_999").is_none());

    let favorites: Vec<u32> = catalog
        .favorite_meals("resident_001")
        .iter()
        .map(|meal| meal.id)
        .collect();
    assert_eq!(favorites, vec![4, 7, 11]);
}

#[test]
fn test_period_filter_returns_only_that_period() {
    let catalog = common::bundled_catalog();

    for period in MealPeriod::SERVICE_PERIODS {
        let meals = catalog.meals_by_period(Some(period));
        assert!(!meals.is_empty());
        assert!(meals.iter().all(|meal| meal.meal_period == period));
    }
    let all_day = catalog.meals_by_period(Some(MealPeriod::AllDay));
    assert_eq!(all_day.len(), 1);
    assert_eq!(all_day[0].name, "Caesar Salad with Chicken");
}

#[test]
fn test_grouped_menu_covers_every_meal_once_in_menu_order() {
    let catalog = common::bundled_catalog();

    let groups = catalog.meals_grouped_by_period();

    let periods: Vec<MealPeriod> = groups.iter().map(|(period, _)| *period).collect();
    assert_eq!(periods, MealPeriod::MENU_ORDER.to_vec());
    for (period, meals) in &groups {
        assert!(meals.iter().all(|meal| meal.meal_period == *period));
    }

    let mut grouped_ids: Vec<u32> = groups
        .iter()
        .flat_map(|(_, meals)| meals.iter().map(|meal| meal.id))
        .collect();
    let mut all_ids: Vec<u32> = catalog.all_meals().iter().map(|meal| meal.id).collect();
    grouped_ids.sort_unstable();
    all_ids.sort_unstable();
    assert_eq!(grouped_ids, all_ids);
}

#[test]
fn test_nutrition_strings_are_parsed() {
    let catalog = common::bundled_catalog();
    let chicken = catalog.meal_by_id(7).unwrap();

    assert!((chicken.nutrition.sodium.value - 380.0).abs() < f64::EPSILON);
    assert_eq!(chicken.nutrition.sodium.to_string(), "380mg");
    assert!((chicken.nutrition.protein.value - 45.0).abs() < f64::EPSILON);
}

#[test]
fn test_catalog_path_in_config_is_loaded() {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(common::SEAFOOD_CATALOG.as_bytes()).unwrap();

    let config = AssistantConfig {
        catalog_path: Some(file.path().to_path_buf()),
        ..AssistantConfig::default()
    };
    let catalog = catalog::from_config(&config).unwrap();

    assert_eq!(catalog.all_meals().len(), 5);
    assert_eq!(catalog.default_resident().id, "bobby");
}

#[test]
fn test_missing_file_is_an_error() {
    let config = AssistantConfig {
        catalog_path: Some("/definitely/not/here/catalog.json".into()),
        ..AssistantConfig::default()
    };

    assert!(catalog::from_config(&config).is_err());
}

#[test]
fn test_duplicate_meal_ids_are_rejected() {
    let json = r#"{
        "meals": [
            {"id": 1, "name": "A", "ingredients": [], "nutrition": {"calories": 100}, "description": "",
             "mealPeriod": "Lunch", "timeRange": "11am - 1pm"},
            {"id": 1, "name": "B", "ingredients": [], "nutrition": {"calories": 100}, "description": "",
             "mealPeriod": "Dinner", "timeRange": "5pm - 7pm"}
        ],
        "residents": [{"id": "r1", "fullName": "R", "roomNumber": "1",
                       "nutritionGoals": {"dailyCalories": 0, "maxSodium": 0, "minProtein": 0,
                                          "maxCholesterol": 0, "maxSugar": 0}}]
    }"#;

    let error = CatalogStore::from_json_str(json).unwrap_err();

    assert_eq!(error.code, ErrorCode::InvalidFormat);
}

#[test]
fn test_catalog_without_residents_is_rejected() {
    let error = CatalogStore::from_json_str(r#"{"meals": [], "residents": []}"#).unwrap_err();
    assert_eq!(error.code, ErrorCode::InvalidFormat);
}

#[test]
fn test_malformed_json_is_rejected() {
    let error = CatalogStore::from_json_str("{ not json").unwrap_err();
    assert_eq!(error.code, ErrorCode::SerializationError);
}
