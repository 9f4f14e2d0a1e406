// ABOUTME: Integration tests for meal recommendations over full catalogs
// ABOUTME: Checks allergen exclusion, ordering, period filtering and the menu banner
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 TrayMate Contributors
#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

mod common;

use common::{bundled_catalog, seafood_catalog};
use traymate::matcher;
use traymate::models::MealPeriod;
use traymate::RecommendationEngine;

const PERIODS: [Option<MealPeriod>; 5] = [
    None,
    Some(MealPeriod::Breakfast),
    Some(MealPeriod::Lunch),
    Some(MealPeriod::Dinner),
    Some(MealPeriod::AllDay),
];

#[test]
fn test_shellfish_allergy_excludes_shellfish_meals() {
    let engine = RecommendationEngine::new(seafood_catalog());

    let ids: Vec<u32> = engine
        .recommendations("bobby", None, 10)
        .iter()
        .map(|r| r.meal.id)
        .collect();

    // Chicken: favorite + supports Low Sodium; salad: disliked olives
    assert_eq!(ids.first(), Some(&3));
    assert_eq!(ids.last(), Some(&4));
    assert!(!ids.contains(&1));
    assert!(!ids.contains(&2), "allergen labels match case-insensitively");
    assert_eq!(ids.len(), 3);
}

#[test]
fn test_reasons_explain_the_score() {
    let engine = RecommendationEngine::new(seafood_catalog());

    let top = engine.top_recommendation("bobby", None).unwrap();

    assert_eq!(top.meal.name, "Herb Baked Chicken");
    assert_eq!(top.score, 2);
    assert_eq!(
        top.all_reasons,
        vec!["One of your favorites", "Supports your Low Sodium needs"]
    );
    assert_eq!(top.reason(), "One of your favorites");
}

#[test]
fn test_period_filter_is_exact() {
    let engine = RecommendationEngine::new(seafood_catalog());

    let lunch: Vec<u32> = engine
        .recommendations("bobby", Some(MealPeriod::Lunch), 10)
        .iter()
        .map(|r| r.meal.id)
        .collect();

    assert_eq!(lunch, vec![3]);
}

#[test]
fn test_properties_hold_for_every_resident_and_period() {
    let catalog = bundled_catalog();
    let engine = RecommendationEngine::new(catalog.clone());

    for resident in catalog.all_residents() {
        for period in PERIODS {
            for top_n in [0, 1, 3, 20] {
                let recs = engine.recommendations(&resident.id, period, top_n);
                assert!(recs.len() <= top_n);
                assert!(recs.windows(2).all(|pair| pair[0].score >= pair[1].score));
                for rec in &recs {
                    assert!(!matcher::conflicts_with_allergy(resident, &rec.meal));
                    assert!(!rec.all_reasons.is_empty());
                    if let Some(period) = period {
                        assert_eq!(rec.meal.meal_period, period);
                    }
                }
            }
        }
    }
}

#[test]
fn test_equal_scores_keep_catalog_order() {
    let catalog = bundled_catalog();
    let engine = RecommendationEngine::new(catalog.clone());

    let recs = engine.recommendations("resident_003", None, 20);
    for pair in recs.windows(2) {
        if pair[0].score == pair[1].score {
            let position = |id| catalog.all_meals().iter().position(|m| m.id == id);
            assert!(position(pair[0].meal.id) < position(pair[1].meal.id));
        }
    }
}

#[test]
fn test_unknown_resident_gets_nothing() {
    let engine = RecommendationEngine::new(bundled_catalog());
    assert!(engine.recommendations("resident_999", None, 3).is_empty());
    assert!(engine.top_recommendation_banner("resident_999", None).is_none());
}

#[test]
fn test_banner_lists_restrictions_in_entry_order() {
    let engine = RecommendationEngine::new(bundled_catalog());

    let banner = engine.top_recommendation_banner("resident_001", None).unwrap();

    assert_eq!(
        banner.dietary_restrictions,
        vec!["Low Sodium", "Heart Healthy", "Shellfish"]
    );
    assert!(banner
        .reason
        .contains("(Low Sodium, Heart Healthy, Shellfish)"));
    assert!(!banner.meal_name.is_empty());
}
