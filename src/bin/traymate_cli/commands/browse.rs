// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 TrayMate Contributors
// ABOUTME: Catalog browsing commands for traymate-cli
// ABOUTME: Menu listing, ranked recommendations and resident profiles

use std::sync::Arc;

use traymate::catalog::CatalogStore;
use traymate::errors::AppResult;
use traymate::i18n::Language;
use traymate::models::MealPeriod;
use traymate::RecommendationEngine;

use super::resolve_resident;
use crate::helpers::display;

/// Print the menu, grouped by period
pub fn menu(catalog: &CatalogStore, period: Option<MealPeriod>, language: Language) {
    let groups = match period {
        Some(period) => vec![(period, catalog.meals_by_period(Some(period)))],
        None => catalog.meals_grouped_by_period(),
    };
    for (period, meals) in groups {
        if meals.is_empty() {
            continue;
        }
        display::print_period_header(period, language);
        for meal in &meals {
            display::print_meal(meal, language);
        }
    }
}

/// Print the ranked meals for a resident
///
/// # Errors
///
/// Returns `ResourceNotFound` for an unknown resident id
pub fn recommend(
    catalog: &Arc<CatalogStore>,
    resident_id: Option<&str>,
    period: Option<MealPeriod>,
    top_n: usize,
) -> AppResult<()> {
    let resident = resolve_resident(catalog, resident_id)?;
    let engine = RecommendationEngine::new(Arc::clone(catalog));
    let recommendations = engine.recommendations_for(resident, period, top_n);

    println!("\nTop picks for {} ({})", resident.full_name, resident.id);
    println!("{}", "=".repeat(60));
    if recommendations.is_empty() {
        println!("No safe meal found for this period.");
        return Ok(());
    }
    for (index, recommendation) in recommendations.iter().enumerate() {
        display::print_recommendation(index + 1, recommendation);
    }

    if let Some(banner) = engine.top_recommendation_banner(&resident.id, period) {
        println!("\n{} {}.", banner.reason, banner.meal_name);
    }
    Ok(())
}

/// Print a resident's dietary profile
///
/// # Errors
///
/// Returns `ResourceNotFound` for an unknown resident id
pub fn resident(catalog: &CatalogStore, resident_id: Option<&str>) -> AppResult<()> {
    let resident = resolve_resident(catalog, resident_id)?;
    display::print_resident(resident, &catalog.favorite_meals(&resident.id));
    Ok(())
}
