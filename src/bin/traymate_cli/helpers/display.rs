// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 TrayMate Contributors
// ABOUTME: Output formatting helpers for traymate-cli
// ABOUTME: Provides consistent display functions for meals, residents and chat replies

use std::sync::Arc;

use traymate::chat::{AssistantReply, MealAssistant};
use traymate::i18n::{catalog_text, t, Language, MessageKey};
use traymate::models::{Meal, MealPeriod, Recommendation, Resident};

/// Print a period heading
pub fn print_period_header(period: MealPeriod, language: Language) {
    let label = catalog_text::period(period, language);
    println!("\n{label}");
    println!("{}", "=".repeat(60));
}

/// Print one menu entry
pub fn print_meal(meal: &Meal, language: Language) {
    let tags: Vec<&str> = meal
        .tags
        .iter()
        .map(|tag| catalog_text::tag(tag, language))
        .collect();

    println!(
        "[{}] {} ({})",
        meal.id,
        catalog_text::meal_name(meal, language),
        catalog_text::time_range(meal, language)
    );
    println!("     {}", catalog_text::meal_description(meal, language));
    println!(
        "     {}: {} | {}: {} | {}: {}",
        t(language, MessageKey::Calories),
        meal.nutrition.calories,
        t(language, MessageKey::Sodium),
        meal.nutrition.sodium,
        t(language, MessageKey::Protein),
        meal.nutrition.protein
    );
    if !tags.is_empty() {
        println!("     {}", tags.join(" · "));
    }
    if !meal.is_available {
        println!("     (currently unavailable)");
    }
}

/// Print one ranked recommendation
pub fn print_recommendation(rank: usize, recommendation: &Recommendation) {
    let meal = &recommendation.meal;
    println!(
        "{rank}. {} [{}] score {}",
        meal.name, meal.meal_period, recommendation.score
    );
    for reason in &recommendation.all_reasons {
        println!("     • {reason}");
    }
}

/// Print a resident profile with favorite meals
pub fn print_resident(resident: &Resident, favorites: &[Arc<Meal>]) {
    let goals = &resident.nutrition_goals;

    println!("\n{} ({})", resident.full_name, resident.id);
    println!("{}", "=".repeat(60));
    println!("   Room: {}", resident.room_number);

    println!("\nDietary restrictions:");
    if resident.dietary_restrictions.is_empty() {
        println!("   None");
    }
    for restriction in &resident.dietary_restrictions {
        println!(
            "   • {} ({}, {})",
            restriction.name,
            restriction.restriction_type.as_str(),
            restriction.severity.as_str()
        );
    }

    println!("\nNutrition goals:");
    println!("   Daily calories:  {} kcal", goals.daily_calories);
    println!("   Max sodium:      {} mg", goals.max_sodium);
    println!("   Min protein:     {} g", goals.min_protein);
    println!("   Max cholesterol: {} mg", goals.max_cholesterol);
    println!("   Max sugar:       {} g", goals.max_sugar);

    if !resident.disliked_ingredients.is_empty() {
        println!("\nDislikes: {}", resident.disliked_ingredients.join(", "));
    }
    if !favorites.is_empty() {
        let names: Vec<&str> = favorites.iter().map(|meal| meal.name.as_str()).collect();
        println!("Favorites: {}", names.join(", "));
    }
}

/// Print the greeting shown when a chat starts
pub fn print_chat_banner(assistant: &MealAssistant) {
    let language = assistant.language();
    println!("\n{}", t(language, MessageKey::AiMealAssistant));
    println!("{}", "=".repeat(60));
    if !assistant.session().is_configured() {
        println!("(GEMINI_API_KEY is not set; replies come from the offline assistant)");
    }
    println!("{}", assistant.welcome());
    println!("\nType 'exit' to leave.\n");
}

/// Print a reply with its mode badge
pub fn print_reply(reply: &AssistantReply) {
    println!("\n[{}] {}\n", reply.mode, reply.text);
}
