// ABOUTME: Grounding prompt for the meal assistant built from the resident profile and catalog
// ABOUTME: Fixed persona and guideline text is loaded at compile time from markdown files
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 TrayMate Contributors

//! # System Prompts
//!
//! The grounding prompt is a pure function of the resident, the catalog and the
//! reply language. It lists every catalog meal so the model can only recommend
//! from that set. Nothing from a previous resident can leak in because nothing is
//! cached between calls.

use std::fmt::Write as _;

use traymate_core::catalog::CatalogStore;
use traymate_core::models::{Meal, Resident};

use crate::i18n::Language;

/// Persona and safety rules
pub const ASSISTANT_PERSONA: &str = include_str!("assistant_persona.md");

/// Formatting and tone guidelines
pub const RESPONSE_GUIDELINES: &str = include_str!("response_guidelines.md");

/// Prompt used when the resident is unknown
pub const NO_RESIDENT_PROMPT: &str = "You are GrannyGBT, a friendly meal planning assistant for TrayMate. No resident data is available.";

/// Build the grounding prompt for a resident
///
/// `None` yields [`NO_RESIDENT_PROMPT`].
#[must_use]
pub fn build_system_prompt(
    resident: Option<&Resident>,
    catalog: &CatalogStore,
    language: Language,
) -> String {
    let Some(resident) = resident else {
        return NO_RESIDENT_PROMPT.to_owned();
    };

    let meals = catalog
        .all_meals()
        .iter()
        .map(|meal| describe_meal(meal))
        .collect::<Vec<_>>()
        .join("\n\n");

    format!(
        "{persona}\n\n{resident}\nAVAILABLE MEALS:\n{meals}\n\n{guidelines}\n\n{language}",
        persona = ASSISTANT_PERSONA.trim_end(),
        resident = describe_resident(resident),
        guidelines = RESPONSE_GUIDELINES.trim_end(),
        language = language_instruction(language),
    )
}

/// Build the grounding prompt for a resident id, looked up in the catalog
#[must_use]
pub fn system_prompt_for(catalog: &CatalogStore, resident_id: &str, language: Language) -> String {
    build_system_prompt(
        catalog.resident_by_id(resident_id).map(AsRef::as_ref),
        catalog,
        language,
    )
}

fn join_or_none(items: &[String]) -> String {
    if items.is_empty() {
        "None".to_owned()
    } else {
        items.join(", ")
    }
}

fn describe_resident(resident: &Resident) -> String {
    let mut out = String::new();
    let goals = &resident.nutrition_goals;

    // Writing to a String cannot fail
    let _ = writeln!(
        out,
        "CURRENT RESIDENT: {} (Room {})",
        resident.full_name, resident.room_number
    );
    out.push_str("\nALLERGIES & DIETARY RESTRICTIONS:\n");
    if resident.dietary_restrictions.is_empty() {
        out.push_str("- None\n");
    }
    for restriction in &resident.dietary_restrictions {
        let _ = writeln!(
            out,
            "- {} (type: {}, severity: {})",
            restriction.name,
            restriction.restriction_type.as_str(),
            restriction.severity.as_str()
        );
    }
    let _ = writeln!(
        out,
        "\nDISLIKED INGREDIENTS: {}",
        join_or_none(&resident.disliked_ingredients)
    );
    out.push_str("\nNUTRITION GOALS:\n");
    let _ = writeln!(out, "- Daily Calories: {} kcal", goals.daily_calories);
    let _ = writeln!(out, "- Max Sodium: {}mg", goals.max_sodium);
    let _ = writeln!(out, "- Min Protein: {}g", goals.min_protein);
    let _ = writeln!(out, "- Max Cholesterol: {}mg", goals.max_cholesterol);
    let _ = writeln!(out, "- Max Sugar: {}g", goals.max_sugar);

    let favorites: Vec<String> = resident
        .favorite_meal_ids
        .iter()
        .map(ToString::to_string)
        .collect();
    let _ = writeln!(out, "\nFAVORITE MEAL IDS: {}", join_or_none(&favorites));
    out
}

fn describe_meal(meal: &Meal) -> String {
    format!(
        "[ID:{id}] {name} | {period} ({time})\n  Ingredients: {ingredients}\n  Allergens: {allergens}\n  Nutrition: {calories} cal, {sodium} sodium, {protein} protein\n  Tags: {tags}\n  Description: {description}",
        id = meal.id,
        name = meal.name,
        period = meal.meal_period,
        time = meal.time_range,
        ingredients = meal.ingredients.join(", "),
        allergens = join_or_none(&meal.allergen_info),
        calories = meal.nutrition.calories,
        sodium = meal.nutrition.sodium,
        protein = meal.nutrition.protein,
        tags = join_or_none(&meal.tags),
        description = meal.description,
    )
}

fn language_instruction(language: Language) -> String {
    format!(
        "LANGUAGE: You MUST respond in {language}. Greetings, recommendations and warnings must all be in {language}. Meal names may stay in English, but every description and all conversation must be in {language}."
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    const CATALOG: &str = r#"{
        "meals": [
            {"id": 7, "name": "Herb Baked Chicken", "ingredients": ["Chicken Breast", "Thyme"],
             "nutrition": {"calories": 420, "sodium": "380mg", "protein": "45g"},
             "description": "Roasted chicken", "mealPeriod": "Lunch", "timeRange": "11am - 1pm",
             "tags": ["Low Sodium"]}
        ],
        "residents": [
            {"id": "r1", "fullName": "Bobby Johnson", "roomNumber": "101",
             "dietaryRestrictions": [{"type": "allergy", "name": "Shellfish", "severity": "severe"}],
             "nutritionGoals": {"dailyCalories": 1800, "maxSodium": 1500, "minProtein": 50,
                                "maxCholesterol": 200, "maxSugar": 40},
             "favoriteMealIds": [7]}
        ]
    }"#;

    #[test]
    fn test_prompt_sections_in_order() {
        let catalog = CatalogStore::from_json_str(CATALOG).unwrap();
        let prompt = system_prompt_for(&catalog, "r1", Language::French);

        let order = [
            "CRITICAL SAFETY RULES",
            "CURRENT RESIDENT: Bobby Johnson (Room 101)",
            "- Shellfish (type: allergy, severity: severe)",
            "DISLIKED INGREDIENTS: None",
            "- Max Sodium: 1500mg",
            "FAVORITE MEAL IDS: 7",
            "[ID:7] Herb Baked Chicken | Lunch (11am - 1pm)",
            "Nutrition: 420 cal, 380mg sodium, 45g protein",
            "Allergens: None",
            "RESPONSE GUIDELINES",
            "You MUST respond in Français",
        ];
        let mut cursor = 0;
        for needle in order {
            let found = prompt[cursor..]
                .find(needle)
                .unwrap_or_else(|| panic!("missing or out of order: {needle}"));
            cursor += found + needle.len();
        }
    }

    #[test]
    fn test_unknown_resident_prompt() {
        let catalog = CatalogStore::from_json_str(CATALOG).unwrap();
        assert_eq!(
            system_prompt_for(&catalog, "nobody", Language::English),
            NO_RESIDENT_PROMPT
        );
    }
}
