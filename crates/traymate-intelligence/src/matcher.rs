// ABOUTME: Decides whether a meal is safe for a resident and how well it fits their diet
// ABOUTME: Allergen conflicts, severity, dislikes, nutrition-goal fit and supporting tags
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 TrayMate Contributors

//! # Restriction Matcher
//!
//! Every check is a pure function of one resident and one meal and never fails.
//! Text comparisons are case-insensitive. Allergy checks lean toward flagging: a
//! false positive hides a safe meal, a false negative could hurt someone.

use traymate_core::models::{DietaryRestriction, Meal, Resident, Severity};
use traymate_core::orders::CartItem;

/// Ingredient keywords that belong to a named allergen family
///
/// Keys are compared against the singular, lowercase allergy name. Catalog allergen
/// labels do not list these members separately, so ingredient text is the only signal.
const ALLERGEN_FAMILIES: &[(&str, &[&str])] = &[
    (
        "shellfish",
        &["shrimp", "crab", "lobster", "prawn", "scallop", "clam", "mussel", "oyster"],
    ),
    ("fish", &["salmon", "tuna", "cod", "tilapia", "halibut", "trout", "anchov"]),
    ("peanut", &["peanut"]),
    (
        "tree nut",
        &["almond", "walnut", "pecan", "cashew", "pistachio", "hazelnut"],
    ),
    ("nut", &["almond", "walnut", "pecan", "cashew", "pistachio", "hazelnut", "peanut"]),
    ("dairy", &["milk", "cheese", "butter", "cream", "yogurt", "parmesan"]),
    ("milk", &["milk", "cheese", "butter", "cream", "yogurt", "parmesan"]),
    ("egg", &["egg"]),
    ("gluten", &["flour", "bread", "crouton", "pasta", "waffle", "pancake"]),
    ("wheat", &["flour", "bread", "crouton", "pasta"]),
    ("soy", &["soy", "tofu", "edamame"]),
];

/// Restriction keywords mapped to the meal tags that serve them
const SUPPORTING_TAG_KEYWORDS: &[(&str, &[&str])] = &[
    ("heart", &["heart healthy", "omega-3"]),
    ("sodium", &["low sodium"]),
    ("salt", &["low sodium"]),
    ("diabet", &["low sugar", "low carb"]),
    ("sugar", &["low sugar"]),
    ("carb", &["low carb"]),
    ("calorie", &["low calorie"]),
    ("protein", &["high protein"]),
    ("fiber", &["high fiber"]),
    ("vegetarian", &["vegetarian", "vegan"]),
    ("vegan", &["vegan"]),
];

/// Tags that describe an ingredient being present rather than a dietary benefit
const PRESENCE_TAG_PREFIX: &str = "contains ";

/// Everything the matcher knows about one resident and one meal
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MealAssessment {
    /// Any allergy restriction conflicts with the meal
    pub allergy_conflict: bool,
    /// Highest severity among conflicting allergies
    pub conflict_severity: Option<Severity>,
    /// First disliked ingredient found in the meal
    pub disliked_ingredient: Option<String>,
    /// Meal stays within every set nutrition goal
    pub fits_goals: bool,
    /// Non-allergy restrictions the meal's tags support, in resident order
    pub supported_restrictions: Vec<String>,
}

impl MealAssessment {
    /// Whether the meal may be offered at all
    #[must_use]
    pub const fn is_safe(&self) -> bool {
        !self.allergy_conflict
    }
}

fn normalize(text: &str) -> String {
    text.trim().to_lowercase()
}

/// Lowercase singular form: `"Peanuts"` becomes `"peanut"`, `"Tree Nuts"` becomes `"tree nut"`
fn singular(text: &str) -> String {
    let lower = normalize(text);
    match lower.strip_suffix('s') {
        Some(stem) if stem.len() >= 3 && !stem.ends_with('s') => stem.to_owned(),
        _ => lower,
    }
}

/// Singular lowercase words of a label: `"Tree Nuts"` becomes `["tree", "nut"]`
fn words(text: &str) -> Vec<String> {
    text.split(|c: char| !c.is_alphanumeric())
        .filter(|word| !word.is_empty())
        .map(singular)
        .collect()
}

/// Whether `needle` appears as a run of whole words inside `haystack`
fn contains_words(haystack: &[String], needle: &[String]) -> bool {
    !needle.is_empty() && haystack.windows(needle.len()).any(|run| run == needle)
}

fn family_members(allergy_stem: &str) -> &'static [&'static str] {
    ALLERGEN_FAMILIES
        .iter()
        .find(|(family, _)| *family == allergy_stem)
        .map(|&(_, members)| members)
        .unwrap_or_default()
}

/// Whether one allergy restriction conflicts with a meal
fn allergy_conflicts(allergy: &DietaryRestriction, meal: &Meal) -> bool {
    let name = normalize(&allergy.name);
    if name.is_empty() {
        return false;
    }
    let stem = singular(&allergy.name);
    let allergy_words = words(&allergy.name);

    // Whole-word containment either way: "Nuts" matches "Tree Nuts" and back,
    // "Fish" does not match "Shellfish"
    let label_hit = meal.allergen_info.iter().any(|label| {
        let label_words = words(label);
        contains_words(&label_words, &allergy_words)
            || contains_words(&allergy_words, &label_words)
    });
    if label_hit {
        return true;
    }

    let members = family_members(&stem);
    meal.ingredients.iter().any(|ingredient| {
        let ingredient = normalize(ingredient);
        ingredient.contains(&name)
            || ingredient.contains(&stem)
            || members.iter().any(|member| ingredient.contains(member))
    })
}

/// True if any of the resident's allergies appears in the meal's allergen labels
/// or ingredients
#[must_use]
pub fn conflicts_with_allergy(resident: &Resident, meal: &Meal) -> bool {
    resident
        .allergies()
        .any(|allergy| allergy_conflicts(allergy, meal))
}

/// Highest severity among the resident's allergies that conflict with the meal
#[must_use]
pub fn severity_of(resident: &Resident, meal: &Meal) -> Option<Severity> {
    resident
        .allergies()
        .filter(|allergy| allergy_conflicts(allergy, meal))
        .map(|allergy| allergy.severity)
        .max()
}

/// First disliked ingredient that appears in any of the meal's ingredients
#[must_use]
pub fn disliked_ingredient<'r>(resident: &'r Resident, meal: &Meal) -> Option<&'r str> {
    let ingredients: Vec<String> = meal.ingredients.iter().map(|i| normalize(i)).collect();
    resident
        .disliked_ingredients
        .iter()
        .map(String::as_str)
        .find(|disliked| {
            let disliked = normalize(disliked);
            !disliked.is_empty() && ingredients.iter().any(|i| i.contains(&disliked))
        })
}

/// True if any disliked ingredient appears in the meal
#[must_use]
pub fn violates_dislike(resident: &Resident, meal: &Meal) -> bool {
    disliked_ingredient(resident, meal).is_some()
}

/// Upper bound check where a non-positive goal means "not set"
fn within_max(value: f64, goal: f64) -> bool {
    goal <= 0.0 || value <= goal
}

/// Lower bound check where a non-positive goal means "not set"
fn at_least(value: f64, goal: f64) -> bool {
    goal <= 0.0 || value >= goal
}

/// True if the meal respects every nutrition goal the resident has set
#[must_use]
pub fn fits_nutrition_goals(resident: &Resident, meal: &Meal) -> bool {
    let goals = &resident.nutrition_goals;
    let facts = &meal.nutrition;
    within_max(facts.calories.value, goals.daily_calories)
        && within_max(facts.sodium.value, goals.max_sodium)
        && at_least(facts.protein.value, goals.min_protein)
        && within_max(facts.cholesterol.value, goals.max_cholesterol)
        && within_max(facts.sugar.value, goals.max_sugar)
}

fn tag_supports(restriction: &str, tag: &str) -> bool {
    if tag.is_empty() || tag.starts_with(PRESENCE_TAG_PREFIX) {
        return false;
    }
    if tag.contains(restriction) || restriction.contains(tag) {
        return true;
    }
    SUPPORTING_TAG_KEYWORDS
        .iter()
        .filter(|(keyword, _)| restriction.contains(keyword))
        .any(|(_, tags)| tags.contains(&tag))
}

/// Names of the resident's non-allergy restrictions that a meal tag supports
#[must_use]
pub fn supported_restrictions(resident: &Resident, meal: &Meal) -> Vec<String> {
    let tags: Vec<String> = meal.tags.iter().map(|t| normalize(t)).collect();
    resident
        .non_allergy_restrictions()
        .filter(|restriction| {
            let name = normalize(&restriction.name);
            !name.is_empty() && tags.iter().any(|tag| tag_supports(&name, tag))
        })
        .map(|restriction| restriction.name.clone())
        .collect()
}

/// Run every check for one resident and meal
#[must_use]
pub fn assess(resident: &Resident, meal: &Meal) -> MealAssessment {
    let conflict_severity = severity_of(resident, meal);
    MealAssessment {
        allergy_conflict: conflict_severity.is_some(),
        conflict_severity,
        disliked_ingredient: disliked_ingredient(resident, meal).map(str::to_owned),
        fits_goals: fits_nutrition_goals(resident, meal),
        supported_restrictions: supported_restrictions(resident, meal),
    }
}

/// Cart items that conflict with one of the resident's allergies
#[must_use]
pub fn unsafe_cart_items<'c>(resident: &Resident, items: &'c [CartItem]) -> Vec<&'c CartItem> {
    items
        .iter()
        .filter(|item| conflicts_with_allergy(resident, &item.meal))
        .collect()
}
