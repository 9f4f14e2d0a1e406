// ABOUTME: Integration tests for the grounding prompt built by chat sessions
// ABOUTME: Verifies resident data, the full meal list and isolation between residents
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 TrayMate Contributors
#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

mod common;

use std::sync::Arc;

use common::{bundled_catalog, configured, seafood_catalog, ScriptedProvider};
use traymate::chat::ChatSession;
use traymate::i18n::Language;
use traymate::llm::prompts::{system_prompt_for, NO_RESIDENT_PROMPT};
use traymate::llm::LlmProvider;

#[test]
fn test_prompt_lists_every_meal_by_id() {
    let catalog = bundled_catalog();
    let prompt = system_prompt_for(&catalog, "resident_001", Language::English);

    for meal in catalog.all_meals() {
        assert!(
            prompt.contains(&format!("[ID:{}] {}", meal.id, meal.name)),
            "missing meal {}",
            meal.id
        );
    }
    assert!(prompt.contains("CURRENT RESIDENT: Bobby Johnson (Room 101)"));
    assert!(prompt.contains("- Shellfish (type: allergy, severity: severe)"));
    assert!(prompt.contains("DISLIKED INGREDIENTS: mushrooms, olives"));
    assert!(prompt.contains("FAVORITE MEAL IDS: 4, 7, 11"));
    assert!(prompt.contains("You MUST respond in English"));
}

#[test]
fn test_prompt_uses_language_display_name() {
    let catalog = bundled_catalog();

    let prompt = system_prompt_for(&catalog, "resident_002", Language::Chinese);

    assert!(prompt.contains("You MUST respond in 中文"));
    assert!(prompt.contains("- Peanuts (type: allergy, severity: severe)"));
    assert!(prompt.contains("- Lactose (type: intolerance, severity: moderate)"));
}

#[test]
fn test_reinitializing_for_another_resident_leaves_no_trace() {
    let provider: Arc<dyn LlmProvider> = ScriptedProvider::new();
    let mut session = ChatSession::new(provider, seafood_catalog(), &configured(["model-a"]));

    session.initialize("bobby", Language::English);
    let bobby_prompt = session.system_prompt().unwrap().to_owned();
    assert!(bobby_prompt.contains("Shellfish"));
    assert!(bobby_prompt.contains("olives"));

    session.initialize("mary", Language::English);
    let mary_prompt = session.system_prompt().unwrap();

    assert!(mary_prompt.contains("CURRENT RESIDENT: Mary Williams"));
    assert!(!mary_prompt.contains("Bobby Johnson"));
    assert!(!mary_prompt.contains("- Shellfish (type"));
    assert!(!mary_prompt.contains("DISLIKED INGREDIENTS: olives"));
    assert!(!mary_prompt.contains("FAVORITE MEAL IDS: 3"));
}

#[test]
fn test_unknown_resident_gets_minimal_prompt() {
    let provider: Arc<dyn LlmProvider> = ScriptedProvider::new();
    let mut session = ChatSession::new(provider, seafood_catalog(), &configured(["model-a"]));

    session.initialize("ghost", Language::English);

    assert_eq!(session.system_prompt(), Some(NO_RESIDENT_PROMPT));
    assert!(session.is_initialized());
}

#[test]
fn test_prompt_is_pure() {
    let catalog = seafood_catalog();
    assert_eq!(
        system_prompt_for(&catalog, "bobby", Language::French),
        system_prompt_for(&catalog, "bobby", Language::French)
    );
}
