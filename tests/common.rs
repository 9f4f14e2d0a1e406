// ABOUTME: Shared test utilities and setup functions for integration tests
// ABOUTME: Provides catalogs, assistant configs and a scripted LLM provider
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 TrayMate Contributors
#![allow(
    dead_code,
    clippy::missing_errors_doc,
    clippy::missing_panics_doc,
    clippy::must_use_candidate,
    clippy::unwrap_used,
    clippy::expect_used
)]
//! Shared test utilities for `traymate`
//!
//! Integration tests include this with `mod common;`.

use std::collections::{HashMap, VecDeque};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use traymate::catalog::CatalogStore;
use traymate::config::AssistantConfig;
use traymate::errors::AppError;
use traymate::llm::{ChatMessage, ChatRequest, ChatResponse, LlmProvider};

/// Small catalog with a shellfish dish, an all-day dish and two residents
pub const SEAFOOD_CATALOG: &str = r#"{
    "meals": [
        {"id": 1, "name": "Shrimp Scampi", "ingredients": ["Shrimp", "Garlic", "Butter"],
         "nutrition": {"calories": 310, "sodium": "220mg", "protein": "28g"},
         "description": "Garlic butter shrimp", "mealPeriod": "Dinner", "timeRange": "5pm - 7pm",
         "allergenInfo": ["Shellfish", "Dairy"], "tags": ["Low Sodium", "High Protein"]},
        {"id": 2, "name": "Lobster Bisque", "ingredients": ["Lobster", "Cream"],
         "nutrition": {"calories": 280, "sodium": "610mg", "protein": "14g"},
         "description": "Creamy soup", "mealPeriod": "Lunch", "timeRange": "11am - 1pm",
         "allergenInfo": ["shellfish"], "tags": []},
        {"id": 3, "name": "Herb Baked Chicken", "ingredients": ["Chicken Breast", "Thyme"],
         "nutrition": {"calories": 420, "sodium": "380mg", "protein": "45g"},
         "description": "Roasted chicken", "mealPeriod": "Lunch", "timeRange": "11am - 1pm",
         "allergenInfo": [], "tags": ["Low Sodium", "Heart Healthy"]},
        {"id": 4, "name": "Garden Salad", "ingredients": ["Lettuce", "Olives"],
         "nutrition": {"calories": 150, "sodium": "90mg", "protein": "3g"},
         "description": "Greens", "mealPeriod": "All Day", "timeRange": "All Day",
         "allergenInfo": [], "tags": ["Vegetarian"]},
        {"id": 5, "name": "Oatmeal Bowl", "ingredients": ["Oats", "Milk", "Almonds"],
         "nutrition": {"calories": 280, "sodium": "120mg", "protein": "12g"},
         "description": "Warm oats", "mealPeriod": "Breakfast", "timeRange": "7am - 9am",
         "allergenInfo": ["Dairy", "Nuts"], "tags": ["Heart Healthy"]}
    ],
    "residents": [
        {"id": "bobby", "fullName": "Bobby Johnson", "roomNumber": "101",
         "dietaryRestrictions": [
            {"type": "medical", "name": "Low Sodium", "severity": "moderate"},
            {"type": "allergy", "name": "Shellfish", "severity": "severe"}
         ],
         "nutritionGoals": {"dailyCalories": 1800, "maxSodium": 1500, "minProtein": 50,
                            "maxCholesterol": 200, "maxSugar": 40},
         "dislikedIngredients": ["olives"],
         "favoriteMealIds": [3]},
        {"id": "mary", "fullName": "Mary Williams", "roomNumber": "102",
         "dietaryRestrictions": [
            {"type": "allergy", "name": "Dairy", "severity": "severe"}
         ],
         "nutritionGoals": {"dailyCalories": 1600, "maxSodium": 2000, "minProtein": 45,
                            "maxCholesterol": 250, "maxSugar": 35},
         "favoriteMealIds": []}
    ]
}"#;

pub fn bundled_catalog() -> Arc<CatalogStore> {
    traymate::catalog::bundled().unwrap()
}

pub fn seafood_catalog() -> Arc<CatalogStore> {
    Arc::new(CatalogStore::from_json_str(SEAFOOD_CATALOG).unwrap())
}

/// Config with a usable key and the given model order
pub fn configured<const N: usize>(models: [&str; N]) -> AssistantConfig {
    AssistantConfig::default()
        .with_api_key("test-key")
        .with_models(models)
}

// ============================================================================
// Scripted provider
// ============================================================================

/// What a scripted model does on its next call
#[derive(Debug, Clone)]
pub enum Outcome {
    Reply(String),
    RateLimited,
    ModelNotFound,
    Unavailable,
}

impl Outcome {
    pub fn reply(text: &str) -> Self {
        Self::Reply(text.to_owned())
    }
}

/// One call seen by the provider
#[derive(Debug, Clone)]
pub struct RecordedCall {
    pub model: String,
    pub messages: Vec<ChatMessage>,
}

/// Provider whose answers are scripted per model
///
/// A model with nothing left in its script replies `"reply from {model}"`.
#[derive(Default)]
pub struct ScriptedProvider {
    script: Mutex<HashMap<String, VecDeque<Outcome>>>,
    calls: Mutex<Vec<RecordedCall>>,
}

impl ScriptedProvider {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    /// Queue outcomes for a model
    pub fn script(&self, model: &str, outcomes: impl IntoIterator<Item = Outcome>) {
        self.script
            .lock()
            .unwrap()
            .entry(model.to_owned())
            .or_default()
            .extend(outcomes);
    }

    pub fn calls(&self) -> Vec<RecordedCall> {
        self.calls.lock().unwrap().clone()
    }

    pub fn models_called(&self) -> Vec<String> {
        self.calls().into_iter().map(|call| call.model).collect()
    }
}

#[async_trait]
impl LlmProvider for ScriptedProvider {
    fn name(&self) -> &'static str {
        "scripted"
    }

    fn display_name(&self) -> &'static str {
        "Scripted Test Provider"
    }

    fn default_model(&self) -> &str {
        "scripted-model"
    }

    async fn complete(&self, request: &ChatRequest) -> Result<ChatResponse, AppError> {
        let model = request.model.clone().unwrap_or_default();
        self.calls.lock().unwrap().push(RecordedCall {
            model: model.clone(),
            messages: request.messages.clone(),
        });

        let next = self
            .script
            .lock()
            .unwrap()
            .get_mut(&model)
            .and_then(VecDeque::pop_front);

        match next {
            Some(Outcome::Reply(text)) => Ok(ChatResponse {
                content: text,
                model,
                usage: None,
                finish_reason: Some("STOP".to_owned()),
            }),
            Some(Outcome::RateLimited) => Err(AppError::rate_limited(
                "AI service quota exceeded. Please try again in 30 seconds.",
            )),
            Some(Outcome::ModelNotFound) => Err(AppError::model_not_found(&model)),
            Some(Outcome::Unavailable) => Err(AppError::external_service(
                "Gemini",
                format!("{model} transport failure"),
            )),
            None => Ok(ChatResponse {
                content: format!("reply from {model}"),
                model,
                usage: None,
                finish_reason: Some("STOP".to_owned()),
            }),
        }
    }
}
