// ABOUTME: Deterministic replies used when the remote model is unconfigured or failing
// ABOUTME: Keyword rules answer menu and recommendation requests straight from the catalog
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 TrayMate Contributors

//! # Offline Responder
//!
//! Rules are checked in order and the first match wins. Matching is a
//! case-insensitive substring test on the user's message:
//!
//! 1. `menu`, `today`, `available` or the localized "What's on the menu today?"
//!    prompt: the full menu with an offline notice.
//! 2. `recommend`, `suggest` or the localized "Recommend a meal" prompt: the top
//!    three recommendations for the resident.
//! 3. Anything else: an offline notice naming the two commands above.
//!
//! Output depends only on the inputs and the catalog, and generation never fails.

use std::fmt::Write as _;
use std::sync::Arc;

use traymate_core::catalog::CatalogStore;
use traymate_core::constants::recommendations::OFFLINE_TOP_N;
use traymate_intelligence::RecommendationEngine;

use crate::i18n::{catalog_text, t, Language, MessageKey};

const MENU_KEYWORDS: [&str; 3] = ["menu", "today", "available"];
const RECOMMEND_KEYWORDS: [&str; 2] = ["recommend", "suggest"];

/// Which offline rule a message triggers
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OfflineIntent {
    /// List the menu
    Menu,
    /// List top recommendations
    Recommend,
    /// Explain the offline commands
    Help,
}

impl OfflineIntent {
    /// Classify a message for the given UI language
    #[must_use]
    pub fn classify(user_message: &str, language: Language) -> Self {
        let lower = user_message.to_lowercase();
        let mentions = |keywords: &[&str], prompt: MessageKey| {
            keywords.iter().any(|keyword| lower.contains(keyword))
                || lower.contains(&t(language, prompt).to_lowercase())
        };

        if mentions(&MENU_KEYWORDS, MessageKey::WhatsOnMenuToday) {
            Self::Menu
        } else if mentions(&RECOMMEND_KEYWORDS, MessageKey::RecommendAMeal) {
            Self::Recommend
        } else {
            Self::Help
        }
    }
}

/// Rule-based responder over the catalog
#[derive(Debug, Clone)]
pub struct OfflineResponder {
    catalog: Arc<CatalogStore>,
    engine: RecommendationEngine,
}

impl OfflineResponder {
    /// Create a responder with the default recommendation weights
    #[must_use]
    pub fn new(catalog: Arc<CatalogStore>) -> Self {
        let engine = RecommendationEngine::new(Arc::clone(&catalog));
        Self { catalog, engine }
    }

    /// English reply for a message
    #[must_use]
    pub fn generate_fallback(&self, user_message: &str, resident_id: &str) -> String {
        self.generate_fallback_in(user_message, resident_id, Language::English)
    }

    /// Localized reply for a message
    #[must_use]
    pub fn generate_fallback_in(
        &self,
        user_message: &str,
        resident_id: &str,
        language: Language,
    ) -> String {
        match OfflineIntent::classify(user_message, language) {
            OfflineIntent::Menu => self.menu_reply(language),
            OfflineIntent::Recommend => self.recommend_reply(resident_id, language),
            OfflineIntent::Help => Self::help_reply(language),
        }
    }

    fn menu_reply(&self, language: Language) -> String {
        let items = self
            .catalog
            .all_meals()
            .iter()
            .map(|meal| {
                format!(
                    "• **{}** ({}, {})",
                    catalog_text::meal_name(meal, language),
                    catalog_text::period(meal.meal_period, language),
                    catalog_text::time_range(meal, language)
                )
            })
            .collect::<Vec<_>>()
            .join("\n");

        format!(
            "{}\n\n{} 📋\n\n{items}",
            t(language, MessageKey::AiOfflineMenuAvailable),
            t(language, MessageKey::HeresTheMenu)
        )
    }

    fn recommend_reply(&self, resident_id: &str, language: Language) -> String {
        let recommendations = self
            .engine
            .recommendations(resident_id, None, OFFLINE_TOP_N);
        let Some(resident) = self
            .catalog
            .resident_by_id(resident_id)
            .filter(|_| !recommendations.is_empty())
        else {
            return t(language, MessageKey::NoRecommendation).to_owned();
        };

        let mut reply = format!(
            "{} {}:\n",
            t(language, MessageKey::TopPicksFor),
            resident.full_name
        );
        for (index, recommendation) in recommendations.iter().enumerate() {
            let _ = write!(
                reply,
                "\n{}. **{}** — {}",
                index + 1,
                catalog_text::meal_name(&recommendation.meal, language),
                recommendation.all_reasons.join(", ")
            );
        }
        reply
    }

    fn help_reply(language: Language) -> String {
        format!(
            "{} 😴\n\n{}\n• **\"menu\"** — {}\n• **\"recommend\"** — {}\n\n{}",
            t(language, MessageKey::AiCurrentlyOffline),
            t(language, MessageKey::YouCanStillTry),
            t(language, MessageKey::ViewTodaysMeals),
            t(language, MessageKey::SeeTopPicks),
            t(language, MessageKey::TryAgainMoment)
        )
    }
}
