// ABOUTME: Localization for the assistant: supported languages and typed UI message keys
// ABOUTME: Each language table is an exhaustive match so a missing string fails to compile
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 TrayMate Contributors

//! # Localization
//!
//! Two kinds of text are translated:
//!
//! - **UI messages** ([`MessageKey`]): every string the assistant itself emits.
//!   Tables are `match` expressions, so they are complete by construction.
//! - **Catalog data** ([`catalog_text`]): meal names, descriptions, tags, periods
//!   and time ranges. These tables are partial; a missing entry returns the
//!   English source string unchanged.

/// Translations for catalog data with English fallback
pub mod catalog_text;

mod messages;

use std::fmt::{self, Display, Formatter};
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use traymate_core::errors::AppError;

/// Languages the assistant can reply in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Language {
    /// English (source language of all catalog data)
    #[default]
    English,
    /// Spanish
    #[serde(rename = "Español")]
    Spanish,
    /// French
    #[serde(rename = "Français")]
    French,
    /// Simplified Chinese
    #[serde(rename = "中文")]
    Chinese,
}

impl Language {
    /// Every supported language, in settings-menu order
    pub const ALL: [Self; 4] = [Self::English, Self::Spanish, Self::French, Self::Chinese];

    /// Name shown in the language picker and written into the grounding prompt
    #[must_use]
    pub const fn display_name(&self) -> &'static str {
        match self {
            Self::English => "English",
            Self::Spanish => "Español",
            Self::French => "Français",
            Self::Chinese => "中文",
        }
    }

    /// ISO 639-1 code
    #[must_use]
    pub const fn code(&self) -> &'static str {
        match self {
            Self::English => "en",
            Self::Spanish => "es",
            Self::French => "fr",
            Self::Chinese => "zh",
        }
    }
}

impl Display for Language {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

impl FromStr for Language {
    type Err = AppError;

    /// Accepts display names, English names and ISO codes, ignoring case
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_lowercase();
        match wanted.as_str() {
            "english" | "en" => Ok(Self::English),
            "español" | "espanol" | "spanish" | "es" => Ok(Self::Spanish),
            "français" | "francais" | "french" | "fr" => Ok(Self::French),
            "中文" | "chinese" | "zh" => Ok(Self::Chinese),
            _ => Err(AppError::invalid_input(format!(
                "unsupported language '{}'",
                s.trim()
            ))),
        }
    }
}

/// Every UI string the assistant emits
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MessageKey {
    /// Assistant persona name
    GrannyGbt,
    /// Subtitle under the persona name
    AiMealAssistant,
    /// Header prefix naming the resident being advised
    MealAdvisorFor,
    /// Typing indicator
    Thinking,
    /// Friendly error shown when a reply cannot be produced
    SomethingWentWrong,
    /// Quick question: today's menu
    WhatsOnMenuToday,
    /// Quick question: a recommendation
    RecommendAMeal,
    /// Quick question: dietary restrictions
    ViewDietaryRestrictionsPrompt,
    /// Quick question: low sodium meals
    WhatMealsLowSodium,
    /// Offline menu header
    HeresTheMenu,
    /// Offline menu footer
    AiOfflineMenuAvailable,
    /// Offline recommendation header prefix
    TopPicksFor,
    /// Generic offline notice
    AiCurrentlyOffline,
    /// Lead-in for the offline command list
    YouCanStillTry,
    /// Offline command description for "menu"
    ViewTodaysMeals,
    /// Offline command description for "recommend"
    SeeTopPicks,
    /// Offline notice closing line
    TryAgainMoment,
    /// Welcome message, `{name}` is replaced with the resident's name
    GrannyWelcome,
    /// Short welcome message, `{name}` is replaced with the resident's name
    GrannyWelcomeShort,
    /// Shown when no meal is safe to recommend
    NoRecommendation,
    /// Section heading for restrictions
    DietaryRestrictions,
    /// Nutrition label
    Calories,
    /// Nutrition label
    Sodium,
    /// Nutrition label
    Protein,
}

/// Look up a UI string
#[must_use]
pub const fn t(language: Language, key: MessageKey) -> &'static str {
    match language {
        Language::English => messages::english(key),
        Language::Spanish => messages::spanish(key),
        Language::French => messages::french(key),
        Language::Chinese => messages::chinese(key),
    }
}

/// Look up a UI string and substitute `{name}`
#[must_use]
pub fn t_with_name(language: Language, key: MessageKey, name: &str) -> String {
    t(language, key).replace("{name}", name)
}
