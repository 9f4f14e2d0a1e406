// ABOUTME: Tests for UI string tables and catalog data translations
// ABOUTME: Checks every language resolves every key and that untranslated data falls back to English
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 TrayMate Contributors
#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

mod common;

use traymate::errors::ErrorCode;
use traymate::i18n::catalog_text::{self, TextKind};
use traymate::i18n::{t, t_with_name, Language, MessageKey};
use traymate::models::MealPeriod;

#[test]
fn test_language_names_and_codes() {
    let names: Vec<&str> = Language::ALL.iter().map(Language::display_name).collect();
    assert_eq!(names, vec!["English", "Español", "Français", "中文"]);

    for language in Language::ALL {
        assert_eq!(language.code().parse::<Language>().unwrap(), language);
        assert_eq!(language.display_name().parse::<Language>().unwrap(), language);
        assert_eq!(language.to_string(), language.display_name());
    }

    let error = "tlh".parse::<Language>().unwrap_err();
    assert_eq!(error.code, ErrorCode::InvalidInput);
}

#[test]
fn test_every_language_translates_ui_strings() {
    for language in [Language::Spanish, Language::French, Language::Chinese] {
        assert_ne!(
            t(language, MessageKey::HeresTheMenu),
            t(Language::English, MessageKey::HeresTheMenu)
        );
        assert!(!t(language, MessageKey::SomethingWentWrong).is_empty());
    }
}

#[test]
fn test_welcome_substitutes_name() {
    let welcome = t_with_name(Language::French, MessageKey::GrannyWelcome, "Robert Davis");
    assert!(welcome.contains("Robert Davis"));
    assert!(!welcome.contains("{name}"));
}

#[test]
fn test_catalog_text_translations() {
    let catalog = common::bundled_catalog();
    let chicken = catalog.meal_by_id(7).unwrap();

    assert_ne!(catalog_text::meal_name(chicken, Language::Spanish), chicken.name);
    assert_eq!(catalog_text::meal_name(chicken, Language::English), chicken.name);
    assert_eq!(catalog_text::period(MealPeriod::Lunch, Language::English), "Lunch");
    assert_ne!(catalog_text::period(MealPeriod::Lunch, Language::French), "Lunch");
    assert_eq!(catalog_text::tag("Low Sodium", Language::Chinese), "低钠");
}

#[test]
fn test_every_bundled_meal_has_translations() {
    let catalog = common::bundled_catalog();
    for meal in catalog.all_meals() {
        for language in [Language::Spanish, Language::French, Language::Chinese] {
            assert_ne!(
                catalog_text::meal_name(meal, language),
                meal.name,
                "{} untranslated for {language}",
                meal.name
            );
        }
    }
}

#[test]
fn test_missing_translation_falls_back_to_source_text() {
    let source = "Chef's Mystery Casserole";

    for language in Language::ALL {
        assert_eq!(catalog_text::translate(TextKind::MealName, source, language), source);
        assert_eq!(catalog_text::translate(TextKind::Tag, "Keto", language), "Keto");
    }
}
