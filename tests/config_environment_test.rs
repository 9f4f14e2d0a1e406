// ABOUTME: Tests for environment-driven assistant and logging configuration
// ABOUTME: Validates defaults, overrides and the fallback for invalid values
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 TrayMate Contributors

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

use std::env;
use std::path::PathBuf;
use std::time::Duration;

use serial_test::serial;
use traymate::config::{
    AssistantConfig, BASE_URL_ENV, CATALOG_PATH_ENV, GEMINI_API_KEY_ENV, HISTORY_LIMIT_ENV,
    LANGUAGE_ENV, MAX_TOKENS_ENV, MODELS_ENV, TEMPERATURE_ENV, TIMEOUT_ENV,
};
use traymate::i18n::Language;
use traymate::logging::{LogFormat, LoggingConfig};

const ALL_VARS: [&str; 9] = [
    GEMINI_API_KEY_ENV,
    MODELS_ENV,
    BASE_URL_ENV,
    TEMPERATURE_ENV,
    MAX_TOKENS_ENV,
    TIMEOUT_ENV,
    HISTORY_LIMIT_ENV,
    CATALOG_PATH_ENV,
    LANGUAGE_ENV,
];

fn clear_env() {
    for var in ALL_VARS {
        env::remove_var(var);
    }
}

#[test]
#[serial]
fn test_defaults_without_environment() {
    clear_env();

    let config = AssistantConfig::from_env();

    assert!(!config.is_configured());
    assert_eq!(
        config.models,
        vec!["gemini-2.5-flash", "gemini-2.0-flash", "gemini-2.0-flash-lite"]
    );
    assert_eq!(
        config.base_url,
        "https://generativelanguage.googleapis.com/v1beta"
    );
    assert!((config.temperature - 0.8).abs() < f32::EPSILON);
    assert_eq!(config.max_output_tokens, 2048);
    assert_eq!(config.timeout, Duration::from_secs(30));
    assert_eq!(config.history_limit, 20);
    assert_eq!(config.catalog_path, None);
    assert_eq!(config.language, Language::English);
}

#[test]
#[serial]
fn test_environment_overrides() {
    clear_env();
    env::set_var(GEMINI_API_KEY_ENV, "real-key");
    env::set_var(MODELS_ENV, "gemini-2.0-flash-lite, gemini-2.5-flash");
    env::set_var(BASE_URL_ENV, "http://localhost:9999/v1beta/");
    env::set_var(TEMPERATURE_ENV, "0.2");
    env::set_var(MAX_TOKENS_ENV, "512");
    env::set_var(TIMEOUT_ENV, "5");
    env::set_var(HISTORY_LIMIT_ENV, "8");
    env::set_var(CATALOG_PATH_ENV, "/tmp/catalog.json");
    env::set_var(LANGUAGE_ENV, "fr");

    let config = AssistantConfig::from_env();
    clear_env();

    assert!(config.is_configured());
    assert_eq!(config.models, vec!["gemini-2.0-flash-lite", "gemini-2.5-flash"]);
    assert_eq!(config.primary_model(), "gemini-2.0-flash-lite");
    assert_eq!(config.base_url, "http://localhost:9999/v1beta");
    assert!((config.temperature - 0.2).abs() < f32::EPSILON);
    assert_eq!(config.max_output_tokens, 512);
    assert_eq!(config.timeout, Duration::from_secs(5));
    assert_eq!(config.history_limit, 8);
    assert_eq!(config.catalog_path, Some(PathBuf::from("/tmp/catalog.json")));
    assert_eq!(config.language, Language::French);
}

#[test]
#[serial]
fn test_invalid_values_fall_back_to_defaults() {
    clear_env();
    env::set_var(MODELS_ENV, " , ,");
    env::set_var(TEMPERATURE_ENV, "7.5");
    env::set_var(MAX_TOKENS_ENV, "lots");
    env::set_var(TIMEOUT_ENV, "0");
    env::set_var(HISTORY_LIMIT_ENV, "0");
    env::set_var(LANGUAGE_ENV, "Klingon");

    let config = AssistantConfig::from_env();
    clear_env();

    assert_eq!(config.primary_model(), "gemini-2.5-flash");
    assert_eq!(config.models.len(), 3);
    assert!((config.temperature - 0.8).abs() < f32::EPSILON);
    assert_eq!(config.max_output_tokens, 2048);
    assert_eq!(config.timeout, Duration::from_secs(30));
    assert_eq!(config.history_limit, 20);
    assert_eq!(config.language, Language::English);
}

#[test]
#[serial]
fn test_placeholder_key_is_not_configured() {
    clear_env();
    env::set_var(GEMINI_API_KEY_ENV, traymate::constants::chat::PLACEHOLDER_API_KEY);

    let config = AssistantConfig::from_env();
    clear_env();

    assert!(!config.is_configured());
}

#[test]
#[serial]
fn test_logging_config_from_env() {
    env::set_var("RUST_LOG", "traymate=trace");
    env::set_var("LOG_FORMAT", "json");
    env::set_var("LOG_INCLUDE_LOCATION", "true");

    let config = LoggingConfig::from_env();
    let cli = LoggingConfig::for_cli(false);

    env::remove_var("RUST_LOG");
    env::remove_var("LOG_FORMAT");
    env::remove_var("LOG_INCLUDE_LOCATION");
    let quiet_cli = LoggingConfig::for_cli(false);
    let verbose_cli = LoggingConfig::for_cli(true);

    assert_eq!(config.level, "traymate=trace");
    assert_eq!(config.format, LogFormat::Json);
    assert!(config.include_location);
    assert_eq!(cli.format, LogFormat::Json);
    assert_eq!(quiet_cli.level, "warn");
    assert_eq!(quiet_cli.format, LogFormat::Compact);
    assert_eq!(verbose_cli.level, "debug");
}
