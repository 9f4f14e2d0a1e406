// ABOUTME: Assistant configuration loaded from environment variables
// ABOUTME: API key, ordered model list, generation settings, history cap, catalog path and language
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 TrayMate Contributors

//! # Configuration
//!
//! Every setting has a default, so `AssistantConfig::from_env()` never fails. An
//! invalid value logs a warning and the default is used instead. A missing or
//! placeholder API key is not an error: the assistant simply runs offline.
//!
//! | Variable | Default |
//! |---|---|
//! | `GEMINI_API_KEY` | none (offline) |
//! | `TRAYMATE_LLM_MODELS` | `gemini-2.5-flash,gemini-2.0-flash,gemini-2.0-flash-lite` |
//! | `TRAYMATE_LLM_BASE_URL` | public Gemini endpoint |
//! | `TRAYMATE_LLM_TEMPERATURE` | `0.8` |
//! | `TRAYMATE_LLM_MAX_TOKENS` | `2048` |
//! | `TRAYMATE_LLM_TIMEOUT_SECS` | `30` |
//! | `TRAYMATE_HISTORY_LIMIT` | `20` |
//! | `TRAYMATE_CATALOG_PATH` | bundled catalog |
//! | `TRAYMATE_LANGUAGE` | `English` |

use std::env;
use std::fmt::{self, Debug, Display, Formatter};
use std::path::PathBuf;
use std::str::FromStr;
use std::time::Duration;

use tracing::warn;
use traymate_core::constants::{chat, gemini};

use crate::i18n::Language;

/// Environment variable holding the Gemini API key
pub const GEMINI_API_KEY_ENV: &str = "GEMINI_API_KEY";
/// Comma-separated ordered model list
pub const MODELS_ENV: &str = "TRAYMATE_LLM_MODELS";
/// API base URL override
pub const BASE_URL_ENV: &str = "TRAYMATE_LLM_BASE_URL";
/// Sampling temperature
pub const TEMPERATURE_ENV: &str = "TRAYMATE_LLM_TEMPERATURE";
/// Output token cap
pub const MAX_TOKENS_ENV: &str = "TRAYMATE_LLM_MAX_TOKENS";
/// HTTP timeout in seconds
pub const TIMEOUT_ENV: &str = "TRAYMATE_LLM_TIMEOUT_SECS";
/// History cap in entries
pub const HISTORY_LIMIT_ENV: &str = "TRAYMATE_HISTORY_LIMIT";
/// Catalog JSON path
pub const CATALOG_PATH_ENV: &str = "TRAYMATE_CATALOG_PATH";
/// Default assistant language
pub const LANGUAGE_ENV: &str = "TRAYMATE_LANGUAGE";

/// Parse an environment variable, logging and falling back on invalid input
fn parse_env_or<T: FromStr>(var: &str, default: T) -> T
where
    T::Err: Display,
{
    match env::var(var) {
        Ok(val) if !val.trim().is_empty() => match val.trim().parse() {
            Ok(parsed) => parsed,
            Err(e) => {
                warn!("Invalid value '{}' for {}: {}. Using default.", val, var, e);
                default
            }
        },
        _ => default,
    }
}

/// Non-empty trimmed value of an environment variable
fn env_non_empty(var: &str) -> Option<String> {
    env::var(var)
        .ok()
        .map(|v| v.trim().to_owned())
        .filter(|v| !v.is_empty())
}

/// Split a comma-separated model list, dropping blank entries
#[must_use]
pub fn parse_model_list(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|model| !model.is_empty())
        .map(str::to_owned)
        .collect()
}

/// The built-in ordered model list
#[must_use]
pub fn default_models() -> Vec<String> {
    gemini::DEFAULT_MODELS
        .iter()
        .map(|&model| model.to_owned())
        .collect()
}

/// Runtime configuration for the meal assistant
#[derive(Clone)]
pub struct AssistantConfig {
    /// Gemini API key; `None` runs the assistant offline
    pub api_key: Option<String>,
    /// Models tried in order until one answers
    pub models: Vec<String>,
    /// REST base URL, without a trailing slash
    pub base_url: String,
    /// Sampling temperature
    pub temperature: f32,
    /// Output token cap per reply
    pub max_output_tokens: u32,
    /// HTTP request timeout
    pub timeout: Duration,
    /// Maximum history entries kept per session
    pub history_limit: usize,
    /// Catalog file; `None` uses the bundled catalog
    pub catalog_path: Option<PathBuf>,
    /// Default reply language
    pub language: Language,
}

impl Default for AssistantConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            models: default_models(),
            base_url: gemini::API_BASE_URL.to_owned(),
            temperature: gemini::DEFAULT_TEMPERATURE,
            max_output_tokens: gemini::DEFAULT_MAX_OUTPUT_TOKENS,
            timeout: Duration::from_secs(gemini::DEFAULT_TIMEOUT_SECS),
            history_limit: chat::MAX_HISTORY_ENTRIES,
            catalog_path: None,
            language: Language::default(),
        }
    }
}

impl AssistantConfig {
    /// Load configuration from environment variables
    #[must_use]
    pub fn from_env() -> Self {
        let defaults = Self::default();

        let models = env_non_empty(MODELS_ENV)
            .map(|raw| parse_model_list(&raw))
            .filter(|models| {
                if models.is_empty() {
                    warn!("{} lists no models. Using default list.", MODELS_ENV);
                }
                !models.is_empty()
            })
            .unwrap_or(defaults.models);

        let temperature = parse_env_or(TEMPERATURE_ENV, defaults.temperature);
        let temperature = if (0.0..=2.0).contains(&temperature) {
            temperature
        } else {
            warn!(
                "{} must be between 0 and 2, got {}. Using default.",
                TEMPERATURE_ENV, temperature
            );
            defaults.temperature
        };

        let history_limit = match parse_env_or(HISTORY_LIMIT_ENV, defaults.history_limit) {
            0 => {
                warn!("{} must be positive. Using default.", HISTORY_LIMIT_ENV);
                defaults.history_limit
            }
            limit => limit,
        };

        let timeout_secs = match parse_env_or(TIMEOUT_ENV, gemini::DEFAULT_TIMEOUT_SECS) {
            0 => {
                warn!("{} must be positive. Using default.", TIMEOUT_ENV);
                gemini::DEFAULT_TIMEOUT_SECS
            }
            secs => secs,
        };

        Self {
            api_key: env_non_empty(GEMINI_API_KEY_ENV),
            models,
            base_url: env_non_empty(BASE_URL_ENV)
                .map_or(defaults.base_url, |url| url.trim_end_matches('/').to_owned()),
            temperature,
            max_output_tokens: parse_env_or(MAX_TOKENS_ENV, defaults.max_output_tokens),
            timeout: Duration::from_secs(timeout_secs),
            history_limit,
            catalog_path: env_non_empty(CATALOG_PATH_ENV).map(PathBuf::from),
            language: parse_env_or(LANGUAGE_ENV, defaults.language),
        }
    }

    /// Set the API key
    #[must_use]
    pub fn with_api_key(mut self, api_key: impl Into<String>) -> Self {
        self.api_key = Some(api_key.into());
        self
    }

    /// Replace the ordered model list
    #[must_use]
    pub fn with_models<I, S>(mut self, models: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.models = models.into_iter().map(Into::into).collect();
        self
    }

    /// Point the client at another base URL
    #[must_use]
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Whether a usable API key is present
    ///
    /// An empty key or the sample-config placeholder counts as absent.
    #[must_use]
    pub fn is_configured(&self) -> bool {
        self.api_key
            .as_deref()
            .is_some_and(|key| !key.is_empty() && key != chat::PLACEHOLDER_API_KEY)
    }

    /// The model tried first
    #[must_use]
    pub fn primary_model(&self) -> &str {
        self.models
            .first()
            .map_or(gemini::DEFAULT_MODELS[0], String::as_str)
    }
}

impl Debug for AssistantConfig {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("AssistantConfig")
            .field("api_key", &self.api_key.as_ref().map(|_| "[REDACTED]"))
            .field("models", &self.models)
            .field("base_url", &self.base_url)
            .field("temperature", &self.temperature)
            .field("max_output_tokens", &self.max_output_tokens)
            .field("timeout", &self.timeout)
            .field("history_limit", &self.history_limit)
            .field("catalog_path", &self.catalog_path)
            .field("language", &self.language)
            .finish()
    }
}
