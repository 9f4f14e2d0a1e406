// ABOUTME: Main library entry point for the TrayMate meal assistant
// ABOUTME: Wires the catalog, recommendation engine, Gemini chat session and offline responder together
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 TrayMate Contributors

#![recursion_limit = "256"]
#![deny(unsafe_code)]

//! # TrayMate
//!
//! Meal assistant core for senior-care dining. Given a catalog of meals and the
//! dietary profile of each resident, it ranks safe meals, grounds a conversational
//! model in that data, and keeps answering with deterministic text when the model
//! is unreachable.
//!
//! ## Features
//!
//! - **Catalog**: bundled demo catalog or a JSON file, validated on load
//! - **Recommendations**: allergen-safe ranking with explainable reasons
//! - **Chat**: Gemini sessions with ordered model fallback and bounded history
//! - **Offline mode**: rule-based replies that never fail
//! - **Localization**: English, Spanish, French and Chinese UI strings
//!
//! ## Example
//!
//! ```rust,no_run
//! use std::sync::Arc;
//! use traymate::chat::MealAssistant;
//! use traymate::config::AssistantConfig;
//! use traymate::i18n::Language;
//! use traymate::llm::GeminiProvider;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let config = AssistantConfig::from_env();
//!     let catalog = traymate::catalog::from_config(&config)?;
//!     let provider = Arc::new(GeminiProvider::from_config(&config)?);
//!     let mut assistant = MealAssistant::new(catalog, provider, &config);
//!     assistant.start("resident_001", Language::English);
//!     if let Some(reply) = assistant.respond("What's on the menu today?").await {
//!         println!("[{}] {}", reply.mode, reply.text);
//!     }
//!     Ok(())
//! }
//! ```

/// Catalog loading (bundled data or a configured file)
pub mod catalog;

/// Environment-driven assistant configuration
pub mod config;

/// Structured logging setup
pub mod logging;

/// Language model provider abstraction, Gemini client and prompts
pub mod llm;

/// Chat sessions, offline responder and the assistant facade
pub mod chat;

/// UI strings and catalog data translations
pub mod i18n;

/// Unified error types shared with the workspace crates
pub mod errors;

pub use traymate_core::{constants, models, orders};
pub use traymate_intelligence::{matcher, MealAssessment, RecommendationConfig, RecommendationEngine};
