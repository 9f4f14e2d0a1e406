// ABOUTME: Dietary matching and meal recommendation algorithms for TrayMate
// ABOUTME: Pure, synchronous scoring over the shared catalog with no I/O
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 TrayMate Contributors

#![deny(unsafe_code)]

//! # TrayMate Intelligence
//!
//! Decides which meals a resident can safely eat and ranks them.
//!
//! - **matcher**: allergen conflicts, dislikes, nutrition-goal fit, supporting tags
//! - **`recommendation_engine`**: ranked, explainable suggestions
//! - **config**: scoring weights

/// Scoring weights for the recommendation engine
pub mod config;

/// Resident-versus-meal safety and fit checks
pub mod matcher;

/// Ranked meal recommendations with reasons
pub mod recommendation_engine;

pub use config::RecommendationConfig;
pub use matcher::MealAssessment;
pub use recommendation_engine::RecommendationEngine;
