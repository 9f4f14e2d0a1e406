// ABOUTME: Core types for the TrayMate meal assistant
// ABOUTME: Foundation crate with error handling, domain models, the catalog store, and orders
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 TrayMate Contributors

#![deny(unsafe_code)]

//! # TrayMate Core
//!
//! Foundation crate providing the shared types of the TrayMate workspace. It has no
//! async or network code, so the algorithms crate and the assistant crate can both
//! depend on it cheaply.
//!
//! ## Modules
//!
//! - **errors**: Unified error handling with `AppError`, `ErrorCode`, and `AppResult`
//! - **models**: Meals, residents, nutrition facts, and recommendations
//! - **catalog**: The read-only `CatalogStore`
//! - **orders**: Cart and order lifecycle
//! - **constants**: Defaults shared across crates

/// Unified error handling system with standard error codes
pub mod errors;

/// Shared constants organized by domain
pub mod constants;

/// Core data models (Meal, Resident, NutritionFacts, Recommendation)
pub mod models;

/// Read-only catalog of meals and residents
pub mod catalog;

/// In-memory cart and order book
pub mod orders;
