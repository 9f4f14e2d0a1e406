// ABOUTME: Catalog sources for the assistant: the bundled demo catalog or a JSON file
// ABOUTME: Chooses the source from configuration and hands out a shared read-only store
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 TrayMate Contributors

//! The demo catalog (12 meals, 3 residents) is compiled into the binary so the
//! assistant works with no files on disk.

use std::sync::Arc;

use tracing::info;

pub use traymate_core::catalog::CatalogStore;

use crate::config::AssistantConfig;
use crate::errors::AppResult;

/// Demo catalog shipped with the crate
pub const BUNDLED_CATALOG_JSON: &str = include_str!("../data/catalog.json");

/// Parse the bundled demo catalog
///
/// # Errors
///
/// Returns an error only if the bundled document is malformed.
pub fn bundled() -> AppResult<Arc<CatalogStore>> {
    CatalogStore::from_json_str(BUNDLED_CATALOG_JSON).map(Arc::new)
}

/// Load the catalog named by `TRAYMATE_CATALOG_PATH`, falling back to the bundled one
///
/// # Errors
///
/// Returns `StorageError` when the configured file cannot be read, or a parse or
/// validation error for its contents.
pub fn from_config(config: &AssistantConfig) -> AppResult<Arc<CatalogStore>> {
    match &config.catalog_path {
        Some(path) => {
            info!(path = %path.display(), "Loading catalog from file");
            CatalogStore::load_from_path(path).map(Arc::new)
        }
        None => bundled(),
    }
}
