// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 TrayMate Contributors
// ABOUTME: Re-exports command modules for traymate-cli
// ABOUTME: Provides the catalog browsing commands and the interactive chat loop

pub mod browse;
pub mod chat;

use std::sync::Arc;

use traymate::catalog::CatalogStore;
use traymate::errors::{AppError, AppResult};
use traymate::models::Resident;

/// Resolve `--resident`, falling back to the catalog's first resident
pub fn resolve_resident<'a>(
    catalog: &'a CatalogStore,
    resident_id: Option<&str>,
) -> AppResult<&'a Arc<Resident>> {
    resident_id.map_or_else(
        || Ok(catalog.default_resident()),
        |id| {
            catalog
                .resident_by_id(id)
                .ok_or_else(|| AppError::not_found(format!("Resident {id}")))
        },
    )
}
