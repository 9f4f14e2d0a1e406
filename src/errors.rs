// ABOUTME: Re-exports the unified error types from traymate-core
// ABOUTME: Lets binaries and tests use `traymate::errors` without naming the core crate
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 TrayMate Contributors

pub use traymate_core::errors::{AppError, AppResult, ErrorCode};
