// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 TrayMate Contributors
// ABOUTME: Re-exports helper modules for traymate-cli
// ABOUTME: Provides display formatting utilities

pub mod display;
