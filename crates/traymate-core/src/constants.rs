// ABOUTME: Shared constants for the TrayMate workspace
// ABOUTME: Chat limits, Gemini defaults, and recommendation defaults
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 TrayMate Contributors

/// Chat session limits
pub mod chat {
    /// Maximum history entries kept per session (user and assistant turns)
    pub const MAX_HISTORY_ENTRIES: usize = 20;

    /// Key value shipped in sample configs; treated as "no key"
    pub const PLACEHOLDER_API_KEY: &str = "YOUR_GEMINI_API_KEY_HERE";
}

/// Gemini endpoint defaults
pub mod gemini {
    /// Public REST base URL
    pub const API_BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta";

    /// Models tried in order until one answers
    pub const DEFAULT_MODELS: &[&str] = &[
        "gemini-2.5-flash",
        "gemini-2.0-flash",
        "gemini-2.0-flash-lite",
    ];

    /// Sampling temperature
    pub const DEFAULT_TEMPERATURE: f32 = 0.8;

    /// Output token cap per reply
    pub const DEFAULT_MAX_OUTPUT_TOKENS: u32 = 2048;

    /// HTTP request timeout in seconds
    pub const DEFAULT_TIMEOUT_SECS: u64 = 30;
}

/// Recommendation defaults
pub mod recommendations {
    /// Number of suggestions the offline responder lists
    pub const OFFLINE_TOP_N: usize = 3;

    /// Number of suggestions the CLI lists by default
    pub const DEFAULT_TOP_N: usize = 3;
}
