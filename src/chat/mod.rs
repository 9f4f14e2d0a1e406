// ABOUTME: Chat layer for the meal assistant: remote sessions, offline replies and the facade
// ABOUTME: Re-exports the session, the offline responder and the assistant types
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 TrayMate Contributors

//! # Chat
//!
//! - [`ChatSession`]: grounded conversation with ordered model fallback
//! - [`OfflineResponder`]: keyword replies built from the catalog
//! - [`MealAssistant`]: picks one of the two for each message

mod assistant;
/// Keyword replies used without a working remote model
pub mod offline;
mod session;

pub use assistant::{AssistantReply, MealAssistant, ReplyMode};
pub use offline::{OfflineIntent, OfflineResponder};
pub use session::ChatSession;
