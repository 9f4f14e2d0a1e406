// ABOUTME: Meal assistant facade choosing between the remote model and the offline responder
// ABOUTME: Every non-blank message gets a reply tagged with the mode that produced it
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 TrayMate Contributors

use std::fmt::{self, Display, Formatter};
use std::sync::Arc;

use serde::Serialize;
use tracing::{debug, error, warn};
use traymate_core::catalog::CatalogStore;
use traymate_core::errors::ErrorCode;

use super::{ChatSession, OfflineResponder};
use crate::config::AssistantConfig;
use crate::i18n::{t, t_with_name, Language, MessageKey};
use crate::llm::LlmProvider;

/// Which path produced a reply
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ReplyMode {
    /// Answered by a remote model
    Ai,
    /// Answered by the keyword responder
    Offline,
}

impl Display for ReplyMode {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Ai => "AI",
            Self::Offline => "Offline",
        })
    }
}

/// A reply shown to the user
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AssistantReply {
    /// Reply text
    pub text: String,
    /// Path that produced it
    pub mode: ReplyMode,
}

/// Conversation front door used by the CLI
#[derive(Debug)]
pub struct MealAssistant {
    catalog: Arc<CatalogStore>,
    session: ChatSession,
    offline: OfflineResponder,
    resident_id: String,
    language: Language,
}

impl MealAssistant {
    /// Create an assistant bound to the catalog's default resident
    #[must_use]
    pub fn new(
        catalog: Arc<CatalogStore>,
        provider: Arc<dyn LlmProvider>,
        config: &AssistantConfig,
    ) -> Self {
        let session = ChatSession::new(provider, Arc::clone(&catalog), config);
        let offline = OfflineResponder::new(Arc::clone(&catalog));
        let resident_id = catalog.default_resident().id.clone();

        Self {
            catalog,
            session,
            offline,
            resident_id,
            language: config.language,
        }
    }

    /// Begin a conversation for a resident, discarding any previous one
    pub fn start(&mut self, resident_id: &str, language: Language) {
        resident_id.clone_into(&mut self.resident_id);
        self.language = language;
        if self.session.is_configured() {
            self.session.initialize(resident_id, language);
        } else {
            debug!("No API key configured, replies will come from the offline responder");
        }
    }

    /// Reply to a message
    ///
    /// Returns `None` for a blank message. Remote failures never surface: they are
    /// logged and answered offline.
    pub async fn respond(&mut self, user_message: &str) -> Option<AssistantReply> {
        if user_message.trim().is_empty() {
            return None;
        }

        if self.session.is_configured() {
            match self.session.send_message(user_message).await {
                Ok(text) => {
                    return Some(AssistantReply {
                        text,
                        mode: ReplyMode::Ai,
                    })
                }
                Err(e) if e.code == ErrorCode::SessionNotInitialized => {
                    error!(error = %e, "Chat used before start, answering offline");
                }
                Err(e) => {
                    warn!(error = %e, code = ?e.code, "Remote model failed, answering offline");
                }
            }
        }

        Some(AssistantReply {
            text: self
                .offline
                .generate_fallback_in(user_message, &self.resident_id, self.language),
            mode: ReplyMode::Offline,
        })
    }

    /// Greeting for the current resident
    #[must_use]
    pub fn welcome(&self) -> String {
        let name = self
            .catalog
            .resident_by_id(&self.resident_id)
            .map_or(self.resident_id.as_str(), |r| r.full_name.as_str());
        t_with_name(self.language, MessageKey::GrannyWelcome, name)
    }

    /// Generic apology for unexpected failures
    #[must_use]
    pub const fn something_went_wrong(&self) -> &'static str {
        t(self.language, MessageKey::SomethingWentWrong)
    }

    /// The underlying chat session
    #[must_use]
    pub const fn session(&self) -> &ChatSession {
        &self.session
    }

    /// Resident the assistant is speaking about
    #[must_use]
    pub fn resident_id(&self) -> &str {
        &self.resident_id
    }

    /// Reply language
    #[must_use]
    pub const fn language(&self) -> Language {
        self.language
    }
}
