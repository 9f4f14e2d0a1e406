// ABOUTME: Chat session with a grounded system prompt, ordered model fallback and bounded history
// ABOUTME: One session per conversation; the caller owns it and nothing is shared globally
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 TrayMate Contributors

//! # Chat Session
//!
//! Lifecycle: a new session is uninitialized. [`ChatSession::initialize`] binds it
//! to a resident and language, building the grounding prompt and clearing the
//! history. [`ChatSession::send_message`] then tries each configured model in
//! order:
//!
//! - success: the user and assistant turns are appended, history is trimmed to
//!   the newest whole user/assistant exchanges and the answering model becomes
//!   `current_model`;
//! - quota exhausted or model not found: the next model is tried;
//! - any other failure: returned immediately.
//!
//! When every model fails with a retryable error, the last model's error is
//! returned. A failed call never changes the history.

use std::collections::VecDeque;
use std::fmt::{self, Debug, Formatter};
use std::sync::Arc;

use tracing::{debug, info, instrument, warn};
use traymate_core::catalog::CatalogStore;
use traymate_core::constants::chat::MAX_HISTORY_ENTRIES;

use crate::config::AssistantConfig;
use crate::errors::{AppError, AppResult};
use crate::i18n::Language;
use crate::llm::{prompts, ChatMessage, ChatRequest, LlmProvider};

/// Resident binding created by `initialize`
#[derive(Debug, Clone)]
struct SessionContext {
    resident_id: String,
    language: Language,
    system_prompt: String,
}

/// A conversation with the remote model for one resident
pub struct ChatSession {
    provider: Arc<dyn LlmProvider>,
    catalog: Arc<CatalogStore>,
    configured: bool,
    models: Vec<String>,
    temperature: f32,
    max_output_tokens: u32,
    history_limit: usize,
    context: Option<SessionContext>,
    history: VecDeque<ChatMessage>,
    current_model: String,
}

impl ChatSession {
    /// Create an uninitialized session
    #[must_use]
    pub fn new(
        provider: Arc<dyn LlmProvider>,
        catalog: Arc<CatalogStore>,
        config: &AssistantConfig,
    ) -> Self {
        let history_limit = if config.history_limit == 0 {
            MAX_HISTORY_ENTRIES
        } else {
            config.history_limit
        };

        Self {
            provider,
            catalog,
            configured: config.is_configured(),
            models: config.models.clone(),
            temperature: config.temperature,
            max_output_tokens: config.max_output_tokens,
            history_limit,
            context: None,
            history: VecDeque::with_capacity(history_limit + 2),
            current_model: config.primary_model().to_owned(),
        }
    }

    /// Whether a usable API key was configured
    #[must_use]
    pub const fn is_configured(&self) -> bool {
        self.configured
    }

    /// Bind the session to a resident, discarding any previous conversation
    ///
    /// An unknown resident id is accepted; the prompt then states that no
    /// resident data is available.
    #[instrument(skip(self), fields(provider = self.provider.name()))]
    pub fn initialize(&mut self, resident_id: &str, language: Language) {
        let resident = self.catalog.resident_by_id(resident_id);
        if resident.is_none() {
            warn!(resident_id = %resident_id, "Initializing chat for unknown resident");
        }
        let system_prompt =
            prompts::build_system_prompt(resident.map(AsRef::as_ref), &self.catalog, language);

        self.context = Some(SessionContext {
            resident_id: resident_id.to_owned(),
            language,
            system_prompt,
        });
        self.history.clear();
        self.current_model = self
            .models
            .first()
            .cloned()
            .unwrap_or_else(|| self.provider.default_model().to_owned());

        info!(resident_id = %resident_id, language = %language, "Chat session initialized");
    }

    /// Re-initialize for a possibly different resident or language
    pub fn reset(&mut self, resident_id: &str, language: Language) {
        self.initialize(resident_id, language);
    }

    /// Whether `initialize` has been called
    #[must_use]
    pub const fn is_initialized(&self) -> bool {
        self.context.is_some()
    }

    /// Resident the session is bound to
    #[must_use]
    pub fn resident_id(&self) -> Option<&str> {
        self.context.as_ref().map(|c| c.resident_id.as_str())
    }

    /// Language the session replies in
    #[must_use]
    pub fn language(&self) -> Option<Language> {
        self.context.as_ref().map(|c| c.language)
    }

    /// Grounding prompt sent with every request
    #[must_use]
    pub fn system_prompt(&self) -> Option<&str> {
        self.context.as_ref().map(|c| c.system_prompt.as_str())
    }

    /// Conversation turns kept for context, oldest first
    pub fn history(&self) -> impl ExactSizeIterator<Item = &ChatMessage> {
        self.history.iter()
    }

    /// Model that produced the latest reply, or the first configured model
    #[must_use]
    pub fn current_model(&self) -> &str {
        &self.current_model
    }

    /// Send a message and return the model's reply
    ///
    /// # Errors
    ///
    /// - `SessionNotInitialized` before `initialize`
    /// - `InvalidInput` for a blank message (no remote call is made)
    /// - the first non-retryable provider error
    /// - the last model's error when every model failed with a retryable error
    pub async fn send_message(&mut self, user_message: &str) -> AppResult<String> {
        let Some(context) = self.context.as_ref() else {
            return Err(AppError::not_initialized());
        };
        let user_message = user_message.trim();
        if user_message.is_empty() {
            return Err(AppError::invalid_input("message must not be blank"));
        }

        let mut messages = Vec::with_capacity(self.history.len() + 2);
        messages.push(ChatMessage::system(context.system_prompt.clone()));
        messages.extend(self.history.iter().cloned());
        messages.push(ChatMessage::user(user_message));

        let models = self.models.clone();
        let mut last_error = None;
        for model in models {
            let request = ChatRequest::new(messages.clone())
                .with_model(model.clone())
                .with_temperature(self.temperature)
                .with_max_tokens(self.max_output_tokens);

            debug!(model = %model, "Trying model");
            match self.provider.complete(&request).await {
                Ok(response) => {
                    self.record_exchange(user_message, &response.content);
                    info!(
                        model = %model,
                        history_len = self.history.len(),
                        "Model replied"
                    );
                    self.current_model = model;
                    return Ok(response.content);
                }
                Err(error) if error.is_retryable_model_error() => {
                    warn!(model = %model, code = ?error.code, "Model unavailable, trying next");
                    last_error = Some(error);
                }
                Err(error) => {
                    warn!(model = %model, code = ?error.code, "Model call failed");
                    return Err(error);
                }
            }
        }

        Err(last_error.unwrap_or_else(|| AppError::config("no models configured")))
    }

    fn record_exchange(&mut self, user_message: &str, reply: &str) {
        self.history.push_back(ChatMessage::user(user_message));
        self.history.push_back(ChatMessage::assistant(reply));
        // Drop whole exchanges so the history always opens with a user turn
        while self.history.len() > self.history_limit {
            self.history.pop_front();
            self.history.pop_front();
        }
    }
}

impl Debug for ChatSession {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("ChatSession")
            .field("provider", &self.provider.name())
            .field("configured", &self.configured)
            .field("models", &self.models)
            .field("resident_id", &self.resident_id())
            .field("history_len", &self.history.len())
            .field("current_model", &self.current_model)
            .finish_non_exhaustive()
    }
}
