// ABOUTME: Google Gemini provider over the generateContent REST endpoint
// ABOUTME: Converts chat messages to the Gemini wire format and classifies API failures
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 TrayMate Contributors

//! # Gemini Provider
//!
//! Implementation of the `LlmProvider` trait for Google's Gemini models.
//!
//! ## Configuration
//!
//! Set the `GEMINI_API_KEY` environment variable with your API key from
//! Google AI Studio. `TRAYMATE_LLM_BASE_URL` points the client at another
//! endpoint, which is how the integration tests reach a mock server.
//!
//! The key travels in the `x-goog-api-key` header, never in the URL, so
//! transport errors and request logs cannot carry it.
//!
//! ## Error classification
//!
//! | Reply | Error code | Retryable |
//! |---|---|---|
//! | HTTP 429 or status `RESOURCE_EXHAUSTED` | `ExternalRateLimited` | yes |
//! | HTTP 404 or status `NOT_FOUND` | `ExternalModelNotFound` | yes |
//! | HTTP 401 / 403 | `ExternalAuthFailed` | no |
//! | HTTP 5xx | `ExternalServiceUnavailable` | no |
//! | anything else, transport failure | `ExternalServiceError` | no |
//! | unparseable body | `SerializationError` | no |

use std::fmt::{Debug, Formatter, Result as FmtResult};
use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use tracing::{debug, error, instrument, warn};
use traymate_core::constants::gemini::{API_BASE_URL, DEFAULT_MODELS};

use super::{ChatMessage, ChatRequest, ChatResponse, LlmProvider, MessageRole, TokenUsage};
use crate::config::AssistantConfig;
use crate::errors::{AppError, ErrorCode};

/// Model used when a request names none
const DEFAULT_MODEL: &str = DEFAULT_MODELS[0];

/// Status string Gemini uses for quota exhaustion
const STATUS_RESOURCE_EXHAUSTED: &str = "RESOURCE_EXHAUSTED";

/// Status string Gemini uses for unknown models
const STATUS_NOT_FOUND: &str = "NOT_FOUND";

/// Header carrying the API key
pub const API_KEY_HEADER: &str = "x-goog-api-key";

// ============================================================================
// API Request/Response Types
// ============================================================================

/// Gemini API request structure
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct GeminiRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    system_instruction: Option<GeminiContent>,
    contents: Vec<GeminiContent>,
    #[serde(skip_serializing_if = "Option::is_none")]
    generation_config: Option<GenerationConfig>,
}

/// Content structure for Gemini API
#[derive(Debug, Serialize, Deserialize)]
struct GeminiContent {
    #[serde(skip_serializing_if = "Option::is_none")]
    role: Option<String>,
    #[serde(default)]
    parts: Vec<ContentPart>,
}

/// Text part; non-text parts deserialize with `text: None`
#[derive(Debug, Serialize, Deserialize)]
struct ContentPart {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    text: Option<String>,
}

/// Generation configuration
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerationConfig {
    #[serde(skip_serializing_if = "Option::is_none")]
    temperature: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    max_output_tokens: Option<u32>,
}

/// Gemini API response structure
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct GeminiResponse {
    candidates: Option<Vec<Candidate>>,
    usage_metadata: Option<UsageMetadata>,
    error: Option<GeminiError>,
}

/// Response candidate
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct Candidate {
    content: Option<GeminiContent>,
    finish_reason: Option<String>,
}

/// Usage metadata from Gemini API response
#[derive(Debug, Deserialize)]
struct UsageMetadata {
    #[serde(rename = "promptTokenCount")]
    prompt: Option<u32>,
    #[serde(rename = "candidatesTokenCount")]
    candidates: Option<u32>,
    #[serde(rename = "totalTokenCount")]
    total: Option<u32>,
}

/// API error body: `{"error": {"code", "message", "status"}}`
#[derive(Debug, Deserialize)]
struct GeminiError {
    #[serde(default)]
    message: String,
    #[serde(default)]
    status: Option<String>,
}

/// Error envelope for non-2xx replies
#[derive(Debug, Deserialize)]
struct ErrorEnvelope {
    error: GeminiError,
}

// ============================================================================
// Error Classification
// ============================================================================

/// Map a non-success Gemini reply to a classified `AppError`
///
/// Both the HTTP status and the `error.status` string in the body are
/// consulted, so a quota error is recognized even behind a proxy that rewrites
/// the HTTP code.
#[must_use]
pub fn classify_api_error(http_status: u16, body: &str, model: &str) -> AppError {
    let parsed = serde_json::from_str::<ErrorEnvelope>(body).ok();
    let api_status = parsed
        .as_ref()
        .and_then(|envelope| envelope.error.status.as_deref());
    let message = parsed
        .as_ref()
        .map(|envelope| envelope.error.message.as_str())
        .filter(|message| !message.is_empty())
        .map_or_else(|| format!("HTTP {http_status}"), str::to_owned);

    if http_status == 429 || api_status == Some(STATUS_RESOURCE_EXHAUSTED) {
        return AppError::rate_limited(extract_quota_message(&message));
    }
    if http_status == 404 || api_status == Some(STATUS_NOT_FOUND) {
        return AppError::model_not_found(model);
    }

    match http_status {
        401 | 403 => AppError::new(
            ErrorCode::ExternalAuthFailed,
            format!("Gemini rejected the API key ({http_status}): {message}"),
        ),
        500..=599 => AppError::new(
            ErrorCode::ExternalServiceUnavailable,
            format!("Gemini unavailable ({http_status}): {message}"),
        ),
        _ => AppError::external_service("Gemini", format!("({http_status}) {message}")),
    }
}

/// Turn Gemini's quota text into a short user-facing message
///
/// Gemini appends hints such as `Please retry in 6.406453963s.`; the delay is
/// rounded up to whole seconds.
fn extract_quota_message(message: &str) -> String {
    const RETRY_PREFIX: &str = "Please retry in ";

    let seconds = message.find(RETRY_PREFIX).and_then(|pos| {
        let after_prefix = &message[pos + RETRY_PREFIX.len()..];
        let end = after_prefix.find('s')?;
        after_prefix[..end].parse::<f64>().ok()
    });

    seconds.map_or_else(
        || "AI service quota exceeded. Please wait a moment and try again.".to_owned(),
        |seconds| {
            let seconds_int = seconds.ceil() as u64;
            format!("AI service quota exceeded. Please try again in {seconds_int} seconds.")
        },
    )
}

// ============================================================================
// Provider Implementation
// ============================================================================

/// Google Gemini LLM provider
pub struct GeminiProvider {
    api_key: String,
    client: Client,
    base_url: String,
    default_model: String,
}

impl GeminiProvider {
    /// Create a new Gemini provider with an API key and the default endpoint
    #[must_use]
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            client: Client::new(),
            base_url: API_BASE_URL.to_owned(),
            default_model: DEFAULT_MODEL.to_owned(),
        }
    }

    /// Create a provider from assistant configuration
    ///
    /// A missing key yields a provider that is never called: the assistant checks
    /// `AssistantConfig::is_configured` first and answers offline.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the HTTP client cannot be built.
    pub fn from_config(config: &AssistantConfig) -> Result<Self, AppError> {
        Self::new(config.api_key.clone().unwrap_or_default())
            .with_base_url(&config.base_url)
            .with_default_model(config.primary_model())
            .with_timeout(config.timeout)
    }

    /// Point the provider at another endpoint
    #[must_use]
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into().trim_end_matches('/').to_owned();
        self
    }

    /// Set a custom default model
    #[must_use]
    pub fn with_default_model(mut self, model: impl Into<String>) -> Self {
        self.default_model = model.into();
        self
    }

    /// Rebuild the HTTP client with a request timeout
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the HTTP client cannot be built.
    pub fn with_timeout(mut self, timeout: Duration) -> Result<Self, AppError> {
        self.client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| AppError::config(format!("Failed to build HTTP client: {e}")))?;
        Ok(self)
    }

    /// Convert our message role to Gemini's role format
    ///
    /// System messages travel in `systemInstruction`; if one appears here it is
    /// sent as a user turn.
    const fn convert_role(role: MessageRole) -> &'static str {
        match role {
            MessageRole::System | MessageRole::User => "user",
            MessageRole::Assistant => "model",
        }
    }

    /// Build the API URL for a model and method
    fn build_url(&self, model: &str, method: &str) -> String {
        format!("{}/models/{model}:{method}", self.base_url)
    }

    fn text_content(text: &str, role: Option<&str>) -> GeminiContent {
        GeminiContent {
            role: role.map(str::to_owned),
            parts: vec![ContentPart {
                text: Some(text.to_owned()),
            }],
        }
    }

    /// Convert chat messages to Gemini format
    fn convert_messages(messages: &[ChatMessage]) -> (Vec<GeminiContent>, Option<GeminiContent>) {
        let mut contents = Vec::new();
        let mut system_instruction = None;

        for message in messages {
            if message.role == MessageRole::System {
                system_instruction = Some(Self::text_content(&message.content, None));
            } else {
                contents.push(Self::text_content(
                    &message.content,
                    Some(Self::convert_role(message.role)),
                ));
            }
        }

        (contents, system_instruction)
    }

    /// Build a Gemini API request from a `ChatRequest`
    fn build_gemini_request(request: &ChatRequest) -> GeminiRequest {
        let (contents, system_instruction) = Self::convert_messages(&request.messages);

        let generation_config = if request.temperature.is_some() || request.max_tokens.is_some() {
            Some(GenerationConfig {
                temperature: request.temperature,
                max_output_tokens: request.max_tokens,
            })
        } else {
            None
        };

        GeminiRequest {
            system_instruction,
            contents,
            generation_config,
        }
    }

    /// Extract text content from Gemini response
    fn extract_content(response: &GeminiResponse) -> Result<String, AppError> {
        response
            .candidates
            .as_ref()
            .and_then(|c| c.first())
            .and_then(|c| c.content.as_ref())
            .and_then(|c| c.parts.first())
            .and_then(|part| part.text.clone())
            .ok_or_else(|| AppError::external_service("Gemini", "No text in Gemini response"))
    }

    /// Convert usage metadata to our token usage format
    fn convert_usage(metadata: &UsageMetadata) -> TokenUsage {
        TokenUsage {
            prompt_tokens: metadata.prompt.unwrap_or(0),
            completion_tokens: metadata.candidates.unwrap_or(0),
            total_tokens: metadata.total.unwrap_or(0),
        }
    }
}

#[async_trait]
impl LlmProvider for GeminiProvider {
    fn name(&self) -> &'static str {
        "gemini"
    }

    fn display_name(&self) -> &'static str {
        "Google Gemini"
    }

    fn default_model(&self) -> &str {
        &self.default_model
    }

    #[instrument(skip(self, request), fields(model = %request.model.as_deref().unwrap_or(DEFAULT_MODEL)))]
    async fn complete(&self, request: &ChatRequest) -> Result<ChatResponse, AppError> {
        let model = request.model.as_deref().unwrap_or(&self.default_model);
        let url = self.build_url(model, "generateContent");

        let gemini_request = Self::build_gemini_request(request);

        debug!(turns = gemini_request.contents.len(), "Sending request to Gemini API");

        let response = self
            .client
            .post(&url)
            .header(API_KEY_HEADER, self.api_key.as_str())
            .json(&gemini_request)
            .send()
            .await
            .map_err(|e| {
                let e = e.without_url();
                AppError::external_service("Gemini", format!("HTTP request failed: {e}"))
                    .with_source(e)
            })?;

        let status = response.status();
        let response_text = response.text().await.map_err(|e| {
            let e = e.without_url();
            AppError::external_service("Gemini", format!("Failed to read response: {e}"))
                .with_source(e)
        })?;

        if !status.is_success() {
            let error = classify_api_error(status.as_u16(), &response_text, model);
            if error.is_retryable_model_error() {
                warn!(status = %status, code = ?error.code, "Gemini model unavailable");
            } else {
                error!(status = %status, code = ?error.code, "Gemini API error");
            }
            return Err(error);
        }

        let gemini_response: GeminiResponse =
            serde_json::from_str(&response_text).map_err(|e| {
                error!(error = %e, "Failed to parse Gemini response");
                AppError::new(
                    ErrorCode::SerializationError,
                    format!("Failed to parse Gemini response: {e}"),
                )
                .with_source(e)
            })?;

        if let Some(api_error) = gemini_response.error {
            return Err(AppError::external_service("Gemini", api_error.message));
        }

        let content = Self::extract_content(&gemini_response)?;
        let usage = gemini_response
            .usage_metadata
            .as_ref()
            .map(Self::convert_usage);
        let finish_reason = gemini_response
            .candidates
            .as_ref()
            .and_then(|c| c.first())
            .and_then(|c| c.finish_reason.clone());

        debug!("Successfully received Gemini response");

        Ok(ChatResponse {
            content,
            model: model.to_owned(),
            usage,
            finish_reason,
        })
    }
}

impl Debug for GeminiProvider {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.debug_struct("GeminiProvider")
            .field("base_url", &self.base_url)
            .field("default_model", &self.default_model)
            .field("api_key", &"[REDACTED]")
            .finish_non_exhaustive()
    }
}
