// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 TrayMate Contributors
// ABOUTME: Interactive chat loop for traymate-cli
// ABOUTME: Reads lines from stdin and prints assistant replies with their mode badge

use std::io::Write as _;
use std::sync::Arc;

use anyhow::Result;
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing::info;
use traymate::catalog::CatalogStore;
use traymate::chat::MealAssistant;
use traymate::config::AssistantConfig;
use traymate::i18n::Language;
use traymate::llm::{GeminiProvider, LlmProvider};

use super::resolve_resident;
use crate::helpers::display;

const EXIT_WORDS: [&str; 3] = ["exit", "quit", "bye"];

/// Run the chat loop until EOF or an exit word
///
/// # Errors
///
/// Returns an error for an unknown resident, an HTTP client that cannot be
/// built, or a stdin read failure
pub async fn run(
    catalog: Arc<CatalogStore>,
    config: &AssistantConfig,
    resident_id: Option<&str>,
    language: Language,
) -> Result<()> {
    let resident_id = resolve_resident(&catalog, resident_id)?.id.clone();
    let provider: Arc<dyn LlmProvider> = Arc::new(GeminiProvider::from_config(config)?);

    let mut assistant = MealAssistant::new(catalog, provider, config);
    assistant.start(&resident_id, language);
    info!(
        resident_id = %resident_id,
        configured = assistant.session().is_configured(),
        "Chat started"
    );

    display::print_chat_banner(&assistant);

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    loop {
        print!("> ");
        std::io::stdout().flush()?;

        let Some(line) = lines.next_line().await? else {
            break;
        };
        if EXIT_WORDS.contains(&line.trim().to_lowercase().as_str()) {
            break;
        }
        if let Some(reply) = assistant.respond(&line).await {
            display::print_reply(&reply);
        }
    }

    Ok(())
}
