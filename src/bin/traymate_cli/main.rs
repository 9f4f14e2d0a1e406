// ABOUTME: TrayMate CLI - terminal front end for the meal assistant
// ABOUTME: Shows the menu, ranks meals for a resident and runs an interactive chat
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 TrayMate Contributors
//!
//! Usage:
//! ```bash
//! # Show today's menu in French
//! traymate-cli menu --language fr
//!
//! # Lunch picks for a resident
//! traymate-cli recommend --resident resident_002 --period lunch --top 5
//!
//! # Dietary profile
//! traymate-cli resident --resident resident_003
//!
//! # Chat with the assistant (offline replies when GEMINI_API_KEY is unset)
//! traymate-cli chat --resident resident_001
//!
//! # Use a custom catalog file
//! traymate-cli --catalog ./my_catalog.json menu
//! ```

mod commands;
mod helpers;

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing::debug;
use traymate::config::AssistantConfig;
use traymate::constants::recommendations::DEFAULT_TOP_N;
use traymate::i18n::Language;
use traymate::logging::LoggingConfig;
use traymate::models::MealPeriod;

#[derive(Parser)]
#[command(
    name = "traymate-cli",
    about = "TrayMate meal assistant",
    long_about = "Browse the menu, get dietary-safe meal recommendations and chat with GrannyGBT from the terminal."
)]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Catalog JSON file (defaults to TRAYMATE_CATALOG_PATH or the bundled catalog)
    #[arg(long, global = true)]
    catalog: Option<PathBuf>,

    /// Enable debug logging
    #[arg(long, short = 'v', global = true)]
    verbose: bool,
}

#[non_exhaustive]
#[derive(Subcommand)]
enum Command {
    /// Show the menu
    Menu {
        /// Only this period (breakfast, lunch, dinner, all-day)
        #[arg(long, value_parser = parse_period)]
        period: Option<MealPeriod>,

        /// Display language (name or code: en, es, fr, zh)
        #[arg(long, value_parser = parse_language)]
        language: Option<Language>,
    },

    /// Rank safe meals for a resident
    Recommend {
        /// Resident id (defaults to the first resident)
        #[arg(long)]
        resident: Option<String>,

        /// Only this period (breakfast, lunch, dinner, all-day)
        #[arg(long, value_parser = parse_period)]
        period: Option<MealPeriod>,

        /// Number of meals to show
        #[arg(long, default_value_t = DEFAULT_TOP_N)]
        top: usize,
    },

    /// Show a resident's restrictions and nutrition goals
    Resident {
        /// Resident id (defaults to the first resident)
        #[arg(long)]
        resident: Option<String>,
    },

    /// Chat with the assistant on stdin
    Chat {
        /// Resident id (defaults to the first resident)
        #[arg(long)]
        resident: Option<String>,

        /// Reply language (name or code: en, es, fr, zh)
        #[arg(long, value_parser = parse_language)]
        language: Option<Language>,
    },
}

fn parse_period(raw: &str) -> Result<MealPeriod, String> {
    MealPeriod::parse(raw).ok_or_else(|| {
        format!("unknown meal period '{raw}' (expected breakfast, lunch, dinner or all-day)")
    })
}

fn parse_language(raw: &str) -> Result<Language, String> {
    raw.parse::<Language>().map_err(|e| e.message)
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    LoggingConfig::for_cli(cli.verbose).init()?;

    let mut config = AssistantConfig::from_env();
    if let Some(path) = cli.catalog {
        config.catalog_path = Some(path);
    }
    debug!(config = ?config, "Loaded assistant configuration");

    let catalog = traymate::catalog::from_config(&config)?;

    match cli.command {
        Command::Menu { period, language } => {
            commands::browse::menu(&catalog, period, language.unwrap_or(config.language));
        }
        Command::Recommend {
            resident,
            period,
            top,
        } => {
            commands::browse::recommend(&catalog, resident.as_deref(), period, top)?;
        }
        Command::Resident { resident } => {
            commands::browse::resident(&catalog, resident.as_deref())?;
        }
        Command::Chat { resident, language } => {
            let language = language.unwrap_or(config.language);
            commands::chat::run(catalog, &config, resident.as_deref(), language).await?;
        }
    }

    Ok(())
}
