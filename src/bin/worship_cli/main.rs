// ABOUTME: Worship CLI - command-line front end over a snapshot of church documents
// ABOUTME: Resolves roles, exports set-lists, suggests songs, and shows calendars and agendas
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Worship Planner Contributors
//!
//! Usage:
//! ```bash
//! # Effective roles and permissions of a user in one church
//! worship-cli --snapshot church.json roles --user u1 --tenant grace
//!
//! # Set-list export rows as a table
//! worship-cli --snapshot church.json set-list --id easter-2024
//!
//! # Song suggestions from the most recent set-lists
//! worship-cli --snapshot church.json suggest --limit 5 --tenant grace
//!
//! # Events grouped by day
//! worship-cli --snapshot church.json calendar
//!
//! # Seed a plan from the Easter template
//! worship-cli seed --tenant grace --date 2025-04-20 --template easter
//!
//! # Check a start time
//! worship-cli time 9:5
//! ```

mod commands;
mod helpers;

use std::path::PathBuf;

use chrono::NaiveDate;
use clap::{Parser, Subcommand, ValueEnum};
use tracing::debug;
use worship_planner::{
    config::PlannerConfig,
    errors::{AppError, AppResult},
    logging::LoggingConfig,
    store::Snapshot,
};

type Result<T> = AppResult<T>;

#[derive(Parser)]
#[command(
    name = "worship-cli",
    about = "Worship Planner CLI",
    long_about = "Inspect roles, set-lists, song suggestions, calendars, and service plans from a snapshot of church documents."
)]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Snapshot JSON file with users, members, songs, setLists, events, and plans
    #[arg(long, short = 's', global = true)]
    snapshot: Option<PathBuf>,

    /// Enable debug logging
    #[arg(long, short = 'v', global = true)]
    verbose: bool,
}

#[non_exhaustive]
#[derive(Subcommand)]
enum Command {
    /// Effective roles and permissions of a user in one church
    Roles {
        /// User id
        #[arg(long)]
        user: String,

        /// Church (tenant) id
        #[arg(long)]
        tenant: String,
    },

    /// Materialized export rows of a set-list
    SetList {
        /// Set-list id
        #[arg(long)]
        id: String,

        /// Output format
        #[arg(long, value_enum, default_value_t = OutputFormat::Table)]
        format: OutputFormat,
    },

    /// Songs ranked by use in the most recent set-lists
    Suggest {
        /// Maximum songs to return (defaults to `WORSHIP_SUGGESTION_LIMIT`)
        #[arg(long)]
        limit: Option<usize>,

        /// Restrict to one church
        #[arg(long)]
        tenant: Option<String>,
    },

    /// Events grouped by calendar day
    Calendar {
        /// Restrict to one church
        #[arg(long)]
        tenant: Option<String>,
    },

    /// Time-ordered agenda of a service plan
    Agenda {
        /// Service plan id
        #[arg(long)]
        plan: String,
    },

    /// Seed a new service plan from templates and print it as JSON
    Seed {
        /// Church (tenant) id
        #[arg(long)]
        tenant: String,

        /// Service date (YYYY-MM-DD)
        #[arg(long)]
        date: NaiveDate,

        /// Service template id
        #[arg(long)]
        template: String,

        /// Section template ids, comma-separated (defaults to the template's own)
        #[arg(long, value_delimiter = ',')]
        sections: Vec<String>,
    },

    /// List section and service templates
    Templates,

    /// Validate, normalize, and display an `HH:MM` time
    Time {
        /// Time value
        value: String,
    },
}

/// Rendering of tabular command output
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    /// Aligned text columns
    Table,
    /// Pretty-printed JSON
    Json,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut logging = LoggingConfig::from_env();
    if cli.verbose {
        logging = logging.with_level("debug");
    }
    logging
        .init()
        .map_err(|e| AppError::internal(format!("Failed to initialize logging: {e}")))?;

    let config = PlannerConfig::from_env()?;
    debug!(?config, "Worship CLI starting");

    match cli.command {
        Command::Roles { user, tenant } => {
            let snapshot = load_snapshot(cli.snapshot).await?;
            commands::access::roles(&snapshot, &user, &tenant).await?;
        }
        Command::SetList { id, format } => {
            let snapshot = load_snapshot(cli.snapshot).await?;
            commands::music::set_list(&snapshot, &config, &id, format)?;
        }
        Command::Suggest { limit, tenant } => {
            let snapshot = load_snapshot(cli.snapshot).await?;
            commands::music::suggest(&snapshot, &config, limit, tenant.as_deref());
        }
        Command::Calendar { tenant } => {
            let snapshot = load_snapshot(cli.snapshot).await?;
            commands::plans::calendar(&snapshot, tenant.as_deref());
        }
        Command::Agenda { plan } => {
            let snapshot = load_snapshot(cli.snapshot).await?;
            commands::plans::agenda(&snapshot, &plan)?;
        }
        Command::Seed {
            tenant,
            date,
            template,
            sections,
        } => {
            commands::plans::seed(&tenant, date, &template, &sections)?;
        }
        Command::Templates => commands::plans::templates(),
        Command::Time { value } => commands::plans::time(&value),
    }

    Ok(())
}

async fn load_snapshot(path: Option<PathBuf>) -> Result<Snapshot> {
    let path =
        path.ok_or_else(|| AppError::invalid_input("--snapshot is required for this command"))?;
    Snapshot::load(path).await
}
