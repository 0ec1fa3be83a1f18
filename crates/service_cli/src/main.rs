//! Treasury CLI - Check Portfolio Analytics from the Command Line
//!
//! Loads a check snapshot (JSON) and an engine configuration (TOML) and
//! prints the liquidity and risk views.
//!
//! # Commands
//!
//! - `treasury summary` - Totals, net liquidity, trends and settlement windows
//! - `treasury risks` - Risk signals, score, exposure and narrative
//! - `treasury alerts` - Notification feed for the snapshot
//! - `treasury series` - Trailing 12-month incoming/outgoing series
//! - `treasury list` - Search, filter and page through checks
//! - `treasury export --output <csv>` - Write the monthly series as CSV
//!
//! # Architecture
//!
//! As part of the service layer, this crate only loads inputs, drives the
//! engine and formats its output. All computation lives in `treasury_risk`
//! and `treasury_analytics`.

use std::path::PathBuf;

use anyhow::Context as _;
use chrono::{Local, NaiveDateTime};
use clap::{Parser, Subcommand};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};
use treasury_core::config::EngineConfig;
use treasury_core::snapshot::Snapshot;
use treasury_core::types::parse_instant;

mod commands;
mod error;

pub use error::{CliError, Result};

use commands::{Context, ListArgs, OutputFormat};

/// Treasury check portfolio analytics
#[derive(Parser)]
#[command(name = "treasury")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Configuration file path
    #[arg(short, long, global = true, default_value = "treasury.toml")]
    config: PathBuf,

    /// Snapshot file (JSON array of checks, or {checks, settings})
    #[arg(short, long, global = true)]
    snapshot: Option<PathBuf>,

    /// Reference instant (YYYY-MM-DD or ISO timestamp); defaults to now
    #[arg(short, long, global = true)]
    now: Option<String>,

    /// Output format
    #[arg(short, long, global = true, value_enum, default_value_t = OutputFormat::Table)]
    format: OutputFormat,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Totals, net liquidity, trends and settlement windows
    Summary,

    /// Risk signals, score, exposure and narrative
    Risks,

    /// Notification feed for the snapshot
    Alerts,

    /// Trailing 12-month incoming/outgoing series
    Series,

    /// Search, filter and page through checks
    List(ListArgs),

    /// Write the monthly series as CSV
    Export {
        /// Output CSV file
        #[arg(short, long)]
        output: PathBuf,
    },
}

fn init_tracing(config: &EngineConfig, verbose: bool) {
    let default_level = if verbose {
        "debug"
    } else {
        config.log_level.as_str()
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::new(format!(
            "warn,treasury={lvl},treasury_core={lvl},treasury_analytics={lvl},treasury_risk={lvl}",
            lvl = default_level.to_lowercase()
        ))
    });

    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .init();
}

fn resolve_now(now: Option<&str>) -> Result<NaiveDateTime> {
    match now {
        Some(text) => parse_instant(text).map_err(|source| CliError::InvalidDate {
            input: text.to_string(),
            source,
        }),
        None => Ok(Local::now().naive_local()),
    }
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let config = EngineConfig::load_with_env_and_validate(&cli.config)
        .with_context(|| format!("loading configuration from {}", cli.config.display()))?;
    init_tracing(&config, cli.verbose);

    if cli.verbose {
        info!("Verbose mode enabled");
    }

    let snapshot_path = cli
        .snapshot
        .ok_or_else(|| CliError::invalid_argument("--snapshot <FILE> is required"))?;
    let snapshot = Snapshot::load(&snapshot_path, &config.settings)
        .map_err(CliError::from)
        .with_context(|| format!("loading snapshot from {}", snapshot_path.display()))?;
    let now = resolve_now(cli.now.as_deref())?;

    info!(
        snapshot = %snapshot_path.display(),
        checks = snapshot.len(),
        %now,
        "snapshot loaded"
    );

    let ctx = Context::new(config, snapshot, now, cli.format);

    match cli.command {
        Commands::Summary => commands::summary::run(&ctx)?,
        Commands::Risks => commands::risks::run(&ctx)?,
        Commands::Alerts => commands::alerts::run(&ctx)?,
        Commands::Series => commands::series::run(&ctx)?,
        Commands::List(args) => commands::list::run(&ctx, &args)?,
        Commands::Export { output } => commands::export::run(&ctx, &output)?,
    }
    Ok(())
}
