//! CLI command implementations
//!
//! Each submodule implements a specific CLI command. Every command reads the
//! same [`Context`]: one configuration, one snapshot and one reference
//! instant.

pub mod alerts;
pub mod export;
pub mod list;
pub mod risks;
pub mod series;
pub mod summary;

use chrono::NaiveDateTime;
use clap::{Args, ValueEnum};
use serde::Serialize;
use treasury_core::config::EngineConfig;
use treasury_core::snapshot::Snapshot;
use treasury_core::types::Currency;

use crate::Result;

/// Output rendering.
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Aligned plain-text tables
    Table,
    /// Pretty-printed JSON
    Json,
}

/// Arguments of the `list` command.
#[derive(Args, Debug, Default)]
pub struct ListArgs {
    /// Free-text search on entity, check number, fund and notes
    #[arg(long)]
    pub search: Option<String>,

    /// Direction filter (incoming, outgoing)
    #[arg(long = "type")]
    pub check_type: Option<String>,

    /// Status filter (pending, paid, returned, garantie)
    #[arg(long)]
    pub status: Option<String>,

    /// Due-date range start (YYYY-MM-DD), used together with --to
    #[arg(long)]
    pub from: Option<String>,

    /// Due-date range end (YYYY-MM-DD), used together with --from
    #[arg(long)]
    pub to: Option<String>,

    /// Relative period (today, last_7_days, last_15_days, this_month)
    #[arg(long)]
    pub period: Option<String>,

    /// Page number, 1-based
    #[arg(long, default_value_t = 1)]
    pub page: usize,
}

/// Inputs shared by every command.
pub struct Context {
    /// Validated configuration.
    pub config: EngineConfig,
    /// Snapshot under evaluation.
    pub snapshot: Snapshot,
    /// Reference instant.
    pub now: NaiveDateTime,
    /// Output rendering.
    pub format: OutputFormat,
}

impl Context {
    /// Bundles the command inputs.
    pub fn new(
        config: EngineConfig,
        snapshot: Snapshot,
        now: NaiveDateTime,
        format: OutputFormat,
    ) -> Self {
        Self {
            config,
            snapshot,
            now,
            format,
        }
    }

    /// Ledger currency of the snapshot.
    pub fn currency(&self) -> Currency {
        self.snapshot.settings.currency
    }

    /// Formats an amount in the ledger currency.
    pub fn money(&self, amount: f64) -> String {
        self.currency().format_amount(amount)
    }
}

/// Prints a value as pretty JSON on stdout.
pub fn print_json<T: Serialize + ?Sized>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

/// Formats a trend percentage with an explicit sign.
pub fn signed_pct(value: i64) -> String {
    if value > 0 {
        format!("+{}%", value)
    } else {
        format!("{}%", value)
    }
}
