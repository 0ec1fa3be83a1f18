//! Series command implementation
//!
//! Trailing monthly incoming and outgoing sums, oldest month first.

use serde::Serialize;
use tracing::info;
use treasury_analytics::aggregation::{monthly_series, MonthStats, SERIES_MONTHS};
use treasury_core::config::MonthLabels;

use super::{print_json, Context, OutputFormat};
use crate::Result;

/// One month of the series as printed or exported.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SeriesRow {
    /// `YYYY-MM`
    pub month: String,
    /// Localised month abbreviation.
    pub label: &'static str,
    /// Incoming sum.
    pub incoming: f64,
    /// Outgoing sum.
    pub outgoing: f64,
    /// Incoming minus outgoing.
    pub net: f64,
}

impl SeriesRow {
    /// Row for one month.
    pub fn from_stats(stats: &MonthStats, labels: MonthLabels) -> Self {
        Self {
            month: stats.key.to_string(),
            label: stats.key.label(labels),
            incoming: stats.incoming,
            outgoing: stats.outgoing,
            net: stats.net(),
        }
    }
}

/// Builds the series rows for the context.
pub fn series_rows(ctx: &Context) -> Vec<SeriesRow> {
    monthly_series(&ctx.snapshot.checks, ctx.now, SERIES_MONTHS)
        .iter()
        .map(|stats| SeriesRow::from_stats(stats, ctx.config.month_labels))
        .collect()
}

/// Run the series command
pub fn run(ctx: &Context) -> Result<()> {
    info!(months = SERIES_MONTHS, "Building monthly series...");
    let rows = series_rows(ctx);

    if ctx.format == OutputFormat::Json {
        return print_json(&rows);
    }

    println!(
        "{:<8} {:<4} {:>20} {:>20} {:>20}",
        "Month", "", "Incoming", "Outgoing", "Net"
    );
    for row in &rows {
        println!(
            "{:<8} {:<4} {:>20} {:>20} {:>20}",
            row.month,
            row.label,
            ctx.money(row.incoming),
            ctx.money(row.outgoing),
            ctx.money(row.net)
        );
    }

    Ok(())
}
