//! Summary command implementation
//!
//! Headline totals, trends, settlement windows and recent activity.

use serde::Serialize;
use tracing::info;
use treasury_analytics::aggregation::{GroupTotal, OperationalWindows, DUE_SOON_DAYS};
use treasury_analytics::summary::PortfolioSummary;
use treasury_core::model::Check;
use treasury_risk::PortfolioEngine;

use super::{print_json, signed_pct, Context, OutputFormat};
use crate::Result;

#[derive(Serialize)]
struct SummaryView<'a> {
    company_name: &'a str,
    currency: &'a str,
    summary: &'a PortfolioSummary,
    windows: &'a OperationalWindows,
    by_bank: &'a [GroupTotal],
    recent: &'a [Check],
}

/// Run the summary command
pub fn run(ctx: &Context) -> Result<()> {
    info!("Computing portfolio summary...");
    let report = PortfolioEngine::from_config(&ctx.config).evaluate(&ctx.snapshot, ctx.now);

    if ctx.format == OutputFormat::Json {
        return print_json(&SummaryView {
            company_name: &report.settings.company_name,
            currency: report.settings.currency.code(),
            summary: &report.summary,
            windows: &report.windows,
            by_bank: &report.by_bank,
            recent: &report.recent,
        });
    }

    let summary = &report.summary;
    let totals = &summary.totals;
    println!("{} - liquidity summary at {}", report.settings.company_name, ctx.now);
    println!();
    println!(
        "  Incoming      {:>20}  ({} checks, {} vs last month)",
        ctx.money(totals.by_type.incoming.amount),
        totals.by_type.incoming.count,
        signed_pct(summary.trends.incoming)
    );
    println!(
        "  Outgoing      {:>20}  ({} checks, {} vs last month)",
        ctx.money(totals.by_type.outgoing.amount),
        totals.by_type.outgoing.count,
        signed_pct(summary.trends.outgoing)
    );
    println!(
        "  Net liquidity {:>20}  ({} vs last month)",
        ctx.money(summary.net_liquidity),
        signed_pct(summary.trends.net)
    );
    println!();
    println!("  By status");
    for (label, bucket) in [
        ("pending", totals.by_status.pending),
        ("paid", totals.by_status.paid),
        ("returned", totals.by_status.returned),
        ("garantie", totals.by_status.garantie),
    ] {
        println!(
            "    {:<10} {:>20}  ({} checks)",
            label,
            ctx.money(bucket.amount),
            bucket.count
        );
    }

    let windows = &report.windows;
    println!();
    println!("  Settlement windows");
    println!(
        "    Incoming due today          {:>20}  ({} checks)",
        ctx.money(windows.incoming_today.total),
        windows.incoming_today.count()
    );
    println!(
        "    Outgoing due within {:>2} days  {:>20}  ({} checks)",
        windows.outgoing_horizon_days,
        ctx.money(windows.outgoing_soon.total),
        windows.outgoing_soon.count()
    );
    println!(
        "    All due today               {:>20}  ({} checks)",
        ctx.money(windows.due_today.total),
        windows.due_today.count()
    );
    println!(
        "    All due within {:>2} days      {:>20}  ({} checks)",
        DUE_SOON_DAYS,
        ctx.money(windows.due_soon.total),
        windows.due_soon.count()
    );

    if !report.by_bank.is_empty() {
        println!();
        println!("  By bank");
        for group in &report.by_bank {
            println!(
                "    {:<24} {:>20}  ({} checks)",
                display_name(&group.name),
                ctx.money(group.total.amount),
                group.total.count
            );
        }
    }

    if !report.recent.is_empty() {
        println!();
        println!("  Recent activity");
        for check in &report.recent {
            println!(
                "    #{:<10} {:<9} {:<9} {:<24} {:>20}",
                check.check_number,
                check.check_type,
                check.status,
                display_name(&check.entity_name),
                ctx.money(check.amount())
            );
        }
    }

    Ok(())
}

/// Placeholder for blank names.
pub(crate) fn display_name(name: &str) -> &str {
    if name.trim().is_empty() {
        "(unnamed)"
    } else {
        name
    }
}
