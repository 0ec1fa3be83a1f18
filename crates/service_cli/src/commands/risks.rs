//! Risks command implementation
//!
//! Prints the detected signals, the composite score, exposure figures and
//! the strategic narrative.

use serde::Serialize;
use tracing::info;
use treasury_core::model::RiskSignal;
use treasury_risk::{ExposureMetrics, PortfolioEngine, RiskBand, RiskScore, StrategicNarrative};

use super::summary::display_name;
use super::{print_json, Context, OutputFormat};
use crate::Result;

#[derive(Serialize)]
struct RiskView<'a> {
    score: &'a RiskScore,
    band: RiskBand,
    signals: &'a [RiskSignal],
    exposure: &'a ExposureMetrics,
    narrative: &'a StrategicNarrative,
}

/// Run the risks command
pub fn run(ctx: &Context) -> Result<()> {
    info!("Running risk analysis...");
    let report = PortfolioEngine::from_config(&ctx.config).evaluate(&ctx.snapshot, ctx.now);

    if ctx.format == OutputFormat::Json {
        return print_json(&RiskView {
            score: &report.score,
            band: report.band,
            signals: &report.signals,
            exposure: &report.exposure,
            narrative: &report.narrative,
        });
    }

    let score = &report.score;
    println!(
        "Risk score {}/100 ({})  high: {}  medium: {}  at risk: {}",
        score.score,
        report.band,
        score.high_count,
        score.medium_count,
        ctx.money(score.total_risk_amount)
    );
    println!();

    if report.signals.is_empty() {
        println!("  No risk signals.");
    } else {
        for signal in &report.signals {
            println!(
                "  [{:<6}] {:<14} {:>20}  {}",
                signal.level,
                signal.kind,
                ctx.money(signal.amount),
                signal.description
            );
        }
    }

    let exposure = &report.exposure;
    println!();
    println!("  Recovery rate            {:>6.1}%", exposure.recovery_rate);
    println!(
        "  Overdue receivables      {:>20}",
        ctx.money(exposure.overdue_incoming_sum)
    );
    println!(
        "  Outgoing in window       {:>20}  ({} checks)",
        ctx.money(exposure.upcoming_outgoing.total),
        exposure.upcoming_outgoing.count()
    );
    if let Some(top) = &exposure.top_exposure {
        println!(
            "  Top exposure             {} at {} ({:.1}% of portfolio)",
            display_name(&top.entity_name),
            ctx.money(top.amount),
            top.share_pct
        );
    }

    let narrative = &report.narrative;
    println!();
    println!("  {}", narrative.liquidity_diagnostic);
    println!("  {}", narrative.exposure_notice);
    println!("  {}", narrative.recommendation);

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use treasury_core::config::EngineConfig;
    use treasury_core::model::{Check, CheckStatus, CheckType, Settings};
    use treasury_core::snapshot::Snapshot;

    #[test]
    fn test_risks_json_view() {
        let now = NaiveDate::from_ymd_opt(2024, 6, 15)
            .unwrap()
            .and_hms_opt(9, 0, 0)
            .unwrap();
        let checks = vec![
            Check::new("a", CheckType::Incoming, CheckStatus::Returned, 250.0)
                .with_bank("Atlas")
                .with_entity("Orion"),
            Check::new("b", CheckType::Incoming, CheckStatus::Paid, 750.0)
                .with_bank("Crescent")
                .with_entity("Vega"),
        ];
        let ctx = Context::new(
            EngineConfig::default(),
            Snapshot::new(checks, Settings::default()),
            now,
            OutputFormat::Json,
        );
        run(&ctx).unwrap();

        let report = PortfolioEngine::from_config(&ctx.config).evaluate(&ctx.snapshot, ctx.now);
        let value = serde_json::to_value(RiskView {
            score: &report.score,
            band: report.band,
            signals: &report.signals,
            exposure: &report.exposure,
            narrative: &report.narrative,
        })
        .unwrap();
        assert_eq!(value["score"]["score"], 30);
        assert_eq!(value["score"]["high_count"], 1);
        assert_eq!(value["signals"][0]["id"], "ret-a");
        assert_eq!(value["exposure"]["recovery_rate"], 75.0);
    }
}
