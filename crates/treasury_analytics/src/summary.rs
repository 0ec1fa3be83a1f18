//! Headline liquidity figures.

use chrono::NaiveDateTime;
use tracing::debug;
use treasury_core::model::Check;

use crate::aggregation::{portfolio_totals, PortfolioTotals};
use crate::trend::TrendSummary;

/// Totals, net liquidity and month-over-month trends for one snapshot.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PortfolioSummary {
    /// Totals by type and status.
    pub totals: PortfolioTotals,
    /// Incoming total minus outgoing total, all statuses.
    pub net_liquidity: f64,
    /// Current month against the previous calendar month.
    pub trends: TrendSummary,
}

impl PortfolioSummary {
    /// Computes the summary relative to `now`.
    pub fn compute(checks: &[Check], now: NaiveDateTime) -> Self {
        let totals = portfolio_totals(checks);
        let trends = TrendSummary::month_over_month(checks, now);
        debug!(
            checks = totals.all.count,
            incoming = totals.by_type.incoming.amount,
            outgoing = totals.by_type.outgoing.amount,
            "portfolio summary computed"
        );
        Self {
            totals,
            net_liquidity: totals.net_liquidity(),
            trends,
        }
    }
}
