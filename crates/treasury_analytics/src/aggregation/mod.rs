//! Aggregation over check collections.
//!
//! Totals that need no date (type, status, bank, entity) include every
//! record. Date-bucketed aggregates (monthly series, settlement windows)
//! silently skip records whose date field does not parse.

mod monthly;
mod recent;
mod totals;
mod windows;

pub use monthly::{month_stats, monthly_series, MonthKey, MonthStats, SERIES_MONTHS};
pub use recent::recent_checks;
pub use totals::{
    group_totals, portfolio_totals, Bucket, GroupBy, GroupTotal, PortfolioTotals, StatusTotals,
    TypeTotals,
};
pub use windows::{
    due_soon, due_today, incoming_due_today, outgoing_due_within, OperationalWindows,
    WindowSummary, DUE_SOON_DAYS,
};
