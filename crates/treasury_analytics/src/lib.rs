//! # treasury_analytics: Aggregates and Trends
//!
//! Pure computations over a check snapshot that feed the liquidity views:
//!
//! - Totals by type, status, bank and entity (`aggregation::totals`)
//! - The trailing 12-month incoming/outgoing series (`aggregation::monthly`)
//! - Operational settlement windows (`aggregation::windows`)
//! - Recent activity (`aggregation::recent`)
//! - Month-over-month trend percentages (`trend`)
//! - The liquidity summary combining the above (`summary`)
//! - Search, filtering and pagination of check lists (`query`)
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │         treasury_analytics              │
//! ├─────────────────────────────────────────┤
//! │  aggregation/ - totals, monthly,        │
//! │                 windows, recent         │
//! │  trend        - period deltas           │
//! │  summary      - headline figures        │
//! │  query        - filters, pages          │
//! └─────────────────────────────────────────┘
//!          ↓
//! ┌─────────────────────────────────────────┐
//! │           treasury_core                 │
//! │  Check, Settings, lenient dates         │
//! └─────────────────────────────────────────┘
//! ```
//!
//! Every function takes the reference instant `now` as a parameter; nothing
//! here reads the clock.
//!
//! ## Example
//!
//! ```
//! use chrono::NaiveDate;
//! use treasury_analytics::summary::PortfolioSummary;
//! use treasury_core::model::{Check, CheckStatus, CheckType};
//!
//! let now = NaiveDate::from_ymd_opt(2024, 6, 15).unwrap().and_hms_opt(12, 0, 0).unwrap();
//! let checks = vec![
//!     Check::new("a", CheckType::Incoming, CheckStatus::Pending, 1_000.0).with_due_date("2024-06-16"),
//!     Check::new("b", CheckType::Outgoing, CheckStatus::Pending, 500.0).with_due_date("2024-06-17"),
//! ];
//!
//! let summary = PortfolioSummary::compute(&checks, now);
//! assert_eq!(summary.net_liquidity, 500.0);
//! assert_eq!(summary.trends.incoming, 100);
//! ```

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]

pub mod aggregation;
pub mod query;
pub mod summary;
pub mod trend;

pub use aggregation::{
    group_totals, monthly_series, portfolio_totals, recent_checks, Bucket, GroupBy, GroupTotal,
    MonthKey, MonthStats, OperationalWindows, PortfolioTotals, WindowSummary,
};
pub use query::{CheckQuery, Page, Period};
pub use summary::PortfolioSummary;
pub use trend::{trend, TrendSummary};
