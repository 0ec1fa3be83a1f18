//! # treasury_risk: Risk Signals, Scoring and Alerts
//!
//! Turns a check snapshot into the risk view:
//!
//! - Rule-based risk signals: concentration, returned, overdue, high value,
//!   client risk (`detection`)
//! - Recovery rate, overdue receivables and top counterparty exposure
//!   (`exposure`)
//! - The capped linear risk score and its band (`scoring`)
//! - A plain-language strategic narrative (`narrative`)
//! - The deduplicated notification feed (`notifications`)
//! - A façade evaluating everything from one snapshot (`engine`)
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │             treasury_risk               │
//! ├─────────────────────────────────────────┤
//! │  engine         - PortfolioEngine       │
//! │  detection/     - RiskDetector          │
//! │  exposure       - ExposureMetrics       │
//! │  scoring        - RiskScore, RiskBand   │
//! │  narrative      - StrategicNarrative    │
//! │  notifications/ - NotificationCenter    │
//! └─────────────────────────────────────────┘
//!          ↓
//! ┌─────────────────────────────────────────┐
//! │          treasury_analytics             │
//! │  totals, windows, series, trends        │
//! └─────────────────────────────────────────┘
//! ```
//!
//! Everything except [`NotificationCenter`] is a pure function of the
//! snapshot and `now`. The notification feed is the one piece of session
//! state; it is refreshed from the same snapshot the report was built from.
//!
//! ## Example
//!
//! ```
//! use chrono::{Duration, NaiveDate};
//! use treasury_core::model::{Check, CheckStatus, CheckType, RiskKind, Settings};
//! use treasury_core::snapshot::Snapshot;
//! use treasury_risk::{NotificationCenter, PortfolioEngine};
//!
//! let now = NaiveDate::from_ymd_opt(2024, 6, 15).unwrap().and_hms_opt(9, 0, 0).unwrap();
//! let day = |offset: i64| (now.date() + Duration::days(offset)).to_string();
//!
//! let snapshot = Snapshot::new(
//!     vec![
//!         Check::new("a", CheckType::Incoming, CheckStatus::Pending, 1_000.0)
//!             .with_bank("Atlas").with_due_date(day(1)),
//!         Check::new("b", CheckType::Outgoing, CheckStatus::Pending, 500.0)
//!             .with_bank("Crescent").with_due_date(day(2)),
//!         Check::new("c", CheckType::Incoming, CheckStatus::Returned, 300.0)
//!             .with_bank("Delta").with_due_date(day(-1)),
//!     ],
//!     Settings { high_value_threshold: 10_000.0, ..Settings::default() },
//! );
//!
//! let report = PortfolioEngine::new().evaluate(&snapshot, now);
//! assert_eq!(report.summary.net_liquidity, 800.0);
//! assert!(report.signals.iter().any(|s| s.kind == RiskKind::Returned));
//! // Atlas holds 1000 of 1800.
//! assert!(report.signals.iter().any(|s| s.kind == RiskKind::Concentration));
//! assert_eq!(report.score.score, 40);
//!
//! let mut feed = NotificationCenter::new();
//! assert_eq!(feed.refresh(&snapshot.checks, now), 1);
//! ```

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]

pub mod detection;
pub mod engine;
pub mod exposure;
pub mod narrative;
pub mod notifications;
pub mod scoring;

pub use detection::RiskDetector;
pub use engine::{PortfolioEngine, PortfolioReport};
pub use exposure::{ExposureMetrics, TopExposure};
pub use narrative::StrategicNarrative;
pub use notifications::{IdGenerator, NotificationCenter, UuidIdGenerator};
pub use scoring::{RiskBand, RiskScore};
