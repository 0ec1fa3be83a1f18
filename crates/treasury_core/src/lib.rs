//! # treasury_core: Foundation Layer for Check Portfolio Analytics
//!
//! ## Layer Role
//!
//! treasury_core is the bottom layer of the workspace. It owns the vocabulary
//! every other crate speaks:
//! - Record model: `Check`, `Settings`, `RiskSignal`, `Notification` (`model`)
//! - Lenient date parsing and currency codes (`types`)
//! - Immutable input snapshots and their loading (`snapshot`)
//! - Engine configuration from TOML with environment overrides (`config`)
//!
//! Nothing in this crate computes analytics. The computation crates
//! (`treasury_analytics`, `treasury_risk`) read snapshots built from these
//! types and never mutate them.
//!
//! ## Usage Examples
//!
//! ```rust
//! use treasury_core::model::{Check, CheckStatus, CheckType};
//! use treasury_core::types::parse_instant;
//!
//! let check = Check::new("c1", CheckType::Incoming, CheckStatus::Pending, 1_500.0)
//!     .with_bank("Atlas Bank")
//!     .with_entity("Orion SARL")
//!     .with_due_date("2024-06-15");
//!
//! assert_eq!(check.amount(), 1_500.0);
//! assert_eq!(check.due_instant(), parse_instant("2024-06-15").ok());
//! ```

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]

pub mod config;
pub mod model;
pub mod snapshot;
pub mod types;

pub use config::{ConfigError, EngineConfig, MonthLabels};
pub use model::{
    Check, CheckId, CheckStatus, CheckType, Notification, NotificationStatus, RiskKind, RiskLevel,
    RiskSignal, Settings, Severity, WindowPolicy,
};
pub use snapshot::{Snapshot, SnapshotError};
pub use types::{parse_instant, Currency, CurrencyError, DateError};
