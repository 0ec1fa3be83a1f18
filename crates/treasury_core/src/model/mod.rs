//! Record model shared by every crate in the workspace.
//!
//! ## Architecture
//!
//! ```text
//! ┌───────────────────────────────────────────────┐
//! │                 model/                        │
//! ├───────────────────────────────────────────────┤
//! │  ids          - CheckId                       │
//! │  check        - Check, CheckType, CheckStatus │
//! │  settings     - Settings, WindowPolicy        │
//! │  signal       - RiskSignal, RiskKind, Level   │
//! │  notification - Notification, Severity        │
//! └───────────────────────────────────────────────┘
//! ```

mod check;
mod ids;
mod notification;
mod settings;
mod signal;

pub use check::{Check, CheckStatus, CheckType};
pub use ids::CheckId;
pub use notification::{Notification, NotificationStatus, Severity};
pub use settings::{Settings, WindowPolicy, FIXED_OUTGOING_WINDOW_DAYS};
pub use signal::{RiskKind, RiskLevel, RiskSignal};
