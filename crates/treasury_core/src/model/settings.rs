//! Process-wide settings snapshot.

use serde::{Deserialize, Serialize};

use crate::types::Currency;

/// Horizon, in days, of the fixed "outgoing due soon" window.
pub const FIXED_OUTGOING_WINDOW_DAYS: u32 = 3;

/// How the outgoing settlement window picks its horizon.
///
/// The configuration carries an `alert_days` lead time, while the
/// operational window historically used a fixed three-day horizon. The
/// choice is explicit so that changing it is a configuration decision.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WindowPolicy {
    /// Always [`FIXED_OUTGOING_WINDOW_DAYS`].
    #[default]
    Fixed,
    /// Use [`Settings::alert_days`].
    AlertDays,
}

/// Settings handed to the engine together with the check list.
///
/// # Examples
///
/// ```
/// use treasury_core::model::{Settings, WindowPolicy};
///
/// let settings = Settings::default();
/// assert_eq!(settings.high_value_threshold, 50_000.0);
/// assert_eq!(settings.outgoing_window_days(), 3);
///
/// let configured = Settings {
///     alert_days: 7,
///     window_policy: WindowPolicy::AlertDays,
///     ..Settings::default()
/// };
/// assert_eq!(configured.outgoing_window_days(), 7);
/// ```
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Display name of the organisation.
    pub company_name: String,
    /// Ledger currency (display only).
    pub currency: Currency,
    /// Lead time in days for upcoming-settlement alerts.
    pub alert_days: u32,
    /// Pending checks at or above this amount raise a high-value signal.
    pub high_value_threshold: f64,
    /// Source of the outgoing window horizon.
    pub window_policy: WindowPolicy,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            company_name: "Treasury".to_string(),
            currency: Currency::MAD,
            alert_days: 3,
            high_value_threshold: 50_000.0,
            window_policy: WindowPolicy::Fixed,
        }
    }
}

impl Settings {
    /// Horizon of the "outgoing due soon" window under the active policy.
    pub fn outgoing_window_days(&self) -> u32 {
        match self.window_policy {
            WindowPolicy::Fixed => FIXED_OUTGOING_WINDOW_DAYS,
            WindowPolicy::AlertDays => self.alert_days,
        }
    }
}
