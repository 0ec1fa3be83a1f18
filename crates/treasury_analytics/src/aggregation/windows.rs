//! Operational settlement windows.
//!
//! A window is a closed range of wall-clock instants, day-granular on both
//! ends: `[today 00:00, (today + n) 23:59:59.999]`. Only pending checks with
//! a parseable due date can fall inside one.

use chrono::NaiveDateTime;
use treasury_core::model::{Check, CheckType, Settings};
use treasury_core::types::time::{days_after, end_of_day, start_of_day};

/// Horizon, in days, of the reporting "due soon" window.
pub const DUE_SOON_DAYS: u32 = 7;

/// Checks selected by a window and the sum of their amounts.
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct WindowSummary {
    /// Matching checks, in input order.
    pub checks: Vec<Check>,
    /// Sum of sanitised amounts.
    pub total: f64,
}

impl WindowSummary {
    fn collect<'a>(checks: impl Iterator<Item = &'a Check>) -> Self {
        let checks: Vec<Check> = checks.cloned().collect();
        let total = checks.iter().map(Check::amount).sum();
        Self { checks, total }
    }

    /// Number of checks in the window.
    pub fn count(&self) -> usize {
        self.checks.len()
    }

    /// True when no check falls in the window.
    pub fn is_empty(&self) -> bool {
        self.checks.is_empty()
    }
}

fn due_within(check: &Check, now: NaiveDateTime, days: u32) -> bool {
    let today = now.date();
    let from = start_of_day(today);
    let to = end_of_day(days_after(today, days));
    check.is_pending()
        && check
            .due_instant()
            .is_some_and(|due| due >= from && due <= to)
}

fn of_type(check: &Check, check_type: CheckType) -> bool {
    check.check_type == check_type
}

/// Pending incoming checks due on the calendar day of `now`.
pub fn incoming_due_today(checks: &[Check], now: NaiveDateTime) -> WindowSummary {
    WindowSummary::collect(
        checks
            .iter()
            .filter(|c| of_type(c, CheckType::Incoming) && due_within(c, now, 0)),
    )
}

/// Pending outgoing checks due from today through `today + days`, inclusive.
///
/// # Examples
///
/// ```
/// use chrono::NaiveDate;
/// use treasury_analytics::aggregation::outgoing_due_within;
/// use treasury_core::model::{Check, CheckStatus, CheckType};
///
/// let now = NaiveDate::from_ymd_opt(2024, 6, 15).unwrap().and_hms_opt(16, 0, 0).unwrap();
/// let checks = vec![
///     Check::new("a", CheckType::Outgoing, CheckStatus::Pending, 100.0).with_due_date("2024-06-15"),
///     Check::new("b", CheckType::Outgoing, CheckStatus::Pending, 200.0).with_due_date("2024-06-18"),
///     Check::new("c", CheckType::Outgoing, CheckStatus::Pending, 400.0).with_due_date("2024-06-19"),
///     Check::new("d", CheckType::Outgoing, CheckStatus::Paid, 800.0).with_due_date("2024-06-16"),
/// ];
///
/// let window = outgoing_due_within(&checks, now, 3);
/// assert_eq!(window.count(), 2);
/// assert_eq!(window.total, 300.0);
/// ```
pub fn outgoing_due_within(checks: &[Check], now: NaiveDateTime, days: u32) -> WindowSummary {
    WindowSummary::collect(
        checks
            .iter()
            .filter(|c| of_type(c, CheckType::Outgoing) && due_within(c, now, days)),
    )
}

/// Pending checks of either type due on the calendar day of `now`.
pub fn due_today(checks: &[Check], now: NaiveDateTime) -> WindowSummary {
    WindowSummary::collect(checks.iter().filter(|c| due_within(c, now, 0)))
}

/// Pending checks of either type due from today through `today + days`.
pub fn due_soon(checks: &[Check], now: NaiveDateTime, days: u32) -> WindowSummary {
    WindowSummary::collect(checks.iter().filter(|c| due_within(c, now, days)))
}

/// All settlement windows for one evaluation.
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct OperationalWindows {
    /// Pending incoming due today.
    pub incoming_today: WindowSummary,
    /// Pending outgoing inside the configured horizon.
    pub outgoing_soon: WindowSummary,
    /// Horizon used for `outgoing_soon`, in days.
    pub outgoing_horizon_days: u32,
    /// Pending checks of either type due today.
    pub due_today: WindowSummary,
    /// Pending checks of either type due within [`DUE_SOON_DAYS`].
    pub due_soon: WindowSummary,
}

impl OperationalWindows {
    /// Computes every window; the outgoing horizon follows
    /// [`Settings::outgoing_window_days`].
    pub fn compute(checks: &[Check], settings: &Settings, now: NaiveDateTime) -> Self {
        let horizon = settings.outgoing_window_days();
        Self {
            incoming_today: incoming_due_today(checks, now),
            outgoing_soon: outgoing_due_within(checks, now, horizon),
            outgoing_horizon_days: horizon,
            due_today: due_today(checks, now),
            due_soon: due_soon(checks, now, DUE_SOON_DAYS),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use chrono::NaiveDate;
    use treasury_core::model::{CheckStatus, WindowPolicy};

    fn now() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2024, 6, 15)
            .unwrap()
            .and_hms_opt(10, 30, 0)
            .unwrap()
    }

    fn pending(id: &str, check_type: CheckType, amount: f64, due: &str) -> Check {
        Check::new(id, check_type, CheckStatus::Pending, amount).with_due_date(due)
    }

    #[test]
    fn test_incoming_today_ignores_time_of_day() {
        let checks = vec![
            pending("a", CheckType::Incoming, 100.0, "2024-06-15"),
            pending("b", CheckType::Incoming, 50.0, "2024-06-15T23:00:00"),
            pending("c", CheckType::Incoming, 75.0, "2024-06-14"),
            pending("d", CheckType::Outgoing, 900.0, "2024-06-15"),
        ];
        let window = incoming_due_today(&checks, now());
        assert_eq!(window.count(), 2);
        assert_relative_eq!(window.total, 150.0);
    }

    #[test]
    fn test_outgoing_window_bounds_inclusive() {
        let checks = vec![
            pending("edge", CheckType::Outgoing, 10.0, "2024-06-18T23:59:59"),
            pending("past", CheckType::Outgoing, 20.0, "2024-06-14T23:59:59"),
            pending("beyond", CheckType::Outgoing, 40.0, "2024-06-19T00:00:00"),
        ];
        let window = outgoing_due_within(&checks, now(), 3);
        assert_eq!(window.count(), 1);
        assert_eq!(window.checks[0].id.as_str(), "edge");
    }

    #[test]
    fn test_malformed_dates_never_selected() {
        let checks = vec![
            pending("a", CheckType::Incoming, 100.0, ""),
            pending("b", CheckType::Outgoing, 100.0, "tomorrow"),
        ];
        assert!(due_today(&checks, now()).is_empty());
        assert!(due_soon(&checks, now(), DUE_SOON_DAYS).is_empty());
    }

    #[test]
    fn test_due_soon_mixes_types() {
        let checks = vec![
            pending("a", CheckType::Incoming, 100.0, "2024-06-20"),
            pending("b", CheckType::Outgoing, 200.0, "2024-06-22"),
            pending("c", CheckType::Outgoing, 400.0, "2024-06-23"),
        ];
        let window = due_soon(&checks, now(), DUE_SOON_DAYS);
        assert_eq!(window.count(), 2);
        assert_relative_eq!(window.total, 300.0);
    }

    #[test]
    fn test_compute_honours_window_policy() {
        let checks = vec![pending("a", CheckType::Outgoing, 100.0, "2024-06-20")];

        let fixed = OperationalWindows::compute(&checks, &Settings::default(), now());
        assert_eq!(fixed.outgoing_horizon_days, 3);
        assert!(fixed.outgoing_soon.is_empty());

        let settings = Settings {
            alert_days: 5,
            window_policy: WindowPolicy::AlertDays,
            ..Settings::default()
        };
        let configured = OperationalWindows::compute(&checks, &settings, now());
        assert_eq!(configured.outgoing_horizon_days, 5);
        assert_eq!(configured.outgoing_soon.count(), 1);
    }
}
