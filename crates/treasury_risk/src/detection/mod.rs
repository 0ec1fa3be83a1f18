//! Rule-based risk detection.
//!
//! Five independent rules run over one snapshot:
//!
//! | Rule | Scope | Condition | Level |
//! |------|-------|-----------|-------|
//! | concentration | bank | bank total > 50% of grand total, more than 2 checks | medium |
//! | returned | check | `status = returned` | high |
//! | overdue | check | `status = pending`, due date before `now` | high |
//! | high value | check | `status = pending`, amount ≥ threshold | medium |
//! | client risk | check | `status = pending`, entity has a returned check | medium |
//!
//! Per-check rules are keyed on status, so a returned check never also
//! triggers overdue, high value or client risk.

mod lookup;

use chrono::NaiveDateTime;
use tracing::{debug, trace};
use treasury_core::model::{Check, CheckStatus, RiskKind, RiskSignal, Settings};

use lookup::BankTotals;

/// Share of the grand total above which a single bank is a concentration.
pub const CONCENTRATION_SHARE: f64 = 0.5;

/// The portfolio must hold more than this many checks for concentration to
/// be meaningful.
pub const CONCENTRATION_MIN_CHECKS: usize = 2;

/// Evaluates the risk rules against a check list.
///
/// # Examples
///
/// ```
/// use chrono::NaiveDate;
/// use treasury_core::model::{Check, CheckStatus, CheckType, RiskKind};
/// use treasury_risk::detection::RiskDetector;
///
/// let now = NaiveDate::from_ymd_opt(2024, 6, 15).unwrap().and_hms_opt(9, 0, 0).unwrap();
/// let checks = vec![
///     Check::new("a", CheckType::Incoming, CheckStatus::Returned, 300.0).with_entity("X"),
///     Check::new("b", CheckType::Incoming, CheckStatus::Pending, 900.0).with_entity("X"),
/// ];
///
/// let signals = RiskDetector::new(10_000.0).detect(&checks, now);
/// let kinds: Vec<_> = signals.iter().map(|s| s.kind).collect();
/// assert_eq!(kinds, vec![RiskKind::Returned, RiskKind::ClientRisk]);
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RiskDetector {
    high_value_threshold: f64,
}

impl RiskDetector {
    /// Detector flagging pending checks at or above `high_value_threshold`.
    pub fn new(high_value_threshold: f64) -> Self {
        Self {
            high_value_threshold,
        }
    }

    /// Detector configured from snapshot settings.
    pub fn from_settings(settings: &Settings) -> Self {
        Self::new(settings.high_value_threshold)
    }

    /// Threshold for the high-value rule.
    pub fn high_value_threshold(&self) -> f64 {
        self.high_value_threshold
    }

    /// Runs every rule.
    ///
    /// Concentration signals come first, then per-check signals grouped by
    /// check in input order.
    pub fn detect(&self, checks: &[Check], now: NaiveDateTime) -> Vec<RiskSignal> {
        let mut signals = concentration(checks);
        let bad_clients = lookup::bad_clients(checks);

        for check in checks {
            match check.status {
                CheckStatus::Returned => {
                    signals.push(RiskSignal::for_check(RiskKind::Returned, check));
                }
                CheckStatus::Pending => {
                    if check.is_overdue(now) {
                        signals.push(RiskSignal::for_check(RiskKind::Overdue, check));
                    }
                    if check.amount() >= self.high_value_threshold {
                        signals.push(RiskSignal::for_check(RiskKind::HighValue, check));
                    }
                    if bad_clients.contains(check.entity_name.as_str()) {
                        signals.push(RiskSignal::for_check(RiskKind::ClientRisk, check));
                    }
                }
                CheckStatus::Paid | CheckStatus::Garantie => {}
            }
        }

        debug!(
            checks = checks.len(),
            signals = signals.len(),
            bad_clients = bad_clients.len(),
            "risk detection complete"
        );
        signals
    }
}

fn concentration(checks: &[Check]) -> Vec<RiskSignal> {
    if checks.len() <= CONCENTRATION_MIN_CHECKS {
        return Vec::new();
    }
    let banks = BankTotals::build(checks);
    let limit = banks.grand_total() * CONCENTRATION_SHARE;

    banks
        .iter()
        .filter(|(_, total)| *total > limit)
        .inspect(|(bank, total)| trace!(bank = *bank, total = *total, limit, "bank concentration"))
        .map(|(bank, total)| RiskSignal::concentration(bank, total))
        .collect()
}
