//! Risk signals.
//!
//! A [`RiskSignal`] is one detected vulnerability, tied to zero or one
//! check. Signals are derived on every evaluation and never persisted; their
//! ids are deterministic so that consumers can key and de-duplicate them.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::check::Check;
use super::ids::CheckId;

/// Severity of a risk signal.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RiskLevel {
    /// Needs immediate attention.
    High,
    /// Worth monitoring.
    Medium,
    /// Informational.
    Low,
}

impl RiskLevel {
    /// Wire name of this level.
    pub fn as_str(&self) -> &'static str {
        match self {
            RiskLevel::High => "high",
            RiskLevel::Medium => "medium",
            RiskLevel::Low => "low",
        }
    }
}

impl fmt::Display for RiskLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Rule that produced a risk signal.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RiskKind {
    /// A check was returned unpaid.
    Returned,
    /// A pending check is past its due date.
    Overdue,
    /// A pending check is at or above the high-value threshold.
    HighValue,
    /// One bank settles more than half of the portfolio.
    Concentration,
    /// A pending check comes from an issuer with a returned check.
    ClientRisk,
}

impl RiskKind {
    /// Wire name of this kind.
    pub fn as_str(&self) -> &'static str {
        match self {
            RiskKind::Returned => "returned",
            RiskKind::Overdue => "overdue",
            RiskKind::HighValue => "high_value",
            RiskKind::Concentration => "concentration",
            RiskKind::ClientRisk => "client_risk",
        }
    }

    /// Prefix of signal ids produced by this rule.
    fn id_prefix(&self) -> &'static str {
        match self {
            RiskKind::Returned => "ret",
            RiskKind::Overdue => "over",
            RiskKind::HighValue => "high",
            RiskKind::Concentration => "conc",
            RiskKind::ClientRisk => "cl",
        }
    }

    /// Severity every signal of this kind carries.
    pub fn level(&self) -> RiskLevel {
        match self {
            RiskKind::Returned | RiskKind::Overdue => RiskLevel::High,
            RiskKind::HighValue | RiskKind::Concentration | RiskKind::ClientRisk => {
                RiskLevel::Medium
            }
        }
    }
}

impl fmt::Display for RiskKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One detected risk condition.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct RiskSignal {
    /// Deterministic id: `{prefix}-{subject}`.
    pub id: String,
    /// Rule that fired.
    pub kind: RiskKind,
    /// Severity.
    pub level: RiskLevel,
    /// Human-readable summary.
    pub description: String,
    /// Amount at risk.
    pub amount: f64,
    /// Check the signal refers to; `None` for portfolio-level signals.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub related_check_id: Option<CheckId>,
}

impl RiskSignal {
    /// Builds a signal about a single check, keyed by the check id.
    ///
    /// ```
    /// use treasury_core::model::{Check, CheckStatus, CheckType, RiskKind, RiskLevel, RiskSignal};
    ///
    /// let check = Check::new("c9", CheckType::Incoming, CheckStatus::Returned, 300.0)
    ///     .with_number("000981")
    ///     .with_entity("Orion SARL");
    /// let signal = RiskSignal::for_check(RiskKind::Returned, &check);
    ///
    /// assert_eq!(signal.id, "ret-c9");
    /// assert_eq!(signal.level, RiskLevel::High);
    /// assert_eq!(signal.amount, 300.0);
    /// ```
    pub fn for_check(kind: RiskKind, check: &Check) -> Self {
        let description = match kind {
            RiskKind::Returned => format!(
                "Returned check #{} ({})",
                check.check_number, check.entity_name
            ),
            RiskKind::Overdue => format!("Maturity passed for #{}", check.check_number),
            RiskKind::HighValue => format!("High-value instrument #{}", check.check_number),
            RiskKind::ClientRisk => format!("At-risk client: {}", check.entity_name),
            RiskKind::Concentration => format!("Concentration on {}", check.bank_name),
        };
        Self {
            id: format!("{}-{}", kind.id_prefix(), check.id),
            kind,
            level: kind.level(),
            description,
            amount: check.amount(),
            related_check_id: Some(check.id.clone()),
        }
    }

    /// Builds the portfolio-level concentration signal for one bank.
    pub fn concentration(bank_name: &str, bank_total: f64) -> Self {
        let kind = RiskKind::Concentration;
        Self {
            id: format!("{}-{}", kind.id_prefix(), bank_name),
            kind,
            level: kind.level(),
            description: format!(
                "High concentration on {} (>50% of capital)",
                bank_name
            ),
            amount: bank_total,
            related_check_id: None,
        }
    }
}
