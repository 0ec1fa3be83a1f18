//! Check records.
//!
//! A [`Check`] is one negotiable instrument tracked by the ledger, either
//! received from a client (incoming) or issued to a supplier (outgoing).
//! Records arrive from the external store as JSON and are read-only inside
//! the analytics crates.

use chrono::NaiveDateTime;
use serde::de::IgnoredAny;
use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;

use super::ids::CheckId;
use crate::types::time::parse_instant;

/// Direction of cash flow.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CheckType {
    /// Received from a counterparty; cash flows in on settlement.
    Incoming,
    /// Issued by the organisation; cash flows out on settlement.
    Outgoing,
}

impl CheckType {
    /// All variants, in display order.
    pub const ALL: [CheckType; 2] = [CheckType::Incoming, CheckType::Outgoing];

    /// Wire name of this type.
    pub fn as_str(&self) -> &'static str {
        match self {
            CheckType::Incoming => "incoming",
            CheckType::Outgoing => "outgoing",
        }
    }
}

impl fmt::Display for CheckType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Lifecycle state of a check.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CheckStatus {
    /// Awaiting settlement.
    Pending,
    /// Settled.
    Paid,
    /// Rejected by the bank.
    Returned,
    /// Held as collateral rather than for settlement.
    Garantie,
}

impl CheckStatus {
    /// All variants, in display order.
    pub const ALL: [CheckStatus; 4] = [
        CheckStatus::Pending,
        CheckStatus::Paid,
        CheckStatus::Returned,
        CheckStatus::Garantie,
    ];

    /// Wire name of this status.
    pub fn as_str(&self) -> &'static str {
        match self {
            CheckStatus::Pending => "pending",
            CheckStatus::Paid => "paid",
            CheckStatus::Returned => "returned",
            CheckStatus::Garantie => "garantie",
        }
    }
}

impl fmt::Display for CheckStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A check record as supplied by the record store.
///
/// Optional and date fields are kept as the store sends them. Use the
/// accessor methods ([`Check::amount`], [`Check::due_instant`], ...) for
/// sanitised values.
///
/// # Examples
///
/// ```
/// use treasury_core::model::{Check, CheckStatus, CheckType};
///
/// let json = r#"{
///     "id": "c1",
///     "check_number": "0001234",
///     "bank_name": "Atlas Bank",
///     "amount": "2500.75",
///     "issue_date": "2024-05-01",
///     "due_date": "",
///     "entity_name": "Orion SARL",
///     "type": "incoming",
///     "status": "pending",
///     "created_at": "2024-05-01T09:00:00Z"
/// }"#;
///
/// let check: Check = serde_json::from_str(json).unwrap();
/// assert_eq!(check.check_type, CheckType::Incoming);
/// assert_eq!(check.status, CheckStatus::Pending);
/// assert_eq!(check.amount(), 2500.75);
/// assert!(check.due_instant().is_none());
/// ```
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Check {
    /// Opaque unique identifier.
    pub id: CheckId,
    /// Free-text reference printed on the instrument.
    #[serde(default, deserialize_with = "lenient_text")]
    pub check_number: String,
    /// Settling bank.
    #[serde(default, deserialize_with = "lenient_text")]
    pub bank_name: String,
    /// Face amount in the ledger currency. Use [`Check::amount`].
    #[serde(default, deserialize_with = "lenient_amount")]
    pub amount: f64,
    /// Issue date as stored.
    #[serde(default, deserialize_with = "lenient_text")]
    pub issue_date: String,
    /// Due date as stored.
    #[serde(default, deserialize_with = "lenient_text")]
    pub due_date: String,
    /// Issuer (incoming) or drawer (outgoing).
    #[serde(default, deserialize_with = "lenient_text")]
    pub entity_name: String,
    /// Direction of cash flow.
    #[serde(rename = "type")]
    pub check_type: CheckType,
    /// Lifecycle state.
    pub status: CheckStatus,
    /// Payee.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fund_name: Option<String>,
    /// Opaque passthrough.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    /// Opaque passthrough.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    /// Record creation timestamp as stored.
    #[serde(default, deserialize_with = "lenient_text")]
    pub created_at: String,
}

impl Check {
    /// Creates a record with the mandatory fields; text fields start empty.
    pub fn new(
        id: impl Into<CheckId>,
        check_type: CheckType,
        status: CheckStatus,
        amount: f64,
    ) -> Self {
        Self {
            id: id.into(),
            check_number: String::new(),
            bank_name: String::new(),
            amount,
            issue_date: String::new(),
            due_date: String::new(),
            entity_name: String::new(),
            check_type,
            status,
            fund_name: None,
            notes: None,
            image_url: None,
            created_at: String::new(),
        }
    }

    /// Sets the check number.
    pub fn with_number(mut self, number: impl Into<String>) -> Self {
        self.check_number = number.into();
        self
    }

    /// Sets the bank name.
    pub fn with_bank(mut self, bank: impl Into<String>) -> Self {
        self.bank_name = bank.into();
        self
    }

    /// Sets the issuer/drawer name.
    pub fn with_entity(mut self, entity: impl Into<String>) -> Self {
        self.entity_name = entity.into();
        self
    }

    /// Sets the payee name.
    pub fn with_fund(mut self, fund: impl Into<String>) -> Self {
        self.fund_name = Some(fund.into());
        self
    }

    /// Sets the notes.
    pub fn with_notes(mut self, notes: impl Into<String>) -> Self {
        self.notes = Some(notes.into());
        self
    }

    /// Sets the due date text.
    pub fn with_due_date(mut self, due: impl Into<String>) -> Self {
        self.due_date = due.into();
        self
    }

    /// Sets the issue date text.
    pub fn with_issue_date(mut self, issue: impl Into<String>) -> Self {
        self.issue_date = issue.into();
        self
    }

    /// Sets the creation timestamp text.
    pub fn with_created_at(mut self, created: impl Into<String>) -> Self {
        self.created_at = created.into();
        self
    }

    /// Face amount, with non-finite values read as zero.
    #[inline]
    pub fn amount(&self) -> f64 {
        if self.amount.is_finite() {
            self.amount
        } else {
            0.0
        }
    }

    /// Parsed due date, or `None` when the stored text is empty or malformed.
    pub fn due_instant(&self) -> Option<NaiveDateTime> {
        parse_instant(&self.due_date).ok()
    }

    /// Parsed issue date, or `None` when the stored text is empty or malformed.
    pub fn issue_instant(&self) -> Option<NaiveDateTime> {
        parse_instant(&self.issue_date).ok()
    }

    /// Parsed creation timestamp, or `None` when malformed.
    pub fn created_instant(&self) -> Option<NaiveDateTime> {
        parse_instant(&self.created_at).ok()
    }

    /// True when the check is awaiting settlement.
    #[inline]
    pub fn is_pending(&self) -> bool {
        self.status == CheckStatus::Pending
    }

    /// True for pending checks whose due date lies strictly before `now`.
    ///
    /// A malformed due date never satisfies this predicate.
    pub fn is_overdue(&self, now: NaiveDateTime) -> bool {
        self.is_pending() && self.due_instant().is_some_and(|due| due < now)
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawAmount {
    Number(f64),
    Text(String),
    Other(IgnoredAny),
}

/// Reads a JSON number, numeric string, `null` or any other value into an
/// amount. Anything that is not a number reads as zero.
fn lenient_amount<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<RawAmount>::deserialize(deserializer)?;
    Ok(match raw {
        Some(RawAmount::Number(value)) => value,
        Some(RawAmount::Text(text)) => text.trim().parse().unwrap_or(0.0),
        Some(RawAmount::Other(_)) | None => 0.0,
    })
}

/// Reads a JSON string or `null` into text; `null` reads as empty.
fn lenient_text<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn at(y: i32, m: u32, d: u32, h: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(y, m, d)
            .unwrap()
            .and_hms_opt(h, 0, 0)
            .unwrap()
    }

    fn from_json(amount: &str) -> Check {
        let json = format!(
            r#"{{"id":"c1","type":"outgoing","status":"paid","amount":{}}}"#,
            amount
        );
        serde_json::from_str(&json).unwrap()
    }

    #[test]
    fn test_lenient_amount_variants() {
        assert_eq!(from_json("125.5").amount(), 125.5);
        assert_eq!(from_json("\"125.5\"").amount(), 125.5);
        assert_eq!(from_json("\"abc\"").amount(), 0.0);
        assert_eq!(from_json("null").amount(), 0.0);
        assert_eq!(from_json("true").amount(), 0.0);
    }

    #[test]
    fn test_null_text_fields_read_as_empty() {
        let json = r#"{"id":"c1","type":"incoming","status":"pending","amount":5,
            "check_number":null,"bank_name":null,"issue_date":null,
            "due_date":null,"entity_name":null,"created_at":null}"#;
        let check: Check = serde_json::from_str(json).unwrap();
        assert_eq!(check.check_number, "");
        assert_eq!(check.bank_name, "");
        assert_eq!(check.entity_name, "");
        assert!(check.due_instant().is_none());
        assert!(check.created_instant().is_none());
        assert!(!check.is_overdue(at(2024, 6, 15, 9)));
    }

    #[test]
    fn test_missing_optional_fields() {
        let check: Check =
            serde_json::from_str(r#"{"id":"c1","type":"incoming","status":"garantie"}"#).unwrap();
        assert_eq!(check.amount(), 0.0);
        assert_eq!(check.bank_name, "");
        assert!(check.fund_name.is_none());
        assert!(check.due_instant().is_none());
        assert!(check.created_instant().is_none());
    }

    #[test]
    fn test_unknown_status_is_rejected() {
        let result: Result<Check, _> =
            serde_json::from_str(r#"{"id":"c1","type":"incoming","status":"lost"}"#);
        assert!(result.is_err());
    }

    #[test]
    fn test_non_finite_amount_reads_zero() {
        let check = Check::new("c1", CheckType::Incoming, CheckStatus::Paid, f64::NAN);
        assert_eq!(check.amount(), 0.0);
        let check = Check::new("c2", CheckType::Incoming, CheckStatus::Paid, f64::INFINITY);
        assert_eq!(check.amount(), 0.0);
    }

    #[test]
    fn test_is_overdue() {
        let now = at(2024, 6, 15, 12);
        let pending = Check::new("c1", CheckType::Incoming, CheckStatus::Pending, 10.0)
            .with_due_date("2024-06-14");
        assert!(pending.is_overdue(now));

        let paid = pending.clone();
        let paid = Check {
            status: CheckStatus::Paid,
            ..paid
        };
        assert!(!paid.is_overdue(now));

        let future = pending.clone().with_due_date("2024-06-16");
        assert!(!future.is_overdue(now));

        let malformed = pending.with_due_date("soon");
        assert!(!malformed.is_overdue(now));
    }

    #[test]
    fn test_serialise_uses_type_key() {
        let check = Check::new("c1", CheckType::Outgoing, CheckStatus::Returned, 1.0);
        let value = serde_json::to_value(&check).unwrap();
        assert_eq!(value["type"], "outgoing");
        assert_eq!(value["status"], "returned");
        assert!(value.get("notes").is_none());
    }

    #[test]
    fn test_display_names() {
        assert_eq!(CheckType::Incoming.to_string(), "incoming");
        assert_eq!(CheckStatus::Garantie.to_string(), "garantie");
    }
}
