//! Sums and counts grouped by type, status, bank and entity.

use std::collections::HashMap;
use treasury_core::model::{Check, CheckStatus, CheckType};

/// Sum of amounts and number of checks in one group.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Bucket {
    /// Sum of sanitised amounts.
    pub amount: f64,
    /// Number of checks.
    pub count: usize,
}

impl Bucket {
    /// Adds one check's amount.
    #[inline]
    pub fn push(&mut self, amount: f64) {
        self.amount += amount;
        self.count += 1;
    }
}

/// Incoming/outgoing split.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TypeTotals {
    /// Received checks.
    pub incoming: Bucket,
    /// Issued checks.
    pub outgoing: Bucket,
}

impl TypeTotals {
    /// Bucket for one type.
    pub fn get(&self, check_type: CheckType) -> Bucket {
        match check_type {
            CheckType::Incoming => self.incoming,
            CheckType::Outgoing => self.outgoing,
        }
    }

    fn bucket_mut(&mut self, check_type: CheckType) -> &mut Bucket {
        match check_type {
            CheckType::Incoming => &mut self.incoming,
            CheckType::Outgoing => &mut self.outgoing,
        }
    }
}

/// Pending/paid/returned/garantie split.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct StatusTotals {
    /// Awaiting settlement.
    pub pending: Bucket,
    /// Settled.
    pub paid: Bucket,
    /// Returned unpaid.
    pub returned: Bucket,
    /// Held as guarantee.
    pub garantie: Bucket,
}

impl StatusTotals {
    /// Bucket for one status.
    pub fn get(&self, status: CheckStatus) -> Bucket {
        match status {
            CheckStatus::Pending => self.pending,
            CheckStatus::Paid => self.paid,
            CheckStatus::Returned => self.returned,
            CheckStatus::Garantie => self.garantie,
        }
    }

    fn bucket_mut(&mut self, status: CheckStatus) -> &mut Bucket {
        match status {
            CheckStatus::Pending => &mut self.pending,
            CheckStatus::Paid => &mut self.paid,
            CheckStatus::Returned => &mut self.returned,
            CheckStatus::Garantie => &mut self.garantie,
        }
    }
}

/// Portfolio-wide totals.
///
/// Every check lands in exactly one type bucket and one status bucket, so
/// each split sums to `all`.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PortfolioTotals {
    /// Every check.
    pub all: Bucket,
    /// Split by direction.
    pub by_type: TypeTotals,
    /// Split by lifecycle state.
    pub by_status: StatusTotals,
}

impl PortfolioTotals {
    /// Incoming total minus outgoing total.
    pub fn net_liquidity(&self) -> f64 {
        self.by_type.incoming.amount - self.by_type.outgoing.amount
    }
}

/// Computes type and status totals in one pass.
///
/// # Examples
///
/// ```
/// use treasury_analytics::aggregation::portfolio_totals;
/// use treasury_core::model::{Check, CheckStatus, CheckType};
///
/// let checks = vec![
///     Check::new("a", CheckType::Incoming, CheckStatus::Paid, 100.0),
///     Check::new("b", CheckType::Outgoing, CheckStatus::Pending, 40.0),
/// ];
/// let totals = portfolio_totals(&checks);
/// assert_eq!(totals.all.count, 2);
/// assert_eq!(totals.net_liquidity(), 60.0);
/// assert_eq!(totals.by_status.paid.amount, 100.0);
/// ```
pub fn portfolio_totals(checks: &[Check]) -> PortfolioTotals {
    let mut totals = PortfolioTotals::default();
    for check in checks {
        let amount = check.amount();
        totals.all.push(amount);
        totals.by_type.bucket_mut(check.check_type).push(amount);
        totals.by_status.bucket_mut(check.status).push(amount);
    }
    totals
}

/// Grouping key for [`group_totals`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum GroupBy {
    /// Group on `bank_name`.
    Bank,
    /// Group on `entity_name`.
    Entity,
}

impl GroupBy {
    fn key<'a>(&self, check: &'a Check) -> &'a str {
        match self {
            GroupBy::Bank => &check.bank_name,
            GroupBy::Entity => &check.entity_name,
        }
    }
}

/// Total for one bank or entity.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GroupTotal {
    /// Bank or entity name, exactly as stored.
    pub name: String,
    /// Sum and count.
    pub total: Bucket,
}

/// Totals per distinct bank or entity name, all statuses included.
///
/// Sorted by amount descending, then name ascending.
pub fn group_totals(checks: &[Check], group_by: GroupBy) -> Vec<GroupTotal> {
    let mut groups: HashMap<&str, Bucket> = HashMap::new();
    for check in checks {
        groups
            .entry(group_by.key(check))
            .or_default()
            .push(check.amount());
    }

    let mut result: Vec<GroupTotal> = groups
        .into_iter()
        .map(|(name, total)| GroupTotal {
            name: name.to_string(),
            total,
        })
        .collect();
    result.sort_by(|a, b| {
        b.total
            .amount
            .total_cmp(&a.total.amount)
            .then_with(|| a.name.cmp(&b.name))
    });
    result
}
