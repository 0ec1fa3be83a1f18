//! Portfolio-wide lookup tables built once per evaluation.

use std::collections::{HashMap, HashSet};
use treasury_core::model::{Check, CheckStatus};

/// Per-bank totals across every status, in first-seen order.
#[derive(Clone, Debug, Default)]
pub(crate) struct BankTotals<'a> {
    order: Vec<(&'a str, f64)>,
    grand_total: f64,
}

impl<'a> BankTotals<'a> {
    pub(crate) fn build(checks: &'a [Check]) -> Self {
        let mut index: HashMap<&'a str, usize> = HashMap::new();
        let mut order: Vec<(&'a str, f64)> = Vec::new();
        let mut grand_total = 0.0;

        for check in checks {
            let amount = check.amount();
            grand_total += amount;
            let slot = *index.entry(check.bank_name.as_str()).or_insert_with(|| {
                order.push((check.bank_name.as_str(), 0.0));
                order.len() - 1
            });
            order[slot].1 += amount;
        }

        Self { order, grand_total }
    }

    pub(crate) fn grand_total(&self) -> f64 {
        self.grand_total
    }

    pub(crate) fn iter(&self) -> impl Iterator<Item = (&'a str, f64)> + '_ {
        self.order.iter().copied()
    }
}

/// Entities with at least one returned check.
pub(crate) fn bad_clients(checks: &[Check]) -> HashSet<&str> {
    checks
        .iter()
        .filter(|check| check.status == CheckStatus::Returned)
        .map(|check| check.entity_name.as_str())
        .collect()
}
