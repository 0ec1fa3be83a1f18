//! Recent activity.

use std::cmp::Ordering;
use treasury_core::model::Check;

/// The `limit` most recently created checks, newest first.
///
/// Checks whose `created_at` does not parse sort after every dated check and
/// keep their input order among themselves.
pub fn recent_checks(checks: &[Check], limit: usize) -> Vec<Check> {
    let mut dated: Vec<(Option<_>, &Check)> = checks
        .iter()
        .map(|check| (check.created_instant(), check))
        .collect();

    // Stable sort: equal timestamps keep input order.
    dated.sort_by(|(a, _), (b, _)| match (a, b) {
        (Some(a), Some(b)) => b.cmp(a),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    });

    dated
        .into_iter()
        .take(limit)
        .map(|(_, check)| check.clone())
        .collect()
}
